//! Storage operations
//!
//! Handles the file system operations behind the shell menu: list, create,
//! delete, copy and move. Every operation takes paths already joined onto
//! the session's current directory and maps OS failures into StorageError.

use fs_extra::dir::CopyOptions;
use log::{error, info};
use std::fs;
use std::path::Path;

use crate::error::StorageError;
use crate::storage::results::{CopyResult, EntryInfo, EntryKind, MoveResult};

/// Lists the immediate children of a directory
pub fn list_directory(path: &Path) -> Result<Vec<EntryInfo>, StorageError> {
    let entries = fs::read_dir(path).map_err(|e| {
        error!("Failed to list directory {}: {}", path.display(), e);
        StorageError::from(e)
    })?;

    let mut listing = vec![];
    for entry in entries {
        let entry = entry?;
        let name = entry.file_name().to_string_lossy().to_string();

        // Metadata failure downgrades the entry to a plain file with no size
        let (kind, size) = match entry.metadata() {
            Ok(metadata) if metadata.is_dir() => (EntryKind::Dir, 0),
            Ok(metadata) => (EntryKind::File, metadata.len()),
            Err(_) => (EntryKind::File, 0),
        };

        listing.push(EntryInfo { name, kind, size });
    }

    info!(
        "Listed directory {} - {} entries",
        path.display(),
        listing.len()
    );

    Ok(listing)
}

/// Creates an empty file, truncating any existing file at that path
pub fn create_file(path: &Path) -> Result<(), StorageError> {
    fs::File::create(path).map_err(|e| {
        error!("Failed to create file {}: {}", path.display(), e);
        StorageError::CreateFailed(path.display().to_string(), e)
    })?;

    info!("Created file {}", path.display());
    Ok(())
}

/// Creates a single directory level
pub fn create_directory(path: &Path) -> Result<(), StorageError> {
    fs::create_dir(path).map_err(|e| {
        error!("Failed to create directory {}: {}", path.display(), e);
        StorageError::CreateFailed(path.display().to_string(), e)
    })?;

    info!("Created directory {}", path.display());
    Ok(())
}

/// Deletes a file or directory
///
/// Directories are removed recursively, regular files with a single unlink.
/// A path that is neither reports PathNotFound.
pub fn delete_entry(path: &Path) -> Result<(), StorageError> {
    let result = if path.is_dir() {
        fs::remove_dir_all(path)
    } else if path.is_file() {
        fs::remove_file(path)
    } else {
        return Err(StorageError::PathNotFound(path.display().to_string()));
    };

    result.map_err(|e| {
        error!("Failed to delete {}: {}", path.display(), e);
        StorageError::DeleteFailed(path.display().to_string(), e)
    })?;

    info!("Deleted {}", path.display());
    Ok(())
}

/// Copies a file or directory
///
/// A directory source is copied recursively, reproducing every descendant
/// under the destination. A file source is copied with a single call,
/// overwriting any existing destination file.
pub fn copy_entry(source: &Path, destination: &Path) -> Result<CopyResult, StorageError> {
    if !source.exists() {
        return Err(StorageError::PathNotFound(source.display().to_string()));
    }

    let recursive = source.is_dir();

    if recursive {
        let mut options = CopyOptions::new();
        options.overwrite = true;
        options.copy_inside = true;

        fs_extra::dir::copy(source, destination, &options).map_err(|e| {
            error!(
                "Failed to copy directory {} to {}: {}",
                source.display(),
                destination.display(),
                e
            );
            StorageError::CopyFailed(source.display().to_string(), e.to_string())
        })?;
    } else {
        fs::copy(source, destination).map_err(|e| {
            error!(
                "Failed to copy file {} to {}: {}",
                source.display(),
                destination.display(),
                e
            );
            StorageError::CopyFailed(source.display().to_string(), e.to_string())
        })?;
    }

    info!(
        "Copied {} to {} (recursive: {})",
        source.display(),
        destination.display(),
        recursive
    );

    Ok(CopyResult {
        source: source.to_path_buf(),
        destination: destination.to_path_buf(),
        recursive,
    })
}

/// Moves a file or directory with a single rename
///
/// The rename is atomic where the OS provides it. There is no cross-device
/// fallback; a rename across filesystems fails like any other OS error.
pub fn move_entry(source: &Path, destination: &Path) -> Result<MoveResult, StorageError> {
    if !source.exists() {
        return Err(StorageError::PathNotFound(source.display().to_string()));
    }

    fs::rename(source, destination).map_err(|e| {
        error!(
            "Failed to move {} to {}: {}",
            source.display(),
            destination.display(),
            e
        );
        StorageError::MoveFailed(source.display().to_string(), e)
    })?;

    info!(
        "Moved {} to {}",
        source.display(),
        destination.display()
    );

    Ok(MoveResult {
        source: source.to_path_buf(),
        destination: destination.to_path_buf(),
    })
}
