//! Navigation operations implementation

use crate::error::NavigateError;
use std::path::{Path, PathBuf};

/// Changes the shell's working directory
///
/// The target is joined onto the current directory, so plain names descend
/// while ".." and absolute paths work through the same join. The result is
/// adopted only if it exists and is a directory, and is stored in canonical
/// form so the session path stays absolute and symlink-free.
pub fn change_directory(current_dir: &Path, target: &str) -> Result<PathBuf, NavigateError> {
    if target.is_empty() {
        return Err(NavigateError::InvalidPath("Empty path provided".into()));
    }

    let new_path = current_dir.join(target);

    if !new_path.exists() {
        return Err(NavigateError::DirectoryNotFound(target.to_string()));
    }

    if !new_path.is_dir() {
        return Err(NavigateError::NotADirectory(target.to_string()));
    }

    new_path
        .canonicalize()
        .map_err(|e| NavigateError::CanonicalizeFailed(target.to_string(), e))
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_change_into_subdirectory() {
        let dir = TempDir::new().unwrap();
        std::fs::create_dir(dir.path().join("sub")).unwrap();

        let new_dir = change_directory(dir.path(), "sub").unwrap();
        assert!(new_dir.is_absolute());
        assert!(new_dir.ends_with("sub"));
    }

    #[test]
    fn test_change_into_missing_directory() {
        let dir = TempDir::new().unwrap();
        let err = change_directory(dir.path(), "ghost").unwrap_err();
        assert!(matches!(err, NavigateError::DirectoryNotFound(_)));
    }

    #[test]
    fn test_change_into_file_rejected() {
        let dir = TempDir::new().unwrap();
        std::fs::write(dir.path().join("plain.txt"), b"x").unwrap();

        let err = change_directory(dir.path(), "plain.txt").unwrap_err();
        assert!(matches!(err, NavigateError::NotADirectory(_)));
    }

    #[test]
    fn test_parent_traversal_through_join() {
        let dir = TempDir::new().unwrap();
        let sub = dir.path().join("sub");
        std::fs::create_dir(&sub).unwrap();

        // ".." is an ordinary directory entry to the join, not a special case
        let back = change_directory(&sub, "..").unwrap();
        assert_eq!(back, dir.path().canonicalize().unwrap());
    }

    #[test]
    fn test_empty_target_rejected() {
        let dir = TempDir::new().unwrap();
        let err = change_directory(dir.path(), "").unwrap_err();
        assert!(matches!(err, NavigateError::InvalidPath(_)));
    }
}
