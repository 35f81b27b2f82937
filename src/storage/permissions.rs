//! File permissions
//!
//! Reads and applies Unix permission bits and renders them as the
//! nine-character rwx triad (owner, group, others).

use log::info;
use std::path::Path;

use crate::error::PermissionError;

/// Renders the low nine mode bits as an rwx triad, e.g. 0o644 -> "rw-r--r--"
pub fn mode_to_triad(mode: u32) -> String {
    let mut triad = String::with_capacity(9);
    for shift in [6u32, 3, 0] {
        let bits = (mode >> shift) & 0o7;
        triad.push(if bits & 0o4 != 0 { 'r' } else { '-' });
        triad.push(if bits & 0o2 != 0 { 'w' } else { '-' });
        triad.push(if bits & 0o1 != 0 { 'x' } else { '-' });
    }
    triad
}

/// Parses an octal mode string like "644" into mode bits
///
/// Only the permission bits are accepted; anything above 0o777 is rejected.
pub fn parse_mode(input: &str) -> Result<u32, PermissionError> {
    let trimmed = input.trim();
    if trimmed.is_empty() {
        return Err(PermissionError::InvalidMode(input.to_string()));
    }

    let mode = u32::from_str_radix(trimmed, 8)
        .map_err(|_| PermissionError::InvalidMode(input.to_string()))?;

    if mode > 0o777 {
        return Err(PermissionError::InvalidMode(input.to_string()));
    }

    Ok(mode)
}

/// Reads the permission bits of a path and returns the rwx triad
#[cfg(unix)]
pub fn read_permissions(path: &Path) -> Result<String, PermissionError> {
    use std::os::unix::fs::PermissionsExt;

    if !path.exists() {
        return Err(PermissionError::PathNotFound(path.display().to_string()));
    }

    let metadata = std::fs::metadata(path)
        .map_err(|e| PermissionError::ReadFailed(path.display().to_string(), e))?;

    Ok(mode_to_triad(metadata.permissions().mode()))
}

#[cfg(not(unix))]
pub fn read_permissions(_path: &Path) -> Result<String, PermissionError> {
    Err(PermissionError::Unsupported)
}

/// Applies permission bits to a path
#[cfg(unix)]
pub fn set_permissions(path: &Path, mode: u32) -> Result<(), PermissionError> {
    use std::os::unix::fs::PermissionsExt;

    if !path.exists() {
        return Err(PermissionError::PathNotFound(path.display().to_string()));
    }

    std::fs::set_permissions(path, std::fs::Permissions::from_mode(mode))
        .map_err(|e| PermissionError::ApplyFailed(path.display().to_string(), e))?;

    info!("Set permissions {:o} on {}", mode, path.display());
    Ok(())
}

#[cfg(not(unix))]
pub fn set_permissions(_path: &Path, _mode: u32) -> Result<(), PermissionError> {
    Err(PermissionError::Unsupported)
}
