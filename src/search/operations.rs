//! Search operations implementation

use log::{info, warn};
use std::path::{Path, PathBuf};
use walkdir::WalkDir;

use crate::error::SearchError;

/// Recursively searches a directory tree for entries matching a name exactly
///
/// Matches on the file name component only; files and directories both
/// count. Unreadable subtrees are logged and skipped so one denied
/// directory does not abort the walk.
pub fn search_by_name(
    root: &Path,
    name: &str,
    max_depth: usize,
) -> Result<Vec<PathBuf>, SearchError> {
    if name.is_empty() {
        return Err(SearchError::InvalidName("Empty name provided".into()));
    }

    if !root.is_dir() {
        return Err(SearchError::DirectoryNotFound(root.display().to_string()));
    }

    let mut matches = vec![];
    // min_depth(1) keeps the search root itself out of its own results
    for entry in WalkDir::new(root).min_depth(1).max_depth(max_depth) {
        let entry = match entry {
            Ok(entry) => entry,
            Err(e) => {
                warn!("Skipping unreadable entry during search: {}", e);
                continue;
            }
        };

        if entry.file_name().to_string_lossy() == name {
            matches.push(entry.path().to_path_buf());
        }
    }

    info!(
        "Search for {} under {} - {} match(es)",
        name,
        root.display(),
        matches.len()
    );

    Ok(matches)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::TempDir;

    #[test]
    fn test_nested_file_found_exactly_once() {
        let dir = TempDir::new().unwrap();
        fs::create_dir_all(dir.path().join("a/b/c")).unwrap();
        fs::write(dir.path().join("a/b/c/needle.txt"), b"x").unwrap();
        fs::write(dir.path().join("a/other.txt"), b"x").unwrap();

        let matches = search_by_name(dir.path(), "needle.txt", 64).unwrap();
        assert_eq!(matches.len(), 1);
        assert_eq!(matches[0], dir.path().join("a/b/c/needle.txt"));
    }

    #[test]
    fn test_exact_match_only() {
        let dir = TempDir::new().unwrap();
        fs::write(dir.path().join("needle.txt"), b"x").unwrap();
        fs::write(dir.path().join("needle.txt.bak"), b"x").unwrap();

        let matches = search_by_name(dir.path(), "needle.txt", 64).unwrap();
        assert_eq!(matches.len(), 1);
    }

    #[test]
    fn test_directories_match_too() {
        let dir = TempDir::new().unwrap();
        fs::create_dir(dir.path().join("target")).unwrap();

        let matches = search_by_name(dir.path(), "target", 64).unwrap();
        assert_eq!(matches, vec![dir.path().join("target")]);
    }

    #[test]
    fn test_depth_cap_limits_walk() {
        let dir = TempDir::new().unwrap();
        fs::create_dir_all(dir.path().join("a/b")).unwrap();
        fs::write(dir.path().join("a/b/deep.txt"), b"x").unwrap();

        // depth 1 only sees the immediate children of the root
        let matches = search_by_name(dir.path(), "deep.txt", 1).unwrap();
        assert!(matches.is_empty());
    }

    #[test]
    fn test_empty_name_rejected() {
        let dir = TempDir::new().unwrap();
        assert!(matches!(
            search_by_name(dir.path(), "", 64),
            Err(SearchError::InvalidName(_))
        ));
    }

    #[test]
    fn test_missing_root_rejected() {
        let dir = TempDir::new().unwrap();
        assert!(matches!(
            search_by_name(&dir.path().join("ghost"), "x", 64),
            Err(SearchError::DirectoryNotFound(_))
        ));
    }
}
