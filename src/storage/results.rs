//! Storage result types
//!
//! Defines result structures returned by storage operations.

use std::path::PathBuf;

/// Kind of a directory entry as reported by a listing
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EntryKind {
    Dir,
    /// Anything that is not a directory
    File,
}

impl EntryKind {
    /// Tag printed in front of the entry name in listings
    pub fn tag(&self) -> &'static str {
        match self {
            EntryKind::Dir => "[DIR]",
            EntryKind::File => "[FILE]",
        }
    }
}

/// A single entry of a directory listing
#[derive(Debug, Clone)]
pub struct EntryInfo {
    pub name: String,
    pub kind: EntryKind,
    pub size: u64,
}

/// Result of a copy operation
#[derive(Debug, Clone)]
pub struct CopyResult {
    pub source: PathBuf,
    pub destination: PathBuf,
    pub recursive: bool,
}

/// Result of a move operation
#[derive(Debug, Clone)]
pub struct MoveResult {
    pub source: PathBuf,
    pub destination: PathBuf,
}
