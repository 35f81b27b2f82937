//! Error types
//!
//! Defines domain-specific error types for each module of the file shell.

use std::fmt;
use std::io;

/// Navigate module errors
#[derive(Debug)]
pub enum NavigateError {
    InvalidPath(String),
    DirectoryNotFound(String),
    NotADirectory(String),
    CanonicalizeFailed(String, io::Error),
}

impl fmt::Display for NavigateError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            NavigateError::InvalidPath(p) => write!(f, "Invalid path: {}", p),
            NavigateError::DirectoryNotFound(p) => write!(f, "Directory not found: {}", p),
            NavigateError::NotADirectory(p) => write!(f, "Not a directory: {}", p),
            NavigateError::CanonicalizeFailed(p, e) => {
                write!(f, "Failed to resolve {}: {}", p, e)
            }
        }
    }
}

impl std::error::Error for NavigateError {}

/// Storage module errors
#[derive(Debug)]
pub enum StorageError {
    PathNotFound(String),
    CreateFailed(String, io::Error),
    DeleteFailed(String, io::Error),
    CopyFailed(String, String),
    MoveFailed(String, io::Error),
    IoError(io::Error),
}

impl fmt::Display for StorageError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            StorageError::PathNotFound(p) => write!(f, "Path not found: {}", p),
            StorageError::CreateFailed(p, e) => write!(f, "Failed to create {}: {}", p, e),
            StorageError::DeleteFailed(p, e) => write!(f, "Failed to delete {}: {}", p, e),
            StorageError::CopyFailed(p, msg) => write!(f, "Failed to copy {}: {}", p, msg),
            StorageError::MoveFailed(p, e) => write!(f, "Failed to move {}: {}", p, e),
            StorageError::IoError(e) => write!(f, "IO error: {}", e),
        }
    }
}

impl std::error::Error for StorageError {}

impl From<io::Error> for StorageError {
    fn from(error: io::Error) -> Self {
        StorageError::IoError(error)
    }
}

/// Permission handling errors
#[derive(Debug)]
pub enum PermissionError {
    PathNotFound(String),
    InvalidMode(String),
    ReadFailed(String, io::Error),
    ApplyFailed(String, io::Error),
    Unsupported,
}

impl fmt::Display for PermissionError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            PermissionError::PathNotFound(p) => write!(f, "Path not found: {}", p),
            PermissionError::InvalidMode(s) => {
                write!(f, "Invalid permission mode: {} (expected octal, e.g. 644)", s)
            }
            PermissionError::ReadFailed(p, e) => {
                write!(f, "Failed to read permissions of {}: {}", p, e)
            }
            PermissionError::ApplyFailed(p, e) => {
                write!(f, "Failed to set permissions on {}: {}", p, e)
            }
            PermissionError::Unsupported => {
                write!(f, "Permission bits are not supported on this platform")
            }
        }
    }
}

impl std::error::Error for PermissionError {}

/// Search module errors
#[derive(Debug)]
pub enum SearchError {
    InvalidName(String),
    DirectoryNotFound(String),
}

impl fmt::Display for SearchError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SearchError::InvalidName(s) => write!(f, "Invalid search name: {}", s),
            SearchError::DirectoryNotFound(p) => write!(f, "Directory not found: {}", p),
        }
    }
}

impl std::error::Error for SearchError {}
