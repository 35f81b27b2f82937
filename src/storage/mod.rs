//! File system storage management
//!
//! Handles file operations and permission management for the shell.

pub mod operations;
pub mod permissions;
pub mod results;

// Re-export commonly used operations
pub use operations::{
    copy_entry, create_directory, create_file, delete_entry, list_directory, move_entry,
};
pub use results::{EntryInfo, EntryKind};
