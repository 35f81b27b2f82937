//! Navigate module
//!
//! Handles directory navigation for the shell, keeping the current
//! directory canonical after every change.

mod operations;

// Re-export public types and functions
pub use operations::change_directory;
