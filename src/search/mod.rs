//! Search module
//!
//! Recursive name search over the directory tree below the current
//! directory.

mod operations;

pub use operations::search_by_name;
