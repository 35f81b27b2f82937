//! Error handling
//!
//! Defines error types and handling for the file shell.

pub mod types;

pub use types::*;
