pub mod commands;
pub mod config;
pub mod error;
pub mod navigate;
pub mod search;
pub mod shell;
pub mod storage;

pub use shell::Shell;
