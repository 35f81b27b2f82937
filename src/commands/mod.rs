//! Command processing
//!
//! Parses menu input and dispatches each choice to its handler.

pub mod handlers;
pub mod parser;

pub use handlers::handle_choice;
pub use parser::{CommandResult, MenuChoice, parse_choice};
