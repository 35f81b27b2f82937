//! Interactive shell
//!
//! Menu rendering, prompting, and the session state behind the
//! read-eval loop.

mod core;
pub mod prompt;
pub mod session;

pub use self::core::Shell;
pub use session::ShellSession;
