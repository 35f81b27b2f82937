//! Shell core
//!
//! The read-eval loop: print the menu, read a choice, dispatch to the
//! command handlers, repeat until quit or end of input.

use log::info;
use std::io::{self, BufRead, Write};

use crate::commands::handlers::handle_choice;
use crate::commands::parser::{CommandResult, parse_choice};
use crate::config::ShellConfig;
use crate::error::NavigateError;
use crate::shell::prompt::prompt_line;
use crate::shell::session::ShellSession;

/// The interactive file shell
pub struct Shell {
    session: ShellSession,
}

impl Shell {
    /// Creates a shell rooted at the configured start directory
    pub fn new(config: ShellConfig) -> Result<Self, NavigateError> {
        let session = ShellSession::new(config)?;
        info!("Shell starting in {}", session.current_dir().display());
        Ok(Self { session })
    }

    /// Runs the menu loop until quit (choice 0) or end of input
    pub fn run<R: BufRead, W: Write>(&mut self, reader: &mut R, writer: &mut W) -> io::Result<()> {
        loop {
            self.print_menu(writer)?;

            let Some(line) = prompt_line(reader, writer, "Enter your choice: ")? else {
                break;
            };

            let choice = parse_choice(&line);
            match handle_choice(&mut self.session, choice, reader, writer)? {
                CommandResult::Quit => break,
                CommandResult::Continue => {}
            }
        }

        writeln!(writer, "Exiting File Explorer...")?;
        info!("Shell session ended");
        Ok(())
    }

    fn print_menu<W: Write>(&self, writer: &mut W) -> io::Result<()> {
        writeln!(
            writer,
            "\nCurrent Directory: {}",
            self.session.current_dir().display()
        )?;
        writeln!(writer, "1. List files")?;
        writeln!(writer, "2. Change directory")?;
        writeln!(writer, "3. Create file")?;
        writeln!(writer, "4. Create directory")?;
        writeln!(writer, "5. Delete file/directory")?;
        writeln!(writer, "6. Copy file/directory")?;
        writeln!(writer, "7. Move file/directory")?;
        writeln!(writer, "8. Search file")?;
        writeln!(writer, "9. Show permissions")?;
        writeln!(writer, "10. Set permissions")?;
        writeln!(writer, "0. Exit")?;
        Ok(())
    }
}
