//! Command handlers
//!
//! One handler per menu choice. Handlers prompt for their arguments, call
//! into the operation modules, and print the outcome. No failure here ends
//! the loop; every error becomes a printed line and the menu comes back.

use log::warn;
use std::io::{self, BufRead, Write};

use crate::commands::parser::{CommandResult, MenuChoice};
use crate::error::{NavigateError, StorageError};
use crate::navigate;
use crate::search;
use crate::shell::prompt::prompt_line;
use crate::shell::session::ShellSession;
use crate::storage;
use crate::storage::permissions;

/// Handle a single menu choice against the session
///
/// Returns Err only for I/O failures on the prompt streams themselves;
/// end of input mid-command quits like choice 0.
pub fn handle_choice<R: BufRead, W: Write>(
    session: &mut ShellSession,
    choice: MenuChoice,
    reader: &mut R,
    writer: &mut W,
) -> io::Result<CommandResult> {
    match choice {
        MenuChoice::Exit => Ok(CommandResult::Quit),
        MenuChoice::List => handle_list(session, writer),
        MenuChoice::ChangeDirectory => handle_change_directory(session, reader, writer),
        MenuChoice::CreateFile => handle_create_file(session, reader, writer),
        MenuChoice::CreateDirectory => handle_create_directory(session, reader, writer),
        MenuChoice::Delete => handle_delete(session, reader, writer),
        MenuChoice::Copy => handle_copy(session, reader, writer),
        MenuChoice::Move => handle_move(session, reader, writer),
        MenuChoice::Search => handle_search(session, reader, writer),
        MenuChoice::ShowPermissions => handle_show_permissions(session, reader, writer),
        MenuChoice::SetPermissions => handle_set_permissions(session, reader, writer),
        MenuChoice::Invalid(input) => {
            warn!("Invalid menu choice: {:?}", input);
            writeln!(writer, "Invalid choice.")?;
            Ok(CommandResult::Continue)
        }
    }
}

// Prompt for one argument; end of input aborts the whole session
macro_rules! prompt_or_quit {
    ($reader:expr, $writer:expr, $prompt:expr) => {
        match prompt_line($reader, $writer, $prompt)? {
            Some(line) => line,
            None => return Ok(CommandResult::Quit),
        }
    };
}

fn handle_list<W: Write>(session: &ShellSession, writer: &mut W) -> io::Result<CommandResult> {
    writeln!(
        writer,
        "\nFiles in Directory: {}",
        session.current_dir().display()
    )?;

    match storage::list_directory(session.current_dir()) {
        Ok(entries) => {
            for entry in entries {
                writeln!(writer, "{} {}", entry.kind.tag(), entry.name)?;
            }
        }
        Err(e) => writeln!(writer, "Error: {}", e)?,
    }

    Ok(CommandResult::Continue)
}

fn handle_change_directory<R: BufRead, W: Write>(
    session: &mut ShellSession,
    reader: &mut R,
    writer: &mut W,
) -> io::Result<CommandResult> {
    let name = prompt_or_quit!(reader, writer, "Enter directory name: ");

    match navigate::change_directory(session.current_dir(), &name) {
        Ok(new_dir) => session.set_current_dir(new_dir),
        Err(NavigateError::DirectoryNotFound(_) | NavigateError::NotADirectory(_)) => {
            writeln!(writer, "Directory not found.")?;
        }
        Err(e) => writeln!(writer, "Error: {}", e)?,
    }

    Ok(CommandResult::Continue)
}

fn handle_create_file<R: BufRead, W: Write>(
    session: &ShellSession,
    reader: &mut R,
    writer: &mut W,
) -> io::Result<CommandResult> {
    let name = prompt_or_quit!(reader, writer, "Enter file name: ");

    match storage::create_file(&session.resolve(&name)) {
        Ok(()) => writeln!(writer, "File created: {}", name)?,
        Err(_) => writeln!(writer, "Failed to create file.")?,
    }

    Ok(CommandResult::Continue)
}

fn handle_create_directory<R: BufRead, W: Write>(
    session: &ShellSession,
    reader: &mut R,
    writer: &mut W,
) -> io::Result<CommandResult> {
    let name = prompt_or_quit!(reader, writer, "Enter directory name: ");

    match storage::create_directory(&session.resolve(&name)) {
        Ok(()) => writeln!(writer, "Directory created: {}", name)?,
        Err(_) => writeln!(writer, "Failed to create directory.")?,
    }

    Ok(CommandResult::Continue)
}

fn handle_delete<R: BufRead, W: Write>(
    session: &ShellSession,
    reader: &mut R,
    writer: &mut W,
) -> io::Result<CommandResult> {
    let name = prompt_or_quit!(reader, writer, "Enter file/directory name: ");

    match storage::delete_entry(&session.resolve(&name)) {
        Ok(()) => writeln!(writer, "Deleted.")?,
        Err(StorageError::PathNotFound(_)) => writeln!(writer, "Path not found.")?,
        Err(e) => writeln!(writer, "Error deleting: {}", e)?,
    }

    Ok(CommandResult::Continue)
}

fn handle_copy<R: BufRead, W: Write>(
    session: &ShellSession,
    reader: &mut R,
    writer: &mut W,
) -> io::Result<CommandResult> {
    let source = prompt_or_quit!(reader, writer, "Enter source name: ");
    let destination = prompt_or_quit!(reader, writer, "Enter destination name: ");

    match storage::copy_entry(&session.resolve(&source), &session.resolve(&destination)) {
        Ok(_) => writeln!(writer, "Copied successfully.")?,
        Err(e) => writeln!(writer, "Error copying: {}", e)?,
    }

    Ok(CommandResult::Continue)
}

fn handle_move<R: BufRead, W: Write>(
    session: &ShellSession,
    reader: &mut R,
    writer: &mut W,
) -> io::Result<CommandResult> {
    let source = prompt_or_quit!(reader, writer, "Enter source name: ");
    let destination = prompt_or_quit!(reader, writer, "Enter destination name: ");

    match storage::move_entry(&session.resolve(&source), &session.resolve(&destination)) {
        Ok(_) => writeln!(writer, "Moved successfully.")?,
        Err(e) => writeln!(writer, "Error moving: {}", e)?,
    }

    Ok(CommandResult::Continue)
}

fn handle_search<R: BufRead, W: Write>(
    session: &ShellSession,
    reader: &mut R,
    writer: &mut W,
) -> io::Result<CommandResult> {
    let name = prompt_or_quit!(reader, writer, "Enter file name to search: ");

    match search::search_by_name(session.current_dir(), &name, session.max_search_depth()) {
        Ok(matches) => {
            for path in matches {
                writeln!(writer, "Found: {}", path.display())?;
            }
        }
        Err(e) => writeln!(writer, "Error searching: {}", e)?,
    }

    Ok(CommandResult::Continue)
}

fn handle_show_permissions<R: BufRead, W: Write>(
    session: &ShellSession,
    reader: &mut R,
    writer: &mut W,
) -> io::Result<CommandResult> {
    let name = prompt_or_quit!(reader, writer, "Enter file/directory name: ");

    match permissions::read_permissions(&session.resolve(&name)) {
        Ok(triad) => writeln!(writer, "Permissions for {}: {}", name, triad)?,
        Err(e) => writeln!(writer, "Error: {}", e)?,
    }

    Ok(CommandResult::Continue)
}

fn handle_set_permissions<R: BufRead, W: Write>(
    session: &ShellSession,
    reader: &mut R,
    writer: &mut W,
) -> io::Result<CommandResult> {
    let name = prompt_or_quit!(reader, writer, "Enter file/directory name: ");
    let mode_input = prompt_or_quit!(reader, writer, "Enter permission mode (e.g., 644): ");

    let result = permissions::parse_mode(&mode_input)
        .and_then(|mode| permissions::set_permissions(&session.resolve(&name), mode));

    match result {
        Ok(()) => writeln!(writer, "Permissions updated.")?,
        Err(e) => writeln!(writer, "Error: {}", e)?,
    }

    Ok(CommandResult::Continue)
}
