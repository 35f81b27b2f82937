//! filex - Entry Point
//!
//! An interactive command-line file-management shell.

use log::{error, info};
use std::io::{self, BufReader};

use filex::Shell;
use filex::config::ShellConfig;

fn main() {
    // Initialize the logger (env_logger picks up RUST_LOG environment variable)
    env_logger::init();

    info!("Launching file shell...");

    let config = match ShellConfig::load() {
        Ok(config) => config,
        Err(e) => {
            error!("Invalid configuration: {}", e);
            eprintln!("Invalid configuration: {}", e);
            std::process::exit(1);
        }
    };

    let mut shell = match Shell::new(config) {
        Ok(shell) => shell,
        Err(e) => {
            error!("Failed to start shell: {}", e);
            eprintln!("Failed to start shell: {}", e);
            std::process::exit(1);
        }
    };

    let stdin = io::stdin();
    let stdout = io::stdout();
    let mut reader = BufReader::new(stdin.lock());
    let mut writer = stdout.lock();

    if let Err(e) = shell.run(&mut reader, &mut writer) {
        error!("Shell terminated with I/O error: {}", e);
        std::process::exit(1);
    }
}
