//! chdir-hook - Entry Point
//!
//! Smoke tool for the library: changes the process working directory to the
//! given path and prints the previous directory, the same contract the host
//! binding exposes.

use std::path::PathBuf;
use std::process;

use log::{error, info};

use chdir_hook::utils::logging::setup_logging;
use chdir_hook::{ChangeDirectoryReply, change_directory};

fn main() {
    setup_logging();

    let Some(target) = std::env::args_os().nth(1).map(PathBuf::from) else {
        eprintln!("usage: chdir-hook <directory>");
        process::exit(2);
    };

    info!("Changing working directory to {}", target.display());

    match ChangeDirectoryReply::from(change_directory(&target)) {
        ChangeDirectoryReply::Previous(previous) => {
            info!("Previous working directory: {}", previous);
            println!("{}", previous);
        }
        ChangeDirectoryReply::Failure { message, code } => {
            error!("Change failed: {} (errno {})", message, code);
            eprintln!("chdir-hook: {} (errno {})", message, code);
            process::exit(1);
        }
    }
}
