//! Tick CLI - in-memory to-do list demo

use std::process::ExitCode;

fn main() -> ExitCode {
    if let Err(e) = tick_cli::cli::run() {
        eprintln!("Error: {:#}", e);
        ExitCode::FAILURE
    } else {
        ExitCode::SUCCESS
    }
}
