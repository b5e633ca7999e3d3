//! Mailpatch: recover git patches from mail bodies mangled by mail clients.
//!
//! This is the main entry point for the `mailpatch` CLI. It sets up logging,
//! parses arguments, dispatches to the appropriate command handler, and
//! handles errors with proper exit codes.

use env_logger::Env;
use mailpatch::cli::Cli;
use mailpatch::{commands, exit_codes};
use std::process::ExitCode;

fn main() -> ExitCode {
    env_logger::Builder::from_env(Env::new().filter_or("MAILPATCH_LOG", "warn")).init();

    let cli = Cli::parse_args();

    match commands::dispatch(cli.command) {
        Ok(()) => ExitCode::from(exit_codes::SUCCESS as u8),
        Err(err) => {
            eprintln!("Error: {}", err);
            ExitCode::from(err.exit_code() as u8)
        }
    }
}
