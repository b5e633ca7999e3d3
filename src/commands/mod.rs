//! Command implementations for mailpatch.
//!
//! This module provides the dispatcher that routes CLI commands to their
//! implementations.

mod check;
mod convert;
mod name;

use crate::cli::Command;
use crate::error::Result;

pub use convert::{ConvertOutcome, ConvertStatus, convert_mail};

/// Dispatch a command to its implementation.
pub fn dispatch(command: Command) -> Result<()> {
    match command {
        Command::Convert(args) => convert::cmd_convert(args),
        Command::Check(args) => check::cmd_check(args),
        Command::Name(args) => name::cmd_name(args),
    }
}
