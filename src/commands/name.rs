//! Implementation of the `mailpatch name` command.

use crate::cli::NameArgs;
use crate::error::Result;
use crate::subject::derive_name;

/// Execute the `mailpatch name` command.
pub fn cmd_name(args: NameArgs) -> Result<()> {
    println!("{}", derive_name(&args.subject, !args.failed));
    Ok(())
}
