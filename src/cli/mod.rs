//! CLI argument parsing for mailpatch.
//!
//! Uses clap derive macros for declarative argument definitions.
//! This module defines the command structure; actual implementations
//! are in the `commands` module.

use clap::{Parser, Subcommand};
use std::path::PathBuf;

/// Mailpatch: recover git patches from mail bodies mangled by mail clients.
///
/// Mail clients replace spaces with non-breaking spaces, inject blank lines
/// and rewrite line endings. Mailpatch rebuilds the patch and names it after
/// the `[PATCH n/m]` subject, flagging anything it cannot vouch for with a
/// `.warning.patch` suffix.
#[derive(Parser, Debug)]
#[command(name = "mailpatch")]
#[command(author, version, about, long_about = None)]
#[command(propagate_version = true)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,
}

/// Available commands for mailpatch.
#[derive(Subcommand, Debug)]
pub enum Command {
    /// Convert raw mail messages into patch files.
    ///
    /// Each message's text body is recognized and written under a name
    /// derived from its subject. Bodies that are not clean patches are
    /// written with a `.warning.patch` suffix.
    Convert(ConvertArgs),

    /// Check an already-decoded mail body.
    ///
    /// Prints whether the body is a clean patch and every problem found.
    Check(CheckArgs),

    /// Print the patch file name derived from a subject line.
    Name(NameArgs),
}

/// Arguments for the `convert` command.
#[derive(Parser, Debug)]
pub struct ConvertArgs {
    /// Raw mail files (RFC 822, e.g. `.eml`).
    #[arg(required = true)]
    pub mails: Vec<PathBuf>,

    /// Directory to write patches to (overrides config `output_dir`).
    #[arg(short, long)]
    pub output_dir: Option<PathBuf>,

    /// Config file to use instead of `./.mailpatch.yaml`.
    #[arg(long)]
    pub config: Option<PathBuf>,

    /// Report what would be written without touching the filesystem.
    #[arg(long)]
    pub dry_run: bool,
}

/// Arguments for the `check` command.
#[derive(Parser, Debug)]
pub struct CheckArgs {
    /// File holding the decoded mail body, or `-` for stdin.
    pub input: String,

    /// Print the result as JSON.
    #[arg(long)]
    pub json: bool,

    /// Also write the reconstructed patch to this file.
    #[arg(short, long)]
    pub output: Option<PathBuf>,
}

/// Arguments for the `name` command.
#[derive(Parser, Debug)]
pub struct NameArgs {
    /// Mail subject line.
    pub subject: String,

    /// Name the file as a failed recognition (`.warning.patch`).
    #[arg(long)]
    pub failed: bool,
}

impl Cli {
    /// Parse command line arguments.
    pub fn parse_args() -> Self {
        Cli::parse()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn cli_debug_assert() {
        // Verifies the CLI arguments configuration is valid
        Cli::command().debug_assert();
    }

    #[test]
    fn parse_convert_minimal() {
        let cli = Cli::try_parse_from(["mailpatch", "convert", "a.eml"]).unwrap();
        if let Command::Convert(args) = cli.command {
            assert_eq!(args.mails, vec![PathBuf::from("a.eml")]);
            assert!(args.output_dir.is_none());
            assert!(args.config.is_none());
            assert!(!args.dry_run);
        } else {
            panic!("Expected Convert command");
        }
    }

    #[test]
    fn parse_convert_full() {
        let cli = Cli::try_parse_from([
            "mailpatch",
            "convert",
            "a.eml",
            "b.eml",
            "-o",
            "out",
            "--config",
            "cfg.yaml",
            "--dry-run",
        ])
        .unwrap();
        if let Command::Convert(args) = cli.command {
            assert_eq!(args.mails.len(), 2);
            assert_eq!(args.output_dir, Some(PathBuf::from("out")));
            assert_eq!(args.config, Some(PathBuf::from("cfg.yaml")));
            assert!(args.dry_run);
        } else {
            panic!("Expected Convert command");
        }
    }

    #[test]
    fn parse_convert_requires_mail() {
        assert!(Cli::try_parse_from(["mailpatch", "convert"]).is_err());
    }

    #[test]
    fn parse_check_stdin_json() {
        let cli = Cli::try_parse_from(["mailpatch", "check", "-", "--json"]).unwrap();
        if let Command::Check(args) = cli.command {
            assert_eq!(args.input, "-");
            assert!(args.json);
            assert!(args.output.is_none());
        } else {
            panic!("Expected Check command");
        }
    }

    #[test]
    fn parse_name_failed() {
        let cli =
            Cli::try_parse_from(["mailpatch", "name", "[PATCH 1/2] Fix", "--failed"]).unwrap();
        if let Command::Name(args) = cli.command {
            assert_eq!(args.subject, "[PATCH 1/2] Fix");
            assert!(args.failed);
        } else {
            panic!("Expected Name command");
        }
    }
}
