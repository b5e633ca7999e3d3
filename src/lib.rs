//! Mailpatch: recover git patches from mail bodies mangled by mail clients.
//!
//! The library surface is two independent, infallible functions:
//! - [`patch::convert_to_patch`] rebuilds a patch from a decoded mail body
//!   and reports whether it can be trusted
//! - [`subject::derive_name`] turns a `[PATCH n/m]` subject into a file name
//!
//! The remaining modules back the `mailpatch` binary: mail extraction,
//! configuration, atomic file output, and the CLI commands.

pub mod cli;
pub mod commands;
pub mod config;
pub mod error;
pub mod exit_codes;
pub mod fs;
pub mod mail;
pub mod patch;
pub mod subject;

#[cfg(test)]
pub(crate) mod test_support;
