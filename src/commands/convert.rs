//! Implementation of the `mailpatch convert` command.
//!
//! For each raw mail file:
//! 1. Extract the subject and decoded text body
//! 2. Recognize the patch in the body
//! 3. Derive the file name from the subject and the verdict
//! 4. Write the patch into the output directory, honoring `on_existing`

use crate::cli::ConvertArgs;
use crate::config::{Config, ExistingFilePolicy};
use crate::error::{MailPatchError, Result};
use crate::fs::atomic_write;
use crate::mail::MailMessage;
use crate::patch::recognize;
use crate::subject::derive_name;
use std::path::{Path, PathBuf};

/// How a single mail was handled.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ConvertStatus {
    /// The body is a clean patch.
    Clean,
    /// The body was written, but flagged with `.warning.patch`.
    Flagged,
    /// Recognition failed and `write_failed` is off; nothing was written.
    Dropped,
    /// A file with the derived name already exists and was left alone.
    Skipped,
}

impl ConvertStatus {
    fn label(self) -> &'static str {
        match self {
            ConvertStatus::Clean => "ok",
            ConvertStatus::Flagged => "warning",
            ConvertStatus::Dropped => "dropped",
            ConvertStatus::Skipped => "skipped",
        }
    }

    /// Whether the mail did not yield a clean patch.
    pub fn is_failure(self) -> bool {
        matches!(self, ConvertStatus::Flagged | ConvertStatus::Dropped)
    }
}

/// Result of converting one mail.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ConvertOutcome {
    /// Destination path for the patch.
    pub path: PathBuf,
    pub status: ConvertStatus,
    /// Whether the file was actually written.
    pub written: bool,
}

/// Execute the `mailpatch convert` command.
///
/// Returns `MailPatchError::RecognitionFailed` when any mail did not contain
/// a clean patch, after every mail has been processed.
pub fn cmd_convert(args: ConvertArgs) -> Result<()> {
    let config = Config::discover(args.config.as_deref())?;
    let output_dir = args
        .output_dir
        .unwrap_or_else(|| PathBuf::from(&config.output_dir));

    let mut failures = 0;
    for mail_path in &args.mails {
        let raw = std::fs::read(mail_path).map_err(|e| MailPatchError::io(mail_path, e))?;
        let outcome = convert_mail(&raw, &output_dir, &config, args.dry_run)?;

        if outcome.status.is_failure() {
            failures += 1;
        }
        println!("{:<8} {}", outcome.status.label(), outcome.path.display());
    }

    if failures > 0 {
        return Err(MailPatchError::RecognitionFailed(failures));
    }
    Ok(())
}

/// Convert one raw mail message into a patch file under `output_dir`.
pub fn convert_mail(
    raw: &[u8],
    output_dir: &Path,
    config: &Config,
    dry_run: bool,
) -> Result<ConvertOutcome> {
    let mail = MailMessage::parse(raw)?;
    let recognition = recognize(&mail.body);
    let path = output_dir.join(derive_name(&mail.subject, recognition.success));

    let status = if recognition.success {
        ConvertStatus::Clean
    } else {
        for violation in &recognition.violations {
            log::warn!("{}: {}", path.display(), violation);
        }
        ConvertStatus::Flagged
    };

    if !recognition.success && !config.write_failed {
        return Ok(ConvertOutcome {
            path,
            status: ConvertStatus::Dropped,
            written: false,
        });
    }

    if path.exists() {
        match config.on_existing {
            ExistingFilePolicy::Overwrite => {
                log::info!("overwriting {}", path.display());
            }
            ExistingFilePolicy::Skip => {
                return Ok(ConvertOutcome {
                    path,
                    status: ConvertStatus::Skipped,
                    written: false,
                });
            }
            ExistingFilePolicy::Fail => {
                return Err(MailPatchError::UserError(format!(
                    "'{}' already exists.\n\n\
                     Set `on_existing: overwrite` or `on_existing: skip` in {} to continue.",
                    path.display(),
                    crate::config::CONFIG_FILE_NAME
                )));
            }
        }
    }

    if dry_run {
        return Ok(ConvertOutcome {
            path,
            status,
            written: false,
        });
    }

    atomic_write(&path, recognition.patch.as_bytes())?;
    log::info!("wrote {}", path.display());

    Ok(ConvertOutcome {
        path,
        status,
        written: true,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_support::{BROKEN_BODY, CLEAN_BODY, sample_mail};
    use tempfile::TempDir;

    #[test]
    fn test_convert_clean_mail() {
        let temp_dir = TempDir::new().unwrap();
        let raw = sample_mail("[edk2-devel] [PATCH v2 3/7] Fix the build.", CLEAN_BODY);

        let outcome = convert_mail(&raw, temp_dir.path(), &Config::default(), false).unwrap();

        assert_eq!(outcome.status, ConvertStatus::Clean);
        assert!(outcome.written);
        assert_eq!(outcome.path, temp_dir.path().join("0003-Fix-the-build.patch"));

        let written = std::fs::read_to_string(&outcome.path).unwrap();
        assert!(written.contains("\r\ndiff --git a/foo.c b/foo.c\r\n"));
        assert!(!written.contains('\u{a0}'));
    }

    #[test]
    fn test_convert_broken_mail_is_flagged() {
        let temp_dir = TempDir::new().unwrap();
        let raw = sample_mail("[PATCH] Truncated", BROKEN_BODY);

        let outcome = convert_mail(&raw, temp_dir.path(), &Config::default(), false).unwrap();

        assert_eq!(outcome.status, ConvertStatus::Flagged);
        assert!(outcome.written);
        assert_eq!(
            outcome.path,
            temp_dir.path().join("0001-Truncated.warning.patch")
        );
        assert!(outcome.path.exists());
    }

    #[test]
    fn test_convert_broken_mail_dropped_when_configured() {
        let temp_dir = TempDir::new().unwrap();
        let raw = sample_mail("[PATCH] Truncated", BROKEN_BODY);
        let config = Config {
            write_failed: false,
            ..Config::default()
        };

        let outcome = convert_mail(&raw, temp_dir.path(), &config, false).unwrap();

        assert_eq!(outcome.status, ConvertStatus::Dropped);
        assert!(!outcome.written);
        assert!(!outcome.path.exists());
    }

    #[test]
    fn test_convert_dry_run_writes_nothing() {
        let temp_dir = TempDir::new().unwrap();
        let raw = sample_mail("[PATCH 1/1] Fix", CLEAN_BODY);

        let outcome = convert_mail(&raw, temp_dir.path(), &Config::default(), true).unwrap();

        assert_eq!(outcome.status, ConvertStatus::Clean);
        assert!(!outcome.written);
        assert!(!outcome.path.exists());
    }

    #[test]
    fn test_convert_existing_file_policies() {
        let temp_dir = TempDir::new().unwrap();
        let raw = sample_mail("[PATCH 1/1] Fix", CLEAN_BODY);
        let target = temp_dir.path().join("0001-Fix.patch");
        std::fs::write(&target, "old").unwrap();

        let skip = Config {
            on_existing: ExistingFilePolicy::Skip,
            ..Config::default()
        };
        let outcome = convert_mail(&raw, temp_dir.path(), &skip, false).unwrap();
        assert_eq!(outcome.status, ConvertStatus::Skipped);
        assert_eq!(std::fs::read_to_string(&target).unwrap(), "old");

        let fail = Config {
            on_existing: ExistingFilePolicy::Fail,
            ..Config::default()
        };
        let err = convert_mail(&raw, temp_dir.path(), &fail, false).unwrap_err();
        assert!(err.to_string().contains("already exists"));

        let outcome = convert_mail(&raw, temp_dir.path(), &Config::default(), false).unwrap();
        assert!(outcome.written);
        assert_ne!(std::fs::read_to_string(&target).unwrap(), "old");
    }

    #[test]
    fn test_convert_rejects_mail_without_text() {
        let temp_dir = TempDir::new().unwrap();
        let raw = b"Subject: pic\r\nContent-Type: image/png\r\n\r\nabc\r\n";

        let err = convert_mail(raw, temp_dir.path(), &Config::default(), false).unwrap_err();
        assert!(matches!(err, MailPatchError::MailError(_)));
    }

    #[test]
    fn test_status_failure_classification() {
        assert!(!ConvertStatus::Clean.is_failure());
        assert!(ConvertStatus::Flagged.is_failure());
        assert!(ConvertStatus::Dropped.is_failure());
        assert!(!ConvertStatus::Skipped.is_failure());
    }
}
