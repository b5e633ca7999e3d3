//! Error types for mailpatch.
//!
//! Uses thiserror for derive macros and provides user-actionable error messages.
//! Recognition itself never fails; these errors cover the I/O and mail
//! handling around it.

use crate::exit_codes;
use thiserror::Error;

/// Main error type for mailpatch operations.
#[derive(Error, Debug)]
pub enum MailPatchError {
    /// User provided invalid arguments, input, or configuration.
    #[error("{0}")]
    UserError(String),

    /// Reading or writing a file failed.
    #[error("I/O error on '{path}': {source}")]
    IoError {
        path: String,
        #[source]
        source: std::io::Error,
    },

    /// A mail message could not be parsed.
    #[error("Mail parsing failed: {0}")]
    MailError(String),

    /// One or more bodies did not contain a clean patch.
    #[error("{0} patch(es) flagged for review")]
    RecognitionFailed(usize),
}

impl MailPatchError {
    /// Returns the appropriate exit code for this error type.
    pub fn exit_code(&self) -> i32 {
        match self {
            MailPatchError::UserError(_) => exit_codes::USER_ERROR,
            MailPatchError::IoError { .. } => exit_codes::USER_ERROR,
            MailPatchError::MailError(_) => exit_codes::MAIL_FAILURE,
            MailPatchError::RecognitionFailed(_) => exit_codes::RECOGNITION_WARNING,
        }
    }

    pub(crate) fn io(path: impl AsRef<std::path::Path>, source: std::io::Error) -> Self {
        MailPatchError::IoError {
            path: path.as_ref().display().to_string(),
            source,
        }
    }
}

impl From<mailparse::MailParseError> for MailPatchError {
    fn from(err: mailparse::MailParseError) -> Self {
        MailPatchError::MailError(err.to_string())
    }
}

/// Result type alias for mailpatch operations.
pub type Result<T> = std::result::Result<T, MailPatchError>;
