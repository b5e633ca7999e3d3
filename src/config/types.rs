//! Configuration types and defaults for mailpatch.

use serde::{Deserialize, Serialize};

/// What to do when the derived patch file already exists.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "snake_case")]
pub enum ExistingFilePolicy {
    /// Replace the existing file (default).
    #[default]
    Overwrite,
    /// Leave the existing file alone and report it as skipped.
    Skip,
    /// Stop with an error.
    Fail,
}

impl ExistingFilePolicy {
    /// Parse a policy from a string.
    #[allow(clippy::should_implement_trait)]
    pub fn from_str(s: &str) -> Option<Self> {
        match s {
            "overwrite" => Some(Self::Overwrite),
            "skip" => Some(Self::Skip),
            "fail" => Some(Self::Fail),
            _ => None,
        }
    }
}

// Default value functions for serde
pub(crate) fn default_output_dir() -> String {
    ".".to_string()
}
pub(crate) fn default_true() -> bool {
    true
}
