//! Config struct definition and default implementation.

use super::types::*;
use serde::{Deserialize, Serialize};

/// Configuration for mailpatch.
///
/// This struct represents the contents of `.mailpatch.yaml`.
/// Unknown fields in the YAML are ignored for forward compatibility.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Directory patch files are written to (default: ".").
    #[serde(default = "default_output_dir")]
    pub output_dir: String,

    /// Whether to write `.warning.patch` files for bodies that failed recognition.
    #[serde(default = "default_true")]
    pub write_failed: bool,

    /// What to do when a patch file with the derived name already exists.
    #[serde(default)]
    pub on_existing: ExistingFilePolicy,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            output_dir: default_output_dir(),
            write_failed: default_true(),
            on_existing: ExistingFilePolicy::default(),
        }
    }
}
