//! Config loading, discovery, and validation.

use super::model::Config;
use crate::error::{MailPatchError, Result};
use std::path::Path;

/// Name of the config file looked up in the current directory.
pub const CONFIG_FILE_NAME: &str = ".mailpatch.yaml";

impl Config {
    /// Load config from a YAML file.
    ///
    /// Unknown fields in the YAML are silently ignored for forward compatibility.
    ///
    /// # Returns
    ///
    /// * `Ok(Config)` - Successfully loaded and validated config
    /// * `Err(MailPatchError::UserError)` - Read error, parse error, or validation failure
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();

        let content = std::fs::read_to_string(path).map_err(|e| {
            MailPatchError::UserError(format!(
                "failed to read config file '{}': {}",
                path.display(),
                e
            ))
        })?;

        Self::from_yaml(&content)
    }

    /// Resolve the config to use.
    ///
    /// An explicit path must exist. Without one, `.mailpatch.yaml` in the
    /// current directory is used when present, otherwise the defaults.
    pub fn discover(explicit: Option<&Path>) -> Result<Self> {
        if let Some(path) = explicit {
            log::debug!("loading config from {}", path.display());
            return Self::load(path);
        }

        let local = Path::new(CONFIG_FILE_NAME);
        if local.is_file() {
            log::debug!("loading config from ./{}", CONFIG_FILE_NAME);
            return Self::load(local);
        }

        Ok(Self::default())
    }

    /// Parse config from a YAML string.
    ///
    /// Unknown fields in the YAML are silently ignored for forward compatibility.
    pub fn from_yaml(yaml: &str) -> Result<Self> {
        let config: Config = serde_yaml::from_str(yaml).map_err(|e| {
            MailPatchError::UserError(format!("failed to parse config YAML: {}", e))
        })?;

        config.validate()?;
        Ok(config)
    }

    /// Serialize config to YAML string.
    pub fn to_yaml(&self) -> Result<String> {
        serde_yaml::to_string(self).map_err(|e| {
            MailPatchError::UserError(format!("failed to serialize config to YAML: {}", e))
        })
    }

    /// Validate config values and return error on invalid values.
    ///
    /// Validation rules:
    /// - `output_dir` must be non-empty
    pub fn validate(&self) -> Result<()> {
        if self.output_dir.trim().is_empty() {
            return Err(MailPatchError::UserError(
                "config validation failed: output_dir must not be empty".to_string(),
            ));
        }

        Ok(())
    }
}
