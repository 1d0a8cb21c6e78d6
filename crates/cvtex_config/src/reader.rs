//! Configuration file reading utilities.

use std::fs;
use std::path::Path;

use tracing::debug;

use crate::error::{ConfigError, ConfigResult};
use crate::models::ResumeConfig;

/// Reader for resume configuration files.
pub struct ConfigReader;

impl ConfigReader {
    /// Read a configuration file, dispatching on the file extension.
    pub fn read(path: impl AsRef<Path>) -> ConfigResult<ResumeConfig> {
        let path = path.as_ref();
        debug!("Reading configuration from {:?}", path);

        if !path.exists() {
            return Err(ConfigError::NotFound(path.to_path_buf()));
        }

        let content = fs::read_to_string(path)?;

        match path.extension().and_then(|ext| ext.to_str()) {
            Some("yaml") | Some("yml") => Self::from_yaml(&content),
            Some("json") => Self::from_json(&content),
            _ => Err(ConfigError::UnsupportedFormat(path.to_path_buf())),
        }
    }

    /// Parse a configuration from YAML content.
    pub fn from_yaml(content: &str) -> ConfigResult<ResumeConfig> {
        let config: ResumeConfig = serde_yaml::from_str(content)?;
        Ok(config)
    }

    /// Parse a configuration from JSON content.
    pub fn from_json(content: &str) -> ConfigResult<ResumeConfig> {
        let config: ResumeConfig = serde_json::from_str(content)?;
        Ok(config)
    }

    /// Read a LaTeX template file as an opaque string.
    pub fn read_template(path: impl AsRef<Path>) -> ConfigResult<String> {
        let path = path.as_ref();
        debug!("Reading template from {:?}", path);

        if !path.exists() {
            return Err(ConfigError::NotFound(path.to_path_buf()));
        }

        let content = fs::read_to_string(path)?;
        Ok(content)
    }
}
