//! Assembler configuration, loadable from YAML

use serde::{Deserialize, Serialize};
use std::path::Path;
use thiserror::Error;

/// Default cap on recipients listed on a single-message event
pub const DEFAULT_RECIPIENT_CAP: usize = 10;

/// Vendor recorded on analysis entries when the input names none
pub const DEFAULT_VENDOR: &str = "llm";

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("failed to read config {path}: {source}")]
    Io {
        path: String,
        #[source]
        source: std::io::Error,
    },

    #[error("invalid config: {0}")]
    Yaml(#[from] serde_yaml::Error),
}

/// Knobs for record assembly. Missing keys take their defaults.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct AssemblerConfig {
    /// Maximum recipients on a single-message event
    pub recipient_cap: usize,
    /// Product name stamped on analysis entries
    pub product: String,
    /// Vendor used when the enrichment input has no `source`
    pub default_vendor: String,
    /// Content type of event bodies
    pub body_content_type: String,
}

impl Default for AssemblerConfig {
    fn default() -> Self {
        Self {
            recipient_cap: DEFAULT_RECIPIENT_CAP,
            product: env!("CARGO_PKG_NAME").to_string(),
            default_vendor: DEFAULT_VENDOR.to_string(),
            body_content_type: "text/plain".to_string(),
        }
    }
}

impl AssemblerConfig {
    pub fn from_yaml_str(yaml: &str) -> Result<Self, ConfigError> {
        // An empty document deserializes as unit, not as a map
        if yaml.trim().is_empty() {
            return Ok(Self::default());
        }
        Ok(serde_yaml::from_str(yaml)?)
    }

    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        let text = std::fs::read_to_string(path).map_err(|source| ConfigError::Io {
            path: path.display().to_string(),
            source,
        })?;
        let config = Self::from_yaml_str(&text)?;
        tracing::debug!(path = %path.display(), ?config, "loaded assembler config");
        Ok(config)
    }

    pub fn with_recipient_cap(mut self, cap: usize) -> Self {
        self.recipient_cap = cap;
        self
    }
}
