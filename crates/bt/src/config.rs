//! Tree runtime configuration.

use std::path::Path;

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};

/// Runtime settings for a [`TreeManager`](crate::TreeManager), loadable from YAML.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct TreeConfig {
    /// Root ticks allowed per `run_configured` call
    #[serde(default = "default_max_ticks")]
    pub max_ticks: u32,

    /// Mirror every node tick into `tracing` at TRACE level
    pub trace: bool,
}

fn default_max_ticks() -> u32 {
    100
}

impl Default for TreeConfig {
    fn default() -> Self {
        Self {
            max_ticks: default_max_ticks(),
            trace: false,
        }
    }
}

impl TreeConfig {
    /// Parse configuration from YAML text
    pub fn parse(content: &str) -> Result<Self> {
        serde_yaml::from_str(content).context("Failed to parse tree config")
    }

    /// Load configuration from a YAML file
    pub fn load(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read config from {}", path.display()))?;
        Self::parse(&content)
            .with_context(|| format!("Failed to parse config from {}", path.display()))
    }

    /// Load from `path` if it exists, defaults otherwise
    pub fn load_or_default(path: &Path) -> Result<Self> {
        if path.exists() {
            Self::load(path)
        } else {
            Ok(Self::default())
        }
    }
}
