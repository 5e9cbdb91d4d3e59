use std::path::{Path, PathBuf};

use indoornav_core::InstructionConfig;
use serde::Deserialize;

/// Settings read from the optional TOML file
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct AppConfig {
    /// Default tracing filter, `RUST_LOG` wins when set
    pub log_level: String,
    /// Snapshot used when `--graph` is not given
    pub graph: Option<PathBuf>,
    pub instructions: InstructionConfig,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            log_level: "info".to_string(),
            graph: None,
            instructions: InstructionConfig::default(),
        }
    }
}

impl AppConfig {
    pub fn load(path: Option<&Path>) -> Result<Self, Box<dyn std::error::Error>> {
        let Some(path) = path else {
            return Ok(Self::default());
        };
        let text = std::fs::read_to_string(path)
            .map_err(|e| format!("Failed to read config '{}': {e}", path.display()))?;
        Self::parse(&text)
    }

    fn parse(text: &str) -> Result<Self, Box<dyn std::error::Error>> {
        Ok(toml::from_str(text)?)
    }
}
