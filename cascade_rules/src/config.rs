use serde::{Deserialize, Serialize};
use std::path::Path;

use crate::error::ConfigError;
use crate::token::Color;

/// Tunables for the rules crate, loadable from TOML.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct RulesConfig {
    /// How many colors of the enumeration are in play.
    pub palette_size: usize,
    /// Full re-roll passes the board generator runs before repairing.
    pub max_generation_passes: usize,
}

impl Default for RulesConfig {
    fn default() -> Self {
        Self {
            palette_size: Color::ALL.len(),
            max_generation_passes: 64,
        }
    }
}

impl RulesConfig {
    /// Parse and validate configuration from a TOML string.
    pub fn from_toml_str(content: &str) -> Result<Self, ConfigError> {
        let config: RulesConfig = toml::from_str(content)?;
        config.validate()?;
        Ok(config)
    }

    /// Load configuration from a TOML file.
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path).map_err(|e| ConfigError::FileRead {
            path: path.to_path_buf(),
            source: e,
        })?;
        Self::from_toml_str(&content)
    }

    /// Validate configuration values.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if !(3..=Color::ALL.len()).contains(&self.palette_size) {
            return Err(ConfigError::Validation(format!(
                "palette_size must be in 3..={}",
                Color::ALL.len()
            )));
        }
        if self.max_generation_passes == 0 {
            return Err(ConfigError::Validation(
                "max_generation_passes must be > 0".into(),
            ));
        }
        Ok(())
    }
}
