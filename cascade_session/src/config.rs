use cascade_rules::{ConfigError, RulesConfig};
use serde::{Deserialize, Serialize};
use std::path::Path;
use tracing::warn;

/// Top-level session configuration, loadable from TOML.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct SessionConfig {
    /// Seed for every random decision. `None` draws from system entropy.
    pub seed: Option<u64>,
    /// Upper bound on detect-and-resolve steps after a single action.
    pub max_cascade_steps: usize,
    pub rules: RulesConfig,
}

impl Default for SessionConfig {
    fn default() -> Self {
        Self {
            seed: None,
            max_cascade_steps: 256,
            rules: RulesConfig::default(),
        }
    }
}

impl SessionConfig {
    /// Configuration with a fixed seed and default everything else.
    pub fn seeded(seed: u64) -> Self {
        Self {
            seed: Some(seed),
            ..Self::default()
        }
    }

    /// Parse and validate configuration from a TOML string.
    pub fn from_toml_str(content: &str) -> Result<Self, ConfigError> {
        let config: SessionConfig = toml::from_str(content)?;
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

    /// Load configuration from a TOML file, falling back to defaults if the
    /// file does not exist.
    pub fn load_or_default(path: &Path) -> Result<Self, ConfigError> {
        if path.exists() {
            Self::load(path)
        } else {
            warn!(path = %path.display(), "config file not found, using defaults");
            Ok(Self::default())
        }
    }

    /// Validate configuration values.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.max_cascade_steps == 0 {
            return Err(ConfigError::Validation(
                "max_cascade_steps must be > 0".into(),
            ));
        }
        self.rules.validate()
    }
}
