//! Chain configuration module
//!
//! Provides the tunables used to assemble the canned validation chains.
//!
//! Values come from three layers, later ones winning:
//! 1. Built-in defaults
//! 2. An optional TOML file (path in `AUTHFLOW_CONFIG`)
//! 3. `AUTHFLOW_*` environment variables
//!
//! ```toml
//! min_password_length = 10
//! location_enabled = true
//! notifications_enabled = false
//! require_profile = true
//! ```

use crate::shared::error::ConfigError;
use serde::Deserialize;
use std::path::Path;

/// Default minimum password length for signup
pub const DEFAULT_MIN_PASSWORD_LENGTH: usize = 8;

/// Environment variable holding the config file path
pub const CONFIG_PATH_ENV: &str = "AUTHFLOW_CONFIG";

const MIN_PASSWORD_LENGTH_ENV: &str = "AUTHFLOW_MIN_PASSWORD_LENGTH";
const LOCATION_ENABLED_ENV: &str = "AUTHFLOW_LOCATION_ENABLED";
const NOTIFICATIONS_ENABLED_ENV: &str = "AUTHFLOW_NOTIFICATIONS_ENABLED";
const REQUIRE_PROFILE_ENV: &str = "AUTHFLOW_REQUIRE_PROFILE";

/// Chain configuration
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct ChainConfig {
    /// Minimum number of characters a signup password needs
    pub min_password_length: usize,
    /// Answer given by the static location capability
    pub location_enabled: bool,
    /// Answer given by the static notification capability
    pub notifications_enabled: bool,
    /// Prepend the first/last name check to the signup chain
    pub require_profile: bool,
}

impl Default for ChainConfig {
    fn default() -> Self {
        Self {
            min_password_length: DEFAULT_MIN_PASSWORD_LENGTH,
            location_enabled: true,
            notifications_enabled: true,
            require_profile: false,
        }
    }
}

impl ChainConfig {
    /// Create a new ChainConfigBuilder
    pub fn builder() -> ChainConfigBuilder {
        ChainConfigBuilder::default()
    }

    /// Parse a configuration from TOML text
    pub fn from_toml_str(text: &str) -> Result<Self, ConfigError> {
        let config: ChainConfig = toml::from_str(text)?;
        config.validate()?;
        Ok(config)
    }

    /// Read and parse a TOML configuration file
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let path = path.as_ref();
        tracing::debug!("[Config] Reading {}", path.display());
        let text = std::fs::read_to_string(path)?;
        Self::from_toml_str(&text)
    }

    /// Load defaults, then the file named by `AUTHFLOW_CONFIG`, then env overrides
    pub fn load() -> Result<Self, ConfigError> {
        Self::load_with(Self::default())
    }

    /// Like `load`, but start from `base` when no config file is named
    ///
    /// A config file replaces `base` entirely; fields it omits take the
    /// built-in defaults.
    pub fn load_with(base: ChainConfig) -> Result<Self, ConfigError> {
        let base = match std::env::var(CONFIG_PATH_ENV) {
            Ok(path) if !path.trim().is_empty() => Self::from_file(path.trim())?,
            _ => base,
        };
        let config = base.with_env_overrides()?;
        tracing::info!("[Config] Loaded chain config: {:?}", config);
        Ok(config)
    }

    /// Apply `AUTHFLOW_*` environment overrides on top of this configuration
    pub fn with_env_overrides(mut self) -> Result<Self, ConfigError> {
        if let Some(value) = env_value(MIN_PASSWORD_LENGTH_ENV) {
            self.min_password_length = value.parse().map_err(|_| {
                ConfigError::invalid("min_password_length", format!("not a number: {}", value))
            })?;
        }
        if let Some(value) = env_value(LOCATION_ENABLED_ENV) {
            self.location_enabled = parse_flag("location_enabled", &value)?;
        }
        if let Some(value) = env_value(NOTIFICATIONS_ENABLED_ENV) {
            self.notifications_enabled = parse_flag("notifications_enabled", &value)?;
        }
        if let Some(value) = env_value(REQUIRE_PROFILE_ENV) {
            self.require_profile = parse_flag("require_profile", &value)?;
        }
        self.validate()?;
        Ok(self)
    }

    /// Validate the configuration
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.min_password_length == 0 {
            return Err(ConfigError::invalid(
                "min_password_length",
                "must be at least 1",
            ));
        }
        Ok(())
    }
}

fn env_value(key: &str) -> Option<String> {
    std::env::var(key).ok().filter(|value| !value.trim().is_empty())
}

fn parse_flag(field: &'static str, value: &str) -> Result<bool, ConfigError> {
    match value.trim().to_ascii_lowercase().as_str() {
        "1" | "true" | "yes" | "on" => Ok(true),
        "0" | "false" | "no" | "off" => Ok(false),
        other => Err(ConfigError::invalid(field, format!("not a boolean: {}", other))),
    }
}

/// Builder for ChainConfig
#[derive(Debug, Default)]
pub struct ChainConfigBuilder {
    config: ChainConfig,
}

impl ChainConfigBuilder {
    /// Set the minimum password length
    pub fn min_password_length(mut self, length: usize) -> Self {
        self.config.min_password_length = length;
        self
    }

    /// Set the static location capability answer
    pub fn location_enabled(mut self, enabled: bool) -> Self {
        self.config.location_enabled = enabled;
        self
    }

    /// Set the static notification capability answer
    pub fn notifications_enabled(mut self, enabled: bool) -> Self {
        self.config.notifications_enabled = enabled;
        self
    }

    /// Require first and last name on signup
    pub fn require_profile(mut self, required: bool) -> Self {
        self.config.require_profile = required;
        self
    }

    /// Build the configuration
    pub fn build(self) -> Result<ChainConfig, ConfigError> {
        self.config.validate()?;
        Ok(self.config)
    }
}
