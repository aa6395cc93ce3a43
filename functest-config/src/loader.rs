//! Configuration loading and environment variable handling

use crate::error::{ConfigError, ConfigResult};
use crate::harness::HarnessConfig;
use std::path::Path;

/// Configuration loader with environment variable support
pub struct ConfigLoader {
    /// Environment variable prefix
    prefix: String,
}

impl Default for ConfigLoader {
    fn default() -> Self {
        Self::new()
    }
}

impl ConfigLoader {
    /// Create a new config loader with default prefix
    pub fn new() -> Self {
        Self {
            prefix: "FUNCTEST".to_string(),
        }
    }

    /// Create a new config loader with custom prefix
    pub fn with_prefix(prefix: impl Into<String>) -> Self {
        Self {
            prefix: prefix.into(),
        }
    }

    /// Load configuration from a YAML file with environment overrides
    pub fn from_file(&self, path: impl AsRef<Path>) -> ConfigResult<HarnessConfig> {
        let content = std::fs::read_to_string(path)?;
        let mut config: HarnessConfig = serde_yaml::from_str(&content)?;
        self.apply_env_overrides(&mut config)?;
        config.validate()?;
        Ok(config)
    }

    /// Load configuration from environment variables only
    pub fn from_env(&self) -> ConfigResult<HarnessConfig> {
        let mut config = HarnessConfig::default();
        self.apply_env_overrides(&mut config)?;
        config.validate()?;
        Ok(config)
    }

    /// Load configuration with fallback chain
    pub fn load(&self, config_path: Option<impl AsRef<Path>>) -> ConfigResult<HarnessConfig> {
        match config_path {
            Some(path) => self.from_file(path),
            None => self.from_env(),
        }
    }

    /// Apply environment variable overrides to configuration
    fn apply_env_overrides(&self, config: &mut HarnessConfig) -> ConfigResult<()> {
        if let Ok(api_root) = self.get_env_var("API_ROOT") {
            config.api_root = api_root;
        }

        if let Ok(code_dir) = self.get_env_var("CODE_DIR") {
            config.volumes.code_dir = code_dir.into();
        }

        if let Ok(spdx_dir) = self.get_env_var("SPDX_DIR") {
            config.volumes.spdx_dir = spdx_dir.into();
        }

        if let Ok(timeout) = self.get_env_var("HTTP_TIMEOUT_SECONDS") {
            config.http.timeout_seconds = timeout.parse().map_err(|e| {
                ConfigError::EnvError(format!("Invalid HTTP_TIMEOUT_SECONDS: {}", e))
            })?;
        }

        if let Ok(user_agent) = self.get_env_var("HTTP_USER_AGENT") {
            config.http.user_agent = user_agent;
        }

        Ok(())
    }

    /// Get an environment variable with the configured prefix
    fn get_env_var(&self, name: &str) -> Result<String, std::env::VarError> {
        std::env::var(format!("{}_{}", self.prefix, name))
    }
}
