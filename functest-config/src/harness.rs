//! Harness configuration structures

use crate::error::{ConfigError, ConfigResult};
use serde::{Deserialize, Serialize};
use std::path::PathBuf;
use std::time::Duration;
use url::Url;

/// Top-level harness configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct HarnessConfig {
    /// Root URL of the API under test
    #[serde(default = "default_api_root")]
    pub api_root: String,

    /// Volume directories wiped before every case
    #[serde(default)]
    pub volumes: VolumeConfig,

    /// HTTP client options
    #[serde(default)]
    pub http: HttpClientConfig,
}

/// Content directories reset between test cases
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct VolumeConfig {
    /// Directory holding source code checkouts
    #[serde(default = "default_code_dir")]
    pub code_dir: PathBuf,

    /// Directory holding generated SPDX output
    #[serde(default = "default_spdx_dir")]
    pub spdx_dir: PathBuf,
}

/// HTTP client configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct HttpClientConfig {
    /// Request timeout in seconds
    #[serde(default = "default_timeout_seconds")]
    pub timeout_seconds: u64,

    /// User agent string
    #[serde(default = "default_user_agent")]
    pub user_agent: String,
}

impl HttpClientConfig {
    /// Request timeout as a [`Duration`]
    pub fn timeout(&self) -> Duration {
        Duration::from_secs(self.timeout_seconds)
    }
}

impl Default for HarnessConfig {
    fn default() -> Self {
        Self {
            api_root: default_api_root(),
            volumes: VolumeConfig::default(),
            http: HttpClientConfig::default(),
        }
    }
}

impl Default for VolumeConfig {
    fn default() -> Self {
        Self {
            code_dir: default_code_dir(),
            spdx_dir: default_spdx_dir(),
        }
    }
}

impl Default for HttpClientConfig {
    fn default() -> Self {
        Self {
            timeout_seconds: default_timeout_seconds(),
            user_agent: default_user_agent(),
        }
    }
}

impl HarnessConfig {
    /// Validate the configuration
    pub fn validate(&self) -> ConfigResult<()> {
        if self.api_root.is_empty() {
            return Err(ConfigError::ValidationError(
                "api_root cannot be empty".to_string(),
            ));
        }
        // Must be an absolute URL; trailing slashes break path joining
        let url = Url::parse(&self.api_root)?;
        if !matches!(url.scheme(), "http" | "https") {
            return Err(ConfigError::ValidationError(format!(
                "api_root must be an http(s) URL, got scheme '{}'",
                url.scheme()
            )));
        }
        if self.api_root.ends_with('/') {
            return Err(ConfigError::ValidationError(
                "api_root must not end with a slash".to_string(),
            ));
        }
        if self.http.timeout_seconds == 0 {
            return Err(ConfigError::ValidationError(
                "http.timeout_seconds must be positive".to_string(),
            ));
        }
        Ok(())
    }
}

fn default_api_root() -> String {
    "http://api:3005".to_string()
}

fn default_code_dir() -> PathBuf {
    PathBuf::from("/code")
}

fn default_spdx_dir() -> PathBuf {
    PathBuf::from("/spdx")
}

fn default_timeout_seconds() -> u64 {
    30
}

fn default_user_agent() -> String {
    format!("jobrunner-functest/{}", env!("CARGO_PKG_VERSION"))
}
