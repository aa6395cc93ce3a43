//! Configuration for the functional test harness
//!
//! Provides the harness settings (API root, volume directories, HTTP
//! client options) with serde defaults, YAML file loading, and
//! `FUNCTEST_*` environment variable overrides.

pub mod error;
pub mod harness;
pub mod loader;

// Re-export main types
pub use error::{ConfigError, ConfigResult};
pub use harness::{HarnessConfig, HttpClientConfig, VolumeConfig};
pub use loader::ConfigLoader;
