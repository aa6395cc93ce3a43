//! Fixture error types
//!
//! All of these abort the entire run, not just the current case.

use functest_http::HttpError;
use std::path::PathBuf;
use thiserror::Error;

/// Errors raised while resetting to baseline state
#[derive(Debug, Error)]
pub enum FixtureError {
    /// Could not clear a content volume directory
    #[error("failed to reset volume directory {}: {}", dir.display(), source)]
    Volume {
        dir: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// The administrative database reset did not answer 204
    #[error("database reset failed: {0}")]
    DbReset(#[source] HttpError),

    /// A baseline creation step failed; later steps were not attempted
    #[error("fixture step '{step}' failed: {source}")]
    Seed {
        step: &'static str,
        #[source]
        source: HttpError,
    },
}
