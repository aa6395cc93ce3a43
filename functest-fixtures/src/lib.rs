//! Fixture lifecycle management
//!
//! Every test case starts from byte-identical baseline state. Before each
//! case the harness wipes the content volumes, asks the API to reset its
//! database, and replays a fixed sequence of creation calls. Any failure
//! here is fatal to the whole run: a partially-applied fixture cannot be
//! trusted for test isolation.

pub mod db;
pub mod error;
pub mod seed;
pub mod volume;

pub use error::FixtureError;

use functest_config::HarnessConfig;
use functest_http::ApiClient;

/// Full fixture reset, in the mandatory order: volume wipe, database
/// reset, then baseline replay.
pub async fn reset(client: &ApiClient, config: &HarnessConfig) -> Result<(), FixtureError> {
    volume::reset_volume(&config.volumes)?;
    db::reset_db(client, &config.api_root).await?;
    seed::seed_baseline(client, &config.api_root).await?;
    Ok(())
}
