//! Sequential test run loop
//!
//! Cases run strictly one at a time, in registration order, each preceded
//! by a full fixture reset. Fixture state (volumes and the remote
//! database) is a single shared mutable resource with no isolation
//! mechanism, so nothing here may ever run concurrently.

use functest_config::HarnessConfig;
use functest_fixtures::FixtureError;
use functest_http::{ApiClient, CaseContext, CaseFn};
use functest_result::TestResult;
use thiserror::Error;
use tracing::{debug, info, warn};

/// Errors that abort the entire run before a report is produced
#[derive(Debug, Error)]
pub enum RunError {
    #[error("fixture reset failed: {0}")]
    Fixture(#[from] FixtureError),
}

/// Accumulated outcomes of a completed run, in execution order
#[derive(Debug)]
pub struct RunReport {
    pub results: Vec<TestResult>,
}

impl RunReport {
    /// Whether any case failed. An unfinished result counts as failed.
    pub fn any_failed(&self) -> bool {
        self.results.iter().any(|r| !r.passed())
    }
}

/// Run every case in order, resetting fixtures before each one.
///
/// A fixture error is fatal: the run stops immediately and no partial
/// report is returned. Case-local failures are already recorded inside
/// the individual [`TestResult`]s and do not stop the run.
pub async fn run(
    client: &ApiClient,
    config: &HarnessConfig,
    cases: Vec<CaseFn>,
) -> Result<RunReport, RunError> {
    let cx = CaseContext::new(client.clone(), config.api_root.clone());
    let mut results = Vec::with_capacity(cases.len());

    info!("running {} cases against {}", cases.len(), config.api_root);
    for (index, case) in cases.into_iter().enumerate() {
        debug!("resetting fixtures before case {}", index + 1);
        functest_fixtures::reset(client, config).await?;

        let res = case(cx.clone()).await;
        if !res.finalized() {
            // authoring bug in the case body; the reporter renders this
            // as a failure rather than a silent pass
            warn!(
                "case {}:{}:{} returned without a terminal marker",
                res.suite, res.element, res.id
            );
        }
        results.push(res);
    }

    Ok(RunReport { results })
}
