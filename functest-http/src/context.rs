//! Case execution context and case function type

use crate::client::ApiClient;
use functest_result::TestResult;
use futures::future::BoxFuture;

/// Everything a case body needs to talk to the API under test.
///
/// Cheap to clone: the underlying reqwest clients are reference-counted.
#[derive(Debug, Clone)]
pub struct CaseContext {
    pub client: ApiClient,
    /// Root URL of the API under test, without a trailing slash
    pub api_root: String,
}

impl CaseContext {
    pub fn new(client: ApiClient, api_root: impl Into<String>) -> Self {
        Self {
            client,
            api_root: api_root.into(),
        }
    }

    /// Join an absolute API path onto the root URL
    pub fn url(&self, path: &str) -> String {
        format!("{}{}", self.api_root, path)
    }
}

/// A registered test case: a pure mapping from the execution context to
/// exactly one [`TestResult`]. Cases must not depend on state left behind
/// by other cases; isolation comes from the fixture reset between cases.
pub type CaseFn = fn(CaseContext) -> BoxFuture<'static, TestResult>;
