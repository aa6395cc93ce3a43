//! Registered test cases
//!
//! The case bodies here are test content, not harness architecture: each
//! one exercises a specific endpoint/role combination and yields a single
//! [`TestResult`](functest_result::TestResult). The registry is a flat
//! ordered list built at startup; suite ordering is registration order.

pub mod jobs;

use functest_http::CaseFn;

/// All registered cases, in execution order.
pub fn registry() -> Vec<CaseFn> {
    let mut all: Vec<CaseFn> = Vec::new();
    all.extend(jobs::cases());
    all
}
