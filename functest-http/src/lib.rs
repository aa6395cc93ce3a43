//! HTTP assertion client for the functional test harness
//!
//! Wraps `reqwest` with the request/assertion protocol shared by every
//! test case: attach the role credential, execute, capture the raw body
//! into the case's [`TestResult`](functest_result::TestResult), and assert
//! the status code. Also provides the fixture-setup POST variant and the
//! case function type used by the registry.

pub mod client;
pub mod context;
pub mod errors;
pub mod roles;

// Re-export main types for convenience
pub use client::ApiClient;
pub use context::{CaseContext, CaseFn};
pub use errors::HttpError;
pub use reqwest::StatusCode;
pub use roles::{Role, RoleError};
