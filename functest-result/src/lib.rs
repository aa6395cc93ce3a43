//! Test result model and JSON equivalence oracle
//!
//! A [`TestResult`] identifies a single test case, records the latest
//! expected/received payload pair, and holds the case outcome. The
//! [`oracle`] module decides whether an expected JSON document and a
//! captured response body are semantically equivalent.

pub mod oracle;
pub mod result;

// Re-export main types for convenience
pub use result::{Outcome, TestResult};
