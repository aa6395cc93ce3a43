//! Run loop and reporting for the functional test harness
//!
//! Exposed as a library so the run loop and the report renderers can be
//! exercised by the integration tests without spawning the binary.

pub mod report;
pub mod runner;

pub use runner::{run, RunError, RunReport};
