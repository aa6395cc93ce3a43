//! Per-case result record

use std::fmt;

use crate::oracle;

/// Terminal state of a test case.
///
/// A result starts out [`Outcome::Unfinished`] and is finalized exactly
/// once by the case body. A case function that returns without reaching a
/// terminal marker is an authoring bug; the reporter renders such results
/// as failures rather than silently counting them as passes.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Outcome {
    /// No terminal marker was reached yet.
    Unfinished,
    /// The case passed.
    Pass,
    /// The case failed at the named step.
    Fail {
        /// Label of the first failing step.
        step: String,
        /// Underlying error detail for non-assertion failures. Unset for
        /// pure JSON mismatches, which are diagnosed via wanted/got.
        error: Option<String>,
    },
}

/// Identifies a single test case and records its outcome.
///
/// The record is threaded by mutable reference through every HTTP and
/// assertion step of a case, finalized once, then handed to the reporter.
#[derive(Debug, Clone)]
pub struct TestResult {
    /// Overall suite the case belongs to, e.g. "endpoints".
    pub suite: String,
    /// Element under test within the suite, e.g. "jobs/{id}".
    pub element: String,
    /// Unique identifier within the element, e.g. "PUT (operator)".
    pub id: String,
    /// Case outcome, written once.
    pub outcome: Outcome,
    /// Latest expected JSON text compared during this case.
    pub wanted: String,
    /// Latest raw response body received during this case.
    pub got: Vec<u8>,
}

impl TestResult {
    /// Create an unfinished result for the identified case.
    pub fn new(suite: &str, element: &str, id: &str) -> Self {
        Self {
            suite: suite.to_string(),
            element: element.to_string(),
            id: id.to_string(),
            outcome: Outcome::Unfinished,
            wanted: String::new(),
            got: Vec::new(),
        }
    }

    /// Mark the case as passed. Ignored if already finalized.
    pub fn pass(&mut self) {
        if self.outcome == Outcome::Unfinished {
            self.outcome = Outcome::Pass;
        }
    }

    /// Mark the case as failed at `step` for a reason other than a JSON
    /// mismatch (transport error, unexpected status code, bad role).
    /// Ignored if already finalized.
    pub fn fail_step(&mut self, step: &str, error: impl fmt::Display) {
        if self.outcome == Outcome::Unfinished {
            self.outcome = Outcome::Fail {
                step: step.to_string(),
                error: Some(error.to_string()),
            };
        }
    }

    /// Mark the case as failed at `step` because the expected and received
    /// JSON did not match. The wanted/got snapshot carries the diagnostics.
    /// Ignored if already finalized.
    pub fn fail_match(&mut self, step: &str) {
        if self.outcome == Outcome::Unfinished {
            self.outcome = Outcome::Fail {
                step: step.to_string(),
                error: None,
            };
        }
    }

    /// Whether the case reached a terminal marker.
    pub fn finalized(&self) -> bool {
        self.outcome != Outcome::Unfinished
    }

    /// Whether the case passed. An unfinished result is not a pass.
    pub fn passed(&self) -> bool {
        self.outcome == Outcome::Pass
    }

    /// Whether the current wanted/got pair is JSON-equivalent.
    pub fn matches_wanted(&self) -> bool {
        oracle::json_equivalent(&self.wanted, &self.got)
    }

    /// Whether the current wanted/got pair is the empty-body case.
    pub fn wanted_is_empty(&self) -> bool {
        oracle::both_empty(&self.wanted, &self.got)
    }
}
