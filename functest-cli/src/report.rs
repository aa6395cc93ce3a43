//! Report rendering
//!
//! Pure string renderers over a [`RunReport`], kept free of I/O so they
//! are independently testable: a column-aligned summary table, and a
//! delimited detail block per failing case.

use crate::runner::RunReport;
use functest_result::{Outcome, TestResult};

const DELIMITER: &str = "==========";

/// Render the one-line-per-case summary table, column aligned.
pub fn summary(report: &RunReport) -> String {
    let results = &report.results;
    let suite_w = results.iter().map(|r| r.suite.len()).max().unwrap_or(0);
    let element_w = results.iter().map(|r| r.element.len()).max().unwrap_or(0);
    let id_w = results.iter().map(|r| r.id.len()).max().unwrap_or(0);

    let mut out = String::new();
    for res in &report.results {
        let verdict = if res.passed() { "ok" } else { "FAIL" };
        out.push_str(&format!(
            "{:suite_w$} {:element_w$} {:id_w$} {}\n",
            res.suite, res.element, res.id, verdict
        ));
    }
    out
}

/// Render the expanded detail blocks for every failing case. Empty when
/// everything passed.
pub fn failures(report: &RunReport) -> String {
    if !report.any_failed() {
        return String::new();
    }

    let mut out = format!("\n\n{}\n\n", DELIMITER);
    for res in report.results.iter().filter(|r| !r.passed()) {
        let (step, errors) = failure_detail(res);
        out.push_str(&format!("{}:{}:{}\n", res.suite, res.element, res.id));
        out.push_str("    Status: FAIL\n");
        out.push_str(&format!("    Step:   {}\n", step));
        out.push_str(&format!("    Errors: {}\n", errors));
        out.push_str(&format!("    Wanted: {}\n", res.wanted));
        out.push_str(&format!("    Got:    {}\n", String::from_utf8_lossy(&res.got)));
        out.push_str(&format!("\n{}\n\n", DELIMITER));
    }
    out
}

fn failure_detail(res: &TestResult) -> (String, String) {
    match &res.outcome {
        Outcome::Fail { step, error } => (
            step.clone(),
            error.clone().unwrap_or_else(|| "<none>".to_string()),
        ),
        Outcome::Unfinished => (
            "-".to_string(),
            "case returned without a terminal pass/fail marker".to_string(),
        ),
        Outcome::Pass => unreachable!("passing cases are filtered out"),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use functest_result::TestResult;

    fn passing(suite: &str, element: &str, id: &str) -> TestResult {
        let mut res = TestResult::new(suite, element, id);
        res.pass();
        res
    }

    fn report() -> RunReport {
        let mut mismatch = TestResult::new("endpoints", "jobs/{id}", "PUT (viewer)");
        mismatch.wanted = r#"{"error": "Access denied"}"#.to_string();
        mismatch.got = br#"{"error": "Not found"}"#.to_vec();
        mismatch.fail_match("2");

        let mut transport = TestResult::new("endpoints", "jobs/{id}", "DELETE (admin)");
        transport.fail_step("1", "connection refused");

        RunReport {
            results: vec![
                passing("endpoints", "repopulls/{id}/jobs", "GET (viewer)"),
                mismatch,
                transport,
            ],
        }
    }

    #[test]
    fn test_summary_is_column_aligned() {
        let out = summary(&report());
        let lines: Vec<&str> = out.lines().collect();
        assert_eq!(lines.len(), 3);
        assert!(lines[0].ends_with(" ok"));
        assert!(lines[1].ends_with(" FAIL"));
        // every verdict starts in the same column
        let col = |line: &str| line.rfind(' ').unwrap();
        assert_eq!(col(lines[0]), col(lines[1]));
        assert_eq!(col(lines[1]), col(lines[2]));
    }

    #[test]
    fn test_summary_preserves_run_order() {
        let out = summary(&report());
        let first = out.lines().next().unwrap();
        assert!(first.contains("repopulls/{id}/jobs"));
    }

    #[test]
    fn test_failures_renders_detail_blocks() {
        let out = failures(&report());
        assert!(out.contains("=========="));
        assert!(out.contains("endpoints:jobs/{id}:PUT (viewer)"));
        assert!(out.contains("    Step:   2\n"));
        // JSON mismatch: no underlying error, wanted/got carry diagnostics
        assert!(out.contains("    Errors: <none>\n"));
        assert!(out.contains(r#"    Wanted: {"error": "Access denied"}"#));
        assert!(out.contains(r#"    Got:    {"error": "Not found"}"#));
        // transport failure: error detail is shown
        assert!(out.contains("    Errors: connection refused\n"));
    }

    #[test]
    fn test_failures_empty_when_all_pass() {
        let report = RunReport {
            results: vec![passing("endpoints", "jobs/{id}", "GET (viewer)")],
        };
        assert_eq!(failures(&report), "");
    }

    #[test]
    fn test_unfinished_case_is_reported_as_fail() {
        let report = RunReport {
            results: vec![TestResult::new("endpoints", "jobs/{id}", "GET (viewer)")],
        };
        let out = summary(&report);
        assert!(out.ends_with(" FAIL\n"));
        let detail = failures(&report);
        assert!(detail.contains("terminal pass/fail marker"));
    }
}
