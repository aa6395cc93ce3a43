//! End-to-end test of the harness engine against an in-process mock API
//!
//! Validates the full control flow: fixture reset before every case,
//! credential attachment per role, status assertion, oracle verdicts,
//! failure isolation between cases, and report rendering.

#[path = "mock_api.rs"]
mod mock_api;

use functest_cli::{report, runner};
use functest_config::{HarnessConfig, VolumeConfig};
use functest_http::{ApiClient, CaseContext, CaseFn, Role, StatusCode};
use functest_result::{Outcome, TestResult};
use std::fs;
use tempfile::TempDir;

fn harness_config(api_root: &str, code: &TempDir, spdx: &TempDir) -> HarnessConfig {
    let mut config = HarnessConfig::default();
    config.api_root = api_root.to_string();
    config.volumes = VolumeConfig {
        code_dir: code.path().to_path_buf(),
        spdx_dir: spdx.path().to_path_buf(),
    };
    config
}

// ===== ad-hoc cases exercising the engine

fn engine_cases() -> Vec<CaseFn> {
    vec![
        |cx| Box::pin(widget_get_ok(cx)),
        |cx| Box::pin(widget_put_operator_ok(cx)),
        |cx| Box::pin(widget_put_denied_mismatch(cx)),
        |cx| Box::pin(widget_wrong_status(cx)),
        |cx| Box::pin(transport_error(cx)),
        |cx| Box::pin(redirect_not_followed(cx)),
        |cx| Box::pin(never_finalized(cx)),
    ]
}

async fn widget_get_ok(cx: CaseContext) -> TestResult {
    let mut res = TestResult::new("engine", "widgets/{id}", "GET (viewer)");
    // key order deliberately differs from the mock's response
    res.wanted = r#"{"name": "widget", "id": 1, "tags": ["a", "b"]}"#.to_string();
    let url = cx.url("/widgets/1");
    if cx
        .client
        .get(&mut res, "1", &url, StatusCode::OK, Role::Viewer)
        .await
        .is_err()
    {
        return res;
    }
    if !res.matches_wanted() {
        res.fail_match("2");
        return res;
    }
    res.pass();
    res
}

async fn widget_put_operator_ok(cx: CaseContext) -> TestResult {
    let mut res = TestResult::new("engine", "widgets/{id}", "PUT (operator)");
    res.wanted = String::new();
    let url = cx.url("/widgets/1");
    if cx
        .client
        .put(&mut res, "1", &url, r#"{"x": 1}"#, StatusCode::NO_CONTENT, Role::Operator)
        .await
        .is_err()
    {
        return res;
    }
    if !res.wanted_is_empty() {
        res.fail_match("2");
        return res;
    }
    res.pass();
    res
}

async fn widget_put_denied_mismatch(cx: CaseContext) -> TestResult {
    let mut res = TestResult::new("engine", "widgets/{id}", "PUT (viewer)");
    // the mock answers {"error": "Access denied"}, so the oracle must
    // report a mismatch
    res.wanted = r#"{"error": "No way"}"#.to_string();
    let url = cx.url("/widgets/1");
    if cx
        .client
        .put(&mut res, "1", &url, r#"{"x": 1}"#, StatusCode::FORBIDDEN, Role::Viewer)
        .await
        .is_err()
    {
        return res;
    }
    if !res.matches_wanted() {
        res.fail_match("2");
        return res;
    }
    res.pass();
    res
}

async fn widget_wrong_status(cx: CaseContext) -> TestResult {
    let mut res = TestResult::new("engine", "widgets/{id}", "GET (wrong status)");
    res.wanted = String::new();
    let url = cx.url("/widgets/1");
    if cx
        .client
        .get(&mut res, "1", &url, StatusCode::NO_CONTENT, Role::Viewer)
        .await
        .is_err()
    {
        return res;
    }
    res.pass();
    res
}

async fn transport_error(cx: CaseContext) -> TestResult {
    let mut res = TestResult::new("engine", "widgets/{id}", "GET (dead endpoint)");
    // nothing listens on the discard port; the case must record the
    // transport failure without touching the rest of the run
    if cx
        .client
        .get(
            &mut res,
            "1",
            "http://127.0.0.1:9/widgets/1",
            StatusCode::OK,
            Role::Viewer,
        )
        .await
        .is_err()
    {
        return res;
    }
    res.pass();
    res
}

async fn redirect_not_followed(cx: CaseContext) -> TestResult {
    let mut res = TestResult::new("engine", "redirect", "GET (no follow)");
    res.wanted = String::new();
    let url = cx.url("/redirect");
    if cx
        .client
        .get_no_follow(&mut res, "1", &url, StatusCode::FOUND, Role::Viewer)
        .await
        .is_err()
    {
        return res;
    }
    if !res.wanted_is_empty() {
        res.fail_match("2");
        return res;
    }
    res.pass();
    res
}

async fn never_finalized(cx: CaseContext) -> TestResult {
    // authoring-contract violation on purpose: no terminal marker
    let _ = cx;
    TestResult::new("engine", "widgets/{id}", "GET (unfinished)")
}

#[tokio::test]
async fn test_engine_end_to_end() {
    let (api_root, state) = mock_api::spawn().await;
    let code = TempDir::new().unwrap();
    let spdx = TempDir::new().unwrap();
    let config = harness_config(&api_root, &code, &spdx);

    // dirty the volume so the first reset has something to wipe
    fs::write(code.path().join("stale-checkout"), "x").unwrap();
    fs::create_dir(spdx.path().join("stale-output")).unwrap();

    let client = ApiClient::new(&config.http).unwrap();
    let run_report = runner::run(&client, &config, engine_cases()).await.unwrap();

    // every case was preceded by a full fixture reset
    assert_eq!(state.lock().unwrap().reset_count, 7);

    // the replay after the last reset arrived complete and in order
    let seeded = state.lock().unwrap().seeded.clone();
    assert_eq!(
        seeded,
        vec![
            "/users",
            "/users",
            "/users",
            "/users",
            "/projects",
            "/subprojects",
            "/repos",
            "/repos/1/branches",
            "/repos/1/branches/master",
            "/agents",
        ]
    );

    // volume directories survive but their contents do not
    assert_eq!(fs::read_dir(code.path()).unwrap().count(), 0);
    assert_eq!(fs::read_dir(spdx.path()).unwrap().count(), 0);

    // per-case outcomes
    let results = &run_report.results;
    assert_eq!(results.len(), 7);
    assert_eq!(results[0].outcome, Outcome::Pass);
    assert_eq!(results[1].outcome, Outcome::Pass);
    assert_eq!(
        results[2].outcome,
        Outcome::Fail {
            step: "2".to_string(),
            error: None,
        }
    );
    match &results[3].outcome {
        Outcome::Fail { step, error } => {
            assert_eq!(step, "1");
            let error = error.as_ref().unwrap();
            assert!(error.contains("204"), "unexpected error: {}", error);
            assert!(error.contains("200"), "unexpected error: {}", error);
        }
        other => panic!("expected status-mismatch failure, got {:?}", other),
    }
    // the body stays populated for mismatch diagnostics
    assert!(!results[3].got.is_empty());
    match &results[4].outcome {
        Outcome::Fail { step, error } => {
            assert_eq!(step, "1");
            assert!(error.is_some());
        }
        other => panic!("expected transport failure, got {:?}", other),
    }
    // transport failure never reads a body
    assert!(results[4].got.is_empty());
    assert_eq!(results[5].outcome, Outcome::Pass);
    assert_eq!(results[6].outcome, Outcome::Unfinished);

    assert!(run_report.any_failed());

    // report rendering
    let summary = report::summary(&run_report);
    assert_eq!(summary.lines().count(), 7);
    assert!(summary.lines().next().unwrap().ends_with(" ok"));
    assert!(summary.lines().last().unwrap().ends_with(" FAIL"));

    let failures = report::failures(&run_report);
    assert!(failures.contains("engine:widgets/{id}:PUT (viewer)"));
    assert!(failures.contains(r#"    Wanted: {"error": "No way"}"#));
    assert!(failures.contains(r#"    Got:    {"error":"Access denied"}"#));
    assert!(failures.contains("terminal pass/fail marker"));
}

#[tokio::test]
async fn test_fixture_replay_is_idempotent() {
    let (api_root, state) = mock_api::spawn().await;
    let code = TempDir::new().unwrap();
    let spdx = TempDir::new().unwrap();
    let config = harness_config(&api_root, &code, &spdx);
    let client = ApiClient::new(&config.http).unwrap();

    functest_fixtures::reset(&client, &config).await.unwrap();
    let first = state.lock().unwrap().seeded.clone();

    functest_fixtures::reset(&client, &config).await.unwrap();
    let second = state.lock().unwrap().seeded.clone();

    // a reset between replays reproduces the identical baseline sequence,
    // so entity ids come out the same every time
    assert_eq!(first, second);
    assert_eq!(state.lock().unwrap().reset_count, 2);
}
