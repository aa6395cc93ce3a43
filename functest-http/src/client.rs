//! HTTP assertion client implementation

use crate::errors::HttpError;
use crate::roles::Role;
use functest_config::HttpClientConfig;
use functest_result::TestResult;
use reqwest::{header::CONTENT_TYPE, Client, RequestBuilder, StatusCode};
use tracing::{debug, warn};

/// Client for the request/assertion protocol shared by every test case.
///
/// Each operation builds the request, attaches the role credential,
/// executes it, reads the full response body (releasing the connection on
/// every path, including mismatches), records the raw body into the
/// result's `got`, and asserts the status code. Transport failures and
/// status mismatches finalize the result and return an error so the case
/// body can bail out; on success the case separately consults the oracle.
#[derive(Debug, Clone)]
pub struct ApiClient {
    /// Client with the default redirect policy
    follow: Client,
    /// Client that treats a redirect response as the captured result
    no_follow: Client,
}

impl ApiClient {
    /// Build the underlying clients from the harness HTTP configuration
    pub fn new(config: &HttpClientConfig) -> Result<Self, HttpError> {
        debug!(
            "Creating ApiClient with timeout: {}s",
            config.timeout().as_secs()
        );
        let follow = Client::builder()
            .timeout(config.timeout())
            .user_agent(&config.user_agent)
            .build()?;
        let no_follow = Client::builder()
            .timeout(config.timeout())
            .user_agent(&config.user_agent)
            .redirect(reqwest::redirect::Policy::none())
            .build()?;
        Ok(Self { follow, no_follow })
    }

    /// HTTP GET, asserting `expected` and capturing the body
    pub async fn get(
        &self,
        res: &mut TestResult,
        step: &str,
        url: &str,
        expected: StatusCode,
        role: Role,
    ) -> Result<(), HttpError> {
        debug!("GET {} as {} (step {})", url, role, step);
        self.execute(res, step, self.follow.get(url), expected, role)
            .await
    }

    /// HTTP GET that does not follow redirects; the redirect response
    /// itself is the captured result
    pub async fn get_no_follow(
        &self,
        res: &mut TestResult,
        step: &str,
        url: &str,
        expected: StatusCode,
        role: Role,
    ) -> Result<(), HttpError> {
        debug!("GET (no redirects) {} as {} (step {})", url, role, step);
        self.execute(res, step, self.no_follow.get(url), expected, role)
            .await
    }

    /// HTTP POST with a JSON body, asserting `expected` and capturing the
    /// response body
    pub async fn post(
        &self,
        res: &mut TestResult,
        step: &str,
        url: &str,
        body: &str,
        expected: StatusCode,
        role: Role,
    ) -> Result<(), HttpError> {
        debug!("POST {} as {} (step {})", url, role, step);
        let req = self
            .follow
            .post(url)
            .header(CONTENT_TYPE, "application/json")
            .body(body.to_string());
        self.execute(res, step, req, expected, role).await
    }

    /// HTTP PUT with a JSON body, asserting `expected` and capturing the
    /// response body
    pub async fn put(
        &self,
        res: &mut TestResult,
        step: &str,
        url: &str,
        body: &str,
        expected: StatusCode,
        role: Role,
    ) -> Result<(), HttpError> {
        debug!("PUT {} as {} (step {})", url, role, step);
        let req = self
            .follow
            .put(url)
            .header(CONTENT_TYPE, "application/json")
            .body(body.to_string());
        self.execute(res, step, req, expected, role).await
    }

    /// HTTP DELETE, asserting `expected` and capturing the body
    pub async fn delete(
        &self,
        res: &mut TestResult,
        step: &str,
        url: &str,
        expected: StatusCode,
        role: Role,
    ) -> Result<(), HttpError> {
        debug!("DELETE {} as {} (step {})", url, role, step);
        self.execute(res, step, self.follow.delete(url), expected, role)
            .await
    }

    /// Fixture-setup POST: same request/response mechanics, but no
    /// TestResult is threaded and the body is read and discarded. A status
    /// mismatch is returned to the caller, which aborts setup entirely.
    pub async fn post_setup(
        &self,
        url: &str,
        body: &str,
        expected: StatusCode,
        role: Role,
    ) -> Result<(), HttpError> {
        debug!("POST (setup) {} as {}", url, role);
        let mut req = self
            .follow
            .post(url)
            .header(CONTENT_TYPE, "application/json")
            .body(body.to_string());
        if let Some(token) = role.token() {
            req = req.bearer_auth(token);
        }

        let resp = req.send().await?;
        let status = resp.status();
        // read fully so the connection is released even on mismatch
        let got = resp.bytes().await?;

        if status != expected {
            warn!(
                "fixture setup POST {} answered {} (body: {})",
                url,
                status,
                String::from_utf8_lossy(&got)
            );
            return Err(HttpError::UnexpectedStatus {
                wanted: expected,
                got: status,
            });
        }
        Ok(())
    }

    /// Shared request execution: attach the credential, send, capture the
    /// body, assert the status code. Failures finalize `res` at `step`.
    async fn execute(
        &self,
        res: &mut TestResult,
        step: &str,
        mut req: RequestBuilder,
        expected: StatusCode,
        role: Role,
    ) -> Result<(), HttpError> {
        if let Some(token) = role.token() {
            req = req.bearer_auth(token);
        }

        let resp = match req.send().await {
            Ok(resp) => resp,
            Err(err) => {
                res.fail_step(step, &err);
                return Err(err.into());
            }
        };

        let status = resp.status();
        // read the full body before the status check so the connection is
        // released and `got` is populated for mismatch diagnostics
        let got = match resp.bytes().await {
            Ok(bytes) => bytes,
            Err(err) => {
                res.fail_step(step, &err);
                return Err(err.into());
            }
        };
        res.got = got.to_vec();

        if status != expected {
            let err = HttpError::UnexpectedStatus {
                wanted: expected,
                got: status,
            };
            res.fail_step(step, &err);
            return Err(err);
        }

        debug!("{} answered {} as expected", step, status.as_u16());
        Ok(())
    }
}
