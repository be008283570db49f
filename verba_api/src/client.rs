//! HTTP client for the transparency portal.

use std::time::Duration;

use crate::{user_agent::get_user_agent, Error};

/// Default per-request timeout. The portal can take the better part of a
/// minute to render a month's worth of reports.
pub const DEFAULT_TIMEOUT: Duration = Duration::from_secs(60);

/// HTTP client for the transparency portal.
///
/// Sends requests with browser-like headers and a randomized user agent.
/// Each request builds a fresh `reqwest::Client` so the user agent rotates
/// per request.
pub struct Client {
    /// Base URL of the portal, without a trailing slash.
    base_url: String,
    timeout: Duration,
}

impl Client {
    /// Creates a client for the given portal base URL with the default
    /// 60-second timeout.
    pub fn new(base_url: &str) -> Self {
        Self::with_timeout(base_url, DEFAULT_TIMEOUT)
    }

    /// Creates a client with a custom per-request timeout. Also used by
    /// tests to force quick timeout failures against wiremock.
    pub fn with_timeout(base_url: &str, timeout: Duration) -> Self {
        Self {
            base_url: base_url.trim_end_matches('/').to_string(),
            timeout,
        }
    }

    /// Fetches `path` with a GET request and returns the response body.
    pub async fn get(&self, path: &str) -> Result<String, Error> {
        let req = self.http()?.get(self.url(path));
        self.send(req).await
    }

    /// Submits `form` to `path` as an urlencoded POST and returns the
    /// response body.
    pub async fn post_form(&self, path: &str, form: &[(String, String)]) -> Result<String, Error> {
        let req = self.http()?.post(self.url(path)).form(form);
        self.send(req).await
    }

    fn url(&self, path: &str) -> String {
        format!("{}{}", self.base_url, path)
    }

    fn http(&self) -> Result<reqwest::Client, Error> {
        reqwest::Client::builder()
            .user_agent(get_user_agent())
            .timeout(self.timeout)
            .build()
            .map_err(|e| {
                tracing::error!("failed to build HTTP client: {}", e);
                Error::from(e)
            })
    }

    async fn send(&self, req: reqwest::RequestBuilder) -> Result<String, Error> {
        let resp = req
            .header("accept", "text/html,application/xhtml+xml")
            .header("accept-language", "pt-BR,pt;q=0.9,en;q=0.8")
            .header("cache-control", "no-cache")
            .send()
            .await?;

        let status = resp.status();
        let body = resp.text().await?;

        if !status.is_success() {
            let snippet = truncate_body(&body);
            tracing::error!("request failed with status {}: {}", status, snippet);
            return Err(Error::HttpStatus {
                status: status.as_u16(),
                body: snippet,
            });
        }

        Ok(body)
    }
}

fn truncate_body(body: &str) -> String {
    const MAX: usize = 2000;
    if body.len() <= MAX {
        body.to_string()
    } else {
        format!("{}...[truncated]", &body[..MAX])
    }
}
