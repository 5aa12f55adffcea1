use std::time::Duration;

use serde_json::{json, Value};

use super::decode::decode_body;
use super::poller::PresenceSource;
use super::PresenceState;
use crate::error::{PortfolioError, PortfolioResult};

/// `{"userIds": [id]}`
pub fn presence_request_body(user_ids: &[u64]) -> Value {
    json!({ "userIds": user_ids })
}

/// POST `body` to each endpoint in turn and return the first 2xx JSON reply.
///
/// Each attempt is bounded by `timeout`; a timeout counts as a failure. The
/// error of the last attempt is returned when every endpoint fails.
pub async fn fetch_first_ok(
    http: &reqwest::Client,
    endpoints: &[String],
    body: &Value,
    timeout: Duration,
) -> PortfolioResult<Value> {
    let mut last_err = PortfolioError::NotConfigured("no presence endpoints".to_string());
    for endpoint in endpoints {
        match post_json(http, endpoint, body, timeout).await {
            Ok(value) => return Ok(value),
            Err(e) => {
                tracing::warn!(endpoint = %endpoint, error = %e, "presence endpoint failed");
                last_err = e;
            }
        }
    }
    Err(last_err)
}

async fn post_json(
    http: &reqwest::Client,
    url: &str,
    body: &Value,
    timeout: Duration,
) -> PortfolioResult<Value> {
    let response = http
        .post(url)
        .json(body)
        .timeout(timeout)
        .send()
        .await
        .map_err(|e| {
            if e.is_timeout() {
                PortfolioError::Timeout(timeout.as_millis() as u64)
            } else {
                PortfolioError::from(e)
            }
        })?;

    let status = response.status();
    if !status.is_success() {
        let message = response.text().await.unwrap_or_default();
        return Err(PortfolioError::Upstream {
            status: status.as_u16(),
            message,
        });
    }
    Ok(response.json::<Value>().await?)
}

/// Presence lookups over HTTP with a primary/fallback endpoint chain.
#[derive(Debug, Clone)]
pub struct PresenceClient {
    http: reqwest::Client,
    endpoints: Vec<String>,
    timeout: Duration,
}

impl PresenceClient {
    pub fn new(http: reqwest::Client, endpoints: Vec<String>, timeout: Duration) -> Self {
        Self {
            http,
            endpoints,
            timeout,
        }
    }

    pub fn endpoints(&self) -> &[String] {
        &self.endpoints
    }

    /// Never fails: every error resolves to Offline.
    pub async fn fetch(&self, subject_id: u64) -> PresenceState {
        let body = presence_request_body(&[subject_id]);
        match fetch_first_ok(&self.http, &self.endpoints, &body, self.timeout).await {
            Ok(reply) => {
                let state = decode_body(&reply);
                tracing::debug!(subject_id, ?state, "presence resolved");
                state
            }
            Err(e) => {
                tracing::debug!(subject_id, error = %e, "presence unavailable, showing offline");
                PresenceState::Offline
            }
        }
    }
}

impl PresenceSource for PresenceClient {
    fn poll(&self, subject_id: u64) -> impl std::future::Future<Output = PresenceState> + Send {
        self.fetch(subject_id)
    }
}
