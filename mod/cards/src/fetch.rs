//! Upstream JSON fetch.
//!
//! The data source is whatever URL the caller hands us, so the client
//! here stays deliberately dumb: normalize the address, GET it with a
//! timeout and User-Agent, parse JSON, and classify every failure into
//! the service error taxonomy. Shape interpretation happens later in
//! the render layer.

use std::time::Duration;

use fleetcard_core::ServiceError;
use serde_json::Value;

/// Upstream client settings.
#[derive(Debug, Clone)]
pub struct FetchConfig {
    /// Whole-request deadline.
    pub timeout: Duration,
    /// User-Agent sent with every request.
    pub user_agent: String,
}

impl Default for FetchConfig {
    fn default() -> Self {
        Self {
            timeout: Duration::from_secs(5),
            user_agent: concat!("fleetcard/", env!("CARGO_PKG_VERSION")).to_string(),
        }
    }
}

/// HTTP client wrapper that maps transport failures onto
/// [`ServiceError`] kinds.
#[derive(Debug, Clone)]
pub struct Upstream {
    client: reqwest::Client,
}

impl Upstream {
    pub fn new(config: &FetchConfig) -> reqwest::Result<Self> {
        let client = reqwest::Client::builder()
            .timeout(config.timeout)
            .user_agent(&config.user_agent)
            .build()?;
        Ok(Self { client })
    }

    /// GET `url` and parse the body as JSON.
    pub async fn fetch_json(&self, url: &str) -> Result<Value, ServiceError> {
        let url = normalize_url(url);
        let response = self.client.get(&url).send().await.map_err(classify)?;
        let status = response.status();
        if !status.is_success() {
            return Err(ServiceError::BadStatus(status.as_u16()));
        }
        response
            .json::<Value>()
            .await
            .map_err(|err| ServiceError::BadPayload(format!("API响应不是有效的JSON: {err}")))
    }
}

/// Default scheme-less addresses to https.
pub fn normalize_url(url: &str) -> String {
    if url.starts_with("http") {
        url.to_string()
    } else {
        format!("https://{url}")
    }
}

/// Compose the summary endpoint from a base address and a device id.
pub fn summary_url(base: &str, device_id: &str) -> String {
    let base = normalize_url(base);
    format!("{}/ai/summary/{}", base.trim_end_matches('/'), device_id)
}

fn classify(err: reqwest::Error) -> ServiceError {
    if err.is_timeout() {
        ServiceError::Timeout
    } else {
        ServiceError::Unreachable(err.to_string())
    }
}
