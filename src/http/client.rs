//! Low-level HTTP client — `MidgardHttp`.
//!
//! Sub-clients in `domain/<name>/client.rs` build URLs and call [`MidgardHttp::get`].
//! Every response is checked for a 2xx status and a JSON content type before
//! it is decoded; anything else is an [`HttpError`].

use crate::error::HttpError;
use crate::http::retry::{RetryConfig, RetryPolicy};

use reqwest::header::CONTENT_TYPE;
use reqwest::Client;
use serde::de::DeserializeOwned;
use std::time::Duration;

/// Low-level HTTP client for the Midgard REST API. Read-only: no request
/// bodies, no auth headers.
#[derive(Clone)]
pub struct MidgardHttp {
    base_url: String,
    client: Client,
}

impl MidgardHttp {
    pub fn new(base_url: &str, timeout: Duration) -> Result<Self, HttpError> {
        let client = Client::builder()
            .timeout(timeout)
            .pool_max_idle_per_host(10)
            .build()?;

        Ok(Self {
            base_url: base_url.trim_end_matches('/').to_string(),
            client,
        })
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    pub(crate) async fn get<T: DeserializeOwned>(
        &self,
        url: &str,
        retry: RetryPolicy,
    ) -> Result<T, HttpError> {
        let config = match &retry {
            RetryPolicy::None => {
                return self.do_request(url).await;
            }
            RetryPolicy::Idempotent => RetryConfig::idempotent(),
            RetryPolicy::Custom(c) => c.clone(),
        };

        let mut last_error = None;

        for attempt in 0..=config.max_retries {
            match self.do_request::<T>(url).await {
                Ok(resp) => return Ok(resp),
                Err(e) => {
                    let should_retry = match &e {
                        HttpError::Upstream { status, .. } => {
                            config.retryable_statuses.contains(status)
                        }
                        HttpError::Network(re) => {
                            re.is_connect() || re.is_timeout() || re.is_request()
                        }
                        _ => false,
                    };

                    if should_retry && attempt < config.max_retries {
                        let delay = config.delay_for_attempt(attempt);
                        tracing::debug!(
                            attempt = attempt + 1,
                            max = config.max_retries,
                            delay_ms = delay.as_millis() as u64,
                            "Retrying request to {}",
                            url
                        );
                        futures_timer::Delay::new(delay).await;
                        last_error = Some(e);
                    } else {
                        return Err(e);
                    }
                }
            }
        }

        Err(HttpError::MaxRetriesExceeded {
            attempts: config.max_retries + 1,
            last_error: last_error
                .map(|e| e.to_string())
                .unwrap_or_else(|| "unknown".to_string()),
        })
    }

    async fn do_request<T: DeserializeOwned>(&self, url: &str) -> Result<T, HttpError> {
        tracing::debug!("GET {}", url);
        let resp = self.client.get(url).send().await?;
        let status = resp.status();

        if !status.is_success() {
            let body = resp.text().await.unwrap_or_default();
            return Err(HttpError::Upstream {
                status: status.as_u16(),
                body,
            });
        }

        let content_type = resp
            .headers()
            .get(CONTENT_TYPE)
            .and_then(|v| v.to_str().ok())
            .unwrap_or_default()
            .to_string();
        if !content_type.contains("application/json") {
            return Err(HttpError::Malformed(format!(
                "expected application/json, got {:?}",
                content_type
            )));
        }

        let body = resp.text().await?;
        serde_json::from_str(&body).map_err(|e| HttpError::Malformed(e.to_string()))
    }
}
