// src/client/generate.rs

use super::RequestOutcome;
use crate::config::TargetConfig;
use crate::workload::GenerateRequest;
use anyhow::Result;
use reqwest::{Client, StatusCode};
use url::Url;

const BODY_SNIPPET_CHARS: usize = 100;

/// HTTP client for the generation endpoint. One POST per call, one call in
/// flight at a time; every failure mode is absorbed into a `RequestOutcome`.
pub struct GenerateClient {
    client: Client,
    url: Url,
}

impl GenerateClient {
    pub fn new(target: &TargetConfig) -> Result<Self> {
        let mut builder = Client::builder();
        if let Some(timeout) = target.timeout() {
            builder = builder.timeout(timeout);
        }

        Ok(Self {
            client: builder.build()?,
            url: target.url.clone(),
        })
    }

    /// Send one generation request and classify the result. Never returns
    /// an error; transport failures become `ConnectionError`.
    pub async fn send(&self, request: &GenerateRequest) -> RequestOutcome {
        let result = self
            .client
            .post(self.url.clone())
            .json(request)
            .send()
            .await;

        match result {
            Ok(response) => {
                let status = response.status();
                match status {
                    StatusCode::OK => RequestOutcome::Success { status },
                    StatusCode::TOO_MANY_REQUESTS => RequestOutcome::RateLimited,
                    _ => {
                        // Body read failures collapse to an empty snippet;
                        // the status is what matters on this path.
                        let body = response.text().await.unwrap_or_default();
                        RequestOutcome::Failed {
                            status,
                            body: truncate_chars(&body, BODY_SNIPPET_CHARS),
                        }
                    }
                }
            }
            Err(e) => RequestOutcome::ConnectionError {
                message: e.to_string(),
            },
        }
    }
}

/// Character-based truncation so multi-byte responses never split a char.
fn truncate_chars(text: &str, limit: usize) -> String {
    text.chars().take(limit).collect()
}
