// src/client/outcome.rs

use reqwest::StatusCode;

/// Everything a single request can resolve to. This is the whole error
/// taxonomy: no variant is fatal, each one just selects a delay.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RequestOutcome {
    /// HTTP 200.
    Success { status: StatusCode },

    /// HTTP 429; the endpoint asked us to back off.
    RateLimited,

    /// Any other status. `body` holds at most the first 100 characters of
    /// the response text.
    Failed { status: StatusCode, body: String },

    /// Transport-level failure: connection refused, DNS, timeout.
    ConnectionError { message: String },
}

impl RequestOutcome {
    pub fn is_success(&self) -> bool {
        matches!(self, RequestOutcome::Success { .. })
    }
}
