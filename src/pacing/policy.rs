// src/pacing/policy.rs

use crate::client::RequestOutcome;
use crate::config::PacingConfig;
use std::time::Duration;

/// Status-to-delay mapping as an enumerated policy rather than inline
/// branching: every outcome selects exactly one delay.
#[derive(Debug, Clone)]
pub struct PacingPolicy {
    success: Duration,
    rate_limit: Duration,
    failure: Duration,
}

impl PacingPolicy {
    pub fn new(config: &PacingConfig) -> Self {
        Self {
            success: config.success(),
            rate_limit: config.rate_limit(),
            failure: config.failure(),
        }
    }

    pub fn delay_for(&self, outcome: &RequestOutcome) -> Duration {
        match outcome {
            RequestOutcome::Success { .. } => self.success,
            RequestOutcome::RateLimited => self.rate_limit,
            RequestOutcome::Failed { .. } | RequestOutcome::ConnectionError { .. } => {
                self.failure
            }
        }
    }

    pub fn rate_limit(&self) -> Duration {
        self.rate_limit
    }
}
