// src/config/models.rs

use serde::Deserialize;
use std::time::Duration;
use url::Url;

pub const DEFAULT_TARGET_URL: &str = "http://localhost:3000/api/ai/generate";
pub const DEFAULT_MODEL_VERSION: &str = "gemini-2.0-flash";

#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("User list must not be empty")]
    EmptyUsers,

    #[error("Prompt list must not be empty")]
    EmptyPrompts,

    #[error("Pacing interval '{0}' must be greater than zero")]
    ZeroInterval(&'static str),

    #[error("Target URL must use http or https, got '{0}'")]
    UnsupportedScheme(String),
}

#[derive(Debug, Clone, Deserialize, Default)]
#[serde(default, deny_unknown_fields)]
pub struct Config {
    pub target: TargetConfig,
    pub workload: WorkloadConfig,
    pub pacing: PacingConfig,
}

impl Config {
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.workload.users.is_empty() {
            return Err(ConfigError::EmptyUsers);
        }
        if self.workload.prompts.is_empty() {
            return Err(ConfigError::EmptyPrompts);
        }
        if self.pacing.success_secs == 0 {
            return Err(ConfigError::ZeroInterval("success_secs"));
        }
        if self.pacing.rate_limit_secs == 0 {
            return Err(ConfigError::ZeroInterval("rate_limit_secs"));
        }
        if self.pacing.failure_secs == 0 {
            return Err(ConfigError::ZeroInterval("failure_secs"));
        }
        match self.target.url.scheme() {
            "http" | "https" => Ok(()),
            other => Err(ConfigError::UnsupportedScheme(other.to_string())),
        }
    }
}

#[derive(Debug, Clone, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct TargetConfig {
    pub url: Url,
    pub model_version: String,
    /// No timeout by default: a hung endpoint blocks the loop, matching the
    /// original behavior. Set this to bound each request.
    pub timeout_secs: Option<u64>,
}

impl Default for TargetConfig {
    fn default() -> Self {
        Self {
            url: Url::parse(DEFAULT_TARGET_URL).expect("default target URL is valid"),
            model_version: DEFAULT_MODEL_VERSION.to_string(),
            timeout_secs: None,
        }
    }
}

impl TargetConfig {
    pub fn timeout(&self) -> Option<Duration> {
        self.timeout_secs.map(Duration::from_secs)
    }
}

#[derive(Debug, Clone, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct WorkloadConfig {
    pub users: Vec<String>,
    pub prompts: Vec<String>,
}

impl Default for WorkloadConfig {
    fn default() -> Self {
        Self {
            users: ["User 1", "User 2", "User 3"]
                .into_iter()
                .map(String::from)
                .collect(),
            prompts: [
                "Explain quantum computing in one sentence.",
                "What is the capital of France?",
                "Write a haiku about coding.",
                "Why is the sky blue?",
                "Define 'Observability' in software.",
                "What is a 429 error?",
                "Tell me a joke.",
                "How does a neural network work?",
            ]
            .into_iter()
            .map(String::from)
            .collect(),
        }
    }
}

#[derive(Debug, Clone, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct PacingConfig {
    /// Delay after a 200, respecting the provider's free tier.
    pub success_secs: u64,
    /// Cooldown after a 429.
    pub rate_limit_secs: u64,
    /// Backoff after any other status or a transport failure.
    pub failure_secs: u64,
}

impl Default for PacingConfig {
    fn default() -> Self {
        Self {
            success_secs: 10,
            rate_limit_secs: 30,
            failure_secs: 5,
        }
    }
}

impl PacingConfig {
    pub fn success(&self) -> Duration {
        Duration::from_secs(self.success_secs)
    }

    pub fn rate_limit(&self) -> Duration {
        Duration::from_secs(self.rate_limit_secs)
    }

    pub fn failure(&self) -> Duration {
        Duration::from_secs(self.failure_secs)
    }
}
