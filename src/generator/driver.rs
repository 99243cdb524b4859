// src/generator/driver.rs

use crate::client::{GenerateClient, RequestOutcome};
use crate::config::Config;
use crate::pacing::PacingPolicy;
use crate::workload::{GenerateRequest, Workload};
use anyhow::Result;
use tokio::time::sleep;
use tracing::{error, info, warn};

/// Drives the infinite request cycle: sample, send, classify, sleep, repeat.
/// Runs one request at a time; the loop itself is the only retry mechanism.
pub struct Generator {
    workload: Workload,
    client: GenerateClient,
    policy: PacingPolicy,
    model_version: String,
    shutdown_tx: tokio::sync::watch::Sender<bool>,
    shutdown_rx: tokio::sync::watch::Receiver<bool>,
}

impl Generator {
    pub fn new(config: &Config) -> Result<Self> {
        let (shutdown_tx, shutdown_rx) = tokio::sync::watch::channel(false);

        Ok(Self {
            workload: Workload::new(&config.workload),
            client: GenerateClient::new(&config.target)?,
            policy: PacingPolicy::new(&config.pacing),
            model_version: config.target.model_version.clone(),
            shutdown_tx,
            shutdown_rx,
        })
    }

    /// One full iteration: pick a user and prompt, send the request, log the
    /// result. Carries no state across calls.
    pub async fn run_once(&self) -> RequestOutcome {
        let (user, request) = {
            let mut rng = rand::thread_rng();
            let sample = self.workload.sample(&mut rng);
            (
                sample.user.to_string(),
                GenerateRequest::new(sample.prompt, &self.model_version),
            )
        };

        info!("[{}] Sending request...", user);

        let outcome = self.client.send(&request).await;

        match &outcome {
            RequestOutcome::Success { status } => {
                info!("✅ [{}] Success: {}", user, status.as_u16());
            }
            RequestOutcome::RateLimited => {
                warn!(
                    "⚠️ [{}] Rate Limited (429). Cooling down for {} seconds...",
                    user,
                    self.policy.rate_limit().as_secs()
                );
            }
            RequestOutcome::Failed { status, body } => {
                error!("❌ [{}] Failed: {} - {}", user, status.as_u16(), body);
            }
            RequestOutcome::ConnectionError { message } => {
                error!("❌ Connection Error: {}", message);
            }
        }

        outcome
    }

    /// Loop forever, pacing each iteration by the outcome of the previous
    /// request. Exits only when `shutdown` is called.
    pub async fn run(&self) {
        let mut shutdown_rx = self.shutdown_rx.clone();

        loop {
            let outcome = self.run_once().await;
            let delay = self.policy.delay_for(&outcome);

            tokio::select! {
                _ = sleep(delay) => {}
                _ = shutdown_rx.changed() => {
                    if *shutdown_rx.borrow() {
                        info!("Traffic generator shutting down");
                        break;
                    }
                }
            }
        }
    }

    pub fn shutdown(&self) {
        let _ = self.shutdown_tx.send(true);
    }
}
