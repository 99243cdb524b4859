// src/workload/scenario.rs

use crate::config::WorkloadConfig;
use rand::Rng;

/// The fixed cast of users and prompts. Read-only after construction; each
/// draw is independent of every prior draw.
#[derive(Debug, Clone)]
pub struct Workload {
    users: Vec<String>,
    prompts: Vec<String>,
}

/// One user/prompt pairing for a single request.
#[derive(Debug, Clone, Copy)]
pub struct Sample<'a> {
    pub user: &'a str,
    pub prompt: &'a str,
}

impl Workload {
    /// Lists are validated non-empty by `Config::validate` before this runs.
    pub fn new(config: &WorkloadConfig) -> Self {
        Self {
            users: config.users.clone(),
            prompts: config.prompts.clone(),
        }
    }

    /// Draw a user and a prompt, each uniformly and independently.
    pub fn sample<R: Rng + ?Sized>(&self, rng: &mut R) -> Sample<'_> {
        Sample {
            user: &self.users[rng.gen_range(0..self.users.len())],
            prompt: &self.prompts[rng.gen_range(0..self.prompts.len())],
        }
    }

    pub fn users(&self) -> &[String] {
        &self.users
    }

    pub fn prompts(&self) -> &[String] {
        &self.prompts
    }
}
