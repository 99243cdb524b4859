// src/workload/mod.rs
mod payload;
mod scenario;

pub use payload::GenerateRequest;
pub use scenario::{Sample, Workload};
