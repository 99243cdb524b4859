// src/lib.rs
pub mod config;
pub mod workload;
pub mod client;
pub mod pacing;
pub mod generator;
