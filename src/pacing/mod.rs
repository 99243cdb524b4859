// src/pacing/mod.rs
mod policy;

pub use policy::PacingPolicy;
