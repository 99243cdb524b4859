// src/client/mod.rs
mod generate;
mod outcome;

pub use generate::GenerateClient;
pub use outcome::RequestOutcome;
