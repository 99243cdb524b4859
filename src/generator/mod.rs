// src/generator/mod.rs
mod driver;

pub use driver::Generator;
