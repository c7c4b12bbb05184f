//! Core types, errors, config, and tracing for the speech network engine.

pub mod config;
pub mod errors;
pub mod tracing;
pub mod types;
