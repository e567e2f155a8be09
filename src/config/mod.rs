//! Configuration module for the preprocessing pipeline
//!
//! This module provides the `PrepConfig` struct and its builder for choosing
//! which transforms run and how large an input the pipeline accepts.

// Sub-modules
pub mod builder;
pub mod getters;
pub mod types;

// Re-exports for public API
pub use builder::PrepConfigBuilder;
pub use types::{DEFAULT_MAX_INPUT_BYTES, PrepConfig};
