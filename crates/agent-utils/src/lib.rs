//! Shared utilities for agent-rs
//!
//! This crate provides common functionality used across the agent-rs workspace:
//! tracing setup and small helpers for reading configuration from the
//! environment.

pub mod config;
pub mod logging;

pub use config::{env_string, parse_flag};
pub use logging::{init_tracing, init_tracing_with_default};
