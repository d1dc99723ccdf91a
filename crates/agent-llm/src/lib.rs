//! LLM provider abstraction layer for agent-rs
//!
//! This crate provides provider-agnostic abstractions for plain-text
//! interactions with Large Language Models (LLMs). It includes:
//!
//! - Message types for LLM communication
//! - Completion request/response types
//! - Provider trait for LLM implementations
//! - An OpenAI-compatible provider (behind the `openai` feature)
//!
//! The report pipeline only ever exchanges text with a model (translation of
//! finished analyst reports), so there is no tool-calling or multi-modal
//! content here.

pub mod completion;
pub mod error;
pub mod messages;
pub mod provider;

// Re-export main types
pub use completion::{CompletionRequest, CompletionResponse, StopReason, TokenUsage};
pub use error::{LLMError, Result};
pub use messages::{Message, Role};
pub use provider::LLMProvider;

// Provider implementations (feature-gated)
#[cfg(feature = "openai")]
pub mod providers;
