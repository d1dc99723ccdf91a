//! Error types for report generation

use thiserror::Error;

/// Errors that can stop a report from being produced
///
/// Formatting never fails and translation failures are recovered inside the
/// gateway, so none of these originate from section content.
#[derive(Debug, Error)]
pub enum ReportError {
    /// Output could not be written
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// The document template failed to render
    #[error("Template error: {0}")]
    Template(#[from] minijinja::Error),

    /// Invalid configuration
    #[error("Configuration error: {0}")]
    Config(String),

    /// Bad ticker, date or other request field
    #[error("Invalid input: {0}")]
    InvalidInput(String),

    /// Bundle JSON could not be parsed
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// Prompt template or language error
    #[error("Prompt error: {0}")]
    Prompt(#[from] agent_prompt::PromptError),

    /// LLM provider could not be constructed
    #[error("LLM error: {0}")]
    Llm(#[from] agent_llm::LLMError),
}

/// Result type for report operations
pub type Result<T> = std::result::Result<T, ReportError>;
