//! HTML investment reports for agent-rs
//!
//! Turns the seven analyst sections produced by a trading-agents run into one
//! standalone HTML document:
//!
//! - [`ContentFormatter`]: converts a Markdown subset (headings, emphasis,
//!   lists, pipe tables, paragraphs) into styled HTML fragments
//! - [`TranslationGateway`]: optionally translates each section through an
//!   [`agent_llm::LLMProvider`], falling back to the original text on failure
//! - [`DocumentAssembler`]: renders the full document with embedded styling
//! - [`ReportGenerator`]: runs the pipeline and writes the file
//!
//! # Quick Start
//!
//! ```no_run
//! use agent_report::{ReportBundle, ReportConfig, ReportGenerator, ReportRequest, SectionKey, parse_date};
//!
//! #[tokio::main]
//! async fn main() -> agent_report::Result<()> {
//!     let bundle = ReportBundle::new()
//!         .with(SectionKey::Market, "## Trend\nPrices rose **3%** this week.")
//!         .with(SectionKey::FinalDecision, "Final call: **BUY**");
//!
//!     let request = ReportRequest::new("SPY", parse_date("2025-06-02")?, bundle)?;
//!     let generator = ReportGenerator::new(ReportConfig::from_env())?;
//!     let path = generator.generate(&request, "index.html").await?;
//!     println!("{}", path.display());
//!     Ok(())
//! }
//! ```

pub mod assembler;
pub mod bundle;
pub mod config;
pub mod error;
pub mod formatter;
pub mod generator;
pub mod translate;

pub use assembler::{DocumentAssembler, DocumentMeta, RenderedSection, SectionGroup};
pub use bundle::{ReportBundle, SectionKey, TeamGroup};
pub use config::{ReportConfig, ReportConfigBuilder, TranslationConfig};
pub use error::{ReportError, Result};
pub use formatter::{ContentFormatter, MarkdownBlock, format_content};
pub use generator::{ReportGenerator, ReportRequest, parse_date};
pub use translate::{
    MIN_TRANSLATABLE_CHARS, SkipReason, Translation, TranslationBackend, TranslationError,
    TranslationGateway,
};

// Re-export the language model so callers need not depend on agent-prompt
pub use agent_prompt::{Language, ReportStrings};
