//! Prompt templates and localized strings for agent-rs
//!
//! This crate owns everything language-dependent in the report pipeline:
//!
//! - [`Language`]: the supported report languages and their tags
//! - [`ReportStrings`]: immutable per-language tables of section titles,
//!   group labels, badge labels and document chrome
//! - [`JinjaTemplate`]: MiniJinja-backed templates with one variant per language
//! - [`translation_prompt`]: the prompt used to translate analyst reports
//!
//! # Quick Start
//!
//! ```
//! use agent_prompt::{Language, PromptTemplate, ReportStrings, translation_prompt};
//! use serde_json::json;
//!
//! let lang = Language::from_code("zh_TW").unwrap();
//! let strings = ReportStrings::for_language(&lang);
//! assert_eq!(strings.sections.news, "新聞分析報告");
//!
//! let prompt = translation_prompt()
//!     .unwrap()
//!     .render(&lang, &json!({ "target_language": lang.translation_target(), "text": "Hello" }))
//!     .unwrap();
//! assert!(prompt.contains("Hello"));
//! ```

mod error;
mod jinja;
mod language;
mod prompts;
mod strings;
mod template;

// Re-export core types
pub use error::{PromptError, Result};
pub use jinja::{JinjaTemplate, JinjaTemplateBuilder};
pub use language::Language;
pub use prompts::{TRANSLATION_PROMPT, translation_prompt};
pub use strings::{BadgeLabels, GroupLabels, ReportStrings, SectionTitles};
pub use template::PromptTemplate;

/// Prelude module for convenient imports
pub mod prelude {
    pub use crate::error::{PromptError, Result};
    pub use crate::jinja::JinjaTemplate;
    pub use crate::language::Language;
    pub use crate::strings::ReportStrings;
    pub use crate::template::PromptTemplate;
}
