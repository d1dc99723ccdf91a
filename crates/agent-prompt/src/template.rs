//! Core prompt template trait
//!
//! This module defines the [`PromptTemplate`] trait that all template implementations must follow.

use crate::{Language, PromptError, Result};

/// Core trait for prompt templates
///
/// Implementations of this trait provide multi-language prompt templating capabilities.
/// Templates can be rendered with variables and support fallback to a default language
/// when the requested language is not available.
///
/// This trait is dyn-compatible, using `serde_json::Value` for variables instead of generics.
pub trait PromptTemplate: Send + Sync {
    /// Get the template name/identifier
    fn name(&self) -> &str;

    /// Get available languages, in `Language` order
    fn languages(&self) -> Vec<Language>;

    /// Check if a language is supported
    fn supports_language(&self, lang: &Language) -> bool {
        self.languages().contains(lang)
    }

    /// Render the template with variables for a specific language
    ///
    /// Returns an error if the language is not supported or rendering fails.
    fn render(&self, lang: &Language, vars: &serde_json::Value) -> Result<String>;

    /// Render with fallback to default language
    ///
    /// If the requested language is not available:
    /// 1. Try English as fallback
    /// 2. If English not available, use the first available language
    /// 3. If no languages available, return error
    fn render_with_fallback(&self, lang: &Language, vars: &serde_json::Value) -> Result<String> {
        if self.supports_language(lang) {
            return self.render(lang, vars);
        }

        let fallback = self
            .default_language()
            .ok_or_else(|| PromptError::NoLanguageAvailable(self.name().to_string()))?;

        self.render(&fallback, vars)
    }

    /// Get raw template string for a language (for debugging/inspection)
    fn raw_template(&self, lang: &Language) -> Option<&str>;

    /// English if available, otherwise the first available language
    fn default_language(&self) -> Option<Language> {
        let langs = self.languages();
        if langs.contains(&Language::English) {
            Some(Language::English)
        } else {
            langs.into_iter().next()
        }
    }
}
