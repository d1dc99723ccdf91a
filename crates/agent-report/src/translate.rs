//! Translation gateway
//!
//! Decides whether a section goes to the LLM at all and turns every backend
//! failure into a [`Translation::Fallback`] carrying the original text. Nothing
//! here returns an error once the gateway is built.

use crate::error::Result;
use agent_llm::{CompletionRequest, LLMError, LLMProvider, Message, StopReason};
use agent_prompt::{JinjaTemplate, Language, PromptError, PromptTemplate, translation_prompt};
use serde_json::json;
use std::fmt;
use std::sync::Arc;
use thiserror::Error;
use tracing::{debug, warn};

/// Texts shorter than this many characters, after trimming, are not sent
pub const MIN_TRANSLATABLE_CHARS: usize = 10;

/// Why a text was returned untranslated without contacting the backend
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SkipReason {
    /// Target and source language are the same
    SameLanguage,
    /// No backend configured
    NoBackend,
    /// Shorter than [`MIN_TRANSLATABLE_CHARS`]
    TooShort,
}

impl fmt::Display for SkipReason {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            SkipReason::SameLanguage => "target language equals source language",
            SkipReason::NoBackend => "no translation backend configured",
            SkipReason::TooShort => "text too short",
        })
    }
}

/// Why a translation attempt was rejected
#[derive(Debug, Error)]
pub enum TranslationError {
    /// The translation prompt failed to render
    #[error("prompt error: {0}")]
    Prompt(#[from] PromptError),

    /// The provider call failed
    #[error("backend error: {0}")]
    Backend(#[from] LLMError),

    /// The provider answered with no text
    #[error("backend returned an empty translation")]
    EmptyResponse,

    /// The provider stopped at the token limit, so the text is incomplete
    #[error("translation truncated at max_tokens ({max_tokens})")]
    Truncated { max_tokens: usize },
}

/// Result of one translation attempt
///
/// Every variant carries text that is safe to render.
#[derive(Debug)]
pub enum Translation {
    Translated(String),
    Skipped { text: String, reason: SkipReason },
    /// The backend failed; `text` is the original input
    Fallback {
        text: String,
        error: TranslationError,
    },
}

impl Translation {
    pub fn text(&self) -> &str {
        match self {
            Translation::Translated(text)
            | Translation::Skipped { text, .. }
            | Translation::Fallback { text, .. } => text,
        }
    }

    pub fn into_text(self) -> String {
        match self {
            Translation::Translated(text)
            | Translation::Skipped { text, .. }
            | Translation::Fallback { text, .. } => text,
        }
    }

    /// True when a translation was attempted and failed
    pub fn is_degraded(&self) -> bool {
        matches!(self, Translation::Fallback { .. })
    }
}

/// LLM provider plus the request settings used for translation
#[derive(Clone)]
pub struct TranslationBackend {
    pub provider: Arc<dyn LLMProvider>,
    pub model: String,
    pub max_tokens: usize,
    pub temperature: Option<f32>,
}

impl TranslationBackend {
    pub fn new(provider: Arc<dyn LLMProvider>, model: impl Into<String>) -> Self {
        Self {
            provider,
            model: model.into(),
            max_tokens: 4096,
            temperature: None,
        }
    }

    pub fn with_max_tokens(mut self, max_tokens: usize) -> Self {
        self.max_tokens = max_tokens;
        self
    }

    pub fn with_temperature(mut self, temperature: f32) -> Self {
        self.temperature = Some(temperature);
        self
    }
}

/// Translates section text from `source` into `target`
pub struct TranslationGateway {
    source: Language,
    target: Language,
    backend: Option<TranslationBackend>,
    prompt: JinjaTemplate,
}

impl TranslationGateway {
    pub fn new(
        source: Language,
        target: Language,
        backend: Option<TranslationBackend>,
    ) -> Result<Self> {
        Ok(Self {
            source,
            target,
            backend,
            prompt: translation_prompt()?,
        })
    }

    pub fn target(&self) -> Language {
        self.target
    }

    /// Whether any text at all could reach the backend
    pub fn is_active(&self) -> bool {
        self.source != self.target && self.backend.is_some()
    }

    /// Reason `text` would be skipped, if any
    pub fn skip_reason(&self, text: &str) -> Option<SkipReason> {
        if self.source == self.target {
            Some(SkipReason::SameLanguage)
        } else if self.backend.is_none() {
            Some(SkipReason::NoBackend)
        } else if text.trim().chars().count() < MIN_TRANSLATABLE_CHARS {
            Some(SkipReason::TooShort)
        } else {
            None
        }
    }

    /// Translate `text`, never failing
    pub async fn translate(&self, text: &str) -> Translation {
        if let Some(reason) = self.skip_reason(text) {
            debug!("Skipping translation: {}", reason);
            return Translation::Skipped {
                text: text.to_string(),
                reason,
            };
        }

        let Some(backend) = &self.backend else {
            return Translation::Skipped {
                text: text.to_string(),
                reason: SkipReason::NoBackend,
            };
        };

        match self.request_translation(backend, text).await {
            Ok(translated) => Translation::Translated(translated),
            Err(error) => {
                warn!("Translation to {} failed, keeping original text: {}", self.target, error);
                Translation::Fallback {
                    text: text.to_string(),
                    error,
                }
            }
        }
    }

    async fn request_translation(
        &self,
        backend: &TranslationBackend,
        text: &str,
    ) -> std::result::Result<String, TranslationError> {
        let vars = json!({
            "target_language": self.target.translation_target(),
            "text": text,
        });
        let prompt = self.prompt.render_with_fallback(&self.target, &vars)?;

        let mut request = CompletionRequest::builder(&backend.model)
            .add_message(Message::user(prompt))
            .max_tokens(backend.max_tokens);
        if let Some(temperature) = backend.temperature {
            request = request.temperature(temperature);
        }

        let response = backend.provider.complete(request.build()).await?;

        if response.stop_reason == StopReason::MaxTokens {
            return Err(TranslationError::Truncated {
                max_tokens: backend.max_tokens,
            });
        }

        match response.text() {
            "" => Err(TranslationError::EmptyResponse),
            translated => Ok(translated.to_string()),
        }
    }
}
