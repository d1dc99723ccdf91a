//! Configuration for report generation

use crate::error::{ReportError, Result};
use agent_prompt::Language;
use agent_utils::{env_string, parse_flag};
use tracing::warn;

pub const DEFAULT_API_BASE: &str = "https://api.openai.com/v1";
pub const DEFAULT_MODEL: &str = "gpt-4o-mini";

/// Settings for the OpenAI-compatible translation backend
#[derive(Debug, Clone, PartialEq)]
pub struct TranslationConfig {
    /// Chat-completions base URL
    pub api_base: String,

    /// API key, may be empty for local servers
    pub api_key: String,

    /// Model used for translation
    pub model: String,

    /// Request timeout in seconds
    pub timeout_secs: u64,

    /// Maximum tokens per translated section
    pub max_tokens: usize,

    /// Sampling temperature; provider default when `None`
    pub temperature: Option<f32>,
}

impl Default for TranslationConfig {
    fn default() -> Self {
        Self {
            api_base: DEFAULT_API_BASE.to_string(),
            api_key: String::new(),
            model: DEFAULT_MODEL.to_string(),
            timeout_secs: 180,
            max_tokens: 4096,
            temperature: None,
        }
    }
}

impl TranslationConfig {
    pub fn new(api_key: impl Into<String>) -> Self {
        Self {
            api_key: api_key.into(),
            ..Self::default()
        }
    }

    pub fn with_api_base(mut self, api_base: impl Into<String>) -> Self {
        self.api_base = api_base.into();
        self
    }

    pub fn with_model(mut self, model: impl Into<String>) -> Self {
        self.model = model.into();
        self
    }
}

/// Configuration for [`crate::ReportGenerator`]
#[derive(Debug, Clone, PartialEq)]
pub struct ReportConfig {
    /// Language the report is rendered in
    pub language: Language,

    /// Language the section texts are written in
    pub source_language: Language,

    /// Translation backend; `None` disables translation
    pub translation: Option<TranslationConfig>,
}

impl Default for ReportConfig {
    fn default() -> Self {
        Self {
            language: Language::default(),
            source_language: Language::English,
            translation: None,
        }
    }
}

impl ReportConfig {
    /// Create a new configuration builder
    pub fn builder() -> ReportConfigBuilder {
        ReportConfigBuilder::default()
    }

    /// Load configuration from the environment
    ///
    /// - `TRADINGAGENTS_LANG`: target language, default `zh_TW`
    /// - `TRADINGAGENTS_TRANSLATE`: set to a false value to disable translation
    /// - `OPENAI_API_KEY`, `OPENAI_API_BASE`, `OPENAI_MODEL`: translation backend,
    ///   enabled when a key or a base URL is present
    pub fn from_env() -> Self {
        Self::from_vars(env_string)
    }

    fn from_vars(get: impl Fn(&str) -> Option<String>) -> Self {
        let language = match get("TRADINGAGENTS_LANG") {
            Some(code) => Language::from_code(&code).unwrap_or_else(|| {
                let fallback = Language::default();
                warn!("Unsupported TRADINGAGENTS_LANG '{}', using {}", code, fallback);
                fallback
            }),
            None => Language::default(),
        };

        let enabled = get("TRADINGAGENTS_TRANSLATE").is_none_or(|value| parse_flag(&value));
        let api_key = get("OPENAI_API_KEY");
        let api_base = get("OPENAI_API_BASE");

        let translation = if enabled && (api_key.is_some() || api_base.is_some()) {
            let mut config = TranslationConfig::new(api_key.unwrap_or_default());
            if let Some(base) = api_base {
                config = config.with_api_base(base);
            }
            if let Some(model) = get("OPENAI_MODEL") {
                config = config.with_model(model);
            }
            Some(config)
        } else {
            None
        };

        Self {
            language,
            source_language: Language::English,
            translation,
        }
    }

    /// Whether sections will be sent for translation
    pub fn translates(&self) -> bool {
        self.translation.is_some() && self.language != self.source_language
    }

    /// Validate the configuration
    pub fn validate(&self) -> Result<()> {
        if let Some(translation) = &self.translation {
            if translation.model.trim().is_empty() {
                return Err(ReportError::Config(
                    "translation model must not be empty".to_string(),
                ));
            }

            if translation.max_tokens == 0 {
                return Err(ReportError::Config(
                    "max_tokens must be greater than 0".to_string(),
                ));
            }

            if translation.api_base.trim().is_empty() {
                return Err(ReportError::Config(
                    "translation api_base must not be empty".to_string(),
                ));
            }
        }

        Ok(())
    }
}

/// Builder for ReportConfig
#[derive(Debug, Default)]
pub struct ReportConfigBuilder {
    language: Option<Language>,
    source_language: Option<Language>,
    translation: Option<TranslationConfig>,
}

impl ReportConfigBuilder {
    /// Set the report language
    pub fn language(mut self, language: Language) -> Self {
        self.language = Some(language);
        self
    }

    /// Set the language the sections are written in
    pub fn source_language(mut self, language: Language) -> Self {
        self.source_language = Some(language);
        self
    }

    /// Enable translation with the given backend settings
    pub fn translation(mut self, translation: TranslationConfig) -> Self {
        self.translation = Some(translation);
        self
    }

    /// Build the configuration
    pub fn build(self) -> Result<ReportConfig> {
        let defaults = ReportConfig::default();
        let config = ReportConfig {
            language: self.language.unwrap_or(defaults.language),
            source_language: self.source_language.unwrap_or(defaults.source_language),
            translation: self.translation,
        };

        config.validate()?;
        Ok(config)
    }
}
