//! Language tags for reports and prompts
//!
//! A report is rendered in exactly one of a small, fixed set of languages. The
//! tag drives three things: which static string table is used, how the target
//! language is described to the translation model, and the `lang` attribute of
//! the generated document.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::PromptError;

/// Supported report languages
///
/// # Examples
///
/// ```
/// use agent_prompt::Language;
///
/// let lang = Language::TraditionalChinese;
/// assert_eq!(lang.code(), "zh_TW");
/// assert_eq!(lang.html_lang(), "zh");
///
/// assert_eq!(Language::from_code("en-US"), Some(Language::English));
/// assert_eq!(Language::from_code("ja"), None);
/// ```
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize, Default,
)]
pub enum Language {
    /// Traditional Chinese (`zh_TW`)
    #[default]
    #[serde(rename = "zh_TW")]
    TraditionalChinese,
    /// Simplified Chinese (`zh_CN`)
    #[serde(rename = "zh_CN")]
    SimplifiedChinese,
    /// English (`en_US`)
    #[serde(rename = "en_US")]
    English,
}

impl Language {
    /// Every supported language, in display order
    pub const ALL: [Language; 3] = [
        Language::TraditionalChinese,
        Language::SimplifiedChinese,
        Language::English,
    ];

    /// Canonical tag (`zh_TW`, `zh_CN`, `en_US`)
    pub fn code(&self) -> &'static str {
        match self {
            Language::TraditionalChinese => "zh_TW",
            Language::SimplifiedChinese => "zh_CN",
            Language::English => "en_US",
        }
    }

    /// Value for the document's `lang` attribute: the first two characters of the tag
    pub fn html_lang(&self) -> &'static str {
        &self.code()[..2]
    }

    /// How the target language is named inside a translation prompt
    pub fn translation_target(&self) -> &'static str {
        match self {
            Language::TraditionalChinese => "繁體中文",
            Language::SimplifiedChinese => "简体中文",
            Language::English => "English",
        }
    }

    /// Parse a language tag or common alias
    ///
    /// Matching is case-insensitive and accepts `_` or `-` as separator.
    ///
    /// # Examples
    ///
    /// ```
    /// use agent_prompt::Language;
    ///
    /// assert_eq!(Language::from_code("zh_TW"), Some(Language::TraditionalChinese));
    /// assert_eq!(Language::from_code("zh-hant"), Some(Language::TraditionalChinese));
    /// assert_eq!(Language::from_code("ZH-CN"), Some(Language::SimplifiedChinese));
    /// assert_eq!(Language::from_code("english"), Some(Language::English));
    /// ```
    pub fn from_code(s: &str) -> Option<Self> {
        let normalized = s.trim().to_lowercase().replace('-', "_");
        match normalized.as_str() {
            "zh_tw" | "zh_hant" | "zh_hk" | "繁體中文" => Some(Language::TraditionalChinese),
            "zh_cn" | "zh_hans" | "zh_sg" | "zh" | "简体中文" => Some(Language::SimplifiedChinese),
            "en_us" | "en" | "en_gb" | "english" => Some(Language::English),
            _ => None,
        }
    }
}

impl fmt::Display for Language {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.code())
    }
}

impl FromStr for Language {
    type Err = PromptError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Language::from_code(s).ok_or_else(|| PromptError::UnsupportedLanguage(s.to_string()))
    }
}
