//! Full HTML document assembly
//!
//! The assembler performs no language logic: every label it prints arrives
//! already localized in [`DocumentMeta`] and [`SectionGroup`].

use crate::error::Result;
use agent_prompt::{Language, ReportStrings};
use chrono::{Datelike, NaiveDate, NaiveDateTime};
use minijinja::Environment;
use serde::Serialize;

const TEMPLATE_NAME: &str = "report.html";
const TEMPLATE_SOURCE: &str = include_str!("../templates/report.html");

/// Header and footer data for one document
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct DocumentMeta {
    /// Value of the root `lang` attribute
    pub lang: &'static str,
    pub title: String,
    pub ticker: String,
    pub analysis_date: String,
    pub generated_at: String,
    pub year: i32,
    pub ticker_label: &'static str,
    pub analysis_date_label: &'static str,
    pub generated_at_label: &'static str,
    pub footer_credit: &'static str,
    pub disclaimer: &'static str,
}

impl DocumentMeta {
    /// Metadata in `language`, stamped with `generated_at`
    pub fn new(
        language: &Language,
        ticker: &str,
        analysis_date: NaiveDate,
        generated_at: NaiveDateTime,
    ) -> Self {
        let strings = ReportStrings::for_language(language);
        Self {
            lang: language.html_lang(),
            title: strings.document_title(ticker),
            ticker: ticker.to_string(),
            analysis_date: analysis_date.format("%Y-%m-%d").to_string(),
            generated_at: generated_at.format("%Y-%m-%d %H:%M:%S").to_string(),
            year: generated_at.year(),
            ticker_label: strings.ticker_label,
            analysis_date_label: strings.analysis_date_label,
            generated_at_label: strings.generated_at_label,
            footer_credit: strings.footer_credit,
            disclaimer: strings.disclaimer,
        }
    }
}

/// One formatted section
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct RenderedSection {
    pub title: String,
    /// HTML fragment, inserted without escaping
    pub html: String,
    pub emphasized: bool,
}

impl RenderedSection {
    pub fn new(title: impl Into<String>, html: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            html: html.into(),
            emphasized: false,
        }
    }

    /// Render inside the highlighted container
    pub fn emphasized(mut self) -> Self {
        self.emphasized = true;
        self
    }

    fn has_content(&self) -> bool {
        !self.html.trim().is_empty()
    }
}

/// A group heading and its sections, in display order
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SectionGroup {
    pub label: String,
    pub sections: Vec<RenderedSection>,
}

impl SectionGroup {
    pub fn new(label: impl Into<String>) -> Self {
        Self {
            label: label.into(),
            sections: Vec::new(),
        }
    }

    pub fn push(&mut self, section: RenderedSection) {
        self.sections.push(section);
    }
}

#[derive(Serialize)]
struct DocumentContext<'a> {
    #[serde(flatten)]
    meta: &'a DocumentMeta,
    groups: Vec<SectionGroup>,
}

/// Renders the standalone report document
///
/// Styling is embedded so the file renders offline with no external assets.
pub struct DocumentAssembler {
    env: Environment<'static>,
}

impl DocumentAssembler {
    pub fn new() -> Result<Self> {
        let mut env = Environment::new();
        env.add_template(TEMPLATE_NAME, TEMPLATE_SOURCE)?;
        Ok(Self { env })
    }

    /// Produce the complete HTML document
    ///
    /// Sections with empty HTML are dropped and so are groups left with no
    /// sections. Text in `meta`, group labels and section titles is escaped;
    /// section HTML is not.
    pub fn assemble(&self, meta: &DocumentMeta, groups: &[SectionGroup]) -> Result<String> {
        let groups = groups
            .iter()
            .map(|group| SectionGroup {
                label: group.label.clone(),
                sections: group
                    .sections
                    .iter()
                    .filter(|section| section.has_content())
                    .cloned()
                    .collect(),
            })
            .filter(|group| !group.sections.is_empty())
            .collect();

        let template = self.env.get_template(TEMPLATE_NAME)?;
        let html = template.render(DocumentContext { meta, groups })?;
        Ok(html)
    }
}
