//! End-to-end report generation: translate, format, assemble, write

use crate::assembler::{DocumentAssembler, DocumentMeta, RenderedSection, SectionGroup};
use crate::bundle::{ReportBundle, SectionKey};
use crate::config::ReportConfig;
use crate::error::{ReportError, Result};
use crate::formatter::ContentFormatter;
use crate::translate::{Translation, TranslationBackend, TranslationGateway};
use agent_llm::LLMProvider;
use agent_llm::providers::{OpenAIConfig, OpenAIProvider};
use agent_prompt::ReportStrings;
use chrono::{Local, NaiveDate, NaiveDateTime};
use std::path::{Path, PathBuf};
use std::sync::Arc;
use tracing::{debug, info, warn};

/// What to render: ticker, analysis date and section texts
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ReportRequest {
    ticker: String,
    analysis_date: NaiveDate,
    bundle: ReportBundle,
}

impl ReportRequest {
    /// The ticker is trimmed and upper-cased and must not be empty
    pub fn new(ticker: &str, analysis_date: NaiveDate, bundle: ReportBundle) -> Result<Self> {
        let ticker = ticker.trim().to_uppercase();
        if ticker.is_empty() {
            return Err(ReportError::InvalidInput("ticker must not be empty".to_string()));
        }

        Ok(Self {
            ticker,
            analysis_date,
            bundle,
        })
    }

    pub fn ticker(&self) -> &str {
        &self.ticker
    }

    pub fn analysis_date(&self) -> NaiveDate {
        self.analysis_date
    }

    pub fn bundle(&self) -> &ReportBundle {
        &self.bundle
    }
}

/// Parse a strict `YYYY-MM-DD` date
pub fn parse_date(input: &str) -> Result<NaiveDate> {
    let input = input.trim();
    let well_formed = input.len() == 10
        && input
            .char_indices()
            .all(|(i, c)| if i == 4 || i == 7 { c == '-' } else { c.is_ascii_digit() });
    if !well_formed {
        return Err(ReportError::InvalidInput(format!(
            "date '{input}' must use the YYYY-MM-DD format"
        )));
    }

    NaiveDate::parse_from_str(input, "%Y-%m-%d")
        .map_err(|e| ReportError::InvalidInput(format!("date '{input}' is not valid: {e}")))
}

/// Turns a [`ReportRequest`] into a standalone HTML report
pub struct ReportGenerator {
    config: ReportConfig,
    strings: &'static ReportStrings,
    gateway: TranslationGateway,
    formatter: ContentFormatter,
    assembler: DocumentAssembler,
}

impl ReportGenerator {
    /// Create a generator, building the OpenAI-compatible provider when
    /// translation is configured
    pub fn new(config: ReportConfig) -> Result<Self> {
        let provider = match &config.translation {
            Some(translation) if config.translates() => {
                let openai = OpenAIConfig::new(translation.api_key.clone())
                    .with_api_base(translation.api_base.clone())
                    .with_timeout(translation.timeout_secs);
                Some(Arc::new(OpenAIProvider::with_config(openai)?) as Arc<dyn LLMProvider>)
            }
            _ => None,
        };

        Self::build(config, provider)
    }

    /// Create a generator that translates through `provider`
    ///
    /// Translation still only happens when `config.translation` is set.
    pub fn with_provider(config: ReportConfig, provider: Arc<dyn LLMProvider>) -> Result<Self> {
        Self::build(config, Some(provider))
    }

    fn build(config: ReportConfig, provider: Option<Arc<dyn LLMProvider>>) -> Result<Self> {
        config.validate()?;

        let backend = match (&config.translation, provider) {
            (Some(translation), Some(provider)) => {
                let mut backend = TranslationBackend::new(provider, translation.model.clone())
                    .with_max_tokens(translation.max_tokens);
                if let Some(temperature) = translation.temperature {
                    backend = backend.with_temperature(temperature);
                }
                Some(backend)
            }
            _ => None,
        };

        let gateway = TranslationGateway::new(config.source_language, config.language, backend)?;

        Ok(Self {
            strings: ReportStrings::for_language(&config.language),
            formatter: ContentFormatter::for_language(&config.language),
            assembler: DocumentAssembler::new()?,
            gateway,
            config,
        })
    }

    pub fn config(&self) -> &ReportConfig {
        &self.config
    }

    /// Render the document stamped with the current local time
    pub async fn render(&self, request: &ReportRequest) -> Result<String> {
        self.render_at(request, Local::now().naive_local()).await
    }

    /// Render the document stamped with `generated_at`
    ///
    /// Sections are translated one at a time in report order.
    pub async fn render_at(
        &self,
        request: &ReportRequest,
        generated_at: NaiveDateTime,
    ) -> Result<String> {
        if self.gateway.is_active() {
            info!(
                "{} {}...",
                self.strings.translating,
                self.config.language.translation_target()
            );
        }

        let mut groups: Vec<SectionGroup> = Vec::new();
        for key in SectionKey::ALL {
            let Some(text) = request.bundle.get(key) else {
                debug!("Section {} is empty, omitting", key);
                continue;
            };

            let title = key.title(self.strings);
            let translation = self.gateway.translate(text).await;
            match &translation {
                Translation::Translated(_) => info!("Translated section '{}'", title),
                Translation::Fallback { .. } => {
                    warn!("Section '{}' kept in its original language", title);
                }
                Translation::Skipped { .. } => {}
            }

            let mut section = RenderedSection::new(title, self.formatter.format(translation.text()));
            if key.is_emphasized() {
                section = section.emphasized();
            }

            let label = key.group().label(self.strings);
            match groups.last_mut() {
                Some(group) if group.label == label => group.push(section),
                _ => {
                    let mut group = SectionGroup::new(label);
                    group.push(section);
                    groups.push(group);
                }
            }
        }

        let meta = DocumentMeta::new(
            &self.config.language,
            &request.ticker,
            request.analysis_date,
            generated_at,
        );
        self.assembler.assemble(&meta, &groups)
    }

    /// Render and write the report to `path`, returning the absolute path
    pub async fn generate(&self, request: &ReportRequest, path: impl AsRef<Path>) -> Result<PathBuf> {
        let html = self.render(request).await?;
        let path = path.as_ref();

        tokio::fs::write(path, html.as_bytes()).await?;
        let absolute = std::path::absolute(path)?;

        info!("HTML report written to {}", absolute.display());
        Ok(absolute)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::TranslationConfig;
    use crate::translate::tests::{MockProvider, reply};
    use agent_llm::LLMError;
    use agent_prompt::Language;
    use tempfile::TempDir;

    fn date() -> NaiveDate {
        NaiveDate::from_ymd_opt(2025, 6, 2).unwrap()
    }

    fn stamp() -> NaiveDateTime {
        date().and_hms_opt(18, 0, 0).unwrap()
    }

    fn english_config() -> ReportConfig {
        ReportConfig::builder().language(Language::English).build().unwrap()
    }

    #[test]
    fn test_request_normalizes_ticker() {
        let request = ReportRequest::new("  nvda ", date(), ReportBundle::new()).unwrap();
        assert_eq!(request.ticker(), "NVDA");

        let result = ReportRequest::new("   ", date(), ReportBundle::new());
        assert!(matches!(result, Err(ReportError::InvalidInput(_))));
    }

    #[test]
    fn test_parse_date() {
        assert_eq!(parse_date("2025-06-02").unwrap(), date());
        assert_eq!(parse_date(" 2025-06-02 ").unwrap(), date());

        for bad in ["2025-6-2", "2025/06/02", "20250602", "2025-02-30", "", "2025-06-02T00"] {
            assert!(
                matches!(parse_date(bad), Err(ReportError::InvalidInput(_))),
                "accepted {bad}"
            );
        }
    }

    #[tokio::test]
    async fn test_final_decision_only() {
        let generator = ReportGenerator::new(english_config()).unwrap();
        let bundle = ReportBundle::new().with(SectionKey::FinalDecision, "Recommendation: **BUY**");
        let request = ReportRequest::new("SPY", date(), bundle).unwrap();

        let html = generator.render_at(&request, stamp()).await.unwrap();

        assert_eq!(html.matches(r#"class="report-section highlight""#).count(), 1);
        assert_eq!(html.matches(r#"class="report-section""#).count(), 0);
        assert!(html.contains(r#"<span class="decision-buy">BUY</span>"#));

        let strings = ReportStrings::for_language(&Language::English);
        for key in SectionKey::ALL {
            let expected = usize::from(key == SectionKey::FinalDecision);
            assert_eq!(html.matches(key.title(strings)).count(), expected, "{key}");
        }
        assert!(html.contains("IV. Portfolio Management Reports"));
        assert!(!html.contains("I. Analyst Team Reports"));
    }

    #[tokio::test]
    async fn test_sections_grouped_in_order() {
        let generator = ReportGenerator::new(english_config()).unwrap();
        let bundle = ReportBundle::new()
            .with(SectionKey::FinalDecision, "Hold.")
            .with(SectionKey::News, "Headlines were mixed.")
            .with(SectionKey::Market, "Prices rose.")
            .with(SectionKey::TraderPlan, "Scale in.");
        let request = ReportRequest::new("spy", date(), bundle).unwrap();

        let html = generator.render_at(&request, stamp()).await.unwrap();
        let position = |needle: &str| html.find(needle).unwrap();

        assert_eq!(html.matches(r#"<h2 class="team-title">"#).count(), 3);
        assert!(position("I. Analyst Team Reports") < position("Market Analysis Report"));
        assert!(position("Market Analysis Report") < position("News Analysis Report"));
        assert!(position("News Analysis Report") < position("III. Trading Team Reports"));
        assert!(position("III. Trading Team Reports") < position("IV. Portfolio Management Reports"));
        assert!(!html.contains("II. Research Team Reports"));
        assert!(html.contains("<strong>SPY</strong>"));
    }

    #[tokio::test]
    async fn test_chinese_report_uses_localized_strings() {
        let config = ReportConfig::builder()
            .language(Language::TraditionalChinese)
            .build()
            .unwrap();
        let generator = ReportGenerator::new(config).unwrap();
        let bundle = ReportBundle::new().with(SectionKey::Market, "**SELL** now");
        let request = ReportRequest::new("2330.TW", date(), bundle).unwrap();

        let html = generator.render_at(&request, stamp()).await.unwrap();
        assert!(html.contains(r#"<html lang="zh">"#));
        assert!(html.contains("市場分析報告"));
        assert!(html.contains("I. 分析師團隊報告"));
        assert!(html.contains("賣出(SELL)"));
        // no backend configured, so the text stays as written
        assert!(html.contains("now"));
    }

    #[tokio::test]
    async fn test_translates_each_section_in_order() {
        let mut provider = MockProvider::new();
        let mut sequence = mockall::Sequence::new();
        for (source, translated) in [
            ("Market text long enough", "市場內容"),
            ("Decision text long enough", "決策內容"),
        ] {
            provider
                .expect_complete()
                .times(1)
                .in_sequence(&mut sequence)
                .withf(move |request| request.messages[0].text().contains(source))
                .returning(move |_| Ok(reply(translated)));
        }

        let config = ReportConfig::builder()
            .language(Language::TraditionalChinese)
            .translation(TranslationConfig::new("sk-test"))
            .build()
            .unwrap();
        let generator = ReportGenerator::with_provider(config, Arc::new(provider)).unwrap();
        let bundle = ReportBundle::new()
            .with(SectionKey::FinalDecision, "Decision text long enough")
            .with(SectionKey::Market, "Market text long enough");
        let request = ReportRequest::new("SPY", date(), bundle).unwrap();

        let html = generator.render_at(&request, stamp()).await.unwrap();
        assert!(html.contains("市場內容"));
        assert!(html.contains("決策內容"));
        assert!(!html.contains("long enough"));
    }

    #[tokio::test]
    async fn test_translation_failure_keeps_report() {
        let mut provider = MockProvider::new();
        provider
            .expect_complete()
            .returning(|_| Err(LLMError::RateLimitExceeded("slow down".to_string())));

        let config = ReportConfig::builder()
            .language(Language::SimplifiedChinese)
            .translation(TranslationConfig::new("sk-test"))
            .build()
            .unwrap();
        let generator = ReportGenerator::with_provider(config, Arc::new(provider)).unwrap();
        let bundle = ReportBundle::new().with(SectionKey::News, "Original English news text");
        let request = ReportRequest::new("SPY", date(), bundle).unwrap();

        let html = generator.render_at(&request, stamp()).await.unwrap();
        assert!(html.contains("Original English news text"));
    }

    #[tokio::test]
    async fn test_provider_unused_without_translation_config() {
        let mut provider = MockProvider::new();
        provider.expect_complete().never();

        let config = ReportConfig::builder()
            .language(Language::TraditionalChinese)
            .build()
            .unwrap();
        let generator = ReportGenerator::with_provider(config, Arc::new(provider)).unwrap();
        let bundle = ReportBundle::new().with(SectionKey::Market, "A sufficiently long text");
        let request = ReportRequest::new("SPY", date(), bundle).unwrap();

        let html = generator.render_at(&request, stamp()).await.unwrap();
        assert!(html.contains("A sufficiently long text"));
    }

    #[tokio::test]
    async fn test_generate_writes_file() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("report.html");

        let generator = ReportGenerator::new(english_config()).unwrap();
        let bundle = ReportBundle::new().with(SectionKey::Fundamentals, "P/E of **28**");
        let request = ReportRequest::new("AAPL", date(), bundle).unwrap();

        let written = generator.generate(&request, &path).await.unwrap();
        assert!(written.is_absolute());
        assert_eq!(written, path);

        let contents = std::fs::read_to_string(&written).unwrap();
        assert!(contents.starts_with("<!DOCTYPE html>"));
        assert!(contents.contains("AAPL Investment Analysis Report"));
        assert!(contents.contains("<strong>28</strong>"));
    }

    #[tokio::test]
    async fn test_generate_into_missing_directory_fails() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("missing").join("report.html");

        let generator = ReportGenerator::new(english_config()).unwrap();
        let bundle = ReportBundle::new().with(SectionKey::Market, "text");
        let request = ReportRequest::new("SPY", date(), bundle).unwrap();

        let result = generator.generate(&request, &path).await;
        assert!(matches!(result, Err(ReportError::Io(_))));
        assert!(!path.exists());
    }
}
