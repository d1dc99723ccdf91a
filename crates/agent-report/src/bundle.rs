//! The seven analyst sections a report is built from

use crate::error::Result;
use agent_prompt::ReportStrings;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::fmt;

/// Fixed section keys, declared in report order
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum SectionKey {
    Market,
    Sentiment,
    News,
    Fundamentals,
    InvestmentPlan,
    TraderPlan,
    FinalDecision,
}

impl SectionKey {
    /// All keys in report order
    pub const ALL: [SectionKey; 7] = [
        SectionKey::Market,
        SectionKey::Sentiment,
        SectionKey::News,
        SectionKey::Fundamentals,
        SectionKey::InvestmentPlan,
        SectionKey::TraderPlan,
        SectionKey::FinalDecision,
    ];

    /// State key used in bundle JSON
    pub fn as_str(&self) -> &'static str {
        match self {
            SectionKey::Market => "market_report",
            SectionKey::Sentiment => "sentiment_report",
            SectionKey::News => "news_report",
            SectionKey::Fundamentals => "fundamentals_report",
            SectionKey::InvestmentPlan => "investment_plan",
            SectionKey::TraderPlan => "trader_investment_plan",
            SectionKey::FinalDecision => "final_trade_decision",
        }
    }

    /// Parse a state key or one of its short aliases
    pub fn from_key(key: &str) -> Option<Self> {
        match key.trim().to_ascii_lowercase().as_str() {
            "market_report" | "market" => Some(SectionKey::Market),
            "sentiment_report" | "sentiment" => Some(SectionKey::Sentiment),
            "news_report" | "news" => Some(SectionKey::News),
            "fundamentals_report" | "fundamentals" => Some(SectionKey::Fundamentals),
            "investment_plan" => Some(SectionKey::InvestmentPlan),
            "trader_investment_plan" | "trader_plan" => Some(SectionKey::TraderPlan),
            "final_trade_decision" | "final_decision" => Some(SectionKey::FinalDecision),
            _ => None,
        }
    }

    /// Team group this section is filed under
    pub fn group(&self) -> TeamGroup {
        match self {
            SectionKey::Market
            | SectionKey::Sentiment
            | SectionKey::News
            | SectionKey::Fundamentals => TeamGroup::AnalystTeam,
            SectionKey::InvestmentPlan => TeamGroup::ResearchTeam,
            SectionKey::TraderPlan => TeamGroup::TradingTeam,
            SectionKey::FinalDecision => TeamGroup::PortfolioManagement,
        }
    }

    /// Localized title
    pub fn title(&self, strings: &ReportStrings) -> &'static str {
        let titles = &strings.sections;
        match self {
            SectionKey::Market => titles.market,
            SectionKey::Sentiment => titles.sentiment,
            SectionKey::News => titles.news,
            SectionKey::Fundamentals => titles.fundamentals,
            SectionKey::InvestmentPlan => titles.investment_plan,
            SectionKey::TraderPlan => titles.trader_plan,
            SectionKey::FinalDecision => titles.final_decision,
        }
    }

    /// Whether this section gets the highlighted container
    pub fn is_emphasized(&self) -> bool {
        matches!(self, SectionKey::FinalDecision)
    }
}

impl fmt::Display for SectionKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Top-level grouping of sections in the document
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum TeamGroup {
    AnalystTeam,
    ResearchTeam,
    TradingTeam,
    PortfolioManagement,
}

impl TeamGroup {
    /// Localized group heading
    pub fn label(&self, strings: &ReportStrings) -> &'static str {
        let groups = &strings.groups;
        match self {
            TeamGroup::AnalystTeam => groups.analyst_team,
            TeamGroup::ResearchTeam => groups.research_team,
            TeamGroup::TradingTeam => groups.trading_team,
            TeamGroup::PortfolioManagement => groups.portfolio_management,
        }
    }
}

/// Section texts keyed by [`SectionKey`]
///
/// Blank texts are never stored, so every present section has content.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(from = "BTreeMap<String, serde_json::Value>", into = "BTreeMap<String, String>")]
pub struct ReportBundle {
    sections: BTreeMap<SectionKey, String>,
}

impl ReportBundle {
    pub fn new() -> Self {
        Self::default()
    }

    /// Builder-style [`insert`](Self::insert)
    pub fn with(mut self, key: SectionKey, text: impl Into<String>) -> Self {
        self.insert(key, text);
        self
    }

    /// Set a section; blank text removes it
    pub fn insert(&mut self, key: SectionKey, text: impl Into<String>) {
        let text = text.into();
        if text.trim().is_empty() {
            self.sections.remove(&key);
        } else {
            self.sections.insert(key, text);
        }
    }

    pub fn get(&self, key: SectionKey) -> Option<&str> {
        self.sections.get(&key).map(String::as_str)
    }

    /// Present sections in report order
    pub fn iter(&self) -> impl Iterator<Item = (SectionKey, &str)> {
        self.sections.iter().map(|(key, text)| (*key, text.as_str()))
    }

    pub fn is_empty(&self) -> bool {
        self.sections.is_empty()
    }

    pub fn len(&self) -> usize {
        self.sections.len()
    }

    /// Parse bundle JSON
    pub fn from_json(json: &str) -> Result<Self> {
        Ok(serde_json::from_str(json)?)
    }
}

impl<S: Into<String>> FromIterator<(SectionKey, S)> for ReportBundle {
    fn from_iter<I: IntoIterator<Item = (SectionKey, S)>>(iter: I) -> Self {
        let mut bundle = ReportBundle::new();
        for (key, text) in iter {
            bundle.insert(key, text);
        }
        bundle
    }
}

impl From<BTreeMap<String, serde_json::Value>> for ReportBundle {
    /// Unknown keys and non-string values are ignored
    fn from(map: BTreeMap<String, serde_json::Value>) -> Self {
        map.into_iter()
            .filter_map(|(key, value)| {
                let key = SectionKey::from_key(&key)?;
                match value {
                    serde_json::Value::String(text) => Some((key, text)),
                    _ => None,
                }
            })
            .collect()
    }
}

impl From<ReportBundle> for BTreeMap<String, String> {
    fn from(bundle: ReportBundle) -> Self {
        bundle
            .sections
            .into_iter()
            .map(|(key, text)| (key.as_str().to_string(), text))
            .collect()
    }
}
