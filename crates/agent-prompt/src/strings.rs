//! Static per-language string tables for generated reports
//!
//! One immutable table per [`Language`]; callers select a table once and pass
//! plain strings downstream. Nothing here is mutable at runtime.

use crate::Language;

/// Display titles for the seven report sections
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SectionTitles {
    pub market: &'static str,
    pub sentiment: &'static str,
    pub news: &'static str,
    pub fundamentals: &'static str,
    pub investment_plan: &'static str,
    pub trader_plan: &'static str,
    pub final_decision: &'static str,
}

/// Headings of the team groups that sections are filed under
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GroupLabels {
    pub analyst_team: &'static str,
    pub research_team: &'static str,
    pub trading_team: &'static str,
    pub portfolio_management: &'static str,
}

/// Text shown inside the BUY / SELL / HOLD decision badges
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BadgeLabels {
    pub buy: &'static str,
    pub sell: &'static str,
    pub hold: &'static str,
}

/// Everything a report needs to render in one language
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ReportStrings {
    pub sections: SectionTitles,
    pub groups: GroupLabels,
    pub badges: BadgeLabels,
    /// Document title, `{ticker}` is substituted
    pub title_pattern: &'static str,
    pub ticker_label: &'static str,
    pub analysis_date_label: &'static str,
    pub generated_at_label: &'static str,
    pub footer_credit: &'static str,
    pub disclaimer: &'static str,
    /// Progress message printed before translation starts
    pub translating: &'static str,
}

impl ReportStrings {
    /// Table for `lang`
    pub fn for_language(lang: &Language) -> &'static ReportStrings {
        match lang {
            Language::TraditionalChinese => &TRADITIONAL_CHINESE,
            Language::SimplifiedChinese => &SIMPLIFIED_CHINESE,
            Language::English => &ENGLISH,
        }
    }

    /// Document title for `ticker`
    pub fn document_title(&self, ticker: &str) -> String {
        self.title_pattern.replace("{ticker}", ticker)
    }
}

static TRADITIONAL_CHINESE: ReportStrings = ReportStrings {
    sections: SectionTitles {
        market: "市場分析報告",
        sentiment: "社交媒體情緒分析",
        news: "新聞分析報告",
        fundamentals: "基本面分析報告",
        investment_plan: "研究團隊投資計劃",
        trader_plan: "交易團隊計劃",
        final_decision: "投資組合管理決策",
    },
    groups: GroupLabels {
        analyst_team: "I. 分析師團隊報告",
        research_team: "II. 研究團隊報告",
        trading_team: "III. 交易團隊報告",
        portfolio_management: "IV. 投資組合管理報告",
    },
    badges: BadgeLabels {
        buy: "買入(BUY)",
        sell: "賣出(SELL)",
        hold: "持有(HOLD)",
    },
    title_pattern: "{ticker} 投資分析報告",
    ticker_label: "股票代碼",
    analysis_date_label: "分析日期",
    generated_at_label: "報告生成時間",
    footer_credit: "TradingAgents - 由 AI 多代理系統生成",
    disclaimer: "本報告僅供參考，不構成投資建議",
    translating: "正在翻譯報告內容為",
};

static SIMPLIFIED_CHINESE: ReportStrings = ReportStrings {
    sections: SectionTitles {
        market: "市场分析报告",
        sentiment: "社交媒体情绪分析",
        news: "新闻分析报告",
        fundamentals: "基本面分析报告",
        investment_plan: "研究团队投资计划",
        trader_plan: "交易团队计划",
        final_decision: "投资组合管理决策",
    },
    groups: GroupLabels {
        analyst_team: "I. 分析师团队报告",
        research_team: "II. 研究团队报告",
        trading_team: "III. 交易团队报告",
        portfolio_management: "IV. 投资组合管理报告",
    },
    badges: BadgeLabels {
        buy: "买入(BUY)",
        sell: "卖出(SELL)",
        hold: "持有(HOLD)",
    },
    title_pattern: "{ticker} 投资分析报告",
    ticker_label: "股票代码",
    analysis_date_label: "分析日期",
    generated_at_label: "报告生成时间",
    footer_credit: "TradingAgents - 由 AI 多代理系统生成",
    disclaimer: "本报告仅供参考，不构成投资建议",
    translating: "正在翻译报告内容为",
};

static ENGLISH: ReportStrings = ReportStrings {
    sections: SectionTitles {
        market: "Market Analysis Report",
        sentiment: "Social Media Sentiment Analysis",
        news: "News Analysis Report",
        fundamentals: "Fundamentals Analysis Report",
        investment_plan: "Research Team Investment Plan",
        trader_plan: "Trading Team Plan",
        final_decision: "Portfolio Management Decision",
    },
    groups: GroupLabels {
        analyst_team: "I. Analyst Team Reports",
        research_team: "II. Research Team Reports",
        trading_team: "III. Trading Team Reports",
        portfolio_management: "IV. Portfolio Management Reports",
    },
    badges: BadgeLabels {
        buy: "BUY",
        sell: "SELL",
        hold: "HOLD",
    },
    title_pattern: "{ticker} Investment Analysis Report",
    ticker_label: "Ticker",
    analysis_date_label: "Analysis Date",
    generated_at_label: "Generated At",
    footer_credit: "TradingAgents - Generated by an AI multi-agent system",
    disclaimer: "This report is for reference only and does not constitute investment advice.",
    translating: "Translating report content to",
};
