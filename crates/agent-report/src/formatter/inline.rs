//! Decision badges and bold/italic emphasis within a single line

use super::block::MarkdownBlock;
use agent_prompt::BadgeLabels;
use regex::Regex;
use std::sync::LazyLock;

static BOLD: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\*\*(.+?)\*\*").expect("bold pattern is valid"));
static ITALIC: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\*(.+?)\*").expect("italic pattern is valid"));

/// Escape the three HTML metacharacters
///
/// `&` goes first so the entities produced for `<` and `>` are left alone.
pub(crate) fn escape_html(text: &str) -> String {
    text.replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
}

/// Apply badges, then bold, then italic to one line
///
/// The exact uppercase tokens `**BUY**`, `**SELL**` and `**HOLD**` become
/// badges before generic bold runs. Unpaired `*` stays literal.
pub(crate) fn render_inline(text: &str, badges: &BadgeLabels) -> String {
    let text = text
        .replace("**BUY**", &badge("buy", badges.buy))
        .replace("**SELL**", &badge("sell", badges.sell))
        .replace("**HOLD**", &badge("hold", badges.hold));
    let text = BOLD.replace_all(&text, "<strong>${1}</strong>");
    ITALIC.replace_all(&text, "<em>${1}</em>").into_owned()
}

fn badge(kind: &str, label: &str) -> String {
    format!(r#"<span class="decision-{kind}">{label}</span>"#)
}

/// Run [`render_inline`] over every text-bearing block
pub(crate) fn apply_inline(blocks: Vec<MarkdownBlock>, badges: &BadgeLabels) -> Vec<MarkdownBlock> {
    blocks
        .into_iter()
        .map(|block| match block {
            MarkdownBlock::Heading { level, text } => MarkdownBlock::Heading {
                level,
                text: render_inline(&text, badges),
            },
            MarkdownBlock::ListItem { ordered, text } => MarkdownBlock::ListItem {
                ordered,
                text: render_inline(&text, badges),
            },
            MarkdownBlock::Table(mut table) => {
                table.map_cells(|cell| render_inline(cell, badges));
                MarkdownBlock::Table(table)
            }
            MarkdownBlock::ParagraphLine(line) => {
                MarkdownBlock::ParagraphLine(render_inline(&line, badges))
            }
            other => other,
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    const BADGES: BadgeLabels = BadgeLabels {
        buy: "BUY",
        sell: "SELL",
        hold: "HOLD",
    };

    #[test]
    fn test_escape_html() {
        assert_eq!(escape_html("<script>"), "&lt;script&gt;");
        assert_eq!(escape_html("AT&T > 3"), "AT&amp;T &gt; 3");
        assert_eq!(escape_html("&lt;"), "&amp;lt;");
    }

    #[test]
    fn test_badges_before_bold() {
        let html = render_inline("Rating: **BUY**", &BADGES);
        assert_eq!(html, r#"Rating: <span class="decision-buy">BUY</span>"#);
        assert!(!html.contains("<strong>"));

        let html = render_inline("**SELL** then **HOLD**", &BADGES);
        assert!(html.contains(r#"<span class="decision-sell">SELL</span>"#));
        assert!(html.contains(r#"<span class="decision-hold">HOLD</span>"#));
    }

    #[test]
    fn test_lowercase_token_is_plain_bold() {
        assert_eq!(render_inline("**buy**", &BADGES), "<strong>buy</strong>");
    }

    #[test]
    fn test_bold_and_italic() {
        assert_eq!(
            render_inline("**a** and *b* and **c**", &BADGES),
            "<strong>a</strong> and <em>b</em> and <strong>c</strong>"
        );
    }

    #[test]
    fn test_unpaired_star_is_literal() {
        assert_eq!(render_inline("5 * 3 = 15", &BADGES), "5 * 3 = 15");
        assert_eq!(render_inline("**open", &BADGES), "**open");
    }

    #[test]
    fn test_localized_badge_label() {
        let badges = BadgeLabels {
            buy: "買入(BUY)",
            sell: "賣出(SELL)",
            hold: "持有(HOLD)",
        };
        assert_eq!(
            render_inline("**HOLD**", &badges),
            r#"<span class="decision-hold">持有(HOLD)</span>"#
        );
    }
}
