//! Markdown-subset to HTML fragment conversion
//!
//! [`ContentFormatter::format`] runs a fixed sequence of passes over a
//! `Vec<MarkdownBlock>`:
//!
//! 1. escape `&`, `<`, `>` in the whole text
//! 2. pipe tables
//! 3. `#`..`####` headings
//! 4. bullet lists, then numbered lists
//! 5. decision badges, bold, italic
//! 6. paragraphs
//!
//! Lists are classified before emphasis so a `*` bullet marker is never read
//! as the opening of an italic run. Formatting never fails: malformed input
//! degrades to literal text.

mod block;
mod headings;
mod inline;
mod lists;
mod paragraph;
mod table;

pub use block::{HtmlTable, MarkdownBlock, RowKind, TableRow};

use agent_prompt::{BadgeLabels, Language, ReportStrings};

/// Converts analyst text into HTML fragments
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ContentFormatter {
    badges: BadgeLabels,
}

impl Default for ContentFormatter {
    fn default() -> Self {
        Self::for_language(&Language::default())
    }
}

impl ContentFormatter {
    /// Formatter using the given badge labels
    pub fn new(badges: BadgeLabels) -> Self {
        Self { badges }
    }

    /// Formatter using the badge labels of `lang`
    pub fn for_language(lang: &Language) -> Self {
        Self::new(ReportStrings::for_language(lang).badges)
    }

    /// Convert `text` to an HTML fragment
    ///
    /// `None`, empty and whitespace-only input all yield an empty string.
    /// Output lines are joined with `\n`.
    pub fn format<'a>(&self, text: impl Into<Option<&'a str>>) -> String {
        let Some(text) = text.into().filter(|t| !t.trim().is_empty()) else {
            return String::new();
        };

        let blocks = MarkdownBlock::lines(&inline::escape_html(text));
        let blocks = table::extract_tables(blocks);
        let blocks = headings::classify_headings(blocks);
        let blocks = lists::group_list(blocks, false);
        let blocks = lists::group_list(blocks, true);
        let blocks = inline::apply_inline(blocks, &self.badges);
        let blocks = paragraph::group_paragraphs(blocks);

        render(&blocks)
    }
}

/// Format with the default language's badge labels
pub fn format_content<'a>(text: impl Into<Option<&'a str>>) -> String {
    ContentFormatter::default().format(text)
}

fn render(blocks: &[MarkdownBlock]) -> String {
    blocks
        .iter()
        .map(|block| match block {
            MarkdownBlock::Heading { level, text } => format!(
                "{}{text}{}",
                headings::open_tag(*level),
                headings::close_tag(*level)
            ),
            MarkdownBlock::ListItem { text, .. } => {
                format!("{}{text}</li>", lists::LIST_ITEM_OPEN)
            }
            MarkdownBlock::Table(table) => table::render_table(table),
            MarkdownBlock::ParagraphLine(text) | MarkdownBlock::RawHtmlLine(text) => text.clone(),
            MarkdownBlock::Blank => String::new(),
        })
        .collect::<Vec<_>>()
        .join("\n")
}

#[cfg(test)]
mod tests {
    use super::*;

    fn english() -> ContentFormatter {
        ContentFormatter::for_language(&Language::English)
    }

    #[test]
    fn test_empty_inputs() {
        let formatter = english();
        assert_eq!(formatter.format(""), "");
        assert_eq!(formatter.format(None), "");
        assert_eq!(formatter.format("  \n\t\n"), "");
        assert_eq!(format_content(None), "");
    }

    #[test]
    fn test_escapes_before_markup() {
        let html = english().format("<script>alert('x')</script> & more");
        assert!(html.contains("&lt;script&gt;"));
        assert!(!html.contains("<script>"));
        assert!(html.contains("&amp; more"));
    }

    #[test]
    fn test_table_round_trip() {
        let html = english().format("| A | B |\n|---|---|\n| 1 | 2 |");
        assert_eq!(html.matches("<thead>").count(), 1);
        assert_eq!(html.matches("<th ").count(), 2);
        assert_eq!(html.matches("<tbody>").count(), 1);
        assert_eq!(html.matches("<td ").count(), 2);

        let a = html.find(">A</th>").unwrap();
        let b = html.find(">B</th>").unwrap();
        let one = html.find(">1</td>").unwrap();
        let two = html.find(">2</td>").unwrap();
        assert!(a < b && b < one && one < two);
        assert!(!html.contains("<p"));
    }

    #[test]
    fn test_table_cells_get_inline_formatting() {
        let html = english().format("| Signal | Note |\n|---|---|\n| **BUY** | *strong* |");
        assert!(html.contains(r#"<span class="decision-buy">BUY</span></td>"#));
        assert!(html.contains("<em>strong</em></td>"));
    }

    #[test]
    fn test_badge_precedence() {
        let formatter = english();
        let html = formatter.format("**BUY**");
        assert!(html.contains(r#"<span class="decision-buy">BUY</span>"#));
        assert!(!html.contains("<strong>"));

        let html = formatter.format("**buy**");
        assert!(html.contains("<strong>buy</strong>"));
        assert!(!html.contains("decision-buy"));
    }

    #[test]
    fn test_localized_badges() {
        let html = ContentFormatter::default().format("**SELL**");
        assert!(html.contains("賣出(SELL)"));
    }

    #[test]
    fn test_three_bullets() {
        let html = english().format("- a\n- b\n- c");
        assert_eq!(html.matches("<ul").count(), 1);
        assert_eq!(html.matches("</ul>").count(), 1);
        assert_eq!(html.matches("<li").count(), 3);

        let a = html.find(">a</li>").unwrap();
        let b = html.find(">b</li>").unwrap();
        let c = html.find(">c</li>").unwrap();
        assert!(a < b && b < c);
    }

    #[test]
    fn test_star_bullets_with_italic() {
        let html = english().format("* plain item\n* item with *emphasis*");
        assert_eq!(html.matches("<li").count(), 2);
        assert!(html.contains("<em>emphasis</em></li>"));
        assert!(html.contains(">plain item</li>"));
    }

    #[test]
    fn test_ordered_list() {
        let html = english().format("1. first\n2. second");
        assert_eq!(html.matches("<ol").count(), 1);
        assert_eq!(html.matches("<li").count(), 2);
    }

    #[test]
    fn test_headings() {
        let html = english().format("# One\n## Two\n### Three\n#### Four");
        assert!(html.contains(">One</h1>"));
        assert!(html.contains(">Two</h2>"));
        assert!(html.contains(">Three</h3>"));
        assert!(html.contains("<h4>Four</h4>"));
        assert!(!html.contains("# "));
    }

    #[test]
    fn test_paragraph_grouping() {
        let html = english().format("line one\nline two\n\n**Lead** sentence\nmore");
        let paragraphs: Vec<_> = html.lines().filter(|l| l.starts_with("<p")).collect();
        assert_eq!(paragraphs.len(), 2);
        assert!(paragraphs[0].contains("line one line two"));
        assert!(paragraphs[1].ends_with(">more</p>"));
        // a line opening with markup is emitted as is
        assert!(html.lines().any(|l| l == "<strong>Lead</strong> sentence"));
    }

    #[test]
    fn test_mixed_document() {
        let text = "## Summary\nThe outlook is positive.\n\n- Growth\n- Margins\n\nFinal: **HOLD**";
        let html = english().format(text);
        let lines: Vec<_> = html.lines().collect();

        assert!(lines[0].starts_with("<h2"));
        assert!(lines[1].starts_with("<p"));
        assert_eq!(lines[2], "");
        assert!(lines[3].starts_with("<ul"));
        assert!(lines[6].starts_with("</ul>"));
        assert!(lines[8].contains("decision-hold"));
    }

    #[test]
    fn test_unbalanced_markers_degrade() {
        let html = english().format("price * 2\n**open");
        assert!(html.contains(">price * 2 **open</p>"));
    }

    #[test]
    fn test_deterministic() {
        let text = "# T\n| A | B |\n|---|---|\n| 1 | 2 |\n- x\n**BUY** now";
        let formatter = english();
        assert_eq!(formatter.format(text), formatter.format(text));
    }
}
