//! Bullet and numbered list grouping

use super::block::MarkdownBlock;
use regex::Regex;
use std::sync::LazyLock;

static UNORDERED: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^\s*[-*]\s+").expect("bullet pattern is valid"));
static ORDERED: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^\s*\d+\.\s+").expect("numbered pattern is valid"));

pub(crate) const LIST_ITEM_OPEN: &str = r#"<li style="margin: 5px 0;">"#;

fn list_open(ordered: bool) -> &'static str {
    if ordered {
        r#"<ol style="margin: 10px 0; padding-left: 30px;">"#
    } else {
        r#"<ul style="margin: 10px 0; padding-left: 30px;">"#
    }
}

fn list_close(ordered: bool) -> &'static str {
    if ordered { "</ol>" } else { "</ul>" }
}

/// Classify and wrap one list kind
///
/// Matching lines become [`MarkdownBlock::ListItem`]; every maximal run of
/// items of this kind is bracketed by open/close [`MarkdownBlock::RawHtmlLine`]s.
/// Anything else, including items of the other kind, ends the run.
pub(crate) fn group_list(blocks: Vec<MarkdownBlock>, ordered: bool) -> Vec<MarkdownBlock> {
    let pattern = if ordered { &ORDERED } else { &UNORDERED };
    let mut out = Vec::with_capacity(blocks.len() + 2);
    let mut in_list = false;

    for block in blocks {
        let item = match block {
            MarkdownBlock::ParagraphLine(ref line) => pattern.find(line).map(|marker| {
                MarkdownBlock::ListItem {
                    ordered,
                    text: line[marker.end()..].trim_end().to_string(),
                }
            }),
            _ => None,
        };

        match item {
            Some(item) => {
                if !in_list {
                    out.push(MarkdownBlock::RawHtmlLine(list_open(ordered).to_string()));
                    in_list = true;
                }
                out.push(item);
            }
            None => {
                if in_list {
                    out.push(MarkdownBlock::RawHtmlLine(list_close(ordered).to_string()));
                    in_list = false;
                }
                out.push(block);
            }
        }
    }

    if in_list {
        out.push(MarkdownBlock::RawHtmlLine(list_close(ordered).to_string()));
    }

    out
}
