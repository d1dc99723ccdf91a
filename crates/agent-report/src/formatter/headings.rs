//! ATX heading classification

use super::block::MarkdownBlock;

/// Most specific marker first so `### x` is never read as `# ## x`
const MARKERS: [(&str, u8); 4] = [("#### ", 4), ("### ", 3), ("## ", 2), ("# ", 1)];

fn heading(line: &str) -> Option<(u8, &str)> {
    MARKERS.iter().find_map(|(marker, level)| {
        line.strip_prefix(*marker)
            .map(str::trim)
            .filter(|text| !text.is_empty())
            .map(|text| (*level, text))
    })
}

/// Turn `#`..`####` lines into [`MarkdownBlock::Heading`]
pub(crate) fn classify_headings(blocks: Vec<MarkdownBlock>) -> Vec<MarkdownBlock> {
    blocks
        .into_iter()
        .map(|block| match block {
            MarkdownBlock::ParagraphLine(line) => match heading(&line) {
                Some((level, text)) => MarkdownBlock::Heading {
                    level,
                    text: text.to_string(),
                },
                None => MarkdownBlock::ParagraphLine(line),
            },
            other => other,
        })
        .collect()
}

/// Opening tag for a heading level
pub(crate) fn open_tag(level: u8) -> &'static str {
    match level {
        1 => r#"<h1 style="color: #667eea; margin-top: 30px; margin-bottom: 15px;">"#,
        2 => r#"<h2 style="color: #667eea; margin-top: 25px; margin-bottom: 12px;">"#,
        3 => r#"<h3 style="color: #667eea; margin-top: 20px; margin-bottom: 10px;">"#,
        _ => "<h4>",
    }
}

/// Closing tag for a heading level
pub(crate) fn close_tag(level: u8) -> &'static str {
    match level {
        1 => "</h1>",
        2 => "</h2>",
        3 => "</h3>",
        _ => "</h4>",
    }
}
