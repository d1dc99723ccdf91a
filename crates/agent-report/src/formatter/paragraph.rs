//! Paragraph grouping for lines no other pass claimed

use super::block::MarkdownBlock;

const PARAGRAPH_OPEN: &str = r#"<p style="margin: 10px 0; line-height: 1.8;">"#;

/// Merge each run of [`MarkdownBlock::ParagraphLine`] into one `<p>`
///
/// Lines are trimmed and joined with single spaces. Any other block ends the
/// run and passes through, as does a line that already opens with a tag.
pub(crate) fn group_paragraphs(blocks: Vec<MarkdownBlock>) -> Vec<MarkdownBlock> {
    let mut out = Vec::with_capacity(blocks.len());
    let mut pending: Vec<String> = Vec::new();

    for block in blocks {
        match block {
            MarkdownBlock::ParagraphLine(line) if line.trim_start().starts_with('<') => {
                flush(&mut pending, &mut out);
                out.push(MarkdownBlock::RawHtmlLine(line));
            }
            MarkdownBlock::ParagraphLine(line) => pending.push(line.trim().to_string()),
            other => {
                flush(&mut pending, &mut out);
                out.push(other);
            }
        }
    }
    flush(&mut pending, &mut out);

    out
}

fn flush(pending: &mut Vec<String>, out: &mut Vec<MarkdownBlock>) {
    if pending.is_empty() {
        return;
    }
    out.push(MarkdownBlock::RawHtmlLine(format!(
        "{PARAGRAPH_OPEN}{}</p>",
        pending.join(" ")
    )));
    pending.clear();
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_joins_consecutive_lines() {
        let blocks = group_paragraphs(MarkdownBlock::lines("first line\n  second line  "));
        assert_eq!(
            blocks,
            vec![MarkdownBlock::RawHtmlLine(format!(
                "{PARAGRAPH_OPEN}first line second line</p>"
            ))]
        );
    }

    #[test]
    fn test_blank_separates_paragraphs() {
        let blocks = group_paragraphs(MarkdownBlock::lines("one\n\ntwo"));
        assert_eq!(blocks.len(), 3);
        assert_eq!(blocks[1], MarkdownBlock::Blank);
    }

    #[test]
    fn test_other_blocks_are_boundaries() {
        let blocks = vec![
            MarkdownBlock::ParagraphLine("before".into()),
            MarkdownBlock::RawHtmlLine("<ul>".into()),
            MarkdownBlock::ParagraphLine("after".into()),
        ];
        let blocks = group_paragraphs(blocks);
        assert_eq!(blocks.len(), 3);
        assert_eq!(blocks[1], MarkdownBlock::RawHtmlLine("<ul>".into()));
    }

    #[test]
    fn test_tag_leading_line_is_not_wrapped() {
        let blocks = vec![
            MarkdownBlock::ParagraphLine("intro".into()),
            MarkdownBlock::ParagraphLine("  <strong>Lead</strong> sentence".into()),
            MarkdownBlock::ParagraphLine("more".into()),
        ];
        let blocks = group_paragraphs(blocks);
        assert_eq!(
            blocks,
            vec![
                MarkdownBlock::RawHtmlLine(format!("{PARAGRAPH_OPEN}intro</p>")),
                MarkdownBlock::RawHtmlLine("  <strong>Lead</strong> sentence".into()),
                MarkdownBlock::RawHtmlLine(format!("{PARAGRAPH_OPEN}more</p>")),
            ]
        );
    }

    #[test]
    fn test_empty_input() {
        assert!(group_paragraphs(Vec::new()).is_empty());
    }
}
