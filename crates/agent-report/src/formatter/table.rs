//! Pipe table detection and rendering

use super::block::{HtmlTable, MarkdownBlock};
use regex::Regex;
use std::sync::LazyLock;

/// `| :--- | :---: | ---: |`, outer pipes optional, at least two columns
static SEPARATOR: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^\|?\s*:?-+:?\s*(\|\s*:?-+:?\s*)+\|?\s*$").expect("separator pattern is valid")
});

const TABLE_OPEN: &str = r#"<table style="width: 100%; border-collapse: collapse; margin: 20px 0; box-shadow: 0 2px 8px rgba(0,0,0,0.1);">"#;
const HEADER_ROW_OPEN: &str =
    r#"    <tr style="background: linear-gradient(135deg, #667eea 0%, #764ba2 100%); color: white;">"#;
const HEADER_CELL_STYLE: &str =
    "padding: 12px 15px; text-align: left; font-weight: 600; border: 1px solid #ddd;";
const DATA_ROW_OPEN: &str = r#"    <tr style="background-color: #f8f9fa;">"#;
const DATA_CELL_STYLE: &str = "padding: 12px 15px; border: 1px solid #ddd; color: #2d3436;";

fn is_pipe_row(line: &str) -> bool {
    line.matches('|').count() >= 2
}

fn is_separator(block: &MarkdownBlock) -> bool {
    matches!(block, MarkdownBlock::ParagraphLine(line) if SEPARATOR.is_match(line.trim()))
}

/// Pipe-delimited cells, trimmed, empties dropped
fn split_cells(line: &str) -> Vec<String> {
    line.trim()
        .split('|')
        .map(str::trim)
        .filter(|cell| !cell.is_empty())
        .map(String::from)
        .collect()
}

/// Replace every header/separator/data run with a single [`MarkdownBlock::Table`]
///
/// A table starts at a line with two or more pipes that is immediately
/// followed by a separator line. Following pipe lines become data rows until a
/// line without pipes, a blank line, or a pipe line with no cell text. Pipe
/// lines outside a table pass through untouched.
pub(crate) fn extract_tables(blocks: Vec<MarkdownBlock>) -> Vec<MarkdownBlock> {
    let mut out = Vec::with_capacity(blocks.len());
    let mut current: Option<HtmlTable> = None;
    let mut blocks = blocks.into_iter().peekable();

    while let Some(block) = blocks.next() {
        let line = match block {
            MarkdownBlock::ParagraphLine(line) if is_pipe_row(&line) => line,
            other => {
                if let Some(table) = current.take() {
                    out.push(MarkdownBlock::Table(table));
                }
                out.push(other);
                continue;
            }
        };

        if blocks.peek().is_some_and(is_separator) {
            blocks.next();
            if let Some(table) = current.take() {
                out.push(MarkdownBlock::Table(table));
            }
            current = Some(HtmlTable::with_header(split_cells(&line)));
            continue;
        }

        let cells = split_cells(&line);
        match current.take() {
            Some(mut table) if !cells.is_empty() => {
                table.push_data(cells);
                current = Some(table);
            }
            // a row of bare pipes closes the table and is dropped
            Some(table) => out.push(MarkdownBlock::Table(table)),
            None => out.push(MarkdownBlock::ParagraphLine(line)),
        }
    }

    if let Some(table) = current {
        out.push(MarkdownBlock::Table(table));
    }

    out
}

/// Render a table as indented HTML lines
pub(crate) fn render_table(table: &HtmlTable) -> String {
    let mut html = String::new();
    html.push_str(TABLE_OPEN);
    html.push('\n');

    if let Some(header) = table.header() {
        html.push_str("  <thead>\n");
        html.push_str(HEADER_ROW_OPEN);
        html.push('\n');
        for cell in &header.cells {
            html.push_str(&format!(
                "      <th style=\"{HEADER_CELL_STYLE}\">{cell}</th>\n"
            ));
        }
        html.push_str("    </tr>\n  </thead>\n");
    }

    html.push_str("  <tbody>\n");
    for row in table.data_rows() {
        html.push_str(DATA_ROW_OPEN);
        html.push('\n');
        for cell in &row.cells {
            html.push_str(&format!("      <td style=\"{DATA_CELL_STYLE}\">{cell}</td>\n"));
        }
        html.push_str("    </tr>\n");
    }
    html.push_str("  </tbody>\n");
    html.push_str("</table>");
    html
}

#[cfg(test)]
mod tests {
    use super::*;

    fn tables(blocks: &[MarkdownBlock]) -> Vec<&HtmlTable> {
        blocks
            .iter()
            .filter_map(|b| match b {
                MarkdownBlock::Table(t) => Some(t),
                _ => None,
            })
            .collect()
    }

    #[test]
    fn test_separator_pattern() {
        assert!(SEPARATOR.is_match("|---|---|"));
        assert!(SEPARATOR.is_match("| :--- | :---: | ---: |"));
        assert!(SEPARATOR.is_match("---|---"));
        assert!(!SEPARATOR.is_match("|---|"));
        assert!(!SEPARATOR.is_match("---"));
        assert!(!SEPARATOR.is_match("| a | b |"));
    }

    #[test]
    fn test_split_cells() {
        assert_eq!(split_cells("| A |  B |"), vec!["A", "B"]);
        assert_eq!(split_cells("A | | C"), vec!["A", "C"]);
        assert!(split_cells("| |  |").is_empty());
    }

    #[test]
    fn test_basic_table() {
        let blocks = extract_tables(MarkdownBlock::lines("| A | B |\n|---|---|\n| 1 | 2 |"));
        assert_eq!(blocks.len(), 1);

        let table = tables(&blocks)[0];
        assert_eq!(table.header().unwrap().cells, vec!["A", "B"]);
        let data: Vec<_> = table.data_rows().collect();
        assert_eq!(data.len(), 1);
        assert_eq!(data[0].cells, vec!["1", "2"]);
    }

    #[test]
    fn test_table_ends_at_blank_or_plain_line() {
        let text = "intro\n| A | B |\n|---|---|\n| 1 | 2 |\n\n| 3 | 4 |\nafter";
        let blocks = extract_tables(MarkdownBlock::lines(text));

        assert_eq!(blocks[0], MarkdownBlock::ParagraphLine("intro".into()));
        assert!(matches!(blocks[1], MarkdownBlock::Table(_)));
        assert_eq!(blocks[2], MarkdownBlock::Blank);
        // no separator follows, so this stays literal text
        assert_eq!(blocks[3], MarkdownBlock::ParagraphLine("| 3 | 4 |".into()));
        assert_eq!(blocks[4], MarkdownBlock::ParagraphLine("after".into()));
        assert_eq!(tables(&blocks)[0].data_rows().count(), 1);
    }

    #[test]
    fn test_pipes_without_separator_pass_through() {
        let blocks = extract_tables(MarkdownBlock::lines("a | b | c\nnext line"));
        assert_eq!(
            blocks,
            vec![
                MarkdownBlock::ParagraphLine("a | b | c".into()),
                MarkdownBlock::ParagraphLine("next line".into()),
            ]
        );
    }

    #[test]
    fn test_uneven_rows_are_kept_as_is() {
        let text = "| A | B | C |\n|---|---|---|\n| 1 |\n| 2 | 3 | 4 | 5 |";
        let blocks = extract_tables(MarkdownBlock::lines(text));
        let table = tables(&blocks)[0];
        let widths: Vec<_> = table.data_rows().map(|r| r.cells.len()).collect();
        assert_eq!(widths, vec![1, 4]);
    }

    #[test]
    fn test_adjacent_tables() {
        let text = "| A | B |\n|---|---|\n| 1 | 2 |\n| X | Y |\n|---|---|\n| 3 | 4 |";
        let blocks = extract_tables(MarkdownBlock::lines(text));
        let found = tables(&blocks);
        assert_eq!(found.len(), 2);
        assert_eq!(found[1].header().unwrap().cells, vec!["X", "Y"]);
    }

    #[test]
    fn test_known_boundary_pipe_prose_before_dashes() {
        // Known heuristic boundary: prose with two pipes directly followed by a
        // dashed pipe line is indistinguishable from a table header.
        let text = "Revenue | margins | guidance all moved\n---|---";
        let blocks = extract_tables(MarkdownBlock::lines(text));
        assert_eq!(tables(&blocks).len(), 1);

        // A single pipe is never a header candidate.
        let blocks = extract_tables(MarkdownBlock::lines("up | down\n---|---"));
        assert!(tables(&blocks).is_empty());
    }

    #[test]
    fn test_render_table() {
        let mut table = HtmlTable::with_header(vec!["A".into(), "B".into()]);
        table.push_data(vec!["1".into(), "2".into()]);
        let html = render_table(&table);

        assert!(html.starts_with("<table"));
        assert!(html.ends_with("</table>"));
        assert_eq!(html.matches("<thead>").count(), 1);
        assert_eq!(html.matches("<th ").count(), 2);
        assert_eq!(html.matches("<td ").count(), 2);
        assert!(html.find(">A</th>").unwrap() < html.find(">B</th>").unwrap());
        assert!(html.find(">1</td>").unwrap() < html.find(">2</td>").unwrap());
        // every rendered line is markup
        assert!(html.lines().all(|line| line.trim_start().starts_with('<')));
    }
}
