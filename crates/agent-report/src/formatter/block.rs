//! Intermediate line model used while converting one text blob
//!
//! Blocks exist only for the duration of a single [`super::ContentFormatter::format`]
//! call. Each pass consumes a `Vec<MarkdownBlock>` and returns a new one, so no
//! state leaks from one pass to the next.

/// Whether a table row is the header or a body row
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RowKind {
    Header,
    Data,
}

/// One table row: kind plus cell text in column order
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TableRow {
    pub kind: RowKind,
    pub cells: Vec<String>,
}

/// A pipe table recovered from the text
///
/// Holds at most one header row, always first; data rows keep input order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HtmlTable {
    rows: Vec<TableRow>,
}

impl HtmlTable {
    /// Start a table from its header cells
    pub fn with_header(cells: Vec<String>) -> Self {
        Self {
            rows: vec![TableRow {
                kind: RowKind::Header,
                cells,
            }],
        }
    }

    /// Append a body row
    pub fn push_data(&mut self, cells: Vec<String>) {
        self.rows.push(TableRow {
            kind: RowKind::Data,
            cells,
        });
    }

    pub fn header(&self) -> Option<&TableRow> {
        self.rows.first().filter(|row| row.kind == RowKind::Header)
    }

    pub fn data_rows(&self) -> impl Iterator<Item = &TableRow> {
        self.rows.iter().filter(|row| row.kind == RowKind::Data)
    }

    pub fn rows(&self) -> &[TableRow] {
        &self.rows
    }

    /// Rewrite every cell in place
    pub fn map_cells(&mut self, mut f: impl FnMut(&str) -> String) {
        for row in &mut self.rows {
            for cell in &mut row.cells {
                *cell = f(cell);
            }
        }
    }
}

/// A classified region of the text
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MarkdownBlock {
    /// `#`..`####` heading, marker stripped
    Heading { level: u8, text: String },
    /// One list entry, marker stripped
    ListItem { ordered: bool, text: String },
    /// A complete pipe table
    Table(HtmlTable),
    /// Unclaimed non-blank text, still eligible for paragraph grouping
    ParagraphLine(String),
    /// Markup already rendered by an earlier pass
    RawHtmlLine(String),
    /// Empty or whitespace-only line
    Blank,
}

impl MarkdownBlock {
    /// Split text into unclassified lines
    pub fn lines(text: &str) -> Vec<MarkdownBlock> {
        text.split('\n')
            .map(|line| {
                if line.trim().is_empty() {
                    MarkdownBlock::Blank
                } else {
                    MarkdownBlock::ParagraphLine(line.to_string())
                }
            })
            .collect()
    }
}
