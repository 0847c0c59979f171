//! Pipe table recognition.

use serde::Serialize;

use super::span::Span;

/// One pipe table found in a larger text.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct TableMatch {
    /// Cells of the last row before the separator.
    pub header: Vec<String>,
    /// Cells of every non-blank row after the separator.
    pub body: Vec<Vec<String>>,
    /// The matched source text.
    pub raw: String,
    /// Byte offsets of `raw` in the input.
    pub span: Span,
}

/// Finds every header + separator + body row group in `text`.
///
/// The separator row may only contain `|`, `:`, `-` and spaces, and must hold
/// at least one dash. A row group without such a separator is not a table.
/// The separator must be followed by a newline.
pub fn parse_table(text: &str) -> Vec<TableMatch> {
    let table = regex!(
        r"(?m)((?:^\s*\|.*\|\s*\n)+)\s*([| :]*)-+([| :\-]*)\n((?:\s*\|.*\|\s*\n?)*)"
    );

    table
        .captures_iter(text)
        .filter_map(|caps| {
            let whole = caps.get(0)?;
            let header = caps[1]
                .trim()
                .split('\n')
                .filter(|row| !row.trim().is_empty())
                .last()
                .map(split_row)?;
            let body = caps[4]
                .split('\n')
                .filter(|row| !row.trim().is_empty())
                .map(split_row)
                .collect();
            Some(TableMatch {
                header,
                body,
                raw: whole.as_str().to_string(),
                span: Span {
                    start: whole.start(),
                    end: whole.end(),
                },
            })
        })
        .collect()
}

/// Strips one leading and one trailing pipe, then splits and trims cells.
fn split_row(row: &str) -> Vec<String> {
    let row = row.trim();
    let row = row.strip_prefix('|').unwrap_or(row);
    let row = row.strip_suffix('|').unwrap_or(row);
    row.split('|').map(|cell| cell.trim().to_string()).collect()
}
