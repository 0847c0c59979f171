use super::kinds::{
    Backslashes, BlockQuote, CodeFence, Heading, ListItem, MathDelimiter, PipeTable, TableMarker,
};

/// Classification of a single line containing only local facts.
///
/// This is phase 1 of block parsing: each line is classified independently
/// without reference to surrounding context.
#[derive(Debug, Clone)]
pub struct LineClass<'a> {
    /// Line text without its trailing `\r`.
    pub text: &'a str,
    /// Whitespace only.
    pub is_blank: bool,
    pub is_quote: bool,
    /// Language tag if the line is a code fence.
    pub fence: Option<&'a str>,
    pub math_open: Option<MathDelimiter>,
    pub is_table_row: bool,
    pub is_table_separator: bool,
    pub is_table_marker: bool,
    pub is_heading: bool,
    pub is_list_item: bool,
    pub trailing: Backslashes,
}

impl LineClass<'_> {
    /// Lines that end a soft-break run and are never folded into one.
    pub fn starts_structural_block(&self) -> bool {
        self.is_quote
            || self.is_table_row
            || self.fence.is_some()
            || self.math_open.is_some()
            || self.is_list_item
            || self.is_heading
            || self.is_table_marker
    }
}

/// Classifies individual lines for the block parsing phase.
pub struct MarkdownLineClassifier;

impl MarkdownLineClassifier {
    /// Classifies a line into a [`LineClass`] containing local facts.
    pub fn classify<'a>(&self, line: &'a str) -> LineClass<'a> {
        let text = line.strip_suffix('\r').unwrap_or(line);

        LineClass {
            text,
            is_blank: text.trim().is_empty(),
            is_quote: BlockQuote::is_quote(text),
            fence: CodeFence::sig(text),
            math_open: MathDelimiter::open(text),
            is_table_row: PipeTable::is_row(text),
            is_table_separator: PipeTable::is_separator(text),
            is_table_marker: TableMarker::is_marker(text),
            is_heading: Heading::is_heading(text),
            is_list_item: ListItem::matches(text),
            trailing: Backslashes::of(text),
        }
    }
}
