use super::BlockQuote;

/// One bullet (`-`, `*`) or numbered (`1.`) list line.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ListItem<'a> {
    /// Indentation width with tabs counted as four columns.
    pub indent: usize,
    pub ordered: bool,
    pub text: &'a str,
}

impl<'a> ListItem<'a> {
    pub const TAB_WIDTH: usize = 4;

    /// Whether `line` continues a list block, including items behind a `>`.
    pub fn matches(line: &str) -> bool {
        regex!(r"^[ \t]*([-*]|[0-9]+\.) ").is_match(line)
            || regex!(r"^\s*>\s*([-*]|[0-9]+\.) ").is_match(line)
    }

    /// Splits a list line into indentation, marker kind and text. A leading
    /// quote marker is dropped first.
    pub fn parse(line: &'a str) -> Option<Self> {
        let line = BlockQuote::strip_marker(line);
        let caps = regex!(r"^([ \t]*)([-*]|[0-9]+\.) (.*)$").captures(line)?;
        let indent = caps
            .get(1)?
            .as_str()
            .chars()
            .map(|c| if c == '\t' { Self::TAB_WIDTH } else { 1 })
            .sum();
        Some(Self {
            indent,
            ordered: caps.get(2)?.as_str().ends_with('.'),
            text: caps.get(3)?.as_str(),
        })
    }
}
