/// Paragraph block type.
///
/// Paragraphs have no delimiters. Trailing backslashes decide whether a
/// line merges with its neighbours: exactly one asks for a soft break, two
/// or more are an escape and keep the line on its own.
pub struct Paragraph;

impl Paragraph {
    /// Marker joining the lines of a soft-break paragraph.
    pub const SOFT_BREAK: &'static str = "<br>";

    /// Drops the last trailing backslash, if any.
    pub fn strip_one(line: &str) -> &str {
        line.strip_suffix('\\').unwrap_or(line)
    }
}

/// Trailing backslash run of a line.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Backslashes {
    None,
    Single,
    /// Two or more; renders as one fewer.
    Escaped(usize),
}

impl Backslashes {
    pub fn of(line: &str) -> Self {
        match line.chars().rev().take_while(|&c| c == '\\').count() {
            0 => Self::None,
            1 => Self::Single,
            n => Self::Escaped(n),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn counts_trailing_run_only() {
        assert_eq!(Backslashes::of(r"a\b"), Backslashes::None);
        assert_eq!(Backslashes::of(r"a\"), Backslashes::Single);
        assert_eq!(Backslashes::of(r"\"), Backslashes::Single);
        assert_eq!(Backslashes::of(r"a\\\"), Backslashes::Escaped(3));
    }

    #[test]
    fn strip_one_removes_a_single_backslash() {
        assert_eq!(Paragraph::strip_one(r"a\\"), r"a\");
        assert_eq!(Paragraph::strip_one("a"), "a");
    }
}
