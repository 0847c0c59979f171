/// Blockquote block type with owned delimiter constant.
///
/// A quote line needs a space after the marker: `>text` is not a quote.
pub struct BlockQuote;

impl BlockQuote {
    /// The blockquote prefix character.
    pub const PREFIX: char = '>';

    pub fn is_quote(line: &str) -> bool {
        line.trim_start()
            .strip_prefix(Self::PREFIX)
            .is_some_and(|rest| rest.starts_with(' '))
    }

    /// Removes leading whitespace, one `>` and at most one whitespace
    /// character after it. Lines without a marker come back unchanged.
    pub fn strip_marker(line: &str) -> &str {
        let Some(rest) = line.trim_start().strip_prefix(Self::PREFIX) else {
            return line;
        };
        let mut chars = rest.chars();
        match chars.next() {
            Some(c) if c.is_whitespace() => chars.as_str(),
            _ => rest,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn quote_needs_space_after_marker() {
        assert!(BlockQuote::is_quote("> hello"));
        assert!(BlockQuote::is_quote("   > hello"));
        assert!(!BlockQuote::is_quote(">hello"));
        assert!(!BlockQuote::is_quote("hello > there"));
    }

    #[test]
    fn strip_single_marker() {
        assert_eq!(BlockQuote::strip_marker("> hello"), "hello");
        assert_eq!(BlockQuote::strip_marker(">hello"), "hello");
    }

    #[test]
    fn strip_keeps_nested_marker() {
        assert_eq!(BlockQuote::strip_marker("> > nested"), "> nested");
    }

    #[test]
    fn strip_keeps_extra_indentation() {
        assert_eq!(BlockQuote::strip_marker(">   - item"), "  - item");
    }

    #[test]
    fn strip_without_marker_is_identity() {
        assert_eq!(BlockQuote::strip_marker("  plain"), "  plain");
    }
}
