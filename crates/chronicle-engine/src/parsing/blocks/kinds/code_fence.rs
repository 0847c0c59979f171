/// Fenced code block with owned delimiter constant.
///
/// Any fence line closes an open block; the language tag is only read from
/// the opening line.
pub struct CodeFence;

impl CodeFence {
    pub const BACKTICKS: &'static str = "```";

    /// Language tag of a fence line, `Some("")` for a bare fence.
    pub fn sig(line: &str) -> Option<&str> {
        let rest = line.trim_start().strip_prefix(Self::BACKTICKS)?;
        let end = rest
            .find(|c: char| !(c.is_ascii_alphanumeric() || c == '_'))
            .unwrap_or(rest.len());
        Some(&rest[..end])
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn detect_fence_with_language() {
        assert_eq!(CodeFence::sig("```rust"), Some("rust"));
    }

    #[test]
    fn detect_indented_bare_fence() {
        assert_eq!(CodeFence::sig("   ```"), Some(""));
    }

    #[test]
    fn language_stops_at_non_word_character() {
        assert_eq!(CodeFence::sig("```c++ extra"), Some("c"));
    }

    #[test]
    fn no_fence() {
        assert_eq!(CodeFence::sig("hello ```"), None);
        assert_eq!(CodeFence::sig("~~~"), None);
    }
}
