/// Line shapes that make the segmenter hand a row group to the table parser.
pub struct PipeTable;

impl PipeTable {
    /// `| ... |` with optional surrounding whitespace.
    pub fn is_row(line: &str) -> bool {
        regex!(r"^\s*\|.*\|\s*$").is_match(line)
    }

    /// Loose separator check; the table parser has the final word.
    pub fn is_separator(line: &str) -> bool {
        regex!(r"^\s*\|?\s*[-:]+.*\|\s*$").is_match(line)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn rows_need_pipes_on_both_ends() {
        assert!(PipeTable::is_row("| a | b |"));
        assert!(PipeTable::is_row("  |x|  "));
        assert!(!PipeTable::is_row("a | b |"));
        assert!(!PipeTable::is_row("| a | b"));
    }

    #[test]
    fn separator_shapes() {
        assert!(PipeTable::is_separator("| --- | :-: |"));
        assert!(PipeTable::is_separator("---|---|"));
        assert!(PipeTable::is_separator("| : | : |"));
        assert!(!PipeTable::is_separator("| 1 | 2 |"));
    }
}
