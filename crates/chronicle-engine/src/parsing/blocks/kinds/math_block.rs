/// Opening delimiter of a display math block, which also fixes its closer.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MathDelimiter {
    /// `\[ ... \]`
    Bracket,
    /// `$$ ... $$`
    Dollar,
}

impl MathDelimiter {
    /// Delimiter opening a math block on `line`, after optional whitespace.
    pub fn open(line: &str) -> Option<Self> {
        let t = line.trim_start();
        if t.starts_with(Self::Bracket.opener()) {
            Some(Self::Bracket)
        } else if t.starts_with(Self::Dollar.opener()) {
            Some(Self::Dollar)
        } else {
            None
        }
    }

    pub fn opener(self) -> &'static str {
        match self {
            Self::Bracket => r"\[",
            Self::Dollar => "$$",
        }
    }

    pub fn closer(self) -> &'static str {
        match self {
            Self::Bracket => r"\]",
            Self::Dollar => "$$",
        }
    }

    /// Text after the opener on the first line.
    pub fn strip_opener(self, line: &str) -> &str {
        let t = line.trim_start();
        t.strip_prefix(self.opener()).unwrap_or(t)
    }

    /// Text before a closer that ends the line, ignoring trailing whitespace.
    pub fn strip_trailing_closer(self, line: &str) -> Option<&str> {
        line.trim_end().strip_suffix(self.closer())
    }

    pub fn contains_closer(self, line: &str) -> bool {
        line.contains(self.closer())
    }

    /// Text before the closer on a closing line. A closer that does not end
    /// the line cuts at its first occurrence.
    pub fn before_closer(self, line: &str) -> &str {
        if let Some(before) = self.strip_trailing_closer(line) {
            return before;
        }
        line.find(self.closer()).map_or(line, |idx| &line[..idx])
    }
}
