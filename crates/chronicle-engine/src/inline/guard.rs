use regex::Captures;

// Sentinels live in the Unicode private-use area, which no inline pattern
// mentions, so no pass can match across or inside a token.
const TOKEN_OPEN: char = '\u{E000}';
const TOKEN_CLOSE: char = '\u{E001}';
const ESCAPED_DOLLAR: &str = "\u{E002}";
const ESCAPED_LBRACKET: &str = "\u{E003}";
const ESCAPED_RBRACKET: &str = "\u{E004}";

/// Side table of fragments hidden from the inline passes.
///
/// Raw HTML tags found in the input are stashed first. Passes that emit
/// markup stash their output too, so later passes never re-enter it.
/// Each stashed fragment may only reference tokens stashed before it.
#[derive(Debug, Default)]
pub struct PlaceholderGuard {
    fragments: Vec<String>,
}

impl PlaceholderGuard {
    /// Hides HTML tags and the escaped `\$`, `\\[`, `\\]` sequences.
    ///
    /// Sentinel characters already present in `text` are stashed as literals
    /// first, so only tokens minted here can be restored.
    pub fn protect(&mut self, text: &str) -> String {
        let literal = regex!("[\u{E000}-\u{E004}]")
            .replace_all(text, |caps: &Captures| self.stash(caps[0].to_string()))
            .into_owned();
        let guarded = regex!(r"<[^>]+>")
            .replace_all(&literal, |caps: &Captures| self.stash(caps[0].to_string()))
            .into_owned();
        guarded
            .replace(r"\$", ESCAPED_DOLLAR)
            .replace(r"\\[", ESCAPED_LBRACKET)
            .replace(r"\\]", ESCAPED_RBRACKET)
    }

    /// Stores `fragment` and returns the token standing in for it.
    pub fn stash(&mut self, fragment: String) -> String {
        let id = self.fragments.len();
        self.fragments.push(fragment);
        format!("{TOKEN_OPEN}{id}{TOKEN_CLOSE}")
    }

    /// Turns escaped punctuation into the literal characters it stands for.
    pub fn restore_escapes(&self, text: &str) -> String {
        text.replace(ESCAPED_DOLLAR, "$")
            .replace(ESCAPED_LBRACKET, r"\[")
            .replace(ESCAPED_RBRACKET, r"\]")
    }

    /// Replaces every token with its stashed fragment, innermost tokens included.
    pub fn restore_fragments(&self, text: &str) -> String {
        self.restore_below(text, self.fragments.len())
    }

    // A fragment only expands tokens stashed before it.
    fn restore_below(&self, text: &str, limit: usize) -> String {
        regex!("\u{E000}([0-9]+)\u{E001}")
            .replace_all(text, |caps: &Captures| {
                caps[1]
                    .parse::<usize>()
                    .ok()
                    .filter(|&id| id < limit)
                    .and_then(|id| Some((id, self.fragments.get(id)?)))
                    .map(|(id, fragment)| self.restore_below(fragment, id))
                    .unwrap_or_else(|| caps[0].to_string())
            })
            .into_owned()
    }

    /// Recovers the source text a guarded span was produced from.
    ///
    /// Used for TeX payloads and attribute values, which must see what the
    /// author typed rather than sentinels.
    pub fn reveal(&self, text: &str) -> String {
        let text = text
            .replace(ESCAPED_DOLLAR, r"\$")
            .replace(ESCAPED_LBRACKET, r"\\[")
            .replace(ESCAPED_RBRACKET, r"\\]");
        self.restore_fragments(&text)
    }
}
