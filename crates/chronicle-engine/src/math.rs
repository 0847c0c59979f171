//! Math typesetting boundary.
//!
//! Segmentation never looks at typeset output: math block boundaries are
//! decided from the raw TeX. Typesetting only happens while rendering, and a
//! failure is always recoverable. The caller keeps the original delimited
//! text and nothing surfaces to the user.

use latex2mathml::{DisplayStyle, latex_to_mathml};
use thiserror::Error;

#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum TypesetError {
    #[error("TeX input is empty")]
    Empty,
    #[error("TeX error: {0}")]
    Backend(String),
}

/// Turns a TeX string into an HTML fragment.
///
/// Implementations must be pure: no network or file access, no shared
/// mutable state.
pub trait Typesetter: Send + Sync {
    fn typeset(&self, tex: &str, display: bool) -> Result<String, TypesetError>;
}

/// Default backend producing MathML through `latex2mathml`.
#[derive(Debug, Default, Clone, Copy)]
pub struct MathMlTypesetter;

impl Typesetter for MathMlTypesetter {
    fn typeset(&self, tex: &str, display: bool) -> Result<String, TypesetError> {
        if tex.trim().is_empty() {
            return Err(TypesetError::Empty);
        }
        let style = if display {
            DisplayStyle::Block
        } else {
            DisplayStyle::Inline
        };
        latex_to_mathml(tex, style).map_err(|e| TypesetError::Backend(e.to_string()))
    }
}

/// Which delimiter produced a math span, and therefore how it is wrapped.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MathStyle {
    /// `\[ ... \]` inline or a math block.
    Display,
    /// `$$ ... $$` inside a line.
    InlineDouble,
    /// `\( ... \)`
    InlineSlash,
    /// `$ ... $`
    InlineSingle,
}

impl MathStyle {
    pub fn is_display(self) -> bool {
        matches!(self, MathStyle::Display)
    }

    pub fn class(self) -> &'static str {
        match self {
            MathStyle::Display => "katex-display-wrapper",
            MathStyle::InlineDouble => "inline-math-double",
            MathStyle::InlineSlash => "inline-math-slash",
            MathStyle::InlineSingle => "inline-math-single",
        }
    }

    fn data_type(self) -> &'static str {
        if self.is_display() { "block" } else { "inline" }
    }
}

/// Typesets `tex` and wraps it in an element an editor can click back into.
///
/// Returns `None` when the typesetter fails; the caller keeps its source text.
pub fn typeset_wrapped(typesetter: &dyn Typesetter, tex: &str, style: MathStyle) -> Option<String> {
    match typesetter.typeset(tex, style.is_display()) {
        Ok(html) => Some(wrap(&html, tex, style)),
        Err(err) => {
            log::debug!("leaving {tex:?} untypeset: {err}");
            None
        }
    }
}

fn wrap(html: &str, tex: &str, style: MathStyle) -> String {
    let tag = if style.is_display() { "div" } else { "span" };
    format!(
        r#"<{tag} class="{} katex-interactive" data-tex="{}" data-type="{}">{html}</{tag}>"#,
        style.class(),
        html_escape::encode_double_quoted_attribute(tex),
        style.data_type(),
    )
}

#[cfg(test)]
pub(crate) mod testing {
    use super::{TypesetError, Typesetter};

    /// Deterministic backend: echoes the TeX, fails on `\bad`.
    pub(crate) struct EchoTypesetter;

    impl Typesetter for EchoTypesetter {
        fn typeset(&self, tex: &str, display: bool) -> Result<String, TypesetError> {
            if tex.contains("\\bad") {
                return Err(TypesetError::Backend(format!("undefined control sequence in {tex}")));
            }
            let mode = if display { "display" } else { "inline" };
            Ok(format!("<m {mode}>{tex}</m>"))
        }
    }
}
