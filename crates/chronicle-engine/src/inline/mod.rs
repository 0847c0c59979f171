//! # Inline Transformation
//!
//! Ordered text rewrites applied to one line or one joined paragraph. A pass
//! never crosses a block boundary.
//!
//! ## Pass Order
//!
//! The order is load-bearing: every pass that emits markup stashes it in the
//! [`PlaceholderGuard`], so later passes cannot re-enter earlier output.
//!
//! 1. Guard HTML tags and escaped `\$`, `\\[`, `\\]`
//! 2. `\[ ... \]` display math
//! 3. `$$ ... $$` inline math
//! 4. `\( ... \)` inline math
//! 5. `$ ... $` inline math (blank payloads stay literal)
//! 6. Restore escaped punctuation
//! 7. Images, including pending placeholders (body only)
//! 8. Links and file cards (body only)
//! 9. Inline code (body only)
//! 10. `***bold italic***` (body only)
//! 11. `**bold**` (body only)
//! 12. `*italic*`
//! 13. Restore guarded fragments
//!
//! ## Modules
//!
//! - **`guard`**: `PlaceholderGuard` sentinel table
//! - **`media`**: image and link passes
//! - **`file_card`**: `FileCategory` extension tables for file cards

pub mod file_card;
pub mod guard;
mod media;

use regex::{Captures, Regex};

use crate::math::{MathStyle, Typesetter, typeset_wrapped};

pub use file_card::FileCategory;
pub use guard::PlaceholderGuard;

/// What kind of block a line belongs to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InlineMode {
    /// Paragraphs, list items and quotes: every pass runs.
    Body,
    /// Headings: math and italic only, no images, links, code or bold.
    Heading,
}

/// Runs the inline passes with a given typesetter.
pub struct InlineTransformer<'a> {
    typesetter: &'a dyn Typesetter,
    image_placeholder: &'a str,
}

impl<'a> InlineTransformer<'a> {
    pub fn new(typesetter: &'a dyn Typesetter, image_placeholder: &'a str) -> Self {
        Self {
            typesetter,
            image_placeholder,
        }
    }

    /// Transforms `text` into an HTML fragment.
    pub fn transform(&self, text: &str, mode: InlineMode) -> String {
        let mut guard = PlaceholderGuard::default();
        let mut s = guard.protect(text);

        for style in [
            MathStyle::Display,
            MathStyle::InlineDouble,
            MathStyle::InlineSlash,
            MathStyle::InlineSingle,
        ] {
            s = self.math(&s, &mut guard, style);
        }
        s = guard.restore_escapes(&s);

        if mode == InlineMode::Body {
            s = media::images(&s, &mut guard, self.image_placeholder);
            s = media::links(&s, &mut guard);
            s = regex!(r"`([^`]+?)`")
                .replace_all(&s, |caps: &Captures| {
                    guard.stash(format!("<code>{}</code>", &caps[1]))
                })
                .into_owned();
            s = regex!(r"\*\*\*(.+?)\*\*\*")
                .replace_all(&s, "<strong><i>${1}</i></strong>")
                .into_owned();
            s = regex!(r"\*\*(.+?)\*\*")
                .replace_all(&s, "<strong>${1}</strong>")
                .into_owned();
        }
        s = regex!(r"\*(.+?)\*")
            .replace_all(&s, "<i>${1}</i>")
            .into_owned();

        guard.restore_fragments(&s)
    }

    fn math(&self, text: &str, guard: &mut PlaceholderGuard, style: MathStyle) -> String {
        math_pattern(style)
            .replace_all(text, |caps: &Captures| {
                let tex = guard.reveal(&caps[1]);
                if style == MathStyle::InlineSingle && tex.trim().is_empty() {
                    return caps[0].to_string();
                }
                match typeset_wrapped(self.typesetter, &tex, style) {
                    Some(html) => guard.stash(html),
                    None => caps[0].to_string(),
                }
            })
            .into_owned()
    }
}

fn math_pattern(style: MathStyle) -> &'static Regex {
    match style {
        MathStyle::Display => regex!(r"(?s)\\\[(.+?)\\\]"),
        MathStyle::InlineDouble => regex!(r"(?s)\$\$(.+?)\$\$"),
        MathStyle::InlineSlash => regex!(r"(?s)\\\((.+?)\\\)"),
        MathStyle::InlineSingle => regex!(r"\$([^$\n]*?)\$"),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::math::testing::EchoTypesetter;
    use pretty_assertions::assert_eq;
    use rstest::rstest;

    fn body(text: &str) -> String {
        InlineTransformer::new(&EchoTypesetter, "Loading").transform(text, InlineMode::Body)
    }

    fn heading(text: &str) -> String {
        InlineTransformer::new(&EchoTypesetter, "Loading").transform(text, InlineMode::Heading)
    }

    #[rstest]
    #[case("Some *italic* and **bold** text.", "Some <i>italic</i> and <strong>bold</strong> text.")]
    #[case("***both***", "<strong><i>both</i></strong>")]
    #[case("plain text", "plain text")]
    #[case("a * b", "a * b")]
    fn emphasis(#[case] input: &str, #[case] expected: &str) {
        assert_eq!(body(input), expected);
    }

    #[test]
    fn code_span_is_immune_to_emphasis() {
        assert_eq!(body("`a*b*c` and *d*"), "<code>a*b*c</code> and <i>d</i>");
    }

    #[test]
    fn single_dollar_math_is_typeset() {
        assert_eq!(
            body("area $x^2$ here"),
            r#"area <span class="inline-math-single katex-interactive" data-tex="x^2" data-type="inline"><m inline>x^2</m></span> here"#
        );
    }

    #[rstest]
    #[case("$ $")]
    #[case("$$")]
    #[case("price $   $ total")]
    fn blank_single_dollar_payload_stays_literal(#[case] input: &str) {
        assert_eq!(body(input), input);
    }

    #[test]
    fn double_dollar_inside_line_is_inline_double() {
        let html = body("so $$a+b$$ ok");
        assert!(html.contains(r#"class="inline-math-double katex-interactive""#));
        assert!(html.contains(r#"data-tex="a+b""#));
    }

    #[test]
    fn slash_paren_math() {
        let html = body(r"\(y\)");
        assert!(html.starts_with(r#"<span class="inline-math-slash katex-interactive""#));
    }

    #[test]
    fn bracket_math_inside_line_is_display() {
        let html = body(r"see \[z\] there");
        assert!(html.contains(r#"<div class="katex-display-wrapper katex-interactive" data-tex="z" data-type="block">"#));
    }

    #[test]
    fn failed_typesetting_keeps_source() {
        assert_eq!(body(r"x $\bad$ y"), r"x $\bad$ y");
    }

    #[test]
    fn escaped_dollar_is_not_math() {
        assert_eq!(body(r"\$5 and \$6"), "$5 and $6");
    }

    #[test]
    fn math_output_is_not_re_entered_by_emphasis() {
        let html = body("$a*b*c$");
        assert!(html.contains("<m inline>a*b*c</m>"));
        assert!(!html.contains("<i>"));
    }

    #[test]
    fn html_tag_attributes_survive_emphasis() {
        assert_eq!(
            body(r#"<span title="*x*">*y*</span>"#),
            r#"<span title="*x*"><i>y</i></span>"#
        );
    }

    #[test]
    fn link_text_still_gets_emphasis() {
        assert_eq!(
            body("[**go**](https://e.com)"),
            r#"<a href="https://e.com" target="_blank" rel="noopener noreferrer" class="md-link"><strong>go</strong></a>"#
        );
    }

    #[test]
    fn emphasis_inside_link_url_is_untouched() {
        let html = body("[x](https://e.com/*y*)");
        assert!(html.contains(r#"href="https://e.com/*y*""#));
    }

    #[test]
    fn heading_mode_only_applies_italic_and_math() {
        assert_eq!(
            heading("Title with `code` and *it* and [l](u) $x$"),
            r#"Title with `code` and <i>it</i> and [l](u) <span class="inline-math-single katex-interactive" data-tex="x" data-type="inline"><m inline>x</m></span>"#
        );
        assert!(!heading("**b**").contains("<strong>"));
    }

    #[test]
    fn heading_mode_keeps_dangling_image_text() {
        assert_eq!(heading("![alt]"), "![alt]");
    }
}
