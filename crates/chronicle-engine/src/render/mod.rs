//! # HTML Rendering
//!
//! Walks a block list and emits an HTML fragment, one rendered block per
//! line. Quotes recurse into their children and lists recurse by
//! indentation. Every piece of text goes through the
//! [`InlineTransformer`](crate::inline::InlineTransformer).
//!
//! Tables render as nothing: an editor draws them with its own widget from
//! the block's header and body.

mod list;

use serde::{Deserialize, Serialize};

use crate::inline::{InlineMode, InlineTransformer};
use crate::math::{MathMlTypesetter, MathStyle, Typesetter, typeset_wrapped};
use crate::parsing::blocks::kinds::{Heading, Paragraph};
use crate::parsing::{ContentBlock, SegmentOptions, segment_with};

/// Spacer placed between the lines of a paragraph and after a quote's
/// first child.
pub const QUOTE_HARD_BREAK: &str = r#"<span class="quote-hard-break"></span>"#;

/// Rendering knobs.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct RenderOptions {
    /// Text shown inside an image container until the image loads.
    pub image_placeholder_text: String,
    /// Used when rendering raw text.
    pub segment: SegmentOptions,
}

impl Default for RenderOptions {
    fn default() -> Self {
        Self {
            image_placeholder_text: "Loading".to_string(),
            segment: SegmentOptions::default(),
        }
    }
}

/// What to render: raw text is segmented first.
#[derive(Debug, Clone, Copy)]
pub enum RenderInput<'a> {
    Text(&'a str),
    Blocks(&'a [ContentBlock]),
}

impl<'a> From<&'a str> for RenderInput<'a> {
    fn from(text: &'a str) -> Self {
        RenderInput::Text(text)
    }
}

impl<'a> From<&'a String> for RenderInput<'a> {
    fn from(text: &'a String) -> Self {
        RenderInput::Text(text)
    }
}

impl<'a> From<&'a [ContentBlock]> for RenderInput<'a> {
    fn from(blocks: &'a [ContentBlock]) -> Self {
        RenderInput::Blocks(blocks)
    }
}

impl<'a> From<&'a Vec<ContentBlock>> for RenderInput<'a> {
    fn from(blocks: &'a Vec<ContentBlock>) -> Self {
        RenderInput::Blocks(blocks)
    }
}

impl<'a> From<&'a ContentBlock> for RenderInput<'a> {
    fn from(block: &'a ContentBlock) -> Self {
        RenderInput::Blocks(std::slice::from_ref(block))
    }
}

/// Renders blocks to an HTML fragment.
#[derive(Debug, Clone)]
pub struct HtmlRenderer<T: Typesetter = MathMlTypesetter> {
    typesetter: T,
    options: RenderOptions,
}

impl HtmlRenderer {
    pub fn new() -> Self {
        Self::with_typesetter(MathMlTypesetter, RenderOptions::default())
    }

    pub fn with_options(options: RenderOptions) -> Self {
        Self::with_typesetter(MathMlTypesetter, options)
    }
}

impl Default for HtmlRenderer {
    fn default() -> Self {
        Self::new()
    }
}

impl<T: Typesetter> HtmlRenderer<T> {
    pub fn with_typesetter(typesetter: T, options: RenderOptions) -> Self {
        Self {
            typesetter,
            options,
        }
    }

    pub fn options(&self) -> &RenderOptions {
        &self.options
    }

    pub fn render<'a>(&self, input: impl Into<RenderInput<'a>>) -> String {
        match input.into() {
            RenderInput::Text(text) => {
                self.render_blocks(&segment_with(text, &self.options.segment))
            }
            RenderInput::Blocks(blocks) => self.render_blocks(blocks),
        }
    }

    pub fn render_blocks(&self, blocks: &[ContentBlock]) -> String {
        blocks
            .iter()
            .map(|block| self.render_block(block))
            .collect::<Vec<_>>()
            .join("\n")
    }

    fn inline(&self) -> InlineTransformer<'_> {
        InlineTransformer::new(&self.typesetter, &self.options.image_placeholder_text)
    }

    fn render_block(&self, block: &ContentBlock) -> String {
        match block {
            ContentBlock::Math { content } => {
                typeset_wrapped(&self.typesetter, content, MathStyle::Display)
                    .unwrap_or_else(|| format!("<pre>{}</pre>", html_escape::encode_text(content)))
            }
            ContentBlock::Quote { content } => self.quote(content),
            ContentBlock::List { content } => {
                let lines: Vec<&str> = content.split('\n').filter(|l| !l.is_empty()).collect();
                list::render_list(&lines, &self.inline())
            }
            ContentBlock::Table { .. } => String::new(),
            ContentBlock::Code { content, language } => code(content, language.as_deref()),
            ContentBlock::Heading { content } => match Heading::parse(content) {
                Some((level, text)) => format!(
                    "<h{level}>{}</h{level}>",
                    self.inline().transform(text, InlineMode::Heading)
                ),
                None => self.paragraph(content),
            },
            ContentBlock::SoftBreakPara { content } => self.soft_break_paragraph(content),
            ContentBlock::ParaWithBackslash { content } | ContentBlock::Text { content } => {
                self.paragraph(content)
            }
        }
    }

    /// Children are concatenated with a single spacer after the first one.
    fn quote(&self, children: &[ContentBlock]) -> String {
        let mut html = String::new();
        for (i, child) in children.iter().enumerate() {
            if i == 1 {
                html.push_str(QUOTE_HARD_BREAK);
            }
            html.push_str(&self.render_block(child));
        }
        format!("<blockquote class='md-quote-block'>{html}</blockquote>")
    }

    /// Each `<br>` segment is transformed on its own so emphasis and math
    /// never span a forced break.
    fn soft_break_paragraph(&self, content: &str) -> String {
        let inline = self.inline();
        let html = content
            .split(Paragraph::SOFT_BREAK)
            .map(|segment| inline.transform(segment, InlineMode::Body))
            .collect::<Vec<_>>()
            .join(Paragraph::SOFT_BREAK);
        format!(r#"<div class="para-backslash">{html}</div>"#)
    }

    fn paragraph(&self, content: &str) -> String {
        if content.contains(Paragraph::SOFT_BREAK) {
            return self.soft_break_paragraph(content);
        }
        let inline = self.inline();
        let html = content
            .split('\n')
            .map(|line| inline.transform(line, InlineMode::Body).replace('\\', "&#92;"))
            .collect::<Vec<_>>()
            .join(QUOTE_HARD_BREAK);
        format!(r#"<div class="para-backslash">{html}</div>"#)
    }
}

fn code(content: &str, language: Option<&str>) -> String {
    let body = html_escape::encode_text(content);
    match language.filter(|lang| !lang.is_empty()) {
        Some(lang) => format!(
            r#"<pre><code class="language-{}">{body}</code></pre>"#,
            html_escape::encode_double_quoted_attribute(lang)
        ),
        None => format!("<pre><code>{body}</code></pre>"),
    }
}

/// Renders raw text or blocks with the default MathML backend.
pub fn render<'a>(input: impl Into<RenderInput<'a>>) -> String {
    HtmlRenderer::new().render(input)
}
