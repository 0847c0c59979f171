//! # chronicle-engine
//!
//! Line-oriented Markdown dialect used by Chronicle notes.
//!
//! The engine is a pure function of its input text:
//!
//! - [`segment`] splits a document into typed [`ContentBlock`]s
//! - [`render`] turns raw text or a block list into an HTML fragment
//! - [`serialize`] writes a block list back to Markdown (lossy for arbitrary HTML)
//! - [`parse_table`] finds pipe tables with their byte offsets
//!
//! No I/O happens here. Math is typeset through the [`Typesetter`] trait, with
//! [`MathMlTypesetter`] as the default backend.

/// Compiles a regex literal once per call site.
macro_rules! regex {
    ($re:literal $(,)?) => {{
        static RE: std::sync::OnceLock<regex::Regex> = std::sync::OnceLock::new();
        RE.get_or_init(|| regex::Regex::new($re).expect("invalid regex literal"))
    }};
}

pub mod inline;
pub mod math;
pub mod parsing;
pub mod render;
pub mod serialize;

// Re-export key types for easier usage
pub use inline::{InlineMode, InlineTransformer};
pub use math::{MathMlTypesetter, MathStyle, TypesetError, Typesetter};
pub use parsing::{
    BlockSegmenter, ContentBlock, ParseCache, SegmentOptions, Span, TableMatch, parse_table,
    segment, segment_with,
};
pub use render::{HtmlRenderer, RenderInput, RenderOptions, render};
pub use serialize::{MarkdownSerializer, serialize, unescape_markdown_cell};
