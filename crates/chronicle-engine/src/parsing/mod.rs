//! # Parsing
//!
//! Turns raw note text into an ordered list of [`ContentBlock`]s.
//!
//! ## Modules
//!
//! - **`blocks`**: line classification and the block segmenter
//! - **`table`**: pipe table recognition with byte offsets
//! - **`cache`**: per-document memoization of segmentation results
//! - **`span`**: byte ranges into the source text

pub mod blocks;
pub mod cache;
pub mod span;
pub mod table;

use serde::{Deserialize, Serialize};

pub use blocks::{BlockSegmenter, ContentBlock};
pub use cache::ParseCache;
pub use span::Span;
pub use table::{TableMatch, parse_table};

/// Segmentation knobs.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct SegmentOptions {
    /// Quote levels segmented recursively; deeper quote bodies become plain
    /// text lines.
    pub max_quote_depth: usize,
    /// Merge single-backslash lines into soft-break paragraphs. When off,
    /// backslash lines are kept verbatim as backslash paragraphs.
    pub soft_breaks: bool,
}

impl SegmentOptions {
    pub const DEFAULT_MAX_QUOTE_DEPTH: usize = 32;
}

impl Default for SegmentOptions {
    fn default() -> Self {
        Self {
            max_quote_depth: Self::DEFAULT_MAX_QUOTE_DEPTH,
            soft_breaks: true,
        }
    }
}

/// Splits `text` into blocks with default options.
pub fn segment(text: &str) -> Vec<ContentBlock> {
    segment_with(text, &SegmentOptions::default())
}

pub fn segment_with(text: &str, options: &SegmentOptions) -> Vec<ContentBlock> {
    BlockSegmenter::new(options.clone()).segment(text)
}
