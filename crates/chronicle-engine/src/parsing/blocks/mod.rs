//! # Block Segmentation
//!
//! Two-phase, line-oriented block parsing.
//!
//! ## Parsing Phases
//!
//! 1. **Line Classification** (`classify`): each line is classified into a
//!    `LineClass` holding local facts (fence, math opener, table shape, quote
//!    marker, trailing backslashes, blank status)
//!
//! 2. **Block Construction** (`builder`): a `BlockSegmenter` walks the
//!    classified lines and tries its rules in priority order; the first rule
//!    that consumes lines emits a `ContentBlock`
//!
//! ## Rule Priority
//!
//! code fence, math block, soft-break paragraph, pipe table, table marker,
//! heading, quote, list, backslash paragraph, plain text.
//!
//! ## Modules
//!
//! - **`types`**: the `ContentBlock` sum type
//! - **`kinds`**: block-specific types with owned delimiters (CodeFence,
//!   MathDelimiter, BlockQuote, ListItem, Paragraph, PipeTable, TableMarker)
//! - **`classify`**: `MarkdownLineClassifier` produces `LineClass` for each line
//! - **`builder`**: `BlockSegmenter` rule chain
//!
//! ## Key Invariants
//!
//! - Fenced code and math blocks are raw zones: no other rule looks inside
//! - Unterminated fences and math blocks close at end of input
//! - Quote recursion is capped by `SegmentOptions::max_quote_depth`

pub mod builder;
pub mod classify;
pub mod kinds;
pub mod types;

pub use builder::BlockSegmenter;
pub use classify::{LineClass, MarkdownLineClassifier};
pub use types::ContentBlock;
