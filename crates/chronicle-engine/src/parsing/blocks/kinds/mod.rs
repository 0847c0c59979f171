pub mod block_quote;
pub mod code_fence;
pub mod heading;
pub mod list;
pub mod math_block;
pub mod paragraph;
pub mod pipe_table;
pub mod table_marker;

pub use block_quote::BlockQuote;
pub use code_fence::CodeFence;
pub use heading::Heading;
pub use list::ListItem;
pub use math_block::MathDelimiter;
pub use paragraph::{Backslashes, Paragraph};
pub use pipe_table::PipeTable;
pub use table_marker::TableMarker;
