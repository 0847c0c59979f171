use serde::{Deserialize, Serialize};

use crate::parsing::blocks::types::ContentBlock;

/// Pre-serialized table line: `[[MARKDOWN_TABLE:{"header":[..],"body":[[..]]}]]`.
///
/// Editors splice tables out of the text as these markers and hand them
/// back unchanged; the segmenter turns each one straight into a table.
pub struct TableMarker;

#[derive(Debug, Default, Deserialize)]
#[serde(default)]
struct TableGrid {
    header: Vec<String>,
    body: Vec<Vec<String>>,
}

#[derive(Serialize)]
struct TableGridRef<'a> {
    header: &'a [String],
    body: &'a [Vec<String>],
}

impl TableMarker {
    pub const PREFIX: &'static str = "[[MARKDOWN_TABLE:";
    pub const SUFFIX: &'static str = "]]";

    pub fn is_marker(line: &str) -> bool {
        line.starts_with(Self::PREFIX)
    }

    /// Builds a table block from a marker line. A payload that is not valid
    /// JSON still yields a table, with an empty grid.
    pub fn parse(line: &str) -> ContentBlock {
        let payload = line
            .strip_prefix(Self::PREFIX)
            .and_then(|rest| rest.strip_suffix(Self::SUFFIX))
            .unwrap_or("{}");
        let grid = serde_json::from_str::<TableGrid>(payload).unwrap_or_else(|err| {
            log::warn!("table marker payload is not valid JSON: {err}");
            TableGrid::default()
        });
        ContentBlock::Table {
            content: line.to_string(),
            header: grid.header,
            body: grid.body,
        }
    }

    pub fn encode(header: &[String], body: &[Vec<String>]) -> Result<String, serde_json::Error> {
        let json = serde_json::to_string(&TableGridRef { header, body })?;
        Ok(format!("{}{json}{}", Self::PREFIX, Self::SUFFIX))
    }
}
