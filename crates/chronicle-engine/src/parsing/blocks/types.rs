use serde::{Deserialize, Serialize};

/// One typed unit of document structure.
///
/// Blocks are plain values: every parse creates them fresh and nothing
/// mutates them afterwards. The JSON form carries a `type` tag
/// (`text`, `code`, `table`, `heading`, `list`, `quote`, `paraWithBackslash`,
/// `softBreakPara`, `math`). `para-backslash` is also accepted on input.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "camelCase")]
pub enum ContentBlock {
    /// A single plain line.
    Text { content: String },
    /// Verbatim text between fences.
    Code {
        content: String,
        #[serde(default, skip_serializing_if = "Option::is_none")]
        language: Option<String>,
    },
    /// Raw rows plus the parsed grid. The grid is empty for a table marker
    /// whose payload could not be read.
    Table {
        content: String,
        #[serde(default)]
        header: Vec<String>,
        #[serde(default)]
        body: Vec<Vec<String>>,
    },
    /// The raw `#...` line.
    Heading { content: String },
    /// Raw list lines; nesting is recovered while rendering.
    List { content: String },
    /// Segmented de-quoted text, without code, table or quote children.
    Quote { content: Vec<ContentBlock> },
    /// Lines kept apart by trailing backslash escapes.
    #[serde(alias = "para-backslash")]
    ParaWithBackslash { content: String },
    /// Lines merged by single trailing backslashes, joined with `<br>`.
    SoftBreakPara { content: String },
    /// Display TeX without its delimiters.
    Math { content: String },
}

impl ContentBlock {
    /// Whether this block is kept as a child of a quote.
    pub fn allowed_in_quote(&self) -> bool {
        !matches!(
            self,
            ContentBlock::Code { .. } | ContentBlock::Table { .. } | ContentBlock::Quote { .. }
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn json_uses_camel_case_type_tags() {
        let blocks = vec![
            ContentBlock::SoftBreakPara {
                content: "a<br>b".into(),
            },
            ContentBlock::Code {
                content: "x".into(),
                language: None,
            },
        ];
        assert_eq!(
            serde_json::to_string(&blocks).unwrap(),
            r#"[{"type":"softBreakPara","content":"a<br>b"},{"type":"code","content":"x"}]"#
        );
    }

    #[test]
    fn json_table_without_grid_defaults_to_empty() {
        let block: ContentBlock =
            serde_json::from_str(r#"{"type":"table","content":"| a |"}"#).unwrap();
        assert_eq!(
            block,
            ContentBlock::Table {
                content: "| a |".into(),
                header: vec![],
                body: vec![],
            }
        );
    }

    #[test]
    fn json_accepts_hyphenated_para_backslash_tag() {
        let block: ContentBlock =
            serde_json::from_str(r#"{"type":"para-backslash","content":"C:\\"}"#).unwrap();
        assert_eq!(
            block,
            ContentBlock::ParaWithBackslash {
                content: "C:\\".into(),
            }
        );
        assert_eq!(
            serde_json::to_string(&block).unwrap(),
            r#"{"type":"paraWithBackslash","content":"C:\\"}"#
        );
    }

    #[test]
    fn nested_quote_round_trips_through_json() {
        let quote = ContentBlock::Quote {
            content: vec![ContentBlock::Text {
                content: "inner".into(),
            }],
        };
        let json = serde_json::to_string(&quote).unwrap();
        assert_eq!(serde_json::from_str::<ContentBlock>(&json).unwrap(), quote);
    }
}
