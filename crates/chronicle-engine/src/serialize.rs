//! # Markdown Serialization
//!
//! Writes blocks back to source text so edits can be persisted.
//!
//! Code, math, table, heading and list blocks are rebuilt from their
//! fields. Paragraph-like blocks may hold HTML produced by an editor; only
//! `<code>`, `<strong>`/`<b>`, `<em>`/`<i>` and `<br>` are turned back into
//! Markdown and every other tag is dropped. The round trip is therefore
//! lossy for arbitrary HTML. For text, heading, code and math blocks a
//! second segment/serialize cycle reproduces the first.

use regex::Regex;
use serde::{Deserialize, Serialize};

use crate::parsing::ContentBlock;

/// Writes blocks as Markdown.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct MarkdownSerializer {
    /// Fence tag written for code blocks without a language.
    pub code_fallback_language: String,
}

impl Default for MarkdownSerializer {
    fn default() -> Self {
        Self {
            code_fallback_language: "plain".to_string(),
        }
    }
}

impl MarkdownSerializer {
    pub fn new(code_fallback_language: impl Into<String>) -> Self {
        Self {
            code_fallback_language: code_fallback_language.into(),
        }
    }

    pub fn serialize(&self, blocks: &[ContentBlock]) -> String {
        let mut md = String::new();
        self.write_blocks(&mut md, blocks);
        md.trim().to_string()
    }

    fn write_blocks(&self, md: &mut String, blocks: &[ContentBlock]) {
        for block in blocks {
            self.write_block(md, block);
        }
    }

    fn write_block(&self, md: &mut String, block: &ContentBlock) {
        match block {
            ContentBlock::Code { content, language } => {
                let language = language
                    .as_deref()
                    .filter(|lang| !lang.is_empty())
                    .unwrap_or(&self.code_fallback_language);
                md.push_str(&format!("```{language}\n{content}\n```\n\n"));
            }
            ContentBlock::Math { content } => {
                md.push_str(&format!("\\[\n{content}\n\\]\n\n"));
            }
            ContentBlock::Table {
                content,
                header,
                body,
            } => {
                if header.is_empty() {
                    md.push_str(content.trim_end());
                } else {
                    let separator = vec!["---"; header.len()];
                    let mut rows = vec![
                        pipe_row(header.as_slice()),
                        pipe_row(separator.as_slice()),
                    ];
                    rows.extend(body.iter().map(|row| pipe_row(row.as_slice())));
                    md.push_str(&rows.join("\n"));
                }
                md.push_str("\n\n");
            }
            ContentBlock::Heading { content } | ContentBlock::List { content } => {
                md.push_str(content);
                md.push_str("\n\n");
            }
            ContentBlock::Quote { content } => {
                let inner = self.serialize(content);
                for line in inner.split('\n').filter(|line| !line.is_empty()) {
                    md.push_str("> ");
                    md.push_str(line);
                    md.push('\n');
                }
                let trimmed = md.trim_end().len();
                md.truncate(trimmed);
                md.push_str("\n\n");
            }
            ContentBlock::ParaWithBackslash { content }
            | ContentBlock::SoftBreakPara { content } => {
                md.push_str(&paragraph_markdown(content));
                md.push_str("\n\n");
            }
            ContentBlock::Text { content } => {
                md.push_str(&text_markdown(content));
                md.push_str("\n\n");
            }
        }
    }
}

fn pipe_row<S: AsRef<str>>(cells: &[S]) -> String {
    let cells: Vec<&str> = cells.iter().map(|cell| cell.as_ref()).collect();
    format!("| {} |", cells.join(" | "))
}

fn replace(re: &Regex, text: &str, rep: &str) -> String {
    re.replace_all(text, rep).into_owned()
}

/// Turns the supported inline tags back into Markdown markers.
fn reverse_inline(text: &str) -> String {
    let text = replace(regex!(r"<code>(.*?)</code>"), text, "`${1}`");
    let text = replace(regex!(r"<strong>(.*?)</strong>"), &text, "**${1}**");
    let text = replace(regex!(r"<b>(.*?)</b>"), &text, "**${1}**");
    let text = replace(regex!(r"<em>(.*?)</em>"), &text, "*${1}*");
    replace(regex!(r"<i>(.*?)</i>"), &text, "*${1}*")
}

fn strip_tags(text: &str) -> String {
    replace(regex!(r"</?[A-Za-z][^>]*>"), text, "")
}

/// Forced breaks become a trailing backslash; a break at the very end is
/// dropped.
fn paragraph_markdown(content: &str) -> String {
    let text = replace(regex!(r"^<div[^>]*>|</div>$"), content, "");
    let text = reverse_inline(&text);
    let text = replace(regex!(r"<br\s*/?>\s*$"), &text, "");
    let text = replace(regex!(r"<br\s*/?>"), &text, "\\\n");
    strip_tags(&text).trim_end().to_string()
}

fn text_markdown(content: &str) -> String {
    let text = reverse_inline(content);
    let text = replace(regex!(r"<p>(.*?)</p>"), &text, "${1}\n");
    let text = replace(regex!(r"<br\s*/?>\n?"), &text, "\n");
    strip_tags(&text)
}

/// Serializes with the default fallback code language.
pub fn serialize(blocks: &[ContentBlock]) -> String {
    MarkdownSerializer::default().serialize(blocks)
}

/// Reverses the escaping applied to table cells by editors: `\n` becomes a
/// newline, `\|` a pipe and `\\` a single backslash.
pub fn unescape_markdown_cell(cell: &str) -> String {
    cell.replace(r"\n", "\n")
        .replace(r"\|", "|")
        .replace(r"\\", "\\")
}
