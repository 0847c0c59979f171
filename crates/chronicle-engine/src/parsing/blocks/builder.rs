use crate::parsing::{SegmentOptions, table::parse_table};

use super::{
    classify::{LineClass, MarkdownLineClassifier},
    kinds::{Backslashes, BlockQuote, Paragraph, TableMarker},
    types::ContentBlock,
};

/// Splits documents into [`ContentBlock`]s.
///
/// Holds only options; every call works on its own line cursor, so one
/// segmenter can be shared across threads.
#[derive(Debug, Clone, Default)]
pub struct BlockSegmenter {
    options: SegmentOptions,
}

impl BlockSegmenter {
    pub fn new(options: SegmentOptions) -> Self {
        Self { options }
    }

    pub fn options(&self) -> &SegmentOptions {
        &self.options
    }

    pub fn segment(&self, text: &str) -> Vec<ContentBlock> {
        self.segment_at_depth(text, 0)
    }

    fn segment_at_depth(&self, text: &str, depth: usize) -> Vec<ContentBlock> {
        let classifier = MarkdownLineClassifier;
        let lines: Vec<LineClass> = text.split('\n').map(|l| classifier.classify(l)).collect();

        let mut run = SegmentRun {
            segmenter: self,
            lines: &lines,
            pos: 0,
            depth,
            out: vec![],
        };
        run.run();
        run.out
    }
}

/// Cursor over the classified lines of one document (or one quote body).
struct SegmentRun<'s, 'a> {
    segmenter: &'s BlockSegmenter,
    lines: &'s [LineClass<'a>],
    pos: usize,
    depth: usize,
    out: Vec<ContentBlock>,
}

impl<'s, 'a> SegmentRun<'s, 'a> {
    fn run(&mut self) {
        while self.pos < self.lines.len() {
            // Priority order: the first rule that consumes lines wins.
            let consumed = self.code_fence()
                || self.math_block()
                || self.soft_break_paragraph()
                || self.pipe_table()
                || self.table_marker()
                || self.heading()
                || self.quote()
                || self.list()
                || self.backslash_paragraph()
                || self.text();
            if !consumed {
                // blank
                self.pos += 1;
            }
        }
    }

    fn current(&self) -> &'s LineClass<'a> {
        &self.lines[self.pos]
    }

    fn joined(&self, start: usize, end: usize, sep: &str) -> String {
        self.lines[start..end]
            .iter()
            .map(|l| l.text)
            .collect::<Vec<_>>()
            .join(sep)
    }

    fn code_fence(&mut self) -> bool {
        let Some(language) = self.current().fence else {
            return false;
        };
        let language = (!language.is_empty()).then(|| language.to_string());

        let start = self.pos + 1;
        let end = (start..self.lines.len())
            .find(|&i| self.lines[i].fence.is_some())
            .unwrap_or(self.lines.len());

        let content = if start < end {
            self.joined(start, end, "\n")
        } else {
            String::new()
        };
        self.out.push(ContentBlock::Code { content, language });
        // Skip the closing fence; an unterminated block ends at EOF.
        self.pos = (end + 1).min(self.lines.len());
        true
    }

    fn math_block(&mut self) -> bool {
        let Some(delim) = self.current().math_open else {
            return false;
        };
        let first = delim.strip_opener(self.current().text);

        if let Some(content) = delim.strip_trailing_closer(first) {
            self.out.push(ContentBlock::Math {
                content: content.to_string(),
            });
            self.pos += 1;
            return true;
        }

        let mut collected = vec![];
        if !first.trim().is_empty() {
            collected.push(first);
        }
        self.pos += 1;
        while self.pos < self.lines.len() && !delim.contains_closer(self.current().text) {
            collected.push(self.current().text);
            self.pos += 1;
        }
        if self.pos < self.lines.len() {
            let before = delim.before_closer(self.current().text);
            if !before.trim().is_empty() {
                collected.push(before);
            }
            self.pos += 1;
        }

        self.out.push(ContentBlock::Math {
            content: collected.join("\n"),
        });
        true
    }

    fn soft_break_paragraph(&mut self) -> bool {
        if !self.segmenter.options.soft_breaks || self.current().is_quote {
            return false;
        }
        match self.current().trailing {
            Backslashes::None => false,
            Backslashes::Escaped(_) => {
                self.out.push(ContentBlock::ParaWithBackslash {
                    content: Paragraph::strip_one(self.current().text).to_string(),
                });
                self.pos += 1;
                true
            }
            Backslashes::Single => {
                let mut parts = vec![Paragraph::strip_one(self.current().text)];
                let mut next = self.pos + 1;
                while let Some(line) = self.lines.get(next) {
                    if line.starts_structural_block() || line.trailing != Backslashes::Single {
                        break;
                    }
                    parts.push(Paragraph::strip_one(line.text));
                    next += 1;
                }
                // One unterminated plain line closes the paragraph.
                if let Some(line) = self.lines.get(next)
                    && !line.is_blank
                    && !line.starts_structural_block()
                {
                    parts.push(line.text);
                    next += 1;
                }

                self.out.push(ContentBlock::SoftBreakPara {
                    content: parts.join(Paragraph::SOFT_BREAK),
                });
                self.pos = next;
                true
            }
        }
    }

    fn pipe_table(&mut self) -> bool {
        if !self.current().is_table_row
            || !self
                .lines
                .get(self.pos + 1)
                .is_some_and(|next| next.is_table_separator)
        {
            return false;
        }

        let end = (self.pos + 1..self.lines.len())
            .find(|&i| !self.lines[i].is_table_row)
            .unwrap_or(self.lines.len());
        let content = self.joined(self.pos, end, "\n") + "\n";

        match parse_table(&content).into_iter().next() {
            Some(table) => {
                self.out.push(ContentBlock::Table {
                    content,
                    header: table.header,
                    body: table.body,
                });
                self.pos = end;
                true
            }
            None => {
                log::debug!(
                    "rows at line {} look like a table but do not parse as one",
                    self.pos + 1
                );
                false
            }
        }
    }

    fn table_marker(&mut self) -> bool {
        if !self.current().is_table_marker {
            return false;
        }
        self.out.push(TableMarker::parse(self.current().text));
        self.pos += 1;
        true
    }

    fn heading(&mut self) -> bool {
        if !self.current().is_heading {
            return false;
        }
        self.out.push(ContentBlock::Heading {
            content: self.current().text.to_string(),
        });
        self.pos += 1;
        true
    }

    fn quote(&mut self) -> bool {
        if !self.current().is_quote {
            return false;
        }
        let start = self.pos;
        while self.pos < self.lines.len() && self.current().is_quote {
            self.pos += 1;
        }
        let inner: Vec<&str> = self.lines[start..self.pos]
            .iter()
            .map(|l| BlockQuote::strip_marker(l.text))
            .collect();

        let content = if self.depth >= self.segmenter.options.max_quote_depth {
            log::warn!(
                "quote nesting deeper than {} levels kept as plain text",
                self.segmenter.options.max_quote_depth
            );
            inner
                .into_iter()
                .filter(|line| !line.trim().is_empty())
                .map(|line| ContentBlock::Text {
                    content: line.to_string(),
                })
                .collect()
        } else {
            self.segmenter
                .segment_at_depth(&inner.join("\n"), self.depth + 1)
                .into_iter()
                .filter(ContentBlock::allowed_in_quote)
                .collect()
        };

        self.out.push(ContentBlock::Quote { content });
        true
    }

    fn list(&mut self) -> bool {
        if !self.current().is_list_item {
            return false;
        }
        let start = self.pos;
        while self.pos < self.lines.len() && self.current().is_list_item {
            self.pos += 1;
        }
        self.out.push(ContentBlock::List {
            content: self.joined(start, self.pos, "\n"),
        });
        true
    }

    /// Backslash lines outside the soft-break context keep their backslashes.
    fn backslash_paragraph(&mut self) -> bool {
        match self.current().trailing {
            Backslashes::None => false,
            Backslashes::Escaped(_) => {
                self.out.push(ContentBlock::ParaWithBackslash {
                    content: self.current().text.to_string(),
                });
                self.pos += 1;
                true
            }
            Backslashes::Single => {
                let start = self.pos;
                while self.pos < self.lines.len() && self.current().trailing == Backslashes::Single
                {
                    self.pos += 1;
                }
                self.out.push(ContentBlock::ParaWithBackslash {
                    content: self.joined(start, self.pos, "\n"),
                });
                true
            }
        }
    }

    fn text(&mut self) -> bool {
        if self.current().is_blank {
            return false;
        }
        self.out.push(ContentBlock::Text {
            content: self.current().text.to_string(),
        });
        self.pos += 1;
        true
    }
}
