//! Nested list rendering from raw list lines.

use crate::inline::{InlineMode, InlineTransformer};
use crate::parsing::blocks::kinds::ListItem;

/// Renders list lines, nesting every run of items indented deeper than the
/// item before it. A group is `<ol>` when any of its lines is numbered.
pub(crate) fn render_list(lines: &[&str], inline: &InlineTransformer<'_>) -> String {
    let items: Vec<Option<ListItem>> = lines.iter().map(|l| ListItem::parse(l)).collect();
    let ordered = items.iter().flatten().any(|item| item.ordered);

    let mut html = String::new();
    let mut i = 0;
    while i < lines.len() {
        let Some(item) = items[i] else {
            i += 1;
            continue;
        };

        let mut j = i + 1;
        while let Some(Some(next)) = items.get(j) {
            if next.indent <= item.indent {
                break;
            }
            j += 1;
        }

        html.push_str("<li>");
        html.push_str(&inline.transform(item.text, InlineMode::Body));
        if j > i + 1 {
            html.push_str(&render_list(&lines[i + 1..j], inline));
        }
        html.push_str("</li>");
        i = j;
    }

    let tag = if ordered { "ol" } else { "ul" };
    format!("<{tag}>{html}</{tag}>")
}
