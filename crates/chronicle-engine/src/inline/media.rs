//! Image and link passes.

use regex::Captures;

use super::{file_card::FileCategory, guard::PlaceholderGuard};

/// `![alt](url)` becomes a captioned image container, then any `![alt]` not
/// followed by `(` becomes a pending placeholder so half-typed images show up.
pub(crate) fn images(text: &str, guard: &mut PlaceholderGuard, pending_label: &str) -> String {
    let complete = regex!(r"!\[([^\]]*?)\]\((.*?)\)")
        .replace_all(text, |caps: &Captures| {
            let alt = guard.reveal(&caps[1]);
            let url = guard.reveal(&caps[2]);
            guard.stash(image_html(&alt, Some(&url), pending_label))
        })
        .into_owned();

    let mut out = String::with_capacity(complete.len());
    let mut last = 0;
    for caps in regex!(r"!\[([^\]]*?)\]").captures_iter(&complete) {
        let Some(whole) = caps.get(0) else { continue };
        if complete[whole.end()..].starts_with('(') {
            continue;
        }
        let alt = guard.reveal(&caps[1]);
        out.push_str(&complete[last..whole.start()]);
        out.push_str(&guard.stash(image_html(&alt, None, pending_label)));
        last = whole.end();
    }
    out.push_str(&complete[last..]);
    out
}

fn image_html(alt: &str, url: Option<&str>, pending_label: &str) -> String {
    let alt = html_escape::encode_double_quoted_attribute(alt);
    let label = html_escape::encode_text(pending_label);
    let caption = if alt.is_empty() {
        String::new()
    } else {
        format!(r#"<div class="md-image-caption">{alt}</div>"#)
    };

    match url.map(str::trim).filter(|url| !url.is_empty()) {
        Some(url) => format!(
            r#"<div class="md-image-container"><div class="md-image-wrapper loading"><img src="{}" alt="{alt}" class="md-image" /><span class="md-placeholder-text">{label}</span></div>{caption}</div>"#,
            html_escape::encode_double_quoted_attribute(url)
        ),
        None => format!(
            r#"<div class="md-image-container"><div class="md-image-wrapper placeholder"><span class="md-placeholder-text">{label}</span></div>{caption}</div>"#
        ),
    }
}

/// `[text](url)` becomes a file card for known file extensions, otherwise an
/// anchor opening in a new tab. Anchor text stays visible to later passes.
pub(crate) fn links(text: &str, guard: &mut PlaceholderGuard) -> String {
    regex!(r"\[([^\]]+?)\]\((.*?)\)")
        .replace_all(text, |caps: &Captures| {
            let url = guard.reveal(caps[2].trim());
            match FileCategory::from_url(&url) {
                Some(category) => {
                    let name = guard.reveal(&caps[1]);
                    guard.stash(category.card_html(&name, &url))
                }
                None => {
                    let open = guard.stash(format!(
                        r#"<a href="{}" target="_blank" rel="noopener noreferrer" class="md-link">"#,
                        html_escape::encode_double_quoted_attribute(&url)
                    ));
                    let close = guard.stash("</a>".to_string());
                    format!("{open}{}{close}", &caps[1])
                }
            }
        })
        .into_owned()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn run(f: impl Fn(&str, &mut PlaceholderGuard) -> String, input: &str) -> String {
        let mut guard = PlaceholderGuard::default();
        let guarded = guard.protect(input);
        let out = f(&guarded, &mut guard);
        guard.restore_fragments(&out)
    }

    #[test]
    fn image_with_url_renders_img() {
        let html = run(|t, g| images(t, g, "Loading"), "![cat](/img/cat.png)");
        assert_eq!(
            html,
            r#"<div class="md-image-container"><div class="md-image-wrapper loading"><img src="/img/cat.png" alt="cat" class="md-image" /><span class="md-placeholder-text">Loading</span></div><div class="md-image-caption">cat</div></div>"#
        );
    }

    #[test]
    fn image_with_empty_url_renders_placeholder() {
        let html = run(|t, g| images(t, g, "Loading"), "![]( )");
        assert!(html.contains("md-image-wrapper placeholder"));
        assert!(!html.contains("<img"));
        assert!(!html.contains("md-image-caption"));
    }

    #[test]
    fn dangling_image_renders_placeholder() {
        let html = run(|t, g| images(t, g, "Loading"), "see ![diagram]");
        assert!(html.starts_with("see "));
        assert!(html.contains("md-image-wrapper placeholder"));
        assert!(html.contains(r#"<div class="md-image-caption">diagram</div>"#));
    }

    #[test]
    fn half_typed_image_with_open_paren_is_left_alone() {
        let html = run(|t, g| images(t, g, "Loading"), "![diagram](http://exa");
        assert_eq!(html, "![diagram](http://exa");
    }

    #[test]
    fn plain_link_opens_in_new_tab() {
        let html = run(links, "[docs](https://example.com)");
        assert_eq!(
            html,
            r#"<a href="https://example.com" target="_blank" rel="noopener noreferrer" class="md-link">docs</a>"#
        );
    }

    #[test]
    fn media_link_becomes_file_card() {
        let html = run(links, "[Talk](/uploads/talk.mp4)");
        assert!(html.starts_with(r#"<div class="file-card" data-url="/uploads/talk.mp4" data-name="Talk" data-type="Video">"#));
    }

    #[test]
    fn link_url_is_attribute_escaped() {
        let html = run(links, r#"[x](https://e.com/?a="b")"#);
        assert!(html.contains(r#"href="https://e.com/?a=&quot;b&quot;""#));
    }
}
