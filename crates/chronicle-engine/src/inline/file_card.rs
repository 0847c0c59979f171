use serde::Serialize;

/// Link targets that render as a file card instead of an anchor.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum FileCategory {
    Audio,
    Video,
    Document,
    CodeText,
    Archive,
}

impl FileCategory {
    const AUDIO: &'static [&'static str] = &["mp3", "wav", "ogg", "m4a", "flac", "aac"];
    const VIDEO: &'static [&'static str] = &["mp4", "webm", "mkv", "mov", "avi"];
    const DOCUMENT: &'static [&'static str] = &["pdf", "doc", "docx", "ppt", "pptx", "xls", "xlsx"];
    const CODE_TEXT: &'static [&'static str] = &[
        "txt", "md", "js", "ts", "json", "c", "cpp", "py", "java", "html", "css", "vue", "log",
        "xml", "yaml",
    ];
    const ARCHIVE: &'static [&'static str] = &["zip", "rar", "7z", "tar", "gz"];

    /// Classifies a lowercase extension without the leading dot.
    pub fn from_extension(ext: &str) -> Option<Self> {
        [
            (Self::AUDIO, FileCategory::Audio),
            (Self::VIDEO, FileCategory::Video),
            (Self::DOCUMENT, FileCategory::Document),
            (Self::CODE_TEXT, FileCategory::CodeText),
            (Self::ARCHIVE, FileCategory::Archive),
        ]
        .into_iter()
        .find(|(table, _)| table.contains(&ext))
        .map(|(_, category)| category)
    }

    /// Classifies a link target by the first `.ext` that ends the path or
    /// precedes a query string.
    pub fn from_url(url: &str) -> Option<Self> {
        let caps = regex!(r"(?i)\.([0-9a-z]+)(?:$|\?)").captures(url)?;
        Self::from_extension(&caps[1].to_ascii_lowercase())
    }

    /// Label written to `data-type` and shown on the card.
    pub fn label(self) -> &'static str {
        match self {
            FileCategory::Audio => "Audio",
            FileCategory::Video => "Video",
            FileCategory::Document => "Document",
            FileCategory::CodeText => "Code/Text",
            FileCategory::Archive => "Archive",
        }
    }

    fn icon_class(self) -> &'static str {
        match self {
            FileCategory::Audio => "file-icon-audio",
            FileCategory::Video => "file-icon-video",
            FileCategory::Document => "file-icon-document",
            FileCategory::CodeText => "file-icon-code-text",
            FileCategory::Archive => "file-icon-archive",
        }
    }

    /// Card markup. `name` and `url` are raw source text.
    pub fn card_html(self, name: &str, url: &str) -> String {
        let name = html_escape::encode_double_quoted_attribute(name);
        let url = html_escape::encode_double_quoted_attribute(url);
        let label = self.label();
        format!(
            r#"<div class="file-card" data-url="{url}" data-name="{name}" data-type="{label}"><div class="file-card-icon {}"></div><div class="file-card-info"><div class="file-name">{name}</div><div class="file-type">{label}</div></div></div>"#,
            self.icon_class()
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    #[case("song.mp3", Some(FileCategory::Audio))]
    #[case("/files/clip.MOV", Some(FileCategory::Video))]
    #[case("https://cdn.example.com/report.pdf?sig=abc", Some(FileCategory::Document))]
    #[case("notes.md", Some(FileCategory::CodeText))]
    #[case("backup.tar.gz", Some(FileCategory::Archive))]
    #[case("https://example.com", None)]
    #[case("https://example.com/page.php", None)]
    #[case("no-extension", None)]
    fn classifies_by_extension(#[case] url: &str, #[case] expected: Option<FileCategory>) {
        assert_eq!(FileCategory::from_url(url), expected);
    }

    #[test]
    fn card_escapes_attributes() {
        let html = FileCategory::Document.card_html(r#"Q1 "final""#, "a.pdf?x=1&y=2");
        assert!(html.contains(r#"data-name="Q1 &quot;final&quot;""#));
        assert!(html.contains(r#"data-url="a.pdf?x=1&amp;y=2""#));
        assert!(html.contains(r#"data-type="Document""#));
    }
}
