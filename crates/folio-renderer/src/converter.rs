//! Line converter for blog drafts.
//!
//! Drafts follow a fixed layout: a three-line preamble (title, subtitle,
//! separator) followed by `## ` sections containing paragraphs, flat
//! `- ` lists and standalone `![alt](path)` images. The converter walks the
//! lines once, classifying each one and feeding it to a [`LineConverter`]
//! that owns the open section buffer and the in-list flag.
//!
//! Content outside a section is dropped: anything before the first `## `
//! header never reaches the output, and a draft without headers converts to
//! an empty string.

use std::sync::LazyLock;

use regex::Regex;

use crate::inline::convert_inline;

/// Number of leading lines (title, subtitle, separator) that are never rendered.
pub const PREAMBLE_LINES: usize = 3;

/// Image prefix used when none is configured.
///
/// Pages are written into `blog/`, so per-post assets are one level up.
pub const DEFAULT_ASSET_URL_PREFIX: &str = "../assets/blog";

/// Separator placed between converted sections.
const SECTION_SEPARATOR: &str = "\n\n";

const SECTION_OPEN: &str = r#"            <section style="margin-bottom: 2rem;">"#;
const SECTION_CLOSE: &str = "            </section>";
const LIST_OPEN: &str =
    r#"                <ul style="margin-left: 2rem; margin-top: 1rem; line-height: 1.8;">"#;
const LIST_CLOSE: &str = "                </ul>";

/// Regex to match a standalone image line (`![alt](path)`).
static IMAGE_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^!\[([^\]]+)\]\(([^)]+)\)").unwrap());

/// A single draft line after classification.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Line<'a> {
    /// `---` horizontal rule; ignored without touching list state.
    Rule,
    /// Blank lines and non-`##` headers.
    Skip,
    /// `## Title` starts a new section.
    Header(&'a str),
    /// `- item` list entry (marker removed).
    ListItem(&'a str),
    /// `![alt](path)` image.
    Image { alt: &'a str, path: &'a str },
    /// Any other text.
    Paragraph(&'a str),
}

impl<'a> Line<'a> {
    /// Classify a line whose trailing whitespace has already been removed.
    #[must_use]
    pub fn classify(line: &'a str) -> Self {
        let trimmed = line.trim();

        if trimmed == "---" {
            return Self::Rule;
        }
        if let Some(title) = line.strip_prefix("## ") {
            return Self::Header(title.trim());
        }
        if let Some(item) = trimmed.strip_prefix("- ") {
            return Self::ListItem(item.trim());
        }
        if let Some(caps) = IMAGE_RE.captures(trimmed) {
            let (_, [alt, path]) = caps.extract();
            return Self::Image { alt, path };
        }
        if trimmed.is_empty() || line.starts_with('#') {
            return Self::Skip;
        }
        Self::Paragraph(trimmed)
    }
}

/// Incremental converter state, folded over the lines of one draft.
///
/// # Example
///
/// ```
/// use folio_renderer::LineConverter;
///
/// let mut converter = LineConverter::new("post-1");
/// for line in ["Title", "Subtitle", "---", "## Intro", "Hello"] {
///     converter.push_line(line);
/// }
/// let sections = converter.finish();
/// assert_eq!(sections.len(), 1);
/// assert!(sections[0].contains("<h2>Intro</h2>"));
/// assert!(sections[0].contains("<p>Hello</p>"));
/// ```
pub struct LineConverter<'a> {
    post_id: &'a str,
    asset_url_prefix: &'a str,
    /// Lines of the section currently being built, `None` before the first header.
    section: Option<Vec<String>>,
    in_list: bool,
    line_index: usize,
    sections: Vec<String>,
}

impl<'a> LineConverter<'a> {
    /// Create a converter for one post.
    #[must_use]
    pub fn new(post_id: &'a str) -> Self {
        Self {
            post_id,
            asset_url_prefix: DEFAULT_ASSET_URL_PREFIX,
            section: None,
            in_list: false,
            line_index: 0,
            sections: Vec::new(),
        }
    }

    /// Set the URL prefix that relative image paths are rewritten under.
    #[must_use]
    pub fn with_asset_url_prefix(mut self, prefix: &'a str) -> Self {
        self.asset_url_prefix = prefix;
        self
    }

    /// Feed the next line of the draft.
    pub fn push_line(&mut self, line: &str) {
        let index = self.line_index;
        self.line_index += 1;
        if index < PREAMBLE_LINES {
            return;
        }

        match Line::classify(line.trim_end()) {
            Line::Rule => {}
            Line::Header(title) => {
                self.flush_section();
                self.section = Some(vec![
                    SECTION_OPEN.to_owned(),
                    format!("                <h2>{title}</h2>"),
                ]);
            }
            Line::ListItem(item) => {
                let Some(section) = self.section.as_mut() else {
                    return;
                };
                if !self.in_list {
                    section.push(LIST_OPEN.to_owned());
                    self.in_list = true;
                }
                section.push(format!(
                    "                    <li>{}</li>",
                    convert_inline(item)
                ));
            }
            Line::Image { alt, path } => {
                self.close_list();
                let src = self.image_src(path);
                self.push(format!(
                    r#"                <img src="{src}" alt="{alt}" style="margin: 1.5rem 0;">"#
                ));
            }
            Line::Paragraph(text) => {
                self.close_list();
                self.push(format!("                <p>{}</p>", convert_inline(text)));
            }
            Line::Skip => self.close_list(),
        }
    }

    /// Close whatever is still open and return the converted sections.
    #[must_use]
    pub fn finish(mut self) -> Vec<String> {
        self.flush_section();
        self.sections
    }

    /// Resolve an image path against the post's asset directory.
    ///
    /// Paths that already climb out of the page directory are kept as-is.
    fn image_src(&self, path: &str) -> String {
        if path.starts_with("../") {
            path.to_owned()
        } else {
            format!("{}/{}/{path}", self.asset_url_prefix, self.post_id)
        }
    }

    /// Append a line to the open section; dropped if no section is open.
    fn push(&mut self, line: String) {
        if let Some(section) = self.section.as_mut() {
            section.push(line);
        }
    }

    fn close_list(&mut self) {
        if self.in_list {
            self.push(LIST_CLOSE.to_owned());
            self.in_list = false;
        }
    }

    fn flush_section(&mut self) {
        self.close_list();
        if let Some(mut section) = self.section.take() {
            section.push(SECTION_CLOSE.to_owned());
            self.sections.push(section.join("\n"));
        }
    }
}

/// Convert a draft into its ordered list of section fragments.
#[must_use]
pub fn convert_sections(markdown: &str, post_id: &str, asset_url_prefix: &str) -> Vec<String> {
    markdown
        .split('\n')
        .fold(
            LineConverter::new(post_id).with_asset_url_prefix(asset_url_prefix),
            |mut converter, line| {
                converter.push_line(line);
                converter
            },
        )
        .finish()
}

/// Convert a draft into the HTML body of its page.
///
/// Sections are joined by a blank line. Relative image paths are rewritten
/// under [`DEFAULT_ASSET_URL_PREFIX`].
///
/// # Example
///
/// ```
/// use folio_renderer::markdown_to_html;
///
/// let html = markdown_to_html("Title\nSubtitle\n---\n## Setup\n- **fast**", "post-1");
/// assert!(html.contains("<li><strong>fast</strong></li>"));
/// assert!(html.ends_with("</section>"));
/// ```
#[must_use]
pub fn markdown_to_html(markdown: &str, post_id: &str) -> String {
    convert_sections(markdown, post_id, DEFAULT_ASSET_URL_PREFIX).join(SECTION_SEPARATOR)
}
