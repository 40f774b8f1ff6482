//! Line-oriented markdown to HTML converter for blog drafts.
//!
//! This crate does not aim for `CommonMark` compliance. It understands the
//! handful of constructs blog drafts use and emits hand-formatted HTML that
//! slots directly into the page skeleton:
//!
//! - `## ` headers open a `<section>` with an `<h2>`
//! - `- ` bullets become a flat `<ul>`
//! - `![alt](path)` lines become `<img>` tags pointing at the post's assets
//! - everything else becomes a `<p>`
//!
//! Paragraphs and list items go through [`convert_inline`] for bold, code
//! spans and links.
//!
//! # Example
//!
//! ```
//! use folio_renderer::markdown_to_html;
//!
//! let draft = "Title\nSubtitle\n---\n## Intro\nHello **world**.\n- one\n- two\n";
//! let html = markdown_to_html(draft, "post-1");
//!
//! assert!(html.contains("<h2>Intro</h2>"));
//! assert!(html.contains("<p>Hello <strong>world</strong>.</p>"));
//! assert!(html.contains("<li>two</li>"));
//! ```

mod converter;
mod inline;

pub use converter::{
    DEFAULT_ASSET_URL_PREFIX, Line, LineConverter, PREAMBLE_LINES, convert_sections,
    markdown_to_html,
};
pub use inline::convert_inline;
