//! Inline markdown substitution (bold, code spans, links).

use std::sync::LazyLock;

use regex::Regex;

/// Regex to match `**bold**` spans.
static BOLD_RE: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"\*\*([^*]+)\*\*").unwrap());

/// Regex to match `` `code` `` spans.
static CODE_RE: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"`([^`]+)`").unwrap());

/// Regex to match `[text](url)` links.
static LINK_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\[([^\]]+)\]\(([^)]+)\)").unwrap());

/// Replace inline markdown with HTML.
///
/// Applies bold, then inline code, then links. Substitutions are not
/// recursive and nothing is escaped: drafts are trusted input, so literal
/// HTML in the text passes straight through.
///
/// # Examples
///
/// ```
/// use folio_renderer::convert_inline;
///
/// assert_eq!(
///     convert_inline("Use **`cargo`** from [the book](https://doc.rust-lang.org)"),
///     r#"Use <strong><code>cargo</code></strong> from <a href="https://doc.rust-lang.org">the book</a>"#
/// );
/// ```
#[must_use]
pub fn convert_inline(text: &str) -> String {
    let text = BOLD_RE.replace_all(text, "<strong>$1</strong>");
    let text = CODE_RE.replace_all(&text, "<code>$1</code>");
    LINK_RE
        .replace_all(&text, r#"<a href="$2">$1</a>"#)
        .into_owned()
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_plain_text_unchanged() {
        assert_eq!(convert_inline("Nothing to see here."), "Nothing to see here.");
    }

    #[test]
    fn test_bold() {
        assert_eq!(
            convert_inline("Hello **world**."),
            "Hello <strong>world</strong>."
        );
    }

    #[test]
    fn test_multiple_bold_spans() {
        assert_eq!(
            convert_inline("**one** and **two**"),
            "<strong>one</strong> and <strong>two</strong>"
        );
    }

    #[test]
    fn test_code() {
        assert_eq!(
            convert_inline("Run `brew install` first"),
            "Run <code>brew install</code> first"
        );
    }

    #[test]
    fn test_link() {
        assert_eq!(
            convert_inline("See [Raycast](https://raycast.com) for details"),
            r#"See <a href="https://raycast.com">Raycast</a> for details"#
        );
    }

    #[test]
    fn test_bold_inside_link_text() {
        assert_eq!(
            convert_inline("[**docs**](https://example.com)"),
            r#"<a href="https://example.com"><strong>docs</strong></a>"#
        );
    }

    #[test]
    fn test_unmatched_markers_pass_through() {
        assert_eq!(convert_inline("**open and `tick"), "**open and `tick");
        assert_eq!(convert_inline("[text] (url)"), "[text] (url)");
    }

    #[test]
    fn test_empty_markers_not_converted() {
        assert_eq!(convert_inline("****"), "****");
        assert_eq!(convert_inline("``"), "``");
    }

    #[test]
    fn test_html_not_escaped() {
        assert_eq!(
            convert_inline("a <em>raw</em> & **bold** tag"),
            "a <em>raw</em> & <strong>bold</strong> tag"
        );
    }

    #[test]
    fn test_idempotent_on_converted_output() {
        let inputs = [
            "Hello **world**.",
            "Run `make` then read [the guide](https://example.com/guide).",
            "**a** `b` [c](d) plain",
        ];
        for input in inputs {
            let once = convert_inline(input);
            assert_eq!(convert_inline(&once), once, "input: {input}");
        }
    }
}
