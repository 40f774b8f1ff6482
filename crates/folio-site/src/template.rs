//! HTML page template for blog posts.
//!
//! Mirrors the markup of the site's hand-written project pages so that
//! generated posts pick up the same stylesheets, navigation and footer.

use std::fmt::Write;

/// All data needed to render a blog post page.
pub struct PageData<'a> {
    pub post_id: &'a str,
    pub title: &'a str,
    pub description: &'a str,
    /// Publish date, already formatted for display.
    pub date: &'a str,
    /// Converted post body.
    pub html_content: &'a str,
    pub author: &'a str,
    pub copyright_year: i32,
}

/// Render a complete blog post page.
pub fn render_page(page: &PageData<'_>) -> String {
    let title = escape(page.title);
    let description = escape(page.description);
    let author = escape(page.author);

    let mut html = String::with_capacity(4096 + page.html_content.len());

    // DOCTYPE and head
    html.push_str("<!DOCTYPE html>\n<html lang=\"en\">\n<head>\n");
    html.push_str("    <meta charset=\"UTF-8\">\n");
    html.push_str(
        "    <meta name=\"viewport\" content=\"width=device-width, initial-scale=1.0\">\n",
    );
    let _ = writeln!(html, "    <title>{title} - {author}</title>");
    let _ = writeln!(
        html,
        "    <meta name=\"description\" content=\"{description}\">"
    );
    html.push('\n');
    html.push_str("    <link rel=\"stylesheet\" href=\"../style.css\">\n");
    html.push_str("    <link rel=\"stylesheet\" href=\"../mediaqueries.css\">\n");
    html.push_str("    <link rel=\"stylesheet\" href=\"../assets/css/project-pages.css\">\n");
    html.push_str("</head>\n<body>\n");

    render_navigation(&mut html, &author);
    render_breadcrumbs(&mut html, &title);

    // Post body
    html.push_str("    <!-- Blog Post Content -->\n");
    let _ = writeln!(
        html,
        "    <article class=\"project-section\" data-post-id=\"{}\">",
        escape(page.post_id)
    );
    html.push_str("        <div class=\"project-content\">\n");
    html.push_str("            <header style=\"margin-bottom: 2rem;\">\n");
    let _ = writeln!(
        html,
        "                <p style=\"color: #666; font-size: 0.9rem; margin-bottom: 0.5rem;\">{}</p>",
        page.date
    );
    let _ = writeln!(
        html,
        "                <h1 style=\"font-size: 2.5rem; margin-bottom: 1rem;\">{title}</h1>"
    );
    let _ = writeln!(
        html,
        "                <p style=\"color: #888; font-size: 1.1rem;\">{description}</p>"
    );
    html.push_str("            </header>\n\n");
    html.push_str(page.html_content);
    html.push_str("\n        </div>\n    </article>\n\n");

    render_footer(&mut html, &author, page.copyright_year);

    html.push_str("    <script src=\"../script.js\"></script>\n");
    html.push_str("</body>\n</html>\n");
    html
}

/// Render the desktop and mobile navigation bars.
fn render_navigation(html: &mut String, author: &str) {
    const LINKS: [(&str, &str, bool); 3] = [
        ("../projects.html", "Projects", false),
        ("../blog.html", "Blog", false),
        ("https://photos.mitchellcarter.dev", "Photos", true),
    ];

    html.push_str("    <!-- Top Bar Navigation -->\n");
    html.push_str("    <nav id=\"top-nav\">\n");
    html.push_str("        <div class=\"nav-container\">\n");
    let _ = writeln!(
        html,
        "            <div class=\"logo\"><a href=\"../index.html\">{author}</a></div>"
    );
    html.push_str("            <ul class=\"nav-links\">\n");
    for (href, label, external) in LINKS {
        let target = if external { " target=\"_blank\"" } else { "" };
        let _ = writeln!(
            html,
            "                <li><a href=\"{href}\"{target} class=\"nav-link\">{label}</a></li>"
        );
    }
    html.push_str("            </ul>\n        </div>\n    </nav>\n\n");

    html.push_str("    <nav id=\"hamburger-nav\">\n");
    let _ = writeln!(
        html,
        "        <div class=\"logo\"><a href=\"../index.html\">{author}</a></div>"
    );
    html.push_str("        <div class=\"hamburger-menu\">\n");
    html.push_str("            <div class=\"hamburger-icon\" onClick=\"toggleMenu()\">\n");
    html.push_str("                <span></span>\n".repeat(3).as_str());
    html.push_str("            </div>\n");
    html.push_str("            <div class=\"menu-links\">\n");
    for (href, label, external) in LINKS {
        let target = if external { " target=\"_blank\"" } else { "" };
        let _ = writeln!(
            html,
            "                <li><a href=\"{href}\"{target} onClick=\"toggleMenu()\">{label}</a></li>"
        );
    }
    html.push_str("            </div>\n        </div>\n    </nav>\n\n");
}

/// Render the Home → Blog → post breadcrumb trail.
fn render_breadcrumbs(html: &mut String, title: &str) {
    html.push_str("    <!-- Breadcrumb Navigation -->\n");
    html.push_str("    <section class=\"breadcrumb\">\n");
    html.push_str("        <div class=\"breadcrumb-container\">\n");
    html.push_str("            <a href=\"../index.html\">Home</a>\n");
    html.push_str("            <span class=\"breadcrumb-separator\">→</span>\n");
    html.push_str("            <a href=\"../blog.html\">Blog</a>\n");
    html.push_str("            <span class=\"breadcrumb-separator\">→</span>\n");
    let _ = writeln!(
        html,
        "            <span class=\"breadcrumb-current\">{title}</span>"
    );
    html.push_str("        </div>\n    </section>\n\n");
}

/// Render the "Read More" call to action and the footer.
fn render_footer(html: &mut String, author: &str, year: i32) {
    html.push_str("    <!-- Back to Blog -->\n");
    html.push_str("    <section class=\"project-cta\">\n");
    html.push_str("        <div class=\"project-content\">\n");
    html.push_str("            <h2>Read More</h2>\n");
    html.push_str("            <p>Explore more articles and project deep-dives</p>\n");
    html.push_str("            <div class=\"cta-buttons\">\n");
    html.push_str(
        "                <a href=\"../blog.html\" class=\"btn btn-color-2\">Back to Blog</a>\n",
    );
    html.push_str("            </div>\n        </div>\n    </section>\n\n");

    html.push_str("    <footer>\n");
    let _ = writeln!(
        html,
        "        <p>Copyright &#169; {year} {author}. All Rights Reserved.</p>"
    );
    html.push_str("    </footer>\n\n");
}

/// Escape the characters that would break markup or attribute values.
///
/// Apostrophes are left alone: every attribute is double-quoted.
fn escape(s: &str) -> String {
    let mut result = String::with_capacity(s.len());
    for c in s.chars() {
        match c {
            '&' => result.push_str("&amp;"),
            '<' => result.push_str("&lt;"),
            '>' => result.push_str("&gt;"),
            '"' => result.push_str("&quot;"),
            _ => result.push(c),
        }
    }
    result
}
