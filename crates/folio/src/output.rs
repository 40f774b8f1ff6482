//! Colored terminal output for build progress.

use std::fmt::Display;

use console::{Style, Term};

/// Terminal output formatter.
pub(crate) struct Output {
    term: Term,
    green: Style,
    red: Style,
    cyan_bold: Style,
}

impl Output {
    /// Create a new output formatter writing to stderr.
    #[must_use]
    pub(crate) fn new() -> Self {
        Self {
            term: Term::stderr(),
            green: Style::new().green(),
            red: Style::new().red(),
            cyan_bold: Style::new().cyan().bold(),
        }
    }

    /// Print an info message.
    pub(crate) fn info(&self, msg: &str) {
        let _ = self.term.write_line(msg);
    }

    /// Print a success message (green).
    pub(crate) fn success(&self, msg: &str) {
        let _ = self.term.write_line(&self.green.apply_to(msg).to_string());
    }

    /// Print an error message (red).
    pub(crate) fn error(&self, msg: &str) {
        let _ = self.term.write_line(&self.red.apply_to(msg).to_string());
    }

    /// Announce a post build (cyan bold).
    pub(crate) fn post_started(&self, post_id: &str) {
        let _ = self
            .term
            .write_line(&self.cyan_bold.apply_to(started_line(post_id)).to_string());
    }

    /// Report a file written for the current post.
    pub(crate) fn post_created(&self, path: &str) {
        self.info(&format!("  Created {path}"));
    }

    /// Report a post that was built.
    pub(crate) fn post_built(&self, post_id: &str) {
        self.success(&built_line(post_id));
    }

    /// Report a post that could not be built.
    pub(crate) fn post_failed(&self, err: &impl Display) {
        self.error(&format!("  Error: {err}"));
    }
}

fn started_line(post_id: &str) -> String {
    format!("\nBuilding {post_id}...")
}

fn built_line(post_id: &str) -> String {
    format!("  ✓ {post_id} built successfully!")
}
