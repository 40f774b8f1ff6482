//! Folio CLI - blog post builder.
//!
//! Converts markdown drafts into static blog post pages:
//! - `folio <post-id>`: build a single post
//! - `folio all`: build every post in the catalog

mod build;
mod error;
mod output;

use clap::Parser;
use tracing_subscriber::EnvFilter;

use output::Output;

/// Folio - convert markdown drafts into blog post pages.
#[derive(Parser)]
#[command(name = "folio", version, about)]
struct Cli {
    /// Post identifier to build (e.g. `post-1`), or `all` for every known post.
    #[arg(value_name = "POST_ID|all")]
    target: String,
}

fn main() {
    let cli = Cli::parse();
    let output = Output::new();

    // RUST_LOG controls library logging, default to WARN
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();

    match build::execute(&cli.target, &output) {
        Ok(true) => {}
        Ok(false) => std::process::exit(1),
        Err(err) => {
            output.error(&format!("Error: {err}"));
            std::process::exit(1);
        }
    }
}
