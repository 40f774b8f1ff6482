//! Build command implementation.

use std::path::Path;

use folio_config::Config;
use folio_site::{BlogBuilder, BuildSummary, BuildTarget, PostCatalog};

use crate::error::CliError;
use crate::output::Output;

/// Build the requested posts and refresh the post index.
///
/// Returns `Ok(false)` when at least one post could not be built.
pub(crate) fn execute(target: &str, output: &Output) -> Result<bool, CliError> {
    let config = Config::load(None)?;
    if let Some(path) = &config.config_path {
        tracing::debug!(path = %path.display(), "Loaded configuration");
    }

    let builder = BlogBuilder::new(config, PostCatalog::builtin());
    let target = BuildTarget::parse(target);
    let summary = builder.build(&target)?;

    let project_dir = &builder.config().paths_resolved.project_dir;
    report(&summary, project_dir, output);

    if summary.built().next().is_some() {
        let index_path = builder.write_index()?;
        output.info(&format!(
            "\nUpdated {}",
            display_path(&index_path, project_dir)
        ));
    }

    if !summary.is_success() {
        output.error(&format!(
            "\n{} of {} posts failed to build",
            summary.failed_count(),
            summary.outcomes.len()
        ));
        return Ok(false);
    }

    output.success("\n✓ Blog build complete!");
    print_next_steps(&target, builder.config(), output);
    Ok(true)
}

/// Print per-post progress lines.
fn report(summary: &BuildSummary, project_dir: &Path, output: &Output) {
    for outcome in &summary.outcomes {
        output.post_started(&outcome.post_id);
        match &outcome.result {
            Ok(built) => {
                output.post_created(&display_path(&built.page_path, project_dir));
                if let Some(readme) = &built.readme_path {
                    output.post_created(&display_path(readme, project_dir));
                }
                output.post_built(&built.post_id);
            }
            Err(e) => output.post_failed(e),
        }
    }
}

fn print_next_steps(target: &BuildTarget, config: &Config, output: &Output) {
    let post_id = match target {
        BuildTarget::Post(post_id) => post_id.as_str(),
        BuildTarget::All => "<post-id>",
    };
    let paths = &config.paths_resolved;
    let project_dir = &paths.project_dir;

    output.info("\nNext steps:");
    output.info(&format!(
        "1. Add images to {}/ directory",
        display_path(&paths.post_assets_dir(post_id), project_dir)
    ));
    output.info(&format!(
        "2. Update image paths in {} if needed",
        display_path(&paths.draft_path(post_id), project_dir)
    ));
    output.info("3. Run again to rebuild with images");
    output.info(&format!(
        "4. Test at {}/{}",
        config.site.base_url.trim_end_matches('/'),
        display_path(&paths.page_path(post_id), project_dir)
    ));
}

/// Show `path` relative to the project directory when it lives inside it.
fn display_path(path: &Path, project_dir: &Path) -> String {
    path.strip_prefix(project_dir)
        .unwrap_or(path)
        .display()
        .to_string()
}
