//! Blog post builder.
//!
//! Turns drafts into pages on disk:
//!
//! 1. check the draft exists and the post is in the catalog
//! 2. convert the draft and assemble the page
//! 3. write `<blog_dir>/<post-id>.html`
//! 4. scaffold `<assets_dir>/<post-id>/README.md` for the post's images
//!
//! Nothing is written when either check in step 1 fails.

use std::fs;
use std::path::PathBuf;

use folio_config::Config;
use folio_renderer::convert_sections;

use crate::index::PostIndex;
use crate::metadata::{MetadataError, PostCatalog, PostMetadata};
use crate::template::{PageData, render_page};

/// Argument value that selects every post in the catalog.
pub const ALL_POSTS: &str = "all";

/// Which posts a build covers.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum BuildTarget {
    /// Every post in the catalog, in catalog order.
    All,
    /// A single post.
    Post(String),
}

impl BuildTarget {
    /// Parse a CLI argument: [`ALL_POSTS`] or a post identifier.
    #[must_use]
    pub fn parse(arg: &str) -> Self {
        if arg == ALL_POSTS {
            Self::All
        } else {
            Self::Post(arg.to_owned())
        }
    }
}

/// Error returned by the blog builder.
#[derive(Debug, thiserror::Error)]
pub enum BuildError {
    #[error("Draft not found at {}", .0.display())]
    DraftNotFound(PathBuf),

    #[error("No metadata found for {0}")]
    UnknownPost(String),

    #[error("{0}")]
    Metadata(#[from] MetadataError),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

impl BuildError {
    /// Whether the error only affects one post and the build can move on.
    #[must_use]
    pub fn is_skippable(&self) -> bool {
        matches!(
            self,
            Self::DraftNotFound(_) | Self::UnknownPost(_) | Self::Metadata(_)
        )
    }
}

/// Files produced for one post.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BuiltPost {
    pub post_id: String,
    /// Written page.
    pub page_path: PathBuf,
    /// Asset README, when it was created by this build.
    pub readme_path: Option<PathBuf>,
    /// Number of `##` sections in the page body.
    pub section_count: usize,
}

/// Outcome of building one post.
#[derive(Debug)]
pub struct PostOutcome {
    pub post_id: String,
    pub result: Result<BuiltPost, BuildError>,
}

/// Outcomes of a build, in the order posts were attempted.
#[derive(Debug, Default)]
pub struct BuildSummary {
    pub outcomes: Vec<PostOutcome>,
}

impl BuildSummary {
    /// Posts that were written.
    pub fn built(&self) -> impl Iterator<Item = &BuiltPost> {
        self.outcomes.iter().filter_map(|o| o.result.as_ref().ok())
    }

    /// Number of posts that failed.
    #[must_use]
    pub fn failed_count(&self) -> usize {
        self.outcomes.iter().filter(|o| o.result.is_err()).count()
    }

    /// Whether every attempted post was built.
    #[must_use]
    pub fn is_success(&self) -> bool {
        self.failed_count() == 0
    }
}

/// Builds blog post pages from drafts.
pub struct BlogBuilder {
    config: Config,
    catalog: PostCatalog,
}

impl BlogBuilder {
    /// Create a builder over a resolved configuration and post catalog.
    #[must_use]
    pub fn new(config: Config, catalog: PostCatalog) -> Self {
        Self { config, catalog }
    }

    /// Configuration in use.
    #[must_use]
    pub fn config(&self) -> &Config {
        &self.config
    }

    /// Build the selected posts.
    ///
    /// Posts that fail a pre-condition are recorded in the summary and the
    /// remaining posts are still attempted.
    ///
    /// # Errors
    ///
    /// Returns the first I/O or serialization error; those end the build.
    pub fn build(&self, target: &BuildTarget) -> Result<BuildSummary, BuildError> {
        match target {
            BuildTarget::All => self.build_all(),
            BuildTarget::Post(post_id) => {
                let mut summary = BuildSummary::default();
                self.record(&mut summary, post_id)?;
                Ok(summary)
            }
        }
    }

    /// Build every post in the catalog.
    ///
    /// # Errors
    ///
    /// Returns the first I/O or serialization error; those end the build.
    pub fn build_all(&self) -> Result<BuildSummary, BuildError> {
        let mut summary = BuildSummary::default();
        for (post_id, _) in self.catalog.iter() {
            self.record(&mut summary, post_id)?;
        }
        Ok(summary)
    }

    fn record(&self, summary: &mut BuildSummary, post_id: &str) -> Result<(), BuildError> {
        let result = match self.build_post(post_id) {
            Err(e) if !e.is_skippable() => return Err(e),
            Err(e) => {
                tracing::warn!(post_id, error = %e, "Skipping post");
                Err(e)
            }
            ok => ok,
        };
        summary.outcomes.push(PostOutcome {
            post_id: post_id.to_owned(),
            result,
        });
        Ok(())
    }

    /// Build a single post.
    ///
    /// # Errors
    ///
    /// Returns [`BuildError::DraftNotFound`] or [`BuildError::UnknownPost`]
    /// without touching the filesystem, or any I/O error raised while
    /// reading the draft or writing output.
    pub fn build_post(&self, post_id: &str) -> Result<BuiltPost, BuildError> {
        let paths = &self.config.paths_resolved;

        let draft_path = paths.draft_path(post_id);
        if !draft_path.is_file() {
            return Err(BuildError::DraftNotFound(draft_path));
        }
        let metadata = self
            .catalog
            .get(post_id)
            .ok_or_else(|| BuildError::UnknownPost(post_id.to_owned()))?;
        let date = metadata.date_long()?;

        let markdown = fs::read_to_string(&draft_path)?;
        let sections = convert_sections(&markdown, post_id, &self.config.site.asset_url_prefix);
        tracing::debug!(post_id, sections = sections.len(), "Converted draft");
        let html_content = sections.join("\n\n");

        let page = render_page(&PageData {
            post_id,
            title: &metadata.title,
            description: &metadata.description,
            date: &date,
            html_content: &html_content,
            author: &self.config.site.author,
            copyright_year: self.config.site.copyright_year,
        });

        fs::create_dir_all(&paths.blog_dir)?;
        let page_path = paths.page_path(post_id);
        fs::write(&page_path, page)?;
        tracing::info!(post_id, path = %page_path.display(), "Wrote page");

        let readme_path = self.scaffold_assets(post_id, metadata)?;

        Ok(BuiltPost {
            post_id: post_id.to_owned(),
            page_path,
            readme_path,
            section_count: sections.len(),
        })
    }

    /// Create the post's asset directory and a README describing it.
    ///
    /// An existing README is left alone. Returns the README path when one
    /// was written.
    fn scaffold_assets(
        &self,
        post_id: &str,
        metadata: &PostMetadata,
    ) -> Result<Option<PathBuf>, BuildError> {
        let assets_dir = self.config.paths_resolved.post_assets_dir(post_id);
        fs::create_dir_all(&assets_dir)?;

        let readme_path = assets_dir.join("README.md");
        if readme_path.exists() {
            tracing::debug!(path = %readme_path.display(), "Asset README already present");
            return Ok(None);
        }
        fs::write(&readme_path, assets_readme(&metadata.title))?;
        tracing::info!(post_id, path = %readme_path.display(), "Wrote asset README");
        Ok(Some(readme_path))
    }

    /// Write the post index used by the blog sidebar.
    ///
    /// Lists every catalog post whose page exists on disk.
    ///
    /// # Errors
    ///
    /// Returns an error if a listed post has an invalid date or the index
    /// can't be written.
    pub fn write_index(&self) -> Result<PathBuf, BuildError> {
        let paths = &self.config.paths_resolved;
        let published = self
            .catalog
            .iter()
            .filter(|(post_id, _)| paths.page_path(post_id).is_file());
        let index = PostIndex::from_posts(published)?;

        fs::create_dir_all(&paths.data_dir)?;
        let index_path = paths.index_path();
        fs::write(&index_path, index.to_json()?)?;
        tracing::info!(
            path = %index_path.display(),
            posts = index.posts.len(),
            "Wrote post index"
        );
        Ok(index_path)
    }
}

/// Placeholder README for a post's asset directory.
fn assets_readme(title: &str) -> String {
    format!(
        "# Assets for {title}

Add images for this blog post here.

## Suggested images:
- Tool screenshots
- Workflow diagrams
- App logos
- Before/after comparisons

## Naming convention:
Use descriptive names like:
- `rectangle-shortcuts.png`
- `raycast-search.png`
- `firefox-devtools.png`
"
    )
}

#[cfg(test)]
mod tests {
    use std::path::Path;

    use super::*;
    use crate::metadata::test_post;
    use pretty_assertions::assert_eq;

    const DRAFT: &str = "Greasing the Gears\nSubtitle\n---\n## Intro\nHello **world**.\n- one\n- two\n\n## Images\n![Search](search.png)\n";

    fn catalog() -> PostCatalog {
        PostCatalog::new()
            .with_post("post-1", test_post("First Post", "2024-12-15"))
            .with_post("post-2", test_post("Second Post", "2024-11-28"))
            .with_post("post-3", test_post("Third Post", "2024-11-10"))
    }

    fn builder(root: &Path) -> BlogBuilder {
        BlogBuilder::new(Config::default_with_base(root), catalog())
    }

    fn write_draft(root: &Path, post_id: &str, content: &str) {
        let drafts = root.join(".blogdrafts");
        fs::create_dir_all(&drafts).unwrap();
        fs::write(drafts.join(format!("{post_id}.md")), content).unwrap();
    }

    /// Every file under `root`, relative and sorted.
    fn files(root: &Path) -> Vec<String> {
        fn walk(dir: &Path, root: &Path, out: &mut Vec<String>) {
            for entry in fs::read_dir(dir).unwrap() {
                let path = entry.unwrap().path();
                if path.is_dir() {
                    walk(&path, root, out);
                } else {
                    out.push(path.strip_prefix(root).unwrap().display().to_string());
                }
            }
        }
        let mut out = Vec::new();
        walk(root, root, &mut out);
        out.sort();
        out
    }

    #[test]
    fn test_build_target_parse() {
        assert_eq!(BuildTarget::parse("all"), BuildTarget::All);
        assert_eq!(
            BuildTarget::parse("post-1"),
            BuildTarget::Post("post-1".to_owned())
        );
    }

    #[test]
    fn test_build_post_writes_page_and_assets() {
        let temp_dir = tempfile::tempdir().unwrap();
        write_draft(temp_dir.path(), "post-1", DRAFT);

        let built = builder(temp_dir.path()).build_post("post-1").unwrap();

        assert_eq!(built.page_path, temp_dir.path().join("blog/post-1.html"));
        assert_eq!(built.section_count, 2);
        assert_eq!(
            built.readme_path,
            Some(temp_dir.path().join("assets/blog/post-1/README.md"))
        );

        let page = fs::read_to_string(&built.page_path).unwrap();
        assert!(page.contains("<title>First Post - Mitchell Carter</title>"));
        assert!(page.contains(">December 15, 2024</p>"));
        assert!(page.contains("<h2>Intro</h2>"));
        assert!(page.contains("<p>Hello <strong>world</strong>.</p>"));
        assert!(page.contains(r#"<img src="../assets/blog/post-1/search.png" alt="Search""#));

        let readme = fs::read_to_string(built.readme_path.unwrap()).unwrap();
        assert!(readme.starts_with("# Assets for First Post\n"));
    }

    #[test]
    fn test_build_post_overwrites_page() {
        let temp_dir = tempfile::tempdir().unwrap();
        let builder = builder(temp_dir.path());
        write_draft(temp_dir.path(), "post-1", DRAFT);
        builder.build_post("post-1").unwrap();

        write_draft(temp_dir.path(), "post-1", "t\ns\n---\n## Rewritten\n");
        let built = builder.build_post("post-1").unwrap();

        let page = fs::read_to_string(&built.page_path).unwrap();
        assert!(page.contains("<h2>Rewritten</h2>"));
        assert!(!page.contains("<h2>Intro</h2>"));
    }

    #[test]
    fn test_build_post_keeps_existing_readme() {
        let temp_dir = tempfile::tempdir().unwrap();
        write_draft(temp_dir.path(), "post-1", DRAFT);
        let readme = temp_dir.path().join("assets/blog/post-1/README.md");
        fs::create_dir_all(readme.parent().unwrap()).unwrap();
        fs::write(&readme, "my notes").unwrap();

        let built = builder(temp_dir.path()).build_post("post-1").unwrap();

        assert_eq!(built.readme_path, None);
        assert_eq!(fs::read_to_string(&readme).unwrap(), "my notes");
    }

    #[test]
    fn test_unknown_post_writes_nothing() {
        let temp_dir = tempfile::tempdir().unwrap();
        write_draft(temp_dir.path(), "post-9", DRAFT);

        let err = builder(temp_dir.path()).build_post("post-9").unwrap_err();

        assert!(matches!(err, BuildError::UnknownPost(ref id) if id == "post-9"));
        assert_eq!(files(temp_dir.path()), vec![".blogdrafts/post-9.md"]);
    }

    #[test]
    fn test_missing_draft_writes_nothing() {
        let temp_dir = tempfile::tempdir().unwrap();

        let err = builder(temp_dir.path()).build_post("post-1").unwrap_err();

        assert!(matches!(err, BuildError::DraftNotFound(_)));
        assert!(err.to_string().contains("post-1.md"));
        assert!(files(temp_dir.path()).is_empty());
    }

    #[test]
    fn test_invalid_date_writes_nothing() {
        let temp_dir = tempfile::tempdir().unwrap();
        write_draft(temp_dir.path(), "bad", DRAFT);
        let builder = BlogBuilder::new(
            Config::default_with_base(temp_dir.path()),
            PostCatalog::new().with_post("bad", test_post("Bad", "someday")),
        );

        let err = builder.build_post("bad").unwrap_err();

        assert!(matches!(err, BuildError::Metadata(_)));
        assert!(err.is_skippable());
        assert_eq!(files(temp_dir.path()), vec![".blogdrafts/bad.md"]);
    }

    #[test]
    fn test_build_all_continues_past_failures() {
        let temp_dir = tempfile::tempdir().unwrap();
        write_draft(temp_dir.path(), "post-1", DRAFT);
        write_draft(temp_dir.path(), "post-3", DRAFT);

        let summary = builder(temp_dir.path()).build(&BuildTarget::All).unwrap();

        let attempted: Vec<&str> = summary
            .outcomes
            .iter()
            .map(|o| o.post_id.as_str())
            .collect();
        assert_eq!(attempted, vec!["post-1", "post-2", "post-3"]);
        assert_eq!(summary.failed_count(), 1);
        assert!(!summary.is_success());
        assert!(matches!(
            summary.outcomes[1].result,
            Err(BuildError::DraftNotFound(_))
        ));
        assert!(temp_dir.path().join("blog/post-3.html").is_file());
        assert_eq!(summary.built().count(), 2);
    }

    #[test]
    fn test_build_single_target() {
        let temp_dir = tempfile::tempdir().unwrap();
        write_draft(temp_dir.path(), "post-2", DRAFT);

        let summary = builder(temp_dir.path())
            .build(&BuildTarget::parse("post-2"))
            .unwrap();

        assert!(summary.is_success());
        assert_eq!(summary.outcomes.len(), 1);
        assert!(!temp_dir.path().join("blog/post-1.html").exists());
    }

    #[test]
    fn test_write_index_lists_built_posts_newest_first() {
        let temp_dir = tempfile::tempdir().unwrap();
        let builder = builder(temp_dir.path());
        write_draft(temp_dir.path(), "post-3", DRAFT);
        write_draft(temp_dir.path(), "post-1", DRAFT);
        builder.build_all().unwrap();

        let index_path = builder.write_index().unwrap();

        assert_eq!(index_path, temp_dir.path().join("data/blog-posts.json"));
        let json: serde_json::Value =
            serde_json::from_str(&fs::read_to_string(index_path).unwrap()).unwrap();
        let posts = json["posts"].as_array().unwrap();
        assert_eq!(posts.len(), 2);
        assert_eq!(posts[0]["id"], "post-1");
        assert_eq!(posts[0]["url"], "/blog/post-1.html");
        assert_eq!(posts[0]["dateFormatted"], "Dec 15, 2024");
        assert_eq!(posts[1]["id"], "post-3");
    }
}
