//! Configuration management for Folio.
//!
//! Parses `folio.toml` configuration files with serde and provides
//! auto-discovery of config files in parent directories. Without a config
//! file, every path resolves against the current directory using the
//! website's conventional layout:
//!
//! ```text
//! .blogdrafts/<post-id>.md        drafts
//! blog/<post-id>.html             generated pages
//! assets/blog/<post-id>/          per-post images
//! data/blog-posts.json            post index
//! ```
//!
//! ## Environment Variable Expansion
//!
//! String configuration values support environment variable expansion:
//!
//! - `${VAR}` - expands to the value of VAR, errors if unset
//! - `${VAR:-default}` - expands to VAR if set, otherwise uses default
//!
//! Expanded fields: every `[paths]` entry, `site.author`,
//! `site.asset_url_prefix` and `site.base_url`.

mod expand;

use serde::Deserialize;
use std::path::{Path, PathBuf};

/// Configuration filename to search for.
const CONFIG_FILENAME: &str = "folio.toml";

/// Application configuration.
#[derive(Debug, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Project paths (relative strings from TOML).
    paths: PathsConfigRaw,
    /// Site-wide values used when assembling pages.
    pub site: SiteConfig,

    /// Resolved paths (set after loading).
    #[serde(skip)]
    pub paths_resolved: PathsConfig,
    /// Path to the config file (set after loading).
    #[serde(skip)]
    pub config_path: Option<PathBuf>,
}

impl Default for Config {
    fn default() -> Self {
        Self::default_with_base(Path::new("."))
    }
}

/// Raw path configuration as parsed from TOML.
#[derive(Debug, Deserialize, Default)]
#[serde(default)]
struct PathsConfigRaw {
    drafts_dir: Option<String>,
    blog_dir: Option<String>,
    assets_dir: Option<String>,
    data_dir: Option<String>,
}

/// Resolved project paths.
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct PathsConfig {
    /// Directory the other paths were resolved against.
    pub project_dir: PathBuf,
    /// Markdown drafts, one `<post-id>.md` per post.
    pub drafts_dir: PathBuf,
    /// Generated pages, one `<post-id>.html` per post.
    pub blog_dir: PathBuf,
    /// Parent of the per-post asset directories.
    pub assets_dir: PathBuf,
    /// Site data directory holding the post index.
    pub data_dir: PathBuf,
}

impl PathsConfig {
    /// Draft file for a post.
    #[must_use]
    pub fn draft_path(&self, post_id: &str) -> PathBuf {
        self.drafts_dir.join(format!("{post_id}.md"))
    }

    /// Generated page for a post.
    #[must_use]
    pub fn page_path(&self, post_id: &str) -> PathBuf {
        self.blog_dir.join(format!("{post_id}.html"))
    }

    /// Asset directory for a post.
    #[must_use]
    pub fn post_assets_dir(&self, post_id: &str) -> PathBuf {
        self.assets_dir.join(post_id)
    }

    /// Post index consumed by the blog sidebar.
    #[must_use]
    pub fn index_path(&self) -> PathBuf {
        self.data_dir.join("blog-posts.json")
    }
}

/// Site-wide configuration.
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct SiteConfig {
    /// Author name shown in page titles, navigation and footer.
    pub author: String,
    /// Year printed in the footer copyright line.
    pub copyright_year: i32,
    /// URL prefix for per-post images, relative to the generated page.
    pub asset_url_prefix: String,
    /// Base URL of the local preview server, used in "next steps" hints.
    pub base_url: String,
}

impl Default for SiteConfig {
    fn default() -> Self {
        Self {
            author: "Mitchell Carter".to_owned(),
            copyright_year: 2024,
            asset_url_prefix: "../assets/blog".to_owned(),
            base_url: "http://localhost:8080".to_owned(),
        }
    }
}

/// Configuration error.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    /// File not found.
    #[error("Configuration file not found: {}", .0.display())]
    NotFound(PathBuf),
    /// I/O error.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
    /// TOML parsing error.
    #[error("TOML parse error: {0}")]
    Parse(#[from] toml::de::Error),
    /// Validation error.
    #[error("Configuration error: {0}")]
    Validation(String),
    /// Environment variable error during expansion.
    #[error("Environment variable error in {field}: {message}")]
    EnvVar {
        /// Config field path (e.g., "`site.author`").
        field: String,
        /// Error message (e.g., "${`BLOG_AUTHOR`} not set").
        message: String,
    },
}

/// Require a string field to be non-empty.
fn require_non_empty(value: &str, field: &str) -> Result<(), ConfigError> {
    if value.is_empty() {
        return Err(ConfigError::Validation(format!("{field} cannot be empty")));
    }
    Ok(())
}

/// Require a URL field to use http:// or https:// scheme.
fn require_http_url(url: &str, field: &str) -> Result<(), ConfigError> {
    if !url.starts_with("http://") && !url.starts_with("https://") {
        return Err(ConfigError::Validation(format!(
            "{field} must start with http:// or https://"
        )));
    }
    Ok(())
}

impl Config {
    /// Load configuration.
    ///
    /// If `config_path` is provided, loads from that file.
    /// Otherwise, searches for `folio.toml` in current directory and parents,
    /// falling back to defaults rooted at the current directory.
    ///
    /// # Errors
    ///
    /// Returns error if explicit `config_path` doesn't exist or parsing fails.
    pub fn load(config_path: Option<&Path>) -> Result<Self, ConfigError> {
        if let Some(path) = config_path {
            if !path.exists() {
                return Err(ConfigError::NotFound(path.to_path_buf()));
            }
            return Self::load_from_file(path);
        }

        let cwd = std::env::current_dir()?;
        match Self::discover_config(&cwd) {
            Some(discovered) => Self::load_from_file(&discovered),
            None => Ok(Self::default_with_base(&cwd)),
        }
    }

    /// Search for config file in `start` and its parents.
    fn discover_config(start: &Path) -> Option<PathBuf> {
        let mut current = start.to_path_buf();
        loop {
            let candidate = current.join(CONFIG_FILENAME);
            if candidate.exists() {
                return Some(candidate);
            }
            if !current.pop() {
                return None;
            }
        }
    }

    /// Create default config with paths relative to given base directory.
    #[must_use]
    pub fn default_with_base(base: &Path) -> Self {
        let mut config = Self {
            paths: PathsConfigRaw::default(),
            site: SiteConfig::default(),
            paths_resolved: PathsConfig::default(),
            config_path: None,
        };
        config.resolve_paths(base);
        config
    }

    /// Load configuration from a specific file.
    fn load_from_file(path: &Path) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path)?;
        let mut config: Self = toml::from_str(&content)?;

        // Expand environment variables before path resolution
        config.expand_env_vars()?;

        let config_dir = path.parent().unwrap_or(Path::new("."));
        config.resolve_paths(config_dir);
        config.config_path = Some(path.to_path_buf());

        config.validate()?;

        Ok(config)
    }

    /// Validate configuration values.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError::Validation` if any validation fails.
    pub fn validate(&self) -> Result<(), ConfigError> {
        require_non_empty(&self.site.author, "site.author")?;
        require_non_empty(&self.site.asset_url_prefix, "site.asset_url_prefix")?;
        require_http_url(&self.site.base_url, "site.base_url")?;
        Ok(())
    }

    /// Expand environment variable references in configuration strings.
    fn expand_env_vars(&mut self) -> Result<(), ConfigError> {
        let paths = &mut self.paths;
        for (value, field) in [
            (&mut paths.drafts_dir, "paths.drafts_dir"),
            (&mut paths.blog_dir, "paths.blog_dir"),
            (&mut paths.assets_dir, "paths.assets_dir"),
            (&mut paths.data_dir, "paths.data_dir"),
        ] {
            if let Some(raw) = value.as_deref() {
                *value = Some(expand::expand_env(raw, field)?);
            }
        }

        self.site.author = expand::expand_env(&self.site.author, "site.author")?;
        self.site.asset_url_prefix =
            expand::expand_env(&self.site.asset_url_prefix, "site.asset_url_prefix")?;
        self.site.base_url = expand::expand_env(&self.site.base_url, "site.base_url")?;

        Ok(())
    }

    /// Resolve relative paths against the config directory.
    fn resolve_paths(&mut self, config_dir: &Path) {
        let resolve = |path: Option<&str>, default: &str| config_dir.join(path.unwrap_or(default));

        self.paths_resolved = PathsConfig {
            project_dir: config_dir.to_path_buf(),
            drafts_dir: resolve(self.paths.drafts_dir.as_deref(), ".blogdrafts"),
            blog_dir: resolve(self.paths.blog_dir.as_deref(), "blog"),
            assets_dir: resolve(self.paths.assets_dir.as_deref(), "assets/blog"),
            data_dir: resolve(self.paths.data_dir.as_deref(), "data"),
        };
    }
}
