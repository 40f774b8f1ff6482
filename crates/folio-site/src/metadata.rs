//! Post metadata and the built-in post catalog.
//!
//! Metadata is not parsed from drafts. Each post has a fixed record in a
//! [`PostCatalog`], and the catalog is handed to the builder explicitly.
//! Adding a post to the site means adding an entry to
//! [`PostCatalog::builtin`].

use chrono::NaiveDate;

/// Date format used in the catalog (`2024-12-15`).
const DATE_FORMAT: &str = "%Y-%m-%d";

/// Long display format (`December 15, 2024`).
const LONG_DATE_FORMAT: &str = "%B %d, %Y";

/// Short display format (`Dec 15, 2024`).
const SHORT_DATE_FORMAT: &str = "%b %d, %Y";

/// Metadata for one blog post.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct PostMetadata {
    /// Post title.
    pub title: String,
    /// One-line summary shown under the title and in the page description.
    pub description: String,
    /// Publish date as `YYYY-MM-DD`.
    pub date: String,
    /// Category used by the blog page filters.
    pub category: String,
    /// Tags, in display order.
    pub tags: Vec<String>,
}

impl PostMetadata {
    /// Parse the publish date.
    ///
    /// # Errors
    ///
    /// Returns [`MetadataError::InvalidDate`] if `date` is not `YYYY-MM-DD`.
    pub fn published(&self) -> Result<NaiveDate, MetadataError> {
        NaiveDate::parse_from_str(&self.date, DATE_FORMAT).map_err(|e| {
            MetadataError::InvalidDate {
                date: self.date.clone(),
                message: e.to_string(),
            }
        })
    }

    /// Publish date as `Month DD, YYYY`.
    pub fn date_long(&self) -> Result<String, MetadataError> {
        Ok(self.published()?.format(LONG_DATE_FORMAT).to_string())
    }

    /// Publish date as `Mon DD, YYYY`.
    pub fn date_short(&self) -> Result<String, MetadataError> {
        Ok(self.published()?.format(SHORT_DATE_FORMAT).to_string())
    }
}

/// Error type for metadata operations.
#[derive(Debug, thiserror::Error)]
pub enum MetadataError {
    /// Date that doesn't match `YYYY-MM-DD`.
    #[error("Invalid publish date '{date}': {message}")]
    InvalidDate { date: String, message: String },
}

/// Ordered mapping from post identifier to metadata.
///
/// Iteration follows insertion order, which is the order `all` builds in.
#[derive(Clone, Debug, Default)]
pub struct PostCatalog {
    entries: Vec<(String, PostMetadata)>,
}

impl PostCatalog {
    /// Create an empty catalog.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a post, replacing any existing entry with the same identifier.
    #[must_use]
    pub fn with_post(mut self, post_id: impl Into<String>, metadata: PostMetadata) -> Self {
        self.insert(post_id, metadata);
        self
    }

    /// Add a post, replacing any existing entry with the same identifier.
    pub fn insert(&mut self, post_id: impl Into<String>, metadata: PostMetadata) {
        let post_id = post_id.into();
        if let Some(entry) = self.entries.iter_mut().find(|(id, _)| *id == post_id) {
            entry.1 = metadata;
        } else {
            self.entries.push((post_id, metadata));
        }
    }

    /// Look up a post.
    #[must_use]
    pub fn get(&self, post_id: &str) -> Option<&PostMetadata> {
        self.entries
            .iter()
            .find(|(id, _)| id == post_id)
            .map(|(_, metadata)| metadata)
    }

    /// Check whether a post is known.
    #[must_use]
    pub fn contains(&self, post_id: &str) -> bool {
        self.get(post_id).is_some()
    }

    /// Iterate over `(post_id, metadata)` pairs in catalog order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &PostMetadata)> {
        self.entries.iter().map(|(id, metadata)| (id.as_str(), metadata))
    }

    /// Number of posts.
    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Check if the catalog has no posts.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// The site's published posts.
    #[must_use]
    pub fn builtin() -> Self {
        Self::new()
            .with_post(
                "post-1",
                post(
                    "Greasing the Gears",
                    "How I am using time-saving tools for development on MacOS",
                    "2024-12-15",
                    "Workflow",
                    &["MacOS", "Productivity", "Development", "Tools"],
                ),
            )
            .with_post(
                "post-2",
                post(
                    "AI-Powered Local Development",
                    "Exploring Apple's MLX framework for running LLMs locally",
                    "2024-11-28",
                    "AI/ML",
                    &["MLX", "AI", "Machine Learning", "Python"],
                ),
            )
            .with_post(
                "post-3",
                post(
                    "Hardware Meets Software",
                    "Creating custom Arduino devices with companion mobile apps",
                    "2024-11-10",
                    "Hardware",
                    &["Arduino", "Mobile", "Hardware", "IoT"],
                ),
            )
    }
}

fn post(title: &str, description: &str, date: &str, category: &str, tags: &[&str]) -> PostMetadata {
    PostMetadata {
        title: title.to_owned(),
        description: description.to_owned(),
        date: date.to_owned(),
        category: category.to_owned(),
        tags: tags.iter().map(|&tag| tag.to_owned()).collect(),
    }
}

#[cfg(test)]
pub(crate) fn test_post(title: &str, date: &str) -> PostMetadata {
    post(title, &format!("About {title}"), date, "Testing", &["Rust"])
}
