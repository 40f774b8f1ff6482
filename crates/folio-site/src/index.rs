//! Post index (`data/blog-posts.json`) read by the blog sidebar script.

use chrono::NaiveDate;
use serde::Serialize;

use crate::metadata::{MetadataError, PostMetadata};

/// Top-level index document.
#[derive(Debug, Serialize)]
pub struct PostIndex {
    pub posts: Vec<IndexEntry>,
}

/// One post as the sidebar sees it.
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct IndexEntry {
    pub id: String,
    pub title: String,
    pub description: String,
    pub date: String,
    pub date_formatted: String,
    pub category: String,
    pub tags: Vec<String>,
    pub url: String,
    #[serde(skip)]
    published: NaiveDate,
}

impl PostIndex {
    /// Build the index from `(post_id, metadata)` pairs, newest post first.
    ///
    /// Posts with the same date keep their input order.
    pub fn from_posts<'a>(
        posts: impl IntoIterator<Item = (&'a str, &'a PostMetadata)>,
    ) -> Result<Self, MetadataError> {
        let mut entries = posts
            .into_iter()
            .map(|(post_id, metadata)| {
                Ok(IndexEntry {
                    id: post_id.to_owned(),
                    title: metadata.title.clone(),
                    description: metadata.description.clone(),
                    date: metadata.date.clone(),
                    date_formatted: metadata.date_short()?,
                    category: metadata.category.clone(),
                    tags: metadata.tags.clone(),
                    url: format!("/blog/{post_id}.html"),
                    published: metadata.published()?,
                })
            })
            .collect::<Result<Vec<_>, MetadataError>>()?;

        entries.sort_by(|a, b| b.published.cmp(&a.published));
        Ok(Self { posts: entries })
    }

    /// Serialize as pretty-printed JSON with a trailing newline.
    pub fn to_json(&self) -> Result<String, serde_json::Error> {
        let mut json = serde_json::to_string_pretty(self)?;
        json.push('\n');
        Ok(json)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::metadata::{PostCatalog, test_post};
    use pretty_assertions::assert_eq;

    #[test]
    fn test_builtin_catalog_index() {
        let catalog = PostCatalog::builtin();
        let index = PostIndex::from_posts(catalog.iter()).unwrap();

        let ids: Vec<&str> = index.posts.iter().map(|p| p.id.as_str()).collect();
        assert_eq!(ids, vec!["post-1", "post-2", "post-3"]);
        assert_eq!(index.posts[1].date_formatted, "Nov 28, 2024");
        assert_eq!(index.posts[2].url, "/blog/post-3.html");
    }

    #[test]
    fn test_sorted_newest_first() {
        let old = test_post("Old", "2023-01-01");
        let new = test_post("New", "2025-06-30");
        let index = PostIndex::from_posts([("old", &old), ("new", &new)]).unwrap();

        assert_eq!(index.posts[0].id, "new");
        assert_eq!(index.posts[1].id, "old");
    }

    #[test]
    fn test_json_field_names() {
        let post = test_post("Only", "2024-03-09");
        let json = PostIndex::from_posts([("only", &post)])
            .unwrap()
            .to_json()
            .unwrap();
        let value: serde_json::Value = serde_json::from_str(&json).unwrap();

        let entry = &value["posts"][0];
        assert_eq!(entry["title"], "Only");
        assert_eq!(entry["date"], "2024-03-09");
        assert_eq!(entry["dateFormatted"], "Mar 09, 2024");
        assert_eq!(entry["category"], "Testing");
        assert_eq!(entry["tags"][0], "Rust");
        assert!(entry.get("published").is_none());
        assert!(json.ends_with("}\n"));
    }

    #[test]
    fn test_invalid_date_rejected() {
        let post = test_post("Broken", "2024-13-01");
        assert!(PostIndex::from_posts([("broken", &post)]).is_err());
    }

    #[test]
    fn test_empty_index() {
        let index = PostIndex::from_posts(std::iter::empty()).unwrap();
        assert_eq!(index.to_json().unwrap(), "{\n  \"posts\": []\n}\n");
    }
}
