//! Blog page assembly and static site building for Folio.
//!
//! [`BlogBuilder`] reads drafts, converts them with `folio-renderer`, wraps
//! them in the site's page skeleton and writes the results next to the rest
//! of the website. Post metadata comes from a [`PostCatalog`] passed in by
//! the caller, normally [`PostCatalog::builtin`].

mod builder;
mod index;
mod metadata;
mod template;

pub use builder::{
    ALL_POSTS, BlogBuilder, BuildError, BuildSummary, BuildTarget, BuiltPost, PostOutcome,
};
pub use index::{IndexEntry, PostIndex};
pub use metadata::{MetadataError, PostCatalog, PostMetadata};
pub use template::{PageData, render_page};
