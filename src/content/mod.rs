//! File-backed blog posts and cheatsheets.

pub mod date;
pub mod frontmatter;
pub mod markdown;
pub mod store;

pub use frontmatter::Frontmatter;
pub use store::{ContentEntry, ContentStore};
