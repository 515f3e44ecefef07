use std::{
    collections::HashSet,
    path::{Path, PathBuf},
};

use anyhow::Context;

use crate::{
    effects::gallery::Book,
    foundation::error::{FolioError, FolioResult},
};

/// Highest star rating a book can have.
pub const MAX_RATING: u8 = 5;

#[derive(Clone, Debug, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub struct NavLink {
    pub label: String,
    pub href: String,
}

impl NavLink {
    fn new(label: &str, href: &str) -> Self {
        Self {
            label: label.to_owned(),
            href: href.to_owned(),
        }
    }
}

/// Hand-picked entry shown on the home page.
#[derive(Clone, Debug, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub struct FeaturedItem {
    pub title: String,
    #[serde(default)]
    pub description: String,
    pub href: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub date: Option<String>,
}

#[derive(Clone, Debug, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub struct Playlist {
    pub id: String,
    pub title: String,
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub mood: String,
    pub spotify_id: String,
}

impl Playlist {
    pub fn embed_url(&self) -> String {
        format!("https://open.spotify.com/embed/playlist/{}", self.spotify_id)
    }
}

/// Site-wide settings and catalogs, read from a TOML file.
#[derive(Clone, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(default)]
pub struct SiteConfig {
    pub title: String,
    pub author: String,
    /// Root of the content tree; relative paths resolve against the config file.
    pub content_dir: PathBuf,
    /// Home page heading, one inner list per line.
    pub intro_lines: Vec<Vec<String>>,
    pub links: Vec<NavLink>,
    pub featured_posts: Vec<FeaturedItem>,
    pub featured_cheatsheets: Vec<FeaturedItem>,
    pub books: Vec<Book>,
    pub playlists: Vec<Playlist>,
}

impl Default for SiteConfig {
    fn default() -> Self {
        Self {
            title: "Portfolio".to_owned(),
            author: String::new(),
            content_dir: PathBuf::from("content"),
            intro_lines: Vec::new(),
            links: vec![
                NavLink::new("→Blog Posts", "/blog"),
                NavLink::new("→Cheat Sheets", "/cheatsheets"),
                NavLink::new("→Books", "/books"),
                NavLink::new("→Playlists", "/playlists"),
            ],
            featured_posts: Vec::new(),
            featured_cheatsheets: Vec::new(),
            books: Vec::new(),
            playlists: Vec::new(),
        }
    }
}

impl SiteConfig {
    pub fn from_toml_str(s: &str) -> FolioResult<Self> {
        let cfg: Self =
            toml::from_str(s).map_err(|e| FolioError::config(format!("invalid site config: {e}")))?;
        cfg.validate()?;
        Ok(cfg)
    }

    /// Load and validate a config file, resolving `content_dir` next to it.
    #[tracing::instrument]
    pub fn from_path(path: &Path) -> FolioResult<Self> {
        let text = std::fs::read_to_string(path)
            .with_context(|| format!("read site config '{}'", path.display()))?;
        let mut cfg = Self::from_toml_str(&text)?;
        if cfg.content_dir.is_relative()
            && let Some(dir) = path.parent()
        {
            cfg.content_dir = dir.join(&cfg.content_dir);
        }
        tracing::debug!(
            books = cfg.books.len(),
            playlists = cfg.playlists.len(),
            "loaded site config"
        );
        Ok(cfg)
    }

    pub fn validate(&self) -> FolioResult<()> {
        let mut ids = HashSet::new();
        for book in &self.books {
            if book.title.trim().is_empty() {
                return Err(FolioError::config(format!("book '{}' has no title", book.id)));
            }
            if book.rating > MAX_RATING {
                return Err(FolioError::config(format!(
                    "book '{}' rating {} exceeds {MAX_RATING}",
                    book.id, book.rating
                )));
            }
            if !ids.insert(book.id.as_str()) {
                return Err(FolioError::config(format!("duplicate book id '{}'", book.id)));
            }
        }

        let mut ids = HashSet::new();
        for p in &self.playlists {
            if p.spotify_id.trim().is_empty() {
                return Err(FolioError::config(format!(
                    "playlist '{}' has no spotify_id",
                    p.id
                )));
            }
            if !ids.insert(p.id.as_str()) {
                return Err(FolioError::config(format!("duplicate playlist id '{}'", p.id)));
            }
        }
        Ok(())
    }
}

#[cfg(test)]
#[path = "../../tests/unit/site/config.rs"]
mod tests;
