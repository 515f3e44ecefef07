use std::path::{Path, PathBuf};

use anyhow::Context;

use crate::{
    content::{
        frontmatter::{Frontmatter, split_document},
        markdown::{Heading, reading_minutes, render_markdown},
    },
    foundation::error::{FolioError, FolioResult},
};

/// File extensions recognised as content, in lookup order.
pub const CONTENT_EXTENSIONS: [&str; 2] = ["mdx", "md"];

pub const PLACEHOLDER_TITLE: &str = "Content Not Found";
pub const PLACEHOLDER_DESCRIPTION: &str = "The requested content could not be loaded.";

/// A fully loaded content record.
#[derive(Clone, Debug, PartialEq, serde::Serialize)]
pub struct ContentEntry {
    pub frontmatter: Frontmatter,
    /// Rendered body; `None` for the not-found placeholder.
    pub html: Option<String>,
    pub headings: Vec<Heading>,
    pub reading_minutes: u32,
}

impl ContentEntry {
    /// Stand-in returned when a record cannot be loaded.
    pub fn placeholder(slug: &str) -> Self {
        Self {
            frontmatter: Frontmatter {
                slug: slug.to_owned(),
                title: PLACEHOLDER_TITLE.to_owned(),
                description: PLACEHOLDER_DESCRIPTION.to_owned(),
                ..Frontmatter::default()
            },
            html: None,
            headings: Vec::new(),
            reading_minutes: 0,
        }
    }

    pub fn is_placeholder(&self) -> bool {
        self.html.is_none()
    }
}

/// Content records stored as `<root>/<category>/<slug>.mdx` files.
#[derive(Clone, Debug)]
pub struct ContentStore {
    root: PathBuf,
}

impl ContentStore {
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }

    pub fn root(&self) -> &Path {
        &self.root
    }

    /// Slugs present in `category`, sorted by name.
    pub fn slugs(&self, category: &str) -> FolioResult<Vec<String>> {
        validate_slug(category)?;
        let dir = self.root.join(category);
        let read = match std::fs::read_dir(&dir) {
            Ok(read) => read,
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => {
                tracing::warn!(dir = %dir.display(), "content category directory is missing");
                return Ok(Vec::new());
            }
            Err(e) => {
                return Err(anyhow::Error::new(e)
                    .context(format!("list content directory '{}'", dir.display()))
                    .into());
            }
        };

        let mut slugs = Vec::new();
        for entry in read {
            let path = entry
                .with_context(|| format!("read entry of '{}'", dir.display()))?
                .path();
            if !path.is_file() {
                continue;
            }
            let is_content = path
                .extension()
                .and_then(|e| e.to_str())
                .is_some_and(|e| CONTENT_EXTENSIONS.contains(&e));
            if let (true, Some(stem)) = (is_content, path.file_stem().and_then(|s| s.to_str())) {
                slugs.push(stem.to_owned());
            }
        }
        slugs.sort();
        slugs.dedup();
        Ok(slugs)
    }

    /// Front matter of every record in `category`, newest first.
    ///
    /// Records that fail to load are listed with placeholder metadata.
    #[tracing::instrument(skip(self))]
    pub fn list_content(&self, category: &str) -> FolioResult<Vec<Frontmatter>> {
        let mut items: Vec<Frontmatter> = self
            .slugs(category)?
            .iter()
            .map(|slug| self.get_content_by_slug(category, slug).frontmatter)
            .collect();
        sort_by_date_desc(&mut items);
        tracing::debug!(count = items.len(), "listed content");
        Ok(items)
    }

    /// Load one record, falling back to [`ContentEntry::placeholder`] on any failure.
    pub fn get_content_by_slug(&self, category: &str, slug: &str) -> ContentEntry {
        match self.try_get_content_by_slug(category, slug) {
            Ok(entry) => entry,
            Err(e) => {
                tracing::warn!(category, slug, error = %e, "content could not be loaded");
                ContentEntry::placeholder(slug)
            }
        }
    }

    #[tracing::instrument(skip(self))]
    pub fn try_get_content_by_slug(&self, category: &str, slug: &str) -> FolioResult<ContentEntry> {
        validate_slug(category)?;
        validate_slug(slug)?;
        let path = self.find_file(category, slug).ok_or_else(|| {
            FolioError::not_found(format!("no content '{slug}' in category '{category}'"))
        })?;
        let source = std::fs::read_to_string(&path)
            .with_context(|| format!("read content file '{}'", path.display()))?;
        let doc = split_document(&source)?;
        let frontmatter = Frontmatter::from_fields(slug, doc.fields)?;
        let rendered = render_markdown(doc.body);
        Ok(ContentEntry {
            frontmatter,
            html: Some(rendered.html),
            headings: rendered.headings,
            reading_minutes: reading_minutes(doc.body),
        })
    }

    fn find_file(&self, category: &str, slug: &str) -> Option<PathBuf> {
        CONTENT_EXTENSIONS
            .iter()
            .map(|ext| self.root.join(category).join(format!("{slug}.{ext}")))
            .find(|p| p.is_file())
    }
}

/// Slugs and category names are single, non-hidden path components.
pub fn validate_slug(slug: &str) -> FolioResult<()> {
    if slug.is_empty() {
        return Err(FolioError::validation("slug must be non-empty"));
    }
    if slug.contains(['/', '\\']) || slug.contains("..") || slug.starts_with('.') {
        return Err(FolioError::validation(format!(
            "slug '{slug}' must be a single file name"
        )));
    }
    Ok(())
}

/// Newest first among dated records; undated records keep their positions.
///
/// Dated records are reordered among the slots they already occupy.
pub fn sort_by_date_desc(items: &mut [Frontmatter]) {
    let mut dated: Vec<(usize, Frontmatter)> = items
        .iter()
        .enumerate()
        .filter(|(_, f)| f.parsed_date().is_some())
        .map(|(i, f)| (i, f.clone()))
        .collect();
    let slots: Vec<usize> = dated.iter().map(|(i, _)| *i).collect();
    dated.sort_by(|(_, a), (_, b)| b.parsed_date().cmp(&a.parsed_date()));
    for (slot, (_, f)) in slots.into_iter().zip(dated) {
        items[slot] = f;
    }
}

#[cfg(test)]
#[path = "../../tests/unit/content/store.rs"]
mod tests;
