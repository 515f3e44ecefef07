//! View-models for each page of the site.
//!
//! Builders take the site config and the content store and return plain
//! serializable data; rendering them is left to the host.

use std::collections::BTreeMap;

use crate::{
    content::{
        ContentEntry, ContentStore, Frontmatter,
        date::format_long_date,
    },
    effects::{
        gallery::{Book, StarRating, star_rating},
        stack::{
            PLAYLIST_RANGE_END, PLAYLIST_RANGE_STEP, playlist_card_top_offset_px, playlist_color,
            playlist_target_scale,
        },
    },
    foundation::error::FolioResult,
    site::config::{FeaturedItem, MAX_RATING, NavLink, Playlist, SiteConfig},
};

pub const BLOG_CATEGORY: &str = "blog";
pub const CHEATSHEET_CATEGORY: &str = "cheatsheets";

/// Latest posts shown on the home page when none are configured.
pub const HOME_FEATURED_LIMIT: usize = 3;

pub const EMPTY_HINT: &str = "Check back soon for new content!";
pub const UNCATEGORIZED: &str = "Uncategorized";
pub const HIGHLY_RECOMMENDED: &str = "Highly Recommended";

/// Shown instead of a list that has nothing in it.
#[derive(Clone, Debug, PartialEq, Eq, serde::Serialize)]
pub struct EmptyState {
    pub title: String,
    pub message: String,
}

impl EmptyState {
    fn new(title: &str) -> Self {
        Self {
            title: title.to_owned(),
            message: EMPTY_HINT.to_owned(),
        }
    }
}

/// One content record as a link card.
#[derive(Clone, Debug, PartialEq, Eq, serde::Serialize)]
pub struct ContentCard {
    pub slug: String,
    pub title: String,
    pub description: String,
    /// Long form (`April 15, 2025`) when the record has a date.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub date: Option<String>,
    pub category: String,
    pub href: String,
}

impl ContentCard {
    fn new(section: &str, fm: &Frontmatter) -> Self {
        Self {
            slug: fm.slug.clone(),
            title: fm.title.clone(),
            description: fm.description.clone(),
            date: fm.date.as_deref().map(format_long_date),
            category: fm
                .category
                .clone()
                .unwrap_or_else(|| UNCATEGORIZED.to_owned()),
            href: format!("/{section}/{}", fm.slug),
        }
    }

    fn featured(&self) -> FeaturedItem {
        FeaturedItem {
            title: self.title.clone(),
            description: self.description.clone(),
            href: self.href.clone(),
            date: self.date.clone(),
        }
    }
}

#[derive(Clone, Debug, PartialEq, Eq, serde::Serialize)]
pub struct HomePage {
    pub title: String,
    pub intro_lines: Vec<Vec<String>>,
    pub links: Vec<NavLink>,
    pub featured_posts: Vec<FeaturedItem>,
    pub featured_cheatsheets: Vec<FeaturedItem>,
}

#[derive(Clone, Debug, PartialEq, Eq, serde::Serialize)]
pub struct BlogIndex {
    pub posts: Vec<ContentCard>,
    pub by_category: BTreeMap<String, Vec<ContentCard>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub empty: Option<EmptyState>,
}

#[derive(Clone, Debug, PartialEq, Eq, serde::Serialize)]
pub struct CheatsheetSection {
    pub letter: String,
    pub items: Vec<ContentCard>,
}

#[derive(Clone, Debug, PartialEq, Eq, serde::Serialize)]
pub struct CheatsheetIndex {
    pub sections: Vec<CheatsheetSection>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub empty: Option<EmptyState>,
}

#[derive(Clone, Debug, PartialEq, serde::Serialize)]
pub struct ArticlePage {
    pub entry: ContentEntry,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub display_date: Option<String>,
    pub back_href: String,
}

#[derive(Clone, Debug, PartialEq, serde::Serialize)]
pub struct BookCard {
    pub book: Book,
    pub stars: StarRating,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub badge: Option<String>,
}

#[derive(Clone, Debug, PartialEq, serde::Serialize)]
pub struct BooksPage {
    pub books: Vec<BookCard>,
    pub by_category: BTreeMap<String, Vec<BookCard>>,
}

#[derive(Clone, Debug, PartialEq, serde::Serialize)]
pub struct PlaylistCard {
    pub playlist: Playlist,
    pub embed_url: String,
    pub color: String,
    pub top_offset_px: f64,
    pub target_scale: f64,
    /// Deck progress over which the card shrinks to `target_scale`.
    pub scroll_range: [f64; 2],
}

#[derive(Clone, Debug, PartialEq, serde::Serialize)]
pub struct PlaylistsPage {
    pub cards: Vec<PlaylistCard>,
}

#[tracing::instrument(skip_all)]
pub fn home_page(config: &SiteConfig, store: &ContentStore) -> FolioResult<HomePage> {
    let featured_posts = if config.featured_posts.is_empty() {
        store
            .list_content(BLOG_CATEGORY)?
            .iter()
            .take(HOME_FEATURED_LIMIT)
            .map(|fm| ContentCard::new(BLOG_CATEGORY, fm).featured())
            .collect()
    } else {
        config.featured_posts.clone()
    };
    Ok(HomePage {
        title: config.title.clone(),
        intro_lines: config.intro_lines.clone(),
        links: config.links.clone(),
        featured_posts,
        featured_cheatsheets: config.featured_cheatsheets.clone(),
    })
}

#[tracing::instrument(skip_all)]
pub fn blog_index(store: &ContentStore) -> FolioResult<BlogIndex> {
    let posts: Vec<ContentCard> = store
        .list_content(BLOG_CATEGORY)?
        .iter()
        .map(|fm| ContentCard::new(BLOG_CATEGORY, fm))
        .collect();
    let mut by_category: BTreeMap<String, Vec<ContentCard>> = BTreeMap::new();
    for post in &posts {
        by_category
            .entry(post.category.clone())
            .or_default()
            .push(post.clone());
    }
    let empty = posts.is_empty().then(|| EmptyState::new("No posts yet"));
    Ok(BlogIndex {
        posts,
        by_category,
        empty,
    })
}

#[tracing::instrument(skip_all)]
pub fn cheatsheet_index(store: &ContentStore) -> FolioResult<CheatsheetIndex> {
    let mut groups: BTreeMap<String, Vec<ContentCard>> = BTreeMap::new();
    for fm in store.list_content(CHEATSHEET_CATEGORY)? {
        let letter = first_letter(&fm.title);
        groups
            .entry(letter)
            .or_default()
            .push(ContentCard::new(CHEATSHEET_CATEGORY, &fm));
    }
    let sections: Vec<CheatsheetSection> = groups
        .into_iter()
        .map(|(letter, items)| CheatsheetSection { letter, items })
        .collect();
    let empty = sections
        .is_empty()
        .then(|| EmptyState::new("No cheatsheets yet"));
    Ok(CheatsheetIndex { sections, empty })
}

/// Uppercased first character of `title`, or `#` for an empty title.
pub fn first_letter(title: &str) -> String {
    title
        .trim_start()
        .chars()
        .next()
        .map_or_else(|| "#".to_owned(), |c| c.to_uppercase().collect())
}

/// Post or cheatsheet page; a failed load yields the placeholder entry.
pub fn article_page(store: &ContentStore, category: &str, slug: &str) -> ArticlePage {
    let entry = store.get_content_by_slug(category, slug);
    let display_date = entry.frontmatter.date.as_deref().map(format_long_date);
    ArticlePage {
        entry,
        display_date,
        back_href: format!("/{category}"),
    }
}

pub fn books_page(config: &SiteConfig) -> BooksPage {
    let books: Vec<BookCard> = config
        .books
        .iter()
        .map(|book| {
            let stars = star_rating(book.rating, MAX_RATING);
            let badge = stars.is_perfect.then(|| HIGHLY_RECOMMENDED.to_owned());
            BookCard {
                book: book.clone(),
                stars,
                badge,
            }
        })
        .collect();
    let mut by_category: BTreeMap<String, Vec<BookCard>> = BTreeMap::new();
    for card in &books {
        by_category
            .entry(card.book.category.clone())
            .or_default()
            .push(card.clone());
    }
    BooksPage { books, by_category }
}

pub fn playlists_page(config: &SiteConfig) -> PlaylistsPage {
    let count = config.playlists.len();
    let cards = config
        .playlists
        .iter()
        .enumerate()
        .map(|(i, p)| PlaylistCard {
            playlist: p.clone(),
            embed_url: p.embed_url(),
            color: playlist_color(i).to_owned(),
            top_offset_px: playlist_card_top_offset_px(i),
            target_scale: playlist_target_scale(i, count),
            scroll_range: [i as f64 * PLAYLIST_RANGE_STEP, PLAYLIST_RANGE_END],
        })
        .collect();
    PlaylistsPage { cards }
}

#[cfg(test)]
#[path = "../../tests/unit/site/pages.rs"]
mod tests;
