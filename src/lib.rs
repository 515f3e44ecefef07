//! Folio is the motion and content engine behind a personal portfolio site.
//!
//! It turns layout measurements and scroll positions into animation values,
//! and a directory of Markdown files into page data. Nothing here touches a
//! DOM: the host measures, calls in once per frame, and applies the numbers.
//!
//! # Pieces
//!
//! 1. **Motion paths**: `Rectangle + Rectangle -> Vec<PathStep>`, an arced
//!    trail of rectangles between a thumbnail and a panel ([`generate_motion_path`]).
//! 2. **Scroll progress**: exponentially smoothed `offset / scrollable height`
//!    ([`ScrollTracker`]), driving a growing mask ([`MaskReveal`]).
//! 3. **Timelines**: explicit tweens with relative placement ([`Timeline`]),
//!    sampled by effects such as the book gallery ([`BookGallery`]).
//! 4. **Content**: front matter and Markdown from `<root>/<category>/<slug>.mdx`
//!    ([`ContentStore`]), shaped into page view-models ([`home_page`] and friends).
//!
//! Per-frame work is pull based: anything animated implements [`FrameDriven`]
//! and is stepped by the host (or by [`FrameLoop`] in tests and tools).
#![forbid(unsafe_code)]

mod animation;
mod content;
mod effects;
mod foundation;
mod motion;
mod site;

pub use animation::ease::Ease;
pub use animation::timeline::{
    DEFAULT_TWEEN_DURATION, Position, Property, TargetId, Timeline, TimelineBuilder,
    TimelineFrame, Tween, TweenSpec,
};
pub use content::date::{ContentDate, format_long_date, parse_date};
pub use content::frontmatter::{
    Document, Frontmatter, parse_toml_block, parse_yaml_block, split_document,
};
pub use content::markdown::{
    HIGHLIGHT_CLASS_PREFIX, Heading, READING_WPM, RenderedMarkdown, Slugger, reading_minutes,
    render_markdown, slugify,
};
pub use content::store::{
    CONTENT_EXTENSIONS, ContentEntry, ContentStore, PLACEHOLDER_DESCRIPTION, PLACEHOLDER_TITLE,
    sort_by_date_desc, validate_slug,
};
pub use effects::disperse::{
    BACKGROUND_ACTIVE_OPACITY, CharState, DISPERSE_DURATION, DISPERSE_RANGE, DISPERSE_STAGGER,
    TextDisperse,
};
pub use effects::gallery::{
    Book, BookGallery, CONTENT_RISE, FRAME_FADE, FRAME_TARGET, GRID_OPEN_SCALE, GRID_STAGGER,
    GalleryState, MOVER_HOLD_GAP, MOVER_JITTER_DEG, MOVER_RELEASE_DELAY, MOVER_STEPS,
    PANEL_CONTENT_TARGET, PANEL_IMAGE_TARGET, PANEL_TARGET, PanelSide, STEP_DURATION,
    STEP_INTERVAL, StarRating, closing_timeline, grid_item_target, mover_timeline,
    opening_timeline, panel_side_for, star_rating,
};
pub use effects::gradient::{
    GradientConfig, GradientKind, GradientLayer, GradientPalette, PointerGradient, ScopedStyle,
};
pub use effects::movers::{MOVER_BASE_Z, Mover, MoverLayer, mover_target};
pub use effects::stack::{
    ACTIVE_CARD_Z, CardPose, active_card_index, card_pose, playlist_card_scale,
    playlist_card_top_offset_px, playlist_color, playlist_image_scale, playlist_target_scale,
    reveal_timeline,
};
pub use foundation::core::{Fps, FrameIndex, PathStep, Point, Rectangle, Vec2};
pub use foundation::error::{FolioError, FolioResult};
pub use foundation::math::{Lerp, Rng64, lerp, map_range};
pub use motion::frame::{FrameDriven, FrameLoop, FrameLoopReport, FrameRequest};
pub use motion::path::{
    DEFAULT_ARC_AMPLITUDE, MAX_PATH_STEPS, MotionPath, clamp_step_count, full_motion_path,
    generate_motion_path,
};
pub use motion::scroll::{
    DEFAULT_MASK_INITIAL, DEFAULT_MASK_TARGET, DEFAULT_SCROLL_EASING, MaskReveal, ScrollSample,
    ScrollSource, ScrollTracker, TrackerState, raw_progress, scrollable_height,
};
pub use site::config::{FeaturedItem, MAX_RATING, NavLink, Playlist, SiteConfig};
pub use site::pages::{
    ArticlePage, BLOG_CATEGORY, BlogIndex, BookCard, BooksPage, CHEATSHEET_CATEGORY,
    CheatsheetIndex, CheatsheetSection, ContentCard, EmptyState, HomePage, PlaylistCard,
    PlaylistsPage, article_page, blog_index, books_page, cheatsheet_index, first_letter,
    home_page, playlists_page,
};
