//! Book grid that expands a clicked cover into a detail panel.
//!
//! Opening sends a trail of movers along an arced [`MotionPath`] from the
//! thumbnail to the panel image while the grid fades out; closing fades the
//! panel and brings the grid back. Both are explicit [`Timeline`]s sampled by
//! the host's frame callback.

use crate::{
    animation::{
        ease::Ease,
        timeline::{Position, Property, TargetId, Timeline, TimelineFrame, TweenSpec},
    },
    effects::movers::{Mover, MoverLayer, mover_target},
    foundation::{
        core::Rectangle,
        error::{FolioError, FolioResult},
        math::Rng64,
    },
    motion::{
        frame::{FrameDriven, FrameRequest},
        path::MotionPath,
    },
};

/// Number of movers (interior motion path steps).
pub const MOVER_STEPS: usize = 5;
/// Duration of each mover's reveal and of its hide.
pub const STEP_DURATION: f64 = 0.3;
/// Delay between consecutive movers starting.
pub const STEP_INTERVAL: f64 = 0.05;
/// Pause between a mover's reveal and its hide.
pub const MOVER_HOLD_GAP: f64 = 0.1;
/// Maximum absolute mover rotation, in degrees.
pub const MOVER_JITTER_DEG: f64 = 5.0;
/// Delay between consecutive grid items fading.
pub const GRID_STAGGER: f64 = 0.02;
/// Duration of the heading frame fade.
pub const FRAME_FADE: f64 = 0.5;
/// How long movers linger after the opening timeline completes.
pub const MOVER_RELEASE_DELAY: f64 = 0.5;
/// Vertical rise of the panel content as it fades in.
pub const CONTENT_RISE: f64 = 25.0;
/// Scale of grid items while the panel is open.
pub const GRID_OPEN_SCALE: f64 = 0.8;

pub const FRAME_TARGET: &str = "frame";
pub const PANEL_TARGET: &str = "panel";
pub const PANEL_IMAGE_TARGET: &str = "panel.img";
pub const PANEL_CONTENT_TARGET: &str = "panel.content";

pub fn grid_item_target(index: usize) -> TargetId {
    TargetId::indexed("grid.item", index)
}

#[derive(Clone, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct Book {
    pub id: String,
    pub title: String,
    pub author: String,
    pub description: String,
    pub cover_image: String,
    pub category: String,
    pub rating: u8,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub amazon_link: Option<String>,
}

/// Filled/empty star rendering of a rating.
#[derive(Clone, Debug, PartialEq, Eq, serde::Serialize)]
pub struct StarRating {
    pub stars: String,
    pub filled: u8,
    pub max: u8,
    /// Perfect ratings get the "Highly Recommended" badge.
    pub is_perfect: bool,
}

pub fn star_rating(rating: u8, max: u8) -> StarRating {
    let filled = rating.min(max);
    let stars = (0..max)
        .map(|i| if i < filled { '★' } else { '☆' })
        .collect();
    StarRating {
        stars,
        filled,
        max,
        is_perfect: max > 0 && rating == max,
    }
}

/// Side of the screen the detail panel opens on.
#[derive(Clone, Copy, Debug, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PanelSide {
    Left,
    Right,
}

/// The panel opens on the side opposite to the clicked item.
pub fn panel_side_for(item: &Rectangle, viewport_width: f64) -> PanelSide {
    if item.center().x < viewport_width / 2.0 {
        PanelSide::Right
    } else {
        PanelSide::Left
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, serde::Serialize)]
#[serde(rename_all = "snake_case")]
pub enum GalleryState {
    Idle,
    Opening,
    Open,
    Closing,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
enum RunKind {
    Open,
    Close,
}

/// One in-flight transition. Dropping it releases its movers.
#[derive(Debug)]
struct Run {
    kind: RunKind,
    timeline: Timeline,
    movers: Option<MoverLayer>,
    started_at: Option<f64>,
    completed: bool,
}

impl Run {
    fn local_time(&mut self, now: f64) -> f64 {
        let start = *self.started_at.get_or_insert(now);
        (now - start).max(0.0)
    }
}

/// Frame-driven book grid with an animated detail panel.
#[derive(Debug)]
pub struct BookGallery {
    books: Vec<Book>,
    state: GalleryState,
    current: Option<usize>,
    panel_side: PanelSide,
    covers_settled: usize,
    run: Option<Run>,
    next_run_id: u64,
    values: TimelineFrame,
    open_pose: TimelineFrame,
    rng: Rng64,
    motion: MotionPath,
}

impl BookGallery {
    pub fn new(books: Vec<Book>, seed: u64) -> Self {
        Self {
            books,
            state: GalleryState::Idle,
            current: None,
            panel_side: PanelSide::Right,
            covers_settled: 0,
            run: None,
            next_run_id: 1,
            values: TimelineFrame::default(),
            open_pose: TimelineFrame::default(),
            rng: Rng64::new(seed),
            motion: MotionPath::default(),
        }
    }

    pub fn with_motion(mut self, motion: MotionPath) -> Self {
        self.motion = motion;
        self
    }

    pub fn books(&self) -> &[Book] {
        &self.books
    }

    pub fn state(&self) -> GalleryState {
        self.state
    }

    pub fn panel_side(&self) -> PanelSide {
        self.panel_side
    }

    pub fn current_book(&self) -> Option<&Book> {
        self.current.and_then(|i| self.books.get(i))
    }

    /// Property values from the most recent frame.
    pub fn values(&self) -> &TimelineFrame {
        &self.values
    }

    /// Movers currently on stage (empty when no opening run holds any).
    pub fn movers(&self) -> &[Mover] {
        self.run
            .as_ref()
            .and_then(|r| r.movers.as_ref())
            .map(MoverLayer::movers)
            .unwrap_or(&[])
    }

    pub fn is_animating(&self) -> bool {
        matches!(self.state, GalleryState::Opening | GalleryState::Closing)
    }

    /// Record that one cover image finished loading (successfully or not).
    pub fn mark_cover_settled(&mut self) {
        self.covers_settled = (self.covers_settled + 1).min(self.books.len());
    }

    /// The grid stays hidden until every cover has settled.
    pub fn is_loading(&self) -> bool {
        self.covers_settled < self.books.len()
    }

    /// Start the opening transition for `book_index`.
    ///
    /// Returns `Ok(false)` when the click is ignored because the grid is still
    /// loading, a transition is running, or a panel is already open.
    #[tracing::instrument(skip(self))]
    pub fn open(
        &mut self,
        book_index: usize,
        item_rect: Rectangle,
        panel_image_rect: Rectangle,
        viewport_width: f64,
    ) -> FolioResult<bool> {
        if self.is_loading() || self.state != GalleryState::Idle {
            tracing::debug!(state = ?self.state, "open ignored");
            return Ok(false);
        }
        let Some(book) = self.books.get(book_index) else {
            return Err(FolioError::validation(format!(
                "book index {book_index} out of range ({} books)",
                self.books.len()
            )));
        };
        if !item_rect.is_finite() || !panel_image_rect.is_finite() {
            return Err(FolioError::validation(
                "open requires finite item and panel measurements",
            ));
        }

        let path = self
            .motion
            .generate(&item_rect, &panel_image_rect, MOVER_STEPS);
        let run_id = self.next_run_id;
        self.next_run_id += 1;
        let movers = MoverLayer::spawn(
            run_id,
            &path,
            &book.cover_image,
            &mut self.rng,
            MOVER_JITTER_DEG,
        );
        let timeline = opening_timeline(movers.len(), self.books.len())?;

        self.panel_side = panel_side_for(&item_rect, viewport_width);
        self.current = Some(book_index);
        self.state = GalleryState::Opening;
        self.run = Some(Run {
            kind: RunKind::Open,
            timeline,
            movers: Some(movers),
            started_at: None,
            completed: false,
        });
        Ok(true)
    }

    /// Start the closing transition. Ignored unless the panel is open and idle.
    #[tracing::instrument(skip(self))]
    pub fn close(&mut self) -> FolioResult<bool> {
        if self.state != GalleryState::Open {
            return Ok(false);
        }
        let timeline = closing_timeline(self.books.len())?;
        self.state = GalleryState::Closing;
        // Replacing a lingering opening run drops its movers here.
        self.run = Some(Run {
            kind: RunKind::Close,
            timeline,
            movers: None,
            started_at: None,
            completed: false,
        });
        Ok(true)
    }

    /// Abort the running transition and release its movers immediately.
    pub fn cancel(&mut self) {
        let Some(run) = self.run.take() else {
            return;
        };
        match (run.kind, run.completed) {
            (RunKind::Open, false) => {
                self.state = GalleryState::Idle;
                self.current = None;
                self.values = TimelineFrame::default();
            }
            (RunKind::Close, false) => {
                self.state = GalleryState::Open;
                self.values = self.open_pose.clone();
            }
            (_, true) => {}
        }
        tracing::debug!(state = ?self.state, "transition cancelled");
    }

    fn finish_open(&mut self, final_pose: TimelineFrame) {
        self.state = GalleryState::Open;
        self.open_pose = final_pose;
    }

    fn finish_close(&mut self) {
        self.state = GalleryState::Idle;
        self.current = None;
        self.values = TimelineFrame::default();
    }
}

impl FrameDriven for BookGallery {
    fn on_frame(&mut self, now_secs: f64) -> FrameRequest {
        let Some(run) = self.run.as_mut() else {
            return FrameRequest::Stop;
        };
        let t = run.local_time(now_secs);
        let duration = run.timeline.duration();
        self.values = run.timeline.sample(t);

        if !run.timeline.is_complete(t) {
            return FrameRequest::Continue;
        }

        match run.kind {
            RunKind::Open => {
                if !run.completed {
                    run.completed = true;
                    let pose = run.timeline.sample(duration);
                    self.finish_open(pose);
                }
                if t >= duration + MOVER_RELEASE_DELAY {
                    self.run = None;
                    return FrameRequest::Stop;
                }
                FrameRequest::Continue
            }
            RunKind::Close => {
                self.run = None;
                self.finish_close();
                FrameRequest::Stop
            }
        }
    }

    fn on_unmount(&mut self) {
        if self.run.take().is_some() {
            tracing::debug!("gallery unmounted with a running transition");
        }
    }
}

/// Opening choreography for `mover_count` movers over a grid of `grid_len` items.
pub fn opening_timeline(mover_count: usize, grid_len: usize) -> FolioResult<Timeline> {
    let mut tl = Timeline::builder()
        .at(
            0.0,
            TweenSpec::new(FRAME_TARGET, Property::Opacity, 1.0, 0.0)
                .duration(FRAME_FADE)
                .ease(Ease::InOutSine),
        )
        .at(0.0, TweenSpec::set(PANEL_TARGET, Property::Opacity, 1.0))
        .at(0.0, TweenSpec::set(PANEL_CONTENT_TARGET, Property::Opacity, 0.0));

    let grid_fade = (0..grid_len).map(|i| {
        TweenSpec::new(grid_item_target(i), Property::Opacity, 1.0, 0.0)
            .duration(STEP_DURATION)
            .ease(Ease::OutSine)
    });
    let grid_shrink = (0..grid_len).map(|i| {
        TweenSpec::new(grid_item_target(i), Property::Scale, 1.0, GRID_OPEN_SCALE)
            .duration(STEP_DURATION)
            .ease(Ease::OutSine)
    });
    tl = tl
        .stagger(grid_fade, GRID_STAGGER, Position::At(0.0))
        .stagger(grid_shrink, GRID_STAGGER, Position::At(0.0))
        .at(
            mover_count as f64 * STEP_INTERVAL,
            TweenSpec::new(PANEL_IMAGE_TARGET, Property::ClipTop, 100.0, 0.0)
                .duration(STEP_DURATION * 2.0)
                .ease(Ease::InOutSine),
        );

    let content_fade = TweenSpec::new(PANEL_CONTENT_TARGET, Property::Opacity, 0.0, 1.0)
        .duration(1.0)
        .ease(Ease::OutExpo);
    let content_rise = TweenSpec::new(PANEL_CONTENT_TARGET, Property::TranslateY, CONTENT_RISE, 0.0)
        .duration(1.0)
        .ease(Ease::OutExpo);
    let panel = tl
        .with_previous(-0.2, content_fade)
        .with_previous(0.0, content_rise)
        .build()?;

    let mut merged = panel;
    for i in 0..mover_count {
        merged = merged.merge(mover_timeline(i)?);
    }
    Ok(merged)
}

/// Reveal-then-hide of mover `index`, delayed by its place in the trail.
pub fn mover_timeline(index: usize) -> FolioResult<Timeline> {
    let id = mover_target(index);
    Ok(Timeline::builder()
        .append(
            TweenSpec::new(id.clone(), Property::ClipTop, 100.0, 0.0)
                .duration(STEP_DURATION)
                .ease(Ease::InSine),
        )
        .append_after(
            MOVER_HOLD_GAP,
            TweenSpec::new(id, Property::ClipBottom, 0.0, 100.0)
                .duration(STEP_DURATION)
                .ease(Ease::OutSine),
        )
        .build()?
        .delay(index as f64 * STEP_INTERVAL))
}

/// Closing choreography over a grid of `grid_len` items.
pub fn closing_timeline(grid_len: usize) -> FolioResult<Timeline> {
    let fade_in = (0..grid_len).map(|i| TweenSpec::new(grid_item_target(i), Property::Opacity, 0.0, 1.0));
    let grow = (0..grid_len)
        .map(|i| TweenSpec::new(grid_item_target(i), Property::Scale, GRID_OPEN_SCALE, 1.0));

    let tl = Timeline::builder()
        .defaults(STEP_DURATION, Ease::OutExpo)
        .append(TweenSpec::new(PANEL_TARGET, Property::Opacity, 1.0, 0.0))
        .at(
            0.0,
            TweenSpec::new(FRAME_TARGET, Property::Opacity, 0.0, 1.0)
                .duration(FRAME_FADE)
                .ease(Ease::InOutSine),
        )
        .at(STEP_DURATION, TweenSpec::set(PANEL_TARGET, Property::Opacity, 0.0))
        .at(
            STEP_DURATION,
            TweenSpec::set(PANEL_IMAGE_TARGET, Property::ClipTop, 100.0),
        )
        .stagger(fade_in, GRID_STAGGER, Position::At(STEP_DURATION))
        .stagger(grow, GRID_STAGGER, Position::At(STEP_DURATION));
    tl.build()
}

#[cfg(test)]
#[path = "../../tests/unit/effects/gallery.rs"]
mod tests;
