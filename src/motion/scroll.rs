//! Scroll position to smoothed progress.

use crate::{
    foundation::error::{FolioError, FolioResult},
    motion::frame::{FrameDriven, FrameRequest},
};

/// Fraction of the remaining distance covered per frame.
pub const DEFAULT_SCROLL_EASING: f64 = 0.15;

/// Mask scale before any scrolling.
pub const DEFAULT_MASK_INITIAL: f64 = 0.8;

/// Mask scale added at full progress.
pub const DEFAULT_MASK_TARGET: f64 = 180.0;

/// Total scrollable distance of a container inside a viewport.
pub fn scrollable_height(container_height: f64, viewport_height: f64) -> f64 {
    container_height - viewport_height
}

/// `element_offset_top / scrollable_height`, unclamped.
///
/// A zero, negative or non-finite scrollable height means there is nothing
/// to scroll through, so progress is `0.0`.
pub fn raw_progress(element_offset_top: f64, scrollable_height: f64) -> f64 {
    if !scrollable_height.is_finite() || scrollable_height <= 0.0 || !element_offset_top.is_finite()
    {
        return 0.0;
    }
    element_offset_top / scrollable_height
}

#[derive(Clone, Copy, Debug, PartialEq, serde::Serialize)]
#[serde(tag = "state", rename_all = "snake_case")]
pub enum TrackerState {
    Inactive,
    Active { smoothed: f64 },
}

/// Exponentially smoothed scroll progress, sampled once per frame.
#[derive(Clone, Copy, Debug, PartialEq, serde::Serialize)]
pub struct ScrollTracker {
    easing: f64,
    state: TrackerState,
}

impl Default for ScrollTracker {
    fn default() -> Self {
        Self {
            easing: DEFAULT_SCROLL_EASING,
            state: TrackerState::Inactive,
        }
    }
}

impl ScrollTracker {
    /// `easing` must lie in `(0, 1]`.
    pub fn new(easing: f64) -> FolioResult<Self> {
        if !(easing > 0.0 && easing <= 1.0) {
            return Err(FolioError::validation(format!(
                "scroll easing must be in (0, 1], got {easing}"
            )));
        }
        Ok(Self {
            easing,
            state: TrackerState::Inactive,
        })
    }

    pub fn easing(&self) -> f64 {
        self.easing
    }

    pub fn state(&self) -> TrackerState {
        self.state
    }

    pub fn is_active(&self) -> bool {
        matches!(self.state, TrackerState::Active { .. })
    }

    pub fn smoothed(&self) -> Option<f64> {
        match self.state {
            TrackerState::Inactive => None,
            TrackerState::Active { smoothed } => Some(smoothed),
        }
    }

    /// Feed one frame's measurements and return the new smoothed progress.
    pub fn sample(&mut self, element_offset_top: f64, scrollable_height: f64) -> f64 {
        self.update(raw_progress(element_offset_top, scrollable_height))
    }

    /// Feed an already computed raw progress value.
    pub fn update(&mut self, raw: f64) -> f64 {
        let prev = self.smoothed().unwrap_or(0.0);
        let smoothed = prev + (raw - prev) * self.easing;
        self.state = TrackerState::Active { smoothed };
        smoothed
    }

    /// Forget the smoothed value; the next sample starts again from zero.
    pub fn deactivate(&mut self) {
        self.state = TrackerState::Inactive;
    }
}

/// One frame's scroll measurements.
#[derive(Clone, Copy, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct ScrollSample {
    pub element_offset_top: f64,
    pub scrollable_height: f64,
}

/// Where per-frame scroll measurements come from (the host layout).
pub trait ScrollSource {
    fn measure(&mut self) -> ScrollSample;
}

impl<F> ScrollSource for F
where
    F: FnMut() -> ScrollSample,
{
    fn measure(&mut self) -> ScrollSample {
        self()
    }
}

/// Scroll-linked mask that grows from `initial_size` as the page scrolls.
#[derive(Debug)]
pub struct MaskReveal<S> {
    source: S,
    tracker: ScrollTracker,
    pub initial_size: f64,
    pub target_size: f64,
    mask_percent: Option<f64>,
}

impl<S: ScrollSource> MaskReveal<S> {
    pub fn new(source: S, tracker: ScrollTracker) -> Self {
        Self {
            source,
            tracker,
            initial_size: DEFAULT_MASK_INITIAL,
            target_size: DEFAULT_MASK_TARGET,
            mask_percent: None,
        }
    }

    /// `(initial + target * progress) * 100`, the CSS mask size in percent.
    pub fn mask_size_percent(&self, progress: f64) -> f64 {
        (self.initial_size + self.target_size * progress) * 100.0
    }

    /// Mask size applied on the most recent frame.
    pub fn current_mask_percent(&self) -> Option<f64> {
        self.mask_percent
    }

    pub fn tracker(&self) -> &ScrollTracker {
        &self.tracker
    }
}

impl<S: ScrollSource> FrameDriven for MaskReveal<S> {
    fn on_frame(&mut self, _now_secs: f64) -> FrameRequest {
        let m = self.source.measure();
        let progress = self.tracker.sample(m.element_offset_top, m.scrollable_height);
        self.mask_percent = Some(self.mask_size_percent(progress));
        FrameRequest::Continue
    }

    fn on_unmount(&mut self) {
        self.tracker.deactivate();
        self.mask_percent = None;
    }
}

#[cfg(test)]
#[path = "../../tests/unit/motion/scroll.rs"]
mod tests;
