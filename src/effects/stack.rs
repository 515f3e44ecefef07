//! Scroll-driven card decks: the blog preview stack and the playlist deck.

use crate::{
    animation::{
        ease::Ease,
        timeline::{Property, TargetId, Timeline, TweenSpec},
    },
    foundation::{error::FolioResult, math::map_range},
};

/// Stacking order of the active card.
pub const ACTIVE_CARD_Z: i32 = 10;

pub const PLAYLIST_SCALE_STEP: f64 = 0.05;
pub const PLAYLIST_RANGE_STEP: f64 = 0.15;
pub const PLAYLIST_RANGE_END: f64 = 0.85;
pub const PLAYLIST_TOP_STEP_PX: f64 = 25.0;
pub const PLAYLIST_IMAGE_START_SCALE: f64 = 1.2;

pub const REVEAL_RISE_PX: f64 = 20.0;
pub const REVEAL_RISE_STEP_PX: f64 = 10.0;
pub const REVEAL_DELAY: f64 = 0.1;
pub const REVEAL_DELAY_STEP: f64 = 0.15;
pub const REVEAL_DURATION: f64 = 1.0;

/// CSS `ease`.
pub const REVEAL_EASE: Ease = Ease::CubicBezier(0.25, 0.1, 0.25, 1.0);

pub const PLAYLIST_COLORS: [&str; 4] = ["#8c7b5e", "#bb6826", "#dfcbaf", "#943706"];

/// Card shown in front for the given scroll progress through the deck.
pub fn active_card_index(progress: f64, count: usize) -> Option<usize> {
    if count == 0 {
        return None;
    }
    let p = if progress.is_finite() {
        progress.clamp(0.0, 1.0)
    } else {
        0.0
    };
    let index = (p * count as f64).floor() as usize;
    Some(index.min(count - 1))
}

/// Visual pose of one card in the blog preview stack.
#[derive(Clone, Copy, Debug, PartialEq, serde::Serialize)]
pub struct CardPose {
    pub z_index: i32,
    /// Vertical offset as a percentage of the card height.
    pub y_percent: f64,
    pub scale: f64,
    pub opacity: f64,
    pub rotate_x: f64,
}

/// Cards behind the active one rise and recede; cards after it drop below.
pub fn card_pose(index: usize, active: usize, total: usize) -> CardPose {
    if index == active {
        return CardPose {
            z_index: ACTIVE_CARD_Z,
            y_percent: 0.0,
            scale: 1.0,
            opacity: 1.0,
            rotate_x: 0.0,
        };
    }
    let (offset, y_percent, rotate_x) = if index < active {
        let offset = (active - index) as f64;
        (offset, -offset * 10.0, -3.0 * offset)
    } else {
        let offset = (index - active) as f64;
        (offset, offset * 8.0, 3.0 * offset)
    };
    CardPose {
        z_index: total as i32 - offset as i32,
        y_percent,
        scale: 1.0 - 0.05 * offset,
        opacity: 1.0 - 0.2 * offset,
        rotate_x,
    }
}

/// Scale a playlist card shrinks to once later cards stack on top of it.
pub fn playlist_target_scale(index: usize, count: usize) -> f64 {
    1.0 - count.saturating_sub(index) as f64 * PLAYLIST_SCALE_STEP
}

/// Card scale for the deck's overall scroll `progress`.
pub fn playlist_card_scale(progress: f64, index: usize, count: usize) -> f64 {
    map_range(
        progress,
        [index as f64 * PLAYLIST_RANGE_STEP, PLAYLIST_RANGE_END],
        [1.0, playlist_target_scale(index, count)],
    )
}

/// Cover image zoom for the card's own scroll progress.
pub fn playlist_image_scale(card_progress: f64) -> f64 {
    map_range(card_progress, [0.0, 1.0], [PLAYLIST_IMAGE_START_SCALE, 1.0])
}

pub fn playlist_card_top_offset_px(index: usize) -> f64 {
    index as f64 * PLAYLIST_TOP_STEP_PX
}

pub fn playlist_color(index: usize) -> &'static str {
    PLAYLIST_COLORS[index % PLAYLIST_COLORS.len()]
}

pub fn card_target(index: usize) -> TargetId {
    TargetId::indexed("card", index)
}

/// Staggered on-load reveal: each card starts lowered and transparent.
pub fn reveal_timeline(count: usize) -> FolioResult<Timeline> {
    let mut b = Timeline::builder().defaults(REVEAL_DURATION, REVEAL_EASE);
    for i in 0..count {
        let id = card_target(i);
        let rise = REVEAL_RISE_PX + i as f64 * REVEAL_RISE_STEP_PX;
        let delay = REVEAL_DELAY + i as f64 * REVEAL_DELAY_STEP;
        b = b
            .at(0.0, TweenSpec::set(id.clone(), Property::Opacity, 0.0))
            .at(0.0, TweenSpec::set(id.clone(), Property::TranslateY, rise))
            .at(delay, TweenSpec::new(id.clone(), Property::Opacity, 0.0, 1.0))
            .at(delay, TweenSpec::new(id, Property::TranslateY, rise, 0.0));
    }
    b.build()
}

#[cfg(test)]
#[path = "../../tests/unit/effects/stack.rs"]
mod tests;
