//! Hover effect that gathers scattered characters into a readable line.

use crate::{
    animation::{
        ease::Ease,
        timeline::{Property, TargetId, Timeline, TweenSpec},
    },
    foundation::{error::FolioResult, math::Rng64},
};

pub const DISPERSE_DURATION: f64 = 0.5;
pub const DISPERSE_STAGGER: f64 = 0.05;
/// Closed characters are displaced by up to this much on each axis.
pub const DISPERSE_RANGE: f64 = 25.0;
pub const BACKGROUND_ACTIVE_OPACITY: f64 = 0.8;
pub const BACKGROUND_FADE: f64 = 0.5;

/// CSS `ease-in-out`.
pub const DISPERSE_EASE: Ease = Ease::CubicBezier(0.42, 0.0, 0.58, 1.0);

const BACKGROUND_TARGET: &str = "background";

#[derive(Clone, Copy, Debug, PartialEq, serde::Serialize)]
pub struct CharState {
    pub ch: char,
    pub x: f64,
    pub y: f64,
    pub opacity: f64,
}

#[derive(Clone, Copy, Debug)]
struct Pose {
    x: f64,
    y: f64,
    opacity: f64,
}

const OPEN: Pose = Pose {
    x: 0.0,
    y: 0.0,
    opacity: 1.0,
};

/// One line of text split into individually animated characters.
#[derive(Clone, Debug)]
pub struct TextDisperse {
    chars: Vec<char>,
    closed: Vec<Pose>,
    hovered: bool,
    /// Values held before each transition's tweens start.
    base: Vec<CharState>,
    base_background: f64,
    transition: Option<(f64, Timeline)>,
}

impl TextDisperse {
    /// Starts at rest in the closed (scattered, invisible) pose.
    pub fn new(text: &str, seed: u64) -> Self {
        let mut rng = Rng64::new(seed);
        let chars: Vec<char> = text.chars().collect();
        let closed: Vec<Pose> = chars
            .iter()
            .map(|_| Pose {
                y: rng.range(-DISPERSE_RANGE, DISPERSE_RANGE),
                x: rng.range(-DISPERSE_RANGE, DISPERSE_RANGE),
                opacity: 0.0,
            })
            .collect();
        let base = chars
            .iter()
            .zip(&closed)
            .map(|(&ch, p)| CharState {
                ch,
                x: p.x,
                y: p.y,
                opacity: p.opacity,
            })
            .collect();
        Self {
            chars,
            closed,
            hovered: false,
            base,
            base_background: 0.0,
            transition: None,
        }
    }

    pub fn text(&self) -> String {
        self.chars.iter().collect()
    }

    pub fn is_hovered(&self) -> bool {
        self.hovered
    }

    /// Pointer entered (`true`) or left (`false`) at `now`.
    ///
    /// Each character restarts from wherever it currently is, so a quick
    /// leave-and-enter reverses mid-flight.
    pub fn hover(&mut self, active: bool, now: f64) -> FolioResult<()> {
        if active == self.hovered {
            return Ok(());
        }
        let current = self.sample(now);
        let background = self.background_opacity(now);
        self.hovered = active;

        let mut b = Timeline::builder().defaults(DISPERSE_DURATION, DISPERSE_EASE);
        for (i, from) in current.iter().enumerate() {
            let to = if active { OPEN } else { self.closed[i] };
            let id = char_target(i);
            let delay = i as f64 * DISPERSE_STAGGER;
            b = b
                .at(delay, TweenSpec::new(id.clone(), Property::TranslateX, from.x, to.x))
                .at(delay, TweenSpec::new(id.clone(), Property::TranslateY, from.y, to.y))
                .at(delay, TweenSpec::new(id, Property::Opacity, from.opacity, to.opacity));
        }
        let target_bg = if active { BACKGROUND_ACTIVE_OPACITY } else { 0.0 };
        b = b.at(
            0.0,
            TweenSpec::new(BACKGROUND_TARGET, Property::Opacity, background, target_bg)
                .duration(BACKGROUND_FADE)
                .ease(Ease::OutQuad),
        );

        self.base = current;
        self.base_background = background;
        self.transition = Some((now, b.build()?));
        Ok(())
    }

    pub fn sample(&self, now: f64) -> Vec<CharState> {
        let Some((started, tl)) = &self.transition else {
            return self.base.clone();
        };
        let frame = tl.sample(now - started);
        self.base
            .iter()
            .enumerate()
            .map(|(i, held)| {
                let id = char_target(i);
                let get = |p, fallback| frame.get(id.as_str(), p).unwrap_or(fallback);
                CharState {
                    ch: held.ch,
                    x: get(Property::TranslateX, held.x),
                    y: get(Property::TranslateY, held.y),
                    opacity: get(Property::Opacity, held.opacity),
                }
            })
            .collect()
    }

    pub fn background_opacity(&self, now: f64) -> f64 {
        self.transition
            .as_ref()
            .and_then(|(started, tl)| {
                tl.sample(now - started)
                    .get(BACKGROUND_TARGET, Property::Opacity)
            })
            .unwrap_or(self.base_background)
    }

    /// Whether every character has reached its resting pose.
    pub fn is_settled(&self, now: f64) -> bool {
        self.transition
            .as_ref()
            .is_none_or(|(started, tl)| tl.is_complete(now - started))
    }
}

fn char_target(index: usize) -> TargetId {
    TargetId::indexed("char", index)
}

#[cfg(test)]
#[path = "../../tests/unit/effects/disperse.rs"]
mod tests;
