use std::collections::BTreeMap;

use crate::{
    animation::ease::Ease,
    foundation::error::{FolioError, FolioResult},
    foundation::math::lerp,
};

/// Duration used when neither the tween nor the builder defaults specify one.
pub const DEFAULT_TWEEN_DURATION: f64 = 0.5;

/// Name of an animated visual element (`"panel"`, `"grid.item.3"`, ...).
#[derive(
    Clone, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, serde::Serialize, serde::Deserialize,
)]
#[serde(transparent)]
pub struct TargetId(pub String);

impl TargetId {
    pub fn new(name: impl Into<String>) -> Self {
        Self(name.into())
    }

    /// `"{prefix}.{index}"`, used for element families such as grid items and movers.
    pub fn indexed(prefix: &str, index: usize) -> Self {
        Self(format!("{prefix}.{index}"))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl From<&str> for TargetId {
    fn from(s: &str) -> Self {
        Self::new(s)
    }
}

impl std::borrow::Borrow<str> for TargetId {
    fn borrow(&self) -> &str {
        &self.0
    }
}

impl std::fmt::Display for TargetId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.0)
    }
}

/// Animatable visual property.
///
/// `ClipTop`/`ClipBottom` are the top and bottom components of an
/// `inset(top% 0% bottom% 0%)` clip, in percent.
#[derive(
    Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, serde::Serialize, serde::Deserialize,
)]
#[serde(rename_all = "snake_case")]
pub enum Property {
    Opacity,
    Scale,
    TranslateX,
    TranslateY,
    RotateX,
    RotateZ,
    ClipTop,
    ClipBottom,
    Left,
    Top,
    Width,
    Height,
}

impl Property {
    pub fn name(self) -> &'static str {
        match self {
            Self::Opacity => "opacity",
            Self::Scale => "scale",
            Self::TranslateX => "translate_x",
            Self::TranslateY => "translate_y",
            Self::RotateX => "rotate_x",
            Self::RotateZ => "rotate_z",
            Self::ClipTop => "clip_top",
            Self::ClipBottom => "clip_bottom",
            Self::Left => "left",
            Self::Top => "top",
            Self::Width => "width",
            Self::Height => "height",
        }
    }
}

/// One placed sub-animation: `property` of `target` goes from `from` to `to`
/// over `[start, start + duration]`.
#[derive(Clone, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct Tween {
    pub target: TargetId,
    pub property: Property,
    pub from: f64,
    pub to: f64,
    pub start: f64,
    pub duration: f64,
    pub ease: Ease,
}

impl Tween {
    pub fn end(&self) -> f64 {
        self.start + self.duration
    }

    /// Eased progress in `[0, 1]`, or `None` before the tween starts.
    pub fn progress(&self, now: f64) -> Option<f64> {
        if now < self.start {
            return None;
        }
        if self.duration <= 0.0 {
            return Some(1.0);
        }
        Some(self.ease.apply((now - self.start) / self.duration))
    }

    /// Interpolated value; exactly `to` once the tween has finished.
    pub fn sample(&self, now: f64) -> Option<f64> {
        self.progress(now)
            .map(|p| if p >= 1.0 { self.to } else { lerp(self.from, self.to, p) })
    }
}

/// A tween that has not been placed on a timeline yet.
#[derive(Clone, Debug, PartialEq)]
pub struct TweenSpec {
    pub target: TargetId,
    pub property: Property,
    pub from: f64,
    pub to: f64,
    pub duration: Option<f64>,
    pub ease: Option<Ease>,
}

impl TweenSpec {
    pub fn new(target: impl Into<TargetId>, property: Property, from: f64, to: f64) -> Self {
        Self {
            target: target.into(),
            property,
            from,
            to,
            duration: None,
            ease: None,
        }
    }

    /// Zero-duration tween that snaps `property` to `value`.
    pub fn set(target: impl Into<TargetId>, property: Property, value: f64) -> Self {
        Self {
            duration: Some(0.0),
            ease: Some(Ease::Linear),
            ..Self::new(target, property, value, value)
        }
    }

    pub fn duration(mut self, secs: f64) -> Self {
        self.duration = Some(secs);
        self
    }

    pub fn ease(mut self, ease: Ease) -> Self {
        self.ease = Some(ease);
        self
    }
}

impl From<String> for TargetId {
    fn from(s: String) -> Self {
        Self(s)
    }
}

/// Where a tween lands relative to what is already on the timeline.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum Position {
    /// At the current end of the timeline.
    End,
    /// `gap` seconds after the current end.
    AfterEnd(f64),
    /// At the start of the most recently placed tween, shifted by `offset`.
    WithPrevious(f64),
    /// At an absolute time.
    At(f64),
}

/// Sampled values of every property that has started animating.
#[derive(Clone, Debug, Default, PartialEq, serde::Serialize)]
pub struct TimelineFrame {
    values: BTreeMap<TargetId, BTreeMap<Property, f64>>,
}

impl TimelineFrame {
    pub fn get(&self, target: &str, property: Property) -> Option<f64> {
        self.values
            .get(target)
            .and_then(|props| props.get(&property))
            .copied()
    }

    pub fn target(&self, target: &str) -> Option<&BTreeMap<Property, f64>> {
        self.values.get(target)
    }

    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    pub fn len(&self) -> usize {
        self.values.values().map(BTreeMap::len).sum()
    }

    /// Overlay `other` on top of `self`.
    pub fn merge(&mut self, other: TimelineFrame) {
        for (target, props) in other.values {
            self.values.entry(target).or_default().extend(props);
        }
    }

    fn insert(&mut self, target: &TargetId, property: Property, value: f64) {
        self.values
            .entry(target.clone())
            .or_default()
            .insert(property, value);
    }
}

impl<'a> IntoIterator for &'a TimelineFrame {
    type Item = (&'a TargetId, &'a BTreeMap<Property, f64>);
    type IntoIter = std::collections::btree_map::Iter<'a, TargetId, BTreeMap<Property, f64>>;

    fn into_iter(self) -> Self::IntoIter {
        self.values.iter()
    }
}

/// Finite list of tweens driven by a single clock (seconds since the timeline began).
#[derive(Clone, Debug, Default, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct Timeline {
    tweens: Vec<Tween>, // sorted by start, insertion order among equal starts
}

impl Timeline {
    pub fn builder() -> TimelineBuilder {
        TimelineBuilder::default()
    }

    pub fn from_tweens(mut tweens: Vec<Tween>) -> FolioResult<Self> {
        for t in &tweens {
            validate_tween(t)?;
        }
        tweens.sort_by(|a, b| a.start.total_cmp(&b.start));
        Ok(Self { tweens })
    }

    pub fn tweens(&self) -> &[Tween] {
        &self.tweens
    }

    pub fn is_empty(&self) -> bool {
        self.tweens.is_empty()
    }

    /// End of the last tween.
    pub fn duration(&self) -> f64 {
        self.tweens.iter().map(Tween::end).fold(0.0, f64::max)
    }

    pub fn is_complete(&self, now: f64) -> bool {
        now >= self.duration()
    }

    /// Shift every tween by `secs` (negative shifts clamp at zero).
    pub fn delay(mut self, secs: f64) -> Self {
        for t in &mut self.tweens {
            t.start = (t.start + secs).max(0.0);
        }
        self
    }

    /// Later-starting tweens override earlier ones on the same property.
    pub fn sample(&self, now: f64) -> TimelineFrame {
        let mut frame = TimelineFrame::default();
        for tween in &self.tweens {
            if let Some(v) = tween.sample(now) {
                frame.insert(&tween.target, tween.property, v);
            }
        }
        frame
    }

    /// Combine two timelines sharing one clock.
    pub fn merge(self, other: Timeline) -> Self {
        let mut tweens = self.tweens;
        tweens.extend(other.tweens);
        tweens.sort_by(|a, b| a.start.total_cmp(&b.start));
        Self { tweens }
    }
}

fn validate_tween(t: &Tween) -> FolioResult<()> {
    if !t.start.is_finite() || t.start < 0.0 {
        return Err(FolioError::animation(format!(
            "tween on '{}' has invalid start {}",
            t.target, t.start
        )));
    }
    if !t.duration.is_finite() || t.duration < 0.0 {
        return Err(FolioError::animation(format!(
            "tween on '{}' has invalid duration {}",
            t.target, t.duration
        )));
    }
    if !t.from.is_finite() || !t.to.is_finite() {
        return Err(FolioError::animation(format!(
            "tween on '{}' has non-finite endpoints",
            t.target
        )));
    }
    Ok(())
}

/// Places tweens relative to each other, the way the page choreography is written.
#[derive(Clone, Debug, Default)]
pub struct TimelineBuilder {
    tweens: Vec<Tween>,
    end: f64,
    last_start: f64,
    default_duration: Option<f64>,
    default_ease: Option<Ease>,
}

impl TimelineBuilder {
    /// Duration and ease used by specs that leave them unset.
    pub fn defaults(mut self, duration: f64, ease: Ease) -> Self {
        self.default_duration = Some(duration);
        self.default_ease = Some(ease);
        self
    }

    pub fn place(mut self, spec: TweenSpec, pos: Position) -> Self {
        let start = self.resolve(pos);
        self.push(spec, start);
        self
    }

    pub fn append(self, spec: TweenSpec) -> Self {
        self.place(spec, Position::End)
    }

    pub fn append_after(self, gap: f64, spec: TweenSpec) -> Self {
        self.place(spec, Position::AfterEnd(gap))
    }

    pub fn with_previous(self, offset: f64, spec: TweenSpec) -> Self {
        self.place(spec, Position::WithPrevious(offset))
    }

    pub fn at(self, time: f64, spec: TweenSpec) -> Self {
        self.place(spec, Position::At(time))
    }

    /// Snap a property at the current end of the timeline.
    pub fn set(self, target: impl Into<TargetId>, property: Property, value: f64) -> Self {
        self.append(TweenSpec::set(target, property, value))
    }

    /// Place `specs` one after another `each` seconds apart, the first one at `pos`.
    pub fn stagger(
        mut self,
        specs: impl IntoIterator<Item = TweenSpec>,
        each: f64,
        pos: Position,
    ) -> Self {
        let first = self.resolve(pos);
        let mut count = 0usize;
        for (i, spec) in specs.into_iter().enumerate() {
            self.push(spec, first + each * i as f64);
            count += 1;
        }
        if count > 0 {
            self.last_start = first;
        }
        self
    }

    pub fn build(self) -> FolioResult<Timeline> {
        Timeline::from_tweens(self.tweens)
    }

    fn resolve(&self, pos: Position) -> f64 {
        let t = match pos {
            Position::End => self.end,
            Position::AfterEnd(gap) => self.end + gap,
            Position::WithPrevious(offset) => self.last_start + offset,
            Position::At(time) => time,
        };
        t.max(0.0)
    }

    fn push(&mut self, spec: TweenSpec, start: f64) {
        let duration = spec
            .duration
            .or(self.default_duration)
            .unwrap_or(DEFAULT_TWEEN_DURATION);
        let ease = spec.ease.or(self.default_ease).unwrap_or(Ease::OutQuad);
        let tween = Tween {
            target: spec.target,
            property: spec.property,
            from: spec.from,
            to: spec.to,
            start,
            duration,
            ease,
        };
        self.end = self.end.max(tween.end());
        self.last_start = start;
        self.tweens.push(tween);
    }
}

#[cfg(test)]
#[path = "../../tests/unit/animation/timeline.rs"]
mod tests;
