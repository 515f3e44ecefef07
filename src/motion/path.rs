//! Eased rectangle paths between two measured elements.
//!
//! Used to make a thumbnail "fly" into a larger panel: sizes and centres are
//! interpolated linearly while a half sine wave lifts the path into an arc.

use crate::foundation::{
    core::{PathStep, Rectangle},
    math::{Lerp, lerp},
};

/// Peak vertical offset of the arc, in layout units.
pub const DEFAULT_ARC_AMPLITUDE: f64 = 20.0;

/// Largest step count accepted from untyped input.
pub const MAX_PATH_STEPS: usize = 1024;

/// Motion path generator with a configurable arc amplitude.
#[derive(Clone, Copy, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct MotionPath {
    pub amplitude: f64,
}

impl Default for MotionPath {
    fn default() -> Self {
        Self {
            amplitude: DEFAULT_ARC_AMPLITUDE,
        }
    }
}

impl MotionPath {
    pub fn new(amplitude: f64) -> Self {
        Self { amplitude }
    }

    /// Rectangle at normalized time `t` along the path.
    ///
    /// `t = 0` and `t = 1` reproduce `source` and `destination` exactly.
    pub fn point_at(&self, source: &Rectangle, destination: &Rectangle, t: f64) -> PathStep {
        if t == 0.0 {
            return *source;
        }
        if t == 1.0 {
            return *destination;
        }
        let width = lerp(source.width, destination.width, t);
        let height = lerp(source.height, destination.height, t);
        let center = Lerp::lerp(&source.center(), &destination.center(), t);
        let arc = (t * std::f64::consts::PI).sin() * self.amplitude;

        PathStep {
            left: center.x - width / 2.0,
            top: center.y - height / 2.0 + arc,
            width,
            height,
        }
    }

    /// Full path of `steps + 2` rectangles, endpoints included.
    pub fn full(&self, source: &Rectangle, destination: &Rectangle, steps: usize) -> Vec<PathStep> {
        let full_steps = steps.saturating_add(2);
        let last = (full_steps - 1) as f64;
        (0..full_steps)
            .map(|i| self.point_at(source, destination, i as f64 / last))
            .collect()
    }

    /// The `steps` interior rectangles of the path (endpoints excluded).
    pub fn generate(
        &self,
        source: &Rectangle,
        destination: &Rectangle,
        steps: usize,
    ) -> Vec<PathStep> {
        if steps == 0 {
            return Vec::new();
        }
        let mut path = self.full(source, destination, steps);
        path.pop();
        path.remove(0);
        path
    }
}

/// Interior steps of the default-amplitude path from `source` to `destination`.
pub fn generate_motion_path(
    source: Rectangle,
    destination: Rectangle,
    steps: usize,
) -> Vec<PathStep> {
    MotionPath::default().generate(&source, &destination, steps)
}

/// Full default-amplitude path, including both endpoints.
pub fn full_motion_path(source: Rectangle, destination: Rectangle, steps: usize) -> Vec<PathStep> {
    MotionPath::default().full(&source, &destination, steps)
}

/// Clamp a signed step count from an untyped boundary (CLI, JSON) to
/// `0..=MAX_PATH_STEPS`.
pub fn clamp_step_count(steps: i64) -> usize {
    if steps < 0 {
        tracing::warn!(steps, "negative motion path step count, using 0");
        return 0;
    }
    match usize::try_from(steps) {
        Ok(n) if n <= MAX_PATH_STEPS => n,
        _ => {
            tracing::warn!(
                steps,
                max = MAX_PATH_STEPS,
                "motion path step count too large, clamping"
            );
            MAX_PATH_STEPS
        }
    }
}

#[cfg(test)]
#[path = "../../tests/unit/motion/path.rs"]
mod tests;
