use crate::foundation::core::{Point, Rectangle, Vec2};

/// `a + (b - a) * t`, unclamped.
pub fn lerp(a: f64, b: f64, t: f64) -> f64 {
    a + (b - a) * t
}

pub trait Lerp: Sized {
    fn lerp(a: &Self, b: &Self, t: f64) -> Self;
}

impl Lerp for f64 {
    fn lerp(a: &Self, b: &Self, t: f64) -> Self {
        lerp(*a, *b, t)
    }
}

impl Lerp for Point {
    fn lerp(a: &Self, b: &Self, t: f64) -> Self {
        Point::new(lerp(a.x, b.x, t), lerp(a.y, b.y, t))
    }
}

impl Lerp for Vec2 {
    fn lerp(a: &Self, b: &Self, t: f64) -> Self {
        Vec2::new(lerp(a.x, b.x, t), lerp(a.y, b.y, t))
    }
}

impl Lerp for Rectangle {
    fn lerp(a: &Self, b: &Self, t: f64) -> Self {
        Rectangle::new(
            lerp(a.left, b.left, t),
            lerp(a.top, b.top, t),
            lerp(a.width, b.width, t),
            lerp(a.height, b.height, t),
        )
    }
}

/// Map `value` from `input` to `output`, clamping to the input range first.
///
/// A degenerate input range maps everything at or past its start to
/// `output[1]` and everything before it to `output[0]`.
pub fn map_range(value: f64, input: [f64; 2], output: [f64; 2]) -> f64 {
    let [in0, in1] = input;
    let [out0, out1] = output;
    let span = in1 - in0;
    if span == 0.0 || !span.is_finite() {
        return if value < in0 { out0 } else { out1 };
    }
    let t = ((value - in0) / span).clamp(0.0, 1.0);
    lerp(out0, out1, t)
}

/// Deterministic SplitMix64 generator used for decorative jitter.
#[derive(Clone, Copy, Debug)]
pub struct Rng64 {
    state: u64,
}

impl Rng64 {
    pub fn new(seed: u64) -> Self {
        Self { state: seed }
    }

    pub fn next_u64(&mut self) -> u64 {
        // SplitMix64
        self.state = self.state.wrapping_add(0x9E37_79B9_7F4A_7C15);
        let mut z = self.state;
        z = (z ^ (z >> 30)).wrapping_mul(0xBF58_476D_1CE4_E5B9);
        z = (z ^ (z >> 27)).wrapping_mul(0x94D0_49BB_1331_11EB);
        z ^ (z >> 31)
    }

    pub fn next_f64_01(&mut self) -> f64 {
        // 53 bits of precision.
        let v = self.next_u64() >> 11;
        (v as f64) * (1.0 / ((1u64 << 53) as f64))
    }

    /// Uniform value in `[lo, hi)`.
    pub fn range(&mut self, lo: f64, hi: f64) -> f64 {
        lerp(lo, hi, self.next_f64_01())
    }
}

#[cfg(test)]
#[path = "../../tests/unit/foundation/math.rs"]
mod tests;
