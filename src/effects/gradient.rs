//! Page backgrounds whose gradient origin follows the pointer.

use std::collections::BTreeMap;

use crate::foundation::{
    error::{FolioError, FolioResult},
    math::Rng64,
};

pub const MOUSE_X_VAR: &str = "--mouse-x";
pub const MOUSE_Y_VAR: &str = "--mouse-y";

/// Timing function of every gradient transition.
pub const GRADIENT_TIMING: &str = "cubic-bezier(0.22, 1, 0.36, 1)";

/// Four colour stops shared by the radial and conic layers.
#[derive(Clone, Debug, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub struct GradientPalette {
    pub colors: [String; 4],
}

impl GradientPalette {
    fn from_hex(colors: [&str; 4]) -> Self {
        Self {
            colors: colors.map(str::to_owned),
        }
    }

    /// Cool blues and slate, used behind the blog.
    pub fn blog() -> Self {
        Self::from_hex(["#6A8EAE", "#4E7178", "#ECF0F1", "#2E4053"])
    }

    /// Warm browns and rust, used behind the books page.
    pub fn book() -> Self {
        Self::from_hex(["#bb6826", "#8c7b5e", "#dfcbaf", "#943706"])
    }

    pub fn playlist() -> Self {
        Self::from_hex(["#8c7b5e", "#bb6826", "#dfcbaf", "#943706"])
    }
}

#[derive(Clone, Copy, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(default)]
pub struct GradientConfig {
    /// How far the origin follows the pointer away from the centre (`1.0` = exactly).
    pub intensity: f64,
    /// Blur radius in pixels.
    pub blur: f64,
    /// Transition duration in seconds.
    pub speed: f64,
    pub opacity: f64,
    /// Whether a fainter conic layer is drawn below the radial one.
    pub secondary_layer: bool,
}

impl Default for GradientConfig {
    fn default() -> Self {
        Self::blog()
    }
}

impl GradientConfig {
    pub fn blog() -> Self {
        Self {
            intensity: 0.6,
            blur: 150.0,
            speed: 0.7,
            opacity: 0.65,
            secondary_layer: true,
        }
    }

    pub fn book() -> Self {
        Self {
            blur: 180.0,
            ..Self::blog()
        }
    }

    pub fn playlist() -> Self {
        Self {
            intensity: 1.0,
            blur: 180.0,
            speed: 0.3,
            opacity: 0.6,
            secondary_layer: false,
        }
    }

    pub fn validate(&self) -> FolioResult<()> {
        let finite = [self.intensity, self.blur, self.speed, self.opacity]
            .iter()
            .all(|v| v.is_finite());
        if !finite || self.blur < 0.0 || self.speed < 0.0 {
            return Err(FolioError::validation(format!(
                "invalid gradient config: {self:?}"
            )));
        }
        if !(0.0..=1.0).contains(&self.opacity) {
            return Err(FolioError::validation(format!(
                "gradient opacity must be in [0, 1], got {}",
                self.opacity
            )));
        }
        Ok(())
    }
}

/// CSS custom properties owned by one component instance.
///
/// Values live as long as the owner; nothing is written to shared document
/// state, so two gradients on one page cannot fight over `--mouse-x`.
#[derive(Clone, Debug, Default, PartialEq, Eq, serde::Serialize)]
#[serde(transparent)]
pub struct ScopedStyle {
    props: BTreeMap<String, String>,
}

impl ScopedStyle {
    pub fn set(&mut self, name: &str, value: impl Into<String>) {
        self.props.insert(name.to_owned(), value.into());
    }

    pub fn get(&self, name: &str) -> Option<&str> {
        self.props.get(name).map(String::as_str)
    }

    pub fn remove(&mut self, name: &str) -> Option<String> {
        self.props.remove(name)
    }

    pub fn is_empty(&self) -> bool {
        self.props.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.props.iter().map(|(k, v)| (k.as_str(), v.as_str()))
    }

    /// Inline style declaration, e.g. `--mouse-x: 50%; --mouse-y: 50%`.
    pub fn to_css(&self) -> String {
        self.iter()
            .map(|(k, v)| format!("{k}: {v}"))
            .collect::<Vec<_>>()
            .join("; ")
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, serde::Serialize)]
#[serde(rename_all = "snake_case")]
pub enum GradientKind {
    Radial,
    Conic,
}

/// One fixed full-screen gradient layer, ready to be styled.
#[derive(Clone, Debug, PartialEq, serde::Serialize)]
pub struct GradientLayer {
    pub kind: GradientKind,
    pub background_image: String,
    pub opacity: f64,
    pub blur_px: f64,
    pub transition: String,
    pub z_index: i32,
}

/// Pointer-tracked gradient background.
#[derive(Clone, Debug)]
pub struct PointerGradient {
    config: GradientConfig,
    palette: GradientPalette,
    conic_from_deg: f64,
    origin: (f64, f64),
    style: ScopedStyle,
}

impl PointerGradient {
    /// `seed` picks the start angle of the conic layer.
    pub fn new(config: GradientConfig, palette: GradientPalette, seed: u64) -> FolioResult<Self> {
        config.validate()?;
        let mut g = Self {
            config,
            palette,
            conic_from_deg: Rng64::new(seed).range(0.0, 360.0),
            origin: (50.0, 50.0),
            style: ScopedStyle::default(),
        };
        g.write_origin();
        Ok(g)
    }

    pub fn config(&self) -> &GradientConfig {
        &self.config
    }

    /// Gradient origin in percent of the viewport.
    pub fn origin(&self) -> (f64, f64) {
        self.origin
    }

    pub fn style(&self) -> &ScopedStyle {
        &self.style
    }

    /// Move the origin toward the pointer. A non-positive viewport is ignored.
    pub fn pointer_moved(&mut self, x: f64, y: f64, viewport_w: f64, viewport_h: f64) -> bool {
        if !(viewport_w > 0.0 && viewport_h > 0.0) || !x.is_finite() || !y.is_finite() {
            tracing::debug!(viewport_w, viewport_h, "pointer move ignored");
            return false;
        }
        let follow = |pos: f64, size: f64| {
            let pct = pos / size * 100.0;
            50.0 + (pct - 50.0) * self.config.intensity
        };
        self.origin = (follow(x, viewport_w), follow(y, viewport_h));
        self.write_origin();
        true
    }

    /// Back to the centre.
    pub fn reset(&mut self) {
        self.origin = (50.0, 50.0);
        self.write_origin();
    }

    pub fn layers(&self) -> Vec<GradientLayer> {
        let [c0, c1, c2, c3] = &self.palette.colors;
        let at = format!("var({MOUSE_X_VAR}, 50%) var({MOUSE_Y_VAR}, 50%)");
        let cfg = &self.config;

        let mut layers = vec![GradientLayer {
            kind: GradientKind::Radial,
            background_image: format!("radial-gradient(circle at {at}, {c0}, {c1}, {c2}, {c3})"),
            opacity: cfg.opacity,
            blur_px: cfg.blur,
            transition: format!("all {}s {GRADIENT_TIMING}", cfg.speed),
            z_index: -1,
        }];
        if cfg.secondary_layer {
            layers.push(GradientLayer {
                kind: GradientKind::Conic,
                background_image: format!(
                    "conic-gradient(from {}deg at {at}, {c2}, {c0}, {c3}, {c1}, {c2})",
                    self.conic_from_deg
                ),
                opacity: cfg.opacity * 0.4,
                blur_px: cfg.blur * 1.5,
                transition: format!("all {}s {GRADIENT_TIMING}", cfg.speed * 1.2),
                z_index: -2,
            });
        }
        layers
    }

    fn write_origin(&mut self) {
        let (x, y) = self.origin;
        self.style.set(MOUSE_X_VAR, format!("{x}%"));
        self.style.set(MOUSE_Y_VAR, format!("{y}%"));
    }
}

#[cfg(test)]
#[path = "../../tests/unit/effects/gradient.rs"]
mod tests;
