use super::*;

fn blog() -> PointerGradient {
    PointerGradient::new(GradientConfig::blog(), GradientPalette::blog(), 5).unwrap()
}

#[test]
fn starts_centred() {
    let g = blog();
    assert_eq!(g.origin(), (50.0, 50.0));
    assert_eq!(g.style().get(MOUSE_X_VAR), Some("50%"));
    assert_eq!(g.style().to_css(), "--mouse-x: 50%; --mouse-y: 50%");
}

#[test]
fn origin_follows_pointer_scaled_by_intensity() {
    let mut g = blog();
    assert!(g.pointer_moved(1000.0, 0.0, 1000.0, 800.0));
    // x: 100% -> 50 + 50 * 0.6; y: 0% -> 50 - 50 * 0.6
    let (x, y) = g.origin();
    assert!((x - 80.0).abs() < 1e-9);
    assert!((y - 20.0).abs() < 1e-9);
    assert!(g.style().get(MOUSE_Y_VAR).unwrap().ends_with('%'));

    g.reset();
    assert_eq!(g.origin(), (50.0, 50.0));
}

#[test]
fn full_intensity_tracks_pointer_exactly() {
    let mut g =
        PointerGradient::new(GradientConfig::playlist(), GradientPalette::playlist(), 0).unwrap();
    g.pointer_moved(250.0, 200.0, 1000.0, 800.0);
    assert_eq!(g.origin(), (25.0, 25.0));
    assert_eq!(g.style().get(MOUSE_X_VAR), Some("25%"));
}

#[test]
fn degenerate_viewport_is_ignored() {
    let mut g = blog();
    assert!(!g.pointer_moved(10.0, 10.0, 0.0, 800.0));
    assert!(!g.pointer_moved(10.0, 10.0, 800.0, -1.0));
    assert_eq!(g.origin(), (50.0, 50.0));
}

#[test]
fn secondary_layer_is_fainter_and_blurrier() {
    let layers = blog().layers();
    assert_eq!(layers.len(), 2);
    let (radial, conic) = (&layers[0], &layers[1]);
    assert_eq!(radial.kind, GradientKind::Radial);
    assert_eq!(conic.kind, GradientKind::Conic);
    assert!((conic.opacity - 0.65 * 0.4).abs() < 1e-12);
    assert_eq!(conic.blur_px, 225.0);
    assert!(radial.background_image.starts_with("radial-gradient(circle at var(--mouse-x, 50%)"));
    assert!(radial.background_image.ends_with("#6A8EAE, #4E7178, #ECF0F1, #2E4053)"));
    assert!(conic.background_image.ends_with("#ECF0F1, #6A8EAE, #2E4053, #4E7178, #ECF0F1)"));
    assert_eq!(radial.transition, "all 0.7s cubic-bezier(0.22, 1, 0.36, 1)");
}

#[test]
fn playlist_has_single_layer() {
    let g =
        PointerGradient::new(GradientConfig::playlist(), GradientPalette::playlist(), 0).unwrap();
    let layers = g.layers();
    assert_eq!(layers.len(), 1);
    assert_eq!(layers[0].opacity, 0.6);
    assert_eq!(layers[0].blur_px, 180.0);
}

#[test]
fn book_defaults_differ_only_in_blur() {
    let b = GradientConfig::book();
    assert_eq!(b.blur, 180.0);
    assert_eq!(GradientConfig { blur: 150.0, ..b }, GradientConfig::blog());
}

#[test]
fn invalid_config_is_rejected() {
    let cfg = GradientConfig {
        opacity: 1.5,
        ..GradientConfig::blog()
    };
    assert!(PointerGradient::new(cfg, GradientPalette::blog(), 0).is_err());
}

#[test]
fn scoped_style_is_per_instance() {
    let mut a = blog();
    let b = blog();
    a.pointer_moved(0.0, 0.0, 100.0, 100.0);
    assert_ne!(a.style(), b.style());
    let mut s = ScopedStyle::default();
    s.set("--x", "1");
    assert_eq!(s.remove("--x").as_deref(), Some("1"));
    assert!(s.is_empty());
}
