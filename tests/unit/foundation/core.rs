use super::*;

#[test]
fn center_is_top_left_plus_half_size() {
    let r = Rectangle::new(10.0, 20.0, 100.0, 50.0);
    assert_eq!(r.center(), Point::new(60.0, 45.0));
    assert_eq!(Rectangle::from_center(r.center(), 100.0, 50.0), r);
}

#[test]
fn kurbo_conversion_keeps_edges() {
    let r = Rectangle::new(-5.0, 3.0, 40.0, 8.0);
    let k = r.to_kurbo();
    assert_eq!(k, kurbo::Rect::new(-5.0, 3.0, 35.0, 11.0));
    assert_eq!(Rectangle::from(k), r);

    // Flipped kurbo rects normalize to a positive size.
    let flipped = kurbo::Rect::new(35.0, 11.0, -5.0, 3.0);
    assert_eq!(Rectangle::from(flipped), r);
}

#[test]
fn offset_moves_only_position() {
    let r = Rectangle::new(0.0, 0.0, 10.0, 10.0).offset(Vec2::new(2.0, -3.0));
    assert_eq!(r, Rectangle::new(2.0, -3.0, 10.0, 10.0));
}

#[test]
fn fps_rejects_zero_parts() {
    assert!(Fps::new(0, 1).is_err());
    assert!(Fps::new(60, 0).is_err());
}

#[test]
fn fps_frames_secs_roundtrip_floor() {
    let fps = Fps::new(64, 1).unwrap();
    let secs = fps.frames_to_secs(96);
    assert_eq!(secs, 1.5);
    assert_eq!(fps.secs_to_frames_floor(secs), 96);
}
