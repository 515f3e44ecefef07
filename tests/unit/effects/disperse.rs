use super::*;

#[test]
fn starts_scattered_and_invisible() {
    let d = TextDisperse::new("Hello", 7);
    assert_eq!(d.text(), "Hello");
    let chars = d.sample(0.0);
    assert_eq!(chars.len(), 5);
    for c in &chars {
        assert_eq!(c.opacity, 0.0);
        assert!((-DISPERSE_RANGE..DISPERSE_RANGE).contains(&c.x));
        assert!((-DISPERSE_RANGE..DISPERSE_RANGE).contains(&c.y));
    }
    assert!(d.is_settled(0.0));
    assert_eq!(d.background_opacity(0.0), 0.0);
}

#[test]
fn hover_gathers_characters_with_stagger() {
    let mut d = TextDisperse::new("Hi!", 1);
    d.hover(true, 2.0).unwrap();
    assert!(d.is_hovered());

    // Third character has not started yet.
    let mid = d.sample(2.05);
    assert_eq!(mid[2].opacity, 0.0);
    assert!(mid[0].opacity > 0.0);

    let done = d.sample(3.0);
    for c in &done {
        assert_eq!((c.x, c.y, c.opacity), (0.0, 0.0, 1.0));
    }
    assert!(d.is_settled(3.0));
    assert_eq!(d.background_opacity(3.0), BACKGROUND_ACTIVE_OPACITY);
}

#[test]
fn leaving_mid_flight_continues_from_current_values() {
    let mut d = TextDisperse::new("abcd", 3);
    let closed = d.sample(0.0);
    d.hover(true, 0.0).unwrap();
    let before = d.sample(0.3);
    d.hover(false, 0.3).unwrap();
    assert_eq!(d.sample(0.3), before);
    assert!(!d.is_settled(0.4));

    let back = d.sample(5.0);
    assert_eq!(back, closed);
    assert_eq!(d.background_opacity(5.0), 0.0);
}

#[test]
fn repeated_hover_state_is_a_no_op() {
    let mut d = TextDisperse::new("ab", 3);
    d.hover(false, 0.0).unwrap();
    assert!(d.is_settled(0.0));
    d.hover(true, 1.0).unwrap();
    d.hover(true, 1.2).unwrap();
    assert!(d.is_settled(2.0));
}

#[test]
fn same_seed_scatters_identically() {
    let a = TextDisperse::new("seed", 11).sample(0.0);
    let b = TextDisperse::new("seed", 11).sample(0.0);
    assert_eq!(a, b);
}
