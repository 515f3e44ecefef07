use super::*;

#[test]
fn lerp_hits_both_ends() {
    assert_eq!(lerp(2.0, 6.0, 0.0), 2.0);
    assert_eq!(lerp(2.0, 6.0, 1.0), 6.0);
    assert_eq!(lerp(2.0, 6.0, 0.5), 4.0);
}

#[test]
fn rectangle_lerp_is_componentwise() {
    let a = Rectangle::new(0.0, 0.0, 100.0, 150.0);
    let b = Rectangle::new(400.0, 100.0, 400.0, 600.0);
    let mid = <Rectangle as Lerp>::lerp(&a, &b, 0.5);
    assert_eq!(mid, Rectangle::new(200.0, 50.0, 250.0, 375.0));
}

#[test]
fn map_range_clamps_to_input() {
    assert_eq!(map_range(-1.0, [0.0, 1.0], [1.2, 1.0]), 1.2);
    assert_eq!(map_range(2.0, [0.0, 1.0], [1.2, 1.0]), 1.0);
    assert!((map_range(0.5, [0.0, 1.0], [1.2, 1.0]) - 1.1).abs() < 1e-12);
}

#[test]
fn map_range_degenerate_input_steps() {
    assert_eq!(map_range(0.1, [0.5, 0.5], [0.0, 10.0]), 0.0);
    assert_eq!(map_range(0.5, [0.5, 0.5], [0.0, 10.0]), 10.0);
}

#[test]
fn rng_is_deterministic_and_in_range() {
    let mut a = Rng64::new(7);
    let mut b = Rng64::new(7);
    for _ in 0..64 {
        let va = a.range(-5.0, 5.0);
        assert_eq!(va, b.range(-5.0, 5.0));
        assert!((-5.0..5.0).contains(&va));
    }
}
