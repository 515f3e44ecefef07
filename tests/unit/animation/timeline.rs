use super::*;

fn fade(target: &str) -> TweenSpec {
    TweenSpec::new(target, Property::Opacity, 0.0, 1.0)
        .duration(1.0)
        .ease(Ease::Linear)
}

#[test]
fn tween_is_absent_before_start_and_holds_after_end() {
    let tl = Timeline::builder().at(2.0, fade("a")).build().unwrap();
    assert_eq!(tl.sample(1.9).get("a", Property::Opacity), None);
    assert_eq!(tl.sample(2.5).get("a", Property::Opacity), Some(0.5));
    assert_eq!(tl.sample(10.0).get("a", Property::Opacity), Some(1.0));
    assert_eq!(tl.duration(), 3.0);
    assert!(!tl.is_complete(2.99));
    assert!(tl.is_complete(3.0));
}

#[test]
fn append_places_after_current_end() {
    let tl = Timeline::builder()
        .append(fade("a"))
        .append(fade("b"))
        .append_after(0.5, fade("c"))
        .build()
        .unwrap();
    let starts: Vec<f64> = tl.tweens().iter().map(|t| t.start).collect();
    assert_eq!(starts, vec![0.0, 1.0, 2.5]);
}

#[test]
fn with_previous_is_relative_to_last_start_and_clamped() {
    let tl = Timeline::builder()
        .at(1.0, fade("a"))
        .with_previous(-0.25, fade("b"))
        .at(0.0, fade("c"))
        .with_previous(-1.0, fade("d"))
        .build()
        .unwrap();
    let b = tl.tweens().iter().find(|t| t.target.as_str() == "b").unwrap();
    let d = tl.tweens().iter().find(|t| t.target.as_str() == "d").unwrap();
    assert_eq!(b.start, 0.75);
    assert_eq!(d.start, 0.0);
}

#[test]
fn stagger_spaces_starts() {
    let specs = (0..3).map(|i| fade(&format!("item.{i}")));
    let tl = Timeline::builder()
        .stagger(specs, 0.02, Position::At(0.1))
        .build()
        .unwrap();
    let starts: Vec<f64> = tl.tweens().iter().map(|t| t.start).collect();
    assert_eq!(starts.len(), 3);
    assert!((starts[0] - 0.1).abs() < 1e-12);
    assert!((starts[1] - 0.12).abs() < 1e-12);
    assert!((starts[2] - 0.14).abs() < 1e-12);
}

#[test]
fn later_tween_overrides_same_property() {
    let tl = Timeline::builder()
        .append(fade("a"))
        .append(
            TweenSpec::new("a", Property::Opacity, 1.0, 0.0)
                .duration(1.0)
                .ease(Ease::Linear),
        )
        .build()
        .unwrap();
    assert_eq!(tl.sample(0.5).get("a", Property::Opacity), Some(0.5));
    assert_eq!(tl.sample(1.25).get("a", Property::Opacity), Some(0.75));
    assert_eq!(tl.sample(5.0).get("a", Property::Opacity), Some(0.0));
}

#[test]
fn set_snaps_without_duration() {
    let tl = Timeline::builder()
        .append(fade("a"))
        .set("b", Property::ClipTop, 100.0)
        .build()
        .unwrap();
    assert_eq!(tl.sample(0.99).get("b", Property::ClipTop), None);
    assert_eq!(tl.sample(1.0).get("b", Property::ClipTop), Some(100.0));
    assert_eq!(tl.duration(), 1.0);
}

#[test]
fn defaults_fill_missing_duration_and_ease() {
    let tl = Timeline::builder()
        .defaults(0.6, Ease::InOutSine)
        .append(TweenSpec::new("a", Property::Scale, 1.0, 0.8))
        .build()
        .unwrap();
    assert_eq!(tl.tweens()[0].duration, 0.6);
    assert_eq!(tl.tweens()[0].ease, Ease::InOutSine);
}

#[test]
fn delay_shifts_every_tween() {
    let tl = Timeline::builder()
        .append(fade("a"))
        .build()
        .unwrap()
        .delay(0.15);
    assert_eq!(tl.tweens()[0].start, 0.15);
    assert_eq!(tl.duration(), 1.15);
}

#[test]
fn invalid_duration_is_rejected() {
    let err = Timeline::builder()
        .append(fade("a").duration(f64::NAN))
        .build()
        .unwrap_err();
    assert!(err.to_string().contains("animation error:"));

    let err = Timeline::builder()
        .append(fade("a").duration(-1.0))
        .build()
        .unwrap_err();
    assert!(err.to_string().contains("invalid duration"));
}

#[test]
fn merge_keeps_one_clock() {
    let a = Timeline::builder().at(1.0, fade("a")).build().unwrap();
    let b = Timeline::builder().at(0.0, fade("b")).build().unwrap();
    let tl = a.merge(b);
    assert_eq!(tl.tweens()[0].target.as_str(), "b");
    assert_eq!(tl.duration(), 2.0);
    let frame = tl.sample(0.5);
    assert_eq!(frame.get("b", Property::Opacity), Some(0.5));
    assert_eq!(frame.get("a", Property::Opacity), None);
    assert_eq!(frame.len(), 1);
}
