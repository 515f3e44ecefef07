use super::*;
use crate::foundation::core::Fps;
use crate::motion::frame::FrameLoop;

#[test]
fn raw_progress_is_unclamped() {
    assert_eq!(raw_progress(250.0, 1000.0), 0.25);
    assert_eq!(raw_progress(1500.0, 1000.0), 1.5);
    assert_eq!(raw_progress(-100.0, 1000.0), -0.1);
}

#[test]
fn degenerate_scrollable_height_means_no_movement() {
    assert_eq!(raw_progress(250.0, 0.0), 0.0);
    assert_eq!(raw_progress(250.0, -10.0), 0.0);
    assert_eq!(raw_progress(250.0, f64::NAN), 0.0);
    assert_eq!(raw_progress(250.0, f64::INFINITY), 0.0);
}

#[test]
fn scrollable_height_subtracts_viewport() {
    assert_eq!(scrollable_height(3000.0, 800.0), 2200.0);
}

#[test]
fn easing_outside_unit_interval_is_rejected() {
    assert!(ScrollTracker::new(0.0).is_err());
    assert!(ScrollTracker::new(1.5).is_err());
    assert!(ScrollTracker::new(f64::NAN).is_err());
    assert!(ScrollTracker::new(1.0).is_ok());
}

#[test]
fn first_sample_activates_from_zero() {
    let mut t = ScrollTracker::default();
    assert!(!t.is_active());
    assert_eq!(t.smoothed(), None);

    let v = t.sample(500.0, 1000.0);
    assert!((v - 0.5 * DEFAULT_SCROLL_EASING).abs() < 1e-12);
    assert!(t.is_active());
    assert_eq!(t.smoothed(), Some(v));
}

#[test]
fn single_step_moves_by_easing_fraction() {
    let mut t = ScrollTracker::new(0.15).unwrap();
    for _ in 0..10 {
        t.update(0.2);
    }
    let prev = t.smoothed().unwrap();
    let next = t.update(0.9);
    assert!((next - prev - (0.9 - prev) * 0.15).abs() < 1e-12);
}

#[test]
fn steady_input_converges() {
    let mut t = ScrollTracker::new(0.15).unwrap();
    // (1 - 0.15)^n < 1e-4 for n >= 57.
    let mut frames = 0;
    while (t.update(0.8) - 0.8).abs() >= 0.8e-4 {
        frames += 1;
        assert!(frames < 100, "did not converge");
    }
    assert!(frames <= 57);
}

#[test]
fn easing_of_one_follows_raw_exactly() {
    let mut t = ScrollTracker::new(1.0).unwrap();
    assert_eq!(t.update(0.3), 0.3);
    assert_eq!(t.update(0.7), 0.7);
}

#[test]
fn deactivate_resets_to_inactive() {
    let mut t = ScrollTracker::default();
    t.update(1.0);
    t.deactivate();
    assert_eq!(t.state(), TrackerState::Inactive);
    let v = t.update(1.0);
    assert!((v - DEFAULT_SCROLL_EASING).abs() < 1e-12);
}

#[test]
fn mask_reveal_grows_with_scroll_and_stops_on_unmount() {
    let mut offset = 0.0;
    let source = move || {
        offset += 100.0;
        ScrollSample {
            element_offset_top: offset,
            scrollable_height: 1000.0,
        }
    };
    let mut mask = MaskReveal::new(source, ScrollTracker::default());
    assert_eq!(mask.mask_size_percent(0.0), 80.0);

    let mut sizes = Vec::new();
    for i in 0..5 {
        mask.on_frame(f64::from(i) / 60.0);
        sizes.push(mask.current_mask_percent().unwrap());
    }
    assert!(sizes.windows(2).all(|w| w[0] < w[1]));
    assert!(sizes[0] > 80.0);

    mask.on_unmount();
    assert!(!mask.tracker().is_active());
    assert_eq!(mask.current_mask_percent(), None);
}

#[test]
fn mask_reveal_runs_under_frame_loop() {
    let source = || ScrollSample {
        element_offset_top: 0.0,
        scrollable_height: 0.0,
    };
    let mut mask = MaskReveal::new(source, ScrollTracker::default());
    let report = FrameLoop::new(Fps::new(60, 1).unwrap()).run(&mut mask, 3);
    assert_eq!(report.frames, 3);
    assert!(!report.stopped_by_component);
    assert!(!mask.tracker().is_active());
}
