use folio_core::{ScrollAxis, ScrollMetrics, ScrollTracker, SpringConfig};
use std::time::Duration;

const FRAME: Duration = Duration::from_millis(16);

#[test]
fn raw_quarter_offset_is_half_progress() {
    let mut tracker = ScrollTracker::new(ScrollAxis::Vertical, SpringConfig::scroll());
    assert_eq!(tracker.observe(ScrollMetrics::new(250.0, 1000.0, 500.0)), 0.5);
    assert_eq!(tracker.raw(), 0.5);
    assert_eq!(tracker.smoothed(), 0.0);
}

#[test]
fn short_content_always_reports_zero() {
    let mut tracker = ScrollTracker::new(ScrollAxis::Horizontal, SpringConfig::scroll());
    for offset in [0.0, 10.0, 400.0] {
        assert_eq!(tracker.observe(ScrollMetrics::new(offset, 400.0, 500.0)), 0.0);
        assert_eq!(tracker.observe(ScrollMetrics::new(offset, 500.0, 500.0)), 0.0);
    }
    for _ in 0..10 {
        if let Some(value) = tracker.tick(FRAME) {
            assert_eq!(value, 0.0);
        }
    }
}

#[test]
fn smoothing_converges_and_stays_in_range() {
    let mut tracker = ScrollTracker::new(ScrollAxis::Vertical, SpringConfig::scroll());
    tracker.observe(ScrollMetrics::new(250.0, 1000.0, 500.0));

    let mut published = Vec::new();
    for _ in 0..180 {
        if let Some(value) = tracker.tick(FRAME) {
            published.push(value);
        }
    }
    assert!(published.len() > 10);
    assert!(published.iter().all(|value| (0.0..=1.0).contains(value)));
    assert!(published.windows(2).all(|pair| pair[0] <= pair[1]));
    assert_eq!(*published.last().unwrap(), 0.5);
    assert_eq!(tracker.tick(FRAME), None);
}

#[test]
fn jittery_input_never_jumps() {
    let mut tracker = ScrollTracker::new(ScrollAxis::Vertical, SpringConfig::scroll());
    let mut previous = 0.0_f64;
    for step in 0..60 {
        let offset = if step % 2 == 0 { 500.0 } else { 0.0 };
        tracker.observe(ScrollMetrics::new(offset, 1000.0, 500.0));
        if let Some(value) = tracker.tick(FRAME) {
            assert!((value - previous).abs() < 0.2, "jump {previous} -> {value}");
            previous = value;
        }
    }
}

#[test]
fn remount_forgets_position() {
    let mut tracker = ScrollTracker::new(ScrollAxis::Vertical, SpringConfig::scroll());
    tracker.observe(ScrollMetrics::new(500.0, 1000.0, 500.0));
    for _ in 0..60 {
        tracker.tick(FRAME);
    }
    assert!(tracker.smoothed() > 0.5);

    tracker.remount();
    assert_eq!(tracker.raw(), 0.0);
    assert_eq!(tracker.tick(FRAME), Some(0.0));
}
