use super::*;
use crate::input::{Edge, EdgeFlags};

const HEIGHT: f32 = 200.0;

fn tracker(refresh_on_release: bool) -> PullGestureTracker {
    PullGestureTracker::new(PullConfig {
        touch_slop: 10.0,
        scroll_distance: 0.5,
        refresh_on_release,
    })
}

fn feed(tracker: &mut PullGestureTracker, event: PointerEvent) -> Vec<PullSignal> {
    tracker
        .on_pointer_event(&event, HEIGHT, || true)
        .into_iter()
        .collect()
}

#[test]
fn motion_within_slop_never_starts_a_pull() {
    let mut tracker = tracker(false);
    assert!(feed(&mut tracker, PointerEvent::down(0.0, 10.0)).is_empty());
    for y in [12.0, 15.0, 20.0, 18.0, 20.0] {
        assert!(feed(&mut tracker, PointerEvent::moved(0.0, y)).is_empty());
    }
    assert!(feed(&mut tracker, PointerEvent::up(0.0, 20.0)).is_empty());
    assert_eq!(tracker.session(), GestureSession::Idle);
}

#[test]
fn down_away_from_top_never_opens_a_session() {
    let mut tracker = tracker(false);
    let signals = tracker.on_pointer_event(&PointerEvent::down(0.0, 10.0), HEIGHT, || false);
    assert!(signals.is_empty());
    assert!(!tracker.session().is_open());

    for y in [30.0, 80.0, 200.0] {
        assert!(feed(&mut tracker, PointerEvent::moved(0.0, y)).is_empty());
    }
}

#[test]
fn probe_is_only_consulted_on_down() {
    let mut tracker = tracker(false);
    let mut calls = 0;
    tracker.on_pointer_event(&PointerEvent::down(0.0, 10.0), HEIGHT, || {
        calls += 1;
        true
    });
    tracker.on_pointer_event(&PointerEvent::moved(0.0, 40.0), HEIGHT, || {
        calls += 1;
        true
    });
    assert_eq!(calls, 1);
}

#[test]
fn edge_originated_down_is_ignored() {
    let mut tracker = tracker(false);
    let down = PointerEvent::down(0.0, 10.0).with_edge_flags(EdgeFlags::NONE.with(Edge::Top));
    assert!(feed(&mut tracker, down).is_empty());
    assert!(feed(&mut tracker, PointerEvent::moved(0.0, 60.0)).is_empty());
    assert!(!tracker.is_dragging());
}

#[test]
fn drag_starts_past_slop_and_reaches_threshold() {
    let mut tracker = tracker(false);
    feed(&mut tracker, PointerEvent::down(0.0, 10.0));
    assert!(feed(&mut tracker, PointerEvent::moved(0.0, 15.0)).is_empty());

    assert_eq!(
        feed(&mut tracker, PointerEvent::moved(0.0, 25.0)),
        vec![PullSignal::PullStarted { begin_y: 25.0 }]
    );
    assert_eq!(tracker.session().begin_y(), Some(25.0));
    assert_eq!(tracker.session().initial_y(), Some(10.0));

    assert_eq!(
        feed(&mut tracker, PointerEvent::moved(0.0, 75.0)),
        vec![PullSignal::Pulled { fraction: 0.5 }]
    );
    assert_eq!(
        feed(&mut tracker, PointerEvent::moved(0.0, 125.0)),
        vec![PullSignal::ThresholdCrossed]
    );
    assert!(feed(&mut tracker, PointerEvent::moved(0.0, 140.0)).is_empty());
}

#[test]
fn reverse_motion_before_drag_disarms() {
    let mut tracker = tracker(false);
    feed(&mut tracker, PointerEvent::down(0.0, 50.0));
    assert!(feed(&mut tracker, PointerEvent::moved(0.0, 35.0)).is_empty());
    assert_eq!(tracker.session(), GestureSession::Idle);
    assert!(feed(&mut tracker, PointerEvent::moved(0.0, 90.0)).is_empty());
}

#[test]
fn horizontal_swipe_is_not_a_pull() {
    let mut tracker = tracker(false);
    feed(&mut tracker, PointerEvent::down(0.0, 10.0));
    assert!(feed(&mut tracker, PointerEvent::moved(60.0, 30.0)).is_empty());
    assert!(!tracker.is_dragging());
}

#[test]
fn fractions_do_not_regress_on_jitter() {
    let mut tracker = tracker(false);
    feed(&mut tracker, PointerEvent::down(0.0, 10.0));
    feed(&mut tracker, PointerEvent::moved(0.0, 25.0));

    let mut fractions = Vec::new();
    for y in [35.0, 45.0, 40.0, 50.0, 44.0, 60.0] {
        for signal in feed(&mut tracker, PointerEvent::moved(0.0, y)) {
            if let PullSignal::Pulled { fraction } = signal {
                fractions.push(fraction);
            }
        }
    }
    assert_eq!(fractions.len(), 6);
    assert!(fractions.windows(2).all(|pair| pair[0] <= pair[1]), "{fractions:?}");
    assert_eq!(tracker.session().last_y(), Some(60.0));
}

#[test]
fn reverse_swipe_past_slop_ends_pull() {
    let mut tracker = tracker(false);
    feed(&mut tracker, PointerEvent::down(0.0, 10.0));
    feed(&mut tracker, PointerEvent::moved(0.0, 25.0));
    assert_eq!(
        feed(&mut tracker, PointerEvent::moved(0.0, 55.0)),
        vec![PullSignal::Pulled { fraction: 0.3 }]
    );

    assert_eq!(
        feed(&mut tracker, PointerEvent::moved(0.0, 40.0)),
        vec![PullSignal::PullEnded]
    );
    assert_eq!(tracker.session(), GestureSession::Idle);
    assert!(feed(&mut tracker, PointerEvent::up(0.0, 40.0)).is_empty());
}

#[test]
fn release_mode_arms_then_fires_on_up() {
    let mut tracker = tracker(true);
    feed(&mut tracker, PointerEvent::down(0.0, 10.0));
    feed(&mut tracker, PointerEvent::moved(0.0, 25.0));
    assert_eq!(
        feed(&mut tracker, PointerEvent::moved(0.0, 125.0)),
        vec![PullSignal::ReleaseToRefresh]
    );
    assert!(feed(&mut tracker, PointerEvent::moved(0.0, 128.0)).is_empty());

    assert_eq!(
        feed(&mut tracker, PointerEvent::up(0.0, 130.0)),
        vec![PullSignal::ThresholdCrossed, PullSignal::PullEnded]
    );
    assert!(!tracker.session().is_open());
}

#[test]
fn release_mode_short_pull_only_ends() {
    let mut tracker = tracker(true);
    feed(&mut tracker, PointerEvent::down(0.0, 10.0));
    feed(&mut tracker, PointerEvent::moved(0.0, 25.0));
    feed(&mut tracker, PointerEvent::moved(0.0, 90.0));
    assert_eq!(
        feed(&mut tracker, PointerEvent::cancel(0.0, 90.0)),
        vec![PullSignal::PullEnded]
    );
}

#[test]
fn cancel_closes_the_sequence_like_up() {
    let mut tracker = tracker(true);
    feed(&mut tracker, PointerEvent::down(0.0, 10.0));
    feed(&mut tracker, PointerEvent::moved(0.0, 25.0));
    feed(&mut tracker, PointerEvent::moved(0.0, 130.0));

    let cancel = PointerEvent::cancel(0.0, 130.0);
    assert!(cancel.ends_sequence());
    assert_eq!(
        feed(&mut tracker, cancel),
        vec![PullSignal::ThresholdCrossed, PullSignal::PullEnded]
    );
    assert!(!tracker.session().is_open());

    // Armed but never dragged: nothing to end.
    feed(&mut tracker, PointerEvent::down(0.0, 10.0));
    assert!(feed(&mut tracker, PointerEvent::cancel(0.0, 12.0)).is_empty());
    assert_eq!(tracker.session(), GestureSession::Idle);
}

#[test]
fn zero_height_view_never_crosses() {
    let mut tracker = tracker(false);
    let mut feed_flat = |event: PointerEvent| -> Vec<PullSignal> {
        tracker.on_pointer_event(&event, 0.0, || true).into_iter().collect()
    };
    feed_flat(PointerEvent::down(0.0, 10.0));
    feed_flat(PointerEvent::moved(0.0, 25.0));
    assert_eq!(
        feed_flat(PointerEvent::moved(0.0, 500.0)),
        vec![PullSignal::Pulled { fraction: 0.0 }]
    );
}

#[test]
fn second_down_ends_open_drag() {
    let mut tracker = tracker(false);
    feed(&mut tracker, PointerEvent::down(0.0, 10.0));
    feed(&mut tracker, PointerEvent::moved(0.0, 40.0));
    assert_eq!(
        feed(&mut tracker, PointerEvent::down(0.0, 10.0)),
        vec![PullSignal::PullEnded]
    );
    assert!(matches!(tracker.session(), GestureSession::Armed { .. }));
}

#[test]
fn reset_reports_whether_dragging() {
    let mut tracker = tracker(false);
    assert!(!tracker.reset());
    feed(&mut tracker, PointerEvent::down(0.0, 10.0));
    feed(&mut tracker, PointerEvent::moved(0.0, 40.0));
    assert!(tracker.reset());
    assert_eq!(tracker.session().last_y(), None);
}
