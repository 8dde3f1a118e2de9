use super::*;
use crate::{AnimationKind, Animator, ScheduledAnimator};
use pullrefresh_core::{ManualScheduler, UiScheduler};
use std::cell::Cell;
use std::rc::Rc;

#[test]
fn easing_curves_hit_endpoints() {
    for easing in [
        Easing::LinearEasing,
        Easing::FastOutSlowInEasing,
        Easing::LinearOutSlowInEasing,
        Easing::FastOutLinearInEasing,
    ] {
        assert_eq!(easing.transform(0.0), 0.0, "{easing:?} start");
        assert_eq!(easing.transform(1.0), 1.0, "{easing:?} end");
    }
}

#[test]
fn decelerating_curve_leads_linear_at_midpoint() {
    let eased = Easing::LinearOutSlowInEasing.transform(0.5);
    assert!(eased > 0.5, "expected deceleration to run ahead, got {eased}");
    let accelerating = Easing::FastOutLinearInEasing.transform(0.5);
    assert!(accelerating < 0.5, "expected acceleration to lag, got {accelerating}");
}

#[test]
fn progress_respects_delay() {
    let spec = AnimationSpec::linear(100).with_delay(50);
    assert_eq!(spec.total_duration(), Duration::from_millis(150));
    assert_eq!(spec.progress_at(Duration::from_millis(40)), 0.0);
    assert!((spec.progress_at(Duration::from_millis(100)) - 0.5).abs() < 1e-4);
    assert_eq!(spec.progress_at(Duration::from_millis(400)), 1.0);
}

#[test]
fn zero_duration_completes_immediately() {
    let spec = AnimationSpec::linear(0);
    assert_eq!(spec.progress_at(Duration::ZERO), 1.0);
}

#[test]
fn scheduled_animator_completes_after_total_duration() {
    let scheduler = Rc::new(ManualScheduler::new());
    let animator = ScheduledAnimator::new(scheduler.clone() as Rc<dyn UiScheduler>);
    let ended = Rc::new(Cell::new(false));

    let flag = Rc::clone(&ended);
    let handle = animator.play(
        AnimationKind::Hide,
        AnimationSpec::fade_out(),
        Box::new(move || flag.set(true)),
    );

    scheduler.advance_by(Duration::from_millis(249));
    assert!(!ended.get());
    scheduler.advance_by(Duration::from_millis(1));
    assert!(ended.get());
    handle.complete();
}

#[test]
fn cancelled_animation_never_completes() {
    let scheduler = Rc::new(ManualScheduler::new());
    let animator = ScheduledAnimator::new(scheduler.clone() as Rc<dyn UiScheduler>);
    let ended = Rc::new(Cell::new(false));

    let flag = Rc::clone(&ended);
    let handle = animator.play(
        AnimationKind::Show,
        AnimationSpec::fade_in(),
        Box::new(move || flag.set(true)),
    );
    handle.cancel();

    scheduler.advance_by(Duration::from_secs(1));
    assert!(!ended.get());
}
