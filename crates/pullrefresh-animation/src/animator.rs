use crate::AnimationSpec;
use pullrefresh_core::{TaskRegistration, UiScheduler, UiTask};
use std::rc::Rc;

/// What the header animation is for, so hosts can pick the visual.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum AnimationKind {
    Show,
    Hide,
}

/// Host capability that plays header animations.
///
/// `on_end` must be delivered on the UI thread, after the visual transition
/// has finished, and never if the returned handle is cancelled first.
pub trait Animator {
    fn play(&self, kind: AnimationKind, spec: AnimationSpec, on_end: UiTask) -> AnimationHandle;
}

/// A running animation. Dropping the handle cancels it.
#[derive(Debug, Default)]
pub struct AnimationHandle {
    registration: Option<TaskRegistration>,
}

impl AnimationHandle {
    pub fn from_registration(registration: TaskRegistration) -> Self {
        Self {
            registration: Some(registration),
        }
    }

    /// Handle for an animation the host already finished synchronously.
    pub fn finished() -> Self {
        Self { registration: None }
    }

    pub fn cancel(mut self) {
        if let Some(registration) = self.registration.take() {
            registration.cancel();
        }
    }

    /// Drops the handle without cancelling, once the completion has run.
    pub fn complete(mut self) {
        if let Some(registration) = self.registration.take() {
            registration.release();
        }
    }
}

/// Animator that only tracks timing: the completion is posted to the UI
/// scheduler after the animation's total duration. Hosts that render the fade
/// themselves sample [`AnimationSpec::progress_at`] each frame.
pub struct ScheduledAnimator {
    scheduler: Rc<dyn UiScheduler>,
}

impl ScheduledAnimator {
    pub fn new(scheduler: Rc<dyn UiScheduler>) -> Self {
        Self { scheduler }
    }
}

impl Animator for ScheduledAnimator {
    fn play(&self, kind: AnimationKind, spec: AnimationSpec, on_end: UiTask) -> AnimationHandle {
        log::trace!("playing {kind:?} animation for {:?}", spec.total_duration());
        let registration =
            TaskRegistration::schedule(&self.scheduler, spec.total_duration(), on_end);
        AnimationHandle::from_registration(registration)
    }
}
