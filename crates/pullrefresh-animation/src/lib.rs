//! Animation handles for the pull-to-refresh header
//!
//! The library never drives frames itself. It describes an animation with an
//! [`AnimationSpec`], hands it to the host's [`Animator`], and waits for the
//! completion callback, which arrives on the UI thread.

mod animation;
mod animator;

pub use animation::*;
pub use animator::*;

pub mod prelude {
    pub use crate::animation::{AnimationSpec, Easing};
    pub use crate::animator::{AnimationHandle, AnimationKind, Animator, ScheduledAnimator};
}
