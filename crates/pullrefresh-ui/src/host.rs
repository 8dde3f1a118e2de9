//! Host environment: everything the attacher needs from the platform.
//!
//! One injected object replaces per-platform attacher subclasses. It owns the
//! decor surface the header is inserted into, the UI scheduler, the animator
//! and theme lookups.

use crate::header::{HeaderStyle, HeaderViewId};
use pullrefresh_animation::{Animator, ScheduledAnimator};
use pullrefresh_core::UiScheduler;
use pullrefresh_graphics::EdgeInsets;
use std::rc::Rc;

pub type InsetsListener = Box<dyn Fn(EdgeInsets)>;

pub trait HostEnvironment {
    fn scheduler(&self) -> Rc<dyn UiScheduler>;

    /// Animator for header show/hide. Defaults to timing-only playback on
    /// the host scheduler.
    fn animator(&self) -> Rc<dyn Animator> {
        Rc::new(ScheduledAnimator::new(self.scheduler()))
    }

    /// Pixels per density-independent pixel.
    fn density(&self) -> f32 {
        1.0
    }

    fn header_style(&self) -> HeaderStyle {
        HeaderStyle::default()
    }

    /// Inflates the named header layout; `None` if the host has no such layout.
    fn inflate_header(&self, layout: &str) -> Option<HeaderViewId>;

    /// Inserts the header above the existing content. Returns `false` when the
    /// surface already carries a pull-to-refresh header.
    fn insert_header(&self, header: HeaderViewId) -> bool;

    fn remove_header(&self, header: HeaderViewId);

    fn current_insets(&self) -> EdgeInsets {
        EdgeInsets::ZERO
    }

    /// Installs (or with `None`, removes) the callback for window inset
    /// changes. The host invokes it on the UI thread.
    fn set_insets_listener(&self, listener: Option<InsetsListener>);
}
