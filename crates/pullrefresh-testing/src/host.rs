//! In-memory host surface backed by a virtual clock.

use pullrefresh_animation::{Animator, ScheduledAnimator};
use pullrefresh_core::{ManualScheduler, UiScheduler};
use pullrefresh_graphics::EdgeInsets;
use pullrefresh_ui::{
    HeaderStyle, HeaderViewId, HostEnvironment, InsetsListener, DEFAULT_HEADER_LAYOUT,
};
use std::cell::{Cell, RefCell};
use std::rc::Rc;

/// Headless [`HostEnvironment`] for tests.
///
/// Knows the default header layout plus whatever [`FakeHost::with_layout`]
/// adds, accepts exactly one header at a time and records removals. Time
/// only moves when the test advances [`FakeHost::scheduler`].
pub struct FakeHost {
    scheduler: Rc<ManualScheduler>,
    density: Cell<f32>,
    layouts: RefCell<Vec<String>>,
    next_header: Cell<u64>,
    installed: Cell<Option<HeaderViewId>>,
    removed: RefCell<Vec<HeaderViewId>>,
    insets: Cell<EdgeInsets>,
    insets_listener: RefCell<Option<InsetsListener>>,
    animator: RefCell<Option<Rc<dyn Animator>>>,
    style: RefCell<HeaderStyle>,
}

impl FakeHost {
    pub fn new() -> Rc<Self> {
        Rc::new(Self::default())
    }

    pub fn with_layout(self: Rc<Self>, layout: &str) -> Rc<Self> {
        self.layouts.borrow_mut().push(layout.to_string());
        self
    }

    pub fn scheduler(&self) -> Rc<ManualScheduler> {
        Rc::clone(&self.scheduler)
    }

    pub fn set_density(&self, density: f32) {
        self.density.set(density);
    }

    pub fn set_style(&self, style: HeaderStyle) {
        *self.style.borrow_mut() = style;
    }

    /// Replaces the timing-only animator handed to attachers created later.
    pub fn set_animator(&self, animator: Rc<dyn Animator>) {
        *self.animator.borrow_mut() = Some(animator);
    }

    pub fn installed_header(&self) -> Option<HeaderViewId> {
        self.installed.get()
    }

    pub fn removed_headers(&self) -> Vec<HeaderViewId> {
        self.removed.borrow().clone()
    }

    pub fn has_insets_listener(&self) -> bool {
        self.insets_listener.borrow().is_some()
    }

    /// Simulates the window reporting new insets.
    pub fn emit_insets(&self, insets: EdgeInsets) {
        self.insets.set(insets);
        if let Some(listener) = self.insets_listener.borrow().as_ref() {
            listener(insets);
        }
    }
}

impl Default for FakeHost {
    fn default() -> Self {
        Self {
            scheduler: Rc::new(ManualScheduler::new()),
            density: Cell::new(1.0),
            layouts: RefCell::new(vec![DEFAULT_HEADER_LAYOUT.to_string()]),
            next_header: Cell::new(1),
            installed: Cell::new(None),
            removed: RefCell::new(Vec::new()),
            insets: Cell::new(EdgeInsets::ZERO),
            insets_listener: RefCell::new(None),
            animator: RefCell::new(None),
            style: RefCell::new(HeaderStyle::default()),
        }
    }
}

impl HostEnvironment for FakeHost {
    fn scheduler(&self) -> Rc<dyn UiScheduler> {
        self.scheduler.clone()
    }

    fn animator(&self) -> Rc<dyn Animator> {
        match self.animator.borrow().as_ref() {
            Some(animator) => Rc::clone(animator),
            None => Rc::new(ScheduledAnimator::new(HostEnvironment::scheduler(self))),
        }
    }

    fn density(&self) -> f32 {
        self.density.get()
    }

    fn header_style(&self) -> HeaderStyle {
        self.style.borrow().clone()
    }

    fn inflate_header(&self, layout: &str) -> Option<HeaderViewId> {
        if !self.layouts.borrow().iter().any(|known| known == layout) {
            return None;
        }
        let id = self.next_header.get();
        self.next_header.set(id + 1);
        Some(HeaderViewId(id))
    }

    fn insert_header(&self, header: HeaderViewId) -> bool {
        if self.installed.get().is_some() {
            return false;
        }
        self.installed.set(Some(header));
        true
    }

    fn remove_header(&self, header: HeaderViewId) {
        if self.installed.get() == Some(header) {
            self.installed.set(None);
        }
        self.removed.borrow_mut().push(header);
    }

    fn current_insets(&self) -> EdgeInsets {
        self.insets.get()
    }

    fn set_insets_listener(&self, listener: Option<InsetsListener>) {
        *self.insets_listener.borrow_mut() = listener;
    }
}
