//! The refresh attacher.
//!
//! Coordinates every piece: routes pointer samples of registered views into
//! their gesture trackers, turns pull signals into header transitions, owns
//! the refresh state and the minimize timer, and calls the application's
//! refresh listener.
//!
//! Everything runs on the UI thread. No `RefCell` borrow is held while
//! application code runs, so listeners may call back into the attacher, for
//! example to complete a refresh synchronously.

use crate::error::{ConfigurationError, StateViolation};
use crate::header::{
    DefaultHeaderTransformer, HeaderContent, HeaderPresenter, HeaderTransformer, HeaderViewId,
    HeaderViewListener, HeaderVisualState,
};
use crate::host::HostEnvironment;
use crate::options::Options;
use indexmap::IndexMap;
use pullrefresh_core::{Duration, TaskRegistration, UiScheduler};
use pullrefresh_foundation::{
    PointerDispatcher, PointerEvent, PointerEventKind, ProbeRegistry, PullConfig,
    PullGestureTracker, PullSignal, RefreshableView, ScrollPositionProbe, ViewKey,
};
use pullrefresh_graphics::EdgeInsets;
use std::cell::{Cell, RefCell};
use std::rc::{Rc, Weak};

#[derive(Clone, Copy, Debug, PartialEq, Eq, Default, Hash)]
pub enum RefreshState {
    #[default]
    Idle,
    Dragging,
    Refreshing,
}

/// Application callback fired when a pull starts a refresh.
///
/// The listener should kick off its work asynchronously and report back with
/// [`RefreshAttacher::set_refresh_complete`]. There is no timeout.
pub trait OnRefreshListener {
    fn on_refresh_started(&self, view: &dyn RefreshableView);
}

impl<F> OnRefreshListener for F
where
    F: Fn(&dyn RefreshableView),
{
    fn on_refresh_started(&self, view: &dyn RefreshableView) {
        self(view)
    }
}

struct Registration {
    view: Weak<dyn RefreshableView>,
    probe: Rc<dyn ScrollPositionProbe>,
    listener: Rc<dyn OnRefreshListener>,
    enabled: Cell<bool>,
    tracker: RefCell<PullGestureTracker>,
}

impl Registration {
    fn is_alive(&self) -> bool {
        self.view.strong_count() > 0
    }
}

/// Where a refresh request came from.
enum Trigger<'a> {
    Touch {
        view: &'a dyn RefreshableView,
        listener: Rc<dyn OnRefreshListener>,
    },
    Api,
}

impl Trigger<'_> {
    fn from_touch(&self) -> bool {
        matches!(self, Trigger::Touch { .. })
    }
}

struct AttacherInner {
    host: Rc<dyn HostEnvironment>,
    scheduler: Rc<dyn UiScheduler>,
    presenter: HeaderPresenter,
    pull_config: PullConfig,
    refresh_minimize: bool,
    minimize_delay: Duration,
    probes: ProbeRegistry,
    registrations: RefCell<IndexMap<ViewKey, Rc<Registration>>>,
    state: Cell<RefreshState>,
    dragging_view: Cell<Option<ViewKey>>,
    enabled: Cell<bool>,
    destroyed: Cell<bool>,
    minimize_task: RefCell<Option<TaskRegistration>>,
    header_listener: RefCell<Option<Rc<dyn HeaderViewListener>>>,
}

/// Handle to a pull-to-refresh attacher. Clones share the same attacher.
#[derive(Clone)]
pub struct RefreshAttacher {
    inner: Rc<AttacherInner>,
}

impl RefreshAttacher {
    /// Inflates and installs the header on the host surface.
    pub fn new(
        host: Rc<dyn HostEnvironment>,
        mut options: Options,
    ) -> Result<Self, ConfigurationError> {
        let layout = options.header_layout().to_string();
        let inflated = if layout.is_empty() {
            None
        } else {
            host.inflate_header(&layout)
        };
        let header = inflated.ok_or_else(|| ConfigurationError::MissingHeaderLayout {
            layout: layout.clone(),
        })?;

        if !host.insert_header(header) {
            return Err(ConfigurationError::DuplicateAttacher);
        }

        let style = host.header_style();
        let mut transformer: Box<dyn HeaderTransformer> = options
            .take_header_transformer()
            .unwrap_or_else(|| Box::new(DefaultHeaderTransformer::new()));
        transformer.on_view_created(header, &style);

        let presenter = HeaderPresenter::new(
            header,
            transformer,
            host.animator(),
            options.show_animation(),
            options.hide_animation(),
        );
        presenter.on_insets_changed(host.current_insets());

        let mut probes = options.probes().clone();
        probes.extend(&ProbeRegistry::with_builtins());

        let pull_config = PullConfig {
            touch_slop: options.touch_slop().to_px(host.density()),
            scroll_distance: options.scroll_distance(),
            refresh_on_release: options.refresh_on_release(),
        };

        let inner = Rc::new(AttacherInner {
            scheduler: host.scheduler(),
            host: Rc::clone(&host),
            presenter,
            pull_config,
            refresh_minimize: options.refresh_minimize(),
            minimize_delay: options.minimize_delay(),
            probes,
            registrations: RefCell::new(IndexMap::new()),
            state: Cell::new(RefreshState::Idle),
            dragging_view: Cell::new(None),
            enabled: Cell::new(true),
            destroyed: Cell::new(false),
            minimize_task: RefCell::new(None),
            header_listener: RefCell::new(options.header_view_listener()),
        });

        let weak = Rc::downgrade(&inner);
        host.set_insets_listener(Some(Box::new(move |insets| {
            if let Some(inner) = weak.upgrade() {
                inner.on_insets_changed(insets);
            }
        })));

        log::debug!("pull-to-refresh attached with header {header:?} ({layout})");
        Ok(Self { inner })
    }

    /// Puts `view` under pull-to-refresh control.
    ///
    /// Without an explicit `probe`, the first registered probe whose
    /// predicate matches the view is used. Registering a view again replaces
    /// its previous registration. The view is held weakly.
    pub fn add_refreshable_view(
        &self,
        view: Rc<dyn RefreshableView>,
        probe: Option<Rc<dyn ScrollPositionProbe>>,
        listener: Option<Rc<dyn OnRefreshListener>>,
    ) -> Result<(), ConfigurationError> {
        let inner = &self.inner;
        if inner.destroyed.get() {
            return Ok(());
        }
        let listener = listener.ok_or(ConfigurationError::MissingRefreshListener)?;
        let probe = probe
            .or_else(|| inner.probes.resolve(view.as_ref()))
            .ok_or(ConfigurationError::UnresolvedProbe)?;

        let key = ViewKey::of(view.as_ref());
        let registration = Rc::new(Registration {
            view: Rc::downgrade(&view),
            probe,
            listener,
            enabled: Cell::new(true),
            tracker: RefCell::new(PullGestureTracker::new(inner.pull_config)),
        });
        let replaced = inner
            .registrations
            .borrow_mut()
            .insert(key, registration)
            .is_some();
        if replaced {
            inner.end_drag_of(key);
        }
        log::debug!("registered refreshable view {key:?}");
        Ok(())
    }

    /// No-op for views that are not registered.
    pub fn remove_refreshable_view(&self, view: &dyn RefreshableView) {
        let key = ViewKey::of(view);
        let removed = self.inner.registrations.borrow_mut().shift_remove(&key);
        if removed.is_some() {
            log::debug!("unregistered refreshable view {key:?}");
            self.inner.end_drag_of(key);
        }
    }

    pub fn clear_refreshable_views(&self) {
        let inner = &self.inner;
        inner.reset_touch();
        inner.registrations.borrow_mut().clear();
        if inner.state.get() == RefreshState::Dragging {
            inner.reset();
        }
    }

    pub fn is_refreshable_view(&self, view: &dyn RefreshableView) -> bool {
        self.inner.registration(ViewKey::of(view)).is_some()
    }

    /// Number of registrations whose views are still alive.
    pub fn refreshable_view_count(&self) -> usize {
        self.inner.purge_dead();
        self.inner.registrations.borrow().len()
    }

    /// Enables or disables pulling on one registered view.
    pub fn set_refreshable_view_enabled(&self, view: &dyn RefreshableView, enabled: bool) {
        let key = ViewKey::of(view);
        if let Some(registration) = self.inner.registration(key) {
            registration.enabled.set(enabled);
            if !enabled {
                self.inner.end_drag_of(key);
            }
        }
    }

    /// Feeds a pointer sample for `view`.
    ///
    /// Always returns `false`: the attacher observes touches and never
    /// consumes them, so the view keeps scrolling natively.
    pub fn on_touch(&self, view: &dyn RefreshableView, event: &PointerEvent) -> bool {
        let inner = &self.inner;
        if !inner.accepts_touch() {
            return false;
        }

        let key = ViewKey::of(view);
        let Some(registration) = inner.registration(key) else {
            return false;
        };
        if !registration.enabled.get() {
            return false;
        }
        if let Some(dragging) = inner.dragging_view.get() {
            // A released dragging view gives up its drag on lookup.
            if dragging != key && inner.registration(dragging).is_some() {
                return false;
            }
        }

        // Application code runs before the tracker is borrowed and may
        // re-enter the attacher.
        let ready = event.kind == PointerEventKind::Down
            && !event.is_edge_originated()
            && registration.probe.is_scrolled_to_top(view);
        let height = view.height();
        let still_registered = inner
            .registration(key)
            .is_some_and(|current| Rc::ptr_eq(&current, &registration));
        if !inner.accepts_touch() || !registration.enabled.get() || !still_registered {
            return false;
        }

        let signals = registration
            .tracker
            .borrow_mut()
            .on_pointer_event(event, height, || ready);

        for signal in signals {
            inner.handle_signal(key, view, &registration, signal);
        }
        false
    }

    /// Drains queued `(view, event)` pairs into [`RefreshAttacher::on_touch`].
    pub fn dispatch_pending(&self, dispatcher: &mut PointerDispatcher<Rc<dyn RefreshableView>>) {
        dispatcher.drain(|view, event| {
            self.on_touch(view.as_ref(), &event);
        });
    }

    /// `true` starts a refresh as if a pull completed, without calling any
    /// view's listener. `false` is [`RefreshAttacher::set_refresh_complete`].
    pub fn set_refreshing(&self, refreshing: bool) {
        self.inner.set_refreshing_internal(Trigger::Api, refreshing);
    }

    pub fn set_refresh_complete(&self) {
        self.inner.set_refreshing_internal(Trigger::Api, false);
    }

    pub fn is_refreshing(&self) -> bool {
        self.inner.state.get() == RefreshState::Refreshing
    }

    pub fn refresh_state(&self) -> RefreshState {
        self.inner.state.get()
    }

    /// Disabling cancels any pull in progress and ends a running refresh
    /// without calling listeners.
    pub fn set_enabled(&self, enabled: bool) {
        let inner = &self.inner;
        if inner.destroyed.get() {
            return;
        }
        inner.enabled.set(enabled);
        if !enabled {
            inner.reset_touch();
            if inner.state.get() != RefreshState::Idle {
                inner.reset();
            }
        }
    }

    pub fn is_enabled(&self) -> bool {
        self.inner.enabled.get()
    }

    pub fn is_view_being_dragged(&self, view: &dyn RefreshableView) -> bool {
        self.inner.state.get() == RefreshState::Dragging
            && self.inner.dragging_view.get() == Some(ViewKey::of(view))
    }

    pub fn header_visual_state(&self) -> HeaderVisualState {
        self.inner.presenter.visual_state()
    }

    pub fn header_view(&self) -> HeaderViewId {
        self.inner.presenter.header()
    }

    pub fn header_content(&self) -> Option<HeaderContent> {
        self.inner.presenter.content()
    }

    pub fn with_header_transformer<R>(&self, f: impl FnOnce(&dyn HeaderTransformer) -> R) -> R {
        self.inner.presenter.with_transformer(f)
    }

    pub fn set_header_view_listener(&self, listener: Option<Rc<dyn HeaderViewListener>>) {
        *self.inner.header_listener.borrow_mut() = listener;
    }

    /// Re-reads configuration-dependent resources, e.g. after rotation.
    pub fn on_configuration_changed(&self) {
        let inner = &self.inner;
        if inner.destroyed.get() {
            return;
        }
        inner.presenter.on_configuration_changed();
        inner.on_insets_changed(inner.host.current_insets());
    }

    /// Removes the header from the host and drops every registration. The
    /// attacher ignores all further calls.
    pub fn destroy(&self) {
        let inner = &self.inner;
        if inner.destroyed.replace(true) {
            return;
        }
        inner.cancel_minimize();
        inner.presenter.cancel_animations();
        inner.registrations.borrow_mut().clear();
        inner.dragging_view.set(None);
        inner.state.set(RefreshState::Idle);
        inner.host.set_insets_listener(None);
        inner.host.remove_header(inner.presenter.header());
        log::debug!("pull-to-refresh destroyed");
    }

    pub fn is_destroyed(&self) -> bool {
        self.inner.destroyed.get()
    }
}

impl std::fmt::Debug for RefreshAttacher {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("RefreshAttacher")
            .field("state", &self.inner.state.get())
            .field("enabled", &self.inner.enabled.get())
            .field("views", &self.inner.registrations.borrow().len())
            .field("presenter", &self.inner.presenter)
            .finish()
    }
}

impl AttacherInner {
    /// Live registration for `key`; a dead one is dropped on the way.
    fn registration(&self, key: ViewKey) -> Option<Rc<Registration>> {
        {
            let mut registrations = self.registrations.borrow_mut();
            let registration = registrations.get(&key)?;
            if registration.is_alive() {
                return Some(Rc::clone(registration));
            }
            registrations.shift_remove(&key);
        }
        self.on_view_released(key);
        None
    }

    fn purge_dead(&self) {
        let mut released = Vec::new();
        self.registrations.borrow_mut().retain(|key, registration| {
            let alive = registration.is_alive();
            if !alive {
                released.push(*key);
            }
            alive
        });
        for key in released {
            self.on_view_released(key);
        }
    }

    /// A view dropped mid-drag takes its pull with it.
    fn on_view_released(&self, key: ViewKey) {
        log::trace!("dropped registration of released view {key:?}");
        self.end_drag_of(key);
    }

    fn accepts_touch(&self) -> bool {
        !self.destroyed.get()
            && self.enabled.get()
            && self.state.get() != RefreshState::Refreshing
    }

    fn handle_signal(
        self: &Rc<Self>,
        key: ViewKey,
        view: &dyn RefreshableView,
        registration: &Registration,
        signal: PullSignal,
    ) {
        match signal {
            PullSignal::PullStarted { begin_y } => {
                log::trace!("pull started on {key:?} at y={begin_y}");
                self.state.set(RefreshState::Dragging);
                self.dragging_view.set(Some(key));
                self.show_header_view();
            }
            PullSignal::Pulled { fraction } => self.presenter.on_pulled(fraction),
            PullSignal::ReleaseToRefresh => self.presenter.on_release_to_refresh(),
            PullSignal::ThresholdCrossed => {
                if self.state.get() == RefreshState::Refreshing {
                    StateViolation::ThresholdCrossedWhileRefreshing.report();
                    return;
                }
                let trigger = Trigger::Touch {
                    view,
                    listener: Rc::clone(&registration.listener),
                };
                self.set_refreshing_internal(trigger, true);
            }
            PullSignal::PullEnded => {
                log::trace!("pull ended on {key:?}");
                if self.dragging_view.get() == Some(key) {
                    self.dragging_view.set(None);
                }
                if self.state.get() != RefreshState::Refreshing {
                    self.reset();
                }
            }
        }
    }

    /// A touch trigger cannot exist without a listener, so only the state
    /// decides.
    fn can_refresh(&self) -> bool {
        self.state.get() != RefreshState::Refreshing
    }

    fn set_refreshing_internal(self: &Rc<Self>, trigger: Trigger<'_>, refreshing: bool) {
        if self.destroyed.get() {
            return;
        }
        if (self.state.get() == RefreshState::Refreshing) == refreshing {
            return;
        }
        self.reset_touch();

        if refreshing && self.can_refresh() {
            self.start_refresh(trigger);
        } else {
            self.reset();
        }
    }

    fn start_refresh(self: &Rc<Self>, trigger: Trigger<'_>) {
        log::debug!(
            "refresh started ({})",
            if trigger.from_touch() { "pull" } else { "api" }
        );
        self.state.set(RefreshState::Refreshing);
        self.dragging_view.set(None);
        self.presenter.on_refresh_started();
        self.show_header_view();

        // The header listener may already have completed this refresh.
        if !self.is_refreshing() {
            return;
        }
        if self.refresh_minimize {
            self.schedule_minimize();
        }

        // Last: the listener may complete the refresh before returning.
        if let Trigger::Touch { view, listener } = trigger {
            listener.on_refresh_started(view);
        }
    }

    fn is_refreshing(&self) -> bool {
        !self.destroyed.get() && self.state.get() == RefreshState::Refreshing
    }

    fn schedule_minimize(self: &Rc<Self>) {
        self.cancel_minimize();
        let weak = Rc::downgrade(self);
        let task = TaskRegistration::schedule(&self.scheduler, self.minimize_delay, move || {
            if let Some(inner) = weak.upgrade() {
                inner.on_minimize_elapsed();
            }
        });
        *self.minimize_task.borrow_mut() = Some(task);
    }

    fn on_minimize_elapsed(&self) {
        if let Some(task) = self.minimize_task.borrow_mut().take() {
            task.release();
        }
        if self.state.get() != RefreshState::Refreshing {
            StateViolation::MinimizeOutsideRefresh.report();
            return;
        }
        if self.presenter.on_refresh_minimized() {
            log::trace!("header minimized");
            self.notify_header_state(HeaderVisualState::Minimized);
        }
    }

    fn cancel_minimize(&self) {
        let task = self.minimize_task.borrow_mut().take();
        if let Some(task) = task {
            task.cancel();
        }
    }

    fn reset(&self) {
        if self.state.get() == RefreshState::Refreshing {
            log::debug!("refresh reset");
        }
        self.state.set(RefreshState::Idle);
        self.dragging_view.set(None);
        self.cancel_minimize();
        self.hide_header_view();
    }

    /// Drops every open gesture session. Returns whether one was dragging.
    fn reset_touch(&self) -> bool {
        let registrations: Vec<Rc<Registration>> =
            self.registrations.borrow().values().cloned().collect();
        let mut was_dragging = false;
        for registration in registrations {
            was_dragging |= registration.tracker.borrow_mut().reset();
        }
        self.dragging_view.set(None);
        was_dragging
    }

    /// Ends the drag owned by `key`, if it is the one dragging.
    fn end_drag_of(&self, key: ViewKey) {
        if self.dragging_view.get() != Some(key) {
            return;
        }
        if let Some(registration) = self.registrations.borrow().get(&key) {
            registration.tracker.borrow_mut().reset();
        }
        self.dragging_view.set(None);
        if self.state.get() == RefreshState::Dragging {
            self.reset();
        }
    }

    fn show_header_view(&self) {
        if self.presenter.show_header_view() {
            self.notify_header_state(HeaderVisualState::Visible);
        }
    }

    fn hide_header_view(&self) {
        if self.presenter.hide_header_view() {
            self.notify_header_state(HeaderVisualState::Hidden);
        }
    }

    fn notify_header_state(&self, state: HeaderVisualState) {
        let listener = self.header_listener.borrow().clone();
        if let Some(listener) = listener {
            listener.on_state_changed(self.presenter.header(), state);
        }
    }

    fn on_insets_changed(&self, insets: EdgeInsets) {
        if self.destroyed.get() {
            return;
        }
        self.presenter.on_insets_changed(insets);
    }
}
