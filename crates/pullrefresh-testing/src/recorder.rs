//! Recorders for the callbacks the attacher makes into application code.

use pullrefresh_foundation::{RefreshableView, ViewKey};
use pullrefresh_graphics::EdgeInsets;
use pullrefresh_ui::{
    HeaderStyle, HeaderTransformer, HeaderViewId, HeaderViewListener, HeaderVisualState,
    OnRefreshListener,
};
use std::cell::{Cell, RefCell};
use std::rc::Rc;

#[derive(Clone, Debug, PartialEq)]
pub enum TransformerCall {
    ViewCreated(HeaderViewId),
    Reset,
    Pulled(f32),
    RefreshStarted,
    ReleaseToRefresh,
    Minimized,
    ConfigurationChanged,
    InsetsChanged(EdgeInsets),
}

pub type TransformerLog = Rc<RefCell<Vec<TransformerCall>>>;

/// Header transformer that appends every call to a shared log.
#[derive(Default)]
pub struct RecordingTransformer {
    log: TransformerLog,
}

impl RecordingTransformer {
    pub fn new() -> Self {
        Self::default()
    }

    /// Shared handle to the log; take it before boxing the transformer.
    pub fn log(&self) -> TransformerLog {
        Rc::clone(&self.log)
    }
}

impl HeaderTransformer for RecordingTransformer {
    fn on_view_created(&mut self, header: HeaderViewId, _style: &HeaderStyle) {
        self.log
            .borrow_mut()
            .push(TransformerCall::ViewCreated(header));
    }

    fn on_reset(&mut self) {
        self.log.borrow_mut().push(TransformerCall::Reset);
    }

    fn on_pulled(&mut self, fraction: f32) {
        self.log.borrow_mut().push(TransformerCall::Pulled(fraction));
    }

    fn on_refresh_started(&mut self) {
        self.log.borrow_mut().push(TransformerCall::RefreshStarted);
    }

    fn on_release_to_refresh(&mut self) {
        self.log.borrow_mut().push(TransformerCall::ReleaseToRefresh);
    }

    fn on_refresh_minimized(&mut self) {
        self.log.borrow_mut().push(TransformerCall::Minimized);
    }

    fn on_configuration_changed(&mut self) {
        self.log
            .borrow_mut()
            .push(TransformerCall::ConfigurationChanged);
    }

    fn on_insets_changed(&mut self, insets: EdgeInsets) {
        self.log
            .borrow_mut()
            .push(TransformerCall::InsetsChanged(insets));
    }
}

/// Number of entries in `log` equal to `call`.
pub fn count_calls(log: &TransformerLog, call: &TransformerCall) -> usize {
    log.borrow().iter().filter(|entry| *entry == call).count()
}

/// Pull fractions reported so far, in order.
pub fn pulled_fractions(log: &TransformerLog) -> Vec<f32> {
    log.borrow()
        .iter()
        .filter_map(|entry| match entry {
            TransformerCall::Pulled(fraction) => Some(*fraction),
            _ => None,
        })
        .collect()
}

/// Refresh listener that counts invocations and remembers which view fired.
///
/// An optional hook runs inside the callback, e.g. to complete the refresh
/// synchronously.
#[derive(Default)]
pub struct RefreshCounter {
    count: Cell<usize>,
    views: RefCell<Vec<ViewKey>>,
    hook: RefCell<Option<Box<dyn Fn()>>>,
}

impl RefreshCounter {
    pub fn new() -> Rc<Self> {
        Rc::new(Self::default())
    }

    pub fn count(&self) -> usize {
        self.count.get()
    }

    pub fn views(&self) -> Vec<ViewKey> {
        self.views.borrow().clone()
    }

    pub fn set_hook(&self, hook: impl Fn() + 'static) {
        *self.hook.borrow_mut() = Some(Box::new(hook));
    }
}

impl OnRefreshListener for RefreshCounter {
    fn on_refresh_started(&self, view: &dyn RefreshableView) {
        self.count.set(self.count.get() + 1);
        self.views.borrow_mut().push(ViewKey::of(view));
        if let Some(hook) = self.hook.borrow().as_ref() {
            hook();
        }
    }
}

/// Header view listener that records every reported state.
#[derive(Default)]
pub struct HeaderStateRecorder {
    states: RefCell<Vec<(HeaderViewId, HeaderVisualState)>>,
}

impl HeaderStateRecorder {
    pub fn new() -> Rc<Self> {
        Rc::new(Self::default())
    }

    pub fn states(&self) -> Vec<HeaderVisualState> {
        self.states.borrow().iter().map(|(_, state)| *state).collect()
    }

    pub fn headers(&self) -> Vec<HeaderViewId> {
        self.states.borrow().iter().map(|(header, _)| *header).collect()
    }
}

impl HeaderViewListener for HeaderStateRecorder {
    fn on_state_changed(&self, header: HeaderViewId, state: HeaderVisualState) {
        self.states.borrow_mut().push((header, state));
    }
}
