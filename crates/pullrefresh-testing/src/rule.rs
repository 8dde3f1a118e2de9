//! Test rule bundling a fake host, an attacher and its recorders.

use crate::host::FakeHost;
use crate::recorder::{RecordingTransformer, RefreshCounter, TransformerLog};
use pullrefresh_core::{Duration, ManualScheduler};
use pullrefresh_foundation::{PointerEvent, RefreshableView, ScrollPositionProbe};
use pullrefresh_ui::{ConfigurationError, OptionsBuilder, RefreshAttacher};
use std::rc::Rc;

/// Scripted pointer sequence along a fixed X.
#[derive(Clone, Debug, Default)]
pub struct PointerScript {
    x: f32,
    events: Vec<PointerEvent>,
}

impl PointerScript {
    pub fn at_x(x: f32) -> Self {
        Self {
            x,
            events: Vec::new(),
        }
    }

    pub fn down(mut self, y: f32) -> Self {
        self.events.push(PointerEvent::down(self.x, y));
        self
    }

    pub fn move_to(mut self, y: f32) -> Self {
        self.events.push(PointerEvent::moved(self.x, y));
        self
    }

    /// One move per entry of `ys`.
    pub fn moves(mut self, ys: &[f32]) -> Self {
        for &y in ys {
            self.events.push(PointerEvent::moved(self.x, y));
        }
        self
    }

    pub fn up(mut self, y: f32) -> Self {
        self.events.push(PointerEvent::up(self.x, y));
        self
    }

    pub fn cancel(mut self, y: f32) -> Self {
        self.events.push(PointerEvent::cancel(self.x, y));
        self
    }

    pub fn push(mut self, event: PointerEvent) -> Self {
        self.events.push(event);
        self
    }

    pub fn events(&self) -> &[PointerEvent] {
        &self.events
    }
}

/// Headless harness for driving an attacher in tests.
///
/// The header transformer is a [`RecordingTransformer`] and every view added
/// through the rule reports to one shared [`RefreshCounter`].
pub struct RefreshTestRule {
    host: Rc<FakeHost>,
    attacher: RefreshAttacher,
    transformer_log: TransformerLog,
    refreshes: Rc<RefreshCounter>,
}

impl RefreshTestRule {
    pub fn new(options: OptionsBuilder) -> Result<Self, ConfigurationError> {
        Self::with_host(FakeHost::new(), options)
    }

    pub fn with_host(
        host: Rc<FakeHost>,
        options: OptionsBuilder,
    ) -> Result<Self, ConfigurationError> {
        let transformer = RecordingTransformer::new();
        let transformer_log = transformer.log();
        let options = options.header_transformer(transformer).build()?;
        let attacher = RefreshAttacher::new(host.clone(), options)?;
        Ok(Self {
            host,
            attacher,
            transformer_log,
            refreshes: RefreshCounter::new(),
        })
    }

    pub fn host(&self) -> &Rc<FakeHost> {
        &self.host
    }

    pub fn attacher(&self) -> &RefreshAttacher {
        &self.attacher
    }

    pub fn scheduler(&self) -> Rc<ManualScheduler> {
        self.host.scheduler()
    }

    pub fn transformer_log(&self) -> &TransformerLog {
        &self.transformer_log
    }

    pub fn refreshes(&self) -> &Rc<RefreshCounter> {
        &self.refreshes
    }

    /// Registers `view` with the shared counter and the resolved probe.
    pub fn add_view(&self, view: Rc<dyn RefreshableView>) -> Result<(), ConfigurationError> {
        self.attacher
            .add_refreshable_view(view, None, Some(self.refreshes.clone()))
    }

    pub fn add_view_with_probe(
        &self,
        view: Rc<dyn RefreshableView>,
        probe: Rc<dyn ScrollPositionProbe>,
    ) -> Result<(), ConfigurationError> {
        self.attacher
            .add_refreshable_view(view, Some(probe), Some(self.refreshes.clone()))
    }

    pub fn touch(&self, view: &dyn RefreshableView, event: PointerEvent) -> bool {
        self.attacher.on_touch(view, &event)
    }

    /// Feeds every event of `script` to `view`, in order.
    pub fn play(&self, view: &dyn RefreshableView, script: &PointerScript) {
        for event in script.events() {
            self.attacher.on_touch(view, event);
        }
    }

    pub fn advance_by_millis(&self, millis: u64) -> usize {
        self.host.scheduler().advance_by(Duration::from_millis(millis))
    }

    /// Virtual time since the rule was created, in milliseconds.
    pub fn now_millis(&self) -> u128 {
        self.host.scheduler().now().as_millis()
    }
}
