//! Attacher configuration.
//!
//! [`OptionsBuilder`] collects settings and validates them once in
//! [`OptionsBuilder::build`]; the resulting [`Options`] is read-only and is
//! consumed by the attacher's constructor.

use crate::error::ConfigurationError;
use crate::header::{HeaderTransformer, HeaderViewListener};
use pullrefresh_animation::AnimationSpec;
use pullrefresh_core::Duration;
use pullrefresh_foundation::gesture_constants::{
    DEFAULT_MINIMIZE_DELAY_MS, DEFAULT_SCROLL_DISTANCE, TOUCH_SLOP,
};
use pullrefresh_foundation::{ProbeRegistry, ScrollPositionProbe, ViewPredicate};
use pullrefresh_graphics::Dp;
use std::rc::Rc;

/// Layout name hosts map to their stock header.
pub const DEFAULT_HEADER_LAYOUT: &str = "default_header";

pub struct Options {
    header_layout: String,
    header_transformer: Option<Box<dyn HeaderTransformer>>,
    show_animation: Option<AnimationSpec>,
    hide_animation: Option<AnimationSpec>,
    scroll_distance: f32,
    refresh_on_release: bool,
    refresh_minimize: bool,
    minimize_delay: Duration,
    touch_slop: Dp,
    probes: ProbeRegistry,
    header_view_listener: Option<Rc<dyn HeaderViewListener>>,
}

impl Options {
    pub fn builder() -> OptionsBuilder {
        OptionsBuilder::new()
    }

    pub fn header_layout(&self) -> &str {
        &self.header_layout
    }

    pub fn show_animation(&self) -> Option<AnimationSpec> {
        self.show_animation
    }

    pub fn hide_animation(&self) -> Option<AnimationSpec> {
        self.hide_animation
    }

    pub fn scroll_distance(&self) -> f32 {
        self.scroll_distance
    }

    pub fn refresh_on_release(&self) -> bool {
        self.refresh_on_release
    }

    pub fn refresh_minimize(&self) -> bool {
        self.refresh_minimize
    }

    pub fn minimize_delay(&self) -> Duration {
        self.minimize_delay
    }

    pub fn touch_slop(&self) -> Dp {
        self.touch_slop
    }

    /// Probes consulted before the built-in ones.
    pub fn probes(&self) -> &ProbeRegistry {
        &self.probes
    }

    pub fn has_custom_transformer(&self) -> bool {
        self.header_transformer.is_some()
    }

    pub(crate) fn take_header_transformer(&mut self) -> Option<Box<dyn HeaderTransformer>> {
        self.header_transformer.take()
    }

    pub(crate) fn header_view_listener(&self) -> Option<Rc<dyn HeaderViewListener>> {
        self.header_view_listener.clone()
    }
}

impl Default for Options {
    fn default() -> Self {
        Self {
            header_layout: DEFAULT_HEADER_LAYOUT.to_string(),
            header_transformer: None,
            show_animation: Some(AnimationSpec::fade_in()),
            hide_animation: Some(AnimationSpec::fade_out()),
            scroll_distance: DEFAULT_SCROLL_DISTANCE,
            refresh_on_release: false,
            refresh_minimize: true,
            minimize_delay: Duration::from_millis(DEFAULT_MINIMIZE_DELAY_MS),
            touch_slop: TOUCH_SLOP,
            probes: ProbeRegistry::new(),
            header_view_listener: None,
        }
    }
}

impl std::fmt::Debug for Options {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Options")
            .field("header_layout", &self.header_layout)
            .field("custom_transformer", &self.header_transformer.is_some())
            .field("show_animation", &self.show_animation)
            .field("hide_animation", &self.hide_animation)
            .field("scroll_distance", &self.scroll_distance)
            .field("refresh_on_release", &self.refresh_on_release)
            .field("refresh_minimize", &self.refresh_minimize)
            .field("minimize_delay", &self.minimize_delay)
            .field("touch_slop", &self.touch_slop)
            .field("probes", &self.probes)
            .finish()
    }
}

#[derive(Default)]
pub struct OptionsBuilder {
    options: Options,
}

impl OptionsBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn header_layout(mut self, layout: impl Into<String>) -> Self {
        self.options.header_layout = layout.into();
        self
    }

    pub fn header_transformer(mut self, transformer: impl HeaderTransformer + 'static) -> Self {
        self.options.header_transformer = Some(Box::new(transformer));
        self
    }

    /// `None` shows the header without animating.
    pub fn show_animation(mut self, spec: Option<AnimationSpec>) -> Self {
        self.options.show_animation = spec;
        self
    }

    /// `None` hides the header and resets its content immediately.
    pub fn hide_animation(mut self, spec: Option<AnimationSpec>) -> Self {
        self.options.hide_animation = spec;
        self
    }

    pub fn scroll_distance(mut self, fraction: f32) -> Self {
        self.options.scroll_distance = fraction;
        self
    }

    pub fn refresh_on_release(mut self, enabled: bool) -> Self {
        self.options.refresh_on_release = enabled;
        self
    }

    pub fn refresh_minimize(mut self, enabled: bool) -> Self {
        self.options.refresh_minimize = enabled;
        self
    }

    pub fn minimize_delay(mut self, delay: Duration) -> Self {
        self.options.minimize_delay = delay;
        self
    }

    pub fn touch_slop(mut self, slop: Dp) -> Self {
        self.options.touch_slop = slop;
        self
    }

    /// Registers a probe for views matching `predicate`, ahead of built-ins.
    pub fn probe(
        mut self,
        predicate: impl Fn(&dyn pullrefresh_foundation::RefreshableView) -> bool + 'static,
        probe: impl ScrollPositionProbe + 'static,
    ) -> Self {
        let predicate: ViewPredicate = Rc::new(predicate);
        self.options.probes.push(predicate, Rc::new(probe));
        self
    }

    pub fn header_view_listener(mut self, listener: impl HeaderViewListener + 'static) -> Self {
        self.options.header_view_listener = Some(Rc::new(listener));
        self
    }

    pub fn build(self) -> Result<Options, ConfigurationError> {
        let distance = self.options.scroll_distance;
        if !(distance > 0.0 && distance <= 1.0) {
            return Err(ConfigurationError::InvalidScrollDistance(distance));
        }
        Ok(self.options)
    }
}

#[cfg(test)]
#[path = "tests/options_tests.rs"]
mod tests;
