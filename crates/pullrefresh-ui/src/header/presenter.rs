//! Header surface state: hidden, visible or minimized.
//!
//! The presenter sequences visibility changes against the host animator. A
//! hide always finishes visually before the content resets, so stale labels
//! never flash while the header fades out.

use super::{HeaderContent, HeaderTransformer, HeaderViewId};
use pullrefresh_animation::{AnimationHandle, AnimationKind, AnimationSpec, Animator};
use pullrefresh_graphics::EdgeInsets;
use std::cell::RefCell;
use std::rc::{Rc, Weak};

#[derive(Clone, Copy, Debug, PartialEq, Eq, Default, Hash)]
pub enum HeaderVisualState {
    #[default]
    Hidden,
    Visible,
    Minimized,
}

/// Observer for header surface transitions.
pub trait HeaderViewListener {
    fn on_state_changed(&self, header: HeaderViewId, state: HeaderVisualState);
}

impl<F> HeaderViewListener for F
where
    F: Fn(HeaderViewId, HeaderVisualState),
{
    fn on_state_changed(&self, header: HeaderViewId, state: HeaderVisualState) {
        self(header, state)
    }
}

struct RunningAnimation {
    kind: AnimationKind,
    generation: u64,
    handle: Option<AnimationHandle>,
}

struct PresenterState {
    header: HeaderViewId,
    transformer: Box<dyn HeaderTransformer>,
    visual_state: HeaderVisualState,
    animator: Rc<dyn Animator>,
    show_animation: Option<AnimationSpec>,
    hide_animation: Option<AnimationSpec>,
    running: Option<RunningAnimation>,
    generation: u64,
}

impl PresenterState {
    /// Stops whatever animation is running. An interrupted hide still owes
    /// the content reset, which happens here.
    fn interrupt(&mut self) {
        if let Some(running) = self.running.take() {
            if let Some(handle) = running.handle {
                handle.cancel();
            }
            if running.kind == AnimationKind::Hide {
                self.transformer.on_reset();
            }
        }
    }

    fn begin(&mut self, kind: AnimationKind) -> u64 {
        self.generation += 1;
        self.running = Some(RunningAnimation {
            kind,
            generation: self.generation,
            handle: None,
        });
        self.generation
    }

    fn attach_handle(&mut self, generation: u64, handle: AnimationHandle) {
        match self.running.as_mut() {
            Some(running) if running.generation == generation => running.handle = Some(handle),
            // Completed synchronously inside `play`.
            _ => handle.complete(),
        }
    }

    fn finish(&mut self, generation: u64) {
        match &self.running {
            Some(running) if running.generation == generation => {}
            _ => return,
        }
        let Some(running) = self.running.take() else {
            return;
        };
        if let Some(handle) = running.handle {
            handle.complete();
        }
        if running.kind == AnimationKind::Hide {
            self.transformer.on_reset();
        }
    }
}

#[derive(Clone)]
pub struct HeaderPresenter {
    state: Rc<RefCell<PresenterState>>,
}

impl HeaderPresenter {
    pub fn new(
        header: HeaderViewId,
        transformer: Box<dyn HeaderTransformer>,
        animator: Rc<dyn Animator>,
        show_animation: Option<AnimationSpec>,
        hide_animation: Option<AnimationSpec>,
    ) -> Self {
        Self {
            state: Rc::new(RefCell::new(PresenterState {
                header,
                transformer,
                visual_state: HeaderVisualState::Hidden,
                animator,
                show_animation,
                hide_animation,
                running: None,
                generation: 0,
            })),
        }
    }

    pub fn header(&self) -> HeaderViewId {
        self.state.borrow().header
    }

    pub fn visual_state(&self) -> HeaderVisualState {
        self.state.borrow().visual_state
    }

    pub fn is_animating(&self) -> bool {
        self.state.borrow().running.is_some()
    }

    pub fn content(&self) -> Option<HeaderContent> {
        self.state.borrow().transformer.content()
    }

    pub fn with_transformer<R>(&self, f: impl FnOnce(&dyn HeaderTransformer) -> R) -> R {
        f(self.state.borrow().transformer.as_ref())
    }

    pub fn reset(&self) {
        self.state.borrow_mut().transformer.on_reset();
    }

    pub fn on_pulled(&self, fraction: f32) {
        self.state.borrow_mut().transformer.on_pulled(fraction);
    }

    pub fn on_refresh_started(&self) {
        self.state.borrow_mut().transformer.on_refresh_started();
    }

    pub fn on_release_to_refresh(&self) {
        self.state.borrow_mut().transformer.on_release_to_refresh();
    }

    pub fn on_configuration_changed(&self) {
        self.state.borrow_mut().transformer.on_configuration_changed();
    }

    pub fn on_insets_changed(&self, insets: EdgeInsets) {
        self.state.borrow_mut().transformer.on_insets_changed(insets);
    }

    /// Visible → Minimized. Returns whether the header changed.
    pub fn on_refresh_minimized(&self) -> bool {
        let mut state = self.state.borrow_mut();
        if state.visual_state != HeaderVisualState::Visible {
            return false;
        }
        state.visual_state = HeaderVisualState::Minimized;
        state.transformer.on_refresh_minimized();
        true
    }

    /// Returns whether the header was hidden before this call.
    pub fn show_header_view(&self) -> bool {
        let (spec, animator, generation) = {
            let mut state = self.state.borrow_mut();
            if state.visual_state != HeaderVisualState::Hidden {
                return false;
            }
            state.interrupt();
            state.visual_state = HeaderVisualState::Visible;
            let Some(spec) = state.show_animation else {
                return true;
            };
            let generation = state.begin(AnimationKind::Show);
            (spec, Rc::clone(&state.animator), generation)
        };
        self.play(animator, AnimationKind::Show, spec, generation);
        true
    }

    /// Returns whether the header was showing before this call. Content is
    /// reset once the header is fully hidden.
    pub fn hide_header_view(&self) -> bool {
        let (spec, animator, generation) = {
            let mut state = self.state.borrow_mut();
            if state.visual_state == HeaderVisualState::Hidden {
                return false;
            }
            state.interrupt();
            state.visual_state = HeaderVisualState::Hidden;
            let Some(spec) = state.hide_animation else {
                state.transformer.on_reset();
                return true;
            };
            let generation = state.begin(AnimationKind::Hide);
            (spec, Rc::clone(&state.animator), generation)
        };
        self.play(animator, AnimationKind::Hide, spec, generation);
        true
    }

    /// Stops any running animation without waiting for it.
    pub fn cancel_animations(&self) {
        self.state.borrow_mut().interrupt();
    }

    fn play(
        &self,
        animator: Rc<dyn Animator>,
        kind: AnimationKind,
        spec: AnimationSpec,
        generation: u64,
    ) {
        let weak: Weak<RefCell<PresenterState>> = Rc::downgrade(&self.state);
        // No borrow is held here: hosts may complete the animation inline.
        let handle = animator.play(
            kind,
            spec,
            Box::new(move || {
                if let Some(state) = weak.upgrade() {
                    state.borrow_mut().finish(generation);
                }
            }),
        );
        self.state.borrow_mut().attach_handle(generation, handle);
    }
}

impl std::fmt::Debug for HeaderPresenter {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let state = self.state.borrow();
        f.debug_struct("HeaderPresenter")
            .field("header", &state.header)
            .field("visual_state", &state.visual_state)
            .field("animating", &state.running.as_ref().map(|running| running.kind))
            .finish()
    }
}

#[cfg(test)]
#[path = "../tests/presenter_tests.rs"]
mod tests;
