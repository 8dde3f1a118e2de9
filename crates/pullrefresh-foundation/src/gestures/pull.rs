//! Pull gesture recogniser.
//!
//! Classifies the pointer samples of one view into pull signals. The tracker
//! only reports what the finger did; whether a signal starts a refresh, shows
//! the header or is ignored is decided by its owner.
//!
//! Session lifecycle:
//!
//! ```text
//! Idle --down at top--> Armed --move past slop--> Dragging
//!   ^                     |                          |
//!   +------ up/cancel, reverse past slop ------------+
//! ```

use crate::input::{PointerEvent, PointerEventKind};
use pullrefresh_graphics::Point;
use smallvec::SmallVec;

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct PullConfig {
    /// Drag threshold and reverse-motion tolerance, in pixels.
    pub touch_slop: f32,
    /// Fraction of the view height that counts as a full pull.
    pub scroll_distance: f32,
    /// Arm the refresh on a full pull but only fire it on pointer-up.
    pub refresh_on_release: bool,
}

impl PullConfig {
    /// Pixels needed for a full pull on a view of `view_height`.
    pub fn distance_for(&self, view_height: f32) -> f32 {
        view_height * self.scroll_distance
    }
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub enum PullSignal {
    /// The pointer moved far enough down to count as a pull.
    PullStarted { begin_y: f32 },
    /// Progress towards a full pull, in [0, 1).
    Pulled { fraction: f32 },
    /// Full pull reached with refresh-on-release; lifting the pointer refreshes.
    ReleaseToRefresh,
    /// Full pull completed; a refresh should start.
    ThresholdCrossed,
    /// The pull is over, either released or cancelled by a reverse swipe.
    PullEnded,
}

pub type PullSignals = SmallVec<[PullSignal; 2]>;

/// State of the current touch sequence on one view.
#[derive(Clone, Copy, Debug, PartialEq, Default)]
pub enum GestureSession {
    #[default]
    Idle,
    /// Pointer went down while the view was at its top edge.
    Armed { initial: Point },
    Dragging {
        initial: Point,
        begin_y: f32,
        /// Furthest Y reached; only moves forward.
        last_y: f32,
        /// The full pull distance has been reached in this drag.
        threshold_reached: bool,
    },
}

impl GestureSession {
    pub fn is_open(&self) -> bool {
        !matches!(self, GestureSession::Idle)
    }

    pub fn is_dragging(&self) -> bool {
        matches!(self, GestureSession::Dragging { .. })
    }

    pub fn initial_y(&self) -> Option<f32> {
        match self {
            GestureSession::Idle => None,
            GestureSession::Armed { initial } | GestureSession::Dragging { initial, .. } => {
                Some(initial.y)
            }
        }
    }

    pub fn begin_y(&self) -> Option<f32> {
        match self {
            GestureSession::Dragging { begin_y, .. } => Some(*begin_y),
            _ => None,
        }
    }

    pub fn last_y(&self) -> Option<f32> {
        match self {
            GestureSession::Dragging { last_y, .. } => Some(*last_y),
            _ => None,
        }
    }
}

#[derive(Debug, Clone)]
pub struct PullGestureTracker {
    config: PullConfig,
    session: GestureSession,
}

impl PullGestureTracker {
    pub fn new(config: PullConfig) -> Self {
        Self {
            config,
            session: GestureSession::Idle,
        }
    }

    pub fn config(&self) -> &PullConfig {
        &self.config
    }

    pub fn session(&self) -> GestureSession {
        self.session
    }

    pub fn is_dragging(&self) -> bool {
        self.session.is_dragging()
    }

    /// Drops the current session. Returns whether a drag was in progress.
    pub fn reset(&mut self) -> bool {
        let was_dragging = self.session.is_dragging();
        self.session = GestureSession::Idle;
        was_dragging
    }

    /// Feeds one pointer sample.
    ///
    /// `ready_for_pull` is only consulted on pointer-down. `view_height` is
    /// read per sample so a view resized mid-drag uses its current height.
    pub fn on_pointer_event(
        &mut self,
        event: &PointerEvent,
        view_height: f32,
        ready_for_pull: impl FnOnce() -> bool,
    ) -> PullSignals {
        let mut signals = PullSignals::new();
        if event.ends_sequence() {
            self.on_release(view_height, &mut signals);
        } else if event.kind == PointerEventKind::Down {
            self.on_down(event, ready_for_pull, &mut signals);
        } else {
            self.on_move(event.position, view_height, &mut signals);
        }
        signals
    }

    fn on_down(
        &mut self,
        event: &PointerEvent,
        ready_for_pull: impl FnOnce() -> bool,
        signals: &mut PullSignals,
    ) {
        // A stray down without an up for the previous sequence.
        if self.reset() {
            signals.push(PullSignal::PullEnded);
        }
        if event.is_edge_originated() {
            log::trace!("ignoring edge-originated down at {:?}", event.position);
            return;
        }
        if ready_for_pull() {
            self.session = GestureSession::Armed {
                initial: event.position,
            };
        }
    }

    fn on_move(&mut self, position: Point, view_height: f32, signals: &mut PullSignals) {
        let slop = self.config.touch_slop;
        match self.session {
            GestureSession::Idle => {}
            GestureSession::Armed { initial } => {
                let (dx, dy) = position.delta_from(initial);
                if dy > slop && dy > dx.abs() {
                    self.session = GestureSession::Dragging {
                        initial,
                        begin_y: position.y,
                        last_y: position.y,
                        threshold_reached: false,
                    };
                    signals.push(PullSignal::PullStarted { begin_y: position.y });
                } else if dy < -slop {
                    self.session = GestureSession::Idle;
                }
            }
            GestureSession::Dragging {
                initial,
                begin_y,
                last_y,
                threshold_reached,
            } => {
                let y_delta = position.y - last_y;
                if y_delta < -slop {
                    self.session = GestureSession::Idle;
                    signals.push(PullSignal::PullEnded);
                    return;
                }

                let furthest = position.y.max(last_y);
                let needed = self.config.distance_for(view_height);
                let distance = furthest - begin_y;
                let mut reached = threshold_reached;
                if needed > 0.0 && distance >= needed {
                    if !threshold_reached {
                        reached = true;
                        signals.push(if self.config.refresh_on_release {
                            PullSignal::ReleaseToRefresh
                        } else {
                            PullSignal::ThresholdCrossed
                        });
                    }
                } else {
                    let fraction = if needed > 0.0 {
                        (distance / needed).max(0.0)
                    } else {
                        0.0
                    };
                    signals.push(PullSignal::Pulled { fraction });
                }

                self.session = GestureSession::Dragging {
                    initial,
                    begin_y,
                    last_y: if y_delta > 0.0 { position.y } else { last_y },
                    threshold_reached: reached,
                };
            }
        }
    }

    fn on_release(&mut self, view_height: f32, signals: &mut PullSignals) {
        if let GestureSession::Dragging { begin_y, last_y, .. } = self.session {
            let needed = self.config.distance_for(view_height);
            if self.config.refresh_on_release && needed > 0.0 && last_y - begin_y >= needed {
                signals.push(PullSignal::ThresholdCrossed);
            }
            signals.push(PullSignal::PullEnded);
        }
        self.session = GestureSession::Idle;
    }
}

#[cfg(test)]
#[path = "tests/pull_tracker_tests.rs"]
mod tests;
