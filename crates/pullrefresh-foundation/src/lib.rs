//! Foundation layer for pull-to-refresh
//!
//! Pointer events, the capabilities a scrollable view exposes, the probes
//! that decide whether a view sits at its top edge, and the gesture tracker
//! that turns a stream of pointer samples into pull signals.

pub mod gesture_constants;
pub mod gestures;
pub mod input;
pub mod probe;
pub mod view;

pub use gesture_constants::TOUCH_SLOP;
pub use gestures::{GestureSession, PullConfig, PullGestureTracker, PullSignal, PullSignals};
pub use input::{Edge, EdgeFlags, PointerDispatcher, PointerEvent, PointerEventKind};
pub use probe::{
    ListProbe, ProbeRegistry, ScrollContainerProbe, ScrollPositionProbe, ViewPredicate,
    WebContentProbe,
};
pub use view::{ListContent, RefreshableView, ScrollContainer, ViewKey, WebContent};

pub use pullrefresh_graphics::{Dp, EdgeInsets, Point};

pub mod prelude {
    pub use crate::gestures::{PullConfig, PullGestureTracker, PullSignal};
    pub use crate::input::{EdgeFlags, PointerEvent, PointerEventKind};
    pub use crate::probe::{ScrollPositionProbe, ProbeRegistry};
    pub use crate::view::{ListContent, RefreshableView, ScrollContainer, WebContent};
}
