//! Pull-to-refresh for scrollable views
//!
//! A [`RefreshAttacher`] watches the pointer input of registered views,
//! recognises a downward pull from the top edge, shows a header above the
//! content and calls the view's [`OnRefreshListener`] once the pull is long
//! enough. The application reports completion with
//! [`RefreshAttacher::set_refresh_complete`].
//!
//! ```ignore
//! let options = Options::builder().refresh_on_release(true).build()?;
//! let attacher = RefreshAttacher::new(host, options)?;
//! attacher.add_refreshable_view(list.clone(), None, Some(Rc::new(|_view: &dyn RefreshableView| {
//!     start_sync();
//! })))?;
//! ```

mod attacher;
mod error;
pub mod header;
mod host;
mod options;

pub use attacher::{OnRefreshListener, RefreshAttacher, RefreshState};
pub use error::{ConfigurationError, StateViolation};
pub use header::{
    DefaultHeaderTransformer, HeaderContent, HeaderLabel, HeaderPresenter, HeaderStyle,
    HeaderTransformer, HeaderViewId, HeaderViewListener, HeaderVisualState, Progress,
};
pub use host::{HostEnvironment, InsetsListener};
pub use options::{Options, OptionsBuilder, DEFAULT_HEADER_LAYOUT};

pub use pullrefresh_animation::{AnimationSpec, Animator, Easing};
pub use pullrefresh_core::{Duration, ManualScheduler, UiScheduler};
pub use pullrefresh_foundation::{
    Edge, EdgeFlags, ListContent, PointerDispatcher, PointerEvent, PointerEventKind,
    RefreshableView, ScrollContainer, ScrollPositionProbe, ViewKey, WebContent,
};
pub use pullrefresh_graphics::{Dp, EdgeInsets, Point};

pub mod prelude {
    pub use crate::attacher::{OnRefreshListener, RefreshAttacher, RefreshState};
    pub use crate::header::{HeaderTransformer, HeaderVisualState};
    pub use crate::host::HostEnvironment;
    pub use crate::options::Options;
    pub use pullrefresh_foundation::prelude::*;
}
