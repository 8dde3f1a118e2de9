//! Testing utilities and harness for pull-to-refresh

pub mod host;
pub mod recorder;
pub mod rule;
pub mod views;

pub use host::*;
pub use recorder::*;
pub use rule::*;
pub use views::*;

pub mod prelude {
    pub use crate::host::FakeHost;
    pub use crate::recorder::{
        HeaderStateRecorder, RecordingTransformer, RefreshCounter, TransformerCall,
    };
    pub use crate::rule::{PointerScript, RefreshTestRule};
    pub use crate::views::{FakeListView, FakeScrollView, FakeWebView, PlainView};
}
