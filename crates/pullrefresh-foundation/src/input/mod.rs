pub mod dispatcher;
pub mod types;

pub use dispatcher::PointerDispatcher;
pub use types::{Edge, EdgeFlags, PointerEvent, PointerEventKind};
