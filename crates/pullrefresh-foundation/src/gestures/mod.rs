pub mod pull;

pub use pull::{GestureSession, PullConfig, PullGestureTracker, PullSignal, PullSignals};
