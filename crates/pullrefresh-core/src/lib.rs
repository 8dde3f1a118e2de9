//! Event-dispatch runtime for pull-to-refresh
//!
//! Everything in the library runs on one UI thread. Deferred work (the
//! minimize delay, animation completions) is posted to a [`UiScheduler`]
//! owned by the host, and always re-enters on that same thread.

mod scheduler;

pub use scheduler::*;

pub use web_time::{Duration, Instant};

pub mod prelude {
    pub use crate::scheduler::{
        ManualScheduler, SystemScheduler, TaskId, TaskRegistration, UiScheduler, UiTask,
    };
}
