//! Pure math/data for pull-to-refresh geometry
//!
//! Positions reported by pointer events, window insets delivered by the
//! host surface, and the density-independent units used for touch slop.

mod geometry;
mod unit;

pub use geometry::*;
pub use unit::*;

pub mod prelude {
    pub use crate::geometry::{EdgeInsets, Point};
    pub use crate::unit::{Dp, Px};
}
