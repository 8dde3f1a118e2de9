//! Shared gesture constants for touch handling.
//!
//! Values are in density-independent pixels; the attacher converts them with
//! the host density before handing them to the tracker.

use pullrefresh_graphics::Dp;

/// Distance a pointer must travel before motion counts as a drag.
///
/// Also the tolerance for reverse motion during a pull: moving back by less
/// than this keeps the pull alive.
pub const TOUCH_SLOP: Dp = Dp(8.0);

/// Default fraction of the view height that must be pulled to refresh.
pub const DEFAULT_SCROLL_DISTANCE: f32 = 0.5;

/// Default delay before a running refresh minimizes its header.
pub const DEFAULT_MINIMIZE_DELAY_MS: u64 = 1000;
