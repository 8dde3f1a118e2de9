//! Capabilities a scrollable view exposes to the pull-to-refresh engine.
//!
//! Concrete widgets stay outside the library. A widget implements
//! [`RefreshableView`] and opts into whichever scroll capability matches how
//! it scrolls; the built-in probes query those capabilities instead of the
//! widget's concrete type.

pub trait RefreshableView {
    /// Current height in pixels. The pull threshold is a fraction of it.
    fn height(&self) -> f32;

    fn as_list(&self) -> Option<&dyn ListContent> {
        None
    }

    fn as_scroll_container(&self) -> Option<&dyn ScrollContainer> {
        None
    }

    fn as_web_content(&self) -> Option<&dyn WebContent> {
        None
    }
}

/// Adapter-backed list with recycled children.
pub trait ListContent {
    fn item_count(&self) -> usize;

    fn first_visible_position(&self) -> usize;

    /// Top edge of the first attached child, `None` when no child is laid out.
    fn first_child_top(&self) -> Option<f32>;

    fn padding_top(&self) -> f32;
}

/// Single-child scroll container.
pub trait ScrollContainer {
    fn scroll_y(&self) -> f32;
}

/// Embedded web content with its own scroll offset.
pub trait WebContent {
    fn scroll_y(&self) -> f32;
}

/// Identity of a registered view, derived from its address.
///
/// Registrations hold the view weakly, so a key on its own never proves the
/// view is alive; the weak reference is checked on every lookup.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct ViewKey(usize);

impl ViewKey {
    pub fn of(view: &dyn RefreshableView) -> Self {
        Self(view as *const dyn RefreshableView as *const () as usize)
    }
}
