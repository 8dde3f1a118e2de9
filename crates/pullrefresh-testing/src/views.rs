//! Stand-ins for the scrollable widgets a host would register.

use pullrefresh_foundation::{ListContent, RefreshableView, ScrollContainer, WebContent};
use std::cell::Cell;
use std::rc::Rc;

/// Recycling list. Starts at its top edge with ten items.
pub struct FakeListView {
    height: Cell<f32>,
    item_count: Cell<usize>,
    first_visible: Cell<usize>,
    first_child_top: Cell<Option<f32>>,
    padding_top: Cell<f32>,
}

impl FakeListView {
    pub fn new(height: f32) -> Rc<Self> {
        Rc::new(Self {
            height: Cell::new(height),
            item_count: Cell::new(10),
            first_visible: Cell::new(0),
            first_child_top: Cell::new(Some(0.0)),
            padding_top: Cell::new(0.0),
        })
    }

    pub fn set_height(&self, height: f32) {
        self.height.set(height);
    }

    pub fn set_item_count(&self, count: usize) {
        self.item_count.set(count);
    }

    pub fn set_padding_top(&self, padding: f32) {
        self.padding_top.set(padding);
    }

    /// Scrolls so `position` is the first visible item, its top at `top`.
    pub fn scroll_to(&self, position: usize, top: f32) {
        self.first_visible.set(position);
        self.first_child_top.set(Some(top));
    }

    pub fn detach_children(&self) {
        self.first_child_top.set(None);
    }
}

impl RefreshableView for FakeListView {
    fn height(&self) -> f32 {
        self.height.get()
    }

    fn as_list(&self) -> Option<&dyn ListContent> {
        Some(self)
    }
}

impl ListContent for FakeListView {
    fn item_count(&self) -> usize {
        self.item_count.get()
    }

    fn first_visible_position(&self) -> usize {
        self.first_visible.get()
    }

    fn first_child_top(&self) -> Option<f32> {
        self.first_child_top.get()
    }

    fn padding_top(&self) -> f32 {
        self.padding_top.get()
    }
}

pub struct FakeScrollView {
    height: Cell<f32>,
    scroll_y: Cell<f32>,
}

impl FakeScrollView {
    pub fn new(height: f32) -> Rc<Self> {
        Rc::new(Self {
            height: Cell::new(height),
            scroll_y: Cell::new(0.0),
        })
    }

    pub fn set_scroll_y(&self, scroll_y: f32) {
        self.scroll_y.set(scroll_y);
    }
}

impl RefreshableView for FakeScrollView {
    fn height(&self) -> f32 {
        self.height.get()
    }

    fn as_scroll_container(&self) -> Option<&dyn ScrollContainer> {
        Some(self)
    }
}

impl ScrollContainer for FakeScrollView {
    fn scroll_y(&self) -> f32 {
        self.scroll_y.get()
    }
}

pub struct FakeWebView {
    height: Cell<f32>,
    scroll_y: Cell<f32>,
}

impl FakeWebView {
    pub fn new(height: f32) -> Rc<Self> {
        Rc::new(Self {
            height: Cell::new(height),
            scroll_y: Cell::new(0.0),
        })
    }

    pub fn set_scroll_y(&self, scroll_y: f32) {
        self.scroll_y.set(scroll_y);
    }
}

impl RefreshableView for FakeWebView {
    fn height(&self) -> f32 {
        self.height.get()
    }

    fn as_web_content(&self) -> Option<&dyn WebContent> {
        Some(self)
    }
}

impl WebContent for FakeWebView {
    fn scroll_y(&self) -> f32 {
        self.scroll_y.get()
    }
}

/// View with no scroll capability; needs an explicit probe.
pub struct PlainView {
    height: Cell<f32>,
}

impl PlainView {
    pub fn new(height: f32) -> Rc<Self> {
        Rc::new(Self {
            height: Cell::new(height),
        })
    }

    pub fn set_height(&self, height: f32) {
        self.height.set(height);
    }
}

impl RefreshableView for PlainView {
    fn height(&self) -> f32 {
        self.height.get()
    }
}
