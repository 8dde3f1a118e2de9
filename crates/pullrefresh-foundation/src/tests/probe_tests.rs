use super::*;
use crate::view::{ListContent, ScrollContainer, WebContent};

struct List {
    count: usize,
    first_visible: usize,
    first_top: Option<f32>,
    padding_top: f32,
}

impl ListContent for List {
    fn item_count(&self) -> usize {
        self.count
    }

    fn first_visible_position(&self) -> usize {
        self.first_visible
    }

    fn first_child_top(&self) -> Option<f32> {
        self.first_top
    }

    fn padding_top(&self) -> f32 {
        self.padding_top
    }
}

impl RefreshableView for List {
    fn height(&self) -> f32 {
        400.0
    }

    fn as_list(&self) -> Option<&dyn ListContent> {
        Some(self)
    }
}

struct Scroller(f32);

impl ScrollContainer for Scroller {
    fn scroll_y(&self) -> f32 {
        self.0
    }
}

impl RefreshableView for Scroller {
    fn height(&self) -> f32 {
        400.0
    }

    fn as_scroll_container(&self) -> Option<&dyn ScrollContainer> {
        Some(self)
    }
}

struct Web(f32);

impl WebContent for Web {
    fn scroll_y(&self) -> f32 {
        self.0
    }
}

impl RefreshableView for Web {
    fn height(&self) -> f32 {
        400.0
    }

    fn as_web_content(&self) -> Option<&dyn WebContent> {
        Some(self)
    }
}

struct Plain;

impl RefreshableView for Plain {
    fn height(&self) -> f32 {
        100.0
    }
}

fn list(count: usize, first_visible: usize, first_top: Option<f32>) -> List {
    List {
        count,
        first_visible,
        first_top,
        padding_top: 4.0,
    }
}

#[test]
fn empty_list_is_at_top() {
    assert!(ListProbe.is_scrolled_to_top(&list(0, 3, None)));
}

#[test]
fn list_top_requires_first_item_below_padding() {
    assert!(ListProbe.is_scrolled_to_top(&list(10, 0, Some(4.0))));
    assert!(ListProbe.is_scrolled_to_top(&list(10, 0, Some(12.0))));
    assert!(!ListProbe.is_scrolled_to_top(&list(10, 0, Some(3.5))));
    assert!(!ListProbe.is_scrolled_to_top(&list(10, 0, None)));
    assert!(!ListProbe.is_scrolled_to_top(&list(10, 2, Some(4.0))));
}

#[test]
fn scroll_and_web_probes_compare_offset_to_zero() {
    assert!(ScrollContainerProbe.is_scrolled_to_top(&Scroller(0.0)));
    assert!(ScrollContainerProbe.is_scrolled_to_top(&Scroller(-3.0)));
    assert!(!ScrollContainerProbe.is_scrolled_to_top(&Scroller(1.0)));
    assert!(WebContentProbe.is_scrolled_to_top(&Web(0.0)));
    assert!(!WebContentProbe.is_scrolled_to_top(&Web(20.0)));
}

#[test]
fn probes_reject_views_without_their_capability() {
    assert!(!ListProbe.is_scrolled_to_top(&Plain));
    assert!(!ScrollContainerProbe.is_scrolled_to_top(&Web(0.0)));
}

#[test]
fn registry_resolves_by_capability() {
    let registry = ProbeRegistry::with_builtins();
    assert_eq!(registry.len(), 3);

    let probe = registry.resolve(&Scroller(0.0)).expect("scroll probe");
    assert!(probe.is_scrolled_to_top(&Scroller(0.0)));
    assert!(registry.resolve(&list(0, 0, None)).is_some());
    assert!(registry.resolve(&Web(0.0)).is_some());
    assert!(registry.resolve(&Plain).is_none());
}

#[test]
fn prepended_entries_take_priority() {
    let mut registry = ProbeRegistry::with_builtins();
    registry.prepend(
        Rc::new(|view: &dyn RefreshableView| view.as_scroll_container().is_some()),
        Rc::new(|_: &dyn RefreshableView| false),
    );

    let probe = registry.resolve(&Scroller(0.0)).expect("custom probe");
    assert!(!probe.is_scrolled_to_top(&Scroller(0.0)));
}

#[test]
fn empty_registry_resolves_nothing() {
    let registry = ProbeRegistry::new();
    assert!(registry.is_empty());
    assert!(registry.resolve(&Scroller(0.0)).is_none());
}
