//! Scroll position probes: is a view scrolled to its top edge?
//!
//! Probes are queried on every pointer-down, so they are pure and cheap.
//! Each attacher owns its own [`ProbeRegistry`]; nothing here is global.

use crate::view::RefreshableView;
use std::rc::Rc;

pub trait ScrollPositionProbe {
    fn is_scrolled_to_top(&self, view: &dyn RefreshableView) -> bool;
}

impl<F> ScrollPositionProbe for F
where
    F: Fn(&dyn RefreshableView) -> bool,
{
    fn is_scrolled_to_top(&self, view: &dyn RefreshableView) -> bool {
        self(view)
    }
}

/// Top of a list: nothing to scroll, or the first item fully in place.
#[derive(Default, Debug, Clone, Copy, PartialEq)]
pub struct ListProbe;

impl ScrollPositionProbe for ListProbe {
    fn is_scrolled_to_top(&self, view: &dyn RefreshableView) -> bool {
        let Some(list) = view.as_list() else {
            return false;
        };
        if list.item_count() == 0 {
            return true;
        }
        if list.first_visible_position() != 0 {
            return false;
        }
        list.first_child_top()
            .is_some_and(|top| top >= list.padding_top())
    }
}

#[derive(Default, Debug, Clone, Copy, PartialEq)]
pub struct ScrollContainerProbe;

impl ScrollPositionProbe for ScrollContainerProbe {
    fn is_scrolled_to_top(&self, view: &dyn RefreshableView) -> bool {
        view.as_scroll_container()
            .is_some_and(|container| container.scroll_y() <= 0.0)
    }
}

#[derive(Default, Debug, Clone, Copy, PartialEq)]
pub struct WebContentProbe;

impl ScrollPositionProbe for WebContentProbe {
    fn is_scrolled_to_top(&self, view: &dyn RefreshableView) -> bool {
        view.as_web_content()
            .is_some_and(|content| content.scroll_y() <= 0.0)
    }
}

pub type ViewPredicate = Rc<dyn Fn(&dyn RefreshableView) -> bool>;

/// Ordered `(predicate, probe)` pairs; the first matching predicate wins.
#[derive(Clone, Default)]
pub struct ProbeRegistry {
    entries: Vec<(ViewPredicate, Rc<dyn ScrollPositionProbe>)>,
}

impl ProbeRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Registry holding the list, scroll container and web content probes.
    pub fn with_builtins() -> Self {
        let mut registry = Self::new();
        registry.push(
            Rc::new(|view: &dyn RefreshableView| view.as_list().is_some()),
            Rc::new(ListProbe),
        );
        registry.push(
            Rc::new(|view: &dyn RefreshableView| view.as_scroll_container().is_some()),
            Rc::new(ScrollContainerProbe),
        );
        registry.push(
            Rc::new(|view: &dyn RefreshableView| view.as_web_content().is_some()),
            Rc::new(WebContentProbe),
        );
        registry
    }

    pub fn push(&mut self, predicate: ViewPredicate, probe: Rc<dyn ScrollPositionProbe>) {
        self.entries.push((predicate, probe));
    }

    /// Adds an entry that takes priority over everything already registered.
    pub fn prepend(&mut self, predicate: ViewPredicate, probe: Rc<dyn ScrollPositionProbe>) {
        self.entries.insert(0, (predicate, probe));
    }

    /// Appends `other`'s entries after this registry's own.
    pub fn extend(&mut self, other: &ProbeRegistry) {
        self.entries.extend(other.entries.iter().cloned());
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn resolve(&self, view: &dyn RefreshableView) -> Option<Rc<dyn ScrollPositionProbe>> {
        self.entries
            .iter()
            .find(|(predicate, _)| predicate(view))
            .map(|(_, probe)| Rc::clone(probe))
    }
}

impl std::fmt::Debug for ProbeRegistry {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ProbeRegistry")
            .field("entries", &self.entries.len())
            .finish()
    }
}

#[cfg(test)]
#[path = "tests/probe_tests.rs"]
mod tests;
