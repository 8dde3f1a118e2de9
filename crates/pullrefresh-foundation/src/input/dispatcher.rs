//! Pointer event queue for hosts that batch input.
//!
//! Platform integrations push `(target, event)` pairs as they arrive and
//! drain them into the attacher once per frame, in arrival order.

use super::types::PointerEvent;

pub struct PointerDispatcher<T> {
    queue: Vec<(T, PointerEvent)>,
}

impl<T> Default for PointerDispatcher<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> PointerDispatcher<T> {
    pub fn new() -> Self {
        Self { queue: Vec::new() }
    }

    pub fn push(&mut self, target: T, event: PointerEvent) {
        self.queue.push((target, event));
    }

    pub fn len(&self) -> usize {
        self.queue.len()
    }

    pub fn is_empty(&self) -> bool {
        self.queue.is_empty()
    }

    pub fn drain<F>(&mut self, mut handler: F)
    where
        F: FnMut(T, PointerEvent),
    {
        for (target, event) in self.queue.drain(..) {
            handler(target, event);
        }
    }
}
