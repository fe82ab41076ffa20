//! The page store: the canonical shape collection.

#[cfg(test)]
#[path = "page_test.rs"]
mod page_test;

use std::collections::HashMap;

use crate::shape::{Shape, ShapeId};
use crate::store::{Store, SubscriberId};

/// Page contents: a flat shape collection ordered by each shape's
/// `child_index`.
#[derive(Debug, Clone)]
pub struct PageData {
    pub id: String,
    pub name: Option<String>,
    pub shapes: HashMap<ShapeId, Shape>,
}

impl Default for PageData {
    fn default() -> Self {
        Self {
            id: "page".to_string(),
            name: None,
            shapes: HashMap::new(),
        }
    }
}

/// Store owning the shape collection. This is the only place shapes live;
/// sessions and tools hold ids plus captured snapshots, never a second
/// mutable copy.
#[derive(Debug)]
pub struct Page {
    store: Store<PageData>,
}

impl Default for Page {
    fn default() -> Self {
        Self::new(PageData::default())
    }
}

impl Page {
    #[must_use]
    pub fn new(data: PageData) -> Self {
        Self {
            store: Store::new(data),
        }
    }

    #[must_use]
    pub fn state(&self) -> &PageData {
        self.store.state()
    }

    pub fn subscribe(&mut self, f: impl Fn(&PageData) + 'static) -> SubscriberId {
        self.store.subscribe(f)
    }

    pub fn unsubscribe(&mut self, id: SubscriberId) {
        self.store.unsubscribe(id);
    }

    /// Replace the whole page (hydration).
    pub fn reset(&mut self, data: PageData) {
        self.store.action(|state| *state = data);
    }

    #[must_use]
    pub fn get_shape(&self, id: ShapeId) -> Option<&Shape> {
        self.store.state().shapes.get(&id)
    }

    pub fn add_shape(&mut self, shape: Shape) {
        self.store.action(|state| {
            state.shapes.insert(shape.id(), shape);
        });
    }

    /// Replace a shape by id. The write is unconditional: the caller's
    /// value becomes the canonical one.
    pub fn update_shape(&mut self, shape: Shape) {
        self.store.action(|state| {
            state.shapes.insert(shape.id(), shape);
        });
    }

    pub fn remove_shape(&mut self, id: ShapeId) {
        self.store.action(|state| {
            state.shapes.remove(&id);
        });
    }

    /// Sort key for a newly created shape: one above everything else, or
    /// zero on an empty page.
    #[must_use]
    pub fn next_child_index(&self) -> f64 {
        let max = self
            .store
            .state()
            .shapes
            .values()
            .map(Shape::child_index)
            .fold(f64::NEG_INFINITY, f64::max);
        if max.is_finite() { max + 1.0 } else { 0.0 }
    }

    /// The lowest sort key on the page, for background layering. Zero on an
    /// empty page.
    #[must_use]
    pub fn min_child_index(&self) -> f64 {
        let min = self
            .store
            .state()
            .shapes
            .values()
            .map(Shape::child_index)
            .fold(f64::INFINITY, f64::min);
        if min.is_finite() { min } else { 0.0 }
    }

    /// First shape matching a predicate, in no particular order.
    #[must_use]
    pub fn find(&self, pred: impl Fn(&Shape) -> bool) -> Option<&Shape> {
        self.store.state().shapes.values().find(|s| pred(s))
    }

    /// All shapes sorted by `(child_index, id)` — the draw order.
    #[must_use]
    pub fn sorted_shapes(&self) -> Vec<&Shape> {
        let mut shapes: Vec<&Shape> = self.store.state().shapes.values().collect();
        shapes.sort_by(|a, b| {
            a.child_index()
                .total_cmp(&b.child_index())
                .then_with(|| a.id().cmp(&b.id()))
        });
        shapes
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.store.state().shapes.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.store.state().shapes.is_empty()
    }
}
