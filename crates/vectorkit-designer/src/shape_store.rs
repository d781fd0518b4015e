use indexmap::IndexMap;

use crate::model::Shape;

/// Ordered collection of shapes keyed by id.
///
/// Iteration order is z-order: the last shape is painted on top and wins
/// body hit tests.
#[derive(Debug, Clone)]
pub struct ShapeStore {
    shapes: IndexMap<u64, Shape>,
    next_id: u64,
}

impl Default for ShapeStore {
    fn default() -> Self {
        Self::new()
    }
}

impl ShapeStore {
    pub fn new() -> Self {
        Self {
            shapes: IndexMap::new(),
            next_id: 1,
        }
    }

    /// Returns a fresh id. Ids are never reused within a store.
    pub fn generate_id(&mut self) -> u64 {
        let id = self.next_id;
        self.next_id += 1;
        id
    }

    /// Inserts a shape on top of the scene, replacing any shape with the
    /// same id in place.
    pub fn insert(&mut self, shape: Shape) {
        if shape.id >= self.next_id {
            self.next_id = shape.id + 1;
        }
        self.shapes.insert(shape.id, shape);
    }

    pub fn remove(&mut self, id: u64) -> Option<Shape> {
        self.shapes.shift_remove(&id)
    }

    pub fn get(&self, id: u64) -> Option<&Shape> {
        self.shapes.get(&id)
    }

    pub fn get_mut(&mut self, id: u64) -> Option<&mut Shape> {
        self.shapes.get_mut(&id)
    }

    pub fn contains(&self, id: u64) -> bool {
        self.shapes.contains_key(&id)
    }

    /// Bottom-to-top iteration.
    pub fn draw_order_iter(&self) -> impl DoubleEndedIterator<Item = &Shape> {
        self.shapes.values()
    }

    /// Ids in draw order.
    pub fn ids(&self) -> impl Iterator<Item = u64> + '_ {
        self.shapes.keys().copied()
    }

    pub fn len(&self) -> usize {
        self.shapes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.shapes.is_empty()
    }
}
