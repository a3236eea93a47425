//! The feature store contract and its in-memory implementation.

use crate::{CommittedShape, NewShape, ShapeId, Tool};

/// Ordered collection of committed shapes.
///
/// Implementations keep shapes in commit order and never reorder or mutate
/// them; the only changes are appends and removals by id.
pub trait FeatureStore {
    /// All committed shapes, oldest first.
    fn list(&self) -> &[CommittedShape];

    /// Commit a shape, returning its new identifier.
    fn append(&mut self, shape: NewShape) -> ShapeId;

    /// Delete a shape. Returns false if no shape has that id.
    fn remove(&mut self, id: ShapeId) -> bool;

    /// Number of committed shapes drawn with `tool`.
    fn count(&self, tool: Tool) -> usize {
        self.list().iter().filter(|shape| shape.tool == tool).count()
    }

    fn len(&self) -> usize {
        self.list().len()
    }

    fn is_empty(&self) -> bool {
        self.list().is_empty()
    }

    fn find(&self, id: ShapeId) -> Option<&CommittedShape> {
        self.list().iter().find(|shape| shape.id == id)
    }
}

/// Vector-backed store; commit order is push order.
#[derive(Debug, Clone, Default)]
pub struct InMemoryFeatureStore {
    shapes: Vec<CommittedShape>,
}

impl InMemoryFeatureStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Per-tool counts in `Tool::ALL` order.
    pub fn counts(&self) -> [(Tool, usize); 4] {
        Tool::ALL.map(|tool| (tool, self.count(tool)))
    }
}

impl FeatureStore for InMemoryFeatureStore {
    fn list(&self) -> &[CommittedShape] {
        &self.shapes
    }

    fn append(&mut self, shape: NewShape) -> ShapeId {
        let committed = CommittedShape::commit(shape);
        let id = committed.id;
        self.shapes.push(committed);
        id
    }

    fn remove(&mut self, id: ShapeId) -> bool {
        let before = self.shapes.len();
        self.shapes.retain(|shape| shape.id != id);
        self.shapes.len() != before
    }
}
