//! Feature store shared between clients.

use std::sync::{Arc, Mutex, MutexGuard, PoisonError};

use mapdraw_model::{CommittedShape, FeatureStore, InMemoryFeatureStore, ShapeId, Tool};
use mapdraw_validate::Validator;
use tracing::warn;

use crate::engine::{DrawOutcome, commit_input};
use crate::session::DrawInput;

/// Cloneable handle to one in-memory store.
///
/// Every commit and removal holds the lock for its whole duration, so
/// validation always reads a settled store and commits are strictly ordered
/// across handles.
#[derive(Debug, Clone, Default)]
pub struct SharedFeatureStore {
    inner: Arc<Mutex<InMemoryFeatureStore>>,
}

impl SharedFeatureStore {
    pub fn new() -> Self {
        Self::default()
    }

    // Appends and removals never leave the store half-updated; a poisoned
    // lock still guards valid data.
    fn lock(&self) -> MutexGuard<'_, InMemoryFeatureStore> {
        self.inner.lock().unwrap_or_else(PoisonError::into_inner)
    }

    /// Build, validate and append under a single lock.
    pub fn commit(&self, input: &DrawInput, validator: &Validator) -> Option<DrawOutcome> {
        let mut store = self.lock();
        commit_input(&mut *store, validator, input)
    }

    pub fn remove(&self, id: ShapeId) -> bool {
        let removed = self.lock().remove(id);
        if !removed {
            warn!(%id, "no shape with this id");
        }
        removed
    }

    /// Copy of the committed shapes in commit order.
    pub fn snapshot(&self) -> Vec<CommittedShape> {
        self.lock().list().to_vec()
    }

    pub fn count(&self, tool: Tool) -> usize {
        self.lock().count(tool)
    }

    pub fn len(&self) -> usize {
        self.lock().len()
    }

    pub fn is_empty(&self) -> bool {
        self.lock().is_empty()
    }
}
