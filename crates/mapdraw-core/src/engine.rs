//! Session, validator and store wired together.

use mapdraw_geometry::{BuildError, build};
use mapdraw_model::{
    FeatureStore, GeometryKind, InMemoryFeatureStore, Limits, LngLat, Rejection, ShapeId, Tool,
};
use mapdraw_validate::Validator;
use serde::Serialize;
use tracing::{debug, info, warn};

use crate::config::EngineConfig;
use crate::session::{DrawInput, DrawSession};

/// Result of a completed draw.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "outcome", rename_all = "snake_case")]
pub enum DrawOutcome {
    Committed {
        id: ShapeId,
        tool: Tool,
        kind: GeometryKind,
        /// Existing shapes the new one was trimmed against.
        trimmed_against: Vec<ShapeId>,
    },
    Rejected {
        tool: Tool,
        rejection: Rejection,
    },
}

impl DrawOutcome {
    pub fn tool(&self) -> Tool {
        match self {
            DrawOutcome::Committed { tool, .. } | DrawOutcome::Rejected { tool, .. } => *tool,
        }
    }

    pub fn committed_id(&self) -> Option<ShapeId> {
        match self {
            DrawOutcome::Committed { id, .. } => Some(*id),
            DrawOutcome::Rejected { .. } => None,
        }
    }

    pub fn rejection(&self) -> Option<&Rejection> {
        match self {
            DrawOutcome::Committed { .. } => None,
            DrawOutcome::Rejected { rejection, .. } => Some(rejection),
        }
    }
}

/// Build, validate and append one completed input.
///
/// `None` when the input has too few points for its tool; nothing is logged
/// above debug level in that case.
pub fn commit_input<S>(store: &mut S, validator: &Validator, input: &DrawInput) -> Option<DrawOutcome>
where
    S: FeatureStore + ?Sized,
{
    let candidate = match build(input.tool, &input.points) {
        Ok(candidate) => candidate,
        Err(BuildError::Incomplete {
            tool,
            required,
            got,
        }) => {
            debug!(%tool, required, got, "incomplete input discarded");
            return None;
        }
    };

    let tool = candidate.tool;
    let outcome = match validator.validate(candidate, &*store) {
        Ok(admitted) => {
            let kind = admitted.shape.geometry.kind();
            let trimmed_against = admitted.trimmed_against;
            let id = store.append(admitted.shape);
            info!(%tool, %id, %kind, trimmed = trimmed_against.len(), "shape committed");
            DrawOutcome::Committed {
                id,
                tool,
                kind,
                trimmed_against,
            }
        }
        Err(rejection) => {
            info!(%tool, code = rejection.code(), "shape rejected: {rejection}");
            DrawOutcome::Rejected { tool, rejection }
        }
    };
    Some(outcome)
}

/// Drives a [`DrawSession`] against a feature store.
#[derive(Debug)]
pub struct DrawEngine<S = InMemoryFeatureStore> {
    session: DrawSession,
    store: S,
    validator: Validator,
}

impl DrawEngine<InMemoryFeatureStore> {
    /// Engine over an empty in-memory store.
    pub fn in_memory(config: &EngineConfig) -> Self {
        Self::new(InMemoryFeatureStore::new(), config)
    }
}

impl<S: FeatureStore> DrawEngine<S> {
    pub fn new(store: S, config: &EngineConfig) -> Self {
        Self {
            session: DrawSession::new(),
            store,
            validator: config.validator(),
        }
    }

    pub fn session(&self) -> &DrawSession {
        &self.session
    }

    pub fn store(&self) -> &S {
        &self.store
    }

    pub fn into_store(self) -> S {
        self.store
    }

    pub fn limits(&self) -> &Limits {
        self.validator.limits()
    }

    /// Replace the per-tool caps. Already committed shapes are kept even if
    /// they now exceed the new cap.
    pub fn set_limits(&mut self, limits: Limits) {
        info!(?limits, "limits updated");
        self.validator.set_limits(limits);
    }

    pub fn select_tool(&mut self, tool: Option<Tool>) {
        self.session.select_tool(tool);
    }

    pub fn pointer_move(&mut self, position: LngLat) {
        self.session.pointer_move(position);
    }

    pub fn click(&mut self, position: LngLat) -> Option<DrawOutcome> {
        let input = self.session.click(position)?;
        self.submit(&input)
    }

    pub fn double_click(&mut self) -> Option<DrawOutcome> {
        let input = self.session.double_click()?;
        self.submit(&input)
    }

    /// Discard pending points.
    pub fn reset(&mut self) {
        self.session.reset();
    }

    /// Validate and commit a completed input.
    ///
    /// The session's pending points are cleared whatever the outcome.
    pub fn submit(&mut self, input: &DrawInput) -> Option<DrawOutcome> {
        let outcome = commit_input(&mut self.store, &self.validator, input);
        self.session.reset();
        outcome
    }

    /// Delete a committed shape. Unknown ids are ignored.
    pub fn remove(&mut self, id: ShapeId) -> bool {
        let removed = self.store.remove(id);
        if removed {
            info!(%id, "shape removed");
        } else {
            warn!(%id, "no shape with this id");
        }
        removed
    }
}
