//! Recorded pointer-event scripts.
//!
//! A script is a JSON array of events applied to the engine in order:
//!
//! ```json
//! [
//!   { "event": "select", "tool": "rectangle" },
//!   { "event": "click", "lng": 0.0, "lat": 0.0 },
//!   { "event": "move", "lng": 1.5, "lat": 1.0 },
//!   { "event": "click", "lng": 2.0, "lat": 2.0 },
//!   { "event": "remove", "shape": 0 },
//!   { "event": "select", "tool": null }
//! ]
//! ```
//!
//! `remove` refers to shapes by the order in which this script committed them.

use std::fmt;
use std::path::{Path, PathBuf};

use mapdraw_core::{DrawEngine, DrawOutcome};
use mapdraw_model::{FeatureStore, LngLat, ShapeId, Tool};
use serde::{Deserialize, Serialize};
use thiserror::Error;
use tracing::{info_span, warn};

#[derive(Debug, Error)]
pub enum ScriptError {
    #[error("failed to read script {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to parse script {path}: {source}")]
    Json {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "event", rename_all = "lowercase")]
pub enum ScriptEvent {
    /// Choose a tool; `null` deselects.
    Select { tool: Option<Tool> },
    Move { lng: f64, lat: f64 },
    Click { lng: f64, lat: f64 },
    Dblclick,
    /// Delete the n-th shape committed by this script (0-based).
    Remove { shape: usize },
    /// Drop pending points, keep the tool.
    Reset,
}

impl fmt::Display for ScriptEvent {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ScriptEvent::Select { tool: Some(tool) } => write!(f, "select {tool}"),
            ScriptEvent::Select { tool: None } => f.write_str("select none"),
            ScriptEvent::Move { lng, lat } => write!(f, "move ({lng}, {lat})"),
            ScriptEvent::Click { lng, lat } => write!(f, "click ({lng}, {lat})"),
            ScriptEvent::Dblclick => f.write_str("dblclick"),
            ScriptEvent::Remove { shape } => write!(f, "remove #{shape}"),
            ScriptEvent::Reset => f.write_str("reset"),
        }
    }
}

pub fn load_script(path: &Path) -> Result<Vec<ScriptEvent>, ScriptError> {
    let text = std::fs::read_to_string(path).map_err(|source| ScriptError::Io {
        path: path.to_path_buf(),
        source,
    })?;
    serde_json::from_str(&text).map_err(|source| ScriptError::Json {
        path: path.to_path_buf(),
        source,
    })
}

/// What one event did to the engine.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "effect", rename_all = "snake_case")]
pub enum StepEffect {
    Draw(DrawOutcome),
    Removed { id: ShapeId },
    /// `remove` named a shape that does not exist or is already gone.
    RemoveMissed { shape: usize },
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Step {
    /// Position of the event in the script.
    pub index: usize,
    pub event: ScriptEvent,
    pub effect: StepEffect,
}

/// Events that changed something, in script order. Pointer moves, tool
/// changes and clicks that only add a point are not recorded.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct ReplayReport {
    pub steps: Vec<Step>,
}

impl ReplayReport {
    pub fn committed(&self) -> usize {
        self.outcomes()
            .filter(|outcome| outcome.committed_id().is_some())
            .count()
    }

    pub fn rejected(&self) -> usize {
        self.outcomes()
            .filter(|outcome| outcome.rejection().is_some())
            .count()
    }

    fn outcomes(&self) -> impl Iterator<Item = &DrawOutcome> {
        self.steps.iter().filter_map(|step| match &step.effect {
            StepEffect::Draw(outcome) => Some(outcome),
            _ => None,
        })
    }
}

/// Apply `events` to `engine` in order.
pub fn replay<S: FeatureStore>(events: &[ScriptEvent], engine: &mut DrawEngine<S>) -> ReplayReport {
    let mut report = ReplayReport::default();
    let mut committed: Vec<ShapeId> = Vec::new();

    for (index, event) in events.iter().enumerate() {
        let span = info_span!("event", index, %event);
        let _guard = span.enter();

        let effect = match *event {
            ScriptEvent::Select { tool } => {
                engine.select_tool(tool);
                None
            }
            ScriptEvent::Move { lng, lat } => {
                engine.pointer_move(LngLat::new(lng, lat));
                None
            }
            ScriptEvent::Click { lng, lat } => {
                engine.click(LngLat::new(lng, lat)).map(StepEffect::Draw)
            }
            ScriptEvent::Dblclick => engine.double_click().map(StepEffect::Draw),
            ScriptEvent::Reset => {
                engine.reset();
                None
            }
            ScriptEvent::Remove { shape } => match committed.get(shape) {
                Some(&id) if engine.remove(id) => Some(StepEffect::Removed { id }),
                _ => {
                    warn!(shape, "remove skipped");
                    Some(StepEffect::RemoveMissed { shape })
                }
            },
        };

        if let Some(effect) = effect {
            if let StepEffect::Draw(outcome) = &effect
                && let Some(id) = outcome.committed_id()
            {
                committed.push(id);
            }
            report.steps.push(Step {
                index,
                event: event.clone(),
                effect,
            });
        }
    }
    report
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_every_event_kind() {
        let events: Vec<ScriptEvent> = serde_json::from_str(
            r#"[
                {"event": "select", "tool": "polygon"},
                {"event": "select", "tool": null},
                {"event": "move", "lng": 1.0, "lat": 2.0},
                {"event": "click", "lng": 1.0, "lat": 2.0},
                {"event": "dblclick"},
                {"event": "remove", "shape": 3},
                {"event": "reset"}
            ]"#,
        )
        .unwrap();
        assert_eq!(
            events,
            vec![
                ScriptEvent::Select {
                    tool: Some(Tool::Polygon)
                },
                ScriptEvent::Select { tool: None },
                ScriptEvent::Move { lng: 1.0, lat: 2.0 },
                ScriptEvent::Click { lng: 1.0, lat: 2.0 },
                ScriptEvent::Dblclick,
                ScriptEvent::Remove { shape: 3 },
                ScriptEvent::Reset,
            ]
        );
    }

    #[test]
    fn unknown_event_is_an_error() {
        let result: Result<Vec<ScriptEvent>, _> =
            serde_json::from_str(r#"[{"event": "drag", "lng": 0.0, "lat": 0.0}]"#);
        assert!(result.is_err());
    }
}
