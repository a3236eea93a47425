//! Pointer-driven draw session.
//!
//! Collects points for the active tool and decides when a shape is complete.
//! The session never validates or commits; a completed shape is handed back
//! as a [`DrawInput`] and the points are cleared, leaving the tool selected.

use mapdraw_geometry::build;
use mapdraw_model::{Geometry, LngLat, Tool};
use tracing::{debug, trace};

/// Point-collection state.
#[derive(Debug, Clone, Default, PartialEq)]
pub enum SessionState {
    /// No tool selected; pointer events are ignored.
    #[default]
    Idle,
    /// Points committed by clicks for the active tool, in click order.
    Collecting { tool: Tool, points: Vec<LngLat> },
}

impl SessionState {
    pub fn tool(&self) -> Option<Tool> {
        match self {
            SessionState::Idle => None,
            SessionState::Collecting { tool, .. } => Some(*tool),
        }
    }
}

/// A completed point sequence, ready for the geometry builder.
#[derive(Debug, Clone, PartialEq)]
pub struct DrawInput {
    pub tool: Tool,
    /// For two-point tools: anchor first, completing click second.
    pub points: Vec<LngLat>,
}

#[derive(Debug, Clone, Default)]
pub struct DrawSession {
    state: SessionState,
    preview: Option<LngLat>,
}

impl DrawSession {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn state(&self) -> &SessionState {
        &self.state
    }

    pub fn tool(&self) -> Option<Tool> {
        self.state.tool()
    }

    /// Points collected so far (empty when idle).
    pub fn points(&self) -> &[LngLat] {
        match &self.state {
            SessionState::Idle => &[],
            SessionState::Collecting { points, .. } => points,
        }
    }

    /// Last pointer position, if any.
    pub fn preview(&self) -> Option<LngLat> {
        self.preview
    }

    /// Switch tools, discarding pending points and the pointer position.
    /// `None` returns to idle.
    pub fn select_tool(&mut self, tool: Option<Tool>) {
        if !self.points().is_empty() {
            debug!(discarded = self.points().len(), "tool change discards pending points");
        }
        self.state = match tool {
            Some(tool) => SessionState::Collecting {
                tool,
                points: Vec::new(),
            },
            None => SessionState::Idle,
        };
        self.preview = None;
    }

    /// Clear pending points and the pointer position; the tool stays selected.
    pub fn reset(&mut self) {
        if let SessionState::Collecting { points, .. } = &mut self.state {
            points.clear();
        }
        self.preview = None;
    }

    /// Track the pointer for the live preview. Never touches collected points.
    pub fn pointer_move(&mut self, position: LngLat) {
        self.preview = Some(position);
    }

    /// Register a click.
    ///
    /// Circle and rectangle complete on their second click, with the click
    /// position as the second point. Polygon and line clicks only append.
    pub fn click(&mut self, position: LngLat) -> Option<DrawInput> {
        let SessionState::Collecting { tool, points } = &mut self.state else {
            trace!("click ignored while idle");
            return None;
        };
        let tool = *tool;

        if tool.completes_on_click() && !points.is_empty() {
            let anchor = points[0];
            points.clear();
            return Some(DrawInput {
                tool,
                points: vec![anchor, position],
            });
        }

        points.push(position);
        trace!(%tool, collected = points.len(), "point added");
        None
    }

    /// Register a double-click.
    ///
    /// Completes a polygon or line from the points already collected (the
    /// double-click position is not added). With too few points this is a
    /// no-op and the points are kept.
    pub fn double_click(&mut self) -> Option<DrawInput> {
        let SessionState::Collecting { tool, points } = &mut self.state else {
            return None;
        };
        let tool = *tool;

        if tool.completes_on_click() {
            return None;
        }
        if points.len() < tool.min_points() {
            debug!(
                %tool,
                collected = points.len(),
                required = tool.min_points(),
                "double-click with too few points ignored"
            );
            return None;
        }

        Some(DrawInput {
            tool,
            points: std::mem::take(points),
        })
    }

    /// Geometry the pending shape would have if completed at the pointer.
    ///
    /// Display only; the validator never sees it.
    pub fn preview_geometry(&self) -> Option<Geometry> {
        let SessionState::Collecting { tool, points } = &self.state else {
            return None;
        };
        let pointer = self.preview?;

        let candidate = if tool.completes_on_click() {
            build(*tool, &[*points.first()?, pointer])
        } else {
            let mut pending = points.clone();
            pending.push(pointer);
            build(*tool, &pending)
        };
        candidate.ok().map(|candidate| candidate.geometry)
    }
}
