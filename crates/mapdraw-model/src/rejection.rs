//! Reasons a candidate shape is refused.
//!
//! Each variant carries only the context needed to present a message:
//! the tool for limit violations, the offending committed shape for
//! geometric violations.

use serde::{Deserialize, Serialize};
use std::fmt;
use thiserror::Error;

use crate::{ShapeId, Tool};

/// Why a candidate failed the degenerate-geometry gate.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Degeneracy {
    /// A coordinate is NaN or infinite.
    NonFiniteCoordinate,
    /// The polygon encloses no measurable area (collinear or coincident points).
    ZeroArea,
}

impl Degeneracy {
    pub fn label(&self) -> &'static str {
        match self {
            Degeneracy::NonFiniteCoordinate => "a coordinate is not a finite number",
            Degeneracy::ZeroArea => "the shape has no area",
        }
    }
}

impl fmt::Display for Degeneracy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Validation outcome for a refused candidate.
#[derive(Debug, Clone, PartialEq, Error, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum Rejection {
    /// The tool's cap was already reached; no geometry was examined.
    #[error("Limit reached for {tool}. Max is {limit}.")]
    LimitExceeded { tool: Tool, limit: u32 },

    /// An existing shape contains the candidate.
    #[error("New shape is fully inside an existing shape.")]
    FullyContained { existing: ShapeId },

    /// The candidate contains an existing shape.
    #[error("New shape fully encloses an existing shape.")]
    FullyEncloses { existing: ShapeId },

    /// Trimming against an existing shape left nothing.
    #[error("Shape is fully overlapping.")]
    FullyOverlapping { existing: ShapeId },

    /// Malformed candidate, refused before any comparison.
    #[error("Shape is degenerate: {reason}.")]
    DegenerateGeometry { reason: Degeneracy },
}

impl Rejection {
    /// Stable machine-readable code.
    pub fn code(&self) -> &'static str {
        match self {
            Rejection::LimitExceeded { .. } => "limit_exceeded",
            Rejection::FullyContained { .. } => "fully_contained",
            Rejection::FullyEncloses { .. } => "fully_encloses",
            Rejection::FullyOverlapping { .. } => "fully_overlapping",
            Rejection::DegenerateGeometry { .. } => "degenerate_geometry",
        }
    }

    /// User-facing message.
    pub fn message(&self) -> String {
        self.to_string()
    }

    /// The committed shape that caused a geometric rejection.
    pub fn existing(&self) -> Option<ShapeId> {
        match self {
            Rejection::FullyContained { existing }
            | Rejection::FullyEncloses { existing }
            | Rejection::FullyOverlapping { existing } => Some(*existing),
            Rejection::LimitExceeded { .. } | Rejection::DegenerateGeometry { .. } => None,
        }
    }
}
