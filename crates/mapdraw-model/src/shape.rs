use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use uuid::Uuid;

use crate::{Geometry, ModelError, Tool};

/// Unique identifier of a committed shape.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ShapeId(Uuid);

impl ShapeId {
    /// Generate a fresh random (v4) identifier.
    pub fn new() -> Self {
        Self(Uuid::new_v4())
    }

    pub fn from_uuid(uuid: Uuid) -> Self {
        Self(uuid)
    }

    pub fn as_uuid(&self) -> &Uuid {
        &self.0
    }

    /// First eight hex characters, as shown in popups and tables.
    pub fn short(&self) -> String {
        self.0.simple().to_string()[..8].to_string()
    }
}

impl Default for ShapeId {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Display for ShapeId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(&self.0, f)
    }
}

impl FromStr for ShapeId {
    type Err = ModelError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Uuid::parse_str(s.trim())
            .map(Self)
            .map_err(|source| ModelError::InvalidShapeId {
                value: s.to_string(),
                source,
            })
    }
}

/// Tool-specific data recorded with a shape.
///
/// Kept independent of the geometry: a circle that was trimmed into a
/// multi-polygon still records the radius it was drawn with.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ShapeMetadata {
    /// Drawn radius in meters (circle tool only).
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub radius_m: Option<f64>,
}

impl ShapeMetadata {
    pub fn circle(radius_m: f64) -> Self {
        Self {
            radius_m: Some(radius_m),
        }
    }
}

/// A shape admitted by validation, ready to be appended to a store.
#[derive(Debug, Clone, PartialEq)]
pub struct NewShape {
    pub tool: Tool,
    pub geometry: Geometry,
    pub metadata: ShapeMetadata,
}

/// A shape owned by a feature store. Immutable once created.
#[derive(Debug, Clone, PartialEq)]
pub struct CommittedShape {
    pub id: ShapeId,
    /// Tool the shape was drawn with.
    pub tool: Tool,
    /// Final (possibly trimmed) geometry.
    pub geometry: Geometry,
    pub created_at: DateTime<Utc>,
    pub metadata: ShapeMetadata,
}

impl CommittedShape {
    /// Stamp a new shape with a fresh id and the current time.
    pub fn commit(shape: NewShape) -> Self {
        Self {
            id: ShapeId::new(),
            tool: shape.tool,
            geometry: shape.geometry,
            created_at: Utc::now(),
            metadata: shape.metadata,
        }
    }

    /// Returns true if this shape takes part in containment and overlap checks.
    pub fn is_polygonal(&self) -> bool {
        self.tool.is_polygonal() && self.geometry.is_polygonal()
    }
}
