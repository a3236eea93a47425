//! Drawing tools.
//!
//! A tool decides how many points a draw session needs before a candidate
//! geometry can be built, and whether the result takes part in the
//! overlap rules.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::ModelError;

/// Shape-producing tool. Pan/select mode is modelled as `Option<Tool>::None`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Tool {
    /// Anchor plus drag point; approximated as a 64-gon.
    Circle,
    /// Two opposite corners of an axis-aligned box.
    Rectangle,
    /// Three or more vertices, closed automatically.
    Polygon,
    /// Two or more vertices, left open. Exempt from overlap rules.
    Linestring,
}

impl Tool {
    /// Every tool, in the order the limits table lists them.
    pub const ALL: [Tool; 4] = [Tool::Circle, Tool::Rectangle, Tool::Polygon, Tool::Linestring];

    /// Returns the canonical lowercase name.
    pub fn as_str(&self) -> &'static str {
        match self {
            Tool::Circle => "circle",
            Tool::Rectangle => "rectangle",
            Tool::Polygon => "polygon",
            Tool::Linestring => "linestring",
        }
    }

    /// Minimum number of collected points before a candidate can be built.
    pub fn min_points(&self) -> usize {
        match self {
            Tool::Circle | Tool::Rectangle | Tool::Linestring => 2,
            Tool::Polygon => 3,
        }
    }

    /// Two-point tools complete on the second click; the others on double-click.
    pub fn completes_on_click(&self) -> bool {
        matches!(self, Tool::Circle | Tool::Rectangle)
    }

    /// Returns true for tools whose shapes take part in containment and overlap checks.
    pub fn is_polygonal(&self) -> bool {
        !matches!(self, Tool::Linestring)
    }
}

impl fmt::Display for Tool {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Tool {
    type Err = ModelError;

    /// Parse a tool name (case-insensitive). `line` is accepted for `linestring`.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "circle" => Ok(Tool::Circle),
            "rectangle" | "rect" => Ok(Tool::Rectangle),
            "polygon" => Ok(Tool::Polygon),
            "linestring" | "line" => Ok(Tool::Linestring),
            _ => Err(ModelError::UnknownTool(s.to_string())),
        }
    }
}
