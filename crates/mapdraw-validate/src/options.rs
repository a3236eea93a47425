use serde::{Deserialize, Serialize};

/// Default area tolerance in square degrees (roughly 0.01 m² at the equator).
pub const DEFAULT_AREA_TOLERANCE: f64 = 1e-12;

/// Numerical settings for the spatial checks.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ValidationOptions {
    /// Areas at or below this value count as empty.
    ///
    /// Applies to candidate area (degenerate gate), to intersections
    /// (touching boundaries are not overlaps) and to trimming remainders
    /// (slivers are dropped).
    pub area_tolerance: f64,
}

impl Default for ValidationOptions {
    fn default() -> Self {
        Self {
            area_tolerance: DEFAULT_AREA_TOLERANCE,
        }
    }
}

impl ValidationOptions {
    #[must_use]
    pub fn with_area_tolerance(mut self, tolerance: f64) -> Self {
        self.area_tolerance = tolerance;
        self
    }
}
