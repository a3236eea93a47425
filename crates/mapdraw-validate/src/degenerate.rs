//! Malformed-candidate gate.
//!
//! Runs before any comparison with existing shapes. Self-intersection is
//! not detected.

use mapdraw_model::{Degeneracy, Geometry};

/// Reject non-finite coordinates (any tool) and zero-area polygons.
pub fn check_degenerate(geometry: &Geometry, area_tolerance: f64) -> Result<(), Degeneracy> {
    if geometry
        .coords()
        .any(|coord| !coord.x.is_finite() || !coord.y.is_finite())
    {
        return Err(Degeneracy::NonFiniteCoordinate);
    }

    if geometry.is_polygonal() && geometry.area() <= area_tolerance {
        return Err(Degeneracy::ZeroArea);
    }

    Ok(())
}
