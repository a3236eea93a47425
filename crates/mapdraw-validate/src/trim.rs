//! Overlap trimming: candidate minus existing shape.

use geo::{Area, BooleanOps, MultiPolygon, Polygon};

/// Result of subtracting an existing shape from the candidate.
#[derive(Debug, Clone, PartialEq)]
pub enum Trim {
    /// Nothing of the candidate is left.
    Empty,
    /// Remaining area; several members when the existing shape splits it.
    Remaining(MultiPolygon<f64>),
}

/// Subtract `existing` from `candidate`, dropping members whose area is at
/// or below `area_tolerance`.
pub fn trim(
    candidate: &MultiPolygon<f64>,
    existing: &MultiPolygon<f64>,
    area_tolerance: f64,
) -> Trim {
    let difference = candidate.difference(existing);
    let kept: Vec<Polygon<f64>> = difference
        .0
        .into_iter()
        .filter(|polygon| polygon.unsigned_area() > area_tolerance)
        .collect();

    if kept.is_empty() {
        Trim::Empty
    } else {
        Trim::Remaining(MultiPolygon::new(kept))
    }
}
