//! Spatial relation between the evolving candidate and one existing shape.

use geo::{Area, BooleanOps, MultiPolygon, Relate};

/// How the candidate relates to an existing shape.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Relation {
    /// The existing shape contains the candidate (shared boundary allowed).
    ContainedBy,
    /// The candidate contains the existing shape (shared boundary allowed).
    Encloses,
    /// Disjoint, or touching along a boundary only.
    Separate,
    /// Interiors intersect with positive area; the candidate must be trimmed.
    Overlapping,
}

/// Classify `candidate` against `existing`.
///
/// Topologically equal shapes are reported as `Overlapping`: trimming then
/// consumes the candidate entirely, which is reported as a full overlap
/// rather than as containment in either direction.
pub fn classify(
    candidate: &MultiPolygon<f64>,
    existing: &MultiPolygon<f64>,
    area_tolerance: f64,
) -> Relation {
    let matrix = existing.relate(candidate);

    if matrix.is_equal_topo() {
        return Relation::Overlapping;
    }
    if matrix.is_contains() {
        return Relation::ContainedBy;
    }
    if matrix.is_within() {
        return Relation::Encloses;
    }
    if !matrix.is_intersects() {
        return Relation::Separate;
    }

    let shared = candidate.intersection(existing).unsigned_area();
    if shared > area_tolerance {
        Relation::Overlapping
    } else {
        Relation::Separate
    }
}
