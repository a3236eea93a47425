//! Shape admission rules.
//!
//! A candidate is checked against the feature store in four steps:
//!
//! 1. **Limit**: the tool's committed count must be below its cap
//! 2. **Degenerate gate**: finite coordinates, non-zero area for polygons
//! 3. **Line exemption**: linestrings are admitted as drawn
//! 4. **Containment/overlap pass**: existing polygonal shapes are visited in
//!    commit order; containment either way rejects, partial overlap trims
//!    the candidate and the pass continues with the remainder
//! 5. **Settle**: a trimmed remainder is re-checked against every existing
//!    shape until a whole round leaves it unchanged
//!
//! Older shapes are never altered. Trimming is order-dependent: the later
//! shape always yields.
//!
//! # Example
//!
//! ```ignore
//! use mapdraw_validate::{Validator, ValidationOptions};
//!
//! let validator = Validator::new(limits, ValidationOptions::default());
//! match validator.validate(candidate, &store) {
//!     Ok(admitted) => { store.append(admitted.shape); }
//!     Err(rejection) => println!("{}", rejection.message()),
//! }
//! ```

#![deny(unsafe_code)]

mod degenerate;
mod options;
mod overlap;
mod trim;

use geo::MultiPolygon;
use mapdraw_geometry::Candidate;
use mapdraw_model::{FeatureStore, Geometry, Limits, NewShape, Rejection, ShapeId};
use tracing::{debug, debug_span, trace, warn};

pub use degenerate::check_degenerate;
pub use options::{DEFAULT_AREA_TOLERANCE, ValidationOptions};
pub use overlap::{Relation, classify};
pub use trim::{Trim, trim};

/// Verification rounds after trimming before a candidate is given up on.
pub const SETTLE_ROUNDS: usize = 4;

/// A candidate that passed validation, possibly trimmed.
#[derive(Debug, Clone, PartialEq)]
pub struct Admitted {
    /// Shape to append to the store.
    pub shape: NewShape,
    /// Existing shapes the candidate was trimmed against, in commit order.
    pub trimmed_against: Vec<ShapeId>,
}

impl Admitted {
    pub fn was_trimmed(&self) -> bool {
        !self.trimmed_against.is_empty()
    }
}

/// Applies limits and spatial rules to candidates.
#[derive(Debug, Clone)]
pub struct Validator {
    limits: Limits,
    options: ValidationOptions,
}

impl Validator {
    pub fn new(limits: Limits, options: ValidationOptions) -> Self {
        Self { limits, options }
    }

    pub fn limits(&self) -> &Limits {
        &self.limits
    }

    pub fn options(&self) -> &ValidationOptions {
        &self.options
    }

    /// Replace the caps. Takes effect on the next call to [`Validator::validate`].
    pub fn set_limits(&mut self, limits: Limits) {
        self.limits = limits;
    }

    /// Decide whether `candidate` may join `store`, and in what form.
    ///
    /// Never mutates the store. Any rejection discards all trimming done so far.
    pub fn validate<S>(&self, candidate: Candidate, store: &S) -> Result<Admitted, Rejection>
    where
        S: FeatureStore + ?Sized,
    {
        let tool = candidate.tool;
        let span = debug_span!("validate", %tool);
        let _guard = span.enter();

        let count = store.count(tool);
        if self.limits.is_reached(tool, count) {
            let limit = self.limits.get(tool);
            debug!(count, limit, "limit reached");
            return Err(Rejection::LimitExceeded { tool, limit });
        }

        let tolerance = self.options.area_tolerance;
        check_degenerate(&candidate.geometry, tolerance)
            .map_err(|reason| Rejection::DegenerateGeometry { reason })?;

        let mut current = match candidate.geometry.to_multi_polygon() {
            Some(area) if tool.is_polygonal() => area,
            _ => {
                trace!("line exempt from overlap rules");
                return Ok(Admitted {
                    shape: candidate.into_shape(),
                    trimmed_against: Vec::new(),
                });
            }
        };

        let existing: Vec<(ShapeId, MultiPolygon<f64>)> = store
            .list()
            .iter()
            .filter(|shape| shape.is_polygonal())
            .filter_map(|shape| Some((shape.id, shape.geometry.to_multi_polygon()?)))
            .collect();

        let mut trimmed_against = Vec::new();
        for (id, area) in &existing {
            if self.apply(&mut current, *id, area)? {
                trimmed_against.push(*id);
            }
        }

        if !trimmed_against.is_empty() {
            self.settle(&mut current, &existing, &mut trimmed_against)?;
        }

        let shape = if trimmed_against.is_empty() {
            candidate.into_shape()
        } else {
            candidate.into_trimmed_shape(Geometry::from_multi_polygon(current))
        };
        Ok(Admitted {
            shape,
            trimmed_against,
        })
    }

    /// Relate `current` to one existing shape, trimming on partial overlap.
    ///
    /// Returns whether `current` was trimmed.
    fn apply(
        &self,
        current: &mut MultiPolygon<f64>,
        id: ShapeId,
        existing: &MultiPolygon<f64>,
    ) -> Result<bool, Rejection> {
        let tolerance = self.options.area_tolerance;
        match classify(current, existing, tolerance) {
            Relation::ContainedBy => {
                debug!(existing = %id, "candidate inside existing shape");
                Err(Rejection::FullyContained { existing: id })
            }
            Relation::Encloses => {
                debug!(existing = %id, "candidate encloses existing shape");
                Err(Rejection::FullyEncloses { existing: id })
            }
            Relation::Separate => {
                trace!(existing = %id, "no overlap");
                Ok(false)
            }
            Relation::Overlapping => match trim(current, existing, tolerance) {
                Trim::Empty => {
                    debug!(existing = %id, "candidate consumed by trimming");
                    Err(Rejection::FullyOverlapping { existing: id })
                }
                Trim::Remaining(rest) => {
                    trace!(existing = %id, parts = rest.0.len(), "trimmed candidate");
                    *current = rest;
                    Ok(true)
                }
            },
        }
    }

    /// Re-check a trimmed candidate against every existing shape until a
    /// full round leaves it untouched.
    ///
    /// Each difference snaps coordinates to a grid derived from its operands,
    /// so a later trim can push vertices back across an edge an earlier trim
    /// cut along. A candidate that does not settle within [`SETTLE_ROUNDS`]
    /// is rejected as overlapping the last shape it was trimmed against.
    fn settle(
        &self,
        current: &mut MultiPolygon<f64>,
        existing: &[(ShapeId, MultiPolygon<f64>)],
        trimmed_against: &mut Vec<ShapeId>,
    ) -> Result<(), Rejection> {
        let mut last = None;
        for round in 1..=SETTLE_ROUNDS {
            let mut changed = false;
            for (id, area) in existing {
                if self.apply(current, *id, area)? {
                    changed = true;
                    last = Some(*id);
                    if !trimmed_against.contains(id) {
                        trimmed_against.push(*id);
                    }
                }
            }
            if !changed {
                trimmed_against
                    .sort_by_key(|id| existing.iter().position(|(other, _)| other == id));
                return Ok(());
            }
            debug!(round, "re-trimmed rounding slivers");
        }

        let Some(existing) = last else {
            return Ok(());
        };
        warn!(%existing, "trimmed candidate did not settle");
        Err(Rejection::FullyOverlapping { existing })
    }
}
