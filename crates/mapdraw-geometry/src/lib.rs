//! Candidate geometry construction.
//!
//! Turns the point sequence collected by a draw session into a single
//! candidate geometry for the active tool:
//!
//! - **Circle**: anchor + drag point, approximated by a 64-vertex ring
//! - **Rectangle**: two opposite corners, axis-aligned
//! - **Polygon**: three or more vertices, closed by repeating the first
//! - **Line**: two or more vertices, left open
//!
//! Builders are pure. Degenerate output (zero area, non-finite input) is
//! not rejected here; the validator gates it.
//!
//! # Example
//!
//! ```ignore
//! use mapdraw_geometry::build;
//! use mapdraw_model::{LngLat, Tool};
//!
//! let candidate = build(Tool::Rectangle, &[LngLat::new(0.0, 0.0), LngLat::new(2.0, 3.0)])?;
//! ```

#![deny(unsafe_code)]

mod builders;
mod error;

pub use builders::{
    CIRCLE_STEPS, Candidate, build, circle, great_circle_distance, line, polygon, rectangle,
};
pub use error::BuildError;
