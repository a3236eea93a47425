//! Data model for constrained map drawing.
//!
//! Shared by the geometry builders, the validator and the draw engine:
//! tools, positions, the geometry tagged union, committed shapes, per-tool
//! limits, rejection reasons and the feature store contract.

#![deny(unsafe_code)]

pub mod error;
pub mod geometry;
pub mod limits;
pub mod point;
pub mod rejection;
pub mod shape;
pub mod store;
pub mod tool;

pub use error::{ModelError, Result};
pub use geometry::{Geometry, GeometryKind};
pub use limits::{DEFAULT_LIMIT, Limits};
pub use point::LngLat;
pub use rejection::{Degeneracy, Rejection};
pub use shape::{CommittedShape, NewShape, ShapeId, ShapeMetadata};
pub use store::{FeatureStore, InMemoryFeatureStore};
pub use tool::Tool;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn rejection_exposes_offending_shape() {
        let existing = ShapeId::new();
        let rejection = Rejection::FullyEncloses { existing };
        assert_eq!(rejection.existing(), Some(existing));
        assert_eq!(rejection.code(), "fully_encloses");

        let limit = Rejection::LimitExceeded {
            tool: Tool::Polygon,
            limit: 1,
        };
        assert_eq!(limit.existing(), None);
    }

    #[test]
    fn rejection_serializes_with_kind_tag() {
        let rejection = Rejection::LimitExceeded {
            tool: Tool::Circle,
            limit: 3,
        };
        let json = serde_json::to_value(&rejection).expect("serialize rejection");
        assert_eq!(json["kind"], "limit_exceeded");
        assert_eq!(json["tool"], "circle");
        assert_eq!(json["limit"], 3);
    }
}
