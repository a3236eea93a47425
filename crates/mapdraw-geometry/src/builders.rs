use geo::{Coord, Destination, Distance, Haversine, LineString, Polygon};
use mapdraw_model::{Geometry, LngLat, NewShape, ShapeMetadata, Tool};
use tracing::trace;

use crate::BuildError;

/// Vertex count of the circle approximation (closing point excluded).
pub const CIRCLE_STEPS: usize = 64;

/// A freshly built shape that has not been validated yet.
#[derive(Debug, Clone, PartialEq)]
pub struct Candidate {
    pub tool: Tool,
    pub geometry: Geometry,
    pub metadata: ShapeMetadata,
}

impl Candidate {
    fn plain(tool: Tool, geometry: Geometry) -> Self {
        Self {
            tool,
            geometry,
            metadata: ShapeMetadata::default(),
        }
    }

    /// The candidate as drawn.
    pub fn into_shape(self) -> NewShape {
        NewShape {
            tool: self.tool,
            geometry: self.geometry,
            metadata: self.metadata,
        }
    }

    /// Replace the geometry with its trimmed form, keeping tool and metadata.
    pub fn into_trimmed_shape(self, geometry: Geometry) -> NewShape {
        NewShape {
            tool: self.tool,
            geometry,
            metadata: self.metadata,
        }
    }
}

/// Build the candidate geometry for `tool` from a completed point sequence.
///
/// Two-point tools use the first two points (anchor, completing point).
pub fn build(tool: Tool, points: &[LngLat]) -> Result<Candidate, BuildError> {
    let required = tool.min_points();
    if points.len() < required {
        return Err(BuildError::Incomplete {
            tool,
            required,
            got: points.len(),
        });
    }

    let candidate = match tool {
        Tool::Circle => circle(points[0], points[1]),
        Tool::Rectangle => Candidate::plain(tool, rectangle(points[0], points[1])),
        Tool::Polygon => Candidate::plain(tool, polygon(points)?),
        Tool::Linestring => Candidate::plain(tool, line(points)?),
    };
    trace!(
        %tool,
        points = points.len(),
        kind = %candidate.geometry.kind(),
        "built candidate"
    );
    Ok(candidate)
}

/// Great-circle distance in meters.
pub fn great_circle_distance(a: LngLat, b: LngLat) -> f64 {
    Haversine.distance(a.to_point(), b.to_point())
}

/// Disc of radius `|anchor - drag|` centred on `anchor`.
///
/// Vertices are placed at equal bearings, walking counter-clockwise from
/// north, and the ring is closed explicitly.
pub fn circle(anchor: LngLat, drag: LngLat) -> Candidate {
    let radius_m = great_circle_distance(anchor, drag);
    let center = anchor.to_point();

    let mut ring: Vec<Coord<f64>> = (0..CIRCLE_STEPS)
        .map(|step| {
            let bearing = -360.0 * step as f64 / CIRCLE_STEPS as f64;
            Haversine.destination(center, bearing, radius_m).0
        })
        .collect();
    ring.push(ring[0]);

    Candidate {
        tool: Tool::Circle,
        geometry: Geometry::Polygon(Polygon::new(LineString::new(ring), vec![])),
        metadata: ShapeMetadata::circle(radius_m),
    }
}

/// Axis-aligned box spanning two opposite corners.
///
/// Ring order is south-west, south-east, north-east, north-west.
pub fn rectangle(a: LngLat, b: LngLat) -> Geometry {
    let west = a.lng.min(b.lng);
    let east = a.lng.max(b.lng);
    let south = a.lat.min(b.lat);
    let north = a.lat.max(b.lat);

    let ring = vec![
        Coord { x: west, y: south },
        Coord { x: east, y: south },
        Coord { x: east, y: north },
        Coord { x: west, y: north },
        Coord { x: west, y: south },
    ];
    Geometry::Polygon(Polygon::new(LineString::new(ring), vec![]))
}

/// Closed ring through `points`.
pub fn polygon(points: &[LngLat]) -> Result<Geometry, BuildError> {
    let required = Tool::Polygon.min_points();
    if points.len() < required {
        return Err(BuildError::Incomplete {
            tool: Tool::Polygon,
            required,
            got: points.len(),
        });
    }
    let mut ring: Vec<Coord<f64>> = points.iter().map(|p| p.to_coord()).collect();
    ring.push(ring[0]);
    Ok(Geometry::Polygon(Polygon::new(LineString::new(ring), vec![])))
}

/// Open polyline through `points`.
pub fn line(points: &[LngLat]) -> Result<Geometry, BuildError> {
    let required = Tool::Linestring.min_points();
    if points.len() < required {
        return Err(BuildError::Incomplete {
            tool: Tool::Linestring,
            required,
            got: points.len(),
        });
    }
    let coords: Vec<Coord<f64>> = points.iter().map(|p| p.to_coord()).collect();
    Ok(Geometry::Line(LineString::new(coords)))
}
