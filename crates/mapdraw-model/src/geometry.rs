//! Candidate and committed geometry.
//!
//! Polygonal shapes may widen from `Polygon` to `MultiPolygon` when overlap
//! trimming splits them, so every consumer handles both variants.

use geo::{Area, LineString, MultiPolygon, Polygon};
use serde::{Deserialize, Serialize};
use std::fmt;

/// Planar geometry in lng/lat degrees.
#[derive(Debug, Clone, PartialEq)]
pub enum Geometry {
    /// Single closed ring (plus any holes left by trimming).
    Polygon(Polygon<f64>),
    /// Disjoint polygons; only produced by trimming.
    MultiPolygon(MultiPolygon<f64>),
    /// Open polyline from the line tool.
    Line(LineString<f64>),
}

/// Discriminant of [`Geometry`], named after the GeoJSON geometry types.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum GeometryKind {
    Polygon,
    MultiPolygon,
    LineString,
}

impl GeometryKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            GeometryKind::Polygon => "Polygon",
            GeometryKind::MultiPolygon => "MultiPolygon",
            GeometryKind::LineString => "LineString",
        }
    }
}

impl fmt::Display for GeometryKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl Geometry {
    /// Wrap a trimming result, collapsing a single member to `Polygon`.
    pub fn from_multi_polygon(multi: MultiPolygon<f64>) -> Self {
        if multi.0.len() == 1 {
            let mut polygons = multi.0;
            Geometry::Polygon(polygons.remove(0))
        } else {
            Geometry::MultiPolygon(multi)
        }
    }

    pub fn kind(&self) -> GeometryKind {
        match self {
            Geometry::Polygon(_) => GeometryKind::Polygon,
            Geometry::MultiPolygon(_) => GeometryKind::MultiPolygon,
            Geometry::Line(_) => GeometryKind::LineString,
        }
    }

    pub fn is_polygonal(&self) -> bool {
        !matches!(self, Geometry::Line(_))
    }

    /// Both polygonal variants as a `MultiPolygon`; `None` for lines.
    pub fn to_multi_polygon(&self) -> Option<MultiPolygon<f64>> {
        match self {
            Geometry::Polygon(polygon) => Some(MultiPolygon::new(vec![polygon.clone()])),
            Geometry::MultiPolygon(multi) => Some(multi.clone()),
            Geometry::Line(_) => None,
        }
    }

    /// Unsigned planar area in square degrees. Lines have no area.
    pub fn area(&self) -> f64 {
        match self {
            Geometry::Polygon(polygon) => polygon.unsigned_area(),
            Geometry::MultiPolygon(multi) => multi.unsigned_area(),
            Geometry::Line(_) => 0.0,
        }
    }

    /// Number of polygon members (0 for lines).
    pub fn polygon_count(&self) -> usize {
        match self {
            Geometry::Polygon(_) => 1,
            Geometry::MultiPolygon(multi) => multi.0.len(),
            Geometry::Line(_) => 0,
        }
    }

    /// Iterate every coordinate, ring closing points included.
    pub fn coords(&self) -> Box<dyn Iterator<Item = &geo::Coord<f64>> + '_> {
        match self {
            Geometry::Polygon(polygon) => Box::new(polygon_coords(polygon)),
            Geometry::MultiPolygon(multi) => Box::new(multi.0.iter().flat_map(polygon_coords)),
            Geometry::Line(line) => Box::new(line.0.iter()),
        }
    }
}

fn polygon_coords(polygon: &Polygon<f64>) -> impl Iterator<Item = &geo::Coord<f64>> {
    std::iter::once(polygon.exterior())
        .chain(polygon.interiors())
        .flat_map(|ring| ring.0.iter())
}
