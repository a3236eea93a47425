//! GeoJSON export of committed shapes.
//!
//! Each shape becomes one `Feature`:
//!
//! ```json
//! {
//!   "type": "Feature",
//!   "id": "6f1c...",
//!   "geometry": { "type": "Polygon", "coordinates": [[[lng, lat], ...]] },
//!   "properties": { "tool": "circle", "geometry_kind": "Polygon", "createdAt": 1718000000000, "radius": 1000.0 }
//! }
//! ```

use std::path::Path;

use geo::{LineString, Polygon};
use mapdraw_model::{CommittedShape, Geometry};
use serde_json::{Map, Value, json};

use crate::error::ExportError;

pub fn feature_collection(shapes: &[CommittedShape]) -> Value {
    json!({
        "type": "FeatureCollection",
        "features": shapes.iter().map(feature).collect::<Vec<_>>(),
    })
}

pub fn feature(shape: &CommittedShape) -> Value {
    let mut properties = Map::new();
    properties.insert("tool".into(), json!(shape.tool.as_str()));
    properties.insert("geometry_kind".into(), json!(shape.geometry.kind().as_str()));
    properties.insert("createdAt".into(), json!(shape.created_at.timestamp_millis()));
    if let Some(radius) = shape.metadata.radius_m {
        properties.insert("radius".into(), json!(radius));
    }

    json!({
        "type": "Feature",
        "id": shape.id.to_string(),
        "geometry": geometry(&shape.geometry),
        "properties": properties,
    })
}

pub fn geometry(geometry: &Geometry) -> Value {
    let coordinates = match geometry {
        Geometry::Polygon(polygon) => polygon_positions(polygon),
        Geometry::MultiPolygon(multi) => {
            Value::Array(multi.0.iter().map(polygon_positions).collect())
        }
        Geometry::Line(line) => ring_positions(line),
    };
    json!({
        "type": geometry.kind().as_str(),
        "coordinates": coordinates,
    })
}

fn polygon_positions(polygon: &Polygon<f64>) -> Value {
    std::iter::once(polygon.exterior())
        .chain(polygon.interiors())
        .map(ring_positions)
        .collect()
}

fn ring_positions(ring: &LineString<f64>) -> Value {
    ring.0.iter().map(|coord| json!([coord.x, coord.y])).collect()
}

/// Write the collection as pretty-printed JSON.
pub fn write_geojson(path: &Path, shapes: &[CommittedShape]) -> Result<(), ExportError> {
    let text = serde_json::to_string_pretty(&feature_collection(shapes))?;
    std::fs::write(path, text).map_err(|e| ExportError::io(path, e))?;
    tracing::info!(path = %path.display(), features = shapes.len(), "wrote GeoJSON");
    Ok(())
}
