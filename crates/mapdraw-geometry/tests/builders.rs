//! Integration tests for the per-tool builders.

use geo::Coord;
use mapdraw_geometry::{BuildError, CIRCLE_STEPS, build, circle, great_circle_distance};
use mapdraw_model::{Geometry, GeometryKind, LngLat, Tool};

fn exterior(geometry: &Geometry) -> Vec<Coord<f64>> {
    match geometry {
        Geometry::Polygon(polygon) => polygon.exterior().0.clone(),
        other => panic!("expected polygon, got {:?}", other.kind()),
    }
}

/// Point 1000 m due north of the origin.
fn thousand_meters_north() -> LngLat {
    let degrees = 1000.0 / 6_371_008.8_f64 * 180.0 / std::f64::consts::PI;
    LngLat::new(0.0, degrees)
}

#[test]
fn test_circle_has_64_vertices_plus_closing_point() {
    let candidate = circle(LngLat::new(0.0, 0.0), thousand_meters_north());
    let ring = exterior(&candidate.geometry);

    assert_eq!(ring.len(), CIRCLE_STEPS + 1);
    assert_eq!(ring.first(), ring.last());
    assert_eq!(candidate.tool, Tool::Circle);
}

#[test]
fn test_circle_vertices_sit_on_the_radius() {
    let anchor = LngLat::new(0.0, 0.0);
    let candidate = circle(anchor, thousand_meters_north());

    let radius = candidate.metadata.radius_m.expect("circle radius");
    assert!((radius - 1000.0).abs() < 1.0, "radius was {radius}");

    for coord in exterior(&candidate.geometry) {
        let distance = great_circle_distance(anchor, LngLat::from(coord));
        assert!(
            (distance - 1000.0).abs() < 10.0,
            "vertex {coord:?} is {distance} m from the anchor"
        );
    }
}

#[test]
fn test_rectangle_from_two_corners() {
    let candidate =
        build(Tool::Rectangle, &[LngLat::new(0.0, 0.0), LngLat::new(2.0, 3.0)]).unwrap();
    let ring = exterior(&candidate.geometry);

    let expected = vec![
        Coord { x: 0.0, y: 0.0 },
        Coord { x: 2.0, y: 0.0 },
        Coord { x: 2.0, y: 3.0 },
        Coord { x: 0.0, y: 3.0 },
        Coord { x: 0.0, y: 0.0 },
    ];
    assert_eq!(ring, expected);
    assert!(candidate.metadata.radius_m.is_none());
}

#[test]
fn test_polygon_needs_three_points() {
    let err = build(Tool::Polygon, &[LngLat::new(0.0, 0.0), LngLat::new(1.0, 0.0)]).unwrap_err();
    assert_eq!(
        err,
        BuildError::Incomplete {
            tool: Tool::Polygon,
            required: 3,
            got: 2,
        }
    );
}

#[test]
fn test_line_needs_two_points() {
    assert!(matches!(
        build(Tool::Linestring, &[LngLat::new(0.0, 0.0)]),
        Err(BuildError::Incomplete { got: 1, .. })
    ));

    let candidate =
        build(Tool::Linestring, &[LngLat::new(0.0, 0.0), LngLat::new(3.0, 4.0)]).unwrap();
    assert_eq!(candidate.geometry.kind(), GeometryKind::LineString);
}

#[test]
fn test_two_point_tools_need_an_anchor_and_a_second_point() {
    for tool in [Tool::Circle, Tool::Rectangle] {
        assert!(matches!(
            build(tool, &[LngLat::new(1.0, 1.0)]),
            Err(BuildError::Incomplete { required: 2, .. })
        ));
    }
}
