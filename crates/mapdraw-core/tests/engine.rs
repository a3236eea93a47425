use std::thread;

use mapdraw_core::export::{feature_collection, write_geojson};
use mapdraw_core::{
    ConfigError, DrawEngine, DrawInput, DrawOutcome, EngineConfig, SharedFeatureStore,
};
use mapdraw_model::{FeatureStore, GeometryKind, Limits, LngLat, Rejection, Tool};

fn p(lng: f64, lat: f64) -> LngLat {
    LngLat::new(lng, lat)
}

fn draw_rectangle(engine: &mut DrawEngine, a: LngLat, b: LngLat) -> DrawOutcome {
    engine.select_tool(Some(Tool::Rectangle));
    assert_eq!(engine.click(a), None);
    engine.click(b).expect("second click completes a rectangle")
}

#[test]
fn rectangle_commits_through_clicks() {
    let mut engine = DrawEngine::in_memory(&EngineConfig::default());
    let outcome = draw_rectangle(&mut engine, p(0.0, 0.0), p(2.0, 3.0));

    let id = outcome.committed_id().unwrap();
    let shape = engine.store().find(id).unwrap();
    assert_eq!(shape.tool, Tool::Rectangle);
    assert!((shape.geometry.area() - 6.0).abs() < 1e-12);
    assert!(engine.session().points().is_empty());
}

#[test]
fn polygon_commits_on_double_click() {
    let mut engine = DrawEngine::in_memory(&EngineConfig::default());
    engine.select_tool(Some(Tool::Polygon));
    engine.click(p(0.0, 0.0));
    engine.click(p(4.0, 0.0));
    assert_eq!(engine.double_click(), None);
    engine.click(p(0.0, 4.0));

    let outcome = engine.double_click().unwrap();
    assert!(matches!(
        outcome,
        DrawOutcome::Committed {
            tool: Tool::Polygon,
            kind: GeometryKind::Polygon,
            ..
        }
    ));
    assert_eq!(engine.store().count(Tool::Polygon), 1);
}

#[test]
fn rejection_resets_session_and_keeps_store() {
    let mut engine = DrawEngine::in_memory(&EngineConfig::default());
    let outer = draw_rectangle(&mut engine, p(0.0, 0.0), p(4.0, 4.0))
        .committed_id()
        .unwrap();

    let outcome = draw_rectangle(&mut engine, p(1.0, 1.0), p(2.0, 2.0));
    assert_eq!(
        outcome,
        DrawOutcome::Rejected {
            tool: Tool::Rectangle,
            rejection: Rejection::FullyContained { existing: outer },
        }
    );
    assert_eq!(engine.store().len(), 1);
    assert!(engine.session().points().is_empty());
    assert_eq!(engine.session().tool(), Some(Tool::Rectangle));
}

#[test]
fn incomplete_submit_is_silent() {
    let mut engine = DrawEngine::in_memory(&EngineConfig::default());
    let input = DrawInput {
        tool: Tool::Polygon,
        points: vec![p(0.0, 0.0), p(1.0, 1.0)],
    };
    assert_eq!(engine.submit(&input), None);
    assert!(engine.store().is_empty());
}

#[test]
fn limits_apply_from_the_next_draw() {
    let mut engine = DrawEngine::in_memory(&EngineConfig::default());
    draw_rectangle(&mut engine, p(0.0, 0.0), p(1.0, 1.0));
    draw_rectangle(&mut engine, p(5.0, 5.0), p(6.0, 6.0));

    engine.set_limits(Limits::default().with(Tool::Rectangle, 1));
    assert_eq!(engine.store().count(Tool::Rectangle), 2);

    let outcome = draw_rectangle(&mut engine, p(10.0, 10.0), p(11.0, 11.0));
    assert_eq!(
        outcome.rejection(),
        Some(&Rejection::LimitExceeded {
            tool: Tool::Rectangle,
            limit: 1
        })
    );
}

#[test]
fn remove_frees_a_slot() {
    let config = EngineConfig {
        limits: Limits::default().with(Tool::Rectangle, 1),
        ..EngineConfig::default()
    };
    let mut engine = DrawEngine::in_memory(&config);
    let id = draw_rectangle(&mut engine, p(0.0, 0.0), p(1.0, 1.0))
        .committed_id()
        .unwrap();

    assert!(engine.remove(id));
    assert!(!engine.remove(id));
    assert!(
        draw_rectangle(&mut engine, p(0.0, 0.0), p(1.0, 1.0))
            .committed_id()
            .is_some()
    );
}

#[test]
fn shared_store_serializes_commits() {
    let store = SharedFeatureStore::new();
    let validator = EngineConfig::default().validator();

    // Every thread draws the same square; exactly one may win.
    let handles: Vec<_> = (0..4)
        .map(|_| {
            let store = store.clone();
            let validator = validator.clone();
            thread::spawn(move || {
                let input = DrawInput {
                    tool: Tool::Rectangle,
                    points: vec![p(0.0, 0.0), p(1.0, 1.0)],
                };
                store.commit(&input, &validator)
            })
        })
        .collect();

    let outcomes: Vec<DrawOutcome> = handles
        .into_iter()
        .map(|handle| handle.join().unwrap().unwrap())
        .collect();
    let committed = outcomes
        .iter()
        .filter(|outcome| outcome.committed_id().is_some())
        .count();
    assert_eq!(committed, 1);
    assert_eq!(store.len(), 1);
    assert_eq!(store.count(Tool::Rectangle), 1);
}

#[test]
fn export_carries_tool_and_radius() {
    let mut engine = DrawEngine::in_memory(&EngineConfig::default());
    engine.select_tool(Some(Tool::Circle));
    engine.click(p(10.0, 10.0));
    let circle = engine.click(p(10.0, 10.01)).unwrap().committed_id().unwrap();
    engine.select_tool(Some(Tool::Linestring));
    engine.click(p(0.0, 0.0));
    engine.click(p(1.0, 1.0));
    engine.double_click().unwrap();

    let collection = feature_collection(engine.store().list());
    assert_eq!(collection["type"], "FeatureCollection");
    let features = collection["features"].as_array().unwrap();
    assert_eq!(features.len(), 2);

    let first = &features[0];
    assert_eq!(first["id"], circle.to_string());
    assert_eq!(first["geometry"]["type"], "Polygon");
    assert_eq!(first["properties"]["tool"], "circle");
    assert!(first["properties"]["radius"].as_f64().unwrap() > 1000.0);
    assert!(first["properties"]["createdAt"].is_i64());

    let second = &features[1];
    assert_eq!(second["geometry"]["type"], "LineString");
    assert!(second["properties"].get("radius").is_none());
}

#[test]
fn write_geojson_to_disk() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("shapes.geojson");
    let mut engine = DrawEngine::in_memory(&EngineConfig::default());
    draw_rectangle(&mut engine, p(0.0, 0.0), p(1.0, 1.0));

    write_geojson(&path, engine.store().list()).unwrap();
    let text = std::fs::read_to_string(&path).unwrap();
    let value: serde_json::Value = serde_json::from_str(&text).unwrap();
    assert_eq!(value["features"][0]["properties"]["tool"], "rectangle");
}

#[test]
fn config_loads_from_file() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("mapdraw.toml");
    std::fs::write(&path, "[limits]\ncircle = 2\n\n[validation]\narea_tolerance = 1e-10\n")
        .unwrap();

    let config = EngineConfig::load(&path).unwrap();
    assert_eq!(config.limits.get(Tool::Circle), 2);
    assert_eq!(config.limits.get(Tool::Polygon), 10);
    assert_eq!(config.validation.area_tolerance, 1e-10);
}

#[test]
fn config_errors_name_the_file() {
    let dir = tempfile::tempdir().unwrap();
    let missing = dir.path().join("missing.toml");
    assert!(matches!(
        EngineConfig::load(&missing),
        Err(ConfigError::Io { .. })
    ));

    let broken = dir.path().join("broken.toml");
    std::fs::write(&broken, "[limits\n").unwrap();
    let err = EngineConfig::load(&broken).unwrap_err();
    assert!(matches!(err, ConfigError::Toml { .. }));
    assert!(err.to_string().contains("broken.toml"));
}
