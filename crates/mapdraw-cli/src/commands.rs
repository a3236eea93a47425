use std::path::Path;

use anyhow::{Context, Result};
use tracing::{debug, info, info_span};

use mapdraw_cli::script::{load_script, replay};
use mapdraw_core::export::write_geojson;
use mapdraw_core::{DrawEngine, EngineConfig};
use mapdraw_model::FeatureStore;

use crate::cli::{LimitsArgs, ReplayArgs};
use crate::summary::print_limits;
use crate::types::ReplayResult;

pub fn run_replay(args: &ReplayArgs) -> Result<ReplayResult> {
    let span = info_span!("replay", script = %args.script.display());
    let _guard = span.enter();

    let config = load_config(args.config.as_deref())?;
    let events = load_script(&args.script).context("load event script")?;
    debug!(events = events.len(), "script loaded");

    let mut engine = DrawEngine::in_memory(&config);
    let report = replay(&events, &mut engine);
    info!(
        committed = report.committed(),
        rejected = report.rejected(),
        "replay finished"
    );

    let shapes = engine.store().list().to_vec();
    if let Some(path) = &args.export {
        write_geojson(path, &shapes)
            .with_context(|| format!("export GeoJSON to {}", path.display()))?;
    }

    Ok(ReplayResult {
        script: args.script.clone(),
        report,
        shapes,
        counts: engine.store().counts(),
        limits: *engine.limits(),
        export: args.export.clone(),
    })
}

pub fn run_limits(args: &LimitsArgs) -> Result<()> {
    let config = load_config(args.config.as_deref())?;
    print_limits(&config);
    Ok(())
}

fn load_config(path: Option<&Path>) -> Result<EngineConfig> {
    match path {
        Some(path) => EngineConfig::load(path).context("load engine config"),
        None => Ok(EngineConfig::default()),
    }
}
