use crate::core::EngineResult;
use crate::domain::settings::{check_box, check_timestep, EngineSettings};

use super::perf_stats::PerfStats;
use super::EngineCore;

pub(super) fn enable_perf_metrics(engine: &mut EngineCore, enabled: bool) {
    engine.perf_enabled = enabled;
    if !enabled {
        engine.perf_stats.reset();
    }
}

pub(super) fn get_perf_stats(engine: &EngineCore) -> PerfStats {
    engine.perf_stats.clone()
}

pub(super) fn set_gravity(engine: &mut EngineCore, enabled: bool) {
    engine.gravity = enabled;
}

pub(super) fn set_attraction(engine: &mut EngineCore, enabled: bool) {
    engine.attraction = enabled;
}

pub(super) fn set_timestep(engine: &mut EngineCore, timestep: f32) -> EngineResult<()> {
    check_timestep(timestep)?;
    engine.timestep = timestep;
    Ok(())
}

pub(super) fn set_box(engine: &mut EngineCore, width: f32, height: f32) -> EngineResult<()> {
    check_box(width, height)?;
    engine.box_width = width;
    engine.box_height = height;
    Ok(())
}

pub(super) fn apply_settings(engine: &mut EngineCore, settings: &EngineSettings) {
    engine.timestep = settings.timestep;
    engine.gravity = settings.gravity;
    engine.attraction = settings.attraction;
    engine.box_width = settings.box_width;
    engine.box_height = settings.box_height;
}

pub(super) fn current_settings(engine: &EngineCore) -> EngineSettings {
    EngineSettings {
        timestep: engine.timestep,
        gravity: engine.gravity,
        attraction: engine.attraction,
        box_width: engine.box_width,
        box_height: engine.box_height,
    }
}
