use std::collections::VecDeque;

use crate::domain::settings::EngineSettings;

use super::perf_stats::PerfStats;
use super::{EngineCore, FrameScheduler, ItemStore};

/// Callers validate `settings` first.
pub(super) fn create_engine_core(settings: EngineSettings) -> EngineCore {
    EngineCore {
        items: ItemStore::new(),
        timestep: settings.timestep,
        gravity: settings.gravity,
        attraction: settings.attraction,
        box_width: settings.box_width,
        box_height: settings.box_height,
        time: 0.0,
        tick: 0,
        commands: VecDeque::with_capacity(16),
        events: Vec::new(),
        scheduler: FrameScheduler::default(),
        perf_enabled: false,
        perf_stats: PerfStats::default(),
    }
}
