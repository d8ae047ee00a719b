//! Simulation engine
//!
//! `EngineCore` owns the body store and advances it in fixed ticks:
//! integrate positions, resolve wall and ball-ball collisions, apply forces
//! to bodies that did not collide, advance the clock.
//!
//! The core is single-writer: the editor funnels its requests through the
//! command queue (or calls the mutators directly between ticks), the
//! renderer only reads.

use std::collections::VecDeque;

use crate::core::{EngineResult, Vector};
use crate::domain::settings::EngineSettings;
use crate::systems::bodies::Item;
use crate::systems::collision::Bounds;
use crate::systems::forces::ForceToggles;

#[path = "perf/perf_timer.rs"]
mod perf_timer;
#[path = "perf/perf_stats.rs"]
mod perf_stats;
#[path = "store/store.rs"]
mod store;
#[path = "step/step.rs"]
mod step;
#[path = "commands/commands.rs"]
mod commands;
#[path = "commands/queue.rs"]
mod queue;
#[path = "init/init.rs"]
mod init;
#[path = "init/settings.rs"]
mod settings;
#[path = "scene/scene.rs"]
mod scene;
#[path = "scheduler/scheduler.rs"]
mod scheduler;
#[path = "render/render_extract.rs"]
mod render_extract;
mod facade;

pub use commands::PropertyValue;
pub use facade::Simulator;
pub use perf_stats::PerfStats;
pub use queue::{EngineCommand, EngineEvent};
pub use render_extract::{RenderItem, RenderSnapshot};
pub use scene::{ItemSpec, SceneConfig};
pub use scheduler::FrameScheduler;
pub use store::ItemStore;

use perf_timer::PerfTimer;

/// The simulation engine
pub struct EngineCore {
    items: ItemStore,

    // Settings
    timestep: f32,
    gravity: bool,
    attraction: bool,
    box_width: f32,
    box_height: f32,

    // State
    time: f32,
    tick: u64,

    // Editor funnel
    commands: VecDeque<EngineCommand>,
    events: Vec<EngineEvent>,

    scheduler: FrameScheduler,

    // Perf metrics
    perf_enabled: bool,
    perf_stats: PerfStats,
}

impl EngineCore {
    /// Create an empty engine with default settings
    pub fn new() -> Self {
        init::create_engine_core(EngineSettings::default())
    }

    pub fn with_settings(settings: EngineSettings) -> EngineResult<Self> {
        settings.validate()?;
        Ok(init::create_engine_core(settings))
    }

    pub fn time(&self) -> f32 { self.time }

    pub fn tick_count(&self) -> u64 { self.tick }

    pub fn timestep(&self) -> f32 { self.timestep }

    pub fn gravity(&self) -> bool { self.gravity }

    pub fn attraction(&self) -> bool { self.attraction }

    pub fn box_width(&self) -> f32 { self.box_width }

    pub fn box_height(&self) -> f32 { self.box_height }

    pub fn settings(&self) -> EngineSettings {
        settings::current_settings(self)
    }

    pub fn set_gravity(&mut self, enabled: bool) {
        settings::set_gravity(self, enabled);
    }

    pub fn set_attraction(&mut self, enabled: bool) {
        settings::set_attraction(self, enabled);
    }

    pub fn set_timestep(&mut self, timestep: f32) -> EngineResult<()> {
        settings::set_timestep(self, timestep)
    }

    pub fn set_box(&mut self, width: f32, height: f32) -> EngineResult<()> {
        settings::set_box(self, width, height)
    }

    /// Enable or disable per-step perf metrics (adds timing overhead when enabled)
    pub fn enable_perf_metrics(&mut self, enabled: bool) {
        settings::enable_perf_metrics(self, enabled);
    }

    /// Get last step perf snapshot (zeros when perf disabled)
    pub fn get_perf_stats(&self) -> PerfStats {
        settings::get_perf_stats(self)
    }

    // === ENTITY API ===

    /// Add a body; returns its stable index
    pub fn add_item(&mut self, item: impl Into<Item>) -> EngineResult<usize> {
        commands::add_item(self, item.into())
    }

    /// Remove the body at `index`, leaving a hole
    pub fn remove_item(&mut self, index: usize) -> EngineResult<Item> {
        commands::remove_item(self, index)
    }

    pub fn get_item(&self, index: usize) -> EngineResult<&Item> {
        commands::get_item(self, index)
    }

    pub fn get_item_mut(&mut self, index: usize) -> EngineResult<&mut Item> {
        commands::get_item_mut(self, index)
    }

    /// All live bodies, dense order
    pub fn get_items(&self) -> impl Iterator<Item = &Item> + '_ {
        self.items.iter_live().map(|(_, item)| item)
    }

    /// Live bodies with their stable indices
    pub fn indexed_items(&self) -> impl Iterator<Item = (usize, &Item)> + '_ {
        self.items.iter_live()
    }

    pub fn item_count(&self) -> usize {
        self.items.len()
    }

    /// Key-based field edit used by the property editor.
    ///
    /// `Ok(false)` means the edit was rejected (and logged).
    pub fn edit_property(&mut self, name: &str, index: usize, value: PropertyValue) -> EngineResult<bool> {
        commands::edit_property(self, name, index, value)
    }

    pub fn set_selected(&mut self, index: usize, selected: bool) -> EngineResult<()> {
        commands::set_selected(self, index, selected)
    }

    /// Lowest index whose shape contains `point`
    pub fn item_at(&self, point: Vector) -> Option<usize> {
        commands::item_at(self, point)
    }

    pub fn collision_flag(&self, index: usize) -> bool {
        self.items.collision_flag(index)
    }

    /// Remove every body and reset the clock
    pub fn clear(&mut self) {
        commands::clear(self)
    }

    // === SCENES ===

    /// Replace settings and bodies from a scene JSON document
    pub fn load_scene_json(&mut self, json: &str) -> EngineResult<Vec<usize>> {
        scene::load_scene_json(self, json)
    }

    pub fn load_scene(&mut self, scene: &SceneConfig) -> EngineResult<Vec<usize>> {
        scene::load_scene(self, scene)
    }

    // === COMMAND QUEUE ===

    pub fn enqueue(&mut self, command: EngineCommand) {
        queue::enqueue(self, command)
    }

    pub fn enqueue_json(&mut self, json: &str) -> EngineResult<()> {
        queue::enqueue_json(self, json)
    }

    /// Apply queued commands in order; returns how many were applied
    pub fn flush_commands(&mut self) -> usize {
        queue::flush_commands(self)
    }

    pub fn take_events(&mut self) -> Vec<EngineEvent> {
        std::mem::take(&mut self.events)
    }

    // === STEPPING ===

    /// One fixed-timestep tick
    pub fn step(&mut self) {
        step::step(self);
    }

    /// Resolve wall and ball-ball collisions at the current positions
    pub fn process_all_collisions(&mut self) {
        step::process_all_collisions(self);
    }

    pub fn scheduler(&self) -> &FrameScheduler {
        &self.scheduler
    }

    pub fn scheduler_mut(&mut self) -> &mut FrameScheduler {
        &mut self.scheduler
    }

    /// Per rendered frame: flush editor commands, then run the scheduled ticks.
    /// Returns the number of ticks run.
    pub fn advance_frame(&mut self) -> u32 {
        self.flush_commands();
        if !self.scheduler.playing() {
            return 0;
        }
        let ticks = self.scheduler.take_ticks();
        for _ in 0..ticks {
            self.step();
        }
        ticks
    }

    // === RENDERING ===

    pub fn render_snapshot(&self) -> RenderSnapshot {
        render_extract::extract(self)
    }

    fn bounds(&self) -> Bounds {
        Bounds::new(self.box_width, self.box_height)
    }

    fn force_toggles(&self) -> ForceToggles {
        ForceToggles {
            gravity: self.gravity,
            attraction: self.attraction,
        }
    }
}

impl Default for EngineCore {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
#[path = "tests/tests.rs"]
mod tests;
