use crate::core::Vector;
use crate::systems::collision::{resolve_elastic_pair, resolve_wall_collisions};
use crate::systems::forces::{net_force, ForceToggles};

use super::{EngineCore, ItemStore, PerfTimer};

/// Below this many slots the force pass stays on the calling thread.
#[cfg(feature = "parallel")]
const PARALLEL_FORCE_THRESHOLD: usize = 64;

#[derive(Clone, Copy, Default)]
pub(super) struct CollisionCounts {
    pub(super) wall_hits: u32,
    pub(super) pair_hits: u32,
}

pub(super) fn step(engine: &mut EngineCore) {
    let perf_on = engine.perf_enabled;
    if perf_on {
        engine.perf_stats.reset();
        engine.perf_stats.live_items = engine.items.len() as u32;
    }
    let step_start = perf_on.then(PerfTimer::start);

    // === 1. KINEMATICS ===
    let t0 = perf_on.then(PerfTimer::start);
    integrate_positions(engine);
    if let Some(t) = t0 {
        engine.perf_stats.integrate_ms = t.elapsed_ms();
    }

    // === 2. COLLISIONS ===
    let t0 = perf_on.then(PerfTimer::start);
    let counts = process_all_collisions(engine);
    if let Some(t) = t0 {
        engine.perf_stats.collisions_ms = t.elapsed_ms();
        engine.perf_stats.wall_hits = counts.wall_hits;
        engine.perf_stats.pair_hits = counts.pair_hits;
    }

    // === 3. FORCES ===
    // Bodies that collided this tick skip force integration entirely.
    let t0 = perf_on.then(PerfTimer::start);
    integrate_forces(engine);
    if let Some(t) = t0 {
        engine.perf_stats.forces_ms = t.elapsed_ms();
    }

    // === 4. CLOCK ===
    engine.time += engine.timestep;
    engine.tick += 1;

    if let Some(t) = step_start {
        engine.perf_stats.step_ms = t.elapsed_ms();
    }
}

fn integrate_positions(engine: &mut EngineCore) {
    let dt = engine.timestep;
    engine.items.reset_collision_flags();
    for item in engine.items.slots_mut().iter_mut().flatten() {
        item.integrate_position(dt);
    }
}

/// Walls for every body, then every later ball against it, in slot order.
pub(super) fn process_all_collisions(engine: &mut EngineCore) -> CollisionCounts {
    let bounds = engine.bounds();
    let slot_count = engine.items.slot_count();
    let mut counts = CollisionCounts::default();

    for i in 0..slot_count {
        let Some(item) = engine.items.get_mut(i) else {
            continue;
        };
        if resolve_wall_collisions(item, bounds) {
            engine.items.set_collision_flag(i);
            counts.wall_hits += 1;
        }

        for j in (i + 1)..slot_count {
            let Some((a, b)) = engine.items.circle_pair_mut(i, j) else {
                continue;
            };
            if resolve_elastic_pair(a, b) {
                engine.items.set_collision_flag(i);
                engine.items.set_collision_flag(j);
                counts.pair_hits += 1;
            }
        }
    }

    counts
}

fn integrate_forces(engine: &mut EngineCore) {
    let dt = engine.timestep;
    let toggles = engine.force_toggles();

    // Forces read only positions and masses, so evaluate them all before
    // touching any velocity.
    let deltas = velocity_deltas(&engine.items, toggles, dt);

    for (index, dv) in deltas {
        if let Some(item) = engine.items.get_mut(index) {
            *item.velocity_mut() += dv;
        }
    }
}

/// Δv = F/m · dt for one slot, or `None` if the slot is empty, collided this
/// tick, or has no usable mass.
fn velocity_delta(items: &ItemStore, index: usize, toggles: ForceToggles, dt: f32) -> Option<(usize, Vector)> {
    if items.collision_flag(index) {
        return None;
    }
    let item = items.get(index)?;
    let mass = item.mass();
    if mass.is_nan() || mass <= 0.0 {
        return None;
    }
    let force = net_force(index, item, items.slots(), toggles);
    let acceleration = force * (1.0 / mass);
    Some((index, acceleration * dt))
}

#[cfg(feature = "parallel")]
fn velocity_deltas(items: &ItemStore, toggles: ForceToggles, dt: f32) -> Vec<(usize, Vector)> {
    use rayon::prelude::*;

    let n = items.slot_count();
    if n < PARALLEL_FORCE_THRESHOLD {
        return (0..n).filter_map(|i| velocity_delta(items, i, toggles, dt)).collect();
    }
    (0..n)
        .into_par_iter()
        .filter_map(|i| velocity_delta(items, i, toggles, dt))
        .collect()
}

#[cfg(not(feature = "parallel"))]
fn velocity_deltas(items: &ItemStore, toggles: ForceToggles, dt: f32) -> Vec<(usize, Vector)> {
    (0..items.slot_count())
        .filter_map(|i| velocity_delta(items, i, toggles, dt))
        .collect()
}
