use wasm_bindgen::prelude::*;

#[wasm_bindgen]
#[derive(Clone, Debug, Default)]
pub struct PerfStats {
    pub(super) step_ms: f64,
    pub(super) integrate_ms: f64,
    pub(super) collisions_ms: f64,
    pub(super) forces_ms: f64,
    pub(super) wall_hits: u32,
    pub(super) pair_hits: u32,
    pub(super) live_items: u32,
}

impl PerfStats {
    pub(crate) fn reset(&mut self) {
        *self = PerfStats::default();
    }
}

#[wasm_bindgen]
impl PerfStats {
    #[wasm_bindgen(getter)]
    pub fn step_ms(&self) -> f64 { self.step_ms }
    #[wasm_bindgen(getter)]
    pub fn integrate_ms(&self) -> f64 { self.integrate_ms }
    #[wasm_bindgen(getter)]
    pub fn collisions_ms(&self) -> f64 { self.collisions_ms }
    #[wasm_bindgen(getter)]
    pub fn forces_ms(&self) -> f64 { self.forces_ms }
    #[wasm_bindgen(getter)]
    pub fn wall_hits(&self) -> u32 { self.wall_hits }
    #[wasm_bindgen(getter)]
    pub fn pair_hits(&self) -> u32 { self.pair_hits }
    #[wasm_bindgen(getter)]
    pub fn live_items(&self) -> u32 { self.live_items }
}
