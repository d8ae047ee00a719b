use wasm_bindgen::prelude::*;

use crate::core::{EngineError, Vector};
use crate::systems::bodies::{CircleBody, PolygonBody};

use super::perf_stats::PerfStats;
use super::{EngineCore, PropertyValue, SceneConfig};

fn to_js(err: EngineError) -> JsValue {
    JsValue::from_str(&err.to_string())
}

/// JS-facing handle to the engine
#[wasm_bindgen]
pub struct Simulator {
    core: EngineCore,
}

#[wasm_bindgen]
impl Simulator {
    /// Create an empty simulator with default settings
    #[wasm_bindgen(constructor)]
    pub fn new() -> Self {
        Self { core: EngineCore::new() }
    }

    /// Simulator preloaded with the demo scene
    #[wasm_bindgen(js_name = withDemoScene)]
    pub fn with_demo_scene() -> Result<Simulator, JsValue> {
        let mut sim = Self::new();
        sim.core.load_scene(&SceneConfig::demo()).map_err(to_js)?;
        Ok(sim)
    }

    #[wasm_bindgen(getter)]
    pub fn time(&self) -> f32 { self.core.time() }

    #[wasm_bindgen(getter)]
    pub fn timestep(&self) -> f32 { self.core.timestep() }

    #[wasm_bindgen(getter, js_name = boxWidth)]
    pub fn box_width(&self) -> f32 { self.core.box_width() }

    #[wasm_bindgen(getter, js_name = boxHeight)]
    pub fn box_height(&self) -> f32 { self.core.box_height() }

    #[wasm_bindgen(getter)]
    pub fn gravity(&self) -> bool { self.core.gravity() }

    #[wasm_bindgen(getter)]
    pub fn attraction(&self) -> bool { self.core.attraction() }

    #[wasm_bindgen(getter, js_name = itemCount)]
    pub fn item_count(&self) -> usize { self.core.item_count() }

    #[wasm_bindgen(js_name = setGravity)]
    pub fn set_gravity(&mut self, enabled: bool) {
        self.core.set_gravity(enabled);
    }

    #[wasm_bindgen(js_name = setAttraction)]
    pub fn set_attraction(&mut self, enabled: bool) {
        self.core.set_attraction(enabled);
    }

    #[wasm_bindgen(js_name = setTimestep)]
    pub fn set_timestep(&mut self, timestep: f32) -> Result<(), JsValue> {
        self.core.set_timestep(timestep).map_err(to_js)
    }

    #[wasm_bindgen(js_name = setBox)]
    pub fn set_box(&mut self, width: f32, height: f32) -> Result<(), JsValue> {
        self.core.set_box(width, height).map_err(to_js)
    }

    /// Enable or disable per-step perf metrics (adds timing overhead when enabled)
    pub fn enable_perf_metrics(&mut self, enabled: bool) {
        self.core.enable_perf_metrics(enabled);
    }

    /// Get last step perf snapshot (zeros when perf disabled)
    pub fn get_perf_stats(&self) -> PerfStats {
        self.core.get_perf_stats()
    }

    #[wasm_bindgen(js_name = loadScene)]
    pub fn load_scene(&mut self, json: String) -> Result<Vec<u32>, JsValue> {
        let indices = self.core.load_scene_json(&json).map_err(to_js)?;
        Ok(indices.into_iter().map(|i| i as u32).collect())
    }

    // === ITEM API ===

    /// Add a ball; returns its stable index
    #[wasm_bindgen(js_name = addBall)]
    pub fn add_ball(
        &mut self,
        x: f32,
        y: f32,
        vx: f32,
        vy: f32,
        mass: f32,
        radius: f32,
        color: String,
    ) -> Result<u32, JsValue> {
        let ball = CircleBody::new(Vector::new(x, y), Vector::new(vx, vy), mass, radius, color);
        self.core.add_item(ball).map(|i| i as u32).map_err(to_js)
    }

    /// Add a polygon from a flat `[x0, y0, x1, y1, ...]` vertex list (body-local)
    #[wasm_bindgen(js_name = addPolygon)]
    pub fn add_polygon(
        &mut self,
        x: f32,
        y: f32,
        vx: f32,
        vy: f32,
        mass: f32,
        angle: f32,
        angular_velocity: f32,
        vertices: Vec<f32>,
        color: String,
    ) -> Result<u32, JsValue> {
        if vertices.len() % 2 != 0 {
            return Err(JsValue::from_str("vertex list must hold x,y pairs"));
        }
        let vertices = vertices.chunks_exact(2).map(|p| Vector::new(p[0], p[1])).collect();
        let poly = PolygonBody::new(
            Vector::new(x, y),
            Vector::new(vx, vy),
            mass,
            angle,
            angular_velocity,
            vertices,
            color,
        );
        self.core.add_item(poly).map(|i| i as u32).map_err(to_js)
    }

    #[wasm_bindgen(js_name = removeItem)]
    pub fn remove_item(&mut self, index: u32) -> Result<(), JsValue> {
        self.core.remove_item(index as usize).map(|_| ()).map_err(to_js)
    }

    #[wasm_bindgen(js_name = hasItem)]
    pub fn has_item(&self, index: u32) -> bool {
        self.core.get_item(index as usize).is_ok()
    }

    /// Numeric property edit; `false` when the edit was ignored
    #[wasm_bindgen(js_name = editNumber)]
    pub fn edit_number(&mut self, name: &str, index: u32, value: f32) -> Result<bool, JsValue> {
        self.core
            .edit_property(name, index as usize, PropertyValue::Number(value))
            .map_err(to_js)
    }

    #[wasm_bindgen(js_name = editColor)]
    pub fn edit_color(&mut self, index: u32, color: String) -> Result<bool, JsValue> {
        self.core
            .edit_property("color", index as usize, PropertyValue::Text(color))
            .map_err(to_js)
    }

    /// Index of the topmost-by-index item under a world point, or -1
    #[wasm_bindgen(js_name = itemAt)]
    pub fn item_at(&self, x: f32, y: f32) -> i32 {
        self.core
            .item_at(Vector::new(x, y))
            .map(|i| i as i32)
            .unwrap_or(-1)
    }

    #[wasm_bindgen(js_name = setSelected)]
    pub fn set_selected(&mut self, index: u32, selected: bool) -> Result<(), JsValue> {
        self.core.set_selected(index as usize, selected).map_err(to_js)
    }

    /// Clear all items
    pub fn clear(&mut self) {
        self.core.clear();
    }

    // === COMMANDS ===

    #[wasm_bindgen(js_name = enqueueCommand)]
    pub fn enqueue_command(&mut self, json: &str) -> Result<(), JsValue> {
        self.core.enqueue_json(json).map_err(to_js)
    }

    /// Drain pending editor events as a JSON array
    #[wasm_bindgen(js_name = takeEvents)]
    pub fn take_events(&mut self) -> String {
        let events = self.core.take_events();
        serde_json::to_string(&events).unwrap_or_else(|_| "[]".to_string())
    }

    // === STEPPING ===

    /// Step the simulation forward one tick
    pub fn step(&mut self) {
        self.core.step();
    }

    /// Flush commands and run this frame's ticks; returns ticks run
    #[wasm_bindgen(js_name = advanceFrame)]
    pub fn advance_frame(&mut self) -> u32 {
        self.core.advance_frame()
    }

    /// Set ticks per frame from the speed slider position
    #[wasm_bindgen(js_name = setSpeedSlider)]
    pub fn set_speed_slider(&mut self, slider: f32) {
        self.core.scheduler_mut().set_slider(slider);
    }

    #[wasm_bindgen(js_name = setTicksPerFrame)]
    pub fn set_ticks_per_frame(&mut self, rate: f32) {
        self.core.scheduler_mut().set_ticks_per_frame(rate);
    }

    #[wasm_bindgen(getter, js_name = ticksPerFrame)]
    pub fn ticks_per_frame(&self) -> f32 {
        self.core.scheduler().ticks_per_frame()
    }

    #[wasm_bindgen(js_name = togglePlay)]
    pub fn toggle_play(&mut self) -> bool {
        self.core.scheduler_mut().toggle_playing()
    }

    // === RENDERING ===

    #[wasm_bindgen(js_name = renderJson)]
    pub fn render_json(&self) -> String {
        self.core.render_snapshot().to_json()
    }
}

impl Default for Simulator {
    fn default() -> Self {
        Self::new()
    }
}
