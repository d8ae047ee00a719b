//! Orbitbox Engine - 2D rigid-body sandbox physics in WASM
//!
//! Architecture:
//! - core/        - Vector math, errors, logging
//! - domain/      - Constants and engine settings
//! - systems/     - Bodies, collisions, forces
//! - simulation/  - Engine core, stepping, editor commands, JS facade

// Logging macros (must be first for macro export!)
#[macro_use]
pub mod core;
pub mod domain;
pub mod systems;
pub mod simulation;

// Compatibility re-exports
pub use domain::constants;
pub use systems::bodies;
pub use systems::collision;
pub use systems::forces;

use wasm_bindgen::prelude::*;

#[doc(hidden)]
pub mod __private {
    pub use tracing;
    pub use wasm_bindgen;
    pub use web_sys;
}

// Re-export wasm-bindgen-rayon for thread pool initialization
#[cfg(all(feature = "parallel", target_arch = "wasm32"))]
pub use wasm_bindgen_rayon::init_thread_pool;

// Better error messages in debug mode
#[cfg(feature = "console_error_panic_hook")]
pub fn set_panic_hook() {
    console_error_panic_hook::set_once();
}

/// Initialize the engine
#[wasm_bindgen]
pub fn init() {
    #[cfg(feature = "console_error_panic_hook")]
    set_panic_hook();

    engine_log!("Orbitbox engine {} initialized", env!("CARGO_PKG_VERSION"));
}

/// Get engine version
#[wasm_bindgen]
pub fn version() -> String {
    env!("CARGO_PKG_VERSION").to_string()
}

// Re-export main types
pub use crate::core::{EngineError, EngineResult, Vector};
pub use bodies::{CircleBody, Item, PolygonBody, ShapeKind};
pub use domain::settings::EngineSettings;
pub use simulation::{
    EngineCommand, EngineCore, EngineEvent, FrameScheduler, PropertyValue, RenderSnapshot, SceneConfig, Simulator,
};

/// Newtonian gravitational constant, for JS display
#[wasm_bindgen]
pub fn big_g() -> f32 { constants::BIG_G }
