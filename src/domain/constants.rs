//! Physical constants and engine defaults

use crate::core::Vector;

/// Newtonian gravitational constant (m³ kg⁻¹ s⁻²)
pub const BIG_G: f32 = 6.674e-11;

/// Simulated seconds per tick. Large relative to the frame rate, the UI
/// runs several ticks per rendered frame.
pub const DEFAULT_TIMESTEP: f32 = 0.1967;

pub const DEFAULT_BOX_WIDTH: f32 = 500.0;
pub const DEFAULT_BOX_HEIGHT: f32 = 200.0;

// Default ball (matches the editor's "new ball" form when fields are blank)
pub const DEFAULT_BALL_POSITION: Vector = Vector::new(6.0, 6.0);
pub const DEFAULT_BALL_VELOCITY: Vector = Vector::new(2.0, 3.0);
pub const DEFAULT_BALL_MASS: f32 = 5.0;
pub const DEFAULT_BALL_RADIUS: f32 = 2.0;
pub const DEFAULT_COLOR: &str = "black";

/// Steepness of the speed slider curve (see `FrameScheduler`)
pub const SPEED_CURVE: f32 = 3.0;
