use thiserror::Error;

/// Errors surfaced by the engine core.
///
/// Rejected property edits are not errors: they are logged and reported as
/// `Ok(false)` by `EngineCore::edit_property`.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum EngineError {
    #[error("item {0} does not exist")]
    NotFound(usize),

    #[error("mass must be positive and finite (got {0})")]
    InvalidMass(f32),

    #[error("radius must be positive and finite (got {0})")]
    InvalidRadius(f32),

    #[error("timestep must be positive and finite (got {0})")]
    InvalidTimestep(f32),

    #[error("box dimensions must be positive and finite (got {width}x{height})")]
    InvalidBox { width: f32, height: f32 },

    #[error("invalid scene: {0}")]
    Scene(String),

    #[error("invalid command: {0}")]
    Command(String),
}

pub type EngineResult<T> = Result<T, EngineError>;

/// Checks a mass value before it reaches any `1 / mass`.
pub(crate) fn check_mass(mass: f32) -> EngineResult<f32> {
    if mass.is_finite() && mass > 0.0 {
        Ok(mass)
    } else {
        Err(EngineError::InvalidMass(mass))
    }
}

pub(crate) fn check_radius(radius: f32) -> EngineResult<f32> {
    if radius.is_finite() && radius > 0.0 {
        Ok(radius)
    } else {
        Err(EngineError::InvalidRadius(radius))
    }
}
