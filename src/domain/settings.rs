use serde::{Deserialize, Serialize};

use crate::core::{EngineError, EngineResult};

use super::constants::{DEFAULT_BOX_HEIGHT, DEFAULT_BOX_WIDTH, DEFAULT_TIMESTEP};

/// Engine configuration: fixed timestep, force toggles and world box.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct EngineSettings {
    pub timestep: f32,
    pub gravity: bool,
    pub attraction: bool,
    pub box_width: f32,
    pub box_height: f32,
}

impl Default for EngineSettings {
    fn default() -> Self {
        Self {
            timestep: DEFAULT_TIMESTEP,
            gravity: true,
            attraction: false,
            box_width: DEFAULT_BOX_WIDTH,
            box_height: DEFAULT_BOX_HEIGHT,
        }
    }
}

impl EngineSettings {
    pub fn validate(&self) -> EngineResult<()> {
        check_timestep(self.timestep)?;
        check_box(self.box_width, self.box_height)
    }
}

pub(crate) fn check_timestep(timestep: f32) -> EngineResult<()> {
    if timestep.is_finite() && timestep > 0.0 {
        Ok(())
    } else {
        Err(EngineError::InvalidTimestep(timestep))
    }
}

pub(crate) fn check_box(width: f32, height: f32) -> EngineResult<()> {
    let ok = |v: f32| v.is_finite() && v > 0.0;
    if ok(width) && ok(height) {
        Ok(())
    } else {
        Err(EngineError::InvalidBox { width, height })
    }
}
