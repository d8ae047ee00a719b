use serde::{Deserialize, Serialize};

use crate::core::{EngineError, EngineResult, Vector};
use crate::domain::constants::{
    DEFAULT_BALL_MASS, DEFAULT_BALL_POSITION, DEFAULT_BALL_RADIUS, DEFAULT_BALL_VELOCITY, DEFAULT_COLOR,
};
use crate::domain::settings::EngineSettings;
use crate::systems::bodies::{CircleBody, Item, PolygonBody};

use super::settings::apply_settings;
use super::{EngineCore, ItemStore};

/// Scene document: engine settings plus the initial bodies
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SceneConfig {
    #[serde(default)]
    pub settings: EngineSettings,
    #[serde(default)]
    pub items: Vec<ItemSpec>,
}

/// Body description used by scenes and by the `addItem` command
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "camelCase")]
pub enum ItemSpec {
    #[serde(rename_all = "camelCase")]
    Circle {
        #[serde(default = "default_position")]
        position: Vector,
        #[serde(default = "default_velocity")]
        velocity: Vector,
        #[serde(default = "default_mass")]
        mass: f32,
        #[serde(default = "default_radius")]
        radius: f32,
        #[serde(default = "default_color")]
        color: String,
    },
    #[serde(rename_all = "camelCase")]
    Polygon {
        #[serde(default = "default_position")]
        position: Vector,
        #[serde(default = "default_velocity")]
        velocity: Vector,
        #[serde(default = "default_mass")]
        mass: f32,
        #[serde(default)]
        angle: f32,
        #[serde(default)]
        angular_velocity: f32,
        vertices: Vec<Vector>,
        #[serde(default = "default_color")]
        color: String,
    },
}

fn default_position() -> Vector { DEFAULT_BALL_POSITION }
fn default_velocity() -> Vector { DEFAULT_BALL_VELOCITY }
fn default_mass() -> f32 { DEFAULT_BALL_MASS }
fn default_radius() -> f32 { DEFAULT_BALL_RADIUS }
fn default_color() -> String { DEFAULT_COLOR.to_string() }

impl ItemSpec {
    pub fn into_item(self) -> Item {
        match self {
            ItemSpec::Circle { position, velocity, mass, radius, color } => {
                CircleBody::new(position, velocity, mass, radius, color).into()
            }
            ItemSpec::Polygon { position, velocity, mass, angle, angular_velocity, vertices, color } => {
                PolygonBody::new(position, velocity, mass, angle, angular_velocity, vertices, color).into()
            }
        }
    }
}

impl SceneConfig {
    pub fn from_json(json: &str) -> EngineResult<Self> {
        serde_json::from_str(json).map_err(|e| EngineError::Scene(e.to_string()))
    }

    pub fn to_json(&self) -> String {
        serde_json::to_string(self).unwrap_or_else(|_| "{}".to_string())
    }

    /// Two balls on a head-on course, no gravity, mutual attraction on
    pub fn demo() -> Self {
        Self {
            settings: EngineSettings {
                gravity: false,
                attraction: true,
                ..EngineSettings::default()
            },
            items: vec![
                ItemSpec::Circle {
                    position: Vector::new(150.0, 100.0),
                    velocity: Vector::new(20.0, 0.0),
                    mass: 5.0,
                    radius: 5.0,
                    color: "#FF0000".to_string(),
                },
                ItemSpec::Circle {
                    position: Vector::new(200.0, 100.0),
                    velocity: Vector::new(-20.0, 0.0),
                    mass: 5.0,
                    radius: 5.0,
                    color: "#0000FF".to_string(),
                },
            ],
        }
    }
}

pub(super) fn load_scene_json(engine: &mut EngineCore, json: &str) -> EngineResult<Vec<usize>> {
    let scene = SceneConfig::from_json(json)?;
    load_scene(engine, &scene)
}

/// Replaces settings and bodies. Everything is validated up front so a bad
/// scene leaves the engine untouched.
pub(super) fn load_scene(engine: &mut EngineCore, scene: &SceneConfig) -> EngineResult<Vec<usize>> {
    scene.settings.validate()?;

    let mut staged = EngineCore::with_settings(scene.settings.clone())?;
    let mut indices = Vec::with_capacity(scene.items.len());
    for (n, spec) in scene.items.iter().enumerate() {
        let index = staged
            .add_item(spec.clone().into_item())
            .map_err(|e| EngineError::Scene(format!("item {}: {}", n, e)))?;
        indices.push(index);
    }

    apply_settings(engine, &scene.settings);
    engine.items = std::mem::replace(&mut staged.items, ItemStore::new());
    engine.time = 0.0;
    engine.tick = 0;
    engine.commands.clear();

    engine_log!("loaded scene with {} items", indices.len());
    Ok(indices)
}
