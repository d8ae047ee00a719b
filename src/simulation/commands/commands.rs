use serde::{Deserialize, Serialize};

use crate::core::error::{check_mass, check_radius};
use crate::core::{EngineError, EngineResult, Vector};
use crate::systems::bodies::Item;

use super::EngineCore;

/// Value sent by the property editor: numeric fields or a color string
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum PropertyValue {
    Number(f32),
    Text(String),
}

impl PropertyValue {
    /// Numeric view; form fields may send numbers as strings
    fn as_number(&self) -> Option<f32> {
        match self {
            PropertyValue::Number(v) => Some(*v),
            PropertyValue::Text(s) => s.trim().parse::<f32>().ok().filter(|v| v.is_finite()),
        }
    }
}

impl From<f32> for PropertyValue {
    fn from(v: f32) -> Self {
        PropertyValue::Number(v)
    }
}

impl From<&str> for PropertyValue {
    fn from(v: &str) -> Self {
        PropertyValue::Text(v.to_string())
    }
}

impl From<String> for PropertyValue {
    fn from(v: String) -> Self {
        PropertyValue::Text(v)
    }
}

pub(super) fn add_item(engine: &mut EngineCore, item: Item) -> EngineResult<usize> {
    check_mass(item.mass())?;
    if let Item::Circle(ball) = &item {
        check_radius(ball.radius)?;
    }
    Ok(engine.items.insert(item))
}

pub(super) fn remove_item(engine: &mut EngineCore, index: usize) -> EngineResult<Item> {
    let item = engine.items.remove(index).ok_or(EngineError::NotFound(index))?;
    engine_log!("removed item {} ({})", index, item.kind().as_str());
    Ok(item)
}

pub(super) fn get_item(engine: &EngineCore, index: usize) -> EngineResult<&Item> {
    engine.items.get(index).ok_or(EngineError::NotFound(index))
}

pub(super) fn get_item_mut(engine: &mut EngineCore, index: usize) -> EngineResult<&mut Item> {
    engine.items.get_mut(index).ok_or(EngineError::NotFound(index))
}

pub(super) fn edit_property(
    engine: &mut EngineCore,
    name: &str,
    index: usize,
    value: PropertyValue,
) -> EngineResult<bool> {
    let item = engine.items.get_mut(index).ok_or_else(|| {
        engine_error!("cannot edit '{}' of missing item {}", name, index);
        EngineError::NotFound(index)
    })?;

    if name == "color" {
        return Ok(match value {
            PropertyValue::Text(color) => {
                item.set_color(color);
                true
            }
            PropertyValue::Number(_) => reject(name, index, "color must be a string"),
        });
    }

    let Some(v) = value.as_number() else {
        return Ok(reject(name, index, "expected a number"));
    };

    let applied = match name {
        "mass" => {
            if check_mass(v).is_err() {
                return Ok(reject(name, index, "mass must be positive"));
            }
            item.set_mass(v);
            true
        }
        "positionX" => {
            item.position_mut().x = v;
            true
        }
        "positionY" => {
            item.position_mut().y = v;
            true
        }
        "velocityX" => {
            item.velocity_mut().x = v;
            true
        }
        "velocityY" => {
            item.velocity_mut().y = v;
            true
        }
        "radius" => match item.as_circle_mut() {
            Some(_) if check_radius(v).is_err() => reject(name, index, "radius must be positive"),
            Some(ball) => {
                ball.set_radius(v);
                true
            }
            None => reject(name, index, "cannot set radius of non-ball object"),
        },
        "angle" => match item.as_polygon_mut() {
            Some(poly) => {
                poly.angle = v;
                true
            }
            None => reject(name, index, "only polygons have an angle"),
        },
        "angularVelocity" => match item.as_polygon_mut() {
            Some(poly) => {
                poly.angular_velocity = v;
                true
            }
            None => reject(name, index, "only polygons have an angular velocity"),
        },
        _ => reject(name, index, "unknown property"),
    };

    Ok(applied)
}

fn reject(name: &str, index: usize, reason: &str) -> bool {
    engine_warn!("ignored edit of '{}' on item {}: {}", name, index, reason);
    false
}

pub(super) fn set_selected(engine: &mut EngineCore, index: usize, selected: bool) -> EngineResult<()> {
    get_item_mut(engine, index)?.set_selected(selected);
    Ok(())
}

pub(super) fn item_at(engine: &EngineCore, point: Vector) -> Option<usize> {
    engine
        .items
        .slots()
        .iter()
        .enumerate()
        .find_map(|(i, slot)| match slot {
            Some(item) if item.contains_point(point) => Some(i),
            _ => None,
        })
}

pub(super) fn clear(engine: &mut EngineCore) {
    engine.items.clear();
    engine.time = 0.0;
    engine.tick = 0;
}
