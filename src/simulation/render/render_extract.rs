use serde::Serialize;

use crate::core::Vector;
use crate::systems::bodies::Item;

use super::EngineCore;

/// Everything the canvas renderer needs for one frame
#[derive(Clone, Debug, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct RenderSnapshot {
    pub box_width: f32,
    pub box_height: f32,
    pub time: f32,
    pub items: Vec<RenderItem>,
}

#[derive(Clone, Debug, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct RenderItem {
    pub index: usize,
    pub kind: &'static str,
    pub position: Vector,
    pub angle: f32,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub radius: Option<f32>,
    /// World-space outline (polygons only)
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub vertices: Vec<Vector>,
    pub color: String,
    pub selected: bool,
}

impl RenderSnapshot {
    pub fn to_json(&self) -> String {
        serde_json::to_string(self).unwrap_or_else(|_| "{}".to_string())
    }
}

fn render_item(index: usize, item: &Item) -> RenderItem {
    let (angle, radius, vertices) = match item {
        Item::Circle(c) => (0.0, Some(c.radius), Vec::new()),
        Item::Polygon(p) => (p.angle, None, p.world_vertices()),
    };
    RenderItem {
        index,
        kind: item.kind().as_str(),
        position: item.position(),
        angle,
        radius,
        vertices,
        color: item.color().to_string(),
        selected: item.selected(),
    }
}

/// Dense-order snapshot of all live bodies
pub(super) fn extract(engine: &EngineCore) -> RenderSnapshot {
    RenderSnapshot {
        box_width: engine.box_width,
        box_height: engine.box_height,
        time: engine.time,
        items: engine
            .items
            .iter_live()
            .map(|(index, item)| render_item(index, item))
            .collect(),
    }
}
