//! Bodies - the shapes the engine simulates
//!
//! Each body stores its shape in local coordinates (relative to its center)
//! and exposes the capability set the engine and the UI rely on: position,
//! velocity, mass, selection, point containment, segment intersection and an
//! enclosing radius.

mod circle;
pub mod geometry;
mod item;
mod polygon;

pub use circle::CircleBody;
pub use item::{Item, ShapeKind};
pub use polygon::PolygonBody;
