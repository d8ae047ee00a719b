//! Collision detection and response
//!
//! - Walls: velocity reflection against the world box (any body shape).
//! - Pairs: elastic exchange between two balls. Pairs involving a polygon
//!   are not resolved.

mod pairs;
mod walls;

pub use pairs::resolve_elastic_pair;
pub use walls::{resolve_wall_collisions, Bounds};
