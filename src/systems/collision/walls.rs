use crate::core::Vector;
use crate::systems::bodies::Item;

/// Axis-aligned world box `[0, width] × [0, height]`
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Bounds {
    pub width: f32,
    pub height: f32,
}

impl Bounds {
    pub fn new(width: f32, height: f32) -> Self {
        Self { width, height }
    }
}

/// Reflect the velocity component pointing into any wall the item touches.
///
/// A wall counts as touched when the shape intersects its edge segment or
/// the center has drifted past it. Components already pointing away are left
/// alone, so a second pass in the same tick is a no-op. Returns true when at
/// least one component was reflected.
pub fn resolve_wall_collisions(item: &mut Item, bounds: Bounds) -> bool {
    let box00 = Vector::new(0.0, 0.0);
    let box01 = Vector::new(0.0, bounds.height);
    let box10 = Vector::new(bounds.width, 0.0);
    let box11 = Vector::new(bounds.width, bounds.height);

    let pos = item.position();
    let bottom = item.intersects_segment(box00, box10) || pos.y < 0.0;
    let top = item.intersects_segment(box01, box11) || pos.y > bounds.height;
    let left = item.intersects_segment(box00, box01) || pos.x < 0.0;
    let right = item.intersects_segment(box10, box11) || pos.x > bounds.width;

    let vel = item.velocity_mut();
    let mut collided = false;

    if bottom && vel.y < 0.0 {
        vel.y = -vel.y;
        collided = true;
    }
    if top && vel.y > 0.0 {
        vel.y = -vel.y;
        collided = true;
    }
    if left && vel.x < 0.0 {
        vel.x = -vel.x;
        collided = true;
    }
    if right && vel.x > 0.0 {
        vel.x = -vel.x;
        collided = true;
    }

    collided
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::systems::bodies::{CircleBody, PolygonBody};

    fn ball(pos: Vector, vel: Vector) -> Item {
        CircleBody::new(pos, vel, 1.0, 2.0, "red").into()
    }

    #[test]
    fn floor_hit_reflects_once() {
        let bounds = Bounds::new(500.0, 200.0);
        let mut item = ball(Vector::new(50.0, 0.0), Vector::new(1.0, -5.0));

        assert!(resolve_wall_collisions(&mut item, bounds));
        assert_eq!(item.velocity(), Vector::new(1.0, 5.0));

        // Already moving away: no second flip
        assert!(!resolve_wall_collisions(&mut item, bounds));
        assert_eq!(item.velocity(), Vector::new(1.0, 5.0));
    }

    #[test]
    fn drift_past_wall_is_caught() {
        // Far outside on the right; no segment intersection, raw position check wins
        let bounds = Bounds::new(100.0, 100.0);
        let mut item = ball(Vector::new(150.0, 50.0), Vector::new(3.0, 0.0));
        assert!(resolve_wall_collisions(&mut item, bounds));
        assert_eq!(item.velocity(), Vector::new(-3.0, 0.0));
    }

    #[test]
    fn corner_reflects_both_axes() {
        let bounds = Bounds::new(100.0, 100.0);
        let mut item = ball(Vector::new(1.0, 1.0), Vector::new(-2.0, -3.0));
        assert!(resolve_wall_collisions(&mut item, bounds));
        assert_eq!(item.velocity(), Vector::new(2.0, 3.0));
    }

    #[test]
    fn interior_body_untouched() {
        let bounds = Bounds::new(100.0, 100.0);
        let mut item = ball(Vector::new(50.0, 50.0), Vector::new(-2.0, -3.0));
        assert!(!resolve_wall_collisions(&mut item, bounds));
        assert_eq!(item.velocity(), Vector::new(-2.0, -3.0));
    }

    #[test]
    fn polygon_edge_against_ceiling() {
        let bounds = Bounds::new(100.0, 100.0);
        let square = vec![
            Vector::new(-2.0, -2.0),
            Vector::new(2.0, -2.0),
            Vector::new(2.0, 2.0),
            Vector::new(-2.0, 2.0),
        ];
        let mut item: Item =
            PolygonBody::new(Vector::new(50.0, 99.0), Vector::new(0.0, 4.0), 1.0, 0.0, 0.0, square, "blue").into();
        assert!(resolve_wall_collisions(&mut item, bounds));
        assert_eq!(item.velocity(), Vector::new(0.0, -4.0));
    }
}
