//! Force contributors: uniform gravity and pairwise Newtonian attraction

use crate::core::vector::{add, mag_sq, scale, sub};
use crate::core::Vector;
use crate::domain::constants::BIG_G;
use crate::systems::bodies::Item;

/// Which force terms are active this tick
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct ForceToggles {
    pub gravity: bool,
    pub attraction: bool,
}

/// Uniform downward gravity: F = (0, -m), i.e. g = 1 m/s²
#[inline]
pub fn gravity_force(item: &Item, enabled: bool) -> Vector {
    if enabled {
        Vector::new(0.0, -item.mass())
    } else {
        Vector::zero()
    }
}

/// Sum of G·mA·mB/d³·(posB − posA) over every other live slot.
///
/// `slots` is the sparse store; `index` is the slot of `item`. Coincident
/// bodies contribute nothing.
pub fn attraction_force(index: usize, item: &Item, slots: &[Option<Item>]) -> Vector {
    let mut force = Vector::zero();
    for (j, other) in slots.iter().enumerate() {
        let Some(other) = other else {
            continue;
        };
        if j == index {
            continue;
        }
        let diff = sub(other.position(), item.position());
        let dist_sq = mag_sq(diff);
        if dist_sq == 0.0 {
            continue;
        }
        let dist = dist_sq.sqrt();
        let strength = BIG_G * item.mass() * other.mass() / (dist * dist * dist);
        force = add(force, scale(diff, strength));
    }
    force
}

/// Net external force on the item in `slots[index]`
pub fn net_force(index: usize, item: &Item, slots: &[Option<Item>], toggles: ForceToggles) -> Vector {
    let mut force = gravity_force(item, toggles.gravity);
    if toggles.attraction {
        force = add(force, attraction_force(index, item, slots));
    }
    force
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::systems::bodies::CircleBody;

    fn ball(x: f32, y: f32, mass: f32) -> Option<Item> {
        Some(CircleBody::new(Vector::new(x, y), Vector::zero(), mass, 1.0, "red").into())
    }

    #[test]
    fn gravity_scales_with_mass() {
        let item = ball(0.0, 0.0, 4.0).unwrap();
        assert_eq!(gravity_force(&item, true), Vector::new(0.0, -4.0));
        assert_eq!(gravity_force(&item, false), Vector::zero());
    }

    #[test]
    fn attraction_skips_holes_and_self() {
        let slots = vec![ball(0.0, 0.0, 1e13), None, ball(50.0, 0.0, 1e13)];
        let a = slots[0].as_ref().unwrap();
        let f = attraction_force(0, a, &slots);

        let expected = BIG_G * 1e13 * 1e13 / (50.0 * 50.0);
        assert!((f.x - expected).abs() / expected < 1e-5);
        assert_eq!(f.y, 0.0);
    }

    #[test]
    fn coincident_bodies_add_no_force() {
        let slots = vec![ball(3.0, 3.0, 10.0), ball(3.0, 3.0, 10.0)];
        let a = slots[0].as_ref().unwrap();
        assert_eq!(attraction_force(0, a, &slots), Vector::zero());
    }

    #[test]
    fn net_force_combines_terms() {
        let slots = vec![ball(0.0, 0.0, 1e13), ball(0.0, 50.0, 1e13)];
        let a = slots[0].as_ref().unwrap();
        let toggles = ForceToggles { gravity: true, attraction: true };
        let f = net_force(0, a, &slots, toggles);
        let pull = BIG_G * 1e13 * 1e13 / 2500.0;
        assert!((f.y - (pull - 1e13)).abs() / 1e13 < 1e-5);
    }
}
