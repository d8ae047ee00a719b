use crate::core::vector::{add, dot, mag_sq, scale, sub};
use crate::systems::bodies::CircleBody;

/// 1-D elastic collision between two balls along the line of centers.
///
/// Only approaching, touching pairs with positive masses are resolved. Tangential velocity is
/// untouched; momentum and kinetic energy along the normal are conserved.
/// Returns true when the velocities were exchanged.
pub fn resolve_elastic_pair(a: &mut CircleBody, b: &mut CircleBody) -> bool {
    let diff = sub(a.position, b.position);
    // Separating (or at rest relative to each other)
    if dot(diff, sub(a.velocity, b.velocity)) > 0.0 {
        return false;
    }

    let dist_sq = mag_sq(diff);
    // Coincident centers have no collision normal
    if dist_sq == 0.0 {
        return false;
    }
    let distance = dist_sq.sqrt();
    if distance > a.radius + b.radius {
        return false;
    }

    let normal = scale(diff, 1.0 / distance);
    let v1 = dot(a.velocity, normal);
    let v2 = dot(b.velocity, normal);

    let m1 = a.mass;
    let m2 = b.mass;
    if !(m1 > 0.0 && m2 > 0.0) {
        return false;
    }
    let u1 = (v1 * (m1 - m2) + 2.0 * m2 * v2) / (m1 + m2);
    let u2 = (v2 * (m2 - m1) + 2.0 * m1 * v1) / (m1 + m2);

    a.velocity = add(a.velocity, scale(normal, u1 - v1));
    b.velocity = add(b.velocity, scale(normal, u2 - v2));
    true
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::Vector;

    fn ball(x: f32, y: f32, vx: f32, vy: f32, mass: f32, r: f32) -> CircleBody {
        CircleBody::new(Vector::new(x, y), Vector::new(vx, vy), mass, r, "red")
    }

    #[test]
    fn equal_masses_swap_normal_velocity() {
        let mut a = ball(10.0, 10.0, 1.0, 0.0, 5.0, 2.0);
        let mut b = ball(14.0, 10.0, -1.0, 0.0, 5.0, 2.0);
        assert!(resolve_elastic_pair(&mut a, &mut b));
        assert_eq!(a.velocity, Vector::new(-1.0, 0.0));
        assert_eq!(b.velocity, Vector::new(1.0, 0.0));
    }

    #[test]
    fn tangential_component_survives() {
        let mut a = ball(10.0, 10.0, 1.0, 2.0, 5.0, 2.0);
        let mut b = ball(13.0, 10.0, -1.0, -3.0, 5.0, 2.0);
        assert!(resolve_elastic_pair(&mut a, &mut b));
        assert_eq!(a.velocity, Vector::new(-1.0, 2.0));
        assert_eq!(b.velocity, Vector::new(1.0, -3.0));
    }

    #[test]
    fn separating_pair_is_ignored() {
        let mut a = ball(10.0, 10.0, -1.0, 0.0, 5.0, 2.0);
        let mut b = ball(13.0, 10.0, 1.0, 0.0, 5.0, 2.0);
        assert!(!resolve_elastic_pair(&mut a, &mut b));
        assert_eq!(a.velocity, Vector::new(-1.0, 0.0));
    }

    #[test]
    fn distant_pair_is_ignored() {
        let mut a = ball(0.0, 0.0, 1.0, 0.0, 5.0, 2.0);
        let mut b = ball(10.0, 0.0, -1.0, 0.0, 5.0, 2.0);
        assert!(!resolve_elastic_pair(&mut a, &mut b));
    }

    #[test]
    fn coincident_centers_are_skipped() {
        let mut a = ball(5.0, 5.0, 1.0, 0.0, 5.0, 2.0);
        let mut b = ball(5.0, 5.0, 1.0, 0.0, 5.0, 2.0);
        assert!(!resolve_elastic_pair(&mut a, &mut b));
        assert!(a.velocity.x.is_finite());
    }

    #[test]
    fn massless_pair_is_skipped() {
        let mut a = ball(10.0, 10.0, 1.0, 0.0, 0.0, 2.0);
        let mut b = ball(14.0, 10.0, -1.0, 0.0, 0.0, 2.0);
        assert!(!resolve_elastic_pair(&mut a, &mut b));
        assert_eq!(a.velocity, Vector::new(1.0, 0.0));
        assert_eq!(b.velocity, Vector::new(-1.0, 0.0));

        let mut c = ball(14.0, 10.0, -1.0, 0.0, f32::NAN, 2.0);
        let mut d = ball(10.0, 10.0, 1.0, 0.0, 5.0, 2.0);
        assert!(!resolve_elastic_pair(&mut d, &mut c));
        assert_eq!(d.velocity, Vector::new(1.0, 0.0));
    }

    #[test]
    fn unequal_masses_conserve_momentum_and_energy() {
        let mut a = ball(0.0, 0.0, 3.0, 1.0, 2.0, 1.5);
        let mut b = ball(2.0, 1.0, -1.0, 0.5, 7.0, 1.5);

        let p0 = a.velocity * a.mass + b.velocity * b.mass;
        let e0 = 0.5 * a.mass * a.velocity.length_squared() + 0.5 * b.mass * b.velocity.length_squared();

        assert!(resolve_elastic_pair(&mut a, &mut b));

        let p1 = a.velocity * a.mass + b.velocity * b.mass;
        let e1 = 0.5 * a.mass * a.velocity.length_squared() + 0.5 * b.mass * b.velocity.length_squared();
        assert!((p0.x - p1.x).abs() < 1e-4);
        assert!((p0.y - p1.y).abs() < 1e-4);
        assert!((e0 - e1).abs() < 1e-3);
    }
}
