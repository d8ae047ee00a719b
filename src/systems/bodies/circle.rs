use crate::core::vector::{dot, mag_sq, scale, sub};
use crate::core::Vector;

/// Circular body ("ball")
#[derive(Clone, Debug, PartialEq)]
pub struct CircleBody {
    /// Center of mass (world meters)
    pub position: Vector,
    /// Meters per second
    pub velocity: Vector,
    pub mass: f32,
    pub radius: f32,
    /// CSS color string, consumed by the renderer
    pub color: String,
    /// Set by the picking UI, ignored by physics
    pub selected: bool,
    /// Enclosing radius; always equal to `radius`
    pub min_radius: f32,
}

impl CircleBody {
    pub fn new(position: Vector, velocity: Vector, mass: f32, radius: f32, color: impl Into<String>) -> Self {
        Self {
            position,
            velocity,
            mass,
            radius,
            color: color.into(),
            selected: false,
            min_radius: radius,
        }
    }

    pub fn set_radius(&mut self, radius: f32) {
        self.radius = radius;
        self.min_radius = radius;
    }

    pub fn contains_point(&self, pt: Vector) -> bool {
        mag_sq(sub(pt, self.position)) <= self.radius * self.radius
    }

    /// Closest-point-to-segment test against the segment p1-p2.
    pub fn intersects_segment(&self, p1: Vector, p2: Vector) -> bool {
        let rp1 = sub(p1, self.position);
        let rp2 = sub(p2, self.position);
        let radius_sq = self.radius * self.radius;
        if mag_sq(rp1) <= radius_sq || mag_sq(rp2) <= radius_sq {
            return true;
        }

        let v12 = sub(p1, p2);
        let len_sq = mag_sq(v12);
        // Degenerate segment: the endpoint test above already covered it.
        if len_sq == 0.0 {
            return false;
        }

        let projection1 = scale(v12, dot(rp1, v12) / len_sq);
        let projection2 = scale(v12, dot(rp2, v12) / len_sq);
        // Both endpoints on the same side of the center: nearest point is an endpoint.
        if dot(projection1, projection2) > 0.0 {
            return false;
        }
        let altitude = sub(rp1, projection1);
        mag_sq(altitude) <= radius_sq
    }
}
