use crate::core::Vector;

use super::geometry::segments_intersect;

/// Convex polygon body. Rotates freely but no torque acts on it.
#[derive(Clone, Debug, PartialEq)]
pub struct PolygonBody {
    // === Physics State ===
    /// World position (center of mass)
    pub position: Vector,
    /// Meters per second
    pub velocity: Vector,
    pub mass: f32,
    /// Rotation angle (radians)
    pub angle: f32,
    /// Radians per second
    pub angular_velocity: f32,
    /// I = m * mean(r²) over the vertices. Not consumed by the solver.
    pub moment_of_inertia: f32,

    // === Shape Definition ===
    /// Vertices relative to the center (body-local frame), in winding order
    pub vertices: Vec<Vector>,
    /// Farthest vertex distance from the center
    pub min_radius: f32,

    pub color: String,
    pub selected: bool,
}

impl PolygonBody {
    pub fn new(
        position: Vector,
        velocity: Vector,
        mass: f32,
        angle: f32,
        angular_velocity: f32,
        vertices: Vec<Vector>,
        color: impl Into<String>,
    ) -> Self {
        let max_dist_sq = vertices
            .iter()
            .map(|v| v.length_squared())
            .fold(0.0f32, f32::max);

        let mut body = Self {
            position,
            velocity,
            mass,
            angle,
            angular_velocity,
            moment_of_inertia: 0.0,
            vertices,
            min_radius: max_dist_sq.sqrt(),
            color: color.into(),
            selected: false,
        };
        body.update_moment_of_inertia();
        body
    }

    /// Recompute I after a mass change
    pub fn update_moment_of_inertia(&mut self) {
        if self.vertices.is_empty() {
            self.moment_of_inertia = 0.0;
            return;
        }
        let sum: f32 = self.vertices.iter().map(|v| v.length_squared()).sum();
        self.moment_of_inertia = self.mass * sum / self.vertices.len() as f32;
    }

    /// Transform a body-local point into world coordinates
    #[inline]
    pub fn local_to_world(&self, local: Vector) -> Vector {
        local.rotate(self.angle) + self.position
    }

    /// Vertices in world coordinates (rotated, then translated)
    pub fn world_vertices(&self) -> Vec<Vector> {
        self.vertices.iter().map(|v| self.local_to_world(*v)).collect()
    }

    /// Point containment is not implemented for polygons.
    pub fn contains_point(&self, _pt: Vector) -> bool {
        false
    }

    /// Tests every edge (including the closing edge) against p1-p2
    pub fn intersects_segment(&self, p1: Vector, p2: Vector) -> bool {
        let n = self.vertices.len();
        if n < 2 {
            return false;
        }
        (0..n).any(|i| {
            let a = self.local_to_world(self.vertices[i]);
            let b = self.local_to_world(self.vertices[(i + 1) % n]);
            segments_intersect(a, b, p1, p2)
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn square(half: f32) -> Vec<Vector> {
        vec![
            Vector::new(-half, -half),
            Vector::new(half, -half),
            Vector::new(half, half),
            Vector::new(-half, half),
        ]
    }

    #[test]
    fn derived_radius_and_inertia() {
        let p = PolygonBody::new(Vector::zero(), Vector::zero(), 10.0, 0.0, 0.0, square(1.0), "green");
        assert!((p.min_radius - 2.0f32.sqrt()).abs() < 1e-6);
        // every vertex has r² = 2
        assert!((p.moment_of_inertia - 20.0).abs() < 1e-5);
    }

    #[test]
    fn empty_polygon_is_inert() {
        let p = PolygonBody::new(Vector::zero(), Vector::zero(), 1.0, 0.0, 0.0, Vec::new(), "green");
        assert_eq!(p.min_radius, 0.0);
        assert_eq!(p.moment_of_inertia, 0.0);
        assert!(!p.intersects_segment(Vector::new(-5.0, 0.0), Vector::new(5.0, 0.0)));
    }

    #[test]
    fn edge_crossing_segment_hits() {
        let p = PolygonBody::new(Vector::new(10.0, 10.0), Vector::zero(), 1.0, 0.0, 0.0, square(1.0), "green");
        assert!(p.intersects_segment(Vector::new(0.0, 10.0), Vector::new(20.0, 10.0)));
        assert!(!p.intersects_segment(Vector::new(0.0, 12.0), Vector::new(20.0, 12.0)));
    }

    #[test]
    fn rotation_extends_reach() {
        // Square of half-size 1 rotated 45°: corners reach sqrt(2) along the axes
        let p = PolygonBody::new(
            Vector::new(0.0, 0.0),
            Vector::zero(),
            1.0,
            std::f32::consts::FRAC_PI_4,
            0.0,
            square(1.0),
            "green",
        );
        let probe_a = Vector::new(-5.0, 1.2);
        let probe_b = Vector::new(5.0, 1.2);
        assert!(p.intersects_segment(probe_a, probe_b));

        let unrotated = PolygonBody { angle: 0.0, ..p.clone() };
        assert!(!unrotated.intersects_segment(probe_a, probe_b));
    }

    #[test]
    fn contains_point_is_unimplemented() {
        let p = PolygonBody::new(Vector::zero(), Vector::zero(), 1.0, 0.0, 0.0, square(1.0), "green");
        assert!(!p.contains_point(Vector::zero()));
    }
}
