use crate::core::Vector;

use super::circle::CircleBody;
use super::polygon::PolygonBody;

/// Shape tag used by the renderer and by the property editor
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ShapeKind {
    Circle,
    Polygon,
}

impl ShapeKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            ShapeKind::Circle => "circle",
            ShapeKind::Polygon => "polygon",
        }
    }
}

/// A simulated body. Dispatch on the variant happens only here and at the
/// collision/draw call sites.
#[derive(Clone, Debug, PartialEq)]
pub enum Item {
    Circle(CircleBody),
    Polygon(PolygonBody),
}

impl Item {
    pub fn kind(&self) -> ShapeKind {
        match self {
            Item::Circle(_) => ShapeKind::Circle,
            Item::Polygon(_) => ShapeKind::Polygon,
        }
    }

    pub fn position(&self) -> Vector {
        match self {
            Item::Circle(c) => c.position,
            Item::Polygon(p) => p.position,
        }
    }

    pub fn position_mut(&mut self) -> &mut Vector {
        match self {
            Item::Circle(c) => &mut c.position,
            Item::Polygon(p) => &mut p.position,
        }
    }

    pub fn velocity(&self) -> Vector {
        match self {
            Item::Circle(c) => c.velocity,
            Item::Polygon(p) => p.velocity,
        }
    }

    pub fn velocity_mut(&mut self) -> &mut Vector {
        match self {
            Item::Circle(c) => &mut c.velocity,
            Item::Polygon(p) => &mut p.velocity,
        }
    }

    pub fn mass(&self) -> f32 {
        match self {
            Item::Circle(c) => c.mass,
            Item::Polygon(p) => p.mass,
        }
    }

    /// Callers validate the value first (see `core::error::check_mass`).
    pub fn set_mass(&mut self, mass: f32) {
        match self {
            Item::Circle(c) => c.mass = mass,
            Item::Polygon(p) => {
                p.mass = mass;
                p.update_moment_of_inertia();
            }
        }
    }

    pub fn min_radius(&self) -> f32 {
        match self {
            Item::Circle(c) => c.min_radius,
            Item::Polygon(p) => p.min_radius,
        }
    }

    pub fn selected(&self) -> bool {
        match self {
            Item::Circle(c) => c.selected,
            Item::Polygon(p) => p.selected,
        }
    }

    pub fn set_selected(&mut self, selected: bool) {
        match self {
            Item::Circle(c) => c.selected = selected,
            Item::Polygon(p) => p.selected = selected,
        }
    }

    pub fn color(&self) -> &str {
        match self {
            Item::Circle(c) => &c.color,
            Item::Polygon(p) => &p.color,
        }
    }

    pub fn set_color(&mut self, color: impl Into<String>) {
        match self {
            Item::Circle(c) => c.color = color.into(),
            Item::Polygon(p) => p.color = color.into(),
        }
    }

    pub fn contains_point(&self, pt: Vector) -> bool {
        match self {
            Item::Circle(c) => c.contains_point(pt),
            Item::Polygon(p) => p.contains_point(pt),
        }
    }

    pub fn intersects_segment(&self, p1: Vector, p2: Vector) -> bool {
        match self {
            Item::Circle(c) => c.intersects_segment(p1, p2),
            Item::Polygon(p) => p.intersects_segment(p1, p2),
        }
    }

    /// Kinematic half of a tick: x += v·dt (and θ += ω·dt for polygons)
    pub fn integrate_position(&mut self, dt: f32) {
        match self {
            Item::Circle(c) => c.position += c.velocity * dt,
            Item::Polygon(p) => {
                p.position += p.velocity * dt;
                p.angle += p.angular_velocity * dt;
            }
        }
    }

    pub fn as_circle(&self) -> Option<&CircleBody> {
        match self {
            Item::Circle(c) => Some(c),
            Item::Polygon(_) => None,
        }
    }

    pub fn as_circle_mut(&mut self) -> Option<&mut CircleBody> {
        match self {
            Item::Circle(c) => Some(c),
            Item::Polygon(_) => None,
        }
    }

    pub fn as_polygon(&self) -> Option<&PolygonBody> {
        match self {
            Item::Polygon(p) => Some(p),
            Item::Circle(_) => None,
        }
    }

    pub fn as_polygon_mut(&mut self) -> Option<&mut PolygonBody> {
        match self {
            Item::Polygon(p) => Some(p),
            Item::Circle(_) => None,
        }
    }
}

impl From<CircleBody> for Item {
    fn from(body: CircleBody) -> Self {
        Item::Circle(body)
    }
}

impl From<PolygonBody> for Item {
    fn from(body: PolygonBody) -> Self {
        Item::Polygon(body)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn integrate_position_moves_and_spins() {
        let mut ball: Item = CircleBody::new(Vector::new(1.0, 1.0), Vector::new(2.0, -1.0), 1.0, 1.0, "red").into();
        ball.integrate_position(0.5);
        assert_eq!(ball.position(), Vector::new(2.0, 0.5));

        let tri = vec![Vector::new(0.0, 1.0), Vector::new(-1.0, -1.0), Vector::new(1.0, -1.0)];
        let mut poly: Item = PolygonBody::new(Vector::zero(), Vector::new(1.0, 0.0), 1.0, 0.0, 2.0, tri, "blue").into();
        poly.integrate_position(0.25);
        assert_eq!(poly.position(), Vector::new(0.25, 0.0));
        assert_eq!(poly.as_polygon().map(|p| p.angle), Some(0.5));
    }

    #[test]
    fn polygon_mass_change_updates_inertia() {
        let sq = vec![Vector::new(1.0, 0.0), Vector::new(0.0, 1.0), Vector::new(-1.0, 0.0), Vector::new(0.0, -1.0)];
        let mut poly: Item = PolygonBody::new(Vector::zero(), Vector::zero(), 2.0, 0.0, 0.0, sq, "blue").into();
        poly.set_mass(4.0);
        assert_eq!(poly.as_polygon().map(|p| p.moment_of_inertia), Some(4.0));
    }

    #[test]
    fn shared_accessors_dispatch() {
        let mut ball: Item = CircleBody::new(Vector::zero(), Vector::zero(), 3.0, 2.0, "red").into();
        assert_eq!(ball.kind(), ShapeKind::Circle);
        assert_eq!(ball.min_radius(), 2.0);
        ball.set_color("#00ff00");
        ball.set_selected(true);
        assert_eq!(ball.color(), "#00ff00");
        assert!(ball.selected());
        assert!(ball.as_polygon().is_none());
    }
}
