use serde::{Deserialize, Serialize};

/// 2D vector in world meters (or meters/second for velocities)
#[derive(Clone, Copy, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct Vector {
    pub x: f32,
    pub y: f32,
}

impl Vector {
    pub const fn new(x: f32, y: f32) -> Self {
        Self { x, y }
    }

    pub const fn zero() -> Self {
        Self { x: 0.0, y: 0.0 }
    }

    pub fn length(&self) -> f32 {
        self.length_squared().sqrt()
    }

    pub fn length_squared(&self) -> f32 {
        self.x * self.x + self.y * self.y
    }

    pub fn dot(&self, other: Vector) -> f32 {
        self.x * other.x + self.y * other.y
    }

    /// Rotate counter-clockwise by `theta` radians
    pub fn rotate(&self, theta: f32) -> Self {
        let (sin, cos) = theta.sin_cos();
        Self {
            x: self.x * cos - self.y * sin,
            y: self.x * sin + self.y * cos,
        }
    }
}

impl std::ops::Add for Vector {
    type Output = Self;
    fn add(self, rhs: Self) -> Self {
        Self { x: self.x + rhs.x, y: self.y + rhs.y }
    }
}

impl std::ops::AddAssign for Vector {
    fn add_assign(&mut self, rhs: Self) {
        self.x += rhs.x;
        self.y += rhs.y;
    }
}

impl std::ops::Sub for Vector {
    type Output = Self;
    fn sub(self, rhs: Self) -> Self {
        Self { x: self.x - rhs.x, y: self.y - rhs.y }
    }
}

impl std::ops::Mul<f32> for Vector {
    type Output = Self;
    fn mul(self, rhs: f32) -> Self {
        Self { x: self.x * rhs, y: self.y * rhs }
    }
}

// Free-function forms used by the collision and force code.

#[inline]
pub fn add(a: Vector, b: Vector) -> Vector {
    a + b
}

/// Returns `a - b`
#[inline]
pub fn sub(a: Vector, b: Vector) -> Vector {
    a - b
}

#[inline]
pub fn scale(v: Vector, s: f32) -> Vector {
    v * s
}

#[inline]
pub fn dot(a: Vector, b: Vector) -> f32 {
    a.dot(b)
}

#[inline]
pub fn mag_sq(v: Vector) -> f32 {
    v.length_squared()
}
