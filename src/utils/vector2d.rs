use std::ops::{Add, Mul, Neg, Sub};

#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Vector2D {
    pub x: f64,
    pub y: f64,
}

impl Vector2D {
    pub const ZERO: Vector2D = Vector2D { x: 0.0, y: 0.0 };

    pub fn new(x: f64, y: f64) -> Self {
        Vector2D { x, y }
    }

    /// Unit vector at `angle_deg` degrees above the +x axis, scaled by `magnitude`.
    pub fn from_polar_degrees(magnitude: f64, angle_deg: f64) -> Self {
        let angle_rad = angle_deg.to_radians();
        Vector2D::new(magnitude * angle_rad.cos(), magnitude * angle_rad.sin())
    }

    pub fn magnitude(&self) -> f64 {
        (self.x.powi(2) + self.y.powi(2)).sqrt()
    }

    /// Component-wise sign, with `signum(0) == 0` (unlike `f64::signum`).
    pub fn signum(&self) -> Self {
        fn sign(v: f64) -> f64 {
            if v > 0.0 {
                1.0
            } else if v < 0.0 {
                -1.0
            } else {
                0.0
            }
        }
        Vector2D::new(sign(self.x), sign(self.y))
    }

    pub fn abs(&self) -> Self {
        Vector2D::new(self.x.abs(), self.y.abs())
    }

    pub fn component_mul(&self, other: &Vector2D) -> Self {
        Vector2D::new(self.x * other.x, self.y * other.y)
    }

    /// Straight-line interpolation: `self` at `alpha == 0`, `other` at `alpha == 1`.
    pub fn lerp(&self, other: &Vector2D, alpha: f64) -> Self {
        *self + (*other - *self) * alpha
    }
}

impl Add for Vector2D {
    type Output = Self;

    fn add(self, other: Self) -> Self {
        Vector2D::new(self.x + other.x, self.y + other.y)
    }
}

impl Sub for Vector2D {
    type Output = Self;

    fn sub(self, other: Self) -> Self {
        Vector2D::new(self.x - other.x, self.y - other.y)
    }
}

impl Mul<f64> for Vector2D {
    type Output = Self;

    fn mul(self, scalar: f64) -> Self {
        Vector2D::new(self.x * scalar, self.y * scalar)
    }
}

impl Mul<Vector2D> for f64 {
    type Output = Vector2D;

    fn mul(self, vector: Vector2D) -> Vector2D {
        Vector2D::new(self * vector.x, self * vector.y)
    }
}

impl Neg for Vector2D {
    type Output = Self;

    fn neg(self) -> Self {
        Vector2D::new(-self.x, -self.y)
    }
}
