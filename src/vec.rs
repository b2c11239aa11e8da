//! 2D vector type used for particle positions and cursor input.

use crate::float::Float;
use core::ops::{Add, Sub};

/// 2D vector in screen space (x right, y down).
#[derive(Copy, Clone, Debug, Default, PartialEq)]
pub struct Vec2<F: Float> {
    pub x: F,
    pub y: F,
}

impl<F: Float> Vec2<F> {
    /// Create a new 2D vector.
    pub fn new(x: F, y: F) -> Self { Vec2 { x, y } }

    /// Zero vector.
    pub fn zero() -> Self { Vec2 { x: F::zero(), y: F::zero() } }

    /// Dot product.
    pub fn dot(self, other: Self) -> F {
        self.x * other.x + self.y * other.y
    }

    /// Squared length (avoids sqrt).
    pub fn length_sq(self) -> F {
        self.dot(self)
    }

    /// Length (magnitude).
    pub fn length(self) -> F {
        self.length_sq().sqrt()
    }

    /// Scale both components by a scalar.
    pub fn scale(self, s: F) -> Self {
        Vec2 { x: self.x * s, y: self.y * s }
    }

    /// Clamp each component into the box `[min, max]`.
    pub fn clamp(self, min: Self, max: Self) -> Self {
        Vec2 {
            x: self.x.clamp(min.x, max.x),
            y: self.y.clamp(min.y, max.y),
        }
    }
}

impl<F: Float> Add for Vec2<F> {
    type Output = Self;
    fn add(self, rhs: Self) -> Self { Vec2 { x: self.x + rhs.x, y: self.y + rhs.y } }
}

impl<F: Float> Sub for Vec2<F> {
    type Output = Self;
    fn sub(self, rhs: Self) -> Self { Vec2 { x: self.x - rhs.x, y: self.y - rhs.y } }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn vec2_length() {
        let v = Vec2::new(3.0f32, 4.0);
        assert!((v.length() - 5.0).abs() < 1e-6);
    }

    #[test]
    fn scale_and_subtract() {
        let v = Vec2::new(1.0f64, -2.0).scale(3.0) - Vec2::new(1.0, 1.0);
        assert_eq!(v, Vec2::new(2.0, -7.0));
    }

    #[test]
    fn clamp_into_box() {
        let v = Vec2::new(-5.0f32, 700.0).clamp(Vec2::zero(), Vec2::new(800.0, 600.0));
        assert_eq!(v, Vec2::new(0.0, 600.0));
    }
}
