use std::ops::{Add, AddAssign, Mul, Sub};

use serde::Deserialize;

use crate::constants::HEADING_OFFSET_DEGREES;

#[derive(Debug, Clone, Copy, PartialEq, Default, Deserialize)]
pub struct Vector2D {
    pub x: f64,
    pub y: f64,
}

impl Vector2D {
    pub const ZERO: Vector2D = Vector2D { x: 0.0, y: 0.0 };

    pub fn new(x: f64, y: f64) -> Self {
        Vector2D { x, y }
    }

    pub fn magnitude(&self) -> f64 {
        self.x.hypot(self.y)
    }

    pub fn normalize(&self) -> Option<Self> {
        let mag = self.magnitude();
        if mag == 0.0 {
            None
        } else {
            Some(Vector2D::new(self.x / mag, self.y / mag))
        }
    }

    pub fn distance_to(&self, other: &Vector2D) -> f64 {
        (*other - *self).magnitude()
    }

    /// Sprite orientation in degrees, from the +y axis, to face `target`.
    pub fn heading_to(&self, target: &Vector2D) -> f64 {
        let offset = *target - *self;
        offset.x.atan2(offset.y).to_degrees() + HEADING_OFFSET_DEGREES
    }
}

impl Add for Vector2D {
    type Output = Self;

    fn add(self, other: Self) -> Self {
        Vector2D::new(self.x + other.x, self.y + other.y)
    }
}

impl AddAssign for Vector2D {
    fn add_assign(&mut self, other: Self) {
        self.x += other.x;
        self.y += other.y;
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
