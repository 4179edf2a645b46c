//! 2-D vector type and heading conversions.
//!
//! `Vec2` uses `f32` components.  Behaviors and the search engine work in
//! screen-style world units, so single precision keeps the hot structs
//! compact without measurable drift over a simulation run.
//!
//! # Heading convention
//!
//! Orientations are degrees with 0° pointing along **−Y** (screen "up") and
//! angles increasing clockwise.  [`Vec2::from_heading`] and
//! [`Vec2::heading_deg`] are inverses under this convention.

use std::fmt;
use std::ops::{Add, AddAssign, Div, Mul, Neg, Sub, SubAssign};

/// A 2-D vector in world space.
#[derive(Copy, Clone, Debug, Default, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Vec2 {
    pub x: f32,
    pub y: f32,
}

impl Vec2 {
    pub const ZERO: Vec2 = Vec2 { x: 0.0, y: 0.0 };

    #[inline]
    pub fn new(x: f32, y: f32) -> Self {
        Self { x, y }
    }

    /// Unit vector for an orientation in degrees (0° = −Y, clockwise).
    #[inline]
    pub fn from_heading(degrees: f32) -> Self {
        let r = degrees.to_radians();
        Self { x: r.sin(), y: -r.cos() }
    }

    /// Orientation in degrees of this vector (inverse of [`from_heading`]).
    ///
    /// Returns 0.0 for the zero vector.
    ///
    /// [`from_heading`]: Self::from_heading
    #[inline]
    pub fn heading_deg(self) -> f32 {
        if self == Self::ZERO {
            return 0.0;
        }
        self.x.atan2(-self.y).to_degrees()
    }

    #[inline]
    pub fn length_squared(self) -> f32 {
        self.x * self.x + self.y * self.y
    }

    #[inline]
    pub fn length(self) -> f32 {
        self.length_squared().sqrt()
    }

    /// Euclidean distance to `other`.
    #[inline]
    pub fn distance(self, other: Vec2) -> f32 {
        (other - self).length()
    }

    /// Axis-aligned (Manhattan) distance to `other`.
    #[inline]
    pub fn manhattan_distance(self, other: Vec2) -> f32 {
        (other.x - self.x).abs() + (other.y - self.y).abs()
    }

    /// Unit-length copy.  The zero vector normalizes to zero rather than NaN.
    #[inline]
    pub fn normalized(self) -> Vec2 {
        let len = self.length();
        if len > 0.0 { self / len } else { Vec2::ZERO }
    }

    /// Rescale to exactly `speed` while keeping direction.
    ///
    /// This is the motion-clipping primitive: any non-zero vector comes back
    /// with magnitude `speed`; the zero vector stays zero.
    #[inline]
    pub fn at_speed(self, speed: f32) -> Vec2 {
        self.normalized() * speed
    }

    #[inline]
    pub fn dot(self, other: Vec2) -> f32 {
        self.x * other.x + self.y * other.y
    }
}

impl Add for Vec2 {
    type Output = Vec2;
    #[inline]
    fn add(self, rhs: Vec2) -> Vec2 {
        Vec2::new(self.x + rhs.x, self.y + rhs.y)
    }
}

impl AddAssign for Vec2 {
    #[inline]
    fn add_assign(&mut self, rhs: Vec2) {
        self.x += rhs.x;
        self.y += rhs.y;
    }
}

impl Sub for Vec2 {
    type Output = Vec2;
    #[inline]
    fn sub(self, rhs: Vec2) -> Vec2 {
        Vec2::new(self.x - rhs.x, self.y - rhs.y)
    }
}

impl SubAssign for Vec2 {
    #[inline]
    fn sub_assign(&mut self, rhs: Vec2) {
        self.x -= rhs.x;
        self.y -= rhs.y;
    }
}

impl Mul<f32> for Vec2 {
    type Output = Vec2;
    #[inline]
    fn mul(self, rhs: f32) -> Vec2 {
        Vec2::new(self.x * rhs, self.y * rhs)
    }
}

impl Div<f32> for Vec2 {
    type Output = Vec2;
    #[inline]
    fn div(self, rhs: f32) -> Vec2 {
        Vec2::new(self.x / rhs, self.y / rhs)
    }
}

impl Neg for Vec2 {
    type Output = Vec2;
    #[inline]
    fn neg(self) -> Vec2 {
        Vec2::new(-self.x, -self.y)
    }
}

impl fmt::Display for Vec2 {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({:.3}, {:.3})", self.x, self.y)
    }
}
