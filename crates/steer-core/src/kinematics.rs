//! Per-agent kinematic state and global motion limits.

use crate::Vec2;

/// The kinematic state of one agent: linear position/velocity/acceleration
/// plus orientation, angular velocity, and angular acceleration in degrees.
///
/// The struct is plain data.  Behaviors read it through `StepContext` and
/// never write it; the embedding application owns it and applies blended
/// output deltas once per tick.
#[derive(Copy, Clone, Debug, Default, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Kinematics {
    pub position: Vec2,
    pub velocity: Vec2,
    pub acceleration: Vec2,

    /// Orientation in degrees (0° = −Y, clockwise).
    pub orientation: f32,
    /// Angular velocity in degrees per tick.
    pub angular_velocity: f32,
    /// Angular acceleration in degrees per tick².
    pub angular_acceleration: f32,
}

impl Kinematics {
    /// A stationary state at `position`, facing 0°.
    #[inline]
    pub fn at(position: Vec2) -> Self {
        Self { position, ..Self::default() }
    }
}

/// Per-tick caps on agent motion, shared by behaviors (to size their
/// corrections) and the integrator (to bound the applied result).
#[derive(Copy, Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct MotionLimits {
    /// Maximum linear speed, world units per tick.
    pub max_speed: f32,
    /// Maximum linear acceleration, world units per tick².
    pub max_acceleration: f32,
    /// Maximum angular speed, degrees per tick.
    pub max_angular_speed: f32,
    /// Maximum angular acceleration, degrees per tick².
    pub max_angular_acceleration: f32,
}

impl MotionLimits {
    pub const DEFAULT: MotionLimits = MotionLimits {
        max_speed: 3.2,
        max_acceleration: 0.6,
        max_angular_speed: 6.5,
        max_angular_acceleration: 0.5,
    };
}

impl Default for MotionLimits {
    #[inline]
    fn default() -> Self {
        Self::DEFAULT
    }
}
