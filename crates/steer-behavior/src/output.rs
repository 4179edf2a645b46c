//! The per-tick result of one behavior step.

use steer_core::Vec2;

/// A state-delta record produced by one behavior step, consumed by the
/// blender.
///
/// Vector fields are `Option`: `None` is the behavior's explicit signal of
/// "no contribution" and must survive blending uncounted — it is not the
/// same as contributing zero.  The scalar angular fields use `0.0` as the
/// no-contribution value, matching how the blender counts contributors.
#[derive(Copy, Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Output {
    /// Position delta, world units.
    pub delta_position: Option<Vec2>,
    /// Velocity delta, world units per tick.
    pub delta_velocity: Option<Vec2>,
    /// Acceleration delta, world units per tick².
    pub delta_acceleration: Option<Vec2>,

    /// Orientation delta, degrees.
    pub delta_orientation: f32,
    /// Angular-velocity delta, degrees per tick.
    pub delta_angular_velocity: f32,
    /// Angular-acceleration delta, degrees per tick².
    pub delta_angular_acceleration: f32,

    /// Blend weight; only the weighted-average policy reads it.
    pub weight: f32,
}

impl Default for Output {
    /// An output contributing nothing, at the default weight of 1.
    fn default() -> Self {
        Self {
            delta_position: None,
            delta_velocity: None,
            delta_acceleration: None,
            delta_orientation: 0.0,
            delta_angular_velocity: 0.0,
            delta_angular_acceleration: 0.0,
            weight: 1.0,
        }
    }
}

impl Output {
    /// An output contributing nothing.
    #[inline]
    pub fn none() -> Self {
        Self::default()
    }

    /// A pure velocity correction.
    #[inline]
    pub fn velocity(delta: Vec2) -> Self {
        Self { delta_velocity: Some(delta), ..Self::default() }
    }

    /// A pure acceleration correction.
    #[inline]
    pub fn acceleration(delta: Vec2) -> Self {
        Self { delta_acceleration: Some(delta), ..Self::default() }
    }

    /// A pure orientation change.
    #[inline]
    pub fn orientation(delta_degrees: f32) -> Self {
        Self { delta_orientation: delta_degrees, ..Self::default() }
    }

    /// An angular-velocity / angular-acceleration correction.
    #[inline]
    pub fn angular(delta_velocity: f32, delta_acceleration: f32) -> Self {
        Self {
            delta_angular_velocity: delta_velocity,
            delta_angular_acceleration: delta_acceleration,
            ..Self::default()
        }
    }

    /// Same output at a different blend weight.
    #[inline]
    pub fn with_weight(mut self, weight: f32) -> Self {
        self.weight = weight;
        self
    }

    /// `true` if every field contributes nothing.
    pub fn is_none(&self) -> bool {
        self.delta_position.is_none()
            && self.delta_velocity.is_none()
            && self.delta_acceleration.is_none()
            && self.delta_orientation == 0.0
            && self.delta_angular_velocity == 0.0
            && self.delta_angular_acceleration == 0.0
    }
}
