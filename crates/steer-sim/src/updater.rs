//! Apply blended outputs to kinematic state and integrate one tick.

use steer_behavior::Output;
use steer_core::{wrap_degrees, Kinematics, MotionLimits};

/// Rectangular world bounds.  Agents that cross an edge are clamped to it
/// and have the offending velocity/acceleration component reflected.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct Bounds {
    pub width: f32,
    pub height: f32,
}

impl Bounds {
    #[inline]
    pub fn new(width: f32, height: f32) -> Self {
        Self { width, height }
    }
}

/// Add a blended output's deltas onto `kinematics`.
///
/// Unset vector fields contribute nothing; scalar fields add directly.
pub fn apply_output(kinematics: &mut Kinematics, output: &Output) {
    if let Some(dp) = output.delta_position {
        kinematics.position += dp;
    }
    if let Some(dv) = output.delta_velocity {
        kinematics.velocity += dv;
    }
    if let Some(da) = output.delta_acceleration {
        kinematics.acceleration += da;
    }
    kinematics.orientation += output.delta_orientation;
    kinematics.angular_velocity += output.delta_angular_velocity;
    kinematics.angular_acceleration += output.delta_angular_acceleration;
}

/// Advance `kinematics` by one tick under `limits`.
///
/// Velocity gains acceleration and is re-clipped to the speed limit only
/// when it exceeds it; position gains velocity; angular velocity gains
/// angular acceleration; orientation gains angular velocity and wraps to
/// `[0, 360)`.  With `bounds`, agents bounce off the world edges.
pub fn integrate(kinematics: &mut Kinematics, limits: &MotionLimits, bounds: Option<Bounds>) {
    kinematics.velocity += kinematics.acceleration;
    if kinematics.velocity.length() > limits.max_speed {
        kinematics.velocity = kinematics.velocity.at_speed(limits.max_speed);
    }
    kinematics.position += kinematics.velocity;

    kinematics.angular_velocity += kinematics.angular_acceleration;
    kinematics.orientation = wrap_degrees(kinematics.orientation + kinematics.angular_velocity);

    if let Some(b) = bounds {
        bounce(kinematics, b);
    }
}

fn bounce(kinematics: &mut Kinematics, bounds: Bounds) {
    let p = &mut kinematics.position;
    if p.x < 0.0 || p.x > bounds.width {
        p.x = p.x.clamp(0.0, bounds.width);
        kinematics.velocity.x = -kinematics.velocity.x;
        kinematics.acceleration.x = -kinematics.acceleration.x;
    }
    if p.y < 0.0 || p.y > bounds.height {
        p.y = p.y.clamp(0.0, bounds.height);
        kinematics.velocity.y = -kinematics.velocity.y;
        kinematics.acceleration.y = -kinematics.acceleration.y;
    }
}
