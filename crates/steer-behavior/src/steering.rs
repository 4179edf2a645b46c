//! Steering motion behaviors: align, seek, wander, arrive.
//!
//! Steering behaviors emit **acceleration** corrections and let momentum do
//! the rest, which is what makes blended motion look organic.  Their
//! completion conditions mirror the kinematic variants': a radius of
//! satisfaction around the target, plus (for seek) alignment of the velocity
//! with the target direction.

use steer_core::{clamp_magnitude, signed_degrees, AgentRng, Vec2};

use crate::{Behavior, Output, StepContext, Target};

// ── SteeringSeek ──────────────────────────────────────────────────────────────

/// Accelerate toward the target.
///
/// Finishes once the character is headed at the target (velocity aligned
/// with the target direction) or has crossed into the satisfaction radius —
/// the finishing step still emits its correction.
pub struct SteeringSeek {
    target: Target,
    finished: bool,
}

impl SteeringSeek {
    /// Radius of satisfaction, world units.
    pub const SATISFACTION_RADIUS: f32 = 25.0;

    /// Tolerance for "already headed there" on normalized directions.
    const ALIGN_EPSILON: f32 = 1e-3;

    pub fn new(target: Target) -> Self {
        Self { target, finished: false }
    }
}

impl Behavior for SteeringSeek {
    fn step(&mut self, ctx: &StepContext<'_>, _rng: &mut AgentRng) -> Output {
        if self.finished {
            return Output::none();
        }
        let Some(tpos) = ctx.target_position(self.target) else {
            self.finished = true;
            return Output::none();
        };
        let direction = tpos - ctx.character.position;

        let heading = ctx.character.velocity.normalized();
        let wanted = direction.normalized();
        let aligned = heading != Vec2::ZERO && (heading - wanted).length() < Self::ALIGN_EPSILON;
        if aligned || direction.length() < Self::SATISFACTION_RADIUS {
            self.finished = true;
        }

        let goal_acceleration = direction.at_speed(ctx.limits.max_acceleration);
        Output::acceleration(goal_acceleration - ctx.character.acceleration)
    }

    fn is_finished(&self) -> bool {
        self.finished
    }

    fn target(&self) -> Option<Target> {
        Some(self.target)
    }
}

// ── SteeringArrive ────────────────────────────────────────────────────────────

/// Accelerate toward the target, easing off inside the deceleration radius
/// and killing all motion inside the satisfaction radius.
pub struct SteeringArrive {
    target: Target,
    finished: bool,
}

impl SteeringArrive {
    /// Radius of deceleration, world units.
    pub const DECELERATION_RADIUS: f32 = 110.0;
    /// Radius of satisfaction, world units.
    pub const SATISFACTION_RADIUS: f32 = 24.0;
    /// Ticks over which the velocity correction is spread.
    pub const TIME_TO_TARGET: f32 = 5.0;

    pub fn new(target: Target) -> Self {
        Self { target, finished: false }
    }
}

impl Behavior for SteeringArrive {
    fn step(&mut self, ctx: &StepContext<'_>, _rng: &mut AgentRng) -> Output {
        if self.finished {
            return Output::none();
        }
        let Some(tpos) = ctx.target_position(self.target) else {
            self.finished = true;
            return Output::none();
        };
        let direction = tpos - ctx.character.position;
        let dist = direction.length();

        if dist < Self::SATISFACTION_RADIUS {
            self.finished = true;
            // Cancel the character's remaining motion outright.
            return Output {
                delta_velocity: Some(-ctx.character.velocity),
                delta_acceleration: Some(-ctx.character.acceleration),
                ..Output::none()
            };
        }

        let goal_speed = if dist > Self::DECELERATION_RADIUS {
            ctx.limits.max_speed
        } else {
            ctx.limits.max_speed * (dist / Self::DECELERATION_RADIUS)
        };
        let goal_velocity = direction.normalized() * goal_speed;
        let linear = (goal_velocity - ctx.character.velocity) / Self::TIME_TO_TARGET;
        Output::acceleration(linear - ctx.character.acceleration)
    }

    fn is_finished(&self) -> bool {
        self.finished
    }

    fn target(&self) -> Option<Target> {
        Some(self.target)
    }
}

// ── SteeringAlign ─────────────────────────────────────────────────────────────

/// Match the target's orientation with bounded angular acceleration.
pub struct SteeringAlign {
    target: Target,
    finished: bool,
}

impl SteeringAlign {
    /// Radius of deceleration, degrees.
    pub const DECELERATION_RADIUS: f32 = 20.0;
    /// Radius of satisfaction, degrees.
    pub const SATISFACTION_RADIUS: f32 = 5.0;
    /// Ticks over which the angular-velocity correction is spread.
    pub const TIME_TO_TARGET: f32 = 15.0;

    pub fn new(target: Target) -> Self {
        Self { target, finished: false }
    }
}

impl Behavior for SteeringAlign {
    fn step(&mut self, ctx: &StepContext<'_>, _rng: &mut AgentRng) -> Output {
        if self.finished {
            return Output::none();
        }
        let Some(goal) = ctx.target_orientation(self.target) else {
            self.finished = true;
            return Output::none();
        };
        let rotation = signed_degrees(goal - ctx.character.orientation);
        let size = rotation.abs();

        if size < Self::SATISFACTION_RADIUS {
            self.finished = true;
            // Stop rotating immediately.
            return Output::angular(
                -ctx.character.angular_velocity,
                -ctx.character.angular_acceleration,
            );
        }

        let goal_speed = if size > Self::DECELERATION_RADIUS {
            ctx.limits.max_angular_speed
        } else {
            ctx.limits.max_angular_speed * (size / Self::DECELERATION_RADIUS)
        };
        let goal_rotation = goal_speed * rotation.signum();
        let steering = clamp_magnitude(
            (goal_rotation - ctx.character.angular_velocity) / Self::TIME_TO_TARGET,
            ctx.limits.max_angular_acceleration,
        );
        Output::angular(0.0, steering - ctx.character.angular_acceleration)
    }

    fn is_finished(&self) -> bool {
        self.finished
    }

    fn target(&self) -> Option<Target> {
        Some(self.target)
    }
}

// ── SteeringWander ────────────────────────────────────────────────────────────

/// Project a point ahead of the character, pick a random offset around it,
/// and seek that point; re-roll every [`CHANGE_EVERY`](Self::CHANGE_EVERY)
/// ticks.
///
/// The original design registered its inner seek with the owner's scheduler;
/// here the wander owns the seek outright and forwards its output, so the
/// behavior is self-contained.
pub struct SteeringWander {
    /// Remaining-lifetime bound; `None` wanders forever.
    life: Option<u32>,
    counter: u32,
    inner: Option<SteeringSeek>,
    finished: bool,
}

impl SteeringWander {
    /// Distance of the projected point ahead of the character.
    pub const PROJECT_DISTANCE: f32 = 10.0;
    /// Radius around the projected point for the random seek target.
    pub const SEEK_RADIUS: f32 = 4.0;
    /// Ticks between target re-rolls.
    pub const CHANGE_EVERY: u32 = 75;

    /// Wander until explicitly retired.
    pub fn endless() -> Self {
        Self { life: None, counter: 0, inner: None, finished: false }
    }

    /// Wander for `ticks`, then finish.
    pub fn timed(ticks: u32) -> Self {
        Self { life: Some(ticks), counter: 0, inner: None, finished: false }
    }
}

impl Behavior for SteeringWander {
    fn step(&mut self, ctx: &StepContext<'_>, rng: &mut AgentRng) -> Output {
        if self.finished {
            return Output::none();
        }
        if let Some(life) = self.life {
            if self.counter > life {
                self.finished = true;
                return Output::none();
            }
        }

        if self.counter % Self::CHANGE_EVERY == 0 {
            let ahead = ctx.character.position
                + Vec2::from_heading(ctx.character.orientation) * Self::PROJECT_DISTANCE;
            let angle: f32 = rng.gen_range(0.0..360.0);
            let seek_point = ahead + Vec2::from_heading(angle) * Self::SEEK_RADIUS;
            self.inner = Some(SteeringSeek::new(Target::Point(seek_point)));
        }
        self.counter += 1;

        match self.inner.as_mut() {
            Some(seek) if !seek.is_finished() => seek.step(ctx, rng),
            _ => Output::none(),
        }
    }

    fn is_finished(&self) -> bool {
        self.finished
    }

    fn target(&self) -> Option<Target> {
        None
    }
}
