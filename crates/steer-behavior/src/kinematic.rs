//! Kinematic motion behaviors: face, seek, wander, arrive.
//!
//! Kinematic behaviors steer by correcting **velocity** (and orientation)
//! directly, without modelling acceleration.  They suit simple demos and the
//! orientation bookkeeping that rides along with the steering behaviors.

use steer_core::{signed_degrees, AgentRng, Vec2};

use crate::{Behavior, Output, StepContext, Target};

/// Number of ticks a face turn is spread over.
const FACE_STEPS: u32 = 9;

// ── TurnPlan ──────────────────────────────────────────────────────────────────

/// A rotation spread evenly over a fixed number of ticks.
#[derive(Copy, Clone, Debug)]
struct TurnPlan {
    remaining: u32,
    per_step: f32,
}

impl TurnPlan {
    fn over(total_degrees: f32, steps: u32) -> Self {
        Self { remaining: steps, per_step: total_degrees / steps as f32 }
    }

    /// The next orientation chunk, or `None` once spent.
    fn next(&mut self) -> Option<f32> {
        if self.remaining == 0 {
            return None;
        }
        self.remaining -= 1;
        Some(self.per_step)
    }

    fn spent(&self) -> bool {
        self.remaining == 0
    }
}

// ── KinematicFace ─────────────────────────────────────────────────────────────

/// Rotate the character to face its target, spread over [`FACE_STEPS`]
/// ticks.
///
/// The turn amount is derived from the character's state on the *first*
/// step, not at construction — replacing the instance (retargeting) recomputes
/// it from fresh state.
pub struct KinematicFace {
    target: Target,
    plan: Option<TurnPlan>,
    finished: bool,
}

impl KinematicFace {
    pub fn new(target: Target) -> Self {
        Self { target, plan: None, finished: false }
    }

    /// The goal orientation for the configured target, if resolvable.
    fn goal_orientation(&self, ctx: &StepContext<'_>) -> Option<f32> {
        match self.target {
            Target::Heading(deg) => Some(deg),
            t => {
                let to = ctx.target_position(t)? - ctx.character.position;
                if to == Vec2::ZERO {
                    return None;
                }
                Some(to.heading_deg())
            }
        }
    }
}

impl Behavior for KinematicFace {
    fn step(&mut self, ctx: &StepContext<'_>, _rng: &mut AgentRng) -> Output {
        if self.finished {
            return Output::none();
        }
        if self.plan.is_none() {
            let Some(goal) = self.goal_orientation(ctx) else {
                self.finished = true;
                return Output::none();
            };
            let turn = signed_degrees(goal - ctx.character.orientation);
            if turn.abs() < 1e-3 {
                self.finished = true;
                return Output::none();
            }
            self.plan = Some(TurnPlan::over(turn, FACE_STEPS));
        }
        let Some(plan) = self.plan.as_mut() else {
            self.finished = true;
            return Output::none();
        };
        let chunk = plan.next().unwrap_or(0.0);
        if plan.spent() {
            self.finished = true;
        }
        Output::orientation(chunk)
    }

    fn is_finished(&self) -> bool {
        self.finished
    }

    fn target(&self) -> Option<Target> {
        Some(self.target)
    }
}

// ── KinematicSeek ─────────────────────────────────────────────────────────────

/// Point the character's velocity at the target at full speed.
///
/// Single-shot: one velocity correction, then finished.  Continuous chasing
/// comes from the owner re-arming the behavior (which is what the scheduler's
/// retargeting does).
pub struct KinematicSeek {
    target: Target,
    finished: bool,
}

impl KinematicSeek {
    pub fn new(target: Target) -> Self {
        Self { target, finished: false }
    }
}

impl Behavior for KinematicSeek {
    fn step(&mut self, ctx: &StepContext<'_>, _rng: &mut AgentRng) -> Output {
        if self.finished {
            return Output::none();
        }
        self.finished = true;
        let Some(tpos) = ctx.target_position(self.target) else {
            return Output::none();
        };
        let direction = tpos - ctx.character.position;
        let goal_velocity = direction.at_speed(ctx.limits.max_speed);
        Output::velocity(goal_velocity - ctx.character.velocity)
    }

    fn is_finished(&self) -> bool {
        self.finished
    }

    fn target(&self) -> Option<Target> {
        Some(self.target)
    }
}

// ── KinematicArrive ───────────────────────────────────────────────────────────

/// Drive at full speed toward the target and stop dead inside the
/// satisfaction radius.
pub struct KinematicArrive {
    target: Target,
    finished: bool,
}

impl KinematicArrive {
    /// Radius of satisfaction, world units.
    pub const SATISFACTION_RADIUS: f32 = 24.0;

    pub fn new(target: Target) -> Self {
        Self { target, finished: false }
    }
}

impl Behavior for KinematicArrive {
    fn step(&mut self, ctx: &StepContext<'_>, _rng: &mut AgentRng) -> Output {
        if self.finished {
            return Output::none();
        }
        let Some(tpos) = ctx.target_position(self.target) else {
            self.finished = true;
            return Output::none();
        };
        let direction = tpos - ctx.character.position;
        if direction.length() < Self::SATISFACTION_RADIUS {
            self.finished = true;
            // Cancel all remaining velocity: stop on the spot.
            return Output::velocity(-ctx.character.velocity);
        }
        let goal_velocity = direction.at_speed(ctx.limits.max_speed);
        Output::velocity(goal_velocity - ctx.character.velocity)
    }

    fn is_finished(&self) -> bool {
        self.finished
    }

    fn target(&self) -> Option<Target> {
        Some(self.target)
    }
}

// ── KinematicWander ───────────────────────────────────────────────────────────

/// Free-roam wandering: drive at full speed in the current heading, picking
/// a bounded random turn every [`CHANGE_EVERY`](Self::CHANGE_EVERY) ticks,
/// for a fixed lifetime.
///
/// The orientation correction that the original coupling delegated to a face
/// request is folded into the wander's own output, spread over the same
/// [`FACE_STEPS`] ticks.
pub struct KinematicWander {
    step: u32,
    heading: Option<f32>,
    turn: Option<TurnPlan>,
    finished: bool,
}

impl KinematicWander {
    /// Largest direction change per re-roll, degrees.
    pub const MAX_TURN: f32 = 30.0;
    /// Smallest direction change per re-roll, degrees.
    pub const MIN_TURN: f32 = 4.0;
    /// Total ticks before the wander finishes.
    pub const LIFETIME: u32 = 600;
    /// Ticks between direction re-rolls.
    pub const CHANGE_EVERY: u32 = 90;

    pub fn new() -> Self {
        Self { step: 0, heading: None, turn: None, finished: false }
    }
}

impl Default for KinematicWander {
    fn default() -> Self {
        Self::new()
    }
}

impl Behavior for KinematicWander {
    fn step(&mut self, ctx: &StepContext<'_>, rng: &mut AgentRng) -> Output {
        if self.finished {
            return Output::none();
        }
        if self.step > Self::LIFETIME {
            self.finished = true;
            return Output::none();
        }

        let mut out = Output::none();
        let mut new_heading = None;

        if self.step == 0 {
            // First step: commit to the current orientation at full speed.
            new_heading = Some(ctx.character.orientation);
        } else if self.step % Self::CHANGE_EVERY == 0 {
            // Difference of two uniform samples → triangular spread in [-1, 1].
            let spread = rng.random::<f32>() - rng.random::<f32>();
            let mut turn = Self::MAX_TURN * spread;
            if turn.abs() < Self::MIN_TURN {
                turn = if spread >= 0.0 { Self::MIN_TURN } else { -Self::MIN_TURN };
            }
            let heading = self.heading.unwrap_or(ctx.character.orientation) + turn;
            self.turn = Some(TurnPlan::over(
                signed_degrees(heading - ctx.character.orientation),
                FACE_STEPS,
            ));
            new_heading = Some(heading);
        }

        if let Some(heading) = new_heading {
            self.heading = Some(heading);
            let goal_velocity = Vec2::from_heading(heading).at_speed(ctx.limits.max_speed);
            out.delta_velocity = Some(goal_velocity - ctx.character.velocity);
        }
        if let Some(turn) = self.turn.as_mut() {
            match turn.next() {
                Some(chunk) => out.delta_orientation = chunk,
                None => self.turn = None,
            }
        }

        self.step += 1;
        out
    }

    fn is_finished(&self) -> bool {
        self.finished
    }

    fn target(&self) -> Option<Target> {
        None
    }
}
