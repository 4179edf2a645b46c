//! The `Sim` struct and its tick loop.

use steer_behavior::{BlendMode, StepContext, Target};
use steer_core::{AgentId, MotionLimits, Tick, Vec2};
use steer_graph::PathFinder;
use steer_schedule::{PathMode, ScheduleResult};

use crate::updater::{apply_output, integrate, Bounds};
use crate::{AgentStore, SimObserver, WorldView};

// ── SimConfig ─────────────────────────────────────────────────────────────────

/// Top-level simulation configuration.
#[derive(Copy, Clone, Debug)]
pub struct SimConfig {
    /// Master RNG seed.  The same seed always produces identical runs.
    pub seed: u64,
    /// Per-tick motion caps applied to every agent.
    pub limits: MotionLimits,
    /// World bounds to bounce off, or `None` for an unbounded world.
    pub bounds: Option<Bounds>,
}

impl Default for SimConfig {
    fn default() -> Self {
        Self {
            seed: 0,
            limits: MotionLimits::DEFAULT,
            bounds: None,
        }
    }
}

// ── Sim ───────────────────────────────────────────────────────────────────────

/// The simulation runner: owns every agent's state and drives the two-phase
/// tick loop.
///
/// Phase 1 (step) runs every agent's scheduler against an immutable
/// pre-tick [`WorldView`] and blends its outputs; phase 2 (apply) folds the
/// blended deltas into the kinematics and integrates, sequentially in
/// ascending agent order.  Because phase 1 never mutates kinematics, agent
/// stepping order cannot affect the result.
pub struct Sim {
    pub config: SimConfig,
    pub store: AgentStore,
    tick: Tick,
}

impl Sim {
    pub fn new(config: SimConfig) -> Self {
        Self {
            config,
            store: AgentStore::new(config.seed),
            tick: Tick::ZERO,
        }
    }

    /// Add an agent at `position`; see [`AgentStore::spawn`].
    pub fn spawn(
        &mut self,
        position: Vec2,
        blend_mode: BlendMode,
        finder: Option<PathFinder>,
    ) -> AgentId {
        self.store.spawn(position, blend_mode, finder)
    }

    #[inline]
    pub fn tick(&self) -> Tick {
        self.tick
    }

    /// Run exactly `n` ticks, invoking `observer` at each boundary.
    pub fn run_ticks<O: SimObserver>(&mut self, n: u64, observer: &mut O) {
        for _ in 0..n {
            let now = self.tick;
            observer.on_tick_start(now);
            let busy = self.process_tick();
            observer.on_tick_end(now, busy);
            self.tick.advance();
        }
        observer.on_sim_end(self.tick);
    }

    /// Route `agent` to `target` (see
    /// [`BehaviorScheduler::path_follow_to`][steer_schedule::BehaviorScheduler::path_follow_to]).
    /// Returns whether a path is now being followed.
    pub fn path_follow_to(
        &mut self,
        agent: AgentId,
        target: Target,
        mode: PathMode,
    ) -> ScheduleResult<bool> {
        let limits = self.config.limits;
        let (kinematics, schedulers, _, _) = self.store.split_mut();
        let Some(character) = kinematics.get(agent.index()) else {
            return Ok(false);
        };
        let Some(scheduler) = schedulers.get_mut(agent.index()) else {
            return Ok(false);
        };
        let world = WorldView::new(kinematics);
        let ctx = StepContext::new(character, limits, &world);
        Ok(scheduler.path_follow_to(target, mode, &ctx)?.is_some())
    }

    // ── Core tick processing ──────────────────────────────────────────────

    /// Returns the number of agents still holding active behaviors.
    fn process_tick(&mut self) -> usize {
        let limits = self.config.limits;
        let bounds = self.config.bounds;

        // ── Phase 1: step every scheduler against the pre-tick snapshot ───
        let (kinematics, schedulers, blend_modes, rngs) = self.store.split_mut();
        let world = WorldView::new(kinematics);

        let mut blended = Vec::with_capacity(kinematics.len());
        let mut busy = 0usize;
        for i in 0..kinematics.len() {
            let ctx = StepContext::new(&kinematics[i], limits, &world);
            schedulers[i].step_next_behaviors();
            schedulers[i].run_behaviors(&ctx, &mut rngs[i]);
            if !schedulers[i].behaviors_done() {
                busy += 1;
            }
            blended.push(schedulers[i].blend(blend_modes[i]));
        }

        // ── Phase 2: apply blended deltas and integrate, in id order ──────
        for (i, output) in blended.iter().enumerate() {
            let k = &mut self.store.kinematics[i];
            apply_output(k, output);
            integrate(k, &limits, bounds);
        }

        busy
    }
}
