//! The per-agent behavior scheduler.
//!
//! One `BehaviorScheduler` exists per agent and owns that agent's entire
//! decision state: the active behavior set (one instance per
//! `(kind, target)` pair), the delay queue of pending requests, the bag of
//! externally composed behaviors, the per-tick output buffer, and the
//! path-following state machine.
//!
//! # Path following
//!
//! `path_follow_to` quantizes the character's position and the target to
//! graph vertices, runs A*, and arms a steering seek (intermediate
//! waypoints) or arrive (final waypoint) for the head of the path.  Each
//! tick, when the seek/arrive bound to the current waypoint finishes,
//! `run_behaviors` pops the consumed waypoint and arms the next — or, once
//! the path is exhausted, starts a search to the next queued destination if
//! one exists.  A search that finds no route simply leaves the agent idle.

use std::collections::VecDeque;

use rustc_hash::FxHashMap;

use steer_behavior::{
    blend, build_behavior, Behavior, BehaviorKind, BlendMode, Output, StepContext, SteeringWander,
    Target,
};
use steer_core::{AgentRng, Vec2};
use steer_graph::{Path, PathFinder, Waypoint};

use crate::{DelayQueue, ScheduleError, ScheduleResult};

// ── PathMode ──────────────────────────────────────────────────────────────────

/// How a new path request interacts with the path already being followed.
///
/// Only [`Forget`](Self::Forget) is supported: the current path and every
/// queued destination are discarded in favor of the new request.  `Preempt`
/// and `Queue` are declared for API compatibility but rejected with
/// [`ScheduleError::UnsupportedMode`] until a product requirement defines
/// their semantics.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum PathMode {
    Forget,
    Preempt,
    Queue,
}

// ── Target keying ─────────────────────────────────────────────────────────────

/// Hashable identity of a behavior's target.
///
/// Point and heading targets key by coordinate bit patterns, which matches
/// waypoint semantics: two targets at the same position are the same
/// target.  Targetless behaviors (wander) key to the character itself.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
enum TargetKey {
    /// Self-directed behavior with no discrete target.
    Slf,
    Agent(steer_core::AgentId),
    Point(u32, u32),
    Heading(u32),
}

fn target_key(target: Option<Target>) -> TargetKey {
    match target {
        None => TargetKey::Slf,
        Some(Target::Agent(id)) => TargetKey::Agent(id),
        Some(Target::Point(p)) => TargetKey::Point(p.x.to_bits(), p.y.to_bits()),
        Some(Target::Heading(deg)) => TargetKey::Heading(deg.to_bits()),
    }
}

// ── BehaviorScheduler ─────────────────────────────────────────────────────────

type BehaviorKey = (BehaviorKind, TargetKey);

/// Per-agent behavior arbitration engine.
pub struct BehaviorScheduler {
    /// One live behavior instance per `(kind, target)`.
    active: FxHashMap<BehaviorKey, Box<dyn Behavior>>,
    /// Pending requests bucketed by activation delay.
    queued: DelayQueue,
    /// Externally composed behaviors (decision/behavior trees).  Stepped
    /// like the built-ins but never drive path state.
    other: Vec<Box<dyn Behavior>>,
    /// Outputs accumulated this tick, drained by [`blend`](Self::blend).
    outputs: Vec<Output>,

    finder: Option<PathFinder>,
    path: Option<Path>,
    current_waypoint: Option<Vec2>,
    /// Destinations to path to after the current path completes.
    queued_destinations: VecDeque<Target>,
}

impl BehaviorScheduler {
    /// A scheduler with no search engine attached: every path request is a
    /// no-op until [`attach_finder`](Self::attach_finder) is called.
    pub fn new() -> Self {
        Self {
            active: FxHashMap::default(),
            queued: DelayQueue::new(),
            other: Vec::new(),
            outputs: Vec::new(),
            finder: None,
            path: None,
            current_waypoint: None,
            queued_destinations: VecDeque::new(),
        }
    }

    pub fn with_finder(finder: PathFinder) -> Self {
        let mut s = Self::new();
        s.finder = Some(finder);
        s
    }

    pub fn attach_finder(&mut self, finder: PathFinder) {
        self.finder = Some(finder);
    }

    pub fn has_finder(&self) -> bool {
        self.finder.is_some()
    }

    // ── Behavior requests ─────────────────────────────────────────────────

    /// Activate a behavior of `kind` bound to `target`.
    ///
    /// Re-issuing the same `(kind, target)` replaces the live instance —
    /// that is how an individual behavior is restarted or retargeted.  Seek
    /// and arrive requests also arm a kinematic face at the same target, so
    /// the character turns toward where it is headed.
    pub fn request(&mut self, kind: BehaviorKind, target: Option<Target>) {
        if kind.chases_target() {
            if let Some(t) = target {
                self.insert(BehaviorKind::KinematicFace, Some(t));
            }
        }
        self.insert(kind, target);
    }

    fn insert(&mut self, kind: BehaviorKind, target: Option<Target>) {
        if let Some(behavior) = build_behavior(kind, target) {
            self.active.insert((kind, target_key(behavior.target())), behavior);
        }
    }

    pub fn kinematic_face(&mut self, target: Target) {
        self.request(BehaviorKind::KinematicFace, Some(target));
    }

    pub fn kinematic_seek(&mut self, target: Target) {
        self.request(BehaviorKind::KinematicSeek, Some(target));
    }

    pub fn kinematic_wander(&mut self) {
        self.request(BehaviorKind::KinematicWander, None);
    }

    pub fn kinematic_arrive(&mut self, target: Target) {
        self.request(BehaviorKind::KinematicArrive, Some(target));
    }

    pub fn steering_align(&mut self, target: Target) {
        self.request(BehaviorKind::SteeringAlign, Some(target));
    }

    pub fn steering_seek(&mut self, target: Target) {
        self.request(BehaviorKind::SteeringSeek, Some(target));
    }

    /// Wander for `ticks` ticks, or forever when `None`.
    pub fn steering_wander(&mut self, ticks: Option<u32>) {
        let behavior: Box<dyn Behavior> = match ticks {
            Some(n) => Box::new(SteeringWander::timed(n)),
            None => Box::new(SteeringWander::endless()),
        };
        self.active.insert((BehaviorKind::SteeringWander, TargetKey::Slf), behavior);
    }

    pub fn steering_arrive(&mut self, target: Target) {
        self.request(BehaviorKind::SteeringArrive, Some(target));
    }

    /// Queue a behavior request for activation `delay` ticks from now.
    /// Delay 0 activates immediately.
    pub fn enqueue(&mut self, kind: BehaviorKind, target: Option<Target>, delay: u32) {
        if delay == 0 {
            self.request(kind, target);
        } else {
            self.queued.push(kind, target, delay);
        }
    }

    /// Adopt an externally composed behavior.  It is stepped alongside the
    /// built-in kinds and retired when it reports finished.
    pub fn add_other_behavior(&mut self, behavior: Box<dyn Behavior>) {
        self.other.push(behavior);
    }

    /// Deactivate the behavior bound to `(kind, target)`.  Returns whether
    /// an instance was removed.
    pub fn remove(&mut self, kind: BehaviorKind, target: Option<Target>) -> bool {
        self.active.remove(&(kind, target_key(target))).is_some()
    }

    /// `true` if a live behavior is bound to `(kind, target)`.
    pub fn has_behavior(&self, kind: BehaviorKind, target: Option<Target>) -> bool {
        self.active.contains_key(&(kind, target_key(target)))
    }

    // ── Per-tick drive ────────────────────────────────────────────────────

    /// Promote delay-queue bucket 0 of every kind to the active set.
    pub fn step_next_behaviors(&mut self) {
        for kind in BehaviorKind::ALL {
            for target in self.queued.pop_front(kind) {
                self.request(kind, target);
            }
        }
    }

    /// Step every active behavior once, collecting outputs and retiring
    /// finished instances; advance the path-following state machine when
    /// the current waypoint's seek/arrive completes.  Returns `true` when
    /// no kind-keyed behaviors remain active.
    pub fn run_behaviors(&mut self, ctx: &StepContext<'_>, rng: &mut AgentRng) -> bool {
        let keys: Vec<BehaviorKey> = self.active.keys().copied().collect();
        let mut reached_waypoint = false;

        for key in keys {
            let Some(behavior) = self.active.get_mut(&key) else { continue };
            let out = behavior.step(ctx, rng);
            self.outputs.push(out);
            if behavior.is_finished() {
                let (kind, tkey) = key;
                let chases = matches!(
                    kind,
                    BehaviorKind::SteeringSeek | BehaviorKind::SteeringArrive
                );
                if chases {
                    if let Some(wp) = self.current_waypoint {
                        if tkey == target_key(Some(Target::Point(wp))) {
                            reached_waypoint = true;
                        }
                    }
                }
                self.active.remove(&key);
            }
        }

        let outputs = &mut self.outputs;
        self.other.retain_mut(|behavior| {
            outputs.push(behavior.step(ctx, rng));
            !behavior.is_finished()
        });

        if reached_waypoint {
            self.advance_path(ctx);
        }
        self.behaviors_done()
    }

    /// `true` when every kind-keyed behavior has been retired.  The `other`
    /// bag is excluded: externally owned behaviors don't gate completion.
    pub fn behaviors_done(&self) -> bool {
        self.active.is_empty()
    }

    /// Re-derive every active behavior from its current target without
    /// changing which targets are active.  Used when targets have moved and
    /// stale per-instance state (e.g. a face's captured turn) must be
    /// recomputed.
    pub fn retarget(&mut self) {
        let entries: Vec<(BehaviorKind, Option<Target>)> = self
            .active
            .iter()
            .map(|(&(kind, _), behavior)| (kind, behavior.target()))
            .collect();
        for (kind, target) in entries {
            self.request(kind, target);
        }
    }

    // ── Path following ────────────────────────────────────────────────────

    /// Find a path to `target` and start following it.
    ///
    /// Returns the new path (borrowed), or `None` when no finder is
    /// attached or no route exists — both leave the agent idle rather than
    /// erroring.  Unsupported modes and unquantizable targets fail fast.
    pub fn path_follow_to(
        &mut self,
        target: Target,
        mode: PathMode,
        ctx: &StepContext<'_>,
    ) -> ScheduleResult<Option<&Path>> {
        if self.finder.is_none() {
            // No search engine attached: every path request is a no-op.
            return Ok(None);
        }
        match mode {
            PathMode::Forget => {
                self.queued_destinations.clear();
                self.path = None;
                self.current_waypoint = None;
                self.start_path(target, ctx, true)?;
                Ok(self.path.as_ref())
            }
            other => Err(ScheduleError::UnsupportedMode(other)),
        }
    }

    /// Append a destination to path to after the current path completes.
    pub fn queue_destination(&mut self, target: Target) {
        self.queued_destinations.push_back(target);
    }

    /// The path currently being followed, if any.
    pub fn active_path(&self) -> Option<&Path> {
        self.path.as_ref()
    }

    /// The waypoint the agent is currently driving toward.
    pub fn current_waypoint(&self) -> Option<Waypoint> {
        self.current_waypoint.map(Waypoint::new)
    }

    /// The most recently consumed waypoint of the active path — the render
    /// layer's fade-out hook.
    pub fn last_removed_waypoint(&self) -> Option<&Waypoint> {
        self.path.as_ref().and_then(|p| p.last_removed())
    }

    /// Quantize the character position and the target, search, and arm the
    /// head waypoint.  `clear_existing` wipes active and queued behaviors
    /// first (a fresh `path_follow_to` does; chaining to a queued
    /// destination does not).
    fn start_path(
        &mut self,
        target: Target,
        ctx: &StepContext<'_>,
        clear_existing: bool,
    ) -> ScheduleResult<bool> {
        let Some(finder) = self.finder.as_ref() else {
            // No search engine attached: a no-op "no path", not an error.
            return Ok(false);
        };
        let goal_pos = ctx
            .target_position(target)
            .ok_or(ScheduleError::UnquantizableTarget)?;
        let start = finder
            .quantize(ctx.character.position)
            .ok_or(ScheduleError::UnquantizableTarget)?;
        let goal = finder
            .quantize(goal_pos)
            .ok_or(ScheduleError::UnquantizableTarget)?;

        match finder.a_star(start, goal) {
            None => {
                // Disconnected: the agent goes idle.
                self.path = None;
                self.current_waypoint = None;
                Ok(false)
            }
            Some(path) => {
                if clear_existing {
                    self.clear_queued_behaviors();
                    self.clear_active_behaviors();
                }
                let head = path.first().map(|w| (w.position, path.is_last(w)));
                self.current_waypoint = head.map(|(pos, _)| pos);
                self.path = Some(path);
                if let Some((pos, is_final)) = head {
                    self.arm_waypoint(pos, is_final);
                }
                Ok(true)
            }
        }
    }

    /// Consume the reached waypoint and aim at what comes next.
    fn advance_path(&mut self, ctx: &StepContext<'_>) {
        let next = match self.path.as_mut() {
            None => return,
            Some(path) => {
                path.remove_first();
                path.first().map(|w| (w.position, path.is_last(w)))
            }
        };
        match next {
            Some((pos, is_final)) => {
                self.current_waypoint = Some(pos);
                self.arm_waypoint(pos, is_final);
            }
            None => {
                if let Some(dest) = self.queued_destinations.pop_front() {
                    // Chain straight into the next destination; a failed
                    // request here degrades to idle.
                    if !matches!(self.start_path(dest, ctx, false), Ok(true)) {
                        self.path = None;
                        self.current_waypoint = None;
                    }
                } else {
                    self.path = None;
                    self.current_waypoint = None;
                }
            }
        }
    }

    fn arm_waypoint(&mut self, position: Vec2, is_final: bool) {
        let kind = if is_final {
            BehaviorKind::SteeringArrive
        } else {
            BehaviorKind::SteeringSeek
        };
        self.request(kind, Some(Target::Point(position)));
    }

    // ── Outputs ───────────────────────────────────────────────────────────

    /// Outputs accumulated so far this tick.
    pub fn outputs(&self) -> &[Output] {
        &self.outputs
    }

    /// Blend this tick's outputs under `mode`, draining the buffer.
    pub fn blend(&mut self, mode: BlendMode) -> Output {
        blend(&mut self.outputs, mode)
    }

    // ── Maintenance ───────────────────────────────────────────────────────

    pub fn active_count(&self) -> usize {
        self.active.len()
    }

    pub fn queued_count(&self) -> usize {
        self.queued.len()
    }

    pub fn clear_active_behaviors(&mut self) {
        self.active.clear();
    }

    pub fn clear_queued_behaviors(&mut self) {
        self.queued.clear();
    }

    pub fn clear_other_behaviors(&mut self) {
        self.other.clear();
    }

    /// Forget the active path, the current waypoint, and every queued
    /// destination.
    pub fn clear_paths(&mut self) {
        self.path = None;
        self.current_waypoint = None;
        self.queued_destinations.clear();
    }
}

impl Default for BehaviorScheduler {
    fn default() -> Self {
        Self::new()
    }
}
