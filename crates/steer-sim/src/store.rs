//! Agent storage: parallel per-agent arrays and the pre-tick world view.

use steer_behavior::{BlendMode, TargetResolver};
use steer_core::{AgentId, AgentRng, Kinematics, Vec2};
use steer_graph::PathFinder;
use steer_schedule::BehaviorScheduler;

/// Structure-of-Arrays agent state.
///
/// Every `Vec` has one element per agent; the `AgentId` value is the index
/// into all of them.  Keeping kinematics, schedulers, and RNGs in separate
/// arrays lets the tick loop borrow the kinematics immutably (for the
/// world view) while stepping schedulers and RNGs mutably.
pub struct AgentStore {
    pub kinematics: Vec<Kinematics>,
    pub schedulers: Vec<BehaviorScheduler>,
    pub blend_modes: Vec<BlendMode>,
    pub rngs: Vec<AgentRng>,

    seed: u64,
}

impl AgentStore {
    /// An empty store; populate with [`spawn`](Self::spawn).
    pub fn new(seed: u64) -> Self {
        Self {
            kinematics: Vec::new(),
            schedulers: Vec::new(),
            blend_modes: Vec::new(),
            rngs: Vec::new(),
            seed,
        }
    }

    /// Add an agent at `position` and return its id.
    ///
    /// The agent gets its own deterministically seeded RNG and, when a
    /// finder is supplied, its own handle to the shared graph snapshot.
    pub fn spawn(
        &mut self,
        position: Vec2,
        blend_mode: BlendMode,
        finder: Option<PathFinder>,
    ) -> AgentId {
        let id = AgentId(self.kinematics.len() as u32);
        self.kinematics.push(Kinematics::at(position));
        self.schedulers.push(match finder {
            Some(f) => BehaviorScheduler::with_finder(f),
            None => BehaviorScheduler::new(),
        });
        self.blend_modes.push(blend_mode);
        self.rngs.push(AgentRng::new(self.seed, id));
        id
    }

    pub fn len(&self) -> usize {
        self.kinematics.len()
    }

    pub fn is_empty(&self) -> bool {
        self.kinematics.is_empty()
    }

    pub fn kinematics(&self, agent: AgentId) -> Option<&Kinematics> {
        self.kinematics.get(agent.index())
    }

    pub fn scheduler(&self, agent: AgentId) -> Option<&BehaviorScheduler> {
        self.schedulers.get(agent.index())
    }

    pub fn scheduler_mut(&mut self, agent: AgentId) -> Option<&mut BehaviorScheduler> {
        self.schedulers.get_mut(agent.index())
    }

    /// Split borrows for the step phase: kinematics and blend modes shared,
    /// schedulers and RNGs exclusive.
    #[allow(clippy::type_complexity)]
    pub fn split_mut(
        &mut self,
    ) -> (&[Kinematics], &mut [BehaviorScheduler], &[BlendMode], &mut [AgentRng]) {
        (
            &self.kinematics,
            &mut self.schedulers,
            &self.blend_modes,
            &mut self.rngs,
        )
    }
}

/// Read-only view of every agent's pre-tick kinematic state.
///
/// Built once per tick over the kinematics array and handed to every
/// behavior step, so agents read each other's *pre-tick* state only —
/// stepping order cannot leak mutated-this-tick values.
pub struct WorldView<'a> {
    kinematics: &'a [Kinematics],
}

impl<'a> WorldView<'a> {
    #[inline]
    pub fn new(kinematics: &'a [Kinematics]) -> Self {
        Self { kinematics }
    }
}

impl TargetResolver for WorldView<'_> {
    fn kinematics(&self, agent: AgentId) -> Option<Kinematics> {
        self.kinematics.get(agent.index()).copied()
    }
}
