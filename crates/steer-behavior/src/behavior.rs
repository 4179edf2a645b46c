//! The behavior contract: trait, kinds, targets, and the step context.

use steer_core::{AgentId, AgentRng, Kinematics, MotionLimits, Vec2};

use crate::kinematic::{KinematicArrive, KinematicFace, KinematicSeek, KinematicWander};
use crate::steering::{SteeringAlign, SteeringArrive, SteeringSeek, SteeringWander};
use crate::Output;

// ── BehaviorKind ──────────────────────────────────────────────────────────────

/// The closed set of built-in motion-behavior categories: face, seek,
/// wander, and arrive, each in a kinematic and a steering variant (the
/// steering facing variant is align, which matches orientation rather than
/// computing one).
///
/// Used as a map key by the scheduler — no runtime type inspection anywhere.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum BehaviorKind {
    KinematicFace,
    KinematicSeek,
    KinematicWander,
    KinematicArrive,
    SteeringAlign,
    SteeringSeek,
    SteeringWander,
    SteeringArrive,
}

impl BehaviorKind {
    /// Every kind, in a fixed order (used for per-kind queue lanes).
    pub const ALL: [BehaviorKind; 8] = [
        BehaviorKind::KinematicFace,
        BehaviorKind::KinematicSeek,
        BehaviorKind::KinematicWander,
        BehaviorKind::KinematicArrive,
        BehaviorKind::SteeringAlign,
        BehaviorKind::SteeringSeek,
        BehaviorKind::SteeringWander,
        BehaviorKind::SteeringArrive,
    ];

    /// Dense index of this kind within [`ALL`](Self::ALL).
    #[inline]
    pub fn index(self) -> usize {
        match self {
            BehaviorKind::KinematicFace => 0,
            BehaviorKind::KinematicSeek => 1,
            BehaviorKind::KinematicWander => 2,
            BehaviorKind::KinematicArrive => 3,
            BehaviorKind::SteeringAlign => 4,
            BehaviorKind::SteeringSeek => 5,
            BehaviorKind::SteeringWander => 6,
            BehaviorKind::SteeringArrive => 7,
        }
    }

    /// `true` for the seek/arrive kinds (either variant), which chase a
    /// discrete spatial target.
    #[inline]
    pub fn chases_target(self) -> bool {
        matches!(
            self,
            BehaviorKind::KinematicSeek
                | BehaviorKind::KinematicArrive
                | BehaviorKind::SteeringSeek
                | BehaviorKind::SteeringArrive
        )
    }
}

// ── Target ────────────────────────────────────────────────────────────────────

/// What a behavior is bound to.
#[derive(Copy, Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Target {
    /// A fixed world position (path waypoints, markers).
    Point(Vec2),
    /// Another agent, resolved to its pre-tick state each step.
    Agent(AgentId),
    /// An absolute orientation in degrees (face/align without an object).
    Heading(f32),
}

// ── TargetResolver & StepContext ──────────────────────────────────────────────

/// Read-only access to other agents' pre-tick kinematic state.
///
/// The simulation builds one resolver per tick over the pre-tick snapshot;
/// behaviors may read any agent through it without ordering hazards.
pub trait TargetResolver {
    fn kinematics(&self, agent: AgentId) -> Option<Kinematics>;
}

/// A resolver that knows no agents.  For tests and single-agent setups
/// where every target is a fixed point.
pub struct EmptyWorld;

impl TargetResolver for EmptyWorld {
    fn kinematics(&self, _agent: AgentId) -> Option<Kinematics> {
        None
    }
}

/// Everything a behavior may read during one step: the character's own
/// pre-tick state, the motion limits, and the rest of the world.
pub struct StepContext<'a> {
    /// The stepped character's pre-tick kinematic state.
    pub character: &'a Kinematics,
    /// Per-tick motion caps, used to size corrections.
    pub limits: MotionLimits,
    /// Resolves [`Target::Agent`] to pre-tick state.
    pub world: &'a dyn TargetResolver,
}

impl<'a> StepContext<'a> {
    #[inline]
    pub fn new(
        character: &'a Kinematics,
        limits: MotionLimits,
        world: &'a dyn TargetResolver,
    ) -> Self {
        Self { character, limits, world }
    }

    /// Current world position of `target`, if it has one.
    pub fn target_position(&self, target: Target) -> Option<Vec2> {
        match target {
            Target::Point(p) => Some(p),
            Target::Agent(id) => self.world.kinematics(id).map(|k| k.position),
            Target::Heading(_) => None,
        }
    }

    /// Current orientation of `target`, if it has one.
    pub fn target_orientation(&self, target: Target) -> Option<f32> {
        match target {
            Target::Heading(deg) => Some(deg),
            Target::Agent(id) => self.world.kinematics(id).map(|k| k.orientation),
            Target::Point(_) => None,
        }
    }
}

// ── Behavior trait ────────────────────────────────────────────────────────────

/// A transient, single-use motion computation bound to a character and
/// (usually) a target.
///
/// # Contract
///
/// - [`step`](Self::step) is called at most once per simulation tick per
///   instance and returns that tick's [`Output`].
/// - `finished` latches: once [`is_finished`](Self::is_finished) reports
///   `true` it never reverts, and the owner retires the instance (replacing
///   it is how a behavior is restarted).
/// - A behavior that cannot resolve its target finishes gracefully instead
///   of erroring.
///
/// The trait is a structural capability interface: externally composed
/// behaviors (decision/behavior trees) implement it directly, with no base
/// type to inherit.
pub trait Behavior {
    /// Advance one simulation tick.
    fn step(&mut self, ctx: &StepContext<'_>, rng: &mut AgentRng) -> Output;

    /// `true` once the behavior has completed; latches.
    fn is_finished(&self) -> bool;

    /// The bound target, if any (`None` for free-roam wander).
    fn target(&self) -> Option<Target>;
}

// ── Factory ───────────────────────────────────────────────────────────────────

/// Build a boxed built-in behavior of the given kind.
///
/// Wander kinds ignore `target` (steering wander gets its default endless
/// lifetime).  Targeted kinds require one; `None` for those yields `None`
/// rather than a behavior that can never act.
pub fn build_behavior(kind: BehaviorKind, target: Option<Target>) -> Option<Box<dyn Behavior>> {
    match (kind, target) {
        (BehaviorKind::KinematicWander, _) => Some(Box::new(KinematicWander::new())),
        (BehaviorKind::SteeringWander, _) => Some(Box::new(SteeringWander::endless())),
        (BehaviorKind::KinematicFace, Some(t)) => Some(Box::new(KinematicFace::new(t))),
        (BehaviorKind::KinematicSeek, Some(t)) => Some(Box::new(KinematicSeek::new(t))),
        (BehaviorKind::KinematicArrive, Some(t)) => Some(Box::new(KinematicArrive::new(t))),
        (BehaviorKind::SteeringAlign, Some(t)) => Some(Box::new(SteeringAlign::new(t))),
        (BehaviorKind::SteeringSeek, Some(t)) => Some(Box::new(SteeringSeek::new(t))),
        (BehaviorKind::SteeringArrive, Some(t)) => Some(Box::new(SteeringArrive::new(t))),
        (_, None) => None,
    }
}
