//! `steer-schedule` — per-agent behavior arbitration and path following.
//!
//! # Crate layout
//!
//! | Module        | Contents                                                  |
//! |---------------|-----------------------------------------------------------|
//! | [`queue`]     | `DelayQueue` — per-kind tick-buckets of pending requests  |
//! | [`scheduler`] | `BehaviorScheduler`, `PathMode`                           |
//! | [`error`]     | `ScheduleError`                                           |
//!
//! # The per-tick protocol
//!
//! An embedding application drives each agent's scheduler once per tick:
//!
//! 1. `step_next_behaviors()` — promote delay-queue bucket 0 to active.
//! 2. `run_behaviors(ctx, rng)` — step every active behavior, retire the
//!    finished, advance path-following.
//! 3. `blend(mode)` — collapse the tick's outputs into one applied delta.
//!
//! The scheduler owns all of its state exclusively; nothing here is shared
//! between agents except the read-only `PathFinder` snapshot.

pub mod error;
pub mod queue;
pub mod scheduler;


pub use error::{ScheduleError, ScheduleResult};
pub use queue::DelayQueue;
pub use scheduler::{BehaviorScheduler, PathMode};
