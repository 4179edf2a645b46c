//! Simulation observer trait for progress reporting.

use steer_core::Tick;

/// Callbacks invoked by [`Sim::run_ticks`][crate::Sim::run_ticks] at tick
/// boundaries.
///
/// All methods default to no-ops so implementors only override what they
/// care about.
pub trait SimObserver {
    /// Called at the very start of each tick, before any agent is stepped.
    fn on_tick_start(&mut self, _tick: Tick) {}

    /// Called at the end of each tick.  `busy` is the number of agents with
    /// at least one active behavior after stepping.
    fn on_tick_end(&mut self, _tick: Tick, _busy: usize) {}

    /// Called once after the final requested tick completes.
    fn on_sim_end(&mut self, _final_tick: Tick) {}
}

/// A [`SimObserver`] that does nothing.
pub struct NoopObserver;

impl SimObserver for NoopObserver {}
