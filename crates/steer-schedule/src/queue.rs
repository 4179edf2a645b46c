//! `DelayQueue` — per-kind tick-buckets of pending behavior requests.
//!
//! # Why this exists
//!
//! Choreographed demos ("visit four corners in sequence") need behaviors
//! that activate N ticks from now without external timers.  The queue keeps
//! one lane per behavior kind; each lane is an ordered list of tick-buckets.
//! Draining bucket 0 each tick shifts every later bucket down by one tick,
//! so a request pushed with delay N activates on the N-th drain.

use std::collections::VecDeque;

use steer_behavior::{BehaviorKind, Target};

/// Pending `(target)` requests bucketed by relative activation delay, one
/// lane per behavior kind.
pub struct DelayQueue {
    /// Indexed by `BehaviorKind::index()`.
    lanes: Vec<VecDeque<Vec<Option<Target>>>>,
}

impl DelayQueue {
    pub fn new() -> Self {
        Self {
            lanes: (0..BehaviorKind::ALL.len()).map(|_| VecDeque::new()).collect(),
        }
    }

    /// Queue `target` for activation `delay` ticks from now (`delay >= 1`;
    /// a zero delay belongs on the active set, not in the queue).  The lane
    /// grows as needed.
    pub fn push(&mut self, kind: BehaviorKind, target: Option<Target>, delay: u32) {
        let lane = &mut self.lanes[kind.index()];
        let bucket = delay.max(1) as usize - 1;
        while lane.len() <= bucket {
            lane.push_back(Vec::new());
        }
        lane[bucket].push(target);
    }

    /// Remove and return bucket 0 of `kind`, shifting later buckets down by
    /// one tick.  Empty when nothing is due.
    pub fn pop_front(&mut self, kind: BehaviorKind) -> Vec<Option<Target>> {
        self.lanes[kind.index()].pop_front().unwrap_or_default()
    }

    /// Number of buckets currently queued for `kind` (the furthest pending
    /// delay).
    pub fn depth(&self, kind: BehaviorKind) -> usize {
        self.lanes[kind.index()].len()
    }

    /// Total pending requests across all kinds and delays.
    pub fn len(&self) -> usize {
        self.lanes
            .iter()
            .flat_map(|lane| lane.iter())
            .map(|bucket| bucket.len())
            .sum()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Drop every pending request in every lane.
    pub fn clear(&mut self) {
        for lane in &mut self.lanes {
            lane.clear();
        }
    }
}

impl Default for DelayQueue {
    fn default() -> Self {
        Self::new()
    }
}
