//! The result of a path search: an ordered, front-consumable waypoint
//! sequence.

use std::collections::VecDeque;
use std::fmt;

use steer_core::Vec2;

// ── Waypoint ──────────────────────────────────────────────────────────────────

/// A single position node in a [`Path`].
///
/// Waypoints compare by position equality, not by search-time identity: two
/// waypoints at the same world position are the same waypoint.
#[derive(Copy, Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Waypoint {
    pub position: Vec2,
}

impl Waypoint {
    #[inline]
    pub fn new(position: Vec2) -> Self {
        Self { position }
    }
}

// ── SearchStats ───────────────────────────────────────────────────────────────

/// Diagnostics recorded once when a search produces a path.
///
/// Best-effort instrumentation, not required for correctness.
#[derive(Copy, Clone, Debug, Default, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct SearchStats {
    /// Vertices moved to the closed set before the goal was popped.
    pub vertices_expanded: usize,
    /// Peak number of entries observed in the open set — a proxy for the
    /// search's peak working-set size.
    pub peak_open_set: usize,
    /// Sum of edge costs along the returned path.
    pub total_cost: f32,
}

// ── Path ──────────────────────────────────────────────────────────────────────

/// An ordered waypoint sequence from start to goal, consumed from the front
/// one waypoint at a time.
///
/// Lifecycle: created full by the search engine; the scheduler pops the head
/// as each waypoint is reached; the path is empty once the goal has been
/// consumed.  The most recently popped waypoint stays observable through
/// [`last_removed`](Self::last_removed) for the external render layer's
/// fade-out hook.
pub struct Path {
    waypoints: VecDeque<Waypoint>,
    last_removed: Option<Waypoint>,
    stats: SearchStats,
}

impl Path {
    /// Build a path from waypoint positions in start → goal order.
    pub fn new(positions: impl IntoIterator<Item = Vec2>, stats: SearchStats) -> Self {
        Self {
            waypoints: positions.into_iter().map(Waypoint::new).collect(),
            last_removed: None,
            stats,
        }
    }

    /// Pop and return the head waypoint, remembering it as the last removed.
    ///
    /// Returns `None` once the path is exhausted — calling past the end is
    /// guarded, not undefined.
    pub fn remove_first(&mut self) -> Option<Waypoint> {
        let head = self.waypoints.pop_front()?;
        self.last_removed = Some(head);
        Some(head)
    }

    /// `true` iff `waypoint` equals the current tail.
    pub fn is_last(&self, waypoint: &Waypoint) -> bool {
        self.waypoints.back() == Some(waypoint)
    }

    #[inline]
    pub fn first(&self) -> Option<&Waypoint> {
        self.waypoints.front()
    }

    #[inline]
    pub fn last(&self) -> Option<&Waypoint> {
        self.waypoints.back()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.waypoints.is_empty()
    }

    /// Number of waypoints remaining.
    #[inline]
    pub fn len(&self) -> usize {
        self.waypoints.len()
    }

    /// The most recently popped waypoint, if any.
    #[inline]
    pub fn last_removed(&self) -> Option<&Waypoint> {
        self.last_removed.as_ref()
    }

    /// Search diagnostics recorded at creation.
    #[inline]
    pub fn stats(&self) -> &SearchStats {
        &self.stats
    }

    /// Remaining waypoints, front to back.
    pub fn iter(&self) -> impl Iterator<Item = &Waypoint> + '_ {
        self.waypoints.iter()
    }
}

impl fmt::Debug for Path {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_list()
            .entries(self.waypoints.iter().map(|w| w.position))
            .finish()
    }
}
