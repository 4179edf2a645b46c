//! Distance estimators for A*.

use steer_core::VertexId;

use crate::Translator;

/// A pluggable distance estimator consumed by the A* search.
///
/// Both estimators are admissible (never overestimate the true path cost)
/// **provided** edge costs are at least the straight-line distance between
/// their endpoints — that is a caller responsibility, not enforced here.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum HeuristicKind {
    /// Straight-line distance.
    #[default]
    Euclidean,
    /// Axis-aligned distance.
    Manhattan,
}

impl HeuristicKind {
    /// Estimated cost from `from` to `to` using the translator's positions.
    ///
    /// Vertices without a position mapping contribute a zero estimate, which
    /// keeps the heuristic admissible for them.
    pub fn estimate(self, from: VertexId, to: VertexId, translator: &Translator) -> f32 {
        match (translator.localize(from), translator.localize(to)) {
            (Some(a), Some(b)) => match self {
                HeuristicKind::Euclidean => a.distance(b),
                HeuristicKind::Manhattan => a.manhattan_distance(b),
            },
            _ => 0.0,
        }
    }
}
