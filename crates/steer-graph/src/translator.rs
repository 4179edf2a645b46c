//! Vertex ↔ world-position translation.
//!
//! A `Translator` pairs each graph vertex with a fixed 2-D world position.
//! It is built once over a fixed graph snapshot and never mutated afterwards,
//! so many agents can hold shared references to it during concurrent search
//! calls.

use rustc_hash::FxHashMap;

use steer_core::{Vec2, VertexId};

/// Bidirectional-in-practice mapping between vertex identity and world
/// position.  Bijectivity is not enforced; the loader is expected to supply
/// one position per vertex.
#[derive(Debug, Default)]
pub struct Translator {
    positions: FxHashMap<VertexId, Vec2>,
}

impl Translator {
    pub fn new() -> Self {
        Self::default()
    }

    /// Register (or overwrite) the position of `vertex`.
    pub fn insert(&mut self, vertex: VertexId, position: Vec2) {
        self.positions.insert(vertex, position);
    }

    /// The fixed world position of `vertex`, or `None` if it was never
    /// registered.
    #[inline]
    pub fn localize(&self, vertex: VertexId) -> Option<Vec2> {
        self.positions.get(&vertex).copied()
    }

    /// Map a continuous point to the nearest registered vertex.
    ///
    /// Linear scan over all known positions, minimizing Euclidean distance.
    /// Distance ties break to the **lowest vertex id**, so quantization is
    /// deterministic regardless of the backing map's iteration order.
    /// Returns `None` only when no vertices are registered.
    pub fn quantize(&self, point: Vec2) -> Option<VertexId> {
        let mut best: Option<(f32, VertexId)> = None;
        for (&vertex, &pos) in &self.positions {
            let dist = point.distance(pos);
            let closer = match best {
                None => true,
                Some((best_dist, best_id)) => {
                    dist < best_dist || (dist == best_dist && vertex < best_id)
                }
            };
            if closer {
                best = Some((dist, vertex));
            }
        }
        best.map(|(_, vertex)| vertex)
    }

    /// Number of registered vertices.
    pub fn len(&self) -> usize {
        self.positions.len()
    }

    pub fn is_empty(&self) -> bool {
        self.positions.is_empty()
    }

    /// All registered `(vertex, position)` pairs, in unspecified order.
    pub fn mappings(&self) -> impl Iterator<Item = (VertexId, Vec2)> + '_ {
        self.positions.iter().map(|(&v, &p)| (v, p))
    }
}
