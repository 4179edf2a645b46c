//! Weighted path search: Dijkstra and A* over a shared graph snapshot.
//!
//! # Algorithm shape
//!
//! Both algorithms share one binary-heap loop — the only difference is the
//! priority key (cost-so-far for Dijkstra, cost-so-far plus heuristic for
//! A*).  Complexity is O((V + E) log V).
//!
//! Decrease-key is handled by lazy re-insertion: a better key for a vertex
//! already in the open set is pushed as a fresh heap entry, and stale
//! entries are discarded when popped (the vertex is already closed).  Ties
//! on equal keys break by insertion order — a monotone sequence number makes
//! the earlier-inserted entry win, so results are stable across runs.
//!
//! # Outcomes
//!
//! "No path" (the open set empties, or an endpoint is not in the graph) is
//! a normal `None` return, not an error — disconnected graphs are a
//! legitimate input.

use std::cmp::{Ordering, Reverse};
use std::collections::BinaryHeap;
use std::sync::Arc;

use rustc_hash::{FxHashMap, FxHashSet};

use steer_core::{Vec2, VertexId};

use crate::{Graph, GraphError, GraphResult, HeuristicKind, Path, SearchStats, Translator};

// ── Open-set entry ────────────────────────────────────────────────────────────

/// One candidate in the open set.  Ordered by priority key, then by
/// insertion sequence for deterministic tie-breaking.
#[derive(Copy, Clone)]
struct OpenEntry {
    /// Priority key: cost-so-far (Dijkstra) or cost-so-far + heuristic (A*).
    key: f32,
    /// Cost-so-far along the best known route to `vertex`.
    cost: f32,
    /// Insertion sequence number; earlier entries win equal keys.
    seq: u64,
    vertex: VertexId,
}

impl PartialEq for OpenEntry {
    fn eq(&self, other: &Self) -> bool {
        self.cmp(other) == Ordering::Equal
    }
}

impl Eq for OpenEntry {}

impl PartialOrd for OpenEntry {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for OpenEntry {
    fn cmp(&self, other: &Self) -> Ordering {
        self.key
            .total_cmp(&other.key)
            .then_with(|| self.seq.cmp(&other.seq))
    }
}

// ── PathFinder ────────────────────────────────────────────────────────────────

/// The search engine: holds shared references to an immutable graph snapshot
/// and its translator, plus the configured heuristic and an optional
/// expansion cap.
///
/// `PathFinder` is `Clone` (cheap `Arc` bumps), so every agent's scheduler
/// can carry its own handle to the same graph.  The graph and translator are
/// never mutated during a search, so concurrent searches from many agents
/// are safe.
#[derive(Clone, Debug)]
pub struct PathFinder {
    graph: Arc<Graph>,
    translator: Arc<Translator>,
    heuristic: HeuristicKind,
    /// Upper bound on closed-set size before a search gives up.  Bounds
    /// worst-case tick latency on pathological inputs.  `None` = unbounded.
    expansion_cap: Option<usize>,
}

impl PathFinder {
    /// Build a finder over a fixed graph snapshot.
    ///
    /// Fails fast with [`GraphError::Unmapped`] if any graph vertex has no
    /// position in the translator — a malformed pairing would otherwise
    /// surface as silent mid-search failures.
    pub fn new(graph: Arc<Graph>, translator: Arc<Translator>) -> GraphResult<Self> {
        for v in graph.vertices() {
            if translator.localize(v).is_none() {
                return Err(GraphError::Unmapped(v));
            }
        }
        Ok(Self {
            graph,
            translator,
            heuristic: HeuristicKind::default(),
            expansion_cap: None,
        })
    }

    /// Select the heuristic used by [`a_star`](Self::a_star).
    pub fn with_heuristic(mut self, heuristic: HeuristicKind) -> Self {
        self.heuristic = heuristic;
        self
    }

    /// Cap the number of vertex expansions per search.
    pub fn with_expansion_cap(mut self, cap: usize) -> Self {
        self.expansion_cap = Some(cap);
        self
    }

    #[inline]
    pub fn graph(&self) -> &Graph {
        &self.graph
    }

    #[inline]
    pub fn translator(&self) -> &Translator {
        &self.translator
    }

    #[inline]
    pub fn heuristic(&self) -> HeuristicKind {
        self.heuristic
    }

    /// Nearest-vertex quantization (see [`Translator::quantize`]).
    #[inline]
    pub fn quantize(&self, point: Vec2) -> Option<VertexId> {
        self.translator.quantize(point)
    }

    /// Vertex position lookup (see [`Translator::localize`]).
    #[inline]
    pub fn localize(&self, vertex: VertexId) -> Option<Vec2> {
        self.translator.localize(vertex)
    }

    // ── Searches ──────────────────────────────────────────────────────────

    /// Shortest path by cost-so-far only.
    pub fn dijkstra(&self, start: VertexId, goal: VertexId) -> Option<Path> {
        self.run(start, goal, None)
    }

    /// Shortest path guided by the configured heuristic.  Optimal whenever
    /// the heuristic is admissible for the graph's costs.
    pub fn a_star(&self, start: VertexId, goal: VertexId) -> Option<Path> {
        self.run(start, goal, Some(self.heuristic))
    }

    // ── Shared loop ───────────────────────────────────────────────────────

    fn run(&self, start: VertexId, goal: VertexId, heuristic: Option<HeuristicKind>) -> Option<Path> {
        let graph = &*self.graph;
        if !graph.has_vertex(start) || !graph.has_vertex(goal) {
            return None;
        }

        let estimate = |v: VertexId| match heuristic {
            Some(h) => h.estimate(v, goal, &self.translator),
            None => 0.0,
        };

        // Min-heap via Reverse; key then insertion order.
        let mut open: BinaryHeap<Reverse<OpenEntry>> = BinaryHeap::new();
        let mut best_cost: FxHashMap<VertexId, f32> = FxHashMap::default();
        let mut came_from: FxHashMap<VertexId, VertexId> = FxHashMap::default();
        let mut closed: FxHashSet<VertexId> = FxHashSet::default();

        let mut seq = 0u64;
        let mut peak_open = 0usize;

        best_cost.insert(start, 0.0);
        open.push(Reverse(OpenEntry { key: estimate(start), cost: 0.0, seq, vertex: start }));

        while let Some(Reverse(entry)) = open.pop() {
            let vertex = entry.vertex;
            // Stale entry for an already-finalized vertex.
            if !closed.insert(vertex) {
                continue;
            }

            if vertex == goal {
                return self.reconstruct(&came_from, start, goal, closed.len(), peak_open, entry.cost);
            }

            if let Some(cap) = self.expansion_cap {
                if closed.len() > cap {
                    return None;
                }
            }

            for &eid in graph.incident(vertex) {
                let Some(edge) = graph.edge(eid) else { continue };
                let Some(neighbor) = edge.other(vertex) else { continue };
                if closed.contains(&neighbor) {
                    continue;
                }
                let tentative = entry.cost + edge.cost();
                let improved = best_cost
                    .get(&neighbor)
                    .is_none_or(|&known| tentative < known);
                if improved {
                    best_cost.insert(neighbor, tentative);
                    came_from.insert(neighbor, vertex);
                    seq += 1;
                    open.push(Reverse(OpenEntry {
                        key: tentative + estimate(neighbor),
                        cost: tentative,
                        seq,
                        vertex: neighbor,
                    }));
                }
            }
            peak_open = peak_open.max(open.len());
        }

        // Open set exhausted before the goal was popped.
        None
    }

    /// Walk the predecessor map backward from the goal and emit waypoints in
    /// start → goal order (both inclusive; `start == goal` yields a single
    /// waypoint).
    fn reconstruct(
        &self,
        came_from: &FxHashMap<VertexId, VertexId>,
        start: VertexId,
        goal: VertexId,
        expanded: usize,
        peak_open: usize,
        total_cost: f32,
    ) -> Option<Path> {
        let mut chain = vec![goal];
        let mut cur = goal;
        while cur != start {
            cur = *came_from.get(&cur)?;
            chain.push(cur);
        }
        chain.reverse();

        let positions: Option<Vec<Vec2>> =
            chain.into_iter().map(|v| self.translator.localize(v)).collect();
        Some(Path::new(
            positions?,
            SearchStats {
                vertices_expanded: expanded,
                peak_open_set: peak_open,
                total_cost,
            },
        ))
    }
}
