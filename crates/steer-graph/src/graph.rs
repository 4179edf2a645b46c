//! Spatial graph: vertex table plus edge arena.
//!
//! # Data layout
//!
//! The graph owns its vertices and edges directly — there are no
//! back-references between them.  Vertices live in an insertion-ordered
//! table addressed by their externally assigned [`VertexId`]; edges live in
//! an arena (`Vec<Option<Edge>>`) addressed by [`EdgeId`], where removal
//! vacates the slot.  Adjacency is a per-vertex list of `EdgeId`s:
//!
//! - an **undirected** edge is listed in both endpoints' adjacency;
//! - a **directed** edge is listed only in its start vertex's adjacency,
//!   so traversing a vertex's adjacency yields exactly its outgoing edges.
//!
//! Removing an edge detaches it from every adjacency list that holds it and
//! vacates the arena slot in the same call; removing a vertex cascades over
//! every edge touching it in either direction.

use std::hash::{Hash, Hasher};

use rustc_hash::FxHashMap;

use steer_core::{EdgeId, VertexId};

use crate::{GraphError, GraphResult};

// ── EdgeKind ──────────────────────────────────────────────────────────────────

/// Directionality of an edge (and of the graph as a whole).
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum EdgeKind {
    Directed,
    Undirected,
}

// ── Edge ──────────────────────────────────────────────────────────────────────

/// A weighted edge between two distinct vertices.
///
/// Undirected edges canonicalize endpoint storage order ascending by id, so
/// `(a, b)` and `(b, a)` are structurally identical: they compare equal and
/// hash identically.  Directed edges are ordered and not symmetric.  The
/// traversal cost participates in neither equality nor hashing.
#[derive(Copy, Clone, Debug)]
pub struct Edge {
    kind: EdgeKind,
    v0: VertexId,
    v1: VertexId,
    cost: f32,
}

impl Edge {
    /// Construct an edge.  Fails on self-loops and on costs that are
    /// negative, NaN, or infinite.
    pub fn new(kind: EdgeKind, from: VertexId, to: VertexId, cost: f32) -> GraphResult<Edge> {
        if from == to {
            return Err(GraphError::SelfLoop(from));
        }
        if !cost.is_finite() || cost < 0.0 {
            return Err(GraphError::InvalidCost(cost));
        }
        let (v0, v1) = match kind {
            EdgeKind::Directed => (from, to),
            // Canonical storage order: ascending vertex id.
            EdgeKind::Undirected if to < from => (to, from),
            EdgeKind::Undirected => (from, to),
        };
        Ok(Edge { kind, v0, v1, cost })
    }

    #[inline]
    pub fn kind(&self) -> EdgeKind {
        self.kind
    }

    #[inline]
    pub fn cost(&self) -> f32 {
        self.cost
    }

    /// Both endpoints in storage order (start/destination for directed,
    /// ascending id for undirected).
    #[inline]
    pub fn endpoints(&self) -> (VertexId, VertexId) {
        (self.v0, self.v1)
    }

    /// The start vertex of a directed edge (first stored endpoint otherwise).
    #[inline]
    pub fn start(&self) -> VertexId {
        self.v0
    }

    /// The destination vertex of a directed edge (second stored endpoint
    /// otherwise).
    #[inline]
    pub fn dest(&self) -> VertexId {
        self.v1
    }

    /// `true` if `v` is one of this edge's endpoints.
    #[inline]
    pub fn touches(&self, v: VertexId) -> bool {
        self.v0 == v || self.v1 == v
    }

    /// The opposite endpoint of `v`, or `None` if `v` is not on this edge.
    #[inline]
    pub fn other(&self, v: VertexId) -> Option<VertexId> {
        if v == self.v0 {
            Some(self.v1)
        } else if v == self.v1 {
            Some(self.v0)
        } else {
            None
        }
    }
}

impl PartialEq for Edge {
    fn eq(&self, other: &Edge) -> bool {
        // Canonicalization makes undirected comparison positional too.
        self.kind == other.kind && self.v0 == other.v0 && self.v1 == other.v1
    }
}

impl Eq for Edge {}

impl Hash for Edge {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.kind.hash(state);
        self.v0.hash(state);
        self.v1.hash(state);
    }
}

// ── Graph ─────────────────────────────────────────────────────────────────────

/// One vertex's record: identity, adjacency, and the kind-lock fixed by the
/// first edge recorded in its adjacency.
#[derive(Clone, Debug, Default)]
struct VertexEntry {
    incident: Vec<EdgeId>,
    lock: Option<EdgeKind>,
}

/// A weighted spatial graph, tagged directed or undirected as a whole.
///
/// Vertex identity is the externally assigned [`VertexId`]; two vertices are
/// the same iff their ids match.  Vertices iterate in insertion order (which
/// matters only for deterministic test output, never for correctness).
#[derive(Debug)]
pub struct Graph {
    kind: EdgeKind,
    /// Insertion-ordered vertex ids.
    order: Vec<VertexId>,
    /// VertexId → entry.  Adjacency and kind-lock live here.
    verts: FxHashMap<VertexId, VertexEntry>,
    /// Edge arena.  `None` marks a removed edge; `EdgeId` is the slot index.
    edges: Vec<Option<Edge>>,
    live_edges: usize,
}

impl Graph {
    /// An empty graph of the given kind.
    pub fn new(kind: EdgeKind) -> Self {
        Self {
            kind,
            order: Vec::new(),
            verts: FxHashMap::default(),
            edges: Vec::new(),
            live_edges: 0,
        }
    }

    #[inline]
    pub fn kind(&self) -> EdgeKind {
        self.kind
    }

    // ── Vertex operations ─────────────────────────────────────────────────

    /// Add a vertex.  Returns `false` if it was already present.
    pub fn add_vertex(&mut self, id: VertexId) -> bool {
        if self.verts.contains_key(&id) {
            return false;
        }
        self.order.push(id);
        self.verts.insert(id, VertexEntry::default());
        true
    }

    #[inline]
    pub fn has_vertex(&self, id: VertexId) -> bool {
        self.verts.contains_key(&id)
    }

    #[inline]
    pub fn vertex_count(&self) -> usize {
        self.order.len()
    }

    /// All vertex ids in insertion order.
    pub fn vertices(&self) -> impl Iterator<Item = VertexId> + '_ {
        self.order.iter().copied()
    }

    /// Number of edges recorded in `id`'s adjacency (outgoing edges for a
    /// directed graph).  `None` if the vertex is unknown.
    pub fn degree(&self, id: VertexId) -> Option<usize> {
        self.verts.get(&id).map(|e| e.incident.len())
    }

    /// The `EdgeId`s recorded in `id`'s adjacency.  Empty for unknown
    /// vertices.
    pub fn incident(&self, id: VertexId) -> &[EdgeId] {
        self.verts.get(&id).map_or(&[], |e| e.incident.as_slice())
    }

    /// Remove a vertex and cascade over every edge touching it, in either
    /// direction: each such edge is detached from the far endpoint's
    /// adjacency and its arena slot is vacated.  Returns `false` if the
    /// vertex was unknown.
    pub fn remove_vertex(&mut self, id: VertexId) -> bool {
        if !self.verts.contains_key(&id) {
            return false;
        }
        let doomed: Vec<EdgeId> = self
            .edges
            .iter()
            .enumerate()
            .filter_map(|(i, slot)| slot.as_ref().map(|e| (i, e)))
            .filter(|(_, e)| e.touches(id))
            .map(|(i, _)| EdgeId(i as u32))
            .collect();
        for eid in doomed {
            self.remove_edge(eid);
        }
        self.verts.remove(&id);
        self.order.retain(|&v| v != id);
        true
    }

    // ── Edge operations ───────────────────────────────────────────────────

    /// Add an edge of the graph's configured kind.
    pub fn add_edge(&mut self, from: VertexId, to: VertexId, cost: f32) -> GraphResult<EdgeId> {
        self.insert_edge(self.kind, from, to, cost)
    }

    /// Add an edge of an explicit kind.
    ///
    /// Both endpoints must already be vertices of the graph.  The first edge
    /// recorded in a vertex's adjacency locks that vertex to the edge's
    /// kind; offering the opposite kind later fails with
    /// [`GraphError::EdgeKindMismatch`].  Directed edges are recorded only in
    /// the start vertex's adjacency.  Inserting a structural duplicate
    /// returns the existing `EdgeId` unchanged.
    pub fn insert_edge(
        &mut self,
        kind: EdgeKind,
        from: VertexId,
        to: VertexId,
        cost: f32,
    ) -> GraphResult<EdgeId> {
        let edge = Edge::new(kind, from, to, cost)?;
        if !self.verts.contains_key(&from) {
            return Err(GraphError::UnknownVertex(from));
        }
        if !self.verts.contains_key(&to) {
            return Err(GraphError::UnknownVertex(to));
        }

        // Which adjacency lists receive the edge determines which vertices
        // the kind-lock applies to.
        let holders: &[VertexId] = match kind {
            EdgeKind::Directed => &[from],
            EdgeKind::Undirected => &[edge.start(), edge.dest()],
        };
        for &v in holders {
            let held = self.verts.get(&v).and_then(|e| e.lock);
            if let Some(held) = held {
                if held != kind {
                    return Err(GraphError::EdgeKindMismatch { vertex: v, held, offered: kind });
                }
            }
        }

        if let Some(existing) = self.find_edge(&edge) {
            return Ok(existing);
        }

        let id = EdgeId(self.edges.len() as u32);
        self.edges.push(Some(edge));
        self.live_edges += 1;
        for &v in holders {
            let entry = self.verts.get_mut(&v).ok_or(GraphError::UnknownVertex(v))?;
            entry.incident.push(id);
            entry.lock = Some(kind);
        }
        Ok(id)
    }

    /// The live edge stored at `id`, if any.
    #[inline]
    pub fn edge(&self, id: EdgeId) -> Option<&Edge> {
        self.edges.get(id.index()).and_then(|slot| slot.as_ref())
    }

    /// Look up an edge by endpoint pair.
    ///
    /// A zero-cost probe edge of the graph's configured kind is built and
    /// matched structurally against the edge arena — O(|E|) by contract.
    /// For an undirected graph the argument order does not matter; for a
    /// directed graph it does.
    pub fn edge_between(&self, start: VertexId, dest: VertexId) -> Option<EdgeId> {
        let probe = Edge::new(self.kind, start, dest, 0.0).ok()?;
        self.find_edge(&probe)
    }

    /// `true` if an edge structurally equal to the given endpoints exists.
    pub fn contains_edge(&self, start: VertexId, dest: VertexId) -> bool {
        self.edge_between(start, dest).is_some()
    }

    #[inline]
    pub fn edge_count(&self) -> usize {
        self.live_edges
    }

    /// All live edges with their arena handles, in slot order.
    pub fn edges(&self) -> impl Iterator<Item = (EdgeId, &Edge)> + '_ {
        self.edges
            .iter()
            .enumerate()
            .filter_map(|(i, slot)| slot.as_ref().map(|e| (EdgeId(i as u32), e)))
    }

    /// Remove an edge: detach it from every adjacency list holding it and
    /// vacate its arena slot, atomically from the caller's point of view.
    /// Returns the removed edge, or `None` if the slot was already vacant.
    pub fn remove_edge(&mut self, id: EdgeId) -> Option<Edge> {
        let edge = self.edges.get_mut(id.index())?.take()?;
        self.live_edges -= 1;
        for v in [edge.start(), edge.dest()] {
            if let Some(entry) = self.verts.get_mut(&v) {
                entry.incident.retain(|&e| e != id);
            }
        }
        Some(edge)
    }

    // ── Internals ─────────────────────────────────────────────────────────

    fn find_edge(&self, probe: &Edge) -> Option<EdgeId> {
        self.edges
            .iter()
            .enumerate()
            .find(|(_, slot)| slot.as_ref() == Some(probe))
            .map(|(i, _)| EdgeId(i as u32))
    }
}
