//! Graph-subsystem error type.

use thiserror::Error;

use steer_core::VertexId;

use crate::EdgeKind;

/// Errors produced by `steer-graph`.
///
/// All variants are construction-time violations: the call that caused the
/// inconsistency fails fast and the graph is left unchanged.  A search that
/// merely finds no route is *not* an error — the search methods return
/// `None` for that.
#[derive(Debug, Error)]
pub enum GraphError {
    #[error("edge must link two different vertices (got {0} twice)")]
    SelfLoop(VertexId),

    #[error("vertex {vertex} already holds {held:?} edges; cannot add a {offered:?} edge")]
    EdgeKindMismatch {
        vertex:  VertexId,
        held:    EdgeKind,
        offered: EdgeKind,
    },

    #[error("edge cost {0} is not a non-negative finite number")]
    InvalidCost(f32),

    #[error("vertex {0} not found in graph")]
    UnknownVertex(VertexId),

    #[error("vertex {0} has no position mapping")]
    Unmapped(VertexId),
}

pub type GraphResult<T> = Result<T, GraphError>;
