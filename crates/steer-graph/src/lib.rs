//! `steer-graph` — spatial graph, translation, and weighted path search.
//!
//! # Crate layout
//!
//! | Module         | Contents                                                 |
//! |----------------|----------------------------------------------------------|
//! | [`graph`]      | `Graph` (vertex table + edge arena), `Edge`, `EdgeKind`  |
//! | [`translator`] | `Translator` — vertex ↔ world-position mapping           |
//! | [`heuristic`]  | `HeuristicKind` — Euclidean / Manhattan estimators       |
//! | [`path`]       | `Path`, `Waypoint`, `SearchStats`                        |
//! | [`search`]     | `PathFinder` — Dijkstra and A* over the graph            |
//! | [`error`]      | `GraphError`, `GraphResult<T>`                           |
//!
//! # Feature flags
//!
//! | Flag    | Effect                                                       |
//! |---------|--------------------------------------------------------------|
//! | `serde` | Derives `Serialize`/`Deserialize` on plain-data types.       |

pub mod error;
pub mod graph;
pub mod heuristic;
pub mod path;
pub mod search;
pub mod translator;


pub use error::{GraphError, GraphResult};
pub use graph::{Edge, EdgeKind, Graph};
pub use heuristic::HeuristicKind;
pub use path::{Path, SearchStats, Waypoint};
pub use search::PathFinder;
pub use translator::Translator;
