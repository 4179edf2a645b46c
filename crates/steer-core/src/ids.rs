//! Strongly typed, zero-cost identifier wrappers.
//!
//! All IDs are `Copy + Ord + Hash` so they can be used as map keys and sorted
//! collection elements without ceremony.  The inner integer is `pub` for
//! construction in loaders and tests; `.index()` casts to `usize` where an ID
//! doubles as a dense array index.

use std::fmt;

/// Generate a typed ID wrapper around a `u32`.
macro_rules! typed_id {
    ($(#[$attr:meta])* $vis:vis struct $name:ident;) => {
        $(#[$attr])*
        #[derive(Copy, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Debug)]
        #[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
        $vis struct $name(pub u32);

        impl $name {
            /// Cast to `usize` for direct use as an array index.
            #[inline(always)]
            pub fn index(self) -> usize {
                self.0 as usize
            }
        }

        impl fmt::Display for $name {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                write!(f, "{}({})", stringify!($name), self.0)
            }
        }
    };
}

typed_id! {
    /// Index of an agent in the simulation's agent storage.
    pub struct AgentId;
}

typed_id! {
    /// Externally assigned, stable identity of a graph vertex.  Equality and
    /// hashing of vertices are defined entirely by this ID.
    pub struct VertexId;
}

typed_id! {
    /// Handle of an edge slot in the graph's edge arena.
    pub struct EdgeId;
}
