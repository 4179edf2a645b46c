//! `steer-core` — foundational types for the `steer` motion framework.
//!
//! This crate is a dependency of every other `steer-*` crate.  It has no
//! `steer-*` dependencies and minimal external ones (only `rand`, plus
//! optional `serde`).
//!
//! # What lives here
//!
//! | Module         | Contents                                             |
//! |----------------|------------------------------------------------------|
//! | [`vec2`]       | `Vec2`, 2-D vector math, heading conversions         |
//! | [`angle`]      | degree wrapping/clamping helpers                     |
//! | [`kinematics`] | `Kinematics`, `MotionLimits`                         |
//! | [`ids`]        | `AgentId`, `VertexId`, `EdgeId`                      |
//! | [`tick`]       | `Tick`                                               |
//! | [`rng`]        | `AgentRng` (deterministic per-agent RNG)             |
//!
//! # Feature flags
//!
//! | Flag    | Effect                                                      |
//! |---------|-------------------------------------------------------------|
//! | `serde` | Adds `Serialize`/`Deserialize` to all public types.         |

pub mod angle;
pub mod ids;
pub mod kinematics;
pub mod rng;
pub mod tick;
pub mod vec2;

#[cfg(test)]
mod tests;

// ── Re-exports ────────────────────────────────────────────────────────────────

pub use angle::{clamp_magnitude, signed_degrees, wrap_degrees};
pub use ids::{AgentId, EdgeId, VertexId};
pub use kinematics::{Kinematics, MotionLimits};
pub use rng::AgentRng;
pub use tick::Tick;
pub use vec2::Vec2;
