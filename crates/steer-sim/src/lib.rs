//! `steer-sim` — tick loop orchestrator for the steer framework.
//!
//! # Two-phase tick loop
//!
//! ```text
//! for each tick:
//!   ① Step   — for every agent, in ascending id order:
//!                step_next_behaviors → run_behaviors → blend.
//!              All reads go through an immutable pre-tick snapshot, so
//!              agent order cannot change the result.
//!   ② Apply  — for every agent, sequentially:
//!                apply the blended delta, integrate, bounce off bounds.
//! ```
//!
//! Single-threaded, cooperative, no preemption: a search requested mid-tick
//! runs to completion inside that tick.
//!
//! # Crate layout
//!
//! | Module       | Contents                                            |
//! |--------------|-----------------------------------------------------|
//! | [`store`]    | `AgentStore` (SoA arrays), `WorldView`              |
//! | [`updater`]  | `apply_output`, `integrate`, `Bounds`               |
//! | [`sim`]      | `Sim`, `SimConfig`                                  |
//! | [`observer`] | `SimObserver`, `NoopObserver`                       |

pub mod observer;
pub mod sim;
pub mod store;
pub mod updater;


pub use observer::{NoopObserver, SimObserver};
pub use sim::{Sim, SimConfig};
pub use store::{AgentStore, WorldView};
pub use updater::{apply_output, integrate, Bounds};
