//! Scheduler error type.

use thiserror::Error;

use crate::PathMode;

/// Caller-misuse errors from the path-request surface.
///
/// Note what is *not* here: a search that finds no route is a normal
/// outcome (the agent goes idle), and requesting a path with no finder
/// attached is a no-op.
#[derive(Debug, Error)]
pub enum ScheduleError {
    #[error("path-follow mode {0:?} is not supported")]
    UnsupportedMode(PathMode),

    #[error("target cannot be quantized to a graph vertex")]
    UnquantizableTarget,
}

pub type ScheduleResult<T> = Result<T, ScheduleError>;
