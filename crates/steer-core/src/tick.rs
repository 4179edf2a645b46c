//! Simulation time: a monotonically increasing tick counter.
//!
//! The framework is tick-driven and cooperative — one `Tick` advances every
//! agent exactly once.  There is no wall-clock mapping; applications that
//! need one layer it on top.

use std::fmt;

/// An absolute simulation tick counter.
///
/// Stored as `u64`: at one tick per millisecond a `u64` lasts half a billion
/// years, so overflow is not a practical concern.
#[derive(Copy, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Debug, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Tick(pub u64);

impl Tick {
    pub const ZERO: Tick = Tick(0);

    /// The tick `n` steps after `self`.
    #[inline]
    pub fn offset(self, n: u64) -> Tick {
        Tick(self.0 + n)
    }

    /// Advance by one tick.
    #[inline]
    pub fn advance(&mut self) {
        self.0 += 1;
    }
}

impl std::ops::Add<u64> for Tick {
    type Output = Tick;
    #[inline]
    fn add(self, rhs: u64) -> Tick {
        Tick(self.0 + rhs)
    }
}

impl std::ops::Sub for Tick {
    type Output = u64;
    #[inline]
    fn sub(self, rhs: Tick) -> u64 {
        self.0 - rhs.0
    }
}

impl fmt::Display for Tick {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "T{}", self.0)
    }
}
