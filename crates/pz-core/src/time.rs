//! Crossing-duration model.
//!
//! # Design
//!
//! A crossing time is an integer number of abstract time units (the classic
//! puzzle statement uses minutes).  Using an integer as the canonical unit
//! means all stopwatch arithmetic is exact (no floating-point drift) and
//! comparisons are O(1).
//!
//! `CrossTime::ZERO` exists only as an accumulator identity — a traveler may
//! never *have* a zero crossing time.  That positivity rule is enforced where
//! travelers are admitted into a roster, not here.

use std::fmt;
use std::iter::Sum;

/// A crossing duration in whole time units.
///
/// Stored as `u64`: individual times are small, but the stopwatch *total* is
/// the same type, and the total must absorb a sum over every move of the
/// plan.  A `u64` accumulator cannot overflow for any roster that fits in
/// memory, so the planner's additions stay unchecked.
#[derive(Copy, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Debug, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct CrossTime(pub u64);

impl CrossTime {
    /// Accumulator identity.  Not a valid traveler crossing time.
    pub const ZERO: CrossTime = CrossTime(0);

    /// `true` if this is a valid traveler crossing time (strictly positive).
    #[inline]
    pub fn is_positive(self) -> bool {
        self.0 > 0
    }

    /// The slower of two durations — the cost of a two-person crossing.
    #[inline]
    pub fn slower(self, other: CrossTime) -> CrossTime {
        CrossTime(self.0.max(other.0))
    }

    /// Combined walking time of two travelers, widened so the sum is exact
    /// for any pair of representable times.  Used only as a *selection*
    /// criterion (which pair to send), never as a stopwatch contribution.
    #[inline]
    pub fn combined(self, other: CrossTime) -> u128 {
        self.0 as u128 + other.0 as u128
    }
}

impl std::ops::Add for CrossTime {
    type Output = CrossTime;
    #[inline]
    fn add(self, rhs: CrossTime) -> CrossTime {
        CrossTime(self.0 + rhs.0)
    }
}

impl std::ops::AddAssign for CrossTime {
    #[inline]
    fn add_assign(&mut self, rhs: CrossTime) {
        self.0 += rhs.0;
    }
}

impl Sum for CrossTime {
    fn sum<I: Iterator<Item = CrossTime>>(iter: I) -> CrossTime {
        iter.fold(CrossTime::ZERO, |acc, t| acc + t)
    }
}

impl fmt::Display for CrossTime {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}min", self.0)
    }
}
