//! Roster types: `Traveler` and the validated, sorted `Roster`.
//!
//! # Ordering model
//!
//! A `Roster` owns its travelers sorted ascending by crossing time, with ties
//! broken by input order (the sort is stable).  Each traveler's position in
//! that order becomes its dense [`TravelerId`]: id 0 is always the fastest,
//! id 1 the second fastest.  Everything downstream — bank sets, moves, plans
//! — speaks in `TravelerId`s and resolves times and labels through the
//! roster, decoupling "time lookup" from "traversal order".

use std::collections::HashSet;

use pz_core::{CrossTime, TravelerId};

use crate::error::{PlanError, PlanResult};

// ── Traveler ──────────────────────────────────────────────────────────────────

/// A person who needs to cross: a unique label plus an individual crossing
/// time.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Traveler {
    pub label: String,
    pub time:  CrossTime,
}

impl Traveler {
    pub fn new(label: impl Into<String>, time: CrossTime) -> Self {
        Self { label: label.into(), time }
    }
}

// ── Roster ────────────────────────────────────────────────────────────────────

/// The validated set of travelers, sorted ascending by crossing time.
///
/// Construction is the single validation gate for the whole planner: a
/// `Roster` in hand means at least two travelers, all times strictly
/// positive, all labels unique.
#[derive(Clone, Debug)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct Roster {
    /// Travelers, sorted ascending by time (stable — input order breaks ties).
    travelers: Vec<Traveler>,
}

// Deserialization routes through `Roster::new` so a decoded roster satisfies
// the same invariants as a constructed one.
#[cfg(feature = "serde")]
impl<'de> serde::Deserialize<'de> for Roster {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        #[derive(serde::Deserialize)]
        struct Raw {
            travelers: Vec<Traveler>,
        }

        let raw = Raw::deserialize(deserializer)?;
        Roster::new(raw.travelers).map_err(serde::de::Error::custom)
    }
}

impl Roster {
    /// Construct a roster, sorting `travelers` by crossing time.
    ///
    /// Fails when fewer than 2 travelers are supplied, when any crossing
    /// time is non-positive, or when two travelers share a label.  No moves
    /// are ever produced from an invalid input.
    pub fn new(travelers: Vec<Traveler>) -> PlanResult<Self> {
        if travelers.len() < 2 {
            return Err(PlanError::TooFewTravelers(travelers.len()));
        }

        let mut seen: HashSet<&str> = HashSet::with_capacity(travelers.len());
        for t in &travelers {
            if !t.time.is_positive() {
                return Err(PlanError::NonPositiveTime(t.label.clone()));
            }
            if !seen.insert(&t.label) {
                return Err(PlanError::DuplicateLabel(t.label.clone()));
            }
        }

        let mut travelers = travelers;
        // Stable sort: equal times keep their input order, so TravelerIds
        // (and therefore the whole plan) are deterministic.
        travelers.sort_by_key(|t| t.time);
        Ok(Self { travelers })
    }

    pub fn len(&self) -> usize {
        self.travelers.len()
    }

    /// Always `false` — a roster holds at least two travelers.
    pub fn is_empty(&self) -> bool {
        self.travelers.is_empty()
    }

    /// Read-only slice of all travelers (sorted by time).
    pub fn travelers(&self) -> &[Traveler] {
        &self.travelers
    }

    /// All ids in ascending (fastest-first) order.
    pub fn ids(&self) -> impl Iterator<Item = TravelerId> + '_ {
        (0..self.travelers.len() as u32).map(TravelerId)
    }

    // ── Lookups ───────────────────────────────────────────────────────────

    /// Crossing time of `id`.
    ///
    /// # Panics
    /// Panics if `id` did not come from this roster.
    #[inline]
    pub fn time(&self, id: TravelerId) -> CrossTime {
        self.travelers[id.index()].time
    }

    /// Label of `id`.
    ///
    /// # Panics
    /// Panics if `id` did not come from this roster.
    #[inline]
    pub fn label(&self, id: TravelerId) -> &str {
        &self.travelers[id.index()].label
    }

    /// The two fastest travelers — the torch couriers of the heuristic.
    #[inline]
    pub fn fastest_pair(&self) -> (TravelerId, TravelerId) {
        (TravelerId(0), TravelerId(1))
    }
}
