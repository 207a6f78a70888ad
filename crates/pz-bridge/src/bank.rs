//! The two banks of the crossing and the set of travelers on each.

use std::collections::BTreeSet;

use pz_core::TravelerId;

use crate::roster::Roster;

// ── Bank ──────────────────────────────────────────────────────────────────────

/// One side of the bridge.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Bank {
    /// Where everyone begins (and where the torch begins).
    Start,
    /// Where everyone must end up.
    Destination,
}

// ── BankState ─────────────────────────────────────────────────────────────────

/// Which travelers are currently on which bank.
///
/// Invariant: the two sets are disjoint and their union is the full roster.
/// The torch is not modeled separately — it is wherever the most recent move
/// left it.  `BTreeSet` keeps iteration in ascending-id order, which makes
/// pair enumeration (and therefore tie-breaking) deterministic.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct BankState {
    start:       BTreeSet<TravelerId>,
    destination: BTreeSet<TravelerId>,
}

impl BankState {
    /// Initial state: every roster traveler on the start bank.
    pub fn new(roster: &Roster) -> Self {
        Self {
            start:       roster.ids().collect(),
            destination: BTreeSet::new(),
        }
    }

    pub fn start(&self) -> &BTreeSet<TravelerId> {
        &self.start
    }

    pub fn destination(&self) -> &BTreeSet<TravelerId> {
        &self.destination
    }

    #[inline]
    pub fn on_start(&self, id: TravelerId) -> bool {
        self.start.contains(&id)
    }

    #[inline]
    pub fn on_destination(&self, id: TravelerId) -> bool {
        self.destination.contains(&id)
    }

    /// The bank `id` currently occupies.
    pub fn bank_of(&self, id: TravelerId) -> Bank {
        if self.start.contains(&id) {
            Bank::Start
        } else {
            Bank::Destination
        }
    }

    /// `true` once the start bank is empty (the planner's terminal state).
    #[inline]
    pub fn is_complete(&self) -> bool {
        self.start.is_empty()
    }

    // ── Mutation (crate-internal) ─────────────────────────────────────────
    //
    // Only the planner and plan replay may move travelers.  Both return
    // whether the traveler was actually on the expected bank, so replay can
    // reject ill-formed plans while the planner (which constructs only legal
    // moves) simply asserts.

    /// Move `id` start → destination.  Returns `false` if `id` was not on
    /// the start bank.
    pub(crate) fn send_over(&mut self, id: TravelerId) -> bool {
        let present = self.start.remove(&id);
        if present {
            self.destination.insert(id);
        }
        present
    }

    /// Move `id` destination → start.  Returns `false` if `id` was not on
    /// the destination bank.
    pub(crate) fn send_back(&mut self, id: TravelerId) -> bool {
        let present = self.destination.remove(&id);
        if present {
            self.start.insert(id);
        }
        present
    }
}
