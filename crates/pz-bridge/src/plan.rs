//! Plan types: `Move`, `Plan`, and independent replay.
//!
//! A plan is pure data — it records *which* travelers moved, not how long
//! each move took.  Costs are always resolved through the roster, so a plan
//! can be re-priced, rendered, or verified without trusting the planner that
//! produced it.

use pz_core::{CrossTime, TravelerId};

use crate::bank::BankState;
use crate::error::{PlanError, PlanResult};
use crate::roster::Roster;

// ── Move ──────────────────────────────────────────────────────────────────────

/// One atomic crossing event.
///
/// Moves strictly alternate direction, starting (and ending) with a cross.
/// A cross carries one or two travelers start → destination; with a valid
/// roster the heuristic only ever emits two-person crossings, but the solo
/// form is part of the data model.  A return carries exactly one traveler
/// back with the torch.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Move {
    /// 1–2 travelers cross start → destination.  By convention the faster
    /// (lower-id) traveler is listed first.
    Cross(TravelerId, Option<TravelerId>),
    /// One traveler walks the torch back, destination → start.
    Return(TravelerId),
}

impl Move {
    /// Two-person crossing with the faster traveler listed first.
    pub fn cross_pair(a: TravelerId, b: TravelerId) -> Move {
        let (lead, partner) = if a <= b { (a, b) } else { (b, a) };
        Move::Cross(lead, Some(partner))
    }

    /// Stopwatch contribution: the slower participant's time for a cross,
    /// the lone walker's time for a return.
    pub fn cost(&self, roster: &Roster) -> CrossTime {
        match *self {
            Move::Cross(lead, None) => roster.time(lead),
            Move::Cross(lead, Some(partner)) => roster.time(lead).slower(roster.time(partner)),
            Move::Return(id) => roster.time(id),
        }
    }

    pub fn is_cross(&self) -> bool {
        matches!(self, Move::Cross(..))
    }

    pub fn is_return(&self) -> bool {
        matches!(self, Move::Return(_))
    }
}

// ── Plan ──────────────────────────────────────────────────────────────────────

/// The full ordered move sequence plus the planner's accumulated total.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Plan {
    moves: Vec<Move>,
    /// Total elapsed time as accumulated by the planner.  [`Plan::replay`]
    /// recomputes this independently from the move sequence.
    pub total: CrossTime,
}

/// What an independent replay of a plan established.
#[derive(Debug)]
pub struct ReplaySummary {
    /// Elapsed time recomputed move by move.
    pub total: CrossTime,
    /// Bank occupancy after the final move.
    pub banks: BankState,
}

impl Plan {
    pub(crate) fn new(moves: Vec<Move>, total: CrossTime) -> Self {
        Self { moves, total }
    }

    pub fn moves(&self) -> &[Move] {
        &self.moves
    }

    pub fn len(&self) -> usize {
        self.moves.len()
    }

    pub fn is_empty(&self) -> bool {
        self.moves.is_empty()
    }

    /// Re-execute the move sequence against a fresh [`BankState`],
    /// independently recomputing the elapsed time.
    ///
    /// Rejects plans that break the structural invariants: direction must
    /// strictly alternate starting with a cross, every cross participant
    /// must be on the start bank, every returner on the destination bank,
    /// and a two-person cross must name two distinct travelers.
    ///
    /// Does *not* require the final start bank to be empty — callers that
    /// want a completeness check inspect `ReplaySummary::banks`.
    pub fn replay(&self, roster: &Roster) -> PlanResult<ReplaySummary> {
        let mut banks = BankState::new(roster);
        let mut total = CrossTime::ZERO;

        for (step, mv) in self.moves.iter().enumerate() {
            // Direction alternates: even steps cross, odd steps return.
            let expect_cross = step % 2 == 0;
            if expect_cross != mv.is_cross() {
                return Err(replay_err(step, "moves must alternate cross/return, starting with a cross"));
            }

            match *mv {
                Move::Cross(lead, partner) => {
                    if partner == Some(lead) {
                        return Err(replay_err(step, "a pair cross must name two distinct travelers"));
                    }
                    if !banks.send_over(lead) {
                        return Err(replay_err(step, "crossing traveler is not on the start bank"));
                    }
                    if let Some(p) = partner {
                        if !banks.send_over(p) {
                            return Err(replay_err(step, "crossing traveler is not on the start bank"));
                        }
                    }
                }
                Move::Return(id) => {
                    if !banks.send_back(id) {
                        return Err(replay_err(step, "returning traveler is not on the destination bank"));
                    }
                }
            }

            total += mv.cost(roster);
        }

        Ok(ReplaySummary { total, banks })
    }
}

fn replay_err(step: usize, reason: &str) -> PlanError {
    PlanError::Replay { step, reason: reason.to_string() }
}
