//! The greedy crossing planner.

use pz_core::{CrossTime, TravelerId};

use crate::bank::BankState;
use crate::plan::{Move, Plan};
use crate::roster::Roster;

/// Greedy bridge-and-torch planner.
///
/// One instance is constructed per [`solve`][Planner::solve] call and owns
/// all mutable state for that invocation (bank sets, move list, stopwatch).
///
/// # Algorithm
///
/// With `f1`, `f2` the two fastest travelers:
///
/// 1. While the start bank is non-empty:
///    a. if `f1` and `f2` are both on the start bank, they cross together;
///    b. otherwise the pair on the start bank with the largest *combined*
///       time crosses (slow clusters with slow);
///    c. if the start bank is still occupied, `f1` (or `f2` if `f1` is not
///       across) walks the torch back alone.
/// 2. Every move advances the stopwatch by the slower participant's time.
///
/// # Known limits
///
/// The largest-combined-sum rule is a heuristic, not an optimum.  True
/// optimality requires comparing the two canonical shuttle strategies per
/// slow pair; this planner intentionally does not, so some inputs (e.g.
/// times `{1, 4, 5, 6}`) get a slightly longer total than the best possible.
/// When candidate pairs tie on combined time, the first pair in ascending-id
/// enumeration order wins — any maximal pair would be acceptable.
pub struct Planner<'r> {
    roster:    &'r Roster,
    banks:     BankState,
    moves:     Vec<Move>,
    stopwatch: CrossTime,
}

impl<'r> Planner<'r> {
    /// Compute a complete crossing plan for `roster`.
    ///
    /// Infallible: every invalid input is rejected at [`Roster`]
    /// construction, before a planner can exist.
    pub fn solve(roster: &'r Roster) -> Plan {
        let mut planner = Planner {
            roster,
            banks:     BankState::new(roster),
            moves:     Vec::with_capacity(2 * roster.len()),
            stopwatch: CrossTime::ZERO,
        };
        planner.run();
        Plan::new(planner.moves, planner.stopwatch)
    }

    fn run(&mut self) {
        let (f1, f2) = self.roster.fastest_pair();

        while !self.banks.is_complete() {
            // ── Phase 1: a pair crosses ───────────────────────────────────
            //
            // The couriers cross together whenever they are both on the
            // start bank; otherwise the slowest pair still waiting goes.
            let crossing = if self.banks.on_start(f1) && self.banks.on_start(f2) {
                Move::cross_pair(f1, f2)
            } else {
                self.slowest_waiting()
            };
            self.commit(crossing);

            // ── Phase 2: a courier returns the torch ──────────────────────
            //
            // Only needed while travelers are still waiting.  Prefer f1;
            // the step-1 branch guarantees f1 or f2 is across by now.
            if !self.banks.is_complete() {
                let courier = if self.banks.on_destination(f1) { f1 } else { f2 };
                self.commit(Move::Return(courier));
            }
        }
    }

    /// The cross for the waiting travelers with the largest combined time.
    ///
    /// Selection is by *sum* of the pair's times even though the stopwatch
    /// will advance by their *max* — the sum is what clusters slow walkers
    /// together.  Pairs are enumerated in ascending-id order and only a
    /// strictly greater sum displaces the incumbent, so sum ties resolve to
    /// the fastest such pair, deterministically.
    fn slowest_waiting(&self) -> Move {
        let waiting: Vec<TravelerId> = self.banks.start().iter().copied().collect();

        let mut best: Option<(TravelerId, TravelerId, u128)> = None;
        for (i, &a) in waiting.iter().enumerate() {
            for &b in &waiting[i + 1..] {
                let sum = self.roster.time(a).combined(self.roster.time(b));
                if best.is_none_or(|(_, _, s)| sum > s) {
                    best = Some((a, b, sum));
                }
            }
        }

        match best {
            Some((a, b, _)) => Move::cross_pair(a, b),
            // A lone waiting traveler has no pair.  The shuttle pattern
            // never strands exactly one traveler, but the solo cross keeps
            // this total rather than panicking.
            None => Move::Cross(waiting[0], None),
        }
    }

    /// Apply a move to the bank state and advance the stopwatch.
    fn commit(&mut self, mv: Move) {
        match mv {
            Move::Cross(lead, partner) => {
                self.banks.send_over(lead);
                if let Some(p) = partner {
                    self.banks.send_over(p);
                }
            }
            Move::Return(id) => {
                self.banks.send_back(id);
            }
        }
        self.stopwatch += mv.cost(self.roster);
        self.moves.push(mv);
    }
}
