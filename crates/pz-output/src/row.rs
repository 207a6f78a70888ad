//! Plain data row types written by the output backend.

use pz_bridge::{Move, Plan, Roster};
use pz_core::CrossTime;

/// One bridge move with the stopwatch reading after it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MoveRow {
    /// 1-based position in the plan.
    pub step:    usize,
    /// `"cross"` or `"return"`.
    pub kind:    &'static str,
    /// Label of the (faster) participant.
    pub lead:    String,
    /// Label of the second participant; empty for returns and solo crossings.
    pub partner: String,
    /// This move's stopwatch contribution.
    pub cost:    u64,
    /// Total elapsed time after this move.
    pub elapsed: u64,
}

/// Running Monte Carlo results after one Monty Hall round.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RoundRow {
    /// 1-based round number.
    pub round:       u64,
    pub stick_cum:   u64,
    pub switch_cum:  u64,
    pub stick_rate:  f64,
    pub switch_rate: f64,
}

/// Flatten a plan into rows, resolving ids to labels and accumulating the
/// running clock.
pub fn plan_rows(plan: &Plan, roster: &Roster) -> Vec<MoveRow> {
    let mut elapsed = CrossTime::ZERO;
    plan.moves()
        .iter()
        .enumerate()
        .map(|(i, mv)| {
            let cost = mv.cost(roster);
            elapsed += cost;
            let (kind, lead, partner) = match *mv {
                Move::Cross(lead, Some(p)) => {
                    ("cross", roster.label(lead).to_string(), roster.label(p).to_string())
                }
                Move::Cross(lead, None) => ("cross", roster.label(lead).to_string(), String::new()),
                Move::Return(id) => ("return", roster.label(id).to_string(), String::new()),
            };
            MoveRow {
                step: i + 1,
                kind,
                lead,
                partner,
                cost: cost.0,
                elapsed: elapsed.0,
            }
        })
        .collect()
}
