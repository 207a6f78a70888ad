//! `pz-bridge` — the bridge-and-torch Crossing Planner.
//!
//! A party of travelers must cross a bridge at night.  At most two may cross at a
//! time, they share one torch, the torch must accompany every crossing, and a
//! pair walks at the pace of its slower member.  Given each traveler's
//! individual crossing time, the planner produces the full sequence of
//! crossings and solo torch returns, plus the total elapsed time.
//!
//! # Heuristic
//!
//! The planner uses a fixed greedy rule: the two fastest travelers shuttle
//! the torch, and whenever they cannot cross together, the pair with the
//! largest *combined* time crosses instead (clustering slow with slow).  The
//! stopwatch always advances by the *maximum* of a pair's times, never the
//! sum.  This rule is deliberately not globally optimal for every input —
//! see [`Planner`] for the known limits.
//!
//! | Module      | Contents                                      |
//! |-------------|-----------------------------------------------|
//! | [`roster`]  | `Traveler`, `Roster` (validated, sorted)      |
//! | [`bank`]    | `Bank`, `BankState` side sets                 |
//! | [`plan`]    | `Move`, `Plan`, independent replay            |
//! | [`planner`] | `Planner` — the greedy heuristic              |
//! | [`loader`]  | CSV roster loading                            |
//! | [`error`]   | `PlanError`, `PlanResult`                     |

pub mod bank;
pub mod error;
pub mod loader;
pub mod plan;
pub mod planner;
pub mod roster;

#[cfg(test)]
mod tests;

// ── Re-exports ────────────────────────────────────────────────────────────────

pub use bank::{Bank, BankState};
pub use error::{PlanError, PlanResult};
pub use loader::{load_roster_csv, load_roster_reader};
pub use plan::{Move, Plan, ReplaySummary};
pub use planner::Planner;
pub use roster::{Roster, Traveler};
