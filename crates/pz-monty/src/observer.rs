//! Simulation observer trait for progress reporting and data collection.

use crate::stats::WinTally;
use crate::trial::RoundOutcome;

/// Callbacks invoked by [`MontySim::run`][crate::MontySim::run].
///
/// All methods have default no-op implementations so implementors only need
/// to override what they care about.
///
/// # Example — progress printer
///
/// ```rust,ignore
/// struct ProgressPrinter { interval: u64 }
///
/// impl MontyObserver for ProgressPrinter {
///     fn on_round(&mut self, round: u64, _: &RoundOutcome, tally: &WinTally) {
///         if (round + 1) % self.interval == 0 {
///             println!("round {}: switch rate {:.3}", round + 1, tally.switch_rate());
///         }
///     }
/// }
/// ```
pub trait MontyObserver {
    /// Called after each round, with the round index (0-based), the round's
    /// outcome, and the running tally *including* this round.
    fn on_round(&mut self, _round: u64, _outcome: &RoundOutcome, _tally: &WinTally) {}

    /// Called once after the final round.
    fn on_sim_end(&mut self, _tally: &WinTally) {}
}

/// A [`MontyObserver`] that does nothing.  Use when you only want the final
/// tally from `run`.
pub struct NoopObserver;

impl MontyObserver for NoopObserver {}
