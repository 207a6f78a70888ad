//! Win statistics: the running tally and the cumulative series.

use crate::observer::MontyObserver;
use crate::trial::RoundOutcome;

// ── WinTally ──────────────────────────────────────────────────────────────────

/// Running win counts for both strategies.
///
/// Because every round is scored for both strategies against the same prize
/// placement, `stick_wins + switch_wins == rounds` at all times.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq)]
pub struct WinTally {
    pub rounds:      u64,
    pub stick_wins:  u64,
    pub switch_wins: u64,
}

impl WinTally {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn record(&mut self, outcome: &RoundOutcome) {
        self.rounds += 1;
        self.stick_wins += outcome.stick_won as u64;
        self.switch_wins += outcome.switch_won as u64;
    }

    /// Fraction of rounds won by sticking.  Converges to 1/3.
    /// Returns 0.0 before any round has been played.
    pub fn stick_rate(&self) -> f64 {
        rate(self.stick_wins, self.rounds)
    }

    /// Fraction of rounds won by switching.  Converges to 2/3.
    /// Returns 0.0 before any round has been played.
    pub fn switch_rate(&self) -> f64 {
        rate(self.switch_wins, self.rounds)
    }
}

fn rate(wins: u64, rounds: u64) -> f64 {
    if rounds == 0 {
        0.0
    } else {
        wins as f64 / rounds as f64
    }
}

// ── CumulativeWins ────────────────────────────────────────────────────────────

/// Per-round running win totals for both strategies.
///
/// This is the data behind the classic "cumulative wins" and
/// "law of large numbers" convergence charts: entry `i` holds each
/// strategy's win count after round `i + 1`.  Implemented as a
/// [`MontyObserver`] so it can be attached directly to a run.
#[derive(Clone, Debug, Default)]
pub struct CumulativeWins {
    stick:  Vec<u64>,
    switch: Vec<u64>,
}

impl CumulativeWins {
    pub fn new() -> Self {
        Self::default()
    }

    /// Pre-allocate for a known round count (capped so a huge configured
    /// round count cannot front-load a huge allocation).
    pub fn with_capacity(rounds: u64) -> Self {
        let cap = rounds.min(1_000_000) as usize;
        Self {
            stick:  Vec::with_capacity(cap),
            switch: Vec::with_capacity(cap),
        }
    }

    pub fn len(&self) -> usize {
        self.stick.len()
    }

    pub fn is_empty(&self) -> bool {
        self.stick.is_empty()
    }

    /// Running totals after round `i + 1`, as `(stick, switch)`.
    ///
    /// # Panics
    /// Panics if fewer than `i + 1` rounds have been observed.
    pub fn at(&self, i: usize) -> (u64, u64) {
        (self.stick[i], self.switch[i])
    }

    pub fn stick(&self) -> &[u64] {
        &self.stick
    }

    pub fn switch(&self) -> &[u64] {
        &self.switch
    }

    /// Running win *rates* after round `i + 1`, as `(stick, switch)`.
    ///
    /// # Panics
    /// Panics if fewer than `i + 1` rounds have been observed.
    pub fn rates_at(&self, i: usize) -> (f64, f64) {
        let n = (i + 1) as f64;
        (self.stick[i] as f64 / n, self.switch[i] as f64 / n)
    }
}

impl MontyObserver for CumulativeWins {
    fn on_round(&mut self, _round: u64, _outcome: &RoundOutcome, tally: &WinTally) {
        self.stick.push(tally.stick_wins);
        self.switch.push(tally.switch_wins);
    }
}
