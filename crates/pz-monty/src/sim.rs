//! The `MontySim` struct and its round loop.

use pz_core::TrialRng;

use crate::error::{MontyError, MontyResult};
use crate::observer::MontyObserver;
use crate::stats::WinTally;
use crate::trial::play_round;

// ── MontyConfig ───────────────────────────────────────────────────────────────

/// Simulation configuration.
#[derive(Copy, Clone, Debug)]
pub struct MontyConfig {
    /// Number of rounds to simulate.  Must be at least 1.
    pub rounds: u64,
    /// RNG seed.  The same seed always produces identical results.
    pub seed:   u64,
}

// ── MontySim ──────────────────────────────────────────────────────────────────

/// The simulation runner: plays `config.rounds` rounds, feeding each outcome
/// to an observer and accumulating the win tally.
pub struct MontySim {
    config: MontyConfig,
    rng:    TrialRng,
}

impl MontySim {
    /// Validate `config` and seed the trial RNG.
    pub fn new(config: MontyConfig) -> MontyResult<Self> {
        if config.rounds == 0 {
            return Err(MontyError::Config("rounds must be at least 1".into()));
        }
        Ok(Self {
            rng: TrialRng::new(config.seed),
            config,
        })
    }

    pub fn config(&self) -> &MontyConfig {
        &self.config
    }

    /// Run all configured rounds and return the final tally.
    ///
    /// Calls `observer.on_round` after every round and `on_sim_end` once at
    /// the end.  Use [`NoopObserver`][crate::NoopObserver] if you only need
    /// the tally.
    ///
    /// Running the same `MontySim` twice continues the RNG stream; build a
    /// fresh sim from the same config to reproduce a run exactly.
    pub fn run<O: MontyObserver>(&mut self, observer: &mut O) -> WinTally {
        let mut tally = WinTally::new();

        for round in 0..self.config.rounds {
            let outcome = play_round(&mut self.rng);
            tally.record(&outcome);
            observer.on_round(round, &outcome, &tally);
        }

        observer.on_sim_end(&tally);
        tally
    }
}
