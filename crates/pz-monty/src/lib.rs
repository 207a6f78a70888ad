//! `pz-monty` — Monte Carlo simulation of the Monty Hall problem.
//!
//! Three doors, one prize.  The player picks a door; the host opens a
//! different door that hides a goat; the player either sticks with the first
//! pick or switches to the remaining closed door.  Each simulated round
//! scores *both* strategies against the same prize placement, so the two win
//! counts always sum to the round count.
//!
//! Runs are deterministic: the same seed reproduces the same outcome
//! sequence, round for round.
//!
//! | Module       | Contents                                  |
//! |--------------|-------------------------------------------|
//! | [`trial`]    | One round: `play_round`, `RoundOutcome`   |
//! | [`sim`]      | `MontyConfig`, `MontySim` run loop        |
//! | [`observer`] | `MontyObserver` callbacks                 |
//! | [`stats`]    | `WinTally`, `CumulativeWins`              |
//! | [`error`]    | `MontyError`, `MontyResult`               |
//!
//! # Quick-start
//!
//! ```rust,ignore
//! use pz_monty::{MontyConfig, MontySim, NoopObserver};
//!
//! let mut sim = MontySim::new(MontyConfig { rounds: 10_000, seed: 42 })?;
//! let tally = sim.run(&mut NoopObserver);
//! println!("switch wins {:.3} of rounds", tally.switch_rate());
//! ```

pub mod error;
pub mod observer;
pub mod sim;
pub mod stats;
pub mod trial;


// ── Re-exports ────────────────────────────────────────────────────────────────

pub use error::{MontyError, MontyResult};
pub use observer::{MontyObserver, NoopObserver};
pub use sim::{MontyConfig, MontySim};
pub use stats::{CumulativeWins, WinTally};
pub use trial::{play_round, RoundOutcome, DOOR_COUNT};
