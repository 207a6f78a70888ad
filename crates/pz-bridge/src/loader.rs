//! CSV roster loader.
//!
//! # CSV format
//!
//! One row per traveler.  `time` is a positive whole number of time units.
//!
//! ```csv
//! label,time
//! b,2
//! a,1
//! c,7
//! d,10
//! ```
//!
//! Row order is preserved as the roster's tie-break order: travelers with
//! equal times keep their file order.

use std::io::Read;
use std::path::Path;

use serde::Deserialize;

use pz_core::CrossTime;

use crate::error::{PlanError, PlanResult};
use crate::roster::{Roster, Traveler};

// ── CSV record ────────────────────────────────────────────────────────────────

#[derive(Deserialize)]
struct RosterRecord {
    label: String,
    time:  u64,
}

// ── Public API ────────────────────────────────────────────────────────────────

/// Load a [`Roster`] from a CSV file.
pub fn load_roster_csv(path: &Path) -> PlanResult<Roster> {
    let file = std::fs::File::open(path).map_err(PlanError::Io)?;
    load_roster_reader(file)
}

/// Like [`load_roster_csv`] but accepts any `Read` source.
///
/// Useful for testing (pass a `std::io::Cursor`) or embedded inputs.
pub fn load_roster_reader<R: Read>(reader: R) -> PlanResult<Roster> {
    let mut csv_reader = csv::Reader::from_reader(reader);

    let mut travelers: Vec<Traveler> = Vec::new();
    for result in csv_reader.deserialize::<RosterRecord>() {
        let row = result.map_err(|e| PlanError::Parse(e.to_string()))?;
        travelers.push(Traveler::new(row.label, CrossTime(row.time)));
    }

    // Roster::new enforces the count, positivity, and uniqueness rules.
    Roster::new(travelers)
}
