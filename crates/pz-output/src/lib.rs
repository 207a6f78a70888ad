//! `pz-output` — result writers for the rust_pz demos.
//!
//! One backend, up to two files (each created lazily on its first write):
//!
//! | File                  | Contents                                        |
//! |-----------------------|-------------------------------------------------|
//! | `crossing_plan.csv`   | One row per bridge move with the running clock  |
//! | `cumulative_wins.csv` | One row per Monty Hall round: totals and rates  |
//!
//! The backend implements [`OutputWriter`]; the Monty Hall side is driven by
//! [`MontyOutputObserver`], which implements `pz_monty::MontyObserver`, and
//! the bridge side by the [`plan_rows`] conversion.
//!
//! # Usage
//!
//! ```rust,ignore
//! use pz_output::{plan_rows, CsvWriter, MontyOutputObserver, OutputWriter};
//!
//! let mut writer = CsvWriter::new(Path::new("./output"))?;
//! writer.write_moves(&plan_rows(&plan, &roster))?;
//!
//! let mut obs = MontyOutputObserver::new(writer);
//! sim.run(&mut obs);
//! obs.take_error().map(|e| eprintln!("output error: {e}"));
//! ```

pub mod csv;
pub mod error;
pub mod observer;
pub mod row;
pub mod writer;

#[cfg(test)]
mod tests;

pub use csv::CsvWriter;
pub use error::{OutputError, OutputResult};
pub use observer::MontyOutputObserver;
pub use row::{plan_rows, MoveRow, RoundRow};
pub use writer::OutputWriter;
