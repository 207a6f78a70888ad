//! `pz-core` — foundational types for the `rust_pz` puzzle workspace.
//!
//! This crate is a dependency of every other `pz-*` crate.  It intentionally
//! has no `pz-*` dependencies and minimal external ones (only `rand` and
//! `thiserror`, plus optional `serde`).
//!
//! # What lives here
//!
//! | Module      | Contents                                  |
//! |-------------|-------------------------------------------|
//! | [`ids`]     | `TravelerId`, `DoorId`                    |
//! | [`time`]    | `CrossTime` duration newtype              |
//! | [`rng`]     | `TrialRng` (seeded, reproducible)         |
//! | [`error`]   | `PzError`, `PzResult`                     |
//!
//! # Feature flags
//!
//! | Flag    | Effect                                              |
//! |---------|-----------------------------------------------------|
//! | `serde` | Adds `Serialize`/`Deserialize` to all public types. |

pub mod error;
pub mod ids;
pub mod rng;
pub mod time;


// ── Re-exports ────────────────────────────────────────────────────────────────

pub use error::{PzError, PzResult};
pub use ids::{DoorId, TravelerId};
pub use rng::TrialRng;
pub use time::CrossTime;
