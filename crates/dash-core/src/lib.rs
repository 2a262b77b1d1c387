//! `dash-core` — foundational types for the supply chain dashboard.
//!
//! This crate is a dependency of every other `dash-*` crate.  It intentionally
//! has no `dash-*` dependencies and minimal external ones (only `serde` and
//! `thiserror`).
//!
//! # What lives here
//!
//! | Module       | Contents                                              |
//! |--------------|-------------------------------------------------------|
//! | [`scenario`] | `ScenarioId` — the 8 fixed pre-computed scenarios     |
//! | [`time`]     | `Month` (1-based month index), `Speed` (bounded)      |
//! | [`medicine`] | `MedicineType`, `AgeGroup`, `SupplyTier`              |
//! | [`error`]    | `CoreError`, `CoreResult`                             |

pub mod error;
pub mod medicine;
pub mod scenario;
pub mod time;


// ── Re-exports ────────────────────────────────────────────────────────────────

pub use error::{CoreError, CoreResult};
pub use medicine::{AgeGroup, MedicineType, SupplyTier};
pub use scenario::ScenarioId;
pub use time::{Month, Speed};
