//! `dash-scenario` — pre-computed scenario data for the supply chain dashboard.
//!
//! The ABM pipeline runs all 8 scenarios offline and exports one JSON
//! document per scenario plus an `index.json` summary.  This crate owns the
//! read side: the typed data model, the validating loader, and a caching
//! store.  Nothing here ever writes scenario data.
//!
//! # Crate layout
//!
//! | Module       | Contents                                                  |
//! |--------------|-----------------------------------------------------------|
//! | [`snapshot`] | `Scenario`, `MonthSnapshot`, `StockLevels`, `Shipment`, … |
//! | [`index`]    | `ScenarioIndex`, `IndexEntry`                             |
//! | [`loader`]   | `load_scenario_json`, `load_scenario_reader`, validation  |
//! | [`store`]    | `ScenarioStore` — directory-backed, process-wide cache    |
//! | [`error`]    | `ScenarioError`, `ScenarioResult<T>`                      |
//!
//! # Immutability
//!
//! A `Scenario` is validated once at load and then shared as
//! `Arc<Scenario>`.  Every consumer (timeline, playback, view projections)
//! holds a read-only handle; there is no mutation path after load.

pub mod error;
pub mod index;
pub mod loader;
pub mod snapshot;
pub mod store;


pub use error::{ScenarioError, ScenarioResult};
pub use index::{IndexEntry, ScenarioIndex};
pub use loader::{load_index_json, load_index_reader, load_scenario_json, load_scenario_reader};
pub use snapshot::{MonthSnapshot, NodeStock, Scenario, Shipment, StockLevels, Totals};
pub use store::ScenarioStore;
