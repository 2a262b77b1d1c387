//! JSON scenario loader and structural validation.
//!
//! # Document shape
//!
//! One document per scenario, produced offline by the ABM pipeline:
//!
//! ```json
//! {
//!   "scenario_id": "disease_outbreak",
//!   "scenario_name": "Disease Outbreak",
//!   "n_months": 60,
//!   "months": [
//!     {
//!       "month": 1,
//!       "stock_levels": { "manufacturers": [...], "central_stores": [...],
//!                         "hospitals": [...], "chc_regions": [...] },
//!       "shortages": { "Penicillins": 120, "Macrolides": 40, ... },
//!       "deaths": { "child": 6, "adult": 2, "elderly": 5 },
//!       "wastage": { "Penicillins": 300, ... },
//!       "treatment_rate": 0.91,
//!       "shipments": [ { "from": "CMS_0", "to": "Hospital_1",
//!                        "medicine_type": "Penicillins", "quantity": 5000 } ]
//!     },
//!     ...
//!   ],
//!   "totals": { "shortages": 48210, "deaths": 1834, "wastage": 91200 }
//! }
//! ```
//!
//! # Validation
//!
//! Parsing alone is not enough — the playback invariants assume a dense,
//! ordered month sequence, so the loader rejects documents where
//! `months.len() != n_months`, where month indices are not exactly
//! `1..=n_months` in order, or where a `treatment_rate` falls outside
//! `[0, 1]`.  A rejected document poisons only that scenario; the other
//! seven stay loadable.

use std::io::Read;
use std::path::Path;

use crate::error::{ScenarioError, ScenarioResult};
use crate::index::ScenarioIndex;
use crate::snapshot::Scenario;

// ── Public API ────────────────────────────────────────────────────────────────

/// Load and validate one scenario document from `path`.
pub fn load_scenario_json(path: &Path) -> ScenarioResult<Scenario> {
    let file = std::fs::File::open(path).map_err(ScenarioError::Io)?;
    load_scenario_reader(std::io::BufReader::new(file))
}

/// Like [`load_scenario_json`] but accepts any `Read` source.
///
/// Useful for testing (pass a `std::io::Cursor`) or for scenario data
/// embedded in the binary.
pub fn load_scenario_reader<R: Read>(reader: R) -> ScenarioResult<Scenario> {
    let scenario: Scenario = serde_json::from_reader(reader)?;
    validate(&scenario)?;
    Ok(scenario)
}

/// Load the `index.json` summary from `path`.
pub fn load_index_json(path: &Path) -> ScenarioResult<ScenarioIndex> {
    let file = std::fs::File::open(path).map_err(ScenarioError::Io)?;
    load_index_reader(std::io::BufReader::new(file))
}

/// Like [`load_index_json`] but accepts any `Read` source.
pub fn load_index_reader<R: Read>(reader: R) -> ScenarioResult<ScenarioIndex> {
    Ok(serde_json::from_reader(reader)?)
}

// ── Validation ────────────────────────────────────────────────────────────────

fn validate(scenario: &Scenario) -> ScenarioResult<()> {
    if scenario.n_months == 0 || scenario.months.is_empty() {
        return Err(ScenarioError::Invalid(format!(
            "scenario {} has an empty month sequence",
            scenario.scenario_id
        )));
    }

    if scenario.months.len() != scenario.n_months as usize {
        return Err(ScenarioError::Invalid(format!(
            "scenario {}: {} snapshots but n_months = {}",
            scenario.scenario_id,
            scenario.months.len(),
            scenario.n_months
        )));
    }

    for (i, snap) in scenario.months.iter().enumerate() {
        let expected = i as u32 + 1;
        if snap.month != expected {
            return Err(ScenarioError::Invalid(format!(
                "scenario {}: snapshot at index {i} has month {} (expected {expected})",
                scenario.scenario_id, snap.month
            )));
        }
        if !(0.0..=1.0).contains(&snap.treatment_rate) {
            return Err(ScenarioError::Invalid(format!(
                "scenario {}: month {} treatment_rate {} outside [0, 1]",
                scenario.scenario_id, snap.month, snap.treatment_rate
            )));
        }
    }

    Ok(())
}
