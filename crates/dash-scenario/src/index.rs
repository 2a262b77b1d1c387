//! The `index.json` summary document.
//!
//! Written once by the pre-compute pipeline alongside the per-scenario
//! files; the scenario selector is rendered from this, so the dashboard can
//! list every run without loading 8 full documents up front.

use std::collections::HashMap;

use serde::Deserialize;

use dash_core::ScenarioId;

use crate::snapshot::Totals;

/// Selector-level metadata for one scenario.
#[derive(Debug, Clone, Deserialize)]
pub struct IndexEntry {
    /// Human-readable name, e.g. `"Disease Outbreak"`.
    pub name: String,

    #[serde(default)]
    pub totals: Totals,
}

/// Parsed `index.json`: one entry per exported scenario.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(transparent)]
pub struct ScenarioIndex {
    entries: HashMap<ScenarioId, IndexEntry>,
}

impl ScenarioIndex {
    pub fn get(&self, id: ScenarioId) -> Option<&IndexEntry> {
        self.entries.get(&id)
    }

    pub fn contains(&self, id: ScenarioId) -> bool {
        self.entries.contains_key(&id)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Entries in [`ScenarioId::ALL`] selector order, skipping any scenario
    /// missing from the index file.
    pub fn iter_ordered(&self) -> impl Iterator<Item = (ScenarioId, &IndexEntry)> {
        ScenarioId::ALL
            .into_iter()
            .filter_map(|id| self.entries.get(&id).map(|e| (id, e)))
    }
}
