//! `ScenarioStore` — directory-backed scenario access with a process-wide cache.

use std::collections::HashMap;
use std::io::ErrorKind;
use std::path::PathBuf;
use std::sync::{Arc, Mutex};

use tracing::{debug, info};

use dash_core::ScenarioId;

use crate::error::{ScenarioError, ScenarioResult};
use crate::index::ScenarioIndex;
use crate::loader::{load_index_json, load_scenario_json};
use crate::snapshot::Scenario;

/// Serves validated, immutable scenarios from a data directory.
///
/// The directory holds one `{id}.json` per scenario plus `index.json`.  Each
/// scenario is read and validated at most once per process; afterwards every
/// `load` returns a clone of the cached `Arc<Scenario>`.  Loaded scenarios
/// are read-only, so sharing the `Arc` across sessions is safe.
///
/// `load` takes `&self` — the cache sits behind a `Mutex`, letting a single
/// store instance live for the whole process while sessions come and go.
pub struct ScenarioStore {
    dir:   PathBuf,
    cache: Mutex<HashMap<ScenarioId, Arc<Scenario>>>,
}

impl ScenarioStore {
    /// Create a store over `dir`.  No I/O happens until the first `load`.
    pub fn new(dir: impl Into<PathBuf>) -> Self {
        Self {
            dir:   dir.into(),
            cache: Mutex::new(HashMap::new()),
        }
    }

    /// Load `id`, serving the cache after the first call.
    ///
    /// # Errors
    ///
    /// - [`ScenarioError::NotFound`] — no `{id}.json` in the directory.
    /// - [`ScenarioError::Json`] / [`ScenarioError::Invalid`] — the document
    ///   is malformed.  Only this scenario is affected; the cache still
    ///   serves every previously loaded one.
    pub fn load(&self, id: ScenarioId) -> ScenarioResult<Arc<Scenario>> {
        if let Some(cached) = self.lock_cache().get(&id) {
            debug!(scenario = %id, "scenario cache hit");
            return Ok(Arc::clone(cached));
        }

        let path = self.dir.join(format!("{}.json", id.as_str()));
        let scenario = match load_scenario_json(&path) {
            Err(ScenarioError::Io(e)) if e.kind() == ErrorKind::NotFound => {
                return Err(ScenarioError::NotFound(id));
            }
            other => other?,
        };

        if scenario.scenario_id != id {
            return Err(ScenarioError::Invalid(format!(
                "{path:?} declares scenario_id {} (expected {id})",
                scenario.scenario_id,
            )));
        }

        info!(scenario = %id, months = scenario.n_months, "loaded scenario");
        let scenario = Arc::new(scenario);
        self.lock_cache().insert(id, Arc::clone(&scenario));
        Ok(scenario)
    }

    /// Load the `index.json` selector summary.  Not cached — it is read once
    /// at session start, and a tiny file besides.
    pub fn index(&self) -> ScenarioResult<ScenarioIndex> {
        load_index_json(&self.dir.join("index.json"))
    }

    /// Number of scenarios currently cached.
    pub fn cached_count(&self) -> usize {
        self.lock_cache().len()
    }

    fn lock_cache(&self) -> std::sync::MutexGuard<'_, HashMap<ScenarioId, Arc<Scenario>>> {
        // A poisoned lock only means another thread panicked mid-insert;
        // the map itself is still structurally sound.
        self.cache.lock().unwrap_or_else(|e| e.into_inner())
    }
}
