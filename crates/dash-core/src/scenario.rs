//! The closed set of pre-computed scenarios.
//!
//! Every scenario was run offline by the ABM and exported as one JSON
//! document per id (see `dash-scenario`).  Keeping the set as an enum makes
//! an unrecognized id unrepresentable past the parsing boundary: anything
//! user-supplied goes through [`FromStr`] and fails with
//! [`CoreError::UnknownScenario`] before it can reach a store lookup.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::CoreError;

/// Identifier of one pre-computed simulation run.
///
/// The serialized form (`as_str`) doubles as the JSON file stem, so
/// `ScenarioId::DiseaseOutbreak` loads from `disease_outbreak.json`.
#[derive(Copy, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Debug, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ScenarioId {
    Base,
    WeatherDelays,
    DiseaseOutbreak,
    AdvanceOrdering,
    ManufacturerFailure,
    OptimizationChallenge,
    AmrSubstitution,
    PrivateSector,
}

impl ScenarioId {
    /// All 8 scenarios, in selector display order.
    pub const ALL: [ScenarioId; 8] = [
        ScenarioId::Base,
        ScenarioId::WeatherDelays,
        ScenarioId::DiseaseOutbreak,
        ScenarioId::AdvanceOrdering,
        ScenarioId::ManufacturerFailure,
        ScenarioId::OptimizationChallenge,
        ScenarioId::AmrSubstitution,
        ScenarioId::PrivateSector,
    ];

    /// Stable snake_case identifier — also the scenario's JSON file stem.
    pub fn as_str(self) -> &'static str {
        match self {
            ScenarioId::Base                  => "base",
            ScenarioId::WeatherDelays         => "weather_delays",
            ScenarioId::DiseaseOutbreak       => "disease_outbreak",
            ScenarioId::AdvanceOrdering       => "advance_ordering",
            ScenarioId::ManufacturerFailure   => "manufacturer_failure",
            ScenarioId::OptimizationChallenge => "optimization_challenge",
            ScenarioId::AmrSubstitution       => "amr_substitution",
            ScenarioId::PrivateSector         => "private_sector",
        }
    }

    /// Human-readable label for the scenario selector.
    pub fn label(self) -> &'static str {
        match self {
            ScenarioId::Base                  => "Base Case",
            ScenarioId::WeatherDelays         => "Weather Delays",
            ScenarioId::DiseaseOutbreak       => "Disease Outbreak",
            ScenarioId::AdvanceOrdering       => "Advance Ordering",
            ScenarioId::ManufacturerFailure   => "Manufacturer Failure",
            ScenarioId::OptimizationChallenge => "Optimized Policy",
            ScenarioId::AmrSubstitution       => "AMR Substitution",
            ScenarioId::PrivateSector         => "Private Sector",
        }
    }
}

impl FromStr for ScenarioId {
    type Err = CoreError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        ScenarioId::ALL
            .into_iter()
            .find(|id| id.as_str() == s)
            .ok_or_else(|| CoreError::UnknownScenario(s.to_string()))
    }
}

impl fmt::Display for ScenarioId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
