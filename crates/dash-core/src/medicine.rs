//! Medicine, demographic, and supply-tier vocabulary.
//!
//! Variant serialized forms match the keys the pre-compute pipeline writes
//! into the scenario JSON (`"Penicillins"`, `"child"`, …), so these enums
//! deserialize directly as map keys.

use std::fmt;

use serde::{Deserialize, Serialize};

/// Antibiotic class tracked by the ABM.
#[derive(Copy, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Debug, Serialize, Deserialize)]
pub enum MedicineType {
    Penicillins,
    Macrolides,
    Fluoroquinolones,
}

impl MedicineType {
    pub const ALL: [MedicineType; 3] = [
        MedicineType::Penicillins,
        MedicineType::Macrolides,
        MedicineType::Fluoroquinolones,
    ];

    pub fn as_str(self) -> &'static str {
        match self {
            MedicineType::Penicillins      => "Penicillins",
            MedicineType::Macrolides       => "Macrolides",
            MedicineType::Fluoroquinolones => "Fluoroquinolones",
        }
    }
}

impl fmt::Display for MedicineType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Patient age band used for incidence and death accounting.
#[derive(Copy, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Debug, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum AgeGroup {
    Child,
    Adult,
    Elderly,
}

impl AgeGroup {
    pub const ALL: [AgeGroup; 3] = [AgeGroup::Child, AgeGroup::Adult, AgeGroup::Elderly];

    pub fn as_str(self) -> &'static str {
        match self {
            AgeGroup::Child   => "child",
            AgeGroup::Adult   => "adult",
            AgeGroup::Elderly => "elderly",
        }
    }
}

impl fmt::Display for AgeGroup {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Level of the four-tier supply chain, top (production) to bottom
/// (dispensing).  CHCs are aggregated into one region per serving hospital
/// by the pre-compute pipeline, so the dashboard never sees individual CHCs.
#[derive(Copy, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Debug)]
pub enum SupplyTier {
    Manufacturer,
    CentralStore,
    Hospital,
    ChcRegion,
}

impl SupplyTier {
    pub const ALL: [SupplyTier; 4] = [
        SupplyTier::Manufacturer,
        SupplyTier::CentralStore,
        SupplyTier::Hospital,
        SupplyTier::ChcRegion,
    ];

    pub fn as_str(self) -> &'static str {
        match self {
            SupplyTier::Manufacturer => "manufacturer",
            SupplyTier::CentralStore => "central_store",
            SupplyTier::Hospital     => "hospital",
            SupplyTier::ChcRegion    => "chc_region",
        }
    }
}

impl fmt::Display for SupplyTier {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
