//! The scenario data model.
//!
//! Field names and map keys mirror the JSON written by the pre-compute
//! pipeline exactly; see the loader module docs for the document shape.
//! Everything here is plain data — immutable once deserialized.

use std::collections::HashMap;

use serde::Deserialize;

use dash_core::{AgeGroup, MedicineType, Month, ScenarioId, SupplyTier};

// ── Stock ─────────────────────────────────────────────────────────────────────

/// Stock position of one network node (or aggregated CHC region) for one month.
#[derive(Debug, Clone, Deserialize)]
pub struct NodeStock {
    /// Stable node identifier, e.g. `"Manufacturer_0"`, `"CHC_Region_2"`.
    pub id: String,

    /// Units in stock across all medicine types.
    pub stock: u64,

    /// Storage capacity in units.
    pub capacity: u64,

    /// Only manufacturers can go offline (manufacturer-failure scenario);
    /// the field is absent for every other tier.
    #[serde(default = "default_operational")]
    pub operational: bool,

    /// Number of CHCs aggregated into this region (CHC-region tier only).
    #[serde(default)]
    pub num_chcs: Option<u32>,
}

fn default_operational() -> bool {
    true
}

impl NodeStock {
    /// Stock as a fraction of capacity, in `[0.0, 1.0]` for well-formed data.
    pub fn fill(&self) -> f64 {
        self.stock as f64 / self.capacity.max(1) as f64
    }
}

/// Per-tier stock positions for one month.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct StockLevels {
    pub manufacturers:  Vec<NodeStock>,
    pub central_stores: Vec<NodeStock>,
    pub hospitals:      Vec<NodeStock>,
    pub chc_regions:    Vec<NodeStock>,
}

impl StockLevels {
    /// The nodes of one tier, top-down network order.
    pub fn tier(&self, tier: SupplyTier) -> &[NodeStock] {
        match tier {
            SupplyTier::Manufacturer => &self.manufacturers,
            SupplyTier::CentralStore => &self.central_stores,
            SupplyTier::Hospital     => &self.hospitals,
            SupplyTier::ChcRegion    => &self.chc_regions,
        }
    }

    /// Look a node up by id across all tiers.
    pub fn find(&self, id: &str) -> Option<&NodeStock> {
        SupplyTier::ALL
            .iter()
            .flat_map(|&t| self.tier(t))
            .find(|n| n.id == id)
    }
}

// ── Shipments ─────────────────────────────────────────────────────────────────

/// One recorded shipment between two network nodes during a month.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct Shipment {
    pub from: String,
    pub to: String,
    pub medicine_type: MedicineType,
    pub quantity: u64,
}

// ── MonthSnapshot ─────────────────────────────────────────────────────────────

/// All metrics needed to render one month of a scenario.
#[derive(Debug, Clone, Deserialize)]
pub struct MonthSnapshot {
    /// 1-based month index; snapshot `k` sits at `months[k - 1]`.
    pub month: u32,

    pub stock_levels: StockLevels,

    /// Untreated patients per medicine class this month.
    pub shortages: HashMap<MedicineType, u64>,

    /// Deaths attributable to untreated infections, per age band.
    pub deaths: HashMap<AgeGroup, u64>,

    /// Expired units per medicine class this month.
    pub wastage: HashMap<MedicineType, u64>,

    /// Fraction of demand met, in `[0.0, 1.0]`.
    pub treatment_rate: f64,

    /// Shipments dispatched this month (may legitimately be empty).
    #[serde(default)]
    pub shipments: Vec<Shipment>,
}

impl MonthSnapshot {
    pub fn shortage_total(&self) -> u64 {
        self.shortages.values().sum()
    }

    pub fn death_total(&self) -> u64 {
        self.deaths.values().sum()
    }

    pub fn wastage_total(&self) -> u64 {
        self.wastage.values().sum()
    }
}

// ── Scenario ──────────────────────────────────────────────────────────────────

/// Whole-run aggregate outcomes, shown next to the scenario selector.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize)]
pub struct Totals {
    pub shortages: u64,
    pub deaths:    u64,
    pub wastage:   u64,
}

/// One complete pre-computed scenario: a fixed-horizon ordered sequence of
/// monthly snapshots plus run-level metadata.
///
/// Invariant (enforced by the loader): `months.len() == n_months` and
/// `months[k].month == k + 1` for all `k`.
#[derive(Debug, Clone, Deserialize)]
pub struct Scenario {
    pub scenario_id:   ScenarioId,
    pub scenario_name: String,

    /// The horizon — total number of months in this run.
    pub n_months: u32,

    pub months: Vec<MonthSnapshot>,

    #[serde(default)]
    pub totals: Totals,
}

impl Scenario {
    /// Total number of months in the snapshot sequence.
    #[inline]
    pub fn horizon(&self) -> u32 {
        self.n_months
    }

    /// The snapshot for `month`.
    ///
    /// `month` is clamped into `1..=horizon` first, so this cannot index out
    /// of bounds for a validated scenario.
    pub fn snapshot(&self, month: Month) -> &MonthSnapshot {
        &self.months[month.clamp(self.n_months).index()]
    }
}
