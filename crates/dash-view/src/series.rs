//! Time-series and stock-bar projections for the four metric charts.
//!
//! Line charts use the "reveal" style: the x axis always spans the full
//! horizon, but values are only produced up to the cursor month, so playback
//! draws the lines growing left to right.

use dash_core::{AgeGroup, MedicineType, Month, SupplyTier};
use dash_scenario::{MonthSnapshot, Scenario};

// ── Line series ───────────────────────────────────────────────────────────────

/// One revealed line: `values[i]` belongs to month `i + 1`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Series<K> {
    pub key:    K,
    pub values: Vec<u64>,
}

/// Shortages per medicine class, months `1..=upto`.
///
/// Keys appear in [`MedicineType::ALL`] order so trace colors stay stable
/// across frames; a class absent from a month's map reads as zero.
pub fn shortages_series(scenario: &Scenario, upto: Month) -> Vec<Series<MedicineType>> {
    let upto = upto.clamp(scenario.horizon());
    MedicineType::ALL
        .into_iter()
        .map(|med| Series {
            key:    med,
            values: revealed(scenario, upto)
                .map(|snap| snap.shortages.get(&med).copied().unwrap_or(0))
                .collect(),
        })
        .collect()
}

/// Deaths per age band, months `1..=upto`, in [`AgeGroup::ALL`] order.
pub fn deaths_series(scenario: &Scenario, upto: Month) -> Vec<Series<AgeGroup>> {
    let upto = upto.clamp(scenario.horizon());
    AgeGroup::ALL
        .into_iter()
        .map(|age| Series {
            key:    age,
            values: revealed(scenario, upto)
                .map(|snap| snap.deaths.get(&age).copied().unwrap_or(0))
                .collect(),
        })
        .collect()
}

/// Treatment rate as a percentage, months `1..=upto`.
pub fn treatment_rate_series(scenario: &Scenario, upto: Month) -> Vec<f64> {
    let upto = upto.clamp(scenario.horizon());
    revealed(scenario, upto)
        .map(|snap| snap.treatment_rate * 100.0)
        .collect()
}

fn revealed(scenario: &Scenario, upto: Month) -> impl Iterator<Item = &MonthSnapshot> {
    scenario.months[..=upto.index()].iter()
}

// ── Stock bars ────────────────────────────────────────────────────────────────

/// Stock health bucket, thresholds shared with the network node coloring.
#[derive(Copy, Clone, PartialEq, Eq, Debug)]
pub enum StockStatus {
    /// More than 40% of capacity.
    Healthy,
    /// 20–40% of capacity.
    Low,
    /// Below 20% of capacity.
    Critical,
}

impl StockStatus {
    pub fn from_fill(fill: f64) -> StockStatus {
        if fill < 0.2 {
            StockStatus::Critical
        } else if fill < 0.4 {
            StockStatus::Low
        } else {
            StockStatus::Healthy
        }
    }
}

/// One bar of the current-month stock chart.
#[derive(Debug, Clone, PartialEq)]
pub struct StockBar {
    pub id:          String,
    pub tier:        SupplyTier,
    pub stock:       u64,
    pub capacity:    u64,
    /// `stock / capacity`, in `[0, 1]` for well-formed data.
    pub fill:        f64,
    pub status:      StockStatus,
    pub operational: bool,
}

/// Per-node stock bars for the cursor month, tier by tier top-down.
pub fn stock_bars(snapshot: &MonthSnapshot) -> Vec<StockBar> {
    SupplyTier::ALL
        .iter()
        .flat_map(|&tier| {
            snapshot.stock_levels.tier(tier).iter().map(move |node| {
                let fill = node.fill();
                StockBar {
                    id: node.id.clone(),
                    tier,
                    stock: node.stock,
                    capacity: node.capacity,
                    fill,
                    status: StockStatus::from_fill(fill),
                    operational: node.operational,
                }
            })
        })
        .collect()
}
