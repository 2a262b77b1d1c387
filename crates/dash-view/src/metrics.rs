//! The bottom metrics bar.

use dash_core::Month;
use dash_scenario::{Scenario, Totals};

/// Everything the metrics bar shows for one cursor position.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct MetricsBar {
    pub month:   Month,
    pub horizon: u32,
    /// Simulation year the cursor sits in (months 1–12 → year 1).
    pub year:    u32,

    /// Running totals through the cursor month, inclusive.
    pub cumulative: Totals,

    /// This month's contribution, shown as the metric delta.
    pub month_shortages: u64,
    pub month_deaths:    u64,

    /// Current month's treatment rate as a percentage.
    pub treatment_rate_pct: f64,
}

/// Compute the metrics bar for `month`.
pub fn metrics_bar(scenario: &Scenario, month: Month) -> MetricsBar {
    let month = month.clamp(scenario.horizon());
    let through = &scenario.months[..=month.index()];

    let cumulative = Totals {
        shortages: through.iter().map(|m| m.shortage_total()).sum(),
        deaths:    through.iter().map(|m| m.death_total()).sum(),
        wastage:   through.iter().map(|m| m.wastage_total()).sum(),
    };
    let current = scenario.snapshot(month);

    MetricsBar {
        month,
        horizon: scenario.horizon(),
        year: month.year(),
        cumulative,
        month_shortages: current.shortage_total(),
        month_deaths: current.death_total(),
        treatment_rate_pct: current.treatment_rate * 100.0,
    }
}
