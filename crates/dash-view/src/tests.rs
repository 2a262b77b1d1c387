//! Unit tests for the view projections.

use std::collections::HashMap;

use dash_core::{AgeGroup, MedicineType, Month, ScenarioId, SupplyTier};
use dash_scenario::{MonthSnapshot, NodeStock, Scenario, Shipment, StockLevels, Totals};

use crate::{
    deaths_series, metrics_bar, network_figure, shortages_series, stock_bars,
    treatment_rate_series, MetricsCsv, StockStatus,
};

// ── Helpers ───────────────────────────────────────────────────────────────────

fn node(id: &str, stock: u64, capacity: u64) -> NodeStock {
    NodeStock {
        id: id.to_string(),
        stock,
        capacity,
        operational: true,
        num_chcs: None,
    }
}

fn stock_levels() -> StockLevels {
    StockLevels {
        manufacturers:  vec![node("MFR_0", 45_000, 50_000), node("MFR_1", 5_000, 50_000)],
        central_stores: vec![node("CMS_0", 80_000, 100_000)],
        hospitals:      vec![
            node("HOSP_0", 9_000, 20_000),
            node("HOSP_1", 6_000, 20_000),
            node("HOSP_2", 15_000, 20_000),
        ],
        chc_regions:    vec![
            node("CHC_Region_0", 300, 2_000),
            node("CHC_Region_1", 900, 2_000),
            node("CHC_Region_2", 1_500, 2_000),
        ],
    }
}

fn snap(month: u32, shipments: Vec<Shipment>) -> MonthSnapshot {
    MonthSnapshot {
        month,
        stock_levels: stock_levels(),
        shortages: HashMap::from([
            (MedicineType::Penicillins, 10 * month as u64),
            (MedicineType::Macrolides, 5),
            // Fluoroquinolones intentionally absent — reads as zero.
        ]),
        deaths: HashMap::from([(AgeGroup::Child, month as u64), (AgeGroup::Elderly, 2)]),
        wastage: HashMap::from([(MedicineType::Penicillins, 100)]),
        treatment_rate: 0.75,
        shipments,
    }
}

fn ship(from: &str, to: &str, quantity: u64) -> Shipment {
    Shipment {
        from: from.to_string(),
        to: to.to_string(),
        medicine_type: MedicineType::Penicillins,
        quantity,
    }
}

fn scenario(horizon: u32) -> Scenario {
    Scenario {
        scenario_id:   ScenarioId::Base,
        scenario_name: "Base Case".to_string(),
        n_months:      horizon,
        months:        (1..=horizon).map(|m| snap(m, vec![])).collect(),
        totals:        Totals::default(),
    }
}

// ── Line series ───────────────────────────────────────────────────────────────

#[cfg(test)]
mod series {
    use super::*;

    #[test]
    fn reveals_only_up_to_the_cursor() {
        let s = scenario(12);
        let lines = shortages_series(&s, Month(4));

        assert_eq!(lines.len(), 3);
        assert_eq!(lines[0].key, MedicineType::Penicillins);
        assert_eq!(lines[0].values, vec![10, 20, 30, 40]);
        // Absent map keys read as zero rather than breaking the line.
        assert_eq!(lines[2].key, MedicineType::Fluoroquinolones);
        assert_eq!(lines[2].values, vec![0, 0, 0, 0]);
    }

    #[test]
    fn deaths_follow_age_group_order() {
        let s = scenario(6);
        let lines = deaths_series(&s, Month(2));

        let keys: Vec<_> = lines.iter().map(|l| l.key).collect();
        assert_eq!(keys, AgeGroup::ALL.to_vec());
        assert_eq!(lines[0].values, vec![1, 2]); // child deaths = month index
        assert_eq!(lines[1].values, vec![0, 0]); // no adult deaths recorded
    }

    #[test]
    fn treatment_rate_is_percent() {
        let s = scenario(6);
        assert_eq!(treatment_rate_series(&s, Month(3)), vec![75.0, 75.0, 75.0]);
    }

    #[test]
    fn cursor_past_the_horizon_clamps() {
        let s = scenario(5);
        assert_eq!(treatment_rate_series(&s, Month(999)).len(), 5);
    }
}

// ── Stock bars ────────────────────────────────────────────────────────────────

#[cfg(test)]
mod stock {
    use super::*;

    #[test]
    fn status_thresholds() {
        assert_eq!(StockStatus::from_fill(0.19), StockStatus::Critical);
        assert_eq!(StockStatus::from_fill(0.20), StockStatus::Low);
        assert_eq!(StockStatus::from_fill(0.39), StockStatus::Low);
        assert_eq!(StockStatus::from_fill(0.40), StockStatus::Healthy);
        assert_eq!(StockStatus::from_fill(0.90), StockStatus::Healthy);
    }

    #[test]
    fn bars_cover_all_tiers_top_down() {
        let s = snap(1, vec![]);
        let bars = stock_bars(&s);

        assert_eq!(bars.len(), 9);
        assert_eq!(bars[0].tier, SupplyTier::Manufacturer);
        assert_eq!(bars[8].tier, SupplyTier::ChcRegion);

        let mfr1 = bars.iter().find(|b| b.id == "MFR_1").unwrap();
        assert_eq!(mfr1.status, StockStatus::Critical); // 5k of 50k
        let region0 = bars.iter().find(|b| b.id == "CHC_Region_0").unwrap();
        assert_eq!(region0.status, StockStatus::Critical); // 300 of 2000
        let region2 = bars.iter().find(|b| b.id == "CHC_Region_2").unwrap();
        assert_eq!(region2.status, StockStatus::Healthy); // 1500 of 2000
    }
}

// ── Network figure ────────────────────────────────────────────────────────────

#[cfg(test)]
mod network {
    use super::*;

    #[test]
    fn layout_places_tiers_on_fixed_rows() {
        let fig = network_figure(&snap(1, vec![]));

        let mfr0 = fig.node("MFR_0").unwrap();
        let mfr1 = fig.node("MFR_1").unwrap();
        let cms = fig.node("CMS_0").unwrap();
        let region = fig.node("CHC_Region_1").unwrap();

        assert_eq!(mfr0.y, 1.0);
        assert_eq!(cms.y, 0.66);
        assert_eq!(region.y, 0.0);

        // Two manufacturers spread symmetrically; a lone store sits centered.
        assert_eq!(mfr0.x, -0.5);
        assert_eq!(mfr1.x, 0.5);
        assert_eq!(cms.x, 0.0);
    }

    #[test]
    fn static_edges_follow_the_tier_structure() {
        let fig = network_figure(&snap(1, vec![]));

        // 2 mfr→cms + 3 cms→hosp + 3 hosp→region.
        assert_eq!(fig.static_edges.len(), 8);
        assert!(fig
            .static_edges
            .contains(&("HOSP_2".to_string(), "CHC_Region_2".to_string())));
    }

    #[test]
    fn flows_aggregate_and_scale() {
        let fig = network_figure(&snap(2, vec![
            ship("CMS_0", "HOSP_0", 4_000),
            ship("CMS_0", "HOSP_0", 1_000), // same edge, summed
            ship("HOSP_1", "CHC_Region_1", 2_500),
        ]));

        assert_eq!(fig.flows.len(), 2);
        let cms_flow = fig.flows.iter().find(|f| f.from == "CMS_0").unwrap();
        assert_eq!(cms_flow.quantity, 5_000);
        assert_eq!(cms_flow.relative, 1.0);
        let hosp_flow = fig.flows.iter().find(|f| f.from == "HOSP_1").unwrap();
        assert_eq!(hosp_flow.relative, 0.5);
    }

    #[test]
    fn individual_chc_targets_fold_into_their_region() {
        let fig = network_figure(&snap(2, vec![ship("HOSP_1", "CHC_017", 500)]));

        assert_eq!(fig.flows.len(), 1);
        // CHC_017 → region (17 - 1) % 3 = 1.
        assert_eq!(fig.flows[0].to, "CHC_Region_1");
    }

    #[test]
    fn flows_to_unknown_nodes_are_dropped() {
        let fig = network_figure(&snap(2, vec![
            ship("MFR_9", "CMS_0", 100),
            ship("CMS_0", "HOSP_0", 4_000),
        ]));

        assert_eq!(fig.flows.len(), 1);
        assert_eq!(fig.flows[0].from, "CMS_0");
    }
}

// ── Metrics bar ───────────────────────────────────────────────────────────────

#[cfg(test)]
mod metrics {
    use super::*;

    #[test]
    fn cumulative_totals_include_the_cursor_month() {
        let s = scenario(24);
        let bar = metrics_bar(&s, Month(3));

        // Shortages per month: (10m + 5); cumulative = 15 + 25 + 35.
        assert_eq!(bar.cumulative.shortages, 75);
        assert_eq!(bar.month_shortages, 35);
        // Deaths per month: (m + 2); cumulative = 3 + 4 + 5.
        assert_eq!(bar.cumulative.deaths, 12);
        assert_eq!(bar.month_deaths, 5);
        assert_eq!(bar.treatment_rate_pct, 75.0);
        assert_eq!(bar.year, 1);
    }

    #[test]
    fn year_rolls_over_every_twelve_months() {
        let s = scenario(24);
        assert_eq!(metrics_bar(&s, Month(12)).year, 1);
        assert_eq!(metrics_bar(&s, Month(13)).year, 2);
    }
}

// ── CSV export ────────────────────────────────────────────────────────────────

#[cfg(test)]
mod export {
    use super::*;

    #[test]
    fn one_row_per_month_plus_header() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("metrics.csv");

        let s = scenario(6);
        let mut csv = MetricsCsv::create(&path).unwrap();
        csv.write_scenario(&s).unwrap();
        csv.finish().unwrap();
        csv.finish().unwrap(); // idempotent

        let body = std::fs::read_to_string(&path).unwrap();
        let lines: Vec<_> = body.lines().collect();
        assert_eq!(lines.len(), 7);
        assert!(lines[0].starts_with("scenario,month,shortages_penicillins"));
        assert!(lines[1].starts_with("base,1,10,5,0,"));
        assert!(lines[1].ends_with("0.7500"));
    }
}
