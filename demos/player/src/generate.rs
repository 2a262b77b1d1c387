//! Synthetic scenario generator for running the demo without real ABM
//! exports.  Shapes match the pre-compute pipeline's documents; the numbers
//! are smooth fakes (seasonal sine-ish shortage curve, outbreak multiplier),
//! good enough to watch the playback machinery work.

use std::path::Path;

use anyhow::Result;
use serde_json::json;

const HORIZON: u32 = 24;

pub fn write_demo_scenarios(dir: &Path) -> Result<()> {
    std::fs::create_dir_all(dir)?;

    let scenarios = [("base", "Base Case", 1.0), ("disease_outbreak", "Disease Outbreak", 3.0)];
    let mut index = serde_json::Map::new();

    for (id, name, severity) in scenarios {
        let doc = scenario_doc(id, name, severity);
        std::fs::write(dir.join(format!("{id}.json")), serde_json::to_string(&doc)?)?;
        index.insert(
            id.to_string(),
            json!({ "name": name, "totals": doc["totals"].clone() }),
        );
    }

    std::fs::write(dir.join("index.json"), serde_json::to_string(&index)?)?;
    Ok(())
}

fn scenario_doc(id: &str, name: &str, severity: f64) -> serde_json::Value {
    let mut months = Vec::new();
    let mut total_shortages = 0u64;
    let mut total_deaths = 0u64;
    let mut total_wastage = 0u64;

    for m in 1..=HORIZON {
        // Seasonal pressure peaking mid-year, scaled by scenario severity.
        let season = 1.0 + 0.5 * ((m as f64 / 12.0) * std::f64::consts::TAU).sin();
        let shortage = (40.0 * season * severity) as u64;
        let deaths = shortage / 12;
        let wastage = 200 + 10 * m as u64;
        total_shortages += shortage + shortage / 2 + shortage / 4;
        total_deaths += deaths + deaths / 2 + deaths;
        total_wastage += wastage / 2 + wastage / 4 + wastage / 4;

        let drain = |capacity: u64| capacity / 2 - (capacity / 64) * (m as u64 % 16);
        months.push(json!({
            "month": m,
            "stock_levels": {
                "manufacturers": [
                    { "id": "MFR_0", "stock": drain(50_000), "capacity": 50_000, "operational": true },
                    { "id": "MFR_1", "stock": drain(50_000), "capacity": 50_000, "operational": true }
                ],
                "central_stores": [
                    { "id": "CMS_0", "stock": drain(100_000), "capacity": 100_000 }
                ],
                "hospitals": [
                    { "id": "HOSP_0", "stock": drain(20_000), "capacity": 20_000 },
                    { "id": "HOSP_1", "stock": drain(20_000), "capacity": 20_000 },
                    { "id": "HOSP_2", "stock": drain(20_000), "capacity": 20_000 }
                ],
                "chc_regions": [
                    { "id": "CHC_Region_0", "stock": drain(2_000), "capacity": 2_000, "num_chcs": 34 },
                    { "id": "CHC_Region_1", "stock": drain(2_000), "capacity": 2_000, "num_chcs": 33 },
                    { "id": "CHC_Region_2", "stock": drain(2_000), "capacity": 2_000, "num_chcs": 33 }
                ]
            },
            "shortages": {
                "Penicillins": shortage,
                "Macrolides": shortage / 2,
                "Fluoroquinolones": shortage / 4
            },
            "deaths": { "child": deaths, "adult": deaths / 2, "elderly": deaths },
            "wastage": { "Penicillins": wastage / 2, "Macrolides": wastage / 4, "Fluoroquinolones": wastage / 4 },
            "treatment_rate": (1.0 - 0.002 * severity * season).max(0.0),
            "shipments": [
                { "from": "CMS_0", "to": "HOSP_0", "medicine_type": "Penicillins",
                  "quantity": 4_000 + 100 * m as u64 },
                { "from": "HOSP_1", "to": "CHC_Region_1", "medicine_type": "Macrolides",
                  "quantity": 1_500 }
            ]
        }));
    }

    json!({
        "scenario_id": id,
        "scenario_name": name,
        "n_months": HORIZON,
        "months": months,
        "totals": {
            "shortages": total_shortages,
            "deaths": total_deaths,
            "wastage": total_wastage
        }
    })
}
