//! Supply chain network figure data.
//!
//! The network has a fixed four-row hierarchical layout (manufacturers at
//! the top, CHC regions at the bottom).  Structural edges never change;
//! per-month flow edges are aggregated from the snapshot's shipment list and
//! carry a relative width so the renderer can scale line thickness.
//!
//! Shipment records from the pre-compute pipeline may address individual
//! CHCs (`CHC_017`); those are folded into their region
//! (`CHC_Region_{(n - 1) % regions}`) the same way the pipeline aggregates
//! stock, so every flow endpoint resolves to a drawn node.

use rustc_hash::FxHashMap;

use dash_core::SupplyTier;
use dash_scenario::MonthSnapshot;

use crate::series::StockStatus;

// ── Figure data ───────────────────────────────────────────────────────────────

/// One positioned node of the figure.
#[derive(Debug, Clone, PartialEq)]
pub struct NetworkNode {
    pub id:          String,
    pub tier:        SupplyTier,
    /// Horizontal position in `[-0.5, 0.5]`, tier row centered on 0.
    pub x:           f32,
    /// Row height: 1.0 manufacturers down to 0.0 CHC regions.
    pub y:           f32,
    pub fill:        f64,
    pub status:      StockStatus,
    pub operational: bool,
}

/// An aggregated shipment flow between two drawn nodes for one month.
#[derive(Debug, Clone, PartialEq)]
pub struct FlowEdge {
    pub from:     String,
    pub to:       String,
    pub quantity: u64,
    /// `quantity / max(quantity)` across this month's flows, in `(0, 1]`.
    pub relative: f64,
}

/// Everything the network renderer needs for one month.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct NetworkFigure {
    pub nodes:        Vec<NetworkNode>,
    /// Structural supply links (always drawn, thin).
    pub static_edges: Vec<(String, String)>,
    /// This month's aggregated shipments (drawn thick, scaled by `relative`).
    pub flows:        Vec<FlowEdge>,
}

impl NetworkFigure {
    pub fn node(&self, id: &str) -> Option<&NetworkNode> {
        self.nodes.iter().find(|n| n.id == id)
    }
}

// ── Projection ────────────────────────────────────────────────────────────────

/// Build the network figure for the cursor month.
pub fn network_figure(snapshot: &MonthSnapshot) -> NetworkFigure {
    let nodes = layout_nodes(snapshot);
    let static_edges = static_edges(snapshot);
    let flows = aggregate_flows(snapshot, &nodes);
    NetworkFigure {
        nodes,
        static_edges,
        flows,
    }
}

fn tier_row(tier: SupplyTier) -> f32 {
    match tier {
        SupplyTier::Manufacturer => 1.0,
        SupplyTier::CentralStore => 0.66,
        SupplyTier::Hospital     => 0.33,
        SupplyTier::ChcRegion    => 0.0,
    }
}

/// Spread `n` nodes evenly across `[-0.5, 0.5]`; a single node sits at 0.
fn spread(i: usize, n: usize) -> f32 {
    if n <= 1 {
        0.0
    } else {
        i as f32 / (n - 1) as f32 - 0.5
    }
}

fn layout_nodes(snapshot: &MonthSnapshot) -> Vec<NetworkNode> {
    let mut nodes = Vec::new();
    for &tier in &SupplyTier::ALL {
        let row = snapshot.stock_levels.tier(tier);
        for (i, stock) in row.iter().enumerate() {
            let fill = stock.fill();
            nodes.push(NetworkNode {
                id: stock.id.clone(),
                tier,
                x: spread(i, row.len()),
                y: tier_row(tier),
                fill,
                status: StockStatus::from_fill(fill),
                operational: stock.operational,
            });
        }
    }
    nodes
}

/// Structural links: every manufacturer feeds every central store; every
/// central store feeds every hospital; hospital `i` serves CHC region `i`.
fn static_edges(snapshot: &MonthSnapshot) -> Vec<(String, String)> {
    let levels = &snapshot.stock_levels;
    let mut edges = Vec::new();

    for mfr in &levels.manufacturers {
        for cms in &levels.central_stores {
            edges.push((mfr.id.clone(), cms.id.clone()));
        }
    }
    for cms in &levels.central_stores {
        for hosp in &levels.hospitals {
            edges.push((cms.id.clone(), hosp.id.clone()));
        }
    }
    for (hosp, region) in levels.hospitals.iter().zip(&levels.chc_regions) {
        edges.push((hosp.id.clone(), region.id.clone()));
    }

    edges
}

fn aggregate_flows(snapshot: &MonthSnapshot, nodes: &[NetworkNode]) -> Vec<FlowEdge> {
    let regions = snapshot.stock_levels.chc_regions.len();

    let mut volumes: FxHashMap<(String, String), u64> = FxHashMap::default();
    for shipment in &snapshot.shipments {
        let to = fold_chc(&shipment.to, regions);
        *volumes
            .entry((shipment.from.clone(), to))
            .or_default() += shipment.quantity;
    }

    // Drop flows whose endpoints are not drawn, then scale by the max volume.
    let mut flows: Vec<(String, String, u64)> = volumes
        .into_iter()
        .filter(|((from, to), _)| {
            nodes.iter().any(|n| n.id == *from) && nodes.iter().any(|n| n.id == *to)
        })
        .map(|((from, to), qty)| (from, to, qty))
        .collect();
    // Deterministic output order regardless of hash iteration.
    flows.sort();

    let max = flows.iter().map(|&(_, _, q)| q).max().unwrap_or(1).max(1);
    flows
        .into_iter()
        .map(|(from, to, quantity)| FlowEdge {
            from,
            to,
            quantity,
            relative: quantity as f64 / max as f64,
        })
        .collect()
}

/// Map an individual CHC id (`CHC_017`) onto its aggregated region.
fn fold_chc(id: &str, regions: usize) -> String {
    if regions == 0 {
        return id.to_string();
    }
    match id.strip_prefix("CHC_").filter(|_| !id.starts_with("CHC_Region")) {
        Some(num) => match num.parse::<usize>() {
            Ok(n) => format!("CHC_Region_{}", (n.saturating_sub(1)) % regions),
            Err(_) => id.to_string(),
        },
        None => id.to_string(),
    }
}
