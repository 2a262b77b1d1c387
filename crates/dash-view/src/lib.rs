//! `dash-view` — stateless projections from timeline state to renderable data.
//!
//! Every function here is a pure function of `(&Scenario, Month)` or a
//! single `&MonthSnapshot`: plain data in, plain data out, recomputed each
//! render cycle.  No module retains state between calls, which is what makes
//! the chart widgets, the network diagram, and the metrics bar strict views
//! of the timeline rather than second sources of truth.
//!
//! # Crate layout
//!
//! | Module      | Contents                                                  |
//! |-------------|-----------------------------------------------------------|
//! | [`series`]  | Reveal-to-cursor line series, per-node stock bars         |
//! | [`network`] | Supply chain figure: tiered layout, static + flow edges   |
//! | [`metrics`] | Bottom metrics bar (cumulative totals, deltas, rate)      |
//! | [`export`]  | Per-month metrics CSV download                            |
//! | [`error`]   | `ViewError`, `ViewResult<T>`                              |

pub mod error;
pub mod export;
pub mod metrics;
pub mod network;
pub mod series;

#[cfg(test)]
mod tests;

pub use error::{ViewError, ViewResult};
pub use export::MetricsCsv;
pub use metrics::{metrics_bar, MetricsBar};
pub use network::{network_figure, FlowEdge, NetworkFigure, NetworkNode};
pub use series::{
    deaths_series, shortages_series, stock_bars, treatment_rate_series, Series, StockBar,
    StockStatus,
};
