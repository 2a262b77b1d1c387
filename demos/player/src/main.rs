//! player — headless end-to-end demo of the dashboard playback stack.
//!
//! Loads a scenario directory (first CLI argument), or generates a small
//! synthetic two-scenario dataset under `./demo_data` when none is given.
//! Plays the base scenario to the horizon at 3x, switches to the outbreak
//! scenario, replays, and exports the per-month metrics CSV to `./output`.
//!
//! The real dashboard wires the same pieces to interactive widgets; every
//! frame here is what a render cycle does — at most one state mutation, then
//! pure projections.

mod generate;

use std::path::{Path, PathBuf};
use std::time::{Duration, Instant};

use anyhow::{Context, Result};
use tracing::info;

use dash_core::{Month, ScenarioId, Speed};
use dash_playback::{PlaybackConfig, PlaybackDriver, PlaybackObserver};
use dash_scenario::ScenarioStore;
use dash_timeline::{ControlEvent, TickOutcome, TimelineState};
use dash_view::{metrics_bar, network_figure, MetricsCsv};

// ── Constants ─────────────────────────────────────────────────────────────────

const BASE_INTERVAL_MS: u64 = 40; // fast cadence — this demo has no UI to pace
const FRAME_SLEEP_MS:   u64 = 5;

// ── Observer ──────────────────────────────────────────────────────────────────

struct ProgressPrinter;

impl PlaybackObserver for ProgressPrinter {
    fn on_advance(&mut self, month: Month) {
        if month.month_of_year() == 1 {
            info!(%month, year = month.year(), "entered a new simulation year");
        }
    }

    fn on_finished(&mut self, month: Month) {
        info!(%month, "playback finished");
    }
}

// ── Main ──────────────────────────────────────────────────────────────────────

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "info".into()),
        )
        .init();

    let data_dir = match std::env::args().nth(1) {
        Some(dir) => PathBuf::from(dir),
        None => {
            let dir = PathBuf::from("demo_data");
            generate::write_demo_scenarios(&dir)
                .context("generating synthetic scenario data")?;
            dir
        }
    };

    let store = ScenarioStore::new(&data_dir);
    let index = store.index().context("reading index.json")?;
    info!(scenarios = index.len(), dir = %data_dir.display(), "scenario index loaded");

    let mut timeline = TimelineState::open(&store, ScenarioId::Base)?;
    play_to_horizon(&mut timeline, &store)?;

    // Switch scenarios mid-session, exactly as the selector widget would.
    timeline.apply(ControlEvent::SwitchScenario(ScenarioId::DiseaseOutbreak), &store)?;
    play_to_horizon(&mut timeline, &store)?;

    export_metrics(&timeline, Path::new("output"))?;
    Ok(())
}

/// Drive the timeline from its current position to the horizon.
fn play_to_horizon(timeline: &mut TimelineState, store: &ScenarioStore) -> Result<()> {
    let mut driver = PlaybackDriver::new(PlaybackConfig {
        base_interval: Duration::from_millis(BASE_INTERVAL_MS),
    });
    let mut observer = ProgressPrinter;

    timeline.apply(ControlEvent::SetSpeed(3.0), store)?;
    timeline.apply(ControlEvent::Play, store)?;
    info!(
        scenario = %timeline.scenario_id(),
        horizon = timeline.horizon(),
        speed = %Speed::new(3.0),
        "playing"
    );

    loop {
        match driver.on_frame(timeline, Instant::now(), &mut observer) {
            TickOutcome::Finished(_) => break,
            _ => std::thread::sleep(Duration::from_millis(FRAME_SLEEP_MS)),
        }
    }

    let bar = metrics_bar(timeline.scenario(), timeline.current_month());
    let rate = format!("{:.1}", bar.treatment_rate_pct);
    info!(
        shortages = bar.cumulative.shortages,
        deaths = bar.cumulative.deaths,
        wastage = bar.cumulative.wastage,
        treatment_rate_pct = %rate,
        "final outcomes"
    );

    let figure = network_figure(timeline.snapshot());
    info!(
        nodes = figure.nodes.len(),
        flows = figure.flows.len(),
        "final-month network figure"
    );
    Ok(())
}

fn export_metrics(timeline: &TimelineState, out_dir: &Path) -> Result<()> {
    std::fs::create_dir_all(out_dir)?;
    let path = out_dir.join("metrics.csv");
    let mut csv = MetricsCsv::create(&path)?;
    csv.write_scenario(timeline.scenario())?;
    csv.finish()?;
    info!(path = %path.display(), "metrics exported");
    Ok(())
}
