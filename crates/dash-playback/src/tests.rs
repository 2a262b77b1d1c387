//! Unit tests for the playback driver — all with injected time, no sleeping.

use std::collections::HashMap;
use std::sync::Arc;
use std::time::{Duration, Instant};

use dash_core::{Month, ScenarioId, Speed};
use dash_scenario::{MonthSnapshot, Scenario, StockLevels, Totals};
use dash_timeline::{TickOutcome, TimelineState};

use crate::{NoopObserver, PlaybackConfig, PlaybackDriver, PlaybackObserver};

// ── Helpers ───────────────────────────────────────────────────────────────────

fn scenario(horizon: u32) -> Arc<Scenario> {
    Arc::new(Scenario {
        scenario_id:   ScenarioId::Base,
        scenario_name: "Base Case".to_string(),
        n_months:      horizon,
        months:        (1..=horizon)
            .map(|month| MonthSnapshot {
                month,
                stock_levels:   StockLevels::default(),
                shortages:      HashMap::new(),
                deaths:         HashMap::new(),
                wastage:        HashMap::new(),
                treatment_rate: 1.0,
                shipments:      vec![],
            })
            .collect(),
        totals:        Totals::default(),
    })
}

fn one_second_driver() -> PlaybackDriver {
    PlaybackDriver::new(PlaybackConfig {
        base_interval: Duration::from_secs(1),
    })
}

#[derive(Default)]
struct Recorder {
    advances: Vec<u32>,
    finished: Vec<u32>,
}

impl PlaybackObserver for Recorder {
    fn on_advance(&mut self, month: Month) {
        self.advances.push(month.0);
    }
    fn on_finished(&mut self, month: Month) {
        self.finished.push(month.0);
    }
}

// ── Cadence ───────────────────────────────────────────────────────────────────

#[cfg(test)]
mod cadence {
    use super::*;

    #[test]
    fn stopped_timeline_never_advances() {
        let mut state = TimelineState::new(scenario(60));
        let mut driver = one_second_driver();
        let t0 = Instant::now();

        for ms in [0u64, 500, 5_000] {
            let out = driver.on_frame(
                &mut state,
                t0 + Duration::from_millis(ms),
                &mut NoopObserver,
            );
            assert_eq!(out, TickOutcome::Idle);
        }
        assert_eq!(state.current_month(), Month(1));
    }

    #[test]
    fn first_playing_frame_anchors_without_advancing() {
        let mut state = TimelineState::new(scenario(60));
        let mut driver = one_second_driver();
        let t0 = Instant::now();
        state.play();

        assert_eq!(driver.on_frame(&mut state, t0, &mut NoopObserver), TickOutcome::Idle);
        assert_eq!(state.current_month(), Month(1));
    }

    #[test]
    fn advances_once_per_interval_regardless_of_frame_rate() {
        let mut state = TimelineState::new(scenario(60));
        let mut driver = one_second_driver();
        let t0 = Instant::now();
        state.play();
        driver.on_frame(&mut state, t0, &mut NoopObserver);

        // A burst of fast frames inside one interval: no extra advances.
        for ms in [100u64, 400, 900, 999] {
            let out = driver.on_frame(
                &mut state,
                t0 + Duration::from_millis(ms),
                &mut NoopObserver,
            );
            assert_eq!(out, TickOutcome::Idle);
        }

        let out = driver.on_frame(&mut state, t0 + Duration::from_millis(1_000), &mut NoopObserver);
        assert_eq!(out, TickOutcome::Advanced(Month(2)));

        // Next month is due one interval after the advance, not after t0.
        let out = driver.on_frame(&mut state, t0 + Duration::from_millis(1_500), &mut NoopObserver);
        assert_eq!(out, TickOutcome::Idle);
        let out = driver.on_frame(&mut state, t0 + Duration::from_millis(2_000), &mut NoopObserver);
        assert_eq!(out, TickOutcome::Advanced(Month(3)));
    }

    #[test]
    fn interval_scales_inversely_with_speed() {
        let driver = one_second_driver();
        assert_eq!(driver.interval_for(Speed::new(1.0)), Duration::from_secs(1));
        assert_eq!(driver.interval_for(Speed::new(2.0)), Duration::from_millis(500));
        assert_eq!(driver.interval_for(Speed::new(0.5)), Duration::from_secs(2));
    }

    #[test]
    fn double_speed_advances_twice_as_often() {
        let mut state = TimelineState::new(scenario(60));
        let mut driver = one_second_driver();
        let t0 = Instant::now();
        state.set_speed(Speed::new(2.0));
        state.play();
        driver.on_frame(&mut state, t0, &mut NoopObserver);

        let out = driver.on_frame(&mut state, t0 + Duration::from_millis(500), &mut NoopObserver);
        assert_eq!(out, TickOutcome::Advanced(Month(2)));
        let out = driver.on_frame(&mut state, t0 + Duration::from_millis(1_000), &mut NoopObserver);
        assert_eq!(out, TickOutcome::Advanced(Month(3)));
    }
}

// ── Re-arming ─────────────────────────────────────────────────────────────────

#[cfg(test)]
mod rearm {
    use super::*;

    #[test]
    fn rearm_after_seek_prevents_an_instant_advance() {
        let mut state = TimelineState::new(scenario(60));
        let mut driver = one_second_driver();
        let t0 = Instant::now();
        state.play();
        driver.on_frame(&mut state, t0, &mut NoopObserver);

        // User scrubs at t0+900ms; the stale anchor would fire at t0+1s.
        state.seek(Month(30));
        driver.rearm();

        let out = driver.on_frame(&mut state, t0 + Duration::from_millis(1_000), &mut NoopObserver);
        assert_eq!(out, TickOutcome::Idle); // re-anchored instead
        assert_eq!(state.current_month(), Month(30));

        let out = driver.on_frame(&mut state, t0 + Duration::from_millis(2_000), &mut NoopObserver);
        assert_eq!(out, TickOutcome::Advanced(Month(31)));
    }

    #[test]
    fn pause_clears_the_anchor() {
        let mut state = TimelineState::new(scenario(60));
        let mut driver = one_second_driver();
        let t0 = Instant::now();
        state.play();
        driver.on_frame(&mut state, t0, &mut NoopObserver);

        state.pause();
        assert_eq!(
            driver.on_frame(&mut state, t0 + Duration::from_secs(10), &mut NoopObserver),
            TickOutcome::Idle
        );

        // Resuming much later re-anchors; no catch-up burst fires.
        state.play();
        let t1 = t0 + Duration::from_secs(20);
        assert_eq!(driver.on_frame(&mut state, t1, &mut NoopObserver), TickOutcome::Idle);
        assert_eq!(
            driver.on_frame(&mut state, t1 + Duration::from_secs(1), &mut NoopObserver),
            TickOutcome::Advanced(Month(2))
        );
    }
}

// ── End of timeline ───────────────────────────────────────────────────────────

#[cfg(test)]
mod finish {
    use super::*;

    #[test]
    fn plays_to_the_horizon_then_stops() {
        let mut state = TimelineState::new(scenario(3));
        let mut driver = one_second_driver();
        let mut recorder = Recorder::default();
        let t0 = Instant::now();
        state.play();
        driver.on_frame(&mut state, t0, &mut recorder);

        let out = driver.on_frame(&mut state, t0 + Duration::from_secs(1), &mut recorder);
        assert_eq!(out, TickOutcome::Advanced(Month(2)));
        let out = driver.on_frame(&mut state, t0 + Duration::from_secs(2), &mut recorder);
        assert_eq!(out, TickOutcome::Finished(Month(3)));

        assert_eq!(recorder.advances, vec![2, 3]);
        assert_eq!(recorder.finished, vec![3]);
        assert!(!state.is_playing());

        // Frames keep coming; nothing moves.
        let out = driver.on_frame(&mut state, t0 + Duration::from_secs(3), &mut recorder);
        assert_eq!(out, TickOutcome::Idle);
        assert_eq!(state.current_month(), Month(3));
        assert_eq!(recorder.advances, vec![2, 3]);
    }
}
