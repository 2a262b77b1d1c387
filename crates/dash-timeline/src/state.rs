//! `TimelineState` and its transition operations.

use std::sync::Arc;

use dash_core::{Month, ScenarioId, Speed};
use dash_scenario::{MonthSnapshot, Scenario, ScenarioResult, ScenarioStore};

// ── PlayState ─────────────────────────────────────────────────────────────────

/// Whether the playback clock is running.
#[derive(Copy, Clone, PartialEq, Eq, Debug, Default)]
pub enum PlayState {
    #[default]
    Stopped,
    Playing,
}

// ── TickOutcome ───────────────────────────────────────────────────────────────

/// What a [`TimelineState::tick`] call did, so the playback driver and its
/// observers can react without re-deriving it from before/after state.
#[derive(Copy, Clone, PartialEq, Eq, Debug)]
pub enum TickOutcome {
    /// Not playing (or the frame was not due yet) — state unchanged.
    Idle,
    /// Advanced one month; playback continues.
    Advanced(Month),
    /// Advanced onto the final month and auto-stopped.
    Finished(Month),
}

// ── TimelineState ─────────────────────────────────────────────────────────────

/// The authoritative playback state for one dashboard session.
///
/// Holds the scenario being displayed, the current month cursor, the play
/// flag, and the speed multiplier.  Created once per session; mutated only
/// through the methods below; dropped when the session ends.
///
/// # Invariants
///
/// - `current_month` is always within `1..=scenario.horizon()` — the
///   constructor starts at month 1, `seek` clamps, `tick` stops at the
///   horizon, and `switch_scenario` resets before the new scenario is
///   observable.
/// - A scenario switch is atomic: the new scenario is loaded *before* any
///   field changes, so a load failure leaves the session exactly as it was,
///   and no reader ever sees the old month against the new data.
#[derive(Clone)]
pub struct TimelineState {
    scenario:      Arc<Scenario>,
    current_month: Month,
    play_state:    PlayState,
    speed:         Speed,
}

impl TimelineState {
    /// Start a session on `scenario` at month 1, stopped, speed 1.0.
    pub fn new(scenario: Arc<Scenario>) -> Self {
        Self {
            scenario,
            current_month: Month::FIRST,
            play_state:    PlayState::Stopped,
            speed:         Speed::default(),
        }
    }

    /// Convenience: load `id` from `store` and start a session on it.
    pub fn open(store: &ScenarioStore, id: ScenarioId) -> ScenarioResult<Self> {
        Ok(Self::new(store.load(id)?))
    }

    // ── Read side ─────────────────────────────────────────────────────────

    pub fn scenario(&self) -> &Arc<Scenario> {
        &self.scenario
    }

    pub fn scenario_id(&self) -> ScenarioId {
        self.scenario.scenario_id
    }

    pub fn current_month(&self) -> Month {
        self.current_month
    }

    pub fn play_state(&self) -> PlayState {
        self.play_state
    }

    pub fn is_playing(&self) -> bool {
        self.play_state == PlayState::Playing
    }

    pub fn speed(&self) -> Speed {
        self.speed
    }

    /// Horizon of the loaded scenario (total months).
    pub fn horizon(&self) -> u32 {
        self.scenario.horizon()
    }

    /// `true` once the cursor sits on the final month.
    pub fn at_horizon(&self) -> bool {
        self.current_month.0 >= self.horizon()
    }

    /// The snapshot under the cursor — what every renderer draws this cycle.
    pub fn snapshot(&self) -> &MonthSnapshot {
        self.scenario.snapshot(self.current_month)
    }

    // ── Transitions ───────────────────────────────────────────────────────

    /// `Stopped → Playing`.  No-op if already playing, and no-op at the
    /// horizon — there is nothing left to play until `reset` or a backwards
    /// `seek`.
    pub fn play(&mut self) {
        if self.at_horizon() {
            return;
        }
        self.play_state = PlayState::Playing;
    }

    /// `Playing → Stopped`.  Idempotent, always legal, takes effect
    /// immediately — this is the session's only cancellation primitive.
    pub fn pause(&mut self) {
        self.play_state = PlayState::Stopped;
    }

    /// Move the cursor to `clamp(month, 1, horizon)` without touching the
    /// play state.  All manual navigation funnels through here.
    pub fn seek(&mut self, month: Month) {
        self.current_month = month.clamp(self.horizon());
    }

    /// Update the speed multiplier (already clamped by [`Speed`]).
    pub fn set_speed(&mut self, speed: Speed) {
        self.speed = speed;
    }

    /// Back to month 1, stopped.  Idempotent.
    pub fn reset(&mut self) {
        self.current_month = Month::FIRST;
        self.play_state = PlayState::Stopped;
    }

    /// Atomically switch to `id`: load via `store`, then swap the scenario
    /// and reset in one step.
    ///
    /// # Errors
    ///
    /// Propagates the store's error (`NotFound`, malformed data) with the
    /// session left completely unchanged.
    pub fn switch_scenario(&mut self, store: &ScenarioStore, id: ScenarioId) -> ScenarioResult<()> {
        // Load first — nothing below can fail.
        let scenario = store.load(id)?;
        self.scenario = scenario;
        self.current_month = Month::FIRST;
        self.play_state = PlayState::Stopped;
        Ok(())
    }

    /// Advance the playback clock by one month.
    ///
    /// No-op while stopped.  While playing, moves the cursor forward one
    /// month; on reaching the horizon the session auto-stops rather than
    /// wrapping, and a further tick is a no-op until `play` is preceded by a
    /// `reset` or backwards `seek`.
    pub fn tick(&mut self) -> TickOutcome {
        if !self.is_playing() {
            return TickOutcome::Idle;
        }
        if self.at_horizon() {
            // play() refuses to start here, but a stored Playing state could
            // still observe this after a forward seek to the horizon.
            self.play_state = PlayState::Stopped;
            return TickOutcome::Idle;
        }

        self.current_month = self.current_month.next();
        if self.at_horizon() {
            self.play_state = PlayState::Stopped;
            TickOutcome::Finished(self.current_month)
        } else {
            TickOutcome::Advanced(self.current_month)
        }
    }
}
