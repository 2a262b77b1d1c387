//! The frame-driven playback driver.

use std::time::{Duration, Instant};

use tracing::debug;

use dash_core::Speed;
use dash_timeline::{TickOutcome, TimelineState};

use crate::observer::PlaybackObserver;

// ── PlaybackConfig ────────────────────────────────────────────────────────────

/// Cadence configuration.
#[derive(Clone, Debug)]
pub struct PlaybackConfig {
    /// Wall-clock time per month at speed 1.0.
    pub base_interval: Duration,
}

impl Default for PlaybackConfig {
    /// One month per second — the pace the dashboard has always animated at.
    fn default() -> Self {
        Self {
            base_interval: Duration::from_secs(1),
        }
    }
}

// ── PlaybackDriver ────────────────────────────────────────────────────────────

/// Drives [`TimelineState::tick`] from the host's render loop.
///
/// Each `on_frame` call performs **at most one** state mutation: a tick when
/// the timeline is playing and a full interval has elapsed since the last
/// advance, otherwise nothing.  The driver holds no month value of its own —
/// only the instant of the last advance — so it can never disagree with the
/// timeline about where playback is.
pub struct PlaybackDriver {
    config:       PlaybackConfig,
    /// Instant of the last advance; `None` means the cadence is un-armed
    /// (fresh driver, or re-armed after a user interaction).
    last_advance: Option<Instant>,
}

impl PlaybackDriver {
    pub fn new(config: PlaybackConfig) -> Self {
        Self {
            config,
            last_advance: None,
        }
    }

    /// Effective frame interval at `speed`: `base_interval / speed`.
    pub fn interval_for(&self, speed: Speed) -> Duration {
        self.config.base_interval.div_f32(speed.get())
    }

    /// Forget the cadence anchor.
    ///
    /// Call after any user-driven transition (seek, pause, reset, scenario
    /// switch): the next playing frame then waits one full interval instead
    /// of firing instantly against a stale anchor.
    pub fn rearm(&mut self) {
        self.last_advance = None;
    }

    /// Run one render-cycle step at time `now`.
    ///
    /// Returns what the underlying [`TimelineState::tick`] did, or
    /// [`TickOutcome::Idle`] when nothing was due.  Observer hooks fire on
    /// advance and on reaching the horizon.
    pub fn on_frame<O: PlaybackObserver>(
        &mut self,
        state:    &mut TimelineState,
        now:      Instant,
        observer: &mut O,
    ) -> TickOutcome {
        if !state.is_playing() {
            self.last_advance = None;
            return TickOutcome::Idle;
        }

        match self.last_advance {
            // First playing frame: anchor the cadence, advance next interval.
            None => {
                self.last_advance = Some(now);
                TickOutcome::Idle
            }
            Some(anchor) if now.duration_since(anchor) >= self.interval_for(state.speed()) => {
                let outcome = state.tick();
                match outcome {
                    TickOutcome::Advanced(month) => {
                        self.last_advance = Some(now);
                        observer.on_advance(month);
                    }
                    TickOutcome::Finished(month) => {
                        debug!(%month, "playback reached the horizon");
                        self.last_advance = None;
                        observer.on_advance(month);
                        observer.on_finished(month);
                    }
                    TickOutcome::Idle => {
                        self.last_advance = None;
                    }
                }
                outcome
            }
            Some(_) => TickOutcome::Idle,
        }
    }
}

impl Default for PlaybackDriver {
    fn default() -> Self {
        Self::new(PlaybackConfig::default())
    }
}
