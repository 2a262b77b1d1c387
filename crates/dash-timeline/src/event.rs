//! User-interaction events.
//!
//! A `ControlEvent` is the explicit "this came from the user" signal: input
//! handlers construct one when — and only when — a control is directly
//! manipulated, then route it through [`TimelineState::apply`].  Programmatic
//! changes (auto-advance) never produce events; they call
//! [`TimelineState::tick`] via the playback driver.  Because origin is
//! carried by the type rather than guessed from a value mismatch, a
//! programmatic update and a user drag can never be confused for one
//! another.

use dash_core::{Month, ScenarioId, Speed};
use dash_scenario::{ScenarioResult, ScenarioStore};

use crate::state::TimelineState;

/// One direct user interaction with the playback controls.
#[derive(Copy, Clone, PartialEq, Debug)]
pub enum ControlEvent {
    /// Play button pressed.
    Play,
    /// Pause button pressed.
    Pause,
    /// Reset button pressed.
    Reset,
    /// Month scrubber moved (raw slider value; clamped by `seek`).
    Seek(u32),
    /// Speed slider moved (raw value; clamped by `Speed::new`).
    SetSpeed(f32),
    /// Scenario selector changed.
    SwitchScenario(ScenarioId),
}

impl TimelineState {
    /// Dispatch one user event to the matching named transition.
    ///
    /// Only `SwitchScenario` can fail (scenario load); every other event is
    /// infallible and leaves `Ok(())`.
    pub fn apply(&mut self, event: ControlEvent, store: &ScenarioStore) -> ScenarioResult<()> {
        match event {
            ControlEvent::Play               => self.play(),
            ControlEvent::Pause              => self.pause(),
            ControlEvent::Reset              => self.reset(),
            ControlEvent::Seek(month)        => self.seek(Month(month)),
            ControlEvent::SetSpeed(raw)      => self.set_speed(Speed::new(raw)),
            ControlEvent::SwitchScenario(id) => return self.switch_scenario(store, id),
        }
        Ok(())
    }
}
