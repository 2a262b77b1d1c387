//! `dash-timeline` — the playback state machine.
//!
//! # Single source of truth
//!
//! [`TimelineState`] is the one authoritative owner of the month cursor,
//! play flag, and speed for a session.  Every widget (scrubber, play button,
//! charts) is a pure function of this state, re-derived each render cycle; no
//! widget retains its own month value.  The historical failure mode this
//! design eliminates is a control and the application silently holding two
//! diverging values after a programmatic update.
//!
//! Mutation happens exclusively through the named transitions (`play`,
//! `pause`, `seek`, `reset`, `set_speed`, `switch_scenario`, `tick`).  User
//! interactions arrive as [`ControlEvent`]s — constructed only in direct
//! input handlers, never inferred from a value comparison — while automatic
//! advancement goes through [`TimelineState::tick`] alone (driven by
//! `dash-playback`).
//!
//! # Crate layout
//!
//! | Module    | Contents                                            |
//! |-----------|-----------------------------------------------------|
//! | [`state`] | `TimelineState`, `PlayState`, `TickOutcome`         |
//! | [`event`] | `ControlEvent` and `TimelineState::apply`           |

pub mod event;
pub mod state;


pub use event::ControlEvent;
pub use state::{PlayState, TickOutcome, TimelineState};
