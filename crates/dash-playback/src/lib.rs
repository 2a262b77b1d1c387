//! `dash-playback` — advances the timeline on a wall-clock cadence.
//!
//! The host UI calls [`PlaybackDriver::on_frame`] once per render cycle,
//! passing the current `Instant`.  The driver decides whether a month is due
//! (`interval = base_interval / speed`) and calls
//! [`TimelineState::tick`][dash_timeline::TimelineState::tick] at most once —
//! so animation pace is governed by wall-clock time, not by however fast the
//! host happens to re-render.
//!
//! Time is injected rather than read from `Instant::now()` internally, which
//! keeps the cadence math fully deterministic under test.
//!
//! # Crate layout
//!
//! | Module       | Contents                                      |
//! |--------------|-----------------------------------------------|
//! | [`driver`]   | `PlaybackConfig`, `PlaybackDriver`            |
//! | [`observer`] | `PlaybackObserver` trait, `NoopObserver`      |

pub mod driver;
pub mod observer;

#[cfg(test)]
mod tests;

pub use driver::{PlaybackConfig, PlaybackDriver};
pub use observer::{NoopObserver, PlaybackObserver};
