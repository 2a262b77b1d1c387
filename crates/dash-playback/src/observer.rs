//! Playback observer hooks.

use dash_core::Month;

/// Callbacks invoked by [`PlaybackDriver`][crate::PlaybackDriver] when the
/// timeline moves.
///
/// All methods have default no-op implementations so implementors only need
/// to override what they care about — typically a redraw request on
/// `on_advance` and a controls refresh on `on_finished`.
pub trait PlaybackObserver {
    /// The timeline advanced to `month` (including the final month).
    fn on_advance(&mut self, _month: Month) {}

    /// Playback reached the horizon and auto-stopped at `month`.
    fn on_finished(&mut self, _month: Month) {}
}

/// A [`PlaybackObserver`] that does nothing.  Use when you need to call
/// `on_frame` but don't want callbacks.
pub struct NoopObserver;

impl PlaybackObserver for NoopObserver {}
