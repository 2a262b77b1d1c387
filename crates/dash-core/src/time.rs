//! Playback time model.
//!
//! # Design
//!
//! The canonical time unit is a 1-based `Month` index into a scenario's
//! snapshot sequence.  Using an integer month as the only time value means
//! all playback arithmetic is exact and comparisons are O(1); the mapping to
//! wall-clock time lives entirely in `dash-playback`
//! (`interval = base_interval / speed`).
//!
//! `Speed` is a bounded multiplier: construction clamps to `[0.5, 3.0]`, so
//! an out-of-range value from a UI control can never divide the frame
//! interval down to zero or stall playback.

use std::fmt;

use serde::{Deserialize, Serialize};

// ── Month ─────────────────────────────────────────────────────────────────────

/// A 1-based month index into a scenario's snapshot sequence.
///
/// Month 1 is the first simulated month; a scenario with horizon `N` has
/// valid months `1..=N`.  Month 0 never occurs — constructors and [`clamp`]
/// pin the lower bound.
///
/// [`clamp`]: Month::clamp
#[derive(Copy, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Debug, Serialize, Deserialize)]
pub struct Month(pub u32);

impl Month {
    pub const FIRST: Month = Month(1);

    /// Clamp into the valid range `1..=horizon`.
    #[inline]
    pub fn clamp(self, horizon: u32) -> Month {
        Month(self.0.clamp(1, horizon.max(1)))
    }

    /// The following month (no horizon check — callers clamp).
    #[inline]
    pub fn next(self) -> Month {
        Month(self.0 + 1)
    }

    /// 1-based simulation year this month falls in (months 1–12 → year 1).
    #[inline]
    pub fn year(self) -> u32 {
        (self.0.max(1) - 1) / 12 + 1
    }

    /// Position within the year, `1..=12`.
    #[inline]
    pub fn month_of_year(self) -> u32 {
        (self.0.max(1) - 1) % 12 + 1
    }

    /// Zero-based index into the snapshot `Vec` (month 1 → index 0).
    #[inline]
    pub fn index(self) -> usize {
        self.0.saturating_sub(1) as usize
    }
}

impl Default for Month {
    fn default() -> Self {
        Month::FIRST
    }
}

impl std::ops::Add<u32> for Month {
    type Output = Month;
    #[inline]
    fn add(self, rhs: u32) -> Month {
        Month(self.0 + rhs)
    }
}

impl fmt::Display for Month {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "M{}", self.0)
    }
}

// ── Speed ─────────────────────────────────────────────────────────────────────

/// Playback speed multiplier, clamped to `[0.5, 3.0]` on construction.
///
/// 1.0 plays one month per `base_interval` of wall-clock time; 2.0 plays
/// twice as fast.  The invalid states (zero, negative, NaN) are pinned to
/// the slowest legal speed.
#[derive(Copy, Clone, PartialEq, PartialOrd, Debug)]
pub struct Speed(f32);

impl Speed {
    pub const MIN: f32 = 0.5;
    pub const MAX: f32 = 3.0;

    /// Construct a speed, clamping into `[MIN, MAX]`.  NaN maps to `MIN`.
    pub fn new(multiplier: f32) -> Speed {
        if multiplier.is_nan() {
            return Speed(Self::MIN);
        }
        Speed(multiplier.clamp(Self::MIN, Self::MAX))
    }

    /// The clamped multiplier value.
    #[inline]
    pub fn get(self) -> f32 {
        self.0
    }
}

impl Default for Speed {
    /// Real-time playback: one month per base interval.
    fn default() -> Self {
        Speed(1.0)
    }
}

impl fmt::Display for Speed {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:.1}x", self.0)
    }
}
