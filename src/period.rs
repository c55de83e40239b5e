// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (C) 2026 Vallés Puig, Ramon

//! Time intervals.
//!
//! - [`Interval<T>`]: generic half-open interval over any [`TimeInstant`]
//! - [`Period<S>`]: scale-based alias for `Interval<Time<S>>`
//! - [`UtcPeriod`]: `Interval<DateTime<Utc>>`, what
//!   [`next_visibility_window`](crate::next_visibility_window) returns

use super::{Time, TimeInstant, TimeScale};
use chrono::{DateTime, Utc};
use std::fmt;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Interval between two instants, treated as `[start, end)`.
///
/// ```
/// use astrometry::{Interval, ModifiedJulianDate};
/// use qtty::Days;
///
/// let night = Interval::new(ModifiedJulianDate::new(59_348.25), ModifiedJulianDate::new(59_348.75));
/// assert_eq!(night.duration(), Days::new(0.5));
/// ```
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Interval<T: TimeInstant> {
    pub start: T,
    pub end: T,
}

/// Time-scale period alias: `Period<JD>`, `Period<MJD>`, ...
pub type Period<S> = Interval<Time<S>>;

/// UTC interval alias.
pub type UtcPeriod = Interval<DateTime<Utc>>;

impl<T: TimeInstant> Interval<T> {
    pub fn new(start: T, end: T) -> Self {
        Interval { start, end }
    }

    /// `end − start`.
    pub fn duration(&self) -> T::Duration {
        self.end.difference(&self.start)
    }

    /// Whether `instant` falls inside `[start, end)`.
    pub fn contains(&self, instant: &T) -> bool {
        self.start <= *instant && *instant < self.end
    }

    /// Overlap of `self` and `other`.
    ///
    /// Touching intervals (one ends exactly when the other starts) do not
    /// overlap.
    pub fn intersection(&self, other: &Self) -> Option<Self> {
        let start = if self.start >= other.start {
            self.start
        } else {
            other.start
        };
        let end = if self.end <= other.end {
            self.end
        } else {
            other.end
        };

        if start < end {
            Some(Self::new(start, end))
        } else {
            None
        }
    }
}

impl<T: TimeInstant + fmt::Display> fmt::Display for Interval<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} to {}", self.start, self.end)
    }
}

impl<S: TimeScale> Interval<Time<S>> {
    /// Re-express both endpoints on scale `T`.
    #[inline]
    pub fn to<T: TimeScale>(&self) -> Period<T> {
        Interval::new(self.start.to::<T>(), self.end.to::<T>())
    }

    /// Endpoints as UTC timestamps, `None` if either is out of range.
    pub fn to_utc(&self) -> Option<UtcPeriod> {
        Some(Interval::new(self.start.to_utc()?, self.end.to_utc()?))
    }
}

impl Interval<DateTime<Utc>> {
    /// Endpoints as instants on scale `S`.
    #[inline]
    pub fn to<S: TimeScale>(&self) -> Period<S> {
        Interval::new(Time::from_utc(&self.start), Time::from_utc(&self.end))
    }

    /// Length in hours.
    pub fn duration_hours(&self) -> f64 {
        self.duration().num_milliseconds() as f64 / 3_600_000.0
    }
}
