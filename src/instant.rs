// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (C) 2026 Vallés Puig, Ramon

//! Generic time–scale parameterised instant.
//!
//! [`Time<S>`] stores a scalar quantity in [`Days`] whose *meaning* is
//! determined by the compile-time marker `S: TimeScale`.  Every marker knows
//! how to reach the canonical axis of this crate, the **Julian Date counted
//! on UTC** (`UTC milliseconds / 86 400 000 + 2 440 587.5`).  No ΔT is
//! applied anywhere: the astronomical formulas downstream are driven by the
//! civil clock, and the atomic scales (TAI, TT, GPS) are derived separately
//! through the leap-second table.

use chrono::{DateTime, TimeZone, Utc};
use qtty::*;
use std::marker::PhantomData;
use std::ops::{Add, AddAssign, Sub, SubAssign};

#[cfg(feature = "serde")]
use serde::{Deserialize, Deserializer, Serialize, Serializer};

/// JD of the Unix epoch (1970-01-01T00:00:00Z).
pub(crate) const UNIX_EPOCH_JD: Days = Days::new(2_440_587.5);

const MILLIS_PER_DAY: f64 = 86_400_000.0;

// ═══════════════════════════════════════════════════════════════════════════
// TimeScale trait
// ═══════════════════════════════════════════════════════════════════════════

/// Marker trait for Julian-style day counters.
///
/// A **time scale** defines a display label and a pair of conversions
/// between the scale's native quantity (in [`Days`]) and the UTC Julian
/// Date.  All markers in this crate are constant offsets that the compiler
/// folds away.
pub trait TimeScale: Copy + Clone + std::fmt::Debug + PartialEq + PartialOrd + 'static {
    /// Display label used by [`Time`] formatting.
    const LABEL: &'static str;

    /// Convert a quantity in this scale's native unit to an absolute JD(UTC).
    fn to_jd(value: Days) -> Days;

    /// Convert an absolute JD(UTC) back to this scale's native quantity.
    fn from_jd(jd: Days) -> Days;
}

// ═══════════════════════════════════════════════════════════════════════════
// Time<S>
// ═══════════════════════════════════════════════════════════════════════════

/// A point on time scale `S`.
///
/// `PhantomData` is zero-sized, so `Time<S>` is layout-identical to a single
/// `f64`.
#[derive(Debug, Copy, Clone, PartialEq, PartialOrd)]
pub struct Time<S: TimeScale> {
    quantity: Days,
    _scale: PhantomData<S>,
}

impl<S: TimeScale> Time<S> {
    /// Create from a raw scalar (days since the scale's epoch).
    #[inline]
    pub const fn new(value: f64) -> Self {
        Self {
            quantity: Days::new(value),
            _scale: PhantomData,
        }
    }

    /// Create from a [`Days`] quantity.
    #[inline]
    pub const fn from_days(days: Days) -> Self {
        Self {
            quantity: days,
            _scale: PhantomData,
        }
    }

    /// The underlying quantity in days.
    #[inline]
    pub const fn quantity(&self) -> Days {
        self.quantity
    }

    /// The underlying scalar value in days.
    #[inline]
    pub const fn value(&self) -> f64 {
        self.quantity.value()
    }

    /// Absolute Julian Date (UTC) corresponding to this instant.
    #[inline]
    pub fn julian_day(&self) -> Days {
        S::to_jd(self.quantity)
    }

    /// Build an instant from an absolute Julian Date (UTC).
    #[inline]
    pub fn from_julian_day(jd: Days) -> Self {
        Self::from_days(S::from_jd(jd))
    }

    /// Convert this instant to another day counter.
    #[inline]
    pub fn to<T: TimeScale>(&self) -> Time<T> {
        Time::<T>::from_julian_day(S::to_jd(self.quantity))
    }

    /// Build an instant from any civil timestamp.
    ///
    /// The timestamp is normalised to UTC first, so a `DateTime<FixedOffset>`
    /// carrying `+05:30` lands on the same value as its UTC equivalent.
    /// Resolution is one millisecond.
    pub fn from_utc<Tz: TimeZone>(datetime: &DateTime<Tz>) -> Self {
        let millis = datetime.timestamp_millis() as f64;
        let jd = UNIX_EPOCH_JD + Days::new(millis / MILLIS_PER_DAY);
        Self::from_julian_day(jd)
    }

    /// Convert back to a `chrono::DateTime<Utc>`.
    ///
    /// Returns `None` if the value falls outside chrono's representable range.
    pub fn to_utc(&self) -> Option<DateTime<Utc>> {
        let seconds_since_epoch = (self.julian_day() - UNIX_EPOCH_JD).to::<Second>().value();
        if !seconds_since_epoch.is_finite() {
            return None;
        }
        let secs = seconds_since_epoch.floor() as i64;
        let nanos = ((seconds_since_epoch - secs as f64) * 1e9).round() as u32;
        if nanos >= 1_000_000_000 {
            return DateTime::<Utc>::from_timestamp(secs + 1, 0);
        }
        DateTime::<Utc>::from_timestamp(secs, nanos)
    }

    /// Element-wise minimum.
    #[inline]
    pub const fn min(self, other: Self) -> Self {
        Self::from_days(self.quantity.min_const(other.quantity))
    }

    /// Element-wise maximum.
    #[inline]
    pub const fn max(self, other: Self) -> Self {
        Self::from_days(self.quantity.max_const(other.quantity))
    }
}

impl<S: TimeScale> std::fmt::Display for Time<S> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} {}", S::LABEL, self.quantity)
    }
}

#[cfg(feature = "serde")]
impl<S: TimeScale> Serialize for Time<S> {
    fn serialize<Ser>(&self, serializer: Ser) -> Result<Ser::Ok, Ser::Error>
    where
        Ser: Serializer,
    {
        serializer.serialize_f64(self.value())
    }
}

#[cfg(feature = "serde")]
impl<'de, S: TimeScale> Deserialize<'de> for Time<S> {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let v = f64::deserialize(deserializer)?;
        Ok(Self::new(v))
    }
}

// ── Arithmetic ────────────────────────────────────────────────────────────

impl<S: TimeScale> Add<Days> for Time<S> {
    type Output = Self;
    #[inline]
    fn add(self, rhs: Days) -> Self::Output {
        Self::from_days(self.quantity + rhs)
    }
}

impl<S: TimeScale> AddAssign<Days> for Time<S> {
    #[inline]
    fn add_assign(&mut self, rhs: Days) {
        self.quantity += rhs;
    }
}

impl<S: TimeScale> Sub<Days> for Time<S> {
    type Output = Self;
    #[inline]
    fn sub(self, rhs: Days) -> Self::Output {
        Self::from_days(self.quantity - rhs)
    }
}

impl<S: TimeScale> SubAssign<Days> for Time<S> {
    #[inline]
    fn sub_assign(&mut self, rhs: Days) {
        self.quantity -= rhs;
    }
}

impl<S: TimeScale> Sub for Time<S> {
    type Output = Days;
    #[inline]
    fn sub(self, rhs: Self) -> Self::Output {
        self.quantity - rhs.quantity
    }
}

impl<S: TimeScale> From<Days> for Time<S> {
    #[inline]
    fn from(days: Days) -> Self {
        Self::from_days(days)
    }
}

impl<S: TimeScale> From<Time<S>> for Days {
    #[inline]
    fn from(time: Time<S>) -> Self {
        time.quantity
    }
}

// ═══════════════════════════════════════════════════════════════════════════
// TimeInstant
// ═══════════════════════════════════════════════════════════════════════════

/// A point in time usable as an [`Interval`](crate::Interval) endpoint.
pub trait TimeInstant: Copy + PartialOrd {
    /// What `end − start` yields.
    type Duration;

    /// The instant as a UTC timestamp, `None` if out of chrono's range.
    fn to_utc(&self) -> Option<DateTime<Utc>>;

    /// `self − other`.
    fn difference(&self, other: &Self) -> Self::Duration;
}

impl<S: TimeScale> TimeInstant for Time<S> {
    type Duration = Days;

    #[inline]
    fn to_utc(&self) -> Option<DateTime<Utc>> {
        Time::to_utc(self)
    }

    #[inline]
    fn difference(&self, other: &Self) -> Self::Duration {
        *self - *other
    }
}

impl TimeInstant for DateTime<Utc> {
    type Duration = chrono::Duration;

    fn to_utc(&self) -> Option<DateTime<Utc>> {
        Some(*self)
    }

    fn difference(&self, other: &Self) -> Self::Duration {
        *self - *other
    }
}

#[cfg(test)]
mod tests {
    use super::super::scales::{JD, MJD};
    use super::*;
    use chrono::FixedOffset;

    #[test]
    fn from_utc_has_no_delta_t() {
        // 2000-01-01 12:00:00 UTC is exactly JD 2451545.0 on the UTC axis.
        let datetime = DateTime::from_timestamp(946_728_000, 0).unwrap();
        let jd = Time::<JD>::from_utc(&datetime);
        assert_eq!(jd.quantity(), Days::new(2_451_545.0));
    }

    #[test]
    fn from_utc_normalises_offsets() {
        let offset = FixedOffset::east_opt(5 * 3600 + 1800).unwrap();
        let local = offset.with_ymd_and_hms(2021, 5, 14, 5, 30, 0).unwrap();
        let utc = Utc.with_ymd_and_hms(2021, 5, 14, 0, 0, 0).unwrap();
        assert_eq!(Time::<JD>::from_utc(&local), Time::<JD>::from_utc(&utc));
    }

    #[test]
    fn utc_roundtrip_keeps_milliseconds() {
        let datetime = Utc.with_ymd_and_hms(2024, 3, 20, 3, 6, 0).unwrap()
            + chrono::Duration::milliseconds(123);
        let back = Time::<MJD>::from_utc(&datetime).to_utc().expect("to_utc");
        let delta_ms = (back - datetime).num_milliseconds();
        assert!(delta_ms.abs() <= 1, "roundtrip error: {} ms", delta_ms);
    }

    #[test]
    fn to_utc_rejects_non_finite() {
        assert!(Time::<JD>::new(f64::NAN).to_utc().is_none());
    }

    #[test]
    fn min_max_are_const() {
        const A: Time<JD> = Time::<JD>::new(10.0);
        const B: Time<JD> = Time::<JD>::new(14.0);
        const MIN: Time<JD> = A.min(B);
        const MAX: Time<JD> = A.max(B);
        assert_eq!(MIN.quantity(), Days::new(10.0));
        assert_eq!(MAX.quantity(), Days::new(14.0));
    }

    #[test]
    fn add_assign_sub_assign() {
        let mut jd = Time::<JD>::new(2_451_545.0);
        jd += Days::new(1.0);
        assert_eq!(jd.quantity(), Days::new(2_451_546.0));
        jd -= Days::new(0.5);
        assert_eq!(jd.quantity(), Days::new(2_451_545.5));
        assert_eq!(jd - Time::<JD>::new(2_451_545.0), Days::new(0.5));
    }

    #[test]
    fn display_carries_label() {
        let mjd = Time::<MJD>::new(51_544.5);
        assert!(format!("{mjd}").contains("MJD"));
    }
}
