// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (C) 2026 Vallés Puig, Ramon

//! # Sidereal time
//!
//! Greenwich mean sidereal time from the Julian century polynomial at 0h UT
//! plus the elapsed UT of the day scaled by the sidereal rate, and its
//! inverse.  Longitudes are **east-positive**, so `LST = GST + λ/15`.
//!
//! All results are in hours `[0, 24)` except [`hour_angle`], which is in
//! degrees `[0, 360)`.

use chrono::{DateTime, Duration, NaiveTime, TimeZone, Utc};

use crate::config::{SIDEREAL_RATE, SOLAR_RATE};
use crate::coords::{normalize_degrees, normalize_hours};
use crate::epoch::to_utc;
use crate::JulianDate;

/// Sidereal time at 0h UT of the day whose midnight is `jd0`, hours.
#[inline]
fn sidereal_time_at_midnight(jd0: JulianDate) -> f64 {
    let t = jd0.julian_centuries().value();
    normalize_hours(6.697_374_558 + 2_400.051_336 * t + 0.000_025_862 * t * t)
}

/// 0h UT of the UTC calendar day containing `datetime`.
#[inline]
pub(crate) fn start_of_day(datetime: &DateTime<Utc>) -> DateTime<Utc> {
    datetime.date_naive().and_time(NaiveTime::MIN).and_utc()
}

/// Greenwich mean sidereal time, hours `[0, 24)`.
///
/// ```rust
/// use chrono::{TimeZone, Utc};
///
/// let dt = Utc.with_ymd_and_hms(2021, 5, 14, 0, 0, 0).unwrap();
/// let gst = astrometry::greenwich_sidereal_time(&dt);
/// assert!((gst - 15.463_990).abs() < 1e-6);
/// ```
pub fn greenwich_sidereal_time<Tz: TimeZone>(datetime: &DateTime<Tz>) -> f64 {
    let utc = to_utc(datetime);
    let midnight = start_of_day(&utc);
    let t0 = sidereal_time_at_midnight(JulianDate::from_utc(&midnight));
    let elapsed = utc - midnight;
    let ut_hours = elapsed.num_milliseconds() as f64 / 3_600_000.0;
    normalize_hours(t0 + ut_hours * SIDEREAL_RATE)
}

/// Local mean sidereal time at an east-positive `longitude`, hours.
#[inline]
pub fn local_sidereal_time<Tz: TimeZone>(datetime: &DateTime<Tz>, longitude: f64) -> f64 {
    normalize_hours(greenwich_sidereal_time(datetime) + longitude / 15.0)
}

/// Hour angle of right ascension `ra` (degrees) for an observer at
/// `longitude`, degrees `[0, 360)`.
#[inline]
pub fn hour_angle<Tz: TimeZone>(datetime: &DateTime<Tz>, longitude: f64, ra: f64) -> f64 {
    normalize_degrees(local_sidereal_time(datetime, longitude) * 15.0 - ra)
}

/// Convert a local sidereal time back to Greenwich sidereal time, hours.
#[inline]
pub fn local_sidereal_to_greenwich(lst: f64, longitude: f64) -> f64 {
    normalize_hours(lst - longitude / 15.0)
}

/// The UTC instant on the calendar day of `date` at which Greenwich sidereal
/// time equals `gst`.
///
/// Sidereal time gains about four minutes a day on UT, so one GST value in
/// every day has two solutions; the earlier one is returned.
pub fn greenwich_sidereal_to_universal<Tz: TimeZone>(gst: f64, date: &DateTime<Tz>) -> DateTime<Utc> {
    let midnight = start_of_day(&to_utc(date));
    let t0 = sidereal_time_at_midnight(JulianDate::from_utc(&midnight));
    let ut_hours = normalize_hours(gst - t0) * SOLAR_RATE;
    midnight + Duration::milliseconds((ut_hours * 3_600_000.0).round() as i64)
}

/// One sidereal day of solar time, 23h 56m 4.09s.
#[inline]
pub(crate) fn sidereal_day() -> Duration {
    Duration::milliseconds((24.0 * SOLAR_RATE * 3_600_000.0).round() as i64)
}
