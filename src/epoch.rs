// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (C) 2026 Vallés Puig, Ramon

//! Civil-time entry points.
//!
//! Every public function in the crate accepts a `chrono::DateTime<Tz>` in
//! any time zone and passes it through [`to_utc`] before doing arithmetic,
//! so callers never have to normalise offsets themselves.

use chrono::{DateTime, TimeZone, Utc};
use qtty::Centuries;

use super::{JulianDate, ModifiedJulianDate};

/// Normalise any civil timestamp to UTC by stripping its offset.
///
/// Idempotent: `to_utc(&to_utc(x)) == to_utc(x)`.
#[inline]
pub fn to_utc<Tz: TimeZone>(datetime: &DateTime<Tz>) -> DateTime<Utc> {
    datetime.with_timezone(&Utc)
}

/// Julian Date of an instant: `UTC_millis / 86 400 000 + 2 440 587.5`.
///
/// ```rust
/// use chrono::{TimeZone, Utc};
///
/// let dt = Utc.with_ymd_and_hms(2021, 5, 14, 0, 0, 0).unwrap();
/// assert_eq!(astrometry::julian_date(&dt).value(), 2_459_348.5);
/// ```
#[inline]
pub fn julian_date<Tz: TimeZone>(datetime: &DateTime<Tz>) -> JulianDate {
    JulianDate::from_utc(&to_utc(datetime))
}

/// Modified Julian Date of an instant: `JD − 2 400 000.5`.
#[inline]
pub fn modified_julian_date<Tz: TimeZone>(datetime: &DateTime<Tz>) -> ModifiedJulianDate {
    julian_date(datetime).to_mjd()
}

/// Julian centuries since J2000.0: `(JD − 2 451 545.0) / 36 525`.
#[inline]
pub fn centuries_since_j2000<Tz: TimeZone>(datetime: &DateTime<Tz>) -> Centuries {
    julian_date(datetime).julian_centuries()
}
