// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (C) 2026 Vallés Puig, Ramon

//! # Leap seconds and the atomic time scales
//!
//! UTC is kept within 0.9 s of Earth rotation by inserting whole leap
//! seconds, so the offset **TAI − UTC** (`dtai`) is a step function of time.
//! This module holds that step function as an ordered, immutable
//! [`LeapSecondTable`] and derives the atomic scales from it:
//!
//! | Scale | Definition |
//! |-------|------------|
//! | TAI | `UTC + 10 s + correction(instant, 1972-01-01)` |
//! | TT  | `TAI + 32.184 s` |
//! | GPS | `UTC + correction(instant, 1980-01-06)` |
//!
//! The 10 s term is the TAI − UTC offset already in force at the TAI
//! reference origin, so TAI as computed here equals `UTC + dtai(UTC)`.
//! The bare form `UTC + dtai(UTC) − dtai(1972-01-01)` counts only the leap
//! seconds inserted since 1972 and would put TAI − UTC at 27 s after 2017; adding
//! the initial 10 s back gives the conventional 37 s in force since
//! 2017-01-01.
//!
//! The built-in table ([`LeapSecondTable::iers`]) mirrors the IERS
//! `leap-seconds.list` and is built once per process.  On first use its
//! expiry date is compared with the wall clock and a `tracing` warning is
//! emitted if it has passed; computation continues regardless.
//!
//! Alternate tables can be injected by constructing a [`LeapSecondTable`]
//! directly and calling its methods instead of the free functions.
//!
//! ## Quick Example
//! ```rust
//! use chrono::{TimeZone, Utc};
//! use astrometry::leap_seconds::{gps, tai, LeapSecondTable};
//!
//! let dt = Utc.with_ymd_and_hms(2021, 5, 14, 0, 0, 0).unwrap();
//! assert_eq!((tai(&dt) - dt).num_seconds(), 37);
//! assert_eq!((gps(&dt) - dt).num_seconds(), 18);
//! assert_eq!(LeapSecondTable::iers().len(), 28);
//! ```

use chrono::{DateTime, Duration, TimeZone, Utc};
use std::sync::OnceLock;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Seconds between the NTP epoch (1900-01-01) and the Unix epoch (1970-01-01).
pub const NTP_UNIX_OFFSET: i64 = 2_208_988_800;

/// Unix timestamp of the TAI reference origin used here, 1972-01-01T00:00:00Z.
pub const TAI_EPOCH_UNIX: i64 = 63_072_000;

/// Unix timestamp of the GPS epoch, 1980-01-06T00:00:00Z.
pub const GPS_EPOCH_UNIX: i64 = 315_964_800;

/// TAI − UTC in force at [`TAI_EPOCH_UNIX`].
pub const DTAI_AT_TAI_EPOCH: i64 = 10;

/// `TT − TAI` in milliseconds.
pub const TT_MINUS_TAI_MILLIS: i64 = 32_184;

/// Expiry of the built-in table (IERS `#@` line), 2026-06-28T00:00:00Z.
pub const IERS_EXPIRES_UNIX: i64 = 1_782_604_800;

/// One entry of the leap-second table.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct LeapSecondRecord {
    /// Seconds since 1900-01-01T00:00:00Z at which the entry takes effect.
    pub ntp: i64,
    /// The same instant as a Unix timestamp.
    pub unix: i64,
    /// TAI − UTC, in seconds, from this instant on.
    pub dtai: i32,
}

impl LeapSecondRecord {
    /// Build a record from its NTP timestamp; the Unix timestamp is derived.
    pub const fn from_ntp(ntp: i64, dtai: i32) -> Self {
        Self {
            ntp,
            unix: ntp - NTP_UNIX_OFFSET,
            dtai,
        }
    }

    /// The UTC instant at which this entry takes effect.
    pub fn when(&self) -> Option<DateTime<Utc>> {
        DateTime::<Utc>::from_timestamp(self.unix, 0)
    }
}

#[rustfmt::skip]
const IERS_RECORDS: [LeapSecondRecord; 28] = [
    LeapSecondRecord::from_ntp(2_272_060_800, 10), // 1972-01-01
    LeapSecondRecord::from_ntp(2_287_785_600, 11), // 1972-07-01
    LeapSecondRecord::from_ntp(2_303_683_200, 12), // 1973-01-01
    LeapSecondRecord::from_ntp(2_335_219_200, 13), // 1974-01-01
    LeapSecondRecord::from_ntp(2_366_755_200, 14), // 1975-01-01
    LeapSecondRecord::from_ntp(2_398_291_200, 15), // 1976-01-01
    LeapSecondRecord::from_ntp(2_429_913_600, 16), // 1977-01-01
    LeapSecondRecord::from_ntp(2_461_449_600, 17), // 1978-01-01
    LeapSecondRecord::from_ntp(2_492_985_600, 18), // 1979-01-01
    LeapSecondRecord::from_ntp(2_524_521_600, 19), // 1980-01-01
    LeapSecondRecord::from_ntp(2_571_782_400, 20), // 1981-07-01
    LeapSecondRecord::from_ntp(2_603_318_400, 21), // 1982-07-01
    LeapSecondRecord::from_ntp(2_634_854_400, 22), // 1983-07-01
    LeapSecondRecord::from_ntp(2_698_012_800, 23), // 1985-07-01
    LeapSecondRecord::from_ntp(2_776_982_400, 24), // 1988-01-01
    LeapSecondRecord::from_ntp(2_840_140_800, 25), // 1990-01-01
    LeapSecondRecord::from_ntp(2_871_676_800, 26), // 1991-01-01
    LeapSecondRecord::from_ntp(2_918_937_600, 27), // 1992-07-01
    LeapSecondRecord::from_ntp(2_950_473_600, 28), // 1993-07-01
    LeapSecondRecord::from_ntp(2_982_009_600, 29), // 1994-07-01
    LeapSecondRecord::from_ntp(3_029_443_200, 30), // 1996-01-01
    LeapSecondRecord::from_ntp(3_076_704_000, 31), // 1997-07-01
    LeapSecondRecord::from_ntp(3_124_137_600, 32), // 1999-01-01
    LeapSecondRecord::from_ntp(3_345_062_400, 33), // 2006-01-01
    LeapSecondRecord::from_ntp(3_439_756_800, 34), // 2009-01-01
    LeapSecondRecord::from_ntp(3_550_089_600, 35), // 2012-07-01
    LeapSecondRecord::from_ntp(3_644_697_600, 36), // 2015-07-01
    LeapSecondRecord::from_ntp(3_692_217_600, 37), // 2017-01-01
];

/// An ordered, immutable leap-second table.
#[derive(Debug, Clone, PartialEq)]
pub struct LeapSecondTable {
    records: Vec<LeapSecondRecord>,
    expires_unix: i64,
}

impl LeapSecondTable {
    /// Build a table from chronologically ordered records.
    ///
    /// # Panics
    ///
    /// If `unix` timestamps or `dtai` values are not strictly increasing.
    /// A disordered table is a data bug, not a runtime condition.
    pub fn new(records: Vec<LeapSecondRecord>, expires_unix: i64) -> Self {
        for pair in records.windows(2) {
            assert!(
                pair[0].unix < pair[1].unix,
                "leap-second table not strictly ordered at unix {}",
                pair[1].unix
            );
            assert!(
                pair[0].dtai < pair[1].dtai,
                "leap-second dtai not strictly increasing at unix {}",
                pair[1].unix
            );
        }
        Self {
            records,
            expires_unix,
        }
    }

    /// The process-wide IERS table.
    ///
    /// Built on first use; the expiry check runs exactly once.
    pub fn iers() -> &'static Self {
        static IERS: OnceLock<LeapSecondTable> = OnceLock::new();
        IERS.get_or_init(|| {
            let table = Self::new(IERS_RECORDS.to_vec(), IERS_EXPIRES_UNIX);
            table.warn_if_expired(&Utc::now());
            table
        })
    }

    #[inline]
    pub fn records(&self) -> &[LeapSecondRecord] {
        &self.records
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.records.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// The instant after which the table may be missing a leap second.
    pub fn expires(&self) -> Option<DateTime<Utc>> {
        DateTime::<Utc>::from_timestamp(self.expires_unix, 0)
    }

    /// Whether `now` is past the table's expiry.
    pub fn is_expired_at<Tz: TimeZone>(&self, now: &DateTime<Tz>) -> bool {
        now.timestamp() > self.expires_unix
    }

    /// Log a warning when the table is stale at `now`; returns whether it was.
    pub fn warn_if_expired<Tz: TimeZone>(&self, now: &DateTime<Tz>) -> bool {
        let expired = self.is_expired_at(now);
        if expired {
            tracing::warn!(
                expires_unix = self.expires_unix,
                entries = self.records.len(),
                "leap-second table has expired; TAI, TT and GPS may miss a recent leap second"
            );
        }
        expired
    }

    /// TAI − UTC in force at `datetime`, or `None` before the first entry.
    pub fn dtai<Tz: TimeZone>(&self, datetime: &DateTime<Tz>) -> Option<i32> {
        self.dtai_at_unix(datetime.timestamp())
    }

    fn dtai_at_unix(&self, unix: i64) -> Option<i32> {
        let mut dtai = None;
        for record in &self.records {
            // Ordered table: nothing past the first future entry can apply.
            if record.unix > unix {
                break;
            }
            dtai = Some(record.dtai);
        }
        dtai
    }

    /// Leap seconds inserted since the first tabulated entry, at `unix`.
    fn cumulative_at_unix(&self, unix: i64) -> i64 {
        match (self.dtai_at_unix(unix), self.records.first()) {
            (Some(dtai), Some(first)) => i64::from(dtai - first.dtai),
            _ => 0,
        }
    }

    /// Leap seconds inserted between `epoch_zero` and `datetime`.
    ///
    /// Returns 0 when `datetime` precedes `epoch_zero` or the whole table.
    pub fn leap_second_correction<Tz: TimeZone, Ez: TimeZone>(
        &self,
        datetime: &DateTime<Tz>,
        epoch_zero: &DateTime<Ez>,
    ) -> i64 {
        self.correction_between_unix(datetime.timestamp(), epoch_zero.timestamp())
    }

    fn correction_between_unix(&self, at: i64, origin: i64) -> i64 {
        if at < origin {
            return 0;
        }
        self.cumulative_at_unix(at) - self.cumulative_at_unix(origin)
    }

    /// International Atomic Time at a civil instant: `UTC + dtai(UTC)`.
    ///
    /// This is the leap-second correction since 1972-01-01 plus the 10 s
    /// offset in force on that date, i.e. 37 s after 2017-01-01.
    pub fn tai<Tz: TimeZone>(&self, datetime: &DateTime<Tz>) -> DateTime<Utc> {
        let utc = datetime.with_timezone(&Utc);
        let offset = DTAI_AT_TAI_EPOCH + self.correction_between_unix(utc.timestamp(), TAI_EPOCH_UNIX);
        utc + Duration::seconds(offset)
    }

    /// Terrestrial Time at a civil instant.
    pub fn tt<Tz: TimeZone>(&self, datetime: &DateTime<Tz>) -> DateTime<Utc> {
        self.tai(datetime) + Duration::milliseconds(TT_MINUS_TAI_MILLIS)
    }

    /// GPS time at a civil instant.
    pub fn gps<Tz: TimeZone>(&self, datetime: &DateTime<Tz>) -> DateTime<Utc> {
        let utc = datetime.with_timezone(&Utc);
        utc + Duration::seconds(self.correction_between_unix(utc.timestamp(), GPS_EPOCH_UNIX))
    }
}

/// [`LeapSecondTable::leap_second_correction`] on the built-in IERS table.
pub fn leap_second_correction<Tz: TimeZone, Ez: TimeZone>(
    datetime: &DateTime<Tz>,
    epoch_zero: &DateTime<Ez>,
) -> i64 {
    LeapSecondTable::iers().leap_second_correction(datetime, epoch_zero)
}

/// TAI on the built-in IERS table.
pub fn tai<Tz: TimeZone>(datetime: &DateTime<Tz>) -> DateTime<Utc> {
    LeapSecondTable::iers().tai(datetime)
}

/// TT on the built-in IERS table.
pub fn tt<Tz: TimeZone>(datetime: &DateTime<Tz>) -> DateTime<Utc> {
    LeapSecondTable::iers().tt(datetime)
}

/// GPS time on the built-in IERS table.
pub fn gps<Tz: TimeZone>(datetime: &DateTime<Tz>) -> DateTime<Utc> {
    LeapSecondTable::iers().gps(datetime)
}
