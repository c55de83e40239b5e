// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (C) 2026 Vallés Puig, Ramon

//! # Coordinate correction chain
//!
//! Four independent correctors, each returning a small [`EquatorialDelta`]
//! to be **added** to a catalog position:
//!
//! | Corrector | Typical size |
//! |-----------|--------------|
//! | [`precession_correction`] | 50″ per year from J2000.0 |
//! | [`annual_aberration_correction`] | ≤ 20.5″ |
//! | [`nutation_correction`] | ≤ 17″ |
//! | [`diurnal_aberration_correction`] | ≤ 0.32″ |
//!
//! All are first-order small-angle corrections evaluated at the catalog
//! position, so the order of summation does not matter:
//!
//! ```rust
//! use chrono::{TimeZone, Utc};
//! use astrometry::{apparent_equatorial, EquatorialCoordinate, GeographicCoordinate};
//!
//! let dt = Utc.with_ymd_and_hms(2021, 5, 14, 0, 0, 0).unwrap();
//! let mauna_kea = GeographicCoordinate::new(19.820_611, -155.468_094);
//! let catalog = EquatorialCoordinate::new(88.792_958_3, 7.407_063_9);
//! let apparent = apparent_equatorial(&dt, &mauna_kea, &catalog);
//! assert!((apparent.ra - catalog.ra).abs() < 0.5);
//! ```
//!
//! A target exactly at a celestial pole (`cos δ = 0`) is outside the domain
//! of the nutation and aberration formulas.  They do not fail: the
//! right-ascension delta comes back as `±∞` or `NaN`, which callers detect
//! with [`EquatorialDelta::is_finite`].

mod aberration;
mod nutation;
mod precession;

pub use aberration::{
    annual_aberration_correction, diurnal_aberration_coefficient, diurnal_aberration_correction,
};
pub use nutation::{mean_obliquity, nutation, nutation_correction, true_obliquity, Nutation};
pub use precession::{precession_correction, PrecessionAngles};

use chrono::{DateTime, TimeZone};

use crate::coords::{EquatorialCoordinate, EquatorialDelta, GeographicCoordinate};

/// `cos δ`, exactly zero at `δ = ±90°`.
///
/// `cos(π/2)` evaluates to 6e-17 in floating point, which would turn the
/// pole singularity into a huge but finite delta.
#[inline]
pub(crate) fn cos_dec(dec: f64) -> f64 {
    if dec.abs() == 90.0 {
        0.0
    } else {
        dec.to_radians().cos()
    }
}

/// Sum of every correction for `catalog` seen by `observer` at `datetime`.
pub fn total_correction<Tz: TimeZone>(
    datetime: &DateTime<Tz>,
    observer: &GeographicCoordinate,
    catalog: &EquatorialCoordinate,
) -> EquatorialDelta {
    [
        precession_correction(datetime, catalog),
        nutation_correction(datetime, catalog),
        annual_aberration_correction(datetime, catalog),
        diurnal_aberration_correction(datetime, observer, catalog),
    ]
    .into_iter()
    .sum()
}

/// Apparent place of a J2000.0 catalog position: `catalog + Σ corrections`.
pub fn apparent_equatorial<Tz: TimeZone>(
    datetime: &DateTime<Tz>,
    observer: &GeographicCoordinate,
    catalog: &EquatorialCoordinate,
) -> EquatorialCoordinate {
    *catalog + total_correction(datetime, observer, catalog)
}
