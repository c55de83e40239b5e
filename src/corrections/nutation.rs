// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (C) 2026 Vallés Puig, Ramon

//! Nutation in longitude and obliquity.
//!
//! Truncated four-term series in the longitude of the Moon's ascending node
//! `Ω` and the mean longitudes of the Sun `L` and Moon `L′` (Meeus 1998,
//! ch. 22).  Accuracy is 0.5″ in `Δψ` and 0.1″ in `Δε`; the dominant term
//! has the 18.6-year period of `Ω` and an amplitude of about 17″.

use chrono::{DateTime, TimeZone};

use super::cos_dec;
use crate::coords::{EquatorialCoordinate, EquatorialDelta};
use crate::epoch::centuries_since_j2000;

/// Nutation components, arcseconds.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Nutation {
    /// Nutation in longitude `Δψ`.
    pub longitude: f64,
    /// Nutation in obliquity `Δε`.
    pub obliquity: f64,
}

impl Nutation {
    /// Nutation for `t` Julian centuries after J2000.0.
    pub fn at_centuries(t: f64) -> Self {
        let sun = (280.4665 + 36_000.7698 * t).to_radians();
        let moon = (218.3165 + 481_267.8813 * t).to_radians();
        let node = (125.044_52 - 1_934.136_261 * t + 0.002_070_8 * t * t + t * t * t / 450_000.0)
            .to_radians();

        Self {
            longitude: -17.20 * node.sin() - 1.32 * (2.0 * sun).sin() - 0.23 * (2.0 * moon).sin()
                + 0.21 * (2.0 * node).sin(),
            obliquity: 9.20 * node.cos() + 0.57 * (2.0 * sun).cos() + 0.10 * (2.0 * moon).cos()
                - 0.09 * (2.0 * node).cos(),
        }
    }
}

/// Nutation at `datetime`.
pub fn nutation<Tz: TimeZone>(datetime: &DateTime<Tz>) -> Nutation {
    Nutation::at_centuries(centuries_since_j2000(datetime).value())
}

/// Mean obliquity of the ecliptic for `t` centuries after J2000.0, degrees.
pub(crate) fn mean_obliquity_at(t: f64) -> f64 {
    let arcsec = 21.448 - 46.8150 * t - 0.000_59 * t * t + 0.001_813 * t * t * t;
    23.0 + 26.0 / 60.0 + arcsec / 3600.0
}

/// Mean obliquity of the ecliptic (IAU 1980), degrees.
pub fn mean_obliquity<Tz: TimeZone>(datetime: &DateTime<Tz>) -> f64 {
    mean_obliquity_at(centuries_since_j2000(datetime).value())
}

/// True obliquity `ε₀ + Δε`, degrees.
pub fn true_obliquity<Tz: TimeZone>(datetime: &DateTime<Tz>) -> f64 {
    let t = centuries_since_j2000(datetime).value();
    mean_obliquity_at(t) + Nutation::at_centuries(t).obliquity / 3600.0
}

/// Nutation correction to a mean equatorial position at `datetime`.
///
/// Involves `tan δ`; a target exactly at a celestial pole yields a
/// non-finite `ra` delta.
pub fn nutation_correction<Tz: TimeZone>(
    datetime: &DateTime<Tz>,
    target: &EquatorialCoordinate,
) -> EquatorialDelta {
    let t = centuries_since_j2000(datetime).value();
    let nutation = Nutation::at_centuries(t);
    let epsilon = (mean_obliquity_at(t) + nutation.obliquity / 3600.0).to_radians();

    let (sin_ra, cos_ra) = target.ra.to_radians().sin_cos();
    let tan_dec = target.dec.to_radians().sin() / cos_dec(target.dec);
    let (sin_eps, cos_eps) = epsilon.sin_cos();

    let ra = (cos_eps + sin_eps * sin_ra * tan_dec) * nutation.longitude
        - cos_ra * tan_dec * nutation.obliquity;
    let dec = sin_eps * cos_ra * nutation.longitude + sin_ra * nutation.obliquity;

    EquatorialDelta::from_arcseconds(ra, dec)
}
