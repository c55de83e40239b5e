// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (C) 2026 Vallés Puig, Ramon

//! Annual and diurnal aberration.
//!
//! *Annual* aberration follows from the Earth's orbital velocity: the
//! constant of aberration `κ = 20.49552″` combined with the orbit's
//! eccentricity and longitude of perihelion (Meeus 1998, eq. 23.3).
//!
//! *Diurnal* aberration follows from the observer's rotational velocity
//! `Ω·R⊕·cos φ`; its coefficient `Ω·R⊕/c` is about 0.32″.

use chrono::{DateTime, TimeZone};

use super::cos_dec;
use super::nutation::{mean_obliquity_at, Nutation};
use crate::config::{
    ABERRATION_CONSTANT, EARTH_ANGULAR_VELOCITY, EARTH_EQUATORIAL_RADIUS, SPEED_OF_LIGHT,
};
use crate::coords::{EquatorialCoordinate, EquatorialDelta, GeographicCoordinate};
use crate::epoch::centuries_since_j2000;
use crate::sidereal::hour_angle;

/// Geometric true longitude of the Sun, degrees (Meeus 1998, ch. 25).
///
/// Good to about 0.01°, far below what aberration needs.
pub(crate) fn solar_true_longitude(t: f64) -> f64 {
    let mean_longitude = 280.466_46 + 36_000.769_83 * t + 0.000_303_2 * t * t;
    let mean_anomaly = (357.529_11 + 35_999.050_29 * t - 0.000_153_7 * t * t).to_radians();
    let centre = (1.914_602 - 0.004_817 * t - 0.000_014 * t * t) * mean_anomaly.sin()
        + (0.019_993 - 0.000_101 * t) * (2.0 * mean_anomaly).sin()
        + 0.000_289 * (3.0 * mean_anomaly).sin();
    mean_longitude + centre
}

/// Eccentricity of the Earth's orbit.
#[inline]
pub(crate) fn orbital_eccentricity(t: f64) -> f64 {
    0.016_708_634 - 0.000_042_037 * t - 0.000_000_126_7 * t * t
}

/// Longitude of the Earth's perihelion, degrees.
#[inline]
pub(crate) fn longitude_of_perihelion(t: f64) -> f64 {
    102.937_35 + 1.719_46 * t + 0.000_46 * t * t
}

/// Annual aberration correction at `datetime`.
///
/// Divides by `cos δ`: a target exactly at a celestial pole yields a
/// non-finite `ra` delta rather than an error.
pub fn annual_aberration_correction<Tz: TimeZone>(
    datetime: &DateTime<Tz>,
    target: &EquatorialCoordinate,
) -> EquatorialDelta {
    let t = centuries_since_j2000(datetime).value();
    let kappa = ABERRATION_CONSTANT;
    let e = orbital_eccentricity(t);
    let epsilon = (mean_obliquity_at(t) + Nutation::at_centuries(t).obliquity / 3600.0).to_radians();

    let (sin_sun, cos_sun) = solar_true_longitude(t).to_radians().sin_cos();
    let (sin_pi, cos_pi) = longitude_of_perihelion(t).to_radians().sin_cos();
    let (sin_ra, cos_ra) = target.ra.to_radians().sin_cos();
    let sin_dec = target.dec.to_radians().sin();
    let cos_dec = cos_dec(target.dec);
    let (sin_eps, cos_eps) = epsilon.sin_cos();
    let tan_eps = sin_eps / cos_eps;

    let ra = -kappa * (cos_ra * cos_sun * cos_eps + sin_ra * sin_sun) / cos_dec
        + e * kappa * (cos_ra * cos_pi * cos_eps + sin_ra * sin_pi) / cos_dec;

    let lever = tan_eps * cos_dec - sin_ra * sin_dec;
    let dec = -kappa * (cos_sun * cos_eps * lever + cos_ra * sin_dec * sin_sun)
        + e * kappa * (cos_pi * cos_eps * lever + cos_ra * sin_dec * sin_pi);

    EquatorialDelta::from_arcseconds(ra, dec)
}

/// Diurnal aberration coefficient `Ω·R⊕/c`, arcseconds.
pub fn diurnal_aberration_coefficient() -> f64 {
    (EARTH_ANGULAR_VELOCITY * EARTH_EQUATORIAL_RADIUS / SPEED_OF_LIGHT).to_degrees() * 3600.0
}

/// Diurnal aberration correction for `observer` at `datetime`.
pub fn diurnal_aberration_correction<Tz: TimeZone>(
    datetime: &DateTime<Tz>,
    observer: &GeographicCoordinate,
    target: &EquatorialCoordinate,
) -> EquatorialDelta {
    let k = diurnal_aberration_coefficient() * observer.latitude.to_radians().cos();
    let (sin_ha, cos_ha) = hour_angle(datetime, observer.longitude, target.ra)
        .to_radians()
        .sin_cos();
    let sin_dec = target.dec.to_radians().sin();

    EquatorialDelta::from_arcseconds(k * cos_ha / cos_dec(target.dec), k * sin_ha * sin_dec)
}
