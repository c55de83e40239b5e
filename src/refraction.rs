// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (C) 2026 Vallés Puig, Ramon

//! # Atmospheric refraction and horizon dip
//!
//! Refraction uses Sæmundsson's cotangent formula (Meeus 1998, eq. 16.4)
//! for a *true* altitude, scaled by `P / 101 325 Pa · 283.15 K / T`.  The
//! model has no meaning below the horizon: [`refraction`] answers `+∞` there
//! and [`correct_for_refraction`] leaves the coordinate untouched, which
//! upstream code reads as "not yet risen".

use crate::config::{
    ObservingConditions, DEFAULT_PRESSURE, DEFAULT_TEMPERATURE, EARTH_EQUATORIAL_RADIUS,
    EARTH_POLAR_RADIUS,
};
use crate::coords::{GeographicCoordinate, HorizontalCoordinate};

/// Makes the formula vanish exactly at the zenith, arcminutes.
const ZENITH_OFFSET_ARCMIN: f64 = 0.001_927_9;

/// Refraction at the altitude of `target`, degrees.
///
/// `temperature` in kelvin, `pressure` in pascal.  Returns `f64::INFINITY`
/// when `target.alt < 0`.
pub fn refraction(target: &HorizontalCoordinate, temperature: f64, pressure: f64) -> f64 {
    if target.alt < 0.0 {
        return f64::INFINITY;
    }
    let h = target.alt.min(90.0);
    let arcmin = 1.02 / (h + 10.3 / (h + 5.11)).to_radians().tan() + ZENITH_OFFSET_ARCMIN;
    let scale = (pressure / DEFAULT_PRESSURE) * (DEFAULT_TEMPERATURE / temperature);
    scale * arcmin / 60.0
}

/// Raise the altitude of `target` by its refraction; azimuth is unchanged.
///
/// Below the horizon the coordinate is returned as is.
pub fn correct_for_refraction(
    target: &HorizontalCoordinate,
    temperature: f64,
    pressure: f64,
) -> HorizontalCoordinate {
    if target.alt < 0.0 {
        return *target;
    }
    HorizontalCoordinate::new(
        target.alt + refraction(target, temperature, pressure),
        target.az,
    )
}

/// [`correct_for_refraction`] with the atmosphere of `conditions`.
#[inline]
pub fn correct_for_conditions(
    target: &HorizontalCoordinate,
    conditions: &ObservingConditions,
) -> HorizontalCoordinate {
    correct_for_refraction(target, conditions.temperature, conditions.pressure)
}

/// Geocentric radius of the WGS-84 ellipsoid at `latitude`, metres.
pub fn earth_radius(latitude: f64) -> f64 {
    let (a, b) = (EARTH_EQUATORIAL_RADIUS, EARTH_POLAR_RADIUS);
    let (sin, cos) = latitude.to_radians().sin_cos();
    let num = (a * a * cos).powi(2) + (b * b * sin).powi(2);
    let den = (a * cos).powi(2) + (b * sin).powi(2);
    (num / den).sqrt()
}

/// Dip of the sea horizon below the astronomical horizon, degrees.
///
/// Positive for an observer above sea level, negative below it, zero when
/// the observer carries no elevation.
pub fn horizon_dip(observer: &GeographicCoordinate) -> f64 {
    let h = match observer.elevation {
        Some(h) if h.abs() >= 1e-5 => h,
        _ => return 0.0,
    };
    let r = earth_radius(observer.latitude);
    let dip = (r / (r + h.abs())).clamp(-1.0, 1.0).acos().to_degrees();
    if h > 0.0 {
        dip
    } else {
        -dip
    }
}
