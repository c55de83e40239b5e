// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (C) 2026 Vallés Puig, Ramon

//! Coordinate value types.
//!
//! All angles are plain `f64` **degrees**.  [`EquatorialCoordinate`] is used
//! both for catalog (epoch-fixed) and apparent positions; which one a value
//! holds is carried by the name of the binding, e.g. `catalog` vs `apparent`.

use std::ops::{Add, AddAssign, Neg};

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Wrap an angle into `[0, 360)`.
#[inline]
pub fn normalize_degrees(degrees: f64) -> f64 {
    let wrapped = degrees.rem_euclid(360.0);
    // rem_euclid can round up to exactly the modulus for tiny negatives.
    if wrapped >= 360.0 {
        0.0
    } else {
        wrapped
    }
}

/// Wrap an hour angle or sidereal time into `[0, 24)`.
#[inline]
pub fn normalize_hours(hours: f64) -> f64 {
    let wrapped = hours.rem_euclid(24.0);
    if wrapped >= 24.0 {
        0.0
    } else {
        wrapped
    }
}

/// Wrap an angular difference into `(-180, 180]`.
#[inline]
pub fn normalize_delta_degrees(delta: f64) -> f64 {
    let wrapped = normalize_degrees(delta);
    if wrapped > 180.0 {
        wrapped - 360.0
    } else {
        wrapped
    }
}

/// Right ascension and declination, degrees.
///
/// `ra ∈ [0, 360)`, `dec ∈ [-90, 90]`.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct EquatorialCoordinate {
    pub ra: f64,
    pub dec: f64,
}

impl EquatorialCoordinate {
    #[inline]
    pub const fn new(ra: f64, dec: f64) -> Self {
        Self { ra, dec }
    }

    /// Right ascension in hours.
    #[inline]
    pub fn ra_hours(&self) -> f64 {
        self.ra / 15.0
    }
}

/// A small additive offset in right ascension and declination, degrees.
///
/// Every corrector returns one of these; see [`crate::apparent_equatorial`].
#[derive(Debug, Clone, Copy, PartialEq, Default)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct EquatorialDelta {
    pub ra: f64,
    pub dec: f64,
}

impl EquatorialDelta {
    pub const ZERO: Self = Self { ra: 0.0, dec: 0.0 };

    #[inline]
    pub const fn new(ra: f64, dec: f64) -> Self {
        Self { ra, dec }
    }

    /// Build from components in arcseconds.
    #[inline]
    pub fn from_arcseconds(ra: f64, dec: f64) -> Self {
        Self::new(ra / 3600.0, dec / 3600.0)
    }

    /// Whether both components are finite numbers.
    ///
    /// Correctors propagate `NaN`/`±∞` for a target exactly at a celestial
    /// pole; callers filter those out with this check.
    #[inline]
    pub fn is_finite(&self) -> bool {
        self.ra.is_finite() && self.dec.is_finite()
    }

    /// Angular size of the delta on the sky, degrees.
    #[inline]
    pub fn magnitude(&self, dec: f64) -> f64 {
        let ra_on_sky = self.ra * dec.to_radians().cos();
        ra_on_sky.hypot(self.dec)
    }
}

impl Add for EquatorialDelta {
    type Output = Self;
    #[inline]
    fn add(self, rhs: Self) -> Self {
        Self::new(self.ra + rhs.ra, self.dec + rhs.dec)
    }
}

impl AddAssign for EquatorialDelta {
    #[inline]
    fn add_assign(&mut self, rhs: Self) {
        self.ra += rhs.ra;
        self.dec += rhs.dec;
    }
}

impl Neg for EquatorialDelta {
    type Output = Self;
    #[inline]
    fn neg(self) -> Self {
        Self::new(-self.ra, -self.dec)
    }
}

impl std::iter::Sum for EquatorialDelta {
    fn sum<I: Iterator<Item = Self>>(iter: I) -> Self {
        iter.fold(Self::ZERO, Add::add)
    }
}

impl Add<EquatorialDelta> for EquatorialCoordinate {
    type Output = Self;
    /// Apply a correction; right ascension is re-wrapped into `[0, 360)`.
    #[inline]
    fn add(self, rhs: EquatorialDelta) -> Self {
        Self::new(normalize_degrees(self.ra + rhs.ra), self.dec + rhs.dec)
    }
}

/// Altitude and azimuth, degrees.
///
/// `alt ∈ [-90, 90]`, `az ∈ [0, 360)` measured eastward from north.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct HorizontalCoordinate {
    pub alt: f64,
    pub az: f64,
}

impl HorizontalCoordinate {
    /// Value historically returned for an observer standing exactly on a
    /// geographic pole, where azimuth is undefined.
    pub const POLE_SENTINEL: Self = Self { alt: -1.0, az: -1.0 };

    #[inline]
    pub const fn new(alt: f64, az: f64) -> Self {
        Self { alt, az }
    }
}

/// Observer location on the Earth, degrees, longitude east-positive.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct GeographicCoordinate {
    pub latitude: f64,
    pub longitude: f64,
    /// Height above sea level in metres; only the horizon dip uses it.
    #[cfg_attr(feature = "serde", serde(default))]
    pub elevation: Option<f64>,
}

impl GeographicCoordinate {
    #[inline]
    pub const fn new(latitude: f64, longitude: f64) -> Self {
        Self {
            latitude,
            longitude,
            elevation: None,
        }
    }

    #[inline]
    pub const fn with_elevation(mut self, elevation: f64) -> Self {
        self.elevation = Some(elevation);
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn normalize_degrees_wraps_both_ways() {
        assert_eq!(normalize_degrees(370.0), 10.0);
        assert_eq!(normalize_degrees(-10.0), 350.0);
        assert_eq!(normalize_degrees(360.0), 0.0);
        assert!(normalize_degrees(-1e-20) < 360.0);
    }

    #[test]
    fn normalize_hours_wraps_both_ways() {
        assert_eq!(normalize_hours(25.5), 1.5);
        assert_eq!(normalize_hours(-1.0), 23.0);
    }

    #[test]
    fn delta_wraps_to_signed_range() {
        assert_eq!(normalize_delta_degrees(359.0), -1.0);
        assert_eq!(normalize_delta_degrees(-359.0), 1.0);
        assert_eq!(normalize_delta_degrees(180.0), 180.0);
    }

    #[test]
    fn applying_a_delta_rewraps_right_ascension() {
        let catalog = EquatorialCoordinate::new(359.999, 10.0);
        let apparent = catalog + EquatorialDelta::new(0.002, -0.5);
        assert!((apparent.ra - 0.001).abs() < 1e-9);
        assert_eq!(apparent.dec, 9.5);
    }

    #[test]
    fn deltas_sum() {
        let total: EquatorialDelta = [
            EquatorialDelta::from_arcseconds(36.0, 0.0),
            EquatorialDelta::from_arcseconds(0.0, 72.0),
        ]
        .into_iter()
        .sum();
        assert!((total.ra - 0.01).abs() < 1e-12);
        assert!((total.dec - 0.02).abs() < 1e-12);
        assert!(!EquatorialDelta::new(f64::INFINITY, 0.0).is_finite());
    }

    #[cfg(feature = "serde")]
    #[test]
    fn observer_elevation_is_optional_in_json() {
        let observer: GeographicCoordinate =
            serde_json::from_str(r#"{"latitude":19.82,"longitude":-155.47}"#).unwrap();
        assert_eq!(observer.elevation, None);
    }
}
