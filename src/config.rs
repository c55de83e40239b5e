// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (C) 2026 Vallés Puig, Ramon

//! Physical constants and caller-tunable defaults.

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Default horizon altitude, degrees.
pub const DEFAULT_HORIZON: f64 = 0.0;

/// Default air temperature for refraction, kelvin (10 °C).
pub const DEFAULT_TEMPERATURE: f64 = 283.15;

/// Default air pressure for refraction, pascal (one standard atmosphere).
pub const DEFAULT_PRESSURE: f64 = 101_325.0;

/// Angular velocity of the Earth's rotation, rad/s.
pub const EARTH_ANGULAR_VELOCITY: f64 = 7.292_115e-5;

/// Equatorial radius of the Earth (WGS-84), metres.
pub const EARTH_EQUATORIAL_RADIUS: f64 = 6_378_137.0;

/// Polar radius of the Earth (WGS-84), metres.
pub const EARTH_POLAR_RADIUS: f64 = 6_356_752.314_245;

/// Speed of light in vacuum, m/s.
pub const SPEED_OF_LIGHT: f64 = 299_792_458.0;

/// Constant of aberration, arcseconds.
pub const ABERRATION_CONSTANT: f64 = 20.495_52;

/// Ratio of sidereal to solar time.
pub const SIDEREAL_RATE: f64 = 1.002_737_909;

/// Ratio of solar to sidereal time.
pub const SOLAR_RATE: f64 = 0.997_269_566_3;

/// Default cap on day steps taken by the rise/set search.
pub const DEFAULT_MAX_SEARCH_DAYS: u32 = 400;

/// Atmosphere and horizon used by refraction and visibility.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct ObservingConditions {
    /// Air temperature, kelvin.
    pub temperature: f64,
    /// Air pressure, pascal.
    pub pressure: f64,
    /// Local horizon altitude, degrees.
    pub horizon: f64,
}

impl Default for ObservingConditions {
    fn default() -> Self {
        Self {
            temperature: DEFAULT_TEMPERATURE,
            pressure: DEFAULT_PRESSURE,
            horizon: DEFAULT_HORIZON,
        }
    }
}

/// Bounds on the rise/set day-step search.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct SearchOptions {
    /// Calendar days examined before giving up.
    pub max_iterations: u32,
}

impl Default for SearchOptions {
    fn default() -> Self {
        Self {
            max_iterations: DEFAULT_MAX_SEARCH_DAYS,
        }
    }
}
