// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (C) 2026 Vallés Puig, Ramon

//! Apparent positions and observability.
//!
//! Turns a J2000.0 catalog position into where a fixed star actually appears
//! for an observer at a given instant, and answers whether and when it is
//! observable.
//!
//! # Pipeline
//!
//! | Stage | Entry points |
//! |-------|--------------|
//! | Civil time → Julian Date | [`julian_date`], [`modified_julian_date`], [`Time<S>`] |
//! | Atomic scales | [`leap_seconds::tai`], [`leap_seconds::tt`], [`leap_seconds::gps`] |
//! | Catalog → apparent place | [`apparent_equatorial`] and the four correctors |
//! | Sidereal time | [`greenwich_sidereal_time`], [`local_sidereal_time`], [`hour_angle`] |
//! | Equatorial ↔ horizontal | [`equatorial_to_horizontal`], [`horizontal_to_equatorial`] |
//! | Atmosphere | [`refraction`], [`correct_for_refraction`], [`horizon_dip`] |
//! | Observability | [`is_circumpolar`], [`is_visible`], [`next_rise`], [`next_set`] |
//!
//! # Conventions
//!
//! - Angles are `f64` degrees; sidereal times are `f64` hours in `[0, 24)`.
//! - Longitudes are east-positive.
//! - Every astronomical formula runs on the **UTC Julian Date**; no ΔT is
//!   applied.
//! - Instants are `chrono::DateTime<Tz>` in any time zone.
//!
//! # Time scales
//!
//! The day counters implementing [`TimeScale`]:
//!
//! | Marker | Scale |
//! |--------|-------|
//! | [`JD`] | Julian Date |
//! | [`MJD`] | Modified Julian Date |
//! | [`UnixTime`] | Days since the Unix epoch |
//!
//! # Logging
//!
//! The crate emits [`tracing`] events and installs no subscriber: a `warn`
//! once if the built-in leap-second table has expired, `debug` for each day
//! step of a rise/set search.

pub mod config;
mod coords;
mod corrections;
mod epoch;
mod error;
mod horizontal;
pub(crate) mod instant;
mod julian_date_ext;
pub mod leap_seconds;
mod period;
mod refraction;
pub(crate) mod scales;
mod sidereal;
mod visibility;

// ── Re-exports ────────────────────────────────────────────────────────────

pub use config::{ObservingConditions, SearchOptions};
pub use coords::{
    normalize_degrees, normalize_delta_degrees, normalize_hours, EquatorialCoordinate,
    EquatorialDelta, GeographicCoordinate, HorizontalCoordinate,
};
pub use corrections::{
    annual_aberration_correction, apparent_equatorial, diurnal_aberration_coefficient,
    diurnal_aberration_correction, mean_obliquity, nutation, nutation_correction,
    precession_correction, total_correction, true_obliquity, Nutation, PrecessionAngles,
};
pub use epoch::{centuries_since_j2000, julian_date, modified_julian_date, to_utc};
pub use error::SearchError;
pub use horizontal::{equatorial_to_horizontal, horizontal_to_equatorial};
pub use instant::{Time, TimeInstant, TimeScale};
pub use leap_seconds::{LeapSecondRecord, LeapSecondTable};
pub use period::{Interval, Period, UtcPeriod};
pub use refraction::{
    correct_for_conditions, correct_for_refraction, earth_radius, horizon_dip, refraction,
};
pub use scales::{UnixTime, JD, MJD};
pub use sidereal::{
    greenwich_sidereal_time, greenwich_sidereal_to_universal, hour_angle,
    local_sidereal_time, local_sidereal_to_greenwich,
};
pub use visibility::{
    is_above_horizon, is_circumpolar, is_visible, next_rise, next_rise_with, next_set,
    next_set_with, next_visibility_window, rise_set_gate, transit, transit_above, RiseSetEvent,
    Transit, TransitInstant, TransitParameters,
};

/// Julian Date on the UTC axis.
///
/// This is a type alias for [`Time<JD>`].
pub type JulianDate = Time<JD>;

/// Modified Julian Date — `JD − 2 400 000.5`.
///
/// This is a type alias for [`Time<MJD>`].
pub type ModifiedJulianDate = Time<MJD>;
