// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (C) 2026 Vallés Puig, Ramon

//! # Visibility and rise/set search
//!
//! Stateless predicates ([`is_circumpolar`], [`is_visible`],
//! [`is_above_horizon`]) and the sidereal rise/set geometry of a fixed
//! target ([`rise_set_gate`], [`transit`]).
//!
//! [`rise_set_gate`] and [`transit`] work against the geometric horizon;
//! [`transit_above`] generalises them to any horizon altitude and is what
//! the search uses.
//!
//! [`next_rise`] and [`next_set`] turn the sidereal rise/set times into civil
//! instants one UTC calendar day at a time, starting from the day of the
//! search instant, and return the first event at or after it.  A sidereal
//! time recurs twice in the same UTC day for about four minutes, so both
//! solutions are tried before moving on.  The day loop is capped by
//! [`SearchOptions::max_iterations`] and ends in [`SearchError::Exhausted`]
//! beyond it.
//!
//! ```rust
//! use chrono::{TimeZone, Utc};
//! use astrometry::{next_rise, EquatorialCoordinate, GeographicCoordinate, RiseSetEvent};
//!
//! let dt = Utc.with_ymd_and_hms(2021, 5, 14, 0, 0, 0).unwrap();
//! let mauna_kea = GeographicCoordinate::new(19.820_611, -155.468_094);
//! let betelgeuse = EquatorialCoordinate::new(88.792_958_3, 7.407_063_9);
//!
//! match next_rise(&dt, &mauna_kea, &betelgeuse, 0.0).unwrap() {
//!     RiseSetEvent::Event(rise) => assert!(rise.datetime > dt),
//!     other => panic!("unexpected {other:?}"),
//! }
//! ```

use chrono::{DateTime, Duration, TimeZone, Utc};
use tracing::debug;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use crate::config::SearchOptions;
use crate::coords::{
    normalize_degrees, normalize_hours, EquatorialCoordinate, GeographicCoordinate,
};
use crate::epoch::to_utc;
use crate::error::SearchError;
use crate::horizontal::equatorial_to_horizontal;
use crate::period::UtcPeriod;
use crate::sidereal::{
    greenwich_sidereal_to_universal, local_sidereal_to_greenwich, sidereal_day, start_of_day,
};

/// Whether `target` never sets below `horizon` (degrees) for `observer`.
///
/// The lower culmination altitude is `|φ + δ| − 90°`.  For `horizon ≥ 0` this
/// is `δ > 90° − φ + h` north of the equator and `δ < −(90° − |φ| + h)` south
/// of it; a negative horizon also admits targets of the opposite hemisphere.
pub fn is_circumpolar(
    observer: &GeographicCoordinate,
    target: &EquatorialCoordinate,
    horizon: f64,
) -> bool {
    (observer.latitude + target.dec).abs() - 90.0 > horizon
}

/// Whether `target` ever culminates above `horizon` for `observer`.
///
/// The upper culmination altitude is `90° − |φ − δ|`.
pub fn is_visible(
    observer: &GeographicCoordinate,
    target: &EquatorialCoordinate,
    horizon: f64,
) -> bool {
    90.0 - (observer.latitude - target.dec).abs() > horizon
}

/// Whether `target` is above `horizon` at `datetime`.
///
/// `false` for an observer on a geographic pole, where the horizontal
/// transform is undefined.
pub fn is_above_horizon<Tz: TimeZone>(
    datetime: &DateTime<Tz>,
    observer: &GeographicCoordinate,
    target: &EquatorialCoordinate,
    horizon: f64,
) -> bool {
    equatorial_to_horizontal(datetime, observer, target).is_some_and(|h| h.alt > horizon)
}

/// The two ratios behind the rise/set hour angle and azimuth.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct TransitParameters {
    /// `sin δ / cos φ`, cosine of the rise azimuth.
    pub ar: f64,
    /// `tan φ · tan δ`, minus the cosine of the semi-diurnal arc.
    pub h1: f64,
}

/// Rise/set ratios, `None` when the target never crosses the geometric
/// horizon (always up or always down).
pub fn rise_set_gate(
    observer: &GeographicCoordinate,
    target: &EquatorialCoordinate,
) -> Option<TransitParameters> {
    let lat = observer.latitude.to_radians();
    let dec = target.dec.to_radians();

    let ar = dec.sin() / lat.cos();
    let h1 = lat.tan() * dec.tan();
    // NaN fails both comparisons; reject it explicitly.
    if !(ar.abs() <= 1.0 && h1.abs() <= 1.0) {
        return None;
    }
    Some(TransitParameters { ar, h1 })
}

/// Sidereal times and azimuths of rise and set.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Transit {
    /// Local sidereal time of rise, hours `[0, 24)`.
    pub lst_rise: f64,
    /// Local sidereal time of set, hours `[0, 24)`.
    pub lst_set: f64,
    /// Azimuth of rise, degrees `[0, 360)`.
    pub rise_az: f64,
    /// Azimuth of set, `360° − rise_az`.
    pub set_az: f64,
}

/// Rise/set sidereal times of `target` for `observer`.
pub fn transit(observer: &GeographicCoordinate, target: &EquatorialCoordinate) -> Option<Transit> {
    let TransitParameters { ar, h1 } = rise_set_gate(observer, target)?;

    Some(Transit::from_arcs(target, (-h1).acos(), ar.acos()))
}

impl Transit {
    /// From the semi-diurnal arc `H₀` and rise azimuth `A`, radians.
    fn from_arcs(target: &EquatorialCoordinate, semi_arc: f64, rise_az: f64) -> Self {
        let semi_arc = semi_arc.to_degrees() / 15.0;
        let rise_az = rise_az.to_degrees();
        let ra_hours = target.ra / 15.0;

        Transit {
            lst_rise: normalize_hours(24.0 + ra_hours - semi_arc),
            lst_set: normalize_hours(ra_hours + semi_arc),
            rise_az: normalize_degrees(rise_az),
            set_az: normalize_degrees(360.0 - rise_az),
        }
    }
}

/// `cos H₀ = (sin h − sin φ sin δ) / (cos φ cos δ)`.
///
/// Below −1 the target stays above `horizon`, above +1 it stays below.
fn cos_semi_arc(observer: &GeographicCoordinate, target: &EquatorialCoordinate, horizon: f64) -> f64 {
    let (sin_lat, cos_lat) = observer.latitude.to_radians().sin_cos();
    let (sin_dec, cos_dec) = target.dec.to_radians().sin_cos();
    (horizon.to_radians().sin() - sin_lat * sin_dec) / (cos_lat * cos_dec)
}

/// Rise/set sidereal times of `target` crossing a horizon at altitude
/// `horizon` (degrees).
///
/// The rise azimuth follows `cos A = (sin δ − sin φ sin h) / (cos φ cos h)`.
/// With `horizon = 0` this is [`transit`].
pub fn transit_above(
    observer: &GeographicCoordinate,
    target: &EquatorialCoordinate,
    horizon: f64,
) -> Option<Transit> {
    let cos_h0 = cos_semi_arc(observer, target, horizon);

    let (sin_lat, cos_lat) = observer.latitude.to_radians().sin_cos();
    let (sin_h, cos_h) = horizon.to_radians().sin_cos();
    let cos_az = (target.dec.to_radians().sin() - sin_lat * sin_h) / (cos_lat * cos_h);

    if !(cos_h0.abs() <= 1.0 && cos_az.abs() <= 1.0) {
        return None;
    }
    Some(Transit::from_arcs(target, cos_h0.acos(), cos_az.acos()))
}

/// A rise or set placed on the civil time line.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct TransitInstant {
    pub datetime: DateTime<Utc>,
    /// Local sidereal time of the event, hours.
    pub lst: f64,
    /// Greenwich sidereal time of the event, hours.
    pub gst: f64,
    /// Azimuth of the event, degrees.
    pub az: f64,
}

/// Outcome of [`next_rise`] / [`next_set`].
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum RiseSetEvent {
    /// Always above the horizon; there is nothing to rise or set.
    Circumpolar,
    /// Never above the horizon.
    NeverVisible,
    Event(TransitInstant),
}

impl RiseSetEvent {
    /// The event, if there is one.
    pub fn instant(&self) -> Option<&TransitInstant> {
        match self {
            RiseSetEvent::Event(event) => Some(event),
            _ => None,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Crossing {
    Rise,
    Set,
}

impl Crossing {
    fn label(self) -> &'static str {
        match self {
            Crossing::Rise => "rise",
            Crossing::Set => "set",
        }
    }

    fn pick(self, transit: &Transit) -> (f64, f64) {
        match self {
            Crossing::Rise => (transit.lst_rise, transit.rise_az),
            Crossing::Set => (transit.lst_set, transit.set_az),
        }
    }
}

fn next_crossing(
    crossing: Crossing,
    from: DateTime<Utc>,
    observer: &GeographicCoordinate,
    target: &EquatorialCoordinate,
    horizon: f64,
    options: &SearchOptions,
) -> Result<RiseSetEvent, SearchError> {
    if is_circumpolar(observer, target, horizon) {
        return Ok(RiseSetEvent::Circumpolar);
    }
    if !is_visible(observer, target, horizon) {
        return Ok(RiseSetEvent::NeverVisible);
    }

    let Some(times) = transit_above(observer, target, horizon) else {
        // Only reachable on the rounding edge of the predicates above.
        debug!(kind = crossing.label(), horizon, "no horizon crossing");
        return Ok(if cos_semi_arc(observer, target, horizon) < 0.0 {
            RiseSetEvent::Circumpolar
        } else {
            RiseSetEvent::NeverVisible
        });
    };

    let (lst, az) = crossing.pick(&times);
    let gst = local_sidereal_to_greenwich(lst, observer.longitude);
    let event = |datetime: DateTime<Utc>| -> Result<RiseSetEvent, SearchError> {
        Ok(RiseSetEvent::Event(TransitInstant {
            datetime,
            lst,
            gst,
            az,
        }))
    };

    let first_day = start_of_day(&from);
    for step in 0..options.max_iterations {
        let day = first_day + Duration::days(i64::from(step));
        let next_day = day + Duration::days(1);

        let earliest = greenwich_sidereal_to_universal(gst, &day);
        if earliest >= from {
            return event(earliest);
        }
        let repeat = earliest + sidereal_day();
        if repeat < next_day && repeat >= from {
            return event(repeat);
        }
        debug!(kind = crossing.label(), %earliest, %from, step, "event already passed");
    }

    Err(SearchError::Exhausted {
        iterations: options.max_iterations,
    })
}

/// Next rise of `target` above `horizon` at or after `datetime`.
pub fn next_rise<Tz: TimeZone>(
    datetime: &DateTime<Tz>,
    observer: &GeographicCoordinate,
    target: &EquatorialCoordinate,
    horizon: f64,
) -> Result<RiseSetEvent, SearchError> {
    next_rise_with(datetime, observer, target, horizon, &SearchOptions::default())
}

/// [`next_rise`] with an explicit search bound.
pub fn next_rise_with<Tz: TimeZone>(
    datetime: &DateTime<Tz>,
    observer: &GeographicCoordinate,
    target: &EquatorialCoordinate,
    horizon: f64,
    options: &SearchOptions,
) -> Result<RiseSetEvent, SearchError> {
    next_crossing(
        Crossing::Rise,
        to_utc(datetime),
        observer,
        target,
        horizon,
        options,
    )
}

/// Next set of `target` below `horizon` at or after `datetime`.
pub fn next_set<Tz: TimeZone>(
    datetime: &DateTime<Tz>,
    observer: &GeographicCoordinate,
    target: &EquatorialCoordinate,
    horizon: f64,
) -> Result<RiseSetEvent, SearchError> {
    next_set_with(datetime, observer, target, horizon, &SearchOptions::default())
}

/// [`next_set`] with an explicit search bound.
pub fn next_set_with<Tz: TimeZone>(
    datetime: &DateTime<Tz>,
    observer: &GeographicCoordinate,
    target: &EquatorialCoordinate,
    horizon: f64,
    options: &SearchOptions,
) -> Result<RiseSetEvent, SearchError> {
    next_crossing(
        Crossing::Set,
        to_utc(datetime),
        observer,
        target,
        horizon,
        options,
    )
}

/// The next rise of `target` paired with the first set after it.
///
/// Starts at the next *rise*: a target already up at `datetime` gets the
/// window of its following passage.  `None` when the target never crosses
/// the horizon; [`is_circumpolar`] tells always-up from never-up.
pub fn next_visibility_window<Tz: TimeZone>(
    datetime: &DateTime<Tz>,
    observer: &GeographicCoordinate,
    target: &EquatorialCoordinate,
    horizon: f64,
) -> Result<Option<UtcPeriod>, SearchError> {
    let rise = match next_rise(datetime, observer, target, horizon)? {
        RiseSetEvent::Event(rise) => rise,
        _ => return Ok(None),
    };
    let set = match next_set(&rise.datetime, observer, target, horizon)? {
        RiseSetEvent::Event(set) => set,
        _ => return Ok(None),
    };
    Ok(Some(UtcPeriod::new(rise.datetime, set.datetime)))
}
