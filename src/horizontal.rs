// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (C) 2026 Vallés Puig, Ramon

//! Equatorial ↔ horizontal transforms.
//!
//! Both directions are undefined for an observer standing on a geographic
//! pole (`cos φ = 0`, every direction is south or north).  They return
//! `None` there; callers that need the legacy `{alt: -1, az: -1}` value can
//! use `.unwrap_or(HorizontalCoordinate::POLE_SENTINEL)`.

use chrono::{DateTime, TimeZone};

use crate::coords::{
    normalize_degrees, EquatorialCoordinate, GeographicCoordinate, HorizontalCoordinate,
};
use crate::sidereal::{hour_angle, local_sidereal_time};

/// Below this `cos φ` the observer is treated as standing on the pole.
const POLE_EPSILON: f64 = 1e-12;

/// Altitude and azimuth of `target` seen by `observer` at `datetime`.
///
/// Azimuth runs eastward from north: a target west of the meridian
/// (`sin H > 0`) gets `360° − A`.
pub fn equatorial_to_horizontal<Tz: TimeZone>(
    datetime: &DateTime<Tz>,
    observer: &GeographicCoordinate,
    target: &EquatorialCoordinate,
) -> Option<HorizontalCoordinate> {
    let lat = observer.latitude.to_radians();
    let cos_lat = lat.cos();
    if cos_lat.abs() < POLE_EPSILON {
        return None;
    }

    let ha = hour_angle(datetime, observer.longitude, target.ra).to_radians();
    let dec = target.dec.to_radians();

    let sin_alt = (dec.sin() * lat.sin() + dec.cos() * cos_lat * ha.cos()).clamp(-1.0, 1.0);
    let alt = sin_alt.asin();

    let cos_alt = alt.cos();
    let az = if cos_alt < POLE_EPSILON {
        // Zenith or nadir: azimuth is arbitrary.
        0.0
    } else {
        let cos_az = ((dec.sin() - sin_alt * lat.sin()) / (cos_alt * cos_lat)).clamp(-1.0, 1.0);
        cos_az.acos().to_degrees()
    };
    let az = if ha.sin() > 0.0 { 360.0 - az } else { az };

    Some(HorizontalCoordinate::new(
        alt.to_degrees(),
        normalize_degrees(az),
    ))
}

/// Right ascension and declination of the direction `target` seen by
/// `observer` at `datetime`.
pub fn horizontal_to_equatorial<Tz: TimeZone>(
    datetime: &DateTime<Tz>,
    observer: &GeographicCoordinate,
    target: &HorizontalCoordinate,
) -> Option<EquatorialCoordinate> {
    let lat = observer.latitude.to_radians();
    let cos_lat = lat.cos();
    if cos_lat.abs() < POLE_EPSILON {
        return None;
    }

    let alt = target.alt.to_radians();
    let az = target.az.to_radians();

    let sin_dec = (alt.sin() * lat.sin() + alt.cos() * cos_lat * az.cos()).clamp(-1.0, 1.0);
    let dec = sin_dec.asin();

    let cos_dec = dec.cos();
    let ha = if cos_dec < POLE_EPSILON {
        0.0
    } else {
        let cos_ha = ((alt.sin() - lat.sin() * sin_dec) / (cos_lat * cos_dec)).clamp(-1.0, 1.0);
        cos_ha.acos().to_degrees()
    };
    let ha = if az.sin() > 0.0 { 360.0 - ha } else { ha };

    let lst = local_sidereal_time(datetime, observer.longitude);
    Some(EquatorialCoordinate::new(
        normalize_degrees(lst * 15.0 - ha),
        dec.to_degrees(),
    ))
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Utc;

    fn reference_night() -> DateTime<Utc> {
        Utc.with_ymd_and_hms(2021, 5, 14, 0, 0, 0).unwrap()
    }

    fn mauna_kea() -> GeographicCoordinate {
        GeographicCoordinate::new(19.820_611, -155.468_094)
    }

    fn betelgeuse() -> EquatorialCoordinate {
        EquatorialCoordinate::new(88.792_958_3, 7.407_063_9)
    }

    #[test]
    fn betelgeuse_from_mauna_kea() {
        let hz = equatorial_to_horizontal(&reference_night(), &mauna_kea(), &betelgeuse())
            .expect("observer is not on a pole");
        assert!((hz.alt - 72.785_394).abs() < 1e-5, "alt = {}", hz.alt);
        assert!((hz.az - 134.448_779).abs() < 1e-5, "az = {}", hz.az);
    }

    #[test]
    fn pole_observer_has_no_horizontal_frame() {
        let north_pole = GeographicCoordinate::new(90.0, 0.0);
        let hz = equatorial_to_horizontal(&reference_night(), &north_pole, &betelgeuse());
        assert_eq!(hz, None);
        assert_eq!(
            hz.unwrap_or(HorizontalCoordinate::POLE_SENTINEL),
            HorizontalCoordinate::new(-1.0, -1.0)
        );
        let south_pole = GeographicCoordinate::new(-90.0, 0.0);
        assert!(horizontal_to_equatorial(
            &reference_night(),
            &south_pole,
            &HorizontalCoordinate::new(45.0, 90.0)
        )
        .is_none());
    }

    #[test]
    fn horizontal_roundtrip() {
        let dt = reference_night();
        let hz = equatorial_to_horizontal(&dt, &mauna_kea(), &betelgeuse()).unwrap();
        let eq = horizontal_to_equatorial(&dt, &mauna_kea(), &hz).unwrap();
        assert!((eq.ra - betelgeuse().ra).abs() < 1e-6, "ra = {}", eq.ra);
        assert!((eq.dec - betelgeuse().dec).abs() < 1e-6, "dec = {}", eq.dec);
    }

    #[test]
    fn western_targets_get_western_azimuths() {
        let dt = reference_night();
        let observer = mauna_kea();
        // Three hours west of the meridian.
        let lst = local_sidereal_time(&dt, observer.longitude);
        let target = EquatorialCoordinate::new(normalize_degrees(lst * 15.0 - 45.0), 0.0);
        let hz = equatorial_to_horizontal(&dt, &observer, &target).unwrap();
        assert!(hz.az > 180.0 && hz.az < 360.0, "az = {}", hz.az);
    }

    #[test]
    fn target_at_zenith_is_finite() {
        let dt = reference_night();
        let observer = mauna_kea();
        let lst = local_sidereal_time(&dt, observer.longitude);
        let zenith = EquatorialCoordinate::new(lst * 15.0, observer.latitude);
        let hz = equatorial_to_horizontal(&dt, &observer, &zenith).unwrap();
        assert!((hz.alt - 90.0).abs() < 1e-5);
        assert!(hz.az.is_finite());
    }
}
