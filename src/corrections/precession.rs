// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (C) 2026 Vallés Puig, Ramon

//! Precession of the equinoxes from J2000.0 to the date.
//!
//! Rigorous rotation through the three equatorial precession angles
//! `ζ`, `z`, `θ` (Lieske 1977, third-order in `T`), as given by Meeus
//! (1998) eq. 21.2–21.4.

use chrono::{DateTime, TimeZone};

use crate::coords::{normalize_delta_degrees, EquatorialCoordinate, EquatorialDelta};
use crate::epoch::centuries_since_j2000;

/// Equatorial precession angles, degrees.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PrecessionAngles {
    pub zeta: f64,
    pub z: f64,
    pub theta: f64,
}

impl PrecessionAngles {
    /// Angles for `t` Julian centuries after J2000.0.
    pub fn at_centuries(t: f64) -> Self {
        let t2 = t * t;
        let t3 = t2 * t;
        Self {
            zeta: (2306.2181 * t + 0.30188 * t2 + 0.017998 * t3) / 3600.0,
            z: (2306.2181 * t + 1.09468 * t2 + 0.018203 * t3) / 3600.0,
            theta: (2004.3109 * t - 0.42665 * t2 - 0.041833 * t3) / 3600.0,
        }
    }
}

/// Apply the precession rotation to a J2000.0 position.
pub(crate) fn precess(angles: &PrecessionAngles, target: &EquatorialCoordinate) -> (f64, f64) {
    let (sin_dec, cos_dec) = target.dec.to_radians().sin_cos();
    let (sin_theta, cos_theta) = angles.theta.to_radians().sin_cos();
    let (sin_ra, cos_ra) = (target.ra + angles.zeta).to_radians().sin_cos();

    let a = cos_dec * sin_ra;
    let b = cos_theta * cos_dec * cos_ra - sin_theta * sin_dec;
    let c = sin_theta * cos_dec * cos_ra + cos_theta * sin_dec;

    let ra = a.atan2(b).to_degrees() + angles.z;
    // asin loses precision close to the poles.
    let dec = if c.abs() > 0.99 {
        a.hypot(b).acos().copysign(c).to_degrees()
    } else {
        c.asin().to_degrees()
    };
    (ra, dec)
}

/// Precession correction for a J2000.0 catalog position at `datetime`.
///
/// The right-ascension component is wrapped into `(-180°, 180°]`.  Exactly
/// at a celestial pole right ascension is undefined and the `ra` delta is
/// meaningless, though finite.
pub fn precession_correction<Tz: TimeZone>(
    datetime: &DateTime<Tz>,
    target: &EquatorialCoordinate,
) -> EquatorialDelta {
    let angles = PrecessionAngles::at_centuries(centuries_since_j2000(datetime).value());
    let (ra, dec) = precess(&angles, target);
    EquatorialDelta::new(normalize_delta_degrees(ra - target.ra), dec - target.dec)
}
