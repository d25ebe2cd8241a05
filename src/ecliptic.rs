// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (C) 2026 Vallés Puig, Ramon

//! Ecliptic → equatorial rotation shared by the solar and lunar ephemerides.

use crate::angle::{normalize_degrees, to_degrees, to_radians};
use crate::coords::EquatorialPosition;

/// Mean obliquity of the ecliptic in degrees (IAU 1980 polynomial, Meeus 22.2).
pub(crate) fn mean_obliquity(t: f64) -> f64 {
    23.439_291_111 - 0.013_004_167 * t - 1.6389e-7 * t * t + 5.0361e-7 * t * t * t
}

/// Rotate ecliptic longitude/latitude (degrees) into right ascension and
/// declination for the given obliquity.
pub(crate) fn ecliptic_to_equatorial(
    longitude: f64,
    latitude: f64,
    obliquity: f64,
) -> EquatorialPosition {
    let (sin_l, cos_l) = to_radians(longitude).sin_cos();
    let (sin_b, cos_b) = to_radians(latitude).sin_cos();
    let (sin_e, cos_e) = to_radians(obliquity).sin_cos();

    let declination = (sin_b * cos_e + cos_b * sin_e * sin_l).asin();
    let right_ascension = (sin_l * cos_e - sin_b / cos_b * sin_e).atan2(cos_l);

    EquatorialPosition {
        right_ascension: normalize_degrees(to_degrees(right_ascension)),
        declination: to_degrees(declination),
    }
}
