// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (C) 2026 Vallés Puig, Ramon

//! Equatorial → horizontal transform and the refraction toggle.

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use crate::angle::{normalize_degrees, to_degrees, to_radians};
use crate::coords::{EquatorialPosition, GeographicPoint, HorizonPosition};

/// Atmospheric refraction applied to computed altitudes.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Default)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum Refraction {
    /// Geometric altitude, no atmosphere.
    #[default]
    None,
    /// Sæmundsson mean refraction for 10 °C and 1010 hPa.
    Standard,
}

impl Refraction {
    /// Refraction in degrees to add to a geometric `altitude`.
    ///
    /// Below −1° the −1° value is tapered linearly to zero at the nadir so
    /// the correction stays continuous.
    pub fn correction(self, altitude: f64) -> f64 {
        match self {
            Refraction::None => 0.0,
            Refraction::Standard => {
                if !(-90.0..=90.0).contains(&altitude) {
                    return 0.0;
                }
                let h = altitude.max(-1.0);
                let arcmin = 1.02 / to_radians(h + 10.3 / (h + 5.11)).tan();
                let mut degrees = (arcmin / 60.0).max(0.0);
                if altitude < -1.0 {
                    degrees *= (altitude + 90.0) / 89.0;
                }
                degrees
            }
        }
    }
}

/// Place a body with the given equatorial coordinates in the observer's sky.
///
/// `gmst` is Greenwich Mean Sidereal Time in degrees.  The local hour angle
/// is `GMST + λ − α`; the azimuth is measured clockwise from north.
pub(crate) fn equatorial_to_horizontal(
    position: EquatorialPosition,
    gmst: f64,
    observer: GeographicPoint,
    refraction: Refraction,
) -> HorizonPosition {
    let hour_angle = to_radians(normalize_degrees(
        gmst + observer.longitude() - position.right_ascension,
    ));
    let (sin_h, cos_h) = hour_angle.sin_cos();
    let (sin_d, cos_d) = to_radians(position.declination).sin_cos();
    let (sin_p, cos_p) = to_radians(observer.latitude()).sin_cos();

    // Local east/north/up components of the unit vector to the body.
    let east = -cos_d * sin_h;
    let north = sin_d * cos_p - cos_d * sin_p * cos_h;
    let up = sin_p * sin_d + cos_p * cos_d * cos_h;

    let altitude = to_degrees(up.atan2(east.hypot(north)));
    let azimuth = normalize_degrees(to_degrees(east.atan2(north)));

    HorizonPosition {
        altitude: altitude + refraction.correction(altitude),
        azimuth,
    }
}
