// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (C) 2026 Vallés Puig, Ramon

//! Degree/radian conversion and angle normalisation.
//!
//! Angles cross the public API as plain `f64` degrees; radians only appear
//! inside the trigonometry.

/// Degrees → radians.
#[inline]
pub fn to_radians(degrees: f64) -> f64 {
    degrees.to_radians()
}

/// Radians → degrees.
#[inline]
pub fn to_degrees(radians: f64) -> f64 {
    radians.to_degrees()
}

/// Reduce an angle into `[0, 360)`.
#[inline]
pub fn normalize_degrees(degrees: f64) -> f64 {
    let reduced = degrees.rem_euclid(360.0);
    // rem_euclid rounds tiny negative inputs up to exactly 360.0
    if reduced >= 360.0 {
        0.0
    } else {
        reduced
    }
}

/// Reduce a longitude into `(-180, 180]`.
#[inline]
pub fn normalize_longitude(degrees: f64) -> f64 {
    let reduced = normalize_degrees(degrees);
    if reduced > 180.0 {
        reduced - 360.0
    } else {
        reduced
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn radians_roundtrip() {
        assert!((to_radians(180.0) - std::f64::consts::PI).abs() < 1e-15);
        assert!((to_degrees(std::f64::consts::FRAC_PI_2) - 90.0).abs() < 1e-12);
        assert!((to_degrees(to_radians(23.44)) - 23.44).abs() < 1e-12);
    }

    #[test]
    fn normalize_degrees_range() {
        assert_eq!(normalize_degrees(0.0), 0.0);
        assert_eq!(normalize_degrees(360.0), 0.0);
        assert_eq!(normalize_degrees(-90.0), 270.0);
        assert_eq!(normalize_degrees(725.0), 5.0);
        assert_eq!(normalize_degrees(-1e-18), 0.0);
    }

    #[test]
    fn normalize_longitude_half_open() {
        assert_eq!(normalize_longitude(180.0), 180.0);
        assert_eq!(normalize_longitude(-180.0), 180.0);
        assert_eq!(normalize_longitude(190.0), -170.0);
        assert_eq!(normalize_longitude(-190.0), 170.0);
        assert_eq!(normalize_longitude(540.0), 180.0);
        assert_eq!(normalize_longitude(-45.5), -45.5);
    }
}
