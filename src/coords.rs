// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (C) 2026 Vallés Puig, Ramon

//! Geographic, equatorial and horizon coordinates.
//!
//! All angles are `f64` degrees.

use std::fmt;

#[cfg(feature = "serde")]
use serde::{Deserialize, Deserializer, Serialize};

use crate::angle::normalize_longitude;
use crate::error::{Error, Result};

/// A point on the Earth's surface.
///
/// Latitude lies in `[-90, 90]` and longitude in `(-180, 180]`; the fields
/// are private so no value outside those ranges can exist.
#[derive(Debug, Copy, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize))]
pub struct GeographicPoint {
    latitude: f64,
    longitude: f64,
}

/// An observer on the surface, at sea level.
pub type ObserverLocation = GeographicPoint;

impl GeographicPoint {
    /// Validate a latitude and normalise a longitude into `(-180, 180]`.
    ///
    /// # Errors
    ///
    /// [`Error::InputOutOfRange`] if the latitude is outside `[-90, 90]` or
    /// either component is not finite.
    ///
    /// # Examples
    ///
    /// ```
    /// use daybreak::GeographicPoint;
    ///
    /// let p = GeographicPoint::new(51.51, 359.87).unwrap();
    /// assert!((p.longitude() + 0.13).abs() < 1e-9);
    /// assert!(GeographicPoint::new(91.0, 0.0).is_err());
    /// ```
    pub fn new(latitude: f64, longitude: f64) -> Result<Self> {
        if !latitude.is_finite() || !(-90.0..=90.0).contains(&latitude) {
            return Err(Error::input_out_of_range("latitude", latitude, "[-90, 90]"));
        }
        if !longitude.is_finite() {
            return Err(Error::input_out_of_range(
                "longitude",
                longitude,
                "a finite number of degrees",
            ));
        }
        Ok(Self {
            latitude,
            longitude: normalize_longitude(longitude),
        })
    }

    #[inline]
    pub const fn latitude(&self) -> f64 {
        self.latitude
    }

    #[inline]
    pub const fn longitude(&self) -> f64 {
        self.longitude
    }
}

impl fmt::Display for GeographicPoint {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let ns = if self.latitude < 0.0 { 'S' } else { 'N' };
        let ew = if self.longitude < 0.0 { 'W' } else { 'E' };
        write!(
            f,
            "{:.4}°{} {:.4}°{}",
            self.latitude.abs(),
            ns,
            self.longitude.abs(),
            ew
        )
    }
}

#[cfg(feature = "serde")]
impl<'de> Deserialize<'de> for GeographicPoint {
    fn deserialize<D>(deserializer: D) -> std::result::Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        #[derive(Deserialize)]
        struct Raw {
            latitude: f64,
            longitude: f64,
        }

        let raw = Raw::deserialize(deserializer)?;
        GeographicPoint::new(raw.latitude, raw.longitude).map_err(serde::de::Error::custom)
    }
}

/// A body's geocentric equatorial coordinates of date.
#[derive(Debug, Copy, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct EquatorialPosition {
    /// Right ascension, degrees in `[0, 360)`.
    pub right_ascension: f64,
    /// Declination, degrees.
    pub declination: f64,
}

/// A body's position in an observer's local sky.
#[derive(Debug, Copy, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct HorizonPosition {
    /// Degrees above the horizon; negative below it.
    pub altitude: f64,
    /// Degrees clockwise from true north, in `[0, 360)`.
    pub azimuth: f64,
}

/// The bodies the engine can place.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum Body {
    Sun,
    Moon,
}

impl fmt::Display for Body {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Body::Sun => f.write_str("Sun"),
            Body::Moon => f.write_str("Moon"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn longitude_is_normalised_on_construction() {
        let p = GeographicPoint::new(10.0, 190.0).unwrap();
        assert_eq!(p.longitude(), -170.0);
        let p = GeographicPoint::new(10.0, -180.0).unwrap();
        assert_eq!(p.longitude(), 180.0);
    }

    #[test]
    fn poles_are_valid() {
        assert!(GeographicPoint::new(90.0, 0.0).is_ok());
        assert!(GeographicPoint::new(-90.0, 0.0).is_ok());
    }

    #[test]
    fn rejects_bad_input() {
        for (lat, lon) in [
            (90.5, 0.0),
            (-91.0, 0.0),
            (f64::NAN, 0.0),
            (0.0, f64::NAN),
            (0.0, f64::INFINITY),
        ] {
            let err = GeographicPoint::new(lat, lon).unwrap_err();
            assert!(matches!(err, Error::InputOutOfRange { .. }), "({lat}, {lon})");
        }
    }

    #[test]
    fn display_uses_hemispheres() {
        let p = GeographicPoint::new(-33.87, 151.21).unwrap();
        assert_eq!(p.to_string(), "33.8700°S 151.2100°E");
        let p = GeographicPoint::new(40.71, -74.01).unwrap();
        assert_eq!(p.to_string(), "40.7100°N 74.0100°W");
    }
}
