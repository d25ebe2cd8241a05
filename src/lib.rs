// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (C) 2026 Vallés Puig, Ramon

//! Celestial positions and the day/night terminator for world-map overlays.
//!
//! Given an instant, and for some queries an observer, the crate answers:
//!
//! | Query | Result |
//! |-------|--------|
//! | [`subsolar_point`] / [`sublunar_point`] | where the Sun / Moon is overhead |
//! | [`horizon_position`] | a body's altitude and azimuth for an observer |
//! | [`rise_set`] | sunrise and sunset, or polar day / polar night |
//! | [`terminator_curve`] | the day/night boundary as map coordinates |
//! | [`snapshot`] | both sub-body points at once, for marker refreshes |
//!
//! Every query is a pure function of its arguments and reads no clock.
//! Callers may evaluate concurrently and re-query on any
//! [`Cadence`] they like.
//!
//! # Conventions
//!
//! - Angles are `f64` degrees.  Latitude is in `[-90, 90]`, longitude in
//!   `(-180, 180]` (east positive), azimuth clockwise from north in
//!   `[0, 360)`.
//! - Instants are `chrono::DateTime<Utc>`; [`julian_date`] maps them onto
//!   the Julian Date axis as `unix_millis / 86 400 000 + 2 440 587.5`.
//! - Positions come from low-precision ephemerides (≲ 0.05°), adequate for
//!   drawing, not for navigation.
//!
//! # Core types
//!
//! - [`GeographicPoint`]: a validated latitude/longitude pair.
//! - [`HorizonPosition`]: altitude and azimuth.
//! - [`RiseSet`]: `Daylight { sunrise, sunset }`, `PolarDay` or `PolarNight`.
//! - [`TerminatorCurve`]: the ordered boundary polyline.
//! - [`Time<S>`] / [`JulianDate`]: day counts tagged by a [`TimeScale`].
//! - [`Interval<T>`]: a span between two [`TimeInstant`]s.

mod angle;
mod coords;
mod ecliptic;
mod error;
mod horizon;
pub(crate) mod instant;
mod interval;
mod julian_date_ext;
mod moon;
mod position;
mod riseset;
mod sampling;
pub(crate) mod scales;
mod sidereal;
mod sun;
mod terminator;

// ── Re-exports ────────────────────────────────────────────────────────────

pub use angle::{normalize_degrees, normalize_longitude, to_degrees, to_radians};
pub use coords::{Body, EquatorialPosition, GeographicPoint, HorizonPosition, ObserverLocation};
pub use error::{Error, Result};
pub use horizon::Refraction;
pub use instant::{instant_from_unix_millis, Instant, Time, TimeInstant, TimeScale};
pub use interval::Interval;
pub use julian_date_ext::julian_date;
pub use position::{
    equatorial_position, horizon_position, horizon_position_with, sub_body_point,
    sublunar_point, subsolar_point, MOON_DECLINATION_MARGIN, SUN_DECLINATION_MARGIN,
};
pub use riseset::{rise_set, RiseSet};
pub use sampling::{snapshot, Cadence, CelestialSnapshot, Ticks};
pub use scales::{UnixTime, JD};
pub use sidereal::{gmst_degrees, gmst_from_julian_date};
pub use terminator::{
    terminator_curve, TerminatorCurve, DEFAULT_LATITUDE_STEP, MIN_LATITUDE_STEP,
};

/// Julian Date: a continuous count of days since the Julian Period.
///
/// Lives on the UT axis (no ΔT), see [`julian_date`].
pub type JulianDate = Time<JD>;
