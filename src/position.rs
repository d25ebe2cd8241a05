// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (C) 2026 Vallés Puig, Ramon

//! Sub-solar/sub-lunar points and observer-relative positions.
//!
//! Every query derives the body's right ascension and declination from the
//! instant, then ties them to the rotating Earth through GMST:
//!
//! - the sub-body point sits at latitude `δ` and longitude `α − GMST`;
//! - an observer sees the body at local hour angle `GMST + λ − α`.

use log::trace;

use crate::coords::{Body, EquatorialPosition, GeographicPoint, HorizonPosition};
use crate::ecliptic::mean_obliquity;
use crate::error::{Error, Result};
use crate::horizon::{equatorial_to_horizontal, Refraction};
use crate::instant::Instant;
use crate::julian_date_ext::julian_date;
use crate::sidereal::gmst_from_julian_date;
use crate::{moon, sun, JulianDate};

/// Allowance above the mean obliquity for the Sun's declination, degrees.
///
/// The Sun stays on the ecliptic, so its declination never exceeds the
/// obliquity of date; the margin only absorbs rounding.
pub const SUN_DECLINATION_MARGIN: f64 = 0.01;

/// Allowance above the mean obliquity for the Moon's declination, degrees.
///
/// Orbital inclination peaks near 5.30°; the 2024–2025 major standstill
/// reached about 28.73° against an obliquity of 23.44°.
pub const MOON_DECLINATION_MARGIN: f64 = 5.37;

impl Body {
    /// Accepted bound on `|declination|` for this body at `jd`.
    ///
    /// Follows the slow drift of the obliquity, about 23.45° in 1900 and
    /// 23.44° today for the Sun.
    pub fn max_declination(self, jd: JulianDate) -> f64 {
        let obliquity = mean_obliquity(jd.julian_centuries().value());
        match self {
            Body::Sun => obliquity + SUN_DECLINATION_MARGIN,
            Body::Moon => obliquity + MOON_DECLINATION_MARGIN,
        }
    }
}

/// Geocentric right ascension and declination of `body` at `instant`.
///
/// # Errors
///
/// [`Error::DomainViolation`] if the ephemeris produces a declination beyond
/// [`Body::max_declination`]; such a value is never clamped.
pub fn equatorial_position(body: Body, instant: Instant) -> Result<EquatorialPosition> {
    let jd = julian_date(instant);
    let position = match body {
        Body::Sun => sun::solar_equatorial(jd),
        Body::Moon => moon::lunar_equatorial(jd),
    };
    trace!(
        "{body} at {jd}: α = {:.5}°, δ = {:.5}°",
        position.right_ascension,
        position.declination
    );
    check_declination(body, position.declination, body.max_declination(jd))?;
    Ok(position)
}

fn check_declination(body: Body, declination: f64, limit: f64) -> Result<()> {
    if declination.is_finite() && declination.abs() <= limit {
        Ok(())
    } else {
        Err(Error::domain_violation(format!(
            "{body} declination {declination}° beyond ±{limit}°"
        )))
    }
}

/// Where on Earth `body` is directly overhead at `instant`.
pub fn sub_body_point(body: Body, instant: Instant) -> Result<GeographicPoint> {
    let jd = julian_date(instant);
    let position = equatorial_position(body, instant)?;
    let gmst = gmst_from_julian_date(jd);
    GeographicPoint::new(position.declination, position.right_ascension - gmst)
}

/// The sub-solar point: where the Sun is at the zenith.
///
/// # Examples
///
/// ```
/// use chrono::{TimeZone, Utc};
///
/// let t = Utc.with_ymd_and_hms(2024, 3, 20, 12, 0, 0).unwrap();
/// let p = daybreak::subsolar_point(t).unwrap();
/// assert!(p.latitude().abs() < 1.0);
/// ```
#[inline]
pub fn subsolar_point(instant: Instant) -> Result<GeographicPoint> {
    sub_body_point(Body::Sun, instant)
}

/// The sub-lunar point: where the Moon is at the zenith.
#[inline]
pub fn sublunar_point(instant: Instant) -> Result<GeographicPoint> {
    sub_body_point(Body::Moon, instant)
}

/// Altitude and azimuth of `body` for `observer`, without refraction.
#[inline]
pub fn horizon_position(
    body: Body,
    instant: Instant,
    observer: GeographicPoint,
) -> Result<HorizonPosition> {
    horizon_position_with(body, instant, observer, Refraction::None)
}

/// Altitude and azimuth of `body` for `observer` with the chosen refraction.
pub fn horizon_position_with(
    body: Body,
    instant: Instant,
    observer: GeographicPoint,
    refraction: Refraction,
) -> Result<HorizonPosition> {
    let jd = julian_date(instant);
    let position = equatorial_position(body, instant)?;
    let gmst = gmst_from_julian_date(jd);
    Ok(equatorial_to_horizontal(position, gmst, observer, refraction))
}
