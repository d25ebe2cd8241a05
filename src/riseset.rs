// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (C) 2026 Vallés Puig, Ramon

//! Sunrise and sunset from the Sun's declination.
//!
//! The semi-diurnal arc `H` solves `cos H = −tan φ · tan δ`.  When the
//! right-hand side leaves `[−1, 1]` the Sun never crosses the horizon that
//! day: below −1 it stays up (polar day), above 1 it stays down (polar
//! night).  Otherwise, in UTC hours,
//!
//! ```text
//! sunrise = 12 − H/15 − λ/15
//! sunset  = 12 + H/15 − λ/15
//! ```
//!
//! counted from midnight of the instant's UTC calendar date.  Values outside
//! `[0, 24)` land on the neighbouring date.

use chrono::{Duration, NaiveTime, TimeZone, Utc};

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use crate::angle::{to_degrees, to_radians};
use crate::coords::{Body, GeographicPoint};
use crate::error::{Error, Result};
use crate::instant::Instant;
use crate::interval::Interval;
use crate::position::equatorial_position;

/// Outcome of a sunrise/sunset query. Exactly one variant holds.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum RiseSet {
    /// The Sun rises and sets.
    Daylight { sunrise: Instant, sunset: Instant },
    /// The Sun stays above the horizon all day.
    PolarDay,
    /// The Sun stays below the horizon all day.
    PolarNight,
}

impl RiseSet {
    /// The span from sunrise to sunset, if the Sun rises at all.
    pub fn daylight(&self) -> Option<Interval<Instant>> {
        match *self {
            RiseSet::Daylight { sunrise, sunset } => Some(Interval::new(sunrise, sunset)),
            RiseSet::PolarDay | RiseSet::PolarNight => None,
        }
    }

    /// Length of daylight: 24 h under polar day, zero under polar night.
    pub fn day_length(&self) -> Duration {
        match self {
            RiseSet::Daylight { .. } => self
                .daylight()
                .map(|d| d.duration())
                .unwrap_or_else(Duration::zero),
            RiseSet::PolarDay => Duration::hours(24),
            RiseSet::PolarNight => Duration::zero(),
        }
    }
}

/// Sunrise and sunset for `observer` on the UTC date of `instant`.
///
/// # Errors
///
/// - [`Error::DomainViolation`] if the solar declination is out of bounds
///   or the arc equation yields NaN.
/// - [`Error::InputOutOfRange`] if an event falls outside chrono's range.
///
/// # Examples
///
/// ```
/// use chrono::{TimeZone, Timelike, Utc};
/// use daybreak::{rise_set, GeographicPoint, RiseSet};
///
/// let t = Utc.with_ymd_and_hms(2024, 3, 20, 12, 0, 0).unwrap();
/// let observer = GeographicPoint::new(0.0, 0.0).unwrap();
/// match rise_set(t, observer).unwrap() {
///     RiseSet::Daylight { sunrise, sunset } => {
///         assert_eq!(sunrise.hour(), 6);
///         assert_eq!(sunset.hour(), 18);
///     }
///     other => panic!("unexpected {other:?}"),
/// }
/// ```
pub fn rise_set(instant: Instant, observer: GeographicPoint) -> Result<RiseSet> {
    let declination = equatorial_position(Body::Sun, instant)?.declination;
    let cos_h = -to_radians(observer.latitude()).tan() * to_radians(declination).tan();

    if cos_h.is_nan() {
        return Err(Error::domain_violation(format!(
            "semi-diurnal arc undefined for latitude {} and declination {declination}",
            observer.latitude()
        )));
    }
    if cos_h < -1.0 {
        return Ok(RiseSet::PolarDay);
    }
    if cos_h > 1.0 {
        return Ok(RiseSet::PolarNight);
    }

    let arc_hours = to_degrees(cos_h.acos()) / 15.0;
    let noon_offset = observer.longitude() / 15.0;

    let midnight = Utc.from_utc_datetime(&instant.date_naive().and_time(NaiveTime::MIN));
    let sunrise = at_utc_hour(midnight, 12.0 - arc_hours - noon_offset)?;
    let sunset = at_utc_hour(midnight, 12.0 + arc_hours - noon_offset)?;

    Ok(RiseSet::Daylight { sunrise, sunset })
}

/// `midnight` plus a fractional (possibly negative or ≥ 24) hour count,
/// kept to the millisecond.
fn at_utc_hour(midnight: Instant, hours: f64) -> Result<Instant> {
    let millis = (hours * 3_600_000.0).round() as i64;
    Duration::try_milliseconds(millis)
        .and_then(|offset| midnight.checked_add_signed(offset))
        .ok_or_else(|| {
            Error::input_out_of_range("event hour", hours, "a chrono-representable instant")
        })
}
