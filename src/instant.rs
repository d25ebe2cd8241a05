// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (C) 2026 Vallés Puig, Ramon

//! Instants and scale-tagged day counts.
//!
//! Callers hand the engine an [`Instant`], a plain `chrono::DateTime<Utc>`.
//! Internally every formula works on a day count: [`Time<S>`] stores a
//! single [`Days`] quantity whose *meaning* is fixed by the compile-time
//! marker `S: TimeScale` (Julian Date, days since the Unix epoch, …).
//!
//! All scales in this crate live on the **UT axis**: no ΔT correction is
//! applied.  At the sub-degree precision targeted by the ephemerides the
//! ≈70 s TT−UT offset is irrelevant, and keeping a single axis makes the
//! Julian Date exactly `unix_millis / 86 400 000 + 2 440 587.5`.

use chrono::{DateTime, Utc};
use qtty::Days;
use std::marker::PhantomData;
use std::ops::{Add, Sub};

#[cfg(feature = "serde")]
use serde::{Deserialize, Deserializer, Serialize, Serializer};

use crate::error::{Error, Result};

/// An absolute point in time, timezone independent.
pub type Instant = DateTime<Utc>;

/// Milliseconds in one civil day.
pub(crate) const MILLIS_PER_DAY: f64 = 86_400_000.0;

/// Build an [`Instant`] from UTC epoch milliseconds.
///
/// Fails with [`Error::InputOutOfRange`] when chrono cannot represent the
/// value.
pub fn instant_from_unix_millis(millis: i64) -> Result<Instant> {
    DateTime::<Utc>::from_timestamp_millis(millis).ok_or_else(|| {
        Error::input_out_of_range(
            "unix milliseconds",
            millis as f64,
            "a chrono-representable UTC instant",
        )
    })
}

// ═══════════════════════════════════════════════════════════════════════════
// TimeScale trait
// ═══════════════════════════════════════════════════════════════════════════

/// Marker trait for time scales.
///
/// A scale defines a display **label** and a pair of conversions between
/// its native day count and an absolute Julian Date.  Every scale here is a
/// pure epoch counter, so the conversions are constant offsets.
pub trait TimeScale: Copy + Clone + std::fmt::Debug + PartialEq + PartialOrd + 'static {
    /// Display label used by [`Time`] formatting.
    const LABEL: &'static str;

    /// Convert a quantity in this scale's native unit to an absolute JD.
    fn to_jd(value: Days) -> Days;

    /// Convert an absolute JD back to this scale's native quantity.
    fn from_jd(jd: Days) -> Days;
}

// ═══════════════════════════════════════════════════════════════════════════
// Time<S>
// ═══════════════════════════════════════════════════════════════════════════

/// A point on time scale `S`.
///
/// `PhantomData` is zero-sized, so `Time<S>` is layout-identical to a
/// single `f64`.
#[derive(Debug, Copy, Clone, PartialEq, PartialOrd)]
pub struct Time<S: TimeScale> {
    quantity: Days,
    _scale: PhantomData<S>,
}

impl<S: TimeScale> Time<S> {
    /// Create from a raw scalar (days since the scale's epoch).
    #[inline]
    pub const fn new(value: f64) -> Self {
        Self {
            quantity: Days::new(value),
            _scale: PhantomData,
        }
    }

    /// Create from a [`Days`] quantity.
    #[inline]
    pub const fn from_days(days: Days) -> Self {
        Self {
            quantity: days,
            _scale: PhantomData,
        }
    }

    /// The underlying quantity in days.
    #[inline]
    pub const fn quantity(&self) -> Days {
        self.quantity
    }

    /// The underlying scalar value in days.
    #[inline]
    pub const fn value(&self) -> f64 {
        self.quantity.value()
    }

    /// Absolute Julian Day corresponding to this instant.
    #[inline]
    pub fn julian_day(&self) -> Days {
        S::to_jd(self.quantity)
    }

    /// Build an instant from an absolute Julian Day.
    #[inline]
    pub fn from_julian_day(jd: Days) -> Self {
        Self::from_days(S::from_jd(jd))
    }

    /// Convert this instant to another time scale, routing through JD.
    #[inline]
    pub fn to<T: TimeScale>(&self) -> Time<T> {
        Time::<T>::from_julian_day(self.julian_day())
    }

    /// Convert to a UTC [`Instant`], rounded to the millisecond.
    ///
    /// Returns `None` if the value falls outside chrono's representable range.
    pub fn to_utc(&self) -> Option<Instant> {
        use crate::scales::UnixTime;
        let unix_days = self.to::<UnixTime>().value();
        let millis = (unix_days * MILLIS_PER_DAY).round();
        if !millis.is_finite() || millis.abs() >= i64::MAX as f64 {
            return None;
        }
        DateTime::<Utc>::from_timestamp_millis(millis as i64)
    }

    /// Build an instant from a UTC [`Instant`] at millisecond resolution.
    pub fn from_utc(datetime: Instant) -> Self {
        use crate::scales::UnixTime;
        let unix_days = Days::new(datetime.timestamp_millis() as f64 / MILLIS_PER_DAY);
        Time::<UnixTime>::from_days(unix_days).to::<S>()
    }
}

impl<S: TimeScale> std::fmt::Display for Time<S> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} {}", S::LABEL, self.quantity)
    }
}

#[cfg(feature = "serde")]
impl<S: TimeScale> Serialize for Time<S> {
    fn serialize<Ser>(&self, serializer: Ser) -> std::result::Result<Ser::Ok, Ser::Error>
    where
        Ser: Serializer,
    {
        serializer.serialize_f64(self.value())
    }
}

#[cfg(feature = "serde")]
impl<'de, S: TimeScale> Deserialize<'de> for Time<S> {
    fn deserialize<D>(deserializer: D) -> std::result::Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let v = f64::deserialize(deserializer)?;
        Ok(Self::new(v))
    }
}

impl<S: TimeScale> Add<Days> for Time<S> {
    type Output = Self;
    #[inline]
    fn add(self, rhs: Days) -> Self::Output {
        Self::from_days(self.quantity + rhs)
    }
}

impl<S: TimeScale> Sub<Days> for Time<S> {
    type Output = Self;
    #[inline]
    fn sub(self, rhs: Days) -> Self::Output {
        Self::from_days(self.quantity - rhs)
    }
}

impl<S: TimeScale> Sub for Time<S> {
    type Output = Days;
    #[inline]
    fn sub(self, rhs: Self) -> Self::Output {
        self.quantity - rhs.quantity
    }
}

// ═══════════════════════════════════════════════════════════════════════════
// TimeInstant trait
// ═══════════════════════════════════════════════════════════════════════════

/// Points in time usable as [`Interval`](crate::Interval) endpoints.
pub trait TimeInstant: Copy + Clone + PartialEq + PartialOrd + Sized {
    /// The duration type produced by [`difference`](Self::difference).
    type Duration;

    /// `self − other`.
    fn difference(&self, other: &Self) -> Self::Duration;
}

impl<S: TimeScale> TimeInstant for Time<S> {
    type Duration = Days;

    #[inline]
    fn difference(&self, other: &Self) -> Self::Duration {
        *self - *other
    }
}

impl TimeInstant for DateTime<Utc> {
    type Duration = chrono::Duration;

    fn difference(&self, other: &Self) -> Self::Duration {
        *self - *other
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::scales::{UnixTime, JD};
    use chrono::TimeZone;

    #[test]
    fn unix_epoch_is_jd_2440587_5() {
        let epoch = instant_from_unix_millis(0).unwrap();
        let jd = Time::<JD>::from_utc(epoch);
        assert_eq!(jd.quantity(), Days::new(2_440_587.5));
    }

    #[test]
    fn from_utc_has_no_delta_t() {
        // 2000-01-01T12:00:00Z is exactly J2000 on the UT axis.
        let noon = Utc.with_ymd_and_hms(2000, 1, 1, 12, 0, 0).unwrap();
        let jd = Time::<JD>::from_utc(noon);
        assert!((jd.value() - 2_451_545.0).abs() < 1e-9);
    }

    #[test]
    fn utc_roundtrip_keeps_milliseconds() {
        let t = instant_from_unix_millis(1_710_936_000_123).unwrap();
        let back = Time::<JD>::from_utc(t).to_utc().expect("to_utc");
        assert_eq!(back.timestamp_millis(), t.timestamp_millis());
    }

    #[test]
    fn out_of_range_millis_are_rejected() {
        let err = instant_from_unix_millis(i64::MAX).unwrap_err();
        assert!(matches!(err, Error::InputOutOfRange { .. }));
    }

    #[test]
    fn to_utc_rejects_non_finite_days() {
        assert!(Time::<JD>::new(f64::NAN).to_utc().is_none());
        assert!(Time::<JD>::new(f64::INFINITY).to_utc().is_none());
    }

    #[test]
    fn arithmetic_on_days() {
        let jd = Time::<JD>::new(2_451_545.0);
        let later = jd + Days::new(1.5);
        assert_eq!(later.quantity(), Days::new(2_451_546.5));
        assert_eq!((later - Days::new(0.5)).quantity(), Days::new(2_451_546.0));
        assert_eq!(later - jd, Days::new(1.5));
    }

    #[test]
    fn scale_conversion_goes_through_jd() {
        let unix = Time::<UnixTime>::new(1.0);
        let jd: Time<JD> = unix.to::<JD>();
        assert_eq!(jd.quantity(), Days::new(2_440_588.5));
    }

    #[test]
    fn display_uses_scale_label() {
        let jd = Time::<JD>::new(2_451_545.0);
        assert!(format!("{jd}").contains("JD"));
    }

    #[test]
    fn timeinstant_difference_for_both_kinds() {
        let a = Time::<JD>::new(10.0);
        let b = Time::<JD>::new(12.5);
        assert_eq!(b.difference(&a), Days::new(2.5));

        let base = Utc.with_ymd_and_hms(2024, 1, 1, 0, 0, 0).unwrap();
        let later = Utc.with_ymd_and_hms(2024, 1, 2, 6, 0, 0).unwrap();
        assert_eq!(later.difference(&base).num_hours(), 30);
    }
}
