// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (C) 2026 Vallés Puig, Ramon

//! Julian Date (`Time<JD>`) specific extensions.

use qtty::*;

use crate::instant::{Instant, Time};
use crate::scales::JD;
use crate::JulianDate;

impl Time<JD> {
    /// J2000.0 epoch: 2000-01-01T12:00:00 (JD 2 451 545.0).
    pub const J2000: Self = Self::new(2_451_545.0);

    /// One Julian century expressed in days.
    pub const JULIAN_CENTURY: Days = Days::new(36_525.0);

    /// Days elapsed since J2000.0.
    ///
    /// Both operands are of the same magnitude, so the subtraction is exact
    /// (Sterbenz) and no precision is lost beyond the JD's own rounding.
    #[inline]
    pub fn days_since_j2000(&self) -> Days {
        *self - Self::J2000
    }

    /// Julian centuries since J2000.0 (used by sidereal time and the ephemerides).
    #[inline]
    pub fn julian_centuries(&self) -> Centuries {
        Centuries::new(
            (self.days_since_j2000() / Self::JULIAN_CENTURY)
                .simplify()
                .value(),
        )
    }
}

/// Julian Date of a UTC instant: `unix_millis / 86 400 000 + 2 440 587.5`.
#[inline]
pub fn julian_date(instant: Instant) -> JulianDate {
    JulianDate::from_utc(instant)
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{TimeZone, Utc};

    #[test]
    fn j2000_noon() {
        let t = Utc.with_ymd_and_hms(2000, 1, 1, 12, 0, 0).unwrap();
        assert_eq!(julian_date(t).value(), 2_451_545.0);
    }

    #[test]
    fn julian_centuries_from_j2000() {
        let jd = JulianDate::J2000 + Days::new(36_525.0 * 0.24);
        assert!((jd.julian_centuries().value() - 0.24).abs() < 1e-12);
    }

    #[test]
    fn days_since_j2000_is_negative_before_epoch() {
        let t = Utc.with_ymd_and_hms(1999, 12, 31, 12, 0, 0).unwrap();
        assert_eq!(julian_date(t).days_since_j2000(), Days::new(-1.0));
    }

    #[test]
    fn equinox_scenario_julian_date() {
        let t = Utc.with_ymd_and_hms(2024, 3, 20, 12, 0, 0).unwrap();
        assert_eq!(julian_date(t).value(), 2_460_390.0);
    }
}
