// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (C) 2026 Vallés Puig, Ramon

//! Greenwich Mean Sidereal Time.
//!
//! ```text
//! GMST = 280.46061837° + 360.98564736629°·d + 0.000387933°·T² − T³/38 710 000
//! d    = JD − 2 451 545.0
//! T    = d / 36 525
//! ```
//!
//! The rate term dominates: after 50 years `360.98564736629·d` is about
//! 6.6 million degrees, so reducing it naively modulo 360 throws away
//! roughly nine bits of the fractional turn.  Splitting the rate into
//! `360 + 0.98564736629` lets the whole-revolution part drop out exactly
//! through the fractional day, keeping the reduced value small before the
//! polynomial terms are added.

use crate::angle::normalize_degrees;
use crate::instant::Instant;
use crate::julian_date_ext::julian_date;
use crate::JulianDate;

const GMST_AT_J2000: f64 = 280.460_618_37;
/// Excess of the sidereal rate over one turn per day, degrees/day.
const SIDEREAL_EXCESS_PER_DAY: f64 = 0.985_647_366_29;
const T2_COEFF: f64 = 0.000_387_933;
const T3_DIVISOR: f64 = 38_710_000.0;

/// GMST in degrees `[0, 360)` for a UTC instant.
#[inline]
pub fn gmst_degrees(instant: Instant) -> f64 {
    gmst_from_julian_date(julian_date(instant))
}

/// GMST in degrees `[0, 360)` for a Julian Date on the UT axis.
pub fn gmst_from_julian_date(jd: JulianDate) -> f64 {
    let d = jd.days_since_j2000().value();
    let t = jd.julian_centuries().value();

    let fraction_of_day = d - d.floor();
    let rotation = 360.0 * fraction_of_day + SIDEREAL_EXCESS_PER_DAY * d;

    normalize_degrees(GMST_AT_J2000 + rotation + T2_COEFF * t * t - t * t * t / T3_DIVISOR)
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{Duration, TimeZone, Utc};
    use qtty::Days;

    #[test]
    fn gmst_at_j2000() {
        let gmst = gmst_from_julian_date(JulianDate::J2000);
        assert!((gmst - 280.460_618_37).abs() < 1e-9);
    }

    #[test]
    fn gmst_equinox_noon_2024() {
        let t = Utc.with_ymd_and_hms(2024, 3, 20, 12, 0, 0).unwrap();
        assert!((gmst_degrees(t) - 358.511_595_954).abs() < 1e-6);
    }

    #[test]
    fn gmst_advances_one_sidereal_turn_per_sidereal_day() {
        let jd = JulianDate::new(2_460_000.25);
        let a = gmst_from_julian_date(jd);
        let b = gmst_from_julian_date(jd + Days::new(1.0));
        // one solar day ≈ 360.9856° of sidereal rotation
        let advance = normalize_degrees(b - a);
        assert!((advance - 0.985_647).abs() < 1e-5, "advance = {advance}");
    }

    #[test]
    fn gmst_stays_in_range_over_a_century() {
        let start = Utc.with_ymd_and_hms(1950, 1, 1, 0, 0, 0).unwrap();
        for step in 0..400 {
            let t = start + Duration::days(step * 91) + Duration::minutes(step * 37);
            let g = gmst_degrees(t);
            assert!((0.0..360.0).contains(&g), "gmst {g} out of range at {t}");
        }
    }

    #[test]
    fn gmst_fifty_years_out_matches_reference() {
        // JD 2469807.623456 (≈ 2050-01-01T02:57Z), reference computed in
        // extended precision.
        let gmst = gmst_from_julian_date(JulianDate::new(2_469_807.623_456));
        assert!((gmst - 145.411_586_262).abs() < 1e-6, "gmst = {gmst}");
    }
}
