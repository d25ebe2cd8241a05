// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (C) 2026 Vallés Puig, Ramon

//! Truncated lunar ephemeris (Meeus ch. 47).
//!
//! Mean elements plus the 24 largest periodic terms in longitude and the 10
//! largest in latitude.  Accuracy is about 0.01–0.05°, far better than a
//! map marker needs.

use crate::angle::{normalize_degrees, to_radians};
use crate::coords::EquatorialPosition;
use crate::ecliptic::{ecliptic_to_equatorial, mean_obliquity};
use crate::JulianDate;

/// One periodic term: coefficient in 1e-6 degrees and the multipliers of
/// `(D, M, M', F)`.
struct Term {
    coeff: f64,
    d: i8,
    m: i8,
    mp: i8,
    f: i8,
}

const fn term(coeff: f64, d: i8, m: i8, mp: i8, f: i8) -> Term {
    Term { coeff, d, m, mp, f }
}

#[rustfmt::skip]
const LONGITUDE_TERMS: [Term; 24] = [
    term(6_288_774.0, 0,  0,  1,  0),
    term(1_274_027.0, 2,  0, -1,  0),
    term(  658_314.0, 2,  0,  0,  0),
    term(  213_618.0, 0,  0,  2,  0),
    term( -185_116.0, 0,  1,  0,  0),
    term( -114_332.0, 0,  0,  0,  2),
    term(   58_793.0, 2,  0, -2,  0),
    term(   57_066.0, 2, -1, -1,  0),
    term(   53_322.0, 2,  0,  1,  0),
    term(   45_758.0, 2, -1,  0,  0),
    term(  -40_923.0, 0,  1, -1,  0),
    term(  -34_720.0, 1,  0,  0,  0),
    term(  -30_383.0, 0,  1,  1,  0),
    term(   15_327.0, 2,  0,  0, -2),
    term(  -12_528.0, 0,  0,  1,  2),
    term(   10_980.0, 0,  0,  1, -2),
    term(   10_675.0, 4,  0, -1,  0),
    term(   10_034.0, 0,  0,  3,  0),
    term(    8_548.0, 4,  0, -2,  0),
    term(   -7_888.0, 2,  1, -1,  0),
    term(   -6_766.0, 2,  1,  0,  0),
    term(   -5_163.0, 1,  0, -1,  0),
    term(    4_987.0, 1,  1,  0,  0),
    term(    4_036.0, 2, -1,  1,  0),
];

#[rustfmt::skip]
const LATITUDE_TERMS: [Term; 10] = [
    term(5_128_122.0, 0, 0, 0,  1),
    term(  280_602.0, 0, 0, 1,  1),
    term(  277_693.0, 0, 0, 1, -1),
    term(  173_237.0, 2, 0, 0, -1),
    term(   55_413.0, 2, 0, -1, 1),
    term(   46_271.0, 2, 0, -1, -1),
    term(   32_573.0, 2, 0, 0,  1),
    term(   17_198.0, 0, 0, 2,  1),
    term(    9_266.0, 2, 0, 1, -1),
    term(    8_822.0, 0, 0, 2, -1),
];

/// Fundamental arguments of the lunar theory, degrees.
struct Arguments {
    /// Mean longitude L'
    mean_longitude: f64,
    /// Mean elongation D
    elongation: f64,
    /// Sun's mean anomaly M
    sun_anomaly: f64,
    /// Moon's mean anomaly M'
    moon_anomaly: f64,
    /// Argument of latitude F
    latitude_argument: f64,
    /// Eccentricity factor E applied to terms containing M
    eccentricity: f64,
}

impl Arguments {
    fn at(t: f64) -> Self {
        let t2 = t * t;
        Self {
            mean_longitude: normalize_degrees(218.316_447_7 + 481_267.881_234_21 * t - 0.001_578_6 * t2),
            elongation: normalize_degrees(297.850_192_1 + 445_267.111_403_4 * t - 0.001_881_9 * t2),
            sun_anomaly: normalize_degrees(357.529_109_2 + 35_999.050_290_9 * t - 0.000_153_6 * t2),
            moon_anomaly: normalize_degrees(134.963_396_4 + 477_198.867_505_5 * t + 0.008_741_4 * t2),
            latitude_argument: normalize_degrees(93.272_095_0 + 483_202.017_523_3 * t - 0.003_653_9 * t2),
            eccentricity: 1.0 - 0.002_516 * t - 0.000_007_4 * t2,
        }
    }

    /// Sum of `coeff · E^|m| · sin(d·D + m·M + m'·M' + f·F)` in degrees.
    fn series(&self, terms: &[Term]) -> f64 {
        let micro_degrees: f64 = terms
            .iter()
            .map(|t| {
                let arg = f64::from(t.d) * self.elongation
                    + f64::from(t.m) * self.sun_anomaly
                    + f64::from(t.mp) * self.moon_anomaly
                    + f64::from(t.f) * self.latitude_argument;
                t.coeff * self.eccentricity.powi(i32::from(t.m.abs())) * to_radians(arg).sin()
            })
            .sum();
        micro_degrees / 1_000_000.0
    }
}

/// Geocentric right ascension and declination of the Moon.
pub(crate) fn lunar_equatorial(jd: JulianDate) -> EquatorialPosition {
    let t = jd.julian_centuries().value();
    let args = Arguments::at(t);

    let longitude = args.mean_longitude + args.series(&LONGITUDE_TERMS);
    let latitude = args.series(&LATITUDE_TERMS);

    ecliptic_to_equatorial(longitude, latitude, mean_obliquity(t))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn meeus_example_47a() {
        // 1992-04-12 0h TD: apparent α = 134.688470°, δ = 13.768368°.
        let eq = lunar_equatorial(JulianDate::new(2_448_724.5));
        assert!((eq.right_ascension - 134.688).abs() < 0.05, "{eq:?}");
        assert!((eq.declination - 13.768).abs() < 0.05, "{eq:?}");
    }

    #[test]
    fn declination_stays_near_standstill_limit() {
        // Sample 2024–2025, the major lunar standstill.
        let start = JulianDate::new(2_460_310.5);
        let max = (0..730 * 8)
            .map(|i| lunar_equatorial(start + qtty::Days::new(i as f64 * 0.125)).declination.abs())
            .fold(0.0_f64, f64::max);
        assert!(max > 28.4 && max < 28.8, "max |δ| = {max}");
    }
}
