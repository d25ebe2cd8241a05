// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (C) 2026 Vallés Puig, Ramon

//! Low-precision solar ephemeris (Meeus ch. 25), good to ~0.01°.

use crate::angle::{normalize_degrees, to_radians};
use crate::coords::EquatorialPosition;
use crate::ecliptic::{ecliptic_to_equatorial, mean_obliquity};
use crate::JulianDate;

/// Geocentric right ascension and declination of the Sun.
pub(crate) fn solar_equatorial(jd: JulianDate) -> EquatorialPosition {
    let t = jd.julian_centuries().value();

    // Geometric mean longitude and mean anomaly
    let l0 = normalize_degrees(280.466_46 + 36_000.769_83 * t + 0.000_303_2 * t * t);
    let m = to_radians(normalize_degrees(
        357.529_11 + 35_999.050_29 * t - 0.000_153_7 * t * t,
    ));

    // Equation of centre: the orbit-eccentricity correction to the mean longitude
    let c = (1.914_602 - 0.004_817 * t - 0.000_014 * t * t) * m.sin()
        + (0.019_993 - 0.000_101 * t) * (2.0 * m).sin()
        + 0.000_289 * (3.0 * m).sin();

    ecliptic_to_equatorial(l0 + c, 0.0, mean_obliquity(t))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::julian_date_ext::julian_date;
    use chrono::{TimeZone, Utc};

    #[test]
    fn sun_at_j2000() {
        let eq = solar_equatorial(JulianDate::J2000);
        assert!((eq.right_ascension - 281.293).abs() < 0.01, "{eq:?}");
        assert!((eq.declination + 23.033).abs() < 0.01, "{eq:?}");
    }

    #[test]
    fn sun_just_after_march_equinox_2024() {
        // Equinox was 03:06Z; nine hours later the Sun is ~0.15° north.
        let t = Utc.with_ymd_and_hms(2024, 3, 20, 12, 0, 0).unwrap();
        let eq = solar_equatorial(julian_date(t));
        assert!((eq.declination - 0.150).abs() < 0.01, "{eq:?}");
        assert!((eq.right_ascension - 0.346).abs() < 0.01, "{eq:?}");
    }

    #[test]
    fn sun_at_solstices() {
        let june = Utc.with_ymd_and_hms(2024, 6, 21, 12, 0, 0).unwrap();
        let dec = Utc.with_ymd_and_hms(2024, 12, 21, 12, 0, 0).unwrap();
        assert!((solar_equatorial(julian_date(june)).declination - 23.435).abs() < 0.01);
        assert!((solar_equatorial(julian_date(dec)).declination + 23.436).abs() < 0.01);
    }
}
