// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (C) 2026 Vallés Puig, Ramon

//! Periodic re-evaluation, owned by the caller.
//!
//! The engine reads no clock and runs no timer.  A live overlay re-queries
//! it on a fixed [`Cadence`]: the caller takes instants from
//! [`Cadence::ticks`] (or [`Cadence::next_after`] for "now"), evaluates a
//! [`snapshot`] for each, and drops stale results at will.

use chrono::{DateTime, Duration, Utc};

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use crate::coords::GeographicPoint;
use crate::error::{Error, Result};
use crate::instant::Instant;
use crate::position::{sublunar_point, subsolar_point};

/// Sun and Moon map markers for one instant.
#[derive(Debug, Copy, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct CelestialSnapshot {
    pub instant: Instant,
    pub sun: GeographicPoint,
    pub moon: GeographicPoint,
}

/// Sub-solar and sub-lunar points at `instant`.
pub fn snapshot(instant: Instant) -> Result<CelestialSnapshot> {
    Ok(CelestialSnapshot {
        instant,
        sun: subsolar_point(instant)?,
        moon: sublunar_point(instant)?,
    })
}

/// A validated re-query period between one second and one hour.
///
/// Serialises as its period in milliseconds.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(try_from = "i64", into = "i64"))]
pub struct Cadence {
    every_ms: i64,
}

impl Cadence {
    const MIN_MS: i64 = 1_000;
    const MAX_MS: i64 = 3_600_000;

    /// Every second: marker positions.
    pub const LIVE: Cadence = Cadence { every_ms: 1_000 };

    /// Every minute: terminator shading and sunrise/sunset read-outs.
    pub const OVERLAY: Cadence = Cadence { every_ms: 60_000 };

    /// # Errors
    ///
    /// [`Error::InputOutOfRange`] unless `1 s <= every <= 1 h`.
    pub fn new(every: Duration) -> Result<Self> {
        Self::try_from(every.num_milliseconds())
    }

    pub fn every(&self) -> Duration {
        Duration::milliseconds(self.every_ms)
    }

    /// `start`, `start + every`, … until chrono's range ends.
    pub fn ticks(&self, start: Instant) -> Ticks {
        Ticks {
            next: Some(start),
            step: self.every(),
        }
    }

    /// The first tick strictly after `instant` on the grid anchored at the
    /// Unix epoch, so independent callers refresh in step.
    pub fn next_after(&self, instant: Instant) -> Option<Instant> {
        let millis = instant.timestamp_millis();
        let next = millis
            .div_euclid(self.every_ms)
            .checked_add(1)?
            .checked_mul(self.every_ms)?;
        DateTime::<Utc>::from_timestamp_millis(next)
    }
}

impl TryFrom<i64> for Cadence {
    type Error = Error;

    fn try_from(every_ms: i64) -> Result<Self> {
        if (Self::MIN_MS..=Self::MAX_MS).contains(&every_ms) {
            Ok(Self { every_ms })
        } else {
            Err(Error::input_out_of_range(
                "cadence milliseconds",
                every_ms as f64,
                "[1000, 3600000]",
            ))
        }
    }
}

impl From<Cadence> for i64 {
    fn from(cadence: Cadence) -> i64 {
        cadence.every_ms
    }
}

impl Default for Cadence {
    fn default() -> Self {
        Cadence::LIVE
    }
}

/// Iterator returned by [`Cadence::ticks`].
#[derive(Debug, Clone)]
pub struct Ticks {
    next: Option<Instant>,
    step: Duration,
}

impl Iterator for Ticks {
    type Item = Instant;

    fn next(&mut self) -> Option<Instant> {
        let current = self.next?;
        self.next = current.checked_add_signed(self.step);
        Some(current)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    #[test]
    fn cadence_bounds() {
        assert!(Cadence::new(Duration::seconds(1)).is_ok());
        assert!(Cadence::new(Duration::hours(1)).is_ok());
        assert!(Cadence::new(Duration::milliseconds(999)).is_err());
        assert!(Cadence::new(Duration::hours(2)).is_err());
        assert!(Cadence::new(Duration::seconds(-5)).is_err());
        assert_eq!(Cadence::default(), Cadence::LIVE);
        assert_eq!(i64::from(Cadence::OVERLAY), 60_000);
        assert!(Cadence::try_from(500).is_err());
    }

    #[test]
    fn ticks_are_evenly_spaced() {
        let start = Utc.with_ymd_and_hms(2024, 3, 20, 12, 0, 0).unwrap();
        let cadence = Cadence::new(Duration::seconds(5)).unwrap();
        let ticks: Vec<Instant> = cadence.ticks(start).take(4).collect();
        assert_eq!(ticks[0], start);
        assert_eq!(ticks[3] - start, Duration::seconds(15));
    }

    #[test]
    fn next_after_snaps_to_the_grid() {
        let t = Utc.with_ymd_and_hms(2024, 3, 20, 12, 0, 42).unwrap();
        let next = Cadence::OVERLAY.next_after(t).unwrap();
        assert_eq!(next, Utc.with_ymd_and_hms(2024, 3, 20, 12, 1, 0).unwrap());
        // Exactly on a tick: the following one.
        assert_eq!(Cadence::OVERLAY.next_after(next).unwrap() - next, Duration::minutes(1));
    }

    #[test]
    fn next_after_before_epoch() {
        let t = DateTime::<Utc>::from_timestamp_millis(-1_500).unwrap();
        let next = Cadence::LIVE.next_after(t).unwrap();
        assert_eq!(next.timestamp_millis(), -1_000);
    }

    #[test]
    fn snapshot_pairs_sun_and_moon() {
        let t = Utc.with_ymd_and_hms(2024, 3, 20, 12, 0, 0).unwrap();
        let snap = snapshot(t).unwrap();
        assert_eq!(snap.instant, t);
        assert_eq!(snap.sun, subsolar_point(t).unwrap());
        assert_eq!(snap.moon, sublunar_point(t).unwrap());
    }
}
