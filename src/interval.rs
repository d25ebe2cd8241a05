// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (C) 2026 Vallés Puig, Ramon

//! Time intervals over any [`TimeInstant`].

use std::fmt;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use crate::instant::TimeInstant;

/// An interval between two instants.
///
/// Used for the daylight span between sunrise and sunset, but generic over
/// any [`TimeInstant`] (`JulianDate`, `DateTime<Utc>`, …).
///
/// # Examples
///
/// ```
/// use daybreak::{Interval, JulianDate};
/// use qtty::Days;
///
/// let span = Interval::new(JulianDate::new(2451545.0), JulianDate::new(2451546.5));
/// assert_eq!(span.duration(), Days::new(1.5));
/// ```
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Interval<T: TimeInstant> {
    pub start: T,
    pub end: T,
}

impl<T: TimeInstant> Interval<T> {
    pub fn new(start: T, end: T) -> Self {
        Interval { start, end }
    }

    /// `end − start`.
    pub fn duration(&self) -> T::Duration {
        self.end.difference(&self.start)
    }

    /// Whether `instant` lies in the half-open range `[start, end)`.
    pub fn contains(&self, instant: T) -> bool {
        self.start <= instant && instant < self.end
    }

    /// The overlapping sub-interval, treating both as half-open ranges.
    ///
    /// Intervals that merely touch do not intersect.
    pub fn intersection(&self, other: &Self) -> Option<Self> {
        let start = if self.start >= other.start {
            self.start
        } else {
            other.start
        };
        let end = if self.end <= other.end {
            self.end
        } else {
            other.end
        };

        if start < end {
            Some(Self::new(start, end))
        } else {
            None
        }
    }
}

impl<T: TimeInstant + fmt::Display> fmt::Display for Interval<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} to {}", self.start, self.end)
    }
}
