// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (C) 2026 Vallés Puig, Ramon

//! The day/night terminator as a latitude-ordered polyline.
//!
//! For each sampled latitude `φ` the boundary lies an hour angle
//! `H = acos(−tan φ · tan δ☉)` east of the sub-solar meridian.  Near the
//! poles the argument leaves `[−1, 1]`: that parallel is entirely lit or
//! entirely dark, the boundary never reaches it, and the sample is skipped.
//!
//! `H` is continuous and monotone in `φ`, so consecutive points only jump
//! by more than 180° where the curve genuinely crosses the ±180° seam;
//! [`TerminatorCurve::segments`] splits it there for renderers.

use log::debug;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use crate::angle::{to_degrees, to_radians};
use crate::coords::GeographicPoint;
use crate::error::{Error, Result};
use crate::instant::Instant;
use crate::position::subsolar_point;

/// Latitude spacing used when callers have no preference, degrees.
pub const DEFAULT_LATITUDE_STEP: f64 = 1.0;

/// Finest accepted latitude spacing, degrees.
pub const MIN_LATITUDE_STEP: f64 = 1e-3;

/// Day/night boundary at a single instant.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct TerminatorCurve {
    subsolar: GeographicPoint,
    points: Vec<GeographicPoint>,
}

impl TerminatorCurve {
    /// The sub-solar point the curve was built from; the centre of the
    /// lit hemisphere.
    #[inline]
    pub fn subsolar(&self) -> GeographicPoint {
        self.subsolar
    }

    /// Boundary points, latitude ascending.
    #[inline]
    pub fn points(&self) -> &[GeographicPoint] {
        &self.points
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.points.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, GeographicPoint> {
        self.points.iter()
    }

    pub fn into_points(self) -> Vec<GeographicPoint> {
        self.points
    }

    /// Runs of consecutive points that do not cross the ±180° seam.
    ///
    /// Drawing each run as its own line keeps a seam crossing from being
    /// rendered as a stroke across the whole map.
    pub fn segments(&self) -> Vec<&[GeographicPoint]> {
        let mut segments = Vec::new();
        let mut start = 0;
        for (i, pair) in self.points.windows(2).enumerate() {
            if (pair[1].longitude() - pair[0].longitude()).abs() > 180.0 {
                segments.push(&self.points[start..=i]);
                start = i + 1;
            }
        }
        if start < self.points.len() {
            segments.push(&self.points[start..]);
        }
        segments
    }
}

impl<'a> IntoIterator for &'a TerminatorCurve {
    type Item = &'a GeographicPoint;
    type IntoIter = std::slice::Iter<'a, GeographicPoint>;

    fn into_iter(self) -> Self::IntoIter {
        self.points.iter()
    }
}

/// Sample the terminator at `instant` every `step_degrees` of latitude,
/// from −90° to +90° inclusive.
///
/// # Errors
///
/// - [`Error::InputOutOfRange`] unless
///   [`MIN_LATITUDE_STEP`]` <= step_degrees <= 180`.
/// - Whatever [`subsolar_point`] reports for the instant.
///
/// # Examples
///
/// ```
/// use chrono::{TimeZone, Utc};
/// use daybreak::{terminator_curve, DEFAULT_LATITUDE_STEP};
///
/// let t = Utc.with_ymd_and_hms(2024, 6, 21, 12, 0, 0).unwrap();
/// let curve = terminator_curve(t, DEFAULT_LATITUDE_STEP).unwrap();
/// assert!(curve.points().windows(2).all(|w| w[0].latitude() < w[1].latitude()));
/// ```
pub fn terminator_curve(instant: Instant, step_degrees: f64) -> Result<TerminatorCurve> {
    if !(MIN_LATITUDE_STEP..=180.0).contains(&step_degrees) {
        return Err(Error::input_out_of_range(
            "latitude step",
            step_degrees,
            "[0.001, 180] degrees",
        ));
    }

    let subsolar = subsolar_point(instant)?;
    let tan_declination = to_radians(subsolar.latitude()).tan();

    let mut points = Vec::new();
    let mut skipped = 0usize;
    for latitude in sample_latitudes(step_degrees) {
        let cos_h = -to_radians(latitude).tan() * tan_declination;
        if !(-1.0..=1.0).contains(&cos_h) {
            skipped += 1;
            continue;
        }
        let hour_angle = to_degrees(cos_h.acos());
        points.push(GeographicPoint::new(
            latitude,
            subsolar.longitude() + hour_angle,
        )?);
    }

    if skipped > 0 {
        debug!(
            "terminator at {instant}: skipped {skipped} latitude samples beyond ±{:.3}°",
            90.0 - subsolar.latitude().abs()
        );
    }

    Ok(TerminatorCurve { subsolar, points })
}

/// −90, −90 + step, … and +90 itself even when the grid misses it.
fn sample_latitudes(step: f64) -> impl Iterator<Item = f64> {
    let count = (180.0 / step).floor() as usize;
    let last_on_grid = -90.0 + count as f64 * step;
    let closing = (last_on_grid < 90.0 - 1e-9).then_some(90.0);
    (0..=count)
        .map(move |i| (-90.0 + i as f64 * step).min(90.0))
        .chain(closing)
}
