// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (C) 2026 Vallés Puig, Ramon

use thiserror::Error;

pub type Result<T> = std::result::Result<T, Error>;

/// Failures of the position, rise/set and terminator queries.
///
/// Latitudes the terminator never reaches are not an error: the generator
/// skips them.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum Error {
    /// A caller-supplied value was rejected before any computation ran.
    #[error("{quantity} out of range: {value} (expected {expected})")]
    InputOutOfRange {
        quantity: &'static str,
        value: f64,
        expected: &'static str,
    },

    /// An internal invariant of the astronomical math broke.
    #[error("domain violation: {message}")]
    DomainViolation { message: String },
}

impl Error {
    pub fn input_out_of_range(quantity: &'static str, value: f64, expected: &'static str) -> Self {
        Self::InputOutOfRange {
            quantity,
            value,
            expected,
        }
    }

    /// Raise a [`Error::DomainViolation`], logging it at error level.
    pub fn domain_violation(message: impl Into<String>) -> Self {
        let message = message.into();
        log::error!("domain violation: {message}");
        Self::DomainViolation { message }
    }
}
