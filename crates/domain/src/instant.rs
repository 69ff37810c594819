// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Timestamp normalization for schedule start and end times.
//!
//! ## Invariants
//!
//! - Instants sent to the remote service are always UTC
//! - Two timestamps are equivalent when they denote the same absolute instant,
//!   whatever offset they were written with
//! - An empty declared start time is equivalent to any stored start time that
//!   is already in the past (the remote service fills an empty start with the
//!   creation time)
//! - An empty end time is only equivalent to another empty end time

use crate::error::DomainError;
use time::format_description::well_known::Rfc3339;
use time::{OffsetDateTime, UtcOffset};

/// Converts an instant to UTC without changing the moment it denotes.
#[must_use]
pub fn to_canonical_utc(instant: OffsetDateTime) -> OffsetDateTime {
    instant.to_offset(UtcOffset::UTC)
}

/// Parses an RFC3339 timestamp.
///
/// # Arguments
///
/// * `field` - Name of the field being parsed, used in the error
/// * `value` - The timestamp text
///
/// # Errors
///
/// Returns `DomainError::InvalidTimestamp` if the value is not RFC3339.
pub fn parse_instant(field: &'static str, value: &str) -> Result<OffsetDateTime, DomainError> {
    OffsetDateTime::parse(value, &Rfc3339).map_err(|e| DomainError::InvalidTimestamp {
        field,
        value: value.to_string(),
        error: e.to_string(),
    })
}

/// Renders an instant as RFC3339 in UTC.
///
/// # Errors
///
/// Returns `DomainError::TimestampFormat` if the instant cannot be represented
/// in RFC3339 (for example a year beyond 9999).
pub fn format_instant(instant: OffsetDateTime) -> Result<String, DomainError> {
    to_canonical_utc(instant)
        .format(&Rfc3339)
        .map_err(|e| DomainError::TimestampFormat {
            error: e.to_string(),
        })
}

/// Parses an RFC3339 timestamp and re-renders it in canonical UTC form.
///
/// # Errors
///
/// Returns an error if the value cannot be parsed or formatted.
pub fn canonicalize(field: &'static str, value: &str) -> Result<String, DomainError> {
    format_instant(parse_instant(field, value)?)
}

/// Decides whether a stored start time and a declared start time agree.
///
/// # Arguments
///
/// * `stored` - Start time as read back from the remote service
/// * `declared` - Start time as declared by the user
/// * `now` - The current instant
#[must_use]
pub fn start_times_equivalent(
    stored: Option<&str>,
    declared: Option<&str>,
    now: OffsetDateTime,
) -> bool {
    match (non_empty(stored), non_empty(declared)) {
        (Some(stored), None) => {
            OffsetDateTime::parse(stored, &Rfc3339).is_ok_and(|instant| instant < now)
        }
        (stored, declared) => instants_equal(stored, declared),
    }
}

/// Decides whether a stored end time and a declared end time agree.
#[must_use]
pub fn end_times_equivalent(stored: Option<&str>, declared: Option<&str>) -> bool {
    instants_equal(non_empty(stored), non_empty(declared))
}

fn instants_equal(left: Option<&str>, right: Option<&str>) -> bool {
    match (left, right) {
        (None, None) => true,
        (Some(left), Some(right)) => {
            match (
                OffsetDateTime::parse(left, &Rfc3339),
                OffsetDateTime::parse(right, &Rfc3339),
            ) {
                (Ok(left), Ok(right)) => left == right,
                // Unparseable text only matches itself.
                _ => left == right,
            }
        }
        _ => false,
    }
}

fn non_empty(value: Option<&str>) -> Option<&str> {
    value.filter(|v| !v.is_empty())
}
