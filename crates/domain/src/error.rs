// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use crate::types::Frequency;

/// Message shared by every custom interval parse failure.
pub const CUSTOM_INTERVAL_FORMAT: &str = "custom_interval must be in format `<number> <unit>` where unit is one of `hours`, `days`, `weeks`, `months`";

/// Errors that can occur while validating or translating a report configuration.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DomainError {
    /// The custom interval does not follow the `<number> <unit>` grammar.
    InvalidCustomInterval {
        /// The rejected input.
        value: String,
    },
    /// The custom interval parses but repeats every zero units.
    ZeroCustomInterval {
        /// The rejected input.
        value: String,
    },
    /// A timestamp could not be parsed as RFC3339.
    InvalidTimestamp {
        /// The field holding the timestamp.
        field: &'static str,
        /// The rejected input.
        value: String,
        /// The parser's message.
        error: String,
    },
    /// A timestamp could not be rendered as RFC3339.
    TimestampFormat {
        /// The formatter's message.
        error: String,
    },
    /// An end time was declared for a frequency that cannot carry one.
    EndTimeNotAllowed {
        /// The offending frequency.
        frequency: Frequency,
    },
    /// Neither a legacy dashboard identity nor a dashboards list was provided.
    MissingDashboard,
    /// A dashboard binding has an empty uid.
    EmptyDashboardUid {
        /// Position of the binding in the dashboards list.
        index: usize,
    },
    /// A time range sets only one of `from` and `to`.
    IncompleteTimeRange {
        /// Path of the offending time range.
        field: String,
    },
    /// The report name is empty.
    EmptyName,
    /// The report has no recipients.
    MissingRecipients,
    /// An address does not look like an email address.
    InvalidEmail {
        /// The field holding the address.
        field: String,
        /// The rejected address.
        value: String,
    },
    /// The scale factor is outside 1..=3.
    InvalidScaleFactor(u8),
    /// The schedule timezone is not a known IANA zone.
    InvalidTimezone(String),
}

impl DomainError {
    /// Returns whether this error is a frequency/field combination failure
    /// raised by the schedule translator, as opposed to a plain validation failure.
    #[must_use]
    pub const fn is_translation_error(&self) -> bool {
        matches!(self, Self::EndTimeNotAllowed { .. })
    }
}

impl std::fmt::Display for DomainError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::InvalidCustomInterval { .. } => write!(f, "{CUSTOM_INTERVAL_FORMAT}"),
            Self::ZeroCustomInterval { value } => {
                write!(f, "custom_interval '{value}' must repeat at least once per unit")
            }
            Self::InvalidTimestamp {
                field,
                value,
                error,
            } => {
                write!(f, "Invalid {field} '{value}': {error}")
            }
            Self::TimestampFormat { error } => {
                write!(f, "Failed to format timestamp: {error}")
            }
            Self::EndTimeNotAllowed { frequency } => {
                write!(
                    f,
                    "end_time cannot be set when the schedule frequency is '{frequency}'"
                )
            }
            Self::MissingDashboard => write!(
                f,
                "must set one of dashboard_uid, dashboard_id or dashboards"
            ),
            Self::EmptyDashboardUid { index } => {
                write!(f, "dashboards.{index}.uid cannot be empty")
            }
            Self::IncompleteTimeRange { field } => {
                write!(f, "{field}: `from` and `to` must be set together")
            }
            Self::EmptyName => write!(f, "Report name cannot be empty"),
            Self::MissingRecipients => write!(f, "At least one recipient is required"),
            Self::InvalidEmail { field, value } => {
                write!(f, "{field} '{value}' must be an email address")
            }
            Self::InvalidScaleFactor(value) => {
                write!(f, "Invalid scale factor: {value}. Must be between 1 and 3")
            }
            Self::InvalidTimezone(zone) => write!(f, "Unknown timezone: '{zone}'"),
        }
    }
}

impl std::error::Error for DomainError {}
