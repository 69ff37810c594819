// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use crate::error::DomainError;
use crate::instant::parse_instant;
use crate::types::{ReportConfig, TimeRange};
use chrono_tz::Tz;
use regex::Regex;
use std::sync::LazyLock;

// Literal pattern, compiling it cannot fail.
#[allow(clippy::expect_used)]
static EMAIL_PATTERN: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^.+@.+\..+$").expect("email pattern is a valid regex"));

/// Validates that a value looks like an email address.
///
/// # Errors
///
/// Returns `DomainError::InvalidEmail` if the value does not match `.+@.+\..+`.
pub fn validate_email(field: &str, value: &str) -> Result<(), DomainError> {
    if !EMAIL_PATTERN.is_match(value) {
        return Err(DomainError::InvalidEmail {
            field: field.to_string(),
            value: value.to_string(),
        });
    }
    Ok(())
}

/// Validates that a scale factor is between 1 and 3.
///
/// # Errors
///
/// Returns `DomainError::InvalidScaleFactor` if the value is out of range.
pub fn validate_scale_factor(value: u8) -> Result<(), DomainError> {
    if !(1..=3).contains(&value) {
        return Err(DomainError::InvalidScaleFactor(value));
    }
    Ok(())
}

/// Validates that a time range sets both ends or neither.
///
/// # Errors
///
/// Returns `DomainError::IncompleteTimeRange` if only one end is set.
pub fn validate_time_range(field: &str, range: &TimeRange) -> Result<(), DomainError> {
    if range.is_partial() {
        return Err(DomainError::IncompleteTimeRange {
            field: field.to_string(),
        });
    }
    Ok(())
}

/// Validates that a timezone is a known IANA zone name.
///
/// # Errors
///
/// Returns `DomainError::InvalidTimezone` if the zone is unknown.
pub fn validate_timezone(zone: &str) -> Result<(), DomainError> {
    zone.parse::<Tz>()
        .map(|_| ())
        .map_err(|_| DomainError::InvalidTimezone(zone.to_string()))
}

/// Validates the field-level constraints of a report configuration.
///
/// This covers the rules that do not depend on how the dashboard or schedule
/// fields are combined; those are enforced when the wire command is built.
///
/// # Errors
///
/// Returns an error if:
/// - The name is empty
/// - There are no recipients, or a recipient or the reply-to is not an email
/// - The scale factor is outside 1..=3
/// - A declared start or end time is not RFC3339
/// - The schedule timezone is unknown
/// - A time range sets only one end
/// - A dashboard binding has an empty uid
pub fn validate_report_config(config: &ReportConfig) -> Result<(), DomainError> {
    // Rule: name must not be empty
    if config.name.is_empty() {
        return Err(DomainError::EmptyName);
    }

    // Rule: at least one recipient, every address well-formed
    if config.recipients.is_empty() {
        return Err(DomainError::MissingRecipients);
    }
    for (index, recipient) in config.recipients.iter().enumerate() {
        validate_email(&format!("recipients.{index}"), recipient)?;
    }
    if let Some(reply_to) = config.reply_to.as_deref().filter(|r| !r.is_empty()) {
        validate_email("reply_to", reply_to)?;
    }

    validate_scale_factor(config.scale_factor)?;

    let schedule = &config.schedule;
    if let Some(start) = schedule.start_time.as_deref().filter(|s| !s.is_empty()) {
        parse_instant("schedule.start_time", start)?;
    }
    if let Some(end) = schedule.end_time.as_deref().filter(|e| !e.is_empty()) {
        parse_instant("schedule.end_time", end)?;
    }
    validate_timezone(&schedule.timezone)?;

    if let Some(range) = &config.time_range {
        validate_time_range("time_range", range)?;
    }
    for (index, binding) in config.dashboards.iter().enumerate() {
        if binding.uid.is_empty() {
            return Err(DomainError::EmptyDashboardUid { index });
        }
        if let Some(range) = &binding.time_range {
            validate_time_range(&format!("dashboards.{index}.time_range"), range)?;
        }
    }

    Ok(())
}
