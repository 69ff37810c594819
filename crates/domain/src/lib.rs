// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Reconciliation rules between declarative scheduled-report configuration
//! and the reporting API's wire model.
//!
//! Everything in this crate is a pure function of its inputs: no I/O, no
//! shared state. Applying a configuration and reading it back must never show
//! a difference that the user did not make.

#![deny(
    clippy::pedantic,
    clippy::cargo,
    clippy::nursery,
    clippy::style,
    clippy::correctness,
    clippy::all,
    clippy::suspicious,
    clippy::complexity,
    clippy::perf,
    clippy::unwrap_used,
    clippy::expect_used
)]

mod dashboard;
mod drift;
mod error;
mod instant;
mod interval;
mod report;
mod schedule;
mod types;
mod validation;
mod wire;

#[cfg(test)]
mod tests;

pub use dashboard::{DashboardSource, LegacyDashboard, legacy_dashboard_from_wire};
pub use drift::{FieldDrift, detect_drift};
pub use error::{CUSTOM_INTERVAL_FORMAT, DomainError};
pub use instant::{
    canonicalize, end_times_equivalent, format_instant, parse_instant, start_times_equivalent,
    to_canonical_utc,
};
pub use interval::{CustomInterval, IntervalUnit, parse_custom_interval};
pub use report::{build_wire_command, report_from_wire};
pub use schedule::{ScheduleRule, ScheduleWindow, build_wire_schedule, schedule_from_wire};

// Re-export public types
pub use types::{
    DEFAULT_SCALE_FACTOR, DEFAULT_TIMEZONE, DashboardBinding, Frequency, Layout, Orientation,
    ReportConfig, ReportFormat, ReportState, Schedule, TimeRange,
};
pub use validation::{
    validate_email, validate_report_config, validate_scale_factor, validate_time_range,
    validate_timezone,
};
pub use wire::{
    LAST_DAY_OF_MONTH, RECIPIENT_DELIMITER, ReportCommand, WireDashboard, WireDashboardRef,
    WireOptions, WireReport, WireSchedule, WireTimeRange,
};
