// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Field-by-field comparison of a declared report against its read-back.
//!
//! Declared and stored representations legitimately disagree in several
//! places. These are not reported as drift:
//!
//! - Timestamps written with different offsets for the same instant
//! - An empty declared start time against a stored start in the past
//! - A start time on `never`, or `workdays_only` on a frequency that never
//!   transmits it
//! - `custom_interval` on a non-custom frequency, `last_day_of_month` on a
//!   non-monthly one
//! - `formats` when the declaration leaves it empty
//! - Computed dashboard fields the declaration did not set
//!
//! Because the `dashboards` list is never rebuilt from a read, a declaration
//! in list form is compared through its first binding against the singular
//! read-back fields.

use crate::instant::{end_times_equivalent, start_times_equivalent};
use crate::interval::parse_custom_interval;
use crate::types::{Frequency, ReportConfig, TimeRange};
use time::OffsetDateTime;

/// A field whose declared and stored values differ.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FieldDrift {
    /// Path of the field, e.g. `schedule.start_time`.
    pub field: String,
    /// The declared value, rendered for display.
    pub declared: String,
    /// The stored value, rendered for display.
    pub observed: String,
}

impl std::fmt::Display for FieldDrift {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}: {} => {}", self.field, self.observed, self.declared)
    }
}

#[derive(Default)]
struct DriftCollector {
    drifts: Vec<FieldDrift>,
}

impl DriftCollector {
    fn compare<T: PartialEq + std::fmt::Debug>(&mut self, field: &str, declared: &T, observed: &T) {
        if declared != observed {
            self.record(field, declared, observed);
        }
    }

    fn record<T: std::fmt::Debug>(&mut self, field: &str, declared: &T, observed: &T) {
        self.drifts.push(FieldDrift {
            field: field.to_string(),
            declared: format!("{declared:?}"),
            observed: format!("{observed:?}"),
        });
    }
}

/// Lists the fields where `observed` really differs from `declared`.
///
/// # Arguments
///
/// * `declared` - The report as the user declares it
/// * `observed` - The report as read back from the service
/// * `now` - The current instant, used for the empty start time rule
#[must_use]
pub fn detect_drift(
    declared: &ReportConfig,
    observed: &ReportConfig,
    now: OffsetDateTime,
) -> Vec<FieldDrift> {
    let mut drift: DriftCollector = DriftCollector::default();

    drift.compare("name", &declared.name, &observed.name);
    drift.compare("recipients", &declared.recipients, &observed.recipients);
    drift.compare(
        "reply_to",
        &non_empty(declared.reply_to.as_deref()),
        &non_empty(observed.reply_to.as_deref()),
    );
    drift.compare(
        "message",
        &non_empty(declared.message.as_deref()),
        &non_empty(observed.message.as_deref()),
    );
    drift.compare(
        "include_dashboard_link",
        &declared.include_dashboard_link,
        &observed.include_dashboard_link,
    );
    drift.compare(
        "include_table_csv",
        &declared.include_table_csv,
        &observed.include_table_csv,
    );
    drift.compare("layout", &declared.layout, &observed.layout);
    drift.compare("orientation", &declared.orientation, &observed.orientation);
    if !declared.formats.is_empty() {
        drift.compare("formats", &declared.formats, &observed.formats);
    }
    drift.compare("state", &declared.state, &observed.state);
    drift.compare("scale_factor", &declared.scale_factor, &observed.scale_factor);

    compare_dashboards(&mut drift, declared, observed);
    compare_schedule(&mut drift, declared, observed, now);

    drift.drifts
}

fn compare_dashboards(drift: &mut DriftCollector, declared: &ReportConfig, observed: &ReportConfig) {
    if let Some(first) = declared.dashboards.first() {
        drift.compare(
            "dashboards.0.uid",
            &Some(first.uid.as_str()),
            &observed.dashboard_uid.as_deref(),
        );
        drift.compare(
            "dashboards.0.time_range",
            &normalized_range(first.time_range.as_ref()),
            &normalized_range(observed.time_range.as_ref()),
        );
        drift.compare(
            "dashboards.0.report_variables",
            &first.report_variables,
            &observed.template_vars,
        );
        return;
    }

    if let Some(uid) = non_empty(declared.dashboard_uid.as_deref()) {
        drift.compare(
            "dashboard_uid",
            &Some(uid),
            &non_empty(observed.dashboard_uid.as_deref()),
        );
    } else if declared.dashboard_id.is_some() {
        drift.compare("dashboard_id", &declared.dashboard_id, &observed.dashboard_id);
    }
    drift.compare(
        "time_range",
        &normalized_range(declared.time_range.as_ref()),
        &normalized_range(observed.time_range.as_ref()),
    );
    if declared.template_vars.is_some() {
        drift.compare("template_vars", &declared.template_vars, &observed.template_vars);
    }
}

fn compare_schedule(
    drift: &mut DriftCollector,
    declared: &ReportConfig,
    observed: &ReportConfig,
    now: OffsetDateTime,
) {
    let want = &declared.schedule;
    let have = &observed.schedule;

    drift.compare("schedule.frequency", &want.frequency, &have.frequency);
    drift.compare("schedule.timezone", &want.timezone, &have.timezone);

    if want.frequency.allows_start_time()
        && !start_times_equivalent(have.start_time.as_deref(), want.start_time.as_deref(), now)
    {
        drift.record("schedule.start_time", &want.start_time, &have.start_time);
    }
    if !end_times_equivalent(have.end_time.as_deref(), want.end_time.as_deref()) {
        drift.record("schedule.end_time", &want.end_time, &have.end_time);
    }

    if want.frequency.allows_workdays_only() {
        drift.compare(
            "schedule.workdays_only",
            &want.workdays_only,
            &have.workdays_only,
        );
    }

    if want.frequency == Frequency::Custom {
        let declared_interval = want.custom_interval.as_deref().map(parse_custom_interval);
        let observed_interval = have.custom_interval.as_deref().map(parse_custom_interval);
        let same: bool = match (&declared_interval, &observed_interval) {
            (Some(Ok(left)), Some(Ok(right))) => left == right,
            _ => want.custom_interval == have.custom_interval,
        };
        if !same {
            drift.record(
                "schedule.custom_interval",
                &want.custom_interval,
                &have.custom_interval,
            );
        }
    }

    if want.frequency == Frequency::Monthly {
        drift.compare(
            "schedule.last_day_of_month",
            &want.last_day_of_month,
            &have.last_day_of_month,
        );
    }
}

fn normalized_range(range: Option<&TimeRange>) -> Option<TimeRange> {
    range.filter(|r| !r.is_empty()).map(|r| TimeRange {
        from: r.from.clone().filter(|f| !f.is_empty()),
        to: r.to.clone().filter(|t| !t.is_empty()),
    })
}

fn non_empty(value: Option<&str>) -> Option<&str> {
    value.filter(|v| !v.is_empty())
}
