// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Assembly of the full wire command and decomposition of stored reports.

use crate::dashboard::{DashboardSource, LegacyDashboard, legacy_dashboard_from_wire};
use crate::error::DomainError;
use crate::schedule::{build_wire_schedule, schedule_from_wire};
use crate::types::{ReportConfig, ReportFormat};
use crate::wire::{RECIPIENT_DELIMITER, ReportCommand, WireOptions, WireReport, WireSchedule};
use std::collections::BTreeSet;

/// Builds the create-or-update command for a report.
///
/// Scalar fields are copied first, then formats are defaulted to `{pdf}`
/// when none are declared, then the dashboard identity is resolved, then the
/// schedule is translated. The first failing step aborts the build.
///
/// # Errors
///
/// Returns the error of the dashboard resolution or of the schedule
/// translation, whichever fails first.
pub fn build_wire_command(config: &ReportConfig) -> Result<ReportCommand, DomainError> {
    let mut command: ReportCommand = ReportCommand {
        name: config.name.clone(),
        recipients: config.recipients.join(RECIPIENT_DELIMITER),
        reply_to: config.reply_to.clone().unwrap_or_default(),
        message: config.message.clone().unwrap_or_default(),
        enable_dashboard_url: config.include_dashboard_link,
        enable_csv: config.include_table_csv,
        options: WireOptions {
            layout: config.layout,
            orientation: config.orientation,
            time_range: None,
        },
        scale_factor: config.scale_factor,
        state: config.state,
        formats: resolve_formats(&config.formats),
        schedule: WireSchedule::new(config.schedule.frequency, &config.schedule.timezone),
        dashboard_id: None,
        template_vars: None,
        dashboards: Vec::new(),
    };

    DashboardSource::resolve(config)?.apply_to(&mut command)?;
    command.schedule = build_wire_schedule(&config.schedule)?;

    Ok(command)
}

/// Rebuilds declarative state from a stored report.
///
/// The result replaces any previous state wholesale. `prior` is only
/// consulted to decide whether `formats` is surfaced: it is filled in when
/// the previous declaration set it, and left empty otherwise.
///
/// # Errors
///
/// Returns an error if a stored schedule timestamp is not RFC3339.
pub fn report_from_wire(
    report: &WireReport,
    prior: Option<&ReportConfig>,
) -> Result<ReportConfig, DomainError> {
    let legacy: LegacyDashboard = legacy_dashboard_from_wire(report);

    let formats: BTreeSet<ReportFormat> = match prior {
        Some(prior) if !prior.formats.is_empty() => report.formats.iter().copied().collect(),
        _ => BTreeSet::new(),
    };

    Ok(ReportConfig {
        name: report.name.clone(),
        recipients: split_recipients(&report.recipients),
        reply_to: Some(report.reply_to.clone()).filter(|r| !r.is_empty()),
        message: Some(report.message.clone()).filter(|m| !m.is_empty()),
        include_dashboard_link: report.enable_dashboard_url,
        include_table_csv: report.enable_csv,
        layout: report.options.layout,
        orientation: report.options.orientation,
        formats,
        state: report.state,
        scale_factor: report.scale_factor,
        dashboard_id: legacy.dashboard_id,
        dashboard_uid: legacy.dashboard_uid,
        time_range: legacy.time_range,
        template_vars: legacy.template_vars,
        schedule: schedule_from_wire(&report.schedule)?,
        dashboards: Vec::new(),
    })
}

fn resolve_formats(declared: &BTreeSet<ReportFormat>) -> Vec<ReportFormat> {
    if declared.is_empty() {
        return vec![ReportFormat::Pdf];
    }
    declared.iter().copied().collect()
}

fn split_recipients(recipients: &str) -> Vec<String> {
    if recipients.is_empty() {
        return Vec::new();
    }
    recipients
        .split(RECIPIENT_DELIMITER)
        .map(str::to_string)
        .collect()
}
