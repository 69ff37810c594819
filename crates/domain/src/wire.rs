// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! JSON shapes exchanged with the reporting API.
//!
//! These types mirror the remote service's representation and carry no
//! reconciliation logic of their own.

use crate::types::{Frequency, Layout, Orientation, ReportFormat, ReportState};
use serde::{Deserialize, Serialize};

/// Day-of-month sentinel meaning "the last day of the month".
pub const LAST_DAY_OF_MONTH: &str = "last";

/// Delimiter between recipients in the wire `recipients` string.
pub const RECIPIENT_DELIMITER: &str = ",";

/// Time range as sent on the wire.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct WireTimeRange {
    #[serde(default)]
    pub from: String,
    #[serde(default)]
    pub to: String,
}

/// Layout options of a report.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct WireOptions {
    #[serde(default)]
    pub layout: Layout,
    #[serde(default)]
    pub orientation: Orientation,
    /// Deprecated report-wide time range, only used by id-keyed legacy reports.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub time_range: Option<WireTimeRange>,
}

/// Schedule as sent on the wire.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct WireSchedule {
    pub frequency: Frequency,
    #[serde(default)]
    pub time_zone: String,
    /// RFC3339 UTC start date.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub start_date: Option<String>,
    /// RFC3339 UTC end date.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub end_date: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub workdays_only: Option<bool>,
    /// `"last"` or unset.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub day_of_month: Option<String>,
    #[serde(default, skip_serializing_if = "is_zero")]
    pub interval_amount: i64,
    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub interval_frequency: String,
}

impl WireSchedule {
    /// Creates a schedule carrying only frequency and timezone.
    #[must_use]
    pub fn new(frequency: Frequency, time_zone: &str) -> Self {
        Self {
            frequency,
            time_zone: time_zone.to_string(),
            start_date: None,
            end_date: None,
            workdays_only: None,
            day_of_month: None,
            interval_amount: 0,
            interval_frequency: String::new(),
        }
    }
}

/// Reference to a dashboard inside a binding entry.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct WireDashboardRef {
    /// Numeric id, only present on entities read back from the service.
    #[serde(default, skip_serializing_if = "is_zero")]
    pub id: i64,
    #[serde(default)]
    pub uid: String,
    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub name: String,
}

/// One dashboard bound to a report.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct WireDashboard {
    pub dashboard: WireDashboardRef,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub time_range: Option<WireTimeRange>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub report_variables: Option<serde_json::Value>,
}

/// Body of a create or update request.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ReportCommand {
    pub name: String,
    /// Comma-joined recipient list.
    pub recipients: String,
    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub reply_to: String,
    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub message: String,
    #[serde(rename = "enableDashboardURL")]
    pub enable_dashboard_url: bool,
    #[serde(rename = "enableCSV")]
    pub enable_csv: bool,
    pub options: WireOptions,
    pub scale_factor: u8,
    pub state: ReportState,
    pub formats: Vec<ReportFormat>,
    pub schedule: WireSchedule,
    /// Deprecated numeric dashboard id, only used by id-keyed legacy reports.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub dashboard_id: Option<i64>,
    /// Deprecated template variables, only used by id-keyed legacy reports.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub template_vars: Option<serde_json::Value>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub dashboards: Vec<WireDashboard>,
}

/// A report as returned by the service.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct WireReport {
    pub id: i64,
    #[serde(default)]
    pub org_id: i64,
    pub name: String,
    #[serde(default)]
    pub recipients: String,
    #[serde(default)]
    pub reply_to: String,
    #[serde(default)]
    pub message: String,
    #[serde(rename = "enableDashboardURL", default)]
    pub enable_dashboard_url: bool,
    #[serde(rename = "enableCSV", default)]
    pub enable_csv: bool,
    #[serde(default)]
    pub options: WireOptions,
    #[serde(default)]
    pub scale_factor: u8,
    #[serde(default)]
    pub state: ReportState,
    #[serde(default)]
    pub formats: Vec<ReportFormat>,
    pub schedule: WireSchedule,
    #[serde(default, skip_serializing_if = "is_zero")]
    pub dashboard_id: i64,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub template_vars: Option<serde_json::Value>,
    #[serde(default)]
    pub dashboards: Vec<WireDashboard>,
}

impl WireReport {
    /// Builds the entity a service would store for `command`.
    ///
    /// # Arguments
    ///
    /// * `id` - The identifier assigned to the report
    /// * `org_id` - The organization owning the report
    /// * `command` - The accepted create or update body
    #[must_use]
    pub fn from_command(id: i64, org_id: i64, command: &ReportCommand) -> Self {
        Self {
            id,
            org_id,
            name: command.name.clone(),
            recipients: command.recipients.clone(),
            reply_to: command.reply_to.clone(),
            message: command.message.clone(),
            enable_dashboard_url: command.enable_dashboard_url,
            enable_csv: command.enable_csv,
            options: command.options.clone(),
            scale_factor: command.scale_factor,
            state: command.state,
            formats: command.formats.clone(),
            schedule: command.schedule.clone(),
            dashboard_id: command.dashboard_id.unwrap_or_default(),
            template_vars: command.template_vars.clone(),
            dashboards: command.dashboards.clone(),
        }
    }
}

#[allow(clippy::trivially_copy_pass_by_ref)]
const fn is_zero(value: &i64) -> bool {
    *value == 0
}
