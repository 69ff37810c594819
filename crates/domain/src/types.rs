// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Declarative report configuration as authored by the user.

use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;

/// Timezone applied to schedules that do not declare one.
pub const DEFAULT_TIMEZONE: &str = "GMT";

/// Scale factor applied when none is declared.
pub const DEFAULT_SCALE_FACTOR: u8 = 2;

/// How often a report is sent.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Frequency {
    /// The report is never sent automatically.
    Never,
    /// The report is sent a single time.
    Once,
    /// Every hour.
    Hourly,
    /// Every day.
    Daily,
    /// Every week.
    Weekly,
    /// Every month.
    Monthly,
    /// At a user-defined interval (see `custom_interval`).
    Custom,
}

impl Frequency {
    /// Converts this frequency to its wire string.
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Never => "never",
            Self::Once => "once",
            Self::Hourly => "hourly",
            Self::Daily => "daily",
            Self::Weekly => "weekly",
            Self::Monthly => "monthly",
            Self::Custom => "custom",
        }
    }

    /// Returns whether `workdays_only` is transmitted for this frequency.
    #[must_use]
    pub const fn allows_workdays_only(&self) -> bool {
        matches!(self, Self::Hourly | Self::Daily | Self::Custom)
    }

    /// Returns whether a start time is transmitted for this frequency.
    #[must_use]
    pub const fn allows_start_time(&self) -> bool {
        !matches!(self, Self::Never)
    }

    /// Returns whether an end time may be declared for this frequency.
    #[must_use]
    pub const fn allows_end_time(&self) -> bool {
        !matches!(self, Self::Never | Self::Once)
    }
}

impl std::fmt::Display for Frequency {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Page layout of the rendered report.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Layout {
    /// Panels keep their dashboard grid positions.
    #[default]
    Grid,
    /// One panel per row.
    Simple,
}

impl Layout {
    /// Converts this layout to its wire string.
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Grid => "grid",
            Self::Simple => "simple",
        }
    }
}

/// Page orientation of the rendered report.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Orientation {
    Portrait,
    #[default]
    Landscape,
}

impl Orientation {
    /// Converts this orientation to its wire string.
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Portrait => "portrait",
            Self::Landscape => "landscape",
        }
    }
}

/// Attachment kinds generated for a report.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ReportFormat {
    Pdf,
    Csv,
    Image,
}

impl ReportFormat {
    /// Converts this format to its wire string.
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Pdf => "pdf",
            Self::Csv => "csv",
            Self::Image => "image",
        }
    }
}

/// Delivery state of a report.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ReportState {
    /// Saved but not sent.
    Draft,
    /// Sent according to its schedule.
    #[default]
    Scheduled,
    /// Temporarily not sent.
    Paused,
}

impl ReportState {
    /// Converts this state to its wire string.
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Draft => "draft",
            Self::Scheduled => "scheduled",
            Self::Paused => "paused",
        }
    }
}

/// A dashboard time range, e.g. `now-1h` to `now`.
///
/// Both ends must be set together; a one-sided range is rejected before
/// anything is sent.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct TimeRange {
    /// Start of the time range.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub from: Option<String>,
    /// End of the time range.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub to: Option<String>,
}

impl TimeRange {
    /// Creates a complete time range.
    #[must_use]
    pub fn new(from: &str, to: &str) -> Self {
        Self {
            from: Some(from.to_string()),
            to: Some(to.to_string()),
        }
    }

    /// Returns whether neither end is set (empty strings count as unset).
    #[must_use]
    pub fn is_empty(&self) -> bool {
        is_blank(self.from.as_deref()) && is_blank(self.to.as_deref())
    }

    /// Returns whether exactly one end is set.
    #[must_use]
    pub fn is_partial(&self) -> bool {
        is_blank(self.from.as_deref()) != is_blank(self.to.as_deref())
    }
}

/// One entry of the `dashboards` list.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DashboardBinding {
    /// Dashboard UID.
    pub uid: String,
    /// Time range applied to this dashboard.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub time_range: Option<TimeRange>,
    /// Report variables passed through untouched.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub report_variables: Option<serde_json::Value>,
}

impl DashboardBinding {
    /// Creates a binding for the given dashboard with no time range or variables.
    #[must_use]
    pub fn new(uid: &str) -> Self {
        Self {
            uid: uid.to_string(),
            time_range: None,
            report_variables: None,
        }
    }
}

/// Schedule block of a report.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Schedule {
    /// How often the report is sent.
    pub frequency: Frequency,
    /// RFC3339 start time. Empty means "at creation time" on the remote side.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub start_time: Option<String>,
    /// RFC3339 end time. Empty means "indefinitely".
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub end_time: Option<String>,
    /// Send only on work days. Only hourly, daily and custom honour it.
    #[serde(default)]
    pub workdays_only: bool,
    /// `<number> <unit>` interval. Only custom honours it.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub custom_interval: Option<String>,
    /// Send on the last day of the month. Only monthly honours it.
    #[serde(default)]
    pub last_day_of_month: bool,
    /// IANA timezone the schedule is evaluated in.
    #[serde(default = "default_timezone")]
    pub timezone: String,
}

impl Schedule {
    /// Creates a schedule with the given frequency and every other field defaulted.
    #[must_use]
    pub fn new(frequency: Frequency) -> Self {
        Self {
            frequency,
            start_time: None,
            end_time: None,
            workdays_only: false,
            custom_interval: None,
            last_day_of_month: false,
            timezone: default_timezone(),
        }
    }
}

/// A scheduled report as declared by the user.
///
/// Carries both dashboard schema generations: the deprecated singular
/// `dashboard_id`/`dashboard_uid`/`time_range`/`template_vars` fields and the
/// current `dashboards` list. See [`crate::DashboardSource`] for how the two
/// are reconciled.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ReportConfig {
    /// Name of the report.
    pub name: String,
    /// Recipient email addresses, in order.
    pub recipients: Vec<String>,
    /// Reply-to email address.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub reply_to: Option<String>,
    /// Message sent with the report.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,
    /// Include a link to the dashboard.
    #[serde(default = "default_true")]
    pub include_dashboard_link: bool,
    /// Deprecated: include CSV data of table panels. Use `formats` instead.
    #[serde(default)]
    pub include_table_csv: bool,
    #[serde(default)]
    pub layout: Layout,
    #[serde(default)]
    pub orientation: Orientation,
    /// Attachment formats. Empty means `{pdf}`.
    #[serde(default, skip_serializing_if = "BTreeSet::is_empty")]
    pub formats: BTreeSet<ReportFormat>,
    #[serde(default)]
    pub state: ReportState,
    /// Zoom factor, 1 to 3.
    #[serde(default = "default_scale_factor")]
    pub scale_factor: u8,
    /// Deprecated numeric dashboard identity.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub dashboard_id: Option<i64>,
    /// Deprecated dashboard UID identity.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub dashboard_uid: Option<String>,
    /// Deprecated report-wide time range.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub time_range: Option<TimeRange>,
    /// Deprecated template variables, passed through untouched.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub template_vars: Option<serde_json::Value>,
    pub schedule: Schedule,
    /// Dashboards sent in the report.
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub dashboards: Vec<DashboardBinding>,
}

impl ReportConfig {
    /// Creates a report with the declared defaults and no dashboard identity.
    #[must_use]
    pub fn new(name: &str, recipients: Vec<String>, schedule: Schedule) -> Self {
        Self {
            name: name.to_string(),
            recipients,
            reply_to: None,
            message: None,
            include_dashboard_link: true,
            include_table_csv: false,
            layout: Layout::default(),
            orientation: Orientation::default(),
            formats: BTreeSet::new(),
            state: ReportState::default(),
            scale_factor: DEFAULT_SCALE_FACTOR,
            dashboard_id: None,
            dashboard_uid: None,
            time_range: None,
            template_vars: None,
            schedule,
            dashboards: Vec::new(),
        }
    }
}

pub(crate) fn is_blank(value: Option<&str>) -> bool {
    value.is_none_or(str::is_empty)
}

const fn default_true() -> bool {
    true
}

const fn default_scale_factor() -> u8 {
    DEFAULT_SCALE_FACTOR
}

fn default_timezone() -> String {
    String::from(DEFAULT_TIMEZONE)
}
