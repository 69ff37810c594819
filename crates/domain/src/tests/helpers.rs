// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use crate::{
    DashboardBinding, Frequency, ReportConfig, ReportFormat, Schedule, TimeRange, WireReport,
    build_wire_command,
};
use time::OffsetDateTime;
use time::macros::datetime;

pub fn test_now() -> OffsetDateTime {
    datetime!(2026-10-17 12:00 UTC)
}

pub fn create_test_schedule(frequency: Frequency) -> Schedule {
    Schedule {
        start_time: Some(String::from("2026-01-05T08:00:00Z")),
        ..Schedule::new(frequency)
    }
}

/// A report in the legacy uid form with every optional field populated.
pub fn create_test_report() -> ReportConfig {
    let mut schedule: Schedule = create_test_schedule(Frequency::Daily);
    schedule.end_time = Some(String::from("2026-12-31T08:00:00Z"));
    schedule.workdays_only = true;
    schedule.timezone = String::from("Europe/Paris");

    let mut report: ReportConfig = ReportConfig::new(
        "Weekly numbers",
        vec![
            String::from("alice@example.com"),
            String::from("bob@example.com"),
        ],
        schedule,
    );
    report.reply_to = Some(String::from("ops@example.com"));
    report.message = Some(String::from("Numbers for the week"));
    report.formats = [ReportFormat::Pdf, ReportFormat::Csv].into_iter().collect();
    report.dashboard_uid = Some(String::from("dash-uid"));
    report.time_range = Some(TimeRange::new("now-7d", "now"));
    report.template_vars = Some(serde_json::json!({ "env": ["prod"] }));
    report
}

/// A report in the list form with two bindings.
pub fn create_test_list_report() -> ReportConfig {
    let mut report: ReportConfig = ReportConfig::new(
        "Service health",
        vec![String::from("alice@example.com")],
        create_test_schedule(Frequency::Weekly),
    );
    report.dashboards = vec![
        DashboardBinding {
            time_range: Some(TimeRange::new("now-1h", "now")),
            ..DashboardBinding::new("first")
        },
        DashboardBinding::new("second"),
    ];
    report
}

/// Builds the command for `report` and returns what the service would store.
pub fn stored(report: &ReportConfig) -> WireReport {
    let command = build_wire_command(report).unwrap();
    WireReport::from_command(7, 1, &command)
}
