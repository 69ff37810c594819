// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use super::helpers::{create_test_list_report, create_test_report};
use crate::{
    DomainError, ReportConfig, TimeRange, validate_email, validate_report_config,
    validate_scale_factor, validate_timezone,
};

#[test]
fn test_validate_report_config_accepts_valid_reports() {
    assert!(validate_report_config(&create_test_report()).is_ok());
    assert!(validate_report_config(&create_test_list_report()).is_ok());
}

#[test]
fn test_validate_report_config_rejects_empty_name() {
    let mut report: ReportConfig = create_test_report();
    report.name = String::new();
    assert_eq!(validate_report_config(&report), Err(DomainError::EmptyName));
}

#[test]
fn test_validate_report_config_rejects_missing_recipients() {
    let mut report: ReportConfig = create_test_report();
    report.recipients.clear();
    assert_eq!(
        validate_report_config(&report),
        Err(DomainError::MissingRecipients)
    );
}

#[test]
fn test_validate_report_config_rejects_bad_recipient() {
    let mut report: ReportConfig = create_test_report();
    report.recipients.push(String::from("not-an-address"));
    assert_eq!(
        validate_report_config(&report),
        Err(DomainError::InvalidEmail {
            field: String::from("recipients.2"),
            value: String::from("not-an-address"),
        })
    );
}

#[test]
fn test_validate_report_config_rejects_bad_reply_to() {
    let mut report: ReportConfig = create_test_report();
    report.reply_to = Some(String::from("ops@localhost"));
    assert!(matches!(
        validate_report_config(&report),
        Err(DomainError::InvalidEmail { ref field, .. }) if field == "reply_to"
    ));
}

#[test]
fn test_validate_report_config_ignores_empty_reply_to() {
    let mut report: ReportConfig = create_test_report();
    report.reply_to = Some(String::new());
    assert!(validate_report_config(&report).is_ok());
}

#[test]
fn test_validate_email() {
    assert!(validate_email("recipients.0", "alice@example.com").is_ok());
    assert!(validate_email("recipients.0", "a.b+c@mail.example.org").is_ok());
    assert!(validate_email("recipients.0", "alice").is_err());
    assert!(validate_email("recipients.0", "@example.com").is_err());
    assert!(validate_email("recipients.0", "alice@example").is_err());
}

#[test]
fn test_validate_scale_factor_bounds() {
    assert_eq!(validate_scale_factor(0), Err(DomainError::InvalidScaleFactor(0)));
    assert!(validate_scale_factor(1).is_ok());
    assert!(validate_scale_factor(3).is_ok());
    assert_eq!(validate_scale_factor(4), Err(DomainError::InvalidScaleFactor(4)));
}

#[test]
fn test_validate_timezone() {
    assert!(validate_timezone("GMT").is_ok());
    assert!(validate_timezone("America/Los_Angeles").is_ok());
    assert_eq!(
        validate_timezone("Mars/Olympus_Mons"),
        Err(DomainError::InvalidTimezone(String::from("Mars/Olympus_Mons")))
    );
}

#[test]
fn test_validate_report_config_rejects_bad_timestamps() {
    let mut report: ReportConfig = create_test_report();
    report.schedule.start_time = Some(String::from("next monday"));
    assert!(matches!(
        validate_report_config(&report),
        Err(DomainError::InvalidTimestamp {
            field: "schedule.start_time",
            ..
        })
    ));

    let mut report: ReportConfig = create_test_report();
    report.schedule.end_time = Some(String::from("2026-12-31 08:00"));
    assert!(matches!(
        validate_report_config(&report),
        Err(DomainError::InvalidTimestamp {
            field: "schedule.end_time",
            ..
        })
    ));
}

#[test]
fn test_validate_report_config_rejects_partial_time_ranges() {
    let mut report: ReportConfig = create_test_report();
    report.time_range = Some(TimeRange {
        from: None,
        to: Some(String::from("now")),
    });
    assert_eq!(
        validate_report_config(&report),
        Err(DomainError::IncompleteTimeRange {
            field: String::from("time_range")
        })
    );

    let mut report: ReportConfig = create_test_list_report();
    report.dashboards[0].time_range = Some(TimeRange {
        from: Some(String::from("now-1h")),
        to: Some(String::new()),
    });
    assert_eq!(
        validate_report_config(&report),
        Err(DomainError::IncompleteTimeRange {
            field: String::from("dashboards.0.time_range")
        })
    );
}

#[test]
fn test_validate_report_config_rejects_empty_binding_uid() {
    let mut report: ReportConfig = create_test_list_report();
    report.dashboards[1].uid = String::new();
    assert_eq!(
        validate_report_config(&report),
        Err(DomainError::EmptyDashboardUid { index: 1 })
    );
}

#[test]
fn test_report_config_deserializes_with_defaults() {
    let report: ReportConfig = serde_json::from_str(
        r#"{
            "name": "From file",
            "recipients": ["alice@example.com"],
            "dashboard_uid": "abc",
            "schedule": { "frequency": "weekly" }
        }"#,
    )
    .unwrap();

    assert!(report.include_dashboard_link);
    assert!(!report.include_table_csv);
    assert_eq!(report.scale_factor, 2);
    assert_eq!(report.schedule.timezone, "GMT");
    assert!(report.formats.is_empty());
    assert!(validate_report_config(&report).is_ok());
}

#[test]
fn test_validate_email_accepts_minimal_address() {
    assert_eq!(validate_email("reply_to", "a@b.c"), Ok(()));
    assert_eq!(
        validate_email("reply_to", "a@b"),
        Err(DomainError::InvalidEmail {
            field: String::from("reply_to"),
            value: String::from("a@b"),
        })
    );
}
