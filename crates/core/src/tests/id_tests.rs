// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use crate::{CoreError, ReportId};

#[test]
fn test_report_id_with_org_round_trips() {
    let id: ReportId = "2:41".parse().unwrap();
    assert_eq!(id.org_id(), Some(2));
    assert_eq!(id.report_id(), 41);
    assert_eq!(id.to_string(), "2:41");
}

#[test]
fn test_bare_report_id_has_no_org() {
    let id: ReportId = "41".parse().unwrap();
    assert_eq!(id.org_id(), None);
    assert_eq!(id.to_string(), "41");
}

#[test]
fn test_or_org_only_fills_missing_org() {
    assert_eq!(
        ReportId::new(None, 5).or_org(Some(9)),
        ReportId::new(Some(9), 5)
    );
    assert_eq!(
        ReportId::new(Some(2), 5).or_org(Some(9)),
        ReportId::new(Some(2), 5)
    );
}

#[test]
fn test_malformed_report_ids_are_rejected() {
    for value in ["", "abc", "1:", ":4", "1:2:3", "0", "-4", "1:x"] {
        let result: Result<ReportId, CoreError> = value.parse();
        assert_eq!(
            result.unwrap_err(),
            CoreError::InvalidReportId(value.to_string()),
            "{value}"
        );
    }
}
