// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use super::helpers::test_now;
use crate::{
    DomainError, canonicalize, end_times_equivalent, format_instant, parse_instant,
    start_times_equivalent, to_canonical_utc,
};
use time::UtcOffset;

#[test]
fn test_to_canonical_utc_keeps_the_instant() {
    let local = parse_instant("schedule.start_time", "2026-02-01T12:00:00+02:00").unwrap();
    let utc = to_canonical_utc(local);

    assert_eq!(utc.offset(), UtcOffset::UTC);
    assert_eq!(utc, local);
    assert_eq!(format_instant(utc).unwrap(), "2026-02-01T10:00:00Z");
}

#[test]
fn test_canonicalize_renders_utc() {
    assert_eq!(
        canonicalize("schedule.start_time", "2026-11-01T09:00:00-07:00").unwrap(),
        "2026-11-01T16:00:00Z"
    );
    assert_eq!(
        canonicalize("schedule.start_time", "2026-11-01T16:00:00Z").unwrap(),
        "2026-11-01T16:00:00Z"
    );
}

#[test]
fn test_canonicalize_rejects_non_rfc3339() {
    let result: Result<String, DomainError> = canonicalize("schedule.end_time", "2026-11-01");
    assert!(matches!(
        result,
        Err(DomainError::InvalidTimestamp {
            field: "schedule.end_time",
            ..
        })
    ));
}

#[test]
fn test_start_times_equivalent_across_offsets() {
    assert!(start_times_equivalent(
        Some("2026-02-01T10:00:00Z"),
        Some("2026-02-01T12:00:00+02:00"),
        test_now(),
    ));
    assert!(!start_times_equivalent(
        Some("2026-02-01T10:00:00Z"),
        Some("2026-02-01T10:00:00+02:00"),
        test_now(),
    ));
}

#[test]
fn test_empty_declared_start_matches_past_stored_start() {
    assert!(start_times_equivalent(
        Some("2026-01-01T00:00:00Z"),
        None,
        test_now()
    ));
    assert!(start_times_equivalent(
        Some("2026-01-01T00:00:00Z"),
        Some(""),
        test_now()
    ));
}

#[test]
fn test_empty_declared_start_differs_from_future_stored_start() {
    assert!(!start_times_equivalent(
        Some("2027-01-01T00:00:00Z"),
        None,
        test_now()
    ));
}

#[test]
fn test_declared_start_differs_from_empty_stored_start() {
    assert!(!start_times_equivalent(
        None,
        Some("2026-01-01T00:00:00Z"),
        test_now()
    ));
    assert!(start_times_equivalent(None, None, test_now()));
}

#[test]
fn test_end_times_have_no_empty_special_case() {
    assert!(!end_times_equivalent(Some("2020-01-01T00:00:00Z"), None));
    assert!(!end_times_equivalent(None, Some("2020-01-01T00:00:00Z")));
    assert!(end_times_equivalent(None, Some("")));
    assert!(end_times_equivalent(
        Some("2026-06-30T22:00:00Z"),
        Some("2026-07-01T00:00:00+02:00")
    ));
}

#[test]
fn test_unparseable_times_only_match_themselves() {
    assert!(end_times_equivalent(Some("soon"), Some("soon")));
    assert!(!end_times_equivalent(Some("soon"), Some("later")));
}
