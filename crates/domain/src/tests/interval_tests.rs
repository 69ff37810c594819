// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use crate::{CUSTOM_INTERVAL_FORMAT, CustomInterval, DomainError, IntervalUnit, parse_custom_interval};

#[test]
fn test_parse_custom_interval_accepts_every_unit() {
    let cases: [(&str, u32, IntervalUnit); 4] = [
        ("1 hours", 1, IntervalUnit::Hours),
        ("3 days", 3, IntervalUnit::Days),
        ("2 weeks", 2, IntervalUnit::Weeks),
        ("12 months", 12, IntervalUnit::Months),
    ];

    for (text, amount, unit) in cases {
        let interval: CustomInterval = parse_custom_interval(text).unwrap();
        assert_eq!(interval.amount(), amount);
        assert_eq!(interval.unit(), unit);
    }
}

#[test]
fn test_parse_custom_interval_reformats_to_input_text() {
    for unit in ["hours", "days", "weeks", "months"] {
        for amount in [0_u32, 1, 7, 30, 4_000_000_000] {
            let text: String = format!("{amount} {unit}");
            let interval: CustomInterval = text.parse().unwrap();
            assert_eq!(interval.to_string(), text);
        }
    }
}

#[test]
fn test_parse_custom_interval_accepts_zero_amount() {
    let interval: CustomInterval = parse_custom_interval("0 days").unwrap();
    assert_eq!(interval.amount(), 0);
}

#[test]
fn test_parse_custom_interval_rejects_wrong_token_count() {
    for text in ["", "3", "days", "3 days later", "3  days", " 3 days", "3 days "] {
        let result: Result<CustomInterval, DomainError> = parse_custom_interval(text);
        assert!(
            matches!(result, Err(DomainError::InvalidCustomInterval { .. })),
            "expected {text:?} to be rejected"
        );
    }
}

#[test]
fn test_parse_custom_interval_rejects_non_numeric_amount() {
    for text in ["three days", "3.5 days", "-3 days", "+3 days", "0x3 days", "99999999999 days"] {
        let result: Result<CustomInterval, DomainError> = parse_custom_interval(text);
        assert!(
            matches!(result, Err(DomainError::InvalidCustomInterval { .. })),
            "expected {text:?} to be rejected"
        );
    }
}

#[test]
fn test_parse_custom_interval_rejects_unknown_unit() {
    for text in ["3 day", "3 Days", "3 DAYS", "3 fortnights", "3 minutes", "3 years"] {
        let result: Result<CustomInterval, DomainError> = parse_custom_interval(text);
        assert!(
            matches!(result, Err(DomainError::InvalidCustomInterval { .. })),
            "expected {text:?} to be rejected"
        );
    }
}

#[test]
fn test_parse_custom_interval_error_describes_grammar() {
    let err: DomainError = parse_custom_interval("every tuesday").unwrap_err();
    assert_eq!(err.to_string(), CUSTOM_INTERVAL_FORMAT);
    assert_eq!(
        err,
        DomainError::InvalidCustomInterval {
            value: String::from("every tuesday")
        }
    );
}
