// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use crate::{ClientConfig, ClientError, DEFAULT_TIMEOUT, HttpReportTransport};
use grafana_report::TransportError;

fn create_test_transport() -> HttpReportTransport {
    let config: ClientConfig = ClientConfig::new(
        "https://grafana.example.com",
        Some("admin:admin"),
        Some(1),
        DEFAULT_TIMEOUT,
    )
    .unwrap();
    HttpReportTransport::new(config).unwrap()
}

#[test]
fn test_report_urls() {
    let transport: HttpReportTransport = create_test_transport();
    assert_eq!(
        transport.reports_url().unwrap().as_str(),
        "https://grafana.example.com/api/reports"
    );
    assert_eq!(
        transport.report_url(17).unwrap().as_str(),
        "https://grafana.example.com/api/reports/17"
    );
    assert_eq!(transport.config().org_id, Some(1));
}

#[test]
fn test_not_found_status_maps_to_not_found() {
    let err: TransportError = ClientError::Status {
        status: 404,
        body: String::from("{\"message\":\"report not found\"}"),
    }
    .into();
    assert_eq!(err, TransportError::NotFound);
}

#[test]
fn test_other_status_keeps_body() {
    let err: TransportError = ClientError::Status {
        status: 403,
        body: String::from("permission denied"),
    }
    .into();
    assert_eq!(
        err,
        TransportError::Remote {
            status: Some(403),
            message: String::from("permission denied"),
        }
    );
}

#[test]
fn test_json_errors_map_to_remote() {
    let json_err = serde_json::from_str::<serde_json::Value>("{").unwrap_err();
    let err: TransportError = ClientError::from(json_err).into();
    assert!(matches!(err, TransportError::Remote { status: None, .. }));
}
