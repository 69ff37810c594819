// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use async_trait::async_trait;
use grafana_report_domain::{ReportCommand, WireReport};

/// Failures a transport can report.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TransportError {
    /// The service has no report with the requested id.
    NotFound,
    /// Any other failure, with the HTTP status when there was one.
    Remote {
        status: Option<u16>,
        message: String,
    },
}

impl std::fmt::Display for TransportError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::NotFound => write!(f, "report not found"),
            Self::Remote {
                status: Some(status),
                message,
            } => write!(f, "status {status}: {message}"),
            Self::Remote {
                status: None,
                message,
            } => write!(f, "{message}"),
        }
    }
}

impl std::error::Error for TransportError {}

/// The network side of the report lifecycle.
///
/// Implementations perform exactly one request per call and never retry.
/// `org_id` of `None` means the implementation's default organization.
#[async_trait]
pub trait ReportTransport: Send + Sync {
    /// Creates a report and returns the identifier the service assigned.
    async fn create_report(
        &self,
        org_id: Option<i64>,
        command: &ReportCommand,
    ) -> Result<i64, TransportError>;

    /// Fetches a stored report.
    async fn get_report(
        &self,
        org_id: Option<i64>,
        report_id: i64,
    ) -> Result<WireReport, TransportError>;

    /// Replaces a stored report with `command`.
    async fn update_report(
        &self,
        org_id: Option<i64>,
        report_id: i64,
        command: &ReportCommand,
    ) -> Result<(), TransportError>;

    /// Deletes a stored report.
    async fn delete_report(&self, org_id: Option<i64>, report_id: i64)
    -> Result<(), TransportError>;
}
