// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use grafana_report_domain::DomainError;

/// Errors that can occur while managing a report.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CoreError {
    /// The declarative configuration was rejected before any network call.
    DomainViolation(DomainError),
    /// The transport reported a failure.
    Remote {
        /// The operation that failed, e.g. `updating`.
        operation: &'static str,
        /// The transport's own description of the failure.
        message: String,
        /// The serialized command that was sent, when it helps debugging.
        request: Option<String>,
    },
    /// A report identifier could not be parsed.
    InvalidReportId(String),
}

impl CoreError {
    /// Returns `true` if the error was raised before anything was sent.
    #[must_use]
    pub const fn is_local(&self) -> bool {
        matches!(self, Self::DomainViolation(_) | Self::InvalidReportId(_))
    }
}

impl std::fmt::Display for CoreError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::DomainViolation(err) => write!(f, "Invalid report configuration: {err}"),
            Self::Remote {
                operation,
                message,
                request: Some(request),
            } => write!(
                f,
                "error {operation} the following report:\n{request}\n{message}"
            ),
            Self::Remote {
                operation,
                message,
                request: None,
            } => write!(f, "error {operation} report: {message}"),
            Self::InvalidReportId(value) => write!(
                f,
                "Invalid report id '{value}': expected `<org_id>:<report_id>` or `<report_id>`"
            ),
        }
    }
}

impl std::error::Error for CoreError {}

impl From<DomainError> for CoreError {
    fn from(err: DomainError) -> Self {
        Self::DomainViolation(err)
    }
}
