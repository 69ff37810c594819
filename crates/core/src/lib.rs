// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Create, read, update, delete and import of scheduled reports.
//!
//! The reconciliation rules live in `grafana_report_domain`; this crate
//! sequences them around a [`ReportTransport`] and classifies failures.

#![deny(
    clippy::pedantic,
    clippy::cargo,
    clippy::nursery,
    clippy::style,
    clippy::correctness,
    clippy::all,
    clippy::suspicious,
    clippy::complexity,
    clippy::perf,
    clippy::unwrap_used,
    clippy::expect_used
)]

mod error;
mod id;
mod lifecycle;
mod transport;

#[cfg(test)]
mod tests;

pub use error::CoreError;
pub use id::ReportId;
pub use lifecycle::{ReportLifecycle, ReportRecord, plan_report};
pub use transport::{ReportTransport, TransportError};

// Re-export the declarative model so callers need a single dependency
pub use grafana_report_domain::{
    DashboardBinding, DomainError, FieldDrift, Frequency, Layout, Orientation, ReportCommand,
    ReportConfig, ReportFormat, ReportState, Schedule, TimeRange, WireReport,
};
