// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Lifecycle operations over a [`ReportTransport`].
//!
//! Every write is followed by a read-back, so callers always hold what the
//! service actually stored. A read that finds nothing is not an error: the
//! report is simply absent.

use crate::error::CoreError;
use crate::id::ReportId;
use crate::transport::{ReportTransport, TransportError};
use grafana_report_domain::{
    FieldDrift, ReportCommand, ReportConfig, WireReport, build_wire_command, detect_drift,
    report_from_wire, validate_report_config,
};
use serde::Serialize;
use time::OffsetDateTime;
use tracing::{debug, info, warn};

/// A stored report and its declarative state.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ReportRecord {
    pub id: ReportId,
    pub config: ReportConfig,
}

/// Validates a configuration and builds the command that would be sent.
///
/// # Errors
///
/// Returns `CoreError::DomainViolation` if the configuration is invalid.
pub fn plan_report(config: &ReportConfig) -> Result<ReportCommand, CoreError> {
    validate_report_config(config)?;
    Ok(build_wire_command(config)?)
}

/// Manages reports through a transport.
#[derive(Debug)]
pub struct ReportLifecycle<T> {
    transport: T,
    org_id: Option<i64>,
}

impl<T: ReportTransport> ReportLifecycle<T> {
    /// Creates a lifecycle manager.
    ///
    /// # Arguments
    ///
    /// * `transport` - The transport used for every request
    /// * `org_id` - The organization used for ids that do not name one
    #[must_use]
    pub const fn new(transport: T, org_id: Option<i64>) -> Self {
        Self { transport, org_id }
    }

    /// Returns the underlying transport.
    #[must_use]
    pub const fn transport(&self) -> &T {
        &self.transport
    }

    /// Creates a report and returns what the service stored.
    ///
    /// # Errors
    ///
    /// Returns an error if:
    /// - The configuration is invalid (nothing is sent)
    /// - The service rejects the report
    /// - The report cannot be read back
    pub async fn create(&self, config: &ReportConfig) -> Result<ReportRecord, CoreError> {
        let command: ReportCommand = plan_report(config)?;

        let report_id: i64 = self
            .transport
            .create_report(self.org_id, &command)
            .await
            .map_err(|err| remote("creating", &err, None))?;
        let id: ReportId = ReportId::new(self.org_id, report_id);
        info!(report = %config.name, %id, "created report");

        self.read_back(id, config).await
    }

    /// Reads a report.
    ///
    /// The returned configuration replaces any previous state. `prior` only
    /// decides whether `formats` is surfaced.
    ///
    /// # Errors
    ///
    /// Returns an error if the transport fails for any reason other than the
    /// report being missing, or if the stored schedule is malformed.
    pub async fn read(
        &self,
        id: ReportId,
        prior: Option<&ReportConfig>,
    ) -> Result<Option<ReportRecord>, CoreError> {
        let Some(report) = self.fetch(id).await? else {
            return Ok(None);
        };

        let org_id: Option<i64> = (report.org_id != 0).then_some(report.org_id);
        let record: ReportRecord = ReportRecord {
            id: ReportId::new(org_id, report.id).or_org(id.or_org(self.org_id).org_id()),
            config: report_from_wire(&report, prior)?,
        };
        debug!(id = %record.id, "read report");
        Ok(Some(record))
    }

    /// Reads a report that has no declarative state yet.
    ///
    /// # Errors
    ///
    /// Same as [`ReportLifecycle::read`].
    pub async fn import(&self, id: ReportId) -> Result<Option<ReportRecord>, CoreError> {
        info!(%id, "importing report");
        self.read(id, None).await
    }

    /// Replaces a stored report in full and returns what the service stored.
    ///
    /// # Errors
    ///
    /// Returns an error if the configuration is invalid, if the service rejects
    /// the update, or if the report cannot be read back. A rejected update
    /// carries the serialized command.
    pub async fn update(
        &self,
        id: ReportId,
        config: &ReportConfig,
    ) -> Result<ReportRecord, CoreError> {
        let command: ReportCommand = plan_report(config)?;
        let id: ReportId = id.or_org(self.org_id);

        if let Err(err) = self
            .transport
            .update_report(id.org_id(), id.report_id(), &command)
            .await
        {
            return Err(remote("updating", &err, rejected_request(&command)));
        }
        info!(report = %config.name, %id, "updated report");

        self.read_back(id, config).await
    }

    /// Deletes a report. A report that no longer exists counts as deleted.
    ///
    /// # Errors
    ///
    /// Returns an error if the transport fails for any other reason.
    pub async fn delete(&self, id: ReportId) -> Result<(), CoreError> {
        let id: ReportId = id.or_org(self.org_id);
        match self
            .transport
            .delete_report(id.org_id(), id.report_id())
            .await
        {
            Ok(()) => {
                info!(%id, "deleted report");
                Ok(())
            }
            Err(TransportError::NotFound) => {
                info!(%id, "report already gone");
                Ok(())
            }
            Err(err) => Err(remote("deleting", &err, None)),
        }
    }

    /// Compares a declaration with what is stored.
    ///
    /// Returns `None` when the report no longer exists.
    ///
    /// # Errors
    ///
    /// Same as [`ReportLifecycle::read`].
    pub async fn drift(
        &self,
        id: ReportId,
        declared: &ReportConfig,
        now: OffsetDateTime,
    ) -> Result<Option<Vec<FieldDrift>>, CoreError> {
        let record: Option<ReportRecord> = self.read(id, Some(declared)).await?;
        Ok(record.map(|record| detect_drift(declared, &record.config, now)))
    }

    async fn fetch(&self, id: ReportId) -> Result<Option<WireReport>, CoreError> {
        let id: ReportId = id.or_org(self.org_id);
        match self.transport.get_report(id.org_id(), id.report_id()).await {
            Ok(report) => Ok(Some(report)),
            Err(TransportError::NotFound) => {
                warn!(%id, "report not found, treating it as absent");
                Ok(None)
            }
            Err(err) => Err(remote("reading", &err, None)),
        }
    }

    async fn read_back(
        &self,
        id: ReportId,
        config: &ReportConfig,
    ) -> Result<ReportRecord, CoreError> {
        self.read(id, Some(config))
            .await?
            .ok_or_else(|| CoreError::Remote {
                operation: "reading",
                message: format!("report {id} was not found after it was written"),
                request: None,
            })
    }
}

/// Renders a rejected request for an error message.
///
/// A request that cannot be rendered is left out so the remote failure is
/// still reported.
pub fn rejected_request<S: Serialize>(request: &S) -> Option<String> {
    match serde_json::to_string_pretty(request) {
        Ok(rendered) => Some(rendered),
        Err(err) => {
            warn!(error = %err, "could not serialize the rejected request");
            None
        }
    }
}

fn remote(operation: &'static str, err: &TransportError, request: Option<String>) -> CoreError {
    CoreError::Remote {
        operation,
        message: err.to_string(),
        request,
    }
}
