// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Resolution of which dashboard schema generation a report uses.
//!
//! A report names its dashboards either through the current `dashboards`
//! list or through the deprecated singular fields (`dashboard_uid` or
//! `dashboard_id`, plus `time_range` and `template_vars`). The choice is made
//! once, up front, and every later step works from the resolved
//! [`DashboardSource`].
//!
//! ## Read-back
//!
//! The service returns every binding, but only the zeroth one is folded back,
//! into the singular fields. The `dashboards` list is never rebuilt from a read.

use crate::error::DomainError;
use crate::types::{DashboardBinding, ReportConfig, TimeRange};
use crate::wire::{ReportCommand, WireDashboard, WireDashboardRef, WireReport, WireTimeRange};
use tracing::warn;

/// The authoritative dashboard identity of a report.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DashboardSource {
    /// The current list form. Wins over any legacy field.
    DashboardList(Vec<DashboardBinding>),
    /// Deprecated singular form keyed by UID.
    LegacyByUid {
        uid: String,
        time_range: Option<TimeRange>,
        template_vars: Option<serde_json::Value>,
    },
    /// Deprecated singular form keyed by numeric id. It cannot be expressed as
    /// a binding entry, so it travels in the command's top-level slots.
    LegacyById {
        id: i64,
        time_range: Option<TimeRange>,
        template_vars: Option<serde_json::Value>,
    },
}

impl DashboardSource {
    /// Decides which dashboard fields of `config` are authoritative.
    ///
    /// A non-empty `dashboards` list always wins; legacy fields set alongside
    /// it are ignored with a warning. Otherwise `dashboard_uid` is preferred
    /// over `dashboard_id`.
    ///
    /// # Errors
    ///
    /// Returns `DomainError::MissingDashboard` if the list is empty and neither
    /// legacy identity is set.
    pub fn resolve(config: &ReportConfig) -> Result<Self, DomainError> {
        let legacy_uid: Option<&str> = config.dashboard_uid.as_deref().filter(|u| !u.is_empty());
        let legacy_id: Option<i64> = config.dashboard_id.filter(|id| *id != 0);

        if !config.dashboards.is_empty() {
            if legacy_uid.is_some()
                || legacy_id.is_some()
                || config.time_range.is_some()
                || config.template_vars.is_some()
            {
                warn!(
                    report = %config.name,
                    "dashboards is set; ignoring dashboard_uid, dashboard_id, time_range and template_vars"
                );
            }
            return Ok(Self::DashboardList(config.dashboards.clone()));
        }

        match (legacy_uid, legacy_id) {
            (Some(uid), _) => Ok(Self::LegacyByUid {
                uid: uid.to_string(),
                time_range: config.time_range.clone(),
                template_vars: config.template_vars.clone(),
            }),
            (None, Some(id)) => Ok(Self::LegacyById {
                id,
                time_range: config.time_range.clone(),
                template_vars: config.template_vars.clone(),
            }),
            (None, None) => Err(DomainError::MissingDashboard),
        }
    }

    /// Writes this dashboard identity into a command.
    ///
    /// # Errors
    ///
    /// Returns `DomainError::IncompleteTimeRange` if any time range sets only
    /// one of its ends.
    pub fn apply_to(&self, command: &mut ReportCommand) -> Result<(), DomainError> {
        match self {
            Self::DashboardList(bindings) => {
                command.dashboards = bindings
                    .iter()
                    .enumerate()
                    .map(|(index, binding)| {
                        Ok(WireDashboard {
                            dashboard: dashboard_ref(&binding.uid),
                            time_range: wire_time_range(
                                &format!("dashboards.{index}.time_range"),
                                binding.time_range.as_ref(),
                            )?,
                            report_variables: binding.report_variables.clone(),
                        })
                    })
                    .collect::<Result<Vec<WireDashboard>, DomainError>>()?;
            }
            Self::LegacyByUid {
                uid,
                time_range,
                template_vars,
            } => {
                command.dashboards = vec![WireDashboard {
                    dashboard: dashboard_ref(uid),
                    time_range: wire_time_range("time_range", time_range.as_ref())?,
                    report_variables: template_vars.clone(),
                }];
            }
            Self::LegacyById {
                id,
                time_range,
                template_vars,
            } => {
                command.dashboard_id = Some(*id);
                command.options.time_range = wire_time_range("time_range", time_range.as_ref())?;
                command.template_vars.clone_from(template_vars);
            }
        }
        Ok(())
    }
}

/// The singular dashboard fields reconstructed from a stored report.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct LegacyDashboard {
    pub dashboard_id: Option<i64>,
    pub dashboard_uid: Option<String>,
    pub time_range: Option<TimeRange>,
    pub template_vars: Option<serde_json::Value>,
}

/// Folds the zeroth binding of a stored report back into the singular fields.
///
/// A report without bindings falls back to the deprecated top-level slots.
#[must_use]
pub fn legacy_dashboard_from_wire(report: &WireReport) -> LegacyDashboard {
    report.dashboards.first().map_or_else(
        || LegacyDashboard {
            dashboard_id: (report.dashboard_id != 0).then_some(report.dashboard_id),
            dashboard_uid: None,
            time_range: report.options.time_range.as_ref().and_then(declared_time_range),
            template_vars: report.template_vars.clone(),
        },
        |first| LegacyDashboard {
            dashboard_id: (first.dashboard.id != 0).then_some(first.dashboard.id),
            dashboard_uid: Some(first.dashboard.uid.clone()).filter(|uid| !uid.is_empty()),
            time_range: first.time_range.as_ref().and_then(declared_time_range),
            template_vars: first.report_variables.clone(),
        },
    )
}

fn dashboard_ref(uid: &str) -> WireDashboardRef {
    WireDashboardRef {
        id: 0,
        uid: uid.to_string(),
        name: String::new(),
    }
}

fn wire_time_range(
    field: &str,
    range: Option<&TimeRange>,
) -> Result<Option<WireTimeRange>, DomainError> {
    let Some(range) = range else {
        return Ok(None);
    };
    if range.is_partial() {
        return Err(DomainError::IncompleteTimeRange {
            field: field.to_string(),
        });
    }
    if range.is_empty() {
        return Ok(None);
    }
    Ok(Some(WireTimeRange {
        from: range.from.clone().unwrap_or_default(),
        to: range.to.clone().unwrap_or_default(),
    }))
}

fn declared_time_range(range: &WireTimeRange) -> Option<TimeRange> {
    if range.from.is_empty() {
        return None;
    }
    Some(TimeRange {
        from: Some(range.from.clone()),
        to: Some(range.to.clone()).filter(|to| !to.is_empty()),
    })
}
