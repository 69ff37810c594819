// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use crate::error::CoreError;
use std::str::FromStr;

/// Identifies a stored report, optionally scoped to an organization.
///
/// The text form is `<org_id>:<report_id>`. A bare `<report_id>` leaves the
/// organization to the transport's default.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct ReportId {
    org_id: Option<i64>,
    report_id: i64,
}

impl ReportId {
    /// Creates a new report identifier.
    ///
    /// # Arguments
    ///
    /// * `org_id` - The owning organization, if known
    /// * `report_id` - The identifier assigned by the service
    #[must_use]
    pub const fn new(org_id: Option<i64>, report_id: i64) -> Self {
        Self { org_id, report_id }
    }

    /// Returns the owning organization, if known.
    #[must_use]
    pub const fn org_id(&self) -> Option<i64> {
        self.org_id
    }

    /// Returns the identifier assigned by the service.
    #[must_use]
    pub const fn report_id(&self) -> i64 {
        self.report_id
    }

    /// Fills in the organization from `fallback` when this id has none.
    #[must_use]
    pub const fn or_org(self, fallback: Option<i64>) -> Self {
        match self.org_id {
            Some(_) => self,
            None => Self::new(fallback, self.report_id),
        }
    }
}

impl std::fmt::Display for ReportId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self.org_id {
            Some(org_id) => write!(f, "{org_id}:{}", self.report_id),
            None => write!(f, "{}", self.report_id),
        }
    }
}

impl FromStr for ReportId {
    type Err = CoreError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let invalid = || CoreError::InvalidReportId(s.to_string());
        let parse = |part: &str| -> Result<i64, CoreError> {
            let value: i64 = part.parse().map_err(|_| invalid())?;
            if value <= 0 {
                return Err(invalid());
            }
            Ok(value)
        };

        match s.split_once(':') {
            Some((org, report)) => Ok(Self::new(Some(parse(org)?), parse(report)?)),
            None => Ok(Self::new(None, parse(s)?)),
        }
    }
}
