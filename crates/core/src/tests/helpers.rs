// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use crate::{ReportTransport, TransportError};
use async_trait::async_trait;
use grafana_report_domain::{
    Frequency, ReportCommand, ReportConfig, ReportFormat, Schedule, TimeRange, WireReport,
};
use std::collections::BTreeMap;
use std::sync::Mutex;

pub const TEST_ORG: i64 = 3;

#[derive(Default)]
struct StoredReports {
    reports: BTreeMap<i64, WireReport>,
    next_id: i64,
    calls: Vec<String>,
}

/// A transport keeping reports in memory, with optional failure injection.
#[derive(Default)]
pub struct InMemoryTransport {
    state: Mutex<StoredReports>,
    fail_writes: Option<TransportError>,
}

impl InMemoryTransport {
    pub fn failing_writes(err: TransportError) -> Self {
        Self {
            fail_writes: Some(err),
            ..Self::default()
        }
    }

    pub fn calls(&self) -> Vec<String> {
        self.state.lock().unwrap().calls.clone()
    }

    pub fn stored(&self, report_id: i64) -> Option<WireReport> {
        self.state.lock().unwrap().reports.get(&report_id).cloned()
    }

    pub fn insert(&self, report: WireReport) {
        self.state.lock().unwrap().reports.insert(report.id, report);
    }

    fn record(&self, call: String) {
        self.state.lock().unwrap().calls.push(call);
    }
}

#[async_trait]
impl ReportTransport for InMemoryTransport {
    async fn create_report(
        &self,
        org_id: Option<i64>,
        command: &ReportCommand,
    ) -> Result<i64, TransportError> {
        self.record(format!("create {org_id:?}"));
        if let Some(err) = &self.fail_writes {
            return Err(err.clone());
        }
        let mut state = self.state.lock().unwrap();
        state.next_id += 1;
        let id: i64 = state.next_id;
        state.reports.insert(
            id,
            WireReport::from_command(id, org_id.unwrap_or(1), command),
        );
        Ok(id)
    }

    async fn get_report(
        &self,
        org_id: Option<i64>,
        report_id: i64,
    ) -> Result<WireReport, TransportError> {
        self.record(format!("get {org_id:?} {report_id}"));
        self.stored(report_id).ok_or(TransportError::NotFound)
    }

    async fn update_report(
        &self,
        org_id: Option<i64>,
        report_id: i64,
        command: &ReportCommand,
    ) -> Result<(), TransportError> {
        self.record(format!("update {org_id:?} {report_id}"));
        if let Some(err) = &self.fail_writes {
            return Err(err.clone());
        }
        let mut state = self.state.lock().unwrap();
        if !state.reports.contains_key(&report_id) {
            return Err(TransportError::NotFound);
        }
        state.reports.insert(
            report_id,
            WireReport::from_command(report_id, org_id.unwrap_or(1), command),
        );
        Ok(())
    }

    async fn delete_report(
        &self,
        org_id: Option<i64>,
        report_id: i64,
    ) -> Result<(), TransportError> {
        self.record(format!("delete {org_id:?} {report_id}"));
        if let Some(err) = &self.fail_writes {
            return Err(err.clone());
        }
        self.state
            .lock()
            .unwrap()
            .reports
            .remove(&report_id)
            .map(|_| ())
            .ok_or(TransportError::NotFound)
    }
}

pub fn create_test_report() -> ReportConfig {
    let schedule: Schedule = Schedule {
        start_time: Some(String::from("2026-03-02T07:30:00+01:00")),
        workdays_only: true,
        ..Schedule::new(Frequency::Daily)
    };
    let mut report: ReportConfig = ReportConfig::new(
        "Daily usage",
        vec![String::from("team@example.com")],
        schedule,
    );
    report.dashboard_uid = Some(String::from("usage"));
    report.time_range = Some(TimeRange::new("now-24h", "now"));
    report.formats = [ReportFormat::Pdf, ReportFormat::Image].into_iter().collect();
    report
}
