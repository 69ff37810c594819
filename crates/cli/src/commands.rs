// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use crate::ConnectionArgs;
use color_eyre::Result;
use color_eyre::eyre::{WrapErr, eyre};
use grafana_report::{
    FieldDrift, ReportCommand, ReportConfig, ReportId, ReportLifecycle, ReportRecord, plan_report,
};
use grafana_report_client::{ClientConfig, HttpReportTransport};
use std::path::Path;
use std::time::Duration;
use time::OffsetDateTime;
use tracing::info;

/// How a command finished, when it did not fail.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Outcome {
    Clean,
    Drifted,
}

pub fn plan(config: &Path) -> Result<Outcome> {
    let report: ReportConfig = load_report(config)?;
    let command: ReportCommand = plan_report(&report)?;
    println!("{}", serde_json::to_string_pretty(&command)?);
    Ok(Outcome::Clean)
}

pub async fn apply(
    connection: &ConnectionArgs,
    config: &Path,
    id: Option<ReportId>,
) -> Result<Outcome> {
    let report: ReportConfig = load_report(config)?;
    let lifecycle: ReportLifecycle<HttpReportTransport> = connect(connection)?;

    let record: ReportRecord = match id {
        Some(id) => lifecycle.update(id, &report).await?,
        None => lifecycle.create(&report).await?,
    };
    info!(id = %record.id, "report applied");
    print_record(&record)?;
    Ok(Outcome::Clean)
}

pub async fn show(
    connection: &ConnectionArgs,
    id: ReportId,
    config: Option<&Path>,
) -> Result<Outcome> {
    let prior: Option<ReportConfig> = config.map(load_report).transpose()?;
    let lifecycle: ReportLifecycle<HttpReportTransport> = connect(connection)?;

    let record: Option<ReportRecord> = match prior {
        Some(prior) => lifecycle.read(id, Some(&prior)).await?,
        None => lifecycle.import(id).await?,
    };
    let record: ReportRecord = record.ok_or_else(|| eyre!("report {id} does not exist"))?;
    print_record(&record)?;
    Ok(Outcome::Clean)
}

pub async fn drift(connection: &ConnectionArgs, config: &Path, id: ReportId) -> Result<Outcome> {
    let report: ReportConfig = load_report(config)?;
    let lifecycle: ReportLifecycle<HttpReportTransport> = connect(connection)?;

    let drifts: Vec<FieldDrift> = lifecycle
        .drift(id, &report, OffsetDateTime::now_utc())
        .await?
        .ok_or_else(|| eyre!("report {id} does not exist"))?;

    if drifts.is_empty() {
        info!(%id, "no drift");
        return Ok(Outcome::Clean);
    }
    for drift in &drifts {
        println!("{drift}");
    }
    Ok(Outcome::Drifted)
}

pub async fn delete(connection: &ConnectionArgs, id: ReportId) -> Result<Outcome> {
    connect(connection)?.delete(id).await?;
    Ok(Outcome::Clean)
}

fn connect(connection: &ConnectionArgs) -> Result<ReportLifecycle<HttpReportTransport>> {
    let url: &str = connection
        .url
        .as_deref()
        .ok_or_else(|| eyre!("no Grafana URL given; set --url or GRAFANA_URL"))?;
    let config: ClientConfig = ClientConfig::new(
        url,
        connection.auth.as_deref(),
        connection.org_id,
        Duration::from_secs(connection.timeout_secs),
    )?;
    let transport: HttpReportTransport = HttpReportTransport::new(config)?;
    Ok(ReportLifecycle::new(transport, connection.org_id))
}

pub fn parse_report(contents: &str) -> Result<ReportConfig> {
    Ok(serde_json::from_str(contents)?)
}

fn load_report(path: &Path) -> Result<ReportConfig> {
    let contents: String = std::fs::read_to_string(path)
        .wrap_err_with(|| format!("failed to read {}", path.display()))?;
    parse_report(&contents).wrap_err_with(|| format!("failed to parse {}", path.display()))
}

fn print_record(record: &ReportRecord) -> Result<()> {
    let output: serde_json::Value = serde_json::json!({
        "id": record.id.to_string(),
        "config": record.config,
    });
    println!("{}", serde_json::to_string_pretty(&output)?);
    Ok(())
}
