// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Report transport over the Grafana HTTP API.

use crate::config::{ClientConfig, Credentials};
use crate::errors::ClientError;
use async_trait::async_trait;
use grafana_report::{ReportCommand, ReportTransport, TransportError, WireReport};
use reqwest::{Client, Method, RequestBuilder, Response, Url};
use serde::Deserialize;
use tracing::debug;

const REPORTS_PATH: &str = "api/reports";
const ORG_HEADER: &str = "X-Grafana-Org-Id";

#[derive(Debug, Deserialize)]
struct CreatedReport {
    id: i64,
}

/// Talks to `/api/reports` on a Grafana instance.
#[derive(Debug, Clone)]
pub struct HttpReportTransport {
    client: Client,
    config: ClientConfig,
}

impl HttpReportTransport {
    /// Creates a transport for the given connection settings.
    ///
    /// # Errors
    ///
    /// Returns an error if the HTTP client cannot be built.
    pub fn new(config: ClientConfig) -> Result<Self, ClientError> {
        debug!(
            url = %config.url,
            timeout_secs = config.timeout.as_secs(),
            "creating report transport"
        );
        let client: Client = Client::builder()
            .timeout(config.timeout)
            .user_agent(concat!("grafana-report/", env!("CARGO_PKG_VERSION")))
            .build()?;
        Ok(Self { client, config })
    }

    /// Returns the connection settings.
    #[must_use]
    pub const fn config(&self) -> &ClientConfig {
        &self.config
    }

    /// URL of the report collection.
    ///
    /// # Errors
    ///
    /// Returns an error if the URL cannot be built.
    pub fn reports_url(&self) -> Result<Url, ClientError> {
        self.config.endpoint(REPORTS_PATH)
    }

    /// URL of a single report.
    ///
    /// # Errors
    ///
    /// Returns an error if the URL cannot be built.
    pub fn report_url(&self, report_id: i64) -> Result<Url, ClientError> {
        self.config.endpoint(&format!("{REPORTS_PATH}/{report_id}"))
    }

    fn request(&self, method: Method, url: Url, org_id: Option<i64>) -> RequestBuilder {
        debug!(%method, %url, ?org_id, "sending request");
        let mut request: RequestBuilder = self.client.request(method, url);
        request = match &self.config.credentials {
            Some(Credentials::Token(token)) => request.bearer_auth(token),
            Some(Credentials::Basic { user, password }) => {
                request.basic_auth(user, Some(password))
            }
            None => request,
        };
        if let Some(org_id) = org_id.or(self.config.org_id) {
            request = request.header(ORG_HEADER, org_id.to_string());
        }
        request
    }

    async fn send(request: RequestBuilder) -> Result<Response, ClientError> {
        let response: Response = request.send().await?;
        let status = response.status();
        debug!(status = status.as_u16(), "received response");
        if status.is_success() {
            return Ok(response);
        }
        let body: String = response.text().await.unwrap_or_default();
        Err(ClientError::Status {
            status: status.as_u16(),
            body,
        })
    }

    async fn create(&self, org_id: Option<i64>, command: &ReportCommand) -> Result<i64, ClientError> {
        let request: RequestBuilder = self
            .request(Method::POST, self.reports_url()?, org_id)
            .json(command);
        let body: String = Self::send(request).await?.text().await?;
        let created: CreatedReport = serde_json::from_str(&body)?;
        Ok(created.id)
    }

    async fn get(&self, org_id: Option<i64>, report_id: i64) -> Result<WireReport, ClientError> {
        let request: RequestBuilder =
            self.request(Method::GET, self.report_url(report_id)?, org_id);
        let body: String = Self::send(request).await?.text().await?;
        Ok(serde_json::from_str(&body)?)
    }

    async fn update(
        &self,
        org_id: Option<i64>,
        report_id: i64,
        command: &ReportCommand,
    ) -> Result<(), ClientError> {
        let request: RequestBuilder = self
            .request(Method::PUT, self.report_url(report_id)?, org_id)
            .json(command);
        Self::send(request).await?;
        Ok(())
    }

    async fn delete(&self, org_id: Option<i64>, report_id: i64) -> Result<(), ClientError> {
        let request: RequestBuilder =
            self.request(Method::DELETE, self.report_url(report_id)?, org_id);
        Self::send(request).await?;
        Ok(())
    }
}

#[async_trait]
impl ReportTransport for HttpReportTransport {
    async fn create_report(
        &self,
        org_id: Option<i64>,
        command: &ReportCommand,
    ) -> Result<i64, TransportError> {
        Ok(self.create(org_id, command).await?)
    }

    async fn get_report(
        &self,
        org_id: Option<i64>,
        report_id: i64,
    ) -> Result<WireReport, TransportError> {
        Ok(self.get(org_id, report_id).await?)
    }

    async fn update_report(
        &self,
        org_id: Option<i64>,
        report_id: i64,
        command: &ReportCommand,
    ) -> Result<(), TransportError> {
        Ok(self.update(org_id, report_id, command).await?)
    }

    async fn delete_report(
        &self,
        org_id: Option<i64>,
        report_id: i64,
    ) -> Result<(), TransportError> {
        Ok(self.delete(org_id, report_id).await?)
    }
}
