// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use grafana_report::TransportError;

/// Errors raised while configuring or talking to the reporting API.
#[derive(Debug, thiserror::Error)]
pub enum ClientError {
    #[error("Network error: {0}")]
    Network(#[from] reqwest::Error),

    #[error("Invalid URL '{0}': expected an http or https base URL")]
    InvalidUrl(String),

    #[error("Invalid credentials: {0}")]
    InvalidCredentials(String),

    #[error("Invalid JSON: {0}")]
    InvalidJson(#[from] serde_json::Error),

    #[error("Unexpected status {status}: {body}")]
    Status { status: u16, body: String },
}

impl From<ClientError> for TransportError {
    fn from(err: ClientError) -> Self {
        match err {
            ClientError::Status { status: 404, .. } => Self::NotFound,
            ClientError::Status { status, body } => Self::Remote {
                status: Some(status),
                message: body,
            },
            ClientError::Network(inner) => Self::Remote {
                status: inner.status().map(|s| s.as_u16()),
                message: inner.to_string(),
            },
            other => Self::Remote {
                status: None,
                message: other.to_string(),
            },
        }
    }
}
