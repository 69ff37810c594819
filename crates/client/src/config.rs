// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use crate::errors::ClientError;
use reqwest::Url;
use std::time::Duration;

/// Request timeout used when none is configured.
pub const DEFAULT_TIMEOUT: Duration = Duration::from_secs(30);

/// How requests authenticate.
#[derive(Clone, PartialEq, Eq)]
pub enum Credentials {
    /// An API key or service account token, sent as a bearer token.
    Token(String),
    /// A `user:password` pair, sent as basic auth.
    Basic { user: String, password: String },
}

impl Credentials {
    /// Interprets a credential string.
    ///
    /// `user:password` selects basic auth; anything else is a token.
    ///
    /// # Errors
    ///
    /// Returns `ClientError::InvalidCredentials` if the value is empty or
    /// names an empty user.
    pub fn parse(value: &str) -> Result<Self, ClientError> {
        if value.is_empty() {
            return Err(ClientError::InvalidCredentials(String::from(
                "credentials cannot be empty",
            )));
        }
        match value.split_once(':') {
            Some(("", _)) => Err(ClientError::InvalidCredentials(String::from(
                "basic auth user cannot be empty",
            ))),
            Some((user, password)) => Ok(Self::Basic {
                user: user.to_string(),
                password: password.to_string(),
            }),
            None => Ok(Self::Token(value.to_string())),
        }
    }
}

// Keeps secrets out of logs.
impl std::fmt::Debug for Credentials {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Token(_) => write!(f, "Token(***)"),
            Self::Basic { user, .. } => write!(f, "Basic {{ user: {user:?}, password: *** }}"),
        }
    }
}

/// Connection settings for the reporting API.
#[derive(Debug, Clone)]
pub struct ClientConfig {
    pub url: Url,
    pub credentials: Option<Credentials>,
    /// Organization used when a request does not name one.
    pub org_id: Option<i64>,
    pub timeout: Duration,
}

impl ClientConfig {
    /// Validates raw connection settings.
    ///
    /// # Arguments
    ///
    /// * `url` - Base URL of the Grafana instance
    /// * `auth` - Token or `user:password`, if any
    /// * `org_id` - Default organization, if any
    /// * `timeout` - Per-request timeout
    ///
    /// # Errors
    ///
    /// Returns an error if the URL is not an http(s) URL or the credentials
    /// are malformed.
    pub fn new(
        url: &str,
        auth: Option<&str>,
        org_id: Option<i64>,
        timeout: Duration,
    ) -> Result<Self, ClientError> {
        let parsed: Url = Url::parse(url).map_err(|_| ClientError::InvalidUrl(url.to_string()))?;
        if !matches!(parsed.scheme(), "http" | "https") || parsed.cannot_be_a_base() {
            return Err(ClientError::InvalidUrl(url.to_string()));
        }

        Ok(Self {
            url: parsed,
            credentials: auth.map(Credentials::parse).transpose()?,
            org_id,
            timeout,
        })
    }

    /// Builds the URL of an API path below the base URL.
    ///
    /// # Errors
    ///
    /// Returns `ClientError::InvalidUrl` if the joined URL is malformed.
    pub fn endpoint(&self, path: &str) -> Result<Url, ClientError> {
        let base: &str = self.url.as_str().trim_end_matches('/');
        let joined: String = format!("{base}/{}", path.trim_start_matches('/'));
        Url::parse(&joined).map_err(|_| ClientError::InvalidUrl(joined))
    }
}
