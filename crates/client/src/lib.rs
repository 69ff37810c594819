// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! HTTP implementation of `grafana_report::ReportTransport`.

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

mod client;
mod config;
mod errors;

#[cfg(test)]
mod tests;

pub use client::HttpReportTransport;
pub use config::{ClientConfig, Credentials, DEFAULT_TIMEOUT};
pub use errors::ClientError;
