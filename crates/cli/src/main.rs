// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! `grafana-report` - manage scheduled Grafana reports from JSON files.
//!
//! Connection settings come from flags or the `GRAFANA_URL`,
//! `GRAFANA_AUTH` and `GRAFANA_ORG_ID` environment variables. Log output goes
//! to stderr; `RUST_LOG` overrides the `-v`/`-q` level.

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

mod commands;

use clap::{Parser, Subcommand};
use clap_verbosity_flag::{InfoLevel, Verbosity};
use color_eyre::Result;
use commands::Outcome;
use grafana_report::ReportId;
use std::path::PathBuf;
use tracing::level_filters::LevelFilter;
use tracing_log::AsTrace;
use tracing_subscriber::EnvFilter;

/// Exit code used by `drift` when the stored report differs.
const DRIFT_EXIT_CODE: i32 = 2;

#[tokio::main]
async fn main() -> Result<()> {
    color_eyre::install()?;
    let args: Args = Args::parse();

    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| EnvFilter::new(args.log_level().to_string())),
        )
        .with_writer(std::io::stderr)
        .init();

    match args.command.run(&args.connection).await {
        Ok(Outcome::Clean) => Ok(()),
        Ok(Outcome::Drifted) => std::process::exit(DRIFT_EXIT_CODE),
        Err(err) => {
            tracing::error!("{err}");
            Err(err)
        }
    }
}

/// Manage scheduled Grafana reports
#[derive(Debug, Parser)]
#[command(author, version, about, long_about = None, styles = clap_cargo::style::CLAP_STYLING)]
struct Args {
    #[command(subcommand)]
    command: Command,

    #[command(flatten)]
    connection: ConnectionArgs,

    #[command(flatten)]
    verbosity: Verbosity<InfoLevel>,
}

impl Args {
    fn log_level(&self) -> LevelFilter {
        self.verbosity.log_level_filter().as_trace()
    }
}

/// Where and how to reach Grafana.
#[derive(Debug, Clone, clap::Args)]
struct ConnectionArgs {
    /// Base URL of the Grafana instance
    #[arg(long, env = "GRAFANA_URL", global = true)]
    url: Option<String>,

    /// API token, or `user:password` for basic auth
    #[arg(long, env = "GRAFANA_AUTH", global = true, hide_env_values = true)]
    auth: Option<String>,

    /// Organization used for ids without an `<org_id>:` prefix
    #[arg(long, env = "GRAFANA_ORG_ID", global = true)]
    org_id: Option<i64>,

    /// Per-request timeout in seconds
    #[arg(long, default_value_t = 30, global = true)]
    timeout_secs: u64,
}

#[derive(Clone, Debug, Subcommand)]
enum Command {
    /// Validate a report file and print the request it would send
    #[command(visible_alias = "p")]
    Plan {
        /// Path to the report JSON file
        #[arg(short, long)]
        config: PathBuf,
    },

    /// Create a report, or replace an existing one when `--id` is given
    #[command(visible_alias = "a")]
    Apply {
        /// Path to the report JSON file
        #[arg(short, long)]
        config: PathBuf,

        /// Report to replace, as `<org_id>:<report_id>` or `<report_id>`
        #[arg(long)]
        id: Option<ReportId>,
    },

    /// Print the stored state of a report
    #[command(visible_alias = "s")]
    Show {
        /// Report to read
        #[arg(long)]
        id: ReportId,

        /// Report file; its `formats` decide whether formats are shown
        #[arg(short, long)]
        config: Option<PathBuf>,
    },

    /// Compare a report file with the stored report
    #[command(visible_alias = "d")]
    Drift {
        /// Path to the report JSON file
        #[arg(short, long)]
        config: PathBuf,

        /// Report to compare against
        #[arg(long)]
        id: ReportId,
    },

    /// Delete a report; a missing report counts as deleted
    Delete {
        /// Report to delete
        #[arg(long)]
        id: ReportId,
    },
}

impl Command {
    async fn run(self, connection: &ConnectionArgs) -> Result<Outcome> {
        match self {
            Self::Plan { config } => commands::plan(&config),
            Self::Apply { config, id } => commands::apply(connection, &config, id).await,
            Self::Show { id, config } => commands::show(connection, id, config.as_deref()).await,
            Self::Drift { config, id } => commands::drift(connection, &config, id).await,
            Self::Delete { id } => commands::delete(connection, id).await,
        }
    }
}
