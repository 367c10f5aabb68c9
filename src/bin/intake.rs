//! Command-line front end for the request queue.
//!
//! Usage:
//!
//! ```text
//! intake submit <name> <content>
//! intake queue [--newest-first] --password <secret>
//! intake set-status <id> <status> --password <secret>
//! intake delete <id> --password <secret>
//! ```
//!
//! The store is the `PostgreSQL` database at `INTAKE_DATABASE_URL`.
//! Administrator commands compare `--password` with `INTAKE_ADMIN_SECRET`
//! before touching the queue. Results are written to stdout as JSON.

use clap::{Parser, Subcommand};
use intake::{
    config::IntakeConfig,
    request::{
        adapters::postgres::{PostgresRequestStore, connect_pool},
        domain::RequestId,
        projection::{QueueEntry, QueueSnapshot, StatusCounts},
        ports::RequestStore,
        services::{AdminAccess, AdminAction, QueueAdminService, SubmissionService},
    },
};
use serde::Serialize;
use std::io::{self, Write};
use std::process::ExitCode;
use std::sync::Arc;
use thiserror::Error;
use tracing::{error, info};
use tracing_subscriber::EnvFilter;
use uuid::Uuid;

/// Boxed error type for the main result.
type BoxError = Box<dyn std::error::Error + Send + Sync>;

#[derive(Parser)]
#[command(
    name = "intake",
    about = "Submit requests and triage the request queue",
    version
)]
struct Cli {
    #[command(flatten)]
    config: IntakeConfig,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Submit a new request
    Submit {
        /// Your name or username
        name: String,
        /// Request details
        content: String,
    },
    /// Show the queue with per-status counts
    Queue {
        /// List the most recent submission first
        #[arg(long)]
        newest_first: bool,
        #[command(flatten)]
        admin: AdminArgs,
    },
    /// Move a request to another status
    SetStatus {
        /// Request identifier
        id: Uuid,
        /// One of `pending`, `in_progress`, `completed`
        status: String,
        #[command(flatten)]
        admin: AdminArgs,
    },
    /// Permanently delete a request
    Delete {
        /// Request identifier
        id: Uuid,
        #[command(flatten)]
        admin: AdminArgs,
    },
}

impl Command {
    /// Administrator credentials, for commands that need them.
    const fn admin(&self) -> Option<&AdminArgs> {
        match self {
            Self::Submit { .. } => None,
            Self::Queue { admin, .. }
            | Self::SetStatus { admin, .. }
            | Self::Delete { admin, .. } => Some(admin),
        }
    }
}

#[derive(clap::Args)]
struct AdminArgs {
    /// Administrator password
    #[arg(long, env = "INTAKE_PASSWORD", hide_env_values = true)]
    password: String,
}

/// Errors surfaced to the operator.
#[derive(Debug, Error)]
enum CliError {
    #[error("{notice}")]
    Notice {
        notice: &'static str,
        #[source]
        source: BoxError,
    },
    #[error("Invalid password")]
    AccessDenied,
}

impl CliError {
    fn notice(notice: &'static str, source: impl Into<BoxError>) -> Self {
        Self::Notice {
            notice,
            source: source.into(),
        }
    }
}

#[derive(Serialize)]
struct QueueView<'a> {
    counts: StatusCounts,
    entries: Vec<&'a QueueEntry>,
}

impl<'a> QueueView<'a> {
    fn new(snapshot: &'a QueueSnapshot, newest_first: bool) -> Self {
        let entries = if newest_first {
            snapshot.newest_first().collect()
        } else {
            snapshot.entries().iter().collect()
        };
        Self {
            counts: snapshot.counts(),
            entries,
        }
    }
}

#[tokio::main]
async fn main() -> ExitCode {
    tracing_subscriber::fmt()
        .with_env_filter(log_filter())
        .with_target(false)
        .with_writer(io::stderr)
        .init();

    let cli = Cli::parse();
    match run(cli).await {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            error!(error = %err, "intake command failed");
            ExitCode::FAILURE
        }
    }
}

/// Honours `RUST_LOG` when set and falls back to `info`.
fn log_filter() -> EnvFilter {
    log_filter_from(std::env::var(EnvFilter::DEFAULT_ENV).ok().as_deref())
}

fn log_filter_from(directives: Option<&str>) -> EnvFilter {
    directives
        .and_then(|value| EnvFilter::try_new(value).ok())
        .unwrap_or_else(|| EnvFilter::new("info"))
}

async fn run(cli: Cli) -> Result<(), BoxError> {
    let Cli { config, command } = cli;
    config.validate()?;
    if let Some(admin) = command.admin() {
        authorize(&config, admin)?;
    }
    let (database_url, pool_size) = (config.database_url.clone(), config.pool_size);
    let pool =
        tokio::task::spawn_blocking(move || connect_pool(&database_url, pool_size)).await??;
    let store = Arc::new(PostgresRequestStore::new(pool));

    match command {
        Command::Submit { name, content } => submit(store, name, content).await,
        Command::Queue { newest_first, .. } => {
            let snapshot = QueueAdminService::new(store)
                .fetch_queue()
                .await
                .map_err(|err| CliError::notice(AdminAction::FetchQueue.failure_notice(), err))?;
            write_json(&QueueView::new(&snapshot, newest_first))
        }
        Command::SetStatus { id, status, .. } => {
            let snapshot = QueueAdminService::new(store)
                .set_status_str(RequestId::from_uuid(id), &status)
                .await
                .map_err(|err| CliError::notice(AdminAction::SetStatus.failure_notice(), err))?;
            announce(AdminAction::SetStatus);
            write_json(&QueueView::new(&snapshot, false))
        }
        Command::Delete { id, .. } => {
            let snapshot = QueueAdminService::new(store)
                .delete(RequestId::from_uuid(id))
                .await
                .map_err(|err| CliError::notice(AdminAction::Delete.failure_notice(), err))?;
            announce(AdminAction::Delete);
            write_json(&QueueView::new(&snapshot, false))
        }
    }
}

async fn submit<S: RequestStore>(
    store: Arc<S>,
    name: String,
    content: String,
) -> Result<(), BoxError> {
    let created = SubmissionService::new(store)
        .submit(name, content)
        .await
        .map_err(|err| CliError::notice(err.user_notice(), err))?;
    write_json(&created)
}

fn authorize(config: &IntakeConfig, admin: &AdminArgs) -> Result<(), BoxError> {
    let access = AdminAccess::new(Arc::new(config.admin_gate()?));
    if !access.login(&admin.password).is_granted() {
        return Err(CliError::AccessDenied.into());
    }
    Ok(())
}

fn announce(action: AdminAction) {
    if let Some(notice) = action.success_notice() {
        info!(%action, "{notice}");
    }
}

fn write_json(value: &impl Serialize) -> Result<(), BoxError> {
    let mut stdout = io::stdout().lock();
    serde_json::to_writer_pretty(&mut stdout, value)?;
    writeln!(stdout)?;
    Ok(())
}
