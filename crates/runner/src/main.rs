//! Operators Manager Runner - audits the saved roster against the progression rules.
//!
//! Exits non-zero only when a data file cannot be read or parsed; rule
//! violations are reported, not treated as failures.

use std::sync::Arc;

use anyhow::Context;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

mod audit;
mod config;
mod file_source;
mod ports;

use audit::RosterAudit;
use config::RunnerConfig;
use file_source::JsonFileSource;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    load_dotenv_from_repo_root();

    // Initialize logging
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "opsmgr_runner=info,opsmgr_shared=info".into()),
        )
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();

    let config = RunnerConfig::from_env()?;
    tracing::info!(
        master = %config.master_path.display(),
        user = %config.user_path.display(),
        language = %config.language,
        server = %config.server,
        "Starting roster audit"
    );

    let source = Arc::new(JsonFileSource::from_config(&config));
    let audit = RosterAudit::new(source, config.language.clone()).with_date_range(config.date_range());
    let report = audit.run().await.context("Failed to load operator data")?;

    if report.is_clean() {
        tracing::info!("No rule violations found");
    }
    for line in report.lines() {
        println!("{line}");
    }

    let summary = report.summary;
    println!(
        "total={} owned={} completed={} invalid={} unmapped={}",
        summary.total, summary.owned, summary.completed, summary.invalid, summary.unmapped
    );

    Ok(())
}

/// Load `.env.local` then `.env` from the workspace root, if present.
fn load_dotenv_from_repo_root() {
    let repo_root = std::path::Path::new(env!("CARGO_MANIFEST_DIR"))
        .join("..")
        .join("..");

    for filename in [".env.local", ".env"] {
        let path = repo_root.join(filename);
        if path.exists() {
            let _ = dotenvy::from_path(path);
        }
    }
}
