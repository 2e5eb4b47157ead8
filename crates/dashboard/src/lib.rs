//! Terminal front end of the fleet dashboard.
//!
//! Parses the command line, builds the query service over the configured store
//! and prints each dashboard section.

pub mod cli;
pub mod commands;
pub mod render;

use std::sync::Arc;

use configs::AppConfig;
use models::db::StoreConfig;
use service::fleet::{FleetQueryService, SeaOrmFleetRepository};
use tracing::info;

use crate::cli::{Cli, Command};
use crate::commands::Dashboard;

/// Execute one command against the store named by `cfg` (or `--db`).
pub async fn run(cli: Cli, cfg: AppConfig) -> anyhow::Result<()> {
    let mut database = cfg.database.clone();
    if let Some(db) = &cli.db {
        database.path = db.display().to_string();
    }
    let store = StoreConfig::from(&database);
    info!(store = %store.path().display(), command = ?cli.command, "dashboard_command");

    let output = match &cli.command {
        Command::Seed { force } => {
            let report = commands::seed_store(&store, *force).await?;
            commands::render_seed(store.path(), &report, cli.format)?
        }
        command => {
            let svc = FleetQueryService::new(Arc::new(SeaOrmFleetRepository::new(store)));
            Dashboard::new(svc, cfg.dashboard.clone(), cli.format).execute(command).await?
        }
    };
    print!("{output}");
    Ok(())
}
