use std::{path::PathBuf, process::ExitCode};

use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use crate::{
    config::{DEFAULT_STORE_PATH, MigrationConfig},
    services::migration_service::{MigrationOutcome, migrate},
};

mod config;
mod errors;
mod models;
mod report;
mod repositories;
mod services;

fn main() -> ExitCode {
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "admin_migrate=info".into()),
        )
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();

    println!("{}", report::header());

    let (outcome, store_path) = match MigrationConfig::from_env() {
        Ok(config) => {
            tracing::info!("Found account: {}", config.username);
            (migrate(&config), config.store_path)
        }
        Err(e) => (MigrationOutcome::Failed(e), PathBuf::from(DEFAULT_STORE_PATH)),
    };

    if let MigrationOutcome::Failed(e) = &outcome {
        tracing::error!("migration failed [{}]: {}", e.code(), e);
    }
    print!("{}", report::render(&outcome, &store_path));

    if outcome.is_success() {
        ExitCode::SUCCESS
    } else {
        ExitCode::FAILURE
    }
}
