use chrono::Local;

use crate::{
    config::MigrationConfig,
    errors::AppError,
    models::admin::AdminRecord,
    repositories::admin_repo::{ensure_store, load_store, save_store},
};

#[derive(Debug)]
pub enum MigrationOutcome {
    Created(AdminRecord),
    AlreadyExists { username: String },
    Failed(AppError),
}

impl MigrationOutcome {
    pub fn is_success(&self) -> bool {
        !matches!(self, MigrationOutcome::Failed(_))
    }
}

impl From<Result<MigrationOutcome, AppError>> for MigrationOutcome {
    fn from(value: Result<MigrationOutcome, AppError>) -> Self {
        value.unwrap_or_else(MigrationOutcome::Failed)
    }
}

pub fn migrate(config: &MigrationConfig) -> MigrationOutcome {
    try_migrate(config).into()
}

fn try_migrate(config: &MigrationConfig) -> Result<MigrationOutcome, AppError> {
    let path = config.store_path.as_path();
    if ensure_store(path)? {
        tracing::info!("Created new admin store {}", path.display());
    } else {
        tracing::warn!("Admin store {} already exists", path.display());
    }

    let mut store = load_store(path)?;
    tracing::debug!("Loaded {} admin record(s)", store.admins.len());

    if store.contains(&config.username) {
        tracing::info!(
            "Administrator {} already exists in {}",
            config.username,
            path.display()
        );
        return Ok(MigrationOutcome::AlreadyExists {
            username: config.username.clone(),
        });
    }

    let record = AdminRecord::migrated(
        config.username.clone(),
        config.password_hash.clone(),
        Local::now(),
    );
    store.push(&record)?;
    save_store(path, &store)?;
    tracing::info!(
        "Added administrator {} with role {}",
        record.username,
        record.role
    );
    Ok(MigrationOutcome::Created(record))
}
