use std::{error::Error, path::Path};

use crate::{errors::AppError, services::migration_service::MigrationOutcome};

const RULE_WIDTH: usize = 60;

pub fn header() -> String {
    let rule = "=".repeat(RULE_WIDTH);
    format!("{rule}\nAdministrator account migration\n{rule}\n")
}

pub fn render(outcome: &MigrationOutcome, store_path: &Path) -> String {
    let path = store_path.display();
    let rule = "=".repeat(RULE_WIDTH);
    match outcome {
        MigrationOutcome::Created(record) => format!(
            "{rule}\nMIGRATION COMPLETED SUCCESSFULLY\n{rule}\n\n\
             Account '{}' added to {path}\n\
             Role: {} ({})\n\n\
             Next steps:\n\
             1. Log in to the admin panel with the existing credentials\n\
             2. Add more administrators from the 'Administrators' menu\n\
             3. (Optional) Remove ADMIN_USERNAME and ADMIN_PASSWORD_HASH from the environment\n\n\
             NOTE: accounts not found in {path} are still checked\n\
             against the environment variables by the admin panel.\n",
            record.username,
            record.role.label(),
            record.role,
        ),
        MigrationOutcome::AlreadyExists { username } => {
            format!("Administrator '{username}' already exists in {path}\nNo migration needed.\n")
        }
        MigrationOutcome::Failed(err) => render_failure(err),
    }
}

fn render_failure(err: &AppError) -> String {
    if err.is_unexpected() {
        let mut lines = vec![format!("UNEXPECTED ERROR [{}]: {err}", err.code())];
        let mut source = err.source();
        while let Some(cause) = source {
            lines.push(format!("  caused by: {cause}"));
            source = cause.source();
        }
        lines.push(format!("  debug: {err:?}"));
        return lines.join("\n") + "\n";
    }
    let hint = match err {
        AppError::MissingCredentials { .. } => {
            "Set ADMIN_USERNAME and ADMIN_PASSWORD_HASH before running the migration.\nMigration not possible."
        }
        _ => "The admin store was not modified.",
    };
    format!("ERROR: {err}\n{hint}\n")
}
