use std::{env, path::PathBuf};

use crate::errors::AppError;

pub const USERNAME_VAR: &str = "ADMIN_USERNAME";
pub const PASSWORD_HASH_VAR: &str = "ADMIN_PASSWORD_HASH";
pub const STORE_PATH_VAR: &str = "ADMINS_FILE";
pub const DEFAULT_STORE_PATH: &str = "admins.json";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MigrationConfig {
    pub username: String,
    pub password_hash: String,
    pub store_path: PathBuf,
}

impl MigrationConfig {
    pub fn from_env() -> Result<Self, AppError> {
        Self::from_lookup(|key| env::var(key).ok())
    }

    pub fn from_lookup<F>(lookup: F) -> Result<Self, AppError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let non_empty = |key: &str| lookup(key).filter(|value| !value.is_empty());
        let username = non_empty(USERNAME_VAR);
        let password_hash = non_empty(PASSWORD_HASH_VAR);
        let store_path = non_empty(STORE_PATH_VAR)
            .map(PathBuf::from)
            .unwrap_or_else(|| PathBuf::from(DEFAULT_STORE_PATH));

        match (username, password_hash) {
            (Some(username), Some(password_hash)) => Ok(Self {
                username,
                password_hash,
                store_path,
            }),
            (username, password_hash) => {
                let mut missing = Vec::new();
                if username.is_none() {
                    missing.push(USERNAME_VAR);
                }
                if password_hash.is_none() {
                    missing.push(PASSWORD_HASH_VAR);
                }
                Err(AppError::MissingCredentials { missing })
            }
        }
    }
}
