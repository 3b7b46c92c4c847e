use std::fmt::Display;

use chrono::{DateTime, Local};
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

use crate::errors::AppError;

pub const MIGRATION_CREATOR: &str = "migration_script";
pub const CREATED_AT_FORMAT: &str = "%Y-%m-%d %H:%M:%S";

// Entries written by the admin panel are kept as raw objects so a rewrite
// returns them exactly as they were read.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct AdminStore {
    #[serde(default)]
    pub admins: Vec<Map<String, Value>>,
}

impl AdminStore {
    pub fn find(&self, username: &str) -> Option<&Map<String, Value>> {
        self.admins
            .iter()
            .find(|admin| admin.get("username").and_then(Value::as_str) == Some(username))
    }

    pub fn contains(&self, username: &str) -> bool {
        self.find(username).is_some()
    }

    pub fn push(&mut self, record: &AdminRecord) -> Result<(), AppError> {
        match serde_json::to_value(record)? {
            Value::Object(entry) => {
                self.admins.push(entry);
                Ok(())
            }
            other => {
                tracing::error!("push: record serialized to {:?}", other);
                Err(AppError::Serialize(<serde_json::Error as serde::ser::Error>::custom(
                    "admin record is not a JSON object",
                )))
            }
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AdminRecord {
    pub username: String,
    pub password_hash: String,
    pub role: Role,
    pub created_by: String,
    pub created_at: String,
    pub active: bool,
}

impl AdminRecord {
    pub fn migrated(username: String, password_hash: String, now: DateTime<Local>) -> Self {
        Self {
            username,
            password_hash,
            role: Role::SuperAdmin,
            created_by: MIGRATION_CREATOR.to_string(),
            created_at: now.format(CREATED_AT_FORMAT).to_string(),
            active: true,
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Role {
    SuperAdmin,
}

impl Role {
    pub fn as_str(&self) -> &'static str {
        match self {
            Role::SuperAdmin => "super_admin",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            Role::SuperAdmin => "Super administrator",
        }
    }
}

impl Display for Role {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}
