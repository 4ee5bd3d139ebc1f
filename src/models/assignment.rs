//! Local-only records: assignments, users, locations and the activity log

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Asset handed to a user at a location; append-only
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Assignment {
    pub asset_id: String,
    pub assignee: String,
    pub location: Option<String>,
    pub date: String,
}

/// User known to the local prototype
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LocalUser {
    pub name: String,
    pub department: Option<String>,
}

/// Human-readable description of a mutating action
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ActivityLogEntry {
    pub text: String,
    pub date: DateTime<Utc>,
}

impl ActivityLogEntry {
    pub fn now(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            date: Utc::now(),
        }
    }
}
