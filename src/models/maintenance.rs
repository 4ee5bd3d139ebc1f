//! Maintenance record model

use serde::{Deserialize, Serialize};
use validator::Validate;

use super::Entity;

/// Logged service event tied to one asset
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MaintenanceRecord {
    pub id: i64,
    pub asset_id: String,
    /// What was done, e.g. "Hardware repair"
    #[serde(alias = "type")]
    pub activity: String,
    /// ISO date or datetime; assigned by the backend when omitted
    #[serde(default)]
    pub date: Option<String>,
    #[serde(default, alias = "description")]
    pub notes: Option<String>,
    #[serde(default)]
    pub cost: f64,
    #[serde(default)]
    pub technician: Option<String>,
}

impl Entity for MaintenanceRecord {
    fn key(&self) -> String {
        self.id.to_string()
    }
}

/// Create maintenance request
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Validate)]
pub struct NewMaintenance {
    #[validate(length(min = 1, message = "Asset is required"))]
    pub asset_id: String,
    #[validate(length(min = 1, message = "Activity is required"))]
    pub activity: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub date: Option<String>,
    #[validate(range(min = 0.0, message = "Cost cannot be negative"))]
    pub cost: f64,
    pub notes: Option<String>,
    pub technician: Option<String>,
}
