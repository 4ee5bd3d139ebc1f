//! Software license model

use serde::{Deserialize, Serialize};
use validator::Validate;

use super::{enums::LicenseStatus, Entity};

/// Tracked software license, independent of physical assets
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SoftwareLicense {
    pub id: i64,
    pub name: String,
    pub vendor: String,
    pub license_key: String,
    pub purchase_date: String,
    pub expiry_date: String,
    pub cost: f64,
    #[serde(default)]
    pub assigned_to: Option<String>,
    #[serde(default)]
    pub department: Option<String>,
    pub status: LicenseStatus,
}

impl Entity for SoftwareLicense {
    fn key(&self) -> String {
        self.id.to_string()
    }
}

/// Create license request
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Validate)]
pub struct NewLicense {
    #[validate(length(min = 1, message = "Software name is required"))]
    pub name: String,
    #[validate(length(min = 1, message = "Vendor is required"))]
    pub vendor: String,
    #[validate(length(min = 1, message = "License key is required"))]
    pub license_key: String,
    pub purchase_date: String,
    pub expiry_date: String,
    #[validate(range(min = 0.0, message = "Cost cannot be negative"))]
    pub cost: f64,
    pub assigned_to: Option<String>,
    pub department: Option<String>,
    pub status: LicenseStatus,
}
