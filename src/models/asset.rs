//! Hardware asset model

use serde::{Deserialize, Serialize};
use validator::Validate;

use super::{enums::AssetStatus, Entity};

/// Tracked physical IT device
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Asset {
    /// Asset tag, e.g. `IT-001`
    pub id: String,
    #[serde(rename = "type")]
    pub asset_type: String,
    pub brand: String,
    pub model: String,
    pub serial: String,
    #[serde(alias = "purchaseDate")]
    pub purchase_date: String,
    pub cost: f64,
    #[serde(alias = "warrantyStatus")]
    pub warranty_status: String,
    pub status: AssetStatus,
    #[serde(default)]
    pub assignee: Option<String>,
    #[serde(default)]
    pub department: Option<String>,
    #[serde(default)]
    pub location: Option<String>,
}

impl Entity for Asset {
    fn key(&self) -> String {
        self.id.clone()
    }
}

/// Create asset request
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Validate)]
pub struct NewAsset {
    #[validate(length(min = 1, message = "Asset ID is required"))]
    pub id: String,
    #[serde(rename = "type")]
    #[validate(length(min = 1, message = "Type is required"))]
    pub asset_type: String,
    #[validate(length(min = 1, message = "Brand is required"))]
    pub brand: String,
    #[validate(length(min = 1, message = "Model is required"))]
    pub model: String,
    #[validate(length(min = 1, message = "Serial number is required"))]
    pub serial: String,
    pub purchase_date: String,
    #[validate(range(min = 0.0, message = "Cost cannot be negative"))]
    pub cost: f64,
    #[validate(length(min = 1, message = "Warranty status is required"))]
    pub warranty_status: String,
    pub status: AssetStatus,
    pub assignee: Option<String>,
    pub department: Option<String>,
    pub location: Option<String>,
}

impl From<NewAsset> for Asset {
    fn from(data: NewAsset) -> Self {
        Self {
            id: data.id,
            asset_type: data.asset_type,
            brand: data.brand,
            model: data.model,
            serial: data.serial,
            purchase_date: data.purchase_date,
            cost: data.cost,
            warranty_status: data.warranty_status,
            status: data.status,
            assignee: data.assignee,
            department: data.department,
            location: data.location,
        }
    }
}

/// Partial asset update; only present fields are sent.
/// `Some(None)` clears a nullable field.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct AssetPatch {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub status: Option<AssetStatus>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub assignee: Option<Option<String>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub department: Option<Option<String>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub location: Option<Option<String>>,
}
