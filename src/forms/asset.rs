//! Asset create/edit form

use serde::{Deserialize, Serialize};
use validator::Validate;

use super::{optional, parse_cost, parse_date, required, set_by_name, FormController};
use crate::{
    error::{AppError, AppResult},
    models::{enums::WARRANTY_STATUSES, Asset, AssetStatus, NewAsset},
};

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct AssetDraft {
    /// Left empty to have one generated from the department code
    pub id: String,
    #[serde(rename = "type")]
    pub asset_type: String,
    pub brand: String,
    pub model: String,
    pub serial: String,
    pub purchase_date: String,
    pub cost: String,
    pub warranty_status: String,
    pub status: String,
    pub assignee: String,
    pub department: String,
    pub location: String,
}

impl AssetDraft {
    /// Prefill from an existing asset for editing
    pub fn from_asset(asset: &Asset) -> Self {
        Self {
            id: asset.id.clone(),
            asset_type: asset.asset_type.clone(),
            brand: asset.brand.clone(),
            model: asset.model.clone(),
            serial: asset.serial.clone(),
            purchase_date: asset.purchase_date.clone(),
            cost: asset.cost.to_string(),
            warranty_status: asset.warranty_status.clone(),
            status: asset.status.label().to_string(),
            assignee: asset.assignee.clone().unwrap_or_default(),
            department: asset.department.clone().unwrap_or_default(),
            location: asset.location.clone().unwrap_or_default(),
        }
    }
}

impl FormController for AssetDraft {
    type Output = NewAsset;

    fn set_field(&mut self, name: &str, value: String) -> AppResult<()> {
        set_by_name!(self, name, value, {
            "id" => id,
            "type" => asset_type,
            "brand" => brand,
            "model" => model,
            "serial" => serial,
            "purchase_date" => purchase_date,
            "cost" => cost,
            "warranty_status" => warranty_status,
            "status" => status,
            "assignee" => assignee,
            "department" => department,
            "location" => location,
        })
    }

    fn submit(&self) -> AppResult<NewAsset> {
        let status = AssetStatus::parse(&required(&self.status, "Status")?)
            .ok_or_else(|| AppError::Validation(format!("Unknown status '{}'", self.status)))?;
        let warranty_status = required(&self.warranty_status, "Warranty status")?;
        if !WARRANTY_STATUSES.contains(&warranty_status.as_str()) {
            return Err(AppError::Validation(format!(
                "Unknown warranty status '{}'",
                warranty_status
            )));
        }

        let payload = NewAsset {
            id: self.id.trim().to_string(),
            asset_type: required(&self.asset_type, "Type")?,
            brand: required(&self.brand, "Brand")?,
            model: required(&self.model, "Model")?,
            serial: required(&self.serial, "Serial number")?,
            purchase_date: parse_date(&self.purchase_date, "Purchase date")?,
            cost: parse_cost(&self.cost, "Cost", true)?,
            warranty_status,
            status,
            assignee: optional(&self.assignee),
            department: optional(&self.department),
            location: optional(&self.location),
        };
        // The ID may still be generated by the store
        if !payload.id.is_empty() {
            payload.validate()?;
        }
        Ok(payload)
    }
}
