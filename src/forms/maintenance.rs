//! Maintenance record form

use serde::{Deserialize, Serialize};
use validator::Validate;

use super::{optional, parse_cost, parse_date, required, set_by_name, FormController};
use crate::{error::AppResult, models::NewMaintenance};

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct MaintenanceDraft {
    pub asset_id: String,
    pub activity: String,
    /// Empty means "now", assigned by the backend
    pub date: String,
    pub cost: String,
    pub notes: String,
    pub technician: String,
}

impl FormController for MaintenanceDraft {
    type Output = NewMaintenance;

    fn set_field(&mut self, name: &str, value: String) -> AppResult<()> {
        set_by_name!(self, name, value, {
            "asset_id" => asset_id,
            "activity" => activity,
            "date" => date,
            "cost" => cost,
            "notes" => notes,
            "technician" => technician,
        })
    }

    fn submit(&self) -> AppResult<NewMaintenance> {
        let date = match optional(&self.date) {
            Some(date) => Some(parse_date(&date, "Date")?),
            None => None,
        };
        let payload = NewMaintenance {
            asset_id: required(&self.asset_id, "Asset")?,
            activity: required(&self.activity, "Activity")?,
            date,
            cost: parse_cost(&self.cost, "Cost", false)?,
            notes: optional(&self.notes),
            technician: optional(&self.technician),
        };
        payload.validate()?;
        Ok(payload)
    }
}
