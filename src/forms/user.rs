//! Inline "add user" and asset assignment forms

use serde::{Deserialize, Serialize};

use super::{optional, required, set_by_name, FormController};
use crate::{error::AppResult, models::LocalUser};

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct UserDraft {
    pub name: String,
    pub department: String,
}

impl FormController for UserDraft {
    type Output = LocalUser;

    fn set_field(&mut self, name: &str, value: String) -> AppResult<()> {
        set_by_name!(self, name, value, {
            "name" => name,
            "department" => department,
        })
    }

    fn submit(&self) -> AppResult<LocalUser> {
        Ok(LocalUser {
            name: required(&self.name, "Name")?,
            department: optional(&self.department),
        })
    }
}

/// Validated assignment request
#[derive(Debug, Clone, PartialEq)]
pub struct AssignmentRequest {
    pub asset_id: String,
    pub assignee: String,
    pub location: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct AssignmentDraft {
    pub asset_id: String,
    pub assignee: String,
    pub location: String,
}

impl FormController for AssignmentDraft {
    type Output = AssignmentRequest;

    fn set_field(&mut self, name: &str, value: String) -> AppResult<()> {
        set_by_name!(self, name, value, {
            "asset_id" => asset_id,
            "assignee" => assignee,
            "location" => location,
        })
    }

    fn submit(&self) -> AppResult<AssignmentRequest> {
        Ok(AssignmentRequest {
            asset_id: required(&self.asset_id, "Asset")?,
            assignee: required(&self.assignee, "Assignee")?,
            location: optional(&self.location),
        })
    }
}
