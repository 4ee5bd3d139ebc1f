//! Department create/edit form

use serde::{Deserialize, Serialize};
use validator::Validate;

use super::{optional, required, set_by_name, FormController};
use crate::{
    error::{AppError, AppResult},
    models::{department::is_valid_department_code, Department, NewDepartment},
};

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct DepartmentDraft {
    pub name: String,
    pub code: String,
    pub location: String,
    pub head_of_department: String,
    pub contact_email: String,
    pub contact_phone: String,
}

impl DepartmentDraft {
    pub fn from_department(department: &Department) -> Self {
        Self {
            name: department.name.clone(),
            code: department.code.clone(),
            location: department.location.clone().unwrap_or_default(),
            head_of_department: department.head_of_department.clone().unwrap_or_default(),
            contact_email: department.contact_email.clone().unwrap_or_default(),
            contact_phone: department.contact_phone.clone().unwrap_or_default(),
        }
    }
}

impl FormController for DepartmentDraft {
    type Output = NewDepartment;

    fn set_field(&mut self, name: &str, value: String) -> AppResult<()> {
        set_by_name!(self, name, value, {
            "name" => name,
            "code" => code,
            "location" => location,
            "head_of_department" => head_of_department,
            "contact_email" => contact_email,
            "contact_phone" => contact_phone,
        })
    }

    fn submit(&self) -> AppResult<NewDepartment> {
        // Checked first so a bad code is reported on its own
        if !is_valid_department_code(&self.code) {
            return Err(AppError::Validation(
                "Department code must be 2-4 uppercase letters (e.g., IT, HR, FIN)".to_string(),
            ));
        }
        let payload = NewDepartment {
            name: required(&self.name, "Department name")?,
            code: self.code.clone(),
            location: optional(&self.location),
            head_of_department: optional(&self.head_of_department),
            contact_email: optional(&self.contact_email),
            contact_phone: optional(&self.contact_phone),
        };
        payload.validate()?;
        Ok(payload)
    }
}
