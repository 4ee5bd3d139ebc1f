//! Software license form

use serde::{Deserialize, Serialize};
use validator::Validate;

use super::{optional, parse_cost, parse_date, required, set_by_name, FormController};
use crate::{
    error::{AppError, AppResult},
    models::{LicenseStatus, NewLicense},
};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct LicenseDraft {
    pub name: String,
    pub vendor: String,
    pub license_key: String,
    pub purchase_date: String,
    pub expiry_date: String,
    pub cost: String,
    pub assigned_to: String,
    pub department: String,
    pub status: String,
}

impl Default for LicenseDraft {
    fn default() -> Self {
        Self {
            name: String::new(),
            vendor: String::new(),
            license_key: String::new(),
            purchase_date: String::new(),
            expiry_date: String::new(),
            cost: String::new(),
            assigned_to: String::new(),
            department: String::new(),
            status: LicenseStatus::Active.label().to_string(),
        }
    }
}

impl FormController for LicenseDraft {
    type Output = NewLicense;

    fn set_field(&mut self, name: &str, value: String) -> AppResult<()> {
        set_by_name!(self, name, value, {
            "name" => name,
            "vendor" => vendor,
            "license_key" => license_key,
            "purchase_date" => purchase_date,
            "expiry_date" => expiry_date,
            "cost" => cost,
            "assigned_to" => assigned_to,
            "department" => department,
            "status" => status,
        })
    }

    fn submit(&self) -> AppResult<NewLicense> {
        let purchase_date = parse_date(&self.purchase_date, "Purchase date")?;
        let expiry_date = parse_date(&self.expiry_date, "Expiry date")?;
        if expiry_date < purchase_date {
            return Err(AppError::Validation(
                "Expiry date cannot be before the purchase date".to_string(),
            ));
        }
        let status = LicenseStatus::parse(&self.status)
            .ok_or_else(|| AppError::Validation(format!("Unknown status '{}'", self.status)))?;

        let payload = NewLicense {
            name: required(&self.name, "Software name")?,
            vendor: required(&self.vendor, "Vendor")?,
            license_key: required(&self.license_key, "License key")?,
            purchase_date,
            expiry_date,
            cost: parse_cost(&self.cost, "Cost", false)?,
            assigned_to: optional(&self.assigned_to),
            department: optional(&self.department),
            status,
        };
        payload.validate()?;
        Ok(payload)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn draft() -> LicenseDraft {
        LicenseDraft {
            name: "Office 365".into(),
            vendor: "Microsoft".into(),
            license_key: "XXXX-YYYY".into(),
            purchase_date: "2024-01-01".into(),
            expiry_date: "2025-01-01".into(),
            ..Default::default()
        }
    }

    #[test]
    fn test_defaults_to_active_and_zero_cost() {
        let payload = draft().submit().unwrap();
        assert_eq!(payload.status, LicenseStatus::Active);
        assert_eq!(payload.cost, 0.0);
    }

    #[test]
    fn test_expiry_before_purchase_rejected() {
        let mut d = draft();
        d.set_field("expiry_date", "2023-12-31".into()).unwrap();
        assert!(matches!(d.submit(), Err(AppError::Validation(_))));
    }
}
