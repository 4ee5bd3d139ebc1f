//! Form controllers
//!
//! Each draft mirrors one entity's editable fields as raw strings, exactly as
//! typed. `submit` validates and coerces a draft into a request payload
//! without touching it, so a rejected form keeps everything the user entered.

pub mod account;
pub mod asset;
pub mod department;
pub mod license;
pub mod maintenance;
pub mod user;

use chrono::NaiveDate;

use crate::error::{AppError, AppResult};

pub use account::{LoginDraft, SignupDraft};
pub use asset::AssetDraft;
pub use department::DepartmentDraft;
pub use license::LicenseDraft;
pub use maintenance::MaintenanceDraft;
pub use user::{AssignmentDraft, UserDraft};

pub trait FormController: Default {
    type Output;

    /// Set one field by its input name
    fn set_field(&mut self, name: &str, value: String) -> AppResult<()>;

    /// Validate and coerce into a payload
    fn submit(&self) -> AppResult<Self::Output>;

    fn reset(&mut self) {
        *self = Self::default();
    }
}

/// Every open form's draft, kept across requests
#[derive(Debug, Clone, Default)]
pub struct FormDrafts {
    pub asset: AssetDraft,
    /// ID of the asset being edited; `None` means the form creates
    pub editing_asset: Option<String>,
    pub maintenance: MaintenanceDraft,
    pub license: LicenseDraft,
    pub department: DepartmentDraft,
    pub editing_department: Option<String>,
    pub user: UserDraft,
    pub assignment: AssignmentDraft,
    pub login: LoginDraft,
    pub signup: SignupDraft,
}

impl FormDrafts {
    pub fn cancel_asset_edit(&mut self) {
        self.asset.reset();
        self.editing_asset = None;
    }

    pub fn cancel_department_edit(&mut self) {
        self.department.reset();
        self.editing_department = None;
    }
}

/// Match an input name to a draft member
macro_rules! set_by_name {
    ($draft:expr, $name:expr, $value:expr, { $($field:literal => $member:ident),* $(,)? }) => {
        match $name {
            $($field => {
                $draft.$member = $value;
                Ok(())
            })*
            other => Err($crate::error::AppError::BadRequest(format!(
                "Unknown form field '{}'",
                other
            ))),
        }
    };
}
pub(crate) use set_by_name;

pub(crate) fn required(value: &str, label: &str) -> AppResult<String> {
    let value = value.trim();
    if value.is_empty() {
        return Err(AppError::Validation(format!("{} is required", label)));
    }
    Ok(value.to_string())
}

pub(crate) fn optional(value: &str) -> Option<String> {
    let value = value.trim();
    (!value.is_empty()).then(|| value.to_string())
}

/// Parse a money amount. Non-numeric input is rejected rather than
/// silently becoming NaN; an empty optional amount is zero.
pub(crate) fn parse_cost(value: &str, label: &str, is_required: bool) -> AppResult<f64> {
    let value = value.trim();
    if value.is_empty() {
        return if is_required {
            Err(AppError::Validation(format!("{} is required", label)))
        } else {
            Ok(0.0)
        };
    }
    match value.parse::<f64>() {
        Ok(cost) if cost.is_finite() => Ok(cost),
        _ => Err(AppError::Validation(format!("{} must be a number", label))),
    }
}

/// Parse a `YYYY-MM-DD` date, returning it normalised
pub(crate) fn parse_date(value: &str, label: &str) -> AppResult<String> {
    let value = required(value, label)?;
    NaiveDate::parse_from_str(&value, "%Y-%m-%d")
        .map(|d| d.format("%Y-%m-%d").to_string())
        .map_err(|_| AppError::Validation(format!("{} must be a date (YYYY-MM-DD)", label)))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_cost() {
        assert_eq!(parse_cost("999.99", "Cost", true).unwrap(), 999.99);
        assert_eq!(parse_cost(" 12 ", "Cost", true).unwrap(), 12.0);
        assert_eq!(parse_cost("", "Cost", false).unwrap(), 0.0);
        assert!(parse_cost("", "Cost", true).is_err());
        assert!(parse_cost("abc", "Cost", false).is_err());
        assert!(parse_cost("NaN", "Cost", true).is_err());
        assert!(parse_cost("inf", "Cost", true).is_err());
    }

    #[test]
    fn test_parse_date() {
        assert_eq!(parse_date("2024-01-01", "Purchase date").unwrap(), "2024-01-01");
        assert!(parse_date("01/02/2024", "Purchase date").is_err());
        assert!(parse_date("2024-02-30", "Purchase date").is_err());
        assert!(parse_date("", "Purchase date").is_err());
    }

    #[test]
    fn test_optional_trims_to_none() {
        assert_eq!(optional("   "), None);
        assert_eq!(optional(" HQ "), Some("HQ".to_string()));
    }
}
