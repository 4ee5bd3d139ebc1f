//! Department model

use once_cell::sync::Lazy;
use regex::Regex;
use serde::{Deserialize, Serialize};
use validator::Validate;

use super::Entity;

/// Department codes are 2-4 uppercase ASCII letters
pub static DEPARTMENT_CODE_RE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"^[A-Z]{2,4}$").expect("department code pattern is valid")
});

/// Organisational unit; its code prefixes generated asset IDs
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Department {
    pub id: i64,
    pub name: String,
    pub code: String,
    #[serde(default)]
    pub location: Option<String>,
    #[serde(default)]
    pub head_of_department: Option<String>,
    #[serde(default)]
    pub contact_email: Option<String>,
    #[serde(default)]
    pub contact_phone: Option<String>,
}

impl Entity for Department {
    fn key(&self) -> String {
        self.id.to_string()
    }
}

/// Create or update department request
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Validate)]
pub struct NewDepartment {
    #[validate(length(min = 1, message = "Department name is required"))]
    pub name: String,
    #[validate(regex(
        path = *DEPARTMENT_CODE_RE,
        message = "Department code must be 2-4 uppercase letters (e.g., IT, HR, FIN)"
    ))]
    pub code: String,
    pub location: Option<String>,
    pub head_of_department: Option<String>,
    #[validate(email(message = "Invalid email format"))]
    pub contact_email: Option<String>,
    pub contact_phone: Option<String>,
}

/// Check a department code without building a whole request
pub fn is_valid_department_code(code: &str) -> bool {
    DEPARTMENT_CODE_RE.is_match(code)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_accepted_codes() {
        for code in ["IT", "HR", "FIN", "OPS"] {
            assert!(is_valid_department_code(code), "{} should be accepted", code);
        }
    }

    #[test]
    fn test_rejected_codes() {
        for code in ["it", "I1", "TOOLONGX", "", "A", "ABCDE", " IT"] {
            assert!(!is_valid_department_code(code), "{:?} should be rejected", code);
        }
    }
}
