//! Login and signup forms

use serde::{Deserialize, Serialize};
use validator::Validate;

use super::{required, set_by_name, FormController};
use crate::{
    error::AppResult,
    models::{LoginForm, SignupRequest},
};

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct LoginDraft {
    pub email: String,
    pub password: String,
}

impl FormController for LoginDraft {
    type Output = LoginForm;

    fn set_field(&mut self, name: &str, value: String) -> AppResult<()> {
        set_by_name!(self, name, value, {
            "email" => email,
            "password" => password,
        })
    }

    fn submit(&self) -> AppResult<LoginForm> {
        let form = LoginForm {
            username: required(&self.email, "Email")?,
            password: required(&self.password, "Password")?,
        };
        form.validate()?;
        Ok(form)
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SignupDraft {
    pub company: String,
    pub role: String,
    pub email: String,
    pub password: String,
}

impl Default for SignupDraft {
    fn default() -> Self {
        Self {
            company: String::new(),
            role: "Viewer".to_string(),
            email: String::new(),
            password: String::new(),
        }
    }
}

impl FormController for SignupDraft {
    type Output = SignupRequest;

    fn set_field(&mut self, name: &str, value: String) -> AppResult<()> {
        set_by_name!(self, name, value, {
            "company" => company,
            "role" => role,
            "email" => email,
            "password" => password,
        })
    }

    fn submit(&self) -> AppResult<SignupRequest> {
        let request = SignupRequest {
            company: required(&self.company, "Company")?,
            role: required(&self.role, "Role")?,
            email: required(&self.email, "Email")?,
            password: self.password.clone(),
        };
        request.validate()?;
        Ok(request)
    }
}
