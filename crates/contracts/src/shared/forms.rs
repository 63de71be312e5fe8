//! Формы страницы профиля: вход и регистрация.

use crate::enums::Role;
use crate::shared::error::{DashboardError, DashboardResult};
use crate::shared::notification::Notification;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct LoginForm {
    pub email: String,
    pub password: String,
    pub remember_me: bool,
}

impl LoginForm {
    pub const NAME: &'static str = "login";

    pub fn validate(&self) -> DashboardResult<()> {
        let mut missing = Vec::new();
        if is_blank(&self.email) {
            missing.push("email");
        }
        if is_blank(&self.password) {
            missing.push("password");
        }
        check(Self::NAME, missing)
    }
}

/// Registration details. Manufacturers register a company name, every other
/// role registers a business name.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct RegistrationForm {
    pub company_name: String,
    pub name: String,
    pub contact_person: String,
    pub email: String,
    pub phone: String,
    pub location: String,
    pub gst_number: String,
    pub pan_number: String,
    pub license_number: String,
    pub use_qr: bool,
    pub agree_to_terms: bool,
}

impl RegistrationForm {
    pub const NAME: &'static str = "registration";

    pub fn validate(&self, role: Role) -> DashboardResult<()> {
        let mut missing = Vec::new();
        match role {
            Role::Manufacturer if is_blank(&self.company_name) => missing.push("company name"),
            Role::Distributor | Role::Wholesaler | Role::Retailer if is_blank(&self.name) => {
                missing.push("name")
            }
            _ => {}
        }
        if is_blank(&self.email) {
            missing.push("email");
        }
        if !self.agree_to_terms {
            missing.push("terms agreement");
        }
        check(Self::NAME, missing)
    }
}

fn is_blank(value: &str) -> bool {
    value.trim().is_empty()
}

fn check(form: &'static str, missing: Vec<&'static str>) -> DashboardResult<()> {
    if missing.is_empty() {
        Ok(())
    } else {
        log::debug!("{} form rejected, missing {:?}", form, missing);
        Err(DashboardError::ValidationFailure { form, missing })
    }
}

/// Toast shown when a profile form fails validation.
pub fn failure_toast(form: &str) -> Notification {
    let description = if form == RegistrationForm::NAME {
        "Please fill all required fields and agree to terms"
    } else {
        "Please fill all required fields"
    };
    Notification::error("Error", description)
}

pub fn login_success_toast() -> Notification {
    Notification::info("Login Successful", "Welcome back to NexQ!")
}

pub fn registration_success_toast(role: Role) -> Notification {
    Notification::info(
        "Registration Successful",
        format!("Welcome to NexQ! Your {} account has been created.", role.code()),
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_login_requires_email_and_password() {
        let form = LoginForm {
            email: "ops@example.com".to_string(),
            password: "  ".to_string(),
            remember_me: true,
        };
        assert_eq!(
            form.validate(),
            Err(DashboardError::ValidationFailure {
                form: "login",
                missing: vec!["password"],
            })
        );

        let form = LoginForm {
            password: "secret".to_string(),
            ..form
        };
        assert!(form.validate().is_ok());
    }

    #[test]
    fn test_manufacturer_needs_company_name() {
        let form = RegistrationForm {
            name: "Someone".to_string(),
            email: "a@b.c".to_string(),
            agree_to_terms: true,
            ..Default::default()
        };
        assert!(form.validate(Role::Distributor).is_ok());
        match form.validate(Role::Manufacturer) {
            Err(DashboardError::ValidationFailure { missing, .. }) => {
                assert_eq!(missing, vec!["company name"])
            }
            other => panic!("unexpected: {:?}", other),
        }
    }

    #[test]
    fn test_terms_must_be_accepted() {
        let form = RegistrationForm {
            company_name: "Tech Manufacturing Ltd.".to_string(),
            email: "a@b.c".to_string(),
            ..Default::default()
        };
        match form.validate(Role::Manufacturer) {
            Err(DashboardError::ValidationFailure { form, missing }) => {
                assert_eq!(form, "registration");
                assert_eq!(missing, vec!["terms agreement"]);
            }
            other => panic!("unexpected: {:?}", other),
        }
    }

    #[test]
    fn test_toasts() {
        assert_eq!(
            failure_toast(RegistrationForm::NAME).description,
            "Please fill all required fields and agree to terms"
        );
        assert_eq!(failure_toast(LoginForm::NAME).title, "Error");
        assert!(registration_success_toast(Role::Retailer)
            .description
            .contains("retailer account"));
    }
}
