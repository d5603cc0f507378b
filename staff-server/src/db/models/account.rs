//! Account model

use serde::{Deserialize, Serialize};

use crate::auth::Role;

/// Account row. The password digest is never serialized out.
#[derive(Debug, Clone, Serialize, sqlx::FromRow)]
pub struct Account {
    pub id: String,
    pub username: String,
    pub email: String,
    #[serde(skip_serializing)]
    pub hashed_password: String,
    pub role: Role,
    pub is_active: bool,
    pub created_at: i64,
    pub updated_at: i64,
}

/// Create account payload
#[derive(Debug, Clone, Deserialize)]
pub struct AccountCreate {
    pub username: String,
    pub email: String,
    pub password: String,
    /// Defaults to `employee` when omitted
    pub role: Option<Role>,
}

/// Update account payload. Omitted fields are left unchanged; in particular
/// the stored digest is retained when no new password is supplied.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct AccountUpdate {
    pub username: Option<String>,
    pub email: Option<String>,
    pub password: Option<String>,
}

impl AccountCreate {
    /// Field-local validation, in fixed order: username, email, password.
    /// Uniqueness is checked against the store by the repository.
    pub fn validate(&self) -> Result<(), String> {
        if self.username.trim().is_empty() {
            return Err("Username must not be empty".into());
        }
        validate_email(&self.email)?;
        if self.password.is_empty() {
            return Err("Password must not be empty".into());
        }
        Ok(())
    }
}

pub fn validate_email(email: &str) -> Result<(), String> {
    if email.trim().is_empty() {
        return Err("Email must not be empty".into());
    }
    // Same plausibility bar the registration flow has always used.
    if !email.contains('@') {
        return Err("Invalid email".into());
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn payload() -> AccountCreate {
        AccountCreate {
            username: "alice".into(),
            email: "alice@x.com".into(),
            password: "pw123".into(),
            role: None,
        }
    }

    #[test]
    fn valid_payload_passes() {
        assert!(payload().validate().is_ok());
    }

    #[test]
    fn username_is_checked_first() {
        let mut p = payload();
        p.username = "  ".into();
        p.email = "not-an-email".into();
        assert_eq!(p.validate().unwrap_err(), "Username must not be empty");
    }

    #[test]
    fn email_must_be_plausible() {
        let mut p = payload();
        p.email = "alice.example.com".into();
        assert_eq!(p.validate().unwrap_err(), "Invalid email");
    }

    #[test]
    fn password_must_not_be_empty() {
        let mut p = payload();
        p.password = "".into();
        assert_eq!(p.validate().unwrap_err(), "Password must not be empty");
    }
}
