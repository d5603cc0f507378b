//! Roles and the authorization decision
//!
//! `Role` is a closed enumeration: a value outside the two variants cannot be
//! constructed, so every allowed-set check fails closed on unknown input.

use serde::{Deserialize, Serialize};

use crate::error::AppError;

/// Caller role carried in JWT claims and persisted on accounts
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, sqlx::Type)]
#[serde(rename_all = "lowercase")]
#[sqlx(rename_all = "lowercase")]
pub enum Role {
    Admin,
    Employee,
}

impl Role {
    pub fn as_str(&self) -> &'static str {
        match self {
            Role::Admin => "admin",
            Role::Employee => "employee",
        }
    }

    /// Parse a role string. Exact match only; anything else is rejected.
    pub fn parse(s: &str) -> Option<Role> {
        match s {
            "admin" => Some(Role::Admin),
            "employee" => Some(Role::Employee),
            _ => None,
        }
    }
}

impl std::fmt::Display for Role {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Decide whether `role` may perform an action restricted to `allowed`.
///
/// Pure set-membership test, no side effects. The authentication gate
/// (token verification) runs upstream in the middleware; this only answers
/// the role question.
pub fn authorize(role: Role, allowed: &[Role]) -> Result<(), AppError> {
    if allowed.contains(&role) {
        Ok(())
    } else {
        Err(AppError::AccessDenied)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const ADMIN_ONLY: &[Role] = &[Role::Admin];
    const ANY_STAFF: &[Role] = &[Role::Admin, Role::Employee];

    #[test]
    fn admin_only_actions_reject_employees() {
        assert!(authorize(Role::Admin, ADMIN_ONLY).is_ok());
        assert!(matches!(
            authorize(Role::Employee, ADMIN_ONLY),
            Err(AppError::AccessDenied)
        ));
    }

    #[test]
    fn shared_read_actions_allow_both_roles() {
        assert!(authorize(Role::Admin, ANY_STAFF).is_ok());
        assert!(authorize(Role::Employee, ANY_STAFF).is_ok());
    }

    #[test]
    fn decision_is_deterministic() {
        for _ in 0..3 {
            assert!(authorize(Role::Employee, ADMIN_ONLY).is_err());
            assert!(authorize(Role::Admin, ADMIN_ONLY).is_ok());
        }
    }

    #[test]
    fn unknown_role_strings_never_parse() {
        assert_eq!(Role::parse("admin"), Some(Role::Admin));
        assert_eq!(Role::parse("employee"), Some(Role::Employee));
        assert_eq!(Role::parse("Admin"), None);
        assert_eq!(Role::parse("root"), None);
        assert_eq!(Role::parse(""), None);
    }

    #[test]
    fn role_round_trips_through_serde_as_lowercase() {
        assert_eq!(serde_json::to_string(&Role::Admin).unwrap(), "\"admin\"");
        let role: Role = serde_json::from_str("\"employee\"").unwrap();
        assert_eq!(role, Role::Employee);
        assert!(serde_json::from_str::<Role>("\"superuser\"").is_err());
    }
}
