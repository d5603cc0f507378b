//! Request (work item) model

use serde::{Deserialize, Serialize};

/// Request row, always attached to exactly one employee
#[derive(Debug, Clone, Serialize, sqlx::FromRow)]
pub struct Request {
    pub id: String,
    pub code: String,
    pub description: String,
    pub summary: String,
    pub employee_id: String,
    pub is_active: bool,
    pub created_at: i64,
    pub updated_at: i64,
}

/// Create request payload
#[derive(Debug, Clone, Deserialize)]
pub struct RequestCreate {
    pub code: String,
    pub description: String,
    pub summary: String,
    pub employee_id: String,
}

/// Update request payload
#[derive(Debug, Clone, Default, Deserialize)]
pub struct RequestUpdate {
    pub code: Option<String>,
    pub description: Option<String>,
    pub summary: Option<String>,
    pub employee_id: Option<String>,
}

impl RequestCreate {
    /// Field-local validation, in fixed order: code, description, summary.
    /// The employee reference is resolved against the store by the repository.
    pub fn validate(&self) -> Result<(), String> {
        for (value, field) in [
            (&self.code, "Code"),
            (&self.description, "Description"),
            (&self.summary, "Summary"),
        ] {
            if value.trim().is_empty() {
                return Err(format!("{field} must not be empty"));
            }
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_fields_are_rejected_in_order() {
        let p = RequestCreate {
            code: "".into(),
            description: "".into(),
            summary: "".into(),
            employee_id: "e1".into(),
        };
        assert_eq!(p.validate().unwrap_err(), "Code must not be empty");

        let p = RequestCreate {
            code: "REQ-1".into(),
            description: " ".into(),
            summary: "".into(),
            employee_id: "e1".into(),
        };
        assert_eq!(p.validate().unwrap_err(), "Description must not be empty");

        let p = RequestCreate {
            code: "REQ-1".into(),
            description: "desc".into(),
            summary: "".into(),
            employee_id: "e1".into(),
        };
        assert_eq!(p.validate().unwrap_err(), "Summary must not be empty");
    }

    #[test]
    fn complete_payload_passes() {
        let p = RequestCreate {
            code: "REQ-1".into(),
            description: "Broken badge reader".into(),
            summary: "Badge reader".into(),
            employee_id: "e1".into(),
        };
        assert!(p.validate().is_ok());
    }
}
