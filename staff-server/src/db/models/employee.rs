//! Employee model

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// Employee row, optionally linked 1:1 to an account
#[derive(Debug, Clone, Serialize, sqlx::FromRow)]
pub struct Employee {
    pub id: String,
    pub name: String,
    pub hire_date: NaiveDate,
    pub salary: f64,
    pub account_id: Option<String>,
    pub is_active: bool,
    pub created_at: i64,
    pub updated_at: i64,
}

/// Create employee payload. `hire_date` arrives in the client's `DD/MM/YYYY`
/// format and is parsed before anything touches the store.
#[derive(Debug, Clone, Deserialize)]
pub struct EmployeeCreate {
    pub name: String,
    pub hire_date: String,
    pub salary: f64,
    /// Optional binding to an unlinked employee-role account
    pub account_id: Option<String>,
}

/// Update employee payload. `account_id` is double-wrapped so an absent
/// field (leave the link alone) and an explicit `null` (unlink) stay
/// distinguishable after deserialization.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct EmployeeUpdate {
    pub name: Option<String>,
    pub hire_date: Option<String>,
    pub salary: Option<f64>,
    #[serde(default, deserialize_with = "nullable")]
    pub account_id: Option<Option<String>>,
}

fn nullable<'de, D>(deserializer: D) -> Result<Option<Option<String>>, D::Error>
where
    D: serde::Deserializer<'de>,
{
    serde::Deserialize::deserialize(deserializer).map(Some)
}

/// Parse a caller-supplied hire date (`DD/MM/YYYY`) into a calendar date
pub fn parse_hire_date(raw: &str) -> Result<NaiveDate, String> {
    NaiveDate::parse_from_str(raw.trim(), "%d/%m/%Y")
        .map_err(|_| format!("Invalid hire date: {raw}"))
}

impl EmployeeCreate {
    /// Field-local validation, in fixed order: name, hire date, salary.
    pub fn validate(&self) -> Result<NaiveDate, String> {
        if self.name.trim().is_empty() {
            return Err("Name must not be empty".into());
        }
        let hire_date = parse_hire_date(&self.hire_date)?;
        validate_salary(self.salary)?;
        Ok(hire_date)
    }
}

pub fn validate_salary(salary: f64) -> Result<(), String> {
    if !salary.is_finite() || salary < 0.0 {
        return Err("Salary must be a non-negative number".into());
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_day_month_year() {
        let date = parse_hire_date("17/08/2024").expect("date");
        assert_eq!(date, NaiveDate::from_ymd_opt(2024, 8, 17).unwrap());
    }

    #[test]
    fn rejects_impossible_and_misformatted_dates() {
        assert!(parse_hire_date("31/02/2024").is_err());
        assert!(parse_hire_date("2024-08-17").is_err());
        assert!(parse_hire_date("yesterday").is_err());
        assert!(parse_hire_date("").is_err());
    }

    #[test]
    fn validation_order_name_then_date_then_salary() {
        let p = EmployeeCreate {
            name: " ".into(),
            hire_date: "bad".into(),
            salary: -1.0,
            account_id: None,
        };
        assert_eq!(p.validate().unwrap_err(), "Name must not be empty");

        let p = EmployeeCreate {
            name: "John".into(),
            hire_date: "bad".into(),
            salary: -1.0,
            account_id: None,
        };
        assert!(p.validate().unwrap_err().starts_with("Invalid hire date"));

        let p = EmployeeCreate {
            name: "John".into(),
            hire_date: "17/08/2024".into(),
            salary: f64::NAN,
            account_id: None,
        };
        assert_eq!(
            p.validate().unwrap_err(),
            "Salary must be a non-negative number"
        );
    }

    #[test]
    fn update_payload_keeps_null_and_absent_account_id_apart() {
        let p: EmployeeUpdate = serde_json::from_str(r#"{"name":"John"}"#).unwrap();
        assert_eq!(p.account_id, None);

        let p: EmployeeUpdate = serde_json::from_str(r#"{"account_id":null}"#).unwrap();
        assert_eq!(p.account_id, Some(None));

        let p: EmployeeUpdate = serde_json::from_str(r#"{"account_id":"a1"}"#).unwrap();
        assert_eq!(p.account_id, Some(Some("a1".into())));
    }

    #[test]
    fn zero_salary_is_allowed() {
        assert!(validate_salary(0.0).is_ok());
        assert!(validate_salary(50_000.0).is_ok());
        assert!(validate_salary(f64::INFINITY).is_err());
    }
}
