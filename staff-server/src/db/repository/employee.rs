//! Employee repository

use sqlx::SqlitePool;

use crate::auth::Role;
use crate::db::models::{
    Employee, EmployeeCreate, EmployeeUpdate, EntityState,
    employee::{parse_hire_date, validate_salary},
};
use crate::util::{new_id, now_millis};

use super::{RepoError, RepoResult, map_unique_violation, page_bounds};

#[derive(Clone)]
pub struct EmployeeRepository {
    pool: SqlitePool,
}

impl EmployeeRepository {
    pub fn new(pool: SqlitePool) -> Self {
        Self { pool }
    }

    pub async fn find_by_id(&self, id: &str) -> RepoResult<Option<Employee>> {
        let employee = sqlx::query_as("SELECT * FROM employees WHERE id = ?")
            .bind(id)
            .fetch_optional(&self.pool)
            .await?;
        Ok(employee)
    }

    /// Page of active employees, newest first, plus the unpaginated total
    pub async fn list(&self, page: u32, limit: u32) -> RepoResult<(Vec<Employee>, i64)> {
        let (limit, offset) = page_bounds(page, limit);
        let items = sqlx::query_as(
            "SELECT * FROM employees WHERE is_active = 1
             ORDER BY created_at DESC LIMIT ? OFFSET ?",
        )
        .bind(limit)
        .bind(offset)
        .fetch_all(&self.pool)
        .await?;

        let (count,): (i64,) = sqlx::query_as("SELECT COUNT(*) FROM employees WHERE is_active = 1")
            .fetch_one(&self.pool)
            .await?;
        Ok((items, count))
    }

    /// Create an employee, optionally bound to an unlinked employee-role account
    pub async fn create(&self, data: EmployeeCreate) -> RepoResult<Employee> {
        let hire_date = data.validate().map_err(RepoError::Validation)?;

        if let Some(ref account_id) = data.account_id {
            self.check_account_linkable(account_id).await?;
        }

        let id = new_id();
        let now = now_millis();
        sqlx::query(
            "INSERT INTO employees (id, name, hire_date, salary, account_id, is_active, created_at, updated_at)
             VALUES (?, ?, ?, ?, ?, 1, ?, ?)",
        )
        .bind(&id)
        .bind(data.name.trim())
        .bind(hire_date)
        .bind(data.salary)
        .bind(&data.account_id)
        .bind(now)
        .bind(now)
        .execute(&self.pool)
        .await
        .map_err(map_unique_violation)?;

        self.find_by_id(&id)
            .await?
            .ok_or_else(|| RepoError::Database("Failed to create employee".into()))
    }

    /// Update an employee. Omitted fields stay unchanged.
    pub async fn update(&self, id: &str, data: EmployeeUpdate) -> RepoResult<Employee> {
        let existing = self
            .find_by_id(id)
            .await?
            .ok_or_else(|| RepoError::NotFound("Employee not found".into()))?;

        let name = match data.name {
            Some(n) => {
                if n.trim().is_empty() {
                    return Err(RepoError::Validation("Name must not be empty".into()));
                }
                n.trim().to_string()
            }
            None => existing.name,
        };

        let hire_date = match data.hire_date {
            Some(raw) => parse_hire_date(&raw).map_err(RepoError::Validation)?,
            None => existing.hire_date,
        };

        let salary = match data.salary {
            Some(s) => {
                validate_salary(s).map_err(RepoError::Validation)?;
                s
            }
            None => existing.salary,
        };

        let account_id = match data.account_id {
            Some(Some(account_id)) => {
                if existing.account_id.as_deref() != Some(account_id.as_str()) {
                    self.check_account_linkable(&account_id).await?;
                }
                Some(account_id)
            }
            // Explicit null clears the link.
            Some(None) => None,
            None => existing.account_id,
        };

        sqlx::query(
            "UPDATE employees SET name = ?, hire_date = ?, salary = ?, account_id = ?, updated_at = ?
             WHERE id = ?",
        )
        .bind(&name)
        .bind(hire_date)
        .bind(salary)
        .bind(&account_id)
        .bind(now_millis())
        .bind(id)
        .execute(&self.pool)
        .await
        .map_err(map_unique_violation)?;

        self.find_by_id(id)
            .await?
            .ok_or_else(|| RepoError::NotFound("Employee not found".into()))
    }

    /// Soft-delete: flip the active flag, touch nothing else
    pub async fn deactivate(&self, id: &str) -> RepoResult<()> {
        let existing = self
            .find_by_id(id)
            .await?
            .ok_or_else(|| RepoError::NotFound("Employee not found".into()))?;

        let state = EntityState::from_flag(existing.is_active);
        if !state.can_transition(EntityState::Inactive) {
            return Err(RepoError::Validation("Employee cannot be deactivated".into()));
        }

        sqlx::query("UPDATE employees SET is_active = 0, updated_at = ? WHERE id = ?")
            .bind(now_millis())
            .bind(id)
            .execute(&self.pool)
            .await?;
        Ok(())
    }

    /// Hard delete. Blocked while requests still reference the employee.
    pub async fn delete(&self, id: &str) -> RepoResult<()> {
        let result = sqlx::query("DELETE FROM employees WHERE id = ?")
            .bind(id)
            .execute(&self.pool)
            .await
            .map_err(|e| {
                if let sqlx::Error::Database(db) = &e
                    && db.message().contains("FOREIGN KEY constraint failed")
                {
                    return RepoError::Validation(
                        "Employee has requests and cannot be deleted".into(),
                    );
                }
                RepoError::Database(e.to_string())
            })?;

        if result.rows_affected() == 0 {
            return Err(RepoError::NotFound("Employee not found".into()));
        }
        Ok(())
    }

    /// An account can be linked iff it exists, is active, carries the
    /// employee role and has no employee record yet.
    async fn check_account_linkable(&self, account_id: &str) -> RepoResult<()> {
        let account = crate::db::repository::AccountRepository::new(self.pool.clone())
            .find_by_id(account_id)
            .await?
            .ok_or_else(|| RepoError::Validation("Account not found".into()))?;

        if !account.is_active {
            return Err(RepoError::Validation("Account is not active".into()));
        }
        if account.role != Role::Employee {
            return Err(RepoError::Validation(
                "Only employee-role accounts can be linked".into(),
            ));
        }

        let (linked,): (i64,) =
            sqlx::query_as("SELECT COUNT(*) FROM employees WHERE account_id = ?")
                .bind(account_id)
                .fetch_one(&self.pool)
                .await?;
        if linked > 0 {
            return Err(RepoError::Duplicate(
                "Account is already linked to an employee".into(),
            ));
        }
        Ok(())
    }
}
