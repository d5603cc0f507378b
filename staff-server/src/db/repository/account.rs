//! Account repository

use sqlx::SqlitePool;

use crate::auth::Role;
use crate::db::models::{Account, AccountCreate, AccountUpdate, EntityState, employee};
use crate::util::{hash_password, new_id, now_millis};

use super::{RepoError, RepoResult, map_unique_violation, page_bounds};

/// Optional employee record provisioned together with a registration
#[derive(Debug, Clone)]
pub struct EmployeeProvision {
    pub name: String,
    pub hire_date: String,
    pub salary: f64,
}

#[derive(Clone)]
pub struct AccountRepository {
    pool: SqlitePool,
}

impl AccountRepository {
    pub fn new(pool: SqlitePool) -> Self {
        Self { pool }
    }

    pub async fn find_by_id(&self, id: &str) -> RepoResult<Option<Account>> {
        let account = sqlx::query_as("SELECT * FROM accounts WHERE id = ?")
            .bind(id)
            .fetch_optional(&self.pool)
            .await?;
        Ok(account)
    }

    pub async fn find_by_email(&self, email: &str) -> RepoResult<Option<Account>> {
        let account = sqlx::query_as("SELECT * FROM accounts WHERE email = ?")
            .bind(email)
            .fetch_optional(&self.pool)
            .await?;
        Ok(account)
    }

    pub async fn find_by_username(&self, username: &str) -> RepoResult<Option<Account>> {
        let account = sqlx::query_as("SELECT * FROM accounts WHERE username = ?")
            .bind(username)
            .fetch_optional(&self.pool)
            .await?;
        Ok(account)
    }

    /// Page of active accounts, newest first, plus the unpaginated total
    pub async fn list(&self, page: u32, limit: u32) -> RepoResult<(Vec<Account>, i64)> {
        let (limit, offset) = page_bounds(page, limit);
        let items = sqlx::query_as(
            "SELECT * FROM accounts WHERE is_active = 1
             ORDER BY created_at DESC LIMIT ? OFFSET ?",
        )
        .bind(limit)
        .bind(offset)
        .fetch_all(&self.pool)
        .await?;

        let (count,): (i64,) = sqlx::query_as("SELECT COUNT(*) FROM accounts WHERE is_active = 1")
            .fetch_one(&self.pool)
            .await?;
        Ok((items, count))
    }

    /// Active employee-role accounts with no employee record linked to them
    pub async fn list_available(&self) -> RepoResult<Vec<Account>> {
        let items = sqlx::query_as(
            "SELECT a.* FROM accounts a
             WHERE a.is_active = 1
               AND a.role = 'employee'
               AND NOT EXISTS (SELECT 1 FROM employees e WHERE e.account_id = a.id)
             ORDER BY a.username",
        )
        .fetch_all(&self.pool)
        .await?;
        Ok(items)
    }

    /// Create an account (admin path, no employee provisioning)
    pub async fn create(&self, data: AccountCreate) -> RepoResult<Account> {
        self.register(data, None).await
    }

    /// Create an account and, when requested, its employee record in one
    /// transaction. An employee validation failure rolls the account back.
    pub async fn register(
        &self,
        data: AccountCreate,
        provision: Option<EmployeeProvision>,
    ) -> RepoResult<Account> {
        data.validate().map_err(RepoError::Validation)?;

        // Uniqueness holds across active and inactive rows alike.
        if self.find_by_username(&data.username).await?.is_some() {
            return Err(RepoError::Duplicate("Username already exists".into()));
        }
        if self.find_by_email(&data.email).await?.is_some() {
            return Err(RepoError::Duplicate("Email already exists".into()));
        }

        let digest = hash_password(&data.password)
            .map_err(|e| RepoError::Database(format!("Failed to hash password: {e}")))?;
        let role = data.role.unwrap_or(Role::Employee);
        let id = new_id();
        let now = now_millis();

        let mut tx = self.pool.begin().await?;

        sqlx::query(
            "INSERT INTO accounts (id, username, email, hashed_password, role, is_active, created_at, updated_at)
             VALUES (?, ?, ?, ?, ?, 1, ?, ?)",
        )
        .bind(&id)
        .bind(&data.username)
        .bind(&data.email)
        .bind(&digest)
        .bind(role)
        .bind(now)
        .bind(now)
        .execute(&mut *tx)
        .await
        .map_err(map_unique_violation)?;

        if let Some(provision) = provision {
            let payload = employee::EmployeeCreate {
                name: provision.name,
                hire_date: provision.hire_date,
                salary: provision.salary,
                account_id: Some(id.clone()),
            };
            let hire_date = payload.validate().map_err(RepoError::Validation)?;

            sqlx::query(
                "INSERT INTO employees (id, name, hire_date, salary, account_id, is_active, created_at, updated_at)
                 VALUES (?, ?, ?, ?, ?, 1, ?, ?)",
            )
            .bind(new_id())
            .bind(payload.name.trim())
            .bind(hire_date)
            .bind(payload.salary)
            .bind(&id)
            .bind(now)
            .bind(now)
            .execute(&mut *tx)
            .await
            .map_err(map_unique_violation)?;
        }

        tx.commit().await?;

        self.find_by_id(&id)
            .await?
            .ok_or_else(|| RepoError::Database("Failed to create account".into()))
    }

    /// Update an account. Omitted fields stay unchanged; the stored digest is
    /// retained when no new password is supplied.
    pub async fn update(&self, id: &str, data: AccountUpdate) -> RepoResult<Account> {
        let existing = self
            .find_by_id(id)
            .await?
            .ok_or_else(|| RepoError::NotFound("User not found".into()))?;

        let username = match data.username {
            Some(u) => {
                if u.trim().is_empty() {
                    return Err(RepoError::Validation("Username must not be empty".into()));
                }
                if u != existing.username && self.find_by_username(&u).await?.is_some() {
                    return Err(RepoError::Duplicate("Username already exists".into()));
                }
                u
            }
            None => existing.username,
        };

        let email = match data.email {
            Some(e) => {
                crate::db::models::account::validate_email(&e).map_err(RepoError::Validation)?;
                if e != existing.email && self.find_by_email(&e).await?.is_some() {
                    return Err(RepoError::Duplicate("Email already exists".into()));
                }
                e
            }
            None => existing.email,
        };

        let digest = match data.password {
            Some(p) => {
                if p.is_empty() {
                    return Err(RepoError::Validation("Password must not be empty".into()));
                }
                hash_password(&p)
                    .map_err(|e| RepoError::Database(format!("Failed to hash password: {e}")))?
            }
            None => existing.hashed_password,
        };

        sqlx::query(
            "UPDATE accounts SET username = ?, email = ?, hashed_password = ?, updated_at = ?
             WHERE id = ?",
        )
        .bind(&username)
        .bind(&email)
        .bind(&digest)
        .bind(now_millis())
        .bind(id)
        .execute(&self.pool)
        .await
        .map_err(map_unique_violation)?;

        self.find_by_id(id)
            .await?
            .ok_or_else(|| RepoError::NotFound("User not found".into()))
    }

    /// Change an account's role (admin-only operation at the API layer)
    pub async fn update_role(&self, id: &str, role: Role) -> RepoResult<Account> {
        let result = sqlx::query("UPDATE accounts SET role = ?, updated_at = ? WHERE id = ?")
            .bind(role)
            .bind(now_millis())
            .bind(id)
            .execute(&self.pool)
            .await?;

        if result.rows_affected() == 0 {
            return Err(RepoError::NotFound("User not found".into()));
        }
        self.find_by_id(id)
            .await?
            .ok_or_else(|| RepoError::NotFound("User not found".into()))
    }

    /// Soft-delete: flip the active flag, touch nothing else
    pub async fn deactivate(&self, id: &str) -> RepoResult<()> {
        let existing = self
            .find_by_id(id)
            .await?
            .ok_or_else(|| RepoError::NotFound("User not found".into()))?;

        let state = EntityState::from_flag(existing.is_active);
        if !state.can_transition(EntityState::Inactive) {
            return Err(RepoError::Validation("User cannot be deactivated".into()));
        }

        sqlx::query("UPDATE accounts SET is_active = 0, updated_at = ? WHERE id = ?")
            .bind(now_millis())
            .bind(id)
            .execute(&self.pool)
            .await?;
        Ok(())
    }

    /// Hard delete. A linked employee record is unlinked, not removed.
    pub async fn delete(&self, id: &str) -> RepoResult<()> {
        let result = sqlx::query("DELETE FROM accounts WHERE id = ?")
            .bind(id)
            .execute(&self.pool)
            .await?;

        if result.rows_affected() == 0 {
            return Err(RepoError::NotFound("User not found".into()));
        }
        Ok(())
    }
}
