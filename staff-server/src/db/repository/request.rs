//! Request repository
//!
//! Mutation paths (update, deactivate, delete) only see active rows: an
//! inactive request is NotFound at those operations. Reads by id are
//! unfiltered so history stays addressable.

use sqlx::SqlitePool;

use crate::db::models::{Request, RequestCreate, RequestUpdate};
use crate::util::{new_id, now_millis};

use super::{RepoError, RepoResult, page_bounds};

#[derive(Clone)]
pub struct RequestRepository {
    pool: SqlitePool,
}

impl RequestRepository {
    pub fn new(pool: SqlitePool) -> Self {
        Self { pool }
    }

    pub async fn find_by_id(&self, id: &str) -> RepoResult<Option<Request>> {
        let request = sqlx::query_as("SELECT * FROM requests WHERE id = ?")
            .bind(id)
            .fetch_optional(&self.pool)
            .await?;
        Ok(request)
    }

    async fn find_active(&self, id: &str) -> RepoResult<Request> {
        sqlx::query_as("SELECT * FROM requests WHERE id = ? AND is_active = 1")
            .bind(id)
            .fetch_optional(&self.pool)
            .await?
            .ok_or_else(|| RepoError::NotFound("Request not found".into()))
    }

    /// Page of active requests, newest first, plus the unpaginated total
    pub async fn list(&self, page: u32, limit: u32) -> RepoResult<(Vec<Request>, i64)> {
        let (limit, offset) = page_bounds(page, limit);
        let items = sqlx::query_as(
            "SELECT * FROM requests WHERE is_active = 1
             ORDER BY created_at DESC LIMIT ? OFFSET ?",
        )
        .bind(limit)
        .bind(offset)
        .fetch_all(&self.pool)
        .await?;

        let (count,): (i64,) = sqlx::query_as("SELECT COUNT(*) FROM requests WHERE is_active = 1")
            .fetch_one(&self.pool)
            .await?;
        Ok((items, count))
    }

    /// Create a request attached to an existing employee
    pub async fn create(&self, data: RequestCreate) -> RepoResult<Request> {
        data.validate().map_err(RepoError::Validation)?;
        self.check_employee_exists(&data.employee_id).await?;

        let id = new_id();
        let now = now_millis();
        sqlx::query(
            "INSERT INTO requests (id, code, description, summary, employee_id, is_active, created_at, updated_at)
             VALUES (?, ?, ?, ?, ?, 1, ?, ?)",
        )
        .bind(&id)
        .bind(data.code.trim())
        .bind(&data.description)
        .bind(&data.summary)
        .bind(&data.employee_id)
        .bind(now)
        .bind(now)
        .execute(&self.pool)
        .await?;

        self.find_by_id(&id)
            .await?
            .ok_or_else(|| RepoError::Database("Failed to create request".into()))
    }

    /// Update an active request. Omitted fields stay unchanged.
    pub async fn update(&self, id: &str, data: RequestUpdate) -> RepoResult<Request> {
        let existing = self.find_active(id).await?;

        let code = match data.code {
            Some(c) => {
                if c.trim().is_empty() {
                    return Err(RepoError::Validation("Code must not be empty".into()));
                }
                c
            }
            None => existing.code,
        };
        let description = match data.description {
            Some(d) => {
                if d.trim().is_empty() {
                    return Err(RepoError::Validation("Description must not be empty".into()));
                }
                d
            }
            None => existing.description,
        };
        let summary = match data.summary {
            Some(s) => {
                if s.trim().is_empty() {
                    return Err(RepoError::Validation("Summary must not be empty".into()));
                }
                s
            }
            None => existing.summary,
        };
        let employee_id = match data.employee_id {
            Some(e) => {
                if e != existing.employee_id {
                    self.check_employee_exists(&e).await?;
                }
                e
            }
            None => existing.employee_id,
        };

        sqlx::query(
            "UPDATE requests SET code = ?, description = ?, summary = ?, employee_id = ?, updated_at = ?
             WHERE id = ?",
        )
        .bind(&code)
        .bind(&description)
        .bind(&summary)
        .bind(&employee_id)
        .bind(now_millis())
        .bind(id)
        .execute(&self.pool)
        .await?;

        self.find_by_id(id)
            .await?
            .ok_or_else(|| RepoError::NotFound("Request not found".into()))
    }

    /// Soft-delete an active request
    pub async fn deactivate(&self, id: &str) -> RepoResult<Request> {
        let existing = self.find_active(id).await?;

        sqlx::query("UPDATE requests SET is_active = 0, updated_at = ? WHERE id = ?")
            .bind(now_millis())
            .bind(&existing.id)
            .execute(&self.pool)
            .await?;

        self.find_by_id(&existing.id)
            .await?
            .ok_or_else(|| RepoError::NotFound("Request not found".into()))
    }

    /// Hard delete an active request
    pub async fn delete(&self, id: &str) -> RepoResult<()> {
        let existing = self.find_active(id).await?;

        sqlx::query("DELETE FROM requests WHERE id = ?")
            .bind(&existing.id)
            .execute(&self.pool)
            .await?;
        Ok(())
    }

    /// The referenced employee must resolve; the FK backstops races.
    async fn check_employee_exists(&self, employee_id: &str) -> RepoResult<()> {
        let (found,): (i64,) = sqlx::query_as("SELECT COUNT(*) FROM employees WHERE id = ?")
            .bind(employee_id)
            .fetch_one(&self.pool)
            .await?;
        if found == 0 {
            return Err(RepoError::Validation("Employee not found".into()));
        }
        Ok(())
    }
}
