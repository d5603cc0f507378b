//! Repository module
//!
//! CRUD operations over the SQLite tables. Repositories are constructed with
//! an injected pool clone and hold no other state; every method is a single
//! request-scoped unit of work (or one explicit transaction).

pub mod account;
pub mod employee;
pub mod request;

pub use account::AccountRepository;
pub use employee::EmployeeRepository;
pub use request::RequestRepository;

use thiserror::Error;

/// Repository error types
#[derive(Debug, Error)]
pub enum RepoError {
    #[error("{0}")]
    NotFound(String),

    #[error("{0}")]
    Duplicate(String),

    #[error("{0}")]
    Validation(String),

    #[error("{0}")]
    Database(String),
}

impl From<sqlx::Error> for RepoError {
    fn from(err: sqlx::Error) -> Self {
        RepoError::Database(err.to_string())
    }
}

/// Result type for repository operations
pub type RepoResult<T> = Result<T, RepoError>;

/// Map a unique-constraint violation onto the duplicate it represents.
///
/// Pre-insert duplicate checks catch the common case; this catches the loser
/// of a concurrent insert race at the store's constraint level.
pub(crate) fn map_unique_violation(err: sqlx::Error) -> RepoError {
    if let sqlx::Error::Database(db) = &err {
        let msg = db.message();
        if msg.contains("accounts.username") {
            return RepoError::Duplicate("Username already exists".into());
        }
        if msg.contains("accounts.email") {
            return RepoError::Duplicate("Email already exists".into());
        }
        if msg.contains("idx_employees_account_id") || msg.contains("employees.account_id") {
            return RepoError::Duplicate("Account is already linked to an employee".into());
        }
    }
    RepoError::Database(err.to_string())
}

/// Clamp caller-supplied pagination to sane bounds and return `(limit, offset)`
pub(crate) fn page_bounds(page: u32, limit: u32) -> (i64, i64) {
    let page = page.max(1) as i64;
    let limit = (limit.clamp(1, 100)) as i64;
    (limit, (page - 1) * limit)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn page_bounds_clamp_and_offset() {
        assert_eq!(page_bounds(1, 10), (10, 0));
        assert_eq!(page_bounds(3, 10), (10, 20));
        assert_eq!(page_bounds(0, 10), (10, 0));
        assert_eq!(page_bounds(2, 0), (1, 1));
        assert_eq!(page_bounds(1, 1000), (100, 0));
    }
}
