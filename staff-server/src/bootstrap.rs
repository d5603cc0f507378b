//! Initial admin provisioning
//!
//! When `ADMIN_USERNAME`/`ADMIN_EMAIL`/`ADMIN_PASSWORD` are configured and no
//! admin account exists yet, one is created at startup. Idempotent across
//! restarts.

use crate::auth::Role;
use crate::config::Config;
use crate::db::models::AccountCreate;
use crate::db::repository::AccountRepository;
use crate::state::AppState;

type BoxError = Box<dyn std::error::Error + Send + Sync>;

pub async fn ensure_admin_account(state: &AppState, config: &Config) -> Result<(), BoxError> {
    let (Some(username), Some(email), Some(password)) = (
        config.admin_username.clone(),
        config.admin_email.clone(),
        config.admin_password.clone(),
    ) else {
        tracing::debug!("admin bootstrap skipped: no ADMIN_* configuration");
        return Ok(());
    };

    let (admins,): (i64,) =
        sqlx::query_as("SELECT COUNT(*) FROM accounts WHERE role = 'admin' AND is_active = 1")
            .fetch_one(&state.pool)
            .await?;
    if admins > 0 {
        return Ok(());
    }

    let repo = AccountRepository::new(state.pool.clone());
    let account = repo
        .register(
            AccountCreate {
                username,
                email,
                password,
                role: Some(Role::Admin),
            },
            None,
        )
        .await
        .map_err(|e| format!("Admin bootstrap failed: {e}"))?;

    tracing::info!(account_id = %account.id, username = %account.username, "admin account created");
    Ok(())
}
