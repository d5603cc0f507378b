//! Authentication and authorization
//!
//! - [`Role`] / [`authorize`] — the pure allow/deny decision
//! - [`jwt`] — token issuance and verification
//! - [`require_auth`] / [`require_admin`] — the two HTTP gates

pub mod jwt;
pub mod middleware;
pub mod role;

pub use middleware::{CurrentUser, require_admin, require_auth};
pub use role::{Role, authorize};
