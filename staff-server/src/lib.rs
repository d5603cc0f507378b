//! staff-server — employee/request management API
//!
//! Role-gated REST service over SQLite: accounts (login identities),
//! employees (staff records) and requests (work items). Authentication is a
//! bearer JWT; authorization is a closed two-role model (admin, employee).

pub mod api;
pub mod auth;
pub mod bootstrap;
pub mod config;
pub mod db;
pub mod error;
pub mod state;
pub mod util;

pub use error::AppError;
