//! Data models and their field-level validation

pub mod account;
pub mod employee;
pub mod request;
pub mod state;

pub use account::{Account, AccountCreate, AccountUpdate};
pub use employee::{Employee, EmployeeCreate, EmployeeUpdate};
pub use request::{Request, RequestCreate, RequestUpdate};
pub use state::EntityState;
