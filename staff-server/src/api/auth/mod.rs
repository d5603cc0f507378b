//! Authentication API module

pub mod handler;
