//! # authgate-core
//!
//! Core crate for AuthGate. Contains the configuration schemas, startup
//! validation of required settings, and the unified error system.
//!
//! This crate has **no** internal dependencies on other AuthGate crates.

pub mod config;
pub mod error;
pub mod result;

pub use error::AppError;
pub use result::AppResult;
