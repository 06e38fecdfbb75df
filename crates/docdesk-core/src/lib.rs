//! # docdesk-core
//!
//! Core crate for the DocDesk document browser. Contains the
//! [`DocumentService`](traits::DocumentService) contract, configuration
//! schemas, typed identifiers, wire models, and the unified error system.
//!
//! This crate has **no** internal dependencies on other DocDesk crates.

pub mod config;
pub mod error;
pub mod result;
pub mod traits;
pub mod types;

pub use error::AppError;
pub use result::AppResult;
