//! Verification service client and process configuration.
//!
//! - **config**: init-once process configuration and credential resolution
//! - **client**: blocking JSON-over-HTTP implementation of the collaborator traits
//! - **types**: wire DTOs

pub mod client;
pub mod config;
pub mod error;
pub mod types;

pub use client::HttpVerificationService;
pub use config::ServiceConfig;
pub use error::{ConfigError, Result};
