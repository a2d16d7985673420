//! Shared utilities, configuration, and error handling for CubeAI
//!
//! This crate provides common functionality used across the backend:
//! - Configuration management following 12-factor principles
//! - The workspace error type and the fixed entity-lookup error codes
//! - Custom axum extractors

pub mod config;
pub mod error;
pub mod extractors;

pub use config::Config;
pub use error::{Error, ErrorCode, Result};
pub use extractors::ValidatedJson;
