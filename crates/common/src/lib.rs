//! Shared utilities, configuration, and error handling for Fundlift
//!
//! This crate provides common functionality used across the Fundlift application:
//! - Configuration management following 12-factor principles
//! - Error types and handling
//! - Custom axum extractors
//! - Shared state machine errors

pub mod config;
pub mod error;
pub mod extractors;
pub mod state;

pub use config::Config;
pub use error::{Error, Result};
pub use extractors::{Pagination, ValidatedJson};
pub use state::StateError;
