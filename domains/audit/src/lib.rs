//! Audit domain: security-relevant event log shared by all domains
//!
//! Login, signup, campaign moderation, KYC updates, and payment events
//! are recorded here and surfaced through the admin API.

pub mod domain;
pub mod repository;

pub use domain::entities::{AuditAction, AuditLogEntry};
pub use repository::AuditLogRepository;
