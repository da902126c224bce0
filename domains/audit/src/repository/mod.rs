//! Repository implementations for the Audit domain

pub mod audit_logs;

pub use audit_logs::AuditLogRepository;
