//! API endpoint integration tests
//!
//! Tests for all domain API endpoints: auth, campaigns, payments, admin.
//!
//! Tests that only exercise routing, authentication, and input
//! validation run against a lazily-connected pool and need no database.
//! Tests marked `#[ignore]` require a local Postgres (see common::TestConfig).

#![allow(dead_code)]

mod admin;
mod auth;
mod campaigns;
mod common;
mod payments;
