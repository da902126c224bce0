//! HTTP handlers for the Payments domain

pub mod payments;
