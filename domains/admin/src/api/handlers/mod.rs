//! HTTP handlers for the Admin domain

pub mod campaigns;
pub mod system;
pub mod users;
