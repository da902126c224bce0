//! Domain layer for the Campaigns domain

pub mod entities;
pub mod state;
