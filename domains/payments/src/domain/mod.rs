//! Domain layer for the Payments domain

pub mod entities;
pub mod state;
