//! Domain layer for the Audit domain

pub mod entities;
