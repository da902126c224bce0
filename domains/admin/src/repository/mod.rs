//! Repository layer for the Admin domain

pub mod stats;

pub use stats::{PlatformStats, StatsRepository};
