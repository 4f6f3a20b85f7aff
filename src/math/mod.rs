//! Numeric utilities shared by the generators

/// Seeded pseudo-random source
pub mod random;

pub use random::RandomSource;
