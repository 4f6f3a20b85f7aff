//! Glyph generation
//!
//! This module contains:
//! - Random generation of mirrored invader glyphs
//! - Matrix reflection and rotation helpers

/// Random glyph generation
pub mod generator;
/// Matrix reflection, rotation and symmetry checks
pub mod symmetry;

pub use generator::{Glyph, generate_glyph, validate_detail};
