//! Seeded wallpaper generator tiling bilaterally symmetric pixel-art invaders
//!
//! Glyphs are generated from a single random source threaded through the
//! whole run, so a seed reproduces the same wallpaper byte for byte.

#![forbid(unsafe_code)]

/// Symmetric glyph generation
pub mod glyph;
/// Command line, themes, canvas export and error handling
pub mod io;
/// Grid geometry and wallpaper composition
pub mod layout;
/// Seeded random source
pub mod math;

pub use io::error::{Result, WallpaperError};
