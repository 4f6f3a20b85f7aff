//! Grid layout and wallpaper composition

/// Wallpaper composition and rendering
pub mod composer;
/// Grid geometry for glyph placement
pub mod grid;

pub use composer::{WallpaperComposer, WallpaperConfig, render_wallpaper};
pub use grid::GridLayout;
