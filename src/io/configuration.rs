//! Generation constants and runtime configuration defaults

// Default values for configurable parameters
/// Default wallpaper width in pixels
pub const DEFAULT_WIDTH: u32 = 3840;
/// Default wallpaper height in pixels
pub const DEFAULT_HEIGHT: u32 = 2160;
/// Fixed seed for reproducible generation
pub const DEFAULT_SEED: u64 = 2106;
/// Default glyph side length in logical pixels
pub const DEFAULT_DETAIL: u32 = 5;
/// Default size of one logical glyph pixel in screen pixels
pub const DEFAULT_CELL_SIZE: u32 = 16;

// Layout settings
/// Logical pixels added to the glyph width to form one grid cell
pub const CELL_MARGIN: u32 = 4;
/// Background gap in pixels on each side of a drawn glyph pixel
pub const GLYPH_PIXEL_INSET: u32 = 1;
/// Smallest cell size that still leaves a visible pixel after insetting
pub const MIN_CELL_SIZE: u32 = 3;
/// Largest glyph side length accepted, odd so a middle column exists
pub const MAX_DETAIL: u32 = 255;

// Safety limit to prevent excessive memory allocation
/// Maximum allowed canvas dimension
pub const MAX_CANVAS_DIMENSION: u32 = 32_768;

// Progress bar display settings
/// Width of progress bars in characters
pub const PROGRESS_BAR_WIDTH: u16 = 40;
