//! Grid geometry for tiling glyphs across a canvas
//!
//! Each grid cell holds one glyph plus `CELL_MARGIN` logical pixels of
//! spacing. The cell counts use floor division and the leftover pixels are
//! placed entirely before the grid, so `offset` is the full slack rather than
//! half of it. The outermost ring of cells is never drawn.

use crate::glyph::validate_detail;
use crate::io::canvas::PixelRect;
use crate::io::configuration::{CELL_MARGIN, GLYPH_PIXEL_INSET, MIN_CELL_SIZE};
use crate::io::error::{Result, invalid_parameter};
use std::ops::Range;

/// Derived cell sizes, counts and offsets for one canvas
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GridLayout {
    cell_size: u32,
    cell_pixels: u32,
    cells_x: u32,
    cells_y: u32,
    offset_x: u32,
    offset_y: u32,
}

impl GridLayout {
    /// Compute the layout for a canvas
    ///
    /// # Errors
    ///
    /// Returns an error if:
    /// - `width` or `height` is zero
    /// - `detail` is zero, even or above `MAX_DETAIL`
    /// - `cell_size` is below `MIN_CELL_SIZE`
    /// - The cell pixel size overflows
    /// - Not even one cell fits along either axis
    pub fn new(width: u32, height: u32, detail: u32, cell_size: u32) -> Result<Self> {
        if width == 0 {
            return Err(invalid_parameter("width", &width, &"must be positive"));
        }
        if height == 0 {
            return Err(invalid_parameter("height", &height, &"must be positive"));
        }
        validate_detail(detail)?;
        if cell_size < MIN_CELL_SIZE {
            return Err(invalid_parameter(
                "cell_size",
                &cell_size,
                &format!("must be at least {MIN_CELL_SIZE} to leave a visible pixel"),
            ));
        }

        let cell_pixels = detail
            .checked_add(CELL_MARGIN)
            .and_then(|logical| logical.checked_mul(cell_size))
            .ok_or_else(|| {
                invalid_parameter(
                    "cell_size",
                    &cell_size,
                    &format!("cell of detail {detail} overflows the pixel range"),
                )
            })?;

        let cells_x = width / cell_pixels;
        let cells_y = height / cell_pixels;
        if cells_x == 0 || cells_y == 0 {
            return Err(invalid_parameter(
                "dimensions",
                &format!("{width}x{height}"),
                &format!("canvas is smaller than one {cell_pixels}px cell"),
            ));
        }

        Ok(Self {
            cell_size,
            cell_pixels,
            cells_x,
            cells_y,
            offset_x: width - cells_x * cell_pixels,
            offset_y: height - cells_y * cell_pixels,
        })
    }

    /// Screen pixels per logical glyph pixel
    pub const fn cell_size(&self) -> u32 {
        self.cell_size
    }

    /// Side length of one grid cell in screen pixels
    pub const fn cell_pixels(&self) -> u32 {
        self.cell_pixels
    }

    /// Grid size as `(cells_x, cells_y)`
    pub const fn cells(&self) -> (u32, u32) {
        (self.cells_x, self.cells_y)
    }

    /// Pixel offset of the grid as `(offset_x, offset_y)`
    pub const fn offset(&self) -> (u32, u32) {
        (self.offset_x, self.offset_y)
    }

    /// Grid rows that receive glyphs
    pub const fn drawable_rows(&self) -> Range<u32> {
        1..self.cells_y.saturating_sub(1)
    }

    /// Grid columns that receive glyphs
    pub const fn drawable_cols(&self) -> Range<u32> {
        1..self.cells_x.saturating_sub(1)
    }

    /// Drawable cells as `(row, col)` in row-major order
    pub fn drawable_cells(&self) -> impl Iterator<Item = (u32, u32)> + '_ {
        self.drawable_rows()
            .flat_map(move |row| self.drawable_cols().map(move |col| (row, col)))
    }

    /// Number of glyphs a full composition draws
    pub fn glyph_count(&self) -> usize {
        self.drawable_rows().len() * self.drawable_cols().len()
    }

    /// Top-left pixel of a grid cell as `(x, y)`
    pub const fn cell_origin(&self, row: u32, col: u32) -> (u32, u32) {
        (
            self.offset_x + col * self.cell_pixels,
            self.offset_y + row * self.cell_pixels,
        )
    }

    /// Rectangle filled for logical pixel `(row, col)` of a glyph at `origin`
    pub const fn glyph_pixel_rect(&self, origin: (u32, u32), row: u32, col: u32) -> PixelRect {
        glyph_pixel_rect(origin, row, col, self.cell_size)
    }
}

/// Inset box covering one logical glyph pixel
///
/// Spans `origin + index * size + 1` to `origin + (index + 1) * size - 2`
/// inclusive on both axes, leaving a background gap between neighbors.
/// Requires `size >= MIN_CELL_SIZE`.
pub const fn glyph_pixel_rect(origin: (u32, u32), row: u32, col: u32, size: u32) -> PixelRect {
    let (x, y) = origin;
    PixelRect {
        left: x + col * size + GLYPH_PIXEL_INSET,
        top: y + row * size + GLYPH_PIXEL_INSET,
        right: x + (col + 1) * size - GLYPH_PIXEL_INSET - 1,
        bottom: y + (row + 1) * size - GLYPH_PIXEL_INSET - 1,
    }
}
