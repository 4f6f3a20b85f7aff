//! Wallpaper composition: glyph placement, coloring and rendering
//!
//! Cells are visited row-major. For every drawable cell one glyph is drawn
//! from the shared random source, then one palette index. This order fixes
//! the random sequence, so it must not change for seeds to stay reproducible.

use crate::glyph::{Glyph, generate_glyph};
use crate::io::canvas::{Canvas, RasterCanvas};
use crate::io::configuration::{
    DEFAULT_CELL_SIZE, DEFAULT_DETAIL, DEFAULT_HEIGHT, DEFAULT_SEED, DEFAULT_WIDTH,
    MAX_CANVAS_DIMENSION,
};
use crate::io::error::{Result, computation_error, invalid_parameter};
use crate::io::theme::Palette;
use crate::layout::grid::{GridLayout, glyph_pixel_rect};
use crate::math::RandomSource;
use image::Rgb;
use log::{debug, info, trace};
use std::path::Path;

/// Parameters controlling one wallpaper
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct WallpaperConfig {
    /// Seed for the random source
    pub seed: u64,
    /// Canvas width in pixels
    pub width: u32,
    /// Canvas height in pixels
    pub height: u32,
    /// Glyph side length in logical pixels
    pub detail: u32,
    /// Screen pixels per logical glyph pixel
    pub cell_size: u32,
}

impl Default for WallpaperConfig {
    fn default() -> Self {
        Self {
            seed: DEFAULT_SEED,
            width: DEFAULT_WIDTH,
            height: DEFAULT_HEIGHT,
            detail: DEFAULT_DETAIL,
            cell_size: DEFAULT_CELL_SIZE,
        }
    }
}

impl WallpaperConfig {
    /// Check the parameters and compute the grid layout
    ///
    /// # Errors
    ///
    /// Returns an error if:
    /// - A dimension exceeds `MAX_CANVAS_DIMENSION`
    /// - The layout rejects the dimensions, detail or cell size
    pub fn layout(&self) -> Result<GridLayout> {
        for (parameter, value) in [("width", self.width), ("height", self.height)] {
            if value > MAX_CANVAS_DIMENSION {
                return Err(invalid_parameter(
                    parameter,
                    &value,
                    &format!("exceeds maximum canvas dimension {MAX_CANVAS_DIMENSION}"),
                ));
            }
        }

        GridLayout::new(self.width, self.height, self.detail, self.cell_size)
    }
}

/// Draws glyphs onto a canvas following a grid layout
///
/// Owns the random source for the whole run. Rows must be drawn in
/// increasing order exactly once for the output to match a given seed.
#[derive(Debug)]
pub struct WallpaperComposer {
    config: WallpaperConfig,
    palette: Palette,
    layout: GridLayout,
    rng: RandomSource,
    glyphs_drawn: usize,
}

impl WallpaperComposer {
    /// Validate parameters and prepare a composition
    ///
    /// # Errors
    ///
    /// Returns an error if:
    /// - The configuration is invalid (see [`WallpaperConfig::layout`])
    /// - The palette has no foreground colors
    pub fn new(config: WallpaperConfig, palette: Palette) -> Result<Self> {
        if palette.foreground.is_empty() {
            return Err(invalid_parameter(
                "foreground",
                &"[]",
                &"palette needs at least one foreground color",
            ));
        }

        let layout = config.layout()?;
        debug!(
            "Layout: {}px cells, {}x{} grid, offset {:?}, {} glyphs",
            layout.cell_pixels(),
            layout.cells().0,
            layout.cells().1,
            layout.offset(),
            layout.glyph_count()
        );

        Ok(Self {
            config,
            palette,
            layout,
            rng: RandomSource::new(config.seed),
            glyphs_drawn: 0,
        })
    }

    /// Grid geometry in use
    pub const fn layout(&self) -> &GridLayout {
        &self.layout
    }

    /// Fresh background-filled canvas matching the configuration
    pub fn create_canvas(&self) -> RasterCanvas {
        RasterCanvas::new(
            self.config.width,
            self.config.height,
            self.palette.background,
        )
    }

    /// Draw every drawable cell of one grid row, left to right
    ///
    /// # Errors
    ///
    /// Returns an error if:
    /// - The canvas size differs from the configured size
    /// - `row` is in the margin ring or outside the grid
    /// - Glyph generation fails
    pub fn draw_row<C: Canvas>(&mut self, canvas: &mut C, row: u32) -> Result<()> {
        let expected = (self.config.width, self.config.height);
        let (width, height) = canvas.dimensions();
        if (width, height) != expected {
            return Err(invalid_parameter(
                "canvas",
                &format!("{width}x{height}"),
                &format!("expected {}x{}", expected.0, expected.1),
            ));
        }
        if !self.layout.drawable_rows().contains(&row) {
            return Err(invalid_parameter(
                "row",
                &row,
                &format!("drawable rows are {:?}", self.layout.drawable_rows()),
            ));
        }

        for col in self.layout.drawable_cols() {
            let glyph = generate_glyph(&mut self.rng, self.config.detail)?;
            let color = *self.rng.pick(&self.palette.foreground).ok_or_else(|| {
                computation_error("color selection", &"foreground palette is empty")
            })?;
            trace!("Glyph at ({row}, {col}) in {color:?}:\n{glyph}");

            draw_glyph(
                canvas,
                &glyph,
                self.layout.cell_origin(row, col),
                color,
                self.layout.cell_size(),
            );
            self.glyphs_drawn += 1;
        }

        debug!("Row {row} drawn ({} glyphs total)", self.glyphs_drawn);
        Ok(())
    }

    /// Draw all drawable rows in order
    ///
    /// `on_row(done, total)` is called once before the first row and again
    /// after every finished row.
    ///
    /// # Errors
    ///
    /// Returns an error if the canvas does not match or glyph generation fails
    pub fn compose<C, F>(mut self, canvas: &mut C, mut on_row: F) -> Result<usize>
    where
        C: Canvas,
        F: FnMut(usize, usize),
    {
        let rows = self.layout.drawable_rows();
        let total = rows.len();
        on_row(0, total);

        for (done, row) in rows.enumerate() {
            self.draw_row(canvas, row)?;
            on_row(done + 1, total);
        }
        Ok(self.glyphs_drawn)
    }
}

/// Fill one inset square for every set pixel of `glyph`
///
/// `origin` is the top-left pixel of the glyph's grid cell and `cell_size`
/// the screen size of one logical pixel.
pub fn draw_glyph<C: Canvas>(
    canvas: &mut C,
    glyph: &Glyph,
    origin: (u32, u32),
    color: Rgb<u8>,
    cell_size: u32,
) {
    for (row, col) in glyph.filled_cells() {
        canvas.fill_rect(
            glyph_pixel_rect(origin, row as u32, col as u32, cell_size),
            color,
        );
    }
}

/// Compose a wallpaper and write it to `output_path`
///
/// The file is written once, after every glyph has been drawn. Row progress
/// is reported through `on_row` as in [`WallpaperComposer::compose`].
/// Returns the number of glyphs drawn.
///
/// # Errors
///
/// Returns an error if:
/// - The configuration or palette is invalid
/// - The image cannot be encoded or written
pub fn render_wallpaper<F>(
    output_path: &Path,
    config: WallpaperConfig,
    palette: Palette,
    on_row: F,
) -> Result<usize>
where
    F: FnMut(usize, usize),
{
    let composer = WallpaperComposer::new(config, palette)?;
    let mut canvas = composer.create_canvas();
    let glyphs = composer.compose(&mut canvas, on_row)?;

    canvas.save(output_path)?;
    info!(
        "Wrote {}x{} wallpaper with {glyphs} glyphs to {}",
        config.width,
        config.height,
        output_path.display()
    );
    Ok(glyphs)
}
