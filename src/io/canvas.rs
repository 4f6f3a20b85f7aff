//! Raster drawing surface and image file export

use crate::io::error::{Result, WallpaperError};
use image::{ImageFormat, Rgb, RgbImage};
use std::io::Cursor;
use std::path::Path;

/// Inclusive pixel rectangle
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PixelRect {
    /// Leftmost column
    pub left: u32,
    /// Topmost row
    pub top: u32,
    /// Rightmost column (inclusive)
    pub right: u32,
    /// Bottom row (inclusive)
    pub bottom: u32,
}

impl PixelRect {
    /// Whether the rectangle covers no pixels
    pub const fn is_empty(&self) -> bool {
        self.right < self.left || self.bottom < self.top
    }
}

/// Surface accepting filled-rectangle drawing commands
pub trait Canvas {
    /// Canvas size as `(width, height)`
    fn dimensions(&self) -> (u32, u32);

    /// Fill every pixel of `rect` that lies on the canvas with `color`
    fn fill_rect(&mut self, rect: PixelRect, color: Rgb<u8>);
}

/// In-memory RGB canvas backed by an [`RgbImage`]
#[derive(Debug, Clone)]
pub struct RasterCanvas {
    image: RgbImage,
}

impl RasterCanvas {
    /// Create a canvas filled with the background color
    pub fn new(width: u32, height: u32, background: Rgb<u8>) -> Self {
        Self {
            image: RgbImage::from_pixel(width, height, background),
        }
    }

    /// Borrow the finished raster
    pub const fn image(&self) -> &RgbImage {
        &self.image
    }

    /// Consume the canvas and return the raster
    pub fn into_image(self) -> RgbImage {
        self.image
    }

    /// Color of a single pixel, if it lies on the canvas
    pub fn pixel(&self, x: u32, y: u32) -> Option<Rgb<u8>> {
        self.image.get_pixel_checked(x, y).copied()
    }

    /// Encode the canvas and write it to `output_path`
    ///
    /// The format is chosen from the file extension. Encoding happens in
    /// memory first, so an encoding failure leaves no file behind.
    ///
    /// # Errors
    ///
    /// Returns an error if:
    /// - The extension does not name a supported image format
    /// - Encoding fails
    /// - The parent directory cannot be created
    /// - The file cannot be written
    pub fn save(&self, output_path: &Path) -> Result<()> {
        let export_error = |source| WallpaperError::ImageExport {
            path: output_path.to_path_buf(),
            source,
        };

        let format = ImageFormat::from_path(output_path).map_err(export_error)?;
        let mut encoded = Cursor::new(Vec::new());
        self.image
            .write_to(&mut encoded, format)
            .map_err(export_error)?;

        if let Some(parent) = output_path.parent().filter(|p| !p.as_os_str().is_empty()) {
            std::fs::create_dir_all(parent).map_err(|e| WallpaperError::FileSystem {
                path: parent.to_path_buf(),
                operation: "create directory",
                source: e,
            })?;
        }

        std::fs::write(output_path, encoded.into_inner()).map_err(|e| {
            WallpaperError::FileSystem {
                path: output_path.to_path_buf(),
                operation: "write image",
                source: e,
            }
        })
    }
}

impl Canvas for RasterCanvas {
    fn dimensions(&self) -> (u32, u32) {
        self.image.dimensions()
    }

    fn fill_rect(&mut self, rect: PixelRect, color: Rgb<u8>) {
        let (width, height) = self.image.dimensions();
        if rect.is_empty() || rect.left >= width || rect.top >= height {
            return;
        }

        let right = rect.right.min(width - 1);
        let bottom = rect.bottom.min(height - 1);
        for y in rect.top..=bottom {
            for x in rect.left..=right {
                if let Some(pixel) = self.image.get_pixel_mut_checked(x, y) {
                    *pixel = color;
                }
            }
        }
    }
}
