//! Command-line interface for rendering a wallpaper to an image file

use crate::io::configuration::{
    DEFAULT_CELL_SIZE, DEFAULT_DETAIL, DEFAULT_HEIGHT, DEFAULT_SEED, DEFAULT_WIDTH,
};
use crate::io::error::Result;
use crate::io::progress::ProgressManager;
use crate::io::theme::{Palette, Theme, parse_hex_color};
use crate::layout::composer::{WallpaperConfig, render_wallpaper};
use clap::Parser;
use image::Rgb;
use log::{debug, info};
use std::path::PathBuf;
use std::time::Instant;

#[derive(Parser, Debug)]
#[command(name = "invaderwall")]
#[command(
    author,
    version,
    about = "Generate a wallpaper tiled with procedurally generated pixel invaders"
)]
/// Command-line arguments for the wallpaper generator
pub struct Cli {
    /// Output image file (format chosen from the extension)
    #[arg(value_name = "OUTPUT")]
    pub output: PathBuf,

    /// Wallpaper width in pixels
    #[arg(short = 'x', long, default_value_t = DEFAULT_WIDTH)]
    pub width: u32,

    /// Wallpaper height in pixels
    #[arg(short = 'y', long, default_value_t = DEFAULT_HEIGHT)]
    pub height: u32,

    /// Color theme for the wallpaper
    #[arg(short, long, value_enum, default_value_t = Theme::Colorful)]
    pub theme: Theme,

    /// Random seed for reproducible generation
    #[arg(short, long, default_value_t = DEFAULT_SEED)]
    pub seed: u64,

    /// Glyph side length in logical pixels
    #[arg(short, long, default_value_t = DEFAULT_DETAIL)]
    pub detail: u32,

    /// Screen pixels per logical glyph pixel
    #[arg(short, long, default_value_t = DEFAULT_CELL_SIZE)]
    pub cell_size: u32,

    /// Background color overriding the theme (#rrggbb)
    #[arg(short, long, value_parser = parse_hex_color)]
    pub background: Option<Rgb<u8>>,

    /// Foreground colors overriding the theme (#rrggbb, comma separated)
    #[arg(short, long, value_parser = parse_hex_color, value_delimiter = ',')]
    pub foreground: Vec<Rgb<u8>>,

    /// Suppress progress output
    #[arg(short, long)]
    pub quiet: bool,
}

impl Cli {
    /// Check if progress should be displayed
    pub const fn should_show_progress(&self) -> bool {
        !self.quiet
    }

    /// Generation parameters selected on the command line
    pub const fn config(&self) -> WallpaperConfig {
        WallpaperConfig {
            seed: self.seed,
            width: self.width,
            height: self.height,
            detail: self.detail,
            cell_size: self.cell_size,
        }
    }

    /// Theme palette with any color overrides applied
    pub fn palette(&self) -> Palette {
        self.theme
            .palette()
            .with_overrides(self.background, &self.foreground)
    }
}

/// Runs one wallpaper render with optional progress display
pub struct WallpaperJob {
    cli: Cli,
}

impl WallpaperJob {
    /// Create a job from parsed arguments
    pub const fn new(cli: Cli) -> Self {
        Self { cli }
    }

    /// Compose the wallpaper and write the output file
    ///
    /// # Errors
    ///
    /// Returns an error if parameter validation, composition or export fails
    pub fn run(&self) -> Result<()> {
        let start_time = Instant::now();
        let config = self.cli.config();
        let output = &self.cli.output;
        info!(
            "Rendering {}x{} '{}' wallpaper with seed {}",
            config.width,
            config.height,
            self.cli.theme.name(),
            config.seed
        );

        let show_progress = self.cli.should_show_progress();
        let mut progress: Option<ProgressManager> = None;
        let rendered = render_wallpaper(output, config, self.cli.palette(), |done, total| {
            if show_progress {
                progress
                    .get_or_insert_with(|| ProgressManager::new(total, output))
                    .update(done);
            }
        });

        if let Some(pm) = progress {
            let rows = pm.finish();
            debug!("Progress closed after {rows} rows");
        }

        let glyphs = rendered?;
        info!(
            "Wrote {glyphs} glyphs to {} in {:.2?}",
            output.display(),
            start_time.elapsed()
        );

        Ok(())
    }
}
