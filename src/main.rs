//! CLI entry point for the invader wallpaper generator

use clap::Parser;
use invaderwall::io::cli::{Cli, WallpaperJob};

fn main() -> invaderwall::Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn")).init();

    let cli = Cli::parse();
    WallpaperJob::new(cli).run()
}
