//! Built-in color themes and palette construction

use clap::ValueEnum;
use image::Rgb;

/// Named color theme
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum Theme {
    /// Pale green background with muted foregrounds
    Default,
    /// Deep purple background with warm and cool pastels
    Dark,
    /// Near-white background with lavender and peach tones
    Light,
    /// Midnight blue background with saturated accents
    Colorful,
}

const DEFAULT_BACKGROUND: [u8; 3] = [233, 250, 227];
const DEFAULT_FOREGROUND: &[[u8; 3]] = &[
    [172, 146, 166],
    [213, 199, 188],
    [222, 232, 213],
    [23, 250, 227],
];

const DARK_BACKGROUND: [u8; 3] = [53, 30, 41];
const DARK_FOREGROUND: &[[u8; 3]] = &[
    [109, 211, 206],
    [155, 222, 183],
    [200, 233, 160],
    [224, 198, 140],
    [247, 162, 120],
    [161, 61, 99],
    [107, 46, 70],
];

const LIGHT_BACKGROUND: [u8; 3] = [248, 247, 255];
const LIGHT_FOREGROUND: &[[u8; 3]] = &[
    [147, 129, 255],
    [166, 157, 255],
    [184, 184, 255],
    [216, 216, 255],
    [252, 243, 238],
    [255, 238, 221],
    [255, 227, 206],
    [255, 216, 190],
];

const COLORFUL_BACKGROUND: [u8; 3] = [1, 22, 39];
const COLORFUL_FOREGROUND: &[[u8; 3]] = &[
    [128, 11, 37],
    [255, 0, 34],
    [160, 117, 123],
    [65, 234, 212],
    [159, 245, 232],
    [253, 255, 252],
    [219, 137, 183],
    [185, 19, 114],
];

impl Theme {
    /// Every built-in theme
    pub const ALL: [Self; 4] = [Self::Default, Self::Dark, Self::Light, Self::Colorful];

    /// Palette defined by this theme
    pub fn palette(self) -> Palette {
        let (background, foreground) = match self {
            Self::Default => (DEFAULT_BACKGROUND, DEFAULT_FOREGROUND),
            Self::Dark => (DARK_BACKGROUND, DARK_FOREGROUND),
            Self::Light => (LIGHT_BACKGROUND, LIGHT_FOREGROUND),
            Self::Colorful => (COLORFUL_BACKGROUND, COLORFUL_FOREGROUND),
        };

        Palette::new(Rgb(background), foreground.iter().copied().map(Rgb).collect())
    }

    /// Lowercase theme name as accepted on the command line
    pub const fn name(self) -> &'static str {
        match self {
            Self::Default => "default",
            Self::Dark => "dark",
            Self::Light => "light",
            Self::Colorful => "colorful",
        }
    }
}

/// Background color plus ordered foreground colors
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Palette {
    /// Canvas fill color
    pub background: Rgb<u8>,
    /// Glyph colors, picked uniformly per glyph
    pub foreground: Vec<Rgb<u8>>,
}

impl Palette {
    /// Create a palette from explicit colors
    pub const fn new(background: Rgb<u8>, foreground: Vec<Rgb<u8>>) -> Self {
        Self {
            background,
            foreground,
        }
    }

    /// Replace the background and, when non-empty, the foreground colors
    #[must_use]
    pub fn with_overrides(mut self, background: Option<Rgb<u8>>, foreground: &[Rgb<u8>]) -> Self {
        if let Some(color) = background {
            self.background = color;
        }
        if !foreground.is_empty() {
            self.foreground = foreground.to_vec();
        }
        self
    }
}

/// Parse a `#rrggbb` or `rrggbb` hex color
///
/// # Errors
///
/// Returns a message if the text is not six hex digits
pub fn parse_hex_color(text: &str) -> std::result::Result<Rgb<u8>, String> {
    let digits = text.strip_prefix('#').unwrap_or(text);
    if digits.len() != 6 || !digits.chars().all(|c| c.is_ascii_hexdigit()) {
        return Err(format!("'{text}' is not a #rrggbb color"));
    }

    let channel = |range: std::ops::Range<usize>| {
        digits
            .get(range)
            .and_then(|hex| u8::from_str_radix(hex, 16).ok())
            .ok_or_else(|| format!("'{text}' is not a #rrggbb color"))
    };

    Ok(Rgb([channel(0..2)?, channel(2..4)?, channel(4..6)?]))
}
