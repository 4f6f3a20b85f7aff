//! Random generation of bilaterally symmetric invader glyphs
//!
//! A glyph is drawn as a half of independent random bits, mirrored onto the
//! other side around a random middle line, then turned a quarter so the
//! mirror axis runs vertically on screen.

use crate::glyph::symmetry::{is_mirror_symmetric, mirror_rows, rotate_quarter_turn};
use crate::io::configuration::MAX_DETAIL;
use crate::io::error::{Result, computation_error, invalid_parameter};
use crate::math::RandomSource;
use ndarray::{Array2, ArrayView2, Axis, concatenate};
use std::fmt;

/// Square binary pixel pattern mirrored about its vertical axis
///
/// Rows map to screen y and columns to screen x. Values are 0 (background)
/// or 1 (filled).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Glyph {
    cells: Array2<u8>,
}

impl Glyph {
    /// Side length of the glyph in logical pixels
    pub fn detail(&self) -> usize {
        self.cells.nrows()
    }

    /// Read-only view of the underlying matrix
    pub fn cells(&self) -> ArrayView2<'_, u8> {
        self.cells.view()
    }

    /// Whether the logical pixel at `(row, col)` is filled
    pub fn is_set(&self, row: usize, col: usize) -> bool {
        self.cells.get((row, col)).is_some_and(|&value| value == 1)
    }

    /// Positions `(row, col)` of filled pixels in row-major order
    pub fn filled_cells(&self) -> impl Iterator<Item = (usize, usize)> + '_ {
        self.cells
            .indexed_iter()
            .filter(|&(_, &value)| value == 1)
            .map(|(position, _)| position)
    }

    /// Whether the glyph equals its left-right reflection
    pub fn is_mirror_symmetric(&self) -> bool {
        is_mirror_symmetric(self.cells.view())
    }
}

impl fmt::Display for Glyph {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for row in self.cells.rows() {
            let line: String = row
                .iter()
                .map(|&value| if value == 1 { '#' } else { '.' })
                .collect();
            writeln!(f, "{line}")?;
        }
        Ok(())
    }
}

/// Check that `detail` can form a square glyph with a middle column
///
/// The half and its mirror contribute `2 * floor(detail / 2)` rows and the
/// middle row one more, which equals `detail` only when it is odd.
///
/// # Errors
///
/// Returns an error if `detail` is zero, even, or above `MAX_DETAIL`
pub fn validate_detail(detail: u32) -> Result<()> {
    if detail == 0 {
        return Err(invalid_parameter("detail", &detail, &"must be at least 1"));
    }
    if detail % 2 == 0 {
        return Err(invalid_parameter(
            "detail",
            &detail,
            &"must be odd so the glyph has a middle column",
        ));
    }
    if detail > MAX_DETAIL {
        return Err(invalid_parameter(
            "detail",
            &detail,
            &format!("must be at most {MAX_DETAIL}"),
        ));
    }
    Ok(())
}

/// Generate one glyph of side `detail` from the shared random source
///
/// Draws `floor(detail / 2)` rows of `detail` bits in row-major order, then
/// one middle row. The half is mirrored below the middle row and the stack
/// is rotated counterclockwise.
///
/// # Errors
///
/// Returns an error if:
/// - `detail` is rejected by [`validate_detail`]
/// - The stacked halves do not form a square matrix
pub fn generate_glyph(rng: &mut RandomSource, detail: u32) -> Result<Glyph> {
    validate_detail(detail)?;
    let side = detail as usize;

    let half = Array2::from_shape_simple_fn((side / 2, side), || rng.bit());
    let mirrored = mirror_rows(half.view());
    let middle = Array2::from_shape_simple_fn((1, side), || rng.bit());

    let stacked = concatenate(Axis(0), &[half.view(), middle.view(), mirrored.view()])
        .map_err(|e| computation_error("glyph assembly", &e))?;
    if stacked.dim() != (side, side) {
        return Err(computation_error(
            "glyph assembly",
            &format!("stacked {:?}, expected {side}x{side}", stacked.dim()),
        ));
    }

    Ok(Glyph {
        cells: rotate_quarter_turn(stacked.view()),
    })
}
