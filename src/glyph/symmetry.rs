//! Matrix reflections and rotations used to build mirrored glyphs

use ndarray::{Array2, ArrayView2, Axis};

/// Reverse the row order of a matrix
pub fn mirror_rows(mut matrix: ArrayView2<'_, u8>) -> Array2<u8> {
    matrix.invert_axis(Axis(0));
    matrix.as_standard_layout().into_owned()
}

/// Rotate a matrix one quarter turn counterclockwise
///
/// Element `(i, j)` of the result is element `(j, cols - 1 - i)` of the
/// input, so a matrix symmetric about its middle row becomes symmetric about
/// its middle column.
pub fn rotate_quarter_turn(mut matrix: ArrayView2<'_, u8>) -> Array2<u8> {
    matrix.invert_axis(Axis(1));
    matrix.reversed_axes().as_standard_layout().into_owned()
}

/// Check that every row reads the same left to right and right to left
pub fn is_mirror_symmetric(matrix: ArrayView2<'_, u8>) -> bool {
    let mut flipped = matrix;
    flipped.invert_axis(Axis(1));
    matrix == flipped
}
