//! In-place color and geometry transforms on a [`PixelGrid`].

use crate::error::BmpError;
use crate::grid::PixelGrid;

/// Direction of a quarter-turn.
///
/// Directions are visual for bottom-up bitmaps, where grid row 0 is the
/// bottom of the picture.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Rotation {
    Clockwise,
    CounterClockwise,
}

impl PixelGrid {
    /// Replace every pixel by its truncated BT.601 luma.
    pub fn grayscale(&mut self) {
        for p in self.as_mut_slice() {
            *p = p.to_gray();
        }
    }

    /// Reverse the row order by swapping whole rows.
    pub fn flip_vertical(&mut self) {
        let (width, height) = (self.width(), self.height());
        let pixels = self.as_mut_slice();
        for y in 0..height / 2 {
            let (upper, lower) = pixels.split_at_mut((height - 1 - y) * width);
            upper[y * width..(y + 1) * width].swap_with_slice(&mut lower[..width]);
        }
    }

    /// Reverse the pixel order within every row.
    pub fn flip_horizontal(&mut self) {
        for row in self.rows_mut() {
            row.reverse();
        }
    }

    /// Rotate a square grid by 90 degrees: transpose in place, then reverse
    /// the rows (clockwise) or the columns (counter-clockwise).
    ///
    /// Non-square grids are rejected and left untouched.
    pub fn rotate90(&mut self, rotation: Rotation) -> Result<(), BmpError> {
        let (width, height) = (self.width(), self.height());
        if width != height {
            return Err(BmpError::NotSquare { width, height });
        }

        self.transpose_square();
        match rotation {
            Rotation::Clockwise => self.flip_vertical(),
            Rotation::CounterClockwise => self.flip_horizontal(),
        }
        Ok(())
    }

    fn transpose_square(&mut self) {
        let n = self.width();
        let pixels = self.as_mut_slice();
        for row in 0..n {
            for col in row + 1..n {
                pixels.swap(row * n + col, col * n + row);
            }
        }
    }
}
