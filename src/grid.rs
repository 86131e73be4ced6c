//! Dense row-major pixel storage.

use alloc::vec::Vec;
use core::ops::{Index, IndexMut};

use crate::error::BmpError;
use crate::pixel::Pixel;

/// A `height` x `width` grid of [`Pixel`]s in one contiguous buffer.
///
/// Row 0 is the first row stored in the file's pixel data. For ordinary
/// (positive-height) bitmaps that is the visually bottom row; the codec never
/// reorders rows.
///
/// `grid[y]` is row `y` as a slice, so `grid[y][x]` addresses one pixel.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct PixelGrid {
    pixels: Vec<Pixel>,
    width: usize,
    height: usize,
}

impl PixelGrid {
    /// Allocate a grid with every cell set to `fill`.
    ///
    /// Both dimensions must be non-zero; callers validate them first.
    pub(crate) fn try_filled(width: usize, height: usize, fill: Pixel) -> Result<Self, BmpError> {
        debug_assert!(width > 0 && height > 0);
        let count = width
            .checked_mul(height)
            .ok_or(BmpError::AllocationFailure { bytes: usize::MAX })?;
        let pixels = try_alloc(count, fill)?;
        Ok(Self {
            pixels,
            width,
            height,
        })
    }

    pub fn width(&self) -> usize {
        self.width
    }

    pub fn height(&self) -> usize {
        self.height
    }

    /// Pixel at column `x` of row `y`.
    pub fn get(&self, x: usize, y: usize) -> Option<&Pixel> {
        if x >= self.width || y >= self.height {
            return None;
        }
        self.pixels.get(y * self.width + x)
    }

    pub fn get_mut(&mut self, x: usize, y: usize) -> Option<&mut Pixel> {
        if x >= self.width || y >= self.height {
            return None;
        }
        self.pixels.get_mut(y * self.width + x)
    }

    /// Row `y`, or `None` past the last row.
    pub fn row(&self, y: usize) -> Option<&[Pixel]> {
        if y >= self.height {
            return None;
        }
        Some(&self.pixels[self.row_range(y)])
    }

    pub fn row_mut(&mut self, y: usize) -> Option<&mut [Pixel]> {
        if y >= self.height {
            return None;
        }
        let range = self.row_range(y);
        Some(&mut self.pixels[range])
    }

    pub fn rows(&self) -> core::slice::ChunksExact<'_, Pixel> {
        self.pixels.chunks_exact(self.width)
    }

    pub fn rows_mut(&mut self) -> core::slice::ChunksExactMut<'_, Pixel> {
        self.pixels.chunks_exact_mut(self.width)
    }

    /// All pixels, row after row.
    pub fn as_slice(&self) -> &[Pixel] {
        &self.pixels
    }

    pub fn as_mut_slice(&mut self) -> &mut [Pixel] {
        &mut self.pixels
    }

    #[inline]
    fn row_range(&self, y: usize) -> core::ops::Range<usize> {
        let start = y * self.width;
        start..start + self.width
    }

    /// Grow to `width` x `height`, keeping every existing pixel at its
    /// coordinates. New columns go after the last column of each row and new
    /// rows after the last row; all new cells are `fill`.
    ///
    /// On error the grid is unchanged.
    pub(crate) fn grow(&mut self, width: usize, height: usize, fill: Pixel) -> Result<(), BmpError> {
        debug_assert!(width >= self.width && height >= self.height);
        if width == self.width && height == self.height {
            return Ok(());
        }

        let count = width
            .checked_mul(height)
            .ok_or(BmpError::AllocationFailure { bytes: usize::MAX })?;
        let mut pixels = try_alloc(count, fill)?;
        for (src, dst) in self.rows().zip(pixels.chunks_exact_mut(width)) {
            dst[..src.len()].copy_from_slice(src);
        }

        self.pixels = pixels;
        self.width = width;
        self.height = height;
        Ok(())
    }
}

impl Index<usize> for PixelGrid {
    type Output = [Pixel];

    /// Row `y`. Panics if `y >= height`.
    fn index(&self, y: usize) -> &[Pixel] {
        &self.pixels[self.row_range(y)]
    }
}

impl IndexMut<usize> for PixelGrid {
    fn index_mut(&mut self, y: usize) -> &mut [Pixel] {
        let range = self.row_range(y);
        &mut self.pixels[range]
    }
}

fn try_alloc(count: usize, fill: Pixel) -> Result<Vec<Pixel>, BmpError> {
    let bytes = count.saturating_mul(core::mem::size_of::<Pixel>());
    let mut pixels = Vec::new();
    pixels
        .try_reserve_exact(count)
        .map_err(|_| BmpError::AllocationFailure { bytes })?;
    pixels.resize(count, fill);
    Ok(pixels)
}
