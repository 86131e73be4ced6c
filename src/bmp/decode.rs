//! Pixel-array decoder: stride-padded B,G,R(,X) rows to a [`PixelGrid`].

use crate::error::BmpError;
use crate::grid::PixelGrid;
use crate::metadata::{BmpMetadata, check_bit_depth};
use crate::pixel::Pixel;

/// Decode the pixel-data region of a whole BMP file held in `data`.
///
/// Reads `height` rows of `row_stride` bytes starting at
/// `meta.pixel_array_offset`. Within each row the first `width` pixels are
/// read as `[b, g, r]` (a 4th byte is skipped for 32-bit data) and the row
/// padding is ignored. Rows are kept in file order.
///
/// `meta` must be current: after editing its dimensions or bit depth
/// directly, call [`BmpMetadata::recompute`] first.
pub fn decode_pixel_array(data: &[u8], meta: &BmpMetadata) -> Result<PixelGrid, BmpError> {
    check_bit_depth(meta.bits_per_pixel)?;

    let sizes = meta.current_derived()?;
    let bpp = usize::from(sizes.bytes_per_pixel);
    let stride = sizes.row_stride as usize;
    let start = meta.pixel_array_offset as usize;
    let end = start
        .checked_add(sizes.padded_size as usize)
        .ok_or(BmpError::UnexpectedEof)?;
    let region = data.get(start..end).ok_or(BmpError::UnexpectedEof)?;

    let width = meta.width.unsigned_abs() as usize;
    let height = meta.height.unsigned_abs() as usize;
    let mut grid = PixelGrid::try_filled(width, height, Pixel::BLACK)?;

    for (src_row, dst_row) in region.chunks_exact(stride).zip(grid.rows_mut()) {
        for (src, dst) in src_row[..width * bpp].chunks_exact(bpp).zip(dst_row) {
            *dst = Pixel::from_bgr(src);
        }
    }

    Ok(grid)
}
