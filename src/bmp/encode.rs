//! Pixel-array encoder: [`PixelGrid`] to stride-padded B,G,R(,X) rows.

use crate::error::BmpError;
use crate::grid::PixelGrid;
use crate::metadata::{BmpMetadata, check_bit_depth};

/// Encode `grid` into `out`, which starts at the pixel-data region.
///
/// Each row is written as `width` pixels of `[b, g, r]` (plus an opaque
/// `0xFF` 4th byte at 32 bits), then zero padding up to `row_stride`.
/// `out` must hold at least the padded pixel-data size; nothing is written
/// on error, including when `meta` was edited without
/// [`BmpMetadata::recompute`].
pub fn encode_pixel_array(
    grid: &PixelGrid,
    meta: &BmpMetadata,
    out: &mut [u8],
) -> Result<(), BmpError> {
    check_bit_depth(meta.bits_per_pixel)?;
    let sizes = meta.current_derived()?;

    let width = meta.width.unsigned_abs() as usize;
    let height = meta.height.unsigned_abs() as usize;
    if grid.width() != width || grid.height() != height {
        return Err(BmpError::InvalidData(alloc::format!(
            "grid is {}x{} but header describes {width}x{height}",
            grid.width(),
            grid.height()
        )));
    }

    let bpp = usize::from(sizes.bytes_per_pixel);
    let stride = sizes.row_stride as usize;
    let needed = sizes.padded_size as usize;
    if out.len() < needed {
        return Err(BmpError::BufferTooSmall {
            needed,
            actual: out.len(),
        });
    }

    for (src_row, dst_row) in grid.rows().zip(out[..needed].chunks_exact_mut(stride)) {
        let (data, padding) = dst_row.split_at_mut(width * bpp);
        for (p, dst) in src_row.iter().zip(data.chunks_exact_mut(bpp)) {
            p.write_bgr(dst);
            if bpp == 4 {
                dst[3] = 0xFF;
            }
        }
        padding.fill(0);
    }

    Ok(())
}
