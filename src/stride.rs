//! Size-dependent fields derived from width, height and bit depth.

use crate::error::BmpError;
use crate::layout::HEADER_SIZE;

/// Sizes derived from `(width, height, bits_per_pixel)`.
///
/// These are cached on [`crate::BmpMetadata`] and go stale when the
/// dimensions or bit depth change; see [`crate::BmpMetadata::recompute`].
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub struct DerivedSizes {
    /// Bytes per pixel (`bits_per_pixel / 8`).
    pub bytes_per_pixel: u16,
    /// Bytes per row on disk including padding. Always a multiple of 4.
    pub row_stride: u32,
    /// Bytes per row on disk excluding padding.
    pub row_bytes: u32,
    /// Zero bytes appended to each row to reach `row_stride`.
    pub padding: u32,
    /// `width * height`.
    pub pixel_count: u32,
    pub unpadded_size: u32,
    /// Size of the pixel-data region, `unpadded_size + height * padding`.
    pub padded_size: u32,
    /// `54 + padded_size`.
    pub file_size: u32,
}

impl DerivedSizes {
    /// Derive all sizes. Rejects non-positive dimensions.
    pub fn compute(width: i32, height: i32, bits_per_pixel: u16) -> Result<Self, BmpError> {
        if width <= 0 || height <= 0 {
            return Err(BmpError::InvalidDimensions { width, height });
        }
        let too_large = || BmpError::DimensionsTooLarge { width, height };

        let w = u64::from(width.unsigned_abs());
        let h = u64::from(height.unsigned_abs());
        let bytes_per_pixel = bits_per_pixel / 8;

        let row_stride = (u64::from(bits_per_pixel) * w).div_ceil(32) * 4;
        let row_bytes = w * u64::from(bytes_per_pixel);
        // row_stride >= ceil(bits * w / 8) >= row_bytes, so no underflow.
        let padding = row_stride - row_bytes;
        let pixel_count = w * h;
        let unpadded_size = pixel_count * u64::from(bytes_per_pixel);
        let padded_size = unpadded_size + h * padding;
        let file_size = HEADER_SIZE as u64 + padded_size;

        let narrow = |v: u64| u32::try_from(v).map_err(|_| too_large());
        Ok(Self {
            bytes_per_pixel,
            row_stride: narrow(row_stride)?,
            row_bytes: narrow(row_bytes)?,
            padding: narrow(padding)?,
            pixel_count: narrow(pixel_count)?,
            unpadded_size: narrow(unpadded_size)?,
            padded_size: narrow(padded_size)?,
            file_size: narrow(file_size)?,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn two_by_two_24bit() {
        let s = DerivedSizes::compute(2, 2, 24).unwrap();
        assert_eq!(s.bytes_per_pixel, 3);
        assert_eq!(s.row_stride, 8);
        assert_eq!(s.row_bytes, 6);
        assert_eq!(s.padding, 2);
        assert_eq!(s.pixel_count, 4);
        assert_eq!(s.unpadded_size, 12);
        assert_eq!(s.padded_size, 16);
        assert_eq!(s.file_size, 70);
    }

    #[test]
    fn stride_is_word_aligned() {
        for bpp in [24u16, 32] {
            for w in 1..=33 {
                let s = DerivedSizes::compute(w, 3, bpp).unwrap();
                assert_eq!(s.row_stride % 4, 0, "w={w} bpp={bpp}");
                assert!(s.padding <= 3, "w={w} bpp={bpp} padding={}", s.padding);
                assert_eq!(s.padded_size, s.row_stride * 3);
            }
        }
    }

    #[test]
    fn thirty_two_bit_never_pads() {
        let s = DerivedSizes::compute(7, 5, 32).unwrap();
        assert_eq!(s.padding, 0);
        assert_eq!(s.row_stride, 28);
    }

    #[test]
    fn rejects_non_positive() {
        assert_eq!(
            DerivedSizes::compute(0, 4, 24),
            Err(BmpError::InvalidDimensions {
                width: 0,
                height: 4
            })
        );
        assert!(matches!(
            DerivedSizes::compute(4, -4, 24),
            Err(BmpError::InvalidDimensions { .. })
        ));
    }

    #[test]
    fn rejects_overflowing_sizes() {
        assert!(matches!(
            DerivedSizes::compute(i32::MAX, i32::MAX, 32),
            Err(BmpError::DimensionsTooLarge { .. })
        ));
    }
}
