//! A header and a pixel grid owned as one unit.

use alloc::vec::Vec;

use crate::bmp::{decode_pixel_array, encode_pixel_array};
use crate::error::BmpError;
use crate::grid::PixelGrid;
use crate::layout::HEADER_SIZE;
use crate::limits::Limits;
use crate::metadata::{BmpMetadata, check_bit_depth};
use crate::ops::Rotation;
use crate::pixel::Pixel;

/// A decoded or freshly created bitmap.
///
/// The metadata and grid always agree on width and height: every operation
/// that changes the dimensions updates both or neither.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Image {
    metadata: BmpMetadata,
    pixels: PixelGrid,
}

impl Image {
    /// Create a blank image.
    ///
    /// Every pixel is set to `fill`, or to [`Pixel::BLACK`] when `fill` is
    /// `None`. `bits_per_pixel` selects the encoded depth and must be 24 or
    /// 32.
    pub fn create(
        width: i32,
        height: i32,
        bits_per_pixel: u16,
        fill: Option<Pixel>,
    ) -> Result<Self, BmpError> {
        check_bit_depth(bits_per_pixel)?;
        let metadata = BmpMetadata::new(width, height, bits_per_pixel)?;
        let pixels = PixelGrid::try_filled(
            width.unsigned_abs() as usize,
            height.unsigned_abs() as usize,
            fill.unwrap_or_default(),
        )?;
        Ok(Self { metadata, pixels })
    }

    /// Decode a complete BMP file held in memory.
    pub fn decode(data: &[u8]) -> Result<Self, BmpError> {
        Self::decode_inner(data, None)
    }

    /// Decode with resource limits checked before the grid is allocated.
    pub fn decode_with_limits(data: &[u8], limits: &Limits) -> Result<Self, BmpError> {
        Self::decode_inner(data, Some(limits))
    }

    fn decode_inner(data: &[u8], limits: Option<&Limits>) -> Result<Self, BmpError> {
        let metadata = BmpMetadata::decode(data)?;
        metadata.check_supported()?;
        if let Some(limits) = limits {
            limits.check(&metadata)?;
        }
        warn_on_stale_sizes(&metadata);

        let pixels = decode_pixel_array(data, &metadata)?;
        log::debug!(
            "decoded {}x{} BMP at {} bpp",
            metadata.width,
            metadata.height,
            metadata.bits_per_pixel
        );
        Ok(Self { metadata, pixels })
    }

    /// Bytes [`encode_into`](Self::encode_into) needs.
    pub fn encoded_len(&self) -> usize {
        self.metadata.encoded_len()
    }

    /// Write the header and pixel data into `out`.
    ///
    /// Bytes between the header and the pixel-data offset are zeroed. Nothing
    /// is written if `out` is shorter than [`encoded_len`](Self::encoded_len).
    pub fn encode_into(&self, out: &mut [u8]) -> Result<(), BmpError> {
        let needed = self.encoded_len();
        if out.len() < needed {
            return Err(BmpError::BufferTooSmall {
                needed,
                actual: out.len(),
            });
        }

        let offset = (self.metadata.pixel_array_offset as usize).max(HEADER_SIZE);
        self.metadata.encode_into(out)?;
        out[HEADER_SIZE..offset].fill(0);
        encode_pixel_array(&self.pixels, &self.metadata, &mut out[offset..needed])?;
        log::debug!(
            "encoded {}x{} BMP at {} bpp ({needed} bytes)",
            self.metadata.width,
            self.metadata.height,
            self.metadata.bits_per_pixel
        );
        Ok(())
    }

    /// Encode into a newly allocated buffer of exactly
    /// [`encoded_len`](Self::encoded_len) bytes.
    pub fn encode(&self) -> Result<Vec<u8>, BmpError> {
        let len = self.encoded_len();
        let mut out = Vec::new();
        out.try_reserve_exact(len)
            .map_err(|_| BmpError::AllocationFailure { bytes: len })?;
        out.resize(len, 0);
        self.encode_into(&mut out)?;
        Ok(out)
    }

    /// Grow the image to `width` x `height`.
    ///
    /// New columns are appended after the last column and new rows after the
    /// last row, all set to `fill`; existing pixels keep their coordinates.
    /// Asking for a smaller width or height fails with
    /// [`BmpError::DimensionShrink`] and leaves the image unchanged.
    pub fn resize(&mut self, width: i32, height: i32, fill: Pixel) -> Result<(), BmpError> {
        if width < self.metadata.width || height < self.metadata.height {
            return Err(BmpError::DimensionShrink {
                width: self.metadata.width,
                height: self.metadata.height,
                new_width: width,
                new_height: height,
            });
        }

        let mut metadata = self.metadata;
        metadata.set_dimensions(width, height)?;
        self.pixels.grow(
            width.unsigned_abs() as usize,
            height.unsigned_abs() as usize,
            fill,
        )?;
        self.metadata = metadata;
        Ok(())
    }

    /// Release the image and its pixel grid.
    pub fn destroy(self) {}

    pub fn metadata(&self) -> &BmpMetadata {
        &self.metadata
    }

    pub fn pixels(&self) -> &PixelGrid {
        &self.pixels
    }

    /// Mutable access to pixel values. The grid cannot be resized through
    /// this reference.
    pub fn pixels_mut(&mut self) -> &mut PixelGrid {
        &mut self.pixels
    }

    pub fn width(&self) -> usize {
        self.pixels.width()
    }

    pub fn height(&self) -> usize {
        self.pixels.height()
    }

    /// Change the encoded bit depth (24 or 32). The grid is unaffected.
    pub fn set_bits_per_pixel(&mut self, bits_per_pixel: u16) -> Result<(), BmpError> {
        check_bit_depth(bits_per_pixel)?;
        self.metadata.set_bits_per_pixel(bits_per_pixel)
    }

    /// Set the horizontal and vertical resolution in pixels per meter.
    pub fn set_resolution(&mut self, h_ppm: i32, v_ppm: i32) {
        self.metadata.h_resolution = h_ppm;
        self.metadata.v_resolution = v_ppm;
    }

    pub fn grayscale(&mut self) {
        self.pixels.grayscale();
    }

    pub fn flip_vertical(&mut self) {
        self.pixels.flip_vertical();
    }

    /// Rotate a square image by 90 degrees. See [`PixelGrid::rotate90`].
    pub fn rotate90(&mut self, rotation: Rotation) -> Result<(), BmpError> {
        self.pixels.rotate90(rotation)
    }

    /// Copy the pixels into an [`imgref::ImgVec`], rows in grid order.
    #[cfg(feature = "imgref")]
    pub fn to_imgvec(&self) -> imgref::ImgVec<rgb::RGB8> {
        let buf = self.pixels.as_slice().iter().map(|&p| p.into()).collect();
        imgref::ImgVec::new(buf, self.width(), self.height())
    }

    /// Build an image from typed pixels, taking rows in order as grid rows.
    #[cfg(feature = "imgref")]
    pub fn from_imgref(
        img: imgref::ImgRef<'_, rgb::RGB8>,
        bits_per_pixel: u16,
    ) -> Result<Self, BmpError> {
        let too_large = || BmpError::DimensionsTooLarge {
            width: i32::MAX,
            height: i32::MAX,
        };
        let width = i32::try_from(img.width()).map_err(|_| too_large())?;
        let height = i32::try_from(img.height()).map_err(|_| too_large())?;
        let mut image = Self::create(width, height, bits_per_pixel, None)?;
        for (src, dst) in img.rows().zip(image.pixels.rows_mut()) {
            for (s, d) in src.iter().zip(dst) {
                *d = (*s).into();
            }
        }
        Ok(image)
    }
}

fn warn_on_stale_sizes(meta: &BmpMetadata) {
    let derived = meta.derived();
    // A zero pixel-data size is legal for uncompressed bitmaps.
    if meta.pixel_array_size != 0 && meta.pixel_array_size != derived.padded_size {
        log::warn!(
            "header pixel-data size {} differs from computed {}",
            meta.pixel_array_size,
            derived.padded_size
        );
    }
    let expected = meta.expected_file_size();
    if u64::from(meta.file_size) != expected {
        log::warn!(
            "header file size {} differs from computed {expected}",
            meta.file_size
        );
    }
}
