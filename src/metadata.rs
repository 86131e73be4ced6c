//! The 54-byte BMP header as a record.

use crate::error::BmpError;
use crate::layout::{self, BM, HEADER_SIZE, INFO_HEADER_SIZE};
use crate::stride::DerivedSizes;

/// Parsed BITMAPFILEHEADER + BITMAPINFOHEADER.
///
/// The stored fields mirror the file byte for byte. The cached
/// [`DerivedSizes`] are a function of `width`, `height` and
/// `bits_per_pixel`; after assigning any of those directly, call
/// [`recompute`](Self::recompute) before encoding.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct BmpMetadata {
    pub signature: [u8; 2],
    pub file_size: u32,
    pub reserved1: u16,
    pub reserved2: u16,
    pub pixel_array_offset: u32,
    pub dib_header_size: u32,
    pub width: i32,
    pub height: i32,
    pub planes: u16,
    pub bits_per_pixel: u16,
    pub compression: u32,
    pub pixel_array_size: u32,
    /// Horizontal resolution in pixels per meter.
    pub h_resolution: i32,
    /// Vertical resolution in pixels per meter.
    pub v_resolution: i32,
    pub palette_colors: u32,
    pub important_colors: u32,
    derived: DerivedSizes,
}

impl BmpMetadata {
    /// Fresh uncompressed header for the given dimensions.
    ///
    /// Pixel data starts right after the header, resolutions and palette
    /// counts are zero, and the stored sizes are filled from the derived ones.
    pub fn new(width: i32, height: i32, bits_per_pixel: u16) -> Result<Self, BmpError> {
        let derived = DerivedSizes::compute(width, height, bits_per_pixel)?;
        Ok(Self {
            signature: BM,
            file_size: derived.file_size,
            reserved1: 0,
            reserved2: 0,
            pixel_array_offset: HEADER_SIZE as u32,
            dib_header_size: INFO_HEADER_SIZE as u32,
            width,
            height,
            planes: 1,
            bits_per_pixel,
            compression: 0,
            pixel_array_size: derived.padded_size,
            h_resolution: 0,
            v_resolution: 0,
            palette_colors: 0,
            important_colors: 0,
            derived,
        })
    }

    /// Parse the header from the start of `data`.
    ///
    /// Only the signature and the dimensions are validated here; the stored
    /// size fields are kept as found even if they disagree with the derived
    /// ones.
    pub fn decode(data: &[u8]) -> Result<Self, BmpError> {
        if data.get(layout::SIGNATURE.range()) != Some(&BM[..]) {
            log::debug!("rejecting input: missing BM signature");
            return Err(BmpError::InvalidSignature);
        }
        if data.len() < HEADER_SIZE {
            return Err(BmpError::UnexpectedEof);
        }

        let width = layout::read_i32(data, layout::WIDTH);
        let height = layout::read_i32(data, layout::HEIGHT);
        let bits_per_pixel = layout::read_u16(data, layout::BITS_PER_PIXEL);
        let derived = DerivedSizes::compute(width, height, bits_per_pixel)?;

        Ok(Self {
            signature: BM,
            file_size: layout::read_u32(data, layout::FILE_SIZE),
            reserved1: layout::read_u16(data, layout::RESERVED1),
            reserved2: layout::read_u16(data, layout::RESERVED2),
            pixel_array_offset: layout::read_u32(data, layout::PIXEL_ARRAY_OFFSET),
            dib_header_size: layout::read_u32(data, layout::DIB_HEADER_SIZE),
            width,
            height,
            planes: layout::read_u16(data, layout::PLANES),
            bits_per_pixel,
            compression: layout::read_u32(data, layout::COMPRESSION),
            pixel_array_size: layout::read_u32(data, layout::PIXEL_ARRAY_SIZE),
            h_resolution: layout::read_i32(data, layout::H_RESOLUTION),
            v_resolution: layout::read_i32(data, layout::V_RESOLUTION),
            palette_colors: layout::read_u32(data, layout::PALETTE_COLORS),
            important_colors: layout::read_u32(data, layout::IMPORTANT_COLORS),
            derived,
        })
    }

    /// Write the 54 header bytes to the start of `out`.
    ///
    /// Nothing is written if `out` is shorter than the header.
    pub fn encode_into(&self, out: &mut [u8]) -> Result<(), BmpError> {
        let actual = out.len();
        let Some(header) = out.first_chunk_mut::<HEADER_SIZE>() else {
            return Err(BmpError::BufferTooSmall {
                needed: HEADER_SIZE,
                actual,
            });
        };
        self.write_fields(header);
        Ok(())
    }

    /// The header as a standalone byte array.
    pub fn to_bytes(&self) -> [u8; HEADER_SIZE] {
        let mut out = [0u8; HEADER_SIZE];
        self.write_fields(&mut out);
        out
    }

    fn write_fields(&self, out: &mut [u8; HEADER_SIZE]) {
        out[layout::SIGNATURE.range()].copy_from_slice(&self.signature);
        layout::write_u32(out, layout::FILE_SIZE, self.file_size);
        layout::write_u16(out, layout::RESERVED1, self.reserved1);
        layout::write_u16(out, layout::RESERVED2, self.reserved2);
        layout::write_u32(out, layout::PIXEL_ARRAY_OFFSET, self.pixel_array_offset);

        layout::write_u32(out, layout::DIB_HEADER_SIZE, self.dib_header_size);
        layout::write_i32(out, layout::WIDTH, self.width);
        layout::write_i32(out, layout::HEIGHT, self.height);
        layout::write_u16(out, layout::PLANES, self.planes);
        layout::write_u16(out, layout::BITS_PER_PIXEL, self.bits_per_pixel);
        layout::write_u32(out, layout::COMPRESSION, self.compression);
        layout::write_u32(out, layout::PIXEL_ARRAY_SIZE, self.pixel_array_size);
        layout::write_i32(out, layout::H_RESOLUTION, self.h_resolution);
        layout::write_i32(out, layout::V_RESOLUTION, self.v_resolution);
        layout::write_u32(out, layout::PALETTE_COLORS, self.palette_colors);
        layout::write_u32(out, layout::IMPORTANT_COLORS, self.important_colors);
    }

    /// Sizes derived at the last decode, construction or recompute.
    pub fn derived(&self) -> &DerivedSizes {
        &self.derived
    }

    /// Refresh the derived sizes from `width`, `height` and
    /// `bits_per_pixel`, then overwrite the stored pixel-data size and file
    /// size to match.
    ///
    /// On error the record is left unchanged.
    pub fn recompute(&mut self) -> Result<(), BmpError> {
        let derived = DerivedSizes::compute(self.width, self.height, self.bits_per_pixel)?;
        let file_size = u64::from(self.pixel_array_offset) + u64::from(derived.padded_size);
        let file_size = u32::try_from(file_size).map_err(|_| BmpError::DimensionsTooLarge {
            width: self.width,
            height: self.height,
        })?;
        self.derived = derived;
        self.pixel_array_size = derived.padded_size;
        self.file_size = file_size;
        Ok(())
    }

    /// The cached sizes, provided they still match `width`, `height` and
    /// `bits_per_pixel`. A record edited without [`recompute`](Self::recompute)
    /// fails with [`BmpError::InvalidData`].
    pub(crate) fn current_derived(&self) -> Result<&DerivedSizes, BmpError> {
        let current = DerivedSizes::compute(self.width, self.height, self.bits_per_pixel)?;
        if current != self.derived {
            return Err(BmpError::InvalidData(
                "derived sizes are stale; call recompute".into(),
            ));
        }
        Ok(&self.derived)
    }

    /// File size implied by the pixel-data offset and the derived padded size.
    pub(crate) fn expected_file_size(&self) -> u64 {
        u64::from(self.pixel_array_offset) + u64::from(self.derived.padded_size)
    }

    /// Change the dimensions and recompute. On error nothing changes.
    pub fn set_dimensions(&mut self, width: i32, height: i32) -> Result<(), BmpError> {
        let mut next = *self;
        next.width = width;
        next.height = height;
        next.recompute()?;
        *self = next;
        Ok(())
    }

    /// Change the bit depth and recompute. On error nothing changes.
    pub fn set_bits_per_pixel(&mut self, bits_per_pixel: u16) -> Result<(), BmpError> {
        let mut next = *self;
        next.bits_per_pixel = bits_per_pixel;
        next.recompute()?;
        *self = next;
        Ok(())
    }

    /// Bytes needed to hold the header, any gap before the pixel data, and
    /// the padded pixel data.
    pub fn encoded_len(&self) -> usize {
        (self.pixel_array_offset as usize).max(HEADER_SIZE) + self.derived.padded_size as usize
    }

    /// Reject anything other than uncompressed 24/32-bit BITMAPINFOHEADER
    /// images with pixel data placed after the header.
    pub(crate) fn check_supported(&self) -> Result<(), BmpError> {
        if self.dib_header_size as usize != INFO_HEADER_SIZE {
            return Err(BmpError::UnsupportedVariant(alloc::format!(
                "DIB header size {} (only 40-byte BITMAPINFOHEADER)",
                self.dib_header_size
            )));
        }
        if self.compression != 0 {
            return Err(BmpError::UnsupportedVariant(alloc::format!(
                "compression method {}",
                self.compression
            )));
        }
        check_bit_depth(self.bits_per_pixel)?;
        if (self.pixel_array_offset as usize) < HEADER_SIZE {
            return Err(BmpError::InvalidHeader(alloc::format!(
                "pixel data offset {} overlaps the header",
                self.pixel_array_offset
            )));
        }
        Ok(())
    }
}

/// Only byte-aligned depths with at least three channels are supported.
pub(crate) fn check_bit_depth(bits_per_pixel: u16) -> Result<(), BmpError> {
    match bits_per_pixel {
        24 | 32 => Ok(()),
        other => Err(BmpError::UnsupportedVariant(alloc::format!(
            "{other} bits per pixel (only 24 and 32)"
        ))),
    }
}
