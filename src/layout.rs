//! Byte layout of the 54-byte BITMAPFILEHEADER + BITMAPINFOHEADER.
//!
//! All multi-byte fields are little-endian. Offsets are from the start of the
//! file.

/// One fixed-offset header field.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct Field {
    pub name: &'static str,
    pub offset: usize,
    pub width: usize,
}

impl Field {
    const fn new(name: &'static str, offset: usize, width: usize) -> Self {
        Self {
            name,
            offset,
            width,
        }
    }

    /// Byte range of this field within the header.
    pub const fn range(&self) -> core::ops::Range<usize> {
        self.offset..self.offset + self.width
    }
}

// ── File header (14 bytes) ──────────────────────────────────────────

pub const SIGNATURE: Field = Field::new("signature", 0x00, 2);
pub const FILE_SIZE: Field = Field::new("file_size", 0x02, 4);
pub const RESERVED1: Field = Field::new("reserved1", 0x06, 2);
pub const RESERVED2: Field = Field::new("reserved2", 0x08, 2);
pub const PIXEL_ARRAY_OFFSET: Field = Field::new("pixel_array_offset", 0x0A, 4);

// ── BITMAPINFOHEADER (40 bytes) ─────────────────────────────────────

pub const DIB_HEADER_SIZE: Field = Field::new("dib_header_size", 0x0E, 4);
pub const WIDTH: Field = Field::new("width", 0x12, 4);
pub const HEIGHT: Field = Field::new("height", 0x16, 4);
pub const PLANES: Field = Field::new("planes", 0x1A, 2);
pub const BITS_PER_PIXEL: Field = Field::new("bits_per_pixel", 0x1C, 2);
pub const COMPRESSION: Field = Field::new("compression", 0x1E, 4);
pub const PIXEL_ARRAY_SIZE: Field = Field::new("pixel_array_size", 0x22, 4);
pub const H_RESOLUTION: Field = Field::new("h_resolution", 0x26, 4);
pub const V_RESOLUTION: Field = Field::new("v_resolution", 0x2A, 4);
pub const PALETTE_COLORS: Field = Field::new("palette_colors", 0x2E, 4);
pub const IMPORTANT_COLORS: Field = Field::new("important_colors", 0x32, 4);

/// Every header field in file order.
pub const HEADER_LAYOUT: [Field; 16] = [
    SIGNATURE,
    FILE_SIZE,
    RESERVED1,
    RESERVED2,
    PIXEL_ARRAY_OFFSET,
    DIB_HEADER_SIZE,
    WIDTH,
    HEIGHT,
    PLANES,
    BITS_PER_PIXEL,
    COMPRESSION,
    PIXEL_ARRAY_SIZE,
    H_RESOLUTION,
    V_RESOLUTION,
    PALETTE_COLORS,
    IMPORTANT_COLORS,
];

pub const FILE_HEADER_SIZE: usize = 14;
pub const INFO_HEADER_SIZE: usize = 40;
/// Total header size; also the default pixel-data offset.
pub const HEADER_SIZE: usize = FILE_HEADER_SIZE + INFO_HEADER_SIZE;

/// The only accepted signature, `0x4D42` read as a little-endian `u16`.
pub const BM: [u8; 2] = *b"BM";

// Callers check `data.len() >= HEADER_SIZE` before using these.

pub(crate) fn read_u16(data: &[u8], field: Field) -> u16 {
    debug_assert_eq!(field.width, 2);
    u16::from_le_bytes([data[field.offset], data[field.offset + 1]])
}

pub(crate) fn read_u32(data: &[u8], field: Field) -> u32 {
    debug_assert_eq!(field.width, 4);
    let o = field.offset;
    u32::from_le_bytes([data[o], data[o + 1], data[o + 2], data[o + 3]])
}

pub(crate) fn read_i32(data: &[u8], field: Field) -> i32 {
    read_u32(data, field) as i32
}

pub(crate) fn write_u16(out: &mut [u8], field: Field, value: u16) {
    debug_assert_eq!(field.width, 2);
    out[field.range()].copy_from_slice(&value.to_le_bytes());
}

pub(crate) fn write_u32(out: &mut [u8], field: Field, value: u32) {
    debug_assert_eq!(field.width, 4);
    out[field.range()].copy_from_slice(&value.to_le_bytes());
}

pub(crate) fn write_i32(out: &mut [u8], field: Field, value: i32) {
    write_u32(out, field, value as u32);
}
