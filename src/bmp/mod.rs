//! Pixel-array codec for uncompressed 24-bit and 32-bit BMP.
//!
//! These work on the pixel-data region only; the header is handled by
//! [`crate::BmpMetadata`], and [`crate::Image`] ties the two together.

mod decode;
mod encode;

pub use decode::decode_pixel_array;
pub use encode::encode_pixel_array;
