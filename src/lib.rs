//! # bmpgrid
//!
//! Uncompressed Windows BMP decoder and encoder built around a randomly
//! indexable RGB pixel grid, with in-place grayscale, flip and rotation.
//!
//! ## Supported Format
//!
//! - `BM` files with a 40-byte BITMAPINFOHEADER
//! - 24-bit (B,G,R) and 32-bit (B,G,R,X) pixels, compression method 0
//! - Positive heights only; rows stay in file order (see [`PixelGrid`])
//!
//! ## Non-Goals
//!
//! - Compressed (RLE, bitfields, JPEG/PNG) bitmaps
//! - Palette (indexed) bitmaps
//! - V4/V5 and OS/2 info headers
//! - File or stream I/O: the caller supplies and receives byte buffers
//!
//! ## Usage
//!
//! ```
//! use bmpgrid::{Image, Pixel, Rotation};
//!
//! let mut image = Image::create(4, 4, 24, Some(Pixel::new(255, 0, 0)))?;
//! image.rotate90(Rotation::Clockwise)?;
//! image.grayscale();
//! assert_eq!(image.pixels()[0][0], Pixel::new(76, 76, 76));
//!
//! let bytes = image.encode()?;
//! assert_eq!(bytes.len(), 54 + 4 * 12);
//!
//! let decoded = Image::decode(&bytes)?;
//! assert_eq!(decoded.pixels(), image.pixels());
//! # Ok::<(), bmpgrid::BmpError>(())
//! ```
//!
//! ## Derived sizes
//!
//! [`BmpMetadata`] caches sizes derived from width, height and bit depth
//! ([`DerivedSizes`]). [`Image`] keeps them current; when editing a
//! [`BmpMetadata`] directly, call [`BmpMetadata::recompute`] afterwards.

#![cfg_attr(not(feature = "std"), no_std)]
#![forbid(unsafe_code)]

extern crate alloc;

mod error;
mod grid;
mod image;
mod limits;
mod metadata;
mod ops;
mod pixel;
mod stride;

pub mod bmp;
pub mod layout;

// Re-exports
pub use error::BmpError;
pub use grid::PixelGrid;
pub use image::Image;
pub use limits::Limits;
pub use metadata::BmpMetadata;
pub use ops::Rotation;
pub use pixel::Pixel;
pub use stride::DerivedSizes;

#[cfg(feature = "rgb")]
pub use rgb;

#[cfg(feature = "imgref")]
pub use imgref;
