use crate::error::BmpError;
use crate::metadata::BmpMetadata;
use crate::pixel::Pixel;

/// Resource limits for decode operations.
///
/// All fields default to `None` (no limit).
#[derive(Clone, Debug, Default)]
pub struct Limits {
    pub max_width: Option<u64>,
    pub max_height: Option<u64>,
    /// Maximum pixel count (width * height).
    pub max_pixels: Option<u64>,
    /// Maximum memory bytes for the decoded pixel grid.
    pub max_memory_bytes: Option<u64>,
}

impl Limits {
    /// Check a parsed header against the limits before any grid is allocated.
    pub(crate) fn check(&self, meta: &BmpMetadata) -> Result<(), BmpError> {
        // Dimensions are already validated positive by the stride calculator.
        let width = u64::from(meta.width.unsigned_abs());
        let height = u64::from(meta.height.unsigned_abs());

        if let Some(max_w) = self.max_width {
            if width > max_w {
                return Err(BmpError::LimitExceeded(alloc::format!(
                    "width {width} exceeds limit {max_w}"
                )));
            }
        }
        if let Some(max_h) = self.max_height {
            if height > max_h {
                return Err(BmpError::LimitExceeded(alloc::format!(
                    "height {height} exceeds limit {max_h}"
                )));
            }
        }
        let pixels = width * height;
        if let Some(max_px) = self.max_pixels {
            if pixels > max_px {
                return Err(BmpError::LimitExceeded(alloc::format!(
                    "pixel count {pixels} exceeds limit {max_px}"
                )));
            }
        }
        if let Some(max_mem) = self.max_memory_bytes {
            let bytes = pixels.saturating_mul(core::mem::size_of::<Pixel>() as u64);
            if bytes > max_mem {
                return Err(BmpError::LimitExceeded(alloc::format!(
                    "grid of {bytes} bytes exceeds memory limit {max_mem}"
                )));
            }
        }
        Ok(())
    }
}
