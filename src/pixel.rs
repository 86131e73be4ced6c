/// One RGB pixel. Alpha from 32-bit sources is not retained.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub struct Pixel {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl Pixel {
    pub const BLACK: Self = Self::new(0, 0, 0);
    pub const WHITE: Self = Self::new(255, 255, 255);

    pub const fn new(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }

    /// Read a pixel stored on disk as `[b, g, r, ..]`.
    ///
    /// `bytes` must hold at least three bytes; anything after the third is
    /// ignored.
    #[inline]
    pub(crate) fn from_bgr(bytes: &[u8]) -> Self {
        Self {
            r: bytes[2],
            g: bytes[1],
            b: bytes[0],
        }
    }

    /// Write the pixel as `[b, g, r]` into the first three bytes of `out`.
    #[inline]
    pub(crate) fn write_bgr(self, out: &mut [u8]) {
        out[0] = self.b;
        out[1] = self.g;
        out[2] = self.r;
    }

    /// BT.601 luma, truncated: `floor(0.299 r + 0.587 g + 0.114 b)`.
    ///
    /// Computed in integers so the floor is exact.
    pub fn luma(self) -> u8 {
        let sum = 299 * u32::from(self.r) + 587 * u32::from(self.g) + 114 * u32::from(self.b);
        // sum <= 255_000
        (sum / 1000) as u8
    }

    /// This pixel with all three channels set to its luma.
    pub fn to_gray(self) -> Self {
        let y = self.luma();
        Self::new(y, y, y)
    }
}

#[cfg(feature = "rgb")]
impl From<rgb::RGB8> for Pixel {
    fn from(p: rgb::RGB8) -> Self {
        Self::new(p.r, p.g, p.b)
    }
}

#[cfg(feature = "rgb")]
impl From<Pixel> for rgb::RGB8 {
    fn from(p: Pixel) -> Self {
        rgb::RGB8::new(p.r, p.g, p.b)
    }
}
