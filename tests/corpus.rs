//! Test corpus: roundtrips and transform properties over various patterns,
//! sizes, and bit depths.

use bmpgrid::*;

fn checkerboard(w: i32, h: i32, bits: u16) -> Image {
    let mut image = Image::create(w, h, bits, None).unwrap();
    for (y, row) in image.pixels_mut().rows_mut().enumerate() {
        for (x, p) in row.iter_mut().enumerate() {
            *p = if (x + y) % 2 == 0 {
                Pixel::new(200, 220, 240)
            } else {
                Pixel::new(10, 40, 70)
            };
        }
    }
    image
}

fn noise_pattern(w: i32, h: i32, bits: u16) -> Image {
    let mut image = Image::create(w, h, bits, None).unwrap();
    let mut state: u32 = 0xDEAD_BEEF;
    for p in image.pixels_mut().as_mut_slice() {
        state ^= state << 13;
        state ^= state >> 17;
        state ^= state << 5;
        *p = Pixel::new(state as u8, (state >> 8) as u8, (state >> 16) as u8);
    }
    image
}

fn roundtrip(image: &Image) -> Image {
    let encoded = image.encode().unwrap();
    assert_eq!(encoded.len(), image.encoded_len());
    Image::decode(&encoded).unwrap()
}

// ── Codec roundtrips ─────────────────────────────────────────────────

#[test]
fn flat_24bit_roundtrip() {
    let image = checkerboard(10, 8, 24);
    assert_eq!(roundtrip(&image), image);
}

#[test]
fn flat_32bit_roundtrip() {
    let image = noise_pattern(7, 5, 32);
    assert_eq!(roundtrip(&image), image);
}

#[test]
fn every_padding_width_roundtrips() {
    // Widths 1..=8 cover padding of 0, 1, 2 and 3 bytes at 24 bits.
    for w in 1..=8 {
        for bits in [24, 32] {
            let image = noise_pattern(w, 3, bits);
            let decoded = roundtrip(&image);
            assert_eq!(decoded.pixels(), image.pixels(), "w={w} bits={bits}");
        }
    }
}

#[test]
fn padding_bytes_are_zero() {
    let image = noise_pattern(5, 4, 24);
    let encoded = image.encode().unwrap();
    let d = *image.metadata().derived();
    assert_eq!(d.padding, 1);
    for row in encoded[54..].chunks_exact(d.row_stride as usize) {
        assert_eq!(row[d.row_bytes as usize..], [0]);
    }
}

#[test]
fn single_pixel_bmp() {
    let image = Image::create(1, 1, 24, Some(Pixel::new(255, 128, 0))).unwrap();
    let encoded = image.encode().unwrap();
    assert_eq!(encoded.len(), 58);
    assert_eq!(&encoded[54..], &[0, 128, 255, 0]);
    assert_eq!(roundtrip(&image), image);
}

#[test]
fn wide_and_tall_images() {
    let wide = noise_pattern(301, 1, 24);
    assert_eq!(roundtrip(&wide), wide);
    let tall = checkerboard(1, 257, 24);
    assert_eq!(roundtrip(&tall), tall);
}

// ── Transforms ───────────────────────────────────────────────────────

#[test]
fn grayscale_primaries() {
    for (input, expected) in [
        (Pixel::new(255, 0, 0), 76),
        (Pixel::new(0, 255, 0), 149),
        (Pixel::new(0, 0, 255), 29),
        (Pixel::WHITE, 255),
    ] {
        let mut image = Image::create(2, 2, 24, Some(input)).unwrap();
        image.grayscale();
        let gray = Pixel::new(expected, expected, expected);
        assert!(image.pixels().as_slice().iter().all(|&p| p == gray));
    }
}

#[test]
fn grayscale_is_idempotent() {
    let mut image = noise_pattern(6, 6, 24);
    image.grayscale();
    let once = image.clone();
    image.grayscale();
    assert_eq!(image, once);
}

#[test]
fn flip_vertical_twice_is_identity() {
    for (w, h) in [(1, 1), (3, 2), (4, 5), (9, 9)] {
        let original = noise_pattern(w, h, 24);
        let mut image = original.clone();
        image.flip_vertical();
        if h > 1 {
            assert_ne!(image, original);
        }
        image.flip_vertical();
        assert_eq!(image, original);
    }
}

#[test]
fn flip_vertical_moves_rows() {
    let original = noise_pattern(3, 4, 24);
    let mut image = original.clone();
    image.flip_vertical();
    for y in 0..4 {
        assert_eq!(image.pixels()[y], original.pixels()[3 - y]);
    }
}

#[test]
fn four_rotations_are_identity() {
    for n in 1..=6 {
        for rotation in [Rotation::Clockwise, Rotation::CounterClockwise] {
            let original = noise_pattern(n, n, 24);
            let mut image = original.clone();
            for _ in 0..4 {
                image.rotate90(rotation).unwrap();
            }
            assert_eq!(image, original, "n={n} {rotation:?}");
        }
    }
}

#[test]
fn clockwise_twice_is_half_turn() {
    let original = noise_pattern(5, 5, 24);
    let mut image = original.clone();
    image.rotate90(Rotation::Clockwise).unwrap();
    image.rotate90(Rotation::Clockwise).unwrap();
    let n = 5;
    for y in 0..n {
        for x in 0..n {
            assert_eq!(image.pixels()[y][x], original.pixels()[n - 1 - y][n - 1 - x]);
        }
    }
}

#[test]
fn rotate_rejects_non_square() {
    let original = checkerboard(4, 3, 24);
    let mut image = original.clone();
    assert_eq!(
        image.rotate90(Rotation::CounterClockwise),
        Err(BmpError::NotSquare {
            width: 4,
            height: 3
        })
    );
    assert_eq!(image, original);
}

#[test]
fn rotated_image_survives_roundtrip() {
    let mut image = noise_pattern(6, 6, 32);
    image.rotate90(Rotation::Clockwise).unwrap();
    image.grayscale();
    assert_eq!(roundtrip(&image), image);
}

// ── Resize ───────────────────────────────────────────────────────────

#[test]
fn resize_grows_and_keeps_pixels() {
    let original = noise_pattern(3, 2, 24);
    let mut image = original.clone();
    let fill = Pixel::new(1, 2, 3);
    image.resize(5, 4, fill).unwrap();

    assert_eq!((image.width(), image.height()), (5, 4));
    let meta = image.metadata();
    assert_eq!((meta.width, meta.height), (5, 4));
    assert_eq!(meta.derived().row_stride, 16);
    assert_eq!(meta.pixel_array_size, 64);
    assert_eq!(meta.file_size, 54 + 64);

    for y in 0..4 {
        for x in 0..5 {
            let expected = if x < 3 && y < 2 {
                original.pixels()[y][x]
            } else {
                fill
            };
            assert_eq!(image.pixels()[y][x], expected, "({x}, {y})");
        }
    }
    assert_eq!(roundtrip(&image), image);
}

#[test]
fn resize_same_size_is_noop() {
    let original = checkerboard(3, 3, 24);
    let mut image = original.clone();
    image.resize(3, 3, Pixel::WHITE).unwrap();
    assert_eq!(image, original);
}

#[test]
fn resize_shrink_rejected() {
    let original = checkerboard(4, 4, 24);
    for (w, h) in [(3, 4), (4, 3), (1, 1), (10, 2)] {
        let mut image = original.clone();
        assert!(matches!(
            image.resize(w, h, Pixel::WHITE),
            Err(BmpError::DimensionShrink { .. })
        ));
        assert_eq!(image, original);
    }
}

// ── Limits ───────────────────────────────────────────────────────────

#[test]
fn limits_max_width() {
    let encoded = checkerboard(2, 2, 24).encode().unwrap();
    let limits = Limits {
        max_width: Some(1),
        ..Default::default()
    };
    assert!(Image::decode_with_limits(&encoded, &limits).is_err());
}

#[test]
fn limits_max_height() {
    let encoded = checkerboard(2, 2, 24).encode().unwrap();
    let limits = Limits {
        max_height: Some(1),
        ..Default::default()
    };
    assert!(Image::decode_with_limits(&encoded, &limits).is_err());
}

#[test]
fn limits_max_memory() {
    let encoded = checkerboard(2, 2, 24).encode().unwrap();
    let limits = Limits {
        max_memory_bytes: Some(1),
        ..Default::default()
    };
    assert!(matches!(
        Image::decode_with_limits(&encoded, &limits),
        Err(BmpError::LimitExceeded(_))
    ));
}

// ── BMP conformance corpus tests (codec-corpus crate) ────────────────

#[cfg(not(target_arch = "wasm32"))]
mod bmp_corpus {
    use bmpgrid::*;

    fn get_corpus(subdir: &str) -> Option<std::path::PathBuf> {
        let corpus = codec_corpus::Corpus::new().ok()?;
        corpus.get(&format!("bmp-conformance/{subdir}")).ok()
    }

    fn bmp_files(dir: &std::path::Path) -> Vec<std::path::PathBuf> {
        let mut files: Vec<_> = std::fs::read_dir(dir)
            .unwrap()
            .filter_map(|e| e.ok())
            .map(|e| e.path())
            .filter(|p| p.extension().is_some_and(|e| e == "bmp"))
            .collect();
        files.sort();
        files
    }

    fn file_name(p: &std::path::Path) -> String {
        p.file_name().unwrap().to_string_lossy().into_owned()
    }

    /// Every accepted file must re-encode to identical pixels; rejected files
    /// must fail with a typed error, never a panic.
    fn check_dir(subdir: &str) {
        let Some(dir) = get_corpus(subdir) else {
            eprintln!("Skipping: bmp-conformance corpus not available");
            return;
        };
        let files = bmp_files(&dir);
        let limits = Limits {
            max_memory_bytes: Some(64 * 1024 * 1024),
            ..Default::default()
        };

        let mut panics = Vec::new();
        let mut mismatches = Vec::new();
        let mut accepted = 0u32;
        for path in &files {
            let data = std::fs::read(path).unwrap();
            let name = file_name(path);
            let result = std::panic::catch_unwind(|| Image::decode_with_limits(&data, &limits));
            match result {
                Err(_) => panics.push(name),
                Ok(Err(_)) => {}
                Ok(Ok(image)) => {
                    accepted += 1;
                    let reencoded = image.encode().unwrap();
                    let decoded = Image::decode(&reencoded).unwrap();
                    if decoded.pixels() != image.pixels() {
                        mismatches.push(name);
                    }
                }
            }
        }

        eprintln!("{subdir}/: {accepted}/{} accepted", files.len());
        assert!(
            panics.is_empty(),
            "{subdir}/ files that panicked:\n  {}",
            panics.join("\n  ")
        );
        assert!(
            mismatches.is_empty(),
            "{subdir}/ files that changed on re-encode:\n  {}",
            mismatches.join("\n  ")
        );
    }

    #[test]
    #[ignore]
    fn valid_files() {
        check_dir("valid");
    }

    #[test]
    #[ignore]
    fn non_conformant_files() {
        check_dir("non-conformant");
    }

    #[test]
    #[ignore]
    fn invalid_files() {
        check_dir("invalid");
    }
}
