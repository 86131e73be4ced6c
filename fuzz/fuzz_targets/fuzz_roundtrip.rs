#![no_main]
use bmpgrid::*;
use libfuzzer_sys::fuzz_target;

fuzz_target!(|data: &[u8]| {
    let limits = Limits {
        max_memory_bytes: Some(256 * 1024 * 1024),
        ..Default::default()
    };
    // If we can decode it, re-encoding and decoding again must produce identical pixels
    let Ok(mut decoded) = Image::decode_with_limits(data, &limits) else {
        return;
    };

    let reencoded = decoded.encode().expect("decoded image must encode");
    let decoded2 = Image::decode(&reencoded).expect("re-encoded data failed to decode");
    assert_eq!(decoded.pixels(), decoded2.pixels(), "roundtrip pixel mismatch");
    assert_eq!(decoded.metadata().derived(), decoded2.metadata().derived());

    // Transforms must not panic and must keep the image encodable
    decoded.grayscale();
    decoded.flip_vertical();
    let _ = decoded.rotate90(Rotation::Clockwise);
    let flipped = decoded.encode().expect("transformed image must encode");
    assert_eq!(flipped.len(), reencoded.len());
});
