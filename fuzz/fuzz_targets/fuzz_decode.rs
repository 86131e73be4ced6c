#![no_main]
use libfuzzer_sys::fuzz_target;

fuzz_target!(|data: &[u8]| {
    // Header-only and full decode must never panic
    let _ = bmpgrid::BmpMetadata::decode(data);

    let limits = bmpgrid::Limits {
        max_memory_bytes: Some(256 * 1024 * 1024),
        ..Default::default()
    };
    let _ = bmpgrid::Image::decode_with_limits(data, &limits);
});
