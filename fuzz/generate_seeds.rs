#!/usr/bin/env -S cargo +nightly -Zscript
//! Generate seed corpus files for fuzzing.
//! Run: cargo +nightly -Zscript fuzz/generate_seeds.rs

fn bmp(width: i32, height: i32, bits: u16, offset: u32) -> Vec<u8> {
    let stride = ((bits as usize * width as usize).div_ceil(32) * 4) as u32;
    let pixel_size = stride * height as u32;
    let file_size = offset + pixel_size;
    let mut out = vec![0u8; file_size as usize];
    out[0] = b'B'; out[1] = b'M';
    out[2..6].copy_from_slice(&file_size.to_le_bytes()); // file size
    out[10..14].copy_from_slice(&offset.to_le_bytes()); // data offset
    out[14..18].copy_from_slice(&40u32.to_le_bytes()); // DIB header size
    out[18..22].copy_from_slice(&width.to_le_bytes()); // width
    out[22..26].copy_from_slice(&height.to_le_bytes()); // height
    out[26..28].copy_from_slice(&1u16.to_le_bytes()); // planes
    out[28..30].copy_from_slice(&bits.to_le_bytes()); // bpp
    out[34..38].copy_from_slice(&pixel_size.to_le_bytes()); // pixel data size
    for (i, b) in out[offset as usize..].iter_mut().enumerate() {
        *b = (i * 37) as u8;
    }
    out
}

fn main() {
    use std::fs;
    let dir = "fuzz/corpus/fuzz_decode";
    fs::create_dir_all(dir).unwrap();

    fs::write(format!("{dir}/bmp_1x1_24.bmp"), bmp(1, 1, 24, 54)).unwrap();
    fs::write(format!("{dir}/bmp_2x2_24.bmp"), bmp(2, 2, 24, 54)).unwrap();
    fs::write(format!("{dir}/bmp_5x3_24.bmp"), bmp(5, 3, 24, 54)).unwrap();
    fs::write(format!("{dir}/bmp_4x4_32.bmp"), bmp(4, 4, 32, 54)).unwrap();
    fs::write(format!("{dir}/bmp_3x3_gap.bmp"), bmp(3, 3, 24, 70)).unwrap();

    // Truncated/malformed seeds for edge coverage
    fs::write(format!("{dir}/empty.bin"), b"").unwrap();
    fs::write(format!("{dir}/bm_short.bin"), b"BM\x00\x00").unwrap();
    let mut truncated = bmp(4, 4, 24, 54);
    truncated.truncate(60);
    fs::write(format!("{dir}/bmp_truncated.bin"), truncated).unwrap();
    let mut top_down = bmp(2, 2, 24, 54);
    top_down[22..26].copy_from_slice(&(-2i32).to_le_bytes());
    fs::write(format!("{dir}/bmp_top_down.bin"), top_down).unwrap();

    println!("Generated seed corpus in {dir}/");
}
