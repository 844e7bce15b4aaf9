use super::*;

const INPUT: &[u8] = b"hello, hello, hello, hello, hello!";

#[test]
fn create_compressor_rejects_out_of_range_levels() {
    assert!(create_compressor(MIN_COMPRESSION_LEVEL - 1).is_none());
    assert!(create_compressor(MAX_COMPRESSION_LEVEL + 1).is_none());
    assert!(create_compressor(DEFAULT_COMPRESSION_LEVEL).is_some());
}

#[test]
fn deflate_round_trip() {
    let mut compressor = create_compressor(6).unwrap();
    let mut compressed = [0u8; 256];
    let n = deflate_compress(&mut compressor, INPUT, &mut compressed);
    assert!(n > 0);

    let mut decompressor = create_decompressor().unwrap();
    let mut output = [0u8; 256];
    let mut written = 0usize;
    let code = deflate_decompress(
        &mut decompressor,
        &compressed[..n],
        &mut output,
        Some(&mut written),
    );
    assert_eq!(code, LIBDEFLATE_SUCCESS);
    assert_eq!(&output[..written], INPUT);
}

#[test]
fn known_size_short_stream_is_short_output() {
    let mut compressor = create_compressor(6).unwrap();
    let mut compressed = [0u8; 256];
    let n = zlib_compress(&mut compressor, INPUT, &mut compressed);
    assert!(n > 0);

    // Expected size larger than the stream produces, null out-param.
    let mut decompressor = create_decompressor().unwrap();
    let mut output = [0u8; 256];
    let code = zlib_decompress(
        &mut decompressor,
        &compressed[..n],
        &mut output[..INPUT.len() + 8],
        None,
    );
    assert_eq!(code, LIBDEFLATE_SHORT_OUTPUT);
}

#[test]
fn undersized_destination_is_insufficient_space() {
    let mut compressor = create_compressor(6).unwrap();
    let mut compressed = [0u8; 256];
    let n = gzip_compress(&mut compressor, INPUT, &mut compressed);
    assert!(n > 0);

    let mut decompressor = create_decompressor().unwrap();
    let mut output = [0u8; 8];
    let mut written = 0usize;
    let code = gzip_decompress(
        &mut decompressor,
        &compressed[..n],
        &mut output,
        Some(&mut written),
    );
    assert_eq!(code, LIBDEFLATE_INSUFFICIENT_SPACE);
}

#[test]
fn garbage_input_is_bad_data() {
    let mut decompressor = create_decompressor().unwrap();
    let mut output = [0u8; 64];
    let code =
        zlib_decompress(&mut decompressor, &[0xFF; 16], &mut output, None);
    assert_eq!(code, LIBDEFLATE_BAD_DATA);
}

#[test]
fn bounds_cover_the_input() {
    let mut compressor = create_compressor(12).unwrap();
    for &len in &[0usize, 1, 100, 1 << 16] {
        assert!(deflate_compress_bound(&mut compressor, len) >= len);
        assert!(zlib_compress_bound(&mut compressor, len) >= len);
        assert!(gzip_compress_bound(&mut compressor, len) >= len);
    }
}

#[test]
fn checksum_check_values() {
    assert_eq!(crc32(0, b"123456789"), 0xCBF4_3926);
    assert_eq!(adler32(1, b"123456789"), 0x091E_01DE);
    // Zero-length updates leave the running value unchanged.
    assert_eq!(crc32(0xDEAD_BEEF, &[]), 0xDEAD_BEEF);
    assert_eq!(adler32(0xDEAD_BEEF, &[]), 0xDEAD_BEEF);
}
