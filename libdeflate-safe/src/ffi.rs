//! Raw declarations for the libdeflate C ABI (libdeflate >= 1.19).
//!
//! The C library itself is vendored and compiled by the `libdeflate-sys`
//! crate; the declarations live here so that the exact ABI this crate relies
//! on is spelled out in one place.

#![allow(non_camel_case_types)]

use core::ffi::{c_int, c_void};

// Links the vendored C library built by the sys crate.
use libdeflate_sys as _;

#[repr(C)]
pub struct libdeflate_compressor {
    _unused: [u8; 0],
}

#[repr(C)]
pub struct libdeflate_decompressor {
    _unused: [u8; 0],
}

/// Result of a decompression entry point.
pub type libdeflate_result = c_int;

/// Decompression was successful.
pub const LIBDEFLATE_SUCCESS: libdeflate_result = 0;
/// The compressed data was invalid, corrupt, or otherwise unsupported.
pub const LIBDEFLATE_BAD_DATA: libdeflate_result = 1;
/// A null `actual_out_nbytes_ret` was provided, but the data would have
/// decompressed to fewer than `out_nbytes_avail` bytes.
pub const LIBDEFLATE_SHORT_OUTPUT: libdeflate_result = 2;
/// The data would have decompressed to more than `out_nbytes_avail` bytes.
pub const LIBDEFLATE_INSUFFICIENT_SPACE: libdeflate_result = 3;

pub type libdeflate_malloc_func =
    Option<unsafe extern "C" fn(size: usize) -> *mut c_void>;
pub type libdeflate_free_func = Option<unsafe extern "C" fn(ptr: *mut c_void)>;

/// Advanced options accepted by the `_ex` allocation entry points.
///
/// Native code reads this by raw layout: the leading size tag and the field
/// order are load-bearing. `sizeof_options` must be set to the struct size so
/// that fields can be appended in future libdeflate versions while still
/// supporting old binaries.
#[repr(C)]
pub struct libdeflate_options {
    pub sizeof_options: usize,
    pub malloc_func: libdeflate_malloc_func,
    pub free_func: libdeflate_free_func,
}

extern "C" {
    pub fn libdeflate_alloc_compressor(
        compression_level: c_int,
    ) -> *mut libdeflate_compressor;

    pub fn libdeflate_alloc_compressor_ex(
        compression_level: c_int,
        options: *const libdeflate_options,
    ) -> *mut libdeflate_compressor;

    pub fn libdeflate_deflate_compress(
        compressor: *mut libdeflate_compressor,
        in_: *const c_void,
        in_nbytes: usize,
        out: *mut c_void,
        out_nbytes_avail: usize,
    ) -> usize;

    pub fn libdeflate_deflate_compress_bound(
        compressor: *mut libdeflate_compressor,
        in_nbytes: usize,
    ) -> usize;

    pub fn libdeflate_zlib_compress(
        compressor: *mut libdeflate_compressor,
        in_: *const c_void,
        in_nbytes: usize,
        out: *mut c_void,
        out_nbytes_avail: usize,
    ) -> usize;

    pub fn libdeflate_zlib_compress_bound(
        compressor: *mut libdeflate_compressor,
        in_nbytes: usize,
    ) -> usize;

    pub fn libdeflate_gzip_compress(
        compressor: *mut libdeflate_compressor,
        in_: *const c_void,
        in_nbytes: usize,
        out: *mut c_void,
        out_nbytes_avail: usize,
    ) -> usize;

    pub fn libdeflate_gzip_compress_bound(
        compressor: *mut libdeflate_compressor,
        in_nbytes: usize,
    ) -> usize;

    pub fn libdeflate_free_compressor(compressor: *mut libdeflate_compressor);

    pub fn libdeflate_alloc_decompressor() -> *mut libdeflate_decompressor;

    pub fn libdeflate_alloc_decompressor_ex(
        options: *const libdeflate_options,
    ) -> *mut libdeflate_decompressor;

    pub fn libdeflate_deflate_decompress(
        decompressor: *mut libdeflate_decompressor,
        in_: *const c_void,
        in_nbytes: usize,
        out: *mut c_void,
        out_nbytes_avail: usize,
        actual_out_nbytes_ret: *mut usize,
    ) -> libdeflate_result;

    pub fn libdeflate_deflate_decompress_ex(
        decompressor: *mut libdeflate_decompressor,
        in_: *const c_void,
        in_nbytes: usize,
        out: *mut c_void,
        out_nbytes_avail: usize,
        actual_in_nbytes_ret: *mut usize,
        actual_out_nbytes_ret: *mut usize,
    ) -> libdeflate_result;

    pub fn libdeflate_zlib_decompress(
        decompressor: *mut libdeflate_decompressor,
        in_: *const c_void,
        in_nbytes: usize,
        out: *mut c_void,
        out_nbytes_avail: usize,
        actual_out_nbytes_ret: *mut usize,
    ) -> libdeflate_result;

    pub fn libdeflate_zlib_decompress_ex(
        decompressor: *mut libdeflate_decompressor,
        in_: *const c_void,
        in_nbytes: usize,
        out: *mut c_void,
        out_nbytes_avail: usize,
        actual_in_nbytes_ret: *mut usize,
        actual_out_nbytes_ret: *mut usize,
    ) -> libdeflate_result;

    pub fn libdeflate_gzip_decompress(
        decompressor: *mut libdeflate_decompressor,
        in_: *const c_void,
        in_nbytes: usize,
        out: *mut c_void,
        out_nbytes_avail: usize,
        actual_out_nbytes_ret: *mut usize,
    ) -> libdeflate_result;

    pub fn libdeflate_gzip_decompress_ex(
        decompressor: *mut libdeflate_decompressor,
        in_: *const c_void,
        in_nbytes: usize,
        out: *mut c_void,
        out_nbytes_avail: usize,
        actual_in_nbytes_ret: *mut usize,
        actual_out_nbytes_ret: *mut usize,
    ) -> libdeflate_result;

    pub fn libdeflate_free_decompressor(
        decompressor: *mut libdeflate_decompressor,
    );

    pub fn libdeflate_set_memory_allocator(
        malloc_func: libdeflate_malloc_func,
        free_func: libdeflate_free_func,
    );

    pub fn libdeflate_adler32(
        adler: u32,
        buffer: *const c_void,
        len: usize,
    ) -> u32;

    pub fn libdeflate_crc32(crc: u32, buffer: *const c_void, len: usize)
        -> u32;
}
