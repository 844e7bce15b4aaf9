#![no_std]
//! Minimal safe wrapper around the libdeflate C library.
//!
//! This crate provides a minimal translation of the native entry points: one
//! thin function per call, taking slices instead of raw pointer/length pairs
//! and returning the native result codes unchanged. For a more comfortable
//! high-level library, see the `libdeflate` crate.
//!
//! libdeflate is a whole-buffer compressor and decompressor for the DEFLATE,
//! zlib, and gzip formats. Each call processes one complete buffer; there is
//! no streaming state. Compression levels range from 0 ("store", minimally
//! expanding) over 1 (fastest) and 6 (default) up to 12 (slowest).
//!
//! A single compressor or decompressor is not safe to use from multiple
//! threads concurrently; different handles may be used concurrently from
//! different threads.

pub mod ffi;

#[cfg(test)]
mod tests;

use core::ffi::c_void;
use core::mem;
use core::ptr;

pub use crate::ffi::{
    LIBDEFLATE_BAD_DATA, LIBDEFLATE_INSUFFICIENT_SPACE,
    LIBDEFLATE_SHORT_OUTPUT, LIBDEFLATE_SUCCESS,
};

/// Raw result code from a native decompression entry point.
pub type ResultCode = ffi::libdeflate_result;

/// Lowest supported compression level ("store").
pub const MIN_COMPRESSION_LEVEL: i32 = 0;
/// Default compression level.
pub const DEFAULT_COMPRESSION_LEVEL: i32 = 6;
/// Highest (slowest) supported compression level.
pub const MAX_COMPRESSION_LEVEL: i32 = 12;

fn ptr_void(src: &[u8]) -> *const c_void {
    src.as_ptr() as *const c_void
}

fn ptr_mut_void(dst: &mut [u8]) -> *mut c_void {
    dst.as_mut_ptr() as *mut c_void
}

fn out_param(slot: Option<&mut usize>) -> *mut usize {
    match slot {
        Some(slot) => slot,
        None => ptr::null_mut(),
    }
}

/// An allocate function with `malloc` semantics.
pub type MallocFn = unsafe extern "C" fn(size: usize) -> *mut c_void;
/// A release function with `free` semantics.
pub type FreeFn = unsafe extern "C" fn(ptr: *mut c_void);

/// Advanced per-handle options for the `_ex` allocation entry points.
///
/// Wraps the size-tagged native options record; the size tag is filled in
/// here so callers cannot get it wrong.
pub struct Options(ffi::libdeflate_options);

impl Options {
    pub fn new(malloc_fn: MallocFn, free_fn: FreeFn) -> Self {
        Options(ffi::libdeflate_options {
            sizeof_options: mem::size_of::<ffi::libdeflate_options>(),
            malloc_func: Some(malloc_fn),
            free_func: Some(free_fn),
        })
    }
}

/// `libdeflate_set_memory_allocator()`
///
/// Installs a custom allocator which libdeflate will use for all subsequent
/// handle allocations, process-wide.
///
/// # Safety
///
/// `malloc_fn` must behave like `malloc()` and `free_fn` like `free()`.
/// There must not be any compressor or decompressor in existence anywhere in
/// the process when this is called; handles allocated through one allocator
/// must not be freed through another.
pub unsafe fn set_memory_allocator(malloc_fn: MallocFn, free_fn: FreeFn) {
    ffi::libdeflate_set_memory_allocator(Some(malloc_fn), Some(free_fn));
}

/// An owned native compressor handle.
///
/// The handle is freed exactly once, on drop.
pub struct Compressor(*mut ffi::libdeflate_compressor);

impl Drop for Compressor {
    fn drop(&mut self) {
        unsafe {
            ffi::libdeflate_free_compressor(self.0);
        }
    }
}

unsafe impl Send for Compressor {}
// A compressor can't be shared across threads, so it does not implement Sync.

/// `libdeflate_alloc_compressor()`
///
/// Allocates a compressor usable for DEFLATE, zlib, and gzip compression.
/// Returns `None` if out of memory or if `compression_level` is outside the
/// range `[0, 12]`; the level is not validated on this side.
pub fn create_compressor(compression_level: i32) -> Option<Compressor> {
    let ptr = unsafe { ffi::libdeflate_alloc_compressor(compression_level) };
    if ptr.is_null() {
        None
    } else {
        Some(Compressor(ptr))
    }
}

/// `libdeflate_alloc_compressor_ex()`
///
/// Like [`create_compressor`], but the handle allocates and frees through the
/// allocator pair in `options` instead of the global allocator.
pub fn create_compressor_ex(
    compression_level: i32,
    options: &Options,
) -> Option<Compressor> {
    let ptr = unsafe {
        ffi::libdeflate_alloc_compressor_ex(compression_level, &options.0)
    };
    if ptr.is_null() {
        None
    } else {
        Some(Compressor(ptr))
    }
}

/// `libdeflate_deflate_compress()`
///
/// Compresses `src` as a raw DEFLATE stream into `dst`. Returns the
/// compressed size in bytes, or 0 if the data could not be compressed to
/// `dst.len()` bytes or fewer.
pub fn deflate_compress(
    compressor: &mut Compressor,
    src: &[u8],
    dst: &mut [u8],
) -> usize {
    unsafe {
        ffi::libdeflate_deflate_compress(
            compressor.0,
            ptr_void(src),
            src.len(),
            ptr_mut_void(dst),
            dst.len(),
        )
    }
}

/// `libdeflate_zlib_compress()`
///
/// Like [`deflate_compress`], but stores the data in the zlib wrapper format.
pub fn zlib_compress(
    compressor: &mut Compressor,
    src: &[u8],
    dst: &mut [u8],
) -> usize {
    unsafe {
        ffi::libdeflate_zlib_compress(
            compressor.0,
            ptr_void(src),
            src.len(),
            ptr_mut_void(dst),
            dst.len(),
        )
    }
}

/// `libdeflate_gzip_compress()`
///
/// Like [`deflate_compress`], but stores the data in the gzip wrapper format.
pub fn gzip_compress(
    compressor: &mut Compressor,
    src: &[u8],
    dst: &mut [u8],
) -> usize {
    unsafe {
        ffi::libdeflate_gzip_compress(
            compressor.0,
            ptr_void(src),
            src.len(),
            ptr_mut_void(dst),
            dst.len(),
        )
    }
}

/// `libdeflate_deflate_compress_bound()`
///
/// Worst-case upper bound on the compressed size of any buffer of length
/// `in_nbytes` with this compressor. Always at least `in_nbytes`, and the
/// same for all invocations with the same compressor and length.
pub fn deflate_compress_bound(
    compressor: &mut Compressor,
    in_nbytes: usize,
) -> usize {
    unsafe { ffi::libdeflate_deflate_compress_bound(compressor.0, in_nbytes) }
}

/// `libdeflate_zlib_compress_bound()`
pub fn zlib_compress_bound(
    compressor: &mut Compressor,
    in_nbytes: usize,
) -> usize {
    unsafe { ffi::libdeflate_zlib_compress_bound(compressor.0, in_nbytes) }
}

/// `libdeflate_gzip_compress_bound()`
pub fn gzip_compress_bound(
    compressor: &mut Compressor,
    in_nbytes: usize,
) -> usize {
    unsafe { ffi::libdeflate_gzip_compress_bound(compressor.0, in_nbytes) }
}

/// An owned native decompressor handle.
///
/// The handle is freed exactly once, on drop.
pub struct Decompressor(*mut ffi::libdeflate_decompressor);

impl Drop for Decompressor {
    fn drop(&mut self) {
        unsafe {
            ffi::libdeflate_free_decompressor(self.0);
        }
    }
}

unsafe impl Send for Decompressor {}
// A decompressor can't be shared across threads, so it does not implement
// Sync.

/// `libdeflate_alloc_decompressor()`
///
/// Allocates a decompressor usable for DEFLATE, zlib, and gzip decompression
/// at any compression level and window size. Returns `None` if out of memory.
pub fn create_decompressor() -> Option<Decompressor> {
    let ptr = unsafe { ffi::libdeflate_alloc_decompressor() };
    if ptr.is_null() {
        None
    } else {
        Some(Decompressor(ptr))
    }
}

/// `libdeflate_alloc_decompressor_ex()`
///
/// Like [`create_decompressor`], but the handle allocates and frees through
/// the allocator pair in `options` instead of the global allocator.
pub fn create_decompressor_ex(options: &Options) -> Option<Decompressor> {
    let ptr = unsafe { ffi::libdeflate_alloc_decompressor_ex(&options.0) };
    if ptr.is_null() {
        None
    } else {
        Some(Decompressor(ptr))
    }
}

/// `libdeflate_deflate_decompress()`
///
/// Decompresses the raw DEFLATE stream in `src` into `dst`. Decompression
/// stops at the end of the stream even if `src` is longer.
///
/// Pass `None` for `actual_out_nbytes` when the exact uncompressed size is
/// known and `dst` is sized to it; a stream that decompresses to fewer bytes
/// then fails with [`LIBDEFLATE_SHORT_OUTPUT`]. Pass `Some` when the size is
/// unknown; the actual number of bytes written is stored there on success,
/// and a too-small `dst` fails with [`LIBDEFLATE_INSUFFICIENT_SPACE`].
///
/// On any non-success code the contents of `dst` are undefined.
pub fn deflate_decompress(
    decompressor: &mut Decompressor,
    src: &[u8],
    dst: &mut [u8],
    actual_out_nbytes: Option<&mut usize>,
) -> ResultCode {
    unsafe {
        ffi::libdeflate_deflate_decompress(
            decompressor.0,
            ptr_void(src),
            src.len(),
            ptr_mut_void(dst),
            dst.len(),
            out_param(actual_out_nbytes),
        )
    }
}

/// `libdeflate_deflate_decompress_ex()`
///
/// Like [`deflate_decompress`], but additionally reports in
/// `actual_in_nbytes` the compressed size of the stream (aligned to the next
/// byte boundary), excluding anything that follows it.
pub fn deflate_decompress_ex(
    decompressor: &mut Decompressor,
    src: &[u8],
    dst: &mut [u8],
    actual_in_nbytes: Option<&mut usize>,
    actual_out_nbytes: Option<&mut usize>,
) -> ResultCode {
    unsafe {
        ffi::libdeflate_deflate_decompress_ex(
            decompressor.0,
            ptr_void(src),
            src.len(),
            ptr_mut_void(dst),
            dst.len(),
            out_param(actual_in_nbytes),
            out_param(actual_out_nbytes),
        )
    }
}

/// `libdeflate_zlib_decompress()`
///
/// Like [`deflate_decompress`], but assumes the zlib wrapper format.
pub fn zlib_decompress(
    decompressor: &mut Decompressor,
    src: &[u8],
    dst: &mut [u8],
    actual_out_nbytes: Option<&mut usize>,
) -> ResultCode {
    unsafe {
        ffi::libdeflate_zlib_decompress(
            decompressor.0,
            ptr_void(src),
            src.len(),
            ptr_mut_void(dst),
            dst.len(),
            out_param(actual_out_nbytes),
        )
    }
}

/// `libdeflate_zlib_decompress_ex()`
pub fn zlib_decompress_ex(
    decompressor: &mut Decompressor,
    src: &[u8],
    dst: &mut [u8],
    actual_in_nbytes: Option<&mut usize>,
    actual_out_nbytes: Option<&mut usize>,
) -> ResultCode {
    unsafe {
        ffi::libdeflate_zlib_decompress_ex(
            decompressor.0,
            ptr_void(src),
            src.len(),
            ptr_mut_void(dst),
            dst.len(),
            out_param(actual_in_nbytes),
            out_param(actual_out_nbytes),
        )
    }
}

/// `libdeflate_gzip_decompress()`
///
/// Like [`deflate_decompress`], but assumes the gzip wrapper format. If
/// multiple gzip members are concatenated, only the first is decompressed.
pub fn gzip_decompress(
    decompressor: &mut Decompressor,
    src: &[u8],
    dst: &mut [u8],
    actual_out_nbytes: Option<&mut usize>,
) -> ResultCode {
    unsafe {
        ffi::libdeflate_gzip_decompress(
            decompressor.0,
            ptr_void(src),
            src.len(),
            ptr_mut_void(dst),
            dst.len(),
            out_param(actual_out_nbytes),
        )
    }
}

/// `libdeflate_gzip_decompress_ex()`
pub fn gzip_decompress_ex(
    decompressor: &mut Decompressor,
    src: &[u8],
    dst: &mut [u8],
    actual_in_nbytes: Option<&mut usize>,
    actual_out_nbytes: Option<&mut usize>,
) -> ResultCode {
    unsafe {
        ffi::libdeflate_gzip_decompress_ex(
            decompressor.0,
            ptr_void(src),
            src.len(),
            ptr_mut_void(dst),
            dst.len(),
            out_param(actual_in_nbytes),
            out_param(actual_out_nbytes),
        )
    }
}

/// `libdeflate_crc32()`
///
/// Updates a running CRC-32 checksum with `buffer` and returns the updated
/// value. The required initial value is 0.
pub fn crc32(crc: u32, buffer: &[u8]) -> u32 {
    unsafe { ffi::libdeflate_crc32(crc, ptr_void(buffer), buffer.len()) }
}

/// `libdeflate_adler32()`
///
/// Updates a running Adler-32 checksum with `buffer` and returns the updated
/// value. The required initial value is 1.
pub fn adler32(adler: u32, buffer: &[u8]) -> u32 {
    unsafe { ffi::libdeflate_adler32(adler, ptr_void(buffer), buffer.len()) }
}
