// Copyright (c) 2025-2026 Federico Hoerth <memparanoid@gmail.com>
// SPDX-License-Identifier: GPL-3.0-only
// See LICENSE in the repository root for full license text.

//! Byte utilities shared by the paycrypto crates.
//!
//! - Zeroization that the optimizer cannot elide
//! - Constant-time slice comparison
//! - Lowercase hex encoding and case-insensitive decoding
//! - Big-endian word conversions that wipe their source

#![cfg_attr(not(test), no_std)]

extern crate alloc;

mod hex;

pub use hex::{HexError, decode_hex, encode_hex_lower, hex_pair_lower};

#[cfg(feature = "test-utils")]
pub use hex::hex_to_bytes;

/// Types whose all-zero bit pattern is a valid value.
///
/// # Safety
///
/// Implementors must accept `0` in every byte of their representation.
pub unsafe trait Zeroable: Copy {}

unsafe impl Zeroable for u8 {}
unsafe impl Zeroable for u32 {}
unsafe impl Zeroable for u64 {}
unsafe impl Zeroable for usize {}

/// Fast bulk zeroization that can be vectorized.
///
/// Uses `write_bytes` (memset) followed by a volatile read so the optimizer
/// cannot remove the write as a dead store.
///
/// # Example
///
/// ```
/// use paycrypto_util::fast_zeroize_slice;
///
/// let mut block = [0x36u8; 64];
/// fast_zeroize_slice(&mut block);
/// assert!(block.iter().all(|&b| b == 0));
///
/// let mut words = [0xDEADBEEFu32; 8];
/// fast_zeroize_slice(&mut words);
/// assert!(words.iter().all(|&w| w == 0));
/// ```
#[inline(always)]
pub fn fast_zeroize_slice<T: Zeroable>(slice: &mut [T]) {
    if slice.is_empty() {
        return;
    }

    let byte_len = core::mem::size_of_val(slice);
    // SAFETY: `T: Zeroable` makes the all-zero pattern valid, and `byte_len`
    // covers exactly the memory owned by `slice`.
    unsafe {
        core::ptr::write_bytes(slice.as_mut_ptr() as *mut u8, 0, byte_len);
        core::ptr::read_volatile(slice.as_ptr() as *const u8);
    }
    core::sync::atomic::compiler_fence(core::sync::atomic::Ordering::SeqCst);
}

/// Zeroizes a single word with a volatile write.
#[inline(always)]
pub fn zeroize_word<T: Zeroable + Default>(val: &mut T) {
    // SAFETY: `val` is a valid, aligned, exclusive reference.
    unsafe {
        core::ptr::write_volatile(val, T::default());
    }
}

/// Verifies that every byte of `slice` is zero.
#[inline(always)]
pub fn is_slice_zeroized(slice: &[u8]) -> bool {
    slice.iter().all(|&b| b == 0)
}

/// Constant-time equality comparison for byte slices.
///
/// The running time depends only on the lengths, never on where the first
/// difference occurs. Slices of different length compare unequal immediately.
///
/// # Example
///
/// ```
/// use paycrypto_util::constant_time_eq;
///
/// assert!(constant_time_eq(b"tag", b"tag"));
/// assert!(!constant_time_eq(b"tag", b"tab"));
/// assert!(!constant_time_eq(b"tag", b"tags"));
/// ```
#[inline(never)]
pub fn constant_time_eq(a: &[u8], b: &[u8]) -> bool {
    if a.len() != b.len() {
        return false;
    }

    let diff = a
        .iter()
        .zip(b.iter())
        .fold(0u8, |acc, (x, y)| acc | (x ^ y));

    // Keep the fold from being turned into an early-exit comparison.
    core::hint::black_box(diff) == 0
}

/// Builds a `u32` from 4 big-endian bytes, zeroizing the source bytes.
#[inline(always)]
pub fn u32_from_be(dst: &mut u32, bytes: &mut [u8; 4]) {
    *dst = 0;
    for byte in bytes.iter_mut() {
        *dst = (*dst << 8) | (*byte as u32);
        *byte = 0;
    }
}

/// Writes a `u32` as 4 big-endian bytes, zeroizing the source word.
#[inline(always)]
pub fn u32_to_be(src: &mut u32, bytes: &mut [u8; 4]) {
    for (i, byte) in bytes.iter_mut().enumerate() {
        *byte = (*src >> (8 * (3 - i))) as u8;
    }
    *src = 0;
}
