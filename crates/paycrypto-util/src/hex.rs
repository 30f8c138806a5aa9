// Copyright (c) 2025-2026 Federico Hoerth <memparanoid@gmail.com>
// SPDX-License-Identifier: GPL-3.0-only
// See LICENSE in the repository root for full license text.

//! Hex codec without intermediate allocations.

use thiserror::Error;

const LOWER_DIGITS: &[u8; 16] = b"0123456789abcdef";

/// Hex codec error
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum HexError {
    /// Destination buffer cannot hold the converted bytes
    #[error("destination too small: need {required} bytes, got {actual}")]
    OutputTooSmall {
        /// Bytes needed
        required: usize,
        /// Bytes available
        actual: usize,
    },

    /// Hex input has an odd number of digits
    #[error("hex input has odd length {0}")]
    OddLength(usize),

    /// Hex input contains a non-hex character
    #[error("invalid hex digit at offset {0}")]
    InvalidDigit(usize),

    /// Hex input does not have the expected number of digits
    #[error("expected {expected} hex digits, got {actual}")]
    InvalidLength {
        /// Digits expected
        expected: usize,
        /// Digits found
        actual: usize,
    },
}

/// Lowercase hex digits for one byte, high nibble first.
#[inline(always)]
pub fn hex_pair_lower(byte: u8) -> [u8; 2] {
    [
        LOWER_DIGITS[(byte >> 4) as usize],
        LOWER_DIGITS[(byte & 0x0f) as usize],
    ]
}

/// Encodes `src` as lowercase hex into `dst`, most-significant nibble first.
///
/// Returns the number of bytes written (`2 * src.len()`). Bytes of `dst`
/// beyond that are left untouched.
///
/// # Example
///
/// ```
/// use paycrypto_util::encode_hex_lower;
///
/// let mut out = [0u8; 8];
/// let written = encode_hex_lower(&[0xde, 0xad, 0x0b, 0xef], &mut out).unwrap();
/// assert_eq!(&out[..written], b"dead0bef");
/// ```
pub fn encode_hex_lower(src: &[u8], dst: &mut [u8]) -> Result<usize, HexError> {
    let required = src.len() * 2;
    if dst.len() < required {
        return Err(HexError::OutputTooSmall {
            required,
            actual: dst.len(),
        });
    }

    for (byte, pair) in src.iter().zip(dst.chunks_exact_mut(2)) {
        pair.copy_from_slice(&hex_pair_lower(*byte));
    }

    Ok(required)
}

#[inline(always)]
fn nibble(digit: u8) -> Option<u8> {
    match digit {
        b'0'..=b'9' => Some(digit - b'0'),
        b'a'..=b'f' => Some(digit - b'a' + 10),
        b'A'..=b'F' => Some(digit - b'A' + 10),
        _ => None,
    }
}

/// Decodes hex digits (either case) from `src` into `dst`.
///
/// Returns the number of bytes written (`src.len() / 2`). On error the
/// contents of `dst` are unspecified.
pub fn decode_hex(src: &[u8], dst: &mut [u8]) -> Result<usize, HexError> {
    if src.len() % 2 != 0 {
        return Err(HexError::OddLength(src.len()));
    }

    let required = src.len() / 2;
    if dst.len() < required {
        return Err(HexError::OutputTooSmall {
            required,
            actual: dst.len(),
        });
    }

    for (i, (pair, out)) in src.chunks_exact(2).zip(dst.iter_mut()).enumerate() {
        let hi = nibble(pair[0]).ok_or(HexError::InvalidDigit(i * 2))?;
        let lo = nibble(pair[1]).ok_or(HexError::InvalidDigit(i * 2 + 1))?;
        *out = (hi << 4) | lo;
    }

    Ok(required)
}

/// Parses a hexadecimal string into bytes.
///
/// # Panics
///
/// Panics if the string has odd length or contains a non-hex character.
#[cfg(feature = "test-utils")]
pub fn hex_to_bytes(hex: &str) -> alloc::vec::Vec<u8> {
    let mut out = alloc::vec![0u8; hex.len() / 2];
    if let Err(err) = decode_hex(hex.as_bytes(), &mut out) {
        panic!("hex_to_bytes({hex:?}): {err}");
    }
    out
}
