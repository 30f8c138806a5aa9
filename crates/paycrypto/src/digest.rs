// Copyright (c) 2025-2026 Federico Hoerth <memparanoid@gmail.com>
// SPDX-License-Identifier: GPL-3.0-only
// See LICENSE in the repository root for full license text.

//! Owned hexadecimal digest.

use core::fmt;
use core::str::FromStr;

use paycrypto_util::{HexError, decode_hex, encode_hex_lower};

use crate::error::HmacError;
use crate::hmac::Digest;
use crate::sha256::HASH_LEN;

/// Length of a hex-encoded HMAC-SHA256 digest.
pub const HEX_LEN: usize = HASH_LEN * 2;

/// Whether [`HexDigest::write_to`] appends a NUL byte after the digits.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Termination {
    /// Exactly [`HEX_LEN`] bytes, for length-prefixed destinations.
    None,
    /// [`HEX_LEN`] bytes followed by `\0`, for C strings.
    Nul,
}

impl Termination {
    /// Destination bytes required for a digest with this termination.
    pub const fn required_len(self) -> usize {
        match self {
            Termination::None => HEX_LEN,
            Termination::Nul => HEX_LEN + 1,
        }
    }
}

/// A 64-character lowercase hex HMAC-SHA256 digest, owned by value.
///
/// The only way to build one is from a raw [`Digest`] or by parsing, so the
/// contents are always `[0-9a-f]{64}`.
#[derive(Clone, Copy, PartialEq, Eq, Hash)]
pub struct HexDigest([u8; HEX_LEN]);

impl HexDigest {
    /// Hex-encodes a raw digest, most-significant nibble first.
    pub fn from_digest(digest: &Digest) -> Self {
        let mut hex = [0u8; HEX_LEN];
        // `hex` holds exactly two digits per digest byte.
        let written = encode_hex_lower(digest, &mut hex);
        debug_assert_eq!(written, Ok(HEX_LEN));
        Self(hex)
    }

    /// The digest as a string slice.
    pub fn as_str(&self) -> &str {
        // SAFETY: every constructor fills the array with ASCII hex digits.
        unsafe { core::str::from_utf8_unchecked(&self.0) }
    }

    /// The digest as ASCII bytes.
    pub fn as_bytes(&self) -> &[u8; HEX_LEN] {
        &self.0
    }

    /// Decodes back into the raw 32-byte digest.
    pub fn to_digest(&self) -> Digest {
        let mut raw = [0u8; HASH_LEN];
        for (pair, byte) in self.0.chunks_exact(2).zip(raw.iter_mut()) {
            *byte = (nibble(pair[0]) << 4) | nibble(pair[1]);
        }
        raw
    }

    /// Converts into an owned `String`.
    pub fn into_string(self) -> String {
        self.as_str().to_owned()
    }

    /// Copies the digits into a caller-supplied buffer.
    ///
    /// Returns the number of bytes written, including the terminator when
    /// `termination` is [`Termination::Nul`]. Nothing is written when `dst`
    /// is too short.
    pub fn write_to(&self, dst: &mut [u8], termination: Termination) -> Result<usize, HmacError> {
        let required = termination.required_len();
        if dst.len() < required {
            return Err(HmacError::OutputTooSmall {
                required,
                actual: dst.len(),
            });
        }

        dst[..HEX_LEN].copy_from_slice(&self.0);
        if termination == Termination::Nul {
            dst[HEX_LEN] = 0;
        }

        Ok(required)
    }
}

// Digits come from `encode_hex_lower` only, so always lowercase
#[inline(always)]
fn nibble(digit: u8) -> u8 {
    match digit {
        b'0'..=b'9' => digit - b'0',
        _ => digit - b'a' + 10,
    }
}

impl FromStr for HexDigest {
    type Err = HexError;

    /// Parses 64 hex digits of either case, normalizing to lowercase.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        if s.len() != HEX_LEN {
            return Err(HexError::InvalidLength {
                expected: HEX_LEN,
                actual: s.len(),
            });
        }

        let mut raw = [0u8; HASH_LEN];
        decode_hex(s.as_bytes(), &mut raw)?;
        Ok(Self::from_digest(&raw))
    }
}

impl fmt::Display for HexDigest {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl fmt::Debug for HexDigest {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_tuple("HexDigest").field(&self.as_str()).finish()
    }
}

impl AsRef<str> for HexDigest {
    fn as_ref(&self) -> &str {
        self.as_str()
    }
}

impl PartialEq<str> for HexDigest {
    fn eq(&self, other: &str) -> bool {
        self.as_str() == other
    }
}

impl PartialEq<&str> for HexDigest {
    fn eq(&self, other: &&str) -> bool {
        self.as_str() == *other
    }
}

impl From<HexDigest> for String {
    fn from(digest: HexDigest) -> Self {
        digest.into_string()
    }
}
