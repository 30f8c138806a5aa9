// Copyright (c) 2025-2026 Federico Hoerth <memparanoid@gmail.com>
// SPDX-License-Identifier: GPL-3.0-only
// See LICENSE in the repository root for full license text.

//! Single-request operations.

use core::fmt;

use paycrypto_util::{constant_time_eq, decode_hex};

use crate::digest::{HEX_LEN, HexDigest};
use crate::error::HmacError;
use crate::hmac::{Digest, HmacSha256State};
use crate::sha256::HASH_LEN;

/// Result of one MAC request.
pub type MacOutcome = Result<HexDigest, HmacError>;

/// A borrowed (key, message) pair.
///
/// `None` stands for an absent reference coming from an untyped caller, for
/// example a null pointer across the C ABI.
#[derive(Clone, Copy, Default)]
pub struct MacRequest<'a> {
    /// Secret key, any length
    pub key: Option<&'a [u8]>,
    /// Message to authenticate, any length
    pub message: Option<&'a [u8]>,
}

impl<'a> MacRequest<'a> {
    /// A well-formed request.
    pub fn new(key: &'a [u8], message: &'a [u8]) -> Self {
        Self {
            key: Some(key),
            message: Some(message),
        }
    }

    /// Checks that both references are present.
    pub fn parts(&self) -> Result<(&'a [u8], &'a [u8]), HmacError> {
        let key = self.key.ok_or(HmacError::MissingKey)?;
        let message = self.message.ok_or(HmacError::MissingMessage)?;
        Ok((key, message))
    }
}

// Never print key or message bytes.
impl fmt::Debug for MacRequest<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("MacRequest")
            .field("key_len", &self.key.map(<[u8]>::len))
            .field("message_len", &self.message.map(<[u8]>::len))
            .finish()
    }
}

/// HMAC-SHA256 of `message` under `key`, as 64 lowercase hex digits.
///
/// Empty keys and messages are valid.
///
/// # Example
///
/// ```
/// let digest = paycrypto::compute(b"key", b"The quick brown fox jumps over the lazy dog");
/// assert_eq!(
///     digest.as_str(),
///     "f7bc83f430538424b13298e6aa6fb143ef4d59a14946175997479dbc2d1a3cd8"
/// );
/// ```
pub fn compute(key: &[u8], message: &[u8]) -> HexDigest {
    compute_with(&mut HmacSha256State::new(), key, message)
}

/// [`compute`] reusing a caller-held state.
pub(crate) fn compute_with(state: &mut HmacSha256State, key: &[u8], message: &[u8]) -> HexDigest {
    let mut raw: Digest = [0u8; HASH_LEN];
    state.mac(key, message, &mut raw);
    HexDigest::from_digest(&raw)
}

/// [`compute`] for a request that may have absent parts.
///
/// Nothing is computed when the key or message is missing.
pub fn compute_request(request: &MacRequest<'_>) -> MacOutcome {
    compute_request_with(&mut HmacSha256State::new(), request)
}

pub(crate) fn compute_request_with(
    state: &mut HmacSha256State,
    request: &MacRequest<'_>,
) -> MacOutcome {
    let (key, message) = request.parts()?;
    Ok(compute_with(state, key, message))
}

/// Checks `expected_hex` against HMAC-SHA256(key, message).
///
/// Hex digits of either case are accepted. Malformed or wrongly sized input
/// returns `false`. The tag comparison runs in constant time.
///
/// # Example
///
/// ```
/// let tag = paycrypto::compute(b"secret-key", b"hello world");
/// assert!(paycrypto::verify(b"secret-key", b"hello world", tag.as_str()));
/// assert!(!paycrypto::verify(b"other-key", b"hello world", tag.as_str()));
/// ```
pub fn verify(key: &[u8], message: &[u8], expected_hex: impl AsRef<[u8]>) -> bool {
    let expected_hex = expected_hex.as_ref();
    if expected_hex.len() != HEX_LEN {
        return false;
    }

    let mut expected: Digest = [0u8; HASH_LEN];
    if decode_hex(expected_hex, &mut expected).is_err() {
        return false;
    }

    let mut actual: Digest = [0u8; HASH_LEN];
    HmacSha256State::new().mac(key, message, &mut actual);

    constant_time_eq(&actual, &expected)
}
