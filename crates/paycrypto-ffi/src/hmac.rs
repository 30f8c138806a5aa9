// Copyright (c) 2025-2026 Federico Hoerth <memparanoid@gmail.com>
// SPDX-License-Identifier: GPL-3.0-only
// See LICENSE in the repository root for full license text.

use std::ffi::CStr;
use std::os::raw::c_char;
use std::slice;
use std::sync::OnceLock;

use libc::{c_int, size_t};
use paycrypto::{BatchConfig, HmacError, MacRequest, compute, compute_batch_with, verify};
use tracing::{debug, trace, warn};

use crate::request::{PAYCRYPTO_HEX_BUFFER_LEN, bytes_from_raw, paycrypto_request_t, write_hex};
use crate::status::{PAYCRYPTO_OK, paycrypto_status_t, status_for};

macro_rules! try_status {
    ($e:expr) => {
        match $e {
            Ok(v) => v,
            Err(err) => return status_for(err),
        }
    };
}

/// Batch settings, read from the environment once per process.
fn batch_config() -> &'static BatchConfig {
    static CONFIG: OnceLock<BatchConfig> = OnceLock::new();

    CONFIG.get_or_init(|| match BatchConfig::from_env() {
        Ok(config) => {
            debug!(?config, "batch configuration loaded");
            config
        }
        Err(err) => {
            warn!(%err, "invalid batch configuration, using defaults");
            BatchConfig::default()
        }
    })
}

/// Computes HMAC-SHA256 and writes it as a NUL-terminated lowercase hex string.
///
/// `output_hex` must hold at least 65 bytes. On any non-OK status nothing is
/// written.
///
/// # Safety
///
/// Non-null `key`, `data` and `output_hex` must be valid for `key_len`,
/// `data_len` and `output_len` bytes respectively.
#[unsafe(no_mangle)]
pub unsafe extern "C" fn paycrypto_hmac_sha256_hex(
    key: *const u8,
    key_len: size_t,
    data: *const u8,
    data_len: size_t,
    output_hex: *mut c_char,
    output_len: size_t,
) -> paycrypto_status_t {
    // SAFETY: upheld by the caller.
    let key = try_status!(unsafe { bytes_from_raw(key, key_len) }.ok_or(HmacError::MissingKey));
    // SAFETY: upheld by the caller.
    let data =
        try_status!(unsafe { bytes_from_raw(data, data_len) }.ok_or(HmacError::MissingMessage));

    if output_hex.is_null() {
        return status_for(HmacError::MissingOutput);
    }
    if output_len < PAYCRYPTO_HEX_BUFFER_LEN {
        return status_for(HmacError::OutputTooSmall {
            required: PAYCRYPTO_HEX_BUFFER_LEN,
            actual: output_len,
        });
    }

    let digest = compute(key, data);
    // SAFETY: upheld by the caller.
    try_status!(unsafe { write_hex(&digest, output_hex, output_len) });

    PAYCRYPTO_OK
}

/// C-string variant: NUL-terminated `key` and `data`, 65-byte `output_hex`.
///
/// Key or data bytes after an embedded NUL are not seen; use
/// [`paycrypto_hmac_sha256_hex`] for binary input.
///
/// # Safety
///
/// Non-null `key` and `data` must be valid NUL-terminated strings. A non-null
/// `output_hex` must be valid for 65 bytes of writes.
#[unsafe(no_mangle)]
pub unsafe extern "C" fn paycrypto_hmac_sha256_hex_cstr(
    key: *const c_char,
    data: *const c_char,
    output_hex: *mut c_char,
) -> paycrypto_status_t {
    if key.is_null() {
        return status_for(HmacError::MissingKey);
    }
    if data.is_null() {
        return status_for(HmacError::MissingMessage);
    }

    // SAFETY: non-null and NUL-terminated per the caller.
    let key = unsafe { CStr::from_ptr(key) };
    // SAFETY: non-null and NUL-terminated per the caller.
    let data = unsafe { CStr::from_ptr(data) };

    // SAFETY: CStr contents are valid for their length; output per the caller.
    unsafe {
        paycrypto_hmac_sha256_hex(
            key.as_ptr() as *const u8,
            key.to_bytes().len(),
            data.as_ptr() as *const u8,
            data.to_bytes().len(),
            output_hex,
            PAYCRYPTO_HEX_BUFFER_LEN,
        )
    }
}

/// Computes every request in `requests[0..count]`, writing each item's digest
/// and `status` independently.
///
/// Malformed items (null key, data or output, or a short output buffer) are
/// skipped with a non-OK `status` and their output left untouched. A
/// non-positive `count` or a null `requests` is a no-op.
///
/// Returns the number of digests written.
///
/// # Safety
///
/// A non-null `requests` must point to `count` initialized items, each of
/// whose non-null pointers is valid for its stated length. Output buffers of
/// distinct items must not overlap each other or any input.
#[unsafe(no_mangle)]
pub unsafe extern "C" fn paycrypto_hmac_sha256_batch(
    count: isize,
    requests: *mut paycrypto_request_t,
) -> isize {
    if count <= 0 || requests.is_null() {
        return 0;
    }

    // SAFETY: non-null and `count` items long per the caller.
    let items = unsafe { slice::from_raw_parts_mut(requests, count as usize) };

    let mut valid: Vec<MacRequest<'_>> = Vec::with_capacity(items.len());
    let mut positions: Vec<usize> = Vec::with_capacity(items.len());

    for (index, item) in items.iter_mut().enumerate() {
        item.reset_status();

        // SAFETY: item pointers valid per the caller.
        match unsafe { item.validate() } {
            Ok(request) => {
                valid.push(request);
                positions.push(index);
            }
            Err(error) => {
                trace!(index, %error, "skipping malformed request");
                item.status = status_for(error);
            }
        }
    }

    let outcomes = compute_batch_with(batch_config(), &valid);

    let mut written: isize = 0;
    for (index, outcome) in positions.into_iter().zip(outcomes) {
        // SAFETY: output validated above; pointers valid per the caller.
        if unsafe { items[index].complete(outcome) } {
            written += 1;
        }
    }

    written
}

/// Returns 1 when `expected_hex` (64 hex digits, either case) equals
/// HMAC-SHA256(key, data), 0 otherwise, including for null input.
///
/// # Safety
///
/// Non-null pointers must be valid for their stated lengths.
#[unsafe(no_mangle)]
pub unsafe extern "C" fn paycrypto_hmac_sha256_verify(
    key: *const u8,
    key_len: size_t,
    data: *const u8,
    data_len: size_t,
    expected_hex: *const c_char,
    expected_len: size_t,
) -> c_int {
    // SAFETY: upheld by the caller.
    let inputs = unsafe {
        (
            bytes_from_raw(key, key_len),
            bytes_from_raw(data, data_len),
            bytes_from_raw(expected_hex as *const u8, expected_len),
        )
    };

    match inputs {
        (Some(key), Some(data), Some(expected)) => verify(key, data, expected) as c_int,
        _ => 0,
    }
}
