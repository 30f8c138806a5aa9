// Copyright (c) 2025-2026 Federico Hoerth <memparanoid@gmail.com>
// SPDX-License-Identifier: GPL-3.0-only
// See LICENSE in the repository root for full license text.

use std::os::raw::c_char;

use libc::c_int;
use paycrypto::HmacError;

/// Status code written by every entry point.
pub type paycrypto_status_t = c_int;

/// Digest written.
pub const PAYCRYPTO_OK: paycrypto_status_t = 0;
/// Key pointer is null.
pub const PAYCRYPTO_NULL_KEY: paycrypto_status_t = 1;
/// Message pointer is null.
pub const PAYCRYPTO_NULL_MESSAGE: paycrypto_status_t = 2;
/// Output pointer is null.
pub const PAYCRYPTO_NULL_OUTPUT: paycrypto_status_t = 3;
/// Output buffer shorter than 65 bytes.
pub const PAYCRYPTO_OUTPUT_TOO_SMALL: paycrypto_status_t = 4;
/// Batch item not visited yet.
pub const PAYCRYPTO_NOT_PROCESSED: paycrypto_status_t = -1;

pub(crate) fn status_for(error: HmacError) -> paycrypto_status_t {
    match error {
        HmacError::MissingKey => PAYCRYPTO_NULL_KEY,
        HmacError::MissingMessage => PAYCRYPTO_NULL_MESSAGE,
        HmacError::MissingOutput => PAYCRYPTO_NULL_OUTPUT,
        HmacError::OutputTooSmall { .. } => PAYCRYPTO_OUTPUT_TOO_SMALL,
        // The C surface never builds mismatched batch slices.
        HmacError::LengthMismatch { .. } => PAYCRYPTO_NOT_PROCESSED,
    }
}

/// Static, NUL-terminated description of a status code.
///
/// The returned pointer is valid for the life of the process and must not be
/// freed.
#[unsafe(no_mangle)]
pub extern "C" fn paycrypto_status_message(status: paycrypto_status_t) -> *const c_char {
    let message = match status {
        PAYCRYPTO_OK => c"ok",
        PAYCRYPTO_NULL_KEY => c"key reference is missing",
        PAYCRYPTO_NULL_MESSAGE => c"message reference is missing",
        PAYCRYPTO_NULL_OUTPUT => c"output destination is missing",
        PAYCRYPTO_OUTPUT_TOO_SMALL => c"output buffer too small: need 65 bytes",
        PAYCRYPTO_NOT_PROCESSED => c"not processed",
        _ => c"unknown status",
    };

    message.as_ptr()
}
