// Copyright (c) 2025-2026 Federico Hoerth <memparanoid@gmail.com>
// SPDX-License-Identifier: GPL-3.0-only
// See LICENSE in the repository root for full license text.

use std::os::raw::c_char;
use std::slice;

use libc::size_t;
use paycrypto::{HexDigest, HmacError, MacRequest, Termination};

use crate::status::{PAYCRYPTO_NOT_PROCESSED, PAYCRYPTO_OK, paycrypto_status_t, status_for};

/// Bytes a C output buffer must hold: 64 hex digits and a NUL.
pub const PAYCRYPTO_HEX_BUFFER_LEN: size_t = Termination::Nul.required_len();

/// One batch item, laid out for C.
///
/// `key`/`data` may point to zero bytes but must not be null. `output_hex`
/// receives 64 lowercase hex digits and a NUL when `status` ends up as
/// `PAYCRYPTO_OK`; otherwise it is left untouched.
#[repr(C)]
#[derive(Debug)]
pub struct paycrypto_request_t {
    pub key: *const u8,
    pub key_len: size_t,
    pub data: *const u8,
    pub data_len: size_t,
    pub output_hex: *mut c_char,
    pub output_len: size_t,
    pub status: paycrypto_status_t,
}

/// Borrows `len` bytes at `ptr`; `None` when `ptr` is null.
///
/// # Safety
///
/// A non-null `ptr` must be valid for reads of `len` bytes for `'a`.
pub(crate) unsafe fn bytes_from_raw<'a>(ptr: *const u8, len: size_t) -> Option<&'a [u8]> {
    if ptr.is_null() {
        return None;
    }

    // SAFETY: upheld by the caller.
    Some(unsafe { slice::from_raw_parts(ptr, len) })
}

/// Writes `digest` as a C string into `out`.
///
/// # Safety
///
/// A non-null `out` must be valid for writes of `out_len` bytes.
pub(crate) unsafe fn write_hex(
    digest: &HexDigest,
    out: *mut c_char,
    out_len: size_t,
) -> Result<(), HmacError> {
    if out.is_null() {
        return Err(HmacError::MissingOutput);
    }
    if out_len < PAYCRYPTO_HEX_BUFFER_LEN {
        return Err(HmacError::OutputTooSmall {
            required: PAYCRYPTO_HEX_BUFFER_LEN,
            actual: out_len,
        });
    }

    // SAFETY: non-null and at least PAYCRYPTO_HEX_BUFFER_LEN bytes per the caller.
    let dst = unsafe { slice::from_raw_parts_mut(out as *mut u8, PAYCRYPTO_HEX_BUFFER_LEN) };
    digest.write_to(dst, Termination::Nul)?;
    Ok(())
}

impl paycrypto_request_t {
    /// Checks every reference and borrows the inputs.
    ///
    /// # Safety
    ///
    /// Non-null pointers must be valid for their stated lengths for `'a`.
    pub(crate) unsafe fn validate<'a>(&self) -> Result<MacRequest<'a>, HmacError> {
        // SAFETY: upheld by the caller.
        let key = unsafe { bytes_from_raw(self.key, self.key_len) }.ok_or(HmacError::MissingKey)?;
        // SAFETY: upheld by the caller.
        let data =
            unsafe { bytes_from_raw(self.data, self.data_len) }.ok_or(HmacError::MissingMessage)?;

        if self.output_hex.is_null() {
            return Err(HmacError::MissingOutput);
        }
        if self.output_len < PAYCRYPTO_HEX_BUFFER_LEN {
            return Err(HmacError::OutputTooSmall {
                required: PAYCRYPTO_HEX_BUFFER_LEN,
                actual: self.output_len,
            });
        }

        Ok(MacRequest::new(key, data))
    }

    pub(crate) fn reset_status(&mut self) {
        self.status = PAYCRYPTO_NOT_PROCESSED;
    }

    /// Records the outcome, writing the digest on success.
    ///
    /// # Safety
    ///
    /// `output_hex` must be valid for writes of `output_len` bytes.
    pub(crate) unsafe fn complete(&mut self, outcome: Result<HexDigest, HmacError>) -> bool {
        // SAFETY: upheld by the caller.
        let written = outcome
            .and_then(|digest| unsafe { write_hex(&digest, self.output_hex, self.output_len) });

        match written {
            Ok(()) => {
                self.status = PAYCRYPTO_OK;
                true
            }
            Err(error) => {
                self.status = status_for(error);
                false
            }
        }
    }
}
