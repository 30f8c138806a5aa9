// Copyright (c) 2025-2026 Federico Hoerth <memparanoid@gmail.com>
// SPDX-License-Identifier: GPL-3.0-only
// See LICENSE in the repository root for full license text.

//! C ABI over [`paycrypto`].
//!
//! Every entry point validates its pointers and reports a
//! [`paycrypto_status_t`] instead of crashing. Digests are written as 64
//! lowercase hex digits followed by a NUL, so output buffers need
//! [`PAYCRYPTO_HEX_BUFFER_LEN`] bytes. The matching header lives in
//! `include/paycrypto.h`.
#![allow(non_camel_case_types)]

mod hmac;
mod request;
mod status;

pub use hmac::{
    paycrypto_hmac_sha256_batch, paycrypto_hmac_sha256_hex, paycrypto_hmac_sha256_hex_cstr,
    paycrypto_hmac_sha256_verify,
};
pub use request::{PAYCRYPTO_HEX_BUFFER_LEN, paycrypto_request_t};
pub use status::{
    PAYCRYPTO_NOT_PROCESSED, PAYCRYPTO_NULL_KEY, PAYCRYPTO_NULL_MESSAGE, PAYCRYPTO_NULL_OUTPUT,
    PAYCRYPTO_OK, PAYCRYPTO_OUTPUT_TOO_SMALL, paycrypto_status_message, paycrypto_status_t,
};
