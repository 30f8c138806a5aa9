// Copyright (c) 2025-2026 Federico Hoerth <memparanoid@gmail.com>
// SPDX-License-Identifier: GPL-3.0-only
// See LICENSE in the repository root for full license text.

use thiserror::Error;

/// Per-request HMAC error
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum HmacError {
    /// Key reference is absent
    #[error("key reference is missing")]
    MissingKey,

    /// Message reference is absent
    #[error("message reference is missing")]
    MissingMessage,

    /// Output destination is absent
    #[error("output destination is missing")]
    MissingOutput,

    /// Output destination cannot hold the digest
    #[error("output buffer too small: need {required} bytes, got {actual}")]
    OutputTooSmall {
        /// Bytes needed
        required: usize,
        /// Bytes available
        actual: usize,
    },

    /// In-place batch called with mismatched slices
    #[error("batch length mismatch: {requests} requests, {outcomes} outcome slots")]
    LengthMismatch {
        /// Number of requests
        requests: usize,
        /// Number of outcome slots
        outcomes: usize,
    },
}

/// Batch configuration error
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ConfigError {
    /// Environment variable holds something other than a non-negative integer
    #[error("invalid value {value:?} for {var}: expected a non-negative integer")]
    InvalidValue {
        /// Variable name
        var: &'static str,
        /// Raw value found
        value: String,
    },
}
