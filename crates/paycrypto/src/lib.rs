// Copyright (c) 2025-2026 Federico Hoerth <memparanoid@gmail.com>
// SPDX-License-Identifier: GPL-3.0-only
// See LICENSE in the repository root for full license text.

//! HMAC-SHA256 with lowercase hex output, singly and in batches.
//!
//! Implementation per RFC 2104 (HMAC) and RFC 6234 (SHA-256). Key-derived
//! intermediates are zeroized after every MAC and on drop.
//!
//! Batches exist to amortize per-call overhead for foreign callers: one call
//! computes many independent MACs, optionally fanned out to scoped worker
//! threads (see [`BatchConfig`]). Every item reports its own [`MacOutcome`].
//!
//! References:
//! - RFC 2104: HMAC: Keyed-Hashing for Message Authentication
//!   <https://datatracker.ietf.org/doc/html/rfc2104>
//! - RFC 4231: Identifiers and Test Vectors for HMAC-SHA-224, -256, -384, -512
//!   <https://datatracker.ietf.org/doc/html/rfc4231>
//! - RFC 6234: US Secure Hash Algorithms (SHA and SHA-based HMAC and HKDF)
//!   <https://datatracker.ietf.org/doc/html/rfc6234>

#![warn(missing_docs)]

#[cfg(test)]
mod tests;

mod batch;
mod config;
mod digest;
mod engine;
mod error;
mod hmac;
mod sha256;

pub use batch::{BatchSummary, compute_batch, compute_batch_into, compute_batch_with};
pub use config::{
    BatchConfig, BatchStrategy, DEFAULT_PARALLEL_THRESHOLD, ENV_MAX_WORKERS, ENV_PARALLEL_THRESHOLD,
};
pub use digest::{HEX_LEN, HexDigest, Termination};
pub use engine::{MacOutcome, MacRequest, compute, compute_request, verify};
pub use error::{ConfigError, HmacError};
pub use hmac::{Digest, HmacSha256State, hmac_sha256};
pub use sha256::{BLOCK_LEN, HASH_LEN, Sha256State, sha256};
