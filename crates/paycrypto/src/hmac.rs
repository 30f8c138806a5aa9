// Copyright (c) 2025-2026 Federico Hoerth <memparanoid@gmail.com>
// SPDX-License-Identifier: GPL-3.0-only
// See LICENSE in the repository root for full license text.

//! HMAC-SHA256 implementation per RFC 2104

use paycrypto_util::fast_zeroize_slice;

use crate::sha256::{BLOCK_LEN, HASH_LEN, Sha256State};

/// Raw 32-byte HMAC-SHA256 output.
pub type Digest = [u8; HASH_LEN];

/// HMAC-SHA256 state with all intermediate buffers.
///
/// Every key-derived buffer lives in this struct and is wiped after each MAC
/// and on drop. A single state can be reused for any number of MACs, which is
/// what the batch workers do.
pub struct HmacSha256State {
    /// K ⊕ ipad (0x36 repeated)
    k_ipad: [u8; BLOCK_LEN],
    /// K ⊕ opad (0x5c repeated)
    k_opad: [u8; BLOCK_LEN],
    /// Key zero-padded to the block size (or its hash, for long keys)
    key_block: [u8; BLOCK_LEN],
    /// Inner hash result: SHA256(K ⊕ ipad || message)
    inner_hash: [u8; HASH_LEN],
    sha: Sha256State,
}

impl Default for HmacSha256State {
    fn default() -> Self {
        Self::new()
    }
}

impl HmacSha256State {
    /// Create new HMAC-SHA256 state
    pub fn new() -> Self {
        Self {
            k_ipad: [0u8; BLOCK_LEN],
            k_opad: [0u8; BLOCK_LEN],
            key_block: [0u8; BLOCK_LEN],
            inner_hash: [0u8; HASH_LEN],
            sha: Sha256State::new(),
        }
    }

    /// HMAC-SHA256(key, data) per RFC 2104, written to `out`.
    pub fn mac(&mut self, key: &[u8], data: &[u8], out: &mut Digest) {
        // Prevent stale-bytes window
        fast_zeroize_slice(&mut self.key_block);

        if key.len() > BLOCK_LEN {
            // Keys longer than a block are replaced by their hash
            self.sha.reset();
            self.sha.update(key);
            self.sha.finalize(&mut self.inner_hash);
            self.key_block[..HASH_LEN].copy_from_slice(&self.inner_hash);
            fast_zeroize_slice(&mut self.inner_hash);
        } else {
            self.key_block[..key.len()].copy_from_slice(key);
        }

        self.k_ipad.fill(0x36);
        self.k_opad.fill(0x5c);
        for ((ipad, opad), kb) in self
            .k_ipad
            .iter_mut()
            .zip(self.k_opad.iter_mut())
            .zip(self.key_block.iter())
        {
            *ipad ^= kb;
            *opad ^= kb;
        }

        // Inner hash: SHA256(k_ipad || data)
        self.sha.reset();
        self.sha.update(&self.k_ipad);
        self.sha.update(data);
        self.sha.finalize(&mut self.inner_hash);

        // Outer hash: SHA256(k_opad || inner_hash) -> out
        self.sha.reset();
        self.sha.update(&self.k_opad);
        self.sha.update(&self.inner_hash);
        self.sha.finalize(out);

        self.wipe();
    }

    fn wipe(&mut self) {
        fast_zeroize_slice(&mut self.k_ipad);
        fast_zeroize_slice(&mut self.k_opad);
        fast_zeroize_slice(&mut self.key_block);
        fast_zeroize_slice(&mut self.inner_hash);
    }

    /// True when no key-derived bytes remain (test probe).
    #[cfg(test)]
    pub(crate) fn is_zeroized(&self) -> bool {
        use paycrypto_util::is_slice_zeroized;

        is_slice_zeroized(&self.k_ipad)
            && is_slice_zeroized(&self.k_opad)
            && is_slice_zeroized(&self.key_block)
            && is_slice_zeroized(&self.inner_hash)
            && self.sha.is_zeroized()
    }
}

impl Drop for HmacSha256State {
    fn drop(&mut self) {
        self.wipe();
    }
}

/// One-shot HMAC-SHA256 returning the raw 32-byte tag.
pub fn hmac_sha256(key: &[u8], message: &[u8]) -> Digest {
    let mut out = [0u8; HASH_LEN];
    HmacSha256State::new().mac(key, message, &mut out);
    out
}
