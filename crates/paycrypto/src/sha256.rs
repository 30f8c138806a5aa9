// Copyright (c) 2025-2026 Federico Hoerth <memparanoid@gmail.com>
// SPDX-License-Identifier: GPL-3.0-only
// See LICENSE in the repository root for full license text.

//! SHA-256 implementation per RFC 6234 Section 6.2

use paycrypto_util::{fast_zeroize_slice, u32_from_be, u32_to_be, zeroize_word};

/// SHA-256 constants K per RFC 6234 Section 5.1
const K256: [u32; 64] = [
    0x428a2f98, 0x71374491, 0xb5c0fbcf, 0xe9b5dba5, 0x3956c25b, 0x59f111f1, 0x923f82a4, 0xab1c5ed5,
    0xd807aa98, 0x12835b01, 0x243185be, 0x550c7dc3, 0x72be5d74, 0x80deb1fe, 0x9bdc06a7, 0xc19bf174,
    0xe49b69c1, 0xefbe4786, 0x0fc19dc6, 0x240ca1cc, 0x2de92c6f, 0x4a7484aa, 0x5cb0a9dc, 0x76f988da,
    0x983e5152, 0xa831c66d, 0xb00327c8, 0xbf597fc7, 0xc6e00bf3, 0xd5a79147, 0x06ca6351, 0x14292967,
    0x27b70a85, 0x2e1b2138, 0x4d2c6dfc, 0x53380d13, 0x650a7354, 0x766a0abb, 0x81c2c92e, 0x92722c85,
    0xa2bfe8a1, 0xa81a664b, 0xc24b8b70, 0xc76c51a3, 0xd192e819, 0xd6990624, 0xf40e3585, 0x106aa070,
    0x19a4c116, 0x1e376c08, 0x2748774c, 0x34b0bcb5, 0x391c0cb3, 0x4ed8aa4a, 0x5b9cca4f, 0x682e6ff3,
    0x748f82ee, 0x78a5636f, 0x84c87814, 0x8cc70208, 0x90befffa, 0xa4506ceb, 0xbef9a3f7, 0xc67178f2,
];

/// Initial hash values H(0) per RFC 6234 Section 6.2.1
/// First 32 bits of fractional parts of square roots of first 8 primes
const H0: [u32; 8] = [
    0x6a09e667, 0xbb67ae85, 0x3c6ef372, 0xa54ff53a, 0x510e527f, 0x9b05688c, 0x1f83d9ab, 0x5be0cd19,
];

/// SHA-256 block size in bytes
pub const BLOCK_LEN: usize = 64;

/// SHA-256 output size in bytes
pub const HASH_LEN: usize = 32;

// ═══════════════════════════════════════════════════════════════════════════
// SHA-256 functions per RFC 6234 Section 5.1
// ═══════════════════════════════════════════════════════════════════════════

#[inline(always)]
fn ch(x: u32, y: u32, z: u32) -> u32 {
    (x & y) ^ (!x & z)
}

#[inline(always)]
fn maj(x: u32, y: u32, z: u32) -> u32 {
    (x & y) ^ (z & (x ^ y))
}

#[inline(always)]
fn bsig0(x: u32) -> u32 {
    x.rotate_right(2) ^ x.rotate_right(13) ^ x.rotate_right(22)
}

#[inline(always)]
fn bsig1(x: u32) -> u32 {
    x.rotate_right(6) ^ x.rotate_right(11) ^ x.rotate_right(25)
}

#[inline(always)]
fn ssig0(x: u32) -> u32 {
    x.rotate_right(7) ^ x.rotate_right(18) ^ (x >> 3)
}

#[inline(always)]
fn ssig1(x: u32) -> u32 {
    x.rotate_right(17) ^ x.rotate_right(19) ^ (x >> 10)
}

/// SHA-256 streaming state per RFC 6234 Section 6.2
///
/// All working variables live in the struct so they can be wiped after every
/// compression and on drop. After [`finalize`](Self::finalize) the state is
/// fully zeroized and must be [`reset`](Self::reset) before reuse.
pub struct Sha256State {
    // Hash state H(i) per RFC 6234 Section 6.2.1
    h: [u32; 8],

    // Message schedule W[0..63]
    w: [u32; 64],

    // Working variables a..h per RFC 6234 Section 6.2.2
    wv: [u32; 8],

    // Input buffering
    buffer: [u8; BLOCK_LEN],
    tmp_word: [u8; 4],
    buffer_len: usize,
    total_len: u64,
}

impl Default for Sha256State {
    fn default() -> Self {
        Self::new()
    }
}

impl Sha256State {
    /// Create new SHA-256 state initialized with H(0)
    pub fn new() -> Self {
        Self {
            h: H0,
            w: [0u32; 64],
            wv: [0u32; 8],
            buffer: [0u8; BLOCK_LEN],
            tmp_word: [0u8; 4],
            buffer_len: 0,
            total_len: 0,
        }
    }

    /// Compress `self.buffer` into H per RFC 6234 Section 6.2.2
    fn compress(&mut self) {
        // W[0..15] from block (big-endian)
        for t in 0..16 {
            self.tmp_word
                .copy_from_slice(&self.buffer[t * 4..(t + 1) * 4]);
            u32_from_be(&mut self.w[t], &mut self.tmp_word);
        }

        // W[16..63]: W[t] = σ1(W[t-2]) + W[t-7] + σ0(W[t-15]) + W[t-16]
        for t in 16..64 {
            self.w[t] = ssig1(self.w[t - 2])
                .wrapping_add(self.w[t - 7])
                .wrapping_add(ssig0(self.w[t - 15]))
                .wrapping_add(self.w[t - 16]);
        }

        self.wv = self.h;

        for (k, wt) in K256.iter().zip(self.w.iter()) {
            // T1 = h + Σ1(e) + Ch(e,f,g) + K[t] + W[t]
            let t1 = self.wv[7]
                .wrapping_add(bsig1(self.wv[4]))
                .wrapping_add(ch(self.wv[4], self.wv[5], self.wv[6]))
                .wrapping_add(*k)
                .wrapping_add(*wt);

            // T2 = Σ0(a) + Maj(a,b,c)
            let t2 = bsig0(self.wv[0]).wrapping_add(maj(self.wv[0], self.wv[1], self.wv[2]));

            // h=g, g=f, f=e, e=d+T1, d=c, c=b, b=a, a=T1+T2
            self.wv.copy_within(0..7, 1);
            self.wv[4] = self.wv[4].wrapping_add(t1);
            self.wv[0] = t1.wrapping_add(t2);
        }

        for (h, v) in self.h.iter_mut().zip(self.wv.iter()) {
            *h = h.wrapping_add(*v);
        }

        fast_zeroize_slice(&mut self.w);
        fast_zeroize_slice(&mut self.wv);
    }

    /// Update state with data
    pub fn update(&mut self, data: &[u8]) {
        self.total_len = self.total_len.wrapping_add(data.len() as u64);

        let mut input = data;
        while !input.is_empty() {
            let take = core::cmp::min(BLOCK_LEN - self.buffer_len, input.len());
            self.buffer[self.buffer_len..self.buffer_len + take].copy_from_slice(&input[..take]);
            self.buffer_len += take;
            input = &input[take..];

            if self.buffer_len == BLOCK_LEN {
                self.compress();
                fast_zeroize_slice(&mut self.buffer);
                self.buffer_len = 0;
            }
        }
    }

    /// Finalize and output hash, leaving the state zeroized.
    pub fn finalize(&mut self, out: &mut [u8; HASH_LEN]) {
        // Padding per RFC 6234 Section 4.1
        let bit_len = self.total_len.wrapping_mul(8);

        // buffer_len < BLOCK_LEN holds after every update
        self.buffer[self.buffer_len] = 0x80;
        self.buffer_len += 1;

        // Not enough room for the 64-bit length: pad and compress
        if self.buffer_len > BLOCK_LEN - 8 {
            self.buffer[self.buffer_len..].fill(0);
            self.compress();
            self.buffer_len = 0;
        }

        self.buffer[self.buffer_len..BLOCK_LEN - 8].fill(0);
        self.buffer[BLOCK_LEN - 8..].copy_from_slice(&bit_len.to_be_bytes());
        self.compress();

        // Output hash H(N), zeroizing each word as it is exported
        for (word, chunk) in self.h.iter_mut().zip(out.chunks_exact_mut(4)) {
            u32_to_be(word, &mut self.tmp_word);
            chunk.copy_from_slice(&self.tmp_word);
        }

        self.wipe();
    }

    /// Reset to H(0) for reuse
    pub fn reset(&mut self) {
        self.wipe();
        self.h = H0;
    }

    fn wipe(&mut self) {
        fast_zeroize_slice(&mut self.h);
        fast_zeroize_slice(&mut self.w);
        fast_zeroize_slice(&mut self.wv);
        fast_zeroize_slice(&mut self.buffer);
        fast_zeroize_slice(&mut self.tmp_word);
        zeroize_word(&mut self.buffer_len);
        zeroize_word(&mut self.total_len);
    }

    /// True when every field holds zero (test probe).
    #[cfg(test)]
    pub(crate) fn is_zeroized(&self) -> bool {
        self.h.iter().all(|&w| w == 0)
            && self.w.iter().all(|&w| w == 0)
            && self.wv.iter().all(|&w| w == 0)
            && paycrypto_util::is_slice_zeroized(&self.buffer)
            && paycrypto_util::is_slice_zeroized(&self.tmp_word)
            && self.buffer_len == 0
            && self.total_len == 0
    }
}

impl Drop for Sha256State {
    fn drop(&mut self) {
        self.wipe();
    }
}

/// One-shot SHA-256.
///
/// # Example
///
/// ```
/// let digest = paycrypto::sha256(b"abc");
/// assert_eq!(digest[..4], [0xba, 0x78, 0x16, 0xbf]);
/// ```
pub fn sha256(data: &[u8]) -> [u8; HASH_LEN] {
    let mut out = [0u8; HASH_LEN];
    let mut state = Sha256State::new();
    state.update(data);
    state.finalize(&mut out);
    out
}
