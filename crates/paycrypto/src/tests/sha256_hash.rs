// Copyright (c) 2025-2026 Federico Hoerth <memparanoid@gmail.com>
// SPDX-License-Identifier: GPL-3.0-only
// See LICENSE in the repository root for full license text.

// SHA-256 known answers
//
// References:
// [1] FIPS 180-4: Secure Hash Standard (SHS), Section 6.2
// [2] RFC 6234, Section 8.5 test vectors

use paycrypto_util::hex_to_bytes;

use crate::sha256::{Sha256State, sha256};

fn assert_sha256(msg: &[u8], expected_hex: &str) {
    let digest = sha256(msg);
    assert_eq!(
        digest.as_slice(),
        hex_to_bytes(expected_hex).as_slice(),
        "SHA-256 mismatch for {}-byte message",
        msg.len()
    );
}

#[test]
fn test_sha256_hash_abc() {
    assert_sha256(
        b"abc",
        "ba7816bf8f01cfea414140de5dae2223b00361a396177a9cb410ff61f20015ad",
    );
}

#[test]
fn test_sha256_hash_empty() {
    assert_sha256(
        b"",
        "e3b0c44298fc1c149afbf4c8996fb92427ae41e4649b934ca495991b7852b855",
    );
}

#[test]
fn test_sha256_hash_56_bytes() {
    // 56 bytes forces a second block holding only padding and length
    let msg = b"abcdbcdecdefdefgefghfghighijhijkijkljklmklmnlmnomnopnopq";
    assert_eq!(msg.len(), 56);

    assert_sha256(
        msg,
        "248d6a61d20638b8e5c026930c3e6039a33ce45964ff2167f6ecedd419db06c1",
    );
}

#[test]
fn test_sha256_hash_55_and_64_bytes() {
    assert_sha256(
        &[b'a'; 55],
        "9f4390f8d30c2dd92ec9f095b65e2b9ae9b0a925a5258e241c9f1e910f734318",
    );
    assert_sha256(
        &[b'a'; 64],
        "ffe054fe7ae0cb6dc65c3af9b61d5209f439851db43d0ba5997337df154668eb",
    );
}

#[test]
fn test_sha256_hash_one_million_a() {
    assert_sha256(
        &vec![b'a'; 1_000_000],
        "cdc76e5c9914fb9281a1c7e284d73e67f1809a48a497200e046d39ccc7112cd0",
    );
}

#[test]
fn test_sha256_streaming_matches_one_shot() {
    let msg: Vec<u8> = (0..1000u32).map(|i| (i * 7) as u8).collect();
    let expected = sha256(&msg);

    for split in [1usize, 3, 63, 64, 65, 127, 500] {
        let mut state = Sha256State::new();
        for chunk in msg.chunks(split) {
            state.update(chunk);
        }

        let mut out = [0u8; 32];
        state.finalize(&mut out);
        assert_eq!(out, expected, "chunk size {}", split);
    }
}

#[test]
fn test_sha256_reset_allows_reuse() {
    let mut state = Sha256State::new();
    let mut first = [0u8; 32];
    state.update(b"first message");
    state.finalize(&mut first);

    state.reset();
    let mut second = [0u8; 32];
    state.update(b"abc");
    state.finalize(&mut second);

    assert_eq!(second, sha256(b"abc"));
}
