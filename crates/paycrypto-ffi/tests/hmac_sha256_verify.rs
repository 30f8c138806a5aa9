// Copyright (c) 2025-2026 Federico Hoerth <memparanoid@gmail.com>
// SPDX-License-Identifier: GPL-3.0-only
// See LICENSE in the repository root for full license text.

#[cfg(test)]
mod hmac_sha256_verify_tests {
    use std::os::raw::c_char;
    use std::ptr;

    use paycrypto_ffi::paycrypto_hmac_sha256_verify;

    const HELLO_HEX: &str = "095d5a21fe6d0646db223fdf3de6436bb8dfb2fab0b51677ecf6441fcf5f2a67";

    fn verify(key: &[u8], data: &[u8], expected: &str) -> i32 {
        unsafe {
            paycrypto_hmac_sha256_verify(
                key.as_ptr(),
                key.len(),
                data.as_ptr(),
                data.len(),
                expected.as_ptr() as *const c_char,
                expected.len(),
            )
        }
    }

    #[test]
    fn test_matching_digest() {
        assert_eq!(verify(b"secret-key", b"hello world", HELLO_HEX), 1);
    }

    #[test]
    fn test_uppercase_digest() {
        assert_eq!(
            verify(b"secret-key", b"hello world", &HELLO_HEX.to_uppercase()),
            1
        );
    }

    #[test]
    fn test_wrong_key() {
        assert_eq!(verify(b"secret-kez", b"hello world", HELLO_HEX), 0);
    }

    #[test]
    fn test_truncated_digest() {
        assert_eq!(verify(b"secret-key", b"hello world", &HELLO_HEX[..63]), 0);
    }

    #[test]
    fn test_not_hex() {
        let bad = format!("{}zz", &HELLO_HEX[..62]);
        assert_eq!(verify(b"secret-key", b"hello world", &bad), 0);
    }

    #[test]
    fn test_null_inputs() {
        let data = b"hello world";
        unsafe {
            assert_eq!(
                paycrypto_hmac_sha256_verify(
                    ptr::null(),
                    0,
                    data.as_ptr(),
                    data.len(),
                    HELLO_HEX.as_ptr() as *const c_char,
                    64,
                ),
                0
            );
            assert_eq!(
                paycrypto_hmac_sha256_verify(
                    b"secret-key".as_ptr(),
                    10,
                    data.as_ptr(),
                    data.len(),
                    ptr::null(),
                    64,
                ),
                0
            );
        }
    }
}
