// Copyright (c) 2025-2026 Federico Hoerth <memparanoid@gmail.com>
// SPDX-License-Identifier: GPL-3.0-only
// See LICENSE in the repository root for full license text.

use proptest::prelude::*;

use crate::batch::compute_batch_with;
use crate::config::BatchConfig;
use crate::engine::{MacRequest, compute, verify};
use crate::error::HmacError;
use crate::hmac::hmac_sha256;

use super::support::is_lower_hex_64;

fn bytes(max_len: usize) -> impl Strategy<Value = Vec<u8>> {
    proptest::collection::vec(any::<u8>(), 0..max_len)
}

proptest! {
    #[test]
    fn compute_is_deterministic_and_well_formed(key in bytes(200), message in bytes(400)) {
        let first = compute(&key, &message);
        let second = compute(&key, &message);

        prop_assert_eq!(first, second);
        prop_assert!(is_lower_hex_64(first.as_str()));
        prop_assert_eq!(first.to_digest(), hmac_sha256(&key, &message));
    }

    #[test]
    fn verify_accepts_own_digest(key in bytes(100), message in bytes(200)) {
        let digest = compute(&key, &message);
        prop_assert!(verify(&key, &message, digest.as_str()));
    }

    #[test]
    fn batch_matches_individual_compute(
        pairs in proptest::collection::vec((bytes(80), bytes(160)), 0..40),
        missing in proptest::collection::vec(0u8..4, 40),
        workers in 1usize..6,
    ) {
        let requests: Vec<MacRequest<'_>> = pairs
            .iter()
            .zip(missing.iter())
            .map(|((key, message), flag)| MacRequest {
                key: (*flag != 1).then_some(key.as_slice()),
                message: (*flag != 2).then_some(message.as_slice()),
            })
            .collect();

        let config = BatchConfig::default()
            .with_parallel_threshold(0)
            .with_max_workers(workers);
        let outcomes = compute_batch_with(&config, &requests);

        prop_assert_eq!(outcomes.len(), requests.len());
        for (((key, message), flag), outcome) in pairs.iter().zip(missing.iter()).zip(outcomes.iter()) {
            let expected = match flag {
                1 => Err(HmacError::MissingKey),
                2 => Err(HmacError::MissingMessage),
                _ => Ok(compute(key, message)),
            };
            prop_assert_eq!(outcome, &expected);
        }
    }
}
