// Copyright (c) 2025-2026 Federico Hoerth <memparanoid@gmail.com>
// SPDX-License-Identifier: GPL-3.0-only
// See LICENSE in the repository root for full license text.

//! Batch HMAC-SHA256.
//!
//! Items are independent: `outcomes[i]` depends only on `requests[i]`. The
//! sequential and threaded paths therefore produce identical output, and a
//! malformed item never affects its neighbours.

use std::sync::Mutex;
use std::thread;

use tracing::{debug, debug_span, trace};

use crate::config::{BatchConfig, BatchStrategy};
use crate::engine::{MacOutcome, MacRequest, compute_request_with};
use crate::error::HmacError;
use crate::hmac::HmacSha256State;

/// Success/skip counts of a finished batch.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct BatchSummary {
    /// Items that produced a digest
    pub succeeded: usize,
    /// Items skipped as malformed
    pub skipped: usize,
}

impl BatchSummary {
    /// Tallies a slice of outcomes.
    pub fn from_outcomes(outcomes: &[MacOutcome]) -> Self {
        outcomes
            .iter()
            .fold(Self::default(), |mut summary, outcome| {
                match outcome {
                    Ok(_) => summary.succeeded += 1,
                    Err(_) => summary.skipped += 1,
                }
                summary
            })
    }
}

/// Computes every request with [`BatchConfig::default`].
///
/// # Example
///
/// ```
/// use paycrypto::{HmacError, MacRequest, compute, compute_batch};
///
/// let requests = [
///     MacRequest::new(b"k1", b"m1"),
///     MacRequest { key: None, message: Some(&b"m2"[..]) },
/// ];
/// let outcomes = compute_batch(&requests);
///
/// assert_eq!(outcomes[0], Ok(compute(b"k1", b"m1")));
/// assert_eq!(outcomes[1], Err(HmacError::MissingKey));
/// ```
pub fn compute_batch(requests: &[MacRequest<'_>]) -> Vec<MacOutcome> {
    compute_batch_with(&BatchConfig::default(), requests)
}

/// Computes every request, positionally 1:1.
pub fn compute_batch_with(config: &BatchConfig, requests: &[MacRequest<'_>]) -> Vec<MacOutcome> {
    let mut outcomes: Vec<MacOutcome> = vec![Err(HmacError::MissingKey); requests.len()];
    run_into(config, requests, &mut outcomes);
    outcomes
}

/// Computes every request into a caller-provided outcome slice.
///
/// Fails with [`HmacError::LengthMismatch`], writing nothing, when the slices
/// differ in length.
pub fn compute_batch_into(
    config: &BatchConfig,
    requests: &[MacRequest<'_>],
    outcomes: &mut [MacOutcome],
) -> Result<BatchSummary, HmacError> {
    if requests.len() != outcomes.len() {
        return Err(HmacError::LengthMismatch {
            requests: requests.len(),
            outcomes: outcomes.len(),
        });
    }

    Ok(run_into(config, requests, outcomes))
}

/// Runs the batch; `requests` and `outcomes` have equal length.
fn run_into(
    config: &BatchConfig,
    requests: &[MacRequest<'_>],
    outcomes: &mut [MacOutcome],
) -> BatchSummary {
    debug_assert_eq!(requests.len(), outcomes.len());

    if requests.is_empty() {
        return BatchSummary::default();
    }

    let _span = debug_span!("hmac_batch", len = requests.len()).entered();

    match config.strategy_for(requests.len()) {
        BatchStrategy::Sequential => {
            debug!("running batch sequentially");
            run_sequential(0, requests, outcomes);
        }
        BatchStrategy::Parallel { workers } => {
            debug!(workers, "running batch on worker threads");
            run_parallel(workers, requests, outcomes);
        }
    }

    let summary = BatchSummary::from_outcomes(outcomes);
    debug!(
        succeeded = summary.succeeded,
        skipped = summary.skipped,
        "batch finished"
    );

    summary
}

/// Processes one contiguous chunk with a single reused HMAC state.
///
/// `base` is the chunk's offset in the whole batch, for logging.
fn run_sequential(base: usize, requests: &[MacRequest<'_>], outcomes: &mut [MacOutcome]) {
    let mut state = HmacSha256State::new();

    for (offset, (request, slot)) in requests.iter().zip(outcomes.iter_mut()).enumerate() {
        *slot = compute_request_with(&mut state, request);
        if let Err(error) = &*slot {
            trace!(index = base + offset, %error, "skipping malformed request");
        }
    }
}

/// A contiguous slice of the batch and its offset.
type Chunk<'a, 'r> = (usize, &'a [MacRequest<'r>], &'a mut [MacOutcome]);

fn take_chunk<'a, 'r>(slot: &Mutex<Option<Chunk<'a, 'r>>>) -> Option<Chunk<'a, 'r>> {
    match slot.lock() {
        Ok(mut guard) => guard.take(),
        Err(poisoned) => poisoned.into_inner().take(),
    }
}

/// Splits the batch into `workers` contiguous chunks run on scoped threads.
///
/// Each chunk is claimed exactly once. The calling thread drains every chunk
/// no worker has claimed, so a failed spawn only costs parallelism.
pub(crate) fn run_parallel(
    workers: usize,
    requests: &[MacRequest<'_>],
    outcomes: &mut [MacOutcome],
) {
    let chunk_len = requests.len().div_ceil(workers.max(1)).max(1);

    let slots: Vec<Mutex<Option<Chunk<'_, '_>>>> = requests
        .chunks(chunk_len)
        .zip(outcomes.chunks_mut(chunk_len))
        .enumerate()
        .map(|(i, (reqs, outs))| Mutex::new(Some((i * chunk_len, reqs, outs))))
        .collect();

    thread::scope(|scope| {
        for (i, slot) in slots.iter().enumerate().skip(1) {
            let spawned = thread::Builder::new()
                .name(format!("paycrypto-batch-{i}"))
                .spawn_scoped(scope, move || {
                    if let Some((base, reqs, outs)) = take_chunk(slot) {
                        run_sequential(base, reqs, outs);
                    }
                });

            if let Err(error) = spawned {
                debug!(chunk = i, %error, "worker spawn failed, chunk left to calling thread");
            }
        }

        for slot in &slots {
            if let Some((base, reqs, outs)) = take_chunk(slot) {
                run_sequential(base, reqs, outs);
            }
        }
    });
}
