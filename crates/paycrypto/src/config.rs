// Copyright (c) 2025-2026 Federico Hoerth <memparanoid@gmail.com>
// SPDX-License-Identifier: GPL-3.0-only
// See LICENSE in the repository root for full license text.

//! Batch execution settings.

use crate::error::ConfigError;

/// Environment variable overriding [`BatchConfig::parallel_threshold`].
pub const ENV_PARALLEL_THRESHOLD: &str = "PAYCRYPTO_BATCH_PARALLEL_THRESHOLD";

/// Environment variable overriding [`BatchConfig::max_workers`].
pub const ENV_MAX_WORKERS: &str = "PAYCRYPTO_BATCH_MAX_WORKERS";

/// Default smallest batch that is fanned out to worker threads.
pub const DEFAULT_PARALLEL_THRESHOLD: usize = 256;

/// How a batch is executed.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BatchStrategy {
    /// One pass on the calling thread
    Sequential,
    /// Contiguous chunks processed on scoped worker threads
    Parallel {
        /// Number of chunks, including the one run on the calling thread
        workers: usize,
    },
}

/// Batch execution settings.
///
/// Neither field changes results; both only pick between the sequential and
/// the threaded path.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BatchConfig {
    /// Batches shorter than this run sequentially.
    pub parallel_threshold: usize,
    /// Worker cap. `0` means one per available CPU; larger values are
    /// clamped to the available CPUs.
    pub max_workers: usize,
}

impl Default for BatchConfig {
    fn default() -> Self {
        Self {
            parallel_threshold: DEFAULT_PARALLEL_THRESHOLD,
            max_workers: 0,
        }
    }
}

impl BatchConfig {
    /// Always run on the calling thread.
    pub const fn sequential() -> Self {
        Self {
            parallel_threshold: usize::MAX,
            max_workers: 1,
        }
    }

    /// Sets [`parallel_threshold`](Self::parallel_threshold).
    pub const fn with_parallel_threshold(mut self, threshold: usize) -> Self {
        self.parallel_threshold = threshold;
        self
    }

    /// Sets [`max_workers`](Self::max_workers).
    pub const fn with_max_workers(mut self, max_workers: usize) -> Self {
        self.max_workers = max_workers;
        self
    }

    /// Reads overrides from the process environment.
    ///
    /// Unset variables keep their defaults.
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|var| std::env::var(var).ok())
    }

    /// Like [`from_env`](Self::from_env), with a custom variable source.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let mut config = Self::default();

        if let Some(threshold) = parse_var(&lookup, ENV_PARALLEL_THRESHOLD)? {
            config.parallel_threshold = threshold;
        }
        if let Some(max_workers) = parse_var(&lookup, ENV_MAX_WORKERS)? {
            config.max_workers = max_workers;
        }

        Ok(config)
    }

    /// Picks the execution strategy for a batch of `len` requests.
    pub fn strategy_for(&self, len: usize) -> BatchStrategy {
        if !cfg!(feature = "parallel") || len < self.parallel_threshold {
            return BatchStrategy::Sequential;
        }

        let workers = self.worker_count().min(len);
        if workers <= 1 {
            BatchStrategy::Sequential
        } else {
            BatchStrategy::Parallel { workers }
        }
    }

    /// Worker threads for a batch: `max_workers`, never above the CPUs
    /// available to the process.
    pub fn worker_count(&self) -> usize {
        let available = std::thread::available_parallelism()
            .map(|n| n.get())
            .unwrap_or(1);

        match self.max_workers {
            0 => available,
            cap => cap.min(available),
        }
    }
}

fn parse_var<F>(lookup: &F, var: &'static str) -> Result<Option<usize>, ConfigError>
where
    F: Fn(&str) -> Option<String>,
{
    let Some(raw) = lookup(var) else {
        return Ok(None);
    };

    match raw.trim().parse::<usize>() {
        Ok(value) => Ok(Some(value)),
        Err(_) => Err(ConfigError::InvalidValue { var, value: raw }),
    }
}
