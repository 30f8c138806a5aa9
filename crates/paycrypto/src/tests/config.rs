// Copyright (c) 2025-2026 Federico Hoerth <memparanoid@gmail.com>
// SPDX-License-Identifier: GPL-3.0-only
// See LICENSE in the repository root for full license text.

use std::collections::HashMap;

use crate::config::{
    BatchConfig, BatchStrategy, DEFAULT_PARALLEL_THRESHOLD, ENV_MAX_WORKERS,
    ENV_PARALLEL_THRESHOLD,
};
use crate::error::ConfigError;

fn lookup_from(vars: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
    let map: HashMap<String, String> = vars
        .iter()
        .map(|(k, v)| (k.to_string(), v.to_string()))
        .collect();
    move |var| map.get(var).cloned()
}

#[test]
fn test_default_config() {
    let config = BatchConfig::default();
    assert_eq!(config.parallel_threshold, DEFAULT_PARALLEL_THRESHOLD);
    assert_eq!(config.max_workers, 0);
}

#[test]
fn test_from_lookup_without_variables_uses_defaults() {
    let config = BatchConfig::from_lookup(lookup_from(&[])).expect("valid config");
    assert_eq!(config, BatchConfig::default());
}

#[test]
fn test_from_lookup_reads_overrides() {
    let config = BatchConfig::from_lookup(lookup_from(&[
        (ENV_PARALLEL_THRESHOLD, "1024"),
        (ENV_MAX_WORKERS, " 6 "),
    ]))
    .expect("valid config");

    assert_eq!(config.parallel_threshold, 1024);
    assert_eq!(config.max_workers, 6);
}

#[test]
fn test_from_lookup_rejects_malformed_values() {
    let result = BatchConfig::from_lookup(lookup_from(&[(ENV_MAX_WORKERS, "-1")]));

    assert_eq!(
        result,
        Err(ConfigError::InvalidValue {
            var: ENV_MAX_WORKERS,
            value: "-1".to_string(),
        })
    );
}

#[test]
fn test_sequential_config_never_fans_out() {
    let config = BatchConfig::sequential();
    assert_eq!(config.strategy_for(0), BatchStrategy::Sequential);
    assert_eq!(config.strategy_for(1_000_000), BatchStrategy::Sequential);
}

#[test]
fn test_below_threshold_is_sequential() {
    let config = BatchConfig::default()
        .with_parallel_threshold(100)
        .with_max_workers(4);
    assert_eq!(config.strategy_for(99), BatchStrategy::Sequential);
}

#[test]
fn test_single_worker_is_sequential() {
    let config = BatchConfig::default()
        .with_parallel_threshold(0)
        .with_max_workers(1);
    assert_eq!(config.strategy_for(10_000), BatchStrategy::Sequential);
}

fn available() -> usize {
    std::thread::available_parallelism()
        .map(|n| n.get())
        .unwrap_or(1)
}

#[test]
fn test_worker_count_clamped_to_available_cpus() {
    assert_eq!(BatchConfig::default().worker_count(), available());
    assert_eq!(BatchConfig::default().with_max_workers(1).worker_count(), 1);
    assert_eq!(
        BatchConfig::default()
            .with_max_workers(usize::MAX)
            .worker_count(),
        available()
    );
}

#[test]
fn test_oversized_env_worker_count_is_clamped() {
    let config = BatchConfig::from_lookup(lookup_from(&[(ENV_MAX_WORKERS, "1000000")]))
        .expect("valid config");

    assert_eq!(config.max_workers, 1_000_000);
    assert!(config.worker_count() <= available());
}

#[cfg(feature = "parallel")]
#[test]
fn test_parallel_workers_capped_by_batch_len() {
    let config = BatchConfig::default()
        .with_parallel_threshold(0)
        .with_max_workers(8);
    let workers = 8usize.min(available());

    let expected = |len: usize| match workers.min(len) {
        0 | 1 => BatchStrategy::Sequential,
        n => BatchStrategy::Parallel { workers: n },
    };

    assert_eq!(config.strategy_for(100), expected(100));
    assert_eq!(config.strategy_for(3), expected(3));
    assert_eq!(config.strategy_for(1), BatchStrategy::Sequential);
}

#[cfg(not(feature = "parallel"))]
#[test]
fn test_parallel_feature_disabled_is_sequential() {
    let config = BatchConfig::default()
        .with_parallel_threshold(0)
        .with_max_workers(8);

    assert_eq!(config.strategy_for(100), BatchStrategy::Sequential);
}
