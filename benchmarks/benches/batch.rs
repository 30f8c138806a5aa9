// Copyright (c) 2025-2026 Federico Hoerth <memparanoid@gmail.com>
// SPDX-License-Identifier: GPL-3.0-only
// See LICENSE in the repository root for full license text.

use criterion::{BenchmarkId, Criterion, Throughput, black_box, criterion_group, criterion_main};

use paycrypto::{BatchConfig, MacRequest, compute_batch_with, compute_request};

fn benchmark_batch(c: &mut Criterion) {
    let mut group = c.benchmark_group("hmac_batch");

    let sequential = BatchConfig::sequential();
    let parallel = BatchConfig::default().with_parallel_threshold(0);

    for count in [16usize, 256, 4096].iter() {
        let keys: Vec<Vec<u8>> = (0..*count)
            .map(|i| format!("key-{i:08}").into_bytes())
            .collect();
        let messages: Vec<Vec<u8>> = (0..*count)
            .map(|i| format!("{{\"order\":{i},\"amount\":{}}}", i * 13).into_bytes())
            .collect();
        let requests: Vec<MacRequest<'_>> = keys
            .iter()
            .zip(messages.iter())
            .map(|(k, m)| MacRequest::new(k, m))
            .collect();

        group.throughput(Throughput::Elements(*count as u64));

        group.bench_with_input(BenchmarkId::new("loop", count), &requests, |b, requests| {
            b.iter(|| {
                black_box(requests)
                    .iter()
                    .map(compute_request)
                    .collect::<Vec<_>>()
            });
        });

        group.bench_with_input(
            BenchmarkId::new("sequential", count),
            &requests,
            |b, requests| {
                b.iter(|| compute_batch_with(&sequential, black_box(requests)));
            },
        );

        group.bench_with_input(
            BenchmarkId::new("parallel", count),
            &requests,
            |b, requests| {
                b.iter(|| compute_batch_with(&parallel, black_box(requests)));
            },
        );
    }
    group.finish();
}

criterion_group!(benches, benchmark_batch);
criterion_main!(benches);
