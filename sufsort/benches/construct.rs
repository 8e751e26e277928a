// Copyright 2025 Logan Magee
//
// SPDX-License-Identifier: Apache-2.0

#![allow(missing_docs)]

use criterion::{BenchmarkId, Criterion, Throughput, criterion_group, criterion_main};

const SIZES: [usize; 3] = [1 << 10, 1 << 14, 1 << 17];

/// Deterministic xorshift byte stream so runs are comparable across machines.
fn test_data(len: usize) -> Vec<u8> {
    let mut state: u32 = 0x2545_f491;
    let mut data = Vec::with_capacity(len);
    for _ in 0..len {
        state ^= state << 13;
        state ^= state >> 17;
        state ^= state << 5;
        data.push((state >> 24) as u8);
    }
    data
}

fn construct(c: &mut Criterion) {
    let mut group = c.benchmark_group("construct");

    for size in SIZES {
        let data = test_data(size);

        group
            .throughput(Throughput::Bytes(size as u64))
            .bench_with_input(BenchmarkId::new("sort", size), &data, |b, data| {
                b.iter(|| sufsort::sort(data));
            })
            .bench_with_input(BenchmarkId::new("sort_bwt", size), &data, |b, data| {
                b.iter(|| sufsort::sort_bwt(data));
            });
    }

    group.finish();
}

criterion_group!(benches, construct);
criterion_main!(benches);
