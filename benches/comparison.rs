//! Benchmark comparison between the range combinators and bitvec

use bitop_range::{and_assign, or_assign, xor_assign};
use bitvec::prelude::*;
use core::hint::black_box;
use criterion::{BenchmarkId, Criterion, Throughput, criterion_group, criterion_main};

// Range lengths in bits, from inside one word to many words
const SIZES: &[usize] = &[10, 50, 100, 500, 1000, 5000, 10000];

// Unaligned start so both ends need masking
const OFFSET: usize = 13;

fn operands(bits: usize) -> (Vec<u64>, Vec<u64>) {
    let words = (OFFSET + bits).div_ceil(64);
    let dest = (0..words as u64).map(|i| i.wrapping_mul(0x9E37_79B9_7F4A_7C15)).collect();
    let src = (0..words as u64).map(|i| !i.rotate_left(29)).collect();
    (dest, src)
}

fn bench_and(c: &mut Criterion) {
    let mut group = c.benchmark_group("and_range");

    for &size in SIZES {
        group.throughput(Throughput::Elements(size as u64));
        let (dest, src) = operands(size);

        group.bench_with_input(BenchmarkId::new("bitop_range", size), &size, |b, &size| {
            let mut dest = dest.clone();
            b.iter(|| {
                and_assign(&mut dest, black_box(&src), OFFSET, size);
                black_box(&dest);
            });
        });

        group.bench_with_input(BenchmarkId::new("BitSlice", size), &size, |b, &size| {
            let mut dest = dest.clone();
            let src = src.view_bits::<Lsb0>();
            b.iter(|| {
                let range = OFFSET..OFFSET + size;
                dest.view_bits_mut::<Lsb0>()[range.clone()] &= black_box(&src[range]);
                black_box(&dest);
            });
        });
    }

    group.finish();
}

fn bench_or(c: &mut Criterion) {
    let mut group = c.benchmark_group("or_range");

    for &size in SIZES {
        group.throughput(Throughput::Elements(size as u64));
        let (dest, src) = operands(size);

        group.bench_with_input(BenchmarkId::new("bitop_range", size), &size, |b, &size| {
            let mut dest = dest.clone();
            b.iter(|| {
                or_assign(&mut dest, black_box(&src), OFFSET, size);
                black_box(&dest);
            });
        });

        group.bench_with_input(BenchmarkId::new("BitSlice", size), &size, |b, &size| {
            let mut dest = dest.clone();
            let src = src.view_bits::<Lsb0>();
            b.iter(|| {
                let range = OFFSET..OFFSET + size;
                dest.view_bits_mut::<Lsb0>()[range.clone()] |= black_box(&src[range]);
                black_box(&dest);
            });
        });
    }

    group.finish();
}

fn bench_xor(c: &mut Criterion) {
    let mut group = c.benchmark_group("xor_range");

    for &size in SIZES {
        group.throughput(Throughput::Elements(size as u64));
        let (dest, src) = operands(size);

        group.bench_with_input(BenchmarkId::new("bitop_range", size), &size, |b, &size| {
            let mut dest = dest.clone();
            b.iter(|| {
                xor_assign(&mut dest, black_box(&src), OFFSET, size);
                black_box(&dest);
            });
        });

        group.bench_with_input(BenchmarkId::new("BitSlice", size), &size, |b, &size| {
            let mut dest = dest.clone();
            let src = src.view_bits::<Lsb0>();
            b.iter(|| {
                let range = OFFSET..OFFSET + size;
                dest.view_bits_mut::<Lsb0>()[range.clone()] ^= black_box(&src[range]);
                black_box(&dest);
            });
        });

        // Bit-at-a-time baseline
        group.bench_with_input(BenchmarkId::new("per_bit", size), &size, |b, &size| {
            let mut dest = dest.clone();
            b.iter(|| {
                for i in OFFSET..OFFSET + size {
                    let (wi, bi) = (i / 64, i % 64);
                    dest[wi] ^= src[wi] & (1 << bi);
                }
                black_box(&dest);
            });
        });
    }

    group.finish();
}

criterion_group!(benches, bench_and, bench_or, bench_xor);
criterion_main!(benches);
