// benches/ring_bench.rs
use circstack::prelude::*;
use criterion::{BenchmarkId, Criterion, criterion_group, criterion_main};
use std::hint::black_box;

fn bench_byte_writes(c: &mut Criterion) {
    let mut group = c.benchmark_group("byte_ring_write");

    for size in [256usize, 1024, 4096, 16384].iter() {
        group.bench_with_input(BenchmarkId::new("bulk", size), size, |b, &size| {
            let mut storage = vec![0u8; size];
            let mut ring = ByteRing::new(&mut storage);
            let chunk = [0xA5u8; 100];
            b.iter(|| ring.write(black_box(&chunk)));
        });

        group.bench_with_input(BenchmarkId::new("byte_at_a_time", size), size, |b, &size| {
            let mut storage = vec![0u8; size];
            let mut ring = ByteRing::new(&mut storage);
            b.iter(|| {
                for i in 0..100u8 {
                    ring.write_byte(black_box(i));
                }
            });
        });

        group.bench_with_input(BenchmarkId::new("oversized", size), size, |b, &size| {
            let mut storage = vec![0u8; size];
            let mut ring = ByteRing::new(&mut storage);
            let data = vec![0x5Au8; size * 4];
            b.iter(|| ring.write(black_box(&data)));
        });
    }

    group.finish();
}

fn bench_read_orders(c: &mut Criterion) {
    let mut group = c.benchmark_group("lifo_vs_fifo");
    let mut storage = [0u8; 4096];
    let mut ring = ByteRing::new(&mut storage);
    // Leave top mid-buffer so reads cross the wrap
    ring.write(&[1u8; 4096]);
    ring.write(&[2u8; 100]);

    let mut out = [0u8; 512];

    group.bench_function("peek_lifo", |b| {
        b.iter(|| ring.peek(black_box(&mut out)));
    });

    group.bench_function("peek_fifo", |b| {
        b.iter(|| ring.peek_fifo(black_box(&mut out)));
    });

    group.finish();
}

fn bench_block_records(c: &mut Criterion) {
    let mut group = c.benchmark_group("block_ring");

    for record_len in [8usize, 64, 256].iter() {
        group.bench_with_input(
            BenchmarkId::new("write_read", record_len),
            record_len,
            |b, &record_len| {
                let mut storage = [0u8; 2048];
                let mut blocks = BlockRing::new(&mut storage);
                let record = vec![0x42u8; record_len];
                let mut dest = [0u8; 256];
                b.iter(|| {
                    blocks.write(black_box(&record));
                    black_box(blocks.read(&mut dest));
                });
            },
        );
    }

    group.bench_function("is_empty", |b| {
        let mut storage = [0u8; 2048];
        let mut blocks = BlockRing::new(&mut storage);
        blocks.write(&[0u8; 64]);
        b.iter(|| black_box(blocks.is_empty()));
    });

    group.finish();
}

criterion_group!(
    benches,
    bench_byte_writes,
    bench_read_orders,
    bench_block_records
);

criterion_main!(benches);
