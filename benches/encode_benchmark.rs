use criterion::{black_box, criterion_group, criterion_main, Criterion};
use rscode::ReedSolomon;

/// Encode throughput for the common GF(2^8) configurations
fn bench_encode(c: &mut Criterion) {
    let mut group = c.benchmark_group("rs_encode");

    // Full-length block, 10 parity symbols
    let codec = ReedSolomon::gf256(10, 0).unwrap();
    let data: Vec<u8> = (0..codec.data_len()).map(|i| (i * 37 + 11) as u8).collect();
    group.bench_function("gf256_full_block_nroots_10", |b| {
        let mut parity = vec![0u8; codec.parity_len()];
        b.iter(|| codec.encode(black_box(&data), black_box(&mut parity)));
    });

    // Heavily shortened block, 30 parity symbols (worst-case inner loop)
    let codec = ReedSolomon::gf256(30, 255 - 30 - 32).unwrap();
    let data: Vec<u8> = (0..codec.data_len()).map(|i| (i * 53 + 7) as u8).collect();
    group.bench_function("gf256_short_block_nroots_30", |b| {
        let mut parity = vec![0u8; codec.parity_len()];
        b.iter(|| codec.encode(black_box(&data), black_box(&mut parity)));
    });

    group.finish();
}

/// Configuration build cost (table construction dominates)
fn bench_init(c: &mut Criterion) {
    c.bench_function("rs_init_gf256", |b| {
        b.iter(|| ReedSolomon::gf256(black_box(10), black_box(229)).unwrap());
    });
}

criterion_group!(benches, bench_encode, bench_init);
criterion_main!(benches);
