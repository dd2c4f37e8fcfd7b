use criterion::{black_box, criterion_group, criterion_main, Criterion};

use runpack::kernels::rle;

/// Long runs: the friendly case for RLE.
fn runs_data() -> Vec<u8> {
    (0..64u32)
        .flat_map(|i| std::iter::repeat((i % 251) as u8).take(1024))
        .collect()
}

/// No adjacent repeats: the worst case, every byte becomes a record.
fn mixed_data() -> Vec<u8> {
    (0..65_536u32).map(|i| (i.wrapping_mul(31) % 251) as u8).collect()
}

fn bench_rle(c: &mut Criterion) {
    let runs = runs_data();
    let mixed = mixed_data();
    let encoded_runs = rle::encode(&runs);

    c.bench_function("rle_encode_runs", |b| {
        b.iter(|| rle::encode(black_box(&runs)))
    });
    c.bench_function("rle_encode_mixed", |b| {
        b.iter(|| rle::encode(black_box(&mixed)))
    });
    c.bench_function("rle_decode_runs", |b| {
        b.iter(|| rle::decode(black_box(&encoded_runs)).unwrap())
    });
}

criterion_group!(benches, bench_rle);
criterion_main!(benches);
