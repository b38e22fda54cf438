use criterion::{black_box, criterion_group, criterion_main, Criterion};
use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha20Rng;

use huffzip::{Compression, HuffmanCodec};

/// 64 KiB of skewed data: 90% one symbol, the rest uniform bytes.
fn skewed_input() -> Vec<u8> {
    let mut rng = ChaCha20Rng::seed_from_u64(7);
    (0..64 * 1024)
        .map(|_| if rng.gen_bool(0.9) { b'a' } else { rng.gen() })
        .collect()
}

fn bench_compress(c: &mut Criterion) {
    let data = skewed_input();
    let codec = HuffmanCodec::new();
    c.bench_function("compress_64k_skewed", |b| {
        b.iter(|| codec.compress(black_box(&data)).unwrap())
    });
}

fn bench_decompress(c: &mut Criterion) {
    let data = skewed_input();
    let codec = HuffmanCodec::new();
    let compressed = codec.compress(&data).unwrap();
    c.bench_function("decompress_64k_skewed", |b| {
        b.iter(|| codec.decompress(black_box(&compressed)).unwrap())
    });
}

criterion_group!(benches, bench_compress, bench_decompress);
criterion_main!(benches);
