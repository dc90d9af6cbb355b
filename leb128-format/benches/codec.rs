use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};
use leb128_format::{decode_big_signed, decode_u64, encode_big_signed, encode_u64};
use malachite::Integer;

fn create_test_integers(bits: u64) -> Vec<Integer> {
    let base = Integer::from(1) << bits;
    (0..64i64)
        .map(|i| {
            let value = &base + Integer::from(i * 7919);
            if i % 2 == 0 {
                value
            } else {
                -value
            }
        })
        .collect()
}

fn bench_unsigned(c: &mut Criterion) {
    let mut group = c.benchmark_group("unsigned");

    let values: Vec<u64> = (0..64).map(|shift| (1u64 << shift) | 0x55).collect();
    let encoded: Vec<_> = values.iter().map(|&v| encode_u64(v)).collect();

    group.bench_function("encode_u64", |b| {
        b.iter(|| {
            for &value in &values {
                black_box(encode_u64(black_box(value)));
            }
        });
    });

    group.bench_function("decode_u64", |b| {
        b.iter(|| {
            for bytes in &encoded {
                black_box(decode_u64(black_box(bytes)).unwrap());
            }
        });
    });

    group.finish();
}

fn bench_big_signed(c: &mut Criterion) {
    let mut group = c.benchmark_group("big_signed");

    for bits in [8u64, 64, 128, 1024] {
        let values = create_test_integers(bits);
        let encoded: Vec<Vec<u8>> = values.iter().map(encode_big_signed).collect();

        group.bench_with_input(
            BenchmarkId::new("encode", format!("{}bit", bits)),
            &values,
            |b, values| {
                b.iter(|| {
                    for value in values {
                        black_box(encode_big_signed(black_box(value)));
                    }
                });
            },
        );

        group.bench_with_input(
            BenchmarkId::new("decode", format!("{}bit", bits)),
            &encoded,
            |b, encoded| {
                b.iter(|| {
                    for bytes in encoded {
                        black_box(decode_big_signed(black_box(bytes)).unwrap());
                    }
                });
            },
        );
    }

    group.finish();
}

criterion_group!(benches, bench_unsigned, bench_big_signed);
criterion_main!(benches);
