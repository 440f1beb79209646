//! Performance benchmarks for lwc-crypto.
//!
//! Run with: `cargo bench -p lwc-crypto`

use criterion::{BenchmarkId, Criterion, Throughput, black_box, criterion_group, criterion_main};
use lwc_crypto::constant_time::ct_eq;
use lwc_crypto::permutation::{ElephantPermutation, IsapPermutation, Permutation};
use lwc_crypto::{Algorithm, Mode};
use rand::RngCore;
use rand_core::OsRng;

// ============================================================================
// Permutation Benchmarks
// ============================================================================

fn bench_permutations(c: &mut Criterion) {
    let mut group = c.benchmark_group("permutation");

    for rounds in [6, 12] {
        group.bench_with_input(BenchmarkId::new("isap", rounds), &rounds, |b, &rounds| {
            let mut lanes = [0x0123_4567_89ab_cdefu64; 5];
            b.iter(|| IsapPermutation::permute(black_box(&mut lanes), rounds));
        });
    }

    group.bench_function("elephant/12", |b| {
        let mut lanes = [0x0123_4567_89ab_cdefu64; 25];
        b.iter(|| ElephantPermutation::permute(black_box(&mut lanes), 12));
    });

    group.finish();
}

// ============================================================================
// AEAD Benchmarks
// ============================================================================

fn bench_encrypt(c: &mut Criterion) {
    let sizes = [64, 1024, 16384];

    for algorithm in Algorithm::ALL {
        let mut group = c.benchmark_group(format!("{algorithm}_encrypt"));

        let mut key = [0u8; 16];
        OsRng.fill_bytes(&mut key);
        let nonce = vec![0u8; algorithm.nonce_len()];

        for size in sizes {
            let plaintext = vec![0xAA; size];
            group.throughput(Throughput::Bytes(size as u64));
            for mode in Mode::ALL {
                group.bench_with_input(BenchmarkId::new(mode.name(), size), &size, |b, _| {
                    b.iter(|| {
                        algorithm.seal(
                            mode,
                            black_box(&plaintext),
                            black_box(&key),
                            black_box(&nonce),
                            Some(b"bench-ad"),
                        )
                    })
                });
            }
        }

        group.finish();
    }
}

fn bench_decrypt(c: &mut Criterion) {
    let size = 4096;

    for algorithm in Algorithm::ALL {
        let mut group = c.benchmark_group(format!("{algorithm}_decrypt"));
        group.throughput(Throughput::Bytes(size as u64));

        let key = [0x42u8; 16];
        let nonce = vec![0u8; algorithm.nonce_len()];
        let plaintext = vec![0xBB; size];

        for mode in Mode::ALL {
            let sealed = algorithm.seal(mode, &plaintext, &key, &nonce, None).unwrap();
            group.bench_function(mode.name(), |b| {
                b.iter(|| {
                    algorithm.open(
                        mode,
                        black_box(&sealed.ciphertext),
                        black_box(&key),
                        black_box(&nonce),
                        black_box(&sealed.tag),
                        None,
                    )
                })
            });
        }

        group.finish();
    }
}

// ============================================================================
// Constant-time Benchmarks
// ============================================================================

fn bench_constant_time_ops(c: &mut Criterion) {
    let mut group = c.benchmark_group("constant_time");

    let a = [0x42u8; 16];
    let b_equal = [0x42u8; 16];
    let mut b_diff = [0x42u8; 16];
    b_diff[15] = 0x43;

    group.bench_function("ct_eq_16_equal", |b| {
        b.iter(|| ct_eq(black_box(&a), black_box(&b_equal)))
    });
    group.bench_function("ct_eq_16_differ", |b| {
        b.iter(|| ct_eq(black_box(&a), black_box(&b_diff)))
    });

    group.finish();
}

criterion_group!(permutation_benches, bench_permutations);

criterion_group!(aead_benches, bench_encrypt, bench_decrypt);

criterion_group!(constant_time_benches, bench_constant_time_ops);

criterion_main!(permutation_benches, aead_benches, constant_time_benches);
