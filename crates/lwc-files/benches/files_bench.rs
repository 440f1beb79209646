//! Performance benchmarks for lwc-files.
//!
//! Run with: `cargo bench -p lwc-files`

use criterion::{BenchmarkId, Criterion, Throughput, black_box, criterion_group, criterion_main};
use lwc_crypto::Algorithm;
use lwc_files::IntegrityService;
use lwc_files::digest::{hash_bytes, hash_file};
use rand::RngCore;
use std::io::Write;
use tempfile::NamedTempFile;

fn random_file(size: usize) -> NamedTempFile {
    let mut data = vec![0u8; size];
    rand::thread_rng().fill_bytes(&mut data);
    let mut file = NamedTempFile::new().unwrap();
    file.write_all(&data).unwrap();
    file.flush().unwrap();
    file
}

// ============================================================================
// Digest Benchmarks
// ============================================================================

fn bench_hash(c: &mut Criterion) {
    let mut group = c.benchmark_group("digest");

    for size in [4 * 1024, 256 * 1024, 4 * 1024 * 1024] {
        let file = random_file(size);
        let data = std::fs::read(file.path()).unwrap();

        group.throughput(Throughput::Bytes(size as u64));
        group.bench_with_input(BenchmarkId::new("bytes", size), &size, |b, _| {
            b.iter(|| hash_bytes(black_box(&data)))
        });
        group.bench_with_input(BenchmarkId::new("file", size), &size, |b, _| {
            b.iter(|| hash_file(black_box(file.path())).unwrap())
        });
    }

    group.finish();
}

// ============================================================================
// Integrity Benchmarks
// ============================================================================

fn bench_verify(c: &mut Criterion) {
    let mut group = c.benchmark_group("verify_file");
    let size = 1024 * 1024;
    group.throughput(Throughput::Bytes(size as u64));

    for algorithm in Algorithm::ALL {
        let service = IntegrityService::new(algorithm);
        let key = [0x42u8; 16];
        let nonce = vec![0x24u8; algorithm.nonce_len()];
        let file = random_file(size);
        service.seal_file(file.path(), &key, &nonce).unwrap();

        group.bench_function(algorithm.name(), |b| {
            b.iter(|| service.verify_file(black_box(file.path()), &key, &nonce).unwrap())
        });
    }

    group.finish();
}

criterion_group!(digest_benches, bench_hash);

criterion_group!(integrity_benches, bench_verify);

criterion_main!(digest_benches, integrity_benches);
