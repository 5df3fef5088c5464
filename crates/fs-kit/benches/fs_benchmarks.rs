use criterion::{Criterion, black_box, criterion_group, criterion_main};
use fs_kit::{ensure_dir, read_bytes, write_bytes};
use std::fs;
use tempfile::tempdir;

fn write_bytes_benchmark(c: &mut Criterion) {
    c.bench_function("write::write_bytes", |b| {
        let dir = tempdir().unwrap();
        let path = dir.path().join("bench_file.txt");
        let content = "hello world".as_bytes();

        b.iter(|| {
            write_bytes(black_box(&path), black_box(content)).unwrap();
        })
    });
}

fn read_bytes_benchmark(c: &mut Criterion) {
    c.bench_function("read::read_bytes", |b| {
        let dir = tempdir().unwrap();
        let path = dir.path().join("bench_file.bin");
        fs::write(&path, vec![7u8; 16 * 1024]).unwrap();

        b.iter(|| {
            let content = read_bytes(black_box(&path)).unwrap();
            black_box(content);
        })
    });
}

fn ensure_dir_benchmark(c: &mut Criterion) {
    // Benchmark the already-exists fast path, the common case in practice
    c.bench_function("ensure::ensure_dir (existing)", |b| {
        let dir = tempdir().unwrap();
        let path = dir.path().join("nested").join("tree");
        fs::create_dir_all(&path).unwrap();

        b.iter(|| {
            ensure_dir(black_box(&path)).unwrap();
        })
    });
}

criterion_group!(
    benches,
    write_bytes_benchmark,
    read_bytes_benchmark,
    ensure_dir_benchmark
);
criterion_main!(benches);
