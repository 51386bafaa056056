// benches/scan_bench.rs
use checklongnames::{DirectoryScanner, ScanOptionsBuilder};
use criterion::{black_box, criterion_group, criterion_main, Criterion};
use std::fs;
use tempfile::TempDir;

/// Builds a tree of `dirs` directories holding `files` files each, with a
/// few deep chains that cross the length threshold
fn build_tree(dirs: usize, files: usize) -> TempDir {
    let root = TempDir::new().unwrap();
    for d in 0..dirs {
        let dir = root.path().join(format!("dir_{d:04}"));
        fs::create_dir(&dir).unwrap();
        for f in 0..files {
            fs::write(dir.join(format!("file_{f:04}.txt")), b"").unwrap();
        }
    }
    let deep = root
        .path()
        .join("n".repeat(120))
        .join("e".repeat(120))
        .join("s".repeat(120));
    fs::create_dir_all(&deep).unwrap();
    fs::write(deep.join("leaf.txt"), b"").unwrap();
    root
}

fn bench_flat_tree(c: &mut Criterion) {
    let tree = build_tree(50, 40);
    let scanner = DirectoryScanner::new(ScanOptionsBuilder::new().windows_only(false).build());

    c.bench_function("flat_tree", |b| {
        b.iter(|| {
            let result = scanner.scan(black_box(tree.path()), &mut ());
            black_box(result.unwrap())
        })
    });
}

fn bench_sorted_tree(c: &mut Criterion) {
    let tree = build_tree(50, 40);
    let scanner = DirectoryScanner::new(
        ScanOptionsBuilder::new()
            .windows_only(false)
            .sort_entries(true)
            .build(),
    );

    c.bench_function("sorted_tree", |b| {
        b.iter(|| {
            let result = scanner.scan(black_box(tree.path()), &mut ());
            black_box(result.unwrap())
        })
    });
}

criterion_group!(benches, bench_flat_tree, bench_sorted_tree);
criterion_main!(benches);
