//! Benchmarks for the quick scan engine

use code_organizer::quick_scan::{find_duplicates, QuickScanner, ScanOptions};
use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};
use std::fs::{self, File};
use std::io::Write;
use tempfile::TempDir;

const INDICATORS: [&str; 4] = ["package.json", "setup.py", "Makefile", "Dockerfile"];

/// Create `project_count` projects spread over a few group folders, with
/// some loose clutter between them.
fn create_benchmark_tree(project_count: usize) -> TempDir {
    let dir = TempDir::new().unwrap();
    let root = dir.path();

    for p in 0..project_count {
        let group = root.join(format!("group{}", p % 8));
        let project = group.join(format!("project{}", p));
        fs::create_dir_all(project.join("src")).unwrap();
        fs::write(project.join(INDICATORS[p % INDICATORS.len()]), "").unwrap();

        for f in 0..5 {
            let mut file = File::create(project.join("src").join(format!("file{}.txt", f))).unwrap();
            file.write_all(&vec![b'x'; 1024]).unwrap();
        }
    }

    for d in 0..project_count / 4 {
        let loose = root.join(format!("misc/notes{}", d));
        fs::create_dir_all(&loose).unwrap();
        fs::write(loose.join("todo.txt"), "later").unwrap();
    }

    dir
}

fn benchmark_scan(c: &mut Criterion) {
    let mut group = c.benchmark_group("quick_scan");

    for size in [50, 200, 500].iter() {
        let dir = create_benchmark_tree(*size);
        let scanner = QuickScanner::new(vec![dir.path().to_path_buf()], ScanOptions::default());

        group.bench_with_input(BenchmarkId::from_parameter(size), size, |b, _| {
            b.iter(|| black_box(scanner.scan()))
        });
    }

    group.finish();
}

fn benchmark_duplicates(c: &mut Criterion) {
    let dir = create_benchmark_tree(500);
    let result = QuickScanner::new(vec![dir.path().to_path_buf()], ScanOptions::default())
        .scan()
        .unwrap();

    c.bench_function("find_duplicates_500", |b| {
        b.iter(|| find_duplicates(black_box(&result.projects)))
    });
}

criterion_group!(benches, benchmark_scan, benchmark_duplicates);
criterion_main!(benches);
