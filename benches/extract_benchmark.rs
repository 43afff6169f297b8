//! Benchmarks for unhwp text processing.
//!
//! Run with: cargo bench
//!
//! These benchmarks use synthetic decoder output mixing prose and pipe tables.

use criterion::{black_box, criterion_group, criterion_main, Criterion};

/// Creates synthetic decoder output with the given number of sections.
fn create_test_text(section_count: usize) -> String {
    let mut text = String::new();

    for i in 0..section_count {
        text.push_str(&format!(
            "제{}장\u{a0}개요   \r\n본문 내용이 이어집니다.\u{a0}\t\r\n\r\n",
            i + 1
        ));
        text.push_str("| 항목 | 수량 | 금액 |\r\n");
        for row in 0..10 {
            text.push_str(&format!("| 품목 {} | {} | {},000 |  \r\n", row, row + 1, row * 3));
        }
        text.push_str("\r\n");
    }

    text
}

/// Benchmark normalization at various sizes.
fn bench_normalize(c: &mut Criterion) {
    let mut group = c.benchmark_group("normalize");

    for section_count in [1, 10, 100].iter() {
        let text = create_test_text(*section_count);

        group.bench_function(format!("{}_sections", section_count), |b| {
            b.iter(|| unhwp::normalize_text(black_box(&text)));
        });
    }

    group.finish();
}

/// Benchmark pipe-table extraction at various sizes.
fn bench_extract_tables(c: &mut Criterion) {
    let mut group = c.benchmark_group("extract_tables");

    for section_count in [1, 10, 100].iter() {
        let text = create_test_text(*section_count);

        group.bench_function(format!("{}_sections", section_count), |b| {
            b.iter(|| unhwp::extract_tables(black_box(&text)));
        });
    }

    group.finish();
}

/// Benchmark building and serializing a table document.
fn bench_tables_json(c: &mut Criterion) {
    let text = create_test_text(10);

    c.bench_function("tables_json", |b| {
        b.iter(|| {
            let doc = unhwp::Document::tables("bench.hwp", unhwp::extract_tables(black_box(&text)));
            unhwp::render::to_json(&doc, unhwp::JsonFormat::Pretty).unwrap()
        });
    });
}

criterion_group!(
    benches,
    bench_normalize,
    bench_extract_tables,
    bench_tables_json,
);
criterion_main!(benches);
