//! Benchmarks for the text-to-graph extraction pass.

use criterion::{Criterion, black_box, criterion_group, criterion_main};

use archigraph::extract::Extractor;
use archigraph::ingest::connectors::Connector;

fn bench_extract_landscape(c: &mut Criterion) {
    let extractor = Extractor::new();
    let artifact = Connector::Confluence.fetch();

    c.bench_function("extract_full_landscape", |bench| {
        bench.iter(|| black_box(extractor.extract(&artifact.text, &artifact.source)))
    });
}

fn bench_extract_no_match(c: &mut Criterion) {
    let extractor = Extractor::new();
    let text = "quarterly budget review meeting notes ".repeat(256);

    c.bench_function("extract_no_match_10k_chars", |bench| {
        bench.iter(|| black_box(extractor.extract(&text, "notes")))
    });
}

criterion_group!(benches, bench_extract_landscape, bench_extract_no_match);
criterion_main!(benches);
