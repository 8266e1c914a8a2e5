use std::{fs, sync::LazyLock, time::Duration};

use criterion::{black_box, criterion_group, criterion_main, Criterion};
use rulelex::{RuleSet, Scanner, ScannerBuilder};

static SCANNER_INPUT: LazyLock<String> = LazyLock::new(|| {
    let path = concat!(env!("CARGO_MANIFEST_DIR"), "/tests/data/expression.input");
    fs::read_to_string(path).unwrap().repeat(500)
});

static RULE_SET: LazyLock<RuleSet> = LazyLock::new(|| {
    let path = concat!(env!("CARGO_MANIFEST_DIR"), "/tests/data/expression.json");
    let file = fs::File::open(path).unwrap();
    serde_json::from_reader(file).unwrap()
});

fn build_scanner() -> Scanner {
    let mut builder = ScannerBuilder::new();
    builder.add_rule_set(&RULE_SET).unwrap();
    builder.build()
}

static SCANNER: LazyLock<Scanner> = LazyLock::new(build_scanner);

fn builder_benchmark(c: &mut Criterion) {
    c.bench_function("builder_benchmark", |b| {
        b.iter(|| {
            black_box(build_scanner());
        });
    });
}

fn scanner_benchmark(c: &mut Criterion) {
    c.bench_function("scanner_benchmark", |b| {
        b.iter(|| {
            // Lex the whole input
            for t in SCANNER.lex(&SCANNER_INPUT) {
                black_box(t.unwrap());
            }
        });
    });
}

criterion_group! {
    name = benchesscanner;
    config = Criterion::default().measurement_time(Duration::from_secs(10));
    targets = scanner_benchmark
}

criterion_group! {
    name = benchesbuilder;
    config = Criterion::default();
    targets = builder_benchmark
}

criterion_main!(benchesscanner, benchesbuilder);
