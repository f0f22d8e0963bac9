use criterion::{black_box, criterion_group, criterion_main, Criterion};
use serde_json::json;
use styleguide::config::{default_config, ConfigMerger, ConfigValidator, FormatRegistry, RawConfig};
use std::path::Path;

fn user_document() -> RawConfig {
    RawConfig::from_value(json!({
        "ignore": ["vendor/**", "generated/**"],
        "cache": false,
        "languages": {
            "python": {
                "enabled": true,
                "extensions": [".py", ".pyi"],
                "linters": {
                    "ruff": { "enabled": true },
                    "pylint": { "enabled": true, "maxLineLength": 100 }
                }
            },
            "rust": { "enabled": true, "extensions": [".rs"] }
        }
    }))
    .unwrap()
}

fn bench_merge(c: &mut Criterion) {
    let mut group = c.benchmark_group("merge");
    let defaults = RawConfig::from(&default_config());
    let user = user_document();

    group.bench_function("empty_user", |b| {
        let empty = RawConfig::new();
        b.iter(|| ConfigMerger::merge(black_box(&defaults), black_box(&empty)));
    });

    group.bench_function("typical_user", |b| {
        b.iter(|| ConfigMerger::merge(black_box(&defaults), black_box(&user)));
    });

    group.finish();
}

fn bench_validate(c: &mut Criterion) {
    let mut group = c.benchmark_group("validate");
    let defaults = RawConfig::from(&default_config());
    let merged = ConfigMerger::merge(&defaults, &user_document());

    group.bench_function("defaults", |b| {
        b.iter(|| ConfigValidator::validate(black_box(&defaults)));
    });

    group.bench_function("merged", |b| {
        b.iter(|| ConfigValidator::validate(black_box(&merged)));
    });

    group.finish();
}

fn bench_parse(c: &mut Criterion) {
    let mut group = c.benchmark_group("parse");
    let formats = FormatRegistry::default();
    let yaml = "cache: false\nignore:\n  - vendor/**\nlanguages:\n  python:\n    enabled: true\n";
    let json = r#"{"cache": false, "ignore": ["vendor/**"], "languages": {"python": {"enabled": true}}}"#;

    group.bench_function("yaml", |b| {
        let format = formats.for_extension("yaml").unwrap();
        b.iter(|| format.parse(Path::new("bench.yaml"), black_box(yaml)));
    });

    group.bench_function("json", |b| {
        let format = formats.for_extension("json").unwrap();
        b.iter(|| format.parse(Path::new("bench.json"), black_box(json)));
    });

    group.finish();
}

fn bench_conversion(c: &mut Criterion) {
    let merged = ConfigMerger::merge(&RawConfig::from(&default_config()), &user_document());

    c.bench_function("from_raw", |b| {
        b.iter(|| styleguide::Configuration::from_raw(black_box(&merged)));
    });
}

criterion_group!(benches, bench_merge, bench_validate, bench_parse, bench_conversion);
criterion_main!(benches);
