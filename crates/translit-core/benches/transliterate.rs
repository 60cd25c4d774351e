use criterion::{criterion_group, criterion_main, BenchmarkId, Criterion};
use translit_core::{transliterate, RuleSet};

const SAMPLES: &[(&str, &str)] = &[
    ("word", "Щука"),
    ("caps", "БОЛЬШОЙ ПОДЪЕЗД"),
    ("ascii", "The quick brown fox jumps over the lazy dog"),
    (
        "sentence",
        "Съешь же ещё этих мягких французских булок, да выпей чаю.",
    ),
];

fn bench_transliterate(c: &mut Criterion) {
    // Build the global rule set outside the measurement.
    RuleSet::global();

    let mut group = c.benchmark_group("transliterate");
    for &(name, text) in SAMPLES {
        group.bench_with_input(BenchmarkId::from_parameter(name), text, |b, text| {
            b.iter(|| transliterate(text))
        });
    }
    group.finish();
}

fn bench_long_text(c: &mut Criterion) {
    let text = "Широкая электрификация южных губерний даст мощный толчок подъёму сельского хозяйства. "
        .repeat(100);
    c.bench_function("transliterate_long", |b| b.iter(|| transliterate(&text)));
}

criterion_group!(benches, bench_transliterate, bench_long_text);
criterion_main!(benches);
