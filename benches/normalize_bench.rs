use criterion::{Criterion, black_box, criterion_group, criterion_main};

use phonecanon::{CALLING_CODES, CallingCodeSet, PHONE_NORMALIZER};

use phonenumber::{self as rlp, country::Id};

// (input, default calling code, region for rust-phonenumber)
type TestEntity = (&'static str, &'static str, Id);

fn setup_inputs() -> Vec<TestEntity> {
    use phonenumber::country::Id::*;
    vec![
        ("tel: 0044 20 7946 0958", "44", GB),
        ("(0) 20-7946-0958", "44", GB),
        ("+1 (415) 555-0123", "1", US),
        ("(650) 253-0000", "1", US),
        ("Mobile: 07700 900123", "44", GB),
        ("+\u{0669}\u{0667}\u{0661} \u{0665}\u{0660} \u{0661}\u{0662}\u{0663} \u{0664}\u{0665}\u{0666}\u{0667}", "971", AE),
        ("02 12345678", "39", IT),
        ("0495 123-45-67", "7", RU),
    ]
}

fn normalize_benchmark(c: &mut Criterion) {
    let inputs = setup_inputs();

    let mut group = c.benchmark_group("Normalize Comparison");

    group.bench_function("phonecanon: normalize()", |b| {
        b.iter(|| {
            for (input, default_code, _) in &inputs {
                let _ = PHONE_NORMALIZER.normalize(
                    black_box(input),
                    black_box(default_code),
                    &*CALLING_CODES,
                );
            }
        })
    });

    group.bench_function("rust-phonenumber: parse()", |b| {
        b.iter(|| {
            for (input, _, region_id) in &inputs {
                let _ = rlp::parse(black_box(Some(*region_id)), black_box(input));
            }
        })
    });

    group.finish();
}

fn registry_benchmark(c: &mut Criterion) {
    c.bench_function("phonecanon: CallingCodeSet::embedded()", |b| {
        b.iter(|| black_box(CallingCodeSet::embedded()))
    });
}

criterion_group!(benches, normalize_benchmark, registry_benchmark);
criterion_main!(benches);
