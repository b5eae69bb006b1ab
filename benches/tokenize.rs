use criterion::{black_box, criterion_group, criterion_main, Criterion};
use strplus::{most_frequent_separator, tokenize, Case};

const IDENTIFIERS: &[&str] = &[
    "getHTTPResponseCode",
    "some-mixed_string With spaces_underscores-and-hyphens",
    "XMLHttpRequest2Json",
    "already_snake_case_identifier",
];

const RECORDS: &[&str] = &[
    "John, Doe; Jane | Doe",
    "id\tname\temail\tcreated_at",
    "usr/local/share/strplus/config",
];

fn bench_tokenize(c: &mut Criterion) {
    c.bench_function("tokenize", |b| {
        b.iter(|| {
            for input in IDENTIFIERS {
                black_box(tokenize(black_box(input)));
            }
        })
    });
}

fn bench_separator(c: &mut Criterion) {
    c.bench_function("most_frequent_separator", |b| {
        b.iter(|| {
            for input in RECORDS {
                black_box(most_frequent_separator(black_box(input), None));
            }
        })
    });
}

fn bench_convert(c: &mut Criterion) {
    c.bench_function("convert_all_cases", |b| {
        b.iter(|| {
            for case in Case::ALL {
                black_box(case.apply(black_box(IDENTIFIERS[0])));
            }
        })
    });
}

criterion_group!(benches, bench_tokenize, bench_separator, bench_convert);
criterion_main!(benches);
