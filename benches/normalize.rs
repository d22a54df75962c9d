use casefmt::to_kebab_case;
use criterion::{black_box, criterion_group, criterion_main, Criterion};

fn bench_normalize(c: &mut Criterion) {
    let inputs = [
        "getHTTPResponse",
        "foo__bar  baz--qux",
        "  --My__Test123--Case!! ",
        "already-kebab-case",
    ];

    c.bench_function("to_kebab_case", |b| {
        b.iter(|| {
            for input in inputs {
                black_box(to_kebab_case(black_box(input)));
            }
        })
    });
}

criterion_group!(benches, bench_normalize);
criterion_main!(benches);
