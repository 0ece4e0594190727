use criterion::{black_box, criterion_group, criterion_main, Criterion};

use drillbook_core::content::builtin_lessons;
use drillbook_core::parser::{parse_lesson_str, validate_lesson};

const SMALL_LESSON: &str = r#"
[lesson]
id = "bench"
title = "Bench"
summary = "one section, two items"

[[sections]]
title = "s"
notes = ["a note", "another note"]

[[sections.items]]
kind = "quiz"
prompt = "Which keyword creates a new binding?"
answer = "let"
hint = "let x = 5;"

[[sections.items]]
kind = "predict"
code = "println!(\"{}\", 7 / 2);"
output = "3"
explanation = "Integer division truncates."
"#;

fn bench_parse(c: &mut Criterion) {
    let mut group = c.benchmark_group("parse_lesson_str");

    group.bench_function("small", |b| {
        b.iter(|| parse_lesson_str(black_box(SMALL_LESSON), "bench.toml").unwrap())
    });

    group.bench_function("builtins", |b| b.iter(|| builtin_lessons().unwrap()));

    group.finish();
}

fn bench_validate(c: &mut Criterion) {
    let lesson = parse_lesson_str(SMALL_LESSON, "bench.toml").unwrap();

    c.bench_function("validate_lesson", |b| {
        b.iter(|| validate_lesson(black_box(&lesson)))
    });
}

criterion_group!(benches, bench_parse, bench_validate);
criterion_main!(benches);
