use std::hint::black_box;

use criterion::{criterion_group, criterion_main, Criterion};
use spec_intake::{sanitize_content, SpecInput, SpecInputService};

const SENTENCE: &str = "This is a test specification for the course catalogue. ";
const MARKUP: &str = "<p>Week</p><script>track()</script><iframe src=\"ad\"></iframe><input name=q>";

fn content(repeat: usize) -> String {
    let mut text = SENTENCE.repeat(repeat);
    text.push_str(&MARKUP.repeat(repeat / 10 + 1));
    text
}

fn creation_bench(c: &mut Criterion) {
    let medium = content(50);
    c.bench_function("spec_input_new_medium", |b| {
        b.iter(|| {
            let spec = SpecInput::new(black_box(medium.as_str()), "text", None);
            black_box(spec.is_valid());
        });
    });
}

fn sanitize_bench(c: &mut Criterion) {
    for (name, repeat) in [("small", 1), ("medium", 50), ("large", 1000)] {
        let text = content(repeat);
        c.bench_function(&format!("sanitize_content_{name}"), |b| {
            b.iter(|| {
                let cleaned = sanitize_content(black_box(&text)).expect("patterns compile");
                black_box(cleaned);
            });
        });
    }
}

fn process_bench(c: &mut Criterion) {
    let large = content(1000);
    let mut service = SpecInputService::default();
    c.bench_function("process_spec_large", |b| {
        b.iter(|| {
            service.clear_processed_specs();
            let result = service
                .process_spec(SpecInput::new(large.as_str(), "html", None))
                .expect("valid input");
            black_box(result);
        });
    });
}

criterion_group!(processing_benches, creation_bench, sanitize_bench, process_bench);
criterion_main!(processing_benches);
