use criterion::{Criterion, black_box, criterion_group, criterion_main};

use rphonefield::{DEFAULT_REGISTRY, ValidationMessages, ValidationMode, ValidationOrchestrator, validate_builtin};

fn setup_keystrokes() -> Vec<&'static str> {
    vec!["4", "41", "415", "4155", "41555", "415555", "4155552", "41555526", "415555267", "4155552671"]
}

fn validation_benchmark(c: &mut Criterion) {
    let keystrokes = setup_keystrokes();
    let us = DEFAULT_REGISTRY.find_by_iso("US").unwrap();
    let messages = ValidationMessages::default();
    let orchestrator = ValidationOrchestrator::new(ValidationMode::Automatic, true, messages.clone(), None);

    let mut group = c.benchmark_group("Validation");

    group.bench_function("validate_builtin()", |b| {
        b.iter(|| {
            for national_number in &keystrokes {
                let _ = validate_builtin(black_box(national_number), us, true, &messages);
            }
        })
    });

    group.bench_function("on_change()", |b| {
        b.iter(|| {
            for national_number in &keystrokes {
                let _ = orchestrator.on_change(black_box(national_number), us);
            }
        })
    });

    group.finish();
}

criterion_group!(benches, validation_benchmark);
criterion_main!(benches);
