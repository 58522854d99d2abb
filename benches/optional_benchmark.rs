use criterion::{black_box, criterion_group, criterion_main, Criterion};
use inline_optional::Optional;

fn bench_trivial_payload(c: &mut Criterion) {
	let mut group = c.benchmark_group("trivial_payload");

	group.bench_function("optional_assign_reset", |b| {
		b.iter(|| {
			let mut optional = Optional::<u64>::none();
			for i in 0..64 {
				optional.assign(black_box(i));
				if i % 4 == 0 {
					optional.reset();
				}
			}
			black_box(optional.value_or(0))
		});
	});

	// Baseline: std Option
	group.bench_function("std_option_assign_reset", |b| {
		b.iter(|| {
			let mut option = None::<u64>;
			for i in 0..64 {
				option = Some(black_box(i));
				if i % 4 == 0 {
					option = None;
				}
			}
			black_box(option.unwrap_or(0))
		});
	});

	group.finish();
}

fn bench_non_trivial_payload(c: &mut Criterion) {
	let mut group = c.benchmark_group("non_trivial_payload");

	group.bench_function("optional_emplace_reset", |b| {
		b.iter(|| {
			let mut optional = Optional::<String>::none();
			for _ in 0..64 {
				optional.emplace_with(|| String::from(black_box("payload")));
				optional.reset();
			}
			black_box(optional.is_some())
		});
	});

	group.bench_function("optional_clone_from", |b| {
		let source = Optional::some(String::from("a payload that is reused"));
		b.iter(|| {
			let mut target = Optional::some(String::with_capacity(32));
			for _ in 0..64 {
				target.clone_from(black_box(&source));
			}
			black_box(target)
		});
	});

	// Baseline: std Option
	group.bench_function("std_option_insert_take", |b| {
		b.iter(|| {
			let mut option = None::<String>;
			for _ in 0..64 {
				option = Some(String::from(black_box("payload")));
				option.take();
			}
			black_box(option.is_some())
		});
	});

	group.finish();
}

criterion_group!(benches, bench_trivial_payload, bench_non_trivial_payload);
criterion_main!(benches);
