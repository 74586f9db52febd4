//! Benchmark suite for configuration loading and frame resolution
//!
//! Run with: cargo bench --manifest-path benches/Cargo.toml

use std::{hint::black_box, path::Path};

use animaniac_benches::{generate_config, generate_sheet};
use animaniac_types::{
	animator::Animator,
	config::{ParseOptions, load},
};
use criterion::{BenchmarkId, Criterion, Throughput, criterion_group, criterion_main};

/// Parse and validate configurations of growing size
fn bench_config_load(c: &mut Criterion) {
	let mut group = c.benchmark_group("config_load");

	for (faces, frames) in [(1, 8), (16, 16), (64, 32)] {
		let text = generate_config(faces, frames, 32);
		group.throughput(Throughput::Bytes(text.len() as u64));
		group.bench_with_input(BenchmarkId::new("load", format!("{faces}x{frames}")), &text, |b, text| {
			b.iter(|| {
				let result = load(black_box(text.as_bytes()), Path::new("bench.cfg"), &ParseOptions::default());
				black_box(result)
			});
		});
	}

	group.finish();
}

fn animator(config: &str) -> Animator {
	let mut animator = Animator::new();
	match generate_sheet(512, 512) {
		Ok(sheet) => animator.set_image(sheet),
		Err(err) => panic!("sheet: {err}"),
	}
	if let Err(err) = animator.set_config(config.as_bytes(), "bench.cfg") {
		panic!("config: {err}");
	}
	animator
}

/// Resolve frames through the zero-copy and the padded paths
fn bench_resolve(c: &mut Criterion) {
	let mut group = c.benchmark_group("resolve");

	let cases = [
		("direct", "[a]\n- 64 64 128 128 1f\n"),
		("pad_center", "[a]\n= size 256 256\n- 64 64 128 128 1f\n"),
		("pad_clipped", "[a]\n= size 256 256\n- 448 448 128 128 1f SE\n"),
	];
	for (name, config) in cases {
		let mut animator = animator(config);
		group.bench_function(name, |b| {
			b.iter(|| {
				let view = animator.image_view().map(|view| view.width());
				black_box(view)
			});
		});
	}

	group.finish();
}

/// A full tick: advance, then resolve whenever the frame changed
fn bench_tick(c: &mut Criterion) {
	let text = generate_config(4, 16, 32);
	let mut animator = animator(&text);

	c.bench_function("tick", |b| {
		b.iter(|| {
			if let Ok(tick) = animator.update() {
				if tick.is_changed() {
					black_box(animator.image_view().map(|view| view.height()).ok());
				}
			}
		});
	});
}

criterion_group!(benches, bench_config_load, bench_resolve, bench_tick);

criterion_main!(benches);
