//! Benchmark suite for BP2 decoding.
//!
//! Measures full-file decode throughput at several image sizes plus header
//! parsing on its own.
//!
//! Run with: cargo bench --manifest-path benches/Cargo.toml

use std::hint::black_box;
use std::io::Cursor;

use criterion::{BenchmarkId, Criterion, Throughput, criterion_group, criterion_main};
use ftech_benches::{generate_test_bp2, sizes};
use ftech_types::file::bp2;

/// Benchmark BP2 decompression on synthetic images
fn bench_decode(c: &mut Criterion) {
	let mut group = c.benchmark_group("bp2_decode");

	let cases = [
		("tiny", sizes::TINY),
		("small", sizes::SMALL),
		("screen", sizes::SCREEN),
		("large", sizes::LARGE),
	];

	for (name, (width, height)) in cases {
		let data = generate_test_bp2(width, height);

		group.throughput(Throughput::Elements(u64::from(width) * u64::from(height)));
		group.bench_with_input(BenchmarkId::new("decode", name), &data, |b, data| {
			b.iter(|| {
				let result = bp2::load(Cursor::new(black_box(data.as_slice())));
				black_box(result)
			});
		});
	}

	group.finish();
}

/// Benchmark header parsing separately
fn bench_header_parsing(c: &mut Criterion) {
	use ftech_types::file::{FileType, Stream};

	let mut group = c.benchmark_group("bp2_header");
	let data = generate_test_bp2(64, 64);

	group.bench_function("parse_header", |b| {
		b.iter(|| {
			let mut stream = Stream::from_bytes(black_box(&data), FileType::Bp2);
			let result = bp2::Header::from_stream(&mut stream);
			black_box(result)
		});
	});

	group.finish();
}

criterion_group!(benches, bench_decode, bench_header_parsing);
criterion_main!(benches);
