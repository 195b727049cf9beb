use criterion::{criterion_group, criterion_main, Criterion, Throughput};
use crle::config::{EncodeConfig, OutputFormat};
use crle::transforms::rle;

fn sample_table() -> Vec<u8> {
	(0..64 * 1024u32).map(|i| ((i / 37) % 200) as u8).collect()
}

fn bench_rle(c: &mut Criterion) {
	let data = sample_table();
	let encoded = rle::encode(&data).unwrap();

	let mut group = c.benchmark_group("rle");
	group.throughput(Throughput::Bytes(data.len() as u64));
	group.bench_function("encode_runs", |b| {
		b.iter(|| rle::encode(&data).unwrap());
	});
	group.bench_function("decode_runs", |b| {
		b.iter(|| rle::decode(&encoded).unwrap());
	});
	group.finish();
}

fn bench_csv(c: &mut Criterion) {
	let text = sample_table().iter().map(|v| v.to_string()).collect::<Vec<_>>().join(",");
	let config = EncodeConfig::default().with_format(OutputFormat::Hex);

	let mut group = c.benchmark_group("csv");
	group.throughput(Throughput::Bytes(text.len() as u64));
	group.bench_function("encode_hex_listing", |b| {
		b.iter(|| crle::encode_csv(&text, &config).unwrap());
	});
	group.finish();
}

criterion_group!(benches, bench_rle, bench_csv);
criterion_main!(benches);
