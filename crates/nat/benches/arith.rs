// Copyright 2025 Irreducible Inc.

use criterion::{BenchmarkId, Criterion, Throughput, criterion_group, criterion_main};
use magnum_nat::Nat;
use rand::{Rng, SeedableRng, rngs::StdRng};

fn random_nat(rng: &mut StdRng, bytes: usize) -> Nat {
	let mut limbs = vec![0u8; bytes];
	rng.fill(limbs.as_mut_slice());
	*limbs.last_mut().expect("bytes > 0") |= 1;
	Nat::from_limbs(limbs)
}

fn bench_add(c: &mut Criterion) {
	let mut rng = StdRng::seed_from_u64(0);
	let mut group = c.benchmark_group("add");
	for bytes in [32usize, 256, 2048] {
		let a = random_nat(&mut rng, bytes);
		let b = random_nat(&mut rng, bytes);
		group.throughput(Throughput::Bytes(bytes as u64));
		group.bench_function(BenchmarkId::from_parameter(bytes), |bench| {
			bench.iter(|| &a + &b)
		});
	}
	group.finish();
}

fn bench_mul(c: &mut Criterion) {
	let mut rng = StdRng::seed_from_u64(1);
	let mut group = c.benchmark_group("mul");
	for bytes in [32usize, 256, 1024] {
		let a = random_nat(&mut rng, bytes);
		let b = random_nat(&mut rng, bytes);
		group.throughput(Throughput::Bytes(bytes as u64));
		group.bench_function(BenchmarkId::from_parameter(bytes), |bench| {
			bench.iter(|| &a * &b)
		});
	}
	group.finish();
}

fn bench_div(c: &mut Criterion) {
	let mut rng = StdRng::seed_from_u64(2);
	let mut group = c.benchmark_group("div");
	group.sample_size(20);
	for (dividend_bytes, divisor_bytes) in [(64usize, 8usize), (256, 32), (512, 256)] {
		let dividend = random_nat(&mut rng, dividend_bytes);
		let divisor = random_nat(&mut rng, divisor_bytes);
		let parameter = format!("{dividend_bytes}/{divisor_bytes}");
		group.bench_function(BenchmarkId::from_parameter(parameter), |bench| {
			bench.iter(|| dividend.div_rem(&divisor).expect("divisor is non-zero"))
		});
	}
	group.finish();
}

fn bench_to_dec(c: &mut Criterion) {
	let mut rng = StdRng::seed_from_u64(3);
	let mut group = c.benchmark_group("to_dec");
	group.sample_size(20);
	for bytes in [32usize, 256] {
		let value = random_nat(&mut rng, bytes);
		group.bench_function(BenchmarkId::from_parameter(bytes), |bench| {
			bench.iter(|| value.to_dec())
		});
	}
	group.finish();
}

criterion_group!(benches, bench_add, bench_mul, bench_div, bench_to_dec);
criterion_main!(benches);
