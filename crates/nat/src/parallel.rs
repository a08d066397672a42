// Copyright 2025 Irreducible Inc.

//! Factorial over the worker pool: per-range product trees fanned out to
//! the workers, then a pair-wise reduction of the partial products.

use std::{num::NonZero, thread};

use magnum_pool::ThreadPool;

use crate::{Nat, numeric::prod_tree};

impl Nat {
	/// `self!` computed on the process-wide worker pool.
	///
	/// `[2, self]` is split into one consecutive sub-range per worker (the
	/// last absorbs the residue) and each range's product tree runs as a
	/// pool job. The partial products are then multiplied pair-wise, also
	/// on the pool, preserving submission order at every level — so the
	/// result is identical to [`Nat::factorial`]. Single-limb values and
	/// single-threaded hosts fall back to the sequential tree.
	#[tracing::instrument(level = "debug", skip_all, fields(bits = self.num_bits()))]
	pub fn factorial_parallel(&self) -> Nat {
		if self.is_zero() || self.is_one() {
			return Nat::one();
		}
		if self.is_two() {
			return self.clone();
		}
		if self.len() <= 1 || thread::available_parallelism().map_or(1, NonZero::get) < 2 {
			return self.factorial();
		}

		parallel_prod_tree(ThreadPool::instance(), &Nat::two(), self)
	}
}

/// Cuts `[low, high]` into at most `pieces` consecutive inclusive ranges
/// covering it exactly.
fn split_ranges(low: &Nat, high: &Nat, pieces: u32) -> Vec<(Nat, Nat)> {
	let step = &(high - low) / &Nat::from(u64::from(pieces));

	let mut ranges = Vec::with_capacity(pieces as usize);
	let mut cursor = low.clone();
	for index in 0..pieces {
		if cursor > *high {
			break;
		}
		let mut upper = if index == pieces - 1 {
			high.clone()
		} else {
			&cursor + &step
		};
		if upper > *high {
			upper = high.clone();
		}
		ranges.push((cursor, upper.clone()));
		cursor = upper;
		cursor.increment();
	}
	ranges
}

fn parallel_prod_tree(pool: &ThreadPool, low: &Nat, high: &Nat) -> Nat {
	let handles: Vec<_> = split_ranges(low, high, pool.worker_count())
		.into_iter()
		.map(|(range_low, range_high)| pool.run(move || prod_tree(&range_low, &range_high)))
		.collect();
	pool.wait_all_jobs();

	let mut partials: Vec<Nat> = handles
		.into_iter()
		.map(|handle| handle.join().expect("the shared pool outlives its jobs"))
		.collect();

	while partials.len() > 1 {
		let mut pairs = partials.into_iter();
		let mut handles = Vec::new();
		let mut leftover = None;
		loop {
			let Some(left) = pairs.next() else { break };
			match pairs.next() {
				Some(right) => handles.push(pool.run(move || &left * &right)),
				None => leftover = Some(left),
			}
		}
		pool.wait_all_jobs();

		partials = handles
			.into_iter()
			.map(|handle| handle.join().expect("the shared pool outlives its jobs"))
			.collect();
		// an odd partial skips the round and keeps its position at the end
		if let Some(leftover) = leftover {
			partials.push(leftover);
		}
	}

	partials.into_iter().next().unwrap_or_else(Nat::one)
}
