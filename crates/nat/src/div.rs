// Copyright 2025 Irreducible Inc.

//! Quotient and remainder via Newton–Raphson reciprocal iteration.

use std::cmp::Ordering;

use crate::{Error, Nat};

impl Nat {
	/// Computes `(self / divisor, self % divisor)`.
	///
	/// The reciprocal 1/d is approximated as a fixed-point integer with
	/// scale 2^k, k = `num_bits(self) + num_bits(divisor)`, iterating
	/// `x ← x·(2^(k+1) − x·d) >> k`. Near the fixed point the floor
	/// divisions can flip the iterate between two adjacent values, so the
	/// loop remembers the last two iterates and stops on either.
	///
	/// The trivial orderings short-circuit first: the iteration itself
	/// requires `self > divisor > 1`.
	#[tracing::instrument(level = "trace", skip_all, fields(n_limbs = self.len(), d_limbs = divisor.len()))]
	pub fn div_rem(&self, divisor: &Nat) -> Result<(Nat, Nat), Error> {
		if divisor.is_zero() {
			return Err(Error::DivisionByZero);
		}
		if divisor.is_one() {
			return Ok((self.clone(), Nat::ZERO));
		}
		match self.cmp(divisor) {
			Ordering::Less => return Ok((Nat::ZERO, self.clone())),
			Ordering::Equal => return Ok((Nat::one(), Nat::ZERO)),
			Ordering::Greater => {}
		}

		let k = self.num_bits() + divisor.num_bits();
		let scale = Nat::pow2(k + 1);

		// x·d stays below 2^k throughout: the seed satisfies it because
		// self < 2^bits(self), and the Newton step maps the scaled error
		// t = x·d/2^k through t ← 1 − (1 − t)², which never leaves (0, 1].
		let mut x = self - divisor;
		let mut previous = Nat::ZERO;
		loop {
			let mut next = &x * &(&scale - &(&x * divisor));
			next.shr_bits(k);
			if next == x || next == previous {
				x = next;
				break;
			}
			previous = std::mem::replace(&mut x, next);
		}

		let mut quotient = self * &x;
		quotient.shr_bits(k);

		// settle the estimate into 0 ≤ self − q·d < d; each loop runs at
		// most once for a converged reciprocal
		while &(&quotient * divisor) > self {
			quotient
				.decrement()
				.expect("an overestimated quotient is positive");
		}
		let mut remainder = self - &(&quotient * divisor);
		while remainder >= *divisor {
			quotient.increment();
			remainder.sub_limbwise(divisor);
		}

		Ok((quotient, remainder))
	}
}
