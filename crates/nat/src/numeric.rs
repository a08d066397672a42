// Copyright 2025 Irreducible Inc.

//! Number-theoretic operations layered on the arithmetic kernels.

use std::cmp::Ordering;

use rand::Rng;

use crate::{Error, Nat};

impl Nat {
	/// Raises `self` to `exponent` by binary exponentiation.
	pub fn pow(&self, exponent: &Nat) -> Nat {
		if exponent.is_zero() {
			return Nat::one();
		}
		if exponent.is_one() {
			return self.clone();
		}

		let mut result = Nat::one();
		let mut base = self.clone();
		let mut remaining = exponent.clone();
		while !remaining.is_zero() {
			if remaining.is_odd() {
				result = &result * &base;
			}
			base = &base * &base;
			remaining.shr_bits(1);
		}
		result
	}

	/// `self!` via a balanced product tree over `[2, self]`.
	///
	/// The midpoint recursion keeps multiplicands of comparable size, which
	/// matters because multiplication cost grows super-linearly with
	/// operand length.
	pub fn factorial(&self) -> Nat {
		if self.is_zero() || self.is_one() {
			return Nat::one();
		}
		if self.is_two() {
			return self.clone();
		}
		prod_tree(&Nat::two(), self)
	}

	/// ⌊√self⌋ by integer Newton iteration.
	pub fn sqrt(&self) -> Nat {
		if self.is_zero() {
			return Nat::ZERO;
		}

		let mut current = self.clone();
		let mut next = self.clone();
		next.increment();
		next.shr_bits(1);

		while next < current {
			current = next.clone();
			next = &next + &(self / &next);
			next.shr_bits(1);
		}
		current
	}

	/// ⌊log_base(self)⌋ by repeated division.
	///
	/// Bases 0 and 1 never reduce the value and are rejected.
	pub fn log_n(&self, base: u64) -> Result<u64, Error> {
		if base <= 1 {
			return Err(Error::DivisionByZero);
		}

		let divisor = Nat::from(base);
		let mut value = self.clone();
		let mut log = 0u64;
		while value >= divisor {
			value = &value / &divisor;
			log += 1;
		}
		Ok(log)
	}

	/// ⌊log₂(self)⌋ by right shifts, far cheaper than division.
	pub fn log2(&self) -> u64 {
		let mut value = self.clone();
		let mut log = 0u64;
		while !value.is_zero() && !value.is_one() {
			value.shr_bits(1);
			log += 1;
		}
		log
	}

	/// Greatest common divisor by the Euclidean algorithm; `gcd(a, 0) = a`.
	pub fn gcd(a: &Nat, b: &Nat) -> Nat {
		let mut a = a.clone();
		let mut b = b.clone();
		while !b.is_zero() {
			let remainder = &a % &b;
			a = std::mem::replace(&mut b, remainder);
		}
		a
	}

	/// Least common multiple as `a·b / gcd(a, b)`; `lcm(0, 0)` is zero.
	pub fn lcm(a: &Nat, b: &Nat) -> Nat {
		if a.is_zero() && b.is_zero() {
			return Nat::ZERO;
		}
		&(a * b) / &Nat::gcd(a, b)
	}

	/// 2^power, built directly as a limb vector.
	pub fn pow2(power: usize) -> Nat {
		let top = power / 8;
		let mut limbs = vec![0u8; top + 1];
		limbs[top] = 1 << (power % 8);
		Nat { limbs }
	}

	/// A random value of uniformly drawn byte length in `[0, max_bytes]`.
	///
	/// The length is chosen first and the limbs filled uniformly, so the
	/// distribution over *values* is not uniform; trailing zero limbs trim
	/// the result further.
	pub fn random(max_bytes: u32) -> Nat {
		let mut rng = rand::rng();
		let len = rng.random_range(0..=max_bytes) as usize;
		let mut limbs = vec![0u8; len];
		rng.fill(limbs.as_mut_slice());
		Nat::from_limbs(limbs)
	}
}

/// Product of the integer range `[low, high]`, splitting at the midpoint so
/// the two subtrees multiply operands of comparable length.
pub(crate) fn prod_tree(low: &Nat, high: &Nat) -> Nat {
	match low.cmp(high) {
		Ordering::Greater => Nat::one(),
		Ordering::Equal => low.clone(),
		Ordering::Less => {
			if (high - low).is_one() {
				return low * high;
			}
			let mut mid = low + high;
			mid.shr_bits(1);
			let mut mid_plus_one = mid.clone();
			mid_plus_one.increment();
			prod_tree(low, &mid) * prod_tree(&mid_plus_one, high)
		}
	}
}

#[cfg(test)]
mod tests {
	use proptest::prelude::*;
	use rand::{SeedableRng, rngs::StdRng};

	use super::*;

	#[test]
	fn pow_special_cases() {
		let base = Nat::from(123u32);
		assert_eq!(base.pow(&Nat::ZERO), Nat::one());
		assert_eq!(base.pow(&Nat::one()), base);
		assert_eq!(Nat::from(3u32).pow(&Nat::from(20u32)).to_dec(), "3486784401");
		assert_eq!(Nat::from(2u32).pow(&Nat::from(64u32)), Nat::pow2(64));
	}

	#[test]
	fn factorial_matches_u128_reference() {
		let mut expected = 1u128;
		for n in 0u32..=30 {
			if n > 0 {
				expected *= u128::from(n);
			}
			assert_eq!(
				Nat::from(n).factorial(),
				Nat::from_limbs(expected.to_le_bytes().to_vec()),
				"{n}!"
			);
		}
	}

	#[test]
	fn sqrt_brackets_the_root() {
		let mut rng = StdRng::seed_from_u64(0);
		for _ in 0..100 {
			let value = Nat::from(rand::Rng::random::<u64>(&mut rng));
			let root = value.sqrt();
			assert!(&root * &root <= value);
			let mut root_plus_one = root.clone();
			root_plus_one.increment();
			assert!(&root_plus_one * &root_plus_one > value);
		}
		assert_eq!(Nat::ZERO.sqrt(), Nat::ZERO);
		assert_eq!(Nat::one().sqrt(), Nat::one());
		assert_eq!(Nat::from(99u32).sqrt(), Nat::from(9u32));
		assert_eq!(Nat::from(100u32).sqrt(), Nat::from(10u32));
	}

	#[test]
	fn logarithms() {
		assert_eq!(Nat::from(1u32).log_n(10), Ok(0));
		assert_eq!(Nat::from(9u32).log_n(10), Ok(0));
		assert_eq!(Nat::from(10u32).log_n(10), Ok(1));
		assert_eq!(Nat::from(99_999u32).log_n(10), Ok(4));
		assert_eq!(Nat::from(100_000u32).log_n(10), Ok(5));
		assert_eq!(Nat::from(5u32).log_n(0), Err(Error::DivisionByZero));
		assert_eq!(Nat::from(5u32).log_n(1), Err(Error::DivisionByZero));

		assert_eq!(Nat::one().log2(), 0);
		assert_eq!(Nat::two().log2(), 1);
		assert_eq!(Nat::from(255u32).log2(), 7);
		assert_eq!(Nat::from(256u32).log2(), 8);
		assert_eq!(Nat::pow2(100).log2(), 100);
	}

	#[test]
	fn log2_agrees_with_log_n_base_two() {
		let mut rng = StdRng::seed_from_u64(1);
		for _ in 0..50 {
			let value = Nat::from(rand::Rng::random::<u64>(&mut rng));
			assert_eq!(value.log2(), value.log_n(2).unwrap());
		}
	}

	#[test]
	fn gcd_lcm_basics() {
		let a = Nat::from(252u32);
		let b = Nat::from(105u32);
		assert_eq!(Nat::gcd(&a, &b), Nat::from(21u32));
		assert_eq!(Nat::lcm(&a, &b), Nat::from(1260u32));
		assert_eq!(Nat::gcd(&a, &Nat::ZERO), a);
		assert_eq!(Nat::gcd(&Nat::ZERO, &b), b);
		assert_eq!(Nat::lcm(&Nat::ZERO, &Nat::ZERO), Nat::ZERO);
		assert_eq!(Nat::lcm(&a, &Nat::ZERO), Nat::ZERO);
	}

	#[test]
	fn pow2_sets_a_single_bit() {
		assert_eq!(Nat::pow2(0), Nat::one());
		assert_eq!(Nat::pow2(1), Nat::two());
		assert_eq!(Nat::pow2(8).as_limbs(), &[0, 1]);
		assert_eq!(Nat::pow2(12).as_limbs(), &[0, 16]);
		assert!(Nat::pow2(1000).is_power_of_two());
		assert_eq!(Nat::pow2(1000).log2(), 1000);
	}

	#[test]
	fn random_respects_the_length_bound() {
		assert_eq!(Nat::random(0), Nat::ZERO);
		for _ in 0..50 {
			let value = Nat::random(16);
			assert!(value.len() <= 16);
		}
	}

	proptest! {
		#[test]
		fn pow_is_homomorphic_over_exponent_addition(
			base in 0u64..1000,
			e in 0u32..12,
			f in 0u32..12,
		) {
			let nat = Nat::from(base);
			let combined = nat.pow(&Nat::from(e + f));
			let split = nat.pow(&Nat::from(e)) * nat.pow(&Nat::from(f));
			prop_assert_eq!(combined, split);
		}

		#[test]
		fn gcd_times_lcm_is_the_product(a in 1u64.., b in 1u64..) {
			let (na, nb) = (Nat::from(a), Nat::from(b));
			let product = Nat::gcd(&na, &nb) * Nat::lcm(&na, &nb);
			prop_assert_eq!(product, &na * &nb);
		}
	}
}
