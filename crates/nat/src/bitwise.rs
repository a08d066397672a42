// Copyright 2025 Irreducible Inc.

use std::ops::{BitAnd, BitOr, BitXor};

use itertools::izip;

use crate::Nat;

impl BitAnd<&Nat> for &Nat {
	type Output = Nat;

	/// Limb-wise AND; the result is at most as long as the shorter operand.
	fn bitand(self, rhs: &Nat) -> Nat {
		let limbs: Vec<u8> = izip!(&self.limbs, &rhs.limbs)
			.map(|(a, b)| a & b)
			.collect();
		Nat::from_limbs(limbs)
	}
}

impl BitOr<&Nat> for &Nat {
	type Output = Nat;

	/// Limb-wise OR with the shorter operand zero-extended.
	fn bitor(self, rhs: &Nat) -> Nat {
		let (long, short) = order_by_len(self, rhs);
		let limbs: Vec<u8> = long
			.iter()
			.enumerate()
			.map(|(i, &limb)| limb | short.get(i).copied().unwrap_or(0))
			.collect();
		Nat::from_limbs(limbs)
	}
}

impl BitXor<&Nat> for &Nat {
	type Output = Nat;

	/// Limb-wise XOR with the shorter operand zero-extended.
	fn bitxor(self, rhs: &Nat) -> Nat {
		let (long, short) = order_by_len(self, rhs);
		let limbs: Vec<u8> = long
			.iter()
			.enumerate()
			.map(|(i, &limb)| limb ^ short.get(i).copied().unwrap_or(0))
			.collect();
		Nat::from_limbs(limbs)
	}
}

fn order_by_len<'a>(a: &'a Nat, b: &'a Nat) -> (&'a [u8], &'a [u8]) {
	if a.limbs.len() >= b.limbs.len() {
		(&a.limbs, &b.limbs)
	} else {
		(&b.limbs, &a.limbs)
	}
}

impl Nat {
	/// Limb-wise complement of the current representation.
	///
	/// Not a mathematical NOT — an unbounded integer has no fixed width to
	/// complement against. The result is deliberately left un-normalized
	/// and exists only to feed the logic-gate subtraction kernel.
	#[cfg(test)]
	pub(crate) fn flip_limbs(&self) -> Nat {
		Nat {
			limbs: self.limbs.iter().map(|&limb| !limb).collect(),
		}
	}
}

#[cfg(test)]
mod tests {
	use proptest::prelude::*;
	use rand::{Rng, SeedableRng, rngs::StdRng};

	use super::*;

	fn nat_from_u128(value: u128) -> Nat {
		Nat::from_limbs(value.to_le_bytes().to_vec())
	}

	#[test]
	fn pointwise_ops_match_u128_reference() {
		let mut rng = StdRng::seed_from_u64(0);
		for _ in 0..500 {
			// uneven lengths exercise the zero-extension paths
			let a: u128 = u128::from(rng.random::<u64>());
			let b: u128 = rng.random();
			let (na, nb) = (nat_from_u128(a), nat_from_u128(b));
			assert_eq!(&na & &nb, nat_from_u128(a & b));
			assert_eq!(&na | &nb, nat_from_u128(a | b));
			assert_eq!(&na ^ &nb, nat_from_u128(a ^ b));
		}
	}

	#[test]
	fn results_are_normalized() {
		let a = Nat::from(0x0100u32);
		let b = Nat::from(0x00FFu32);
		assert_eq!(&a & &b, Nat::ZERO);
		assert_eq!(&a ^ &a, Nat::ZERO);
		assert_eq!(&b | &Nat::ZERO, b);
	}

	proptest! {
		#[test]
		fn power_of_two_iff_clearing_lowest_bit_zeroes(value in 1u64..) {
			let nat = Nat::from(value);
			let mut minus_one = nat.clone();
			minus_one.decrement().unwrap();
			let cleared = &nat & &minus_one;
			prop_assert_eq!(nat.is_power_of_two(), cleared.is_zero());
		}
	}
}
