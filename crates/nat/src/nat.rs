// Copyright 2025 Irreducible Inc.

use crate::Error;

/// An arbitrary-precision unsigned integer.
///
/// The magnitude is stored as base-256 limbs in little-endian order:
/// `limbs[0]` is the least significant byte and the value is
/// Σ `limbs[i]` · 256^i. The vector is kept *normalized* — either empty
/// (the value zero) or ending with a non-zero limb — and every kernel that
/// produces a `Nat` restores the invariant before returning.
#[derive(Debug, Default, Clone, PartialEq, Eq, Hash)]
pub struct Nat {
	pub(crate) limbs: Vec<u8>,
}

impl Nat {
	pub const ZERO: Self = Self { limbs: Vec::new() };

	pub fn one() -> Self {
		Self { limbs: vec![1] }
	}

	pub fn two() -> Self {
		Self { limbs: vec![2] }
	}

	/// Builds a value from little-endian limbs, trimming trailing zeros.
	pub fn from_limbs(limbs: impl Into<Vec<u8>>) -> Self {
		let mut limbs = limbs.into();
		trim_zero_limbs(&mut limbs);
		Self { limbs }
	}

	/// Number of limbs in the normalized representation; zero has none.
	pub fn len(&self) -> usize {
		self.limbs.len()
	}

	pub fn is_zero(&self) -> bool {
		self.limbs.is_empty()
	}

	pub fn is_one(&self) -> bool {
		self.limbs == [1]
	}

	pub fn is_two(&self) -> bool {
		self.limbs == [2]
	}

	pub fn is_odd(&self) -> bool {
		self.limbs.first().is_some_and(|limb| limb & 1 == 1)
	}

	pub fn is_even(&self) -> bool {
		!self.is_odd()
	}

	/// Bit capacity of the limb vector, 8·len.
	///
	/// An overestimate of ⌈log₂⌉; callers use it only as an upper bound.
	pub fn num_bits(&self) -> usize {
		self.limbs.len() * 8
	}

	/// True when exactly one bit of the magnitude is set; 1 qualifies.
	pub fn is_power_of_two(&self) -> bool {
		match self.limbs.split_last() {
			None => false,
			Some((top, rest)) => top.is_power_of_two() && rest.iter().all(|&limb| limb == 0),
		}
	}

	/// The little-endian limb vector.
	pub fn to_limbs(&self) -> Vec<u8> {
		self.limbs.clone()
	}

	pub fn as_limbs(&self) -> &[u8] {
		&self.limbs
	}

	pub fn into_limbs(self) -> Vec<u8> {
		self.limbs
	}

	/// Adds one in place.
	pub fn increment(&mut self) {
		for limb in &mut self.limbs {
			let (sum, carried) = limb.overflowing_add(1);
			*limb = sum;
			if !carried {
				return;
			}
		}
		self.limbs.push(1);
	}

	/// Subtracts one in place; zero has no predecessor.
	pub fn decrement(&mut self) -> Result<(), Error> {
		if self.is_zero() {
			return Err(Error::Underflow);
		}
		for limb in &mut self.limbs {
			let (difference, borrowed) = limb.overflowing_sub(1);
			*limb = difference;
			if !borrowed {
				break;
			}
		}
		self.normalize();
		Ok(())
	}

	pub(crate) fn normalize(&mut self) {
		trim_zero_limbs(&mut self.limbs);
	}
}

pub(crate) fn trim_zero_limbs(limbs: &mut Vec<u8>) {
	while limbs.last() == Some(&0) {
		limbs.pop();
	}
}

impl From<u32> for Nat {
	fn from(value: u32) -> Self {
		Self::from_limbs(value.to_le_bytes().to_vec())
	}
}

impl From<u64> for Nat {
	fn from(value: u64) -> Self {
		Self::from_limbs(value.to_le_bytes().to_vec())
	}
}

impl TryFrom<&Nat> for u64 {
	type Error = Error;

	fn try_from(value: &Nat) -> Result<Self, Error> {
		if value.limbs.len() > 8 {
			return Err(Error::Overflow {
				limbs: value.limbs.len(),
			});
		}
		let mut raw = [0u8; 8];
		raw[..value.limbs.len()].copy_from_slice(&value.limbs);
		Ok(u64::from_le_bytes(raw))
	}
}
