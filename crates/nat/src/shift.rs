// Copyright 2025 Irreducible Inc.

use std::ops::{Shl, ShlAssign, Shr, ShrAssign};

use crate::Nat;

impl Nat {
	/// Logical left shift by `count` bits: whole limbs are prepended, then
	/// the sub-byte remainder is walked from the most significant limb down
	/// so the carry-out of each limb lands in its neighbor.
	pub(crate) fn shl_bits(&mut self, count: usize) {
		if self.is_zero() || count == 0 {
			return;
		}

		let limb_shift = count / 8;
		let bit_shift = count % 8;

		if limb_shift != 0 {
			let mut shifted = vec![0u8; limb_shift];
			shifted.extend_from_slice(&self.limbs);
			self.limbs = shifted;
		}
		if bit_shift == 0 {
			return;
		}

		self.limbs.push(0);
		for i in (limb_shift..self.limbs.len() - 1).rev() {
			self.limbs[i + 1] |= self.limbs[i] >> (8 - bit_shift);
			self.limbs[i] <<= bit_shift;
		}
		self.normalize();
	}

	/// Logical right shift by `count` bits; shifting past the top clears
	/// the value.
	pub(crate) fn shr_bits(&mut self, count: usize) {
		if self.is_zero() || count == 0 {
			return;
		}

		let limb_shift = count / 8;
		if limb_shift >= self.limbs.len() {
			self.limbs.clear();
			return;
		}
		self.limbs.drain(..limb_shift);

		let bit_shift = count % 8;
		if bit_shift != 0 {
			let top = self.limbs.len() - 1;
			for i in 0..top {
				self.limbs[i] = (self.limbs[i] >> bit_shift) | (self.limbs[i + 1] << (8 - bit_shift));
			}
			self.limbs[top] >>= bit_shift;
		}
		self.normalize();
	}
}

impl Shl<usize> for &Nat {
	type Output = Nat;

	fn shl(self, count: usize) -> Nat {
		let mut shifted = self.clone();
		shifted.shl_bits(count);
		shifted
	}
}

impl Shl<usize> for Nat {
	type Output = Nat;

	fn shl(mut self, count: usize) -> Nat {
		self.shl_bits(count);
		self
	}
}

impl ShlAssign<usize> for Nat {
	fn shl_assign(&mut self, count: usize) {
		self.shl_bits(count);
	}
}

impl Shr<usize> for &Nat {
	type Output = Nat;

	fn shr(self, count: usize) -> Nat {
		let mut shifted = self.clone();
		shifted.shr_bits(count);
		shifted
	}
}

impl Shr<usize> for Nat {
	type Output = Nat;

	fn shr(mut self, count: usize) -> Nat {
		self.shr_bits(count);
		self
	}
}

impl ShrAssign<usize> for Nat {
	fn shr_assign(&mut self, count: usize) {
		self.shr_bits(count);
	}
}
