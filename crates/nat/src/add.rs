// Copyright 2025 Irreducible Inc.

use crate::{Error, Nat};

impl Nat {
	/// In-place addition with a single-byte carry walked limb by limb.
	///
	/// Carry propagation can only extend the top, never zero it, so the
	/// result needs no re-normalization.
	pub(crate) fn add_limbwise(&mut self, rhs: &Nat) {
		if rhs.is_zero() {
			return;
		}
		if self.is_zero() {
			self.limbs = rhs.limbs.clone();
			return;
		}

		if self.limbs.len() < rhs.limbs.len() {
			self.limbs.resize(rhs.limbs.len(), 0);
		}

		let mut carry = 0u16;
		for (i, limb) in self.limbs.iter_mut().enumerate() {
			let src = rhs.limbs.get(i).copied().unwrap_or(0);
			let sum = u16::from(*limb) + u16::from(src) + carry;
			*limb = (sum & 0xFF) as u8;
			carry = sum >> 8;
			if i >= rhs.limbs.len() && carry == 0 {
				break;
			}
		}
		if carry != 0 {
			self.limbs.push(carry as u8);
		}
	}

	/// In-place subtraction. Callers guarantee `self >= rhs`; a violated
	/// precondition corrupts the value, so only the checked public surface
	/// reaches this.
	pub(crate) fn sub_limbwise(&mut self, rhs: &Nat) {
		for i in 0..rhs.limbs.len() {
			if self.limbs[i] < rhs.limbs[i] {
				// borrow: ripple 0x00 limbs up to 0xFF until one can pay
				let mut j = i + 1;
				while self.limbs[j] == 0 {
					self.limbs[j] = 0xFF;
					j += 1;
				}
				self.limbs[j] -= 1;
			}
			self.limbs[i] = self.limbs[i].wrapping_sub(rhs.limbs[i]);
		}
		self.normalize();
	}

	/// Fallible subtraction; `Underflow` when `rhs > self`.
	pub fn checked_sub(&self, rhs: &Nat) -> Result<Nat, Error> {
		if rhs > self {
			return Err(Error::Underflow);
		}
		let mut difference = self.clone();
		difference.sub_limbwise(rhs);
		Ok(difference)
	}

	/// Carry-free adder over AND/XOR/shift, kept as a cross-check for the
	/// carry-propagating kernel.
	#[cfg(test)]
	pub(crate) fn add_logic_gate(&mut self, rhs: &Nat) {
		let mut carry_value = rhs.clone();
		while !carry_value.is_zero() {
			let mut carry = &*self & &carry_value;
			*self = &*self ^ &carry_value;
			carry.shl_bits(1);
			carry_value = carry;
		}
	}

	/// Borrow-free subtractor over the complemented receiver. Same
	/// precondition as [`Nat::sub_limbwise`].
	#[cfg(test)]
	pub(crate) fn sub_logic_gate(&mut self, rhs: &Nat) {
		let mut borrow_value = rhs.clone();
		while !borrow_value.is_zero() {
			let mut borrow = &self.flip_limbs() & &borrow_value;
			*self = &*self ^ &borrow_value;
			borrow.shl_bits(1);
			borrow_value = borrow;
		}
		self.normalize();
	}
}
