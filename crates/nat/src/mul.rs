// Copyright 2025 Irreducible Inc.

//! Schoolbook multiplication restructured as a linear column sweep.

use crate::Nat;

/// Multiplies two magnitudes by summing the 2·L−1 convolution columns with
/// a running 64-bit carry.
///
/// Column k is Σ long[i]·short[k−i] over the in-range i. Each column emits
/// its low byte as an output limb and carries the high bits into the next
/// column; whatever carry survives the last column spills into further
/// limbs. A column sum is bounded by 255²·L plus the carried high bits, far
/// inside u64 for any realistic operand length.
pub(crate) fn mul_columns(a: &Nat, b: &Nat) -> Nat {
	if a.is_zero() || b.is_zero() {
		return Nat::ZERO;
	}
	if a.is_one() {
		return b.clone();
	}
	if b.is_one() {
		return a.clone();
	}

	// sweeping the longer operand and capping columns at the shorter
	// operand's length skips the all-zero products of the naive square sweep
	let (long, short) = if a.limbs.len() >= b.limbs.len() {
		(&a.limbs, &b.limbs)
	} else {
		(&b.limbs, &a.limbs)
	};

	if long.len() == 1 {
		let product = u16::from(long[0]) * u16::from(short[0]);
		return Nat::from_limbs(product.to_le_bytes().to_vec());
	}

	let columns = long.len() + short.len() - 1;
	let mut limbs = Vec::with_capacity(long.len() + short.len());
	let mut carry = 0u64;

	for k in 0..columns {
		let lo = k.saturating_sub(short.len() - 1);
		let hi = (k + 1).min(long.len());
		let mut column = carry;
		for i in lo..hi {
			column += u64::from(long[i]) * u64::from(short[k - i]);
		}
		limbs.push((column & 0xFF) as u8);
		carry = column >> 8;
	}
	while carry != 0 {
		limbs.push((carry & 0xFF) as u8);
		carry >>= 8;
	}

	let mut product = Nat { limbs };
	product.normalize();
	product
}
