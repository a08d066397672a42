// Copyright 2025 Irreducible Inc.

//! Decimal-digit scratch integer backing the base-10 ↔ base-16 string
//! conversions.
//!
//! Digits are stored most significant first as byte values `0..=9`, with a
//! single canonical zero digit for the value zero. The type supports just
//! enough arithmetic for the conversions: addition, multiplication (full
//! and by a machine word), exponentiation, and long division by a small
//! word.

use crate::Error;

#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) struct Decimal {
	digits: Vec<u8>,
}

impl Decimal {
	pub(crate) fn zero() -> Self {
		Self { digits: vec![0] }
	}

	pub(crate) fn one() -> Self {
		Self { digits: vec![1] }
	}

	/// Parses a decimal string; empty input or a non-digit character fails
	/// with `InvalidLiteral`.
	pub(crate) fn parse(source: &str) -> Result<Self, Error> {
		if source.is_empty() {
			return Err(Error::InvalidLiteral);
		}
		let mut digits = Vec::with_capacity(source.len());
		for symbol in source.chars() {
			let digit = symbol.to_digit(10).ok_or(Error::InvalidLiteral)?;
			digits.push(digit as u8);
		}
		Ok(Self::trimmed(digits))
	}

	fn trimmed(mut digits: Vec<u8>) -> Self {
		let leading = digits.iter().take_while(|&&digit| digit == 0).count();
		if leading == digits.len() {
			digits.truncate(1);
			digits[0] = 0;
		} else {
			digits.drain(..leading);
		}
		Self { digits }
	}

	pub(crate) fn is_zero(&self) -> bool {
		self.digits == [0]
	}

	/// Digit-wise addition with decimal carry.
	pub(crate) fn sum(&self, other: &Self) -> Self {
		let mut reversed = Vec::with_capacity(self.digits.len().max(other.digits.len()) + 1);
		let mut a = self.digits.iter().rev();
		let mut b = other.digits.iter().rev();
		let mut carry = 0u8;
		loop {
			let (da, db) = (a.next(), b.next());
			if da.is_none() && db.is_none() {
				break;
			}
			let total = da.copied().unwrap_or(0) + db.copied().unwrap_or(0) + carry;
			reversed.push(total % 10);
			carry = total / 10;
		}
		if carry != 0 {
			reversed.push(carry);
		}
		reversed.reverse();
		Self::trimmed(reversed)
	}

	/// Schoolbook digit convolution.
	pub(crate) fn mul(&self, other: &Self) -> Self {
		if self.is_zero() || other.is_zero() {
			return Self::zero();
		}

		let mut cells = vec![0u32; self.digits.len() + other.digits.len()];
		for (i, &a) in self.digits.iter().rev().enumerate() {
			for (j, &b) in other.digits.iter().rev().enumerate() {
				cells[i + j] += u32::from(a) * u32::from(b);
			}
		}

		let mut reversed = Vec::with_capacity(cells.len());
		let mut carry = 0u32;
		for cell in cells {
			let total = cell + carry;
			reversed.push((total % 10) as u8);
			carry = total / 10;
		}
		while carry != 0 {
			reversed.push((carry % 10) as u8);
			carry /= 10;
		}
		reversed.reverse();
		Self::trimmed(reversed)
	}

	/// Multiplication by a machine word small enough that `9·factor` plus a
	/// running carry stays inside u64.
	pub(crate) fn mul_small(&self, factor: u64) -> Self {
		if factor == 0 || self.is_zero() {
			return Self::zero();
		}

		let mut reversed = Vec::with_capacity(self.digits.len() + 20);
		let mut carry = 0u64;
		for &digit in self.digits.iter().rev() {
			let total = u64::from(digit) * factor + carry;
			reversed.push((total % 10) as u8);
			carry = total / 10;
		}
		while carry != 0 {
			reversed.push((carry % 10) as u8);
			carry /= 10;
		}
		reversed.reverse();
		Self { digits: reversed }
	}

	/// `self^exponent` by square-and-multiply.
	pub(crate) fn pow(&self, exponent: usize) -> Self {
		let mut result = Self::one();
		let mut base = self.clone();
		let mut remaining = exponent;
		while remaining != 0 {
			if remaining & 1 == 1 {
				result = result.mul(&base);
			}
			base = base.mul(&base);
			remaining >>= 1;
		}
		result
	}

	/// Long division by a non-zero machine word; returns the quotient and
	/// remainder. `10·divisor` must fit in u64.
	pub(crate) fn div_small_rem(&self, divisor: u64) -> (Self, u64) {
		debug_assert_ne!(divisor, 0);

		let mut quotient = Vec::with_capacity(self.digits.len());
		let mut remainder = 0u64;
		for &digit in &self.digits {
			remainder = remainder * 10 + u64::from(digit);
			quotient.push((remainder / divisor) as u8);
			remainder %= divisor;
		}
		(Self::trimmed(quotient), remainder)
	}

	/// Division by sixteen with the remainder as a nibble — the workhorse of
	/// decimal → hex conversion.
	pub(crate) fn div16_rem(&self) -> (Self, u8) {
		let (quotient, remainder) = self.div_small_rem(16);
		(quotient, remainder as u8)
	}

	pub(crate) fn into_string(self) -> String {
		self.digits
			.into_iter()
			.map(|digit| char::from(b'0' + digit))
			.collect()
	}
}
