// Copyright 2025 Irreducible Inc.

//! String conversion for magnitudes of any length.
//!
//! Hexadecimal maps directly onto the limb vector (two nibbles per limb).
//! Decimal has no such alignment, so both directions run through a
//! decimal-digit scratch integer: parsing divides the decimal string by 16
//! until it is exhausted, printing accumulates digit·16^i terms.

mod decimal;

use std::{fmt, str::FromStr};

use decimal::Decimal;

use crate::{Error, Nat};

impl Nat {
	/// Parses a case-insensitive hexadecimal string.
	pub fn from_hex(hex: &str) -> Result<Self, Error> {
		if hex.is_empty() {
			return Err(Error::InvalidLiteral);
		}

		let mut nibbles = Vec::with_capacity(hex.len() + 1);
		for symbol in hex.chars() {
			let nibble = symbol.to_digit(16).ok_or(Error::InvalidLiteral)?;
			nibbles.push(nibble as u8);
		}
		// an odd digit count gets an implicit leading zero nibble
		if nibbles.len() % 2 == 1 {
			nibbles.insert(0, 0);
		}

		let limbs: Vec<u8> = nibbles
			.rchunks(2)
			.map(|pair| (pair[0] << 4) | pair[1])
			.collect();
		Ok(Self::from_limbs(limbs))
	}

	/// Uppercase hexadecimal, most significant digit first; zero renders as
	/// `"00"`.
	pub fn to_hex(&self) -> String {
		use fmt::Write;

		if self.is_zero() {
			return "00".to_string();
		}
		let mut rendered = String::with_capacity(self.limbs.len() * 2);
		for limb in self.limbs.iter().rev() {
			write!(rendered, "{limb:02X}").expect("writing to a String cannot fail");
		}
		rendered
	}

	/// Decimal rendering; zero renders as `"0"`.
	///
	/// Accumulates Σ digit·16^i over the hex digits, with the power of
	/// sixteen maintained incrementally by the decimal scratch integer.
	pub fn to_dec(&self) -> String {
		let hex = self.to_hex();
		let mut total = Decimal::zero();
		let mut power = Decimal::one();
		for symbol in hex.chars().rev() {
			let digit = symbol.to_digit(16).expect("to_hex emits hex digits");
			if digit != 0 {
				total = total.sum(&power.mul_small(u64::from(digit)));
			}
			power = power.mul_small(16);
		}
		total.into_string()
	}
}

impl fmt::Display for Nat {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		f.write_str(&self.to_dec())
	}
}

impl FromStr for Nat {
	type Err = Error;

	/// Parses a decimal string by repeated division of the digit string by
	/// 16; the remainders, gathered least significant first, pair up into
	/// limbs.
	fn from_str(source: &str) -> Result<Self, Error> {
		let mut current = Decimal::parse(source)?;

		let mut nibbles = Vec::new();
		while !current.is_zero() {
			let (quotient, remainder) = current.div16_rem();
			nibbles.push(remainder);
			current = quotient;
		}

		let limbs: Vec<u8> = nibbles
			.chunks(2)
			.map(|pair| pair[0] | (pair.get(1).copied().unwrap_or(0) << 4))
			.collect();
		Ok(Self::from_limbs(limbs))
	}
}
