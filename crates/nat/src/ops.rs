// Copyright 2025 Irreducible Inc.

//! Operator surface over the limb kernels.
//!
//! The reference-on-reference impls hold the logic; owned and mixed operand
//! forms forward to them. `-`, `/`, and `%` keep the panic contract of the
//! primitive integer operators — `checked_sub` and `div_rem` are the
//! fallible equivalents.

use std::{
	iter::{Product, Sum},
	ops::{
		Add, AddAssign, BitAnd, BitAndAssign, BitOr, BitOrAssign, BitXor, BitXorAssign, Div,
		DivAssign, Mul, MulAssign, Rem, RemAssign, Sub, SubAssign,
	},
};

use crate::{Nat, mul::mul_columns};

impl Add<&Nat> for &Nat {
	type Output = Nat;

	fn add(self, rhs: &Nat) -> Nat {
		let mut sum = self.clone();
		sum.add_limbwise(rhs);
		sum
	}
}

impl Sub<&Nat> for &Nat {
	type Output = Nat;

	fn sub(self, rhs: &Nat) -> Nat {
		self.checked_sub(rhs)
			.expect("attempt to subtract with underflow")
	}
}

impl Mul<&Nat> for &Nat {
	type Output = Nat;

	fn mul(self, rhs: &Nat) -> Nat {
		mul_columns(self, rhs)
	}
}

impl Div<&Nat> for &Nat {
	type Output = Nat;

	fn div(self, rhs: &Nat) -> Nat {
		let (quotient, _) = self.div_rem(rhs).expect("attempt to divide by zero");
		quotient
	}
}

impl Rem<&Nat> for &Nat {
	type Output = Nat;

	fn rem(self, rhs: &Nat) -> Nat {
		let (_, remainder) = self
			.div_rem(rhs)
			.expect("attempt to calculate the remainder with a divisor of zero");
		remainder
	}
}

macro_rules! forward_binop {
	($($op:ident :: $method:ident),* $(,)?) => {
		$(
			impl $op<Nat> for Nat {
				type Output = Nat;

				fn $method(self, rhs: Nat) -> Nat {
					(&self).$method(&rhs)
				}
			}

			impl $op<&Nat> for Nat {
				type Output = Nat;

				fn $method(self, rhs: &Nat) -> Nat {
					(&self).$method(rhs)
				}
			}

			impl $op<Nat> for &Nat {
				type Output = Nat;

				fn $method(self, rhs: Nat) -> Nat {
					self.$method(&rhs)
				}
			}
		)*
	};
}

forward_binop!(
	Add::add,
	Sub::sub,
	Mul::mul,
	Div::div,
	Rem::rem,
	BitAnd::bitand,
	BitOr::bitor,
	BitXor::bitxor,
);

macro_rules! forward_assign {
	($($op:ident :: $method:ident => $binop:tt),* $(,)?) => {
		$(
			impl $op<&Nat> for Nat {
				fn $method(&mut self, rhs: &Nat) {
					*self = &*self $binop rhs;
				}
			}

			impl $op<Nat> for Nat {
				fn $method(&mut self, rhs: Nat) {
					*self = &*self $binop &rhs;
				}
			}
		)*
	};
}

forward_assign!(
	SubAssign::sub_assign => -,
	MulAssign::mul_assign => *,
	DivAssign::div_assign => /,
	RemAssign::rem_assign => %,
	BitAndAssign::bitand_assign => &,
	BitOrAssign::bitor_assign => |,
	BitXorAssign::bitxor_assign => ^,
);

// addition gets the genuinely in-place kernel instead of the rebuild
impl AddAssign<&Nat> for Nat {
	fn add_assign(&mut self, rhs: &Nat) {
		self.add_limbwise(rhs);
	}
}

impl AddAssign<Nat> for Nat {
	fn add_assign(&mut self, rhs: Nat) {
		self.add_limbwise(&rhs);
	}
}

impl Sum for Nat {
	fn sum<I: Iterator<Item = Nat>>(iter: I) -> Nat {
		iter.fold(Nat::ZERO, |mut total, term| {
			total += term;
			total
		})
	}
}

impl<'a> Sum<&'a Nat> for Nat {
	fn sum<I: Iterator<Item = &'a Nat>>(iter: I) -> Nat {
		iter.fold(Nat::ZERO, |mut total, term| {
			total += term;
			total
		})
	}
}

impl Product for Nat {
	fn product<I: Iterator<Item = Nat>>(iter: I) -> Nat {
		iter.fold(Nat::one(), |total, factor| total * factor)
	}
}

impl<'a> Product<&'a Nat> for Nat {
	fn product<I: Iterator<Item = &'a Nat>>(iter: I) -> Nat {
		iter.fold(Nat::one(), |total, factor| total * factor)
	}
}

#[cfg(test)]
mod tests {
	use proptest::prelude::*;

	use super::*;

	#[test]
	fn owned_and_borrowed_forms_agree() {
		let a = Nat::from(41_624u32);
		let b = Nat::from(516u32);
		assert_eq!(a.clone() + b.clone(), &a + &b);
		assert_eq!(a.clone() - &b, &a - b.clone());
		assert_eq!(a.clone() * b.clone(), &a * &b);
		assert_eq!(a.clone() / &b, &a / b.clone());
		assert_eq!(a.clone() % b.clone(), &a % &b);
	}

	#[test]
	fn compound_assignment() {
		let mut value = Nat::from(1000u32);
		value += Nat::from(24u32);
		assert_eq!(value, Nat::from(1024u32));
		value -= Nat::from(24u32);
		assert_eq!(value, Nat::from(1000u32));
		value *= Nat::from(3u32);
		assert_eq!(value, Nat::from(3000u32));
		value /= Nat::from(7u32);
		assert_eq!(value, Nat::from(428u32));
		value %= Nat::from(100u32);
		assert_eq!(value, Nat::from(28u32));
		value <<= 4;
		assert_eq!(value, Nat::from(448u32));
		value >>= 6;
		assert_eq!(value, Nat::from(7u32));
	}

	#[test]
	#[should_panic(expected = "underflow")]
	fn subtraction_panics_on_underflow() {
		let _ = Nat::from(1u32) - Nat::from(2u32);
	}

	#[test]
	#[should_panic(expected = "divide by zero")]
	fn division_panics_on_zero_divisor() {
		let _ = Nat::from(1u32) / Nat::ZERO;
	}

	#[test]
	fn sum_and_product_fold() {
		let values = [3u32, 5, 7].map(Nat::from);
		assert_eq!(values.iter().sum::<Nat>(), Nat::from(15u32));
		assert_eq!(values.iter().product::<Nat>(), Nat::from(105u32));
		assert_eq!(std::iter::empty::<Nat>().sum::<Nat>(), Nat::ZERO);
		assert_eq!(std::iter::empty::<Nat>().product::<Nat>(), Nat::one());
	}

	proptest! {
		#[test]
		fn addition_commutes_and_associates(a in any::<u64>(), b in any::<u64>(), c in any::<u64>()) {
			let (na, nb, nc) = (Nat::from(a), Nat::from(b), Nat::from(c));
			prop_assert_eq!(&na + &nb, &nb + &na);
			prop_assert_eq!(&(&na + &nb) + &nc, &na + &(&nb + &nc));
			prop_assert_eq!(&na + &Nat::ZERO, na);
		}

		#[test]
		fn multiplication_distributes(a in any::<u32>(), b in any::<u32>(), c in any::<u32>()) {
			let (na, nb, nc) = (Nat::from(a), Nat::from(b), Nat::from(c));
			prop_assert_eq!(&na * &(&nb + &nc), &(&na * &nb) + &(&na * &nc));
			prop_assert_eq!(&na * &nb, &nb * &na);
			prop_assert_eq!(&na * &Nat::one(), na.clone());
			prop_assert_eq!(&na * &Nat::ZERO, Nat::ZERO);
		}
	}
}
