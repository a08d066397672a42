// Copyright 2025 Irreducible Inc.

//! Arbitrary-precision unsigned integers over little-endian byte limbs.
//!
//! The crate provides [`Nat`], an unbounded non-negative integer carrying
//! the full arithmetic, bitwise, comparison, and number-theoretic surface:
//!
//! * carry/borrow limb kernels behind `+` and `-`, a schoolbook column
//!   sweep behind `*`, and Newton–Raphson reciprocal division behind `/`
//!   and `%`
//! * decimal and hexadecimal string conversion for values of any length
//! * exponentiation by squaring, factorial (sequential and pool-parallel),
//!   integer square root and logarithms, gcd/lcm, and random values
//!
//! Values are normalized everywhere: the limb vector is either empty (zero)
//! or ends with a non-zero limb.

mod add;
mod bitwise;
mod cmp;
mod convert;
mod div;
mod error;
mod mul;
mod nat;
mod numeric;
mod ops;
mod parallel;
mod shift;

pub use error::Error;
pub use nat::Nat;
