#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum Error {
	#[error("empty or malformed numeric literal")]
	InvalidLiteral,
	#[error("division by zero")]
	DivisionByZero,
	#[error("subtraction underflow")]
	Underflow,
	#[error("value spans {limbs} limbs, a u64 holds at most 8")]
	Overflow { limbs: usize },
}
