use std::fmt::Display;

use Value::*;

/// A runtime value produced by evaluating one expression.
///
/// Equality is derived structurally: two values are equal only when both the
/// tag and the payload match, so `1 == "1"` is `false` rather than a type
/// error, and numbers compare with ordinary floating-point equality.
#[derive(Debug, Clone, PartialEq)]
pub(crate) enum Value {
	Nil,
	Boolean(bool),
	Number(f64),
	Str(String),
}

impl Display for Value {
	fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
		match self {
			Nil => write!(f, "null"),
			Boolean(b) => write!(f, "{b}"),
			Number(n) => {
				// The integer rendering only holds while the magnitude fits
				// in an i64; past 2^63 the cast saturates, and casting -0.0
				// would drop its sign. Everything else takes the float path.
				let fits_i64 = n.fract() == 0.0 && n.abs() < 9_223_372_036_854_775_808.0;
				if fits_i64 && !(*n == 0.0 && n.is_sign_negative()) {
					write!(f, "{}", *n as i64)
				} else {
					write!(f, "{n}")
				}
			}
			Str(s) => write!(f, "\"{s}\""),
		}
	}
}

impl Value {
	/// Performs a binary operation between two values.
	///
	/// `None` means the operand tags do not fit the operator; the
	/// interpreter turns that into a runtime error naming the expectation.
	pub fn binary_op(&self, op: &crate::scanner::TokenType<'_>, right: &Self) -> Option<Value> {
		use crate::scanner::TokenType::*;

		let value = match op {
			Plus => self.plus(right)?,
			Minus => self.minus(right)?,
			Star => self.star(right)?,
			Slash => self.slash(right)?,
			Greater => return self.greater(right).map(Boolean),
			GreaterEqual => return self.greater_equal(right).map(Boolean),
			Less => return self.less(right).map(Boolean),
			LessEqual => return self.less_equal(right).map(Boolean),
			EqualEqual => return Some(Boolean(self == right)),
			BangEqual => return Some(Boolean(self != right)),
			_ => return None,
		};
		Some(value)
	}

	/// Determines if the value is considered "true" in a boolean context.
	///
	/// Only `nil` and `false` are falsy; `0` and the empty string count as
	/// true.
	pub fn to_bool(&self) -> bool { !matches!(self, Nil | Boolean(false)) }

	/// Adds two numbers or concatenates two strings. Mixed operands are a
	/// type error, never an implicit conversion.
	fn plus(&self, other: &Self) -> Option<Value> {
		match (self, other) {
			(Number(l), Number(r)) => Some(Number(l + r)),
			(Str(l), Str(r)) => Some(Str(format!("{l}{r}"))),
			_ => None,
		}
	}

	/// Tries to subtract two numbers.
	fn minus(&self, other: &Self) -> Option<Value> {
		match (self, other) {
			(Number(l), Number(r)) => Some(Number(l - r)),
			_ => None,
		}
	}

	/// Tries to multiply two numbers.
	fn star(&self, other: &Self) -> Option<Value> {
		match (self, other) {
			(Number(l), Number(r)) => Some(Number(l * r)),
			_ => None,
		}
	}

	/// Tries to divide two numbers. Division by zero follows IEEE-754 and
	/// yields a signed infinity or NaN instead of an error.
	fn slash(&self, other: &Self) -> Option<Value> {
		match (self, other) {
			(Number(l), Number(r)) => Some(Number(l / r)),
			_ => None,
		}
	}

	/// Tries to compare two numbers for greater-than.
	fn greater(&self, other: &Self) -> Option<bool> {
		match (self, other) {
			(Number(l), Number(r)) => Some(l > r),
			_ => None,
		}
	}

	/// Tries to compare two numbers for greater-than-or-equal.
	fn greater_equal(&self, other: &Self) -> Option<bool> {
		match (self, other) {
			(Number(l), Number(r)) => Some(l >= r),
			_ => None,
		}
	}

	/// Tries to compare two numbers for less-than.
	fn less(&self, other: &Self) -> Option<bool> {
		match (self, other) {
			(Number(l), Number(r)) => Some(l < r),
			_ => None,
		}
	}

	/// Tries to compare two numbers for less-than-or-equal.
	fn less_equal(&self, other: &Self) -> Option<bool> {
		match (self, other) {
			(Number(l), Number(r)) => Some(l <= r),
			_ => None,
		}
	}
}
