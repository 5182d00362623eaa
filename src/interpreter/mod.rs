//! Tree-walk evaluation of one expression.
//!
//! The interpreter walks the AST produced by the parser in post-order,
//! computing the value of every node from the values of its children. The
//! expression grammar has no names, so there is nothing to look up and
//! nothing to store: the interpreter carries no state and each pipeline run
//! builds a fresh one.
//!
//! # Semantics
//!
//! - **Truthiness**: `nil` and `false` are falsy; every other value is
//!   truthy, including `0` and the empty string.
//! - **Equality**: structural over the value tags and never a type error;
//!   values of different tags are simply unequal.
//! - **Arithmetic and comparison**: numbers only, except `+` which also
//!   concatenates two strings. Anything else fails with a runtime error
//!   naming the operator's line and the expected operand types.
//! - **Division by zero**: IEEE-754 semantics, a signed infinity or NaN.
//! - **Evaluation order**: left operand before right, both always evaluated.
//!   There is no short-circuiting; `and`/`or` are not part of the grammar.

pub(crate) mod value;

use value::Value;

use crate::{error::RuntimeError, parser::expression::{Expression::{self, *}, LiteralValue}, scanner::TokenType::{Bang, Minus, Plus}};

/// Evaluates expressions; stateless, one per pipeline run.
pub(crate) struct Interpreter;

impl Interpreter {
	/// Evaluate the given expression and return its value.
	pub fn evaluate(&self, expression: &Expression<'_>) -> Result<Value, RuntimeError> {
		Ok(match expression {
			Literal(literal) => match literal {
				LiteralValue::Nil => Value::Nil,
				LiteralValue::Boolean(b) => Value::Boolean(*b),
				LiteralValue::Number(n) => Value::Number(*n),
				LiteralValue::StringLiteral(s) => Value::Str(s.to_string()),
			},
			Grouping(inner) => self.evaluate(inner)?,
			Unary { operator, right } => {
				let right = self.evaluate(right)?;
				match (&operator.r#type, &right) {
					(Minus, Value::Number(n)) => Value::Number(-n),
					(Bang, value) => Value::Boolean(!value.to_bool()),
					_ => return Err(RuntimeError::new(operator, "Operand must be a number.")),
				}
			}
			Binary { left, operator, right } => {
				// Left before right, both unconditionally.
				let left = self.evaluate(left)?;
				let right = self.evaluate(right)?;
				left.binary_op(&operator.r#type, &right).ok_or_else(|| {
					let message = match operator.r#type {
						Plus => "Operands must be two numbers or two strings.",
						_ => "Operands must be numbers.",
					};
					RuntimeError::new(operator, message)
				})?
			}
		})
	}
}
