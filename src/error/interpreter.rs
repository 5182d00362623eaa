use crate::scanner::Token;

/// A type error discovered while evaluating an operator.
///
/// Carries the offending operator token's line and lexeme plus a message
/// naming the operand type(s) the operator expected.
#[derive(thiserror::Error, Debug)]
#[error("{message}\n[line {line}]")]
pub struct RuntimeError {
	/// Line of the operator token that failed.
	pub line:     usize,
	/// Lexeme of the operator token that failed.
	pub operator: String,
	/// What the operator expected of its operands.
	pub message:  &'static str,
}

impl RuntimeError {
	pub(crate) fn new(token: &Token<'_>, message: &'static str) -> Self {
		Self { line: token.line, operator: token.lexeme.to_string(), message }
	}
}
