use crate::error::{Diagnostic, ErrorLocation};

/// Parser related errors
#[derive(thiserror::Error, Debug)]
pub enum ParserError {
	/// Internal error, should never happen
	#[error("{0}")]
	InternalError(#[from] anyhow::Error),
	/// A syntax error tied to a token
	#[error(transparent)]
	ParseError(#[from] ParseError),
}

/// A specific syntax error, located at the token the parser was looking at.
#[derive(thiserror::Error, Debug)]
#[error("line {line}{location}: {type}")]
pub struct ParseError {
	line:     usize,
	location: ErrorLocation,
	r#type:   ParseErrorType,
}

impl ParseError {
	pub fn new(line: usize, location: ErrorLocation, r#type: ParseErrorType) -> Self {
		Self { line, location, r#type }
	}
}

impl From<&ParseError> for Diagnostic {
	fn from(error: &ParseError) -> Self {
		Diagnostic::new(error.line, error.location.clone(), error.r#type.to_string())
	}
}

/// Types of syntax errors.
#[derive(Debug)]
pub enum ParseErrorType {
	/// No valid primary token where an operand is required.
	ExpectedExpression,
	/// A parenthesized group missing its closing `)`.
	ExpectedRightParen,
}

impl std::fmt::Display for ParseErrorType {
	fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
		use ParseErrorType::*;
		match self {
			ExpectedExpression => {
				write!(f, "Expect expression.")
			}
			ExpectedRightParen => {
				write!(f, "Expect ')' after expression.")
			}
		}
	}
}
