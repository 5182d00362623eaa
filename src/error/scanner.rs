use crate::error::{Diagnostic, ErrorLocation};

/// Scanner related errors
#[derive(thiserror::Error, Debug)]
pub enum ScannerError {
	/// Internal error, should never happen
	#[error("{0}")]
	InternalError(#[from] anyhow::Error),
	/// A lexical error at a known source line
	#[error(transparent)]
	ScanError(#[from] ScanError),
}

/// A specific lexical error with line number and type.
#[derive(thiserror::Error, Debug)]
#[error("line {line}: {type}")]
pub struct ScanError {
	/// The line number where the error occurred.
	line:   usize,
	/// The type of lexical error.
	r#type: ScanErrorType,
}

impl ScanError {
	pub fn new(line: usize, r#type: ScanErrorType) -> Self { Self { line, r#type } }
}

impl From<ScanError> for Diagnostic {
	fn from(error: ScanError) -> Self {
		Diagnostic::new(error.line, ErrorLocation::Source, error.r#type.to_string())
	}
}

/// Types of lexical errors.
#[derive(Debug)]
pub enum ScanErrorType {
	/// A character outside the lexical grammar.
	UnexpectedCharacter(char),
	/// A string literal the input ended inside of.
	UnterminatedString,
}

impl std::fmt::Display for ScanErrorType {
	fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
		use ScanErrorType::*;
		match self {
			UnexpectedCharacter(c) => {
				write!(f, "Unexpected character '{c}'.")
			}
			UnterminatedString => {
				write!(f, "Unterminated string.")
			}
		}
	}
}
