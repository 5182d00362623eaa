pub mod interpreter;
pub mod parser;
pub mod scanner;

pub use interpreter::RuntimeError;

/// CalcError is the top-level error type for the calculator pipeline.
#[derive(thiserror::Error, Debug)]
pub enum CalcError {
	/// Internal error, should never happen
	#[error("InternalError: {0}")]
	InternalError(#[from] anyhow::Error),
	/// Scan or parse diagnostics were recorded during the run
	#[error("Generated {0} static errors")]
	StaticErrors(usize),
	/// Runtime error encountered during evaluation
	#[error(transparent)]
	RuntimeError(#[from] RuntimeError),
}

/// Where a diagnostic points within the input.
#[derive(Debug, Clone, PartialEq)]
pub enum ErrorLocation {
	/// A raw source position, no token context.
	Source,
	/// The end of the input.
	End,
	/// A specific token, identified by its lexeme.
	Token(String),
}

impl std::fmt::Display for ErrorLocation {
	fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
		match self {
			ErrorLocation::Source => Ok(()),
			ErrorLocation::End => write!(f, " at end"),
			ErrorLocation::Token(lexeme) => write!(f, " at '{lexeme}'"),
		}
	}
}

/// A single recorded scan or parse error.
#[derive(Debug, Clone, PartialEq)]
pub struct Diagnostic {
	line:     usize,
	location: ErrorLocation,
	message:  String,
}

impl Diagnostic {
	pub fn new(line: usize, location: ErrorLocation, message: String) -> Self { Self { line, location, message } }

	pub fn line(&self) -> usize { self.line }

	pub fn message(&self) -> &str { &self.message }
}

impl std::fmt::Display for Diagnostic {
	fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
		write!(f, "[line {}] Error{}: {}", self.line, self.location, self.message)
	}
}

/// Per-run sink for scan and parse diagnostics.
///
/// A fresh sink is built for every pipeline invocation and handed to the
/// scanner and the parser in turn; nothing recorded for one source string
/// ever leaks into the next.
#[derive(Debug, Default)]
pub struct Diagnostics {
	entries: Vec<Diagnostic>,
}

impl Diagnostics {
	pub fn new() -> Self { Self::default() }

	/// Record one diagnostic.
	pub fn report(&mut self, diagnostic: Diagnostic) { self.entries.push(diagnostic); }

	pub fn had_error(&self) -> bool { !self.entries.is_empty() }

	pub fn len(&self) -> usize { self.entries.len() }

	pub fn is_empty(&self) -> bool { self.entries.is_empty() }

	pub fn entries(&self) -> impl Iterator<Item = &Diagnostic> { self.entries.iter() }
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn diagnostic_rendering() {
		let plain = Diagnostic::new(3, ErrorLocation::Source, "Unexpected character '#'.".to_string());
		assert_eq!(plain.to_string(), "[line 3] Error: Unexpected character '#'.");

		let at_end = Diagnostic::new(1, ErrorLocation::End, "Expect expression.".to_string());
		assert_eq!(at_end.to_string(), "[line 1] Error at end: Expect expression.");

		let at_token = Diagnostic::new(2, ErrorLocation::Token(")".to_string()), "Expect expression.".to_string());
		assert_eq!(at_token.to_string(), "[line 2] Error at ')': Expect expression.");
	}

	#[test]
	fn sink_is_append_only() {
		let mut diagnostics = Diagnostics::new();
		assert!(!diagnostics.had_error());
		assert!(diagnostics.is_empty());

		diagnostics.report(Diagnostic::new(1, ErrorLocation::Source, "Unterminated string.".to_string()));
		assert!(diagnostics.had_error());
		assert_eq!(diagnostics.len(), 1);
		assert_eq!(diagnostics.entries().next().unwrap().line(), 1);
	}
}
