//! Lexical analysis: raw source text to tokens.
//!
//! The scanner walks the source left to right with maximal munch: when a
//! lexeme could extend by one more character, it does. At the point a lexeme
//! is recognized we also remember which kind it is, and for number and
//! string literals we decode the runtime value right away so later stages
//! never reparse text.
//!
//! Lexical errors never stop the scan. An unexpected character or an
//! unterminated string is reported to the injected `Diagnostics` sink, no
//! token is emitted for the bad input, and the scanner moves on to the next
//! character, so one stray byte still lets the rest of the line produce
//! tokens. The driver decides afterwards whether the run as a whole failed.
mod token;

use std::{iter::Peekable, str::CharIndices};

use TokenType::*;
use anyhow::Context;
pub(crate) use token::*;

use crate::error::{CalcError, Diagnostics, scanner::{ScanError, ScanErrorType, ScannerError}};

/// A scanner for expression source code
pub(crate) struct Scanner<'a, 'd> {
	/// User input source code
	source:      &'a str,
	/// User input source code iterator
	source_iter: Peekable<CharIndices<'a>>,
	/// Points at the beginning of the current lexeme
	start:       usize,
	/// Points at the character currently being considered
	cursor:      usize,
	/// Tracks what source line the cursor is on so we can produce tokens that know
	/// their location.
	line:        usize,
	/// Per-run sink lexical errors are reported into
	diagnostics: &'d mut Diagnostics,
}

impl<'a, 'd> Scanner<'a, 'd> {
	pub fn new(source: &'a str, diagnostics: &'d mut Diagnostics) -> Self {
		let source_iter = source.char_indices().peekable();

		Self { source, source_iter, start: 0, cursor: 0, line: 1, diagnostics }
	}

	/// Scan all tokens from the source code, terminated by exactly one `Eof`.
	pub fn scan_tokens(&mut self) -> Result<Vec<Token<'a>>, CalcError> {
		let mut tokens = Vec::new();
		while let Some(&(index, _)) = self.source_iter.peek() {
			// We are at the beginning of the next lexeme.
			self.start = index;
			self.cursor = self.start;
			match self.scan_token(&mut tokens) {
				Err(ScannerError::ScanError(e)) => self.diagnostics.report(e.into()),
				Err(ScannerError::InternalError(e)) => return Err(e.into()),
				Ok(()) => {}
			}
		}
		tokens.push(Token::new(Eof, "", self.line));
		Ok(tokens)
	}

	/// Scan a single token from the source code
	fn scan_token(&mut self, tokens: &mut Vec<Token<'a>>) -> Result<(), ScannerError> {
		let next_char = self.advance().context("Unexpected EOF")?;
		#[rustfmt::skip]
		let r#type = match next_char {
			'(' => LeftParen,
			')' => RightParen,
			'{' => LeftBrace,
			'}' => RightBrace,
			',' => Comma,
			'.' => Dot,
			'-' => Minus,
			'+' => Plus,
			';' => Semicolon,
			'*' => Star,
			'!' => if self.match_next('=') { BangEqual } else { Bang },
			'=' => if self.match_next('=') { EqualEqual } else { Equal },
			'<' => if self.match_next('=') { LessEqual } else { Less },
			'>' => if self.match_next('=') { GreaterEqual } else { Greater },
            '/' => if self.match_next('/') {
                while self.peek().is_some_and(|c| c != '\n') { self.advance(); }
                Comment
            } else { Slash },
            ' ' | '\r' | '\t' => EmptyChar,
            '\n' => { self.line += 1; NewLine }
            '"' => self.string()?,
            c if c.is_ascii_digit() => self.number()?,
            c if c.is_ascii_alphabetic() || c == '_' => self.identifier(),
            _ => return Err(ScanError::new(self.line, ScanErrorType::UnexpectedCharacter(next_char)).into()),
		};

		if !r#type.is_ignored() {
			let lexeme = &self.source[self.start..self.cursor];
			tokens.push(Token::new(r#type, lexeme, self.line));
		}

		Ok(())
	}

	/// Match the next character if it is the expected one
	fn match_next(&mut self, expected: char) -> bool {
		matches!(self.peek(), Some(c) if c == expected && { self.advance(); true })
	}

	/// Advance to the next character
	fn advance(&mut self) -> Option<char> {
		let (i, c) = self.source_iter.next()?;
		self.cursor = i + c.len_utf8();
		Some(c)
	}

	/// Peek the current character
	fn peek(&mut self) -> Option<char> { self.source_iter.peek().map(|&(_, c)| c) }

	/// Peek the second character ahead
	fn peek_second(&mut self) -> Option<char> {
		let mut it = self.source_iter.clone();
		it.next()?; // skip the character under peek
		it.peek().map(|&(_, c)| c)
	}

	/// Scan a string literal; embedded newlines are allowed and counted.
	fn string(&mut self) -> Result<TokenType<'a>, ScannerError> {
		while let Some(c) = self.peek() {
			if c == '"' {
				break;
			}
			if c == '\n' {
				self.line += 1
			}
			self.advance();
		}

		// Input ended before the closing quote: no token, the error is all
		// that comes out of this literal.
		self.peek().ok_or_else(|| ScanError::new(self.line, ScanErrorType::UnterminatedString))?;
		self.advance(); // The closing "
		let value = &self.source[self.start + 1..self.cursor - 1];
		Ok(StringLiteral(value))
	}

	/// Scan a number literal
	fn number(&mut self) -> Result<TokenType<'a>, ScannerError> {
		while self.peek().is_some_and(|c| c.is_ascii_digit()) {
			self.advance();
		}

		// Look for a fractional part; a trailing `1.` is a number then a dot.
		if self.peek() == Some('.') && self.peek_second().is_some_and(|c| c.is_ascii_digit()) {
			self.advance(); // consume '.'
			while self.peek().is_some_and(|c| c.is_ascii_digit()) {
				self.advance();
			}
		}

		let s = &self.source[self.start..self.cursor];
		Ok(NumberLiteral(s.parse().context("Failed to parse number literal")?))
	}

	/// Scan an identifier or keyword
	fn identifier(&mut self) -> TokenType<'a> {
		while self.peek().is_some_and(|c| c.is_ascii_alphanumeric() || c == '_') {
			self.advance();
		}
		let text = &self.source[self.start..self.cursor];
		TokenType::keyword_or_identifier(text)
	}
}

#[cfg(test)]
mod tests {
	use std::f64::consts::PI;

	use super::*;

	fn scan(input: &str, errors: usize) {
		let mut diagnostics = Diagnostics::new();
		let mut scanner = Scanner::new(input, &mut diagnostics);
		scanner.scan_tokens().unwrap();
		assert_eq!(diagnostics.len(), errors, "input: {input:?}");
	}

	#[test]
	fn scan_tokens_basic() {
		scan("", 0);
		scan("(", 0);
		scan("(){}", 0);
		scan(" ( ) ", 0);
		scan("@", 1);
		scan("你好", 2);
		scan(r#""世界""#, 0);
		scan("12345", 0);
		scan(
			r#"
            Multi
            Line
                tokens
            "#,
			0,
		);
		scan(r#"// Comment"#, 0);
		scan("user", 0);
		scan("return", 0);
	}

	#[test]
	fn scan_operators() {
		scan("!", 0);
		scan("!=", 0);
		scan("=", 0);
		scan("==", 0);
		scan("<", 0);
		scan("<=", 0);
		scan(">", 0);
		scan(">=", 0);
		scan("-", 0);
		scan("+", 0);
		scan("*", 0);
		scan("/", 0);
		scan(";", 0);
		scan(",", 0);
		scan(".", 0);
	}

	#[test]
	fn scan_numbers() {
		scan("0", 0);
		scan("42", 0);
		scan("3.14", 0);
		scan("0.5", 0);
		scan("123.456", 0);
		scan("1.", 0);
		scan(".5", 0);
	}

	#[test]
	fn scan_strings() {
		scan(r#""""#, 0);
		scan(r#""hello""#, 0);
		scan(r#""hello world""#, 0);
		scan(r#""unterminated"#, 1);
	}

	#[test]
	fn scan_keywords() {
		scan("and", 0);
		scan("class", 0);
		scan("else", 0);
		scan("false", 0);
		scan("for", 0);
		scan("fun", 0);
		scan("if", 0);
		scan("nil", 0);
		scan("or", 0);
		scan("print", 0);
		scan("return", 0);
		scan("super", 0);
		scan("this", 0);
		scan("true", 0);
		scan("var", 0);
		scan("while", 0);
	}

	#[test]
	fn scan_identifiers() {
		scan("x", 0);
		scan("_name", 0);
		scan("myVariable123", 0);
		scan("snake_case", 0);
		scan("CamelCase", 0);
		scan("and123", 0);
	}

	#[test]
	fn scan_comments() {
		scan("// single line comment", 0);
		scan("// comment with ()[]{}", 0);
		scan("1 + 2 // trailing comment", 0);
	}

	#[test]
	fn scan_whitespace() {
		scan(" ", 0);
		scan("\t", 0);
		scan("\r", 0);
		scan("\n", 0);
		scan("  \t\r\n  ", 0);
	}

	#[test]
	fn scan_multiple_tokens() {
		let mut diagnostics = Diagnostics::new();
		let mut scanner = Scanner::new("1 + 2", &mut diagnostics);
		let tokens = scanner.scan_tokens().unwrap();
		assert_eq!(tokens.len(), 4);
		assert_eq!(tokens[0].r#type, NumberLiteral(1.0));
		assert_eq!(tokens[1].r#type, Plus);
		assert_eq!(tokens[2].r#type, NumberLiteral(2.0));
		assert_eq!(tokens[3].r#type, Eof);
	}

	#[test]
	fn scan_past_unexpected_character() {
		let mut diagnostics = Diagnostics::new();
		let mut scanner = Scanner::new("# 1 + 2", &mut diagnostics);
		let tokens = scanner.scan_tokens().unwrap();
		// The stray character is reported and the rest of the line still
		// scans into tokens.
		assert_eq!(diagnostics.len(), 1);
		assert_eq!(diagnostics.entries().next().unwrap().to_string(), "[line 1] Error: Unexpected character '#'.");
		assert_eq!(tokens.len(), 4);
		assert_eq!(tokens[0].r#type, NumberLiteral(1.0));
	}

	#[test]
	fn scan_unterminated_string_emits_no_token() {
		let mut diagnostics = Diagnostics::new();
		let mut scanner = Scanner::new("\"abc", &mut diagnostics);
		let tokens = scanner.scan_tokens().unwrap();
		assert_eq!(diagnostics.len(), 1);
		assert_eq!(diagnostics.entries().next().unwrap().to_string(), "[line 1] Error: Unterminated string.");
		assert_eq!(tokens.len(), 1);
		assert_eq!(tokens[0].r#type, Eof);
	}

	#[test]
	fn scan_string_with_newlines() {
		let mut diagnostics = Diagnostics::new();
		let mut scanner = Scanner::new(
			r#""hello
world""#,
			&mut diagnostics,
		);
		let tokens = scanner.scan_tokens().unwrap();
		assert_eq!(tokens[0].r#type, StringLiteral("hello\nworld"));
		// The token is tagged with the line the literal ends on.
		assert_eq!(tokens[0].line, 2);
	}

	#[test]
	fn scan_lines_are_monotonic() {
		let mut diagnostics = Diagnostics::new();
		let mut scanner = Scanner::new("1 +\n2 *\n3", &mut diagnostics);
		let tokens = scanner.scan_tokens().unwrap();
		let lines: Vec<usize> = tokens.iter().map(|t| t.line).collect();
		assert_eq!(lines, vec![1, 1, 2, 2, 3, 3]);
	}

	#[test]
	fn scan_number_precision() {
		let mut diagnostics = Diagnostics::new();
		let mut scanner = Scanner::new("3.14159265358979323846264338327950288", &mut diagnostics);
		let tokens = scanner.scan_tokens().unwrap();
		assert_eq!(tokens[0].r#type, NumberLiteral(PI));
	}
}
