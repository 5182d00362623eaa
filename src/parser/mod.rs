//! Syntactic analysis: tokens to one expression tree.
//!
//! The scanner works over a lexical grammar whose alphabet is characters;
//! the parser works over a syntactic grammar whose alphabet is tokens. Each
//! grammar rule below is a method. A rule parses one operand at the
//! next-higher precedence, then folds matching operators and fresh right
//! operands into a left-leaning tree, so `a - b - c` parses as
//! `(a - b) - c` and looser operators always wrap tighter ones. `unary` is
//! the one right-recursive rule: `!!x` nests.
//!
//! |Name|Operators|Associates
//! --|--|--
//! Equality|== !=|Left
//! Comparison|< > <= >=|Left
//! Term|+ -|Left
//! Factor|* /|Left
//! Unary|! -|Right
//!
//! Expression grammar:
//!
//! ``` BNF
//! expression     → equality ;
//! equality       → comparison ( ( "!=" | "==" ) comparison )* ;
//! comparison     → term ( ( ">" | ">=" | "<" | "<=" ) term )* ;
//! term           → factor ( ( "-" | "+" ) factor )* ;
//! factor         → unary ( ( "/" | "*" ) unary )* ;
//! unary          → ( "!" | "-" ) unary | primary ;
//! primary        → NUMBER | STRING | "true" | "false" | "nil" | "(" expression ")" ;
//! ```
//!
//! A syntax error unwinds the whole parse. Each rule returns a `Result`, the
//! error is reported to the injected sink at the point of discovery, and
//! [`Parser::parse`] turns the unwind into "no expression produced". There
//! is no partial-result recovery: one syntax error fails the whole input.

pub(crate) mod expression;

use std::{iter::Peekable, vec::IntoIter};

use TokenType::*;
use anyhow::anyhow;

use crate::{error::{CalcError, Diagnostics, ErrorLocation, parser::{ParseError, ParseErrorType, ParserError}}, parser::expression::Expression, scanner::{Token, TokenType}};

/// A recursive-descent parser over one token stream.
pub(crate) struct Parser<'a, 'd> {
	/// The tokens to parse.
	tokens:      Peekable<IntoIter<Token<'a>>>,
	/// Per-run sink syntax errors are reported into.
	diagnostics: &'d mut Diagnostics,
}

impl<'a, 'd> Parser<'a, 'd> {
	pub fn new(tokens: Vec<Token<'a>>, diagnostics: &'d mut Diagnostics) -> Self {
		Self { tokens: tokens.into_iter().peekable(), diagnostics }
	}

	/// Parse one expression covering the input.
	///
	/// `Ok(None)` means a syntax error was found; it has already been
	/// reported to the sink.
	pub fn parse(mut self) -> Result<Option<Box<Expression<'a>>>, CalcError> {
		match self.expression() {
			Ok(expression) => Ok(Some(expression)),
			// Reported at the point of discovery, nothing more to add here.
			Err(ParserError::ParseError(_)) => Ok(None),
			Err(ParserError::InternalError(e)) => Err(e.into()),
		}
	}

	fn expression(&mut self) -> Result<Box<Expression<'a>>, ParserError> { self.equality() }

	/// Parse equality expressions.
	fn equality(&mut self) -> Result<Box<Expression<'a>>, ParserError> {
		let mut expression = self.comparison()?;
		while matches!(self.peek()?.r#type, BangEqual | EqualEqual) {
			expression = Expression::binary(expression, self.advance()?, self.comparison()?)
		}
		Ok(expression)
	}

	/// Parse comparison expressions.
	fn comparison(&mut self) -> Result<Box<Expression<'a>>, ParserError> {
		let mut expression = self.term()?;
		while matches!(self.peek()?.r#type, Greater | GreaterEqual | Less | LessEqual) {
			expression = Expression::binary(expression, self.advance()?, self.term()?)
		}
		Ok(expression)
	}

	/// Parse term expressions.
	fn term(&mut self) -> Result<Box<Expression<'a>>, ParserError> {
		let mut expression = self.factor()?;
		while matches!(self.peek()?.r#type, Minus | Plus) {
			expression = Expression::binary(expression, self.advance()?, self.factor()?)
		}
		Ok(expression)
	}

	/// Parse factor expressions.
	fn factor(&mut self) -> Result<Box<Expression<'a>>, ParserError> {
		let mut expression = self.unary()?;
		while matches!(self.peek()?.r#type, Slash | Star) {
			expression = Expression::binary(expression, self.advance()?, self.unary()?)
		}
		Ok(expression)
	}

	/// Parse unary expressions.
	fn unary(&mut self) -> Result<Box<Expression<'a>>, ParserError> {
		if matches!(self.peek()?.r#type, Bang | Minus) {
			return Ok(Expression::unary(self.advance()?, self.unary()?));
		}
		self.primary()
	}

	/// Parse primary expressions.
	fn primary(&mut self) -> Result<Box<Expression<'a>>, ParserError> {
		let token = self.peek()?;
		match &token.r#type {
			False | True | Nil | NumberLiteral(_) | StringLiteral(_) => {
				let token = self.advance()?;
				Ok(Box::new(token.try_into()?))
			}
			LeftParen => {
				self.advance()?; // consume '('
				let expression = self.expression()?;

				if !matches!(self.peek()?.r#type, RightParen) {
					return Err(self.error_at_cursor(ParseErrorType::ExpectedRightParen)?.into());
				}
				self.advance()?; // consume ')'

				Ok(Expression::grouping(expression))
			}
			_ => Err(self.error_at_cursor(ParseErrorType::ExpectedExpression)?.into()),
		}
	}

	/// Build a syntax error located at the token under the cursor and report
	/// it to the sink.
	fn error_at_cursor(&mut self, r#type: ParseErrorType) -> Result<ParseError, ParserError> {
		let (line, location) = {
			let token = self.peek()?;
			let location = match token.r#type {
				Eof => ErrorLocation::End,
				_ => ErrorLocation::Token(token.lexeme.to_string()),
			};
			(token.line, location)
		};
		let error = ParseError::new(line, location, r#type);
		self.diagnostics.report((&error).into());
		Ok(error)
	}

	/// Advance to the next token.
	fn advance(&mut self) -> Result<Token<'a>, ParserError> {
		self.tokens.next().ok_or_else(|| anyhow!("Unexpected EOF").into())
	}

	/// Peek at the current token.
	fn peek(&mut self) -> Result<&Token<'a>, ParserError> {
		self.tokens.peek().ok_or_else(|| anyhow!("Unexpected EOF").into())
	}
}

#[cfg(test)]
mod tests {
	use super::*;
	use crate::scanner::Scanner;

	fn parse(input: &str, equals: &str) {
		let mut diagnostics = Diagnostics::new();
		let tokens = Scanner::new(input, &mut diagnostics).scan_tokens().unwrap();
		let ast = Parser::new(tokens, &mut diagnostics).parse().unwrap().unwrap();
		assert!(!diagnostics.had_error());
		assert_eq!(ast.to_string(), equals);
	}

	fn parse_fails(input: &str, diagnostic: &str) {
		let mut diagnostics = Diagnostics::new();
		let tokens = Scanner::new(input, &mut diagnostics).scan_tokens().unwrap();
		let ast = Parser::new(tokens, &mut diagnostics).parse().unwrap();
		assert!(ast.is_none());
		let rendered: Vec<String> = diagnostics.entries().map(ToString::to_string).collect();
		assert!(rendered.iter().any(|r| r == diagnostic), "wanted {diagnostic:?} in {rendered:?}");
	}

	#[test]
	fn parse_expressions() {
		parse("3 + 4 * (-2 - 1)", "(+ 3 (* 4 (group (- (- 2) 1))))");
		parse("1 + 2 * 3 / 4 - 5", "(- (+ 1 (/ (* 2 3) 4)) 5)");
		parse("8 + 800.3 * 123 / 65 - (2 + 3)", "(- (+ 8 (/ (* 800.3 123) 65)) (group (+ 2 3)))");
	}

	#[test]
	fn parse_comparison() {
		parse("1 < 2", "(< 1 2)");
		parse("1 <= 2", "(<= 1 2)");
		parse("1 > 2", "(> 1 2)");
		parse("1 >= 2", "(>= 1 2)");
		parse("1 < 2 < 3", "(< (< 1 2) 3)");
	}

	#[test]
	fn parse_equality() {
		parse("1 == 2", "(== 1 2)");
		parse("1 != 2", "(!= 1 2)");
		parse("1 == 2 == 3", "(== (== 1 2) 3)");
		parse("1 != 2 == 3", "(== (!= 1 2) 3)");
	}

	#[test]
	fn parse_unary() {
		parse("-123", "(- 123)");
		parse("!true", "(! true)");
		parse("-(-123)", "(- (group (- 123)))");
		parse("!!true", "(! (! true))");
		parse("-1 + 2", "(+ (- 1) 2)");
	}

	#[test]
	fn parse_literals() {
		parse("42", "42");
		parse("3.14", "3.14");
		parse("\"hello\"", "\"hello\"");
		parse("true", "true");
		parse("false", "false");
		parse("nil", "nil");
	}

	#[test]
	fn parse_grouping() {
		parse("(1 + 2) * 3", "(* (group (+ 1 2)) 3)");
		parse("1 * (2 + 3)", "(* 1 (group (+ 2 3)))");
		parse("((1))", "(group (group 1))");
	}

	#[test]
	fn parse_complex() {
		parse("1 + 2 == 3", "(== (+ 1 2) 3)");
		parse("1 + 2 != 3 - 4", "(!= (+ 1 2) (- 3 4))");
		parse("!(1 < 2)", "(! (group (< 1 2)))");
		parse("-(1 + 2)", "(- (group (+ 1 2)))");
		parse("1 + 2 * 3 < 4 - 5 / 6", "(< (+ 1 (* 2 3)) (- 4 (/ 5 6)))");
	}

	#[test]
	fn parse_errors() {
		parse_fails("", "[line 1] Error at end: Expect expression.");
		parse_fails("(1 +", "[line 1] Error at end: Expect expression.");
		parse_fails("(1 + 2", "[line 1] Error at end: Expect ')' after expression.");
		parse_fails(")", "[line 1] Error at ')': Expect expression.");
		parse_fails("1 + * 2", "[line 1] Error at '*': Expect expression.");
		parse_fails("1 +\n+ 2", "[line 2] Error at '+': Expect expression.");
	}

	#[test]
	fn printing_distinguishes_structures() {
		// Same operands, different shapes and operators must never render
		// the same way.
		let mut outputs = std::collections::HashSet::new();
		for input in ["1 + 2", "1 - 2", "1 + -2", "(1 + 2)", "1 + 2 + 3", "1 + (2 + 3)", "!1", "-1"] {
			let mut diagnostics = Diagnostics::new();
			let tokens = Scanner::new(input, &mut diagnostics).scan_tokens().unwrap();
			let ast = Parser::new(tokens, &mut diagnostics).parse().unwrap().unwrap();
			assert!(outputs.insert(ast.to_string()), "duplicate rendering for {input:?}");
		}
	}
}
