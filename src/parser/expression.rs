//! Expression AST nodes.
//!
//! An `Expression` is a tree structure representing code like `-123 *
//! (45.67)` as nested nodes. Every node exclusively owns its children: the
//! tree is acyclic, built once by the parser and never mutated, only walked.
//!
//! The `Display` impl is the canonical printer: a deterministic, fully
//! parenthesized prefix rendering such as `(* (- 123) (group 45.67))`. It
//! exists for debugging and as golden output in the parser tests; it plays
//! no part in evaluation.

use Expression::*;
use LiteralValue::*;

use crate::scanner::Token;

/// Expression AST nodes
#[derive(Debug)]
pub(crate) enum Expression<'a> {
	Literal(LiteralValue<'a>),
	Unary { operator: Token<'a>, right: Box<Expression<'a>> },
	Binary { left: Box<Expression<'a>>, operator: Token<'a>, right: Box<Expression<'a>> },
	Grouping(Box<Expression<'a>>),
}

impl<'a> Expression<'a> {
	pub fn unary(operator: Token<'a>, right: Box<Self>) -> Box<Self> { Box::new(Unary { operator, right }) }

	pub fn binary(left: Box<Self>, operator: Token<'a>, right: Box<Self>) -> Box<Self> {
		Box::new(Binary { left, operator, right })
	}

	pub fn grouping(expression: Box<Self>) -> Box<Self> { Box::new(Grouping(expression)) }
}

/// Literal values in the AST
#[derive(Debug)]
pub(crate) enum LiteralValue<'a> {
	Number(f64),
	StringLiteral(&'a str),
	Boolean(bool),
	Nil,
}

impl<'a> TryFrom<Token<'a>> for Expression<'a> {
	type Error = anyhow::Error;

	fn try_from(token: Token<'a>) -> Result<Self, Self::Error> {
		use crate::scanner::TokenType as T;

		Ok(match token.r#type {
			T::NumberLiteral(n) => Literal(Number(n)),
			T::StringLiteral(s) => Literal(StringLiteral(s)),
			T::True => Literal(Boolean(true)),
			T::False => Literal(Boolean(false)),
			T::Nil => Literal(Nil),
			_ => anyhow::bail!("Cannot convert token {token:?} to Expression::Literal"),
		})
	}
}

impl std::fmt::Display for Expression<'_> {
	fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
		match self {
			Literal(literal) => write!(f, "{literal}"),
			Unary { operator, right } => write!(f, "({} {right})", operator.lexeme),
			Binary { left, operator, right } => write!(f, "({} {left} {right})", operator.lexeme),
			Grouping(expression) => write!(f, "(group {expression})"),
		}
	}
}

impl std::fmt::Display for LiteralValue<'_> {
	fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
		match self {
			Number(n) => write!(f, "{n}"),
			StringLiteral(s) => write!(f, "\"{s}\""),
			Boolean(b) => write!(f, "{b}"),
			Nil => write!(f, "nil"),
		}
	}
}
