//! A calculator over a single expression in a Lox-flavored syntax.
//!
//! One source string goes through three strictly sequential stages, each
//! handing a finished artifact to the next:
//!
//! 1. **Scanning** turns the characters into a flat token list, skipping
//!    whitespace and `//` comments, decoding number and string literals and
//!    recording the source line of every lexeme. Lexical errors are
//!    recorded and scanning continues.
//! 2. **Parsing** turns the token list into one expression tree along the
//!    usual precedence ladder: equality, comparison, term, factor, unary,
//!    primary. A syntax error unwinds the parse and yields no tree.
//! 3. **Evaluation** walks the tree bottom-up and computes one typed runtime
//!    value. An operand of the wrong type fails the run with a runtime
//!    error; nothing is coerced.
//!
//! Scan and parse errors from one run are collected in a [`Diagnostics`]
//! sink created for that run alone; the driver flushes them to stderr and
//! maps the outcome to a process exit code. The grammar is expressions only:
//! keywords such as `var`, `if` or `fun` are scanned into tokens so the
//! lexical layer is complete, but no grammar production consumes them.

pub mod cli;

mod calc;
mod error;
mod interpreter;
mod parser;
mod scanner;

pub use calc::Calc;
pub use error::{CalcError, Diagnostic, Diagnostics, ErrorLocation, RuntimeError};
