use std::{fs::read_to_string, io::Write, path::Path};

use anyhow::Context;

use crate::{error::{CalcError, Diagnostics}, interpreter::Interpreter, parser::Parser, scanner::Scanner};

/// Calc wires the scanner, parser and interpreter into one pipeline.
///
/// Every call to [`Calc::run`] builds the whole pipeline from scratch: a
/// fresh diagnostics sink and a fresh interpreter per source string. Nothing
/// survives from one run to the next, so one bad prompt line cannot taint
/// the next one.
pub struct Calc;

impl Calc {
	/// Run one source file through the pipeline.
	pub fn run_file<P: AsRef<Path>>(&self, path: P) -> Result<(), CalcError> {
		let source = read_to_string(path).context("Failed open source file")?;
		self.run(&source)
	}

	/// Run the interactive prompt, one expression per line.
	///
	/// A blank line or end of input ends the session. Errors on one line are
	/// reported and the next line starts clean.
	pub fn run_prompt(&self) {
		let mut input = String::new();
		let stdin = std::io::stdin();
		loop {
			input.clear();
			print!("> ");
			if let Err(e) = std::io::stdout().flush() {
				eprintln!("Failed flush: {e}");
			}
			match stdin.read_line(&mut input) {
				Ok(0) => break,
				Ok(_) => {}
				Err(e) => {
					eprintln!("Failed read line: {e}");
					continue;
				}
			}
			let line = input.trim();
			if line.is_empty() {
				break;
			}
			if let Err(e) = self.run(line) {
				eprintln!("{e}");
			}
		}
	}

	/// Run one source string through scanner, parser and interpreter.
	///
	/// Diagnostics go to stderr; the evaluated value goes to stdout. Any
	/// recorded scan or parse diagnostic fails the run with
	/// [`CalcError::StaticErrors`] before evaluation starts.
	pub fn run(&self, source: &str) -> Result<(), CalcError> {
		let mut diagnostics = Diagnostics::new();
		let tokens = Scanner::new(source, &mut diagnostics).scan_tokens()?;
		let expression = Parser::new(tokens, &mut diagnostics).parse()?;

		for diagnostic in diagnostics.entries() {
			eprintln!("{diagnostic}");
		}
		if diagnostics.had_error() {
			return Err(CalcError::StaticErrors(diagnostics.len()));
		}

		// A clean sink means the parser produced a tree.
		let expression = expression.context("parser produced no expression and no diagnostic")?;
		let value = Interpreter.evaluate(&expression)?;
		println!("{value}");

		Ok(())
	}
}
