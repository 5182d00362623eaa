use std::process::exit;

use loxcalc::{Calc, CalcError, cli::Cli};
use palc::Parser;

fn main() {
	let calc = Calc;

	match Cli::parse().scripts.as_slice() {
		[] => calc.run_prompt(),
		[path] => {
			if let Err(e) = calc.run_file(path) {
				match e {
					// Diagnostics already went to stderr during the run.
					CalcError::StaticErrors(_) => exit(65),
					CalcError::RuntimeError(error) => {
						eprintln!("{error}");
						exit(70);
					}
					CalcError::InternalError(error) => {
						eprintln!("{error}");
						exit(1);
					}
				}
			}
		}
		_ => {
			eprintln!("Usage: loxcalc [script]");
			exit(64);
		}
	}
}
