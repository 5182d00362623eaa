use std::path::PathBuf;

use palc::Parser;

#[derive(Parser)]
#[command(name = "loxcalc", after_long_help = "Evaluates one expression from a script file or from stdin.")]
pub struct Cli {
	/// Script to evaluate; with no script, one expression is read per stdin
	/// line until a blank line. More than one script is a usage error.
	pub scripts: Vec<PathBuf>,
}
