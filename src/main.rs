use std::fs;
use std::path::{Path, PathBuf};
use std::process::ExitCode;

use anyhow::{Context, Result};
use clap::Parser;
use tracing_subscriber::{fmt, EnvFilter};

use wffsolver::{analyze, DEMO_FORMULAS};

#[derive(Parser)]
#[command(name = "wffsolver")]
#[command(about = "Check propositional formulas for well-formedness", version)]
struct Cli {
	/// Formulas to check; the built-in problems run when none are given
	formulas: Vec<String>,

	/// Read formulas from a file, one per line
	#[arg(short, long)]
	file: Option<PathBuf>,

	/// Print the syntax tree of every accepted formula
	#[arg(long)]
	tree: bool,

	/// Verbose output
	#[arg(short, long)]
	verbose: bool,
}

fn read_formulas(path: &Path) -> Result<Vec<String>> {
	let text = fs::read_to_string(path)
		.with_context(|| format!("failed to read {}", path.display()))?;
	Ok(text
		.lines()
		.map(str::trim)
		.filter(|line| !line.is_empty() && !line.starts_with('#'))
		.map(str::to_string)
		.collect())
}

fn main() -> Result<ExitCode> {
	let cli = Cli::parse();

	let default_level = if cli.verbose { "debug" } else { "warn" };
	fmt()
		.with_env_filter(
			EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level)),
		)
		.with_writer(std::io::stderr)
		.init();

	let mut formulas = cli.formulas.clone();
	if let Some(path) = &cli.file {
		formulas.extend(read_formulas(path)?);
	}
	if formulas.is_empty() {
		formulas = DEMO_FORMULAS.iter().map(|formula| formula.to_string()).collect();
	}

	let mut all_accepted = true;
	for (n, formula) in formulas.iter().enumerate() {
		println!();
		println!("Problem {}: {}", n + 1, formula);
		let derivation = analyze(formula);
		println!("{}", derivation);
		if let (true, Some(tree)) = (cli.tree, derivation.tree()) {
			println!();
			println!("Syntax tree: {}", tree);
		}
		all_accepted &= derivation.is_accepted();
		println!("{}", "-".repeat(75));
	}

	Ok(if all_accepted { ExitCode::SUCCESS } else { ExitCode::FAILURE })
}
