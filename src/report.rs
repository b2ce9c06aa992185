use crate::engine::{Derivation, Stage, Step};
use std::fmt;

const MEMBER: &str = "belongs to P(v)";
const REJECTED: &str = "Not a valid formula in P(v)";
const ACCEPTED: &str = "Therefore, this is a well-formed formula.";

impl Derivation {
	/// The textual proof, one entry per line.
	pub fn lines(&self) -> Vec<String> {
		let mut lines = Vec::new();

		if let Some(rejection) = self.rejection() {
			if rejection.stage == Stage::Precheck {
				lines.push(format!("Error: {}", rejection.error));
				lines.push(String::new());
				lines.push(REJECTED.to_string());
				return lines;
			}
		}

		for atom in &self.atoms {
			lines.push(format!("{} - atomic => {} {}", atom, atom, MEMBER));
		}
		if self.is_accepted() && self.steps.is_empty() {
			lines.push(String::new());
			lines.push(ACCEPTED.to_string());
			return lines;
		}

		lines.push(String::new());
		lines.push("Begin substitutions:".to_string());
		for step in &self.steps {
			lines.push(String::new());
			lines.push(format!("Current formula: {}", step.working()));
			match step {
				Step::Reduce(reduction) => {
					let form = reduction.form();
					lines.push(format!("Found principal operation {}", reduction.compound));
					match &reduction.left {
						Some(left) => lines.push(format!(
							"{}, {} belong to P(v) => {} {}",
							left, reduction.right, form, MEMBER
						)),
						None => lines.push(format!(
							"{} {} => {} {}",
							reduction.right, MEMBER, form, MEMBER
						)),
					}
					lines.push(format!(
						"not. {} := {} => {} {}",
						form, reduction.placeholder, reduction.placeholder, MEMBER
					));
				}
				Step::Unwrap { placeholder, .. } => {
					lines.push(format!("Removed redundant parentheses around {}", placeholder));
				}
			}
		}

		match &self.outcome {
			Ok(symbol) => {
				lines.push(String::new());
				lines.push(format!("Final result: {}", symbol));
				lines.push(String::new());
				lines.push("Reverse substitution:".to_string());
				lines.extend(self.reverse.iter().cloned());
				lines.push(String::new());
				lines.push(format!(
					"Since {} {} and following the substitutions backwards,",
					symbol, MEMBER
				));
				lines.push(format!("we can conclude that {} {}", self.formula, MEMBER));
				lines.push(ACCEPTED.to_string());
			}
			Err(rejection) => {
				match &rejection.stage {
					Stage::Scanning { working } => {
						lines.push(String::new());
						lines.push(format!("Current formula: {}", working));
					}
					Stage::Extracting { working, compound } => {
						lines.push(String::new());
						lines.push(format!("Current formula: {}", working));
						lines.push(format!("Found principal operation {}", compound));
					}
					Stage::Precheck => {}
				}
				lines.push(format!("Error: {}", rejection.error));
				lines.push(String::new());
				lines.push(REJECTED.to_string());
			}
		}
		lines
	}
}

impl fmt::Display for Derivation {
	fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
		write!(f, "{}", self.lines().join("\n"))
	}
}
