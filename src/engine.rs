use crate::error::WffError;
use crate::extractor::extract_components;
use crate::grammar::{is_atomic, parentheses_balanced, strip_enclosing, Connective};
use crate::normalizer::{self, Lexeme};
use crate::prop_tree::{LexicalUnit, PropTree};
use crate::scanner::find_first_basic_compound;
use std::collections::{HashMap, VecDeque};
use tracing::{debug, error, info, warn};

/// One compound collapsed into a fresh placeholder.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Reduction {
	/// Working formula before the substitution.
	pub working: String,
	pub compound: String,
	pub connective: Connective,
	pub left: Option<String>,
	pub right: String,
	pub placeholder: String,
}

impl Reduction {
	/// The compound rebuilt from its connective and operand text.
	pub fn form(&self) -> String {
		match &self.left {
			Some(left) => format!("({}{}{})", left, self.connective, self.right),
			None => format!("({}{})", self.connective, self.right),
		}
	}
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Step {
	Reduce(Reduction),
	/// `(Xn)` around a placeholder minted earlier in the same run.
	Unwrap { working: String, placeholder: String },
}

impl Step {
	pub fn working(&self) -> &str {
		match self {
			Step::Reduce(reduction) => &reduction.working,
			Step::Unwrap { working, .. } => working,
		}
	}
}

/// Where in the pipeline a formula was turned away.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Stage {
	/// Before any atom is recorded: empty input, stray symbols, unbalanced
	/// or redundant parentheses.
	Precheck,
	Scanning { working: String },
	Extracting { working: String, compound: String },
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Rejection {
	pub stage: Stage,
	pub error: WffError,
}

/// Everything recorded while checking one formula.
#[derive(Clone, Debug)]
pub struct Derivation {
	pub(crate) formula: String,
	pub(crate) atoms: Vec<String>,
	pub(crate) steps: Vec<Step>,
	pub(crate) substitutions: HashMap<String, String>,
	pub(crate) reverse: VecDeque<String>,
	pub(crate) tree: PropTree,
	pub(crate) placeholders: HashMap<String, usize>,
	pub(crate) outcome: Result<String, Rejection>,
}

impl Derivation {
	/// The input with whitespace removed.
	pub fn formula(&self) -> &str {
		&self.formula
	}

	pub fn atoms(&self) -> &[String] {
		&self.atoms
	}

	pub fn steps(&self) -> &[Step] {
		&self.steps
	}

	pub fn reductions(&self) -> impl Iterator<Item = &Reduction> {
		self.steps.iter().filter_map(|step| match step {
			Step::Reduce(reduction) => Some(reduction),
			Step::Unwrap { .. } => None,
		})
	}

	/// Compound text at the time of reduction, mapped to its placeholder.
	pub fn substitutions(&self) -> &HashMap<String, String> {
		&self.substitutions
	}

	/// `Xn = (...)` lines, most recently minted first.
	pub fn reverse_substitutions(&self) -> impl Iterator<Item = &String> {
		self.reverse.iter()
	}

	pub fn is_accepted(&self) -> bool {
		self.outcome.is_ok()
	}

	/// The atom the formula was reduced to.
	pub fn final_symbol(&self) -> Option<&str> {
		self.outcome.as_ref().ok().map(String::as_str)
	}

	pub fn rejection(&self) -> Option<&Rejection> {
		self.outcome.as_ref().err()
	}

	pub fn error(&self) -> Option<&WffError> {
		self.rejection().map(|rejection| &rejection.error)
	}

	/// Syntax tree of an accepted formula.
	pub fn tree(&self) -> Option<&PropTree> {
		if self.is_accepted() {
			Some(&self.tree)
		} else {
			None
		}
	}

	/// The subformula a placeholder stands for, fully expanded.
	pub fn expansion(&self, placeholder: &str) -> Option<PropTree> {
		self.placeholders.get(placeholder).map(|id| self.tree.clone_subtree(*id))
	}
}

fn is_placeholder_shaped(name: &str) -> bool {
	name.strip_prefix('X')
		.map_or(false, |n| !n.is_empty() && n.chars().all(|ch| ch.is_ascii_digit()))
}

/// Rejections that need no reduction at all.
fn precheck(formula: &str, lexemes: &[Lexeme]) -> Result<(), WffError> {
	if formula.is_empty() {
		return Err(WffError::EmptyFormula);
	}
	normalizer::check_symbols(lexemes)?;
	if !parentheses_balanced(formula) {
		return Err(WffError::UnbalancedParentheses);
	}
	let inner = strip_enclosing(formula);
	if inner.len() < formula.len() && is_atomic(inner) {
		return Err(WffError::RedundantParenthesization { atom: inner.to_string() });
	}
	Ok(())
}

/// Per-run state. A fresh one is built for every formula.
struct Solver {
	atomic_counter: usize,
	steps: Vec<Step>,
	substitutions: HashMap<String, String>,
	reverse: VecDeque<String>,
	tree: PropTree,
	placeholders: HashMap<String, usize>,
}

impl Solver {
	fn new() -> Solver {
		Solver {
			atomic_counter: 0,
			steps: Vec::new(),
			substitutions: HashMap::new(),
			reverse: VecDeque::new(),
			tree: PropTree::new(),
			placeholders: HashMap::new(),
		}
	}

	fn generate_new_atomic(&mut self) -> String {
		self.atomic_counter += 1;
		format!("X{}", self.atomic_counter)
	}

	/// Node for an operand: the subtree of a placeholder minted in this run,
	/// otherwise a new atom.
	fn operand_node(&mut self, name: &str) -> usize {
		match self.placeholders.get(name) {
			Some(id) => *id,
			None => self.tree.push_node(LexicalUnit::Atom(name.to_string())),
		}
	}

	/// Collapses one basic compound of `working`, returning the new working
	/// formula.
	fn reduce(&mut self, working: &str) -> Result<String, Rejection> {
		let inner = strip_enclosing(working);
		if inner.len() < working.len() && self.placeholders.contains_key(inner) {
			debug!(placeholder = inner, "removing redundant outer parentheses");
			self.steps.push(Step::Unwrap {
				working: working.to_string(),
				placeholder: inner.to_string(),
			});
			return Ok(inner.to_string());
		}

		let span = find_first_basic_compound(working).ok_or_else(|| Rejection {
			stage: Stage::Scanning { working: working.to_string() },
			error: WffError::NoReducibleCompound,
		})?;

		let components = match extract_components(&span.text) {
			Ok(components) => components,
			Err(err) => {
				if let WffError::InvalidComponentExtraction { .. } = err {
					error!(compound = %span.text, "scanner accepted a span the extractor cannot split");
				}
				return Err(Rejection {
					stage: Stage::Extracting {
						working: working.to_string(),
						compound: span.text.clone(),
					},
					error: err,
				});
			}
		};

		let placeholder = self.generate_new_atomic();
		let id = match components.left {
			Some(left) => {
				let a = self.operand_node(left);
				let b = self.operand_node(components.right);
				self.tree.push_node(LexicalUnit::Binary(components.connective, a, b))
			}
			None => {
				let a = self.operand_node(components.right);
				self.tree.push_node(LexicalUnit::Not(a))
			}
		};

		let reduction = Reduction {
			working: working.to_string(),
			compound: span.text.clone(),
			connective: components.connective,
			left: components.left.map(str::to_string),
			right: components.right.to_string(),
			placeholder: placeholder.clone(),
		};
		debug!(compound = %span.text, %placeholder, "reduced compound");

		self.reverse.push_front(format!("{} = {}", placeholder, reduction.form()));
		self.placeholders.insert(placeholder.clone(), id);
		self.substitutions.insert(span.text.clone(), placeholder.clone());
		self.steps.push(Step::Reduce(reduction));

		Ok(format!("{}{}{}", &working[..span.start], placeholder, &working[span.end..]))
	}

	fn solve_formula(mut self, formula: String, lexemes: &[Lexeme]) -> Derivation {
		let (atoms, outcome) = if is_atomic(&formula) {
			self.tree.push_node(LexicalUnit::Atom(formula.clone()));
			(vec![formula.clone()], Ok(formula.clone()))
		} else if let Err(error) = precheck(&formula, lexemes) {
			(Vec::new(), Err(Rejection { stage: Stage::Precheck, error }))
		} else {
			let atoms = normalizer::atoms(lexemes);
			for atom in atoms.iter().filter(|atom| is_placeholder_shaped(atom)) {
				warn!(%atom, "atom has the same shape as generated placeholders");
			}
			let mut working = formula.clone();
			let outcome = loop {
				if is_atomic(&working) {
					break Ok(working);
				}
				match self.reduce(&working) {
					Ok(next) => working = next,
					Err(rejection) => break Err(rejection),
				}
			};
			(atoms, outcome)
		};

		match &outcome {
			Ok(symbol) => info!(%formula, %symbol, "well-formed formula"),
			Err(rejection) => info!(%formula, error = %rejection.error, "not a well-formed formula"),
		}

		Derivation {
			formula,
			atoms,
			steps: self.steps,
			substitutions: self.substitutions,
			reverse: self.reverse,
			tree: self.tree,
			placeholders: self.placeholders,
			outcome,
		}
	}
}

/// Checks one formula and returns the full derivation record.
pub fn analyze(input: &str) -> Derivation {
	let formula = normalizer::normalize(input);
	let lexemes = normalizer::tokenize(&formula);
	Solver::new().solve_formula(formula, &lexemes)
}
