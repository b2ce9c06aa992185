//! Well-formed formula checker for propositional logic.
//!
//! A formula is reduced by repeatedly replacing its innermost basic compound
//! (`(¬P)`, `(P∧Q)`, ...) with a fresh atom `X1`, `X2`, ... until a single
//! atom is left. The recorded substitutions, read backwards, are a proof
//! that the input is well formed.
//!
//! ```
//! let report = wffsolver::solve("((P ⇒ Q) ∨ R)");
//! assert!(report.ends_with("Therefore, this is a well-formed formula."));
//! ```

pub mod engine;
pub mod error;
pub mod extractor;
pub mod grammar;
pub mod normalizer;
pub mod prop_tree;
pub mod report;
pub mod scanner;

pub use engine::{analyze, Derivation, Reduction, Rejection, Stage, Step};
pub use error::WffError;
pub use grammar::{is_atomic, is_valid_negation, parentheses_balanced, Connective};
pub use prop_tree::{LexicalUnit, PropTree};

/// The problems checked when the binary runs without arguments.
pub const DEMO_FORMULAS: [&str; 5] = [
	"(((P ⇒ Q) ∨ S) ⇔ T)",
	"((P ⇒ (Q ∧ (S ⇒ T))))",
	"(¬(B(¬Q)) ∧ R)",
	"(P ∧ ((¬Q) ∧ (¬(¬(Q ⇔ (¬R))))))",
	"((P ∨ Q) ⇒ ¬(P ∨ Q)) ∧ (P ∨ (¬(¬Q)))",
];

/// Checks one formula and returns the derivation report, or the rejection
/// reason, as text.
pub fn solve(formula: &str) -> String {
	analyze(formula).to_string()
}
