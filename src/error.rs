use thiserror::Error;

/// Reasons a candidate string is not a well-formed formula.
///
/// The `Display` text of each variant is the message printed after
/// `Error: ` in a rejection report.
#[derive(Clone, Debug, Error, PartialEq, Eq)]
pub enum WffError {
	#[error("Empty formula")]
	EmptyFormula,

	#[error("Unrecognized symbol '{symbol}' at position {position}")]
	UnrecognizedSymbol { symbol: String, position: usize },

	#[error("Unbalanced parentheses")]
	UnbalancedParentheses,

	/// An atom wrapped in one or more parenthesis pairs, such as `(P)`.
	#[error("Atomic formula {atom} should not be surrounded by parentheses")]
	RedundantParenthesization { atom: String },

	/// The working formula is not atomic but holds no reducible compound.
	#[error("No valid basic compound formula found")]
	NoReducibleCompound,

	/// A span accepted by the scanner could not be split by the extractor.
	#[error("Invalid formula format in {span}")]
	InvalidComponentExtraction { span: String },

	#[error("Malformed negation in {span}")]
	MalformedNegation { span: String },
}
