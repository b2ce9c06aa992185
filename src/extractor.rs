use crate::error::WffError;
use crate::grammar::{is_atomic, is_valid_negation, strip_outer, Connective, NOT};

/// The principal connective of a basic compound and its operands.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Components<'a> {
	pub connective: Connective,
	/// `None` for negation.
	pub left: Option<&'a str>,
	pub right: &'a str,
}

/// Splits a span already accepted by
/// [`is_basic_compound`](crate::scanner::is_basic_compound) into its
/// connective and operands.
pub fn extract_components(span: &str) -> Result<Components<'_>, WffError> {
	let invalid = || WffError::InvalidComponentExtraction { span: span.to_string() };
	let inner = strip_outer(span).ok_or_else(invalid)?;
	if is_atomic(inner) {
		return Err(invalid());
	}

	if let Some(rest) = inner.strip_prefix(NOT) {
		if !is_valid_negation(span) {
			return Err(WffError::MalformedNegation { span: span.to_string() });
		}
		return Ok(Components {
			connective: Connective::Not,
			left: None,
			right: rest,
		});
	}

	let mut depth: isize = 0;
	for (i, ch) in inner.char_indices() {
		match ch {
			'(' => depth += 1,
			')' => depth -= 1,
			_ if depth == 0 => {
				if let Some(connective) = Connective::from_char(ch).filter(|op| op.is_binary()) {
					return Ok(Components {
						connective,
						left: Some(&inner[..i]),
						right: &inner[i + ch.len_utf8()..],
					});
				}
			}
			_ => {}
		}
	}
	Err(invalid())
}
