use crate::grammar::{is_atomic, strip_outer, Connective, NOT};
use tracing::trace;

/// A parenthesized span of the working formula, `start..end` in bytes.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct CompoundSpan {
	pub start: usize,
	pub end: usize,
	pub text: String,
}

/// Byte index of the `)` matching the `(` at `start`.
pub fn find_subformula_end(formula: &str, start: usize) -> Option<usize> {
	let mut count = 1;
	for (i, byte) in formula.bytes().enumerate().skip(start + 1) {
		match byte {
			b'(' => count += 1,
			b')' => {
				count -= 1;
				if count == 0 {
					return Some(i);
				}
			}
			_ => {}
		}
	}
	None
}

/// True for `(¬a)` and `(a∘b)` where `a`, `b` are atoms and `∘` is the
/// only connective at depth zero of the interior.
pub fn is_basic_compound(span: &str) -> bool {
	let inner = match strip_outer(span) {
		Some(inner) => inner,
		None => return false,
	};
	if let Some(after_neg) = inner.strip_prefix(NOT) {
		return is_atomic(after_neg);
	}

	let mut depth: isize = 0;
	let mut operator: Option<usize> = None;
	for (i, ch) in inner.char_indices() {
		match ch {
			'(' => depth += 1,
			')' => depth -= 1,
			_ if depth == 0 && Connective::from_char(ch).is_some() => {
				if operator.is_some() {
					// several operators at the same level
					return false;
				}
				operator = Some(i);
			}
			_ => {}
		}
	}
	let split = match operator {
		Some(split) => split,
		None => return false,
	};
	let (left, rest) = inner.split_at(split);
	let right = rest.chars().next().map_or("", |op| &rest[op.len_utf8()..]);
	is_atomic(left) && is_atomic(right)
}

/// Deepest basic compound of `formula`. A match at the same depth as the
/// current best replaces it, so the rightmost one wins among equals.
pub fn find_first_basic_compound(formula: &str) -> Option<CompoundSpan> {
	let mut best: Option<CompoundSpan> = None;
	let mut best_level = 0;
	let mut level = 0;
	for (i, byte) in formula.bytes().enumerate() {
		match byte {
			b'(' => {
				level += 1;
				if level < best_level {
					continue;
				}
				let end = match find_subformula_end(formula, i) {
					Some(end) => end,
					None => continue,
				};
				let candidate = &formula[i..=end];
				if is_basic_compound(candidate) {
					trace!(candidate, level, "basic compound candidate");
					best_level = level;
					best = Some(CompoundSpan {
						start: i,
						end: end + 1,
						text: candidate.to_string(),
					});
				}
			}
			b')' => level -= 1,
			_ => {}
		}
	}
	best
}
