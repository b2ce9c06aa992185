use std::fmt;

pub const NOT: char = '¬';
pub const AND: char = '∧';
pub const OR: char = '∨';
pub const IMPLY: char = '⇒';
pub const IFF: char = '⇔';

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Connective {
	Not,
	And,
	Or,
	Imply,
	Iff,
}

impl Connective {
	pub fn from_char(ch: char) -> Option<Connective> {
		match ch {
			NOT => Some(Connective::Not),
			AND => Some(Connective::And),
			OR => Some(Connective::Or),
			IMPLY => Some(Connective::Imply),
			IFF => Some(Connective::Iff),
			_ => None,
		}
	}

	pub fn symbol(self) -> char {
		match self {
			Connective::Not => NOT,
			Connective::And => AND,
			Connective::Or => OR,
			Connective::Imply => IMPLY,
			Connective::Iff => IFF,
		}
	}

	pub fn is_binary(self) -> bool {
		self != Connective::Not
	}
}

impl fmt::Display for Connective {
	fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
		write!(f, "{}", self.symbol())
	}
}

/// A letter followed by zero or more digits: `P`, `Q1`, `X23`.
pub fn is_atomic(s: &str) -> bool {
	let mut chars = s.chars();
	match chars.next() {
		Some(first) if first.is_ascii_alphabetic() => chars.all(|ch| ch.is_ascii_digit()),
		_ => false,
	}
}

pub fn parentheses_balanced(s: &str) -> bool {
	let mut count: usize = 0;
	for ch in s.chars() {
		match ch {
			'(' => count += 1,
			')' => {
				if count == 0 {
					return false;
				}
				count -= 1;
			}
			_ => {}
		}
	}
	count == 0
}

/// Strips one enclosing `(`...`)` pair without checking that they match.
pub fn strip_outer(s: &str) -> Option<&str> {
	s.strip_prefix('(')?.strip_suffix(')')
}

/// Peels every `(`...`)` pair that wraps the whole of `s`, so `((P))`
/// gives `P` but `(P)∧(Q)` is returned unchanged.
pub fn strip_enclosing(s: &str) -> &str {
	let mut inner = s;
	while let Some(stripped) = strip_outer(inner) {
		if !parentheses_balanced(stripped) {
			break;
		}
		inner = stripped;
	}
	inner
}

/// Anything not wrapped in parentheses, or wrapped without a leading `¬`,
/// passes. A wrapped negation must negate an atom or a parenthesized
/// compound, never a parenthesized atom like `(¬(P))`.
pub fn is_valid_negation(s: &str) -> bool {
	let inner = match strip_outer(s) {
		Some(inner) => inner,
		None => return true,
	};
	let after_neg = match inner.strip_prefix(NOT) {
		Some(rest) => rest,
		None => return true,
	};
	if is_atomic(after_neg) {
		return true;
	}
	if after_neg.starts_with('(') {
		let inner_of_neg = strip_outer(after_neg).unwrap_or(after_neg);
		return !is_atomic(inner_of_neg);
	}
	false
}
