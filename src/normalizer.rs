use crate::error::WffError;
use crate::grammar::Connective;
use plex::lexer;
use std::fmt;

#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Token {
	Atom(String),
	/// Digits with no letter in front of them.
	Digits(String),
	LeftParenthesis,
	RightParenthesis,
	Connective(Connective),
	Whitespace,
	Unknown(String),
}

impl fmt::Display for Token {
	fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
		match self {
			Token::Atom(name) => write!(f, "{}", name),
			Token::Digits(digits) => write!(f, "{}", digits),
			Token::LeftParenthesis => write!(f, "("),
			Token::RightParenthesis => write!(f, ")"),
			Token::Connective(op) => write!(f, "{}", op),
			Token::Whitespace => Ok(()),
			Token::Unknown(text) => write!(f, "{}", text),
		}
	}
}

lexer! {
	fn next_token(text: 'a) -> Token;

	r#"[ \t\r\n]+"# => Token::Whitespace,
	r#"[A-Za-z][0-9]*"# => Token::Atom(text.to_owned()),
	r#"[0-9]+"# => Token::Digits(text.to_owned()),
	r#"\("# => Token::LeftParenthesis,
	r#"\)"# => Token::RightParenthesis,
	r#"¬"# => Token::Connective(Connective::Not),
	r#"∧"# => Token::Connective(Connective::And),
	r#"∨"# => Token::Connective(Connective::Or),
	r#"⇒"# => Token::Connective(Connective::Imply),
	r#"⇔"# => Token::Connective(Connective::Iff),
	r#"."# => Token::Unknown(text.to_owned()),
}

/// A token and the character offset it starts at in the whitespace-free
/// formula.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Lexeme {
	pub token: Token,
	pub position: usize,
}

/// Splits `string` into lexemes, dropping whitespace. Positions count
/// non-whitespace characters only, so they index the normalized formula.
pub fn tokenize(string: &str) -> Vec<Lexeme> {
	let mut result = Vec::new();
	let mut position = 0;
	let mut remaining = string;
	while let Some((token, new_remaining)) = next_token(remaining) {
		if token != Token::Whitespace {
			let width = remaining[..remaining.len() - new_remaining.len()].chars().count();
			result.push(Lexeme { token, position });
			position += width;
		}
		remaining = new_remaining;
	}
	result
}

/// The formula with all whitespace removed.
pub fn normalize(string: &str) -> String {
	tokenize(string).iter().map(|lexeme| lexeme.token.to_string()).collect()
}

/// Distinct atoms in first-seen order.
pub fn atoms(lexemes: &[Lexeme]) -> Vec<String> {
	let mut seen: Vec<String> = Vec::new();
	for lexeme in lexemes {
		if let Token::Atom(name) = &lexeme.token {
			if !seen.contains(name) {
				seen.push(name.clone());
			}
		}
	}
	seen
}

pub fn check_symbols(lexemes: &[Lexeme]) -> Result<(), WffError> {
	match lexemes.iter().find(|lexeme| matches!(lexeme.token, Token::Unknown(_))) {
		Some(lexeme) => Err(WffError::UnrecognizedSymbol {
			symbol: lexeme.token.to_string(),
			position: lexeme.position,
		}),
		None => Ok(()),
	}
}
