use crate::grammar::Connective;
use std::fmt;

/// Arena syntax tree of a formula. Children are always pushed before their
/// parent, so the last node is the root.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct PropTree {
	pub nodes: Vec<PropTreeNode>,
}

impl PropTree {
	pub fn new() -> PropTree {
		PropTree { nodes: Vec::new() }
	}

	pub fn push_node(&mut self, l_unit: LexicalUnit) -> usize {
		let id = self.nodes.len();
		self.nodes.push(PropTreeNode {
			id,
			lexical_unit: l_unit,
		});
		id
	}

	pub fn root(&self) -> Option<&PropTreeNode> {
		self.nodes.last()
	}

	/// Number of connectives under `id`, counting `id` itself.
	pub fn connective_count(&self, id: usize) -> usize {
		match &self.nodes[id].lexical_unit {
			LexicalUnit::Atom(_) => 0,
			LexicalUnit::Not(a) => 1 + self.connective_count(*a),
			LexicalUnit::Binary(_, a, b) => {
				1 + self.connective_count(*a) + self.connective_count(*b)
			}
		}
	}

	pub fn to_string_recurse(&self, id: usize) -> String {
		match &self.nodes[id].lexical_unit {
			LexicalUnit::Atom(name) => name.clone(),
			LexicalUnit::Not(a) => format!("({}{})", Connective::Not, self.to_string_recurse(*a)),
			LexicalUnit::Binary(op, a, b) => format!(
				"({}{}{})",
				self.to_string_recurse(*a),
				op,
				self.to_string_recurse(*b)
			),
		}
	}

	pub fn clone_subtree_recurse(&self, new_tree: &mut PropTree, id: usize) -> usize {
		match &self.nodes[id].lexical_unit {
			LexicalUnit::Atom(name) => new_tree.push_node(LexicalUnit::Atom(name.clone())),
			LexicalUnit::Not(a) => {
				let a1 = self.clone_subtree_recurse(new_tree, *a);
				new_tree.push_node(LexicalUnit::Not(a1))
			}
			LexicalUnit::Binary(op, a, b) => {
				let a1 = self.clone_subtree_recurse(new_tree, *a);
				let b1 = self.clone_subtree_recurse(new_tree, *b);
				new_tree.push_node(LexicalUnit::Binary(*op, a1, b1))
			}
		}
	}

	pub fn clone_subtree(&self, id: usize) -> PropTree {
		let mut new_tree = Self::new();
		self.clone_subtree_recurse(&mut new_tree, id);
		new_tree
	}
}

impl fmt::Display for PropTree {
	fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
		match self.root() {
			Some(root) => write!(f, "{}", self.to_string_recurse(root.id)),
			None => Ok(()),
		}
	}
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct PropTreeNode {
	pub id: usize,
	pub lexical_unit: LexicalUnit,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub enum LexicalUnit {
	Atom(String),
	Not(usize),
	Binary(Connective, usize, usize),
}
