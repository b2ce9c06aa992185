extern crate wffsolver;

use wffsolver::{analyze, DEMO_FORMULAS};

fn disp(string: &str) {
	let derivation = analyze(string);
	println!("{}", derivation);
	match derivation.tree() {
		Some(tree) => {
			if let Some(root) = tree.root() {
				println!("{} connectives", tree.connective_count(root.id));
			}
		}
		None => println!("{:?}", derivation.error()),
	}
	println!();
}

fn main() {
	for formula in DEMO_FORMULAS.iter() {
		println!("{}", formula);
		disp(formula);
	}
	disp("(P ∧ Q");
	disp("(P)");
}
