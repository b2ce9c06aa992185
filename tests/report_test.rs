use wffsolver::{analyze, solve, Stage, WffError, DEMO_FORMULAS};

#[test]
fn test_problem_one_report() {
	let expected = "\
P - atomic => P belongs to P(v)
Q - atomic => Q belongs to P(v)
S - atomic => S belongs to P(v)
T - atomic => T belongs to P(v)

Begin substitutions:

Current formula: (((P⇒Q)∨S)⇔T)
Found principal operation (P⇒Q)
P, Q belong to P(v) => (P⇒Q) belongs to P(v)
not. (P⇒Q) := X1 => X1 belongs to P(v)

Current formula: ((X1∨S)⇔T)
Found principal operation (X1∨S)
X1, S belong to P(v) => (X1∨S) belongs to P(v)
not. (X1∨S) := X2 => X2 belongs to P(v)

Current formula: (X2⇔T)
Found principal operation (X2⇔T)
X2, T belong to P(v) => (X2⇔T) belongs to P(v)
not. (X2⇔T) := X3 => X3 belongs to P(v)

Final result: X3

Reverse substitution:
X3 = (X2⇔T)
X2 = (X1∨S)
X1 = (P⇒Q)

Since X3 belongs to P(v) and following the substitutions backwards,
we can conclude that (((P⇒Q)∨S)⇔T) belongs to P(v)
Therefore, this is a well-formed formula.";
	assert_eq!(solve(DEMO_FORMULAS[0]), expected);
}

#[test]
fn test_problem_two_accepts_outer_layer() {
	let report = solve(DEMO_FORMULAS[1]);
	assert!(report.contains("Found principal operation (S⇒T)"));
	assert!(report.contains("Found principal operation (Q∧X1)"));
	assert!(report.contains("Found principal operation (P⇒X2)"));
	assert!(report.contains("Current formula: (X3)\nRemoved redundant parentheses around X3"));
	assert!(report.contains("Reverse substitution:\nX3 = (P⇒X2)\nX2 = (Q∧X1)\nX1 = (S⇒T)\n"));
	assert!(report.ends_with(
		"we can conclude that ((P⇒(Q∧(S⇒T)))) belongs to P(v)\nTherefore, this is a well-formed formula."
	));
}

#[test]
fn test_problem_three_report() {
	let expected = "\
B - atomic => B belongs to P(v)
Q - atomic => Q belongs to P(v)
R - atomic => R belongs to P(v)

Begin substitutions:

Current formula: (¬(B(¬Q))∧R)
Found principal operation (¬Q)
Q belongs to P(v) => (¬Q) belongs to P(v)
not. (¬Q) := X1 => X1 belongs to P(v)

Current formula: (¬(BX1)∧R)
Error: No valid basic compound formula found

Not a valid formula in P(v)";
	assert_eq!(solve(DEMO_FORMULAS[2]), expected);
	assert_eq!(analyze(DEMO_FORMULAS[2]).error(), Some(&WffError::NoReducibleCompound));
}

#[test]
fn test_problem_four_nested_negations() {
	let derivation = analyze(DEMO_FORMULAS[3]);
	assert_eq!(derivation.final_symbol(), Some("X7"));
	let reverse: Vec<&String> = derivation.reverse_substitutions().collect();
	assert_eq!(
		reverse,
		[
			"X7 = (P∧X6)",
			"X6 = (X5∧X4)",
			"X5 = (¬Q)",
			"X4 = (¬X3)",
			"X3 = (¬X2)",
			"X2 = (Q⇔X1)",
			"X1 = (¬R)",
		]
	);
}

#[test]
fn test_problem_four_report() {
	let expected = "\
P - atomic => P belongs to P(v)
Q - atomic => Q belongs to P(v)
R - atomic => R belongs to P(v)

Begin substitutions:

Current formula: (P∧((¬Q)∧(¬(¬(Q⇔(¬R))))))
Found principal operation (¬R)
R belongs to P(v) => (¬R) belongs to P(v)
not. (¬R) := X1 => X1 belongs to P(v)

Current formula: (P∧((¬Q)∧(¬(¬(Q⇔X1)))))
Found principal operation (Q⇔X1)
Q, X1 belong to P(v) => (Q⇔X1) belongs to P(v)
not. (Q⇔X1) := X2 => X2 belongs to P(v)

Current formula: (P∧((¬Q)∧(¬(¬X2))))
Found principal operation (¬X2)
X2 belongs to P(v) => (¬X2) belongs to P(v)
not. (¬X2) := X3 => X3 belongs to P(v)

Current formula: (P∧((¬Q)∧(¬X3)))
Found principal operation (¬X3)
X3 belongs to P(v) => (¬X3) belongs to P(v)
not. (¬X3) := X4 => X4 belongs to P(v)

Current formula: (P∧((¬Q)∧X4))
Found principal operation (¬Q)
Q belongs to P(v) => (¬Q) belongs to P(v)
not. (¬Q) := X5 => X5 belongs to P(v)

Current formula: (P∧(X5∧X4))
Found principal operation (X5∧X4)
X5, X4 belong to P(v) => (X5∧X4) belongs to P(v)
not. (X5∧X4) := X6 => X6 belongs to P(v)

Current formula: (P∧X6)
Found principal operation (P∧X6)
P, X6 belong to P(v) => (P∧X6) belongs to P(v)
not. (P∧X6) := X7 => X7 belongs to P(v)

Final result: X7

Reverse substitution:
X7 = (P∧X6)
X6 = (X5∧X4)
X5 = (¬Q)
X4 = (¬X3)
X3 = (¬X2)
X2 = (Q⇔X1)
X1 = (¬R)

Since X7 belongs to P(v) and following the substitutions backwards,
we can conclude that (P∧((¬Q)∧(¬(¬(Q⇔(¬R)))))) belongs to P(v)
Therefore, this is a well-formed formula.";
	assert_eq!(solve(DEMO_FORMULAS[3]), expected);
}

#[test]
fn test_problem_five_rejects() {
	let derivation = analyze(DEMO_FORMULAS[4]);
	assert_eq!(derivation.reductions().count(), 5);
	assert_eq!(
		derivation.rejection().map(|rejection| &rejection.stage),
		Some(&Stage::Scanning { working: "(X4⇒¬X3)∧X5".to_string() })
	);
	assert!(solve(DEMO_FORMULAS[4]).ends_with(
		"Current formula: (X4⇒¬X3)∧X5\nError: No valid basic compound formula found\n\nNot a valid formula in P(v)"
	));
}

#[test]
fn test_unbalanced_rejects_before_reduction() {
	assert_eq!(
		solve("(P ∧ Q"),
		"Error: Unbalanced parentheses\n\nNot a valid formula in P(v)"
	);
	assert_eq!(
		solve(") P ∧ Q ("),
		"Error: Unbalanced parentheses\n\nNot a valid formula in P(v)"
	);
}

#[test]
fn test_negated_parenthesized_atom_report() {
	let expected = "\
P - atomic => P belongs to P(v)

Begin substitutions:

Current formula: (¬(P))
Error: No valid basic compound formula found

Not a valid formula in P(v)";
	assert_eq!(solve("(¬(P))"), expected);
}

#[test]
fn test_unrecognized_symbol() {
	assert_eq!(
		solve("(P & Q)"),
		"Error: Unrecognized symbol '&' at position 2\n\nNot a valid formula in P(v)"
	);
}

#[test]
fn test_placeholder_numbering_restarts() {
	let first = solve("((P∧Q)∨R)");
	solve("(((A∧B)∨C)⇒(D⇔E))");
	let second = solve("((P∧Q)∨R)");
	assert_eq!(first, second);
	assert!(second.contains("not. (P∧Q) := X1 => X1 belongs to P(v)"));
}

#[test]
fn test_independent_threads() {
	let handles: Vec<_> = DEMO_FORMULAS
		.iter()
		.map(|formula| formula.to_string())
		.map(|formula| std::thread::spawn(move || solve(&formula)))
		.collect();
	for (handle, formula) in handles.into_iter().zip(DEMO_FORMULAS.iter()) {
		assert_eq!(handle.join().unwrap(), solve(formula));
	}
}
