// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (c) 2025 ReifyDB

//! Reusable tables for index tests

use rand::{Rng, SeedableRng, rngs::StdRng, seq::SliceRandom};
use reifydb_type::{Column, Table};

/// Credit spreads keyed by rating and maturity (years).
///
/// | rating | maturity | spread |
/// |--------|----------|--------|
/// | A      | 1        | X      |
/// | B      | 2        | Y      |
/// | C      | 5        | Z      |
pub fn ratings() -> Table {
	Table::new(vec![
		Column::utf8("rating", ["A", "B", "C"]),
		Column::int8("maturity", [1, 2, 5]),
		Column::utf8("spread", ["X", "Y", "Z"]),
	])
	.expect("valid fixture")
}

/// Same as [`ratings`], with maturity ingested as text.
pub fn ratings_text_maturity() -> Table {
	Table::new(vec![
		Column::utf8("rating", ["A", "B", "C"]),
		Column::utf8("maturity", ["1", "2", "5"]),
		Column::utf8("spread", ["X", "Y", "Z"]),
	])
	.expect("valid fixture")
}

/// Zero rates keyed by currency and tenor, with numeric and text value columns.
pub fn curve() -> Table {
	Table::new(vec![
		Column::utf8("currency", ["EUR", "EUR", "EUR", "EUR", "USD", "USD", "USD"]),
		Column::float8("tenor", [0.5, 1.0, 2.0, 5.0, 0.5, 1.0, 2.0]).expect("valid fixture"),
		Column::float8("rate", [0.031, 0.029, 0.027, 0.025, 0.052, 0.049, 0.045]).expect("valid fixture"),
		Column::int8("basis", [360, 360, 360, 360, 360, 365, 365]),
		Column::utf8("source", ["ecb", "ecb", "ecb", "ecb", "fed", "fed", "fed"]),
	])
	.expect("valid fixture")
}

/// A table of `rows` rows with unique key tuples over `k_text`, `k_int` and
/// `k_float`, and two value columns with repeating values. Deterministic for a
/// given `seed`. At most 240 rows.
pub fn random_unique(seed: u64, rows: usize) -> Table {
	const TEXT: [&str; 6] = ["AAA", "AA", "A", "BBB", "BB", "B"];
	const FLOAT: [f64; 5] = [0.25, 0.5, 1.0, 2.0, 10.0];

	let mut rng = StdRng::seed_from_u64(seed);

	let mut combinations: Vec<(usize, i64, usize)> = Vec::with_capacity(TEXT.len() * 8 * FLOAT.len());
	for text in 0..TEXT.len() {
		for int in 0..8 {
			for float in 0..FLOAT.len() {
				combinations.push((text, int, float));
			}
		}
	}
	assert!(rows <= combinations.len(), "at most {} unique rows", combinations.len());
	combinations.shuffle(&mut rng);
	combinations.truncate(rows);

	let outcomes = ["up", "down", "flat"];
	Table::new(vec![
		Column::utf8("k_text", combinations.iter().map(|(t, _, _)| TEXT[*t])),
		Column::int8("k_int", combinations.iter().map(|(_, i, _)| *i * 3 - 7)),
		Column::float8("k_float", combinations.iter().map(|(_, _, f)| FLOAT[*f])).expect("valid fixture"),
		Column::utf8("v_text", (0..rows).map(|_| outcomes[rng.random_range(0..outcomes.len())])),
		Column::int8("v_int", (0..rows).map(|_| rng.random_range(-5..5))),
	])
	.expect("valid fixture")
}
