// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (c) 2025 ReifyDB

use serde::{Deserialize, Serialize};

/// Feasibility pre-check run before the per-row pass.
///
/// The pre-check only rejects early; uniqueness is always verified row by row
/// afterwards.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum CardinalityCheck {
	/// The product of distinct key values must be strictly greater than the
	/// row count.
	#[default]
	Strict,
	/// Reject only when the product is smaller than the row count, i.e. when
	/// a duplicate key is certain.
	Sound,
	Disabled,
}

impl CardinalityCheck {
	pub fn admits(&self, combinations: u128, rows: usize) -> bool {
		let rows = rows as u128;
		match self {
			CardinalityCheck::Strict => combinations > rows,
			CardinalityCheck::Sound => combinations >= rows,
			CardinalityCheck::Disabled => true,
		}
	}
}

/// How query values are reconciled with the type of the key column they
/// address.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Coercion {
	/// Numbers are rendered as text for text columns and converted exactly
	/// between INT8 and FLOAT8. Text is never parsed into a number.
	#[default]
	Lenient,
	/// The query value type must equal the column type.
	Strict,
}

/// What a lookup does with a query tuple that has no row.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum MissingKey {
	#[default]
	Error,
	/// The tuple yields `None` in every output column.
	Null,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct IndexConfig {
	pub cardinality_check: CardinalityCheck,
	pub coercion: Coercion,
	pub on_missing: MissingKey,
}

impl IndexConfig {
	pub fn new() -> Self {
		Self::default()
	}

	pub fn cardinality_check(mut self, check: CardinalityCheck) -> Self {
		self.cardinality_check = check;
		self
	}

	pub fn coercion(mut self, coercion: Coercion) -> Self {
		self.coercion = coercion;
		self
	}

	pub fn on_missing(mut self, policy: MissingKey) -> Self {
		self.on_missing = policy;
		self
	}
}
