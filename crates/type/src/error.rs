// SPDX-License-Identifier: MIT
// Copyright (c) 2025 ReifyDB

use crate::value::Type;

#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum TypeError {
	#[error("NaN is not a valid FLOAT8 value")]
	NanFloat,

	#[error("{value} of type {from} cannot be converted to {to} without loss")]
	LossyConversion {
		value: String,
		from: Type,
		to: Type,
	},
}

#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum TableError {
	#[error("column names must not be empty (column #{position})")]
	EmptyColumnName {
		position: usize,
	},

	#[error("column `{column}` appears more than once")]
	DuplicateColumn {
		column: String,
	},

	#[error("column `{column}` has {actual} rows, expected {expected}")]
	LengthMismatch {
		column: String,
		expected: usize,
		actual: usize,
	},

	#[error("column `{column}` mixes types: row {row} is {actual}, expected {expected}")]
	MixedTypes {
		column: String,
		row: usize,
		expected: Type,
		actual: Type,
	},

	#[error("column `{column}` row {row}: {source}")]
	InvalidValue {
		column: String,
		row: usize,
		source: TypeError,
	},
}
