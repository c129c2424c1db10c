// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (c) 2025 ReifyDB

use std::fmt::{self, Display, Formatter};

use reifydb_type::{TableError, Type};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ColumnRole {
	Key,
	Value,
}

impl Display for ColumnRole {
	fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
		match self {
			ColumnRole::Key => f.write_str("key"),
			ColumnRole::Value => f.write_str("value"),
		}
	}
}

/// Coarse classification of a [`LookupError`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorKind {
	/// Column declaration does not fit the table; raised before indexing.
	Schema,
	/// Too few key combinations for the number of rows.
	KeyCardinality,
	/// Two rows share a key tuple.
	KeyDuplication,
	/// A query tuple has no row.
	KeyNotFound,
	/// Malformed lookup request; raised before the index is consulted.
	ArgumentShape,
	Internal,
}

#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum LookupError {
	#[error("{role} column `{column}` does not exist in the table")]
	MissingColumn {
		column: String,
		role: ColumnRole,
	},

	#[error("no {role} columns declared")]
	EmptyDeclaration {
		role: ColumnRole,
	},

	#[error("{role} column `{column}` is declared more than once")]
	RepeatedColumn {
		column: String,
		role: ColumnRole,
	},

	#[error("column `{column}` is declared as both key and value column")]
	OverlappingColumn {
		column: String,
	},

	#[error(
		"key columns ({}) allow {combinations} combinations, not enough to tell {rows} rows apart",
		render_cardinalities(.columns)
	)]
	KeyCardinality {
		columns: Vec<(String, usize)>,
		combinations: u128,
		rows: usize,
	},

	#[error("rows {first} and {second} share the key ({key})")]
	KeyDuplication {
		first: usize,
		second: usize,
		key: String,
	},

	#[error("query tuple {tuple}: no row with key ({key})")]
	KeyNotFound {
		tuple: usize,
		key: String,
	},

	#[error("query tuple {tuple} has {actual} fields, expected {expected}")]
	QueryArity {
		tuple: usize,
		expected: usize,
		actual: usize,
	},

	#[error("query tuple {tuple}: {value} ({actual}) cannot be used for key column `{column}` of type {expected}")]
	QueryFieldType {
		tuple: usize,
		column: String,
		value: String,
		expected: Type,
		actual: Type,
	},

	#[error("invalid key field mapping: {reason}")]
	InvalidFieldMapping {
		reason: String,
	},

	#[error("`{column}` is not a value column of this index")]
	UnknownValueColumn {
		column: String,
	},

	#[error("internal error: {0}")]
	Internal(String),

	#[error(transparent)]
	Table(#[from] TableError),
}

impl LookupError {
	pub fn kind(&self) -> ErrorKind {
		match self {
			LookupError::MissingColumn { .. }
			| LookupError::EmptyDeclaration { .. }
			| LookupError::RepeatedColumn { .. }
			| LookupError::OverlappingColumn { .. }
			| LookupError::Table(_) => ErrorKind::Schema,
			LookupError::KeyCardinality { .. } => ErrorKind::KeyCardinality,
			LookupError::KeyDuplication { .. } => ErrorKind::KeyDuplication,
			LookupError::KeyNotFound { .. } => ErrorKind::KeyNotFound,
			LookupError::QueryArity { .. }
			| LookupError::QueryFieldType { .. }
			| LookupError::InvalidFieldMapping { .. }
			| LookupError::UnknownValueColumn { .. } => ErrorKind::ArgumentShape,
			LookupError::Internal(_) => ErrorKind::Internal,
		}
	}
}

fn render_cardinalities(columns: &[(String, usize)]) -> String {
	columns.iter().map(|(name, count)| format!("{name}: {count}")).collect::<Vec<_>>().join(", ")
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn test_cardinality_message() {
		let err = LookupError::KeyCardinality {
			columns: vec![("rating".to_string(), 1), ("maturity".to_string(), 2)],
			combinations: 2,
			rows: 2,
		};
		assert_eq!(
			err.to_string(),
			"key columns (rating: 1, maturity: 2) allow 2 combinations, not enough to tell 2 rows apart"
		);
		assert_eq!(err.kind(), ErrorKind::KeyCardinality);
	}

	#[test]
	fn test_kinds() {
		assert_eq!(
			LookupError::OverlappingColumn {
				column: "a".to_string()
			}
			.kind(),
			ErrorKind::Schema
		);
		assert_eq!(
			LookupError::QueryArity {
				tuple: 0,
				expected: 2,
				actual: 1
			}
			.kind(),
			ErrorKind::ArgumentShape
		);
		assert_eq!(
			LookupError::KeyNotFound {
				tuple: 3,
				key: "rating=A".to_string()
			}
			.kind(),
			ErrorKind::KeyNotFound
		);
	}
}
