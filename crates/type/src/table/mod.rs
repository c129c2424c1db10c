// SPDX-License-Identifier: MIT
// Copyright (c) 2025 ReifyDB

use std::collections::HashSet;

use crate::{TableError, Value};

mod column;
mod data;

pub use column::Column;
pub use data::ColumnData;

/// A validated set of named, equal-length, type-homogeneous columns.
#[derive(Clone, Debug, PartialEq)]
pub struct Table {
	columns: Vec<Column>,
	row_count: usize,
}

impl Table {
	pub fn new(columns: Vec<Column>) -> Result<Self, TableError> {
		let mut seen = HashSet::with_capacity(columns.len());
		for (position, column) in columns.iter().enumerate() {
			if column.name.is_empty() {
				return Err(TableError::EmptyColumnName {
					position,
				});
			}
			if !seen.insert(column.name.as_str()) {
				return Err(TableError::DuplicateColumn {
					column: column.name.clone(),
				});
			}
		}

		let row_count = columns.first().map_or(0, Column::len);
		if let Some(column) = columns.iter().find(|c| c.len() != row_count) {
			return Err(TableError::LengthMismatch {
				column: column.name.clone(),
				expected: row_count,
				actual: column.len(),
			});
		}

		Ok(Self {
			columns,
			row_count,
		})
	}

	pub fn row_count(&self) -> usize {
		self.row_count
	}

	pub fn columns(&self) -> &[Column] {
		&self.columns
	}

	pub fn column(&self, name: &str) -> Option<&Column> {
		self.columns.iter().find(|c| c.name == name)
	}

	pub fn contains(&self, name: &str) -> bool {
		self.column(name).is_some()
	}

	pub fn value(&self, column: &str, row: usize) -> Option<Value> {
		self.column(column).and_then(|c| c.data.get_value(row))
	}
}

#[cfg(test)]
mod tests {
	use super::*;
	use crate::{Type, TypeError};

	#[test]
	fn test_new() {
		let table = Table::new(vec![Column::utf8("rating", ["A", "B"]), Column::int8("maturity", [1, 2])])
			.unwrap();
		assert_eq!(table.row_count(), 2);
		assert_eq!(table.columns().len(), 2);
		assert_eq!(table.column("maturity").unwrap().get_type(), Type::Int8);
		assert_eq!(table.value("rating", 1), Some(Value::utf8("B")));
		assert_eq!(table.value("rating", 2), None);
		assert_eq!(table.value("unknown", 0), None);
	}

	#[test]
	fn test_empty_table() {
		let table = Table::new(vec![]).unwrap();
		assert_eq!(table.row_count(), 0);
	}

	#[test]
	fn test_length_mismatch() {
		let err = Table::new(vec![Column::utf8("rating", ["A", "B"]), Column::int8("maturity", [1, 2, 3])])
			.unwrap_err();
		assert_eq!(
			err,
			TableError::LengthMismatch {
				column: "maturity".to_string(),
				expected: 2,
				actual: 3,
			}
		);
	}

	#[test]
	fn test_duplicate_column() {
		let err = Table::new(vec![Column::utf8("rating", ["A"]), Column::utf8("rating", ["B"])]).unwrap_err();
		assert_eq!(
			err,
			TableError::DuplicateColumn {
				column: "rating".to_string()
			}
		);
	}

	#[test]
	fn test_empty_column_name() {
		let err = Table::new(vec![Column::utf8("rating", ["A"]), Column::utf8("", ["B"])]).unwrap_err();
		assert_eq!(
			err,
			TableError::EmptyColumnName {
				position: 1
			}
		);
	}

	#[test]
	fn test_float_column_reports_row() {
		let err = Column::float8("spread", [0.5, 1.5, f64::NAN]).unwrap_err();
		assert_eq!(
			err,
			TableError::InvalidValue {
				column: "spread".to_string(),
				row: 2,
				source: TypeError::NanFloat,
			}
		);
	}
}
