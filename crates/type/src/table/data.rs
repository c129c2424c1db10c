// SPDX-License-Identifier: MIT
// Copyright (c) 2025 ReifyDB

use serde::{Deserialize, Serialize};

use crate::{OrderedF64, TableError, Type, Value};

/// Homogeneous column storage. One variant per column type, so a column can
/// never hold values of two different types.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub enum ColumnData {
	Utf8(Vec<String>),
	Int8(Vec<i64>),
	Float8(Vec<OrderedF64>),
}

impl ColumnData {
	pub fn utf8(values: impl IntoIterator<Item = impl Into<String>>) -> Self {
		ColumnData::Utf8(values.into_iter().map(Into::into).collect())
	}

	pub fn int8(values: impl IntoIterator<Item = i64>) -> Self {
		ColumnData::Int8(values.into_iter().collect())
	}

	pub fn float8(values: impl IntoIterator<Item = f64>) -> crate::Result<Self> {
		let values = values.into_iter().map(OrderedF64::try_from).collect::<crate::Result<Vec<_>>>()?;
		Ok(ColumnData::Float8(values))
	}

	/// Builds a column from loosely typed values. The first value decides the
	/// column type; an empty input yields an empty `Utf8` column.
	pub fn from_values(column: &str, values: Vec<Value>) -> Result<Self, TableError> {
		let expected = match values.first() {
			Some(value) => value.get_type(),
			None => return Ok(ColumnData::Utf8(Vec::new())),
		};

		let mismatch = |row: usize, actual: &Value| TableError::MixedTypes {
			column: column.to_string(),
			row,
			expected,
			actual: actual.get_type(),
		};

		match expected {
			Type::Utf8 => values
				.into_iter()
				.enumerate()
				.map(|(row, v)| match v {
					Value::Utf8(s) => Ok(s),
					other => Err(mismatch(row, &other)),
				})
				.collect::<Result<Vec<_>, _>>()
				.map(ColumnData::Utf8),
			Type::Int8 => values
				.into_iter()
				.enumerate()
				.map(|(row, v)| match v {
					Value::Int8(i) => Ok(i),
					other => Err(mismatch(row, &other)),
				})
				.collect::<Result<Vec<_>, _>>()
				.map(ColumnData::Int8),
			Type::Float8 => values
				.into_iter()
				.enumerate()
				.map(|(row, v)| match v {
					Value::Float8(f) => Ok(f),
					other => Err(mismatch(row, &other)),
				})
				.collect::<Result<Vec<_>, _>>()
				.map(ColumnData::Float8),
		}
	}

	pub fn get_type(&self) -> Type {
		match self {
			ColumnData::Utf8(_) => Type::Utf8,
			ColumnData::Int8(_) => Type::Int8,
			ColumnData::Float8(_) => Type::Float8,
		}
	}

	pub fn len(&self) -> usize {
		match self {
			ColumnData::Utf8(v) => v.len(),
			ColumnData::Int8(v) => v.len(),
			ColumnData::Float8(v) => v.len(),
		}
	}

	pub fn is_empty(&self) -> bool {
		self.len() == 0
	}

	pub fn get_value(&self, row: usize) -> Option<Value> {
		match self {
			ColumnData::Utf8(v) => v.get(row).map(|s| Value::Utf8(s.clone())),
			ColumnData::Int8(v) => v.get(row).map(|i| Value::Int8(*i)),
			ColumnData::Float8(v) => v.get(row).map(|f| Value::Float8(*f)),
		}
	}

	pub fn iter(&self) -> impl Iterator<Item = Value> + '_ {
		(0..self.len()).filter_map(move |row| self.get_value(row))
	}
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn test_from_values_utf8() {
		let data = ColumnData::from_values("rating", vec![Value::utf8("A"), Value::utf8("B")]).unwrap();
		assert_eq!(data, ColumnData::utf8(["A", "B"]));
		assert_eq!(data.get_type(), Type::Utf8);
	}

	#[test]
	fn test_from_values_rejects_mixed_types() {
		let err = ColumnData::from_values("maturity", vec![Value::int8(1), Value::int8(2), Value::utf8("3")])
			.unwrap_err();
		assert_eq!(
			err,
			TableError::MixedTypes {
				column: "maturity".to_string(),
				row: 2,
				expected: Type::Int8,
				actual: Type::Utf8,
			}
		);
	}

	#[test]
	fn test_float8_rejects_nan() {
		assert!(ColumnData::float8([1.0, f64::NAN]).is_err());
	}

	#[test]
	fn test_iter() {
		let data = ColumnData::int8([3, 1, 2]);
		let values: Vec<Value> = data.iter().collect();
		assert_eq!(values, vec![Value::int8(3), Value::int8(1), Value::int8(2)]);
		assert_eq!(data.get_value(3), None);
	}
}
