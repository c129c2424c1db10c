// SPDX-License-Identifier: MIT
// Copyright (c) 2025 ReifyDB

use serde::{Deserialize, Serialize};

use crate::{OrderedF64, TableError, Type, table::ColumnData};

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Column {
	pub name: String,
	pub data: ColumnData,
}

impl Column {
	pub fn new(name: impl Into<String>, data: ColumnData) -> Self {
		Self {
			name: name.into(),
			data,
		}
	}

	pub fn utf8(name: &str, values: impl IntoIterator<Item = impl Into<String>>) -> Self {
		Self::new(name, ColumnData::utf8(values))
	}

	pub fn int8(name: &str, values: impl IntoIterator<Item = i64>) -> Self {
		Self::new(name, ColumnData::int8(values))
	}

	pub fn float8(name: &str, values: impl IntoIterator<Item = f64>) -> Result<Self, TableError> {
		let values = values
			.into_iter()
			.enumerate()
			.map(|(row, f)| {
				OrderedF64::try_from(f).map_err(|source| TableError::InvalidValue {
					column: name.to_string(),
					row,
					source,
				})
			})
			.collect::<Result<Vec<_>, _>>()?;
		Ok(Self::new(name, ColumnData::Float8(values)))
	}

	pub fn get_type(&self) -> Type {
		self.data.get_type()
	}

	pub fn len(&self) -> usize {
		self.data.len()
	}

	pub fn is_empty(&self) -> bool {
		self.data.is_empty()
	}
}
