// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (c) 2025 ReifyDB

use indexmap::IndexMap;
use reifydb_type::Value;
use serde::Serialize;

/// Per-column output of a lookup.
///
/// Every column holds one entry per query tuple, in request order; a missed
/// tuple is `None` when the request tolerates misses. For an introspection
/// request (no tuples) every column lists its distinct values instead, so
/// columns may differ in length.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct LookupResult {
	columns: IndexMap<String, Vec<Option<Value>>>,
}

impl LookupResult {
	pub(crate) fn new(columns: IndexMap<String, Vec<Option<Value>>>) -> Self {
		Self {
			columns,
		}
	}

	pub fn column(&self, name: &str) -> Option<&[Option<Value>]> {
		self.columns.get(name).map(Vec::as_slice)
	}

	pub fn columns(&self) -> &IndexMap<String, Vec<Option<Value>>> {
		&self.columns
	}

	pub fn into_columns(self) -> IndexMap<String, Vec<Option<Value>>> {
		self.columns
	}

	/// Entries in the longest column. For a tuple lookup this is the number of
	/// tuples.
	pub fn len(&self) -> usize {
		self.columns.values().map(Vec::len).max().unwrap_or(0)
	}

	pub fn is_empty(&self) -> bool {
		self.len() == 0
	}

	/// Entry `index` of every column, in column order. A column with no entry at
	/// `index` contributes `None`.
	pub fn row(&self, index: usize) -> Option<Vec<Option<&Value>>> {
		if index >= self.len() {
			return None;
		}
		Some(self.columns.values().map(|values| values.get(index).and_then(Option::as_ref)).collect())
	}
}
