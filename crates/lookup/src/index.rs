// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (c) 2025 ReifyDB

use std::collections::{BTreeSet, HashMap};

use indexmap::IndexMap;
use reifydb_type::Value;

use crate::{
	Dictionary, IndexConfig,
	composite::{CompositeKey, CompositeValue},
};

/// Read-only composite lookup index over a table.
///
/// Built by [`Index::build`]; there is no way to modify it afterwards. A changed
/// table needs a new index.
#[derive(Debug, Clone)]
pub struct Index {
	pub(crate) config: IndexConfig,
	pub(crate) row_count: usize,
	/// One dictionary per key column, in declared key order.
	pub(crate) keys: IndexMap<String, Dictionary>,
	pub(crate) forward: HashMap<CompositeKey, CompositeValue>,
	/// One reverse index per value column, in declared value order.
	pub(crate) reverse: IndexMap<String, HashMap<CompositeValue, Value>>,
}

impl Index {
	pub fn config(&self) -> &IndexConfig {
		&self.config
	}

	pub fn row_count(&self) -> usize {
		self.row_count
	}

	pub fn key_columns(&self) -> impl ExactSizeIterator<Item = &str> {
		self.keys.keys().map(String::as_str)
	}

	pub fn value_columns(&self) -> impl ExactSizeIterator<Item = &str> {
		self.reverse.keys().map(String::as_str)
	}

	pub fn key_dictionary(&self, column: &str) -> Option<&Dictionary> {
		self.keys.get(column)
	}

	/// Distinct values of every key column, ascending, in declared key order.
	pub fn keys(&self) -> IndexMap<String, Vec<Value>> {
		self.keys.iter().map(|(name, dictionary)| (name.clone(), dictionary.values().to_vec())).collect()
	}

	/// Distinct values of every value column, ascending, in declared value
	/// order. Read from the reverse indexes.
	pub fn distinct_values(&self) -> IndexMap<String, Vec<Value>> {
		self.reverse.iter().map(|(name, reverse)| (name.clone(), distinct(reverse))).collect()
	}

	pub(crate) fn distinct_of(&self, column: &str) -> Option<Vec<Value>> {
		self.reverse.get(column).map(distinct)
	}
}

fn distinct(reverse: &HashMap<CompositeValue, Value>) -> Vec<Value> {
	reverse.values().cloned().collect::<BTreeSet<_>>().into_iter().collect()
}
