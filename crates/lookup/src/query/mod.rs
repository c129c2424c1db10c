// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (c) 2025 ReifyDB

use std::borrow::Cow;

use indexmap::IndexMap;
use reifydb_type::Value;
use tracing::{debug, instrument};

use crate::{
	Index, LookupError, MissingKey,
	composite::{CompositeKey, CompositeValue},
};

mod coerce;
mod fields;
mod result;

use coerce::coerce;
pub use fields::KeyFields;
pub use result::LookupResult;

/// A batch of key tuples to resolve against an [`Index`].
///
/// Without tuples the request asks for the distinct values of the output
/// columns instead.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct LookupRequest {
	fields: KeyFields,
	tuples: Vec<Vec<Value>>,
	outputs: Option<Vec<String>>,
	on_missing: Option<MissingKey>,
}

impl LookupRequest {
	pub fn new() -> Self {
		Self::default()
	}

	pub fn fields(mut self, fields: KeyFields) -> Self {
		self.fields = fields;
		self
	}

	pub fn tuple(mut self, tuple: impl IntoIterator<Item = impl Into<Value>>) -> Self {
		self.tuples.push(tuple.into_iter().map(Into::into).collect());
		self
	}

	pub fn tuples(mut self, tuples: impl IntoIterator<Item = Vec<Value>>) -> Self {
		self.tuples.extend(tuples);
		self
	}

	/// Restricts the output to these value columns, in this order. Defaults to
	/// every value column in declared order.
	pub fn outputs(mut self, columns: impl IntoIterator<Item = impl Into<String>>) -> Self {
		self.outputs = Some(columns.into_iter().map(Into::into).collect());
		self
	}

	/// Overrides the index's [`MissingKey`] policy for this request.
	pub fn on_missing(mut self, policy: MissingKey) -> Self {
		self.on_missing = Some(policy);
		self
	}
}

impl Index {
	#[instrument(name = "lookup::index::lookup", level = "debug", skip_all, fields(tuples = request.tuples.len()))]
	pub fn lookup(&self, request: &LookupRequest) -> crate::Result<LookupResult> {
		let outputs = self.resolve_outputs(request.outputs.as_deref())?;

		if request.tuples.is_empty() {
			return self.introspect(&outputs);
		}

		let order = request.fields.resolve(self.key_columns())?;
		let keys = request
			.tuples
			.iter()
			.enumerate()
			.map(|(tuple, values)| self.reconcile(tuple, values, &order))
			.collect::<crate::Result<Vec<_>>>()?;

		let on_missing = request.on_missing.unwrap_or(self.config.on_missing);
		let mut columns: IndexMap<String, Vec<Option<Value>>> = outputs
			.iter()
			.map(|&column| (column.to_string(), Vec::with_capacity(keys.len())))
			.collect();

		let mut missed = 0usize;
		for (tuple, key) in keys.iter().enumerate() {
			match self.probe(key) {
				Some(token) => {
					for (column, values) in columns.iter_mut() {
						values.push(Some(self.reverse_value(column, token)?));
					}
				}
				None if on_missing == MissingKey::Null => {
					missed += 1;
					for values in columns.values_mut() {
						values.push(None);
					}
				}
				None => {
					return Err(LookupError::KeyNotFound {
						tuple,
						key: self.render_key(key),
					});
				}
			}
		}

		debug!(missed, "lookup resolved");
		Ok(LookupResult::new(columns))
	}

	/// Resolves a single tuple in declared key order to the row's values in
	/// declared value order. A miss is `Ok(None)`.
	pub fn get(&self, key: &[Value]) -> crate::Result<Option<Vec<Value>>> {
		let order: Vec<usize> = (0..self.keys.len()).collect();
		let key = self.reconcile(0, key, &order)?;
		match self.probe(&key) {
			Some(token) => self
				.reverse
				.keys()
				.map(|column| self.reverse_value(column, token))
				.collect::<crate::Result<Vec<_>>>()
				.map(Some),
			None => Ok(None),
		}
	}

	pub fn contains_key(&self, key: &[Value]) -> crate::Result<bool> {
		let order: Vec<usize> = (0..self.keys.len()).collect();
		let key = self.reconcile(0, key, &order)?;
		Ok(self.probe(&key).is_some())
	}

	fn resolve_outputs<'a>(&'a self, outputs: Option<&'a [String]>) -> crate::Result<Vec<&'a str>> {
		let Some(outputs) = outputs else {
			return Ok(self.value_columns().collect());
		};

		outputs.iter()
			.map(|column| {
				if self.reverse.contains_key(column.as_str()) {
					Ok(column.as_str())
				} else {
					Err(LookupError::UnknownValueColumn {
						column: column.clone(),
					})
				}
			})
			.collect()
	}

	fn introspect(&self, outputs: &[&str]) -> crate::Result<LookupResult> {
		let columns = outputs
			.iter()
			.map(|&column| -> crate::Result<(String, Vec<Option<Value>>)> {
				let values = self.distinct_of(column).ok_or_else(|| {
					LookupError::Internal(format!("no reverse index for `{column}`"))
				})?;
				Ok((column.to_string(), values.into_iter().map(Some).collect()))
			})
			.collect::<crate::Result<IndexMap<_, _>>>()?;
		Ok(LookupResult::new(columns))
	}

	/// Arity check and type reconciliation of one tuple; the result is in
	/// declared key order.
	fn reconcile<'v>(&self, tuple: usize, values: &'v [Value], order: &[usize]) -> crate::Result<Vec<Cow<'v, Value>>> {
		if values.len() != self.keys.len() {
			return Err(LookupError::QueryArity {
				tuple,
				expected: self.keys.len(),
				actual: values.len(),
			});
		}

		self.keys
			.iter()
			.zip(order)
			.map(|((column, dictionary), &position)| {
				let value = &values[position];
				coerce(value, dictionary.ty(), self.config.coercion).ok_or_else(|| {
					LookupError::QueryFieldType {
						tuple,
						column: column.clone(),
						value: value.to_string(),
						expected: dictionary.ty(),
						actual: value.get_type(),
					}
				})
			})
			.collect()
	}

	fn probe(&self, key: &[Cow<'_, Value>]) -> Option<&CompositeValue> {
		let key = self
			.keys
			.values()
			.zip(key)
			.map(|(dictionary, value)| dictionary.id_of(value))
			.collect::<Option<CompositeKey>>()?;
		self.forward.get(&key)
	}

	fn reverse_value(&self, column: &str, token: &CompositeValue) -> crate::Result<Value> {
		self.reverse.get(column).and_then(|reverse| reverse.get(token)).cloned().ok_or_else(|| {
			LookupError::Internal(format!("value token {token} missing from reverse index of `{column}`"))
		})
	}

	fn render_key(&self, key: &[Cow<'_, Value>]) -> String {
		self.keys
			.keys()
			.zip(key)
			.map(|(column, value)| format!("{column}={value}"))
			.collect::<Vec<_>>()
			.join(", ")
	}
}
