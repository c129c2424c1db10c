// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (c) 2025 ReifyDB

use std::collections::{HashMap, HashSet};

use indexmap::IndexMap;
use reifydb_type::{Column, Table, Value};
use tracing::{debug, instrument, warn};

use crate::{
	CardinalityCheck, ColumnRole, Dictionary, Index, IndexConfig, LookupError, SurrogateId,
	composite::{CompositeKey, CompositeValue},
};

impl Index {
	/// Builds an index with the default [`IndexConfig`].
	pub fn build(table: &Table, keys: &[&str], values: &[&str]) -> crate::Result<Self> {
		Self::build_with_config(table, keys, values, IndexConfig::default())
	}

	/// Validates `columns` as a [`Table`] and builds an index over it.
	pub fn from_columns(columns: Vec<Column>, keys: &[&str], values: &[&str]) -> crate::Result<Self> {
		let table = Table::new(columns)?;
		Self::build(&table, keys, values)
	}

	#[instrument(
		name = "lookup::index::build",
		level = "debug",
		skip_all,
		fields(rows = table.row_count(), keys = keys.len(), values = values.len())
	)]
	pub fn build_with_config(
		table: &Table,
		keys: &[&str],
		values: &[&str],
		config: IndexConfig,
	) -> crate::Result<Self> {
		let key_columns = resolve_columns(table, keys, ColumnRole::Key)?;
		let value_columns = resolve_columns(table, values, ColumnRole::Value)?;
		check_disjoint(keys, values)?;

		let rows = table.row_count();
		let key_dictionaries = build_dictionaries(&key_columns)?;
		check_cardinality(&key_dictionaries, rows, config.cardinality_check)?;

		let composite_keys: Vec<CompositeKey> = encode_rows(&key_columns, &key_dictionaries, rows)?;
		check_unique(&composite_keys, &key_columns, config.cardinality_check)?;

		let value_dictionaries = build_dictionaries(&value_columns)?;
		let composite_values: Vec<CompositeValue> = encode_rows(&value_columns, &value_dictionaries, rows)?;

		let forward: HashMap<CompositeKey, CompositeValue> =
			composite_keys.into_iter().zip(composite_values.iter().cloned()).collect();

		let mut reverse: IndexMap<String, HashMap<CompositeValue, Value>> =
			IndexMap::with_capacity(value_columns.len());
		for column in &value_columns {
			let mut entries = HashMap::new();
			for (row, token) in composite_values.iter().enumerate() {
				let value = column.data.get_value(row).ok_or_else(|| {
					LookupError::Internal(format!("column `{}` has no row {}", column.name, row))
				})?;
				// equal tokens carry equal raw values, so overwriting is harmless
				entries.insert(token.clone(), value);
			}
			reverse.insert(column.name.clone(), entries);
		}

		// every reverse index is keyed by the same set of value tokens
		debug!(
			rows,
			entries = forward.len(),
			value_tokens = reverse.values().next().map_or(0, HashMap::len),
			"index built"
		);

		Ok(Index {
			config,
			row_count: rows,
			keys: key_dictionaries.into_iter().map(|d| (d.column().to_string(), d)).collect(),
			forward,
			reverse,
		})
	}
}

fn resolve_columns<'a>(table: &'a Table, names: &[&str], role: ColumnRole) -> crate::Result<Vec<&'a Column>> {
	if names.is_empty() {
		return Err(LookupError::EmptyDeclaration {
			role,
		});
	}

	let mut seen = HashSet::with_capacity(names.len());
	names.iter()
		.map(|&name| {
			if !seen.insert(name) {
				return Err(LookupError::RepeatedColumn {
					column: name.to_string(),
					role,
				});
			}
			table.column(name).ok_or_else(|| LookupError::MissingColumn {
				column: name.to_string(),
				role,
			})
		})
		.collect()
}

fn check_disjoint(keys: &[&str], values: &[&str]) -> crate::Result<()> {
	match values.iter().find(|value| keys.contains(*value)) {
		Some(column) => Err(LookupError::OverlappingColumn {
			column: column.to_string(),
		}),
		None => Ok(()),
	}
}

fn build_dictionaries(columns: &[&Column]) -> crate::Result<Vec<Dictionary>> {
	columns.iter().map(|column| Dictionary::build(column)).collect()
}

fn check_cardinality(dictionaries: &[Dictionary], rows: usize, check: CardinalityCheck) -> crate::Result<()> {
	let combinations = dictionaries.iter().fold(1u128, |acc, d| acc.saturating_mul(d.len() as u128));
	if check.admits(combinations, rows) {
		return Ok(());
	}

	Err(LookupError::KeyCardinality {
		columns: dictionaries.iter().map(|d| (d.column().to_string(), d.len())).collect(),
		combinations,
		rows,
	})
}

fn encode_rows<T>(columns: &[&Column], dictionaries: &[Dictionary], rows: usize) -> crate::Result<Vec<T>>
where
	T: FromIterator<SurrogateId>,
{
	(0..rows)
		.map(|row| {
			columns.iter()
				.zip(dictionaries)
				.map(|(column, dictionary)| {
					column.data.get_value(row).and_then(|value| dictionary.id_of(&value)).ok_or_else(
						|| {
							LookupError::Internal(format!(
								"row {} of column `{}` has no surrogate id",
								row, column.name
							))
						},
					)
				})
				.collect::<crate::Result<T>>()
		})
		.collect()
}

fn check_unique(
	composite_keys: &[CompositeKey],
	key_columns: &[&Column],
	check: CardinalityCheck,
) -> crate::Result<()> {
	let mut first_row: HashMap<&CompositeKey, usize> = HashMap::with_capacity(composite_keys.len());
	for (row, key) in composite_keys.iter().enumerate() {
		if let Some(first) = first_row.insert(key, row) {
			if check == CardinalityCheck::Disabled {
				warn!(first, second = row, "duplicate key found with cardinality check disabled");
			}
			return Err(LookupError::KeyDuplication {
				first,
				second: row,
				key: render_row(key_columns, row),
			});
		}
	}
	Ok(())
}

fn render_row(columns: &[&Column], row: usize) -> String {
	columns.iter()
		.map(|column| match column.data.get_value(row) {
			Some(value) => format!("{}={}", column.name, value),
			None => format!("{}=?", column.name),
		})
		.collect::<Vec<_>>()
		.join(", ")
}

#[cfg(test)]
mod tests {
	use reifydb_type::{Column, Table, Value};

	use super::*;
	use crate::ErrorKind;

	fn table() -> Table {
		Table::new(vec![
			Column::utf8("rating", ["A", "B", "C"]),
			Column::int8("maturity", [1, 2, 5]),
			Column::utf8("spread", ["X", "Y", "Z"]),
			Column::utf8("grade", ["AAA", "AA", "AAA"]),
		])
		.unwrap()
	}

	#[test]
	fn test_build() {
		let index = Index::build(&table(), &["rating", "maturity"], &["spread"]).unwrap();
		assert_eq!(index.row_count(), 3);
		assert_eq!(index.forward.len(), 3);
		assert_eq!(index.reverse["spread"].len(), 3);
	}

	#[test]
	fn test_reverse_index_shares_tokens() {
		let index = Index::build(&table(), &["rating", "maturity"], &["grade"]).unwrap();
		// rows 0 and 2 share the value tuple
		assert_eq!(index.reverse["grade"].len(), 2);
		assert_eq!(index.forward.len(), 3);
	}

	#[test]
	fn test_missing_column() {
		let err = Index::build(&table(), &["rating", "tenor"], &["spread"]).unwrap_err();
		assert_eq!(
			err,
			LookupError::MissingColumn {
				column: "tenor".to_string(),
				role: ColumnRole::Key,
			}
		);
		assert_eq!(err.kind(), ErrorKind::Schema);
	}

	#[test]
	fn test_missing_value_column() {
		let err = Index::build(&table(), &["rating"], &["price"]).unwrap_err();
		assert_eq!(
			err,
			LookupError::MissingColumn {
				column: "price".to_string(),
				role: ColumnRole::Value,
			}
		);
	}

	#[test]
	fn test_overlap() {
		let err = Index::build(&table(), &["rating", "maturity"], &["maturity"]).unwrap_err();
		assert_eq!(
			err,
			LookupError::OverlappingColumn {
				column: "maturity".to_string()
			}
		);
	}

	#[test]
	fn test_empty_declaration() {
		let err = Index::build(&table(), &[], &["spread"]).unwrap_err();
		assert_eq!(
			err,
			LookupError::EmptyDeclaration {
				role: ColumnRole::Key
			}
		);
		let err = Index::build(&table(), &["rating"], &[]).unwrap_err();
		assert_eq!(
			err,
			LookupError::EmptyDeclaration {
				role: ColumnRole::Value
			}
		);
	}

	#[test]
	fn test_repeated_column() {
		let err = Index::build(&table(), &["rating", "rating"], &["spread"]).unwrap_err();
		assert_eq!(
			err,
			LookupError::RepeatedColumn {
				column: "rating".to_string(),
				role: ColumnRole::Key,
			}
		);
	}

	#[test]
	fn test_cardinality_reports_counts() {
		let table = Table::new(vec![Column::utf8("rating", ["A", "A"]), Column::utf8("spread", ["X", "Y"])])
			.unwrap();
		let err = Index::build(&table, &["rating"], &["spread"]).unwrap_err();
		assert_eq!(
			err,
			LookupError::KeyCardinality {
				columns: vec![("rating".to_string(), 1)],
				combinations: 1,
				rows: 2,
			}
		);
	}

	#[test]
	fn test_duplicate_reports_rows_and_key() {
		let table = Table::new(vec![
			Column::utf8("rating", ["A", "B", "A"]),
			Column::int8("maturity", [1, 2, 1]),
			Column::utf8("spread", ["X", "Y", "W"]),
		])
		.unwrap();
		let err = Index::build(&table, &["rating", "maturity"], &["spread"]).unwrap_err();
		assert_eq!(
			err,
			LookupError::KeyDuplication {
				first: 0,
				second: 2,
				key: "rating=A, maturity=1".to_string(),
			}
		);
	}

	#[test]
	fn test_disabled_check_still_detects_duplicates() {
		let table = Table::new(vec![Column::utf8("rating", ["A", "A"]), Column::utf8("spread", ["X", "Y"])])
			.unwrap();
		let config = IndexConfig::new().cardinality_check(CardinalityCheck::Disabled);
		let err = Index::build_with_config(&table, &["rating"], &["spread"], config).unwrap_err();
		assert_eq!(err.kind(), ErrorKind::KeyDuplication);
	}

	#[test]
	fn test_from_columns_validates_table() {
		let err = Index::from_columns(
			vec![Column::utf8("rating", ["A", "B"]), Column::utf8("spread", ["X"])],
			&["rating"],
			&["spread"],
		)
		.unwrap_err();
		assert_eq!(err.kind(), ErrorKind::Schema);

		let index = Index::from_columns(
			vec![Column::utf8("rating", ["A", "B"]), Column::utf8("spread", ["X", "Y"])],
			&["rating"],
			&["spread"],
		);
		// one key column with as many values as rows fails the strict pre-check
		assert_eq!(index.unwrap_err().kind(), ErrorKind::KeyCardinality);
	}

	#[test]
	fn test_keys_in_declared_order() {
		let index = Index::build(&table(), &["maturity", "rating"], &["spread"]).unwrap();
		let keys: Vec<&str> = index.key_columns().collect();
		assert_eq!(keys, vec!["maturity", "rating"]);
		assert_eq!(index.keys()["maturity"], vec![Value::int8(1), Value::int8(2), Value::int8(5)]);
	}
}
