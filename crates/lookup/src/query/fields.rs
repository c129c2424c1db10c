// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (c) 2025 ReifyDB

use std::collections::HashSet;

use crate::LookupError;

/// Order of the fields inside every query tuple of a request.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum KeyFields {
	/// Fields follow the declared key column order.
	#[default]
	Canonical,
	/// Field `i` of a tuple holds the value for the key column named at `i`.
	/// Must name every key column exactly once.
	Named(Vec<String>),
}

impl KeyFields {
	pub fn named(columns: impl IntoIterator<Item = impl Into<String>>) -> Self {
		KeyFields::Named(columns.into_iter().map(Into::into).collect())
	}

	/// For each key column in declared order, the tuple position holding its
	/// value.
	pub(crate) fn resolve<'a>(&self, key_columns: impl ExactSizeIterator<Item = &'a str>) -> crate::Result<Vec<usize>> {
		let names = match self {
			KeyFields::Canonical => return Ok((0..key_columns.len()).collect()),
			KeyFields::Named(names) => names,
		};

		let key_columns: Vec<&str> = key_columns.collect();
		if names.len() != key_columns.len() {
			return Err(LookupError::InvalidFieldMapping {
				reason: format!("{} fields named for {} key columns", names.len(), key_columns.len()),
			});
		}

		let mut seen = HashSet::with_capacity(names.len());
		for name in names {
			if !key_columns.contains(&name.as_str()) {
				return Err(LookupError::InvalidFieldMapping {
					reason: format!("`{name}` is not a key column"),
				});
			}
			if !seen.insert(name.as_str()) {
				return Err(LookupError::InvalidFieldMapping {
					reason: format!("`{name}` is named more than once"),
				});
			}
		}

		// every key column is named exactly once from here on
		Ok(key_columns
			.iter()
			.filter_map(|column| names.iter().position(|name| name == column))
			.collect())
	}
}

#[cfg(test)]
mod tests {
	use super::*;

	const KEYS: [&str; 2] = ["rating", "maturity"];

	#[test]
	fn test_canonical() {
		assert_eq!(KeyFields::Canonical.resolve(KEYS.into_iter()).unwrap(), vec![0, 1]);
	}

	#[test]
	fn test_named_reorders() {
		let fields = KeyFields::named(["maturity", "rating"]);
		assert_eq!(fields.resolve(KEYS.into_iter()).unwrap(), vec![1, 0]);
	}

	#[test]
	fn test_named_identity() {
		let fields = KeyFields::named(["rating", "maturity"]);
		assert_eq!(fields.resolve(KEYS.into_iter()).unwrap(), vec![0, 1]);
	}

	#[test]
	fn test_incomplete() {
		let err = KeyFields::named(["rating"]).resolve(KEYS.into_iter()).unwrap_err();
		assert_eq!(
			err,
			LookupError::InvalidFieldMapping {
				reason: "1 fields named for 2 key columns".to_string()
			}
		);
	}

	#[test]
	fn test_unknown() {
		let err = KeyFields::named(["rating", "tenor"]).resolve(KEYS.into_iter()).unwrap_err();
		assert_eq!(
			err,
			LookupError::InvalidFieldMapping {
				reason: "`tenor` is not a key column".to_string()
			}
		);
	}

	#[test]
	fn test_repeated() {
		let err = KeyFields::named(["rating", "rating"]).resolve(KEYS.into_iter()).unwrap_err();
		assert_eq!(
			err,
			LookupError::InvalidFieldMapping {
				reason: "`rating` is named more than once".to_string()
			}
		);
	}
}
